//! Record types for every admin resource.
//!
//! All records follow the same conventions:
//! - `id`, `created_at` and `updated_at` are assigned by the store. A draft
//!   built in the form has `id: None`; the backend fills the metadata on
//!   insert and update.
//! - Optional fields are skipped during serialization when absent, so a
//!   blank numeric input travels as a missing key rather than `0`.
//! - Structs carry `#[serde(default)]` because documents written by older
//!   code paths do not always populate every field.

pub mod activity;
pub mod blog;
pub mod collaborator;
pub mod lead;
pub mod transfer;
pub mod trip;
pub mod trip_type;
