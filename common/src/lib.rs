//! Shared data model and wire types for the voyagedesk frontend and backend.
//!
//! Everything here is plain serde-serializable logic with no I/O, so the
//! record types, the search predicate, and the numeric input parser can be
//! exercised by host-side unit tests and reused unchanged from the WASM
//! frontend and the actix backend.

pub mod model;
pub mod numeric;
pub mod requests;
pub mod search;
