//! Per-resource `ResourceSchema` implementations. Each file declares the
//! API path, envelope key, field descriptors, and search fields for one
//! resource; the generic component does everything else.

mod activity;
mod blog;
mod collaborator;
mod lead;
mod transfer;
mod trip;
mod trip_type;

pub use activity::ActivitySchema;
pub use blog::BlogSchema;
pub use collaborator::CollaboratorSchema;
pub use lead::LeadSchema;
pub use transfer::TransferSchema;
pub use trip::TripSchema;
pub use trip_type::TripTypeSchema;
