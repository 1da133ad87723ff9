//! Business logic services for the Correria reports server

pub mod reporting;
pub mod snapshot;

pub use reporting::ReportingService;
pub use snapshot::SnapshotStore;
