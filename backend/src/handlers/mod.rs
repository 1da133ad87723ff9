//! HTTP handlers for the Correria reports server

pub mod health;
pub mod reporting;
pub mod snapshot;

pub use health::*;
pub use reporting::*;
pub use snapshot::*;
