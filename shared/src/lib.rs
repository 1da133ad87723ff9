//! Shared types, models and the reporting engine for the Correria sales system
//!
//! This crate is used by the backend server and by the WASM module, so the
//! same stock and sales reports are computed on either side.

pub mod models;
pub mod reports;
pub mod types;
pub mod validation;

pub use models::*;
pub use reports::*;
pub use types::*;
pub use validation::*;
