//! Domain models for the correria sales and inventory system

mod client;
mod correria;
mod movement;
mod order;
mod reference;
mod snapshot;
pub mod timestamp;
mod user;

pub use client::*;
pub use correria::*;
pub use movement::*;
pub use order::*;
pub use reference::*;
pub use snapshot::*;
pub use user::*;
