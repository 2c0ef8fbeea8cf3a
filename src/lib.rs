pub mod types;
pub mod catalog;
pub mod rigging;
pub mod capacity;
pub mod config;

pub use types::*;
