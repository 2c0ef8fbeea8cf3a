pub mod angle;

pub use angle::*;
