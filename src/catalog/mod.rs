pub mod rating_table;
pub mod library;

pub use rating_table::*;
pub use library::*;
