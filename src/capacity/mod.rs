pub mod safe_load;
pub mod verdict;
pub mod evaluation;

pub use safe_load::*;
pub use verdict::*;
pub use evaluation::*;
