use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing a safe load against the actual load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Safe load covers the actual load (equality passes)
    Acceptable,

    /// Actual load exceeds the safe load
    NotAcceptable,
}

impl Verdict {
    pub fn is_acceptable(&self) -> bool {
        matches!(self, Verdict::Acceptable)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Acceptable => write!(f, "acceptable"),
            Verdict::NotAcceptable => write!(f, "not acceptable"),
        }
    }
}

/// Classify a safe load against the actual load to lift.
///
/// Pure comparison, inclusive at the boundary: safe == actual passes.
/// No rounding beyond what the inputs already carry.
pub fn check_safety(safe_load: Load, actual_load: Load) -> Verdict {
    if safe_load.get::<ton>() >= actual_load.get::<ton>() {
        Verdict::Acceptable
    } else {
        Verdict::NotAcceptable
    }
}
