//! Error types for number classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from classification and table construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClassifyError {
    /// Number outside the 1..=49 ball range.
    OutOfRange(i64),
    /// Digit root requested for a negative integer.
    Negative(i64),
    /// A number was placed in two sets of the same table.
    DuplicateAssignment {
        number: u8,
        first: &'static str,
        second: &'static str,
    },
    /// Label not recognised for the given kind (e.g. "zodiac").
    UnknownLabel { kind: &'static str, label: String },
}

impl Display for ClassifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(n) => write!(f, "number {n} outside 1..=49"),
            Self::Negative(n) => write!(f, "digit root undefined for negative {n}"),
            Self::DuplicateAssignment {
                number,
                first,
                second,
            } => write!(f, "number {number} assigned to both {first} and {second}"),
            Self::UnknownLabel { kind, label } => write!(f, "unknown {kind} label: {label:?}"),
        }
    }
}

impl Error for ClassifyError {}
