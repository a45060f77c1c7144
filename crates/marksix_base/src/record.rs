//! Derived per-number attributes.

use crate::element::Element;
use crate::number::{CodeRange, Parity, Size};
use crate::wave::Wave;
use crate::zodiac::Zodiac;

/// Colour, zodiac and element of one ball number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberRecord {
    pub number: u8,
    pub color: Wave,
    pub zodiac: Zodiac,
    pub element: Element,
}

/// Everything the grid can highlight a number by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberProfile {
    pub number: u8,
    pub color: Wave,
    pub zodiac: Zodiac,
    pub element: Element,
    pub parity: Parity,
    pub size: Size,
    /// Tens digit (0..=4).
    pub head: u8,
    /// Units digit (0..=9).
    pub tail: u8,
    /// Digit root (1..=9).
    pub digit_root: u8,
    pub code: CodeRange,
}

impl NumberProfile {
    pub const fn record(&self) -> NumberRecord {
        NumberRecord {
            number: self.number,
            color: self.color,
            zodiac: self.zodiac,
            element: self.element,
        }
    }
}
