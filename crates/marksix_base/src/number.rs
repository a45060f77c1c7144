//! The 1..=49 ball range and the simple arithmetic partitions over it:
//! parity, size (big/small), and inner/outer code.

use crate::error::ClassifyError;
use crate::label::Label;

/// Smallest ball number.
pub const MIN_NUMBER: u8 = 1;
/// Largest ball number.
pub const MAX_NUMBER: u8 = 49;
/// Count of ball numbers.
pub const NUMBER_COUNT: usize = 49;
/// First number of the big half (and of the outer code range).
pub const BIG_START: u8 = 25;

/// All ball numbers in ascending order.
pub fn numbers() -> impl Iterator<Item = u8> + Clone {
    MIN_NUMBER..=MAX_NUMBER
}

/// Validate that `n` is a ball number.
pub fn check_number(n: i64) -> Result<u8, ClassifyError> {
    if (i64::from(MIN_NUMBER)..=i64::from(MAX_NUMBER)).contains(&n) {
        Ok(n as u8)
    } else {
        Err(ClassifyError::OutOfRange(n))
    }
}

/// Odd or even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Parity {
    Odd,
    Even,
}

pub const ALL_PARITIES: [Parity; 2] = [Parity::Odd, Parity::Even];

impl Parity {
    pub const fn of(n: u64) -> Self {
        if n % 2 == 1 { Self::Odd } else { Self::Even }
    }
}

impl Label for Parity {
    const KIND: &'static str = "parity";

    fn all() -> &'static [Self] {
        &ALL_PARITIES
    }

    fn name(self) -> &'static str {
        match self {
            Self::Odd => "odd",
            Self::Even => "even",
        }
    }

    fn zh_name(self) -> &'static str {
        match self {
            Self::Odd => "单",
            Self::Even => "双",
        }
    }
}

/// Big (25..=49) or small (1..=24).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Size {
    Big,
    Small,
}

pub const ALL_SIZES: [Size; 2] = [Size::Big, Size::Small];

impl Size {
    /// Size of a ball number. Only meaningful for 1..=49.
    pub const fn of(n: u8) -> Self {
        if n >= BIG_START { Self::Big } else { Self::Small }
    }
}

impl Label for Size {
    const KIND: &'static str = "size";

    fn all() -> &'static [Self] {
        &ALL_SIZES
    }

    fn name(self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Small => "small",
        }
    }

    fn zh_name(self) -> &'static str {
        match self {
            Self::Big => "大",
            Self::Small => "小",
        }
    }
}

/// Inner code (1..=24) or outer code (25..=49).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CodeRange {
    Inner,
    Outer,
}

pub const ALL_CODE_RANGES: [CodeRange; 2] = [CodeRange::Inner, CodeRange::Outer];

impl CodeRange {
    pub const fn of(n: u8) -> Self {
        if n >= BIG_START { Self::Outer } else { Self::Inner }
    }

    /// Inclusive bounds of the range.
    pub const fn bounds(self) -> (u8, u8) {
        match self {
            Self::Inner => (MIN_NUMBER, BIG_START - 1),
            Self::Outer => (BIG_START, MAX_NUMBER),
        }
    }

    pub const fn contains(self, n: u8) -> bool {
        let (lo, hi) = self.bounds();
        n >= lo && n <= hi
    }
}

impl Label for CodeRange {
    const KIND: &'static str = "code";

    fn all() -> &'static [Self] {
        &ALL_CODE_RANGES
    }

    fn name(self) -> &'static str {
        match self {
            Self::Inner => "inner",
            Self::Outer => "outer",
        }
    }

    fn zh_name(self) -> &'static str {
        match self {
            Self::Inner => "内围码",
            Self::Outer => "外围码",
        }
    }
}
