//! Colour waves (bose): red, blue and green number sets.

use crate::error::ClassifyError;
use crate::label::Label;
use crate::number::{MAX_NUMBER, NUMBER_COUNT, numbers};

/// The 3 colour waves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Wave {
    Red,
    Blue,
    Green,
}

pub const ALL_WAVES: [Wave; 3] = [Wave::Red, Wave::Blue, Wave::Green];

impl Wave {
    pub const fn index(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
            Self::Green => 2,
        }
    }

    /// Positional fallback: `ALL_WAVES[(n - 1) % 3]`.
    pub const fn positional(n: u8) -> Self {
        ALL_WAVES[(n.saturating_sub(1) % 3) as usize]
    }
}

impl Label for Wave {
    const KIND: &'static str = "wave";

    fn all() -> &'static [Self] {
        &ALL_WAVES
    }

    fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    fn zh_name(self) -> &'static str {
        match self {
            Self::Red => "红波",
            Self::Blue => "蓝波",
            Self::Green => "绿波",
        }
    }
}

/// Explicit number sets of the reference wave table.
pub const REFERENCE_WAVE_SETS: [(Wave, &[u8]); 3] = [
    (
        Wave::Red,
        &[1, 2, 7, 8, 12, 13, 18, 19, 23, 24, 29, 30, 34, 35, 40, 45, 46],
    ),
    (
        Wave::Blue,
        &[3, 4, 9, 10, 14, 15, 20, 25, 26, 31, 36, 37, 41, 42, 47, 48],
    ),
    (
        Wave::Green,
        &[5, 6, 11, 16, 17, 21, 22, 27, 28, 32, 33, 38, 39, 43, 44, 49],
    ),
];

/// Number-to-wave assignment. Unassigned numbers resolve through
/// [`Wave::positional`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveTable {
    slots: [Option<Wave>; NUMBER_COUNT],
}

impl WaveTable {
    pub const fn reference() -> Self {
        let mut slots = [None; NUMBER_COUNT];
        let mut i = 0;
        while i < REFERENCE_WAVE_SETS.len() {
            let (wave, nums) = REFERENCE_WAVE_SETS[i];
            let mut j = 0;
            while j < nums.len() {
                slots[(nums[j] - 1) as usize] = Some(wave);
                j += 1;
            }
            i += 1;
        }
        Self { slots }
    }

    /// Build a table from explicit, possibly incomplete, sets.
    pub fn from_sets(sets: &[(Wave, &[u8])]) -> Result<Self, ClassifyError> {
        let mut slots: [Option<Wave>; NUMBER_COUNT] = [None; NUMBER_COUNT];
        for &(wave, nums) in sets {
            for &n in nums {
                if n == 0 || n > MAX_NUMBER {
                    return Err(ClassifyError::OutOfRange(i64::from(n)));
                }
                let slot = &mut slots[(n - 1) as usize];
                match *slot {
                    Some(prev) if prev != wave => {
                        return Err(ClassifyError::DuplicateAssignment {
                            number: n,
                            first: prev.name(),
                            second: wave.name(),
                        });
                    }
                    _ => *slot = Some(wave),
                }
            }
        }
        tracing::trace!(sets = sets.len(), "built wave table");
        Ok(Self { slots })
    }

    pub fn lookup(&self, n: u8) -> Option<Wave> {
        self.slots
            .get(usize::from(n).wrapping_sub(1))
            .copied()
            .flatten()
    }

    /// Wave of `n`: the table entry, else the positional fallback.
    pub fn wave_of(&self, n: u8) -> Wave {
        self.lookup(n).unwrap_or_else(|| Wave::positional(n))
    }

    /// Whether `n` is listed under `wave` (no fallback).
    pub fn contains(&self, wave: Wave, n: u8) -> bool {
        self.lookup(n) == Some(wave)
    }

    pub fn numbers_of(&self, wave: Wave) -> Vec<u8> {
        numbers().filter(|&n| self.contains(wave, n)).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl Default for WaveTable {
    fn default() -> Self {
        Self::reference()
    }
}
