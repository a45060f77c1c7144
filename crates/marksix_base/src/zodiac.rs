//! Zodiac (shengxiao) enumeration and the number-to-zodiac table.
//!
//! The 12 zodiacs cycle continuously, one per lunar year. Within a year's
//! table, number 1 belongs to that year's zodiac, number 2 to the zodiac
//! before it, and so on backwards round the cycle. The reference table is
//! the table of a Rabbit year.

use crate::error::ClassifyError;
use crate::label::Label;
use crate::number::{MAX_NUMBER, NUMBER_COUNT, numbers};

/// The 12 zodiacs in canonical order (Rat first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 zodiacs in order (index 0 = Rat).
pub const ALL_ZODIACS: [Zodiac; 12] = [
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
];

const ZODIAC_NAMES: [&str; 12] = [
    "rat", "ox", "tiger", "rabbit", "dragon", "snake", "horse", "goat", "monkey", "rooster",
    "dog", "pig",
];

const ZODIAC_ZH_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Reference epoch: CE 2020 = Rat.
pub const ZODIAC_EPOCH_YEAR: i32 = 2020;

impl Zodiac {
    /// 0-based index (Rat=0 .. Pig=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Rat => 0,
            Self::Ox => 1,
            Self::Tiger => 2,
            Self::Rabbit => 3,
            Self::Dragon => 4,
            Self::Snake => 5,
            Self::Horse => 6,
            Self::Goat => 7,
            Self::Monkey => 8,
            Self::Rooster => 9,
            Self::Dog => 10,
            Self::Pig => 11,
        }
    }

    /// Zodiac at a position of the cycle; wraps in both directions.
    pub const fn from_cycle(pos: i32) -> Self {
        ALL_ZODIACS[pos.rem_euclid(12) as usize]
    }

    /// Zodiac of a lunar year given as its CE number.
    ///
    /// The lunar new year boundary is not modelled: pass the lunar year.
    pub const fn from_ce_year(year: i32) -> Self {
        // i64 so years near i32::MIN cannot overflow.
        let pos = (year as i64 - ZODIAC_EPOCH_YEAR as i64).rem_euclid(12);
        ALL_ZODIACS[pos as usize]
    }

    /// Positional fallback used when a table has no entry for `n`:
    /// `ALL_ZODIACS[(n - 1) % 12]`.
    pub const fn positional(n: u8) -> Self {
        ALL_ZODIACS[(n.saturating_sub(1) % 12) as usize]
    }
}

impl Label for Zodiac {
    const KIND: &'static str = "zodiac";

    fn all() -> &'static [Self] {
        &ALL_ZODIACS
    }

    fn name(self) -> &'static str {
        ZODIAC_NAMES[self.index() as usize]
    }

    fn zh_name(self) -> &'static str {
        ZODIAC_ZH_NAMES[self.index() as usize]
    }
}

/// Explicit number sets of the reference (Rabbit year) table.
pub const REFERENCE_ZODIAC_SETS: [(Zodiac, &[u8]); 12] = [
    (Zodiac::Rat, &[4, 16, 28, 40]),
    (Zodiac::Ox, &[3, 15, 27, 39]),
    (Zodiac::Tiger, &[2, 14, 26, 38]),
    (Zodiac::Rabbit, &[1, 13, 25, 37, 49]),
    (Zodiac::Dragon, &[12, 24, 36, 48]),
    (Zodiac::Snake, &[11, 23, 35, 47]),
    (Zodiac::Horse, &[10, 22, 34, 46]),
    (Zodiac::Goat, &[9, 21, 33, 45]),
    (Zodiac::Monkey, &[8, 20, 32, 44]),
    (Zodiac::Rooster, &[7, 19, 31, 43]),
    (Zodiac::Dog, &[6, 18, 30, 42]),
    (Zodiac::Pig, &[5, 17, 29, 41]),
];

/// Year of the reference table.
pub const REFERENCE_YEAR_ZODIAC: Zodiac = Zodiac::Rabbit;

/// Number-to-zodiac assignment. Slot `n - 1` holds the zodiac of `n`,
/// or `None` when the table leaves `n` unassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZodiacTable {
    slots: [Option<Zodiac>; NUMBER_COUNT],
}

impl ZodiacTable {
    /// The reference (Rabbit year) table.
    pub const fn reference() -> Self {
        let mut slots = [None; NUMBER_COUNT];
        let mut i = 0;
        while i < REFERENCE_ZODIAC_SETS.len() {
            let (zodiac, nums) = REFERENCE_ZODIAC_SETS[i];
            let mut j = 0;
            while j < nums.len() {
                slots[(nums[j] - 1) as usize] = Some(zodiac);
                j += 1;
            }
            i += 1;
        }
        Self { slots }
    }

    /// Full table for a year whose zodiac is `year_zodiac`.
    pub const fn for_year(year_zodiac: Zodiac) -> Self {
        let mut slots = [None; NUMBER_COUNT];
        let mut i = 0;
        while i < NUMBER_COUNT {
            slots[i] = Some(Zodiac::from_cycle(year_zodiac.index() as i32 - i as i32));
            i += 1;
        }
        Self { slots }
    }

    /// Build a table from explicit sets. Sets may leave numbers out; those
    /// numbers resolve through [`Zodiac::positional`].
    pub fn from_sets(sets: &[(Zodiac, &[u8])]) -> Result<Self, ClassifyError> {
        let mut slots: [Option<Zodiac>; NUMBER_COUNT] = [None; NUMBER_COUNT];
        for &(zodiac, nums) in sets {
            for &n in nums {
                if n == 0 || n > MAX_NUMBER {
                    return Err(ClassifyError::OutOfRange(i64::from(n)));
                }
                let slot = &mut slots[(n - 1) as usize];
                match *slot {
                    Some(prev) if prev != zodiac => {
                        return Err(ClassifyError::DuplicateAssignment {
                            number: n,
                            first: prev.name(),
                            second: zodiac.name(),
                        });
                    }
                    _ => *slot = Some(zodiac),
                }
            }
        }
        let missing = slots.iter().filter(|s| s.is_none()).count();
        tracing::trace!(sets = sets.len(), missing, "built zodiac table");
        Ok(Self { slots })
    }

    /// Explicit entry for `n`, if the table has one.
    pub fn lookup(&self, n: u8) -> Option<Zodiac> {
        self.slots
            .get(usize::from(n).wrapping_sub(1))
            .copied()
            .flatten()
    }

    /// Zodiac of `n`: the table entry, else the positional fallback.
    pub fn zodiac_of(&self, n: u8) -> Zodiac {
        self.lookup(n).unwrap_or_else(|| Zodiac::positional(n))
    }

    /// Whether `n` is listed under `zodiac` (no fallback).
    pub fn contains(&self, zodiac: Zodiac, n: u8) -> bool {
        self.lookup(n) == Some(zodiac)
    }

    /// Numbers explicitly listed under `zodiac`, ascending.
    pub fn numbers_of(&self, zodiac: Zodiac) -> Vec<u8> {
        numbers().filter(|&n| self.contains(zodiac, n)).collect()
    }

    /// Whether every number has an explicit entry.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl Default for ZodiacTable {
    fn default() -> Self {
        Self::reference()
    }
}
