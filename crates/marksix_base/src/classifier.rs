//! The number classifier: per-number attributes and category queries.
//!
//! A [`Classifier`] owns one zodiac table and one wave table; elements,
//! parity, size, digits and codes are pure arithmetic. The free functions
//! at the bottom of this module query [`REFERENCE_CLASSIFIER`].

use crate::digits::{digit_root, head, tail};
use crate::element::{Element, element_of};
use crate::error::ClassifyError;
use crate::label::{Label, Locale};
use crate::number::{CodeRange, Parity, Size, check_number, numbers};
use crate::record::{NumberProfile, NumberRecord};
use crate::selector::{CategoryKind, Selector, Term};
use crate::wave::{Wave, WaveTable};
use crate::zodiac::{REFERENCE_YEAR_ZODIAC, Zodiac, ZodiacTable};

/// Parameters for building a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Zodiac of the lunar year whose table is used. Default: Rabbit
    /// (the reference table).
    pub year_zodiac: Zodiac,
    /// Language for labels in rendered output. Default: English.
    pub locale: Locale,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            year_zodiac: REFERENCE_YEAR_ZODIAC,
            locale: Locale::En,
        }
    }
}

impl ClassifierConfig {
    /// Config for the lunar year `year` (CE numbering).
    pub fn for_year(year: i32) -> Self {
        Self {
            year_zodiac: Zodiac::from_ce_year(year),
            ..Self::default()
        }
    }
}

/// Immutable classifier over the 1..=49 range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    zodiacs: ZodiacTable,
    waves: WaveTable,
}

/// Classifier over the reference zodiac and wave tables.
pub static REFERENCE_CLASSIFIER: Classifier = Classifier::reference();

impl Classifier {
    pub const fn new(zodiacs: ZodiacTable, waves: WaveTable) -> Self {
        Self { zodiacs, waves }
    }

    pub const fn reference() -> Self {
        Self::new(ZodiacTable::reference(), WaveTable::reference())
    }

    /// Classifier for the configured year. The reference year keeps the
    /// literal reference table; other years use the rotated table.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let zodiacs = if config.year_zodiac == REFERENCE_YEAR_ZODIAC {
            ZodiacTable::reference()
        } else {
            ZodiacTable::for_year(config.year_zodiac)
        };
        tracing::debug!(year_zodiac = config.year_zodiac.name(), "classifier configured");
        Self::new(zodiacs, WaveTable::reference())
    }

    pub fn zodiac_table(&self) -> &ZodiacTable {
        &self.zodiacs
    }

    pub fn wave_table(&self) -> &WaveTable {
        &self.waves
    }

    /// Colour of `n` (table entry, else positional fallback).
    pub fn color(&self, n: u8) -> Wave {
        self.waves.wave_of(n)
    }

    /// Zodiac of `n` (table entry, else positional fallback).
    pub fn zodiac(&self, n: u8) -> Zodiac {
        self.zodiacs.zodiac_of(n)
    }

    pub fn element(&self, n: u8) -> Element {
        element_of(n)
    }

    /// Colour, zodiac and element of `n`. Fails for `n` outside 1..=49.
    pub fn classify(&self, n: i64) -> Result<NumberRecord, ClassifyError> {
        let n = check_number(n)?;
        Ok(NumberRecord {
            number: n,
            color: self.color(n),
            zodiac: self.zodiac(n),
            element: self.element(n),
        })
    }

    /// Full attribute set of `n`. Fails for `n` outside 1..=49.
    pub fn profile(&self, n: i64) -> Result<NumberProfile, ClassifyError> {
        check_number(n).map(|n| self.profile_of(n))
    }

    /// Profiles of all 49 numbers, ascending.
    pub fn grid(&self) -> Vec<NumberProfile> {
        numbers().map(|n| self.profile_of(n)).collect()
    }

    fn profile_of(&self, n: u8) -> NumberProfile {
        NumberProfile {
            number: n,
            color: self.color(n),
            zodiac: self.zodiac(n),
            element: self.element(n),
            parity: Parity::of(u64::from(n)),
            size: Size::of(n),
            head: head(n),
            tail: tail(n),
            digit_root: digit_root(u64::from(n)),
            code: CodeRange::of(n),
        }
    }

    fn term_holds(&self, term: Term, n: u8) -> bool {
        match term {
            Term::Parity(p) => Parity::of(u64::from(n)) == p,
            Term::Size(s) => Size::of(n) == s,
            Term::Wave(w) => self.color(n) == w,
            Term::Head(h) => head(n) == h,
        }
    }

    /// Whether ball number `n` satisfies `selector`.
    ///
    /// Zodiac and wave selectors test explicit table membership; zodiac
    /// groups and colour combinations go through the fallback-aware lookups.
    pub fn matches(&self, selector: &Selector, n: u8) -> bool {
        let root = digit_root(u64::from(n));
        match *selector {
            Selector::Element(e) => element_of(n) == e,
            Selector::Wave(w) => self.waves.contains(w, n),
            Selector::Parity(p) => Parity::of(u64::from(n)) == p,
            Selector::Size(s) => Size::of(n) == s,
            Selector::Combo(c) => {
                let (a, b) = c.terms();
                self.term_holds(a, n) && self.term_holds(b, n)
            }
            Selector::Combined(c) => c.holds(root),
            Selector::Tail(t) => t.holds(tail(n), root),
            Selector::Zodiac(z) => self.zodiacs.contains(z, n),
            Selector::ZodiacType(g) => g.contains(self.zodiac(n)),
            Selector::Head(h) => i64::from(head(n)) == h,
            Selector::Sum(s) => i64::from(root) == s,
            Selector::Code(c) => c.contains(n),
        }
    }

    /// Numbers satisfying `selector`, ascending.
    pub fn select(&self, selector: &Selector) -> Vec<u8> {
        numbers().filter(|&n| self.matches(selector, n)).collect()
    }

    /// Numbers matching `value` in `kind`, ascending. An unrecognised value
    /// matches nothing.
    pub fn matching_numbers(&self, kind: CategoryKind, value: &str) -> Vec<u8> {
        match Selector::parse(kind, value) {
            Some(selector) => self.select(&selector),
            None => {
                tracing::debug!(category = kind.name(), value, "unrecognised value, no match");
                Vec::new()
            }
        }
    }

    /// Like [`Classifier::matching_numbers`], with the category given as a
    /// string. An unrecognised category matches nothing.
    pub fn matching_numbers_str(&self, category: &str, value: &str) -> Vec<u8> {
        match CategoryKind::from_label(category) {
            Some(kind) => self.matching_numbers(kind, value),
            None => {
                tracing::debug!(category, "unrecognised category, no match");
                Vec::new()
            }
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::reference()
    }
}

/// [`Classifier::classify`] on the reference tables.
pub fn classify(n: i64) -> Result<NumberRecord, ClassifyError> {
    REFERENCE_CLASSIFIER.classify(n)
}

/// [`Classifier::profile`] on the reference tables.
pub fn profile(n: i64) -> Result<NumberProfile, ClassifyError> {
    REFERENCE_CLASSIFIER.profile(n)
}

/// [`Classifier::matching_numbers`] on the reference tables.
pub fn matching_numbers(kind: CategoryKind, value: &str) -> Vec<u8> {
    REFERENCE_CLASSIFIER.matching_numbers(kind, value)
}

/// [`Classifier::matching_numbers_str`] on the reference tables.
pub fn matching_numbers_str(category: &str, value: &str) -> Vec<u8> {
    REFERENCE_CLASSIFIER.matching_numbers_str(category, value)
}

/// [`Classifier::select`] on the reference tables.
pub fn select(selector: &Selector) -> Vec<u8> {
    REFERENCE_CLASSIFIER.select(selector)
}
