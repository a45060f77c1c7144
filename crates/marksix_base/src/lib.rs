//! Mark Six number classification.
//!
//! This crate provides:
//! - Zodiac, element and colour-wave tables over the balls 1..=49
//! - Parity, size, head/tail digit, digit root and inner/outer code partitions
//! - Zodiac groups (front/back six, heaven/earth, ...) and combination tags
//! - Category queries returning the ascending list of matching numbers
//!
//! Everything is pure and table-driven; tables are built at compile time or
//! once by the caller and never mutated.
//!
//! ```
//! use marksix_base::{CategoryKind, Wave, classify, matching_numbers};
//!
//! assert_eq!(classify(7).unwrap().color, Wave::Red);
//! assert_eq!(matching_numbers(CategoryKind::Head, "4").len(), 10);
//! assert!(matching_numbers(CategoryKind::Zodiac, "no-such-value").is_empty());
//! ```

pub mod classifier;
pub mod digits;
pub mod element;
pub mod error;
pub mod label;
pub mod number;
pub mod record;
pub mod selector;
pub mod wave;
pub mod zodiac;
pub mod zodiac_group;

pub use classifier::{
    Classifier, ClassifierConfig, REFERENCE_CLASSIFIER, classify, matching_numbers,
    matching_numbers_str, profile, select,
};
pub use digits::{checked_digit_root, digit_root, head, parse_int_prefix, tail};
pub use element::{ALL_ELEMENTS, Element, element_numbers, element_of};
pub use error::ClassifyError;
pub use label::{Label, Locale};
pub use number::{
    ALL_CODE_RANGES, ALL_PARITIES, ALL_SIZES, CodeRange, MAX_NUMBER, MIN_NUMBER, NUMBER_COUNT,
    Parity, Size, check_number, numbers,
};
pub use record::{NumberProfile, NumberRecord};
pub use selector::{
    ALL_CATEGORY_KINDS, ALL_COMBINED, ALL_COMBOS, ALL_TAIL_TAGS, CategoryKind, Combined, Combo,
    Selector, TailTag, Term, category_values,
};
pub use wave::{ALL_WAVES, REFERENCE_WAVE_SETS, Wave, WaveTable};
pub use zodiac::{
    ALL_ZODIACS, REFERENCE_YEAR_ZODIAC, REFERENCE_ZODIAC_SETS, Zodiac, ZodiacTable,
};
pub use zodiac_group::{ALL_ZODIAC_GROUPS, ZodiacGroup};
