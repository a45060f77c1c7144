//! Category selectors: what a grid button asks to highlight.
//!
//! A selector is a [`CategoryKind`] together with a value validated for that
//! kind. Parsing is permissive: an unknown value yields `None`, which callers
//! turn into an empty match rather than an error.

use crate::digits::parse_int_prefix;
use crate::element::Element;
use crate::error::ClassifyError;
use crate::label::Label;
use crate::number::{CodeRange, Parity, Size};
use crate::wave::Wave;
use crate::zodiac::Zodiac;
use crate::zodiac_group::ZodiacGroup;

// ---------------------------------------------------------------------------
// Category kinds
// ---------------------------------------------------------------------------

/// The 12 categories a grid button can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CategoryKind {
    Element,
    Wave,
    Parity,
    Size,
    Combo,
    Combined,
    Tail,
    Zodiac,
    ZodiacType,
    Head,
    Sum,
    Code,
}

pub const ALL_CATEGORY_KINDS: [CategoryKind; 12] = [
    CategoryKind::Element,
    CategoryKind::Wave,
    CategoryKind::Parity,
    CategoryKind::Size,
    CategoryKind::Combo,
    CategoryKind::Combined,
    CategoryKind::Tail,
    CategoryKind::Zodiac,
    CategoryKind::ZodiacType,
    CategoryKind::Head,
    CategoryKind::Sum,
    CategoryKind::Code,
];

impl Label for CategoryKind {
    const KIND: &'static str = "category";

    fn all() -> &'static [Self] {
        &ALL_CATEGORY_KINDS
    }

    fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Wave => "wave",
            Self::Parity => "parity",
            Self::Size => "size",
            Self::Combo => "combo",
            Self::Combined => "combined",
            Self::Tail => "tail",
            Self::Zodiac => "zodiac",
            Self::ZodiacType => "zodiac-type",
            Self::Head => "head",
            Self::Sum => "sum",
            Self::Code => "code",
        }
    }

    fn zh_name(self) -> &'static str {
        match self {
            Self::Element => "五行",
            Self::Wave => "波色",
            Self::Parity => "单双",
            Self::Size => "大小",
            Self::Combo => "组合",
            Self::Combined => "合数",
            Self::Tail => "尾数",
            Self::Zodiac => "生肖",
            Self::ZodiacType => "肖类",
            Self::Head => "头数",
            Self::Sum => "数字根",
            Self::Code => "围码",
        }
    }
}

// ---------------------------------------------------------------------------
// Combination tags
// ---------------------------------------------------------------------------

/// One side of a combination tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Parity(Parity),
    Size(Size),
    Wave(Wave),
    Head(u8),
}

/// The 26 combination tags: size x parity, wave x parity, wave x size,
/// and head (0..4) x parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Combo {
    SmallOdd,
    SmallEven,
    BigOdd,
    BigEven,
    RedOdd,
    RedEven,
    BlueOdd,
    BlueEven,
    GreenOdd,
    GreenEven,
    RedBig,
    RedSmall,
    BlueBig,
    BlueSmall,
    GreenBig,
    GreenSmall,
    Head0Odd,
    Head0Even,
    Head1Odd,
    Head1Even,
    Head2Odd,
    Head2Even,
    Head3Odd,
    Head3Even,
    Head4Odd,
    Head4Even,
}

pub const ALL_COMBOS: [Combo; 26] = [
    Combo::SmallOdd,
    Combo::SmallEven,
    Combo::BigOdd,
    Combo::BigEven,
    Combo::RedOdd,
    Combo::RedEven,
    Combo::BlueOdd,
    Combo::BlueEven,
    Combo::GreenOdd,
    Combo::GreenEven,
    Combo::RedBig,
    Combo::RedSmall,
    Combo::BlueBig,
    Combo::BlueSmall,
    Combo::GreenBig,
    Combo::GreenSmall,
    Combo::Head0Odd,
    Combo::Head0Even,
    Combo::Head1Odd,
    Combo::Head1Even,
    Combo::Head2Odd,
    Combo::Head2Even,
    Combo::Head3Odd,
    Combo::Head3Even,
    Combo::Head4Odd,
    Combo::Head4Even,
];

const COMBO_NAMES: [&str; 26] = [
    "small-odd",
    "small-even",
    "big-odd",
    "big-even",
    "red-odd",
    "red-even",
    "blue-odd",
    "blue-even",
    "green-odd",
    "green-even",
    "red-big",
    "red-small",
    "blue-big",
    "blue-small",
    "green-big",
    "green-small",
    "head0-odd",
    "head0-even",
    "head1-odd",
    "head1-even",
    "head2-odd",
    "head2-even",
    "head3-odd",
    "head3-even",
    "head4-odd",
    "head4-even",
];

const COMBO_ZH_NAMES: [&str; 26] = [
    "小单", "小双", "大单", "大双", "红单", "红双", "蓝单", "蓝双", "绿单", "绿双", "红大", "红小",
    "蓝大", "蓝小", "绿大", "绿小", "0头单", "0头双", "1头单", "1头双", "2头单", "2头双", "3头单",
    "3头双", "4头单", "4头双",
];

impl Combo {
    /// 0-based index into [`ALL_COMBOS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The two predicates the tag conjoins.
    pub const fn terms(self) -> (Term, Term) {
        use Parity::{Even, Odd};
        use Size::{Big, Small};
        use Wave::{Blue, Green, Red};
        match self {
            Self::SmallOdd => (Term::Size(Small), Term::Parity(Odd)),
            Self::SmallEven => (Term::Size(Small), Term::Parity(Even)),
            Self::BigOdd => (Term::Size(Big), Term::Parity(Odd)),
            Self::BigEven => (Term::Size(Big), Term::Parity(Even)),
            Self::RedOdd => (Term::Wave(Red), Term::Parity(Odd)),
            Self::RedEven => (Term::Wave(Red), Term::Parity(Even)),
            Self::BlueOdd => (Term::Wave(Blue), Term::Parity(Odd)),
            Self::BlueEven => (Term::Wave(Blue), Term::Parity(Even)),
            Self::GreenOdd => (Term::Wave(Green), Term::Parity(Odd)),
            Self::GreenEven => (Term::Wave(Green), Term::Parity(Even)),
            Self::RedBig => (Term::Wave(Red), Term::Size(Big)),
            Self::RedSmall => (Term::Wave(Red), Term::Size(Small)),
            Self::BlueBig => (Term::Wave(Blue), Term::Size(Big)),
            Self::BlueSmall => (Term::Wave(Blue), Term::Size(Small)),
            Self::GreenBig => (Term::Wave(Green), Term::Size(Big)),
            Self::GreenSmall => (Term::Wave(Green), Term::Size(Small)),
            Self::Head0Odd => (Term::Head(0), Term::Parity(Odd)),
            Self::Head0Even => (Term::Head(0), Term::Parity(Even)),
            Self::Head1Odd => (Term::Head(1), Term::Parity(Odd)),
            Self::Head1Even => (Term::Head(1), Term::Parity(Even)),
            Self::Head2Odd => (Term::Head(2), Term::Parity(Odd)),
            Self::Head2Even => (Term::Head(2), Term::Parity(Even)),
            Self::Head3Odd => (Term::Head(3), Term::Parity(Odd)),
            Self::Head3Even => (Term::Head(3), Term::Parity(Even)),
            Self::Head4Odd => (Term::Head(4), Term::Parity(Odd)),
            Self::Head4Even => (Term::Head(4), Term::Parity(Even)),
        }
    }
}

impl Label for Combo {
    const KIND: &'static str = "combo";

    fn all() -> &'static [Self] {
        &ALL_COMBOS
    }

    fn name(self) -> &'static str {
        COMBO_NAMES[self.index() as usize]
    }

    fn zh_name(self) -> &'static str {
        COMBO_ZH_NAMES[self.index() as usize]
    }
}

// ---------------------------------------------------------------------------
// Digit-root ("combined") tags
// ---------------------------------------------------------------------------

/// Parity and size of the digit root. Big means root >= 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combined {
    SumOdd,
    SumEven,
    SumBig,
    SumSmall,
}

pub const ALL_COMBINED: [Combined; 4] = [
    Combined::SumOdd,
    Combined::SumEven,
    Combined::SumBig,
    Combined::SumSmall,
];

/// Smallest digit root counted as big.
pub const SUM_BIG_MIN: u8 = 7;

impl Combined {
    pub const fn holds(self, root: u8) -> bool {
        match self {
            Self::SumOdd => root % 2 == 1,
            Self::SumEven => root % 2 == 0,
            Self::SumBig => root >= SUM_BIG_MIN,
            Self::SumSmall => root < SUM_BIG_MIN,
        }
    }
}

impl Label for Combined {
    const KIND: &'static str = "combined";

    fn all() -> &'static [Self] {
        &ALL_COMBINED
    }

    fn name(self) -> &'static str {
        match self {
            Self::SumOdd => "sum-odd",
            Self::SumEven => "sum-even",
            Self::SumBig => "sum-big",
            Self::SumSmall => "sum-small",
        }
    }

    fn zh_name(self) -> &'static str {
        match self {
            Self::SumOdd => "合单",
            Self::SumEven => "合双",
            Self::SumBig => "合大",
            Self::SumSmall => "合小",
        }
    }
}

// ---------------------------------------------------------------------------
// Tail tags
// ---------------------------------------------------------------------------

/// Tail-digit tags. Big tails are 5..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TailTag {
    Tail0,
    Tail1,
    Tail2,
    Tail3,
    Tail4,
    Tail5,
    Tail6,
    Tail7,
    Tail8,
    Tail9,
    TailBig,
    TailSmall,
    /// Tail of the digit root is big.
    SumTailBig,
    /// Tail of the digit root is small.
    SumTailSmall,
}

pub const ALL_TAIL_TAGS: [TailTag; 14] = [
    TailTag::Tail0,
    TailTag::Tail1,
    TailTag::Tail2,
    TailTag::Tail3,
    TailTag::Tail4,
    TailTag::Tail5,
    TailTag::Tail6,
    TailTag::Tail7,
    TailTag::Tail8,
    TailTag::Tail9,
    TailTag::TailBig,
    TailTag::TailSmall,
    TailTag::SumTailBig,
    TailTag::SumTailSmall,
];

const TAIL_NAMES: [&str; 14] = [
    "0",
    "1",
    "2",
    "3",
    "4",
    "5",
    "6",
    "7",
    "8",
    "9",
    "tail-big",
    "tail-small",
    "sum-tail-big",
    "sum-tail-small",
];

const TAIL_ZH_NAMES: [&str; 14] = [
    "0尾", "1尾", "2尾", "3尾", "4尾", "5尾", "6尾", "7尾", "8尾", "9尾", "尾大", "尾小", "合尾大",
    "合尾小",
];

/// Smallest tail digit counted as big.
pub const TAIL_BIG_MIN: u8 = 5;

impl TailTag {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether the tag holds for a number with this tail digit and digit root.
    pub const fn holds(self, tail: u8, root: u8) -> bool {
        match self {
            Self::TailBig => tail >= TAIL_BIG_MIN,
            Self::TailSmall => tail < TAIL_BIG_MIN,
            Self::SumTailBig => root % 10 >= TAIL_BIG_MIN,
            Self::SumTailSmall => root % 10 < TAIL_BIG_MIN,
            digit => tail == digit.index(),
        }
    }
}

impl Label for TailTag {
    const KIND: &'static str = "tail";

    fn all() -> &'static [Self] {
        &ALL_TAIL_TAGS
    }

    fn name(self) -> &'static str {
        TAIL_NAMES[self.index() as usize]
    }

    fn zh_name(self) -> &'static str {
        TAIL_ZH_NAMES[self.index() as usize]
    }
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// A category together with a value valid for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Element(Element),
    Wave(Wave),
    Parity(Parity),
    Size(Size),
    Combo(Combo),
    Combined(Combined),
    Tail(TailTag),
    Zodiac(Zodiac),
    ZodiacType(ZodiacGroup),
    /// Head digit, as parsed; heads outside 0..=4 match nothing.
    Head(i64),
    /// Digit root, as parsed; roots outside 1..=9 match nothing.
    Sum(i64),
    Code(CodeRange),
}

impl Selector {
    /// Validate `value` for `kind`. Unknown values give `None`.
    ///
    /// Labels match by English key or Chinese label. Head and sum values are
    /// read with [`parse_int_prefix`], so `"3"`, `"3头"` and `"0x3"` all give 3.
    pub fn parse(kind: CategoryKind, value: &str) -> Option<Self> {
        match kind {
            CategoryKind::Element => Element::from_label(value).map(Self::Element),
            CategoryKind::Wave => Wave::from_label(value).map(Self::Wave),
            CategoryKind::Parity => Parity::from_label(value).map(Self::Parity),
            CategoryKind::Size => Size::from_label(value).map(Self::Size),
            CategoryKind::Combo => Combo::from_label(value).map(Self::Combo),
            CategoryKind::Combined => Combined::from_label(value).map(Self::Combined),
            CategoryKind::Tail => TailTag::from_label(value).map(Self::Tail),
            CategoryKind::Zodiac => Zodiac::from_label(value).map(Self::Zodiac),
            CategoryKind::ZodiacType => ZodiacGroup::from_label(value).map(Self::ZodiacType),
            CategoryKind::Head => parse_int_prefix(value).map(Self::Head),
            CategoryKind::Sum => parse_int_prefix(value).map(Self::Sum),
            CategoryKind::Code => CodeRange::from_label(value).map(Self::Code),
        }
    }

    /// Parse both category and value from strings.
    pub fn parse_str(category: &str, value: &str) -> Option<Self> {
        CategoryKind::from_label(category).and_then(|kind| Self::parse(kind, value))
    }

    /// Strict form of [`Selector::parse_str`] for command-line input.
    pub fn try_parse_str(category: &str, value: &str) -> Result<Self, ClassifyError> {
        let kind = CategoryKind::parse(category)?;
        Self::parse(kind, value).ok_or_else(|| ClassifyError::UnknownLabel {
            kind: kind.name(),
            label: value.to_string(),
        })
    }

    pub const fn kind(&self) -> CategoryKind {
        match self {
            Self::Element(_) => CategoryKind::Element,
            Self::Wave(_) => CategoryKind::Wave,
            Self::Parity(_) => CategoryKind::Parity,
            Self::Size(_) => CategoryKind::Size,
            Self::Combo(_) => CategoryKind::Combo,
            Self::Combined(_) => CategoryKind::Combined,
            Self::Tail(_) => CategoryKind::Tail,
            Self::Zodiac(_) => CategoryKind::Zodiac,
            Self::ZodiacType(_) => CategoryKind::ZodiacType,
            Self::Head(_) => CategoryKind::Head,
            Self::Sum(_) => CategoryKind::Sum,
            Self::Code(_) => CategoryKind::Code,
        }
    }
}

/// Canonical English values accepted for `kind`, for listings.
/// Head and sum take integers and list their meaningful range.
pub fn category_values(kind: CategoryKind) -> Vec<&'static str> {
    fn names<T: Label>() -> Vec<&'static str> {
        T::all().iter().map(|v| v.name()).collect()
    }
    match kind {
        CategoryKind::Element => names::<Element>(),
        CategoryKind::Wave => names::<Wave>(),
        CategoryKind::Parity => names::<Parity>(),
        CategoryKind::Size => names::<Size>(),
        CategoryKind::Combo => names::<Combo>(),
        CategoryKind::Combined => names::<Combined>(),
        CategoryKind::Tail => names::<TailTag>(),
        CategoryKind::Zodiac => names::<Zodiac>(),
        CategoryKind::ZodiacType => names::<ZodiacGroup>(),
        CategoryKind::Head => vec!["0", "1", "2", "3", "4"],
        CategoryKind::Sum => vec!["1", "2", "3", "4", "5", "6", "7", "8", "9"],
        CategoryKind::Code => names::<CodeRange>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combo_indices_sequential() {
        for (i, c) in ALL_COMBOS.iter().enumerate() {
            assert_eq!(c.index() as usize, i);
        }
    }

    #[test]
    fn combo_labels_line_up() {
        assert_eq!(Combo::SmallOdd.name(), "small-odd");
        assert_eq!(Combo::SmallOdd.zh_name(), "小单");
        assert_eq!(Combo::GreenSmall.name(), "green-small");
        assert_eq!(Combo::GreenSmall.zh_name(), "绿小");
        assert_eq!(Combo::Head4Even.name(), "head4-even");
        assert_eq!(Combo::Head4Even.zh_name(), "4头双");
    }

    #[test]
    fn combo_names_agree_with_terms() {
        for c in ALL_COMBOS {
            let (a, b) = c.terms();
            let left = match a {
                Term::Size(s) => s.name().to_string(),
                Term::Wave(w) => w.name().to_string(),
                Term::Head(h) => format!("head{h}"),
                Term::Parity(_) => unreachable!("parity is always the right term"),
            };
            let right = match b {
                Term::Parity(p) => p.name(),
                Term::Size(s) => s.name(),
                _ => unreachable!(),
            };
            assert_eq!(c.name(), format!("{left}-{right}"));
        }
    }

    #[test]
    fn combo_chinese_labels_agree_with_terms() {
        for c in ALL_COMBOS {
            let (a, b) = c.terms();
            let left = match a {
                Term::Size(s) => s.zh_name().to_string(),
                // 红波 -> 红
                Term::Wave(w) => w.zh_name().chars().take(1).collect(),
                Term::Head(h) => format!("{h}头"),
                Term::Parity(_) => unreachable!("parity is always the right term"),
            };
            let right = match b {
                Term::Parity(p) => p.zh_name(),
                Term::Size(s) => s.zh_name(),
                _ => unreachable!(),
            };
            assert_eq!(c.zh_name(), format!("{left}{right}"), "{c:?}");
        }
    }

    #[test]
    fn tail_indices_sequential() {
        for (i, t) in ALL_TAIL_TAGS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
        }
    }

    #[test]
    fn tail_digit_tags() {
        assert!(TailTag::Tail3.holds(3, 3));
        assert!(!TailTag::Tail3.holds(4, 4));
        assert!(TailTag::TailBig.holds(5, 5));
        assert!(TailTag::TailSmall.holds(4, 4));
        assert!(TailTag::SumTailBig.holds(0, 9));
        assert!(TailTag::SumTailSmall.holds(9, 1));
    }

    #[test]
    fn combined_thresholds() {
        assert!(Combined::SumBig.holds(7));
        assert!(Combined::SumSmall.holds(6));
        assert!(Combined::SumOdd.holds(9));
        assert!(Combined::SumEven.holds(4));
    }

    #[test]
    fn parse_english_and_chinese() {
        assert_eq!(
            Selector::parse(CategoryKind::Combo, "red-even"),
            Some(Selector::Combo(Combo::RedEven))
        );
        assert_eq!(
            Selector::parse(CategoryKind::Combo, "红双"),
            Some(Selector::Combo(Combo::RedEven))
        );
        assert_eq!(
            Selector::parse(CategoryKind::Tail, "7尾"),
            Some(Selector::Tail(TailTag::Tail7))
        );
        assert_eq!(
            Selector::parse(CategoryKind::Wave, "蓝波"),
            Some(Selector::Wave(Wave::Blue))
        );
    }

    #[test]
    fn parse_head_and_sum_are_lenient() {
        assert_eq!(Selector::parse(CategoryKind::Head, "2"), Some(Selector::Head(2)));
        assert_eq!(Selector::parse(CategoryKind::Head, "2头"), Some(Selector::Head(2)));
        assert_eq!(Selector::parse(CategoryKind::Sum, "x"), None);
    }

    #[test]
    fn parse_unknown_value_is_none() {
        for kind in ALL_CATEGORY_KINDS {
            assert_eq!(Selector::parse(kind, "no-such-value"), None, "{kind:?}");
        }
    }

    #[test]
    fn value_of_other_kind_is_not_accepted() {
        // "big" is a size, not a combo or tail tag.
        assert_eq!(Selector::parse(CategoryKind::Combo, "big"), None);
        assert_eq!(Selector::parse(CategoryKind::Tail, "big"), None);
    }

    #[test]
    fn kind_round_trip() {
        let s = Selector::parse(CategoryKind::ZodiacType, "front-six").unwrap();
        assert_eq!(s.kind(), CategoryKind::ZodiacType);
    }

    #[test]
    fn try_parse_str_reports_errors() {
        assert!(Selector::try_parse_str("zodiac", "rat").is_ok());
        assert!(matches!(
            Selector::try_parse_str("colour", "red"),
            Err(ClassifyError::UnknownLabel { kind: "category", .. })
        ));
        assert!(matches!(
            Selector::try_parse_str("wave", "purple"),
            Err(ClassifyError::UnknownLabel { kind: "wave", .. })
        ));
    }

    #[test]
    fn category_values_parse_back() {
        for kind in ALL_CATEGORY_KINDS {
            for v in category_values(kind) {
                assert!(Selector::parse(kind, v).is_some(), "{kind:?} {v}");
            }
        }
    }
}
