//! Five elements (wuxing) by tail digit.
//!
//! Tail 1,2 wood; 3,4 fire; 5 earth; 6,0 water; 7,8,9 metal.
//! 49 is metal by explicit exception (it agrees with the tail-9 rule).
//! The rule is authoritative; [`element_numbers`] derives the table from it.

use crate::digits::tail;
use crate::label::Label;
use crate::number::{MAX_NUMBER, numbers};

/// The 5 elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Fire,
    Element::Earth,
];

impl Label for Element {
    const KIND: &'static str = "element";

    fn all() -> &'static [Self] {
        &ALL_ELEMENTS
    }

    fn name(self) -> &'static str {
        match self {
            Self::Metal => "metal",
            Self::Wood => "wood",
            Self::Water => "water",
            Self::Fire => "fire",
            Self::Earth => "earth",
        }
    }

    fn zh_name(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }
}

/// Element of a ball number.
pub const fn element_of(n: u8) -> Element {
    if n == MAX_NUMBER {
        return Element::Metal;
    }
    match tail(n) {
        1 | 2 => Element::Wood,
        3 | 4 => Element::Fire,
        5 => Element::Earth,
        6 | 0 => Element::Water,
        _ => Element::Metal,
    }
}

/// Numbers of `element`, ascending.
pub fn element_numbers(element: Element) -> Vec<u8> {
    numbers().filter(|&n| element_of(n) == element).collect()
}
