//! Zodiac groups: named sets of zodiacs (domestic/wild, front/back six,
//! heaven/earth, male/female, yang/yin).
//!
//! A number belongs to a group when its zodiac does.

use crate::label::Label;
use crate::zodiac::Zodiac;

/// The 10 zodiac groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ZodiacGroup {
    Domestic,
    Wild,
    FrontSix,
    BackSix,
    Heaven,
    Earth,
    Male,
    Female,
    Yang,
    Yin,
}

/// All 10 groups in display order.
pub const ALL_ZODIAC_GROUPS: [ZodiacGroup; 10] = [
    ZodiacGroup::Domestic,
    ZodiacGroup::Wild,
    ZodiacGroup::FrontSix,
    ZodiacGroup::BackSix,
    ZodiacGroup::Heaven,
    ZodiacGroup::Earth,
    ZodiacGroup::Male,
    ZodiacGroup::Female,
    ZodiacGroup::Yang,
    ZodiacGroup::Yin,
];

impl ZodiacGroup {
    /// Member zodiacs of the group.
    ///
    /// Domestic is rooster, dog and pig only: the grid's list also names
    /// duck and goose, which are not zodiacs and never match a number.
    pub const fn members(self) -> &'static [Zodiac] {
        use Zodiac::*;
        match self {
            Self::Domestic => &[Rooster, Dog, Pig],
            Self::Wild => &[Tiger, Dragon, Snake, Horse, Goat, Monkey, Rat, Ox, Rabbit],
            Self::FrontSix => &[Rat, Ox, Tiger, Rabbit, Dragon, Snake],
            Self::BackSix => &[Horse, Goat, Monkey, Rooster, Dog, Pig],
            Self::Heaven => &[Ox, Rabbit, Dragon, Horse, Monkey, Pig],
            Self::Earth => &[Rat, Tiger, Snake, Goat, Rooster, Dog],
            Self::Male | Self::Yang => &[Rat, Tiger, Dragon, Horse, Monkey, Dog],
            Self::Female | Self::Yin => &[Ox, Rabbit, Snake, Goat, Rooster, Pig],
        }
    }

    pub fn contains(self, zodiac: Zodiac) -> bool {
        self.members().contains(&zodiac)
    }
}

impl Label for ZodiacGroup {
    const KIND: &'static str = "zodiac group";

    fn all() -> &'static [Self] {
        &ALL_ZODIAC_GROUPS
    }

    fn name(self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::Wild => "wild",
            Self::FrontSix => "front-six",
            Self::BackSix => "back-six",
            Self::Heaven => "heaven",
            Self::Earth => "earth",
            Self::Male => "male",
            Self::Female => "female",
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }

    fn zh_name(self) -> &'static str {
        match self {
            Self::Domestic => "家禽",
            Self::Wild => "野兽",
            Self::FrontSix => "前肖",
            Self::BackSix => "后肖",
            Self::Heaven => "天肖",
            Self::Earth => "地肖",
            Self::Male => "男肖",
            Self::Female => "女肖",
            Self::Yang => "阳肖",
            Self::Yin => "阴肖",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::ALL_ZODIACS;

    fn complementary(a: ZodiacGroup, b: ZodiacGroup) {
        for z in ALL_ZODIACS {
            assert!(
                a.contains(z) != b.contains(z),
                "{z:?} must be in exactly one of {a:?} / {b:?}"
            );
        }
    }

    #[test]
    fn front_back_partition() {
        complementary(ZodiacGroup::FrontSix, ZodiacGroup::BackSix);
    }

    #[test]
    fn heaven_earth_partition() {
        complementary(ZodiacGroup::Heaven, ZodiacGroup::Earth);
    }

    #[test]
    fn male_female_partition() {
        complementary(ZodiacGroup::Male, ZodiacGroup::Female);
        complementary(ZodiacGroup::Yang, ZodiacGroup::Yin);
    }

    #[test]
    fn domestic_wild_partition() {
        complementary(ZodiacGroup::Domestic, ZodiacGroup::Wild);
    }

    #[test]
    fn front_six_is_first_half_of_cycle() {
        assert_eq!(ZodiacGroup::FrontSix.members(), &ALL_ZODIACS[..6]);
        assert_eq!(ZodiacGroup::BackSix.members(), &ALL_ZODIACS[6..]);
    }

    #[test]
    fn group_labels() {
        assert_eq!(ZodiacGroup::from_label("front-six"), Some(ZodiacGroup::FrontSix));
        assert_eq!(ZodiacGroup::from_label("阴肖"), Some(ZodiacGroup::Yin));
        assert_eq!(ZodiacGroup::from_label("sea"), None);
    }
}
