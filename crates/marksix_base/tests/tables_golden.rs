//! Golden tests for the reference tables and category queries.
//!
//! Expected values are the literal tables printed on the betting grid.

use marksix_base::{
    ALL_CATEGORY_KINDS, ALL_COMBOS, ALL_ELEMENTS, ALL_WAVES, ALL_ZODIACS, CategoryKind, Combo,
    Element, Label, REFERENCE_CLASSIFIER, Selector, Term, Wave, Zodiac, ZodiacGroup, ZodiacTable,
    classify, digit_root, element_numbers, matching_numbers, matching_numbers_str, select,
};

fn range(lo: u8, hi: u8) -> Vec<u8> {
    (lo..=hi).collect()
}

fn intersect(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().copied().filter(|n| b.contains(n)).collect()
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

#[test]
fn element_table_matches_grid_literal() {
    let expected: [(Element, &[u8]); 5] = [
        (
            Element::Metal,
            &[7, 8, 9, 17, 18, 19, 27, 28, 29, 37, 38, 39, 47, 48, 49],
        ),
        (Element::Wood, &[1, 2, 11, 12, 21, 22, 31, 32, 41, 42]),
        (Element::Water, &[6, 10, 16, 20, 26, 30, 36, 40, 46]),
        (Element::Fire, &[3, 4, 13, 14, 23, 24, 33, 34, 43, 44]),
        (Element::Earth, &[5, 15, 25, 35, 45]),
    ];
    for (element, nums) in expected {
        assert_eq!(element_numbers(element), nums, "{element:?}");
        assert_eq!(
            matching_numbers(CategoryKind::Element, element.zh_name()),
            nums,
            "{element:?} by Chinese label"
        );
    }
}

#[test]
fn zodiac_sweep_reference() {
    // Rabbit year: 1 is Rabbit, then backwards round the cycle.
    let expected = [
        Zodiac::Rabbit,
        Zodiac::Tiger,
        Zodiac::Ox,
        Zodiac::Rat,
        Zodiac::Pig,
        Zodiac::Dog,
        Zodiac::Rooster,
        Zodiac::Monkey,
        Zodiac::Goat,
        Zodiac::Horse,
        Zodiac::Snake,
        Zodiac::Dragon,
    ];
    for n in 1..=49u8 {
        let r = classify(i64::from(n)).unwrap();
        assert_eq!(r.zodiac, expected[usize::from(n - 1) % 12], "zodiac of {n}");
    }
}

#[test]
fn rabbit_owns_five_numbers() {
    assert_eq!(
        matching_numbers(CategoryKind::Zodiac, "兔"),
        vec![1, 13, 25, 37, 49]
    );
    for z in ALL_ZODIACS {
        let n = matching_numbers(CategoryKind::Zodiac, z.name()).len();
        let expect = if z == Zodiac::Rabbit { 5 } else { 4 };
        assert_eq!(n, expect, "{z:?}");
    }
}

#[test]
fn rotated_tables_are_full_partitions() {
    for year in ALL_ZODIACS {
        let t = ZodiacTable::for_year(year);
        assert!(t.is_complete());
        assert_eq!(t.numbers_of(year), vec![1, 13, 25, 37, 49], "{year:?}");
    }
}

// ---------------------------------------------------------------------------
// Partition properties
// ---------------------------------------------------------------------------

fn assert_partition(sets: Vec<Vec<u8>>, what: &str) {
    let mut all: Vec<u8> = sets.into_iter().flatten().collect();
    let total = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), total, "{what}: overlapping sets");
    assert_eq!(all, range(1, 49), "{what}: does not cover 1..=49");
}

#[test]
fn element_sets_partition() {
    assert_partition(
        ALL_ELEMENTS.iter().map(|&e| element_numbers(e)).collect(),
        "element",
    );
}

#[test]
fn wave_sets_partition() {
    assert_partition(
        ALL_WAVES
            .iter()
            .map(|w| matching_numbers(CategoryKind::Wave, w.name()))
            .collect(),
        "wave",
    );
}

#[test]
fn zodiac_sets_partition() {
    assert_partition(
        ALL_ZODIACS
            .iter()
            .map(|z| matching_numbers(CategoryKind::Zodiac, z.name()))
            .collect(),
        "zodiac",
    );
}

#[test]
fn classify_is_total_on_range() {
    for n in 1..=49 {
        let r = classify(n).unwrap();
        assert_eq!(i64::from(r.number), n);
        assert!(ALL_WAVES.contains(&r.color));
        assert!(ALL_ZODIACS.contains(&r.zodiac));
        assert!(ALL_ELEMENTS.contains(&r.element));
    }
}

// ---------------------------------------------------------------------------
// Digit root
// ---------------------------------------------------------------------------

#[test]
fn digit_root_examples() {
    assert_eq!(digit_root(9), 9);
    assert_eq!(digit_root(49), 4);
    assert_eq!(digit_root(13), 4);
    for n in 1..=49u64 {
        assert!((1..=9).contains(&digit_root(n)), "digit root of {n}");
    }
}

#[test]
fn element_exception_and_rule_agree() {
    assert_eq!(classify(49).unwrap().element, Element::Metal);
    assert_eq!(classify(9).unwrap().element, Element::Metal);
}

// ---------------------------------------------------------------------------
// Category queries
// ---------------------------------------------------------------------------

#[test]
fn parity_odd_is_every_other_number() {
    let odd: Vec<u8> = (1..=49).step_by(2).collect();
    assert_eq!(odd.len(), 25);
    assert_eq!(matching_numbers(CategoryKind::Parity, "odd"), odd);
    assert_eq!(matching_numbers(CategoryKind::Parity, "单"), odd);
}

#[test]
fn size_halves() {
    assert_eq!(matching_numbers(CategoryKind::Size, "big"), range(25, 49));
    assert_eq!(matching_numbers(CategoryKind::Size, "small"), range(1, 24));
}

#[test]
fn code_ranges() {
    let inner = matching_numbers(CategoryKind::Code, "inner");
    let outer = matching_numbers(CategoryKind::Code, "outer");
    assert_eq!(inner, range(1, 24));
    assert_eq!(outer, range(25, 49));
    assert!(intersect(&inner, &outer).is_empty());
    assert_partition(vec![inner, outer], "code");
}

#[test]
fn combo_small_odd_is_intersection() {
    let small = matching_numbers(CategoryKind::Size, "small");
    let odd = matching_numbers(CategoryKind::Parity, "odd");
    assert_eq!(
        matching_numbers(CategoryKind::Combo, "small-odd"),
        intersect(&small, &odd)
    );
}

#[test]
fn every_combo_is_intersection_of_its_parts() {
    for combo in ALL_COMBOS {
        let (a, b) = combo.terms();
        let part = |t: Term| match t {
            Term::Parity(p) => select(&Selector::Parity(p)),
            Term::Size(s) => select(&Selector::Size(s)),
            Term::Wave(w) => (1..=49u8)
                .filter(|&n| REFERENCE_CLASSIFIER.color(n) == w)
                .collect(),
            Term::Head(h) => select(&Selector::Head(i64::from(h))),
        };
        assert_eq!(
            select(&Selector::Combo(combo)),
            intersect(&part(a), &part(b)),
            "{combo:?}"
        );
    }
}

#[test]
fn combo_count() {
    assert_eq!(ALL_COMBOS.len(), 26);
    assert_eq!(
        matching_numbers(CategoryKind::Combo, "green-big"),
        vec![27, 28, 32, 33, 38, 39, 43, 44, 49]
    );
    assert_eq!(select(&Selector::Combo(Combo::BigEven)).len(), 12);
}

#[test]
fn combined_uses_digit_root() {
    // Roots 7, 8, 9.
    assert_eq!(
        matching_numbers(CategoryKind::Combined, "sum-big"),
        vec![7, 8, 9, 16, 17, 18, 25, 26, 27, 34, 35, 36, 43, 44, 45]
    );
    let odd = matching_numbers(CategoryKind::Combined, "合单");
    let even = matching_numbers(CategoryKind::Combined, "合双");
    assert_partition(vec![odd.clone(), even], "combined parity");
    assert!(odd.contains(&10)); // 1 + 0 = 1
    assert!(!odd.contains(&11)); // 1 + 1 = 2
}

#[test]
fn sum_tail_variants_follow_digit_root() {
    // The digit root is a single digit, so its tail is itself.
    assert_eq!(
        matching_numbers(CategoryKind::Tail, "sum-tail-big"),
        (1..=49u8).filter(|&n| digit_root(u64::from(n)) >= 5).collect::<Vec<_>>()
    );
}

#[test]
fn unknown_value_is_empty_for_every_category() {
    for kind in ALL_CATEGORY_KINDS {
        assert!(
            matching_numbers(kind, "no-such-value").is_empty(),
            "{kind:?}"
        );
    }
    assert!(matching_numbers_str("no-such-category", "odd").is_empty());
}

#[test]
fn front_six_follows_zodiac_composition() {
    let expected: Vec<u8> = (1..=49)
        .filter(|&n| {
            let z = classify(i64::from(n)).unwrap().zodiac;
            ZodiacGroup::FrontSix.members().contains(&z)
        })
        .collect();
    assert_eq!(
        matching_numbers(CategoryKind::ZodiacType, "front-six"),
        expected
    );
    // Rat, Ox, Tiger, Rabbit, Dragon, Snake: 4 + 4 + 4 + 5 + 4 + 4.
    assert_eq!(expected.len(), 25);
}

#[test]
fn domestic_group_ignores_non_zodiac_animals() {
    // Rooster, Dog, Pig only.
    assert_eq!(
        matching_numbers(CategoryKind::ZodiacType, "家禽"),
        vec![5, 6, 7, 17, 18, 19, 29, 30, 31, 41, 42, 43]
    );
}

#[test]
fn wave_table_literal() {
    assert_eq!(
        matching_numbers(CategoryKind::Wave, "blue"),
        vec![3, 4, 9, 10, 14, 15, 20, 25, 26, 31, 36, 37, 41, 42, 47, 48]
    );
    assert_eq!(
        matching_numbers(CategoryKind::Wave, "绿波"),
        vec![5, 6, 11, 16, 17, 21, 22, 27, 28, 32, 33, 38, 39, 43, 44, 49]
    );
    assert_eq!(classify(40).unwrap().color, Wave::Red);
}
