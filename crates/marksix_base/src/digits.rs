//! Decimal digit helpers: head, tail, digit root, and lenient integer parsing.

use crate::error::ClassifyError;

/// Head digit (tens place): `n / 10`.
pub const fn head(n: u8) -> u8 {
    n / 10
}

/// Tail digit (units place): `n % 10`.
pub const fn tail(n: u8) -> u8 {
    n % 10
}

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Digit root: sum the decimal digits repeatedly until one digit remains.
///
/// `digit_root(0) == 0`; for `n > 0` the result is in 1..=9.
pub const fn digit_root(n: u64) -> u8 {
    let mut r = n;
    while r >= 10 {
        r = digit_sum(r);
    }
    r as u8
}

/// Digit root of a signed integer. Negative input is rejected.
pub fn checked_digit_root(n: i64) -> Result<u8, ClassifyError> {
    if n < 0 {
        return Err(ClassifyError::Negative(n));
    }
    Ok(digit_root(n as u64))
}

/// Lenient integer parse in the manner of `parseInt`: leading whitespace,
/// optional sign, then the longest run of digits. A `0x`/`0X` prefix
/// switches to hexadecimal. Trailing text is ignored (`"3头"` -> 3,
/// `"0x4"` -> 4).
///
/// Returns `None` when no digit follows the sign or prefix, or on overflow.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let mut value: i64 = 0;
    let mut digits = 0;
    for d in rest.chars().map_while(|c| c.to_digit(radix)) {
        value = value
            .checked_mul(i64::from(radix))?
            .checked_add(i64::from(d))?;
        digits += 1;
    }
    if digits == 0 {
        return None;
    }
    Some(if negative { -value } else { value })
}
