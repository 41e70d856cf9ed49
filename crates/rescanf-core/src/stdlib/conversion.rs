//! Numeric conversion functions (atoi, strntoull, strtod).
//!
//! These are the text-to-number primitives the scanning engine feeds with
//! staged numeral text. Each reports how much input it consumed explicitly
//! instead of threading fail-flags through output parameters.

use crate::ctype::{is_alpha, is_digit, is_space, to_upper};
use crate::string::strncmp;

/// Result of a string-to-number conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    Success,
    /// The value saturated at the representable range.
    Overflow,
    /// No digit was consumed (distinct from a parsed zero).
    NoDigits,
}

/// Parses leading decimal text into an `i32`, saturating on overflow.
///
/// Equivalent to C `atoi` with defined overflow behavior: leading whitespace
/// is skipped, an optional single `+`/`-` sign is honored, and a value
/// outside the `i32` range clamps to `i32::MAX`/`i32::MIN`.
pub fn atoi(s: &[u8]) -> i32 {
    let mut i = 0;
    let len = s.len();

    while i < len && is_space(s[i]) {
        i += 1;
    }

    let mut negative = false;
    if i < len && (s[i] == b'-' || s[i] == b'+') {
        negative = s[i] == b'-';
        i += 1;
    }

    let mut acc: i64 = 0;
    let mut overflow = false;
    while i < len && is_digit(s[i]) {
        if !overflow {
            acc = acc * 10 + i64::from(s[i] - b'0');
            if acc > i64::from(i32::MAX) {
                overflow = true;
            }
        }
        i += 1;
    }

    if overflow {
        if negative { i32::MIN } else { i32::MAX }
    } else if negative {
        -(acc as i32)
    } else {
        acc as i32
    }
}

/// Parses a bounded base-N digit run into an unsigned 64-bit magnitude.
///
/// `base` must be in `2..=36`; digits are decoded case-insensitively. For
/// base 16 an optional `0x`/`0X` prefix is skipped (the prefix advances the
/// consumed count but does not count against `limit`). At most `limit`
/// digits are consumed. The value saturates at `u64::MAX` on overflow while
/// still consuming the full digit run.
///
/// Returns `(magnitude, consumed_bytes, status)`; a [`ConversionStatus::NoDigits`]
/// status distinguishes "no digit consumed" from a parsed zero.
pub fn strntoull(s: &[u8], base: u32, limit: usize) -> (u64, usize, ConversionStatus) {
    debug_assert!((2..=36).contains(&base), "strntoull: base out of range");

    let mut pos = 0;
    if base == 16 && (strncmp(s, b"0x", 2) == 0 || strncmp(s, b"0X", 2) == 0) {
        pos = 2;
    }

    let base = u64::from(base);
    let cutoff = u64::MAX / base;
    let cutlim = u64::MAX % base;

    let mut acc: u64 = 0;
    let mut any_digits = false;
    let mut overflow = false;
    let mut taken = 0usize;

    while pos < s.len() && taken < limit {
        let c = to_upper(s[pos]);
        let digit = match c {
            b'0'..=b'9' => c - b'0',
            b'A'..=b'Z' => c - b'A' + 10,
            _ => break,
        };
        if u64::from(digit) >= base {
            break;
        }

        any_digits = true;
        if !overflow {
            if acc > cutoff || (acc == cutoff && u64::from(digit) > cutlim) {
                overflow = true;
            } else {
                acc = acc * base + u64::from(digit);
            }
        }
        pos += 1;
        taken += 1;
    }

    if !any_digits {
        return (0, pos, ConversionStatus::NoDigits);
    }
    if overflow {
        return (u64::MAX, pos, ConversionStatus::Overflow);
    }
    (acc, pos, ConversionStatus::Success)
}

/// Parses leading decimal/exponential/special-value text into an `f64`.
///
/// Accepts an optional sign, `inf`/`infinity`/`nan` (case-insensitive),
/// or `digits[.digits][eE[sign]digits]`. Trailing unparseable text is
/// ignored. Bit-exact IEEE rounding is not a goal here; the engine feeds
/// this with already-staged numeral text.
pub fn strtod(s: &[u8]) -> f64 {
    let (value, _) = strtod_impl(s);
    value
}

/// Helper for strtod: returns `(value, consumed_bytes)`.
pub fn strtod_impl(s: &[u8]) -> (f64, usize) {
    let mut i = 0;
    let len = s.len();

    while i < len && is_space(s[i]) {
        i += 1;
    }

    let mut negative = false;
    if i < len && (s[i] == b'-' || s[i] == b'+') {
        negative = s[i] == b'-';
        i += 1;
    }

    let sign = if negative { -1.0 } else { 1.0 };

    if i < len && is_alpha(s[i]) {
        if starts_with_nocase(&s[i..], b"infinity") {
            return (sign * f64::INFINITY, i + 8);
        }
        if starts_with_nocase(&s[i..], b"inf") {
            return (sign * f64::INFINITY, i + 3);
        }
        if starts_with_nocase(&s[i..], b"nan") {
            return (f64::NAN, i + 3);
        }
        return (0.0, 0);
    }

    let mut mantissa = 0f64;
    let mut frac_digits = 0i32;
    let mut any_digits = false;

    while i < len && is_digit(s[i]) {
        mantissa = mantissa * 10.0 + f64::from(s[i] - b'0');
        any_digits = true;
        i += 1;
    }
    if i < len && s[i] == b'.' {
        i += 1;
        while i < len && is_digit(s[i]) {
            mantissa = mantissa * 10.0 + f64::from(s[i] - b'0');
            frac_digits += 1;
            any_digits = true;
            i += 1;
        }
    }
    if !any_digits {
        return (0.0, 0);
    }

    let mut exponent = 0i32;
    if i < len && (s[i] == b'e' || s[i] == b'E') {
        let mut j = i + 1;
        let mut exp_negative = false;
        if j < len && (s[j] == b'-' || s[j] == b'+') {
            exp_negative = s[j] == b'-';
            j += 1;
        }
        let mut exp_acc = 0i32;
        let mut any_exp = false;
        while j < len && is_digit(s[j]) {
            exp_acc = (exp_acc.saturating_mul(10)).saturating_add(i32::from(s[j] - b'0'));
            any_exp = true;
            j += 1;
        }
        // Without exponent digits the 'e' is not part of the number.
        if any_exp {
            exponent = if exp_negative { -exp_acc } else { exp_acc };
            i = j;
        }
    }

    let scale = exponent.saturating_sub(frac_digits);
    let value = sign * mantissa * 10f64.powi(scale);
    (value, i)
}

fn starts_with_nocase(s: &[u8], pat: &[u8]) -> bool {
    s.len() >= pat.len()
        && s.iter()
            .zip(pat.iter())
            .all(|(&b, &p)| to_upper(b) == to_upper(p))
}
