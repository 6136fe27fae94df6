//! Natural, case-insensitive string ordering.
//!
//! The comparison works on bytes and follows the rules of PHP's
//! `natcasesort`, which produced the brand order consumers already rely on:
//!
//! - whitespace is skipped wherever it appears, so `"Hi Nova"` compares as
//!   `"HiNova"`
//! - zeros at the very start of a string are dropped when a digit follows
//! - two digit runs compare by magnitude (`"item2"` before `"item10"`), except
//!   when either run starts with `0`: then they compare digit by digit from
//!   the left, like the fractional part of a number (`"v01"` before `"v1"`)
//! - every other byte is compared after ASCII upper-casing

use std::cmp::Ordering;

/// Compare two strings in natural order, ignoring letter case.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use detector_icons_common::natural::natural_cmp_ignore_case;
///
/// assert_eq!(natural_cmp_ignore_case("Brand2", "brand10"), Ordering::Less);
/// assert_eq!(natural_cmp_ignore_case("apple", "Apple"), Ordering::Equal);
/// assert_eq!(natural_cmp_ignore_case("Hi Nova", "HiBy"), Ordering::Greater);
/// ```
pub fn natural_cmp_ignore_case(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() || b.is_empty() {
        return a.len().cmp(&b.len());
    }

    let mut ai = skip_leading_zeros(a);
    let mut bi = skip_leading_zeros(b);

    loop {
        ai = skip_whitespace(a, ai);
        bi = skip_whitespace(b, bi);

        if digit_at(a, ai).is_some() && digit_at(b, bi).is_some() {
            let fractional = a[ai] == b'0' || b[bi] == b'0';
            let ordering = if fractional {
                compare_left(a, &mut ai, b, &mut bi)
            } else {
                compare_right(a, &mut ai, b, &mut bi)
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
            match (ai >= a.len(), bi >= b.len()) {
                (true, true) => return Ordering::Equal,
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                (false, false) => {}
            }
        }

        let ca = byte_at(a, ai).to_ascii_uppercase();
        let cb = byte_at(b, bi).to_ascii_uppercase();
        match ca.cmp(&cb) {
            Ordering::Equal => {}
            other => return other,
        }

        ai += 1;
        bi += 1;
        match (ai >= a.len(), bi >= b.len()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
    }
}

/// Stable-sort `(key, value)` pairs by value in natural, case-insensitive order.
///
/// Entries whose values compare equal keep their relative input order.
pub fn sort_by_value_natural<K, V: AsRef<str>>(entries: &mut [(K, V)]) {
    entries.sort_by(|(_, a), (_, b)| natural_cmp_ignore_case(a.as_ref(), b.as_ref()));
}

/// Byte at `at`, or NUL past the end.
fn byte_at(s: &[u8], at: usize) -> u8 {
    s.get(at).copied().unwrap_or(0)
}

fn digit_at(s: &[u8], at: usize) -> Option<u8> {
    s.get(at).copied().filter(u8::is_ascii_digit)
}

// C `isspace`, which unlike `u8::is_ascii_whitespace` includes vertical tab.
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

fn skip_whitespace(s: &[u8], mut at: usize) -> usize {
    while is_space(byte_at(s, at)) {
        at += 1;
    }
    at
}

fn skip_leading_zeros(s: &[u8]) -> usize {
    let mut at = 0;
    while s[at] == b'0' && digit_at(s, at + 1).is_some() {
        at += 1;
    }
    at
}

/// Compare two right-aligned digit runs: the longer run wins, otherwise the
/// first differing digit decides. Runs of any length are handled.
fn compare_right(a: &[u8], ai: &mut usize, b: &[u8], bi: &mut usize) -> Ordering {
    let mut bias = Ordering::Equal;
    loop {
        match (digit_at(a, *ai), digit_at(b, *bi)) {
            (None, None) => return bias,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if bias == Ordering::Equal {
                    bias = x.cmp(&y);
                }
            }
        }
        *ai += 1;
        *bi += 1;
    }
}

/// Compare two left-aligned digit runs: the first differing digit decides,
/// and a run that ends early is smaller.
fn compare_left(a: &[u8], ai: &mut usize, b: &[u8], bi: &mut usize) -> Ordering {
    loop {
        match (digit_at(a, *ai), digit_at(b, *bi)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x != y => return x.cmp(&y),
            _ => {}
        }
        *ai += 1;
        *bi += 1;
    }
}
