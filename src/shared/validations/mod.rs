//! Shared query-parameter validation helpers
//!
//! Pure functions: every failure is an explicit `DomainError`, never a
//! panic, so each call site states its failure contract with `?`.

use crate::domain::DomainError;

/// Coerce a raw query value into a number.
///
/// Parsing is lenient, taking the longest numeric prefix of the value:
/// `"12abc"` parses as `12.0`, `".5"` as `0.5`, `"1e3x"` as `1000.0`.
/// Absent, empty and non-numeric values fail with an error naming `field`.
pub fn parse_numeric_field(raw: Option<&str>, field: &str) -> Result<f64, DomainError> {
    raw.and_then(numeric_prefix)
        .ok_or_else(|| DomainError::invalid_number(field))
}

/// Membership flag: only the exact literal `"true"` counts. Any other
/// value, including different casing or `"1"`, is treated as `false`.
pub fn parse_membership_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Longest leading float prefix of `s`: optional sign, digits with an
/// optional fraction, and an exponent only when exponent digits follow.
/// Leading whitespace is skipped. `None` when no digits are found.
fn numeric_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        let mut pos = end + 1;
        while bytes.get(pos).is_some_and(|b| b.is_ascii_digit()) {
            pos += 1;
        }
        frac_digits = pos - (end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end = pos;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut pos = end + 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_start = pos;
        while bytes.get(pos).is_some_and(|b| b.is_ascii_digit()) {
            pos += 1;
        }
        if pos > exp_start {
            end = pos;
        }
    }

    s[..end].parse().ok()
}

// ── Tests ──────────────────────────────────────────────────────
