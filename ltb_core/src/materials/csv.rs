//! Minimal CSV reading for the shape reference table.
//!
//! Handles the subset of RFC 4180 the AISC exports use: comma separators,
//! double-quoted fields (which may contain commas) and `""` escapes inside
//! quotes. Records never span lines.

use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Split one CSV line into trimmed fields.
///
/// `line_num` is only used for error reporting (1-based).
pub(crate) fn split_record(line: &str, line_num: usize) -> CalcResult<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err(CalcError::parse_error(line_num, "Unterminated quoted field"));
    }

    fields.push(current.trim().to_string());
    Ok(fields)
}

/// Check whether a cell is a placeholder for "no value".
///
/// AISC tables print a dash where a property does not apply.
pub(crate) fn is_missing_marker(s: &str) -> bool {
    matches!(s.trim(), "" | "-" | "–" | "—")
}

/// Parse a numeric-looking cell.
///
/// Accepts an optional sign, digits with an optional fractional part and an
/// optional exponent. Unlike `f64::from_str`, words such as `inf` or `NaN`
/// are rejected so that text cells stay text.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let body = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };

    let mut parts = mantissa.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let frac = parts.next();
    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());

    let mantissa_ok = match frac {
        Some(frac) => {
            (!whole.is_empty() || !frac.is_empty()) && all_digits(whole) && all_digits(frac)
        }
        None => !whole.is_empty() && all_digits(whole),
    };
    if !mantissa_ok {
        return None;
    }

    if let Some(exp) = exponent {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if digits.is_empty() || !all_digits(digits) {
            return None;
        }
    }

    f64::from_str(trimmed).ok()
}
