//! Lenient conversion of user text into record values.
//!
//! These helpers never fail: anything that cannot be read as a number becomes
//! `NaN` (or `None` for integers) and is left to the validator to reject.

/// Trims surrounding whitespace.
pub fn text(raw: &str) -> String {
    raw.trim().to_string()
}

/// Reads a decimal number. Blank input reads as zero; anything unparseable or
/// non-finite reads as `NaN`.
pub fn number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => f64::NAN,
    }
}

/// Reads the leading integer of `raw`: optional sign then digits, ignoring
/// whatever follows ("12abc" is 12, "4.7" is 4). `None` when no digits lead.
pub fn integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Like [`integer`], but as a float with `NaN` standing in for "no number".
pub fn integer_or_nan(raw: &str) -> f64 {
    integer(raw).map(|n| n as f64).unwrap_or(f64::NAN)
}
