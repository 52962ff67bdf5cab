//! Numeric text parsing.
//!
//! Accepts the literal forms a user may type into a number field:
//! - Decimal: "123", "-45.67", ".5", "5.", "+1e3"
//! - Infinities: "Infinity", "+Infinity", "-Infinity"
//! - Prefixed integers: "0x1F", "0o17", "0b101" (unsigned only)
//! - Surrounding whitespace: "  123  "
//!
//! Rust-only spellings such as "inf", "nan" or "1_000" are rejected.

/// Parse numeric text, returning `None` when the text is not a number literal.
///
/// Empty or whitespace-only text is `Some(0.0)`; an empty field counts as zero
/// under coercion. Use [`is_numeric`] when blank text should be rejected.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(parsed) = parse_prefixed_integer(trimmed) {
        return parsed;
    }

    if !is_decimal_literal(trimmed) {
        return None;
    }
    trimmed.parse().ok()
}

/// Check if text holds a number literal. Blank text is not numeric.
pub fn is_numeric(value: &str) -> bool {
    !value.trim().is_empty() && parse_numeric(value).is_some()
}

/// Returns `Some(result)` when the text carries a radix prefix, `None` otherwise.
fn parse_prefixed_integer(text: &str) -> Option<Option<f64>> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }
    let mut acc = 0.0_f64;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            return Some(None);
        };
        acc = acc * f64::from(radix) + f64::from(digit);
    }
    Some(Some(acc))
}

fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < len && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if i < len && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < len && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == len
}
