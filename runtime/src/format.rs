//! Text rendering for the values OKM programs print.
//!
//! Pure functions, kept apart from the output sink so the exact byte
//! sequences can be tested without capturing stdout.

/// Significant digits used by the general float format (C's `%g` default).
const PRECISION: usize = 6;

/// Render an integer in base 10.
pub fn format_long(n: i64) -> String {
    n.to_string()
}

/// Render a boolean as `true` or `false`.
pub fn format_bool(b: bool) -> String {
    b.to_string()
}

/// Render a double the way C's `printf("%g")` does.
///
/// The value is first rounded to six significant digits. If the resulting
/// decimal exponent X satisfies `-4 <= X < 6` fixed notation is used,
/// otherwise scientific notation with a signed, at least two digit
/// exponent. Trailing zeros and a dangling decimal point are removed.
pub fn format_double(n: f64) -> String {
    if n.is_nan() {
        return if n.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    let scientific = format!("{:.*e}", PRECISION - 1, n);
    let (mantissa, exponent) = split_exponent(&scientific);

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, n)).to_string()
    }
}

/// Split Rust's `{:e}` output (`"1.23457e-5"`) into mantissa and exponent.
fn split_exponent(scientific: &str) -> (&str, i32) {
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (scientific, 0),
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
