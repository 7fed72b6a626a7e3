//! Canonical rendering of numeric results.

/// Render a float the way results are shown everywhere in the calculator.
///
/// Integral values keep a trailing `.0`, other values use the shortest
/// round-trip digits, and very large or very small magnitudes switch to
/// scientific notation with a signed, at least two-digit exponent
/// (`1e+16`, `2.5e-07`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Debug already picks shortest digits and switches to exponent form at
    // the same magnitudes; only the exponent spelling differs.
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}
