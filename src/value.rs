use crate::errors::*;

/// Formats an operand for display: shortest representation that reads
/// back to the same number. Plain decimals keep a fractional part (`1.0`,
/// `3.14`), very small or large values use an exponent (`1e-7`), non-finite
/// values print as `inf`, `-inf` and `NaN`
pub fn format_f64(g: f64) -> String {
    let mut buf = dtoa::Buffer::new();
    buf.format(g).to_string()
}

/// Compares two operands with machine-epsilon tolerance
pub fn f64_equal(f1: f64, f2: f64) -> bool {
    (f1 - f2).abs() <= f64::EPSILON
}

/// Converts a numeral typed by the user. Underscores and spaces are
/// ignored so `1_000` and `1 000` both work
pub fn str_to_f64(s: &str) -> CalcResult {
    let cleaned = s.replace(['_', ' '], "");
    if cleaned.is_empty() {
        return Err(CalcError::StrToFloat(s.to_owned()));
    }
    match cleaned.parse::<f64>() {
        Ok(f) => Ok(f),
        Err(..) => Err(CalcError::StrToFloat(s.to_owned())),
    }
}
