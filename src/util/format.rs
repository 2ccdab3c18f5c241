/// Significant digits used for doubles in text form.
const PRECISION: i32 = 6;

/// Formats a double like `%g` with six significant digits.
///
/// Fixed notation is used when the decimal exponent lies in `-5..6`,
/// scientific notation (`1e+06`, `1.5e-07`) otherwise. Trailing zeros and a
/// trailing decimal point are removed in both forms.
///
/// ## Example
/// ```
/// use hrl::util::format::format_double;
///
/// assert_eq!(format_double(3.5), "3.5");
/// assert_eq!(format_double(2.0), "2");
/// assert_eq!(format_double(1.0 / 3.0), "0.333333");
/// assert_eq!(format_double(1234567.0), "1.23457e+06");
/// ```
#[must_use]
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return String::from(if value.is_sign_negative() { "-nan" } else { "nan" });
    }
    if value.is_infinite() {
        return String::from(if value < 0.0 { "-inf" } else { "inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // Rounding to the target precision first decides the exponent, exactly as
    // printf does (9.999995 becomes 10, not 9.99999).
    let digits = usize::try_from(PRECISION - 1).unwrap_or(0);
    let scientific = format!("{value:.digits$e}");
    let (mantissa, exponent) = scientific.split_once('e')
                                         .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = usize::try_from(PRECISION - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Removes trailing zeros after a decimal point, and the point itself if
/// nothing remains behind it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_notation() {
        assert_eq!(format_double(0.5), "0.5");
        assert_eq!(format_double(-12.25), "-12.25");
        assert_eq!(format_double(100000.0), "100000");
        assert_eq!(format_double(0.0001), "0.0001");
        assert_eq!(format_double(3.141_592_653), "3.14159");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(format_double(1_000_000.0), "1e+06");
        assert_eq!(format_double(0.000_01), "1e-05");
        assert_eq!(format_double(-2.5e-10), "-2.5e-10");
        assert_eq!(format_double(1e100), "1e+100");
    }

    #[test]
    fn rounding_moves_exponent() {
        assert_eq!(format_double(999_999.5), "1e+06");
        assert_eq!(format_double(9.999_999), "10");
    }

    #[test]
    fn special_values() {
        assert_eq!(format_double(0.0), "0");
        assert_eq!(format_double(f64::INFINITY), "inf");
        assert_eq!(format_double(f64::NEG_INFINITY), "-inf");
    }
}
