//! Float formatting compatible with C++ output streams
//!
//! The time table is written the way `std::ostream << float` prints by
//! default: `%g` with six significant digits, trailing zeros removed, and
//! scientific notation (`1e-05`, `1.23457e+06`) outside `1e-4 <= |v| < 1e6`.

/// Significant digits used by a default-configured output stream
pub const STREAM_PRECISION: usize = 6;

/// Format `value` like C's `%.{precision}g`
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let precision = precision.max(1);

    // Round to the requested significant digits first; the exponent of the
    // rounded value decides between fixed and scientific notation.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            if exponent < 0 { '-' } else { '+' },
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Format an `f32` the way a default output stream would
pub fn format_stream_float(value: f32) -> String {
    format_general(f64::from(value), STREAM_PRECISION)
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_general(0.0, 6), "0");
        assert_eq!(format_general(1.0, 6), "1");
        assert_eq!(format_general(0.25, 6), "0.25");
        assert_eq!(format_general(10.0, 6), "10");
        assert_eq!(format_general(123456.0, 6), "123456");
        assert_eq!(format_general(0.0001, 6), "0.0001");
        assert_eq!(format_general(-2.5, 6), "-2.5");
    }

    #[test]
    fn test_rounds_to_six_significant_digits() {
        assert_eq!(format_general(1.23456789, 6), "1.23457");
        assert_eq!(format_general(0.333333333, 6), "0.333333");
        assert_eq!(format_general(9.9999999, 6), "10");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_general(0.00001, 6), "1e-05");
        assert_eq!(format_general(0.0000123456, 6), "1.23456e-05");
        assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_general(999999.7, 6), "1e+06");
    }

    #[test]
    fn test_f32_values_print_short() {
        // 0.1f32 is 0.100000001490116... but prints as a stream would
        assert_eq!(format_stream_float(0.1), "0.1");
        assert_eq!(format_stream_float(0.02 * 7.0), "0.14");
        assert_eq!(format_stream_float(2.7), "2.7");
        assert_eq!(format_stream_float(10.0), "10");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_general(f64::NAN, 6), "nan");
        assert_eq!(format_general(f64::INFINITY, 6), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY, 6), "-inf");
    }
}
