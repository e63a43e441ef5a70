//! Display formatting for calculation results.
//!
//! Output is locale-independent and fits a 15-character display: ordinary
//! magnitudes keep up to 10 significant digits, everything else switches to
//! exponential notation with 6 fractional digits (`1.234568e+20`).

/// Shown in place of NaN.
pub const ERROR_SENTINEL: &str = "Error";

pub const SIGNIFICANT_DIGITS: usize = 10;
pub const EXPONENT_FRACTION_DIGITS: usize = 6;
pub const MAX_DISPLAY_LEN: usize = 15;

const LARGE_THRESHOLD: f64 = 1e15;
const SMALL_THRESHOLD: f64 = 1e-6;

/// Format a raw result for display. Total: every f64 has a rendering.
pub fn format_result(result: f64) -> String {
    if result.is_nan() {
        return ERROR_SENTINEL.into();
    }
    if result.is_infinite() {
        return if result > 0.0 { "∞".into() } else { "-∞".into() };
    }

    let magnitude = result.abs();
    if magnitude >= LARGE_THRESHOLD || (magnitude > 0.0 && magnitude < SMALL_THRESHOLD) {
        return to_exponential(result, EXPONENT_FRACTION_DIGITS);
    }

    let rounded = to_precision(result, SIGNIFICANT_DIGITS);
    // -0 displays as 0
    let formatted = if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    };

    if formatted.chars().count() > MAX_DISPLAY_LEN {
        to_exponential(result, EXPONENT_FRACTION_DIGITS)
    } else {
        formatted
    }
}

/// Exponential notation with a fixed number of fractional digits and an
/// explicitly signed exponent: `-1.500000e+3`, `2.000000e-7`.
///
/// Ties round away from zero: `to_exponential(2.5, 0)` is `3e+0`.
pub fn to_exponential(x: f64, fraction_digits: usize) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let (digits, exp) = round_significant(x, fraction_digits + 1);
    let sign = if x < 0.0 { "-" } else { "" };
    let (lead, rest) = digits.split_at(1);
    let exp_sign = if exp < 0 { '-' } else { '+' };
    if rest.is_empty() {
        format!("{sign}{lead}e{exp_sign}{}", exp.abs())
    } else {
        format!("{sign}{lead}.{rest}e{exp_sign}{}", exp.abs())
    }
}

/// Round `x` to `digits` significant decimal digits, ties away from zero.
pub fn to_precision(x: f64, digits: usize) -> f64 {
    if !x.is_finite() || x == 0.0 || digits == 0 {
        return x;
    }
    let (kept, exp) = round_significant(x, digits);
    let sign = if x < 0.0 { "-" } else { "" };
    let scale = exp - (kept.len() as i32 - 1);
    format!("{sign}{kept}e{scale}").parse().unwrap_or(x)
}

/// Enough fractional digits to print any finite f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 767;

/// The first `digits` significant decimal digits of `|x|`, rounded half away
/// from zero on the exact expansion, and the decimal exponent of the first.
fn round_significant(x: f64, digits: usize) -> (String, i32) {
    let exact = format!("{:.*e}", EXACT_FRACTION_DIGITS, x.abs());
    let (mantissa, exp) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exp: i32 = exp.parse().unwrap_or(0);

    let all: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let mut kept = all[..digits.min(all.len())].to_vec();

    if all.get(digits).is_some_and(|d| *d >= b'5') {
        let mut i = kept.len();
        loop {
            if i == 0 {
                // all nines: 9.99 -> 10.0
                kept.insert(0, b'1');
                kept.pop();
                exp += 1;
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    (kept.into_iter().map(char::from).collect(), exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_values() {
        assert_eq!(format_result(f64::NAN), "Error");
        assert_eq!(format_result(f64::INFINITY), "∞");
        assert_eq!(format_result(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_result(5.0), "5");
        assert_eq!(format_result(-42.0), "-42");
        assert_eq!(format_result(120.0), "120");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn test_ten_significant_digits() {
        assert_eq!(format_result(3.14159265358979), "3.141592654");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_result(2.5), "2.5");
    }

    #[test]
    fn test_large_values_use_exponent() {
        assert_eq!(format_result(1e20), "1.000000e+20");
        assert_eq!(format_result(1e15), "1.000000e+15");
        assert_eq!(format_result(-1.5e16), "-1.500000e+16");
        // rounds up to 1e15, whose plain form is 16 characters wide
        assert_eq!(format_result(999_999_999_999_999.0), "1.000000e+15");
    }

    #[test]
    fn test_small_values_use_exponent() {
        assert_eq!(format_result(0.0000001), "1.000000e-7");
        assert_eq!(format_result(-1.23456789e-7), "-1.234568e-7");
        assert_eq!(format_result(0.000001), "0.000001");
    }

    #[test]
    fn test_long_output_falls_back_to_exponent() {
        // 10 significant digits below 1e-4 needs more than 15 characters
        assert_eq!(format_result(0.00001234567891), "1.234568e-5");
        assert_eq!(format_result(-0.0000012345678), "-1.234568e-6");
        assert_eq!(format_result(123456.7890123), "123456.789");
    }

    #[test]
    fn test_to_exponential() {
        assert_eq!(to_exponential(1500.0, 6), "1.500000e+3");
        assert_eq!(to_exponential(0.00025, 2), "2.50e-4");
        assert_eq!(to_exponential(1.0, 0), "1e+0");
        assert_eq!(to_exponential(0.0, 6), "0.000000e+0");
        assert_eq!(to_exponential(9.9999999, 6), "1.000000e+1");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(format_result(12345678905.0), "12345678910");
        assert_eq!(format_result(-12345678905.0), "-12345678910");
        assert_eq!(format_result(64057683945.0), "64057683950");
        assert_eq!(format_result(1000000500000000.0), "1.000001e+15");
        assert_eq!(to_exponential(2.5, 0), "3e+0");
        assert_eq!(to_exponential(-2.5, 0), "-3e+0");
        assert_eq!(to_precision(0.125, 2), 0.13);
    }

    #[test]
    fn test_near_ties_use_exact_value() {
        // 0.15 is stored just below the tie
        assert_eq!(to_precision(0.15, 1), 0.1);
        // 1.005 too
        assert_eq!(to_exponential(1.005, 2), "1.00e+0");
    }

    #[test]
    fn test_to_precision() {
        assert_eq!(to_precision(123456789.987, 4), 123500000.0);
        assert_eq!(to_precision(0.000123456, 2), 0.00012);
        assert_eq!(to_precision(0.0, 10), 0.0);
    }
}
