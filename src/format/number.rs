use crate::config::FormatConfig;

const MAX_ACCURACY: u32 = 340;

fn integer_string(value: f64) -> String {
    let text = format!("{:.0}", value);
    if text == "-0" {
        return "0".into();
    }
    text
}

/// Text form of `value` keeping `accuracy` decimals.
///
/// The value is rounded to `accuracy` decimals, which absorbs float noise such
/// as `0.7999999999999999`. A result within `10^(1 - accuracy)` of an integer
/// is printed as that integer, carrying through any run of trailing nines
/// (`2.999999999` gives `3`). With `pad_sign` a non-negative result gets a
/// leading space.
pub fn format_number(value: f64, accuracy: u32, pad_sign: bool) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // no f64 has meaningful digits this far past the point
    let accuracy = accuracy.min(MAX_ACCURACY) as i32;
    let scale = 10f64.powi(accuracy);
    let tolerance = 10f64.powi(1 - accuracy);

    let scaled = value * scale;
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    };

    let fraction = rounded.fract().abs();
    let text = if fraction <= tolerance {
        integer_string(rounded.trunc())
    } else if 1.0 - fraction <= tolerance {
        integer_string(rounded.round())
    } else {
        rounded.to_string()
    };

    if pad_sign && !text.starts_with('-') {
        return format!(" {}", text);
    }
    text
}

pub fn format_with(value: f64, config: &FormatConfig) -> String {
    format_number(value, config.accuracy, config.pad_sign)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_integers() {
        assert_eq!(format_number(2.999999999, 8, false), "3");
        assert_eq!(format_number(1.0000000001, 8, false), "1");
        assert_eq!(format_number(0.999999999, 8, false), "1");
        assert_eq!(format_number(9.99999999999, 8, false), "10");
        assert_eq!(format_number(-2.999999999, 8, false), "-3");
        assert_eq!(format_number(-0.0000000001, 8, false), "0");
        assert_eq!(format_number(1e-9, 8, false), "0");
        assert_eq!(format_number(42.0, 8, false), "42");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(-0.5, 8, false), "-0.5");
        assert_eq!(format_number(0.8, 8, false), "0.8");
        assert_eq!(format_number(0.7999999999999999, 8, false), "0.8");
        assert_eq!(format_number(2.9999994, 8, false), "2.9999994");
        assert_eq!(format_number(1.23456789123, 8, false), "1.23456789");
        assert_eq!(format_number(3.14159, 2, false), "3.14");
    }

    #[test]
    fn test_pad_sign() {
        assert_eq!(format_number(0.5, 8, true), " 0.5");
        assert_eq!(format_number(3.0, 8, true), " 3");
        assert_eq!(format_number(-0.5, 8, true), "-0.5");
        assert_eq!(format_number(-1e-12, 8, true), " 0");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(format_number(f64::NAN, 8, false), "NaN");
        assert_eq!(format_number(f64::INFINITY, 8, false), "inf");
        assert_eq!(format_number(1e301, 8, false), format!("{:.0}", 1e301));
    }

    #[test]
    fn test_huge_accuracy() {
        assert_eq!(format_number(2.5, 2_147_483_648, false), "2.5");
        assert_eq!(format_number(-0.125, u32::MAX, true), "-0.125");
        assert_eq!(format_number(3.0, u32::MAX, true), " 3");
    }

    #[test]
    fn test_format_with() {
        let config = FormatConfig::default().with_pad_sign(true);
        assert_eq!(format_with(2.5, &config), " 2.5");
        assert_eq!(format_with(2.5, &config.with_accuracy(0)), " 3");
    }
}
