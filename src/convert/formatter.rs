use crate::config::Config;
use crate::convert::error::ConvertError;
use crate::convert::types::{Distance, Outcome};

/// Decimal places shown when nothing else is configured
pub const DEFAULT_PRECISION: usize = 2;

/// Largest precision `to_fixed` accepts
pub const MAX_PRECISION: usize = 100;

pub const MILES_SUFFIX: &str = " Miles";
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a value";
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number";

/// Format a number with exactly `digits` decimal places, the way the browser's
/// `Number.prototype.toFixed` does.
///
/// NaN and infinities print as "NaN" / "Infinity" / "-Infinity", negative zero prints
/// without a sign, exact ties round away from zero and magnitudes of 1e21 and above
/// fall back to exponential notation ("1e+21").
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= 1e21 {
        return exponential(value);
    }
    if value == 0.0 {
        // Also catches -0.0
        return format!("{:.*}", digits, 0.0);
    }

    round_tie_away(value, digits).unwrap_or_else(|| format!("{:.*}", digits, value))
}

/// Exact binary ties (0.125 at two digits, 2.5 at zero) round away from zero.
///
/// `v` is a tie at `digits` places iff `v * 2^(digits + 1)` is an odd integer. Its decimal
/// expansion then ends after exactly `digits + 1` places with a 5, so printing that many
/// places is exact and the rounding is done on the digits.
fn round_tie_away(value: f64, digits: usize) -> Option<String> {
    let exp = i32::try_from(digits + 1).ok()?;
    let k = value.abs() * 2f64.powi(exp);
    if !k.is_finite() || k.fract() != 0.0 || k % 2.0 != 1.0 {
        return None;
    }

    let exact = format!("{:.*}", digits + 1, value.abs());
    let mut kept = exact.strip_suffix('5')?.as_bytes().to_vec();
    if kept.last() == Some(&b'.') {
        kept.pop();
    }

    // Add one unit in the last kept place, carrying through nines
    let mut carry = true;
    for digit in kept.iter_mut().rev() {
        match *digit {
            b'.' => continue,
            b'9' => *digit = b'0',
            _ => {
                *digit += 1;
                carry = false;
                break;
            }
        }
    }
    if carry {
        kept.insert(0, b'1');
    }

    let sign = if value < 0.0 { "-" } else { "" };
    Some(format!("{}{}", sign, String::from_utf8(kept).ok()?))
}

fn exponential(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Turns conversion results into the text shown on the output surface
#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    precision: usize,
    suffix: String,
    empty_message: String,
    invalid_message: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            suffix: MILES_SUFFIX.to_string(),
            empty_message: EMPTY_INPUT_MESSAGE.to_string(),
            invalid_message: INVALID_NUMBER_MESSAGE.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            precision: config.precision,
            suffix: config.suffix.clone(),
            empty_message: config.messages.empty_input.clone(),
            invalid_message: config.messages.invalid_number.clone(),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// "<miles to precision><suffix>", e.g. "6.21 Miles"
    pub fn format_distance(&self, distance: &Distance) -> String {
        format!("{}{}", to_fixed(distance.miles, self.precision), self.suffix)
    }

    /// The display string for a conversion result. Always exactly one of the
    /// formatted distance or an error message.
    pub fn render(&self, result: &Result<Distance, ConvertError>) -> String {
        match result {
            Ok(distance) => self.format_distance(distance),
            Err(ConvertError::EmptyInput) => self.empty_message.clone(),
            Err(ConvertError::InvalidNumber(_)) => self.invalid_message.clone(),
        }
    }

    /// Build the tagged outcome, display string included
    pub fn outcome(&self, result: Result<Distance, ConvertError>) -> Outcome {
        let display = self.render(&result);
        match result {
            Ok(distance) => Outcome::Ok {
                kilometers: distance.kilometers,
                miles: distance.miles,
                display,
            },
            Err(ConvertError::EmptyInput) => Outcome::EmptyInput { display },
            Err(ConvertError::InvalidNumber(input)) => Outcome::InvalidNumber { input, display },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_plain_values() {
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(0.621371, 2), "0.62");
        assert_eq!(to_fixed(6.21371, 2), "6.21");
        assert_eq!(to_fixed(62.1371, 2), "62.14");
        assert_eq!(to_fixed(-3.14159, 3), "-3.142");
        assert_eq!(to_fixed(7.0, 0), "7");
    }

    #[test]
    fn test_to_fixed_negative_zero() {
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        // Small negatives keep their sign, as in the browser
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
    }

    #[test]
    fn test_to_fixed_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.25, 1), "0.3");
        // Not a tie in binary: 1.005 is stored slightly below
        assert_eq!(to_fixed(1.005, 2), "1.00");
        // 0.25 is exact at two digits
        assert_eq!(to_fixed(0.25, 2), "0.25");
        // Carry into the integer part
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(0.9375, 3), "0.938");
    }

    #[test]
    fn test_to_fixed_ties_at_high_precision() {
        // 2^-61 = 4.336808689942017736029811203479766845703125e-19, a tie at 60 places
        let expected = format!(
            "0.{}{}",
            "0".repeat(18),
            "433680868994201773602981120347976684570313"
        );
        assert_eq!(to_fixed(2f64.powi(-61), 60), expected);
        assert_eq!(to_fixed(-(2f64.powi(-61)), 60), format!("-{}", expected));
    }

    #[test]
    fn test_to_fixed_non_finite() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }

    #[test]
    fn test_to_fixed_large_values() {
        assert_eq!(to_fixed(1e21, 2), "1e+21");
        assert_eq!(to_fixed(-1.5e22, 2), "-1.5e+22");
        assert_eq!(to_fixed(1e20, 2), "100000000000000000000.00");
    }

    #[test]
    fn test_render() {
        let renderer = Renderer::new();
        let distance = Distance {
            kilometers: 10.0,
            miles: 6.21371,
        };

        assert_eq!(renderer.render(&Ok(distance)), "6.21 Miles");
        assert_eq!(
            renderer.render(&Err(ConvertError::EmptyInput)),
            "Please enter a value"
        );
        assert_eq!(
            renderer.render(&Err(ConvertError::InvalidNumber("abc".to_string()))),
            "Please enter a valid number"
        );
    }

    #[test]
    fn test_outcome_carries_display() {
        let renderer = Renderer::new();
        let outcome = renderer.outcome(Err(ConvertError::InvalidNumber("abc".to_string())));

        assert!(!outcome.is_ok());
        assert_eq!(outcome.display(), "Please enter a valid number");
        assert!(matches!(outcome, Outcome::InvalidNumber { ref input, .. } if input == "abc"));
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let renderer = Renderer::new();
        let outcome = renderer.outcome(Ok(Distance {
            kilometers: 1.0,
            miles: 0.621371,
        }));

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["kilometers"], 1.0);
        assert_eq!(json["display"], "0.62 Miles");

        let json = serde_json::to_value(renderer.outcome(Err(ConvertError::EmptyInput))).unwrap();
        assert_eq!(json["status"], "empty_input");
        assert_eq!(json["display"], "Please enter a value");
    }
}
