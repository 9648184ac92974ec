use crate::convert::detector::{parse_prefix, parse_strict};
use crate::convert::error::ConvertError;
use crate::convert::types::{Distance, ParseMode};

/// Kilometers to miles
pub const KM_TO_MILES: f64 = 0.621371;

/// Converts raw kilometer input into a distance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    mode: ParseMode,
}

impl Converter {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Convert a kilometer string to miles.
    ///
    /// The empty string is always `EmptyInput`. What counts as a number depends on the
    /// parse mode: `Strict` rejects anything that is not a complete decimal literal with
    /// `InvalidNumber`, `Legacy` reads the numeric prefix and lets NaN through.
    pub fn convert(&self, input: &str) -> Result<Distance, ConvertError> {
        if input.is_empty() {
            tracing::trace!("rejecting empty input");
            return Err(ConvertError::EmptyInput);
        }

        let kilometers = match self.mode {
            ParseMode::Strict => parse_strict(input).ok_or_else(|| {
                tracing::trace!(input, "rejecting non-numeric input");
                ConvertError::InvalidNumber(input.to_string())
            })?,
            ParseMode::Legacy => parse_prefix(input),
        };

        let miles = kilometers * KM_TO_MILES;
        tracing::debug!(kilometers, miles, mode = ?self.mode, "converted");

        Ok(Distance { kilometers, miles })
    }
}

/// Convert with the default (strict) converter
pub fn convert(input: &str) -> Result<Distance, ConvertError> {
    Converter::default().convert(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_multiplies_by_factor() {
        let distance = convert("10").unwrap();
        assert_eq!(distance.kilometers, 10.0);
        assert!((distance.miles - 6.21371).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_in_both_modes() {
        for mode in [ParseMode::Strict, ParseMode::Legacy] {
            let converter = Converter::new(mode);
            assert_eq!(converter.convert(""), Err(ConvertError::EmptyInput));
        }
    }

    #[test]
    fn test_strict_rejects_non_numeric() {
        let converter = Converter::new(ParseMode::Strict);
        assert_eq!(
            converter.convert("abc"),
            Err(ConvertError::InvalidNumber("abc".to_string()))
        );
        assert_eq!(
            converter.convert("12km"),
            Err(ConvertError::InvalidNumber("12km".to_string()))
        );
        // Whitespace is not empty
        assert_eq!(
            converter.convert("   "),
            Err(ConvertError::InvalidNumber("   ".to_string()))
        );
    }

    #[test]
    fn test_legacy_lets_nan_through() {
        let converter = Converter::new(ParseMode::Legacy);
        let distance = converter.convert("abc").unwrap();
        assert!(distance.kilometers.is_nan());
        assert!(distance.miles.is_nan());
    }

    #[test]
    fn test_legacy_reads_numeric_prefix() {
        let converter = Converter::new(ParseMode::Legacy);
        assert_eq!(converter.convert("12km").unwrap().kilometers, 12.0);
        assert_eq!(converter.convert("  5").unwrap().kilometers, 5.0);
    }

    #[test]
    fn test_negative_and_fractional_input() {
        let distance = convert("-2.5").unwrap();
        assert!((distance.miles + 1.5534275).abs() < 1e-12);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ConvertError::EmptyInput.to_string(), "input is empty");
        assert_eq!(
            ConvertError::InvalidNumber("abc".to_string()).to_string(),
            "'abc' is not a valid number"
        );
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_conversion_is_logged() {
        convert("1").unwrap();
        assert!(logs_contain("converted"));
        assert!(logs_contain("kilometers=1"));
    }
}
