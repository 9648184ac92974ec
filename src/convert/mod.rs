// Kilometer to mile conversion: parsing, the conversion itself and display formatting

pub mod converter;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod types;

pub use converter::{convert, Converter, KM_TO_MILES};
pub use detector::{is_decimal_literal, parse_prefix, parse_strict};
pub use error::ConvertError;
pub use formatter::{to_fixed, Renderer};
pub use types::{Distance, Outcome, ParseMode};
