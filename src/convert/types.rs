use serde::{Deserialize, Serialize};

/// A successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Distance {
    /// Parsed input value in kilometers
    pub kilometers: f64,
    /// `kilometers * KM_TO_MILES`
    pub miles: f64,
}

/// How the raw input string is read as a number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// The whole (trimmed) input must be a decimal literal
    #[default]
    Strict,
    /// Longest numeric prefix, NaN when there is none (browser `parseFloat`)
    Legacy,
}

/// Tagged, serializable result of one conversion, including what gets displayed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ok {
        kilometers: f64,
        miles: f64,
        display: String,
    },
    EmptyInput {
        display: String,
    },
    InvalidNumber {
        input: String,
        display: String,
    },
}

impl Outcome {
    pub fn display(&self) -> &str {
        match self {
            Outcome::Ok { display, .. }
            | Outcome::EmptyInput { display }
            | Outcome::InvalidNumber { display, .. } => display,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok { .. })
    }
}
