/// Why an input could not be turned into a distance.
///
/// Both variants are presentational: a renderer turns them into a message for the
/// output surface. Neither is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("input is empty")]
    EmptyInput,
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}
