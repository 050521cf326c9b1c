use thiserror::Error;

/// Errors raised at the edges of the coloring core.
///
/// The pipeline itself is total; these only come from parsing caller input
/// and validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringError {
    /// A date string is neither `YYYY-MM-DD` nor an ISO-8601 datetime.
    #[error("invalid order date `{0}`")]
    InvalidDate(String),
    /// A configuration field is out of range.
    #[error("invalid coloring config: {0}")]
    InvalidConfig(String),
}
