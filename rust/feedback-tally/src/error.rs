use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackTallyError {
    /// A string key did not name any of the fixed feedback categories
    #[error("Unknown feedback category: {0}")]
    UnknownCategory(String),

    /// A string did not name any of the supported label tables
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}
