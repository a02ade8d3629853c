//! Errors raised while compiling or running a user pattern

/// A pattern the regex engine refused
///
/// The message is the engine's own diagnostic and is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The pattern is not valid syntax
    #[error("{message}")]
    Compile { message: String },
    /// The pattern compiled but matching gave up (e.g. backtrack limit)
    #[error("{message}")]
    Runtime { message: String },
}

impl PatternError {
    pub fn message(&self) -> &str {
        match self {
            PatternError::Compile { message } | PatternError::Runtime { message } => message,
        }
    }
}

impl From<fancy_regex::Error> for PatternError {
    fn from(err: fancy_regex::Error) -> Self {
        let message = err.to_string();
        match err {
            fancy_regex::Error::RuntimeError(_) => PatternError::Runtime { message },
            _ => PatternError::Compile { message },
        }
    }
}
