//! Message-only error value.

/// An error that renders as exactly the message it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{0}")]
pub struct ErrorString(String);

impl ErrorString {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<String> for ErrorString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ErrorString {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Create an error whose message is `text`.
#[must_use]
pub fn new(text: impl Into<String>) -> ErrorString {
    ErrorString(text.into())
}
