//! RFC 9457 Problem Details for HTTP APIs (pure data model, no HTTP framework dependencies)

use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Problem type assumed by RFC 9457 when `type` is absent.
pub const ABOUT_BLANK: &str = "about:blank";

/// Rendering of a missing problem.
pub const NIL: &str = "<nil>";

/// RFC 9457 Problem Details for HTTP APIs.
///
/// A plain value: every field is always present, unset fields hold their
/// zero value. No validation happens on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(
    feature = "utoipa",
    schema(
        title = "ProblemDetails",
        description = "RFC 9457 Problem Details for HTTP APIs"
    )
)]
#[must_use]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type.
    /// Left empty by the status-class constructors.
    #[serde(rename = "type", default)]
    pub type_url: String,
    /// The HTTP status code for this occurrence of the problem.
    #[serde(default)]
    pub status: u16,
    /// A short, human-readable summary of the problem type.
    #[serde(default)]
    pub title: String,
    /// A human-readable explanation specific to this occurrence of the problem.
    #[serde(default)]
    pub detail: String,
    /// A URI reference that identifies the specific occurrence of the problem.
    #[serde(default)]
    pub instance: String,
}

impl ProblemDetails {
    /// Create a problem with the given status, title and detail.
    /// `type` and `instance` stay empty.
    pub fn new(status: u16, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: String::new(),
            status,
            title: title.into(),
            detail: detail.into(),
            instance: String::new(),
        }
    }

    /// Build a problem whose `detail` is the verbatim message of `err`.
    pub fn from_error<E>(status: StatusCode, err: &E, title: impl Into<String>) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(status.as_u16(), title, err.to_string())
    }

    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = type_url.into();
        self
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Typed view of `status`; `None` when it is not a valid HTTP status code.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status).ok()
    }

    /// The problem type, or `about:blank` when none was set.
    #[must_use]
    pub fn type_or_default(&self) -> &str {
        if self.type_url.is_empty() {
            ABOUT_BLANK
        } else {
            &self.type_url
        }
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_some_and(|s| s.is_client_error())
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_some_and(|s| s.is_server_error())
    }
}

impl fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error: {}, Title: {}, Detail: {}, Instance: {}",
            self.type_url, self.title, self.detail, self.instance
        )
    }
}

impl std::error::Error for ProblemDetails {}

/// Render a possibly missing problem; `None` renders as `<nil>`.
#[must_use]
pub fn render(problem: Option<&ProblemDetails>) -> String {
    problem.map_or_else(|| NIL.to_owned(), ToString::to_string)
}
