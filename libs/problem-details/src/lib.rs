//! RFC 9457 Problem Details for HTTP APIs
//!
//! Pure data types with no dependency on an HTTP framework:
//! - `ProblemDetails`, the error payload shape
//! - status-class constructors (`internal_server_error`, `not_found_error`,
//!   `bad_request`, `bad_gateway`)
//! - `ErrorString`, a lightweight message-only error
//!
//! The `axum` feature makes `ProblemDetails` usable directly as a response.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod constructors;
pub mod problem;
pub mod string_error;

#[cfg(feature = "axum")]
mod response;

pub use constructors::{bad_gateway, bad_request, internal_server_error, not_found_error};
pub use problem::{ABOUT_BLANK, APPLICATION_PROBLEM_JSON, NIL, ProblemDetails, render};
pub use string_error::{ErrorString, new};

/// Result type for handlers that fail with a problem payload.
///
/// Any error convertible into `ProblemDetails` can be propagated with `?`.
pub type ApiResult<T = ()> = Result<T, ProblemDetails>;

/// Attach the occurrence URI to a problem before it leaves the handler.
pub fn finalize(p: ProblemDetails, instance: &str) -> ProblemDetails {
    p.with_instance(instance)
}
