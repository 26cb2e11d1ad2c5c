//! Shortcuts for the common status classes.
//!
//! Each takes the underlying error and a title; `detail` is the error's
//! message verbatim, `type` and `instance` are left empty for the caller.

use http::StatusCode;

use crate::problem::ProblemDetails;

/// 500 Internal Server Error.
pub fn internal_server_error<E>(err: &E, title: impl Into<String>) -> ProblemDetails
where
    E: std::error::Error + ?Sized,
{
    ProblemDetails::from_error(StatusCode::INTERNAL_SERVER_ERROR, err, title)
}

/// 404 Not Found.
pub fn not_found_error<E>(err: &E, title: impl Into<String>) -> ProblemDetails
where
    E: std::error::Error + ?Sized,
{
    ProblemDetails::from_error(StatusCode::NOT_FOUND, err, title)
}

/// 400 Bad Request.
pub fn bad_request<E>(err: &E, title: impl Into<String>) -> ProblemDetails
where
    E: std::error::Error + ?Sized,
{
    ProblemDetails::from_error(StatusCode::BAD_REQUEST, err, title)
}

/// 502 Bad Gateway.
pub fn bad_gateway<E>(err: &E, title: impl Into<String>) -> ProblemDetails
where
    E: std::error::Error + ?Sized,
{
    ProblemDetails::from_error(StatusCode::BAD_GATEWAY, err, title)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::string_error::new;

    fn assert_shape(p: &ProblemDetails, status: u16, title: &str, detail: &str) {
        assert_eq!(p.status, status);
        assert_eq!(p.title, title);
        assert_eq!(p.detail, detail);
        assert!(p.type_url.is_empty());
        assert!(p.instance.is_empty());
    }

    #[test]
    fn each_constructor_sets_its_status() {
        let err = new("db unreachable");

        assert_shape(&internal_server_error(&err, "Oops"), 500, "Oops", "db unreachable");
        assert_shape(&not_found_error(&err, "Missing"), 404, "Missing", "db unreachable");
        assert_shape(&bad_request(&err, "Invalid"), 400, "Invalid", "db unreachable");
        assert_shape(&bad_gateway(&err, "Upstream"), 502, "Upstream", "db unreachable");
    }

    #[test]
    fn bad_request_out_of_credit() {
        let p = bad_request(&new("insufficient funds"), "Out of credit");
        assert_eq!(
            p,
            ProblemDetails {
                type_url: String::new(),
                status: 400,
                title: "Out of credit".to_owned(),
                detail: "insufficient funds".to_owned(),
                instance: String::new(),
            }
        );
    }

    #[test]
    fn detail_is_copied_verbatim() {
        let msg = "  line one\nline two: \u{2713}  ";
        let p = internal_server_error(&new(msg), "");
        assert_eq!(p.detail, msg);
        assert!(p.title.is_empty());
    }

    #[test]
    fn accepts_trait_objects() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(new("timeout"));
        let p = bad_gateway(err.as_ref(), "Upstream timeout");
        assert_eq!(p.detail, "timeout");
        assert_eq!(p.status, 502);
    }

    #[test]
    fn accepts_std_errors() {
        let err = "abc".parse::<u32>().unwrap_err();
        let p = bad_request(&err, "Invalid number");
        assert_eq!(p.detail, err.to_string());
    }

    #[test]
    fn identical_inputs_give_equal_values() {
        let err = new("gone");
        assert_eq!(not_found_error(&err, "Not Found"), not_found_error(&err, "Not Found"));
    }
}
