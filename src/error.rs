//! Error type shared by every portal operation.

use crate::models::ErrorInfo;

/// Code reported for failures that never produced a portal response.
pub(crate) const FALLBACK_CODE: i64 = 500;

pub(crate) const CONNECTION_ERROR: &str = "Connection error";
pub(crate) const SERVER_ERROR: &str = "Server error";

/// Errors returned by [`Client`](crate::Client) operations.
///
/// Every variant reports a numeric [`code`](Error::code) and a
/// [`description`](Error::description), so callers can handle the whole enum
/// the same way and only match on variants when they care about the cause.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The portal answered with a status above 204, or could not be reached
    /// at all (connect failure or timeout, reported with code 500).
    #[error("portal error {code}: {description}")]
    Api { code: i64, description: String },

    /// The HTTP request failed for a reason other than connecting.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// A JSON payload did not match the expected record shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response had the wrong shape for the operation (e.g. text where
    /// JSON was expected).
    #[error("failed to parse response: {0}")]
    ResponseParse(String),

    /// The configured base URL, or a URL built from it, is not valid.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The API token cannot be sent as an HTTP header value.
    #[error("invalid API token header value")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Reading a local file for upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Numeric error code. Portal errors carry the code the portal sent;
    /// everything else reports 500.
    pub fn code(&self) -> i64 {
        match self {
            Error::Api { code, .. } => *code,
            _ => FALLBACK_CODE,
        }
    }

    /// Human-readable description of the failure.
    pub fn description(&self) -> String {
        match self {
            Error::Api { description, .. } => description.clone(),
            other => other.to_string(),
        }
    }

    pub(crate) fn connection() -> Self {
        Error::Api {
            code: FALLBACK_CODE,
            description: CONNECTION_ERROR.to_string(),
        }
    }

    /// Build an API error from a failed response body.
    ///
    /// A numeric `errorCode` (or a string holding a number) wins over the
    /// HTTP status; a textual `errorCode` becomes the description when the
    /// body has none.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorInfo>(body).ok();
        let info = parsed.clone().unwrap_or_default();
        let numeric = info.error_code.as_ref().and_then(|c| c.as_number());

        let description = match (&info.description, &info.error_code) {
            (Some(description), _) => description.clone(),
            (None, Some(code)) if numeric.is_none() => code.to_string(),
            _ if parsed.is_none() && !body.trim().is_empty() => body.trim().to_string(),
            _ => SERVER_ERROR.to_string(),
        };

        Error::Api {
            code: numeric.unwrap_or(i64::from(status)),
            description,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Error::connection()
        } else {
            Error::Request(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_error_code_overrides_status() {
        let err = Error::from_response(400, r#"{"errorCode": 1001, "description": "bad pattern"}"#);
        assert_eq!(err.code(), 1001);
        assert_eq!(err.description(), "bad pattern");
    }

    #[test]
    fn numeric_string_error_code_is_parsed() {
        let err = Error::from_response(404, r#"{"errorCode": "42", "description": "missing"}"#);
        assert_eq!(err.code(), 42);
    }

    #[test]
    fn textual_error_code_falls_back_to_status() {
        let err = Error::from_response(404, r#"{"errorCode": "NotFound"}"#);
        assert_eq!(err.code(), 404);
        assert_eq!(err.description(), "NotFound");
    }

    #[test]
    fn plain_text_body_becomes_description() {
        let err = Error::from_response(502, "Bad Gateway");
        assert_eq!(err.code(), 502);
        assert_eq!(err.description(), "Bad Gateway");
    }

    #[test]
    fn empty_json_object_uses_generic_description() {
        let err = Error::from_response(409, "{}");
        assert_eq!(err.code(), 409);
        assert_eq!(err.description(), SERVER_ERROR);
    }

    #[test]
    fn empty_body_uses_generic_description() {
        let err = Error::from_response(500, "");
        assert_eq!(err.code(), 500);
        assert_eq!(err.description(), SERVER_ERROR);
    }

    #[test]
    fn connection_error_has_fixed_code() {
        let err = Error::connection();
        assert_eq!(err.code(), 500);
        assert_eq!(err.description(), CONNECTION_ERROR);
    }
}
