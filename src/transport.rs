//! Request and reply types of the HTTP dispatch routine.

use crate::models::Wire;
use crate::{Error, Result};
use serde_json::Value;
use std::fmt;

/// HTTP verbs used by the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

impl Method {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        })
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    /// Sent as `application/json`.
    Json(Value),
    /// Sent verbatim, e.g. a base64-encoded audio file.
    Encoded(String),
}

impl Payload {
    /// Encode a record as a JSON body.
    pub fn record<T: Wire>(record: &T) -> Result<Self> {
        Ok(Payload::Json(record.to_wire()?))
    }
}

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json(Value),
    /// The body was not JSON (plain identifiers, links, empty bodies).
    Text(String),
}

impl Reply {
    pub(crate) fn from_body(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => Reply::Json(value),
            Err(_) => Reply::Text(body),
        }
    }

    /// The JSON value, failing on a text reply.
    pub fn into_json(self) -> Result<Value> {
        match self {
            Reply::Json(value) => Ok(value),
            Reply::Text(text) => Err(Error::ResponseParse(format!(
                "expected JSON, got text: {text:?}"
            ))),
        }
    }

    /// Map the reply through a record's inbound mapping.
    pub fn into_record<T: Wire>(self) -> Result<T> {
        T::from_wire(self.into_json()?)
    }

    /// Map a JSON array reply into records.
    pub fn into_records<T: Wire>(self) -> Result<Vec<T>> {
        match self.into_json()? {
            Value::Array(items) => items.into_iter().map(T::from_wire).collect(),
            other => Err(Error::ResponseParse(format!(
                "expected a JSON array, got {other}"
            ))),
        }
    }

    /// The reply as a string: a JSON string is unquoted, text is kept as is,
    /// any other JSON value is rendered.
    pub fn into_text(self) -> String {
        match self {
            Reply::Json(Value::String(text)) | Reply::Text(text) => text,
            Reply::Json(value) => value.to_string(),
        }
    }
}
