//! Response adapter.
//!
//! Maps the outcome of a generation call onto a status, content type and
//! body that any transport can write out unchanged.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{FibError, FibResult};
use crate::request::parse_query;
use crate::sequence::Sequence;

/// Content type of a successful response.
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Content type of an error response.
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

const ENCODING_FAILED: &str = "Error encoding response";

/// HTTP statuses produced by the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    InternalServerError,
}

impl Status {
    /// Numeric status code.
    pub fn code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
            Status::InternalServerError => 500,
        }
    }

    /// Canonical reason phrase.
    pub fn reason(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::MethodNotAllowed => "Method Not Allowed",
            Status::InternalServerError => "Internal Server Error",
        }
    }

    pub fn is_success(&self) -> bool {
        *self == Status::Ok
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

/// A transport-independent response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status: Status,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    /// A JSON body with status 200. A trailing newline is appended.
    pub fn json(mut body: String) -> Self {
        body.push('\n');
        Self {
            status: Status::Ok,
            content_type: CONTENT_TYPE_JSON,
            body,
        }
    }

    /// A plain-text error body. A trailing newline is appended.
    pub fn error(status: Status, message: impl fmt::Display) -> Self {
        Self {
            status,
            content_type: CONTENT_TYPE_TEXT,
            body: format!("{}\n", message),
        }
    }

    /// Response for a path the server does not route.
    pub fn not_found() -> Self {
        Self::error(Status::NotFound, "404 page not found")
    }

    /// Response for an unsupported request method.
    pub fn method_not_allowed() -> Self {
        Self::error(Status::MethodNotAllowed, "Method not allowed")
    }
}

impl From<FibError> for Response {
    fn from(err: FibError) -> Self {
        match err {
            FibError::Encoding(_) => Response::error(err.status(), ENCODING_FAILED),
            _ => Response::error(err.status(), &err),
        }
    }
}

/// Builds the response for a generation outcome.
pub fn respond(result: FibResult<Sequence>) -> Response {
    match result.and_then(|seq| seq.to_json()) {
        Ok(body) => Response::json(body),
        Err(err) => err.into(),
    }
}

/// Parses `query`, generates and builds the response in one step.
///
/// # Example
///
/// ```rust
/// use fibseq::response::{handle_query, Status};
///
/// let res = handle_query("n=10");
/// assert_eq!(res.status, Status::Ok);
/// assert_eq!(res.body, "[0,1,1,2,3,5,8]\n");
/// ```
pub fn handle_query(query: &str) -> Response {
    respond(parse_query(query).and_then(|bounds| bounds.generate()))
}
