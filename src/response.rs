//! Response and outcome types for backend action dispatch.
//!
//! A dispatched action either produces an [`ActionResponse`] that must be
//! sent to the client verbatim, or nothing. The listener never sends bytes
//! itself; it reports an [`Outcome`] and the host-framework adapter turns
//! `Interrupt` into the actual short-circuit of normal request handling.

use serde::Serialize;
use serde_json::Value;

/// Reason phrase for the statuses this crate emits.
#[must_use]
pub fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// An HTTP response produced by an action handler or synthesized by the
/// failure boundary.
///
/// The body is a JSON value; `Value::String` bodies are rendered as plain
/// text by the host adapter, everything else as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Value,
}

impl ActionResponse {
    /// Create a plain-text response.
    #[must_use]
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: Value::String(body.to_string()),
        }
    }

    /// Create a JSON response.
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// The fixed response substituted for any dispatch failure.
    #[must_use]
    pub fn bad_request() -> Self {
        Self::text(400, "Bad Request")
    }
}

/// Result of running the public listener entry point.
///
/// `Interrupt` instructs the host framework to abort normal processing and
/// emit the carried response directly to the client. `Continue` means the
/// listener has nothing to say and normal handling proceeds.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Proceed with normal request handling.
    Continue,
    /// Abort normal handling and send this response verbatim.
    Interrupt(ActionResponse),
}

impl Outcome {
    /// True when the outcome carries a response.
    #[inline]
    #[must_use]
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Outcome::Interrupt(_))
    }

    /// The carried response, if any.
    #[must_use]
    pub fn response(&self) -> Option<&ActionResponse> {
        match self {
            Outcome::Interrupt(resp) => Some(resp),
            Outcome::Continue => None,
        }
    }
}

impl From<Option<ActionResponse>> for Outcome {
    fn from(resp: Option<ActionResponse>) -> Self {
        match resp {
            Some(resp) => Outcome::Interrupt(resp),
            None => Outcome::Continue,
        }
    }
}
