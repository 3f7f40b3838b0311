//! # Call Failures
//!
//! Every remote call either returns its reply or a [`Status`]: a failure kind
//! ([`Code`]) plus a human readable message. Services keep their own richer
//! error enums internally and convert into `Status` at the boundary, so a
//! caller always sees the same small set of failure kinds regardless of which
//! service (or which transport) produced them.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The failure kinds a call can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    /// Requested id is absent from the owning store.
    NotFound,
    /// A uniqueness rule was violated.
    AlreadyExists,
    /// An upstream reference could not be validated through a dependency.
    InvalidArgument,
    /// A state-dependent business rule was violated.
    FailedPrecondition,
    /// A downstream mutation failed after local work was already committed.
    Internal,
    /// The target service could not be reached. Only transports produce this.
    Unavailable,
}

impl Code {
    /// HTTP status used by the JSON transport for this failure kind.
    pub fn http_status(self) -> u16 {
        match self {
            Code::NotFound => 404,
            Code::AlreadyExists => 409,
            Code::InvalidArgument => 400,
            Code::FailedPrecondition => 412,
            Code::Internal => 500,
            Code::Unavailable => 503,
        }
    }

    /// Best-effort inverse of [`Code::http_status`], for error bodies that
    /// could not be decoded.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            404 => Code::NotFound,
            409 => Code::AlreadyExists,
            400 => Code::InvalidArgument,
            412 => Code::FailedPrecondition,
            502..=504 => Code::Unavailable,
            _ => Code::Internal,
        }
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Code::NotFound => "NotFound",
            Code::AlreadyExists => "AlreadyExists",
            Code::InvalidArgument => "InvalidArgument",
            Code::FailedPrecondition => "FailedPrecondition",
            Code::Internal => "Internal",
            Code::Unavailable => "Unavailable",
        };
        f.write_str(name)
    }
}

/// A typed call failure as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct Status {
    pub code: Code,
    pub message: String,
}

impl Status {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Code::NotFound, message)
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(Code::AlreadyExists, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Code::InvalidArgument, message)
    }

    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::new(Code::FailedPrecondition, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Code::Internal, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(Code::Unavailable, message)
    }

    /// Reported by typed clients when a reply variant does not belong to the
    /// operation that was called.
    pub fn unexpected_reply(operation: &str, reply: &impl fmt::Debug) -> Self {
        Self::internal(format!("unexpected reply to {operation}: {reply:?}"))
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
