//! Error types for the `domain` layer.
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur while relaying a request.
/// The `source` field is used to hold the original error that caused the domain error.
/// `web` matches on the `error_kind` tree to pick the HTTP status and message returned
/// to the client.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Errors raised locally, before or without talking to the upstream API.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    /// A required input was missing or empty. Carries the caller-facing message.
    Validation(String),
}

/// Errors raised by the upstream family members API or the path to it.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    /// The upstream could not be reached or its body could not be read.
    Network { message: String },
    /// The upstream answered with a non-success status.
    Upstream { status: u16, message: String },
}

impl Error {
    pub fn validation(message: &str) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Validation(
                message.to_string(),
            )),
        }
    }

    /// The message a client should see for this error.
    pub fn message(&self) -> &str {
        match &self.error_kind {
            DomainErrorKind::Internal(InternalErrorKind::Validation(message))
            | DomainErrorKind::External(ExternalErrorKind::Network { message })
            | DomainErrorKind::External(ExternalErrorKind::Upstream { message, .. }) => message,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
