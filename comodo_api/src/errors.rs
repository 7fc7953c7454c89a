//! Error types for the API adapter.

use crate::dispatch::{Operation, Resource};

/// Errors raised by the adapter. Each failed call produces exactly one of
/// these; retry and batch-continuation policy belong to the caller.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to initialize HTTP transport")]
    Init(#[source] reqwest::Error),
    /// The transport failed before a usable response was received.
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The API answered with a non-success status. `reason` carries the
    /// `$E` envelope message when the body has one, otherwise a body snippet.
    #[error("{method} {url} returned {status}: {reason}")]
    Api {
        method: String,
        url: String,
        status: u16,
        reason: String,
    },
    /// The configured base URL or a derived request URL is invalid.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    /// A required operation parameter was not supplied.
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),
    /// An operation parameter was supplied with an unusable type.
    #[error("parameter `{0}` has the wrong type")]
    ParameterType(&'static str),
    /// The (resource, operation) pair has no endpoint mapping.
    #[error("{resource:?} does not support {operation:?}")]
    Unsupported {
        resource: Resource,
        operation: Operation,
    },
}
