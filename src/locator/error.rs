//! Typed failures for locator construction, resolution, and decoding.

use thiserror::Error;

/// Errors returned by [`Locator`](super::Locator) operations.
///
/// Every variant is terminal and deterministic for its input: nothing
/// here is retryable, and a failed operation never leaves a partially
/// updated locator behind.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// Input is not syntactically a valid URL.
    #[error("invalid url: {0}")]
    Parse(#[from] url::ParseError),

    /// Scheme-less input that is not an absolute path under the active
    /// path convention.
    #[error("expected absolute path, got {0:?}")]
    ExpectedAbsolutePath(String),

    /// `file:` URL whose percent-escaped path does not decode to valid
    /// UTF-8, so no native path string can represent it.
    #[error("file url path is not valid utf-8: {0}")]
    InvalidFileUrlEncoding(#[from] std::str::Utf8Error),

    /// Scheme outside `file`/`http`/`https`.
    #[error("unsupported scheme {0}")]
    UnsupportedScheme(String),

    /// Wire form missing the required `Url` field (or it was empty).
    #[error("missing url")]
    MissingUrl,

    /// Wire form whose `File` flag disagrees with the kind re-parsed
    /// from its `Url` string.
    #[error("file flag mismatch for {url:?}: flagged as file={flagged}")]
    FileFlagMismatch { url: String, flagged: bool },
}
