//! File-or-URL locator: one address type for local paths and http(s) URLs.
//!
//! A [`Locator`] is either a native absolute filesystem path or a parsed
//! `http`/`https` URL. Bare absolute paths and `file:` URLs normalize
//! into the same internal shape at construction, so downstream code
//! branches on [`LocatorKind`] alone instead of re-deriving "is this a
//! path". No I/O is performed: nothing is fetched, stat'd, or created.

mod error;
mod query;
mod resolve;
mod wire;


pub use error::LocatorError;

use std::fmt;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::path_style::PathStyle;

/// Discriminant of a [`Locator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorKind {
    /// Native absolute filesystem path.
    File,
    /// Parsed `http` or `https` URL.
    Remote,
}

/// A file path or URL, normalized at construction.
///
/// Read-only after construction except for
/// [`set_query_param`](Locator::set_query_param). Cloning is cheap
/// enough that shared-mutation setups should clone instead of locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    repr: Repr,
    style: PathStyle,
}

/// File locators keep the path string as given (construction does not
/// lexically clean it); remote locators keep the fully parsed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Repr {
    File(String),
    Remote(Url),
}

impl Locator {
    /// Creates a locator using the host platform's path convention.
    pub fn new(s: &str) -> Result<Self, LocatorError> {
        Self::with_style(s, PathStyle::default())
    }

    /// Creates a locator under an explicit path convention.
    ///
    /// Accepted inputs:
    /// - a scheme-less absolute path for `style`, kept verbatim;
    /// - a `file:` URL, rewritten to a native path (on
    ///   [`PathStyle::Windows`] one leading separator is stripped and
    ///   slashes become backslashes, so `file:///C:/x` yields `C:\x`);
    /// - an `http` or `https` URL.
    ///
    /// Scheme-less relative paths fail with
    /// [`LocatorError::ExpectedAbsolutePath`]; any other scheme fails
    /// with [`LocatorError::UnsupportedScheme`].
    pub fn with_style(s: &str, style: PathStyle) -> Result<Self, LocatorError> {
        let url = match Url::parse(s) {
            Ok(url) => url,
            // The parser's signal that the string carries no scheme:
            // it must then be a bare absolute path.
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                if !style.is_absolute(s) {
                    return Err(LocatorError::ExpectedAbsolutePath(s.to_string()));
                }
                return Ok(Self {
                    repr: Repr::File(s.to_string()),
                    style,
                });
            }
            Err(e) => return Err(e.into()),
        };

        match url.scheme() {
            "file" => {
                let decoded = percent_decode_str(url.path()).decode_utf8()?;
                let path = match style {
                    PathStyle::Posix => decoded.into_owned(),
                    // file:///C:/x carries the drive behind a leading
                    // slash; drop exactly one.
                    PathStyle::Windows => {
                        style.from_slash(decoded.strip_prefix('/').unwrap_or(&decoded))
                    }
                };

                // Only the scheme is dropped and the path rewritten; the
                // other components of the parsed URL survive in the
                // stored string, so `file://host/p?a=1#f` keeps its
                // authority, query, and fragment.
                let mut repr = String::with_capacity(s.len());
                if let Some(host) = url.host_str() {
                    if !host.is_empty() {
                        repr.push_str("//");
                        repr.push_str(host);
                    }
                }
                repr.push_str(&path);
                if let Some(query) = url.query() {
                    repr.push('?');
                    repr.push_str(query);
                }
                if let Some(fragment) = url.fragment() {
                    repr.push('#');
                    repr.push_str(fragment);
                }
                tracing::trace!("file url {} normalized to native path {}", s, repr);
                Ok(Self {
                    repr: Repr::File(repr),
                    style,
                })
            }
            "http" | "https" => Ok(Self {
                repr: Repr::Remote(url),
                style,
            }),
            other => Err(LocatorError::UnsupportedScheme(other.to_string())),
        }
    }

    /// File path or remote URL.
    pub fn kind(&self) -> LocatorKind {
        match self.repr {
            Repr::File(_) => LocatorKind::File,
            Repr::Remote(_) => LocatorKind::Remote,
        }
    }

    /// True for locators backed by a filesystem path.
    pub fn is_file_path(&self) -> bool {
        matches!(self.repr, Repr::File(_))
    }

    /// The native path, for file locators.
    pub fn file_path(&self) -> Option<&str> {
        match &self.repr {
            Repr::File(path) => Some(path),
            Repr::Remote(_) => None,
        }
    }

    /// The parsed URL, for remote locators.
    pub fn url(&self) -> Option<&Url> {
        match &self.repr {
            Repr::File(_) => None,
            Repr::Remote(url) => Some(url),
        }
    }

    /// The path convention this locator was constructed under.
    /// Locators derived via [`resolve`](Locator::resolve) inherit it.
    pub fn style(&self) -> PathStyle {
        self.style
    }
}

impl fmt::Display for Locator {
    /// Canonical string form: the bare native path for file locators,
    /// the serialized URL for remote ones. Re-parsing this string
    /// reconstructs an equal locator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::File(path) => f.write_str(path),
            Repr::Remote(url) => f.write_str(url.as_str()),
        }
    }
}
