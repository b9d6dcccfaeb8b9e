//! resloc: one address type for local file paths and http(s) URLs.
//!
//! Downstream code that can load a resource either from disk or over
//! HTTP keeps a single [`Locator`] instead of a path-or-URL pair.
//! Construction normalizes bare absolute paths and `file:` URLs into
//! the same shape; resolution, query mutation, and the serde wire form
//! then branch on the locator's kind alone. The crate performs no I/O.

pub mod locator;
pub mod path_style;

pub use locator::{Locator, LocatorError, LocatorKind};
pub use path_style::PathStyle;
