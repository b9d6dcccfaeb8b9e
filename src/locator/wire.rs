//! Serde wire form: `{"Url": "<canonical string>", "File": <bool>}`.
//!
//! Decoding does not trust the flag: it re-runs full construction on
//! the `Url` string and cross-checks the `File` flag against the
//! reconstructed kind, so the locator invariants hold for externally
//! produced data as well as our own output.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Locator, LocatorError};

/// Exact wire layout. Field names are a stable contract; `Url` is
/// required and must be non-empty.
#[derive(Debug, Serialize, Deserialize)]
struct WireLocator {
    #[serde(rename = "Url", default)]
    url: String,
    #[serde(rename = "File", default)]
    file: bool,
}

impl Serialize for Locator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        WireLocator {
            url: self.to_string(),
            file: self.is_file_path(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Locator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireLocator::deserialize(deserializer)?;
        Locator::from_wire(&wire.url, wire.file).map_err(D::Error::custom)
    }
}

impl Locator {
    /// Rebuilds a locator from its wire fields under the host path
    /// convention, re-validating everything.
    fn from_wire(url: &str, file: bool) -> Result<Self, LocatorError> {
        if url.is_empty() {
            return Err(LocatorError::MissingUrl);
        }
        let locator = Self::new(url)?;
        if locator.is_file_path() != file {
            return Err(LocatorError::FileFlagMismatch {
                url: url.to_string(),
                flagged: file,
            });
        }
        Ok(locator)
    }
}

#[cfg(test)]
mod tests {
    use crate::locator::Locator;

    #[test]
    fn remote_marshals_to_exact_fields() {
        let l = Locator::new("https://ex.com/p?x=1").unwrap();
        let json = serde_json::to_string(&l).unwrap();
        assert_eq!(json, r#"{"Url":"https://ex.com/p?x=1","File":false}"#);
    }

    #[cfg(not(windows))]
    #[test]
    fn file_marshals_with_flag_set() {
        let l = Locator::new("/a/b").unwrap();
        let json = serde_json::to_string(&l).unwrap();
        assert_eq!(json, r#"{"Url":"/a/b","File":true}"#);
    }

    #[test]
    fn missing_url_rejected() {
        let err = serde_json::from_str::<Locator>(r#"{"File": true}"#).unwrap_err();
        assert!(err.to_string().contains("missing url"));
    }

    #[test]
    fn empty_url_rejected() {
        let err = serde_json::from_str::<Locator>(r#"{"Url": "", "File": true}"#).unwrap_err();
        assert!(err.to_string().contains("missing url"));
    }

    #[cfg(not(windows))]
    #[test]
    fn flag_mismatch_rejected() {
        let err = serde_json::from_str::<Locator>(r#"{"Url": "/a/b", "File": false}"#).unwrap_err();
        assert!(err.to_string().contains("file flag mismatch"));
    }

    #[test]
    fn invalid_scheme_in_wire_rejected() {
        let err =
            serde_json::from_str::<Locator>(r#"{"Url": "ftp://h/p", "File": false}"#).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme ftp"));
    }

    #[test]
    fn remote_roundtrip() {
        let l = Locator::new("https://ex.com/a/b?x=1").unwrap();
        let json = serde_json::to_string(&l).unwrap();
        let back: Locator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, l);
    }
}
