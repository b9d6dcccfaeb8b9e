//! Reference resolution against a base locator.

use url::Url;

use super::{Locator, LocatorError, Repr};

impl Locator {
    /// Resolves the reference string `s` against this locator and
    /// returns a new one; the base is never modified.
    ///
    /// A reference carrying its own scheme wins outright: it goes
    /// through plain construction under the base's path convention and
    /// the base is ignored. Scheme-less references resolve against a
    /// file base by native path joining (with `.`/`..` cleanup) and
    /// against a remote base by RFC 3986 reference resolution.
    pub fn resolve(&self, s: &str) -> Result<Self, LocatorError> {
        match Url::parse(s) {
            Ok(_) => {
                tracing::trace!("reference {} carries a scheme, base ignored", s);
                Self::with_style(s, self.style)
            }
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.repr {
                Repr::File(base_path) => Ok(self.resolve_file(base_path, s)),
                Repr::Remote(base_url) => {
                    let joined = base_url.join(s)?;
                    Ok(Self {
                        repr: Repr::Remote(joined),
                        style: self.style,
                    })
                }
            },
            Err(e) => Err(e.into()),
        }
    }

    fn resolve_file(&self, base_path: &str, s: &str) -> Self {
        let style = self.style;
        // An absolute reference path is adopted verbatim. The separator
        // stripping and slash conversion that `file:` URLs get at
        // construction is deliberately not applied here.
        let path = if style.is_absolute(s) {
            s.to_string()
        } else {
            style.join(&style.dir(base_path), s)
        };
        Self {
            repr: Repr::File(path),
            style,
        }
    }
}
