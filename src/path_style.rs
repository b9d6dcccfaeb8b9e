//! Platform path conventions as an explicit value.
//!
//! Locator construction is parameterized by a [`PathStyle`] instead of a
//! compile-time `cfg(windows)` switch, so both conventions can be
//! exercised in tests on any host. Everything here is purely
//! string-based; nothing touches the filesystem.

/// Path convention used when interpreting scheme-less locator strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// `/`-separated; absolute iff the path starts with `/`.
    Posix,
    /// `\`-separated; drive-letter (`C:\`) and UNC (`\\host\share`) roots.
    /// Forward slashes are accepted as separators on input.
    Windows,
}

impl Default for PathStyle {
    /// The convention of the compiling host.
    fn default() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }
}

impl PathStyle {
    /// The separator this style emits.
    pub const fn separator(self) -> char {
        match self {
            PathStyle::Posix => '/',
            PathStyle::Windows => '\\',
        }
    }

    fn is_separator(self, c: char) -> bool {
        match self {
            PathStyle::Posix => c == '/',
            PathStyle::Windows => c == '/' || c == '\\',
        }
    }

    /// Splits off the Windows volume prefix (`C:` or `\\host\share`).
    /// Posix paths have no volume.
    fn split_volume(self, path: &str) -> (&str, &str) {
        if matches!(self, PathStyle::Posix) {
            return ("", path);
        }
        let b = path.as_bytes();
        if b.len() >= 2 && b[1] == b':' && b[0].is_ascii_alphabetic() {
            return path.split_at(2);
        }
        if b.len() >= 2 && self.is_separator(b[0] as char) && self.is_separator(b[1] as char) {
            // \\host\share: the volume runs through the share name.
            let mut idx = 2;
            let mut seps = 0;
            while idx < b.len() {
                if self.is_separator(b[idx] as char) {
                    seps += 1;
                    if seps == 2 {
                        break;
                    }
                }
                idx += 1;
            }
            return path.split_at(idx);
        }
        ("", path)
    }

    /// Whether `path` is absolute under this convention.
    ///
    /// Posix: leading `/`. Windows: a drive root (`C:\`, `C:/`) or a UNC
    /// path. A bare drive like `C:` is relative (to that drive's current
    /// directory), matching the usual Windows semantics.
    pub fn is_absolute(self, path: &str) -> bool {
        match self {
            PathStyle::Posix => path.starts_with('/'),
            PathStyle::Windows => {
                let (volume, rest) = self.split_volume(path);
                if volume
                    .chars()
                    .next()
                    .is_some_and(|c| self.is_separator(c))
                {
                    return true;
                }
                !volume.is_empty() && rest.starts_with(|c: char| self.is_separator(c))
            }
        }
    }

    /// Converts `/` separators to this style's native separator.
    /// No-op for posix.
    pub fn from_slash(self, path: &str) -> String {
        match self {
            PathStyle::Posix => path.to_string(),
            PathStyle::Windows => path.replace('/', "\\"),
        }
    }

    /// Lexically cleans `path`: drops `.` segments and empty segments,
    /// resolves `..` against preceding segments (never above a root),
    /// and rewrites separators to the native one. The empty path cleans
    /// to `"."`.
    pub fn clean(self, path: &str) -> String {
        let (volume, rest) = self.split_volume(path);
        let rooted = rest.starts_with(|c: char| self.is_separator(c));
        let sep = self.separator();

        let mut parts: Vec<&str> = Vec::new();
        for part in rest.split(|c: char| self.is_separator(c)) {
            match part {
                "" | "." => {}
                ".." => match parts.last() {
                    Some(&last) if last != ".." => {
                        parts.pop();
                    }
                    // A ".." at the root stays at the root.
                    _ if rooted => {}
                    _ => parts.push(".."),
                },
                p => parts.push(p),
            }
        }

        let mut out = String::with_capacity(path.len());
        out.push_str(volume);
        if rooted {
            out.push(sep);
        }
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                out.push(sep);
            }
            out.push_str(part);
        }
        if out.is_empty() {
            out.push('.');
        }
        out
    }

    /// The directory portion of `path`: everything before the final
    /// separator, cleaned. A path with no separator has directory `"."`.
    pub fn dir(self, path: &str) -> String {
        let (volume, rest) = self.split_volume(path);
        match rest.rfind(|c: char| self.is_separator(c)) {
            Some(i) => {
                let mut head = String::with_capacity(volume.len() + i + 1);
                head.push_str(volume);
                head.push_str(&rest[..=i]);
                self.clean(&head)
            }
            None if volume.is_empty() => ".".to_string(),
            None => volume.to_string(),
        }
    }

    /// Joins `base` and `path` with the native separator and cleans the
    /// result. An empty side yields the cleaned other side.
    pub fn join(self, base: &str, path: &str) -> String {
        if base.is_empty() {
            return self.clean(path);
        }
        if path.is_empty() {
            return self.clean(base);
        }
        let mut joined = String::with_capacity(base.len() + path.len() + 1);
        joined.push_str(base);
        joined.push(self.separator());
        joined.push_str(path);
        self.clean(&joined)
    }
}
