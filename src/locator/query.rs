//! Query-string mutation for remote locators.

use super::{Locator, Repr};

impl Locator {
    /// Sets query parameter `param` to `value`, or removes it entirely
    /// when `value` is empty. Silent no-op on file locators, which have
    /// no query semantics.
    ///
    /// Setting replaces the first occurrence of `param` and drops any
    /// further occurrences, so the parameter holds exactly one value
    /// afterwards. Untouched parameters keep their original order. This
    /// is the only operation that mutates a locator after construction.
    pub fn set_query_param(&mut self, param: &str, value: &str) {
        let url = match &mut self.repr {
            Repr::File(_) => return,
            Repr::Remote(url) => url,
        };

        let mut pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        if value.is_empty() {
            pairs.retain(|(k, _)| k != param);
        } else {
            let mut replaced = false;
            pairs.retain_mut(|(k, v)| {
                if k != param {
                    return true;
                }
                if replaced {
                    return false;
                }
                *v = value.to_string();
                replaced = true;
                true
            });
            if !replaced {
                pairs.push((param.to_string(), value.to_string()));
            }
        }

        if pairs.is_empty() {
            // No dangling "?" once the last parameter is gone.
            url.set_query(None);
        } else {
            url.query_pairs_mut()
                .clear()
                .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::locator::Locator;

    #[test]
    fn set_then_delete_roundtrip() {
        let mut l = Locator::new("https://ex.com/p").unwrap();
        l.set_query_param("k", "v");
        assert_eq!(l.to_string(), "https://ex.com/p?k=v");
        l.set_query_param("k", "");
        assert_eq!(l.to_string(), "https://ex.com/p");
    }

    #[test]
    fn replace_keeps_other_params_in_order() {
        let mut l = Locator::new("https://ex.com/p?a=1&k=old&b=2").unwrap();
        l.set_query_param("k", "new");
        assert_eq!(l.to_string(), "https://ex.com/p?a=1&k=new&b=2");
    }

    #[test]
    fn set_collapses_repeated_param() {
        let mut l = Locator::new("https://ex.com/p?k=1&x=y&k=2").unwrap();
        l.set_query_param("k", "3");
        assert_eq!(l.to_string(), "https://ex.com/p?k=3&x=y");
    }

    #[test]
    fn delete_removes_all_occurrences() {
        let mut l = Locator::new("https://ex.com/p?k=1&x=y&k=2").unwrap();
        l.set_query_param("k", "");
        assert_eq!(l.to_string(), "https://ex.com/p?x=y");
    }

    #[test]
    fn values_are_encoded() {
        let mut l = Locator::new("https://ex.com/p").unwrap();
        l.set_query_param("q", "a b&c");
        assert_eq!(l.to_string(), "https://ex.com/p?q=a+b%26c");
    }

    #[test]
    fn noop_on_file_locator() {
        let mut l = Locator::with_style("/a/b", crate::path_style::PathStyle::Posix).unwrap();
        l.set_query_param("k", "v");
        assert_eq!(l.to_string(), "/a/b");
    }
}
