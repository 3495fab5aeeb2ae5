use std::fmt::Display;

/// Abstraction allowing to help with the handling of URLs, or of strings which may
/// or may not be URLs.
///
/// None of its methods can fail: malformed input just leads to less useful
/// results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Url {
    inner: String,
}

impl Url {
    pub fn new(url: String) -> Self {
        Self { inner: url }
    }

    pub fn get_ref(&self) -> &str {
        self.inner.as_str()
    }

    /// Returns the value of the first query parameter called `name`, if one
    /// with a non-empty value is present.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        let query = match self.inner.find('?') {
            Some(idx) => &self.inner[idx + 1..],
            None => return None,
        };
        let query = match query.find('#') {
            Some(idx) => &query[0..idx],
            None => query,
        };
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty())
    }

    /// Returns the last segment of the URL's path, without query string or
    /// fragment.
    ///
    /// Returns an empty string if the path ends with a `/`.
    pub fn filename(&self) -> &str {
        let hash_idx = self.inner.find('#');
        let parsed = match hash_idx {
            Some(idx) => &self.inner[0..idx],
            None => &self.inner,
        };
        let query_idx = parsed.find('?');
        let parsed = match query_idx {
            Some(idx) => &parsed[0..idx],
            None => parsed,
        };
        let last_slash = parsed.rfind('/');
        match last_slash {
            Some(idx) => &parsed[idx + 1..],
            None => parsed,
        }
    }
}

impl Display for Url {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param() {
        let url = Url::new("https://www.youtube.com/watch?v=abc123&t=5".to_owned());
        assert_eq!(url.query_param("v"), Some("abc123"));
        assert_eq!(url.query_param("t"), Some("5"));
        assert_eq!(url.query_param("list"), None);

        let url = Url::new("https://www.youtube.com/watch?feature=share&v=abc#t=3".to_owned());
        assert_eq!(url.query_param("v"), Some("abc"));

        let url = Url::new("https://example.com/dev=12".to_owned());
        assert_eq!(url.query_param("v"), None);

        let url = Url::new("https://example.com/watch?v=".to_owned());
        assert_eq!(url.query_param("v"), None);
    }

    #[test]
    fn test_filename() {
        let url = Url::new("https://www.youtube.com/embed/xyz789".to_owned());
        assert_eq!(url.filename(), "xyz789");
        let url = Url::new("https://youtu.be/xyz789?t=12#frag".to_owned());
        assert_eq!(url.filename(), "xyz789");
        let url = Url::new("xyz789".to_owned());
        assert_eq!(url.filename(), "xyz789");
        let url = Url::new("https://vimeo.com/".to_owned());
        assert_eq!(url.filename(), "");
    }
}
