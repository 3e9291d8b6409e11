//! Absolute URL parsing.

use url::{ParseError, Url};

use either_core::{left, right, Either};

const KNOWN_SCHEMES: &[&str] = &["http", "https", "ftp", "file", "jar", "mailto"];

/// Parses an absolute URL with one of the schemes in `KNOWN_SCHEMES`.
pub fn parse_url(s: Option<&str>) -> Either<String, Url> {
    let s = match s {
        Some(s) => s,
        None => return left("Cannot parse null as a URL".to_string()),
    };
    match Url::parse(s) {
        Ok(url) if KNOWN_SCHEMES.contains(&url.scheme()) => right(url),
        Ok(url) => left(format!(
            "Cannot parse malformed URL '{}'. Unknown protocol: {}",
            s,
            url.scheme()
        )),
        Err(err @ ParseError::RelativeUrlWithoutBase) => left(format!(
            "Cannot parse a relative URL: '{}'. Got error: {}",
            s, err
        )),
        Err(err) => left(format!(
            "Cannot parse malformed URL '{}'. Got error: {}",
            s, err
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls() {
        let url = parse_url(Some("https://example.org/foo/bar")).into_right().unwrap();
        assert_eq!(url.host_str(), Some("example.org"));
        assert_eq!(url.path(), "/foo/bar");
        assert!(parse_url(Some("file:///example-example/org")).is_right());
    }

    #[test]
    fn test_rejections() {
        assert_eq!(
            parse_url(None),
            left("Cannot parse null as a URL".to_string())
        );
        let relative = parse_url(Some("example/foo/bar")).into_left().unwrap();
        assert!(relative.starts_with("Cannot parse a relative URL"), "{}", relative);
        let empty = parse_url(Some("")).into_left().unwrap();
        assert!(empty.starts_with("Cannot parse a relative URL"), "{}", empty);
        let unknown = parse_url(Some("hps://example.net")).into_left().unwrap();
        assert!(unknown.ends_with("Unknown protocol: hps"), "{}", unknown);
    }
}
