// ABOUTME: URI reference type used for links, urls, and domains in RSS entities.
// ABOUTME: Wraps url::Url for absolute references and keeps relative references verbatim.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::SyndicationError;
use crate::text::compare_ignore_case;

/// An absolute URL or a relative reference.
///
/// Feeds routinely carry relative links, so unlike `url::Url` this type
/// accepts `/posts/1` or `image.png` as well.
#[derive(Debug, Clone)]
pub enum Uri {
    Absolute(Url),
    Relative(String),
}

impl Uri {
    pub fn parse(value: &str) -> Result<Self, SyndicationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(SyndicationError::InvalidUri {
                value: value.to_string(),
                reason: "empty reference".to_string(),
            });
        }
        match Url::parse(value) {
            Ok(url) => Ok(Uri::Absolute(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
                    Err(SyndicationError::InvalidUri {
                        value: value.to_string(),
                        reason: "relative reference contains whitespace".to_string(),
                    })
                } else {
                    Ok(Uri::Relative(value.to_string()))
                }
            }
            Err(e) => Err(SyndicationError::InvalidUri {
                value: value.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Uri::Absolute(url) => url.as_str(),
            Uri::Relative(s) => s,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, Uri::Absolute(_))
    }

    /// Resolves a relative reference against `base`; absolute references are returned as-is.
    pub fn resolve(&self, base: &Url) -> Option<Url> {
        match self {
            Uri::Absolute(url) => Some(url.clone()),
            Uri::Relative(s) => base.join(s).ok(),
        }
    }

    /// Component-wise comparison: absolute before relative, then scheme,
    /// host, port, path, query and fragment, each case-insensitive, with
    /// the full text as the final tie-break.
    pub fn compare(&self, other: &Uri) -> Ordering {
        match (self, other) {
            (Uri::Absolute(a), Uri::Absolute(b)) => compare_ignore_case(a.scheme(), b.scheme())
                .then_with(|| {
                    compare_ignore_case(a.host_str().unwrap_or(""), b.host_str().unwrap_or(""))
                })
                .then_with(|| a.port_or_known_default().cmp(&b.port_or_known_default()))
                .then_with(|| compare_ignore_case(a.path(), b.path()))
                .then_with(|| compare_ignore_case(a.query().unwrap_or(""), b.query().unwrap_or("")))
                .then_with(|| {
                    compare_ignore_case(a.fragment().unwrap_or(""), b.fragment().unwrap_or(""))
                })
                .then_with(|| compare_ignore_case(a.as_str(), b.as_str())),
            (Uri::Absolute(_), Uri::Relative(_)) => Ordering::Less,
            (Uri::Relative(_), Uri::Absolute(_)) => Ordering::Greater,
            (Uri::Relative(a), Uri::Relative(b)) => compare_ignore_case(a, b),
        }
    }
}

pub(crate) fn compare_opt(a: Option<&Uri>, b: Option<&Uri>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

impl FromStr for Uri {
    type Err = SyndicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

impl From<Url> for Uri {
    fn from(url: Url) -> Self {
        Uri::Absolute(url)
    }
}

impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Uri {}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_and_relative() {
        assert!(Uri::parse("https://example.com/feed").unwrap().is_absolute());
        let rel = Uri::parse("/posts/1").unwrap();
        assert!(!rel.is_absolute());
        assert_eq!(rel.as_str(), "/posts/1");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Uri::parse("").is_err());
        assert!(Uri::parse("not a uri").is_err());
        assert!(Uri::parse("http://[::1").is_err());
    }

    #[test]
    fn test_resolve() {
        let base = Url::parse("https://example.com/blog/").unwrap();
        let rel = Uri::parse("img/a.png").unwrap();
        assert_eq!(
            rel.resolve(&base).unwrap().as_str(),
            "https://example.com/blog/img/a.png"
        );
    }

    #[test]
    fn test_compare_case_insensitive() {
        let a = Uri::parse("https://Example.com/Path").unwrap();
        let b = Uri::parse("https://example.com/path").unwrap();
        assert_eq!(a, b);
        let c = Uri::parse("https://example.com/other").unwrap();
        assert_ne!(a.compare(&c), Ordering::Equal);
        assert_eq!(
            a.compare(&Uri::parse("rel").unwrap()),
            Ordering::Less
        );
    }
}
