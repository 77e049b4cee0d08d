use jiten_core::DictionarySiteProfile;
use url::Url;

use crate::ScrapeError;

/// A URL that passed a site profile's checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeTarget {
    url: Url,
    subdomain: Option<String>,
    segments: Vec<String>,
}

impl ScrapeTarget {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Subdomain captured by the profile's netloc pattern
    pub fn subdomain(&self) -> Option<&str> {
        self.subdomain.as_deref()
    }

    /// Non-empty path segments, never empty itself
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

/// Parse `url` and check it against `profile`.
///
/// URLs without a scheme are read as `https://`.
pub fn validate_url<P: DictionarySiteProfile + ?Sized>(
    profile: &P,
    url: &str,
) -> Result<ScrapeTarget, ScrapeError> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{url}"))
            .map_err(|e| ScrapeError::invalid_url(url, e.to_string()))?,
        Err(e) => return Err(ScrapeError::invalid_url(url, e.to_string())),
    };

    let host = parsed
        .host_str()
        .ok_or_else(|| ScrapeError::invalid_url(url, "no host"))?;
    let netloc = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    let captures = profile
        .netloc_pattern()
        .captures(&netloc)
        .ok_or_else(|| {
            ScrapeError::invalid_url(url, format!("host {netloc} is not a {} page", profile.name()))
        })?;
    let subdomain = captures.get(1).map(|m| m.as_str().to_string());

    let segments: Vec<String> = parsed
        .path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    if segments.is_empty() {
        return Err(ScrapeError::invalid_url(url, "path has no segments"));
    }

    Ok(ScrapeTarget {
        url: parsed,
        subdomain,
        segments,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use jiten_core::ColumnMap;
    use regex::Regex;

    pub(crate) struct TestProfile {
        netloc: Regex,
        columns: ColumnMap<()>,
    }

    impl TestProfile {
        pub(crate) fn new() -> Self {
            Self {
                netloc: Regex::new(r"^(?:([A-Za-z0-9.\-]+)\.)?jitenon\.jp$").unwrap(),
                columns: ColumnMap::new(),
            }
        }
    }

    impl DictionarySiteProfile for TestProfile {
        type Fields = ();

        fn name(&self) -> &str {
            "testsite"
        }

        fn target(&self) -> &str {
            "test-site"
        }

        fn netloc_pattern(&self) -> &Regex {
            &self.netloc
        }

        fn column_map(&self) -> &ColumnMap<()> {
            &self.columns
        }
    }

    #[test]
    fn test_subdomain_and_segments() {
        let target =
            validate_url(&TestProfile::new(), "https://yoji.jitenon.jp/yojia/1234.html").unwrap();
        assert_eq!(target.subdomain(), Some("yoji"));
        assert_eq!(target.segments(), ["yojia", "1234.html"]);
    }

    #[test]
    fn test_bare_domain_has_no_subdomain() {
        let target = validate_url(&TestProfile::new(), "https://jitenon.jp/cat/1.html").unwrap();
        assert_eq!(target.subdomain(), None);
    }

    #[test]
    fn test_missing_scheme_defaults_to_https() {
        let target = validate_url(&TestProfile::new(), "kotowaza.jitenon.jp/cat/9.php").unwrap();
        assert_eq!(target.url().scheme(), "https");
        assert_eq!(target.subdomain(), Some("kotowaza"));
    }

    #[test]
    fn test_foreign_host_is_rejected() {
        let result = validate_url(&TestProfile::new(), "https://example.com/cat/1.html");
        assert!(matches!(result, Err(ScrapeError::InvalidUrl { .. })));
    }

    #[test]
    fn test_lookalike_host_is_rejected() {
        let result = validate_url(&TestProfile::new(), "https://jitenon.jp.evil.com/a.html");
        assert!(matches!(result, Err(ScrapeError::InvalidUrl { .. })));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let result = validate_url(&TestProfile::new(), "https://yoji.jitenon.jp/");
        assert!(matches!(result, Err(ScrapeError::InvalidUrl { .. })));
    }
}
