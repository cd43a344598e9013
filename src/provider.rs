//! Provider registry mapping backend identities to API base URLs.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::ConfigError;

/// Base URL of the Vultr v2 API.
pub const VULTR_BASE_URL: &str = "https://api.vultr.com/v2/";

/// Backend targeted by a client.
///
/// Every variant resolves to an absolute base URL ending in `/`, so URL
/// templates can append relative paths without further normalisation.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Provider {
    /// The public Vultr API.
    #[default]
    Vultr,
    /// Any endpoint speaking the Vultr wire contract, for example a regional
    /// proxy or a mock server in tests.
    Custom(Arc<str>),
}

impl Provider {
    /// Builds a custom provider from an absolute `http` or `https` base URL.
    ///
    /// A trailing `/` is appended when missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the URL cannot be parsed,
    /// is not absolute, uses a scheme other than `http`/`https`, or carries a
    /// query string or fragment.
    pub fn custom(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = base_url.as_ref().trim();
        let parsed = reqwest::Url::parse(raw).map_err(|err| ConfigError::InvalidBaseUrl {
            url: raw.to_owned(),
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.to_owned(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.to_owned(),
                reason: String::from("base URL must not carry a query string or fragment"),
            });
        }
        let normalised = if raw.ends_with('/') {
            raw.to_owned()
        } else {
            format!("{raw}/")
        };
        Ok(Self::Custom(Arc::from(normalised)))
    }

    /// Resolves a provider from its configured name and optional base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownProvider`] for unrecognised names,
    /// [`ConfigError::MissingField`] when `custom` is selected without a base
    /// URL, and [`ConfigError::InvalidBaseUrl`] when the base URL is invalid.
    pub fn from_parts(name: &str, base_url: Option<&str>) -> Result<Self, ConfigError> {
        if name.trim().eq_ignore_ascii_case("custom") {
            let url = base_url
                .filter(|url| !url.trim().is_empty())
                .ok_or_else(|| {
                    ConfigError::MissingField(String::from(
                        "the custom provider requires a base URL: set SKYWARD_BASE_URL or add base_url to skyward.toml",
                    ))
                })?;
            return Self::custom(url);
        }
        name.parse()
    }

    /// Returns the base URL, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        match self {
            Self::Vultr => VULTR_BASE_URL,
            Self::Custom(url) => url,
        }
    }

    /// Returns the short provider name used in logs and configuration.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Vultr => "vultr",
            Self::Custom(_) => "custom",
        }
    }
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vultr" => Ok(Self::Vultr),
            _ => Err(ConfigError::UnknownProvider(value.trim().to_owned())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn vultr_base_url_ends_with_slash() {
        assert_eq!(Provider::Vultr.base_url(), "https://api.vultr.com/v2/");
    }

    #[rstest]
    #[case("http://127.0.0.1:8080/v2", "http://127.0.0.1:8080/v2/")]
    #[case("https://proxy.example.com/v2/", "https://proxy.example.com/v2/")]
    #[case("  https://proxy.example.com  ", "https://proxy.example.com/")]
    fn custom_base_url_is_normalised(#[case] input: &str, #[case] expected: &str) {
        let provider = Provider::custom(input).expect("valid base url");
        assert_eq!(provider.base_url(), expected);
    }

    #[rstest]
    #[case("not a url")]
    #[case("ftp://files.example.com/")]
    #[case("")]
    #[case("http://127.0.0.1:8080/v2?x=1")]
    #[case("https://proxy.example.com/v2/#frag")]
    #[case("https://proxy.example.com/v2?")]
    fn custom_rejects_invalid_urls(#[case] input: &str) {
        let error = Provider::custom(input).expect_err("url should be rejected");
        assert!(matches!(error, ConfigError::InvalidBaseUrl { .. }));
    }

    #[rstest]
    #[case("vultr")]
    #[case("VULTR")]
    #[case(" Vultr ")]
    fn parses_primary_provider(#[case] name: &str) {
        assert_eq!(name.parse::<Provider>(), Ok(Provider::Vultr));
    }

    #[test]
    fn unknown_provider_is_a_config_error() {
        assert_eq!(
            "digitalocean".parse::<Provider>(),
            Err(ConfigError::UnknownProvider(String::from("digitalocean")))
        );
    }

    #[test]
    fn custom_provider_requires_base_url() {
        let error = Provider::from_parts("custom", None).expect_err("base url is required");
        assert!(matches!(error, ConfigError::MissingField(_)));

        let provider =
            Provider::from_parts("custom", Some("http://localhost:9000")).expect("valid parts");
        assert_eq!(provider.base_url(), "http://localhost:9000/");
    }
}
