//! Site configuration - the two configured external addresses.
//!
//! The site talks to exactly two outside parties: the form-handling
//! endpoint that receives contact submissions, and the scheduling link
//! opened when a visitor books a call. Both can be overridden from the
//! command line; the defaults point at the production services.

use url::Url;

use crate::error::{SiteError, SiteResult};

/// Default form-handling endpoint (Formspree-style POST target).
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/tinycabin";

/// Default scheduling link opened in a new browsing context.
pub const DEFAULT_SCHEDULING_URL: &str = "https://calendly.com/tinycabin/intro-call";

/// Configured external addresses for one run of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Endpoint receiving the JSON-serialized inquiry form
    pub form_endpoint: Url,
    /// Booking link for the "book a call" button
    pub scheduling_url: Url,
}

impl SiteConfig {
    /// Build a config from optional command-line overrides, falling back
    /// to the defaults for anything not supplied.
    pub fn from_overrides(
        form_endpoint: Option<&str>,
        scheduling_url: Option<&str>,
    ) -> SiteResult<Self> {
        let form_endpoint = form_endpoint
            .unwrap_or(DEFAULT_FORM_ENDPOINT)
            .parse()
            .map_err(|source| SiteError::InvalidUrl {
                name: "form endpoint",
                source,
            })?;
        let scheduling_url = scheduling_url
            .unwrap_or(DEFAULT_SCHEDULING_URL)
            .parse()
            .map_err(|source| SiteError::InvalidUrl {
                name: "scheduling link",
                source,
            })?;
        Ok(Self {
            form_endpoint,
            scheduling_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let config = SiteConfig::from_overrides(None, None).unwrap();
        assert_eq!(config.form_endpoint.as_str(), DEFAULT_FORM_ENDPOINT);
        assert_eq!(config.scheduling_url.as_str(), DEFAULT_SCHEDULING_URL);
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = SiteConfig::from_overrides(
            Some("https://example.com/forms/1"),
            None,
        )
        .unwrap();
        assert_eq!(config.form_endpoint.as_str(), "https://example.com/forms/1");
        assert_eq!(config.scheduling_url.as_str(), DEFAULT_SCHEDULING_URL);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let err = SiteConfig::from_overrides(Some("not a url"), None).unwrap_err();
        assert!(matches!(
            err,
            SiteError::InvalidUrl {
                name: "form endpoint",
                ..
            }
        ));
    }
}
