//! Error types for the Tiny Cabin site controller

use thiserror::Error;

/// Main error type for site controller operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// A configured external address could not be parsed
    #[error("Invalid {name} URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// The form endpoint answered with a non-success status
    #[error("Form endpoint rejected submission with status {0}")]
    Rejected(u16),

    /// Transport-level failure while talking to the form endpoint
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::Rejected(503);
        assert_eq!(
            format!("{}", err),
            "Form endpoint rejected submission with status 503"
        );
    }

    #[test]
    fn test_error_from_url_parse() {
        let source = "not a url".parse::<url::Url>().unwrap_err();
        let err = SiteError::InvalidUrl {
            name: "form endpoint",
            source,
        };
        assert!(format!("{}", err).starts_with("Invalid form endpoint URL"));
    }
}
