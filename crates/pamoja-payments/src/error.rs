//! Payment Error Types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// No API key configured
    #[error("API key not configured")]
    ApiKeyMissing,

    /// Could not build the return URL
    #[error("Invalid return URL: {0}")]
    ReturnUrl(#[from] url::ParseError),
}

/// Error taxonomy as seen by the checkout flow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Configuration,
    Unknown,
}

impl PaymentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaymentError::ApiKeyMissing => ErrorKind::Configuration,
            PaymentError::ReturnUrl(_) => ErrorKind::Unknown,
        }
    }

    /// Message shown in the checkout error dialog
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Configuration => "Payments are not set up yet. Please contact the administrator.",
            ErrorKind::Unknown => "We couldn't start your payment. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(PaymentError::ApiKeyMissing.kind(), ErrorKind::Configuration);
        assert_eq!(PaymentError::ApiKeyMissing.to_string(), "API key not configured");

        let bad_url = PaymentError::from(url::Url::parse("not a url").unwrap_err());
        assert_eq!(bad_url.kind(), ErrorKind::Unknown);
    }

    #[test]
    fn test_user_message_follows_kind() {
        assert_eq!(
            PaymentError::ApiKeyMissing.user_message(),
            "Payments are not set up yet. Please contact the administrator."
        );
        let bad_url = PaymentError::from(url::Url::parse("").unwrap_err());
        assert_eq!(bad_url.user_message(), "We couldn't start your payment. Please try again.");
    }
}
