//! Error types for the skill Lambda.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can fail a single turn of the skill.
///
/// Missing or unusable slot values are not errors: the intent handlers answer
/// those with corrective speech instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Intent name matched none of the registered handlers
    #[error("Invalid intent: {0}")]
    UnhandledIntent(String),

    /// Request type other than launch, intent or session-ended
    #[error("Unsupported request type")]
    UnsupportedRequestType,

    /// Inbound event did not have the expected shape
    #[error("Malformed event: {0}")]
    MalformedEvent(#[source] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::UnhandledIntent(_) => "unhandled_intent",
            Error::UnsupportedRequestType => "unsupported_request_type",
            Error::MalformedEvent(_) => "malformed_event",
            Error::Config(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhandled_intent_message_names_intent() {
        let err = Error::UnhandledIntent("PizzaIntent".to_string());
        assert_eq!(err.to_string(), "Invalid intent: PizzaIntent");
        assert_eq!(err.kind(), "unhandled_intent");
    }

    #[test]
    fn test_malformed_event_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::MalformedEvent(source);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.kind(), "malformed_event");
    }
}
