use std::sync::Arc;

/// Errors produced by the ingress core.
///
/// [`is_client_error`](Error::is_client_error) tells the transport layer
/// whether the failure was caused by the submitted message (400-class
/// response) or by downstream infrastructure (500-class).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    #[error("unrecognized messageType '{0}'")]
    UnknownMessageType(String),

    #[error("publishing to the event bus failed: {0}")]
    Publish(Arc<str>),
}

impl Error {
    /// Validation error naming the first violated rule.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidMessage(reason.into())
    }

    /// Wrap a transport error reported by a [`Publisher`](crate::Publisher).
    pub fn publish(reason: impl Into<Arc<str>>) -> Self {
        Error::Publish(reason.into())
    }

    /// Whether the error was caused by the submitted message rather than
    /// by downstream infrastructure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidMessage(_) | Error::UnknownMessageType(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(Error::invalid("metadata must be an object").is_client_error());
        assert!(Error::UnknownMessageType("RocketRefueled".into()).is_client_error());
        assert!(!Error::publish("connection refused").is_client_error());
    }

    #[test]
    fn test_error_display_carries_reason() {
        let e = Error::invalid("metadata.channel must be a non-empty string");
        assert_eq!(
            e.to_string(),
            "invalid message: metadata.channel must be a non-empty string"
        );
    }
}
