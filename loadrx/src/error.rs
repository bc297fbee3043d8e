use thiserror::Error;

/// Structured failure raised by a remote fetch operation.
///
/// This mirrors the shapes a transport layer typically reports: a response
/// with a meaningful status code, a response that never arrived, or a
/// request that exceeded its deadline. The executor never inspects these
/// variants itself; it only folds them into a display string through a
/// classifier.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum FetchError {
    /// Malformed input; carries the field-level messages from the server.
    #[error("validation failed")]
    Validation { fields: Vec<String> },

    /// The session is expired or invalid.
    #[error("authentication required")]
    Auth,

    /// The caller is authenticated but not allowed.
    #[error("access denied")]
    Forbidden,

    #[error("resource not found")]
    NotFound,

    /// The request conflicts with current server-side state.
    #[error("conflict")]
    Conflict,

    #[error("rate limited")]
    RateLimited,

    /// The server answered with a 5xx status.
    #[error("server error ({status})")]
    Server { status: u16 },

    /// No response was received at all.
    #[error("network error")]
    Network,

    #[error("request timed out")]
    Timeout,

    /// Fallback for anything unrecognized.
    #[error("{0}")]
    Unknown(String),
}

impl FetchError {
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FetchError::Validation { .. })
    }
}

/// Default classifier for [`FetchError`]: maps each failure to a single
/// human-readable string suitable for direct rendering.
pub fn classify_error(error: &FetchError) -> String {
    match error {
        FetchError::Validation { fields } => {
            if fields.is_empty() {
                "Please check your input and try again.".to_string()
            } else {
                fields.join("; ")
            }
        }
        FetchError::Auth => "Your session has expired. Please sign in again.".to_string(),
        FetchError::Forbidden => "You don't have permission to do that.".to_string(),
        FetchError::NotFound => "The requested resource was not found.".to_string(),
        FetchError::Conflict => "This change conflicts with the current state.".to_string(),
        FetchError::RateLimited => "Too many requests. Please wait a moment.".to_string(),
        FetchError::Server { status } => format!("The server reported an error ({status})."),
        FetchError::Network => "Unable to reach the server. Check your connection.".to_string(),
        FetchError::Timeout => "The request took too long. Please try again.".to_string(),
        FetchError::Unknown(message) => message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_joins_field_messages() {
        let error = FetchError::Validation {
            fields: vec!["name is required".to_string(), "age must be positive".to_string()],
        };
        assert!(error.is_validation());
        assert_eq!(
            classify_error(&error),
            "name is required; age must be positive"
        );
    }

    #[test]
    fn test_validation_without_fields_falls_back() {
        let error = FetchError::Validation { fields: vec![] };
        assert_eq!(
            classify_error(&error),
            "Please check your input and try again."
        );
    }

    #[test]
    fn test_server_status_in_message() {
        let error = FetchError::Server { status: 503 };
        assert_eq!(classify_error(&error), "The server reported an error (503).");
    }

    #[test]
    fn test_unknown_passes_through() {
        let error = FetchError::Unknown("weird".to_string());
        assert_eq!(classify_error(&error), "weird");
    }

    #[test]
    fn test_predicates() {
        assert!(FetchError::Network.is_network());
        assert!(FetchError::Timeout.is_timeout());
        assert!(!FetchError::Auth.is_network());
    }
}
