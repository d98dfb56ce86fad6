use thiserror::Error;

/// Failure modes of one weather lookup.
///
/// Every variant renders as plain user-visible text; none is retried and
/// none is fatal. Empty input never reaches this layer; the screen rejects
/// it before a lookup is submitted.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: no connectivity, DNS, TLS, timeout.
    #[error("Could not reach the weather service: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("Weather lookup failed: {0}")]
    Api(String),

    /// The body did not parse into the fields the screen consumes.
    #[error("Invalid response from the weather service: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_non_empty_and_human_readable() {
        let errors = [
            FetchError::Network("connection refused".to_string()),
            FetchError::Api("status 404 Not Found: no matching location".to_string()),
            FetchError::InvalidResponse("missing field `current`".to_string()),
        ];

        for err in errors {
            let msg = err.to_string();
            assert!(!msg.is_empty());
            assert!(msg.contains("weather service") || msg.contains("Weather lookup"));
        }
    }
}
