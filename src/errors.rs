use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    /// Bad input: malformed MAC or missing API key. Nothing was sent.
    #[error("{0}")]
    Validation(String),

    #[error("There was a problem gathering details for {mac}. Response: {status}")]
    Api { mac: String, status: u16 },

    #[error("{0}")]
    Transport(String),

    #[error("Could not decode response for {mac}: {reason}")]
    Decode { mac: String, reason: String },
}

impl LookupError {
    pub fn validation(message: impl Into<String>) -> Self {
        LookupError::Validation(message.into())
    }

    /// Anything other than a validation failure means the service could not
    /// be used and the run has to stop.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LookupError::Validation(_))
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_not_fatal() {
        assert!(!LookupError::validation("bad").is_fatal());
        assert!(LookupError::Transport("refused".into()).is_fatal());
        assert!(LookupError::Api {
            mac: "AABBCCDDEEFF".into(),
            status: 404
        }
        .is_fatal());
    }

    #[test]
    fn api_error_message_carries_status() {
        let err = LookupError::Api {
            mac: "AA:BB:CC:DD:EE:FF".into(),
            status: 401,
        };
        assert_eq!(
            err.to_string(),
            "There was a problem gathering details for AA:BB:CC:DD:EE:FF. Response: 401"
        );
    }
}
