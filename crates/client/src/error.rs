use serde_json::Value;

/// Everything that can go wrong between `execute` and a parsed body.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Client construction rejected the configuration.
    #[error("configuration error: {message}")]
    Config { message: String },
    /// A required call parameter was absent.
    #[error("missing required parameter `{name}`")]
    MissingParameter { name: String },
    /// The caller asked for something the SDK does not do.
    #[error("unsupported: {message}")]
    Unsupported { message: String },
    /// Network/HTTP-layer failure, propagated from the transport unwrapped.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// Response body was not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Response body parsed to `null`.
    #[error("empty response from gateway")]
    EmptyResponse,
    /// The gateway returned a structured failure envelope.
    #[error("service failure: {message}")]
    Service {
        message: String,
        /// The raw `response` sub-object, for diagnostics.
        envelope: Value,
    },
}

impl Error {
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_names_the_key() {
        let err = Error::missing_parameter("method");
        assert_eq!(err.to_string(), "missing required parameter `method`");
    }

    #[test]
    fn service_failure_displays_the_message() {
        let err = Error::Service {
            message: "invalid signature".into(),
            envelope: Value::Null,
        };
        assert_eq!(err.to_string(), "service failure: invalid signature");
    }
}
