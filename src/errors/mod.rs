use thiserror::Error;

/// Failures raised while classifying and routing an inbound webhook event.
///
/// Handler failures are carried as `anyhow::Error` so applications can keep
/// using `?` inside their callbacks; the `Handler` variant passes them through
/// unchanged.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("empty webhook body")]
    EmptyBody,

    #[error("webhook body has no \"event\" field")]
    MissingEventField,

    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

/// Failures raised while assembling outbound message content.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid {family} value: {value:?}")]
    InvalidVariant { family: &'static str, value: String },

    #[error("horizontal rich card requires an image alignment")]
    MissingImageAlignment,

    #[error("failed to render wire form: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures raised by the gateway client when sending a message.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("gateway returned unexpected status {code}: {body}")]
    UnexpectedStatus { code: u16, body: String },

    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Convenience alias for send results.
pub type SendResult<T> = std::result::Result<T, SendError>;

impl SendError {
    /// HTTP status returned by the gateway, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { code, .. } => Some(*code),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Build(_) => None,
        }
    }

    /// Whether the failure happened below HTTP (DNS, connect, TLS, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Configuration validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Invalid(String),
}
