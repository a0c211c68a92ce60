use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed or unexpected event payload. The event is dropped.
    #[error("failed to decode event payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A remote action was rejected or failed; the reason is the gateway's
    /// message, surfaced verbatim.
    #[error("{operation} failed: {reason}")]
    Action { operation: &'static str, reason: String },

    /// Durable wishlist read/write failure.
    #[error("wishlist storage error at {path}: {source}")]
    Persistence {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Event feed registration failed; the session continues without
    /// automatic fulfillment.
    #[error("event feed subscription failed: {0}")]
    Subscription(String),

    #[error("WebSocket error: {0}")]
    WebSocket(Box<tokio_tungstenite::tungstenite::Error>),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<tokio_tungstenite::tungstenite::Error> for Error {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Error::WebSocket(Box::new(err))
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
