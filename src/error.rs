use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Caller input that fails a precondition. Reported before any request is made.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("device_id is required")]
    MissingDeviceId,

    #[error("at least 3 coordinates are required for a polygon, got {0}")]
    TooFewCoordinates(usize),

    #[error("invalid coordinate {0:?}, expected [lat, lng]")]
    InvalidCoordinate(Vec<f64>),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The payload could not be serialized into JSON
    #[error("failed to encode json: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The request could not be built (bad URL or header value)
    #[error("failed to build request: {0}")]
    Request(String),

    /// No response was received: connection refused, DNS failure or timeout
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("server replied with status {status}")]
    Api { status: u16 },
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// The HTTP status for [`Error::Api`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status } => Some(*status),
            _ => None,
        }
    }
}
