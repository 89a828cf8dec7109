use std::fmt;

/// The remote operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Tags,
    Image,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Tags => write!(f, "tags"),
            Endpoint::Image => write!(f, "image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    /// Body could not be interpreted (e.g. tags were not a JSON string array).
    Decode,
    TooLarge { max_bytes: u64 },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "unexpected response body"),
            FailureKind::TooLarge { max_bytes } => {
                write!(f, "response larger than {max_bytes} bytes")
            }
        }
    }
}

/// Any failed fetch against the remote service. This is the only error the
/// engine produces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{endpoint} request failed ({cause}): {message}")]
pub struct RemoteFetchError {
    pub endpoint: Endpoint,
    pub cause: FailureKind,
    pub message: String,
}

impl RemoteFetchError {
    pub(crate) fn new(endpoint: Endpoint, cause: FailureKind, message: impl Into<String>) -> Self {
        Self {
            endpoint,
            cause,
            message: message.into(),
        }
    }

    pub(crate) fn from_reqwest(endpoint: Endpoint, err: reqwest::Error) -> Self {
        let cause = if err.is_timeout() {
            FailureKind::Timeout
        } else {
            FailureKind::Network
        };
        Self::new(endpoint, cause, err.to_string())
    }
}
