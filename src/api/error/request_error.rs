use reqwest::StatusCode;
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum RequestError {
    TokenMissing,
    IOError { source: io::Error },
    ConnectionError { source: reqwest::Error },
    // The backend answered with a non-2xx status. `msg` is the "msg" field of the error body, if there was one.
    Status { status: StatusCode, msg: Option<String> },
    DeserializationError { source: serde_json::Error },
    UrlError { source: url::ParseError },
    IsUnitTest,
}

impl RequestError {
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            RequestError::Status { msg, .. } => msg.as_deref(),
            _ => None,
        }
    }

    /* The backend refuses a second request for the same folder with a client error whose message says the folder was
     * "already" requested. There is no dedicated status code for it. */
    pub fn is_duplicate(&self) -> bool {
        match self {
            RequestError::Status { status, msg: Some(msg) } => {
                status.is_client_error() && msg.to_lowercase().contains("already")
            }
            _ => false,
        }
    }
}

impl Error for RequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RequestError::IOError { ref source } => Some(source),
            RequestError::ConnectionError { ref source } => Some(source),
            RequestError::DeserializationError { ref source } => Some(source),
            RequestError::UrlError { ref source } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::TokenMissing => f.write_str("No token configured. API connections are disabled."),
            RequestError::IOError { source } => source.fmt(f),
            RequestError::ConnectionError { source } => source.fmt(f),
            RequestError::Status { status, msg } => match msg {
                Some(msg) => write!(f, "{status}: {msg}"),
                None => status.fmt(f),
            },
            RequestError::DeserializationError { source } => write!(f, "Unexpected response from server: {source}"),
            RequestError::UrlError { source } => source.fmt(f),
            RequestError::IsUnitTest => f.write_str("Unit tests aren't allowed to make network connections."),
        }
    }
}

impl From<io::Error> for RequestError {
    fn from(error: io::Error) -> Self {
        RequestError::IOError { source: error }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        RequestError::ConnectionError { source: error }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(error: serde_json::Error) -> Self {
        RequestError::DeserializationError { source: error }
    }
}

impl From<url::ParseError> for RequestError {
    fn from(error: url::ParseError) -> Self {
        RequestError::UrlError { source: error }
    }
}
