use std::fmt;

/// Result type for leadgen-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Lead collection violated its invariants
    Types(leadgen_types::Error),

    /// Derivation or export failed
    Engine(leadgen_engine::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// HTTP transport failed
    Http(reqwest::Error),

    /// Data source answered with a non-success status
    HttpStatus { status: u16, body: String },

    /// Data source returned malformed data (missing fields, wrong types, duplicate ids)
    DataSource(String),

    /// Configuration error
    Config(String),
}

impl Error {
    /// Failures worth retrying: timeouts, refused connections, throttling and 5xx answers.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Http(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            Error::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "{}", err),
            Error::Engine(err) => write!(f, "Engine error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::HttpStatus { status, body } => {
                write!(f, "Data source returned HTTP {}: {}", status, body)
            }
            Error::DataSource(msg) => write!(f, "Data source error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Engine(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::HttpStatus { .. } | Error::DataSource(_) | Error::Config(_) => None,
        }
    }
}

impl From<leadgen_types::Error> for Error {
    fn from(err: leadgen_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<leadgen_engine::Error> for Error {
    fn from(err: leadgen_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
