use std::fmt;
use waymark::NavigationError;

#[derive(Debug)]
pub enum DemoError {
    /// Failed to read the manifest file
    ManifestRead {
        path: String,
        source: std::io::Error,
    },
    /// Manifest is not valid JSON or has the wrong shape
    ManifestParse(serde_json::Error),
    /// `log_level` is not one of off/error/warn/info/debug/trace
    InvalidLogLevel(String),
    /// Navigation was rejected by the environment
    Navigation(NavigationError),
    /// The router stopped delivering refresh requests
    RefreshChannelClosed,
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::ManifestRead { path, source } => {
                write!(f, "Failed to read manifest '{}': {}", path, source)
            }
            DemoError::ManifestParse(err) => write!(f, "Failed to parse manifest: {}", err),
            DemoError::InvalidLogLevel(level) => write!(f, "Invalid log level '{}'", level),
            DemoError::Navigation(err) => write!(f, "{}", err),
            DemoError::RefreshChannelClosed => write!(f, "Refresh channel closed"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::ManifestRead { source, .. } => Some(source),
            DemoError::ManifestParse(err) => Some(err),
            DemoError::Navigation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        DemoError::ManifestParse(err)
    }
}

impl From<NavigationError> for DemoError {
    fn from(err: NavigationError) -> Self {
        DemoError::Navigation(err)
    }
}

impl From<async_std::channel::RecvError> for DemoError {
    fn from(_: async_std::channel::RecvError) -> Self {
        DemoError::RefreshChannelClosed
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
