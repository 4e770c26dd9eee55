use std::fmt;

/// Errors raised by the navigation environment
#[derive(Debug)]
pub enum NavigationError {
    /// An href (or origin) could not be resolved to a location
    InvalidLocation {
        href: String,
        source: url::ParseError,
    },
    /// The environment refused or failed to change its location
    NavigationFailed(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidLocation { href, source } => {
                write!(f, "Invalid location '{}': {}", href, source)
            }
            NavigationError::NavigationFailed(msg) => {
                write!(f, "Navigation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for NavigationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavigationError::InvalidLocation { source, .. } => Some(source),
            _ => None,
        }
    }
}
