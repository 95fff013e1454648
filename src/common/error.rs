use thiserror::Error;

use crate::ast::Location;

/// Result type for sbxc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the sbxc front-end
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A construct is structurally incomplete (e.g. a try without a body).
    #[error("Malformed construct at {location}: {message}")]
    MalformedConstruct {
        message: String,
        location: Location,
    },

    #[error("Semantic error at {location}: {message}")]
    Semantic {
        message: String,
        location: Location,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A phase was driven out of order, e.g. lowering a statement that was
    /// never analyzed.
    #[error("Internal compiler error at {location}: {message}")]
    Internal {
        message: String,
        location: Location,
    },
}

impl Error {
    /// Create a malformed-construct error anchored at `location`
    pub fn malformed(location: &Location, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::trace!(%location, %message, "Error::malformed");
        Self::MalformedConstruct {
            message,
            location: location.clone(),
        }
    }

    /// Create a semantic error anchored at `location`
    pub fn semantic(location: &Location, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::trace!(%location, %message, "Error::semantic");
        Self::Semantic {
            message,
            location: location.clone(),
        }
    }

    /// Create an internal compiler error anchored at `location`
    pub fn internal(location: &Location, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::trace!(%location, %message, "Error::internal");
        Self::Internal {
            message,
            location: location.clone(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// Source location the error points at, if it has one
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::MalformedConstruct { location, .. }
            | Self::Semantic { location, .. }
            | Self::Internal { location, .. } => Some(location),
            Self::Config { .. } => None,
        }
    }
}
