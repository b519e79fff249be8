//! Error types for the map client.
//!
//! Every failure of the driver or of a connection to the map service is one
//! of these variants. Nothing in the library panics on a service failure.

use std::fmt;
use std::io;

/// The main error type for map client operations.
#[derive(Debug)]
pub enum ClientError {
    /// An I/O error occurred while talking to the service.
    Io(io::Error),

    /// The service closed the connection before sending a full reply.
    ConnectionClosed,

    /// The reply did not have the expected shape.
    Protocol(String),

    /// The service answered with an error.
    Service(String),

    /// A map name, key or value cannot be sent on the wire.
    InvalidArgument(String),

    /// The stop signal fired while waiting on the service.
    Interrupted,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Io(err) => write!(f, "I/O error: {}", err),
            ClientError::ConnectionClosed => write!(f, "connection closed by the service"),
            ClientError::Protocol(msg) => write!(f, "protocol error: {}", msg),
            ClientError::Service(msg) => write!(f, "service error: {}", msg),
            ClientError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            ClientError::Interrupted => write!(f, "interrupted"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        ClientError::Io(err)
    }
}

/// A specialized Result type for map client operations.
pub type ClientResult<T> = Result<T, ClientError>;
