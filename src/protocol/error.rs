//! Chat wire error types

use thiserror::Error;

/// Chat wire protocol errors
#[derive(Error, Debug)]
pub enum Error {
    /// User ID outside `0..=9999`
    #[error("invalid user ID: {value} (expected 0..={max})", max = super::UserId::MAX)]
    InvalidUserId {
        /// Rejected value
        value: i32,
    },

    /// Port outside the `u16` range
    #[error("invalid port: {value}")]
    InvalidPort {
        /// Rejected value
        value: i32,
    },

    /// Text field longer than the length prefix (or configured limit) allows
    #[error("text too long: {len} bytes (max {max})")]
    TextTooLong {
        /// Encoded length in bytes
        len: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Rejected codec configuration
    #[error("invalid codec config: {0}")]
    InvalidConfig(String),

    /// Tag not present in the registry
    #[error("unknown message type {tag}")]
    UnknownMessageType {
        /// Tag read from the stream
        tag: i32,
    },

    /// Bytes left over after a complete message
    #[error("{count} trailing bytes after message")]
    TrailingBytes {
        /// Number of unread bytes
        count: usize,
    },

    /// IO error, including truncated input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid UTF-8 in a text field
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Two registry entries share a tag
    #[error("duplicate registry tag {tag}")]
    DuplicateTag {
        /// Offending tag
        tag: i32,
    },

    /// A message type has no decoder registered
    #[error("no decoder registered for {message_type}")]
    MissingDecoder {
        /// Type without a decoder
        message_type: super::MessageType,
    },

    /// A registry entry uses a reserved tag
    #[error("registry entry uses reserved tag {tag}")]
    ReservedTag {
        /// Offending tag
        tag: i32,
    },
}

/// Broad error category, independent of the concrete variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value violates a local invariant
    InvalidArgument,
    /// The stream is truncated, malformed or unreadable
    Io,
    /// The peer sent a tag this side does not know
    UnknownMessageType,
    /// The type registry is inconsistent
    Registry,
}

impl Error {
    /// Category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUserId { .. }
            | Self::InvalidPort { .. }
            | Self::TextTooLong { .. }
            | Self::InvalidConfig(_) => ErrorKind::InvalidArgument,
            Self::Io(_) | Self::InvalidUtf8(_) | Self::TrailingBytes { .. } => ErrorKind::Io,
            Self::UnknownMessageType { .. } => ErrorKind::UnknownMessageType,
            Self::DuplicateTag { .. } | Self::MissingDecoder { .. } | Self::ReservedTag { .. } => {
                ErrorKind::Registry
            }
        }
    }

    /// Whether the input ended before the message was complete
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::InvalidUserId { value: -1 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::UnknownMessageType { tag: 3 }.kind(), ErrorKind::UnknownMessageType);
        assert_eq!(Error::DuplicateTag { tag: 1 }.kind(), ErrorKind::Registry);

        let eof = Error::from(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert_eq!(eof.kind(), ErrorKind::Io);
        assert!(eof.is_truncated());
    }

    #[test]
    fn test_display() {
        let err = Error::InvalidUserId { value: 10_000 };
        assert_eq!(err.to_string(), "invalid user ID: 10000 (expected 0..=9999)");
    }
}
