//! Message type tags

use std::fmt;

/// Tags that must never be assigned to a message type.
///
/// Tag 3 sat between `REGISTER_RESPONSE` and `CHAT_MESSAGE` in deployed peers
/// and is kept unused.
pub const RESERVED_TAGS: &[i32] = &[3];

/// Message types and their wire tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum MessageType {
    /// Error report sent back to a peer
    ErrorResponse = 0,
    /// Client announces its ID and UDP endpoint
    RegisterRequest = 1,
    /// Server acknowledges a registration
    RegisterResponse = 2,
    /// Chat text addressed to a user
    ChatMessage = 4,
}

impl MessageType {
    /// Every message type, in tag order
    pub const ALL: [Self; 4] = [
        Self::ErrorResponse,
        Self::RegisterRequest,
        Self::RegisterResponse,
        Self::ChatMessage,
    ];

    /// Convert from wire tag
    #[must_use]
    pub const fn from_i32(tag: i32) -> Option<Self> {
        match tag {
            0 => Some(Self::ErrorResponse),
            1 => Some(Self::RegisterRequest),
            2 => Some(Self::RegisterResponse),
            4 => Some(Self::ChatMessage),
            _ => None,
        }
    }

    /// Convert to wire tag
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Protocol name, as used in logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ErrorResponse => "ERROR_RESPONSE",
            Self::RegisterRequest => "REGISTER_REQUEST",
            Self::RegisterResponse => "REGISTER_RESPONSE",
            Self::ChatMessage => "CHAT_MESSAGE",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_roundtrip() {
        for msg_type in MessageType::ALL {
            let tag = msg_type.as_i32();
            assert_eq!(MessageType::from_i32(tag), Some(msg_type));
        }
    }

    #[test]
    fn test_reserved_tags_unassigned() {
        for &tag in RESERVED_TAGS {
            assert_eq!(MessageType::from_i32(tag), None);
        }
        assert_eq!(MessageType::from_i32(-1), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(MessageType::ChatMessage.to_string(), "CHAT_MESSAGE");
    }
}
