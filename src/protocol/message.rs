//! Chat protocol messages
//!
//! Each variant owns its fields and knows its own field order. The tag is
//! written by [`WireMessage::encode`] and consumed by the dispatcher before a
//! variant's [`WireMessage::decode`] runs.

use std::fmt;
use std::io;
use std::net::ToSocketAddrs;

use bytes::Bytes;

use super::wire::{WireReader, WireWriter};
use super::{MessageType, Result, User, UserId};

/// Encode/decode behavior shared by every message variant
pub trait WireMessage: Sized + Into<Message> {
    /// Tag this variant is registered under
    const MESSAGE_TYPE: MessageType;

    /// Write the fields that follow the tag
    fn encode_fields(&self, writer: &mut WireWriter<'_>) -> Result<()>;

    /// Read the fields that follow the tag
    fn decode(reader: &mut WireReader<'_>) -> Result<Self>;

    /// Write the tag, then the fields
    fn encode(&self, writer: &mut WireWriter<'_>) -> Result<()> {
        writer.write_tag(Self::MESSAGE_TYPE);
        self.encode_fields(writer)
    }
}

/// Registration request: user ID plus the endpoint chat should be sent to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterRequest {
    id: UserId,
    host: String,
    port: u16,
}

impl RegisterRequest {
    /// Create a registration request
    pub fn new(id: UserId, host: impl Into<String>, port: u16) -> Self {
        Self {
            id,
            host: host.into(),
            port,
        }
    }

    /// Registering user
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.id
    }

    /// Host name or address literal of the user's endpoint
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// UDP port of the user's endpoint
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Resolve the endpoint and build the user record.
    ///
    /// Uses the system resolver for names; the first address wins.
    pub fn to_user(&self) -> Result<User> {
        let endpoint = (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no address for {}:{}", self.host, self.port),
                )
            })?;
        Ok(User::new(self.id, endpoint))
    }
}

impl WireMessage for RegisterRequest {
    const MESSAGE_TYPE: MessageType = MessageType::RegisterRequest;

    fn encode_fields(&self, writer: &mut WireWriter<'_>) -> Result<()> {
        writer.write_user_id(self.id);
        writer.write_text(&self.host)?;
        writer.write_port(self.port);
        Ok(())
    }

    fn decode(reader: &mut WireReader<'_>) -> Result<Self> {
        let id = reader.read_user_id()?;
        let host = reader.read_text()?;
        let port = reader.read_port()?;
        Ok(Self { id, host, port })
    }
}

impl fmt::Display for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}:{})",
            Self::MESSAGE_TYPE,
            self.id,
            self.host,
            self.port
        )
    }
}

/// Registration acknowledgement, no payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterResponse;

impl RegisterResponse {
    /// Create an acknowledgement
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl WireMessage for RegisterResponse {
    const MESSAGE_TYPE: MessageType = MessageType::RegisterResponse;

    fn encode_fields(&self, _writer: &mut WireWriter<'_>) -> Result<()> {
        Ok(())
    }

    fn decode(_reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(Self)
    }
}

impl fmt::Display for RegisterResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ()", Self::MESSAGE_TYPE)
    }
}

/// Human-readable error report
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorResponse {
    text: String,
}

impl ErrorResponse {
    /// Create an error response from text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Create an error response from a local failure.
    ///
    /// Only the `Display` text crosses the wire; the error type and its
    /// source chain are dropped.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(err.to_string())
    }

    /// Error text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for ErrorResponse {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ErrorResponse {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl WireMessage for ErrorResponse {
    const MESSAGE_TYPE: MessageType = MessageType::ErrorResponse;

    fn encode_fields(&self, writer: &mut WireWriter<'_>) -> Result<()> {
        writer.write_text(&self.text)
    }

    fn decode(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(Self {
            text: reader.read_text()?,
        })
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", Self::MESSAGE_TYPE, self.text)
    }
}

/// Chat text addressed to one user, or to everyone via [`UserId::BROADCAST`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatMessage {
    recipient: UserId,
    text: String,
}

impl ChatMessage {
    /// Create a chat message
    pub fn new(recipient: UserId, text: impl Into<String>) -> Self {
        Self {
            recipient,
            text: text.into(),
        }
    }

    /// Recipient of the message
    #[must_use]
    pub const fn recipient(&self) -> UserId {
        self.recipient
    }

    /// Message content
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl WireMessage for ChatMessage {
    const MESSAGE_TYPE: MessageType = MessageType::ChatMessage;

    fn encode_fields(&self, writer: &mut WireWriter<'_>) -> Result<()> {
        writer.write_user_id(self.recipient);
        writer.write_text(&self.text)
    }

    fn decode(reader: &mut WireReader<'_>) -> Result<Self> {
        let recipient = reader.read_user_id()?;
        let text = reader.read_text()?;
        Ok(Self { recipient, text })
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (to {}: '{}')",
            Self::MESSAGE_TYPE,
            self.recipient,
            self.text
        )
    }
}

/// Any protocol message
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// See [`ErrorResponse`]
    ErrorResponse(ErrorResponse),
    /// See [`RegisterRequest`]
    RegisterRequest(RegisterRequest),
    /// See [`RegisterResponse`]
    RegisterResponse(RegisterResponse),
    /// See [`ChatMessage`]
    ChatMessage(ChatMessage),
}

impl Message {
    /// Get message type
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        match self {
            Self::ErrorResponse(_) => ErrorResponse::MESSAGE_TYPE,
            Self::RegisterRequest(_) => RegisterRequest::MESSAGE_TYPE,
            Self::RegisterResponse(_) => RegisterResponse::MESSAGE_TYPE,
            Self::ChatMessage(_) => ChatMessage::MESSAGE_TYPE,
        }
    }

    /// Write tag and fields of the wrapped variant
    pub fn encode_to(&self, writer: &mut WireWriter<'_>) -> Result<()> {
        match self {
            Self::ErrorResponse(msg) => msg.encode(writer),
            Self::RegisterRequest(msg) => msg.encode(writer),
            Self::RegisterResponse(msg) => msg.encode(writer),
            Self::ChatMessage(msg) => msg.encode(writer),
        }
    }

    /// Encode message to bytes
    pub fn to_bytes(&self) -> Result<Bytes> {
        super::Codec::default().to_bytes(self)
    }

    /// Decode exactly one message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        super::Codec::default().decode_exact(bytes)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ErrorResponse(msg) => fmt::Display::fmt(msg, f),
            Self::RegisterRequest(msg) => fmt::Display::fmt(msg, f),
            Self::RegisterResponse(msg) => fmt::Display::fmt(msg, f),
            Self::ChatMessage(msg) => fmt::Display::fmt(msg, f),
        }
    }
}

impl From<ErrorResponse> for Message {
    fn from(msg: ErrorResponse) -> Self {
        Self::ErrorResponse(msg)
    }
}

impl From<RegisterRequest> for Message {
    fn from(msg: RegisterRequest) -> Self {
        Self::RegisterRequest(msg)
    }
}

impl From<RegisterResponse> for Message {
    fn from(msg: RegisterResponse) -> Self {
        Self::RegisterResponse(msg)
    }
}

impl From<ChatMessage> for Message {
    fn from(msg: ChatMessage) -> Self {
        Self::ChatMessage(msg)
    }
}
