//! Binary wire protocol for a small registration/chat system
//!
//! Messages are a closed set of variants. Each is written as a 4-byte
//! big-endian tag followed by its fields; a registry built once per process
//! maps the tag back to the right decoder.
//!
//! # Quick Start
//!
//! ```rust
//! use chat_wire::{ChatMessage, Message, MessageType, UserId, decode_message, encode_message};
//!
//! let msg: Message = ChatMessage::new(UserId::new(42)?, "hi").into();
//!
//! let mut wire = Vec::new();
//! encode_message(&msg, &mut wire)?;
//!
//! let decoded = decode_message(wire.as_slice())?;
//! assert_eq!(decoded.message_type(), MessageType::ChatMessage);
//! assert_eq!(decoded, msg);
//! # Ok::<(), chat_wire::Error>(())
//! ```
//!
//! # Wire Format
//!
//! | Tag | Variant | Fields after tag |
//! |---|---|---|
//! | 0 | `ErrorResponse` | text: string |
//! | 1 | `RegisterRequest` | user ID: i32, host: string, port: i32 |
//! | 2 | `RegisterResponse` | (none) |
//! | 4 | `ChatMessage` | recipient ID: i32, text: string |
//!
//! Integers are big-endian. Strings are a 2-byte big-endian byte length
//! followed by UTF-8. Tag 3 is reserved.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;

pub use protocol::{
    ChatMessage, Codec, CodecConfig, Error, ErrorKind, ErrorResponse, Message, MessageType,
    RegisterRequest, RegisterResponse, Result, User, UserId, decode_message, encode_message,
};

/// Protocol revision this crate speaks
pub const VERSION: &str = "1.0";
