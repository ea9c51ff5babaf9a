//! Chat protocol core implementation
//!
//! This module provides the wire format, message types, registry and codec.

mod codec;
mod error;
mod message;
pub mod metrics;
mod registry;
mod types;
mod user;
mod wire;

pub use codec::{Codec, decode_message, encode_message};
pub use error::{Error, ErrorKind, Result};
pub use message::{
    ChatMessage, ErrorResponse, Message, RegisterRequest, RegisterResponse, WireMessage,
};
pub use registry::{DecodeFn, Registry, RegistryEntry};
pub use types::{MessageType, RESERVED_TAGS};
pub use user::{User, UserId};
pub use wire::{CodecConfig, MAX_TEXT_LEN, WireReader, WireWriter};

/// Size of a tag on the wire
pub const TAG_SIZE: usize = 4;
