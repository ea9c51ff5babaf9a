//! Message dispatcher (encode/decode entry points)
//!
//! # Format
//!
//! ```text
//! [TAG (i32, BE)] [FIELDS (variant-specific)]
//! ```
//!
//! There is no overall length prefix. A variant's shape is fixed by its tag;
//! text fields carry their own 2-byte length.

use std::io::{Read, Write};

use bytes::{Bytes, BytesMut};
use tracing::{debug, instrument, trace};

use super::metrics::{MessageDirection, Metrics};
use super::wire::{CodecConfig, WireReader, WireWriter};
use super::{Error, Message, Registry, Result};

/// Initial buffer size; covers a chat line without reallocating
const ENCODE_CAPACITY: usize = 128;

/// Encoder/decoder bound to a [`CodecConfig`]
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec, rejecting configurations the wire format cannot honor
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a message into a fresh buffer
    pub fn to_bytes(&self, message: &Message) -> Result<Bytes> {
        let result = self.encode_one(message);
        record_encode(message, &result);
        result
    }

    /// Encode a message onto a stream.
    ///
    /// The message is fully encoded before anything is written, so an
    /// encoding error leaves the stream untouched.
    #[instrument(level = "trace", skip_all)]
    pub fn encode<W: Write>(&self, message: &Message, mut writer: W) -> Result<()> {
        let result = self.encode_one(message).and_then(|bytes| {
            writer.write_all(&bytes)?;
            Ok(bytes)
        });
        record_encode(message, &result);
        result.map(drop)
    }

    /// Decode the next message from a stream.
    ///
    /// Reads exactly one tag and the fields it implies. Bytes after the
    /// message stay in the stream.
    #[instrument(level = "trace", skip_all)]
    pub fn decode<R: Read>(&self, mut reader: R) -> Result<Message> {
        let result = self.decode_one(&mut reader);
        record_decode(&result);
        result
    }

    /// Decode exactly one message occupying all of `bytes`
    pub fn decode_exact(&self, bytes: &[u8]) -> Result<Message> {
        let result = self.decode_exact_one(bytes);
        record_decode(&result);
        result
    }

    fn encode_one(&self, message: &Message) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(ENCODE_CAPACITY);
        message.encode_to(&mut WireWriter::new(&mut buf, &self.config))?;
        trace!(
            message_type = %message.message_type(),
            len = buf.len(),
            "encoded message"
        );
        Ok(buf.freeze())
    }

    fn decode_one(&self, reader: &mut dyn Read) -> Result<Message> {
        let mut wire = WireReader::new(reader, &self.config);
        let tag = wire.read_i32()?;
        let decode = Registry::global().decoder(tag)?;
        let message = decode(&mut wire)?;
        trace!(tag, message_type = %message.message_type(), "decoded message");
        Ok(message)
    }

    fn decode_exact_one(&self, bytes: &[u8]) -> Result<Message> {
        let mut input = bytes;
        let message = self.decode_one(&mut input)?;
        if !input.is_empty() {
            return Err(Error::TrailingBytes { count: input.len() });
        }
        Ok(message)
    }
}

fn record_encode<T>(message: &Message, result: &Result<T>) {
    match result {
        Ok(_) => Metrics::record_message(MessageDirection::Encoded, message.message_type()),
        Err(_) => Metrics::record_error(MessageDirection::Encoded),
    }
}

fn record_decode(result: &Result<Message>) {
    match result {
        Ok(message) => {
            Metrics::record_message(MessageDirection::Decoded, message.message_type());
        }
        Err(Error::UnknownMessageType { tag }) => {
            debug!(tag, "unknown message type");
            Metrics::record_unknown_tag();
            Metrics::record_error(MessageDirection::Decoded);
        }
        Err(_) => Metrics::record_error(MessageDirection::Decoded),
    }
}

/// Encode a message onto a stream with the default configuration
pub fn encode_message<W: Write>(message: &Message, writer: W) -> Result<()> {
    Codec::default().encode(message, writer)
}

/// Decode the next message from a stream with the default configuration
pub fn decode_message<R: Read>(reader: R) -> Result<Message> {
    Codec::default().decode(reader)
}
