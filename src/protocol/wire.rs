//! Wire primitives: big-endian integers and length-prefixed text
//!
//! ```text
//! int32:  [b3 b2 b1 b0]                 big-endian, two's complement
//! string: [len_hi len_lo] [UTF-8 bytes]  len counts bytes, not chars
//! ```

use std::io::Read;

use bytes::{BufMut, BytesMut};

use super::{Error, MessageType, Result, UserId};

/// Hard ceiling for a text field: the largest value of its 2-byte prefix
pub const MAX_TEXT_LEN: usize = u16::MAX as usize;

/// Tunable limits applied by the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Longest text field accepted on encode or decode, in bytes.
    pub max_text_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_text_len: MAX_TEXT_LEN,
        }
    }
}

impl CodecConfig {
    /// Builder-style override of the text limit
    #[must_use]
    pub const fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }

    /// Reject limits the wire format cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.max_text_len == 0 {
            return Err(Error::InvalidConfig("max_text_len must be non-zero".into()));
        }
        if self.max_text_len > MAX_TEXT_LEN {
            return Err(Error::InvalidConfig(format!(
                "max_text_len {} exceeds the 2-byte length prefix ({MAX_TEXT_LEN})",
                self.max_text_len
            )));
        }
        Ok(())
    }
}

/// Reads protocol fields from a byte stream
pub struct WireReader<'a> {
    inner: &'a mut dyn Read,
    max_text_len: usize,
}

impl<'a> WireReader<'a> {
    /// Wrap a stream with the given limits
    pub fn new(inner: &'a mut dyn Read, config: &CodecConfig) -> Self {
        Self {
            inner,
            max_text_len: config.max_text_len,
        }
    }

    /// Read a 4-byte big-endian integer
    pub fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.inner.read_exact(&mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }

    /// Read a user ID, validating its range
    pub fn read_user_id(&mut self) -> Result<UserId> {
        UserId::new(self.read_i32()?)
    }

    /// Read a port carried as a 4-byte integer
    pub fn read_port(&mut self) -> Result<u16> {
        let value = self.read_i32()?;
        u16::try_from(value).map_err(|_| Error::InvalidPort { value })
    }

    /// Read a length-prefixed UTF-8 string
    pub fn read_text(&mut self) -> Result<String> {
        let mut prefix = [0u8; 2];
        self.inner.read_exact(&mut prefix)?;
        let len = usize::from(u16::from_be_bytes(prefix));
        if len > self.max_text_len {
            return Err(Error::TextTooLong {
                len,
                max: self.max_text_len,
            });
        }

        let mut bytes = vec![0u8; len];
        self.inner.read_exact(&mut bytes)?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Writes protocol fields into a buffer
pub struct WireWriter<'a> {
    buf: &'a mut BytesMut,
    max_text_len: usize,
}

impl<'a> WireWriter<'a> {
    /// Wrap a buffer with the given limits
    pub fn new(buf: &'a mut BytesMut, config: &CodecConfig) -> Self {
        Self {
            buf,
            max_text_len: config.max_text_len.min(MAX_TEXT_LEN),
        }
    }

    /// Write a message tag
    pub fn write_tag(&mut self, msg_type: MessageType) {
        self.write_i32(msg_type.as_i32());
    }

    /// Write a 4-byte big-endian integer
    pub fn write_i32(&mut self, value: i32) {
        self.buf.put_i32(value);
    }

    /// Write a user ID as a 4-byte integer
    pub fn write_user_id(&mut self, id: UserId) {
        self.write_i32(id.id());
    }

    /// Write a port as a 4-byte integer
    pub fn write_port(&mut self, port: u16) {
        self.write_i32(i32::from(port));
    }

    /// Write a length-prefixed UTF-8 string
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        let len = text.len();
        let prefix = u16::try_from(len)
            .ok()
            .filter(|_| len <= self.max_text_len)
            .ok_or(Error::TextTooLong {
                len,
                max: self.max_text_len,
            })?;

        self.buf.reserve(2 + len);
        self.buf.put_u16(prefix);
        self.buf.put_slice(text.as_bytes());
        Ok(())
    }
}
