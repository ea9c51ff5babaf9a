//! Tag to decoder registry
//!
//! The table is built once, validated, and read-only afterwards. A variant can
//! only be registered through [`RegistryEntry::of`], which requires a
//! [`WireMessage`] implementation, so "no decoder" is a compile error for
//! anything that reaches the table. [`Registry::from_entries`] still checks
//! coverage, uniqueness and reserved tags, because those are properties of the
//! table as a whole.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use super::message::{ChatMessage, ErrorResponse, RegisterRequest, RegisterResponse, WireMessage};
use super::types::RESERVED_TAGS;
use super::wire::WireReader;
use super::{Error, Message, MessageType, Result};

/// Decodes the fields following a tag into a message
pub type DecodeFn = fn(&mut WireReader<'_>) -> Result<Message>;

/// One row of the registry
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    tag: i32,
    message_type: MessageType,
    decode: DecodeFn,
}

impl RegistryEntry {
    /// Entry for a variant, using its own tag and decoder
    #[must_use]
    pub fn of<M: WireMessage>() -> Self {
        Self {
            tag: M::MESSAGE_TYPE.as_i32(),
            message_type: M::MESSAGE_TYPE,
            decode: decode_variant::<M>,
        }
    }

    /// Tag this entry answers to
    #[must_use]
    pub const fn tag(&self) -> i32 {
        self.tag
    }

    /// Message type produced by the decoder
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        self.message_type
    }
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("tag", &self.tag())
            .field("message_type", &self.message_type)
            .finish_non_exhaustive()
    }
}

fn decode_variant<M: WireMessage>(reader: &mut WireReader<'_>) -> Result<Message> {
    M::decode(reader).map(Into::into)
}

/// Immutable tag to decoder table
pub struct Registry {
    decoders: HashMap<i32, DecodeFn>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<_> = self.decoders.keys().copied().collect();
        tags.sort_unstable();
        f.debug_struct("Registry").field("tags", &tags).finish()
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Entries for every message type this crate speaks
    #[must_use]
    pub fn standard_entries() -> [RegistryEntry; 4] {
        [
            RegistryEntry::of::<ErrorResponse>(),
            RegistryEntry::of::<RegisterRequest>(),
            RegistryEntry::of::<RegisterResponse>(),
            RegistryEntry::of::<ChatMessage>(),
        ]
    }

    /// Build and validate a registry.
    ///
    /// Fails on a duplicate tag, a reserved tag, or a message type without an
    /// entry.
    pub fn from_entries(entries: &[RegistryEntry]) -> Result<Self> {
        let mut decoders = HashMap::with_capacity(entries.len());
        let mut covered = Vec::with_capacity(entries.len());

        for entry in entries {
            let tag = entry.tag();
            if RESERVED_TAGS.contains(&tag) {
                return Err(Error::ReservedTag { tag });
            }
            if decoders.insert(tag, entry.decode).is_some() {
                return Err(Error::DuplicateTag { tag });
            }
            covered.push(entry.message_type);
        }

        if let Some(&message_type) = MessageType::ALL
            .iter()
            .find(|msg_type| !covered.contains(msg_type))
        {
            return Err(Error::MissingDecoder { message_type });
        }

        debug!(entries = decoders.len(), "message registry built");
        Ok(Self { decoders })
    }

    /// The process-wide registry, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the standard entries fail validation; the process must not
    /// decode with a partial table.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            Self::from_entries(&Self::standard_entries())
                .unwrap_or_else(|err| panic!("message registry is inconsistent: {err}"))
        })
    }

    /// Look up the decoder for a tag
    pub fn decoder(&self, tag: i32) -> Result<DecodeFn> {
        self.decoders
            .get(&tag)
            .copied()
            .ok_or(Error::UnknownMessageType { tag })
    }

    /// Number of registered tags
    #[must_use]
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Whether the registry has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}
