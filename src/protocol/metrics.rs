//! Process-wide codec counters
//!
//! Relaxed atomics; read them through [`snapshot`].

use std::sync::atomic::{AtomicU64, Ordering};

use super::MessageType;

/// Track codec activity without external dependencies.
pub(crate) struct Metrics;

static ENCODED_MESSAGES: AtomicU64 = AtomicU64::new(0);
static DECODED_MESSAGES: AtomicU64 = AtomicU64::new(0);
static ENCODE_ERRORS: AtomicU64 = AtomicU64::new(0);
static DECODE_ERRORS: AtomicU64 = AtomicU64::new(0);
static UNKNOWN_TAGS: AtomicU64 = AtomicU64::new(0);

struct MessageTypeCounters {
    error_response: AtomicU64,
    register_request: AtomicU64,
    register_response: AtomicU64,
    chat_message: AtomicU64,
}

static MESSAGE_COUNTERS: MessageTypeCounters = MessageTypeCounters::new();

impl MessageTypeCounters {
    const fn new() -> Self {
        Self {
            error_response: AtomicU64::new(0),
            register_request: AtomicU64::new(0),
            register_response: AtomicU64::new(0),
            chat_message: AtomicU64::new(0),
        }
    }

    const fn counter(&self, msg_type: MessageType) -> &AtomicU64 {
        match msg_type {
            MessageType::ErrorResponse => &self.error_response,
            MessageType::RegisterRequest => &self.register_request,
            MessageType::RegisterResponse => &self.register_response,
            MessageType::ChatMessage => &self.chat_message,
        }
    }

    fn increment(&self, msg_type: MessageType) {
        self.counter(msg_type).fetch_add(1, Ordering::Relaxed);
    }

    fn load(&self, msg_type: MessageType) -> u64 {
        self.counter(msg_type).load(Ordering::Relaxed)
    }
}

/// Direction of message flow for counting.
#[derive(Clone, Copy)]
pub(crate) enum MessageDirection {
    Encoded,
    Decoded,
}

impl Metrics {
    #[inline]
    pub(crate) fn record_message(direction: MessageDirection, msg_type: MessageType) {
        match direction {
            MessageDirection::Encoded => {
                ENCODED_MESSAGES.fetch_add(1, Ordering::Relaxed);
            }
            MessageDirection::Decoded => {
                DECODED_MESSAGES.fetch_add(1, Ordering::Relaxed);
            }
        }
        MESSAGE_COUNTERS.increment(msg_type);
    }

    #[inline]
    pub(crate) fn record_error(direction: MessageDirection) {
        match direction {
            MessageDirection::Encoded => ENCODE_ERRORS.fetch_add(1, Ordering::Relaxed),
            MessageDirection::Decoded => DECODE_ERRORS.fetch_add(1, Ordering::Relaxed),
        };
    }

    #[inline]
    pub(crate) fn record_unknown_tag() {
        UNKNOWN_TAGS.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn totals() -> MetricsSnapshot {
        MetricsSnapshot {
            encoded_messages: ENCODED_MESSAGES.load(Ordering::Relaxed),
            decoded_messages: DECODED_MESSAGES.load(Ordering::Relaxed),
            encode_errors: ENCODE_ERRORS.load(Ordering::Relaxed),
            decode_errors: DECODE_ERRORS.load(Ordering::Relaxed),
            unknown_tags: UNKNOWN_TAGS.load(Ordering::Relaxed),
            error_responses: MESSAGE_COUNTERS.load(MessageType::ErrorResponse),
            register_requests: MESSAGE_COUNTERS.load(MessageType::RegisterRequest),
            register_responses: MESSAGE_COUNTERS.load(MessageType::RegisterResponse),
            chat_messages: MESSAGE_COUNTERS.load(MessageType::ChatMessage),
        }
    }
}

/// Process-wide codec counters.
///
/// Counters only grow; compare two snapshots to measure an interval.
#[must_use]
pub fn snapshot() -> MetricsSnapshot {
    Metrics::totals()
}

/// Lightweight snapshot of codec counters.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Messages encoded and handed to the caller or written out
    pub encoded_messages: u64,
    /// Messages decoded successfully
    pub decoded_messages: u64,
    /// Encode calls that failed, including failed writes
    pub encode_errors: u64,
    /// Decode calls that failed
    pub decode_errors: u64,
    /// Decode failures caused by a tag missing from the registry
    pub unknown_tags: u64,
    /// `ERROR_RESPONSE` messages, both directions
    pub error_responses: u64,
    /// `REGISTER_REQUEST` messages, both directions
    pub register_requests: u64,
    /// `REGISTER_RESPONSE` messages, both directions
    pub register_responses: u64,
    /// `CHAT_MESSAGE` messages, both directions
    pub chat_messages: u64,
}

impl MetricsSnapshot {
    /// Messages of one type, both directions
    #[must_use]
    pub const fn count(&self, msg_type: MessageType) -> u64 {
        match msg_type {
            MessageType::ErrorResponse => self.error_responses,
            MessageType::RegisterRequest => self.register_requests,
            MessageType::RegisterResponse => self.register_responses,
            MessageType::ChatMessage => self.chat_messages,
        }
    }

    /// Share of decode attempts that failed, if any were made
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn decode_error_ratio(&self) -> Option<f64> {
        let attempts = self.decoded_messages + self.decode_errors;
        if attempts == 0 {
            return None;
        }
        Some(self.decode_errors as f64 / attempts as f64)
    }
}
