//! User identifiers and endpoints

use std::fmt;
use std::net::SocketAddr;

use super::{Error, Result};

/// Validated user identifier in `0..=9999`.
///
/// `0` is reserved as the broadcast identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct UserId(i32);

impl UserId {
    /// Smallest valid ID
    pub const MIN: i32 = 0;
    /// Largest valid ID
    pub const MAX: i32 = 9999;
    /// Broadcast address, "all users"
    pub const BROADCAST: Self = match Self::checked(0) {
        Some(id) => id,
        None => panic!("broadcast ID out of range"),
    };

    /// Create a user ID, rejecting values outside `0..=9999`
    pub fn new(id: i32) -> Result<Self> {
        Self::checked(id).ok_or(Error::InvalidUserId { value: id })
    }

    const fn checked(id: i32) -> Option<Self> {
        if id >= Self::MIN && id <= Self::MAX {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Underlying integer
    #[must_use]
    pub const fn id(self) -> i32 {
        self.0
    }

    /// Whether this is the broadcast ID
    #[must_use]
    pub const fn is_broadcast(self) -> bool {
        self.0 == Self::BROADCAST.0
    }
}

impl TryFrom<i32> for UserId {
    type Error = Error;

    fn try_from(id: i32) -> Result<Self> {
        Self::new(id)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user: identifier plus the endpoint it receives chat on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct User {
    user_id: UserId,
    endpoint: SocketAddr,
}

impl User {
    /// Create a user record
    #[must_use]
    pub const fn new(user_id: UserId, endpoint: SocketAddr) -> Self {
        Self { user_id, endpoint }
    }

    /// User identifier
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Network endpoint of the user
    #[must_use]
    pub const fn endpoint(&self) -> SocketAddr {
        self.endpoint
    }
}
