//! Strongly-typed document identifiers.
//!
//! IDs are opaque, assigned by the document store at insert time and never
//! changed afterwards. Reference fields hold these IDs directly.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::str::FromStr;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::error::DomainError;

/// Common surface of every document identifier.
pub trait DocumentKey:
    Copy
    + Eq
    + Hash
    + Debug
    + Display
    + FromStr<Err = DomainError>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    fn from_uuid(uuid: Uuid) -> Self;

    fn as_uuid(&self) -> &Uuid;
}

/// Identifier of a document in the `users` collection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

/// Identifier of a document in the `blogs` collection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogId(Uuid);

/// Identifier of a document in the `destinations` collection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(Uuid);

/// Identifier of a document in the `itineraries` collection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItineraryId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Stores call this when assigning `_id`;
            /// tests may call it to build dangling references.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl DocumentKey for $t {
            fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s.trim())
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

/// Parse an optional reference field. Blank input counts as absent.
///
/// Only the shape of the identifier is checked; the referenced document may
/// not exist.
pub fn parse_reference<K: DocumentKey>(raw: Option<&str>) -> Result<Option<K>, DomainError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

impl_uuid_newtype!(UserId, "UserId");
impl_uuid_newtype!(BlogId, "BlogId");
impl_uuid_newtype!(DestinationId, "DestinationId");
impl_uuid_newtype!(ItineraryId, "ItineraryId");
