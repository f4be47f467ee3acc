//! Document trait: a stored record with a store-assigned identity.

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{DomainError, DomainResult};
use crate::id::DocumentKey;

/// Named set of documents of one entity type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Blogs,
    Destinations,
    Itineraries,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Users,
        Collection::Blogs,
        Collection::Destinations,
        Collection::Itineraries,
    ];

    /// Storage name of the collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Blogs => "blogs",
            Collection::Destinations => "destinations",
            Collection::Itineraries => "itineraries",
        }
    }

    /// Singular entity name used in validation messages.
    pub fn entity_name(&self) -> &'static str {
        match self {
            Collection::Users => "User",
            Collection::Blogs => "Blog",
            Collection::Destinations => "Destination",
            Collection::Itineraries => "Itinerary",
        }
    }
}

impl core::fmt::Display for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted document.
///
/// The serialized form carries the identifier as `_id`.
pub trait Document: Serialize + DeserializeOwned + Clone + core::fmt::Debug + Send + Sync + 'static {
    type Id: DocumentKey;

    /// Collection this document lives in.
    const COLLECTION: Collection;

    fn id(&self) -> Self::Id;
}

/// Caller-supplied fields of a document, before the store assigns an `_id`.
///
/// `validate` is the explicit schema check; repositories call it before any
/// write is attempted.
pub trait NewDocument: Serialize + Send + Sync {
    type Document: Document;

    fn validate(&self) -> DomainResult<()>;
}

/// Require a present, non-empty string field. Whitespace counts as content.
pub fn require_text(collection: Collection, field: &str, value: Option<&str>) -> DomainResult<()> {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(DomainError::validation(format!(
            "{} validation failed: {field} is required",
            collection.entity_name()
        ))),
    }
}
