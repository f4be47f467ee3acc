//! `wayfarer-core` — document-model building blocks shared by every collection.
//!
//! This crate contains **pure** primitives (no storage or HTTP concerns).

pub mod cast;
pub mod document;
pub mod error;
pub mod id;

pub use document::{Collection, Document, NewDocument, require_text};
pub use error::{DomainError, DomainResult};
pub use id::{BlogId, DestinationId, DocumentKey, ItineraryId, UserId, parse_reference};
