//! `wayfarer-content` — travel content: blogs, destinations and itineraries.

pub mod blog;
pub mod destination;
pub mod itinerary;

pub use blog::{AuthorSummary, Blog, BlogDraft, BlogView};
pub use destination::{Destination, DestinationDraft};
pub use itinerary::{Itinerary, ItineraryDraft};
