use serde::{Deserialize, Serialize};

use wayfarer_core::{Collection, DestinationId, Document, DomainResult, NewDocument, require_text};

/// Stored destination. `name` is the only required field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(rename = "_id")]
    pub id: DestinationId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Usually an image URL; not checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Document for Destination {
    type Id = DestinationId;

    const COLLECTION: Collection = Collection::Destinations;

    fn id(&self) -> DestinationId {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewDocument for DestinationDraft {
    type Document = Destination;

    fn validate(&self) -> DomainResult<()> {
        require_text(Collection::Destinations, "name", self.name.as_deref())
    }
}
