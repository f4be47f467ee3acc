//! Itineraries: a user's ordered list of destinations over a date range.
//!
//! References are not checked for existence and `start_date` may be later
//! than `end_date`. No HTTP route exposes this collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wayfarer_core::{Collection, DestinationId, Document, DomainResult, ItineraryId, NewDocument, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    #[serde(rename = "_id")]
    pub id: ItineraryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
    #[serde(default)]
    pub destinations: Vec<DestinationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Document for Itinerary {
    type Id = ItineraryId;

    const COLLECTION: Collection = Collection::Itineraries;

    fn id(&self) -> ItineraryId {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
    #[serde(default)]
    pub destinations: Vec<DestinationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewDocument for ItineraryDraft {
    type Document = Itinerary;

    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn reversed_dates_are_accepted() {
        let draft = ItineraryDraft {
            start_date: Some(Utc.with_ymd_and_hms(2025, 6, 10, 0, 0, 0).unwrap()),
            end_date: Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn wire_format_uses_camel_case_dates_and_keeps_destination_order() {
        let first = DestinationId::new();
        let second = DestinationId::new();
        let draft = ItineraryDraft {
            user: Some(UserId::new()),
            destinations: vec![second, first],
            start_date: Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()),
            end_date: None,
            notes: Some("pack light".to_string()),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["startDate"], "2025-06-01T00:00:00Z");
        assert!(value.get("endDate").is_none());
        assert_eq!(value["destinations"][0], second.to_string());
        assert_eq!(value["destinations"][1], first.to_string());
    }

    #[test]
    fn stored_itinerary_defaults_to_no_destinations() {
        let id = ItineraryId::new();
        let value = serde_json::json!({ "_id": id.to_string(), "notes": "tbd" });
        let itinerary: Itinerary = serde_json::from_value(value).unwrap();
        assert!(itinerary.destinations.is_empty());
        assert_eq!(itinerary.user, None);
    }
}
