//! Serialization contract for the calendar presentation layer.
//!
//! The presentation adapter receives events as plain records with ISO-8601
//! local timestamps and handles any further widget-specific encoding
//! itself.

use crate::model::event::Event;
use serde::{Deserialize, Serialize};

const ISO_LOCAL: &str = "%Y-%m-%dT%H:%M:%S";

/// One event as exposed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFeedItem {
    pub id: String,
    pub title: String,
    /// ISO-8601 local timestamp, second precision.
    pub start: String,
    /// ISO-8601 local timestamp, second precision.
    pub end: String,
    pub description: Option<String>,
}

impl From<&Event> for EventFeedItem {
    fn from(event: &Event) -> Self {
        Self {
            id: event.uuid.to_string(),
            title: event.title.clone(),
            start: event.start_time.format(ISO_LOCAL).to_string(),
            end: event.end_time.format(ISO_LOCAL).to_string(),
            description: event.description.clone(),
        }
    }
}

/// Maps query results into feed records, preserving order.
pub fn feed_items(events: &[Event]) -> Vec<EventFeedItem> {
    events.iter().map(EventFeedItem::from).collect()
}

/// Encodes query results as the JSON array consumed by the calendar widget.
pub fn feed_json(events: &[Event]) -> serde_json::Result<String> {
    serde_json::to_string(&feed_items(events))
}
