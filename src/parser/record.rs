//! Record factory: raw type-tagged records to typed nodes.
//!
//! Each raw record is mapped to a node variant by its declared type tag.
//! Unknown tags are not an error; they degrade to [`Generic`] so the tool
//! keeps working when the upstream schema grows new record kinds.

use crate::api::schema::{RawRecord, ResourceRef};
use crate::parser::dates::{parse_date_range, DateParts};
use crate::parser::description::flatten_description;
use crate::utils::config::{
    ATTR_DATE_AND_TIME, REL_SCHEDULE_ITEMS, TAG_APP_INFO, TAG_EVENT, TAG_TRACK,
};
use crate::utils::error::FormatError;
use serde::Serialize;
use serde_json::{Map, Value};

/// A typed, constructed representation of one raw record
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Node {
    AppInfo(AppInfo),
    Track(Track),
    Event(Event),
    Generic(Generic),
}

impl Node {
    /// The record identifier, shared by every variant
    pub fn id(&self) -> &str {
        match self {
            Node::AppInfo(app) => &app.id,
            Node::Track(track) => &track.id,
            Node::Event(event) => &event.id,
            Node::Generic(generic) => &generic.id,
        }
    }

    /// References this node declares to other records.
    ///
    /// Only tracks carry outgoing references in the current schema, but the
    /// resolver treats any node with a non-empty answer uniformly.
    pub fn outgoing_refs(&self) -> &[ResourceRef] {
        match self {
            Node::Track(track) => &track.event_refs,
            _ => &[],
        }
    }
}

/// Information about the app itself
#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub id: String,
    pub name: Option<String>,

    /// Attributes of the originating raw record, kept for late field access
    pub attributes: Map<String, Value>,
}

/// A schedule track, holding its events once references are resolved
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    pub id: String,
    pub name: Option<String>,
    pub sort_order: Option<i64>,

    /// Unresolved references to this track's schedule items
    #[serde(skip)]
    pub event_refs: Vec<ResourceRef>,

    /// Resolved events, sorted by start instant. Empty until resolution runs.
    pub events: Vec<Event>,

    pub attributes: Map<String, Value>,
}

/// An event on the schedule
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: String,
    pub name: Option<String>,
    pub location: Option<String>,

    /// Flattened plain-text description; empty when none was given
    pub description: String,

    /// Start of the event, if the source carried a date
    pub start: Option<DateParts>,

    /// End of the event, if the source encoded a range
    pub end: Option<DateParts>,

    pub attributes: Map<String, Value>,
}

impl Event {
    /// The instant this event sorts by; `None` sorts before any present value
    pub fn start_date_time(&self) -> Option<chrono::NaiveDateTime> {
        self.start.map(|parts| parts.date_time)
    }

    /// The calendar date used for day grouping; undated events share `None`
    pub fn start_date(&self) -> Option<chrono::NaiveDate> {
        self.start.map(|parts| parts.date)
    }
}

/// Fallback node for record kinds this tool does not know about
#[derive(Debug, Clone, Serialize)]
pub struct Generic {
    pub id: String,
    pub attributes: Map<String, Value>,
}

/// Construct a typed node from a raw record
///
/// **Public** - the factory entry point, one call per record
///
/// # Errors
/// * `FormatError` - the record carries a malformed compact date string.
///   Unknown record kinds never fail; they become [`Node::Generic`].
pub fn construct(raw: &RawRecord) -> Result<Node, FormatError> {
    let node = match raw.kind.as_str() {
        TAG_APP_INFO => Node::AppInfo(AppInfo {
            id: raw.id.clone(),
            name: attr_str(&raw.attributes, "name"),
            attributes: raw.attributes.clone(),
        }),

        TAG_TRACK => Node::Track(Track {
            id: raw.id.clone(),
            name: attr_str(&raw.attributes, "name"),
            sort_order: raw.attributes.get("sort-order").and_then(Value::as_i64),
            event_refs: raw
                .relationships
                .get(REL_SCHEDULE_ITEMS)
                .map(|rel| rel.data.clone())
                .unwrap_or_default(),
            events: Vec::new(),
            attributes: raw.attributes.clone(),
        }),

        TAG_EVENT => Node::Event(construct_event(raw)?),

        _ => Node::Generic(Generic {
            id: raw.id.clone(),
            attributes: raw.attributes.clone(),
        }),
    };

    Ok(node)
}

fn construct_event(raw: &RawRecord) -> Result<Event, FormatError> {
    let description = raw
        .attributes
        .get("description")
        .map(flatten_description)
        .unwrap_or_default();

    // An absent or empty date attribute leaves the event undated
    let (start, end) = match raw.attributes.get(ATTR_DATE_AND_TIME).and_then(Value::as_str) {
        Some(dates) if !dates.is_empty() => {
            let (start, end) = parse_date_range(dates)?;
            (Some(start), end)
        }
        _ => (None, None),
    };

    Ok(Event {
        id: raw.id.clone(),
        name: attr_str(&raw.attributes, "title"),
        location: attr_str(&raw.attributes, "location"),
        description,
        start,
        end,
        attributes: raw.attributes.clone(),
    })
}

/// Read a string attribute, treating non-string values as absent
fn attr_str(attributes: &Map<String, Value>, key: &str) -> Option<String> {
    attributes
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}
