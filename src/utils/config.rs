//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for schedule requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URL of the Yapp preview API; the app ID is appended as the final path segment
pub const API_BASE_URL: &str = "https://www.yapp.us/api/preview/v2/yapps";

// Type tags used by the wire format to mark record kinds
pub const TAG_APP_INFO: &str = "yapps";
pub const TAG_TRACK: &str = "tracks";
pub const TAG_EVENT: &str = "schedule-items";

/// Relationship name linking a track to its events
pub const REL_SCHEDULE_ITEMS: &str = "schedule-items";

/// Attribute carrying the compact date/time encoding on an event
pub const ATTR_DATE_AND_TIME: &str = "date-and-time";

/// Lone strings equal to this marker are dropped when flattening descriptions.
/// Upstream appears to emit bare HTML paragraph tags inside rich text; this is
/// an assumption about that data, so the flattener keeps it overridable.
pub const PARAGRAPH_MARKER: &str = "p";
