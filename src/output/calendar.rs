//! "Add to external calendar" deep links for events.

use crate::parser::dates::DateParts;
use crate::parser::record::Event;
use urlencoding::encode;

/// Base of the Google Calendar event template URL
const CALENDAR_BASE: &str = "https://www.google.com/calendar/render?action=TEMPLATE";

/// Build a Google Calendar link for an event.
///
/// Each query parameter is included only when the corresponding field is
/// non-empty; an event without an end instant reuses its start.
pub fn google_calendar_url(event: &Event) -> String {
    let mut url = String::from(CALENDAR_BASE);

    if let Some(name) = event.name.as_deref().filter(|n| !n.is_empty()) {
        url.push_str(&format!("&text={}", encode(name)));
    }

    if let Some(start) = &event.start {
        let end = event.end.as_ref().unwrap_or(start);
        url.push_str(&format!(
            "&dates={}/{}",
            basic_timestamp(start),
            basic_timestamp(end)
        ));
    }

    if let Some(location) = event.location.as_deref().filter(|l| !l.is_empty()) {
        url.push_str(&format!("&location={}", encode(location)));
    }

    if !event.description.is_empty() {
        url.push_str(&format!("&details={}", encode(&event.description)));
    }

    url
}

/// Format an instant in the basic `YYYYMMDDTHHMMSSZ` form calendars expect
fn basic_timestamp(parts: &DateParts) -> String {
    parts.date_time.format("%Y%m%dT%H%M%SZ").to_string()
}
