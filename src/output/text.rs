//! Plain-text rendering of the normalized schedule.
//!
//! Walks the categorized model the way a screen renderer would: tracks in
//! sort order, each track's events grouped by day, each event with its
//! time, location, description, and calendar link.

use super::calendar::google_calendar_url;
use crate::model::facade::CategorizedModel;
use crate::model::order::group_by_day;
use crate::parser::record::{Event, Track};
use chrono::NaiveDateTime;
use std::fmt::Write;

/// Render the whole schedule as text
pub fn render_schedule(model: &CategorizedModel) -> String {
    let mut out = String::new();

    if let Some(name) = model.app_name() {
        writeln!(out, "{}", name).ok();
        writeln!(out, "{}", "=".repeat(name.chars().count())).ok();
        writeln!(out).ok();
    }

    for track in model.tracks() {
        render_track(&mut out, track);
    }

    out
}

fn render_track(out: &mut String, track: &Track) {
    let name = track.name.as_deref().unwrap_or("Unknown Schedule Track");
    writeln!(out, "{}", name).ok();
    writeln!(out, "{}", "-".repeat(name.chars().count())).ok();

    for group in group_by_day(&track.events) {
        writeln!(out).ok();
        writeln!(out, "{}", day_heading(&group[0])).ok();

        for event in group {
            render_event(out, event);
        }
    }

    writeln!(out).ok();
}

fn day_heading(event: &Event) -> String {
    match event.start_date() {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => "No Date Specified".to_string(),
    }
}

fn render_event(out: &mut String, event: &Event) {
    writeln!(out).ok();
    writeln!(out, "  {}", event.name.as_deref().unwrap_or("Unknown Event")).ok();

    if let Some(line) = time_line(event) {
        writeln!(out, "    {}", line).ok();
    }

    if let Some(location) = event.location.as_deref().filter(|l| !l.is_empty()) {
        writeln!(out, "    {}", location).ok();
    }

    if !event.description.is_empty() {
        writeln!(out, "    {}", event.description).ok();
    }

    writeln!(out, "    Add to calendar: {}", google_calendar_url(event)).ok();
}

/// Time line for an event, or `None` when no time of day was encoded
fn time_line(event: &Event) -> Option<String> {
    let start = event.start.filter(|parts| parts.time.is_some())?;

    match event.end.filter(|parts| parts.time.is_some()) {
        Some(end) => Some(format!(
            "{} \u{2013} {} ({})",
            time_string(start.date_time),
            time_string(end.date_time),
            duration_string(start.date_time, end.date_time)
        )),
        None => Some(time_string(start.date_time)),
    }
}

/// Format an instant as a time of day without seconds
fn time_string(date_time: NaiveDateTime) -> String {
    date_time.format("%-I:%M %P").to_string()
}

/// Format the span between two instants in hours and minutes
fn duration_string(from: NaiveDateTime, to: NaiveDateTime) -> String {
    let minutes = (to - from).num_minutes();

    if minutes <= 60 {
        format!("{} min", minutes)
    } else if minutes % 60 == 0 {
        format!("{} hr", minutes / 60)
    } else {
        format!("{} hr {} min", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::dates::parse_date_parts;
    use serde_json::Map;

    fn timed_event(start: &str, end: &str) -> Event {
        Event {
            id: "ev".to_string(),
            name: Some("Kickoff".to_string()),
            location: Some("Hall A".to_string()),
            description: "Opening session".to_string(),
            start: Some(parse_date_parts(start).unwrap()),
            end: Some(parse_date_parts(end).unwrap()),
            attributes: Map::new(),
        }
    }

    #[test]
    fn test_duration_string() {
        let from = parse_date_parts("202406010900").unwrap().date_time;

        let to = parse_date_parts("202406010945").unwrap().date_time;
        assert_eq!(duration_string(from, to), "45 min");

        let to = parse_date_parts("202406011100").unwrap().date_time;
        assert_eq!(duration_string(from, to), "2 hr");

        let to = parse_date_parts("202406011130").unwrap().date_time;
        assert_eq!(duration_string(from, to), "2 hr 30 min");
    }

    #[test]
    fn test_time_line_with_range() {
        let line = time_line(&timed_event("202406010900", "202406011030")).unwrap();
        assert_eq!(line, "9:00 am \u{2013} 10:30 am (1 hr 30 min)");
    }

    #[test]
    fn test_time_line_absent_without_time_of_day() {
        let mut event = timed_event("202406010900", "202406011030");
        event.start = Some(parse_date_parts("20240601").unwrap());
        event.end = None;
        assert_eq!(time_line(&event), None);
    }

    #[test]
    fn test_day_heading_no_date() {
        let mut event = timed_event("202406010900", "202406011000");
        event.start = None;
        assert_eq!(day_heading(&event), "No Date Specified");
    }
}
