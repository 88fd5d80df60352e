//! Ordering and grouping of the normalized schedule.
//!
//! Events sort by start instant, tracks by their declared sort order, and
//! sorted events group into contiguous runs sharing a calendar day. All
//! sorts are stable so equal keys keep their document order.

use crate::parser::record::{Event, Track};

/// Sort events ascending by start instant.
///
/// A missing start sorts before any present value (`None` is the floor).
pub fn order_events(events: &mut [Event]) {
    events.sort_by_key(|event| event.start_date_time());
}

/// Sort tracks ascending by declared sort order, missing treated as -1
pub fn order_tracks<'a>(tracks: &mut [&'a Track]) {
    tracks.sort_by_key(|track| track.sort_order.unwrap_or(-1));
}

/// Group pre-sorted events into contiguous same-day runs.
///
/// Walks the input in order and starts a new group whenever the calendar
/// date changes from the group head's; undated events all share the `None`
/// sentinel and therefore group together. The input is assumed sorted by
/// [`order_events`] and is not re-sorted; concatenating the returned groups
/// reproduces the input exactly.
pub fn group_by_day(events: &[Event]) -> Vec<&[Event]> {
    let mut groups = Vec::new();
    let mut head = 0;

    for i in 1..=events.len() {
        if i == events.len() || events[i].start_date() != events[head].start_date() {
            groups.push(&events[head..i]);
            head = i;
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::dates::parse_date_parts;
    use serde_json::Map;

    fn event(id: &str, date: Option<&str>) -> Event {
        Event {
            id: id.to_string(),
            name: None,
            location: None,
            description: String::new(),
            start: date.map(|d| parse_date_parts(d).unwrap()),
            end: None,
            attributes: Map::new(),
        }
    }

    fn track(id: &str, sort_order: Option<i64>) -> Track {
        Track {
            id: id.to_string(),
            name: None,
            sort_order,
            event_refs: Vec::new(),
            events: Vec::new(),
            attributes: Map::new(),
        }
    }

    #[test]
    fn test_order_events_missing_start_first() {
        let mut events = vec![
            event("timed", Some("202406010900")),
            event("undated", None),
            event("midnight", Some("20240601")),
        ];
        order_events(&mut events);

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["undated", "midnight", "timed"]);
    }

    #[test]
    fn test_order_tracks_is_stable() {
        let a = track("a", Some(1));
        let b = track("b", Some(1));
        let c = track("c", None);
        let d = track("d", Some(0));

        let mut tracks = vec![&a, &b, &d, &c];
        order_tracks(&mut tracks);

        let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
        // Missing sort order comes first, and a/b keep their relative order
        assert_eq!(ids, vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn test_group_by_day_partitions_exactly() {
        let events = vec![
            event("e1", Some("20240601")),
            event("e2", Some("202406011400")),
            event("e3", Some("20240602")),
            event("e4", Some("20240602")),
        ];

        let groups = group_by_day(&events);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].len(), 2);

        // Concatenation reproduces the input
        let flat: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.iter().map(|e| e.id.as_str()))
            .collect();
        assert_eq!(flat, vec!["e1", "e2", "e3", "e4"]);

        // Adjacent groups never share a day
        assert_ne!(groups[0][0].start_date(), groups[1][0].start_date());
    }

    #[test]
    fn test_group_by_day_undated_shares_group() {
        let events = vec![event("e1", None), event("e2", None)];
        let groups = group_by_day(&events);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn test_group_by_day_empty() {
        assert!(group_by_day(&[]).is_empty());
    }
}
