//! Turning raw records into typed nodes: date codec, description
//! flattening, and the record factory.

pub mod dates;
pub mod description;
pub mod record;

pub use dates::{parse_compact_date_time, parse_date_parts, parse_date_range, DateParts};
pub use description::{flatten_description, flatten_with_marker};
pub use record::{construct, AppInfo, Event, Generic, Node, Track};
