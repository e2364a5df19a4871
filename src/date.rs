//! Schedule timestamp parsing.
//!
//! Session start times arrive as local wall-clock strings like
//! `2024-10-10T20:00:00`. Anything that fails to parse is treated as "no
//! time": the session still exports, it just can never match the schedule
//! filter.

use time::format_description::well_known::Iso8601;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Parse a session `start_date` into a wall-clock date-time, or `None` when
/// the field is empty or unparseable.
pub fn parse_session_start(raw: &str) -> Option<PrimitiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let plain = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    if let Ok(dt) = PrimitiveDateTime::parse(s, &plain) {
        return Some(dt);
    }

    // Some feed exports carry fractional seconds or a zone offset.
    if let Ok(dt) = PrimitiveDateTime::parse(s, &Iso8601::DEFAULT) {
        return Some(dt);
    }
    if let Ok(dt) = OffsetDateTime::parse(s, &Iso8601::DEFAULT) {
        return Some(PrimitiveDateTime::new(dt.date(), dt.time()));
    }

    None
}
