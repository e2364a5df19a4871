//! Session-level and film-level predicates evaluated during the join.

use crate::config::{CategoryFilterConfig, TimeFilterConfig};
use time::PrimitiveDateTime;

/// True when the schedule filter drops this session outright.
///
/// Requires all of: filter enabled, parseable start, weekday excluded, clock
/// time strictly before the threshold. A session with no parseable start is
/// never dropped here.
pub fn schedule_drops(start: Option<PrimitiveDateTime>, cfg: &TimeFilterConfig) -> bool {
    if !cfg.enabled {
        return false;
    }
    let Some(dt) = start else {
        return false;
    };
    cfg.excluded_days.contains(&dt.weekday()) && dt.time() < cfg.earliest_allowed_time
}

/// Resolved type/genre names that hit the exclusion sets. Empty means the
/// film row is retained; non-empty is logged by the caller before skipping.
pub fn category_violations(
    type_names: &[String],
    genre_names: &[String],
    cfg: &CategoryFilterConfig,
) -> Vec<String> {
    if !cfg.enabled {
        return Vec::new();
    }
    let mut offending = Vec::new();
    for name in type_names {
        if cfg.types_to_exclude.contains(name) {
            offending.push(name.clone());
        }
    }
    for name in genre_names {
        if cfg.genres_to_exclude.contains(name) {
            offending.push(name.clone());
        }
    }
    offending
}
