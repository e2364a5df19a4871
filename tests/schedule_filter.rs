#[path = "common/mod.rs"]
mod common;

use common::*;
use fetl::{parse_session_start, schedule_drops, FestivalETL, TimeFilterConfig};
use serde_json::json;
use time::macros::{datetime, time};
use time::Weekday;

fn two_thursday_sessions(base: &std::path::Path) {
    // 2024-10-10 is a Thursday.
    write_json(
        &base.join("sessions.json"),
        &json!({
            "days": [{"id": "D1", "name": {"en": "Friday"}}],
            "sessions": [
                {
                    "id": "S-morning",
                    "start_date": "2024-10-10T09:00:00",
                    "days": ["D1"],
                    "locations": ["L1"],
                    "films": ["F1"]
                },
                {
                    "id": "S-afternoon",
                    "start_date": "2024-10-10T16:00:00",
                    "days": ["D1"],
                    "locations": ["L1"],
                    "films": ["F1"]
                }
            ]
        }),
    );
}

/// Excluded weekday + early start drops the whole session (no rows for any of
/// its films); the same weekday at/after the threshold is retained.
#[test]
fn thursday_morning_dropped_afternoon_kept() {
    let base = make_festival_basic();
    two_thursday_sessions(&base);
    let out = base.join("export.csv");

    let summary = FestivalETL::new()
        .base_dir(&base)
        .output_path(&out)
        .exclude_weekdays([Weekday::Thursday])
        .earliest_start(time!(15:00))
        .progress(false)
        .run()
        .unwrap();

    assert_eq!(summary.sessions_dropped, 1);
    assert_eq!(summary.rows_written, 1);

    let (headers, rows) = read_csv(&out);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][col(&headers, "Session ID")], "S-afternoon");
}

/// Sessions with an empty or unparseable start are never dropped by the
/// schedule filter, whatever it excludes.
#[test]
fn unparseable_start_never_dropped() {
    let base = make_festival_basic();
    write_json(
        &base.join("sessions.json"),
        &json!({
            "days": [{"id": "D1", "name": {"en": "Friday"}}],
            "sessions": [
                {"id": "S-blank", "start_date": "", "days": ["D1"], "locations": ["L1"], "films": ["F1"]},
                {"id": "S-garbage", "start_date": "sometime soon", "days": ["D1"], "locations": ["L1"], "films": ["F1"]}
            ]
        }),
    );
    let out = base.join("export.csv");

    let summary = FestivalETL::new()
        .base_dir(&base)
        .output_path(&out)
        .exclude_weekdays([
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ])
        .earliest_start(time!(23:59))
        .progress(false)
        .run()
        .unwrap();

    assert_eq!(summary.sessions_dropped, 0);
    assert_eq!(summary.rows_written, 2);
}

/// Disabling the group makes the predicate always pass.
#[test]
fn disabled_schedule_filter_passes_everything() {
    let base = make_festival_basic();
    two_thursday_sessions(&base);
    let out = base.join("export.csv");

    let summary = FestivalETL::new()
        .base_dir(&base)
        .output_path(&out)
        .exclude_weekdays([Weekday::Thursday])
        .earliest_start(time!(23:59))
        .schedule_filter(false)
        .progress(false)
        .run()
        .unwrap();

    assert_eq!(summary.sessions_dropped, 0);
    assert_eq!(summary.rows_written, 2);
}

/// Predicate unit cases: drop needs excluded weekday AND clock strictly
/// before the threshold.
#[test]
fn schedule_drops_boundary_cases() {
    let cfg = TimeFilterConfig::excluding([Weekday::Thursday], time!(15:00));

    assert!(schedule_drops(Some(datetime!(2024-10-10 09:00)), &cfg));
    // At the threshold is allowed.
    assert!(!schedule_drops(Some(datetime!(2024-10-10 15:00)), &cfg));
    assert!(!schedule_drops(Some(datetime!(2024-10-10 16:00)), &cfg));
    // Same clock time on a non-excluded weekday.
    assert!(!schedule_drops(Some(datetime!(2024-10-11 09:00)), &cfg));
    // No parseable start.
    assert!(!schedule_drops(None, &cfg));

    let disabled = TimeFilterConfig::default();
    assert!(!schedule_drops(Some(datetime!(2024-10-10 09:00)), &disabled));
}

#[test]
fn session_start_parsing() {
    let dt = parse_session_start("2024-10-10T20:00:00").unwrap();
    assert_eq!(dt.weekday(), Weekday::Thursday);
    assert_eq!(dt.time(), time!(20:00));

    assert!(parse_session_start("").is_none());
    assert!(parse_session_start("   ").is_none());
    assert!(parse_session_start("tomorrow").is_none());
    assert!(parse_session_start("2024-13-40T99:00:00").is_none());

    // Offset and fractional-second exports still parse.
    assert!(parse_session_start("2024-10-10T20:00:00+02:00").is_some());
    assert!(parse_session_start("2024-10-10T20:00:00.000").is_some());
}
