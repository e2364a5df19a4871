use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Serialize a fixture document to disk, creating parent directories.
pub fn write_json(path: &Path, value: &Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

/// Build a tiny **valid** catalogue with:
/// - films (2024.json): F1 "Test Film" (genres [G1], everything else empty,
///   page path /en/film/test-film) and F2 "Quiet Days" (genres [G2], types [T1]).
/// - categories.json: G1→"Horror", G2→"Drama", T1→"Short Film"; the other
///   taxonomy keys are present but empty.
/// - list.json: L1→"Main Hall", L2→"Small Stage".
/// - sessions.json: day D1→"Friday"; one session S1 on D1 at L1 starting
///   2024-10-10T20:00:00 containing F1 only.
///
/// With filters and enrichment off this joins to exactly one row.
pub fn make_festival_basic() -> PathBuf {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.into_path();

    write_json(
        &base.join("2024.json"),
        &json!({
            "films": [
                {
                    "id": "F1",
                    "international_title": "Test Film",
                    "original_title": "Testni Film",
                    "year": 2024,
                    "duration": 104,
                    "synopsis": {"en": "A test film.", "sl": "Testni film."},
                    "credits": {"en": "Director of photography: N. N."},
                    "genres": ["G1"],
                    "sections": [],
                    "categories": [],
                    "awards": [],
                    "types": [],
                    "languages": [],
                    "countries": [],
                    "url": {"en": "/en/film/test-film"}
                },
                {
                    "id": "F2",
                    "international_title": "Quiet Days",
                    "original_title": "Quiet Days",
                    "year": 2023,
                    "duration": 21,
                    "synopsis": {"en": "Short about quiet days."},
                    "credits": {},
                    "genres": ["G2"],
                    "sections": [],
                    "categories": [],
                    "awards": [],
                    "types": ["T1"],
                    "languages": [],
                    "countries": [],
                    "url": {"en": "/en/film/quiet-days"}
                }
            ]
        }),
    );

    write_json(
        &base.join("categories.json"),
        &json!({
            "genres": [
                {"id": "G1", "name": {"en": "Horror", "sl": "Grozljivka"}},
                {"id": "G2", "name": {"en": "Drama"}}
            ],
            "sections": [],
            "categories": [],
            "awards": [],
            "types": [
                {"id": "T1", "name": {"en": "Short Film"}}
            ],
            "languages": [],
            "countries": []
        }),
    );

    write_json(
        &base.join("list.json"),
        &json!({
            "locations": [
                {"id": "L1", "name": {"en": "Main Hall"}},
                {"id": "L2", "name": {"en": "Small Stage"}}
            ]
        }),
    );

    write_json(
        &base.join("sessions.json"),
        &json!({
            "days": [
                {"id": "D1", "name": {"en": "Friday"}}
            ],
            "sessions": [
                {
                    "id": "S1",
                    "start_date": "2024-10-10T20:00:00",
                    "end_date": "2024-10-10T22:00:00",
                    "duration": 120,
                    "talent": "",
                    "qa": "",
                    "days": ["D1"],
                    "locations": ["L1"],
                    "films": ["F1"]
                }
            ]
        }),
    );

    base
}

/// Read an export back as (headers, rows of string fields).
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(str::to_string).collect();
    let rows = rdr
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

/// Index of a named column in the export header.
pub fn col(headers: &[String], name: &str) -> usize {
    headers
        .iter()
        .position(|h| h == name)
        .unwrap_or_else(|| panic!("no column named {name:?}"))
}
