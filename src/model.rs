//! Serde surface for the four festival catalogue documents.
//!
//! The feeds are hand-maintained exports: ids show up as strings in one
//! document and integers in another, and text fields may be null instead of
//! absent. Everything normalizes to owned strings / empty defaults here so
//! the join never has to care.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Locale code → display string, e.g. `{"en": "Horror", "sl": "Grozljivka"}`.
pub type LocalizedText = BTreeMap<String, String>;

/// One controlled-vocabulary entry (genre, section, location, day, ...).
#[derive(Clone, Debug, Deserialize)]
pub struct TaxonomyEntry {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: LocalizedText,
}

/// Catalogue entry for a single title.
#[derive(Clone, Debug, Deserialize)]
pub struct Film {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub international_title: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub original_title: String,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub synopsis: LocalizedText,
    #[serde(default, deserialize_with = "de_null_default")]
    pub credits: LocalizedText,
    #[serde(default, deserialize_with = "de_id_list")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "de_id_list")]
    pub sections: Vec<String>,
    #[serde(default, deserialize_with = "de_id_list")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "de_id_list")]
    pub awards: Vec<String>,
    #[serde(default, deserialize_with = "de_id_list")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "de_id_list")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "de_id_list")]
    pub countries: Vec<String>,
    /// Locale → site-relative path of the film's public page.
    #[serde(default, deserialize_with = "de_null_default")]
    pub url: LocalizedText,
}

/// One scheduled screening. Start/end stay raw strings for the export; the
/// schedule filter parses `start_date` separately.
#[derive(Clone, Debug, Deserialize)]
pub struct Session {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub end_date: String,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub talent: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub qa: String,
    #[serde(default, deserialize_with = "de_id_list")]
    pub days: Vec<String>,
    #[serde(default, deserialize_with = "de_id_list")]
    pub locations: Vec<String>,
    #[serde(default, deserialize_with = "de_id_list")]
    pub films: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct FilmsDoc {
    #[serde(default)]
    pub films: Vec<Film>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoriesDoc {
    #[serde(default)]
    pub genres: Vec<TaxonomyEntry>,
    #[serde(default)]
    pub sections: Vec<TaxonomyEntry>,
    #[serde(default)]
    pub categories: Vec<TaxonomyEntry>,
    #[serde(default)]
    pub awards: Vec<TaxonomyEntry>,
    #[serde(default)]
    pub types: Vec<TaxonomyEntry>,
    #[serde(default)]
    pub languages: Vec<TaxonomyEntry>,
    #[serde(default)]
    pub countries: Vec<TaxonomyEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationsDoc {
    #[serde(default)]
    pub locations: Vec<TaxonomyEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SessionsDoc {
    #[serde(default)]
    pub days: Vec<TaxonomyEntry>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// Id fields: accept JSON string or integer, store as `String`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Uint(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
            RawId::Uint(n) => n.to_string(),
        }
    }
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn de_id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<RawId>>::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default().into_iter().map(String::from).collect())
}

/// JSON null → `T::default()` (string fields and localized maps).
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
