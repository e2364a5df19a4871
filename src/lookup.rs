//! Id → localized-name tables built once per run and read throughout the join.

use crate::model::{CategoriesDoc, Film, FilmsDoc, LocalizedText, LocationsDoc, TaxonomyEntry};
use ahash::AHashMap;

/// One taxonomy category's id → name-mapping table.
///
/// Resolution to a single locale happens at read time; the table keeps the
/// full mapping. Duplicate ids are not validated: last write wins.
#[derive(Clone, Debug, Default)]
pub struct NameTable {
    by_id: AHashMap<String, LocalizedText>,
}

impl NameTable {
    pub fn from_entries(entries: &[TaxonomyEntry]) -> Self {
        let mut by_id = AHashMap::with_capacity(entries.len());
        for entry in entries {
            by_id.insert(entry.id.clone(), entry.name.clone());
        }
        Self { by_id }
    }

    /// Display name for one id in `locale`, if both the id and the locale
    /// resolve.
    pub fn display(&self, id: &str, locale: &str) -> Option<&str> {
        self.by_id.get(id)?.get(locale).map(String::as_str)
    }

    /// Resolve an id list to display names, skipping ids that are unknown or
    /// lack the locale. Used uniformly for every taxonomy field.
    pub fn resolve(&self, ids: &[String], locale: &str) -> Vec<String> {
        ids.iter()
            .filter_map(|id| self.display(id, locale))
            .map(str::to_owned)
            .collect()
    }

    /// First resolvable display name from an id list, or empty string.
    pub fn first_display(&self, ids: &[String], locale: &str) -> String {
        ids.iter()
            .find_map(|id| self.display(id, locale))
            .unwrap_or_default()
            .to_owned()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// `"; "`-joined display names, the flattened form used by every taxonomy
/// column in the export.
pub fn join_names(names: &[String]) -> String {
    names.join("; ")
}

/// Every lookup table the join needs, built once from the loaded documents.
pub struct Catalog {
    pub films: AHashMap<String, Film>,
    pub genres: NameTable,
    pub sections: NameTable,
    pub categories: NameTable,
    pub awards: NameTable,
    pub types: NameTable,
    pub languages: NameTable,
    pub countries: NameTable,
    pub locations: NameTable,
    pub days: NameTable,
}

impl Catalog {
    pub fn build(
        films_doc: FilmsDoc,
        categories_doc: &CategoriesDoc,
        locations_doc: &LocationsDoc,
        days: &[TaxonomyEntry],
    ) -> Self {
        let mut films = AHashMap::with_capacity(films_doc.films.len());
        for film in films_doc.films {
            films.insert(film.id.clone(), film);
        }
        Self {
            films,
            genres: NameTable::from_entries(&categories_doc.genres),
            sections: NameTable::from_entries(&categories_doc.sections),
            categories: NameTable::from_entries(&categories_doc.categories),
            awards: NameTable::from_entries(&categories_doc.awards),
            types: NameTable::from_entries(&categories_doc.types),
            languages: NameTable::from_entries(&categories_doc.languages),
            countries: NameTable::from_entries(&categories_doc.countries),
            locations: NameTable::from_entries(&locations_doc.locations),
            days: NameTable::from_entries(days),
        }
    }
}
