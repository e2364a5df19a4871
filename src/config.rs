use ahash::AHashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use time::{Time, Weekday};

/// Session-level schedule filter: drop early screenings on excluded weekdays.
///
/// A session is dropped only when its start time parses, its weekday is in
/// `excluded_days`, and its clock time is earlier than
/// `earliest_allowed_time`. Sessions without a parseable start always pass.
#[derive(Clone, Debug)]
pub struct TimeFilterConfig {
    pub enabled: bool,
    pub excluded_days: AHashSet<Weekday>,
    pub earliest_allowed_time: Time,
}

impl Default for TimeFilterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            excluded_days: AHashSet::new(),
            earliest_allowed_time: Time::MIDNIGHT,
        }
    }
}

impl TimeFilterConfig {
    pub fn excluding<I>(days: I, earliest: Time) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        Self {
            enabled: true,
            excluded_days: days.into_iter().collect(),
            earliest_allowed_time: earliest,
        }
    }
}

/// Film-level category filter: drop rows whose resolved type or genre names
/// intersect the exclusion sets. Names are matched exactly as displayed.
#[derive(Clone, Debug, Default)]
pub struct CategoryFilterConfig {
    pub enabled: bool,
    pub types_to_exclude: AHashSet<String>,
    pub genres_to_exclude: AHashSet<String>,
}

impl CategoryFilterConfig {
    pub fn excluding<I, J, S, T>(types: I, genres: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            enabled: true,
            types_to_exclude: types.into_iter().map(Into::into).collect(),
            genres_to_exclude: genres.into_iter().map(Into::into).collect(),
        }
    }
}

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub base_dir: PathBuf,
    pub films_file: String,
    pub categories_file: String,
    pub locations_file: String,
    pub sessions_file: String,
    pub output_path: PathBuf,
    pub locale: String,
    pub time_filter: TimeFilterConfig,
    pub category_filter: CategoryFilterConfig,
    pub site_base_url: Option<String>, // Some(base) enables director enrichment
    pub fetch_timeout: Duration,
    pub progress: bool,
    pub progress_label: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            films_file: "2024.json".into(),
            categories_file: "categories.json".into(),
            locations_file: "list.json".into(),
            sessions_file: "sessions.json".into(),
            output_path: PathBuf::from("composite_sessions.csv"),
            locale: "en".into(),
            time_filter: TimeFilterConfig::default(),
            category_filter: CategoryFilterConfig::default(),
            site_base_url: None,
            fetch_timeout: Duration::from_secs(30),
            progress: true,
            progress_label: None,
        }
    }
}

impl ExportOptions {
    pub fn with_base_dir(mut self, base_dir: impl AsRef<Path>) -> Self {
        self.base_dir = base_dir.as_ref().to_path_buf();
        self
    }
    pub fn with_films_file(mut self, name: impl Into<String>) -> Self {
        self.films_file = name.into();
        self
    }
    pub fn with_categories_file(mut self, name: impl Into<String>) -> Self {
        self.categories_file = name.into();
        self
    }
    pub fn with_locations_file(mut self, name: impl Into<String>) -> Self {
        self.locations_file = name.into();
        self
    }
    pub fn with_sessions_file(mut self, name: impl Into<String>) -> Self {
        self.sessions_file = name.into();
        self
    }
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
    pub fn with_time_filter(mut self, cfg: TimeFilterConfig) -> Self {
        self.time_filter = cfg;
        self
    }
    pub fn with_category_filter(mut self, cfg: CategoryFilterConfig) -> Self {
        self.category_filter = cfg;
        self
    }
    pub fn with_site_base_url(mut self, base: impl Into<String>) -> Self {
        self.site_base_url = Some(base.into());
        self
    }
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
}
