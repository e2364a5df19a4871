use crate::config::ExportOptions;
use crate::enrich::DirectorEnricher;
use crate::join::rows_for_session;
use crate::lookup::Catalog;
use crate::model::{CategoriesDoc, FilmsDoc, LocationsDoc, SessionsDoc};
use crate::progress::ProgressScope;
use crate::util::init_tracing_once;
use crate::writer;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use std::time::Duration;
use time::{Time, Weekday};

/// Builder-style pipeline over the festival catalogue documents: load, build
/// lookups, join sessions to films, filter, optionally enrich, write CSV.
/// One synchronous pass; the only network traffic is the enrichment fetches.
#[derive(Clone)]
pub struct FestivalETL {
    pub(crate) opts: ExportOptions,
}

impl Default for FestivalETL {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-run counters, logged at the end and returned to the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunSummary {
    pub sessions_seen: usize,
    pub sessions_dropped: usize,
    pub films_missing: usize,
    pub films_filtered: usize,
    pub enrich_failures: usize,
    pub rows_written: usize,
}

impl FestivalETL {
    pub fn new() -> Self {
        Self { opts: ExportOptions::default() }
    }

    // -------- Builder methods --------
    pub fn base_dir(mut self, base: impl AsRef<Path>) -> Self { self.opts = self.opts.with_base_dir(base); self }
    pub fn films_file(mut self, name: impl Into<String>) -> Self { self.opts = self.opts.with_films_file(name); self }
    pub fn categories_file(mut self, name: impl Into<String>) -> Self { self.opts = self.opts.with_categories_file(name); self }
    pub fn locations_file(mut self, name: impl Into<String>) -> Self { self.opts = self.opts.with_locations_file(name); self }
    pub fn sessions_file(mut self, name: impl Into<String>) -> Self { self.opts = self.opts.with_sessions_file(name); self }
    pub fn output_path(mut self, path: impl AsRef<Path>) -> Self { self.opts = self.opts.with_output_path(path); self }
    pub fn locale(mut self, locale: impl Into<String>) -> Self { self.opts = self.opts.with_locale(locale); self }
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self { self.opts = self.opts.with_fetch_timeout(timeout); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }

    /// Exclude sessions on these weekdays (enables the schedule filter).
    pub fn exclude_weekdays<I>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        self.opts.time_filter.excluded_days = days.into_iter().collect();
        self.opts.time_filter.enabled = true;
        self
    }

    /// Sessions on excluded weekdays survive only at or after this clock time
    /// (enables the schedule filter).
    pub fn earliest_start(mut self, earliest: Time) -> Self {
        self.opts.time_filter.earliest_allowed_time = earliest;
        self.opts.time_filter.enabled = true;
        self
    }

    pub fn schedule_filter(mut self, yes: bool) -> Self {
        self.opts.time_filter.enabled = yes;
        self
    }

    /// Drop film rows whose resolved type names hit this set (enables the
    /// category filter).
    pub fn exclude_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.category_filter.types_to_exclude = types.into_iter().map(Into::into).collect();
        self.opts.category_filter.enabled = true;
        self
    }

    /// Drop film rows whose resolved genre names hit this set (enables the
    /// category filter).
    pub fn exclude_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.category_filter.genres_to_exclude = genres.into_iter().map(Into::into).collect();
        self.opts.category_filter.enabled = true;
        self
    }

    pub fn category_filter(mut self, yes: bool) -> Self {
        self.opts.category_filter.enabled = yes;
        self
    }

    /// Scrape director name/biography from `<base_url><film path>` for every
    /// surviving film row.
    pub fn enrich_directors(mut self, base_url: impl Into<String>) -> Self {
        self.opts = self.opts.with_site_base_url(base_url);
        self
    }

    // -------- Run --------

    pub fn run(self) -> Result<RunSummary> {
        init_tracing_once();
        let opts = self.opts;

        let films_doc: FilmsDoc = load_json(&opts.base_dir.join(&opts.films_file))?;
        let categories_doc: CategoriesDoc = load_json(&opts.base_dir.join(&opts.categories_file))?;
        let locations_doc: LocationsDoc = load_json(&opts.base_dir.join(&opts.locations_file))?;
        let sessions_doc: SessionsDoc = load_json(&opts.base_dir.join(&opts.sessions_file))?;

        tracing::info!(
            "Loaded {} films, {} sessions, {} locations, {} days.",
            films_doc.films.len(),
            sessions_doc.sessions.len(),
            locations_doc.locations.len(),
            sessions_doc.days.len()
        );

        let catalog = Catalog::build(films_doc, &categories_doc, &locations_doc, &sessions_doc.days);

        let mut enricher = match &opts.site_base_url {
            Some(base) => Some(DirectorEnricher::new(base.clone(), opts.fetch_timeout)?),
            None => None,
        };

        let mut summary = RunSummary::default();
        let pb = if opts.progress {
            Some(ProgressScope::count(
                opts.progress_label.as_deref().unwrap_or("Joining sessions"),
                sessions_doc.sessions.len() as u64,
            ))
        } else {
            None
        };

        let mut rows = Vec::new();
        for session in &sessions_doc.sessions {
            summary.sessions_seen += 1;
            rows.extend(rows_for_session(
                session,
                &catalog,
                &opts,
                &mut enricher,
                &mut summary,
            ));
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
        if let Some(pb) = &pb {
            pb.finish(format!("{} rows", rows.len()));
        }

        writer::write_rows(&opts.output_path, &rows)?;
        summary.rows_written = rows.len();

        tracing::info!(
            "Wrote {} rows to {} ({} sessions dropped, {} film ids missing, {} films filtered, {} enrichment failures).",
            summary.rows_written,
            opts.output_path.display(),
            summary.sessions_dropped,
            summary.films_missing,
            summary.films_filtered,
            summary.enrich_failures
        );
        Ok(summary)
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}
