//! Session × film expansion into flat export rows.

use crate::config::ExportOptions;
use crate::date::parse_session_start;
use crate::enrich::{absolute_url, DirectorEnricher, DirectorProfile, FetchOutcome};
use crate::filters::{category_violations, schedule_drops};
use crate::lookup::{join_names, Catalog};
use crate::model::Session;
use crate::pipeline::RunSummary;
use crate::util::truncate_for_log;

/// One flattened session/film pairing, all fields already display-ready.
/// Field order mirrors the output column contract in `writer::OUTPUT_HEADER`.
#[derive(Clone, Debug, Default)]
pub struct OutputRow {
    pub session_id: String,
    pub session_start_date: String,
    pub session_end_date: String,
    pub session_duration: String,
    pub session_location: String,
    pub session_talent: String,
    pub session_qa: String,
    pub session_day: String,
    pub film_id: String,
    pub film_international_title: String,
    pub film_original_title: String,
    pub film_year: String,
    pub film_duration: String,
    pub film_directors: String,
    pub director_biography: String,
    pub film_synopsis: String,
    pub film_credits: String,
    pub film_genres: String,
    pub film_sections: String,
    pub film_categories: String,
    pub film_awards: String,
    pub film_types: String,
    pub film_languages: String,
    pub film_countries: String,
    pub film_url: String,
}

impl OutputRow {
    pub fn record(&self) -> [&str; 25] {
        [
            &self.session_id,
            &self.session_start_date,
            &self.session_end_date,
            &self.session_duration,
            &self.session_location,
            &self.session_talent,
            &self.session_qa,
            &self.session_day,
            &self.film_id,
            &self.film_international_title,
            &self.film_original_title,
            &self.film_year,
            &self.film_duration,
            &self.film_directors,
            &self.director_biography,
            &self.film_synopsis,
            &self.film_credits,
            &self.film_genres,
            &self.film_sections,
            &self.film_categories,
            &self.film_awards,
            &self.film_types,
            &self.film_languages,
            &self.film_countries,
            &self.film_url,
        ]
    }
}

/// Expand one session into rows, applying the schedule filter before film
/// expansion and the category filter before enrichment. Film ids missing
/// from the catalogue contribute no row; the rest of the session continues.
pub fn rows_for_session(
    session: &Session,
    catalog: &Catalog,
    opts: &ExportOptions,
    enricher: &mut Option<DirectorEnricher>,
    summary: &mut RunSummary,
) -> Vec<OutputRow> {
    let start = parse_session_start(&session.start_date);
    if schedule_drops(start, &opts.time_filter) {
        tracing::info!(
            "schedule filter dropped session {} (start {})",
            session.id,
            session.start_date
        );
        summary.sessions_dropped += 1;
        return Vec::new();
    }

    let locale = opts.locale.as_str();
    let day = catalog.days.first_display(&session.days, locale);
    let location = catalog.locations.first_display(&session.locations, locale);

    let mut rows = Vec::with_capacity(session.films.len());
    for film_id in &session.films {
        let Some(film) = catalog.films.get(film_id) else {
            // Withdrawn films linger in schedules; not an error.
            tracing::debug!("session {}: film {} not in catalogue", session.id, film_id);
            summary.films_missing += 1;
            continue;
        };

        let genre_names = catalog.genres.resolve(&film.genres, locale);
        let type_names = catalog.types.resolve(&film.types, locale);

        let offending = category_violations(&type_names, &genre_names, &opts.category_filter);
        if !offending.is_empty() {
            tracing::info!(
                "category filter dropped film {} in session {} ({})",
                film.id,
                session.id,
                offending.join(", ")
            );
            summary.films_filtered += 1;
            continue;
        }

        let url_path = film.url.get(locale).map(String::as_str).unwrap_or_default();
        let film_url = match &opts.site_base_url {
            Some(base) if !url_path.is_empty() => absolute_url(base, url_path),
            _ => String::new(),
        };

        let profile = match enricher.as_mut() {
            Some(enricher) if !url_path.is_empty() => {
                match enricher.profile_for(&film.id, url_path) {
                    FetchOutcome::Fetched(profile) => profile,
                    FetchOutcome::Failed { reason } => {
                        tracing::warn!(
                            "director enrichment failed for film {}: {}",
                            film.id,
                            truncate_for_log(&reason, 200)
                        );
                        summary.enrich_failures += 1;
                        DirectorProfile::default()
                    }
                }
            }
            _ => DirectorProfile::default(),
        };

        rows.push(OutputRow {
            session_id: session.id.clone(),
            session_start_date: session.start_date.clone(),
            session_end_date: session.end_date.clone(),
            session_duration: fmt_opt(session.duration),
            session_location: location.clone(),
            session_talent: session.talent.clone(),
            session_qa: session.qa.clone(),
            session_day: day.clone(),
            film_id: film.id.clone(),
            film_international_title: film.international_title.clone(),
            film_original_title: film.original_title.clone(),
            film_year: fmt_opt(film.year),
            film_duration: fmt_opt(film.duration),
            film_directors: profile.name,
            director_biography: profile.biography,
            film_synopsis: localized(&film.synopsis, locale),
            film_credits: localized(&film.credits, locale),
            film_genres: join_names(&genre_names),
            film_sections: join_names(&catalog.sections.resolve(&film.sections, locale)),
            film_categories: join_names(&catalog.categories.resolve(&film.categories, locale)),
            film_awards: join_names(&catalog.awards.resolve(&film.awards, locale)),
            film_types: join_names(&type_names),
            film_languages: join_names(&catalog.languages.resolve(&film.languages, locale)),
            film_countries: join_names(&catalog.countries.resolve(&film.countries, locale)),
            film_url,
        });
    }
    rows
}

fn fmt_opt(v: Option<i64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

fn localized(text: &crate::model::LocalizedText, locale: &str) -> String {
    text.get(locale).cloned().unwrap_or_default()
}
