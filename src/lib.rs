mod config;
mod date;
mod model;
mod lookup;

mod filters;
mod join;
mod enrich;
mod writer;

mod progress;
mod util;
mod pipeline;

pub use crate::config::{CategoryFilterConfig, ExportOptions, TimeFilterConfig};
pub use crate::pipeline::{FestivalETL, RunSummary};

pub use crate::model::{
    CategoriesDoc, Film, FilmsDoc, LocalizedText, LocationsDoc, Session, SessionsDoc,
    TaxonomyEntry,
};
pub use crate::lookup::{join_names, Catalog, NameTable};
pub use crate::join::{rows_for_session, OutputRow};

// Expose the predicates and timestamp parser for direct use in tests/tools.
pub use crate::date::parse_session_start;
pub use crate::filters::{category_violations, schedule_drops};

// Expose enrichment pieces so callers can scrape/parse outside a full run.
pub use crate::enrich::{
    absolute_url, parse_director_page, DirectorEnricher, DirectorProfile, FetchOutcome,
};

// Expose the column contract and writer for downstream tooling.
pub use crate::writer::{write_rows, OUTPUT_HEADER};

pub use crate::progress::ProgressScope;
pub use crate::util::init_tracing_once;
