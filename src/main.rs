use anyhow::Result;
use fetl::FestivalETL;

const DATA_ROOT: &str = "./data";
const OUTPUT: &str = "./composite_sessions.csv";

fn main() -> Result<()> {
    let mut etl = FestivalETL::new()
        .base_dir(DATA_ROOT)
        .output_path(OUTPUT)
        .progress(true)
        .progress_label("Joining sessions");

    // Director scraping is opt-in: point FESTIVAL_SITE_BASE at the public
    // site root to fill the director/biography columns.
    if let Ok(base) = std::env::var("FESTIVAL_SITE_BASE") {
        if !base.trim().is_empty() {
            etl = etl.enrich_directors(base.trim());
        }
    }

    let summary = etl.run()?;
    println!(
        "Wrote {} rows ({} sessions dropped, {} film ids missing, {} films filtered, {} enrichment failures)",
        summary.rows_written,
        summary.sessions_dropped,
        summary.films_missing,
        summary.films_filtered,
        summary.enrich_failures
    );

    Ok(())
}
