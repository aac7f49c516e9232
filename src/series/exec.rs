use super::output::{output_authors_json, output_authors_table, output_chart, output_json, output_ndjson};
use super::activity;
use crate::config::Settings;
use crate::model::TimeSeries;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

fn load_series(settings: &Settings, show_progress: bool) -> TimeSeries {
    if !show_progress {
        return activity(settings.repo(), settings.zone());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Reading commit history...");
    pb.enable_steady_tick(Duration::from_millis(100));
    let series = activity(settings.repo(), settings.zone());
    pb.finish_and_clear();
    series
}

pub fn exec(settings: Settings, json: bool, ndjson: bool) -> anyhow::Result<()> {
    // Keep stderr quiet for machine-readable output.
    let series = load_series(&settings, !json && !ndjson);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        output_json(&mut out, &series).context("Failed to write JSON series")?;
    } else if ndjson {
        output_ndjson(&mut out, &series).context("Failed to write NDJSON series")?;
    } else {
        output_chart(&mut out, &series, settings.repo()).context("Failed to render activity chart")?;
    }
    out.flush()?;
    Ok(())
}

pub fn exec_authors(settings: Settings, json: bool) -> anyhow::Result<()> {
    let series = load_series(&settings, !json);
    let authors = series.author_summaries();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        output_authors_json(&mut out, &authors).context("Failed to write author summary")?;
    } else {
        output_authors_table(&mut out, &authors).context("Failed to render author table")?;
    }
    out.flush()?;
    Ok(())
}
