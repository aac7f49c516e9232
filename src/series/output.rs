use crate::model::{AuthorSummary, TimeSeries};
use anyhow::Result;
use console::style;
use std::io::Write;
use std::path::Path;

pub fn output_json<W: Write>(out: &mut W, series: &TimeSeries) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, series)?;
    writeln!(out)?;
    Ok(())
}

pub fn output_ndjson<W: Write>(out: &mut W, series: &TimeSeries) -> Result<()> {
    for record in series.day_records() {
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn output_authors_json<W: Write>(out: &mut W, authors: &[AuthorSummary]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, authors)?;
    writeln!(out)?;
    Ok(())
}

fn intensity_char(count: u32, max: u32) -> &'static str {
    if count == 0 {
        return " ";
    }
    match ((count as f64 / max.max(1) as f64) * 5.0) as u32 {
        0 | 1 => "▁",
        2 => "▃",
        3 => "▅",
        4 => "▇",
        _ => "█",
    }
}

pub fn output_chart<W: Write>(out: &mut W, series: &TimeSeries, repo: &Path) -> Result<()> {
    if series.is_empty() {
        writeln!(out, "No commits found in {}", repo.display())?;
        return Ok(());
    }

    let max = series.total.iter().copied().max().unwrap_or(1);

    writeln!(out, "{}", style("Daily Commit Activity").bold())?;
    writeln!(out, "{}", "─".repeat(50))?;

    for (date, &count) in series.dates.iter().zip(&series.total) {
        let bar_len = (count as f64 / max as f64 * 30.0).ceil() as usize;
        writeln!(
            out,
            "{} {} {:>4} {}",
            date,
            style(intensity_char(count, max)).green(),
            count,
            style("■".repeat(bar_len)).green()
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} commits over {} days by {} authors",
        style(series.commit_count()).cyan(),
        style(series.dates.len()).cyan(),
        style(series.authors.len()).yellow()
    )?;
    if let Some((date, count)) = series.peak() {
        writeln!(out, "Busiest day: {} ({} commits)", style(date).bold(), count)?;
    }

    Ok(())
}

pub fn output_authors_table<W: Write>(out: &mut W, authors: &[AuthorSummary]) -> Result<()> {
    if authors.is_empty() {
        writeln!(out, "No authors found")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<32} {:>8} {:>12} {:>12} {:>8}",
        style("Author").bold(),
        style("Commits").bold(),
        style("First").bold(),
        style("Last").bold(),
        style("Days").bold()
    )?;
    writeln!(out, "{}", "─".repeat(76))?;
    for a in authors.iter().take(50) {
        writeln!(
            out,
            "{:<32} {:>8} {:>12} {:>12} {:>8}",
            a.author, a.commits, a.first_active, a.last_active, a.active_days
        )?;
    }
    if authors.len() > 50 {
        writeln!(out, "\n... and {} more authors", authors.len() - 50)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn sample() -> TimeSeries {
        TimeSeries {
            dates: vec!["2024-01-01".into(), "2024-01-02".into()],
            total: vec![1, 0],
            authors: BTreeMap::from([("a".to_string(), vec![1, 0])]),
        }
    }

    #[test]
    fn ndjson_writes_one_line_per_day() {
        let mut buf = Vec::new();
        output_ndjson(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "{\"date\":\"2024-01-01\",\"total\":1,\"authors\":{\"a\":1}}\n\
             {\"date\":\"2024-01-02\",\"total\":0,\"authors\":{}}\n"
        );
    }

    #[test]
    fn json_round_trips_series() {
        let mut buf = Vec::new();
        output_json(&mut buf, &sample()).unwrap();
        let back: TimeSeries = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn chart_reports_empty_repository() {
        let mut buf = Vec::new();
        output_chart(&mut buf, &TimeSeries::default(), Path::new("/tmp/empty")).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No commits found in /tmp/empty\n");
    }

    #[test]
    fn intensity_scales_with_count() {
        assert_eq!(intensity_char(0, 10), " ");
        assert_eq!(intensity_char(1, 10), "▁");
        assert_eq!(intensity_char(10, 10), "█");
    }
}
