use crate::dashboard::{Dashboard, Section};
use crate::error::ExportError;
use crate::reports::{AggregateView, AggregateViews, ViewData};
use crate::types::CrossTab;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{builder::Builder, settings::Style, Table, Tabled};
use tracing::info;

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Crosstabs are written wide: one header row of column labels, then one row
/// per row label.
fn write_crosstab_csv(path: &Path, tab: &CrossTab) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    let mut header = vec![String::new()];
    header.extend(tab.columns.iter().cloned());
    wtr.write_record(&header)?;
    for (label, counts) in tab.rows.iter().zip(&tab.counts) {
        let mut record = vec![label.clone()];
        record.extend(counts.iter().map(|c| c.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    let s = serde_json::to_string_pretty(value)?;
    fs::write(path, s).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Write one CSV per view into `dir`, named after the view. Placeholder views
/// are written too (an empty file, or the zero matrix).
pub fn export_views(dir: &Path, views: &AggregateViews) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut written = Vec::new();
    for view in views.iter() {
        let path = dir.join(format!("{}.csv", view.kind.name()));
        match &view.data {
            ViewData::Frequency(rows) => write_csv(&path, rows)?,
            ViewData::Proportions(rows) => write_csv(&path, rows)?,
            ViewData::TimeSeries(rows) => write_csv(&path, rows)?,
            ViewData::Observations(rows) => write_csv(&path, rows)?,
            ViewData::Crosstab(tab) => write_crosstab_csv(&path, tab)?,
        }
        written.push(path);
    }
    info!("Exported {} views to {}", written.len(), dir.display());
    Ok(written)
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}

fn preview_crosstab(tab: &CrossTab, max_rows: usize) {
    let mut builder = Builder::default();
    let mut header = vec![String::new()];
    header.extend(tab.columns.iter().cloned());
    builder.push_record(header);
    for (label, counts) in tab.rows.iter().zip(&tab.counts).take(max_rows) {
        let mut record = vec![label.clone()];
        record.extend(counts.iter().map(|c| c.to_string()));
        builder.push_record(record);
    }
    let table_str = builder.build().with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}

fn preview_view(view: &AggregateView, max_rows: usize) {
    match &view.data {
        ViewData::Frequency(rows) => preview_table_rows(rows, max_rows),
        ViewData::Proportions(rows) => preview_table_rows(rows, max_rows),
        ViewData::TimeSeries(rows) => preview_table_rows(rows, max_rows),
        ViewData::Observations(rows) => preview_table_rows(rows, max_rows),
        ViewData::Crosstab(tab) => preview_crosstab(tab, max_rows),
    }
}

fn print_section(dashboard: &Dashboard, section: &Section, max_rows: usize) {
    println!("=== {} ===\n", section.label);
    if let Some(heading) = &section.kpi_heading {
        println!("{}\n", heading);
    }
    if !section.kpis.is_empty() {
        let mut builder = Builder::default();
        for card in &section.kpis {
            builder.push_record([card.label.clone(), card.value.clone()]);
        }
        println!("{}\n", builder.build().with(Style::markdown()));
    }
    if let Some(heading) = &section.summary_heading {
        println!("{}", heading);
    }
    if let Some(text) = &section.summary_text {
        println!("{}\n", text);
    }
    for panel in &section.panels {
        println!("## {}", panel.heading);
        println!("{}\n", panel.title);
        match dashboard.view(panel.view) {
            Some(view) => preview_view(view, max_rows),
            None => preview_view(&AggregateView::placeholder(panel.view), max_rows),
        }
    }
}

/// Print every tab of the dashboard to stdout as markdown tables, showing
/// at most `max_rows` rows per chart.
pub fn print_dashboard(dashboard: &Dashboard, max_rows: usize) {
    println!("{}", dashboard.title);
    if let Some(byline) = &dashboard.byline {
        println!("{}", byline);
    }
    println!();
    for section in &dashboard.sections {
        print_section(dashboard, section, max_rows);
    }
}
