//! Non-interactive output: card table for `show`, file exports for `export`

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Row, Table};
use std::path::Path;
use timeboard_core::{
    export_dashboard_to_html, export_dashboard_to_json, export_dashboard_to_markdown, format_hours,
    CardView, Dataset, Timeframe,
};

/// Export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Html,
    Json,
    Markdown,
}

/// Write the dashboard for one timeframe to `output`
pub fn export(
    dataset: &Dataset,
    timeframe: Timeframe,
    format: ExportFormat,
    output: &Path,
) -> Result<()> {
    match format {
        ExportFormat::Html => export_dashboard_to_html(dataset, timeframe, output),
        ExportFormat::Json => export_dashboard_to_json(dataset, timeframe, output),
        ExportFormat::Markdown => export_dashboard_to_markdown(dataset, timeframe, output),
    }
}

/// Format cards as table (human) or JSON
pub fn format_card_table(
    cards: &[CardView],
    timeframe: Timeframe,
    json: bool,
    no_color: bool,
) -> String {
    if json {
        return serde_json::to_string_pretty(cards).unwrap_or_else(|_| "[]".to_string());
    }

    if cards.is_empty() {
        return "No activities found.".to_string();
    }

    let previous_header = timeframe.previous_label();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Apply colors only if enabled
    if no_color {
        table.set_header(vec!["Activity", timeframe.label(), previous_header]);
    } else {
        table.set_header(vec![
            Cell::new("Activity").fg(Color::Cyan),
            Cell::new(timeframe.label()).fg(Color::Cyan),
            Cell::new(previous_header).fg(Color::Cyan),
        ]);
    }

    for card in cards {
        table.add_row(Row::from(vec![
            Cell::new(&card.title),
            Cell::new(format_hours(card.current)).set_alignment(CellAlignment::Right),
            Cell::new(format_hours(card.previous)).set_alignment(CellAlignment::Right),
        ]));
    }

    table.to_string()
}
