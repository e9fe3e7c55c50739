//! Static exports of the dashboard: HTML page, JSON snapshot, Markdown report
//!
//! The HTML export reproduces the dashboard's component tree and class names
//! so an existing stylesheet can style it unchanged.

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::dataset::Dataset;
use crate::models::{Profile, Timeframe, ELLIPSIS_ICON_PATH};
use crate::view::{card_views, format_hours, selector_buttons, CardView};

/// Serializable snapshot of the dashboard for one timeframe
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub timeframe: Timeframe,
    pub previous_label: &'static str,
    pub profile: &'a Profile,
    pub cards: Vec<CardView>,
}

impl<'a> DashboardSnapshot<'a> {
    pub fn new(dataset: &'a Dataset, timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            previous_label: timeframe.previous_label(),
            profile: &dataset.profile,
            cards: card_views(dataset, timeframe),
        }
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Export the dashboard as a JSON snapshot
///
/// Shape: `{ timeframe, previous_label, profile, cards: [...] }`
pub fn export_dashboard_to_json(dataset: &Dataset, timeframe: Timeframe, path: &Path) -> Result<()> {
    create_parent_dir(path)?;

    let snapshot = DashboardSnapshot::new(dataset, timeframe);
    let json = serde_json::to_string_pretty(&snapshot)
        .context("Failed to serialize dashboard to JSON")?;

    std::fs::write(path, json)
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))?;

    Ok(())
}

/// Export the dashboard as a Markdown report with one table row per activity
pub fn export_dashboard_to_markdown(
    dataset: &Dataset,
    timeframe: Timeframe,
    path: &Path,
) -> Result<()> {
    create_parent_dir(path)?;

    let file = File::create(path)
        .with_context(|| format!("Failed to create Markdown file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# {} Activity Report", timeframe.label())?;
    writeln!(writer)?;
    writeln!(
        writer,
        "**{}**: {}",
        dataset.profile.description, dataset.profile.name
    )?;
    writeln!(
        writer,
        "**Generated**: {}",
        Local::now().format("%Y-%m-%d %H:%M")
    )?;
    writeln!(writer)?;
    writeln!(writer, "| Activity | Current | {} |", timeframe.previous_label())?;
    writeln!(writer, "|----------|---------|---------|")?;

    for card in card_views(dataset, timeframe) {
        writeln!(
            writer,
            "| {} | {} | {} |",
            card.title.replace('|', "\\|"),
            format_hours(card.current),
            format_hours(card.previous)
        )
        .with_context(|| format!("Failed to write row for {}", card.title))?;
    }

    writer.flush().context("Failed to flush Markdown writer")?;

    Ok(())
}

/// Export the dashboard as a standalone HTML page
///
/// Class names follow the dashboard's rendering contract (`header`,
/// `time-range-btn active`, `card-wrapper work`, `current-time`, ...).
pub fn export_dashboard_to_html(dataset: &Dataset, timeframe: Timeframe, path: &Path) -> Result<()> {
    create_parent_dir(path)?;

    let file = File::create(path)
        .with_context(|| format!("Failed to create HTML file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html lang=\"en\">")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "    <meta charset=\"UTF-8\">")?;
    writeln!(
        writer,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(
        writer,
        "    <meta name=\"generator\" content=\"timeboard {}\">",
        Local::now().format("%Y-%m-%d %H:%M")
    )?;
    writeln!(
        writer,
        "    <title>{} Report - timeboard</title>",
        timeframe.label()
    )?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(writer, "<main class=\"dashboard\">")?;

    // Header: profile + selector
    let profile = &dataset.profile;
    writeln!(writer, "    <div class=\"header\">")?;
    writeln!(writer, "        <div class=\"profile\">")?;
    writeln!(
        writer,
        "            <img src=\"{}\" alt=\"\" class=\"profile-image\">",
        html_escape(&profile.image)
    )?;
    writeln!(writer, "            <div class=\"profile-content\">")?;
    writeln!(
        writer,
        "                <p class=\"profile-desc\">{}</p>",
        html_escape(&profile.description)
    )?;
    writeln!(
        writer,
        "                <p class=\"profile-name\">{}</p>",
        html_escape(&profile.name)
    )?;
    writeln!(writer, "            </div>")?;
    writeln!(writer, "        </div>")?;
    writeln!(writer, "        <div class=\"time-range-selector\">")?;
    for button in selector_buttons(timeframe) {
        let class = if button.active {
            "time-range-btn active"
        } else {
            "time-range-btn"
        };
        writeln!(
            writer,
            "            <button class=\"{}\" data-timeframe=\"{}\">{}</button>",
            class,
            button.timeframe.as_str(),
            button.label
        )?;
    }
    writeln!(writer, "        </div>")?;
    writeln!(writer, "    </div>")?;

    // Cards grid
    writeln!(writer, "    <div class=\"cards-grid\">")?;
    for card in card_views(dataset, timeframe) {
        write_card(&mut writer, &card)
            .with_context(|| format!("Failed to write card for {}", card.title))?;
    }
    writeln!(writer, "    </div>")?;

    writeln!(writer, "</main>")?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;

    writer.flush().context("Failed to flush HTML writer")?;

    Ok(())
}

fn write_card<W: Write>(writer: &mut W, card: &CardView) -> std::io::Result<()> {
    let title = html_escape(&card.title);

    writeln!(
        writer,
        "        <div class=\"card-wrapper {}\" style=\"--icon-url: url({})\">",
        html_escape(&card.css_class),
        card.icon
    )?;
    writeln!(writer, "            <div class=\"card\">")?;
    writeln!(writer, "                <div class=\"card-header\">")?;
    writeln!(writer, "                    <h3 class=\"card-title\">{}</h3>", title)?;
    writeln!(
        writer,
        "                    <img src=\"{}\" alt=\"{} icon\" class=\"card-icon\">",
        ELLIPSIS_ICON_PATH, title
    )?;
    writeln!(writer, "                </div>")?;
    writeln!(writer, "                <div class=\"card-content\">")?;
    writeln!(
        writer,
        "                    <p class=\"current-time\">{}</p>",
        card.current_text()
    )?;
    writeln!(
        writer,
        "                    <p class=\"previous-time\">{}</p>",
        card.previous_text()
    )?;
    writeln!(writer, "                </div>")?;
    writeln!(writer, "            </div>")?;
    writeln!(writer, "        </div>")?;
    Ok(())
}

/// HTML escape for safe output
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
