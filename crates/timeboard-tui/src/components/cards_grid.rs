//! Grid of activity cards for the active timeframe

use super::card::{Card, CARD_HEIGHT};
use crate::theme::BaseColors;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};
use timeboard_core::models::ColorScheme;
use timeboard_core::{card_views, Dataset, Timeframe};

/// Minimum comfortable width of one card column
const MIN_COLUMN_WIDTH: u16 = 28;

#[derive(Debug, Default)]
pub struct CardsGrid {
    /// Largest usable scroll offset from the last render
    max_scroll: usize,
}

impl CardsGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of card columns that fit in a given width (1 to 3)
    pub fn columns_for_width(width: u16) -> usize {
        (width / MIN_COLUMN_WIDTH).clamp(1, 3) as usize
    }

    pub fn max_scroll(&self) -> usize {
        self.max_scroll
    }

    /// Render one card per activity, in dataset order, row by row
    ///
    /// Only whole rows are drawn. When the cards need more height than
    /// `area` has, rows start at `scroll` (clamped) and the last line says
    /// how many cards are hidden.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        dataset: &Dataset,
        timeframe: Timeframe,
        scheme: ColorScheme,
        scroll: usize,
    ) {
        self.max_scroll = 0;

        let cards = card_views(dataset, timeframe);
        if cards.is_empty() {
            return;
        }

        let columns = Self::columns_for_width(area.width);
        let rows = cards.len().div_ceil(columns);
        let card_height = CARD_HEIGHT as usize;

        let overflows = rows * card_height > area.height as usize;
        let visible_rows = if overflows {
            (area.height.saturating_sub(1) as usize / card_height).max(1)
        } else {
            rows
        };
        self.max_scroll = rows.saturating_sub(visible_rows);
        let first_row = scroll.min(self.max_scroll);

        let mut row_constraints = vec![Constraint::Length(CARD_HEIGHT); visible_rows];
        row_constraints.push(Constraint::Min(0));

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area);

        let shown = cards
            .chunks(columns)
            .skip(first_row)
            .take(visible_rows)
            .zip(row_areas.iter());

        for (row_cards, row_area) in shown {
            if row_area.height == 0 {
                break;
            }

            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_area);

            for (view, cell) in row_cards.iter().zip(cells.iter()) {
                Card::new(view).render(frame, *cell, scheme);
            }
        }

        if overflows {
            let above = first_row * columns;
            let below = cards.len().saturating_sub((first_row + visible_rows) * columns);
            let indicator_area = Rect {
                y: area.y + area.height.saturating_sub(1),
                height: area.height.min(1),
                ..area
            };
            frame.render_widget(
                Paragraph::new(Line::from(overflow_text(above, below)))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(BaseColors::muted(scheme))),
                indicator_area,
            );
        }
    }
}

/// "↑ 3 above · ↓ 3 more (j/k to scroll)"
fn overflow_text(above: usize, below: usize) -> String {
    let mut parts = Vec::new();
    if above > 0 {
        parts.push(format!("↑ {} above", above));
    }
    if below > 0 {
        parts.push(format!("↓ {} more", below));
    }
    format!("{} (j/k to scroll)", parts.join(" · "))
}
