//! Main UI rendering

use crate::app::App;
use crate::components::{CardsGrid, Header, HeaderLayout};
use crate::theme::BaseColors;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use timeboard_core::Timeframe;

/// Below this width the header moves above the cards
const SIDEBAR_MIN_WIDTH: u16 = 100;
const SIDEBAR_WIDTH: u16 = 26;
const BAR_HEIGHT: u16 = 5;

/// Main UI state
#[derive(Debug, Default)]
pub struct Ui {
    header: Header,
    grid: CardsGrid,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole dashboard
    pub fn render(&mut self, frame: &mut Frame, app: &App) {
        let size = frame.area();
        let scheme = app.color_scheme;

        frame.render_widget(
            Block::default().style(Style::default().bg(BaseColors::bg(scheme))),
            size,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Dashboard
                Constraint::Length(1), // Status bar
            ])
            .split(size);

        let (layout, header_area, grid_area) = if chunks[0].width >= SIDEBAR_MIN_WIDTH {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(chunks[0]);
            (HeaderLayout::Sidebar, columns[0], columns[1])
        } else {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(BAR_HEIGHT), Constraint::Min(0)])
                .split(chunks[0]);
            (HeaderLayout::Bar, rows[0], rows[1])
        };

        self.header.render(
            frame,
            header_area,
            &app.dataset.profile,
            app.timeframe(),
            scheme,
            layout,
        );
        self.grid.render(
            frame,
            grid_area,
            &app.dataset,
            app.timeframe(),
            scheme,
            app.scroll(),
        );

        self.render_status_bar(frame, chunks[1], app);

        // Help modal overlays everything
        app.help_modal.render(frame, size, &app.keybindings);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, app: &App) {
        let status = if let Some(ref msg) = app.status_message {
            Line::from(vec![
                Span::styled(" ⚠ ", Style::default().fg(Color::Yellow).bold()),
                Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)),
            ])
        } else {
            Line::from(vec![
                Span::styled(
                    format!(" ● {} ", app.timeframe().label()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled("│", Style::default().fg(Color::Gray)),
                Span::styled(" q", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" quit ", Style::default().fg(Color::Gray)),
                Span::styled("│", Style::default().fg(Color::Gray)),
                Span::styled(" d/w/m", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" timeframe ", Style::default().fg(Color::Gray)),
                Span::styled("│", Style::default().fg(Color::Gray)),
                Span::styled(" ?", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" help", Style::default().fg(Color::Gray)),
            ])
        };

        let bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(bar, area);
    }

    /// Largest grid scroll offset the last render allowed
    pub fn max_scroll(&self) -> usize {
        self.grid.max_scroll()
    }

    /// Timeframe button under a mouse position, from the last render
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Timeframe> {
        self.header.hit_test(column, row)
    }
}
