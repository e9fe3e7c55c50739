//! Dashboard header: profile block plus the timeframe selector

use super::time_range_selector::TimeRangeSelector;
use crate::theme::BaseColors;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use timeboard_core::models::{ColorScheme, Profile};
use timeboard_core::Timeframe;

/// How the header is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// Tall column left of the cards, buttons stacked
    Sidebar,
    /// Short bar above the cards, buttons side by side
    Bar,
}

#[derive(Debug, Default)]
pub struct Header {
    selector: TimeRangeSelector,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        profile: &Profile,
        selected: Timeframe,
        scheme: ColorScheme,
        layout: HeaderLayout,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BaseColors::muted(scheme)))
            .style(Style::default().bg(BaseColors::surface(scheme)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match layout {
            HeaderLayout::Sidebar => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(6), // Profile
                        Constraint::Length(1), // Spacer
                        Constraint::Min(0),    // Selector
                    ])
                    .split(inner);

                self.render_profile(frame, chunks[0], profile, scheme, layout);

                let selector_area = Rect {
                    x: chunks[2].x.saturating_add(1),
                    width: chunks[2].width.saturating_sub(1),
                    ..chunks[2]
                };
                self.selector
                    .render(frame, selector_area, selected, scheme, Direction::Vertical);
            }
            HeaderLayout::Bar => {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Min(20), Constraint::Length(36)])
                    .split(inner);

                self.render_profile(frame, chunks[0], profile, scheme, layout);

                // Vertically center the button row
                let selector_area = Rect {
                    y: chunks[1].y + chunks[1].height.saturating_sub(1) / 2,
                    height: chunks[1].height.min(1),
                    ..chunks[1]
                };
                self.selector
                    .render(frame, selector_area, selected, scheme, Direction::Horizontal);
            }
        }
    }

    fn render_profile(
        &self,
        frame: &mut Frame,
        area: Rect,
        profile: &Profile,
        scheme: ColorScheme,
        layout: HeaderLayout,
    ) {
        let avatar = Span::styled(
            format!("[{}]", profile.initials()),
            Style::default()
                .fg(BaseColors::fg(scheme))
                .bg(BaseColors::highlight(scheme))
                .add_modifier(Modifier::BOLD),
        );
        let desc = Span::styled(
            profile.description.clone(),
            Style::default().fg(BaseColors::muted(scheme)),
        );
        let name = Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(BaseColors::fg(scheme))
                .add_modifier(Modifier::BOLD),
        );

        let lines = match layout {
            HeaderLayout::Sidebar => vec![
                Line::from(""),
                Line::from(vec![Span::raw(" "), avatar]),
                Line::from(""),
                Line::from(vec![Span::raw(" "), desc]),
                Line::from(vec![Span::raw(" "), name]),
            ],
            HeaderLayout::Bar => vec![
                Line::from(vec![Span::raw(" "), avatar, Span::raw(" "), desc]),
                Line::from(vec![Span::raw("      "), name]),
            ],
        };

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Timeframe of the selector button at a screen position
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Timeframe> {
        self.selector.hit_test(column, row)
    }
}
