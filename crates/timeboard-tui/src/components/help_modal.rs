//! Help modal component for displaying keybindings

use crate::keybindings::{KeyAction, KeyBindings};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Help modal displaying keybindings
#[derive(Debug, Default)]
pub struct HelpModal {
    visible: bool,
}

impl HelpModal {
    pub fn new() -> Self {
        Self { visible: false }
    }

    /// Toggle help modal visibility
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Check if modal is visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the modal
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Render the help modal as an overlay
    pub fn render(&self, frame: &mut Frame, area: Rect, keybindings: &KeyBindings) {
        if !self.visible {
            return;
        }

        let lines = build_help_content(keybindings);

        // Calculate centered modal size
        let modal_width = 56.min(area.width);
        let modal_height = (lines.len() as u16 + 2).min(area.height);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(modal_height)) / 2),
                Constraint::Length(modal_height),
                Constraint::Min(0),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length((area.width.saturating_sub(modal_width)) / 2),
                Constraint::Length(modal_width),
                Constraint::Min(0),
            ])
            .split(vertical[1]);

        let modal_area = horizontal[1];

        // Clear the area behind the modal
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                " Help - Keybindings ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let help_text = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Left);

        frame.render_widget(help_text, inner);
    }
}

/// One line per action with its bound keys, plus the mouse hint
fn build_help_content(keybindings: &KeyBindings) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for action in KeyAction::all() {
        let keys = keybindings.keys_for_action(*action);
        if keys.is_empty() {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<18}", keys.join(" / ")),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(action.description()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<18}", "Click"), Style::default().fg(Color::Cyan)),
        Span::raw("Select a timeframe button"),
    ]));

    lines
}
