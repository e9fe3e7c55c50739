//! Activity card: accent band with icon glyph, title, current and previous hours

use crate::theme::{ActivityStyle, BaseColors};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use timeboard_core::models::ColorScheme;
use timeboard_core::CardView;

/// Rows a card needs to show everything
pub const CARD_HEIGHT: u16 = 7;

pub struct Card<'a> {
    view: &'a CardView,
}

impl<'a> Card<'a> {
    pub fn new(view: &'a CardView) -> Self {
        Self { view }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, scheme: ColorScheme) {
        let accent = ActivityStyle::accent(self.view.kind);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        // Accent band with the activity glyph on the right
        let band = Paragraph::new(Line::from(format!(
            "{} ",
            ActivityStyle::glyph(self.view.kind)
        )))
        .alignment(Alignment::Right)
        .style(Style::default().fg(BaseColors::bg(scheme)).bg(accent));
        frame.render_widget(band, chunks[0]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(BaseColors::surface(scheme)))
            .title(Span::styled(
                format!(" {} ", self.view.title),
                Style::default()
                    .fg(BaseColors::fg(scheme))
                    .add_modifier(Modifier::BOLD),
            ))
            .title(
                Line::from(Span::styled(
                    " ••• ",
                    Style::default().fg(BaseColors::muted(scheme)),
                ))
                .right_aligned(),
            );

        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(" {}", self.view.current_text()),
                Style::default()
                    .fg(BaseColors::fg(scheme))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}", self.view.previous_text()),
                Style::default().fg(BaseColors::muted(scheme)),
            )),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_lines;
    use ratatui::{Terminal, backend::TestBackend};
    use timeboard_core::models::{Activity, TimeframeStats, Timeframes};
    use timeboard_core::Timeframe;

    fn render_card(view: &CardView) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(30, CARD_HEIGHT)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                Card::new(view).render(f, area, ColorScheme::Dark)
            })
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn activity(title: &str, current: u32, previous: u32) -> Activity {
        Activity::new(
            title,
            Timeframes {
                daily: TimeframeStats::new(current, previous),
                weekly: TimeframeStats::default(),
                monthly: TimeframeStats::default(),
            },
        )
    }

    #[test]
    fn test_card_shows_hours_and_label() {
        let view = CardView::new(&activity("Work", 5, 7), Timeframe::Daily, "Last Day");
        let text = render_card(&view).join("\n");

        assert!(text.contains("Work"));
        assert!(text.contains("•••"));
        assert!(text.contains("5hrs"));
        assert!(text.contains("Last Day - 7hrs"));
    }

    #[test]
    fn test_card_singular_hour() {
        let view = CardView::new(&activity("Exercise", 1, 1), Timeframe::Daily, "Last Day");
        let text = render_card(&view).join("\n");

        assert!(text.contains(" 1hr "));
        assert!(text.contains("Last Day - 1hr"));
        assert!(!text.contains("1hrs"));
    }

    #[test]
    fn test_unknown_activity_uses_fallback_glyph() {
        let view = CardView::new(&activity("Reading", 0, 2), Timeframe::Daily, "Last Day");
        let lines = render_card(&view);

        assert!(lines[0].contains(ActivityStyle::glyph(timeboard_core::ActivityKind::Exercise)));
        assert!(lines.join("\n").contains("0hrs"));
    }
}
