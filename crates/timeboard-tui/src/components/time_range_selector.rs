//! Timeframe selector buttons (Daily / Weekly / Monthly)
//!
//! Fully controlled: the selected timeframe comes from the caller and a click
//! is only reported back through [`TimeRangeSelector::hit_test`]. The only
//! thing remembered between frames is where each button was drawn.

use crate::theme::BaseColors;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use timeboard_core::models::ColorScheme;
use timeboard_core::{selector_buttons, Timeframe};

/// Marker drawn in front of the active button
pub const ACTIVE_MARKER: &str = "▸";

#[derive(Debug, Default)]
pub struct TimeRangeSelector {
    /// Screen area of each button from the last render
    hit_areas: Vec<(Rect, Timeframe)>,
}

impl TimeRangeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one button per timeframe, stacked or side by side
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        selected: Timeframe,
        scheme: ColorScheme,
        direction: Direction,
    ) {
        let constraints = match direction {
            Direction::Horizontal => [Constraint::Ratio(1, 3); 3],
            Direction::Vertical => [Constraint::Length(2); 3],
        };
        let alignment = match direction {
            Direction::Horizontal => Alignment::Center,
            Direction::Vertical => Alignment::Left,
        };

        let chunks = Layout::default()
            .direction(direction)
            .constraints(constraints)
            .split(area);

        self.hit_areas.clear();

        for (button, chunk) in selector_buttons(selected).iter().zip(chunks.iter()) {
            if chunk.height == 0 || chunk.width == 0 {
                continue;
            }
            let rect = Rect {
                height: 1,
                ..*chunk
            };

            let (text, style) = if button.active {
                (
                    format!("{} {}", ACTIVE_MARKER, button.label),
                    Style::default()
                        .fg(BaseColors::fg(scheme))
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    format!("  {}", button.label),
                    Style::default().fg(BaseColors::muted(scheme)),
                )
            };

            let paragraph = Paragraph::new(Line::from(Span::styled(text, style))).alignment(alignment);
            frame.render_widget(paragraph, rect);

            self.hit_areas.push((rect, button.timeframe));
        }
    }

    /// Timeframe of the button at a screen position, if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Timeframe> {
        let position = Position::new(column, row);
        self.hit_areas
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, timeframe)| *timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_lines;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(
        selector: &mut TimeRangeSelector,
        selected: Timeframe,
        direction: Direction,
    ) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(36, 6)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                selector.render(f, area, selected, ColorScheme::Dark, direction)
            })
            .unwrap();
        terminal
    }

    #[test]
    fn test_marks_only_selected_button() {
        for selected in Timeframe::ALL {
            let mut selector = TimeRangeSelector::new();
            let terminal = draw(&mut selector, selected, Direction::Vertical);
            let lines = buffer_lines(terminal.backend().buffer());

            let marked: Vec<_> = lines.iter().filter(|l| l.contains(ACTIVE_MARKER)).collect();
            assert_eq!(marked.len(), 1);
            assert!(marked[0].contains(selected.label()));
        }
    }

    #[test]
    fn test_active_button_is_bold() {
        let mut selector = TimeRangeSelector::new();
        let terminal = draw(&mut selector, Timeframe::Weekly, Direction::Vertical);
        let buffer = terminal.backend().buffer();

        // Rows 0, 2, 4 hold Daily, Weekly, Monthly
        assert!(buffer[(2, 2)].modifier.contains(Modifier::BOLD));
        assert!(!buffer[(2, 0)].modifier.contains(Modifier::BOLD));
        assert!(!buffer[(2, 4)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_hit_test_vertical() {
        let mut selector = TimeRangeSelector::new();
        draw(&mut selector, Timeframe::Daily, Direction::Vertical);

        assert_eq!(selector.hit_test(3, 0), Some(Timeframe::Daily));
        assert_eq!(selector.hit_test(3, 2), Some(Timeframe::Weekly));
        assert_eq!(selector.hit_test(3, 4), Some(Timeframe::Monthly));
        // Spacer rows between buttons are not clickable
        assert_eq!(selector.hit_test(3, 1), None);
    }

    #[test]
    fn test_hit_test_horizontal() {
        let mut selector = TimeRangeSelector::new();
        draw(&mut selector, Timeframe::Daily, Direction::Horizontal);

        assert_eq!(selector.hit_test(0, 0), Some(Timeframe::Daily));
        assert_eq!(selector.hit_test(18, 0), Some(Timeframe::Weekly));
        assert_eq!(selector.hit_test(35, 0), Some(Timeframe::Monthly));
        assert_eq!(selector.hit_test(18, 3), None);
    }

    #[test]
    fn test_hit_test_before_render() {
        let selector = TimeRangeSelector::new();
        assert_eq!(selector.hit_test(0, 0), None);
    }
}
