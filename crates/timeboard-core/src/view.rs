//! View model shared by the TUI, table output and exports
//!
//! Everything a frontend needs to draw the dashboard for one timeframe:
//! selector buttons with their active state, and one [`CardView`] per
//! activity carrying already-formatted hour strings.

use crate::dataset::Dataset;
use crate::models::{Activity, ActivityKind, Timeframe};
use serde::Serialize;

/// Format an hour count: `1` -> "1hr", anything else -> "Nhrs"
pub fn format_hours(hours: u32) -> String {
    if hours == 1 {
        "1hr".to_string()
    } else {
        format!("{}hrs", hours)
    }
}

/// One button of the timeframe selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectorButton {
    pub timeframe: Timeframe,
    pub label: &'static str,
    pub active: bool,
}

/// Buttons for every timeframe, with exactly the selected one active
pub fn selector_buttons(selected: Timeframe) -> [SelectorButton; 3] {
    Timeframe::ALL.map(|timeframe| SelectorButton {
        timeframe,
        label: timeframe.label(),
        active: timeframe == selected,
    })
}

/// A single activity projected onto one timeframe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    pub current: u32,
    pub previous: u32,
    pub previous_label: &'static str,
    pub icon: &'static str,
    pub css_class: String,
    #[serde(skip)]
    pub kind: ActivityKind,
}

impl CardView {
    pub fn new(activity: &Activity, timeframe: Timeframe, previous_label: &'static str) -> Self {
        let stats = activity.stats(timeframe);
        let kind = activity.kind();
        Self {
            title: activity.title.clone(),
            current: stats.current,
            previous: stats.previous,
            previous_label,
            icon: kind.icon_path(),
            css_class: activity.css_class(),
            kind,
        }
    }

    /// "32hrs"
    pub fn current_text(&self) -> String {
        format_hours(self.current)
    }

    /// "Last Week - 36hrs"
    pub fn previous_text(&self) -> String {
        format!("{} - {}", self.previous_label, format_hours(self.previous))
    }
}

/// One card per activity, in dataset order
pub fn card_views(dataset: &Dataset, timeframe: Timeframe) -> Vec<CardView> {
    let previous_label = timeframe.previous_label();
    dataset
        .activities
        .iter()
        .map(|activity| CardView::new(activity, timeframe, previous_label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours_pluralization() {
        assert_eq!(format_hours(0), "0hrs");
        assert_eq!(format_hours(1), "1hr");
        assert_eq!(format_hours(2), "2hrs");
        assert_eq!(format_hours(128), "128hrs");
    }

    #[test]
    fn test_exactly_one_button_active() {
        for selected in Timeframe::ALL {
            let buttons = selector_buttons(selected);
            let active: Vec<_> = buttons.iter().filter(|b| b.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].timeframe, selected);
        }
    }

    #[test]
    fn test_button_labels_in_order() {
        let labels: Vec<_> = selector_buttons(Timeframe::Daily)
            .iter()
            .map(|b| b.label)
            .collect();
        assert_eq!(labels, vec!["Daily", "Weekly", "Monthly"]);
    }

    #[test]
    fn test_card_views_follow_timeframe() {
        let dataset = Dataset::builtin();

        for timeframe in Timeframe::ALL {
            let cards = card_views(&dataset, timeframe);
            assert_eq!(cards.len(), dataset.len());
            for (card, activity) in cards.iter().zip(&dataset.activities) {
                assert_eq!(card.title, activity.title);
                assert_eq!(card.current, activity.stats(timeframe).current);
                assert_eq!(card.previous, activity.stats(timeframe).previous);
                assert_eq!(card.previous_label, timeframe.previous_label());
            }
        }
    }

    #[test]
    fn test_card_text() {
        let dataset = Dataset::builtin();
        let cards = card_views(&dataset, Timeframe::Daily);

        // Exercise: 1 current, 1 previous
        let exercise = &cards[3];
        assert_eq!(exercise.current_text(), "1hr");
        assert_eq!(exercise.previous_text(), "Last Day - 1hr");

        // Study: 0 current
        assert_eq!(cards[2].current_text(), "0hrs");
    }

    #[test]
    fn test_card_serializes_without_kind() {
        let dataset = Dataset::builtin();
        let card = &card_views(&dataset, Timeframe::Monthly)[5];
        let value = serde_json::to_value(card).unwrap();
        assert_eq!(value["title"], "Self Care");
        assert_eq!(value["css_class"], "self-care");
        assert_eq!(value["icon"], "/images/icon-self-care.svg");
        assert_eq!(value["previous_label"], "Last Month");
        assert!(value.get("kind").is_none());
    }
}
