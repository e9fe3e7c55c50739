//! Activity models: tracked categories and their per-timeframe hours

use super::timeframe::Timeframe;
use serde::{Deserialize, Serialize};

/// Icon shown when an activity title has no dedicated icon
pub const DEFAULT_ICON_PATH: &str = "/images/icon-exercise.svg";

/// Menu icon rendered in every card header
pub const ELLIPSIS_ICON_PATH: &str = "/images/icon-ellipsis.svg";

/// Hours spent in the current and previous period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeframeStats {
    pub current: u32,
    pub previous: u32,
}

impl TimeframeStats {
    pub fn new(current: u32, previous: u32) -> Self {
        Self { current, previous }
    }
}

/// Hours for every timeframe; all three are required in data files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeframes {
    pub daily: TimeframeStats,
    pub weekly: TimeframeStats,
    pub monthly: TimeframeStats,
}

impl Timeframes {
    pub fn get(&self, timeframe: Timeframe) -> &TimeframeStats {
        match timeframe {
            Timeframe::Daily => &self.daily,
            Timeframe::Weekly => &self.weekly,
            Timeframe::Monthly => &self.monthly,
        }
    }
}

/// One tracked activity (Work, Play, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Display title, unique within a dataset
    pub title: String,
    pub timeframes: Timeframes,
}

impl Activity {
    pub fn new(title: impl Into<String>, timeframes: Timeframes) -> Self {
        Self {
            title: title.into(),
            timeframes,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        ActivityKind::from_title(&self.title)
    }

    pub fn stats(&self, timeframe: Timeframe) -> &TimeframeStats {
        self.timeframes.get(timeframe)
    }

    /// Style class derived from the title: "Self Care" -> "self-care"
    ///
    /// Only the first space is replaced.
    pub fn css_class(&self) -> String {
        self.title.to_lowercase().replacen(' ', "-", 1)
    }
}

/// Known activity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Work,
    Play,
    Study,
    Exercise,
    Social,
    SelfCare,
    /// Any title without a dedicated icon
    Other,
}

impl ActivityKind {
    /// Resolve a kind from an exact activity title
    pub fn from_title(title: &str) -> Self {
        match title {
            "Work" => ActivityKind::Work,
            "Play" => ActivityKind::Play,
            "Study" => ActivityKind::Study,
            "Exercise" => ActivityKind::Exercise,
            "Social" => ActivityKind::Social,
            "Self Care" => ActivityKind::SelfCare,
            _ => ActivityKind::Other,
        }
    }

    pub fn icon_path(&self) -> &'static str {
        match self {
            ActivityKind::Work => "/images/icon-work.svg",
            ActivityKind::Play => "/images/icon-play.svg",
            ActivityKind::Study => "/images/icon-study.svg",
            ActivityKind::Exercise => "/images/icon-exercise.svg",
            ActivityKind::Social => "/images/icon-social.svg",
            ActivityKind::SelfCare => "/images/icon-self-care.svg",
            ActivityKind::Other => DEFAULT_ICON_PATH,
        }
    }
}
