//! Data models for timeboard

pub mod activity;
pub mod config;
pub mod profile;
pub mod timeframe;

pub use activity::{
    Activity, ActivityKind, TimeframeStats, Timeframes, DEFAULT_ICON_PATH, ELLIPSIS_ICON_PATH,
};
pub use config::ColorScheme;
pub use profile::Profile;
pub use timeframe::Timeframe;
