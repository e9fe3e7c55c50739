//! timeboard-core - Core library for timeboard
//!
//! Provides the activity models, dataset loading, the per-timeframe view
//! model, preferences and static exports.

pub mod dataset;
pub mod error;
pub mod export;
pub mod models;
pub mod preferences;
pub mod view;

pub use dataset::Dataset;
pub use error::CoreError;
pub use export::{export_dashboard_to_html, export_dashboard_to_json, export_dashboard_to_markdown};
pub use models::{Activity, ActivityKind, ColorScheme, Timeframe};
pub use preferences::Preferences;
pub use view::{card_views, format_hours, selector_buttons, CardView, SelectorButton};
