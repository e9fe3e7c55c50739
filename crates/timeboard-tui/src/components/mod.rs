pub mod card;
pub mod cards_grid;
pub mod header;
pub mod help_modal;
pub mod time_range_selector;

pub use card::Card;
pub use cards_grid::CardsGrid;
pub use header::{Header, HeaderLayout};
pub use help_modal::HelpModal;
pub use time_range_selector::TimeRangeSelector;
