//! TUI Application state
//!
//! `App` owns the single piece of selection state (the active timeframe)
//! together with the injected dataset and display settings.

use crate::components::HelpModal;
use crate::keybindings::{KeyAction, KeyBindings};
use crossterm::event::{KeyCode, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use timeboard_core::models::ColorScheme;
use timeboard_core::{Dataset, Preferences, Timeframe};
use tracing::{debug, warn};

/// TUI Application state
pub struct App {
    /// Activities to display
    pub dataset: Arc<Dataset>,

    /// Currently selected timeframe
    timeframe: Timeframe,

    /// First visible row of the cards grid
    scroll: usize,

    /// Active color scheme
    pub color_scheme: ColorScheme,

    /// Keybindings (defaults + preferences overrides)
    pub keybindings: KeyBindings,

    /// Help overlay
    pub help_modal: HelpModal,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message shown in the footer
    pub status_message: Option<String>,

    /// Loaded preferences, re-saved when the theme changes
    preferences: Preferences,

    /// Where preferences are persisted (None = don't persist)
    config_dir: Option<PathBuf>,
}

impl App {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            timeframe: Timeframe::default(),
            scroll: 0,
            color_scheme: ColorScheme::default(),
            keybindings: KeyBindings::new(),
            help_modal: HelpModal::new(),
            should_quit: false,
            status_message: None,
            preferences: Preferences::default(),
            config_dir: None,
        }
    }

    /// Start on a specific timeframe instead of daily
    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }

    /// Apply color scheme and custom keybindings; theme changes are saved
    /// back to `config_dir` when one is given
    pub fn with_preferences(mut self, preferences: Preferences, config_dir: Option<PathBuf>) -> Self {
        self.color_scheme = preferences.color_scheme;
        self.keybindings.load_custom(&preferences.keybindings);
        self.preferences = preferences;
        self.config_dir = config_dir;
        self
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// The only way the selection changes
    pub fn select_timeframe(&mut self, timeframe: Timeframe) {
        if self.timeframe != timeframe {
            debug!(from = %self.timeframe, to = %timeframe, "Timeframe selected");
        }
        self.timeframe = timeframe;
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Keep the scroll offset within what the last render could show
    pub fn clamp_scroll(&mut self, max_scroll: usize) {
        self.scroll = self.scroll.min(max_scroll);
    }

    /// Handle keyboard input
    /// Returns true if the key was bound to an action
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Some(action) = self.keybindings.get_action(code, modifiers) else {
            return false;
        };

        // While the help modal is open only closing and quitting get through
        if self.help_modal.is_visible() {
            match action {
                KeyAction::ToggleHelp | KeyAction::CloseModal => self.help_modal.hide(),
                KeyAction::Quit | KeyAction::ForceQuit => self.should_quit = true,
                _ => return false,
            }
            return true;
        }

        match action {
            KeyAction::Quit | KeyAction::ForceQuit => self.should_quit = true,
            KeyAction::SelectDaily | KeyAction::SelectWeekly | KeyAction::SelectMonthly => {
                if let Some(timeframe) = action.timeframe() {
                    self.select_timeframe(timeframe);
                }
            }
            KeyAction::NextTimeframe => self.select_timeframe(self.timeframe.next()),
            KeyAction::PrevTimeframe => self.select_timeframe(self.timeframe.prev()),
            KeyAction::ScrollDown => self.scroll_down(),
            KeyAction::ScrollUp => self.scroll_up(),
            KeyAction::ThemeToggle => self.toggle_theme(),
            KeyAction::ToggleHelp => self.help_modal.toggle(),
            KeyAction::CloseModal => return false,
        }

        true
    }

    /// Handle a left click that landed on a selector button
    pub fn handle_click(&mut self, target: Option<Timeframe>) {
        if self.help_modal.is_visible() {
            return;
        }
        if let Some(timeframe) = target {
            self.select_timeframe(timeframe);
        }
    }

    /// Switch between dark and light, persisting the choice
    pub fn toggle_theme(&mut self) {
        self.color_scheme = self.color_scheme.toggled();
        self.preferences.color_scheme = self.color_scheme;

        if let Some(dir) = &self.config_dir {
            match self.preferences.save(dir) {
                Ok(()) => self.status_message = None,
                Err(e) => {
                    warn!(error = %e, "Failed to save preferences");
                    self.status_message = Some(format!("Could not save theme: {}", e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn app() -> App {
        App::new(Arc::new(Dataset::builtin()))
    }

    fn press(app: &mut App, c: char) -> bool {
        app.handle_key(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_daily() {
        assert_eq!(app().timeframe(), Timeframe::Daily);
        assert_eq!(
            app().with_timeframe(Timeframe::Monthly).timeframe(),
            Timeframe::Monthly
        );
    }

    #[test]
    fn test_timeframe_keys() {
        let mut app = app();
        assert!(press(&mut app, 'w'));
        assert_eq!(app.timeframe(), Timeframe::Weekly);
        assert!(press(&mut app, '3'));
        assert_eq!(app.timeframe(), Timeframe::Monthly);
        assert!(press(&mut app, 'd'));
        assert_eq!(app.timeframe(), Timeframe::Daily);
    }

    #[test]
    fn test_cycle_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.timeframe(), Timeframe::Weekly);
        app.handle_key(KeyCode::Left, KeyModifiers::NONE);
        app.handle_key(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.timeframe(), Timeframe::Monthly);
    }

    #[test]
    fn test_any_timeframe_reachable_in_one_step() {
        for from in Timeframe::ALL {
            for to in Timeframe::ALL {
                let mut app = app().with_timeframe(from);
                app.handle_click(Some(to));
                assert_eq!(app.timeframe(), to);
            }
        }
    }

    #[test]
    fn test_click_outside_buttons_keeps_selection() {
        let mut app = app().with_timeframe(Timeframe::Weekly);
        app.handle_click(None);
        assert_eq!(app.timeframe(), Timeframe::Weekly);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(press(&mut app, 'q'));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_modal_blocks_selection() {
        let mut app = app();
        assert!(press(&mut app, '?'));
        assert!(app.help_modal.is_visible());

        assert!(!press(&mut app, 'm'));
        assert_eq!(app.timeframe(), Timeframe::Daily);
        app.handle_click(Some(Timeframe::Monthly));
        assert_eq!(app.timeframe(), Timeframe::Daily);

        assert!(app.handle_key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.help_modal.is_visible());
        assert!(press(&mut app, 'm'));
        assert_eq!(app.timeframe(), Timeframe::Monthly);
    }

    #[test]
    fn test_unbound_key_not_handled() {
        let mut app = app();
        assert!(!press(&mut app, 'x'));
        assert!(!app.handle_key(KeyCode::Esc, KeyModifiers::NONE));
    }

    #[test]
    fn test_scroll_keys() {
        let mut app = app();
        assert!(press(&mut app, 'j'));
        app.handle_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.scroll(), 2);

        app.clamp_scroll(1);
        assert_eq!(app.scroll(), 1);

        assert!(press(&mut app, 'k'));
        app.handle_key(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.scroll(), 0);
        assert_eq!(app.timeframe(), Timeframe::Daily);
    }

    #[test]
    fn test_preferences_applied() {
        let mut keybindings = HashMap::new();
        keybindings.insert("F2".to_string(), "select_monthly".to_string());
        let prefs = Preferences {
            color_scheme: ColorScheme::Light,
            keybindings,
        };

        let mut app = app().with_preferences(prefs, None);
        assert_eq!(app.color_scheme, ColorScheme::Light);
        assert!(app.handle_key(KeyCode::F(2), KeyModifiers::NONE));
        assert_eq!(app.timeframe(), Timeframe::Monthly);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app().with_preferences(
            Preferences::default(),
            Some(temp_dir.path().to_path_buf()),
        );

        app.handle_key(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(app.color_scheme, ColorScheme::Light);
        assert_eq!(
            Preferences::load(temp_dir.path()).color_scheme,
            ColorScheme::Light
        );
        assert!(app.status_message.is_none());
    }
}
