//! Custom keybindings system for timeboard TUI
//!
//! Supports:
//! - Customizable keybindings via preferences.json
//! - Modifier keys: Ctrl, Shift, Alt, Cmd
//! - Standard keys: a-z, 0-9, F1-F12, Tab, Enter, Esc, arrows
//! - Fallback to defaults if custom bindings missing or malformed
//! - Reverse lookup for help modal display

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;
use timeboard_core::Timeframe;
use tracing::warn;

/// Actions that can be triggered by keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Quit application
    Quit,
    /// Quit from anywhere, even with the help modal open
    ForceQuit,
    SelectDaily,
    SelectWeekly,
    SelectMonthly,
    /// Cycle forward through timeframes
    NextTimeframe,
    /// Cycle backward through timeframes
    PrevTimeframe,
    /// Scroll the cards grid down one row
    ScrollDown,
    /// Scroll the cards grid up one row
    ScrollUp,
    /// Toggle color scheme (Dark/Light)
    ThemeToggle,
    /// Toggle help modal
    ToggleHelp,
    /// Close current modal
    CloseModal,
}

impl KeyAction {
    /// Get all possible actions
    pub fn all() -> &'static [KeyAction] {
        &[
            KeyAction::SelectDaily,
            KeyAction::SelectWeekly,
            KeyAction::SelectMonthly,
            KeyAction::NextTimeframe,
            KeyAction::PrevTimeframe,
            KeyAction::ScrollDown,
            KeyAction::ScrollUp,
            KeyAction::ThemeToggle,
            KeyAction::ToggleHelp,
            KeyAction::CloseModal,
            KeyAction::Quit,
            KeyAction::ForceQuit,
        ]
    }

    /// Get action name for preferences.json
    pub fn name(&self) -> &'static str {
        match self {
            KeyAction::Quit => "quit",
            KeyAction::ForceQuit => "force_quit",
            KeyAction::SelectDaily => "select_daily",
            KeyAction::SelectWeekly => "select_weekly",
            KeyAction::SelectMonthly => "select_monthly",
            KeyAction::NextTimeframe => "next_timeframe",
            KeyAction::PrevTimeframe => "prev_timeframe",
            KeyAction::ScrollDown => "scroll_down",
            KeyAction::ScrollUp => "scroll_up",
            KeyAction::ThemeToggle => "theme_toggle",
            KeyAction::ToggleHelp => "toggle_help",
            KeyAction::CloseModal => "close_modal",
        }
    }

    /// Get human-readable description for help modal
    pub fn description(&self) -> &'static str {
        match self {
            KeyAction::Quit => "Quit application",
            KeyAction::ForceQuit => "Quit immediately",
            KeyAction::SelectDaily => "Show daily report",
            KeyAction::SelectWeekly => "Show weekly report",
            KeyAction::SelectMonthly => "Show monthly report",
            KeyAction::NextTimeframe => "Next timeframe",
            KeyAction::PrevTimeframe => "Previous timeframe",
            KeyAction::ScrollDown => "Scroll cards down",
            KeyAction::ScrollUp => "Scroll cards up",
            KeyAction::ThemeToggle => "Toggle theme (Dark/Light)",
            KeyAction::ToggleHelp => "Toggle this help",
            KeyAction::CloseModal => "Close help",
        }
    }

    /// Parse action from string (from preferences.json)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        KeyAction::all()
            .iter()
            .copied()
            .find(|action| action.name() == name)
    }

    /// Timeframe selected directly by this action, if any
    pub fn timeframe(&self) -> Option<Timeframe> {
        match self {
            KeyAction::SelectDaily => Some(Timeframe::Daily),
            KeyAction::SelectWeekly => Some(Timeframe::Weekly),
            KeyAction::SelectMonthly => Some(Timeframe::Monthly),
            _ => None,
        }
    }
}

/// Key with modifiers for lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct KeyWithMods {
    code: KeyCode,
    modifiers: KeyModifiers,
}

/// Keybindings system
pub struct KeyBindings {
    /// Default keybindings (immutable)
    defaults: HashMap<KeyWithMods, KeyAction>,
    /// Custom keybindings from preferences.json (override defaults)
    custom: HashMap<KeyWithMods, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create new keybindings with defaults
    pub fn new() -> Self {
        let none = KeyModifiers::NONE;
        let bindings = [
            (KeyCode::Char('q'), none, KeyAction::Quit),
            (KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::ForceQuit),
            (KeyCode::Char('d'), none, KeyAction::SelectDaily),
            (KeyCode::Char('1'), none, KeyAction::SelectDaily),
            (KeyCode::Char('w'), none, KeyAction::SelectWeekly),
            (KeyCode::Char('2'), none, KeyAction::SelectWeekly),
            (KeyCode::Char('m'), none, KeyAction::SelectMonthly),
            (KeyCode::Char('3'), none, KeyAction::SelectMonthly),
            (KeyCode::Tab, none, KeyAction::NextTimeframe),
            (KeyCode::Right, none, KeyAction::NextTimeframe),
            (KeyCode::Char('l'), none, KeyAction::NextTimeframe),
            (KeyCode::BackTab, none, KeyAction::PrevTimeframe),
            (KeyCode::Left, none, KeyAction::PrevTimeframe),
            (KeyCode::Char('h'), none, KeyAction::PrevTimeframe),
            (KeyCode::Down, none, KeyAction::ScrollDown),
            (KeyCode::Char('j'), none, KeyAction::ScrollDown),
            (KeyCode::Up, none, KeyAction::ScrollUp),
            (KeyCode::Char('k'), none, KeyAction::ScrollUp),
            (KeyCode::Char('t'), KeyModifiers::CONTROL, KeyAction::ThemeToggle),
            (KeyCode::Char('?'), none, KeyAction::ToggleHelp),
            (KeyCode::Esc, none, KeyAction::CloseModal),
        ];

        let defaults = bindings
            .into_iter()
            .map(|(code, modifiers, action)| (KeyWithMods { code, modifiers }, action))
            .collect();

        Self {
            defaults,
            custom: HashMap::new(),
        }
    }

    /// Load custom keybindings from preferences.json
    ///
    /// Format: `{"keybindings": {"Ctrl+D": "select_daily", "F5": "next_timeframe"}}`
    pub fn load_custom(&mut self, keybindings: &HashMap<String, String>) {
        for (key_str, action_str) in keybindings {
            let key_with_mods = match parse_key(key_str) {
                Ok(k) => k,
                Err(e) => {
                    warn!(key = %key_str, error = %e, "Skipping unparseable keybinding");
                    continue;
                }
            };

            let Some(action) = KeyAction::from_name(action_str) else {
                warn!(key = %key_str, action = %action_str, "Skipping keybinding with unknown action");
                continue;
            };

            self.custom.insert(key_with_mods, action);
        }
    }

    /// Get action for a key press
    ///
    /// Shifted punctuation and Shift+Tab arrive with or without SHIFT
    /// depending on the terminal, so a miss is retried without it.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        self.lookup(KeyWithMods { code, modifiers }).or_else(|| {
            let shifted = matches!(code, KeyCode::Char(_) | KeyCode::BackTab)
                && modifiers.contains(KeyModifiers::SHIFT);
            if shifted {
                let mut unshifted = modifiers;
                unshifted.remove(KeyModifiers::SHIFT);
                self.lookup(KeyWithMods {
                    code,
                    modifiers: unshifted,
                })
            } else {
                None
            }
        })
    }

    fn lookup(&self, key: KeyWithMods) -> Option<KeyAction> {
        // Custom bindings take precedence
        if let Some(action) = self.custom.get(&key) {
            return Some(*action);
        }

        self.defaults.get(&key).copied()
    }

    /// All keys bound to an action, formatted and sorted (for help modal)
    ///
    /// A default key rebound to another action by a custom binding is omitted.
    pub fn keys_for_action(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .custom
            .iter()
            .chain(
                self.defaults
                    .iter()
                    .filter(|(key, _)| !self.custom.contains_key(*key)),
            )
            .filter(|(_, act)| **act == action)
            .map(|(key, _)| format_key(key.code, key.modifiers))
            .collect();

        keys.sort();
        keys.dedup();
        keys
    }
}

/// Parse key string from preferences.json
///
/// Examples:
/// - "Ctrl+Q" → KeyCode::Char('q') + CONTROL
/// - "F5" → KeyCode::F(5)
/// - "Tab" → KeyCode::Tab
/// - "shift+tab" → KeyCode::BackTab + SHIFT
fn parse_key(s: &str) -> Result<KeyWithMods, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Empty key string".to_string());
    }

    // "+" alone is a key, not a separator
    let parts: Vec<String> = if s == "+" {
        vec!["+".to_string()]
    } else {
        s.split('+').map(|p| p.trim().to_lowercase()).collect()
    };

    let mut modifiers = KeyModifiers::NONE;
    for modifier in &parts[..parts.len() - 1] {
        match modifier.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            "cmd" | "meta" => {
                #[cfg(target_os = "macos")]
                {
                    modifiers |= KeyModifiers::SUPER;
                }
                #[cfg(not(target_os = "macos"))]
                {
                    modifiers |= KeyModifiers::CONTROL;
                }
            }
            _ => return Err(format!("Unknown modifier: {}", modifier)),
        }
    }
    let key_part = &parts[parts.len() - 1];

    let code = match key_part.as_str() {
        "tab" => {
            if modifiers.contains(KeyModifiers::SHIFT) {
                KeyCode::BackTab
            } else {
                KeyCode::Tab
            }
        }
        "backtab" => {
            modifiers |= KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,

        // Function keys
        k if k.len() > 1 && k.starts_with('f') => {
            let num: u8 = k[1..]
                .parse()
                .map_err(|_| format!("Invalid F-key: {}", k))?;
            if !(1..=12).contains(&num) {
                return Err(format!("F-key out of range (1-12): F{}", num));
            }
            KeyCode::F(num)
        }

        // Single character
        k => {
            let mut chars = k.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return Err(format!("Unknown key: {}", key_part)),
            }
        }
    };

    Ok(KeyWithMods { code, modifiers })
}

/// Format key for display in help modal
fn format_key(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && code != KeyCode::BackTab {
        parts.push("Shift".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }

    let key_str = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_uppercase().to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        _ => "Unknown".to_string(),
    };

    parts.push(key_str);
    parts.join("+")
}
