//! User configuration: key bindings, pacing and motion preferences.
//!
//! Stored as a plain `key = value` file at
//! `$XDG_CONFIG_HOME/folio/config.toml` (default `~/.config/folio/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::counter::CounterConfig;

// ───────────────────────────────────────── actions ───────────

/// Everything a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    NextSection,
    PrevSection,
    ToggleMotion,
    Quit,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::ScrollUp,
        Action::ScrollDown,
        Action::PageUp,
        Action::PageDown,
        Action::Top,
        Action::Bottom,
        Action::NextSection,
        Action::PrevSection,
        Action::ToggleMotion,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::Top => "top",
            Action::Bottom => "bottom",
            Action::NextSection => "next_section",
            Action::PrevSection => "prev_section",
            Action::ToggleMotion => "toggle_motion",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// Key code plus the CTRL/ALT/SHIFT modifiers that must accompany it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Platform modifiers such as SUPER are ignored.  Shifted characters
    /// arrive with SHIFT already applied, so SHIFT is not compared for them.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mut mask = MODIFIER_MASK;
        if matches!(event.code, KeyCode::Char(_)) {
            mask.remove(KeyModifiers::SHIFT);
        }
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Short label for the status bar (`"↓"`, `"Ctrl+c"`, `"g"`).
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            _ => key_name(self.code),
        };
        format!("{}{key}", modifier_prefix(self.modifiers))
    }

    fn to_config_string(&self) -> String {
        format!("{}{}", modifier_prefix(self.modifiers), key_name(self.code))
    }

    /// Parse `"Ctrl+c"`, `"Shift+Tab"`, `"PageDown"`, `"j"`.
    fn parse(s: &str) -> Option<Self> {
        let mut parts: Vec<&str> = s.split('+').collect();
        let key = parts.pop()?;
        let mut modifiers = KeyModifiers::NONE;
        for part in parts {
            modifiers |= match part.to_lowercase().as_str() {
                "ctrl" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return None,
            };
        }

        let code = match key.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            f if f.starts_with('f') && f.len() > 1 => KeyCode::F(f[1..].parse().ok()?),
            _ if key.chars().count() == 1 => KeyCode::Char(key.chars().next()?),
            _ => return None,
        };
        Some(Self { code, modifiers })
    }
}

fn modifier_prefix(modifiers: KeyModifiers) -> String {
    let mut s = String::new();
    for (flag, name) in [
        (KeyModifiers::CONTROL, "Ctrl+"),
        (KeyModifiers::ALT, "Alt+"),
        (KeyModifiers::SHIFT, "Shift+"),
    ] {
        if modifiers.contains(flag) {
            s.push_str(name);
        }
    }
    s
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".into(),
        KeyCode::Down => "Down".into(),
        KeyCode::Left => "Left".into(),
        KeyCode::Right => "Right".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "BackTab".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::PageUp => "PageUp".into(),
        KeyCode::PageDown => "PageDown".into(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

// ───────────────────────────────────────── config ────────────

/// Effective configuration after the file has been applied over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Target frame rate of the animation loop.
    pub fps: u32,
    /// Rows scrolled per mouse-wheel notch or arrow key.
    pub wheel_step: u16,
    /// Start with every animation disabled.
    pub reduced_motion: bool,
    pub counter_interval_ms: u64,
    pub counter_dwell_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            fps: 60,
            wheel_step: 3,
            reduced_motion: false,
            counter_interval_ms: 30,
            counter_dwell_ms: 3000,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        let key = |code| KeyBind::new(code, KeyModifiers::NONE);
        let ch = |c| key(KeyCode::Char(c));
        HashMap::from([
            (Action::ScrollUp, vec![key(KeyCode::Up), ch('k')]),
            (Action::ScrollDown, vec![key(KeyCode::Down), ch('j')]),
            (Action::PageUp, vec![key(KeyCode::PageUp), ch('b')]),
            (Action::PageDown, vec![key(KeyCode::PageDown), ch(' ')]),
            (Action::Top, vec![key(KeyCode::Home), ch('g')]),
            (Action::Bottom, vec![key(KeyCode::End), ch('G')]),
            (Action::NextSection, vec![key(KeyCode::Tab), ch('n')]),
            (
                Action::PrevSection,
                vec![KeyBind::new(KeyCode::BackTab, KeyModifiers::SHIFT), ch('p')],
            ),
            (Action::ToggleMotion, vec![ch('m')]),
            (Action::Quit, vec![ch('q'), key(KeyCode::Esc)]),
        ])
    }

    /// Action bound to `event`.  The binding with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, b)| b.matches(event))
            .max_by_key(|(_, b)| b.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.max(1)))
    }

    pub fn counter_config(&self) -> CounterConfig {
        CounterConfig {
            interval: Duration::from_millis(self.counter_interval_ms),
            dwell: Duration::from_millis(self.counter_dwell_ms),
            ..CounterConfig::default()
        }
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Key hint for the status bar, built from the current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: scroll | {}: next section | {}: motion | {}: quit",
            self.short_binding(Action::ScrollUp),
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::NextSection),
            self.short_binding(Action::ToggleMotion),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Self::parse(&contents)
            }
            Err(_) => Self::default(),
        }
    }

    /// Apply a config file over the defaults.  Unknown keys and values that
    /// do not parse are skipped; numbers are clamped to usable ranges.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "fps" => {
                    if let Ok(v) = value.parse::<u32>() {
                        config.fps = v.clamp(5, 240);
                    }
                }
                "wheel_step" => {
                    if let Ok(v) = value.parse::<u16>() {
                        config.wheel_step = v.clamp(1, 20);
                    }
                }
                "reduced_motion" => {
                    if let Ok(v) = value.parse::<bool>() {
                        config.reduced_motion = v;
                    }
                }
                "counter_interval_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.counter_interval_ms = v.clamp(5, 1000);
                    }
                }
                "counter_dwell_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.counter_dwell_ms = v.min(60_000);
                    }
                }
                _ => {
                    let Some(action) = Action::from_config_key(key) else {
                        tracing::debug!(key, "ignoring unknown config key");
                        continue;
                    };
                    let parsed: Vec<KeyBind> = value
                        .split(',')
                        .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                        .collect();
                    if !parsed.is_empty() {
                        config.bindings.insert(action, parsed);
                    }
                }
            }
        }
        config
    }

    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let path = config_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# folio configuration".to_string(),
            String::new(),
            "# Animation".to_string(),
            format!("fps = {}", self.fps),
            format!("wheel_step = {}", self.wheel_step),
            format!("reduced_motion = {}", self.reduced_motion),
            format!("counter_interval_ms = {}", self.counter_interval_ms),
            format!("counter_dwell_ms = {}", self.counter_dwell_ms),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab, BackTab,".to_string(),
            "#   Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];
        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(KeyBind::to_config_string).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// `$XDG_CONFIG_HOME/folio/config.toml`, falling back to `~/.config`.
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("folio").join("config.toml")
}
