//! Theme registry and reactive theme store.
//!
//! A theme is a named visual configuration: color palette plus the
//! animation tied to it. The animation lives on the theme record itself,
//! so adding a theme cannot drift out of sync with a side table. The
//! store publishes the active selection on a watch channel for UI
//! surfaces to react to.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::storage::Storage;

/// Theme key used when nothing has been persisted yet
pub const DEFAULT_THEME: &str = "love";

/// Animation used when the active theme is unknown to the registry
pub const DEFAULT_ANIMATION: &str = "theme-bounce";

/// Color palette of a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePalette {
    /// Primary brand color (hex)
    pub primary: String,
    /// Secondary color (hex)
    pub secondary: String,
    /// Accent color (hex)
    pub accent: String,
}

impl ThemePalette {
    fn new(primary: &str, secondary: &str, accent: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
        }
    }

    /// Palette used when the active theme has no registry entry
    pub fn fallback() -> Self {
        Self::new("#ff4081", "#e91e63", "#ff80ab")
    }
}

/// A named visual configuration selectable by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeInfo {
    /// Stable key ("spring", "winter", ...)
    pub key: String,
    /// English display label; localized labels live under `theme.{key}`
    pub label: String,
    /// Color palette
    pub palette: ThemePalette,
    /// Animation shown with this theme
    pub animation: String,
}

fn theme(key: &str, label: &str, palette: ThemePalette, animation: &str) -> ThemeInfo {
    ThemeInfo {
        key: key.to_string(),
        label: label.to_string(),
        palette,
        animation: animation.to_string(),
    }
}

static BUILTIN_THEMES: LazyLock<Vec<ThemeInfo>> = LazyLock::new(|| {
    vec![
        theme(
            "spring",
            "Spring",
            ThemePalette::new("#8bc34a", "#4caf50", "#cddc39"),
            "petal-drift",
        ),
        theme(
            "summer",
            "Summer",
            ThemePalette::new("#ffb300", "#ff7043", "#ffd54f"),
            "sun-pulse",
        ),
        theme(
            "autumn",
            "Autumn",
            ThemePalette::new("#ff7043", "#8d6e63", "#ffab91"),
            "leaf-fall",
        ),
        theme(
            "winter",
            "Winter",
            ThemePalette::new("#64b5f6", "#90a4ae", "#b3e5fc"),
            "snow-drift",
        ),
        theme(
            "love",
            "Love",
            ThemePalette::new("#ff4081", "#e91e63", "#ff80ab"),
            "heart-beat",
        ),
    ]
});

/// All selectable themes
pub fn available_themes() -> &'static [ThemeInfo] {
    &BUILTIN_THEMES
}

/// Registry lookup by key
pub fn theme_info(key: &str) -> Option<&'static ThemeInfo> {
    BUILTIN_THEMES.iter().find(|t| t.key == key)
}

/// Name under which the renderer knows a theme variant.
///
/// Light variants are registered under the bare key; dark variants under
/// `"dark" + Capitalized(key)`, e.g. `winter` / `darkWinter`.
pub fn renderer_theme_name(key: &str, dark: bool) -> String {
    if !dark {
        return key.to_string();
    }
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => format!("dark{}{}", first.to_uppercase(), chars.as_str()),
        None => "dark".to_string(),
    }
}

/// External UI engine that accepts an active theme name
pub trait ThemeRenderer {
    /// Switch the engine's active theme
    fn set_theme_name(&mut self, name: &str);
}

/// The active theme selection, as published on the store's watch channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSelection {
    /// Active theme key
    pub key: String,
    /// Dark-mode flag
    pub dark: bool,
}

/// Reactive holder for the active theme selection.
///
/// With storage attached, `initialize` reads the persisted preference and
/// every change is written back.
pub struct ThemeStore {
    selection_tx: watch::Sender<ThemeSelection>,
    storage: Option<Storage>,
}

impl ThemeStore {
    /// Create a store with no persistence
    pub fn new() -> Self {
        let (selection_tx, _) = watch::channel(ThemeSelection {
            key: DEFAULT_THEME.to_string(),
            dark: false,
        });
        Self {
            selection_tx,
            storage: None,
        }
    }

    /// Create a store that persists changes to the given storage
    pub fn with_storage(storage: Storage) -> Self {
        let mut store = Self::new();
        store.storage = Some(storage);
        store
    }

    /// Startup routine: apply the persisted preference, if any.
    ///
    /// Persisted keys are applied as-is; a key from a since-removed theme
    /// falls back at lookup time (animation, palette).
    pub fn initialize(&self) {
        let Some(ref storage) = self.storage else {
            return;
        };
        match storage.load_preferences() {
            Ok(Some(prefs)) => {
                debug!(theme = %prefs.theme, dark = prefs.dark_mode, "restored theme preference");
                self.selection_tx.send_replace(ThemeSelection {
                    key: prefs.theme,
                    dark: prefs.dark_mode,
                });
            }
            Ok(None) => {}
            Err(e) => warn!("failed to load theme preference: {e}"),
        }
    }

    /// The active theme key
    pub fn current_theme(&self) -> String {
        self.selection_tx.borrow().key.clone()
    }

    /// Registry entry for the active theme, if it has one
    pub fn current_theme_info(&self) -> Option<&'static ThemeInfo> {
        theme_info(&self.selection_tx.borrow().key)
    }

    /// Dark-mode flag
    pub fn is_dark_mode(&self) -> bool {
        self.selection_tx.borrow().dark
    }

    /// All selectable themes
    pub fn available_themes(&self) -> &'static [ThemeInfo] {
        available_themes()
    }

    /// Subscribe to selection changes
    pub fn subscribe(&self) -> watch::Receiver<ThemeSelection> {
        self.selection_tx.subscribe()
    }

    /// Switch to the given theme. Unknown keys are ignored.
    pub fn set_theme(&self, key: &str) {
        if theme_info(key).is_none() {
            warn!(key, "ignoring unknown theme key");
            return;
        }
        info!(key, "theme changed");
        self.selection_tx.send_modify(|s| s.key = key.to_string());
        self.persist();
    }

    /// Flip the dark-mode flag
    pub fn toggle_dark_mode(&self) {
        self.selection_tx.send_modify(|s| s.dark = !s.dark);
        self.persist();
    }

    /// CSS class for a UI surface under the active theme: `"{base}-{key}"`
    pub fn theme_class(&self, base: &str) -> String {
        format!("{}-{}", base, self.selection_tx.borrow().key)
    }

    /// Animation tied to the active theme; unknown keys fall back to
    /// [`DEFAULT_ANIMATION`]
    pub fn seasonal_animation(&self) -> String {
        self.current_theme_info()
            .map(|t| t.animation.clone())
            .unwrap_or_else(|| DEFAULT_ANIMATION.to_string())
    }

    /// Active palette, or the fixed fallback when the active theme has no
    /// registry entry
    pub fn colors(&self) -> ThemePalette {
        self.current_theme_info()
            .map(|t| t.palette.clone())
            .unwrap_or_else(ThemePalette::fallback)
    }

    /// Push the active selection into an external UI engine
    pub fn apply_to_renderer(&self, renderer: &mut dyn ThemeRenderer) {
        let selection = self.selection_tx.borrow().clone();
        renderer.set_theme_name(&renderer_theme_name(&selection.key, selection.dark));
    }

    fn persist(&self) {
        let Some(ref storage) = self.storage else {
            return;
        };
        let selection = self.selection_tx.borrow().clone();
        let mut prefs = storage.load_preferences().ok().flatten().unwrap_or_default();
        prefs.theme = selection.key;
        prefs.dark_mode = selection.dark;
        if let Err(e) = storage.save_preferences(&prefs) {
            warn!("failed to persist theme preference: {e}");
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}
