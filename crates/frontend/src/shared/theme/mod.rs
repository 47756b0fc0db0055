//! Theme management for the dashboard.
//!
//! The dashboard is rendered by a single parameterized component; visual
//! variants are expressed as a theme, one CSS file per variant. The
//! selected theme is persisted in localStorage.

pub mod theme_select;

use leptos::prelude::*;
use web_sys::window;

/// Available visual variants of the dashboard.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Contrast,
}

impl Theme {
    /// Theme name used for the CSS class and localStorage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Contrast => "contrast",
        }
    }

    /// Display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Contrast => "High contrast",
        }
    }

    /// CSS file path for this theme.
    pub fn css_path(&self) -> &'static str {
        match self {
            Theme::Light => "/static/themes/light.css",
            Theme::Dark => "/static/themes/dark.css",
            Theme::Contrast => "/static/themes/contrast.css",
        }
    }

    /// Parse theme from its stored name.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            "contrast" => Theme::Contrast,
            _ => Theme::Light,
        }
    }

    /// All available themes.
    pub fn all() -> [Theme; 3] {
        [Theme::Light, Theme::Dark, Theme::Contrast]
    }
}

const THEME_STORAGE_KEY: &str = "dashboard-theme";

/// Load theme from localStorage.
fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

/// Save theme to localStorage.
fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Apply theme by swapping the theme stylesheet.
fn apply_theme_css(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    let head = match document.head() {
        Some(h) => h,
        None => return,
    };

    // Remove existing theme stylesheet
    if let Ok(Some(existing)) = document.query_selector("#theme-stylesheet") {
        existing.remove();
    }

    // Create new link element for the theme CSS
    if let Ok(link) = document.create_element("link") {
        let _ = link.set_attribute("id", "theme-stylesheet");
        let _ = link.set_attribute("rel", "stylesheet");
        let _ = link.set_attribute("href", theme.css_path());
        let _ = head.append_child(&link);
    }

    // data-theme attribute on body for additional styling hooks
    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme_css(theme);
    }

    /// Get the current theme.
    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    let theme = RwSignal::new(initial_theme);

    apply_theme_css(initial_theme);

    let context = ThemeContext { theme };
    provide_context(context);

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}
