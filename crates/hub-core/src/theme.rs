//! Theme preference

use crate::repository::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Stored choice first, then the system preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
        match stored {
            Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            _ if prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn load(store: &dyn KeyValueStore, prefers_dark: bool) -> Theme {
        Theme::resolve(store.get(THEME_KEY).as_deref(), prefers_dark)
    }

    pub fn save(self, store: &dyn KeyValueStore) {
        store.set(THEME_KEY, self.as_str());
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}
