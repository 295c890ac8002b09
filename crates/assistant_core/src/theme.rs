//! Theme preference and the controller that keeps the persisted value and the
//! applied styling in step.

use engine_logging::{engine_info, engine_warn};
use thiserror::Error;

/// Key under which the preference is persisted.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parses a persisted value. Anything other than `"dark"` or `"light"`
    /// is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme preference could not be read: {0}")]
    Read(String),
    #[error("theme preference could not be written: {0}")]
    Write(String),
}

/// String key-value storage that survives restarts.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The visual root the renderer styles from.
pub trait StyleRoot {
    fn is_dark(&self) -> bool;
    fn set_dark(&mut self, dark: bool);
}

/// Owns the preference store and the styling root and changes them together.
pub struct ThemeController<S, R> {
    store: S,
    root: R,
    current: ThemePreference,
}

impl<S: PreferenceStore, R: StyleRoot> ThemeController<S, R> {
    pub fn new(store: S, root: R) -> Self {
        let current = if root.is_dark() {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        };
        Self {
            store,
            root,
            current,
        }
    }

    pub fn get(&self) -> ThemePreference {
        self.current
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the persisted preference and applies it when it is `dark`.
    ///
    /// A light or missing preference leaves the root untouched. Unreadable
    /// storage is logged and treated as missing.
    pub fn load(&mut self) -> ThemePreference {
        let persisted = match self.store.get(THEME_KEY) {
            Ok(value) => value.as_deref().and_then(ThemePreference::parse),
            Err(err) => {
                engine_warn!("Ignoring unreadable theme preference: {}", err);
                None
            }
        };
        if persisted == Some(ThemePreference::Dark) {
            self.root.set_dark(true);
            self.current = ThemePreference::Dark;
        }
        self.current
    }

    /// Flips the theme. The next value is derived from the styling root, the
    /// store is written first and the root only changes once the write
    /// succeeded, so a failed write leaves both sides as they were.
    pub fn toggle(&mut self) -> Result<ThemePreference, ThemeError> {
        let next = if self.root.is_dark() {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        };
        self.store.set(THEME_KEY, next.as_str())?;
        self.root.set_dark(next.is_dark());
        self.current = next;
        engine_info!("Theme switched to {}", next.as_str());
        Ok(next)
    }
}
