use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl Default for ThemePreference {
    fn default() -> Self {
        ThemePreference::Light
    }
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Anything stored other than `"dark"` reads back as light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

pub trait ThemeRoot {
    fn apply(&self, theme: ThemePreference);
}

pub fn initial_theme<S: PreferenceStore>(
    store: &S,
    system_prefers_dark: Option<bool>,
) -> ThemePreference {
    if let Some(saved) = store.read(THEME_KEY).filter(|value| !value.is_empty()) {
        return ThemePreference::from_stored(&saved);
    }
    match system_prefers_dark {
        Some(true) => ThemePreference::Dark,
        _ => ThemePreference::Light,
    }
}

pub struct ThemeStore<S, R> {
    store: S,
    root: R,
    current: ThemePreference,
}

impl<S: PreferenceStore, R: ThemeRoot> ThemeStore<S, R> {
    /// Applies and stores the resolved theme immediately.
    pub fn load(store: S, root: R, system_prefers_dark: Option<bool>) -> (Self, Result<(), String>) {
        let current = initial_theme(&store, system_prefers_dark);
        let theme = Self {
            store,
            root,
            current,
        };
        let synced = theme.sync();
        (theme, synced)
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn toggle(&mut self) -> Result<ThemePreference, String> {
        self.set(self.current.toggled())
    }

    fn set(&mut self, theme: ThemePreference) -> Result<ThemePreference, String> {
        self.current = theme;
        self.sync()?;
        Ok(theme)
    }

    /// The visual root is updated even when the write fails.
    fn sync(&self) -> Result<(), String> {
        self.root.apply(self.current);
        self.store.write(THEME_KEY, self.current.as_str())
    }
}
