use portfolio_core::{PreferenceStore, ThemePreference, ThemeRoot, ThemeStore};
use wasm_bindgen::JsValue;
use web_sys::Storage;

const DARK_CLASS: &str = "dark";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub(crate) type PageTheme = ThemeStore<LocalStore, DocumentRoot>;

pub(crate) struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub(crate) fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            gloo::console::warn!("localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        let Some(storage) = self.storage.as_ref() else {
            return Err("storage unavailable".to_string());
        };
        storage.set_item(key, value).map_err(js_err)
    }
}

pub(crate) struct DocumentRoot;

impl ThemeRoot for DocumentRoot {
    fn apply(&self, theme: ThemePreference) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(err) = result {
            gloo::console::warn!("failed to apply theme", theme.as_str(), err);
        }
    }
}

pub(crate) fn system_prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let query = window.match_media(DARK_SCHEME_QUERY).ok().flatten()?;
    Some(query.matches())
}

pub(crate) fn load_page_theme() -> PageTheme {
    let (theme, synced) = ThemeStore::load(LocalStore::open(), DocumentRoot, system_prefers_dark());
    if let Err(err) = synced {
        gloo::console::warn!("theme not persisted", err);
    }
    theme
}

pub(crate) fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use portfolio_core::THEME_KEY;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn root_is_dark() -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .map(|root| root.class_list().contains(DARK_CLASS))
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    fn toggle_round_trips_through_local_storage() {
        console_error_panic_hook::set_once();
        let store = LocalStore::open();
        store.write(THEME_KEY, "light").expect("write theme");
        let mut theme = load_page_theme();
        assert_eq!(theme.current(), ThemePreference::Light);
        assert!(!root_is_dark());

        theme.toggle().expect("toggle");
        assert_eq!(store.read(THEME_KEY).as_deref(), Some("dark"));
        assert!(root_is_dark());

        theme.toggle().expect("toggle back");
        assert_eq!(store.read(THEME_KEY).as_deref(), Some("light"));
        assert!(!root_is_dark());
    }
}
