use portfolio_core::nav::section_from_hash;
use portfolio_core::normalize_backend_base;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

pub(crate) fn backend_base() -> String {
    normalize_backend_base(env!("PORTFOLIO_BACKEND_BASE"))
}

pub(crate) fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        gloo::console::log!("scroll target missing", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub(crate) fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Honors a `#section` deep link once the page has rendered, then drops
/// the hash so reloads start at the top.
pub(crate) fn follow_location_hash() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let hash = location.hash().unwrap_or_default();
    let Some(section) = section_from_hash(&hash) else {
        return;
    };
    scroll_to_section(section);
    clear_location_hash();
}

fn clear_location_hash() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    let new_url = format!("{path}{search}");
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url));
    } else {
        let _ = location.set_hash("");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_section_is_a_no_op() {
        console_error_panic_hook::set_once();
        scroll_to_section("no-such-section");
    }

    #[wasm_bindgen_test]
    fn existing_section_scrolls() {
        console_error_panic_hook::set_once();
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let section = document.create_element("section").expect("create section");
        section.set_id("scroll-target");
        document
            .body()
            .expect("body available")
            .append_child(&section)
            .expect("append section");
        scroll_to_section("scroll-target");
        section.remove();
    }

    #[wasm_bindgen_test]
    fn backend_base_has_no_trailing_slash() {
        assert!(!backend_base().ends_with('/'));
    }
}
