use crate::constants::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::dom;
use crate::theme::Theme;
use web_sys as web;

fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Apply the saved theme, then let `#theme-toggle` flip and persist it.
pub fn wire_theme_toggle(document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };

    let saved = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    if let Some(theme) = saved.as_deref().and_then(Theme::parse) {
        _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }

    dom::add_click_listener(document, "theme-toggle", move || {
        let current = root.get_attribute(THEME_ATTRIBUTE);
        let next = Theme::toggled_from(current.as_deref());
        _ = root.set_attribute(THEME_ATTRIBUTE, next.as_str());
        if let Some(s) = storage() {
            _ = s.set_item(THEME_STORAGE_KEY, next.as_str());
        }
        log::debug!("[theme] {}", next.as_str());
    });
}
