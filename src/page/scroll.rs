use crate::dom;
use crate::nav::{current_section, link_is_active, scroll_progress_percent};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Progress bar width and nav-link highlighting, both updated on scroll.
pub fn wire_scroll_tracking(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let progress: Option<web::HtmlElement> = document
        .query_selector(".scroll-progress-bar")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into().ok());
    let sections = dom::query_all_in_document::<web::HtmlElement>(document, "section");
    let nav_links = dom::query_all_in_document::<web::Element>(document, ".nav-link");
    let doc = document.clone();
    let win = window.clone();

    dom::add_listener(&window, "scroll", move |_| {
        if let (Some(bar), Some(root)) = (&progress, doc.document_element()) {
            let body_top = doc.body().map(|b| b.scroll_top()).unwrap_or(0);
            let scroll_top = match root.scroll_top() {
                0 => body_top,
                top => top,
            };
            let pct = scroll_progress_percent(
                scroll_top as f64,
                root.scroll_height() as f64,
                root.client_height() as f64,
            );
            dom::set_style(bar, "width", &format!("{}%", pct));
        }

        let page_y = win.page_y_offset().unwrap_or(0.0);
        let ids: Vec<String> = sections.iter().map(|s| s.id()).collect();
        let tops: Vec<(f64, &str)> = sections
            .iter()
            .zip(ids.iter())
            .map(|(s, id)| (s.offset_top() as f64, id.as_str()))
            .collect();
        let current = current_section(&tops, page_y);
        for link in &nav_links {
            let href = link.get_attribute("href").unwrap_or_default();
            dom::set_class(link, "active", link_is_active(&href, current));
        }
    });
}
