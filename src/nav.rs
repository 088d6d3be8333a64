use crate::constants::SECTION_ACTIVATION_OFFSET;

/// Percentage of the page scrolled, in [0, 100]. A page that cannot scroll
/// reports 0.
#[inline]
pub fn scroll_progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Id of the last section whose top (minus the activation offset) has been
/// scrolled past. Sections are `(offset_top, id)` in document order.
pub fn current_section<'a>(sections: &[(f64, &'a str)], page_y: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(top, _)| page_y >= top - SECTION_ACTIVATION_OFFSET)
        .last()
        .map(|(_, id)| *id)
        .filter(|id| !id.is_empty())
}

#[inline]
pub fn link_is_active(href: &str, current: Option<&str>) -> bool {
    match current {
        Some(id) => href.contains(id),
        None => false,
    }
}
