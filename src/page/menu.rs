use crate::dom;
use web_sys as web;

pub fn wire_mobile_menu(document: &web::Document) {
    let Some(toggle) = document.get_element_by_id("menu-toggle") else {
        return;
    };
    let Some(links) = document.query_selector(".nav-links").ok().flatten() else {
        return;
    };

    {
        let (toggle_el, links) = (toggle.clone(), links.clone());
        dom::add_listener(&toggle, "click", move |_| {
            _ = toggle_el.class_list().toggle("active");
            _ = links.class_list().toggle("active");
        });
    }

    for link in dom::query_all_in_document::<web::Element>(document, ".nav-link") {
        let (toggle, links) = (toggle.clone(), links.clone());
        dom::add_listener(&link, "click", move |_| {
            dom::set_class(&toggle, "active", false);
            dom::set_class(&links, "active", false);
        });
    }
}
