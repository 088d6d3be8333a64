use crate::dom;
use crate::page::registration::RegistrationForm;
use crate::roster::is_fill_shortcut;
use wasm_bindgen::JsCast;
use web_sys as web;

// Shift+Alt+D fills the registration form with sample data
pub fn wire_fill_shortcut(document: &web::Document, form: RegistrationForm) {
    if !form.has_form() {
        return;
    }
    dom::add_listener(document, "keydown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if is_fill_shortcut(ev.shift_key(), ev.alt_key(), &ev.key()) {
            ev.prevent_default();
            form.fill_sample();
        }
    });
}
