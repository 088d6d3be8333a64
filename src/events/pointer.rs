use crate::animator::resize_field;
use crate::canvas;
use crate::dom::EventListener;
use crate::field::DotField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct FieldWiring {
    pub field: Rc<RefCell<DotField>>,
    pub canvas: web::HtmlCanvasElement,
    pub container: web::Element,
}

/// Resize, pointer-move and pointer-leave handlers for the dot field. The
/// returned listeners detach when dropped.
pub fn wire_field_input(w: FieldWiring) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    let Some(window) = web::window() else {
        return listeners;
    };

    listeners.push(wire_resize(&window, &w));
    listeners.push(wire_pointermove(&window, &w));
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        listeners.push(wire_pointerleave(&root, &w));
    }
    listeners
}

fn wire_resize(window: &web::Window, w: &FieldWiring) -> EventListener {
    let w = w.clone();
    EventListener::new(window, "resize", move |_| {
        resize_field(&w.canvas, &w.container, &w.field);
    })
}

fn wire_pointermove(window: &web::Window, w: &FieldWiring) -> EventListener {
    let w = w.clone();
    EventListener::new(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let pos = canvas::event_canvas_px(ev, &w.canvas);
        w.field.borrow_mut().set_pointer(pos.x, pos.y);
    })
}

fn wire_pointerleave(root: &web::Element, w: &FieldWiring) -> EventListener {
    let w = w.clone();
    EventListener::new(root, "pointerleave", move |_| {
        w.field.borrow_mut().clear_pointer();
    })
}
