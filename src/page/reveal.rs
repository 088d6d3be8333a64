use crate::constants::REVEAL_THRESHOLD;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Toggle `visible` on `.scroll-animate` elements as they enter and leave
/// the viewport. Leaving removes the class so the animation replays.
pub fn wire_reveal_on_scroll(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all_in_document::<web::Element>(document, ".scroll-animate");
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                dom::set_class(&entry.target(), "visible", entry.is_intersecting());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    log::debug!("[reveal] observing {} elements", targets.len());
    Ok(())
}
