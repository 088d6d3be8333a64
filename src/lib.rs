#![cfg(target_arch = "wasm32")]
use crate::animator::DotFieldAnimator;
use crate::constants::{CANVAS_CONTAINER_ID, CANVAS_ID};
use crate::field::FieldConfig;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animator;
mod canvas;
mod carousel;
mod constants;
mod dom;
mod events;
mod field;
mod nav;
mod page;
mod roster;
mod theme;
mod timeline;

thread_local! {
    // The page's background animator; kept here so the host can stop it.
    static BACKGROUND: RefCell<Option<DotFieldAnimator>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Resume the background animation after [`stop_background`].
#[wasm_bindgen]
pub fn start_background() {
    BACKGROUND.with(|bg| {
        if let Some(animator) = bg.borrow().as_ref() {
            animator.start();
        }
    });
}

/// Cancel the background animation loop and detach its listeners.
#[wasm_bindgen]
pub fn stop_background() {
    BACKGROUND.with(|bg| {
        if let Some(animator) = bg.borrow().as_ref() {
            animator.stop();
        }
    });
}

/// Stop the background and remove its canvas from the page.
#[wasm_bindgen]
pub fn dispose_background() {
    if let Some(animator) = BACKGROUND.with(|bg| bg.borrow_mut().take()) {
        animator.dispose();
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Some(animator) = DotFieldAnimator::mount(
        &document,
        CANVAS_CONTAINER_ID,
        CANVAS_ID,
        FieldConfig::default(),
    )? {
        animator.start();
        BACKGROUND.with(|bg| *bg.borrow_mut() = Some(animator));
    }

    wire_page(&document);
    Ok(())
}

fn wire_page(document: &web::Document) {
    page::wire_theme_toggle(document);
    page::wire_mobile_menu(document);
    page::wire_scroll_tracking(document);
    if let Err(e) = page::wire_reveal_on_scroll(document) {
        log::error!("reveal setup: {:?}", e);
    }
    page::apply_timeline_status(document);
    if let Some(form) = page::RegistrationForm::wire(document) {
        events::wire_fill_shortcut(document, form);
    }
    // Timers and listeners keep the carousel alive for the page's lifetime.
    _ = page::SponsorCarousel::wire(document);
}
