use crate::canvas::{self, CanvasSurface};
use crate::dom::EventListener;
use crate::events;
use crate::field::{DotField, FieldConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Magnetic dot grid attached to a container element.
///
/// The animation loop is an explicit task: [`start`](Self::start) schedules
/// it, [`stop`](Self::stop) cancels the pending frame and detaches the
/// listeners. Dropping the animator also ends the loop.
pub struct DotFieldAnimator {
    inner: Rc<Inner>,
}

struct Inner {
    field: Rc<RefCell<DotField>>,
    surface: RefCell<CanvasSurface>,
    canvas: web::HtmlCanvasElement,
    container: web::Element,
    running: Cell<bool>,
    raf_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl DotFieldAnimator {
    /// Insert the canvas into `#container_id`. A missing container is not an
    /// error: the background is simply disabled.
    pub fn mount(
        document: &web::Document,
        container_id: &str,
        canvas_id: &str,
        config: FieldConfig,
    ) -> anyhow::Result<Option<Self>> {
        let Some(container) = document.get_element_by_id(container_id) else {
            log::debug!("[field] no #{}; background disabled", container_id);
            return Ok(None);
        };
        let config = config.validated()?;
        let (canvas, ctx) = canvas::create_in(document, &container, canvas_id)?;

        let inner = Rc::new(Inner {
            field: Rc::new(RefCell::new(DotField::new(config))),
            surface: RefCell::new(CanvasSurface::new(ctx)),
            canvas,
            container,
            running: Cell::new(false),
            raf_id: Cell::new(None),
            tick: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });

        let weak = Rc::downgrade(&inner);
        let tick = Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.raf_id.set(None);
            if !inner.running.get() {
                return;
            }
            inner.frame();
            inner.schedule();
        }) as Box<dyn FnMut()>);
        *inner.tick.borrow_mut() = Some(tick);

        Ok(Some(Self { inner }))
    }

    pub fn start(&self) {
        let inner = &self.inner;
        if inner.running.replace(true) {
            return;
        }
        resize_field(&inner.canvas, &inner.container, &inner.field);
        *inner.listeners.borrow_mut() = events::wire_field_input(events::FieldWiring {
            field: inner.field.clone(),
            canvas: inner.canvas.clone(),
            container: inner.container.clone(),
        });
        inner.schedule();
        log::info!(
            "[field] started with {} dots",
            inner.field.borrow().dots().len()
        );
    }

    pub fn stop(&self) {
        let inner = &self.inner;
        if !inner.running.replace(false) {
            return;
        }
        inner.cancel_pending();
        inner.listeners.borrow_mut().clear();
        log::info!("[field] stopped");
    }

    /// Stop and remove the canvas from the page.
    pub fn dispose(self) {
        self.stop();
        self.inner.canvas.remove();
    }
}

impl Inner {
    fn frame(&self) {
        let mut field = self.field.borrow_mut();
        field.step();
        field.draw(&mut *self.surface.borrow_mut());
    }

    fn schedule(&self) {
        let tick = self.tick.borrow();
        let (Some(cb), Some(w)) = (tick.as_ref(), web::window()) else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(e) => {
                log::error!("[field] requestAnimationFrame failed: {:?}", e);
                self.running.set(false);
            }
        }
    }

    fn cancel_pending(&self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Resize the canvas to its container and rebuild the grid.
pub fn resize_field(
    canvas: &web::HtmlCanvasElement,
    container: &web::Element,
    field: &RefCell<DotField>,
) {
    let (w, h) = canvas::sync_to_container(canvas, container);
    field.borrow_mut().resize(w as f32, h as f32);
}
