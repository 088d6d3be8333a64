use crate::carousel::Carousel;
use crate::constants::AUTO_PLAY_DELAY_MS;
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Sponsor slides with auto-advance, hover pause and manual navigation.
#[derive(Clone)]
pub struct SponsorCarousel {
    inner: Rc<CarouselInner>,
}

struct CarouselInner {
    slides: Vec<web::Element>,
    dots: Vec<web::Element>,
    state: RefCell<Carousel>,
    interval_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl SponsorCarousel {
    pub fn wire(document: &web::Document) -> Option<Self> {
        let root = document.query_selector(".sponsors-carousel").ok().flatten()?;
        let slides = dom::query_all::<web::Element>(&root, ".sponsor-slide");
        let dots = dom::query_all::<web::Element>(&root, ".carousel-dot");

        let this = Self {
            inner: Rc::new(CarouselInner {
                state: RefCell::new(Carousel::new(slides.len())),
                slides,
                dots,
                interval_id: Cell::new(None),
                tick: RefCell::new(None),
            }),
        };

        let weak = Rc::downgrade(&this.inner);
        *this.inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                let next = inner.state.borrow_mut().next();
                inner.render(next);
            }
        }) as Box<dyn FnMut()>));

        for (index, dot) in this.inner.dots.iter().enumerate() {
            let carousel = this.clone();
            dom::add_listener(dot, "click", move |_| {
                let Some(shown) = carousel.inner.state.borrow_mut().select(index) else {
                    return;
                };
                carousel.inner.render(shown);
                carousel.start();
            });
        }
        if let Some(prev) = root.query_selector(".carousel-control.prev").ok().flatten() {
            let carousel = this.clone();
            dom::add_listener(&prev, "click", move |_| {
                let shown = carousel.inner.state.borrow_mut().prev();
                carousel.inner.render(shown);
                carousel.start();
            });
        }
        if let Some(next) = root.query_selector(".carousel-control.next").ok().flatten() {
            let carousel = this.clone();
            dom::add_listener(&next, "click", move |_| {
                let shown = carousel.inner.state.borrow_mut().next();
                carousel.inner.render(shown);
                carousel.start();
            });
        }
        {
            let carousel = this.clone();
            dom::add_listener(&root, "mouseenter", move |_| carousel.stop());
        }
        {
            let carousel = this.clone();
            dom::add_listener(&root, "mouseleave", move |_| carousel.start());
        }

        let first = this.inner.state.borrow_mut().show(0);
        this.inner.render(first);
        log::info!(
            "sponsors carousel initialized with {} slides",
            this.inner.slides.len()
        );
        this.start();
        Some(this)
    }

    /// Begin auto-advancing. Any running timer is replaced.
    pub fn start(&self) {
        self.stop();
        if self.inner.state.borrow().is_empty() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.inner.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match w.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            AUTO_PLAY_DELAY_MS,
        ) {
            Ok(id) => self.inner.interval_id.set(Some(id)),
            Err(e) => log::error!("[carousel] setInterval failed: {:?}", e),
        }
    }

    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.inner.interval_id.take(), web::window()) {
            w.clear_interval_with_handle(id);
        }
    }
}

impl CarouselInner {
    fn render(&self, index: usize) {
        for (i, slide) in self.slides.iter().enumerate() {
            dom::set_class(slide, "active", i == index);
        }
        for (i, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, "active", i == index);
        }
    }
}
