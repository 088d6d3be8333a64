use crate::field::Surface;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, glow: f32, glow_color: &str) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(color);
        if glow > 0.0 {
            ctx.set_shadow_blur(glow as f64);
            ctx.set_shadow_color(glow_color);
        } else {
            ctx.set_shadow_blur(0.0);
        }
        ctx.fill();
        ctx.set_shadow_blur(0.0);
    }
}

/// Create `<canvas id=..>` inside `container` and grab its 2D context.
pub fn create_in(
    document: &web::Document,
    container: &web::Element,
    canvas_id: &str,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(canvas_id);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok((canvas, ctx))
}

/// Match the canvas backing store to the container's client size. Returns
/// the new size in pixels.
pub fn sync_to_container(canvas: &web::HtmlCanvasElement, container: &web::Element) -> (u32, u32) {
    let w = container.client_width().max(0) as u32;
    let h = container.client_height().max(0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

/// Client coordinates of a mouse/pointer event relative to the canvas.
#[inline]
pub fn event_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
