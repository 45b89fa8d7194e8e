use greeting_common::{Color, Point, Surface};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

/// Full-viewport 2D canvas overlaid on the page.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    /// Create the canvas and append it to the element with id `container_id`.
    pub fn create(document: &Document, container_id: &str) -> Result<Self, JsValue> {
        let container = document
            .get_element_by_id(container_id)
            .ok_or(format!("container element '{}' not found", container_id))?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;

        let style = canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("z-index", "1")?;
        container.append_child(&canvas)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("2D canvas not supported")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut surface = Self {
            canvas,
            ctx,
            width: 0.0,
            height: 0.0,
        };
        surface.fit_window()?;
        Ok(surface)
    }

    /// Match the canvas to the window size. Existing particles keep their coordinates.
    pub fn fit_window(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no global `window` exists")?;
        let (width, height) = viewport_size(&window)?;
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.width = width;
        self.height = height;
        log::debug!("canvas resized to {}x{}", width, height);
        Ok(())
    }
}

pub fn viewport_size(window: &Window) -> Result<(f32, f32), JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("innerHeight is not a number")?;
    Ok((width as f32, height as f32))
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color, alpha: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
        self.ctx.restore();
    }
}
