// Renderer for the 2D canvas. The particle field draws through the `Surface`
// trait so a frame can be produced without a browser, the canvas-backed
// implementation grabs the 2d context from the canvas element on the DOM.

use crate::color::Color;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub alpha: f64,
    pub width: f64,
}

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color);
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, stroke: Stroke);
}

pub struct CanvasRenderer {
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // None when the canvas has no 2d context, the frame is skipped then
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasRenderer { context })
    }
}

impl Surface for CanvasRenderer {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        self.context.begin_path();
        if self
            .context
            .arc(center[0], center[1], radius, 0.0, PI * 2.0)
            .is_err()
        {
            return;
        }
        #[allow(deprecated)]
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.fill();
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, stroke: Stroke) {
        self.context.begin_path();
        #[allow(deprecated)]
        self.context
            .set_stroke_style(&JsValue::from_str(&stroke.color.to_css_with_alpha(stroke.alpha)));
        self.context.set_line_width(stroke.width);
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}
