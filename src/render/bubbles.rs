use crate::constants::*;
use calm_core::BubbleField;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

pub struct BubblesLayer {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: BubbleField,
}

impl BubblesLayer {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        count: usize,
    ) -> Self {
        let field = BubbleField::new(
            canvas.width() as f32,
            canvas.height() as f32,
            count,
            None,
        );
        Self { canvas, ctx, field }
    }

    /// Pick up the canvas' current size; the bubble set is regenerated.
    pub fn resized(&mut self) {
        self.field
            .resize(self.canvas.width() as f32, self.canvas.height() as f32);
    }

    #[allow(deprecated)]
    pub fn draw(&mut self) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        let ctx = &self.ctx;

        let (hue_a, hue_b) = self.field.gradient_hues();
        let grad = ctx.create_linear_gradient(0.0, 0.0, w, h);
        _ = grad.add_color_stop(
            0.0,
            &hsl(hue_a, GRADIENT_SATURATION, GRADIENT_LIGHTNESS_START),
        );
        _ = grad.add_color_stop(1.0, &hsl(hue_b, GRADIENT_SATURATION, GRADIENT_LIGHTNESS_END));
        ctx.set_fill_style(&grad);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_fill_style(&JsValue::from_str(BUBBLE_FILL));
        for b in &self.field.bubbles {
            ctx.begin_path();
            _ = ctx.arc(b.pos.x as f64, b.pos.y as f64, b.radius as f64, 0.0, TAU);
            ctx.fill();
        }
        self.field.step();
    }
}
