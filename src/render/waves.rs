use crate::constants::WAVE_FILL;
use calm_core::WaveField;
use wasm_bindgen::JsValue;
use web_sys as web;

pub struct WavesLayer {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: WaveField,
}

impl WavesLayer {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            canvas,
            ctx,
            field: WaveField::new(),
        }
    }

    #[allow(deprecated)]
    pub fn draw(&mut self) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
        ctx.set_fill_style(&JsValue::from_str(WAVE_FILL));
        ctx.begin_path();
        for (x, y) in self.field.surface(w, h) {
            if x == 0.0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.line_to(w as f64, h as f64);
        ctx.line_to(0.0, h as f64);
        ctx.close_path();
        ctx.fill();
        self.field.step();
    }
}
