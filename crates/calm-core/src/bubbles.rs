//! Background bubbles rising over a slowly drifting pastel gradient.

use glam::Vec2;
use rand::prelude::*;

pub const BUBBLE_RADIUS_MIN: f32 = 8.0;
pub const BUBBLE_RADIUS_SPAN: f32 = 14.0;
pub const BUBBLE_SPEED_MIN: f32 = 0.3;
pub const BUBBLE_SPEED_SPAN: f32 = 0.5;

pub const HUE_START: f64 = 200.0;
pub const HUE_STEP_PER_FRAME: f64 = 0.05;
// Hue distance between the two gradient stops
pub const HUE_STOP_OFFSET: f64 = 60.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}

pub struct BubbleField {
    pub bubbles: Vec<Bubble>,
    pub width: f32,
    pub height: f32,
    // f64 so the drift survives long-lived pages
    pub hue: f64,
    count: usize,
    rng: StdRng,
}

impl BubbleField {
    /// `None` seeds from OS/browser entropy; tests pass a fixed seed.
    pub fn new(width: f32, height: f32, count: usize, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        let mut field = Self {
            bubbles: Vec::with_capacity(count),
            width,
            height,
            hue: HUE_START,
            count,
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    /// Adopt a new canvas size and scatter a fresh set of bubbles below it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    fn populate(&mut self) {
        let (w, h) = (self.width, self.height);
        self.bubbles.clear();
        for _ in 0..self.count {
            let pos = Vec2::new(self.rng.gen::<f32>() * w, h + self.rng.gen::<f32>() * h);
            let radius = BUBBLE_RADIUS_MIN + self.rng.gen::<f32>() * BUBBLE_RADIUS_SPAN;
            let speed = BUBBLE_SPEED_MIN + self.rng.gen::<f32>() * BUBBLE_SPEED_SPAN;
            self.bubbles.push(Bubble { pos, radius, speed });
        }
    }

    /// Advance one animation frame.
    pub fn step(&mut self) {
        self.hue += HUE_STEP_PER_FRAME;
        let (w, h) = (self.width, self.height);
        for b in &mut self.bubbles {
            b.pos.y -= b.speed;
            if b.pos.y < -b.radius {
                b.pos.y = h + b.radius;
                b.pos.x = self.rng.gen::<f32>() * w;
            }
        }
    }

    /// Hues of the two gradient stops, each in `[0, 360)`.
    pub fn gradient_hues(&self) -> (f64, f64) {
        (
            self.hue.rem_euclid(360.0),
            (self.hue + HUE_STOP_OFFSET).rem_euclid(360.0),
        )
    }
}
