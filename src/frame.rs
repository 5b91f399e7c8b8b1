use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop that can be stopped.
///
/// The callback receives the frame timestamp in milliseconds. Page-lifetime
/// loops simply never call [`AnimationLoop::stop`].
pub struct AnimationLoop {
    tick: FrameCallback,
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let tick: FrameCallback = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(true));
        let handle = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let running_tick = running.clone();
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            if !running_tick.get() {
                return;
            }
            on_frame(ts);
            handle_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut(f64)>));

        handle.set(request_frame(&tick));
        Self {
            tick,
            running,
            handle,
        }
    }

    /// Must not be called from inside the frame callback itself.
    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Break the closure's self-reference so it can be dropped
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &FrameCallback) -> Option<i32> {
    let w = web::window()?;
    let guard = tick.borrow();
    let cb = guard.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
