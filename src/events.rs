use crate::constants::UNMUTE_EVENTS;
use crate::App;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Unmute ambience on the first interaction of any kind.
pub fn wire_unmute_on_first_gesture(app: &Rc<App>) {
    let Some(window) = web::window() else {
        return;
    };
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    for ev in UNMUTE_EVENTS {
        let app_ev = app.clone();
        let closure = Closure::wrap(Box::new(move || {
            app_ev.ambience.borrow_mut().unmute();
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            ev,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }
}

#[inline]
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}
