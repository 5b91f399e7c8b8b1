use crate::audio::{play_chime, BreathTone};
use crate::constants::*;
use crate::dom;
use calm_core::{BreakSession, EndReason, TickOutcome, WidgetConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Countdown {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

/// Full-screen breathing break: countdown, progress meter, skip lock,
/// breathing tone and the closing chime.
pub struct BreakOverlay {
    document: web::Document,
    session: Option<BreakSession>,
    tone: BreathTone,
    // Kept after clearing so the closure is never dropped while it runs
    countdown: Option<Countdown>,
}

#[inline]
fn show(document: &web::Document) {
    if let Some(el) = dom::element::<web::HtmlElement>(document, ID_OVERLAY) {
        _ = el.style().set_property("display", "flex");
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
fn hide(document: &web::Document) {
    if let Some(el) = dom::element::<web::HtmlElement>(document, ID_OVERLAY) {
        _ = el.style().set_property("display", "none");
        _ = el.set_attribute("aria-hidden", "true");
    }
}

#[inline]
fn set_disabled(document: &web::Document, element_id: &str, disabled: bool) {
    if let Some(btn) = dom::element::<web::HtmlButtonElement>(document, element_id) {
        btn.set_disabled(disabled);
    }
}

impl BreakOverlay {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            session: None,
            tone: BreathTone::new(),
            countdown: None,
        }
    }

    fn render(&self, session: &BreakSession) {
        let doc = &self.document;
        dom::set_text(doc, ID_COUNT, &session.remaining().to_string());
        if let Some(meter) = dom::element::<web::HtmlElement>(doc, ID_METER) {
            _ = meter
                .style()
                .set_property(METER_PROPERTY, &session.progress_css());
        }
        dom::set_text(doc, ID_SKIP, &session.skip_label());
        set_disabled(doc, ID_SKIP, !session.can_skip());
        set_disabled(doc, ID_DONE, !session.can_finish());
    }

    fn clear_countdown(&self) {
        if let (Some(c), Some(w)) = (&self.countdown, web::window()) {
            w.clear_interval_with_handle(c.handle);
        }
    }

    fn tick(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        let outcome = session.tick();
        self.render(&session);
        self.session = Some(session);
        if outcome == TickOutcome::Finished {
            self.finish(EndReason::Completed);
        }
    }

    fn finish(&mut self, reason: EndReason) {
        self.clear_countdown();
        hide(&self.document);
        self.tone.stop();
        play_chime(&self.document);
        log::info!("[break] ended: {:?}", reason);
    }

    pub fn skip(&mut self) {
        let accepted = self.session.as_mut().is_some_and(|s| s.skip());
        if accepted {
            self.finish(EndReason::Skipped);
        }
    }

    pub fn done(&mut self) {
        let accepted = self.session.as_mut().is_some_and(|s| s.done());
        if accepted {
            self.finish(EndReason::Done);
        }
    }
}

/// Open the overlay and start a fresh countdown. A break that is already
/// running is replaced.
pub fn start_break(overlay: &Rc<RefCell<BreakOverlay>>, cfg: &WidgetConfig) {
    let mut ov = overlay.borrow_mut();
    ov.clear_countdown();

    let session = BreakSession::from_config(cfg);
    show(&ov.document);
    ov.render(&session);
    ov.session = Some(session);

    if let Err(e) = ov.tone.start() {
        log::warn!("[break] breath tone unavailable: {:?}", e);
    }

    let overlay_tick = overlay.clone();
    let closure = Closure::wrap(Box::new(move || {
        overlay_tick.borrow_mut().tick();
    }) as Box<dyn FnMut()>);
    let handle = web::window().and_then(|w| {
        w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            COUNTDOWN_INTERVAL_MS,
        )
        .ok()
    });
    match handle {
        Some(handle) => {
            ov.countdown = Some(Countdown {
                handle,
                _closure: closure,
            })
        }
        None => log::error!("[break] could not schedule countdown"),
    }
    log::info!("[break] started ({}s)", cfg.break_seconds);
}

pub fn wire_buttons(document: &web::Document, overlay: &Rc<RefCell<BreakOverlay>>) {
    let overlay_skip = overlay.clone();
    dom::add_click_listener(document, ID_SKIP, move || {
        overlay_skip.borrow_mut().skip();
    });
    let overlay_done = overlay.clone();
    dom::add_click_listener(document, ID_DONE, move || {
        overlay_done.borrow_mut().done();
    });
}
