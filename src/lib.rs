#![cfg(target_arch = "wasm32")]
use calm_core::{
    prepare_message, reply_or_fallback, Ambience, Author, ChatLog, ConfigKey, Intent,
    IntentMatcher, TipRotator, WidgetConfig,
};
use constants::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod chat;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

/// Page-session state shared by every listener.
pub(crate) struct App {
    document: web::Document,
    config: WidgetConfig,
    intents: IntentMatcher,
    chat_log: RefCell<ChatLog>,
    ambience: RefCell<audio::AmbiencePlayer>,
    breaks: Rc<RefCell<overlay::BreakOverlay>>,
    tips: RefCell<TipRotator>,
    frames: RefCell<Vec<frame::AnimationLoop>>,
}

impl App {
    fn post(&self, author: Author, text: impl Into<String>) {
        let mut chat_log = self.chat_log.borrow_mut();
        let msg = chat_log.push(author, text);
        chat::append_message(&self.document, msg);
    }

    fn rotate_tip(&self) {
        let tip = self.tips.borrow_mut().next_tip();
        dom::set_text(&self.document, ID_TIP, tip);
    }

    fn trigger_break(&self) {
        self.ambience.borrow_mut().select(Ambience::Ocean);
        overlay::start_break(&self.breaks, &self.config);
    }

    fn apply_intent(&self, intent: Intent) {
        if intent.take_break {
            self.trigger_break();
        }
        if let Some(which) = intent.ambience {
            self.ambience.borrow_mut().select(which);
        }
    }
}

fn load_config(document: &web::Document) -> WidgetConfig {
    let mut cfg = WidgetConfig::default();
    if let Some(body) = document.body() {
        for key in ConfigKey::ALL {
            if let Some(raw) = body.get_attribute(key.attribute()) {
                if !cfg.apply_override(key, &raw) {
                    log::warn!("[config] ignoring {}={:?}", key.attribute(), raw);
                }
            }
        }
    }
    cfg.sanitized()
}

fn on_send(app: &Rc<App>) {
    let Some(input) = dom::element::<web::HtmlInputElement>(&app.document, ID_INPUT) else {
        return;
    };
    let Some(text) = prepare_message(&input.value()) else {
        return;
    };
    app.post(Author::Me, text.clone());
    input.set_value("");

    let app = app.clone();
    spawn_local(async move {
        let reply = reply_or_fallback(chat::ask_backend(&app.config.chat_endpoint, &text).await);
        app.post(Author::Ai, reply);
        app.apply_intent(app.intents.analyze(&text));
        app.rotate_tip();
    });
}

fn wire_chat(app: &Rc<App>) {
    let app_click = app.clone();
    dom::add_click_listener(&app.document, ID_SEND, move || on_send(&app_click));
    let app_key = app.clone();
    dom::add_keydown_listener(&app.document, ID_INPUT, move |ev| {
        if events::is_submit_key(&ev.key()) {
            on_send(&app_key);
        }
    });
}

fn start_waves(app: &App) {
    let Some(canvas) = dom::element::<web::HtmlCanvasElement>(&app.document, ID_WAVES) else {
        return;
    };
    let Some(ctx) = dom::context_2d(&canvas) else {
        log::warn!("[render] #{} has no 2d context", ID_WAVES);
        return;
    };
    dom::sync_canvas_to_client(&canvas);
    let canvas_resize = canvas.clone();
    dom::on_window_resize(move || dom::sync_canvas_to_client(&canvas_resize));

    let mut layer = render::waves::WavesLayer::new(canvas, ctx);
    app.frames
        .borrow_mut()
        .push(frame::AnimationLoop::start(move |_| layer.draw()));
}

fn start_bubbles(app: &App) {
    let Some(canvas) = dom::element::<web::HtmlCanvasElement>(&app.document, ID_BACKGROUND)
    else {
        log::warn!("[render] missing #{}", ID_BACKGROUND);
        return;
    };
    let Some(ctx) = dom::context_2d(&canvas) else {
        log::warn!("[render] #{} has no 2d context", ID_BACKGROUND);
        return;
    };
    dom::sync_canvas_to_window(&canvas);
    let layer = Rc::new(RefCell::new(render::bubbles::BubblesLayer::new(
        canvas.clone(),
        ctx,
        app.config.bubble_count,
    )));

    let layer_resize = layer.clone();
    dom::on_window_resize(move || {
        dom::sync_canvas_to_window(&canvas);
        layer_resize.borrow_mut().resized();
    });
    app.frames
        .borrow_mut()
        .push(frame::AnimationLoop::start(move |_| layer.borrow_mut().draw()));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("calm-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window document"))?;

    let config = load_config(&document);
    log::info!("[config] {:?}", config);

    let app = Rc::new(App {
        intents: IntentMatcher::new()?,
        chat_log: RefCell::new(ChatLog::new()),
        ambience: RefCell::new(audio::AmbiencePlayer::new(
            document.clone(),
            ID_SOUND_LABEL,
            config.ambience_volume,
        )),
        breaks: Rc::new(RefCell::new(overlay::BreakOverlay::new(document.clone()))),
        tips: RefCell::new(TipRotator::new(None)),
        frames: RefCell::new(Vec::new()),
        document,
        config,
    });

    // Queued muted until the first gesture
    app.ambience.borrow_mut().select(Ambience::Ocean);
    events::wire_unmute_on_first_gesture(&app);

    wire_chat(&app);
    overlay::wire_buttons(&app.document, &app.breaks);
    let app_tab = app.clone();
    dom::add_click_listener(&app.document, ID_TAB_BREAK, move || app_tab.trigger_break());

    let app_tips = app.clone();
    dom::set_interval(app.config.tip_interval_ms, move || app_tips.rotate_tip());

    start_waves(&app);
    start_bubbles(&app);
    Ok(())
}
