use crate::constants::ID_CHIME;
use crate::dom;
use crate::frame::AnimationLoop;
use calm_core::{breath_sample, Ambience, AmbienceState, INITIAL_GAIN};
use instant::Instant;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start playback and ignore a rejected play() promise (autoplay policy,
/// missing asset and so on).
fn play_quietly(media: &web::HtmlMediaElement, what: &'static str) {
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[audio] {} play rejected: {:?}", what, e);
            }
        }),
        Err(e) => log::debug!("[audio] {} play failed: {:?}", what, e),
    }
}

fn media(document: &web::Document, which: Ambience) -> Option<web::HtmlMediaElement> {
    dom::element::<web::HtmlMediaElement>(document, which.element_id())
}

/// Drives the three looping `<audio>` ambience tracks.
pub struct AmbiencePlayer {
    document: web::Document,
    label_id: &'static str,
    volume: f64,
    state: AmbienceState,
}

impl AmbiencePlayer {
    pub fn new(document: web::Document, label_id: &'static str, volume: f64) -> Self {
        for which in Ambience::ALL {
            if let Some(a) = media(&document, which) {
                a.set_muted(true);
            }
        }
        Self {
            document,
            label_id,
            volume,
            state: AmbienceState::new(),
        }
    }

    fn stop_all(&self) {
        for which in Ambience::ALL {
            if let Some(a) = media(&self.document, which) {
                _ = a.pause();
                a.set_current_time(0.0);
            }
        }
    }

    pub fn select(&mut self, which: Ambience) {
        self.stop_all();
        self.state.select(which);
        let Some(a) = media(&self.document, which) else {
            log::warn!("[ambience] missing #{}", which.element_id());
            return;
        };
        a.set_volume(self.volume);
        play_quietly(&a, which.name());
        dom::set_text(&self.document, self.label_id, which.label());
        log::info!("[ambience] {}", which.name());
    }

    /// First user gesture: let the tracks be heard. Later calls do nothing.
    pub fn unmute(&mut self) {
        if !self.state.unmute() {
            return;
        }
        for which in Ambience::ALL {
            if let Some(a) = media(&self.document, which) {
                a.set_muted(false);
                a.set_volume(self.volume);
            }
        }
        log::info!("[ambience] unmuted");
    }
}

pub fn play_chime(document: &web::Document) {
    if let Some(chime) = dom::element::<web::HtmlMediaElement>(document, ID_CHIME) {
        play_quietly(&chime, "chime");
    }
}

struct ToneVoice {
    osc: web::OscillatorNode,
    frames: AnimationLoop,
}

/// Sine tone whose pitch and level follow the breathing envelope.
///
/// The `AudioContext` is created on the first start and reused afterwards;
/// each start builds a fresh oscillator since they cannot be restarted.
#[derive(Default)]
pub struct BreathTone {
    ctx: Option<web::AudioContext>,
    voice: Option<ToneVoice>,
}

impl BreathTone {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> anyhow::Result<web::AudioContext> {
        if let Some(ctx) = &self.ctx {
            return Ok(ctx.clone());
        }
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        self.ctx = Some(ctx.clone());
        Ok(ctx)
    }

    pub fn start(&mut self) -> anyhow::Result<()> {
        self.stop();
        let ctx = self.context()?;
        _ = ctx.resume();

        let osc = web::OscillatorNode::new(&ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let gain = web::GainNode::new(&ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        osc.set_type(web::OscillatorType::Sine);
        _ = osc.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&ctx.destination());
        gain.gain().set_value(INITIAL_GAIN);
        osc.start().map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let started = Instant::now();
        let osc_frame = osc.clone();
        let frames = AnimationLoop::start(move |_ts| {
            let s = breath_sample(started.elapsed().as_secs_f64() * 1000.0);
            let now = ctx.current_time();
            _ = osc_frame.frequency().set_value_at_time(s.frequency_hz, now);
            _ = gain.gain().set_value_at_time(s.gain, now);
        });
        self.voice = Some(ToneVoice { osc, frames });
        log::info!("[break] breath tone started");
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(voice) = self.voice.take() {
            _ = voice.osc.stop();
            voice.frames.stop();
        }
    }
}
