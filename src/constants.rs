// DOM contract and visual tuning for the web frontend.

// Element ids the markup must provide
pub const ID_MESSAGES: &str = "msgs";
pub const ID_INPUT: &str = "inp";
pub const ID_SEND: &str = "send";
pub const ID_SOUND_LABEL: &str = "soundLabel";
pub const ID_OVERLAY: &str = "overlay";
pub const ID_COUNT: &str = "count";
pub const ID_METER: &str = "meter";
pub const ID_SKIP: &str = "skip";
pub const ID_DONE: &str = "done";
pub const ID_TAB_BREAK: &str = "tab-break";
pub const ID_CHIME: &str = "chime";
pub const ID_WAVES: &str = "waves";
pub const ID_TIP: &str = "tip";
pub const ID_BACKGROUND: &str = "bg";

// Break overlay
pub const COUNTDOWN_INTERVAL_MS: i32 = 1_000;
pub const METER_PROPERTY: &str = "--p";

// Any of these unlocks audio for the rest of the page session
pub const UNMUTE_EVENTS: [&str; 4] = ["keydown", "pointerdown", "touchstart", "mousemove"];

// Waves canvas
pub const WAVE_FILL: &str = "#60a5fa44";

// Background canvas
pub const GRADIENT_SATURATION: u32 = 70;
pub const GRADIENT_LIGHTNESS_START: u32 = 92;
pub const GRADIENT_LIGHTNESS_END: u32 = 96;
pub const BUBBLE_FILL: &str = "rgba(255,255,255,0.35)";

#[inline]
pub fn hsl(hue: f64, saturation: u32, lightness: u32) -> String {
    format!("hsl({}, {}%, {}%)", hue, saturation, lightness)
}
