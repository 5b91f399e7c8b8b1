//! Runtime configuration for the widget.
//!
//! Everything here has a sensible default so the widget works with bare
//! markup. The web frontend may override individual fields from `data-*`
//! attributes; [`WidgetConfig::sanitized`] keeps overrides within bounds.

/// Endpoint the chat relay posts to.
pub const DEFAULT_CHAT_ENDPOINT: &str = "/chat";
pub const DEFAULT_BREAK_SECONDS: u32 = 60;
pub const DEFAULT_SKIP_LOCK_TICKS: u32 = 10;
pub const DEFAULT_AMBIENCE_VOLUME: f64 = 0.45;
pub const DEFAULT_TIP_INTERVAL_MS: i32 = 20_000;
pub const DEFAULT_BUBBLE_COUNT: usize = 20;

// Lower bound for the tip interval; anything faster is just flicker
pub const MIN_TIP_INTERVAL_MS: i32 = 1_000;
// Upper bound on background particles
pub const MAX_BUBBLE_COUNT: usize = 500;

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub chat_endpoint: String,
    pub break_seconds: u32,
    pub skip_lock_ticks: u32,
    pub ambience_volume: f64,
    pub tip_interval_ms: i32,
    pub bubble_count: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            break_seconds: DEFAULT_BREAK_SECONDS,
            skip_lock_ticks: DEFAULT_SKIP_LOCK_TICKS,
            ambience_volume: DEFAULT_AMBIENCE_VOLUME,
            tip_interval_ms: DEFAULT_TIP_INTERVAL_MS,
            bubble_count: DEFAULT_BUBBLE_COUNT,
        }
    }
}

/// Named override keys, matching the `data-*` attribute suffixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigKey {
    ChatEndpoint,
    BreakSeconds,
    SkipLock,
    AmbienceVolume,
    TipIntervalMs,
    BubbleCount,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 6] = [
        ConfigKey::ChatEndpoint,
        ConfigKey::BreakSeconds,
        ConfigKey::SkipLock,
        ConfigKey::AmbienceVolume,
        ConfigKey::TipIntervalMs,
        ConfigKey::BubbleCount,
    ];

    pub fn attribute(self) -> &'static str {
        match self {
            ConfigKey::ChatEndpoint => "data-chat-endpoint",
            ConfigKey::BreakSeconds => "data-break-seconds",
            ConfigKey::SkipLock => "data-skip-lock",
            ConfigKey::AmbienceVolume => "data-ambience-volume",
            ConfigKey::TipIntervalMs => "data-tip-interval-ms",
            ConfigKey::BubbleCount => "data-bubble-count",
        }
    }
}

impl WidgetConfig {
    /// Apply a single textual override. Returns `false` when the value does
    /// not parse; the previous value is kept in that case.
    pub fn apply_override(&mut self, key: ConfigKey, raw: &str) -> bool {
        let raw = raw.trim();
        match key {
            ConfigKey::ChatEndpoint => {
                if raw.is_empty() {
                    return false;
                }
                self.chat_endpoint = raw.to_string();
                true
            }
            ConfigKey::BreakSeconds => parse_into(raw, &mut self.break_seconds),
            ConfigKey::SkipLock => parse_into(raw, &mut self.skip_lock_ticks),
            ConfigKey::AmbienceVolume => parse_into(raw, &mut self.ambience_volume),
            ConfigKey::TipIntervalMs => parse_into(raw, &mut self.tip_interval_ms),
            ConfigKey::BubbleCount => parse_into(raw, &mut self.bubble_count),
        }
    }

    /// Clamp every field into its usable range.
    pub fn sanitized(mut self) -> Self {
        self.break_seconds = self.break_seconds.max(1);
        self.skip_lock_ticks = self.skip_lock_ticks.min(self.break_seconds);
        self.ambience_volume = if self.ambience_volume.is_finite() {
            self.ambience_volume.clamp(0.0, 1.0)
        } else {
            DEFAULT_AMBIENCE_VOLUME
        };
        self.tip_interval_ms = self.tip_interval_ms.max(MIN_TIP_INTERVAL_MS);
        self.bubble_count = self.bubble_count.min(MAX_BUBBLE_COUNT);
        self
    }
}

fn parse_into<T: std::str::FromStr>(raw: &str, slot: &mut T) -> bool {
    match raw.parse::<T>() {
        Ok(v) => {
            *slot = v;
            true
        }
        Err(_) => false,
    }
}
