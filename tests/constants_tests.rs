// Host-side tests for the web frontend's DOM contract and visual constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use calm_core::Ambience;
use constants::*;
use std::collections::HashSet;

#[test]
fn element_ids_are_unique_across_the_page() {
    let mut ids = vec![
        ID_MESSAGES,
        ID_INPUT,
        ID_SEND,
        ID_SOUND_LABEL,
        ID_OVERLAY,
        ID_COUNT,
        ID_METER,
        ID_SKIP,
        ID_DONE,
        ID_TAB_BREAK,
        ID_CHIME,
        ID_WAVES,
        ID_TIP,
        ID_BACKGROUND,
    ];
    ids.extend(Ambience::ALL.iter().map(|a| a.element_id()));
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate element id in {ids:?}");
}

#[test]
fn hsl_formats_css_colour() {
    assert_eq!(hsl(200.0, 70, 92), "hsl(200, 70%, 92%)");
    assert_eq!(hsl(12.5, 70, 96), "hsl(12.5, 70%, 96%)");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_constants_are_sane() {
    assert!(COUNTDOWN_INTERVAL_MS == 1_000);
    assert!(GRADIENT_LIGHTNESS_START <= 100 && GRADIENT_LIGHTNESS_END <= 100);
    assert!(GRADIENT_SATURATION <= 100);
    assert!(METER_PROPERTY.starts_with("--"));
    assert!(WAVE_FILL.starts_with('#') && WAVE_FILL.len() == 9);
}

#[test]
fn unmute_listens_to_every_kind_of_gesture() {
    for ev in ["keydown", "pointerdown", "touchstart", "mousemove"] {
        assert!(UNMUTE_EVENTS.contains(&ev));
    }
}
