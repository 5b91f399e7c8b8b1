use calm_core::*;

#[test]
fn defaults_match_widget_behaviour() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.chat_endpoint, "/chat");
    assert_eq!(cfg.break_seconds, 60);
    assert_eq!(cfg.skip_lock_ticks, 10);
    assert!((cfg.ambience_volume - 0.45).abs() < 1e-12);
    assert_eq!(cfg.tip_interval_ms, 20_000);
    assert_eq!(cfg.bubble_count, 20);
    assert_eq!(cfg.clone().sanitized(), cfg);
}

#[test]
fn overrides_parse_per_key() {
    let mut cfg = WidgetConfig::default();
    assert!(cfg.apply_override(ConfigKey::ChatEndpoint, " /api/chat "));
    assert!(cfg.apply_override(ConfigKey::BreakSeconds, "90"));
    assert!(cfg.apply_override(ConfigKey::SkipLock, "5"));
    assert!(cfg.apply_override(ConfigKey::AmbienceVolume, "0.8"));
    assert!(cfg.apply_override(ConfigKey::TipIntervalMs, "30000"));
    assert!(cfg.apply_override(ConfigKey::BubbleCount, "40"));
    assert_eq!(cfg.chat_endpoint, "/api/chat");
    assert_eq!(cfg.break_seconds, 90);
    assert_eq!(cfg.skip_lock_ticks, 5);
    assert_eq!(cfg.tip_interval_ms, 30_000);
    assert_eq!(cfg.bubble_count, 40);
}

#[test]
fn bad_overrides_keep_previous_value() {
    let mut cfg = WidgetConfig::default();
    assert!(!cfg.apply_override(ConfigKey::BreakSeconds, "a minute"));
    assert!(!cfg.apply_override(ConfigKey::BreakSeconds, "-5"));
    assert!(!cfg.apply_override(ConfigKey::ChatEndpoint, "   "));
    assert_eq!(cfg, WidgetConfig::default());
}

#[test]
fn sanitize_clamps_ranges() {
    let cfg = WidgetConfig {
        break_seconds: 0,
        skip_lock_ticks: 30,
        ambience_volume: 3.0,
        tip_interval_ms: 10,
        ..WidgetConfig::default()
    }
    .sanitized();
    assert_eq!(cfg.break_seconds, 1);
    assert_eq!(cfg.skip_lock_ticks, 1);
    assert_eq!(cfg.ambience_volume, 1.0);
    assert_eq!(cfg.tip_interval_ms, MIN_TIP_INTERVAL_MS);

    let mut huge = WidgetConfig::default();
    assert!(huge.apply_override(ConfigKey::BubbleCount, "4000000000000000000"));
    let huge = huge.sanitized();
    assert_eq!(huge.bubble_count, MAX_BUBBLE_COUNT);
    let field = BubbleField::new(800.0, 600.0, huge.bubble_count, Some(1));
    assert_eq!(field.bubbles.len(), MAX_BUBBLE_COUNT);

    let nan = WidgetConfig {
        ambience_volume: f64::NAN,
        ..WidgetConfig::default()
    }
    .sanitized();
    assert_eq!(nan.ambience_volume, DEFAULT_AMBIENCE_VOLUME);
}

#[test]
fn attribute_names_are_data_attributes() {
    for key in ConfigKey::ALL {
        assert!(key.attribute().starts_with("data-"));
    }
}
