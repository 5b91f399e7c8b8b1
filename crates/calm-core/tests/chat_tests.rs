use calm_core::*;

#[test]
fn blank_input_produces_no_message() {
    assert_eq!(prepare_message(""), None);
    assert_eq!(prepare_message("   "), None);
    assert_eq!(prepare_message("\t\n  \r\n"), None);
}

#[test]
fn input_is_trimmed() {
    assert_eq!(prepare_message("  hello there \n"), Some("hello there".to_string()));
}

#[test]
fn reply_field_is_used_when_present() {
    let reply = parse_reply(r#"{"reply": "Breathe in slowly."}"#).unwrap();
    assert_eq!(reply, "Breathe in slowly.");
}

#[test]
fn missing_or_empty_reply_uses_gentle_fallback() {
    assert_eq!(parse_reply("{}").unwrap(), EMPTY_REPLY_FALLBACK);
    assert_eq!(parse_reply(r#"{"reply": null}"#).unwrap(), EMPTY_REPLY_FALLBACK);
    assert_eq!(parse_reply(r#"{"reply": ""}"#).unwrap(), EMPTY_REPLY_FALLBACK);
    // FastAPI validation errors carry `detail` instead of `reply`
    assert_eq!(
        parse_reply(r#"{"detail": [{"msg": "field required"}]}"#).unwrap(),
        EMPTY_REPLY_FALLBACK
    );
}

#[test]
fn undecodable_body_is_a_decode_error() {
    let err = parse_reply("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, ChatError::Decode(_)));
}

#[test]
fn failed_fetch_yields_network_fallback() {
    let text = reply_or_fallback(Err(ChatError::Network("TypeError: Failed to fetch".into())));
    assert_eq!(text, NETWORK_FALLBACK);
}

#[test]
fn bad_json_yields_network_fallback() {
    assert_eq!(reply_or_fallback(parse_reply("not json")), NETWORK_FALLBACK);
}

#[test]
fn successful_reply_passes_through() {
    let text = reply_or_fallback(parse_reply(r#"{"reply":"You've got this."}"#));
    assert_eq!(text, "You've got this.");
}

#[test]
fn chat_log_records_authors_in_order() {
    let mut log = ChatLog::new();
    assert!(log.is_empty());
    log.push(Author::Me, "I'm tired");
    let ai = log.push(Author::Ai, EMPTY_REPLY_FALLBACK).clone();
    assert_eq!(ai.author, Author::Ai);
    assert_eq!(log.len(), 2);
    assert_eq!(log.messages()[0].author, Author::Me);
    assert_eq!(log.messages()[0].author.css_class(), "me");
    assert_eq!(log.messages()[1].author.css_class(), "ai");
}

#[test]
fn truthy_replies_are_shown_as_text() {
    assert_eq!(parse_reply(r#"{"reply": "  "}"#).unwrap(), "  ");
    assert_eq!(parse_reply(r#"{"reply": 42}"#).unwrap(), "42");
    assert_eq!(parse_reply(r#"{"reply": 1.5}"#).unwrap(), "1.5");
    assert_eq!(parse_reply(r#"{"reply": true}"#).unwrap(), "true");
}

#[test]
fn falsy_or_structured_replies_use_gentle_fallback() {
    for body in [
        r#"{"reply": 0}"#,
        r#"{"reply": false}"#,
        r#"{"reply": ["a"]}"#,
        r#"{"reply": {"text": "hi"}}"#,
    ] {
        assert_eq!(parse_reply(body).unwrap(), EMPTY_REPLY_FALLBACK, "body {body}");
    }
}
