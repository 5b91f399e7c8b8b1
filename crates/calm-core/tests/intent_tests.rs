use calm_core::*;

fn matcher() -> IntentMatcher {
    IntentMatcher::new().expect("patterns compile")
}

#[test]
fn break_keywords_trigger_break_case_insensitively() {
    let m = matcher();
    for text in [
        "I keep doomscrolling",
        "so TIRED today",
        "up too late again",
        "feeling Stressed",
        "endless scroll",
    ] {
        assert!(m.analyze(text).take_break, "expected break for {text:?}");
    }
    assert!(!m.analyze("hello friend").take_break);
}

#[test]
fn ambience_keywords_select_expected_track() {
    let m = matcher();
    assert_eq!(m.analyze("play some rain").ambience, Some(Ambience::Rain));
    assert_eq!(m.analyze("I need to FOCUS").ambience, Some(Ambience::Rain));
    assert_eq!(m.analyze("singing bowls please").ambience, Some(Ambience::Bowls));
    assert_eq!(m.analyze("help me meditate").ambience, Some(Ambience::Bowls));
    assert_eq!(m.analyze("ocean sounds").ambience, Some(Ambience::Ocean));
    assert_eq!(m.analyze("I want to be calm").ambience, Some(Ambience::Ocean));
    assert_eq!(m.analyze("Relax").ambience, Some(Ambience::Ocean));
    assert_eq!(m.analyze("what's up").ambience, None);
}

#[test]
fn first_matching_ambience_wins() {
    let m = matcher();
    // rain beats bowls beats ocean regardless of word order
    assert_eq!(m.analyze("ocean or rain?").ambience, Some(Ambience::Rain));
    assert_eq!(m.analyze("calm bowl").ambience, Some(Ambience::Bowls));
    assert_eq!(m.analyze("relax, meditate, focus").ambience, Some(Ambience::Rain));
}

#[test]
fn break_and_ambience_combine() {
    let m = matcher();
    let intent = m.analyze("stressed, play rain");
    assert!(intent.take_break);
    assert_eq!(intent.ambience, Some(Ambience::Rain));
    assert!(!intent.is_empty());
    assert!(m.analyze("good morning").is_empty());
}

#[test]
fn substrings_match_like_the_keyword_list() {
    let m = matcher();
    // "chocolate" contains "late"; "brainstorm" contains "rain"
    assert!(m.analyze("chocolate").take_break);
    assert_eq!(m.analyze("brainstorm").ambience, Some(Ambience::Rain));
}
