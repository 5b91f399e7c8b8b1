use calm_core::*;

#[test]
fn element_ids_and_labels() {
    assert_eq!(Ambience::Ocean.element_id(), "amb-ocean");
    assert_eq!(Ambience::Rain.element_id(), "amb-rain");
    assert_eq!(Ambience::Bowls.element_id(), "amb-bowls");
    assert_eq!(Ambience::Ocean.label(), "🌊 Ocean ambience");
    assert_eq!(Ambience::Rain.label(), "🌧️ Rain ambience");
    assert_eq!(Ambience::Bowls.label(), "🔔 Bowls ambience");
    assert_eq!(Ambience::default(), Ambience::Ocean);
}

#[test]
fn nothing_audible_until_unmuted() {
    let mut s = AmbienceState::new();
    s.select(Ambience::Ocean);
    assert_eq!(s.current(), Some(Ambience::Ocean));
    assert_eq!(s.audible(), None);
    assert!(s.unmute());
    assert_eq!(s.audible(), Some(Ambience::Ocean));
}

#[test]
fn unmute_happens_once() {
    let mut s = AmbienceState::new();
    assert!(s.unmute());
    assert!(!s.unmute());
    assert!(s.is_unmuted());
}

#[test]
fn at_most_one_track_audible() {
    let mut s = AmbienceState::new();
    s.unmute();
    for which in [Ambience::Rain, Ambience::Bowls, Ambience::Ocean, Ambience::Rain] {
        s.select(which);
        let audible = Ambience::ALL.iter().filter(|a| s.is_audible(**a)).count();
        assert_eq!(audible, 1);
        assert!(s.is_audible(which));
    }
}

#[test]
fn select_reports_replaced_track() {
    let mut s = AmbienceState::new();
    assert_eq!(s.select(Ambience::Ocean), None);
    assert_eq!(s.select(Ambience::Rain), Some(Ambience::Ocean));
    assert_eq!(s.select(Ambience::Rain), None);
}
