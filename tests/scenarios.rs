// End-to-end walks through a session.

use modewheel::{Catalog, PitchClass, PitchSet, Provenance, Session};
use modewheel::scale::ModeRef;

fn pc(v: u8) -> PitchClass {
    PitchClass::new(v).unwrap()
}

fn set(offsets: &[u8]) -> PitchSet {
    PitchSet::from_offsets(offsets).unwrap()
}

#[test]
fn major_ionian() {
    let mut session = Session::new(Catalog::builtin()).unwrap();
    session.load_family("Major", 0).unwrap();
    assert_eq!(session.selection(), set(&[0, 2, 4, 5, 7, 9, 11]));
    let d = session.sync();
    assert_eq!((d.family_name(), d.rotation_index()), ("Major", 0));
    assert_eq!(session.rotation_name(), Some("Ionian"));
}

#[test]
fn major_dorian() {
    let mut session = Session::new(Catalog::builtin()).unwrap();
    session.load_family("Major", 1).unwrap();
    assert_eq!(session.selection(), set(&[0, 2, 3, 5, 7, 9, 10]));
    let d = session.sync();
    assert_eq!((d.family_name(), d.rotation_index()), ("Major", 1));
    assert_eq!(session.rotation_name(), Some("Dorian"));
}

#[test]
fn tritone_tie_break_follows_hint() {
    let catalog = Catalog::builtin();
    let tritone = set(&[0, 6]);
    let hint = ModeRef { family: "Tritone", note_count: 2, rotation: 1 };
    let hinted = catalog.detect(tritone, Some(&hint));
    assert_eq!((hinted.family_name(), hinted.rotation_index()), ("Tritone", 1));
    let plain = catalog.detect(tritone, None);
    assert_eq!((plain.family_name(), plain.rotation_index()), ("Tritone", 0));
}

#[test]
fn tritone_stays_sticky_through_a_session() {
    let mut session = Session::new(Catalog::builtin()).unwrap();
    session.load_family("Tritone", 1).unwrap();
    // Re-rooting {0,6} on 6 gives {0,6} again; the hint keeps rotation 1.
    assert!(session.rotate_mode(1));
    assert_eq!(session.selection(), set(&[0, 6]));
    assert_eq!(session.active().rotation, 1);
    assert_eq!(session.address(), "2.1.2");
    assert_eq!(session.color_step(), 6);
}

#[test]
fn toggling_moves_between_custom_and_matched() {
    let mut session = Session::new(Catalog::builtin()).unwrap();
    // Clear Major down to nothing, then build {1,5,6}.
    for v in [0, 2, 4, 7, 9, 11] {
        session.toggle(pc(v));
    }
    session.toggle(pc(1));
    session.toggle(pc(6));
    assert_eq!(session.selection(), set(&[1, 5, 6]));
    assert!(session.sync().is_unknown());
    assert_eq!(session.provenance(), Provenance::Custom);
    assert_eq!(session.family_label(), "Custom");
    assert_eq!(session.address(), "3.0.1");

    session.toggle(pc(0));
    let d = session.sync();
    assert_eq!((d.family_name(), d.rotation_index()), ("Tetratonic 26", 3));
    assert_eq!(session.provenance(), Provenance::Matched);

    session.toggle(pc(5));
    let d = session.sync();
    assert_eq!((d.family_name(), d.rotation_index()), ("Tritonic 8", 2));

    session.toggle(pc(0));
    assert!(session.sync().is_unknown());
    assert_eq!(session.address(), "2.0.1");
    // The last confirmed mode is still remembered.
    assert_eq!(session.active().family, "Tritonic 8");
}

#[test]
fn mode_names_cycle_modulo() {
    let catalog = Catalog::builtin();
    let major = catalog.family("Major").unwrap();
    assert_eq!(major.mode_name(7), major.mode_name(0));
    assert_eq!(major.mode_name(8), "Dorian");

    let mut session = Session::new(catalog).unwrap();
    session.load_family("Major", 5).unwrap();
    let tiles = session.degree_tiles();
    let names: Vec<&str> = tiles.iter().map(|t| t.mode_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Aeolian", "Locrian", "Ionian", "Dorian", "Phrygian", "Lydian", "Mixolydian"]
    );
}

#[test]
fn rotating_ionian_walks_the_modes() {
    let mut session = Session::new(Catalog::builtin()).unwrap();
    let expected = ["Dorian", "Phrygian", "Lydian", "Mixolydian", "Aeolian", "Locrian", "Ionian"];
    for name in expected {
        assert!(session.rotate_mode(1));
        assert_eq!(session.rotation_name(), Some(name));
    }
    assert_eq!(session.color_step(), 0);
}
