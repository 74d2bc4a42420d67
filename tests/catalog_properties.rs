// Whole-catalog properties of the built-in table.

use modewheel::{Catalog, PitchClass, PitchSet, Session};

#[test]
fn every_pattern_is_rooted_sorted_and_sized() {
    let catalog = Catalog::builtin();
    for fam in catalog.families().iter().chain(catalog.shadowed()) {
        assert!(fam.rotation_count() > 0, "{}", fam.name());
        assert!(!fam.mode_names().is_empty(), "{}", fam.name());
        for (rotation, pattern) in fam.patterns().iter().enumerate() {
            let values = pattern.to_vec();
            assert_eq!(values.len(), fam.note_count() as usize, "{} #{}", fam.name(), rotation);
            if let Some(&first) = values.first() {
                assert_eq!(first, 0, "{} #{}", fam.name(), rotation);
            }
            assert!(values.windows(2).all(|w| w[0] < w[1]));
            assert!(values.iter().all(|&v| v < 12));
        }
    }
}

#[test]
fn family_addresses_are_unique_per_note_count() {
    let catalog = Catalog::builtin();
    let mut seen = std::collections::HashSet::new();
    for fam in catalog.families() {
        assert!(seen.insert((fam.note_count(), fam.family_index())), "{}", fam.name());
        let found = catalog.family_by_address(fam.note_count(), fam.family_index()).unwrap();
        assert_eq!(found.name(), fam.name());
    }
}

#[test]
fn load_then_detect_round_trips() {
    let catalog = Catalog::builtin();
    for fam in catalog.families() {
        for rotation in 0..fam.rotation_count() {
            let mut session = Session::new(catalog).unwrap();
            session.load_family(fam.name(), rotation as i64).unwrap();
            let hint = fam.mode_ref(rotation);
            let detection = catalog.detect(session.selection(), Some(&hint));
            assert_eq!(detection.mode_ref(), Some(&hint), "{} #{}", fam.name(), rotation);
            assert_eq!(session.sync().mode_ref(), Some(&hint));
        }
    }
}

#[test]
fn sets_without_the_root_are_unknown() {
    let catalog = Catalog::builtin();
    let mut sizes_seen = [false; 12];
    for bits in 1u16..0x1000 {
        let set = PitchSet::from_bits(bits);
        if set.contains(PitchClass::C) {
            continue;
        }
        let detection = catalog.detect(set, None);
        assert!(detection.is_unknown(), "{}", set);
        assert_eq!(detection.family_name(), "Unknown");
        assert_eq!(detection.rotation_index(), -1);
        sizes_seen[set.len()] = true;
    }
    assert!(sizes_seen[1..=11].iter().all(|&s| s));
}

#[test]
fn every_rooted_set_is_named() {
    let catalog = Catalog::builtin();
    for bits in 0u16..0x1000 {
        let set = PitchSet::from_bits(bits | 1);
        assert!(!catalog.detect(set, None).is_unknown(), "{}", set);
    }
}

#[test]
fn note_count_stepping_wraps_both_ways() {
    let catalog = Catalog::builtin();
    let counts = catalog.note_counts().to_vec();
    let mut session = Session::new(catalog).unwrap();
    session.load_family("Void", 0).unwrap();
    for &expected in counts.iter().skip(1).chain(counts.first()) {
        session.step_note_count(1).unwrap();
        assert_eq!(session.active().note_count, expected);
    }
    session.step_note_count(-1).unwrap();
    assert_eq!(session.active().note_count, 12);
}

#[test]
fn family_stepping_visits_every_family_and_wraps() {
    let catalog = Catalog::builtin();
    let mut session = Session::new(catalog).unwrap();
    for &n in catalog.note_counts() {
        let names = catalog.family_names_with_note_count(n);
        session.load_family(names[0], 0).unwrap();
        for name in names.iter().skip(1).chain(names.first()) {
            session.step_family(1).unwrap();
            assert_eq!(session.active().family, *name);
            assert_eq!(session.active().rotation, 0);
        }
        session.step_family(-1).unwrap();
        assert_eq!(session.active().family, *names.last().unwrap());
    }
}

#[test]
fn addresses_are_idempotent() {
    let catalog = Catalog::builtin();
    let mut session = Session::new(catalog).unwrap();
    for fam in catalog.families() {
        for rotation in 1..=fam.rotation_count() as i64 {
            session.set_by_address(fam.note_count(), fam.family_index(), rotation).unwrap();
            let expected = format!("{}.{}.{}", fam.note_count(), fam.family_index(), rotation);
            assert_eq!(session.address(), expected);
            session.apply_address(&expected).unwrap();
            assert_eq!(session.address(), expected);
        }
    }
}
