// Matcher: names a pitch-class selection against the catalog.
//
// Matching is literal. The selection's sorted values must equal a cataloged
// pattern value for value, so {0,4,7} is a Major Triad but {2,6,9} (the same
// chord on D) matches nothing. Transposition is the session's root offset,
// never the matcher's business.
//
// Several (family, rotation) entries can carry the identical pattern. The
// tie-break only exists to keep the answer stable while the user edits:
//   1. the hint itself, if it is one of the matches;
//   2. the first match in the hint's family;
//   3. the first match in catalog order.

use crate::catalog::Catalog;
use crate::pitch::PitchSet;
use crate::scale::ModeRef;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Detection {
    Matched(ModeRef),
    Unknown,
}

impl Detection {
    pub const UNKNOWN_FAMILY: &'static str = "Unknown";

    /// Family name, or `"Unknown"`.
    pub fn family_name(&self) -> &'static str {
        match self {
            Detection::Matched(m) => m.family,
            Detection::Unknown => Self::UNKNOWN_FAMILY,
        }
    }

    /// Rotation index, or -1 for no match.
    pub fn rotation_index(&self) -> i64 {
        match self {
            Detection::Matched(m) => m.rotation as i64,
            Detection::Unknown => -1,
        }
    }

    pub fn mode_ref(&self) -> Option<&ModeRef> {
        match self {
            Detection::Matched(m) => Some(m),
            Detection::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Detection::Unknown)
    }
}

/// Every (family, rotation) whose pattern equals `selection`, catalog order.
pub fn matches(catalog: &Catalog, selection: PitchSet) -> Vec<ModeRef> {
    let size = selection.len();
    catalog
        .families()
        .iter()
        .filter(|fam| fam.note_count() as usize == size)
        .flat_map(|fam| {
            fam.patterns()
                .iter()
                .enumerate()
                .filter(move |(_, pattern)| **pattern == selection)
                .map(move |(rotation, _)| fam.mode_ref(rotation))
        })
        .collect()
}

pub fn detect(catalog: &Catalog, selection: PitchSet, hint: Option<&ModeRef>) -> Detection {
    let mut found = matches(catalog, selection);
    if found.len() > 1 {
        if let Some(hint) = hint {
            if let Some(pos) = found.iter().position(|m| m == hint) {
                return Detection::Matched(found.swap_remove(pos));
            }
            if let Some(pos) = found.iter().position(|m| m.same_family(hint)) {
                return Detection::Matched(found.swap_remove(pos));
            }
        }
    }
    if found.is_empty() {
        Detection::Unknown
    } else {
        Detection::Matched(found.swap_remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::FamilyDef;

    fn set(offsets: &[u8]) -> PitchSet {
        PitchSet::from_offsets(offsets).unwrap()
    }

    fn hint(family: &'static str, note_count: u8, rotation: usize) -> ModeRef {
        ModeRef { family, note_count, rotation }
    }

    // Two families sharing the literal pattern [0,4,7] at different rotations.
    fn collision_catalog() -> Catalog {
        Catalog::from_defs(&[
            FamilyDef::new("First", 3, 1, &["f0", "f1"], &[&[0, 3, 8], &[0, 4, 7]]),
            FamilyDef::new(
                "Second",
                3,
                2,
                &["s0", "s1", "s2"],
                &[&[0, 4, 7], &[0, 5, 9], &[0, 4, 7]],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_major_scale() {
        let catalog = Catalog::builtin();
        let d = detect(catalog, set(&[0, 2, 4, 5, 7, 9, 11]), None);
        assert_eq!(d.family_name(), "Major");
        assert_eq!(d.rotation_index(), 0);
    }

    #[test]
    fn test_root_position_sensitive() {
        // The same major triad on D is not cataloged literally.
        let catalog = Catalog::builtin();
        assert!(detect(catalog, set(&[2, 6, 9]), None).is_unknown());
        assert_eq!(detect(catalog, set(&[0, 4, 7]), None).family_name(), "Major Triad");
    }

    #[test]
    fn test_unknown_sentinel() {
        let d = Detection::Unknown;
        assert_eq!(d.family_name(), "Unknown");
        assert_eq!(d.rotation_index(), -1);
        assert!(d.mode_ref().is_none());
    }

    #[test]
    fn test_matches_lists_catalog_order() {
        let catalog = collision_catalog();
        let found = matches(&catalog, set(&[0, 4, 7]));
        assert_eq!(found, vec![hint("First", 3, 1), hint("Second", 3, 0), hint("Second", 3, 2)]);
    }

    #[test]
    fn test_exact_hint_wins() {
        let catalog = collision_catalog();
        let d = detect(&catalog, set(&[0, 4, 7]), Some(&hint("Second", 3, 2)));
        assert_eq!(d, Detection::Matched(hint("Second", 3, 2)));
    }

    #[test]
    fn test_hint_family_wins_over_catalog_order() {
        let catalog = collision_catalog();
        // Rotation 1 of Second is [0,5,9], so only the family part of the hint applies.
        let d = detect(&catalog, set(&[0, 4, 7]), Some(&hint("Second", 3, 1)));
        assert_eq!(d, Detection::Matched(hint("Second", 3, 0)));
    }

    #[test]
    fn test_unrelated_hint_falls_back_to_first() {
        let catalog = collision_catalog();
        let d = detect(&catalog, set(&[0, 4, 7]), Some(&hint("Elsewhere", 7, 0)));
        assert_eq!(d, Detection::Matched(hint("First", 3, 1)));
        assert_eq!(detect(&catalog, set(&[0, 4, 7]), None), d);
    }

    #[test]
    fn test_single_match_ignores_hint() {
        let catalog = collision_catalog();
        let d = detect(&catalog, set(&[0, 3, 8]), Some(&hint("Second", 3, 0)));
        assert_eq!(d, Detection::Matched(hint("First", 3, 0)));
    }

    #[test]
    fn test_empty_selection_is_void() {
        let d = detect(Catalog::builtin(), PitchSet::EMPTY, None);
        assert_eq!(d.family_name(), "Void");
        assert_eq!(d.rotation_index(), 0);
    }
}
