// Catalog of mode families.
//
// Built once from the static table (catalog_data.rs) and never mutated
// afterwards. Families keep declaration order, which is what the matcher
// iterates and what "next/previous family" navigation walks.
//
// The table declares a few names twice. Those resolve like an
// insertion-ordered map: the family stays where it was first declared and
// takes the value of its last declaration. The overwritten rows are kept in
// `shadowed` so they remain inspectable.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::catalog_data::FAMILY_DEFS;
use crate::detect::{self, Detection};
use crate::pitch::PitchSet;
use crate::scale::{FamilyDef, ModeFamily, ModeRef};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| match Catalog::from_defs(FAMILY_DEFS) {
    Ok(catalog) => catalog,
    Err(e) => panic!("built-in mode catalog is malformed: {}", e),
});

/// Problems found while building a catalog from table rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    NoteCountOutOfRange { family: String, note_count: u8 },
    NoPatterns { family: String },
    NoModeNames { family: String },
    PatternLength { family: String, rotation: usize, expected: u8, found: usize },
    PatternNotRooted { family: String, rotation: usize },
    PatternNotIncreasing { family: String, rotation: usize },
    PitchOutOfRange { family: String, rotation: usize, value: u8 },
    DuplicateAddress { note_count: u8, family_index: u8, first: String, second: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoteCountOutOfRange { family, note_count } => {
                write!(f, "{}: note count {} exceeds 12", family, note_count)
            }
            Self::NoPatterns { family } => write!(f, "{}: no patterns", family),
            Self::NoModeNames { family } => write!(f, "{}: no mode names", family),
            Self::PatternLength { family, rotation, expected, found } => write!(
                f,
                "{} rotation {}: expected {} notes, found {}",
                family, rotation, expected, found
            ),
            Self::PatternNotRooted { family, rotation } => {
                write!(f, "{} rotation {}: pattern does not start at 0", family, rotation)
            }
            Self::PatternNotIncreasing { family, rotation } => {
                write!(f, "{} rotation {}: pattern is not strictly increasing", family, rotation)
            }
            Self::PitchOutOfRange { family, rotation, value } => {
                write!(f, "{} rotation {}: offset {} outside 0..=11", family, rotation, value)
            }
            Self::DuplicateAddress { note_count, family_index, first, second } => write!(
                f,
                "{} and {} share address {}.{}",
                first, second, note_count, family_index
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

pub struct Catalog {
    families: Vec<ModeFamily>,
    shadowed: Vec<ModeFamily>,
    by_name: HashMap<&'static str, usize>,
    note_counts: Vec<u8>,
}

impl Catalog {
    /// The compiled-in catalog, validated on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn from_defs(defs: &[FamilyDef]) -> Result<Self, CatalogError> {
        let mut families: Vec<ModeFamily> = Vec::with_capacity(defs.len());
        let mut shadowed = Vec::new();
        let mut by_name: HashMap<&'static str, usize> = HashMap::new();

        for def in defs {
            let family = ModeFamily::from_def(def)?;
            match by_name.get(def.name) {
                Some(&slot) => {
                    let old = std::mem::replace(&mut families[slot], family);
                    shadowed.push(old);
                }
                None => {
                    by_name.insert(def.name, families.len());
                    families.push(family);
                }
            }
        }

        let mut addresses: HashMap<(u8, u8), &'static str> = HashMap::new();
        for fam in &families {
            let key = (fam.note_count(), fam.family_index());
            if let Some(first) = addresses.insert(key, fam.name()) {
                return Err(CatalogError::DuplicateAddress {
                    note_count: key.0,
                    family_index: key.1,
                    first: first.to_string(),
                    second: fam.name().to_string(),
                });
            }
        }

        let mut note_counts: Vec<u8> = families.iter().map(ModeFamily::note_count).collect();
        note_counts.sort_unstable();
        note_counts.dedup();

        Ok(Self { families, shadowed, by_name, note_counts })
    }

    /// Every family, in declaration order.
    pub fn families(&self) -> &[ModeFamily] {
        &self.families
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Total number of (family, rotation) entries.
    pub fn pattern_count(&self) -> usize {
        self.families.iter().map(ModeFamily::rotation_count).sum()
    }

    pub fn family(&self, name: &str) -> Option<&ModeFamily> {
        self.by_name.get(name).map(|&i| &self.families[i])
    }

    pub fn families_with_note_count(&self, note_count: u8) -> impl Iterator<Item = &ModeFamily> {
        self.families.iter().filter(move |f| f.note_count() == note_count)
    }

    /// Family names with this note count, in declaration order.
    pub fn family_names_with_note_count(&self, note_count: u8) -> Vec<&'static str> {
        self.families_with_note_count(note_count).map(ModeFamily::name).collect()
    }

    /// Resolve a numeric `(noteCount, familyIndex)` pair.
    pub fn family_by_address(&self, note_count: u8, family_index: u8) -> Option<&ModeFamily> {
        self.families
            .iter()
            .find(|f| f.note_count() == note_count && f.family_index() == family_index)
    }

    /// Distinct note counts present, ascending.
    pub fn note_counts(&self) -> &[u8] {
        &self.note_counts
    }

    /// Rows overwritten by a later declaration of the same name.
    pub fn shadowed(&self) -> &[ModeFamily] {
        &self.shadowed
    }

    /// Name the selection, preferring `hint` on ties.
    pub fn detect(&self, selection: PitchSet, hint: Option<&ModeRef>) -> Detection {
        detect::detect(self, selection, hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 352);
        assert_eq!(catalog.note_counts(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(catalog.shadowed().len(), 3);
        assert_eq!(catalog.pattern_count(), 2075);
    }

    #[test]
    fn test_family_lookup() {
        let catalog = Catalog::builtin();
        let major = catalog.family("Major").unwrap();
        assert_eq!(major.note_count(), 7);
        assert_eq!(major.family_index(), 1);
        assert_eq!(major.mode_name(0), "Ionian");
        assert_eq!(major.mode_name(6), "Locrian");
        assert_eq!(catalog.family_by_address(7, 1).map(|f| f.name()), Some("Major"));
        assert!(catalog.family_by_address(7, 200).is_none());
        assert!(catalog.family("Nope").is_none());
    }

    #[test]
    fn test_declaration_order() {
        let catalog = Catalog::builtin();
        let twos = catalog.family_names_with_note_count(2);
        assert_eq!(twos, vec!["Tritone", "P5 & P4", "M3 & m6", "M6 & m3", "M2 & m7", "M7 & m2"]);
        // Declared out of index order in the table; order follows declaration.
        let threes = catalog.family_names_with_note_count(3);
        assert_eq!(&threes[..5], &[
            "Augmented Triad", "Major Triad", "Minor Triad", "Diminished Triad", "Suspended Triad",
        ]);
    }

    #[test]
    fn test_last_declaration_wins_first_position_kept() {
        let catalog = Catalog::builtin();
        let octatonic = catalog.family("Octatonic").unwrap();
        assert_eq!(octatonic.rotation_count(), 2);
        assert_eq!(octatonic.pattern(0).unwrap().to_vec(), vec![0, 1, 3, 4, 6, 7, 9, 10]);
        assert_eq!(catalog.family_names_with_note_count(8)[0], "Octatonic");

        let no_tritone = catalog.family("No Tritone").unwrap();
        assert_eq!(no_tritone.rotation_count(), 5);
        assert_eq!(catalog.family_names_with_note_count(10)[0], "No Tritone");

        let mut shadowed: Vec<&str> = catalog.shadowed().iter().map(|f| f.name()).collect();
        shadowed.sort_unstable();
        assert_eq!(shadowed, vec!["No Tritone", "Nonatonic", "Octatonic"]);
        assert!(catalog.shadowed().iter().all(|f| f.rotation_count() == f.note_count() as usize));
    }

    #[test]
    fn test_duplicate_address_rejected() {
        let defs = [
            FamilyDef::new("A", 2, 1, &["a"], &[&[0, 6]]),
            FamilyDef::new("B", 2, 1, &["b"], &[&[0, 7]]),
        ];
        assert!(matches!(
            Catalog::from_defs(&defs),
            Err(CatalogError::DuplicateAddress { note_count: 2, family_index: 1, .. })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::PatternLength {
            family: "X".into(), rotation: 2, expected: 3, found: 4,
        };
        assert_eq!(err.to_string(), "X rotation 2: expected 3 notes, found 4");
    }
}
