// ── Mode families ─────────────────────────────────────────────────────────────
//
// `FamilyDef` is one row of the static table in catalog_data.rs. Rows are
// checked and turned into `ModeFamily` values when the catalog is built, so
// everything downstream can rely on the pattern invariants.

use crate::catalog::CatalogError;
use crate::pitch::PitchSet;

/// A family exactly as declared in the table: raw offsets, not yet checked.
#[derive(Clone, Copy, Debug)]
pub struct FamilyDef {
    pub name: &'static str,
    pub note_count: u8,
    pub family_index: u8,
    pub mode_names: &'static [&'static str],
    pub patterns: &'static [&'static [u8]],
}

impl FamilyDef {
    pub const fn new(
        name: &'static str,
        note_count: u8,
        family_index: u8,
        mode_names: &'static [&'static str],
        patterns: &'static [&'static [u8]],
    ) -> Self {
        Self { name, note_count, family_index, mode_names, patterns }
    }
}

/// A validated family of rotations ("modes") sharing one note count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeFamily {
    name: &'static str,
    note_count: u8,
    family_index: u8,
    mode_names: &'static [&'static str],
    patterns: Vec<PitchSet>,
}

impl ModeFamily {
    /// Check a table row: every pattern has `note_count` strictly increasing
    /// offsets in 0..12 starting at 0, and both lists are non-empty.
    pub fn from_def(def: &FamilyDef) -> Result<Self, CatalogError> {
        if def.note_count > 12 {
            return Err(CatalogError::NoteCountOutOfRange {
                family: def.name.to_string(),
                note_count: def.note_count,
            });
        }
        if def.patterns.is_empty() {
            return Err(CatalogError::NoPatterns { family: def.name.to_string() });
        }
        if def.mode_names.is_empty() {
            return Err(CatalogError::NoModeNames { family: def.name.to_string() });
        }

        let mut patterns = Vec::with_capacity(def.patterns.len());
        for (rotation, raw) in def.patterns.iter().enumerate() {
            patterns.push(check_pattern(def, rotation, raw)?);
        }

        Ok(Self {
            name: def.name,
            note_count: def.note_count,
            family_index: def.family_index,
            mode_names: def.mode_names,
            patterns,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn note_count(&self) -> u8 {
        self.note_count
    }

    pub fn family_index(&self) -> u8 {
        self.family_index
    }

    pub fn mode_names(&self) -> &'static [&'static str] {
        self.mode_names
    }

    pub fn patterns(&self) -> &[PitchSet] {
        &self.patterns
    }

    pub fn rotation_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn pattern(&self, rotation: usize) -> Option<PitchSet> {
        self.patterns.get(rotation).copied()
    }

    /// Clamp any rotation request into `0..rotation_count()`.
    pub fn clamp_rotation(&self, rotation: i64) -> usize {
        rotation.clamp(0, self.patterns.len() as i64 - 1) as usize
    }

    /// Name of one rotation. Names cycle when a family declares fewer names
    /// than patterns.
    pub fn mode_name(&self, rotation: usize) -> &'static str {
        self.mode_names[rotation % self.mode_names.len()]
    }

    pub fn mode_ref(&self, rotation: usize) -> ModeRef {
        ModeRef { family: self.name, note_count: self.note_count, rotation }
    }
}

fn check_pattern(def: &FamilyDef, rotation: usize, raw: &[u8]) -> Result<PitchSet, CatalogError> {
    let family = || def.name.to_string();
    if raw.len() != def.note_count as usize {
        return Err(CatalogError::PatternLength {
            family: family(),
            rotation,
            expected: def.note_count,
            found: raw.len(),
        });
    }
    if let Some(&first) = raw.first() {
        if first != 0 {
            return Err(CatalogError::PatternNotRooted { family: family(), rotation });
        }
    }
    if let Some(&value) = raw.iter().find(|&&v| v > 11) {
        return Err(CatalogError::PitchOutOfRange { family: family(), rotation, value });
    }
    if raw.windows(2).any(|w| w[0] >= w[1]) {
        return Err(CatalogError::PatternNotIncreasing { family: family(), rotation });
    }
    // Strictly increasing and in range, so the set has exactly `raw.len()` members.
    PitchSet::from_offsets(raw)
        .ok_or(CatalogError::PitchOutOfRange { family: family(), rotation, value: 12 })
}

/// A (family, rotation) pair: the "active mode" the session remembers and
/// the hint handed to the matcher.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModeRef {
    pub family: &'static str,
    pub note_count: u8,
    pub rotation: usize,
}

impl ModeRef {
    pub fn same_family(&self, other: &ModeRef) -> bool {
        self.family == other.family
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LYDIAN_ONLY: FamilyDef =
        FamilyDef::new("Lydian Only", 7, 1, &["Lydian"], &[&[0, 2, 4, 6, 7, 9, 11]]);

    #[test]
    fn test_valid_def() {
        let fam = ModeFamily::from_def(&LYDIAN_ONLY).unwrap();
        assert_eq!(fam.rotation_count(), 1);
        assert_eq!(fam.pattern(0).unwrap().to_vec(), vec![0, 2, 4, 6, 7, 9, 11]);
        assert_eq!(fam.pattern(1), None);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let def = FamilyDef::new("Short", 3, 1, &["A"], &[&[0, 4]]);
        assert!(matches!(
            ModeFamily::from_def(&def),
            Err(CatalogError::PatternLength { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_unrooted_and_unsorted() {
        let unrooted = FamilyDef::new("Unrooted", 2, 1, &["A"], &[&[1, 4]]);
        assert!(matches!(
            ModeFamily::from_def(&unrooted),
            Err(CatalogError::PatternNotRooted { .. })
        ));
        let unsorted = FamilyDef::new("Unsorted", 3, 1, &["A"], &[&[0, 7, 4]]);
        assert!(matches!(
            ModeFamily::from_def(&unsorted),
            Err(CatalogError::PatternNotIncreasing { .. })
        ));
        let repeated = FamilyDef::new("Repeated", 3, 1, &["A"], &[&[0, 4, 4]]);
        assert!(matches!(
            ModeFamily::from_def(&repeated),
            Err(CatalogError::PatternNotIncreasing { .. })
        ));
        let high = FamilyDef::new("High", 2, 1, &["A"], &[&[0, 12]]);
        assert!(matches!(
            ModeFamily::from_def(&high),
            Err(CatalogError::PitchOutOfRange { value: 12, .. })
        ));
    }

    #[test]
    fn test_empty_pattern_is_valid_for_zero_notes() {
        let void = FamilyDef::new("Void", 0, 1, &["Silence"], &[&[]]);
        let fam = ModeFamily::from_def(&void).unwrap();
        assert_eq!(fam.pattern(0), Some(PitchSet::EMPTY));
    }

    #[test]
    fn test_mode_names_cycle() {
        let def =
            FamilyDef::new("Two Names", 2, 1, &["First", "Second"], &[&[0, 3], &[0, 9], &[0, 4]]);
        let fam = ModeFamily::from_def(&def).unwrap();
        assert_eq!(fam.mode_name(0), "First");
        assert_eq!(fam.mode_name(1), "Second");
        assert_eq!(fam.mode_name(2), "First");
    }

    #[test]
    fn test_clamp_rotation() {
        let fam = ModeFamily::from_def(&LYDIAN_ONLY).unwrap();
        assert_eq!(fam.clamp_rotation(-4), 0);
        assert_eq!(fam.clamp_rotation(9), 0);
    }
}
