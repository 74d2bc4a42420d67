// Selection state: the pitch classes currently on the wheel, the root the
// wheel is turned to, and the mode the explorer believes it is showing.
//
// Edits never run the matcher on their own. `toggle` and `rotate_mode`
// change the selection, then `sync` names it and updates `active`. Loads
// (by name, by stepping, by address) set `active` directly.
//
// `active` is sticky: while the selection is Custom it keeps pointing at
// the last confirmed mode, and it is what the note-count and family
// steppers navigate from.

use std::fmt;

use crate::address::{Address, AddressError};
use crate::catalog::Catalog;
use crate::chords;
use crate::detect::Detection;
use crate::pitch::{PitchClass, PitchSet};
use crate::scale::ModeRef;

const DEFAULT_FAMILY: &str = "Major";
pub const CUSTOM_LABEL: &str = "Custom";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    EmptyCatalog,
    UnknownFamily { name: String },
    Address(AddressError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "catalog has no families"),
            Self::UnknownFamily { name } => write!(f, "unknown family '{}'", name),
            Self::Address(e) => write!(f, "invalid address: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Address(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AddressError> for SessionError {
    fn from(e: AddressError) -> Self {
        Self::Address(e)
    }
}

/// Whether the selection is a cataloged mode or an arbitrary set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Matched,
    Custom,
}

/// One scale degree of the current selection, as the tiles show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeTile {
    pub degree: usize,
    /// Offset from the wheel's root.
    pub interval: PitchClass,
    /// Absolute pitch class (interval + root).
    pub note: PitchClass,
    pub chord: String,
    pub mode_name: String,
}

#[derive(Clone)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    selection: PitchSet,
    root: PitchClass,
    color_step: u8,
    active: ModeRef,
    provenance: Provenance,
}

impl<'c> Session<'c> {
    /// Start on Major/Ionian, or on the first declared family when the
    /// catalog has no Major.
    pub fn new(catalog: &'c Catalog) -> Result<Self, SessionError> {
        let start = catalog
            .family(DEFAULT_FAMILY)
            .or_else(|| catalog.families().first())
            .ok_or(SessionError::EmptyCatalog)?;
        let selection = start.pattern(0).unwrap_or(PitchSet::EMPTY);
        Ok(Self {
            catalog,
            selection,
            root: PitchClass::C,
            color_step: 0,
            active: start.mode_ref(0),
            provenance: Provenance::Matched,
        })
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn selection(&self) -> PitchSet {
        self.selection
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn color_step(&self) -> u8 {
        self.color_step
    }

    pub fn active(&self) -> &ModeRef {
        &self.active
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_custom(&self) -> bool {
        self.provenance == Provenance::Custom
    }

    // ── Editing ───────────────────────────────────────────────────────────

    /// Flip one interval. Returns `true` if it is now selected.
    pub fn toggle(&mut self, interval: PitchClass) -> bool {
        self.selection.toggle(interval)
    }

    /// Run the matcher on the current selection, using the active mode as
    /// the tie-break hint.
    pub fn sync(&mut self) -> Detection {
        let detection = self.catalog.detect(self.selection, Some(&self.active));
        match detection.mode_ref() {
            Some(found) => {
                self.active = found.clone();
                self.provenance = Provenance::Matched;
            }
            None => self.provenance = Provenance::Custom,
        }
        detection
    }

    /// Re-root the selection on a neighbouring member. `+1` moves to the
    /// lowest interval above the root, `-1` to the highest. Sets with fewer
    /// than two notes stay put. Returns whether anything moved.
    pub fn rotate_mode(&mut self, direction: i32) -> bool {
        if self.selection.len() < 2 || direction == 0 {
            return false;
        }
        let pivot = if direction > 0 {
            self.selection.iter().find(|pc| pc.value() > 0)
        } else {
            self.selection.highest()
        };
        let Some(pivot) = pivot else { return false };
        let k = pivot.value();
        self.selection = self.selection.transpose(-(k as i32));
        self.color_step = (self.color_step + k) % 12;
        self.sync();
        true
    }

    // ── Loading ───────────────────────────────────────────────────────────

    /// Replace the selection with one rotation of a family. The rotation is
    /// clamped into the family's range.
    pub fn load_family(&mut self, name: &str, rotation: i64) -> Result<(), SessionError> {
        let catalog = self.catalog;
        let family = catalog
            .family(name)
            .ok_or_else(|| SessionError::UnknownFamily { name: name.to_string() })?;
        let rotation = family.clamp_rotation(rotation);
        self.selection = family.pattern(rotation).unwrap_or(PitchSet::EMPTY);
        self.active = family.mode_ref(rotation);
        self.provenance = Provenance::Matched;
        self.color_step = self.selection.lowest().map_or(0, PitchClass::value);
        Ok(())
    }

    /// Move to the next (`+1`) or previous (`-1`) note count, wrapping, and
    /// load the first family declared for it.
    pub fn step_note_count(&mut self, direction: i32) -> Result<(), SessionError> {
        let counts = self.catalog.note_counts();
        let current = counts.iter().position(|&n| n == self.active.note_count);
        let next = wrap_step(current, counts.len(), direction).ok_or(SessionError::EmptyCatalog)?;
        let name = self
            .catalog
            .families_with_note_count(counts[next])
            .next()
            .map(|f| f.name())
            .ok_or(SessionError::EmptyCatalog)?;
        self.load_family(name, 0)
    }

    /// Move to the next or previous family with the active note count,
    /// wrapping, at rotation 0.
    pub fn step_family(&mut self, direction: i32) -> Result<(), SessionError> {
        let names = self.catalog.family_names_with_note_count(self.active.note_count);
        let current = names.iter().position(|&n| n == self.active.family);
        let next = wrap_step(current, names.len(), direction).ok_or(SessionError::EmptyCatalog)?;
        self.load_family(names[next], 0)
    }

    /// Load by numeric address; `rotation` is 1-based.
    pub fn set_by_address(
        &mut self,
        note_count: u8,
        family_index: u8,
        rotation: i64,
    ) -> Result<(), SessionError> {
        self.load_address(&Address::new(note_count, family_index, rotation))
    }

    /// Load from text such as `"7.1.2"`. Invalid input leaves the session as it was.
    pub fn apply_address(&mut self, text: &str) -> Result<(), SessionError> {
        let address: Address = text.parse()?;
        self.load_address(&address)
    }

    fn load_address(&mut self, address: &Address) -> Result<(), SessionError> {
        let (family, rotation) = address.resolve(self.catalog)?;
        self.load_family(family.name(), rotation as i64)
    }

    // ── Root / transposition ──────────────────────────────────────────────

    pub fn set_root(&mut self, root: PitchClass) {
        self.root = root;
    }

    pub fn step_root(&mut self, semitones: i32) {
        self.root = self.root.transpose(semitones);
    }

    // ── Display ───────────────────────────────────────────────────────────

    /// `"n.f.r"` for the active mode, or `"<size>.0.1"` while Custom.
    pub fn address(&self) -> String {
        if self.is_custom() {
            return format!("{}.0.1", self.selection.len());
        }
        match self.catalog.family(self.active.family) {
            Some(fam) => {
                let rotation = self.active.rotation as i64 + 1;
                Address::new(fam.note_count(), fam.family_index(), rotation).to_string()
            }
            None => format!("{}.0.1", self.selection.len()),
        }
    }

    pub fn family_label(&self) -> &'static str {
        match self.provenance {
            Provenance::Matched => self.active.family,
            Provenance::Custom => CUSTOM_LABEL,
        }
    }

    /// Note count shown next to the family: the active family's while
    /// matched, the raw selection size while Custom.
    pub fn note_count(&self) -> usize {
        match self.provenance {
            Provenance::Matched => self.active.note_count as usize,
            Provenance::Custom => self.selection.len(),
        }
    }

    /// Name of the active rotation; `None` while Custom.
    pub fn rotation_name(&self) -> Option<&'static str> {
        if self.is_custom() {
            return None;
        }
        self.catalog
            .family(self.active.family)
            .map(|fam| fam.mode_name(self.active.rotation))
    }

    /// Colour-ring slot for an interval.
    pub fn color_index(&self, interval: PitchClass) -> usize {
        (interval.index() + self.color_step as usize) % 12
    }

    /// One tile per selected degree, lowest interval first.
    pub fn degree_tiles(&self) -> Vec<DegreeTile> {
        let rels = self.selection.to_vec();
        let family = match self.provenance {
            Provenance::Matched => self.catalog.family(self.active.family),
            Provenance::Custom => None,
        };
        self.selection
            .iter()
            .enumerate()
            .map(|(degree, interval)| DegreeTile {
                degree,
                interval,
                note: interval.transpose(self.root.value() as i32),
                chord: chords::chord_symbol(&rels, degree),
                mode_name: match family {
                    Some(fam) => fam.mode_name(self.active.rotation + degree).to_string(),
                    None => format!("Mode {}", degree + 1),
                },
            })
            .collect()
    }
}

/// Wrapping index step over `len` items. A missing current position goes
/// to the last item when stepping back and to the first when stepping on.
fn wrap_step(current: Option<usize>, len: usize, direction: i32) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, direction < 0) {
        (None, true) | (Some(0), true) => len - 1,
        (Some(i), true) => i - 1,
        (None, false) => 0,
        (Some(i), false) => (i + 1) % len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session<'static> {
        Session::new(Catalog::builtin()).unwrap()
    }

    fn pc(v: u8) -> PitchClass {
        PitchClass::new(v).unwrap()
    }

    #[test]
    fn test_starts_on_ionian() {
        let s = session();
        assert_eq!(s.selection().to_vec(), vec![0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(s.family_label(), "Major");
        assert_eq!(s.rotation_name(), Some("Ionian"));
        assert_eq!(s.address(), "7.1.1");
        assert_eq!(s.provenance(), Provenance::Matched);
    }

    #[test]
    fn test_toggle_does_not_detect() {
        let mut s = session();
        assert!(!s.toggle(pc(11)));
        // Still reports the old mode until synced.
        assert_eq!(s.family_label(), "Major");
        assert_eq!(s.address(), "7.1.1");
        s.sync();
        assert_ne!(s.family_label(), "Major");
    }

    #[test]
    fn test_custom_display() {
        let mut s = session();
        s.toggle(pc(0));
        assert!(s.sync().is_unknown());
        assert!(s.is_custom());
        assert_eq!(s.family_label(), "Custom");
        assert_eq!(s.address(), "6.0.1");
        assert_eq!(s.note_count(), 6);
        assert_eq!(s.rotation_name(), None);
        // The active mode is stale, not cleared.
        assert_eq!(s.active().family, "Major");
    }

    #[test]
    fn test_load_family_clamps_and_rejects() {
        let mut s = session();
        s.load_family("Major", 40).unwrap();
        assert_eq!(s.rotation_name(), Some("Locrian"));
        let before = s.selection();
        let err = s.load_family("Nope", 0).unwrap_err();
        assert_eq!(err, SessionError::UnknownFamily { name: "Nope".into() });
        assert_eq!(s.selection(), before);
        assert_eq!(s.rotation_name(), Some("Locrian"));
    }

    #[test]
    fn test_step_note_count_wraps() {
        let mut s = session();
        s.step_note_count(1).unwrap();
        assert_eq!(s.active().note_count, 8);
        assert_eq!(s.active().rotation, 0);
        s.load_family("Chromatic", 0).unwrap();
        s.step_note_count(1).unwrap();
        assert_eq!(s.family_label(), "Void");
        s.step_note_count(-1).unwrap();
        assert_eq!(s.active().note_count, 12);
    }

    #[test]
    fn test_step_family_wraps() {
        let mut s = session();
        s.load_family("Tritone", 0).unwrap();
        s.step_family(-1).unwrap();
        assert_eq!(s.family_label(), "M7 & m2");
        s.step_family(1).unwrap();
        assert_eq!(s.family_label(), "Tritone");
        s.step_family(1).unwrap();
        assert_eq!(s.family_label(), "P5 & P4");
    }

    #[test]
    fn test_steppers_use_stale_active() {
        let mut s = session();
        s.toggle(pc(0));
        assert!(s.sync().is_unknown());
        assert_eq!(s.note_count(), 6);
        // Navigation starts from Major, not from the six-note custom set.
        s.step_family(1).unwrap();
        assert_eq!(s.active().note_count, 7);
        assert_eq!(s.active().rotation, 0);
        assert_ne!(s.family_label(), "Major");
        assert_eq!(s.provenance(), Provenance::Matched);
    }

    #[test]
    fn test_address_round_trip() {
        let mut s = session();
        s.set_by_address(7, 1, 2).unwrap();
        assert_eq!(s.rotation_name(), Some("Dorian"));
        assert_eq!(s.address(), "7.1.2");
        s.apply_address(" 7.1.99 ").unwrap();
        assert_eq!(s.address(), "7.1.7");
        s.apply_address("7.1.1").unwrap();
        s.apply_address("7.1.99999999999999999999").unwrap();
        assert_eq!(s.address(), "7.1.7");
        assert_eq!(s.rotation_name(), Some("Locrian"));
    }

    #[test]
    fn test_bad_address_leaves_state() {
        let mut s = session();
        s.apply_address("7.1.3").unwrap();
        for bad in ["7.1", "a.b.c", "7.99.1", ""] {
            assert!(s.apply_address(bad).is_err(), "{bad}");
            assert_eq!(s.address(), "7.1.3");
        }
    }

    #[test]
    fn test_rotate_mode() {
        let mut s = session();
        assert!(s.rotate_mode(1));
        assert_eq!(s.rotation_name(), Some("Dorian"));
        assert_eq!(s.color_step(), 2);
        assert!(s.rotate_mode(-1));
        assert_eq!(s.rotation_name(), Some("Ionian"));
        assert_eq!(s.color_step(), 0);
        assert!(s.rotate_mode(-1));
        assert_eq!(s.rotation_name(), Some("Locrian"));
        assert_eq!(s.color_step(), 11);
        assert_eq!(s.color_index(pc(1)), 0);
    }

    #[test]
    fn test_rotate_needs_two_notes() {
        let mut s = session();
        s.load_family("Unison/Octave", 0).unwrap();
        assert!(!s.rotate_mode(1));
        assert_eq!(s.selection().to_vec(), vec![0]);
    }

    #[test]
    fn test_root_wraps_and_is_ignored_by_detection() {
        let mut s = session();
        s.step_root(-1);
        assert_eq!(s.root().value(), 11);
        s.step_root(3);
        assert_eq!(s.root().value(), 2);
        assert_eq!(s.sync().family_name(), "Major");
    }

    #[test]
    fn test_degree_tiles() {
        let mut s = session();
        s.load_family("Major", 1).unwrap();
        s.set_root(pc(2));
        let tiles = s.degree_tiles();
        assert_eq!(tiles.len(), 7);
        assert_eq!(tiles[0].mode_name, "Dorian");
        assert_eq!(tiles[6].mode_name, "Ionian");
        assert_eq!(tiles[0].note.value(), 2);
        assert_eq!(tiles[0].chord, "i");
        assert_eq!(tiles[2].chord, "III");

        s.toggle(pc(0));
        s.sync();
        let custom = s.degree_tiles();
        assert_eq!(custom[0].mode_name, "Mode 1");
        assert_eq!(custom[5].mode_name, "Mode 6");
    }

    #[test]
    fn test_error_display() {
        let err = SessionError::from(AddressError::Malformed { input: "x".into() });
        assert_eq!(err.to_string(), "invalid address: 'x' is not of the form notes.family.mode");
    }
}
