// Pitch classes and pitch-class sets.
//
// A `PitchSet` is a 12-bit mask (bit n = pitch class n). Iteration is always
// ascending, which is the "sorted" order the matcher compares against.

use std::fmt;

/// Display names, sharps and flats both shown for the black keys.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C♯/D♭", "D", "D♯/E♭", "E", "F", "F♯/G♭", "G", "G♯/A♭", "A", "A♯/B♭", "B",
];

/// Compact ASCII names for narrow cells.
pub const SHORT_NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Interval names by semitone distance from the root.
pub const INTERVAL_NAMES: [&str; 12] = [
    "Root", "m2", "M2", "m3", "M3", "P4", "Tritone", "P5", "m6", "M6", "m7", "M7",
];

const FULL_MASK: u16 = 0x0FFF;

// ── PitchClass ────────────────────────────────────────────────────────────────

/// One of the 12 equal-tempered semitone positions, 0 = C.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    pub fn new(value: u8) -> Option<Self> {
        (value < 12).then_some(Self(value))
    }

    /// Reduce any integer into 0..12.
    pub fn wrapping(value: i32) -> Self {
        Self(value.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn transpose(self, semitones: i32) -> Self {
        Self::wrapping(self.0 as i32 + semitones)
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.index()]
    }

    pub fn short_name(self) -> &'static str {
        SHORT_NOTE_NAMES[self.index()]
    }

    /// Interval name when this pitch class is read as a distance from a root.
    pub fn interval_name(self) -> &'static str {
        INTERVAL_NAMES[self.index()]
    }

    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── PitchSet ──────────────────────────────────────────────────────────────────

/// An unordered set of pitch classes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PitchSet(u16);

impl PitchSet {
    pub const EMPTY: PitchSet = PitchSet(0);
    pub const CHROMATIC: PitchSet = PitchSet(FULL_MASK);

    pub fn from_bits(bits: u16) -> Self {
        Self(bits & FULL_MASK)
    }

    /// Build from raw offsets. `None` if any offset is outside 0..12.
    pub fn from_offsets(offsets: &[u8]) -> Option<Self> {
        let mut set = Self::EMPTY;
        for &o in offsets {
            set.insert(PitchClass::new(o)?);
        }
        Some(set)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, pc: PitchClass) -> bool {
        self.0 & (1 << pc.0) != 0
    }

    pub fn insert(&mut self, pc: PitchClass) {
        self.0 |= 1 << pc.0;
    }

    pub fn remove(&mut self, pc: PitchClass) {
        self.0 &= !(1 << pc.0);
    }

    /// Flip membership; returns `true` if the pitch class is now present.
    pub fn toggle(&mut self, pc: PitchClass) -> bool {
        self.0 ^= 1 << pc.0;
        self.contains(pc)
    }

    /// Ascending iteration.
    pub fn iter(self) -> impl Iterator<Item = PitchClass> {
        (0..12u8).filter(move |&i| self.0 & (1 << i) != 0).map(PitchClass)
    }

    /// Ascending offsets as plain integers.
    pub fn to_vec(self) -> Vec<u8> {
        self.iter().map(PitchClass::value).collect()
    }

    /// Shift every member by `semitones`, wrapping around the octave.
    pub fn transpose(self, semitones: i32) -> Self {
        let k = semitones.rem_euclid(12) as u32;
        if k == 0 {
            return self;
        }
        let bits = self.0 as u32;
        Self::from_bits(((bits << k) | (bits >> (12 - k))) as u16)
    }

    pub fn lowest(self) -> Option<PitchClass> {
        self.iter().next()
    }

    pub fn highest(self) -> Option<PitchClass> {
        self.iter().last()
    }
}

impl FromIterator<PitchClass> for PitchSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = PitchSet::EMPTY;
        for pc in iter {
            set.insert(pc);
        }
        set
    }
}

impl fmt::Debug for PitchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(PitchClass::value)).finish()
    }
}

impl fmt::Display for PitchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|pc| pc.to_string()).collect();
        write!(f, "[{}]", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(offsets: &[u8]) -> PitchSet {
        PitchSet::from_offsets(offsets).unwrap()
    }

    #[test]
    fn test_pitch_class_range() {
        assert_eq!(PitchClass::new(11).map(PitchClass::value), Some(11));
        assert_eq!(PitchClass::new(12), None);
        assert_eq!(PitchClass::wrapping(-1).value(), 11);
        assert_eq!(PitchClass::wrapping(25).value(), 1);
    }

    #[test]
    fn test_names() {
        assert_eq!(PitchClass::wrapping(6).name(), "F♯/G♭");
        assert_eq!(PitchClass::wrapping(6).short_name(), "F#");
        assert_eq!(PitchClass::wrapping(7).interval_name(), "P5");
    }

    #[test]
    fn test_iteration_is_sorted() {
        let s: PitchSet = [9u8, 0, 4, 7].iter().filter_map(|&v| PitchClass::new(v)).collect();
        assert_eq!(s.to_vec(), vec![0, 4, 7, 9]);
        assert_eq!(s.len(), 4);
        assert_eq!(s.to_string(), "[0,4,7,9]");
    }

    #[test]
    fn test_toggle() {
        let mut s = set(&[0, 4, 7]);
        assert!(!s.toggle(PitchClass::wrapping(4)));
        assert_eq!(s.to_vec(), vec![0, 7]);
        assert!(s.toggle(PitchClass::wrapping(3)));
        assert_eq!(s.to_vec(), vec![0, 3, 7]);
    }

    #[test]
    fn test_from_offsets_rejects_out_of_range() {
        assert!(PitchSet::from_offsets(&[0, 12]).is_none());
        assert_eq!(PitchSet::from_offsets(&[]), Some(PitchSet::EMPTY));
    }

    #[test]
    fn test_transpose_wraps() {
        // D Dorian pitch classes brought down to a zero root.
        let dorian_on_d = set(&[0, 2, 4, 5, 7, 9, 11]).transpose(-2);
        assert_eq!(dorian_on_d.to_vec(), vec![0, 2, 3, 5, 7, 9, 10]);
        assert_eq!(set(&[11]).transpose(1).to_vec(), vec![0]);
        assert_eq!(PitchSet::CHROMATIC.transpose(5), PitchSet::CHROMATIC);
    }
}
