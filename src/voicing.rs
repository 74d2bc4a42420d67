// MIDI voicings for auditioning the wheel.
//
// Everything is placed relative to a reference octave (4 = middle C). The
// wheel's root sits in that octave and voices stack upward from it, so a
// phrase never dips below the note it starts on.

use crate::chords;
use crate::pitch::{PitchClass, PitchSet};

pub const REFERENCE_OCTAVE: i32 = 4;

/// MIDI number of a pitch class in an octave; middle C (60) is C4.
pub fn note_to_midi(pc: PitchClass, octave: i32) -> i32 {
    60 + pc.value() as i32 + (octave - REFERENCE_OCTAVE) * 12
}

fn to_midi_byte(note: i32) -> u8 {
    note.clamp(0, 127) as u8
}

/// Shift a whole phrase by octaves until it fits the MIDI range, so the
/// intervals between its notes survive at the extreme octaves.
fn fit_midi(notes: Vec<i32>) -> Vec<u8> {
    let (Some(&lo), Some(&hi)) = (notes.iter().min(), notes.iter().max()) else {
        return Vec::new();
    };
    let mut shift = 0;
    while hi + shift > 127 && lo + shift - 12 >= 0 {
        shift -= 12;
    }
    while lo + shift < 0 && hi + shift + 12 <= 127 {
        shift += 12;
    }
    notes.into_iter().map(|n| to_midi_byte(n + shift)).collect()
}

/// Smallest octave transposition of `pc` strictly above `floor`.
fn above(pc: PitchClass, octave: i32, floor: i32) -> i32 {
    let mut m = note_to_midi(pc, octave);
    while m <= floor {
        m += 12;
    }
    m
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voicing {
    pub root: PitchClass,
    pub octave: i32,
}

impl Default for Voicing {
    fn default() -> Self {
        Self { root: PitchClass::C, octave: REFERENCE_OCTAVE }
    }
}

impl Voicing {
    pub fn new(root: PitchClass, octave: i32) -> Self {
        Self { root, octave }
    }

    fn absolute(&self, interval: u8) -> PitchClass {
        PitchClass::wrapping(interval as i32 + self.root.value() as i32)
    }

    fn anchored_raw(&self, note: PitchClass) -> i32 {
        let root = note_to_midi(self.root, self.octave);
        if note == self.root {
            root
        } else {
            above(note, self.octave, root)
        }
    }

    /// An absolute pitch class placed at or above the root.
    pub fn anchored(&self, note: PitchClass) -> u8 {
        fit_midi(vec![self.anchored_raw(note)])[0]
    }

    /// The note of one selected degree.
    pub fn single(&self, selection: PitchSet, degree: usize) -> Option<u8> {
        let rels = selection.to_vec();
        let interval = *rels.get(degree)?;
        Some(self.anchored(self.absolute(interval)))
    }

    /// The selection read upward from `degree`, each note above the last,
    /// closing on the starting note an octave higher.
    pub fn mode_run(&self, selection: PitchSet, degree: usize) -> Vec<u8> {
        let rels = selection.to_vec();
        let n = rels.len();
        if n == 0 {
            return Vec::new();
        }
        let start = degree % n;
        let mut out: Vec<i32> = Vec::with_capacity(n + 1);
        let mut prev: Option<i32> = None;
        for k in 0..n {
            let note = self.absolute(rels[(start + k) % n]);
            let midi = match prev {
                Some(p) => above(note, self.octave, p),
                None => note_to_midi(note, self.octave),
            };
            out.push(midi);
            prev = Some(midi);
        }
        if let Some(&first) = out.first() {
            out.push(first + 12);
        }
        fit_midi(out)
    }

    /// The chord on `degree`, root anchored, upper voices stacked.
    pub fn triad(&self, selection: PitchSet, degree: usize) -> Vec<u8> {
        let rels = selection.to_vec();
        if degree >= rels.len() {
            return Vec::new();
        }
        let mut out: Vec<i32> = Vec::new();
        let mut prev: Option<i32> = None;
        for interval in chords::chord_degrees(&rels, degree) {
            let note = self.absolute(interval);
            let midi = match prev {
                Some(p) => above(note, self.octave, p),
                None => self.anchored_raw(note),
            };
            out.push(midi);
            prev = Some(midi);
        }
        fit_midi(out)
    }

    /// One close chord per degree (degree, +2, +4 scale steps), unvoiced,
    /// in the reference octave.
    pub fn chord_cycle(&self, selection: PitchSet) -> Vec<Vec<u8>> {
        let rels = selection.to_vec();
        let n = rels.len();
        (0..n)
            .map(|i| {
                let chord = [i, i + 2, i + 4]
                    .iter()
                    .map(|&j| note_to_midi(self.absolute(rels[j % n]), self.octave))
                    .collect();
                fit_midi(chord)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(offsets: &[u8]) -> PitchSet {
        PitchSet::from_offsets(offsets).unwrap()
    }

    fn on(root: u8) -> Voicing {
        Voicing::new(PitchClass::wrapping(root as i32), REFERENCE_OCTAVE)
    }

    #[test]
    fn test_note_to_midi() {
        assert_eq!(note_to_midi(PitchClass::C, 4), 60);
        assert_eq!(note_to_midi(PitchClass::wrapping(9), 4), 69);
        assert_eq!(note_to_midi(PitchClass::wrapping(11), 3), 59);
    }

    #[test]
    fn test_anchored_stays_above_root() {
        let v = on(7);
        assert_eq!(v.anchored(PitchClass::wrapping(7)), 67);
        assert_eq!(v.anchored(PitchClass::wrapping(2)), 74);
        assert_eq!(v.anchored(PitchClass::wrapping(9)), 69);
    }

    #[test]
    fn test_single_degree() {
        let major = set(&[0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(on(0).single(major, 4), Some(67));
        assert_eq!(on(9).single(major, 4), Some(76));
        assert_eq!(on(0).single(major, 7), None);
    }

    #[test]
    fn test_mode_run() {
        let major = set(&[0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(on(0).mode_run(major, 0), vec![60, 62, 64, 65, 67, 69, 71, 72]);
        // Dorian from D, then wrapping past B.
        assert_eq!(on(0).mode_run(major, 1), vec![62, 64, 65, 67, 69, 71, 72, 74]);
        assert!(on(0).mode_run(PitchSet::EMPTY, 0).is_empty());
    }

    #[test]
    fn test_mode_run_transposed() {
        // A minor pentatonic on A: first note in octave 4, rest climbs.
        let pent = set(&[0, 3, 5, 7, 10]);
        assert_eq!(on(9).mode_run(pent, 0), vec![69, 72, 74, 76, 79, 81]);
    }

    #[test]
    fn test_triad_voicing() {
        let major = set(&[0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(on(0).triad(major, 0), vec![60, 64, 67]);
        // vii°: B anchored above C, then D and F above it.
        assert_eq!(on(0).triad(major, 6), vec![71, 74, 77]);
        assert!(on(0).triad(major, 9).is_empty());
    }

    #[test]
    fn test_chord_cycle() {
        let major = set(&[0, 2, 4, 5, 7, 9, 11]);
        let chords = on(0).chord_cycle(major);
        assert_eq!(chords.len(), 7);
        assert_eq!(chords[0], vec![60, 64, 67]);
        assert_eq!(chords[6], vec![71, 62, 65]);
    }

    #[test]
    fn test_top_octave_keeps_phrase_shape() {
        let major = set(&[0, 2, 4, 5, 7, 9, 11]);
        let run = Voicing::new(PitchClass::wrapping(11), 8).mode_run(major, 0);
        assert_eq!(run, vec![107, 109, 111, 112, 114, 116, 118, 119]);
        assert!(run.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(run[7], run[0] + 12);

        let triad = Voicing::new(PitchClass::wrapping(11), 8).triad(major, 6);
        assert!(triad.windows(2).all(|w| w[0] < w[1]));
        assert!(triad.iter().all(|&m| m <= 127));
    }

    #[test]
    fn test_fit_midi() {
        assert_eq!(fit_midi(vec![60, 64, 67]), vec![60, 64, 67]);
        assert_eq!(fit_midi(vec![125, 130]), vec![113, 118]);
        assert_eq!(fit_midi(vec![-3, 2]), vec![9, 14]);
        assert!(fit_midi(Vec::new()).is_empty());
    }
}
