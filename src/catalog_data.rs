// Built-in mode-family table.
//
// One entry per declaration, in declaration order. Every family lists its
// rotations as zero-rooted pitch-class offsets. A handful of names are
// declared twice; `Catalog::from_defs` keeps the first position and the last
// value for those (see `Catalog::shadowed`).

use crate::scale::FamilyDef;

#[rustfmt::skip]
pub static FAMILY_DEFS: &[FamilyDef] = &[
    // ── 0 notes ───────────────────────────────────────────────────────────────
    FamilyDef::new("Void", 0, 1,
        &["Silence"],
        &[&[]]),
    // ── 1 note ────────────────────────────────────────────────────────────────
    FamilyDef::new("Unison/Octave", 1, 1,
        &["Unison/Octave"],
        &[&[0]]),
    // ── 2 notes ───────────────────────────────────────────────────────────────
    FamilyDef::new("Tritone", 2, 1,
        &["Augmented Fourth", "Diminished Fifth"],
        &[&[0,6], &[0,6]]),
    FamilyDef::new("P5 & P4", 2, 2,
        &["Perfect Fifth", "Perfect Fourth"],
        &[&[0,7], &[0,5]]),
    FamilyDef::new("M3 & m6", 2, 3,
        &["Major Third", "Minor Sixth"],
        &[&[0,4], &[0,8]]),
    FamilyDef::new("M6 & m3", 2, 4,
        &["Major Sixth", "Minor Third"],
        &[&[0,9], &[0,3]]),
    FamilyDef::new("M2 & m7", 2, 5,
        &["Major Second", "Minor Seventh"],
        &[&[0,2], &[0,10]]),
    FamilyDef::new("M7 & m2", 2, 6,
        &["Major Seventh", "Minor Second"],
        &[&[0,11], &[0,1]]),
    // ── 3 notes ───────────────────────────────────────────────────────────────
    FamilyDef::new("Augmented Triad", 3, 1,
        &["Augmented Triad"],
        &[&[0,4,8]]),
    FamilyDef::new("Major Triad", 3, 2,
        &["Major Triad", "First Inversion", "Second Inversion"],
        &[&[0,4,7], &[0,3,8], &[0,5,9]]),
    FamilyDef::new("Minor Triad", 3, 3,
        &["Minor Triad", "First Inversion", "Second Inversion"],
        &[&[0,3,7], &[0,4,9], &[0,5,8]]),
    FamilyDef::new("Diminished Triad", 3, 5,
        &["Diminished Triad", "First Inversion", "Second Inversion"],
        &[&[0,3,6], &[0,3,9], &[0,6,9]]),
    FamilyDef::new("Suspended Triad", 3, 4,
        &["Sus4", "Sus2", "Sus7"],
        &[&[0,5,7], &[0,2,7], &[0,5,10]]),
    FamilyDef::new("Dominant 7th no 5th", 3, 6,
        &["Dom7 no 5", "Mode 2", "Mode 3"],
        &[&[0,4,10], &[0,6,8], &[0,2,6]]),
    FamilyDef::new("Tritonic 7", 3, 7,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,6,10], &[0,4,6], &[0,2,8]]),
    FamilyDef::new("Tritonic 8", 3, 8,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,5,11], &[0,6,7], &[0,1,6]]),
    FamilyDef::new("Tritonic 9", 3, 9,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,6,11], &[0,5,6], &[0,1,7]]),
    FamilyDef::new("Tritonic 10", 3, 10,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,3,10], &[0,7,9], &[0,2,5]]),
    FamilyDef::new("Tritonic 11", 3, 11,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,2,9], &[0,7,10], &[0,3,5]]),
    FamilyDef::new("Tritonic 12", 3, 12,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,4,11], &[0,7,8], &[0,1,5]]),
    FamilyDef::new("Tritonic 13", 3, 13,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,7,11], &[0,4,5], &[0,1,8]]),
    FamilyDef::new("Tritonic 14", 3, 14,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,2,10], &[0,8,10], &[0,2,4]]),
    FamilyDef::new("Tritonic 15", 3, 15,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,3,11], &[0,8,9], &[0,1,4]]),
    FamilyDef::new("Tritonic 16", 3, 16,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,1,9], &[0,8,11], &[0,3,4]]),
    FamilyDef::new("Tritonic 17", 3, 17,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,2,11], &[0,9,10], &[0,1,3]]),
    FamilyDef::new("Tritonic 18", 3, 18,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,1,10], &[0,9,11], &[0,2,3]]),
    FamilyDef::new("Trichromatic", 3, 19,
        &["Mode 1", "Mode 2", "Mode 3"],
        &[&[0,1,11], &[0,10,11], &[0,1,2]]),
    // ── 4 notes ───────────────────────────────────────────────────────────────
    FamilyDef::new("Fully Diminished", 4, 1,
        &["Fully Diminished"],
        &[&[0,3,6,9]]),
    FamilyDef::new("Half Diminshed", 4, 2,
        &["Half Diminished", "First Inversion", "Second Inversion", "Third Inversion"],
        &[&[0,3,6,10], &[0,3,7,9], &[0,4,6,9], &[0,2,5,8]]),
    FamilyDef::new("Dominant 7th", 4, 3,
        &["Dominant 7th", "First Inversion", "Second Inversion", "Third Inversion"],
        &[&[0,4,7,10], &[0,3,6,8], &[0,3,5,9], &[0,2,6,9]]),
    FamilyDef::new("Major 7th", 4, 4,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,4,7,11], &[0,3,7,8], &[0,4,5,9], &[0,1,5,8]]),
    FamilyDef::new("Tetratonic 5", 4, 5,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,2,6,10], &[0,4,8,10], &[0,4,6,8], &[0,2,4,8]]),
    FamilyDef::new("Tetratonic 6", 4, 6,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,3,5,10], &[0,2,7,9], &[0,5,7,10], &[0,2,5,7]]),
    FamilyDef::new("Minor 7th", 4, 7,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,3,7,10], &[0,4,7,9], &[0,3,5,8], &[0,2,5,9]]),
    FamilyDef::new("Tetratonic 8", 4, 8,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,4,6,10], &[0,2,6,8], &[0,4,6,10], &[0,2,6,8]]),
    FamilyDef::new("Tetratonic 9", 4, 9,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,3,6,11], &[0,3,8,9], &[0,5,6,9], &[0,1,4,7]]),
    FamilyDef::new("Tetratonic 10", 4, 10,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,3,7,11], &[0,4,8,9], &[0,4,5,8], &[0,1,4,8]]),
    FamilyDef::new("Tetratonic 11", 4, 11,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,4,6,11], &[0,2,7,8], &[0,5,6,10], &[0,1,5,7]]),
    FamilyDef::new("Tetratonic 12", 4, 12,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,4,8,11], &[0,4,7,8], &[0,3,4,8], &[0,1,5,9]]),
    FamilyDef::new("Tetratonic 13", 4, 13,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,5,7,11], &[0,2,6,7], &[0,4,5,10], &[0,1,6,8]]),
    FamilyDef::new("Tetratonic 14", 4, 14,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,5,8,11], &[0,3,6,7], &[0,3,4,9], &[0,1,6,9]]),
    FamilyDef::new("Tetratonic 15", 4, 15,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,2,5,10], &[0,3,8,10], &[0,5,7,9], &[0,2,4,7]]),
    FamilyDef::new("Tetratonic 16", 4, 16,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,2,7,10], &[0,5,8,10], &[0,3,5,7], &[0,2,4,9]]),
    FamilyDef::new("Tetratonic 17", 4, 17,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,2,6,11], &[0,4,9,10], &[0,5,6,8], &[0,1,3,7]]),
    FamilyDef::new("Tetratonic 18", 4, 18,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,3,5,11], &[0,2,8,9], &[0,6,7,10], &[0,1,4,6]]),
    FamilyDef::new("Tetratonic 19", 4, 19,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,1,6,10], &[0,5,9,11], &[0,4,6,7], &[0,2,3,8]]),
    FamilyDef::new("Tetratonic 20", 4, 20,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,3,4,10], &[0,1,7,9], &[0,6,8,11], &[0,2,5,6]]),
    FamilyDef::new("Tetratonic 21", 4, 21,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,1,6,11], &[0,5,10,11], &[0,5,6,7], &[0,1,2,7]]),
    FamilyDef::new("Tetratonic 22", 4, 22,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,2,5,11], &[0,3,9,10], &[0,6,7,9], &[0,1,3,6]]),
    FamilyDef::new("Tetratonic 23", 4, 23,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,2,7,11], &[0,5,9,10], &[0,4,5,7], &[0,1,3,8]]),
    FamilyDef::new("Tetratonic 24", 4, 24,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,3,4,11], &[0,1,8,9], &[0,7,8,11], &[0,1,4,5]]),
    FamilyDef::new("Tetratonic 25", 4, 25,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,3,8,11], &[0,5,8,9], &[0,3,4,7], &[0,1,4,9]]),
    FamilyDef::new("Tetratonic 26", 4, 26,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,4,5,11], &[0,1,7,8], &[0,6,7,11], &[0,1,5,6]]),
    FamilyDef::new("Tetratonic 27", 4, 27,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,1,5,10], &[0,4,9,11], &[0,5,7,8], &[0,2,3,7]]),
    FamilyDef::new("Tetratonic 28", 4, 28,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,5,6,11], &[0,1,6,7], &[0,5,6,11], &[0,1,6,7]]),
    FamilyDef::new("Tetratonic 29", 4, 29,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,2,3,9], &[0,1,7,10], &[0,6,9,11], &[0,3,5,6]]),
    FamilyDef::new("Tetratonic 30", 4, 30,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,2,4,10], &[0,2,8,10], &[0,6,8,10], &[0,2,4,6]]),
    FamilyDef::new("Tetratonic 31", 4, 31,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,1,5,11], &[0,4,10,11], &[0,6,7,8], &[0,1,2,6]]),
    FamilyDef::new("Tetratonic 32", 4, 32,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,1,7,11], &[0,6,10,11], &[0,4,5,6], &[0,1,2,8]]),
    FamilyDef::new("Tetratonic 33", 4, 33,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,2,4,11], &[0,2,9,10], &[0,7,8,10], &[0,1,3,5]]),
    FamilyDef::new("Tetratonic 34", 4, 34,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,2,8,11], &[0,6,9,10], &[0,3,4,6], &[0,1,3,9]]),
    FamilyDef::new("Tetratonic 35", 4, 35,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,1,4,10], &[0,3,9,11], &[0,6,8,9], &[0,2,3,6]]),
    FamilyDef::new("Tetratonic 36", 4, 36,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,2,3,10], &[0,1,8,10], &[0,7,9,11], &[0,2,4,5]]),
    FamilyDef::new("Tetratonic 37", 4, 37,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,1,4,11], &[0,3,10,11], &[0,7,8,9], &[0,1,2,5]]),
    FamilyDef::new("Tetratonic 38", 4, 38,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,1,8,11], &[0,7,10,11], &[0,3,4,5], &[0,1,2,9]]),
    FamilyDef::new("Tetratonic 39", 4, 39,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,2,3,11], &[0,1,9,10], &[0,8,9,11], &[0,1,3,4]]),
    FamilyDef::new("Tetratonic 40", 4, 40,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,1,3,10], &[0,2,9,11], &[0,7,9,10], &[0,2,3,5]]),
    FamilyDef::new("Tetratonic 41", 4, 41,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,1,3,11], &[0,2,10,11], &[0,8,9,10], &[0,1,2,4]]),
    FamilyDef::new("Tetratonic 42", 4, 42,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,1,2,10], &[0,1,9,11], &[0,8,10,11], &[0,2,3,4]]),
    FamilyDef::new("Tetratonic 43", 4, 43,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4"],
        &[&[0,1,2,11], &[0,1,10,11], &[0,9,10,11], &[0,1,2,3]]),
    // ── 5 notes ───────────────────────────────────────────────────────────────
    FamilyDef::new("Pentatonic", 5, 1,
        &["Major Pentatonic", "Suspended Pentatonic", "Blues Minor", "Blues Major",
          "Minor Pentatonic"],
        &[&[0,2,4,7,9], &[0,2,5,7,10], &[0,3,5,8,10], &[0,2,5,7,9], &[0,3,5,7,10]]),
    FamilyDef::new("Pentatonic 2", 5, 2,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,4,7,10], &[0,2,5,8,10], &[0,3,6,8,10], &[0,3,5,7,9], &[0,2,4,6,9]]),
    FamilyDef::new("Pentatonic 3", 5, 3,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,3,5,8,11], &[0,2,5,8,9], &[0,3,6,7,10], &[0,3,4,7,9], &[0,1,4,6,9]]),
    FamilyDef::new("Pentatonic 4", 5, 4,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,3,6,8,11], &[0,3,5,8,9], &[0,2,5,6,9], &[0,3,4,7,10], &[0,1,4,7,9]]),
    FamilyDef::new("Pentatonic 5", 5, 5,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,5,7,11], &[0,3,5,9,10], &[0,2,6,7,9], &[0,4,5,7,10], &[0,1,3,6,8]]),
    FamilyDef::new("Pentatonic 6", 5, 6,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,3,5,7,11], &[0,2,4,8,9], &[0,2,6,7,10], &[0,4,5,8,10], &[0,1,4,6,8]]),
    FamilyDef::new("Pentatonic 7", 5, 7,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,5,6,10], &[0,3,4,8,10], &[0,1,5,7,9], &[0,4,6,8,11], &[0,2,4,7,8]]),
    FamilyDef::new("Pentatonic 8", 5, 8,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,5,7,10], &[0,4,6,9,11], &[0,2,5,7,8], &[0,3,5,6,10], &[0,2,3,7,9]]),
    FamilyDef::new("Pentatonic 9", 5, 9,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,4,6,10], &[0,2,4,8,10], &[0,2,6,8,10], &[0,4,6,8,10], &[0,2,4,6,8]]),
    FamilyDef::new("Pentatonic 10", 5, 10,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,4,7,11], &[0,2,5,9,10], &[0,3,7,8,10], &[0,4,5,7,9], &[0,1,3,5,8]]),
    FamilyDef::new("Pentatonic 11", 5, 11,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,5,8,11], &[0,3,6,9,10], &[0,3,6,7,9], &[0,3,4,6,9], &[0,1,3,6,9]]),
    FamilyDef::new("Pentatonic 12", 5, 12,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,3,6,7,11], &[0,3,4,8,9], &[0,1,5,6,9], &[0,4,5,8,11], &[0,1,4,7,8]]),
    FamilyDef::new("Pentatonic 13", 5, 13,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,4,7,10], &[0,3,6,9,11], &[0,3,6,8,9], &[0,3,5,6,9], &[0,2,3,6,9]]),
    FamilyDef::new("Pentatonic 14", 5, 14,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,3,7,10], &[0,1,5,8,10], &[0,4,7,9,11], &[0,3,5,7,8], &[0,2,4,5,9]]),
    FamilyDef::new("Pentatonic 15", 5, 15,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,5,7,11], &[0,4,6,10,11], &[0,2,6,7,8], &[0,4,5,6,10], &[0,1,2,6,8]]),
    FamilyDef::new("Pentatonic 16", 5, 16,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,5,6,11], &[0,3,4,9,10], &[0,1,6,7,9], &[0,5,6,8,11], &[0,1,3,6,7]]),
    FamilyDef::new("Pentatonic 17", 5, 17,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,6,8,11], &[0,4,6,9,10], &[0,2,5,6,8], &[0,3,4,6,10], &[0,1,3,7,9]]),
    FamilyDef::new("Pentatonic 18", 5, 18,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,3,4,7,11], &[0,1,4,8,9], &[0,3,7,8,11], &[0,4,5,8,9], &[0,1,4,5,8]]),
    FamilyDef::new("Pentatonic 19", 5, 19,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,3,4,8,11], &[0,1,5,8,9], &[0,4,7,8,11], &[0,3,4,7,8], &[0,1,4,5,9]]),
    FamilyDef::new("Pentatonic 20", 5, 20,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,3,5,6,11], &[0,2,3,8,9], &[0,1,6,7,10], &[0,5,6,9,11], &[0,1,4,6,7]]),
    FamilyDef::new("Pentatonic 21", 5, 21,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,4,6,10], &[0,3,5,9,11], &[0,2,6,8,9], &[0,4,6,7,10], &[0,2,3,6,8]]),
    FamilyDef::new("Pentatonic 22", 5, 22,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,4,7,11], &[0,3,6,10,11], &[0,3,7,8,9], &[0,4,5,6,9], &[0,1,2,5,8]]),
    FamilyDef::new("Pentatonic 23", 5, 23,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,5,8,11], &[0,4,7,10,11], &[0,3,6,7,8], &[0,3,4,5,9], &[0,1,2,6,9]]),
    FamilyDef::new("Pentatonic 24", 5, 24,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,3,7,11], &[0,1,5,9,10], &[0,4,8,9,11], &[0,4,5,7,8], &[0,1,3,4,8]]),
    FamilyDef::new("Pentatonic 25", 5, 25,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,4,6,11], &[0,2,4,9,10], &[0,2,7,8,10], &[0,5,6,8,10], &[0,1,3,5,7]]),
    FamilyDef::new("Pentatonic 26", 5, 26,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,4,8,11], &[0,2,6,9,10], &[0,4,7,8,10], &[0,3,4,6,8], &[0,1,3,5,9]]),
    FamilyDef::new("Pentatonic 27", 5, 27,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,6,7,11], &[0,4,5,9,10], &[0,1,5,6,8], &[0,4,5,7,11], &[0,1,3,7,8]]),
    FamilyDef::new("Pentatonic 28", 5, 28,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,3,6,10], &[0,1,4,8,10], &[0,3,7,9,11], &[0,4,6,8,9], &[0,2,4,5,8]]),
    FamilyDef::new("Pentatonic 29", 5, 29,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,5,6,10], &[0,4,5,9,11], &[0,1,5,7,8], &[0,4,6,7,11], &[0,2,3,7,8]]),
    FamilyDef::new("Pentatonic 30", 5, 30,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,4,5,10], &[0,2,3,8,10], &[0,1,6,8,10], &[0,5,7,9,11], &[0,2,4,6,7]]),
    FamilyDef::new("Pentatonic 31", 5, 31,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,3,6,10], &[0,2,5,9,11], &[0,3,7,9,10], &[0,4,6,7,9], &[0,2,3,5,8]]),
    FamilyDef::new("Pentatonic 32", 5, 32,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,3,7,10], &[0,2,6,9,11], &[0,4,7,9,10], &[0,3,5,6,8], &[0,2,3,5,9]]),
    FamilyDef::new("Pentatonic 33", 5, 33,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,3,4,6,11], &[0,1,3,8,9], &[0,2,7,8,11], &[0,5,6,9,10], &[0,1,4,5,7]]),
    FamilyDef::new("Pentatonic 34", 5, 34,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,4,5,10], &[0,3,4,9,11], &[0,1,6,8,9], &[0,5,7,8,11], &[0,2,3,6,7]]),
    FamilyDef::new("Pentatonic 35", 5, 35,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,4,6,11], &[0,3,5,10,11], &[0,2,7,8,9], &[0,5,6,7,10], &[0,1,2,5,7]]),
    FamilyDef::new("Pentatonic 36", 5, 36,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,4,8,11], &[0,3,7,10,11], &[0,4,7,8,9], &[0,3,4,5,8], &[0,1,2,5,9]]),
    FamilyDef::new("Pentatonic 37", 5, 37,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,5,6,11], &[0,4,5,10,11], &[0,1,6,7,8], &[0,5,6,7,11], &[0,1,2,6,7]]),
    FamilyDef::new("Pentatonic 38", 5, 38,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,6,7,11], &[0,5,6,10,11], &[0,1,5,6,7], &[0,4,5,6,11], &[0,1,2,7,8]]),
    FamilyDef::new("Pentatonic 39", 5, 39,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,6,8,11], &[0,5,7,10,11], &[0,2,5,6,7], &[0,3,4,5,10], &[0,1,2,7,9]]),
    FamilyDef::new("Pentatonic 40", 5, 40,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,3,6,11], &[0,1,4,9,10], &[0,3,8,9,11], &[0,5,6,8,9], &[0,1,3,4,7]]),
    FamilyDef::new("Pentatonic 41", 5, 41,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,3,8,11], &[0,1,6,9,10], &[0,5,8,9,11], &[0,3,4,6,7], &[0,1,3,4,9]]),
    FamilyDef::new("Pentatonic 42", 5, 42,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,4,5,11], &[0,2,3,9,10], &[0,1,7,8,10], &[0,6,7,9,11], &[0,1,3,5,6]]),
    FamilyDef::new("Pentatonic 43", 5, 43,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,3,7,11], &[0,2,6,10,11], &[0,4,8,9,10], &[0,4,5,6,8], &[0,1,2,4,8]]),
    FamilyDef::new("Pentatonic 44", 5, 44,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,2,6,10], &[0,1,5,9,11], &[0,4,8,10,11], &[0,4,6,7,8], &[0,2,3,4,8]]),
    FamilyDef::new("Pentatonic 45", 5, 45,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,3,5,10], &[0,2,4,9,11], &[0,2,7,9,10], &[0,5,7,8,10], &[0,2,3,5,7]]),
    FamilyDef::new("Pentatonic 46", 5, 46,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,3,5,10], &[0,1,3,8,10], &[0,2,7,9,11], &[0,5,7,9,10], &[0,2,4,5,7]]),
    FamilyDef::new("Pentatonic 47", 5, 47,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,3,6,11], &[0,2,5,10,11], &[0,3,8,9,10], &[0,5,6,7,9], &[0,1,2,4,7]]),
    FamilyDef::new("Pentatonic 48", 5, 48,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,4,5,11], &[0,3,4,10,11], &[0,1,7,8,9], &[0,6,7,8,11], &[0,1,2,5,6]]),
    FamilyDef::new("Pentatonic 49", 5, 49,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,2,7,10], &[0,1,6,9,11], &[0,5,8,10,11], &[0,3,5,6,7], &[0,2,3,4,9]]),
    FamilyDef::new("Pentatonic 50", 5, 50,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,3,4,5,11], &[0,1,2,8,9], &[0,1,7,8,11], &[0,6,7,10,11], &[0,1,4,5,6]]),
    FamilyDef::new("Pentatonic 51", 5, 51,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,3,8,11], &[0,2,7,10,11], &[0,5,8,9,10], &[0,3,4,5,7], &[0,1,2,4,9]]),
    FamilyDef::new("Pentatonic 52", 5, 52,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,2,5,10], &[0,1,4,9,11], &[0,3,8,10,11], &[0,5,7,8,9], &[0,2,3,4,7]]),
    FamilyDef::new("Pentatonic 53", 5, 53,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,3,5,11], &[0,1,3,9,10], &[0,2,8,9,11], &[0,6,7,9,10], &[0,1,3,4,6]]),
    FamilyDef::new("Pentatonic 54", 5, 54,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,3,4,10], &[0,2,3,9,11], &[0,1,7,9,10], &[0,6,8,9,11], &[0,2,3,5,6]]),
    FamilyDef::new("Pentatonic 55", 5, 55,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,2,6,11], &[0,1,5,10,11], &[0,4,9,10,11], &[0,5,6,7,8], &[0,1,2,3,7]]),
    FamilyDef::new("Pentatonic 56", 5, 56,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,2,7,11], &[0,1,6,10,11], &[0,5,9,10,11], &[0,4,5,6,7], &[0,1,2,3,8]]),
    FamilyDef::new("Pentatonic 57", 5, 57,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,3,5,11], &[0,2,4,10,11], &[0,2,8,9,10], &[0,6,7,8,10], &[0,1,2,4,6]]),
    FamilyDef::new("Pentatonic 58", 5, 58,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,3,4,10], &[0,1,2,8,10], &[0,1,7,9,11], &[0,6,8,10,11], &[0,2,4,5,6]]),
    FamilyDef::new("Pentatonic 59", 5, 59,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,2,4,10], &[0,1,3,9,11], &[0,2,8,10,11], &[0,6,8,9,10], &[0,2,3,4,6]]),
    FamilyDef::new("Pentatonic 60", 5, 60,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,2,5,11], &[0,1,4,10,11], &[0,3,9,10,11], &[0,6,7,8,9], &[0,1,2,3,6]]),
    FamilyDef::new("Pentatonic 61", 5, 61,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,2,8,11], &[0,1,7,10,11], &[0,6,9,10,11], &[0,3,4,5,6], &[0,1,2,3,9]]),
    FamilyDef::new("Pentatonic 62", 5, 62,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,3,4,11], &[0,2,3,10,11], &[0,1,8,9,10], &[0,7,8,9,11], &[0,1,2,4,5]]),
    FamilyDef::new("Pentatonic 63", 5, 63,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,2,3,4,11], &[0,1,2,9,10], &[0,1,8,9,11], &[0,7,8,10,11], &[0,1,3,4,5]]),
    FamilyDef::new("Pentatonic 64", 5, 64,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,2,4,11], &[0,1,3,10,11], &[0,2,9,10,11], &[0,7,8,9,10], &[0,1,2,3,5]]),
    FamilyDef::new("Pentatonic 65", 5, 65,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,2,3,10], &[0,1,2,9,11], &[0,1,8,10,11], &[0,7,9,10,11], &[0,2,3,4,5]]),
    FamilyDef::new("Pentatonic 66", 5, 66,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,2,3,11], &[0,1,2,10,11], &[0,1,9,10,11], &[0,8,9,10,11], &[0,1,2,3,4]]),
    // ── 6 notes ───────────────────────────────────────────────────────────────
    FamilyDef::new("Whole tone", 6, 1,
        &["Whole Tone"],
        &[&[0,2,4,6,8,10]]),
    FamilyDef::new("Hexatonic 2", 6, 2,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,4,6,8,11], &[0,2,4,6,9,10], &[0,2,4,7,8,10], &[0,2,5,6,8,10], &[0,3,4,6,8,10],
          &[0,1,3,5,7,9]]),
    FamilyDef::new("Hexatonic 3", 6, 3,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,3,5,7,9,11], &[0,2,4,6,8,9], &[0,2,4,6,7,10], &[0,2,4,5,8,10], &[0,2,3,6,8,10],
          &[0,1,4,6,8,10]]),
    FamilyDef::new("Hexatonic 4", 6, 4,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,4,6,8,11], &[0,3,5,7,10,11], &[0,2,4,7,8,9], &[0,2,5,6,7,10], &[0,3,4,5,8,10],
          &[0,1,2,5,7,9]]),
    FamilyDef::new("Hexatonic 5", 6, 5,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,6,8,11], &[0,1,4,6,9,10], &[0,3,5,8,9,11], &[0,2,5,6,8,9], &[0,3,4,6,7,10],
          &[0,1,3,4,7,9]]),
    FamilyDef::new("Hexatonic 6", 6, 6,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,4,5,8,11], &[0,2,3,6,9,10], &[0,1,4,7,8,10], &[0,3,6,7,9,11], &[0,3,4,6,8,9],
          &[0,1,3,5,6,9]]),
    FamilyDef::new("Hexatonic 7", 6, 7,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,4,6,7,11], &[0,2,4,5,9,10], &[0,2,3,7,8,10], &[0,1,5,6,8,10], &[0,4,5,7,9,11],
          &[0,1,3,5,7,8]]),
    FamilyDef::new("Hexatonic 8", 6, 8,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,4,6,9,11], &[0,2,4,7,9,10], &[0,2,5,7,8,10], &[0,3,5,6,8,10], &[0,2,3,5,7,9],
          &[0,1,3,5,7,10]]),
    FamilyDef::new("Hexatonic 9", 6, 9,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,4,7,8,11], &[0,2,5,6,9,10], &[0,3,4,7,8,10], &[0,1,4,5,7,9], &[0,3,4,6,8,11],
          &[0,1,3,5,8,9]]),
    FamilyDef::new("Hexatonic 10", 6, 10,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,5,6,8,11], &[0,3,4,6,9,10], &[0,1,3,6,7,9], &[0,2,5,6,8,11], &[0,3,4,6,9,10],
          &[0,1,3,6,7,9]]),
    FamilyDef::new("Hexatonic 11", 6, 11,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,5,7,9,11], &[0,3,5,7,9,10], &[0,2,4,6,7,9], &[0,2,4,5,7,10], &[0,2,3,5,8,10],
          &[0,1,3,6,8,10]]),
    FamilyDef::new("Hexatonic 12", 6, 12,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,3,4,7,9,11], &[0,1,4,6,8,9], &[0,3,5,7,8,11], &[0,2,4,5,8,9], &[0,2,3,6,7,10],
          &[0,1,4,5,8,10]]),
    FamilyDef::new("Hexatonic 13", 6, 13,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,3,5,6,9,11], &[0,2,3,6,8,9], &[0,1,4,6,7,10], &[0,3,5,6,9,11], &[0,2,3,6,8,9],
          &[0,1,4,6,7,10]]),
    FamilyDef::new("Hexatonic 14", 6, 14,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,4,7,9,11], &[0,2,5,7,9,10], &[0,3,5,7,8,10], &[0,2,4,5,7,9], &[0,2,3,5,7,10],
          &[0,1,3,5,8,10]]),
    FamilyDef::new("Hexatonic 15", 6, 15,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,5,6,9,11], &[0,3,4,7,9,10], &[0,1,4,6,7,9], &[0,3,5,6,8,11], &[0,2,3,5,8,9],
          &[0,1,3,6,7,10]]),
    FamilyDef::new("Hexatonic 16", 6, 16,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,5,7,8,11], &[0,3,5,6,9,10], &[0,2,3,6,7,9], &[0,1,4,5,7,10], &[0,3,4,6,9,11],
          &[0,1,3,6,8,9]]),
    FamilyDef::new("Hexatonic 17", 6, 17,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,3,4,7,8,11], &[0,1,4,5,8,9], &[0,3,4,7,8,11], &[0,1,4,5,8,9], &[0,3,4,7,8,11],
          &[0,1,4,5,8,9]]),
    FamilyDef::new("Hexatonic 18", 6, 18,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,6,8,11], &[0,2,5,7,10,11], &[0,3,5,8,9,10], &[0,2,5,6,7,9], &[0,3,4,5,7,10],
          &[0,1,2,4,7,9]]),
    FamilyDef::new("Hexatonic 19", 6, 19,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,4,5,8,11], &[0,3,4,7,10,11], &[0,1,4,7,8,9], &[0,3,6,7,8,11], &[0,3,4,5,8,9],
          &[0,1,2,5,6,9]]),
    FamilyDef::new("Hexatonic 20", 6, 20,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,4,6,7,11], &[0,3,5,6,10,11], &[0,2,3,7,8,9], &[0,1,5,6,7,10], &[0,4,5,6,9,11],
          &[0,1,2,5,7,8]]),
    FamilyDef::new("Hexatonic 21", 6, 21,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,4,6,9,11], &[0,3,5,8,10,11], &[0,2,5,7,8,9], &[0,3,5,6,7,10], &[0,2,3,4,7,9],
          &[0,1,2,5,7,10]]),
    FamilyDef::new("Hexatonic 22", 6, 22,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,4,7,8,11], &[0,3,6,7,10,11], &[0,3,4,7,8,9], &[0,1,4,5,6,9], &[0,3,4,5,8,11],
          &[0,1,2,5,8,9]]),
    FamilyDef::new("Hexatonic 23", 6, 23,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,5,6,8,11], &[0,4,5,7,10,11], &[0,1,3,6,7,8], &[0,2,5,6,7,11], &[0,3,4,5,9,10],
          &[0,1,2,6,7,9]]),
    FamilyDef::new("Hexatonic 24", 6, 24,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,5,8,11], &[0,1,3,6,9,10], &[0,2,5,8,9,11], &[0,3,6,7,9,10], &[0,3,4,6,7,9],
          &[0,1,3,4,6,9]]),
    FamilyDef::new("Hexatonic 25", 6, 25,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,6,7,11], &[0,1,4,5,9,10], &[0,3,4,8,9,11], &[0,1,5,6,8,9], &[0,4,5,7,8,11],
          &[0,1,3,4,7,8]]),
    FamilyDef::new("Hexatonic 26", 6, 26,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,6,9,11], &[0,1,4,7,9,10], &[0,3,6,8,9,11], &[0,3,5,6,8,9], &[0,2,3,5,6,9],
          &[0,1,3,4,7,10]]),
    FamilyDef::new("Hexatonic 27", 6, 27,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,7,8,11], &[0,1,5,6,9,10], &[0,4,5,8,9,11], &[0,1,4,5,7,8], &[0,3,4,6,7,11],
          &[0,1,3,4,8,9]]),
    FamilyDef::new("Hexatonic 28", 6, 28,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,4,5,7,11], &[0,2,3,5,9,10], &[0,1,3,7,8,10], &[0,2,6,7,9,11], &[0,4,5,7,9,10],
          &[0,1,3,5,6,8]]),
    FamilyDef::new("Hexatonic 29", 6, 29,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,4,5,9,11], &[0,2,3,7,9,10], &[0,1,5,7,8,10], &[0,4,6,7,9,11], &[0,2,3,5,7,8],
          &[0,1,3,5,6,10]]),
    FamilyDef::new("Hexatonic 30", 6, 30,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,5,7,11], &[0,2,4,6,10,11], &[0,2,4,8,9,10], &[0,2,6,7,8,10], &[0,4,5,6,8,10],
          &[0,1,2,4,6,8]]),
    FamilyDef::new("Hexatonic 31", 6, 31,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,5,8,11], &[0,2,4,7,10,11], &[0,2,5,8,9,10], &[0,3,6,7,8,10], &[0,3,4,5,7,9],
          &[0,1,2,4,6,9]]),
    FamilyDef::new("Hexatonic 32", 6, 32,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,6,7,11], &[0,2,5,6,10,11], &[0,3,4,8,9,10], &[0,1,5,6,7,9], &[0,4,5,6,8,11],
          &[0,1,2,4,7,8]]),
    FamilyDef::new("Hexatonic 33", 6, 33,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,6,9,11], &[0,2,5,8,10,11], &[0,3,6,8,9,10], &[0,3,5,6,7,9], &[0,2,3,4,6,9],
          &[0,1,2,4,7,10]]),
    FamilyDef::new("Hexatonic 34", 6, 34,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,7,8,11], &[0,2,6,7,10,11], &[0,4,5,8,9,10], &[0,1,4,5,6,8], &[0,3,4,5,7,11],
          &[0,1,2,4,8,9]]),
    FamilyDef::new("Hexatonic 35", 6, 35,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,4,5,7,11], &[0,3,4,6,10,11], &[0,1,3,7,8,9], &[0,2,6,7,8,11], &[0,4,5,6,9,10],
          &[0,1,2,5,6,8]]),
    FamilyDef::new("Hexatonic 36", 6, 36,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,4,5,9,11], &[0,3,4,8,10,11], &[0,1,5,7,8,9], &[0,4,6,7,8,11], &[0,2,3,4,7,8],
          &[0,1,2,5,6,10]]),
    FamilyDef::new("Hexatonic 37", 6, 37,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,4,7,9,11], &[0,3,6,8,10,11], &[0,3,5,7,8,9], &[0,2,4,5,6,9], &[0,2,3,4,7,10],
          &[0,1,2,5,8,10]]),
    FamilyDef::new("Hexatonic 38", 6, 38,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,5,6,7,11], &[0,4,5,6,10,11], &[0,1,2,6,7,8], &[0,1,5,6,7,11], &[0,4,5,6,10,11],
          &[0,1,2,6,7,8]]),
    FamilyDef::new("Hexatonic 39", 6, 39,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,5,6,9,11], &[0,4,5,8,10,11], &[0,1,4,6,7,8], &[0,3,5,6,7,11], &[0,2,3,4,8,9],
          &[0,1,2,6,7,10]]),
    FamilyDef::new("Hexatonic 40", 6, 40,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,5,7,8,11], &[0,4,6,7,10,11], &[0,2,3,6,7,8], &[0,1,4,5,6,10], &[0,3,4,5,9,11],
          &[0,1,2,6,8,9]]),
    FamilyDef::new("Hexatonic 41", 6, 41,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,5,7,9,11], &[0,4,6,8,10,11], &[0,2,4,6,7,8], &[0,2,4,5,6,10], &[0,2,3,4,8,10],
          &[0,1,2,6,8,10]]),
    FamilyDef::new("Hexatonic 42", 6, 42,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,5,7,11], &[0,1,3,5,9,10], &[0,2,4,8,9,11], &[0,2,6,7,9,10], &[0,4,5,7,8,10],
          &[0,1,3,4,6,8]]),
    FamilyDef::new("Hexatonic 43", 6, 43,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,5,9,11], &[0,1,3,7,9,10], &[0,2,6,8,9,11], &[0,4,6,7,9,10], &[0,2,3,5,6,8],
          &[0,1,3,4,6,10]]),
    FamilyDef::new("Hexatonic 44", 6, 44,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,7,9,11], &[0,1,5,7,9,10], &[0,4,6,8,9,11], &[0,2,4,5,7,8], &[0,2,3,5,6,10],
          &[0,1,3,4,8,10]]),
    FamilyDef::new("Hexatonic 45", 6, 45,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,5,7,11], &[0,1,4,6,10,11], &[0,3,5,9,10,11], &[0,2,6,7,8,9], &[0,4,5,6,7,10],
          &[0,1,2,3,6,8]]),
    FamilyDef::new("Hexatonic 46", 6, 46,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,6,8,11], &[0,1,5,7,10,11], &[0,4,6,9,10,11], &[0,2,5,6,7,8], &[0,3,4,5,6,10],
          &[0,1,2,3,7,9]]),
    FamilyDef::new("Hexatonic 47", 6, 47,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,4,7,11], &[0,2,3,6,10,11], &[0,1,4,8,9,10], &[0,3,7,8,9,11], &[0,4,5,6,8,9],
          &[0,1,2,4,5,8]]),
    FamilyDef::new("Hexatonic 48", 6, 48,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,5,6,11], &[0,2,4,5,10,11], &[0,2,3,8,9,10], &[0,1,6,7,8,10], &[0,5,6,7,9,11],
          &[0,1,2,4,6,7]]),
    FamilyDef::new("Hexatonic 49", 6, 49,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,4,8,11], &[0,1,2,6,9,10], &[0,1,5,8,9,11], &[0,4,7,8,10,11], &[0,3,4,6,7,8],
          &[0,1,3,4,5,9]]),
    FamilyDef::new("Hexatonic 50", 6, 50,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,4,5,6,11], &[0,2,3,4,9,10], &[0,1,2,7,8,10], &[0,1,6,7,9,11], &[0,5,6,8,10,11],
          &[0,1,3,5,6,7]]),
    FamilyDef::new("Hexatonic 51", 6, 51,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,5,8,11], &[0,1,4,7,10,11], &[0,3,6,9,10,11], &[0,3,6,7,8,9], &[0,3,4,5,6,9],
          &[0,1,2,3,6,9]]),
    FamilyDef::new("Hexatonic 52", 6, 52,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,6,7,11], &[0,1,5,6,10,11], &[0,4,5,9,10,11], &[0,1,5,6,7,8], &[0,4,5,6,7,11],
          &[0,1,2,3,7,8]]),
    FamilyDef::new("Hexatonic 53", 6, 53,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,4,8,11], &[0,2,3,7,10,11], &[0,1,5,8,9,10], &[0,4,7,8,9,11], &[0,3,4,5,7,8],
          &[0,1,2,4,5,9]]),
    FamilyDef::new("Hexatonic 54", 6, 54,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,5,9,11], &[0,2,4,8,10,11], &[0,2,6,8,9,10], &[0,4,6,7,8,10], &[0,2,3,4,6,8],
          &[0,1,2,4,6,10]]),
    FamilyDef::new("Hexatonic 55", 6, 55,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,7,9,11], &[0,2,6,8,10,11], &[0,4,6,8,9,10], &[0,2,4,5,6,8], &[0,2,3,4,6,10],
          &[0,1,2,4,8,10]]),
    FamilyDef::new("Hexatonic 56", 6, 56,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,4,5,6,11], &[0,3,4,5,10,11], &[0,1,2,7,8,9], &[0,1,6,7,8,11], &[0,5,6,7,10,11],
          &[0,1,2,5,6,7]]),
    FamilyDef::new("Hexatonic 57", 6, 57,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,4,7,11], &[0,1,2,5,9,10], &[0,1,4,8,9,11], &[0,3,7,8,10,11], &[0,4,5,7,8,9],
          &[0,1,3,4,5,8]]),
    FamilyDef::new("Hexatonic 58", 6, 58,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,5,6,11], &[0,1,3,4,9,10], &[0,2,3,8,9,11], &[0,1,6,7,9,10], &[0,5,6,8,9,11],
          &[0,1,3,4,6,7]]),
    FamilyDef::new("Hexatonic 59", 6, 59,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,4,7,11], &[0,1,3,6,10,11], &[0,2,5,9,10,11], &[0,3,7,8,9,10], &[0,4,5,6,7,9],
          &[0,1,2,3,5,8]]),
    FamilyDef::new("Hexatonic 60", 6, 60,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,5,6,11], &[0,1,4,5,10,11], &[0,3,4,9,10,11], &[0,1,6,7,8,9], &[0,5,6,7,8,11],
          &[0,1,2,3,6,7]]),
    FamilyDef::new("Hexatonic 61", 6, 61,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,6,9,11], &[0,1,5,8,10,11], &[0,4,7,9,10,11], &[0,3,5,6,7,8], &[0,2,3,4,5,9],
          &[0,1,2,3,7,10]]),
    FamilyDef::new("Hexatonic 62", 6, 62,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,7,8,11], &[0,1,6,7,10,11], &[0,5,6,9,10,11], &[0,1,4,5,6,7], &[0,3,4,5,6,11],
          &[0,1,2,3,8,9]]),
    FamilyDef::new("Hexatonic 63", 6, 63,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,4,6,11], &[0,2,3,5,10,11], &[0,1,3,8,9,10], &[0,2,7,8,9,11], &[0,5,6,7,9,10],
          &[0,1,2,4,5,7]]),
    FamilyDef::new("Hexatonic 64", 6, 64,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,4,5,10], &[0,2,3,4,9,11], &[0,1,2,7,9,10], &[0,1,6,8,9,11], &[0,5,7,8,10,11],
          &[0,2,3,5,6,7]]),
    FamilyDef::new("Hexatonic 65", 6, 65,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,3,7,11], &[0,1,2,6,10,11], &[0,1,5,9,10,11], &[0,4,8,9,10,11],
          &[0,4,5,6,7,8], &[0,1,2,3,4,8]]),
    FamilyDef::new("Hexatonic 66", 6, 66,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,4,6,11], &[0,1,3,5,10,11], &[0,2,4,9,10,11], &[0,2,7,8,9,10],
          &[0,5,6,7,8,10], &[0,1,2,3,5,7]]),
    FamilyDef::new("Hexatonic 67", 6, 67,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,4,8,11], &[0,1,3,7,10,11], &[0,2,6,9,10,11], &[0,4,7,8,9,10], &[0,3,4,5,6,8],
          &[0,1,2,3,5,9]]),
    FamilyDef::new("Hexatonic 68", 6, 68,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,5,9,11], &[0,1,4,8,10,11], &[0,3,7,9,10,11], &[0,4,6,7,8,9], &[0,2,3,4,5,8],
          &[0,1,2,3,6,10]]),
    FamilyDef::new("Hexatonic 69", 6, 69,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,7,9,11], &[0,1,6,8,10,11], &[0,5,7,9,10,11], &[0,2,4,5,6,7], &[0,2,3,4,5,10],
          &[0,1,2,3,8,10]]),
    FamilyDef::new("Hexatonic 70", 6, 70,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,4,5,11], &[0,2,3,4,10,11], &[0,1,2,8,9,10], &[0,1,7,8,9,11],
          &[0,6,7,8,10,11], &[0,1,2,4,5,6]]),
    FamilyDef::new("Hexatonic 71", 6, 71,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,3,4,9,11], &[0,2,3,8,10,11], &[0,1,6,8,9,10], &[0,5,7,8,9,11], &[0,2,3,4,6,7],
          &[0,1,2,4,5,10]]),
    FamilyDef::new("Hexatonic 72", 6, 72,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,4,6,11], &[0,1,2,4,9,10], &[0,1,3,8,9,11], &[0,2,7,8,10,11], &[0,5,6,8,9,10],
          &[0,1,3,4,5,7]]),
    FamilyDef::new("Hexatonic 73", 6, 73,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,3,6,11], &[0,1,2,5,10,11], &[0,1,4,9,10,11], &[0,3,8,9,10,11],
          &[0,5,6,7,8,9], &[0,1,2,3,4,7]]),
    FamilyDef::new("Hexatonic 74", 6, 74,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,3,8,11], &[0,1,2,7,10,11], &[0,1,6,9,10,11], &[0,5,8,9,10,11],
          &[0,3,4,5,6,7], &[0,1,2,3,4,9]]),
    FamilyDef::new("Hexatonic 75", 6, 75,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,4,5,11], &[0,1,3,4,10,11], &[0,2,3,9,10,11], &[0,1,7,8,9,10],
          &[0,6,7,8,9,11], &[0,1,2,3,5,6]]),
    FamilyDef::new("Hexatonic 76", 6, 76,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,4,9,11], &[0,1,3,8,10,11], &[0,2,7,9,10,11], &[0,5,7,8,9,10], &[0,2,3,4,5,7],
          &[0,1,2,3,5,10]]),
    FamilyDef::new("Hexatonic 77", 6, 77,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,2,3,4,5,11], &[0,1,2,3,9,10], &[0,1,2,8,9,11], &[0,1,7,8,10,11],
          &[0,6,7,9,10,11], &[0,1,3,4,5,6]]),
    FamilyDef::new("Hexatonic 78", 6, 78,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,3,5,11], &[0,1,2,4,10,11], &[0,1,3,9,10,11], &[0,2,8,9,10,11],
          &[0,6,7,8,9,10], &[0,1,2,3,4,6]]),
    FamilyDef::new("Hexatonic 79", 6, 79,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,3,9,11], &[0,1,2,8,10,11], &[0,1,7,9,10,11], &[0,6,8,9,10,11],
          &[0,2,3,4,5,6], &[0,1,2,3,4,10]]),
    FamilyDef::new("Hexatonic 80", 6, 80,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6"],
        &[&[0,1,2,3,4,11], &[0,1,2,3,10,11], &[0,1,2,9,10,11], &[0,1,8,9,10,11],
          &[0,7,8,9,10,11], &[0,1,2,3,4,5]]),
    // ── 7 notes ───────────────────────────────────────────────────────────────
    FamilyDef::new("Major", 7, 1,
        &["Ionian", "Dorian", "Phrygian", "Lydian", "Mixolydian", "Aeolian", "Locrian"],
        &[&[0,2,4,5,7,9,11], &[0,2,3,5,7,9,10], &[0,1,3,5,7,8,10], &[0,2,4,6,7,9,11],
          &[0,2,4,5,7,9,10], &[0,2,3,5,7,8,10], &[0,1,3,5,6,8,10]]),
    FamilyDef::new("Melodic Minor", 7, 2,
        &["Melodic Minor", "Dorian ♭2", "Lydian Augmented", "Lydian Dominant", "Mixolydian ♭6",
          "Locrian ♮2", "Altered"],
        &[&[0,2,3,5,7,9,11], &[0,1,3,5,7,9,10], &[0,2,4,6,8,9,11], &[0,2,4,6,7,9,10],
          &[0,2,4,5,7,8,10], &[0,2,3,5,6,8,10], &[0,1,3,4,6,8,10]]),
    FamilyDef::new("Harmonic Minor", 7, 3,
        &["Harmonic Minor", "Locrian ♮6", "Ionian Augmented", "Dorian ♯4", "Phrygian Dominant",
          "Lydian +2", "Altered o7"],
        &[&[0,2,3,5,7,8,11], &[0,1,3,5,6,9,10], &[0,2,4,5,8,9,11], &[0,2,3,6,7,9,10],
          &[0,1,4,5,7,8,10], &[0,3,4,6,7,9,11], &[0,1,3,4,6,8,9]]),
    FamilyDef::new("Harmonic Major", 7, 4,
        &["Harmonic Major", "Dorian ♭5", "Phrygian ♭4", "Lydian ♭3", "Mixolydian ♭2",
          "Lydian Augmented +2", "Locrian o7"],
        &[&[0,2,4,5,7,8,11], &[0,2,3,5,6,9,10], &[0,1,3,4,7,8,10], &[0,2,3,6,7,9,11],
          &[0,1,4,5,7,9,10], &[0,3,4,6,8,9,11], &[0,1,3,5,6,8,9]]),
    FamilyDef::new("Neopolitan Major", 7, 5,
        &["Neopolitan Major", "Lydian Augmented +6", "Lydian Augmented b7", "Lydian b6 b7",
          "Locrian ♮2 ♮3", "Atlered ♮2", "Altered o3"],
        &[&[0,1,3,5,7,9,11], &[0,2,4,6,8,10,11], &[0,2,4,6,8,9,10], &[0,2,4,6,7,8,10],
          &[0,2,4,5,6,8,10], &[0,2,3,4,6,8,10], &[0,1,2,4,6,8,10]]),
    FamilyDef::new("Neopolitan Minor", 7, 6,
        &["Neopolitan Minor", "Lydian +6", "Mixolydian Augmented", "Aeolian #4",
          "Locrian Dominant", "Ionian +2", "Altered o3 o7"],
        &[&[0,1,3,5,7,8,11], &[0,2,4,6,7,10,11], &[0,2,4,5,8,9,10], &[0,2,3,6,7,8,10],
          &[0,1,4,5,6,8,10], &[0,3,4,5,7,9,11], &[0,1,2,4,6,8,9]]),
    FamilyDef::new("Ionian b2", 7, 7,
        &["Ionian b2", "Lydian Augmented +2 +6", "Phrygian o7", "Harmonic Lydian",
          "Mixolydian b5", "Aeolian b4", "Locrian o3"],
        &[&[0,1,4,5,7,9,11], &[0,3,4,6,8,10,11], &[0,1,3,5,7,8,9], &[0,2,4,6,7,8,11],
          &[0,2,4,5,6,9,10], &[0,2,3,4,7,8,10], &[0,1,2,5,6,8,10]]),
    FamilyDef::new("Double Harmonic", 7, 8,
        &["Double Harmonic", "Lydian +2 +6", "Phrygian b4 o7", "Lydian b3 b6", "Locrian ♮3 ♮6",
          "Ionian Augmented +2", "Locrian o3 o7"],
        &[&[0,1,4,5,7,8,11], &[0,3,4,6,7,10,11], &[0,1,3,4,7,8,9], &[0,2,3,6,7,8,11],
          &[0,1,4,5,6,9,10], &[0,3,4,5,8,9,11], &[0,1,2,5,6,8,9]]),
    FamilyDef::new("Heptatonic 9", 7, 9,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,2,3,5,6,8,11], &[0,1,3,4,6,9,10], &[0,2,3,5,8,9,11], &[0,1,3,6,7,9,10],
          &[0,2,5,6,8,9,11], &[0,3,4,6,7,9,10], &[0,1,3,4,6,7,9]]),
    FamilyDef::new("Heptatonic 10", 7, 10,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,4,6,7,9,10], &[0,3,5,6,8,9,11], &[0,2,3,5,6,8,9], &[0,1,3,4,6,7,10],
          &[0,2,3,5,6,9,11], &[0,1,3,4,7,9,10], &[0,2,3,6,8,9,11]]),
    FamilyDef::new("Harmonic Locrian", 7, 11,
        &["Harmonic Locrian", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,3,5,6,8,11], &[0,2,4,5,7,10,11], &[0,2,3,5,8,9,10], &[0,1,3,6,7,8,10],
          &[0,2,5,6,7,9,11], &[0,3,4,5,7,9,10], &[0,1,2,4,6,7,9]]),
    FamilyDef::new("Lydian b2", 7, 12,
        &["Lydian b2", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,4,6,7,9,11], &[0,3,5,6,8,10,11], &[0,2,3,5,7,8,9], &[0,1,3,5,6,7,10],
          &[0,2,4,5,6,9,11], &[0,2,3,4,7,9,10], &[0,1,2,5,7,8,10]]),
    FamilyDef::new("Melodic Locrian", 7, 13,
        &["Melodic Locrian", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,3,5,6,9,11], &[0,2,4,5,8,10,11], &[0,2,3,6,8,9,10], &[0,1,4,6,7,8,10],
          &[0,3,5,6,7,9,11], &[0,2,3,4,6,8,9], &[0,1,2,4,6,7,10]]),
    FamilyDef::new("Lydian b2 b3", 7, 14,
        &["Lydian b2 b3", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,3,6,7,9,11], &[0,2,5,6,8,10,11], &[0,3,4,6,8,9,10], &[0,1,3,5,6,7,9],
          &[0,2,4,5,6,8,11], &[0,2,3,4,6,9,10], &[0,1,2,4,7,8,10]]),
    FamilyDef::new("Harmonic Altered", 7, 15,
        &["Harmonic Altered", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,3,4,6,8,11], &[0,2,3,5,7,10,11], &[0,1,3,5,8,9,10], &[0,2,4,7,8,9,11],
          &[0,2,5,6,7,9,10], &[0,3,4,5,7,8,10], &[0,1,2,4,5,7,9]]),
    FamilyDef::new("Lydian Augmented b2", 7, 16,
        &["Lydian Augmented b2", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,4,6,8,9,11], &[0,3,5,7,8,10,11], &[0,2,4,5,7,8,9], &[0,2,3,5,6,7,10],
          &[0,1,3,4,5,8,10], &[0,2,3,4,7,9,11], &[0,1,2,5,7,9,10]]),
    FamilyDef::new("Heptatonic 17", 7, 17,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,4,5,6,8,11], &[0,3,4,5,7,10,11], &[0,1,2,4,7,8,9], &[0,1,3,6,7,8,11],
          &[0,2,5,6,7,10,11], &[0,3,4,5,8,9,10], &[0,1,2,5,6,7,9]]),
    FamilyDef::new("Heptatonic 18", 7, 18,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,4,6,7,8,11], &[0,3,5,6,7,10,11], &[0,2,3,4,7,8,9], &[0,1,2,5,6,7,10],
          &[0,1,4,5,6,9,11], &[0,3,4,5,8,10,11], &[0,1,2,5,7,8,9]]),
    FamilyDef::new("Heptatonic 19", 7, 19,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,3,4,7,8,11], &[0,2,3,6,7,10,11], &[0,1,4,5,8,9,10], &[0,3,4,7,8,9,11],
          &[0,1,4,5,6,8,9], &[0,3,4,5,7,8,11], &[0,1,2,4,5,8,9]]),
    FamilyDef::new("Heptatonic 20", 7, 20,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,4,5,8,9,11], &[0,3,4,7,8,10,11], &[0,1,4,5,7,8,9], &[0,3,4,6,7,8,11],
          &[0,1,3,4,5,8,9], &[0,2,3,4,7,8,11], &[0,1,2,5,6,9,10]]),
    FamilyDef::new("Heptatonic 21", 7, 21,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,2,3,4,6,8,11], &[0,1,2,4,6,9,10], &[0,1,3,5,8,9,11], &[0,2,4,7,8,10,11],
          &[0,2,5,6,8,9,10], &[0,3,4,6,7,8,10], &[0,1,3,4,5,7,9]]),
    FamilyDef::new("Heptatonic 22", 7, 22,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,4,6,8,9,10], &[0,3,5,7,8,9,11], &[0,2,4,5,6,8,9], &[0,2,3,4,6,7,10],
          &[0,1,2,4,5,8,10], &[0,1,3,4,7,9,11], &[0,2,3,6,8,10,11]]),
    FamilyDef::new("Heptatonic 23", 7, 23,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,5,6,8,11], &[0,1,4,5,7,10,11], &[0,3,4,6,9,10,11], &[0,1,3,6,7,8,9],
          &[0,2,5,6,7,8,11], &[0,3,4,5,6,9,10], &[0,1,2,3,6,7,9]]),
    FamilyDef::new("Heptatonic 24", 7, 24,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,4,6,7,10,11], &[0,3,5,6,9,10,11], &[0,2,3,6,7,8,9], &[0,1,4,5,6,7,10],
          &[0,3,4,5,6,9,11], &[0,1,2,3,6,8,9], &[0,1,2,5,7,8,11]]),
    FamilyDef::new("Heptatonic 25", 7, 25,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,2,3,4,8,9,10], &[0,1,2,6,7,8,10], &[0,1,5,6,7,9,11], &[0,4,5,6,8,10,11],
          &[0,1,2,4,6,7,8], &[0,1,3,5,6,7,11], &[0,2,4,5,6,10,11]]),
    FamilyDef::new("Heptatonic 26", 7, 26,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,4,6,8,11], &[0,1,3,5,7,10,11], &[0,2,4,6,9,10,11], &[0,2,4,7,8,9,10],
          &[0,2,5,6,7,8,10], &[0,3,4,5,6,8,10], &[0,1,2,3,5,7,9]]),
    FamilyDef::new("Enigmatic", 7, 27,
        &["Enigmatic", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,4,6,8,10,11], &[0,3,5,7,9,10,11], &[0,2,4,6,7,8,9], &[0,2,4,5,6,7,10],
          &[0,2,3,4,5,8,10], &[0,1,2,3,6,8,10], &[0,1,2,5,7,9,11]]),
    FamilyDef::new("Heptatonic 28", 7, 28,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,3,4,6,9,11], &[0,2,3,5,8,10,11], &[0,1,3,6,8,9,10], &[0,2,5,7,8,9,11],
          &[0,3,5,6,7,9,10], &[0,2,3,4,6,7,9], &[0,1,2,4,5,7,10]]),
    FamilyDef::new("Heptatonic 29", 7, 29,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,3,6,8,9,11], &[0,2,5,7,8,10,11], &[0,3,5,6,8,9,10], &[0,2,3,5,6,7,9],
          &[0,1,3,4,5,7,10], &[0,2,3,4,6,9,11], &[0,1,2,4,7,9,10]]),
    FamilyDef::new("Heptatonic 30", 7, 30,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,3,4,6,7,11], &[0,2,3,5,6,10,11], &[0,1,3,4,8,9,10], &[0,2,3,7,8,9,11],
          &[0,1,5,6,7,9,10], &[0,4,5,6,8,9,11], &[0,1,2,4,5,7,8]]),
    FamilyDef::new("Heptatonic 31", 7, 31,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,5,6,8,9,11], &[0,4,5,7,8,10,11], &[0,1,3,4,6,7,8], &[0,2,3,5,6,7,11],
          &[0,1,3,4,5,9,10], &[0,2,3,4,8,9,11], &[0,1,2,6,7,9,10]]),
    FamilyDef::new("Heptatonic 32", 7, 32,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,3,4,5,7,8,9], &[0,1,2,4,5,6,9], &[0,1,3,4,5,8,11], &[0,2,3,4,7,10,11],
          &[0,1,2,5,8,9,10], &[0,1,4,7,8,9,11], &[0,3,6,7,8,10,11]]),
    FamilyDef::new("Heptatonic 33", 7, 33,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,4,7,8,11], &[0,1,3,6,7,10,11], &[0,2,5,6,9,10,11], &[0,3,4,7,8,9,10],
          &[0,1,4,5,6,7,9], &[0,3,4,5,6,8,11], &[0,1,2,3,5,8,9]]),
    FamilyDef::new("Heptatonic 34", 7, 34,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,4,5,8,10,11], &[0,3,4,7,9,10,11], &[0,1,4,6,7,8,9], &[0,3,5,6,7,8,11],
          &[0,2,3,4,5,8,9], &[0,1,2,3,6,7,10], &[0,1,2,5,6,9,11]]),
    FamilyDef::new("Heptatonic 35", 7, 35,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,4,6,7,11], &[0,1,3,5,6,10,11], &[0,2,4,5,9,10,11], &[0,2,3,7,8,9,10],
          &[0,1,5,6,7,8,10], &[0,4,5,6,7,9,11], &[0,1,2,3,5,7,8]]),
    FamilyDef::new("Heptatonic 36", 7, 36,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,5,6,8,10,11], &[0,4,5,7,9,10,11], &[0,1,3,5,6,7,8], &[0,2,4,5,6,7,11],
          &[0,2,3,4,5,9,10], &[0,1,2,3,7,8,10], &[0,1,2,6,7,9,11]]),
    FamilyDef::new("Heptatonic 37", 7, 37,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,3,4,8,9,11], &[0,2,3,7,8,10,11], &[0,1,5,6,8,9,10], &[0,4,5,7,8,9,11],
          &[0,1,3,4,5,7,8], &[0,2,3,4,6,7,11], &[0,1,2,4,5,9,10]]),
    FamilyDef::new("Heptatonic 38", 7, 38,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,5,6,7,11], &[0,1,4,5,6,10,11], &[0,3,4,5,9,10,11], &[0,1,2,6,7,8,9],
          &[0,1,5,6,7,8,11], &[0,4,5,6,7,10,11], &[0,1,2,3,6,7,8]]),
    FamilyDef::new("Heptatonic 39", 7, 39,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,5,6,7,10,11], &[0,4,5,6,9,10,11], &[0,1,2,5,6,7,8], &[0,1,4,5,6,7,11],
          &[0,3,4,5,6,10,11], &[0,1,2,3,7,8,9], &[0,1,2,6,7,8,11]]),
    FamilyDef::new("Heptatonic 40", 7, 40,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,4,5,8,11], &[0,1,3,4,7,10,11], &[0,2,3,6,9,10,11], &[0,1,4,7,8,9,10],
          &[0,3,6,7,8,9,11], &[0,3,4,5,6,8,9], &[0,1,2,3,5,6,9]]),
    FamilyDef::new("Heptatonic 41", 7, 41,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,4,7,8,10,11], &[0,3,6,7,9,10,11], &[0,3,4,6,7,8,9], &[0,1,3,4,5,6,9],
          &[0,2,3,4,5,8,11], &[0,1,2,3,6,9,10], &[0,1,2,5,8,9,11]]),
    FamilyDef::new("Heptatonic 42", 7, 42,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,5,7,10,11], &[0,1,4,6,9,10,11], &[0,3,5,8,9,10,11], &[0,2,5,6,7,8,9],
          &[0,3,4,5,6,7,10], &[0,1,2,3,4,7,9], &[0,1,2,3,6,8,11]]),
    FamilyDef::new("Heptatonic 43", 7, 43,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,4,6,9,11], &[0,1,3,5,8,10,11], &[0,2,4,7,9,10,11], &[0,2,5,7,8,9,10],
          &[0,3,5,6,7,8,10], &[0,2,3,4,5,7,9], &[0,1,2,3,5,7,10]]),
    FamilyDef::new("Heptatonic 44", 7, 44,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,3,6,8,10,11], &[0,2,5,7,9,10,11], &[0,3,5,7,8,9,10], &[0,2,4,5,6,7,9],
          &[0,2,3,4,5,7,10], &[0,1,2,3,5,8,10], &[0,1,2,4,7,9,11]]),
    FamilyDef::new("Heptatonic 45", 7, 45,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,3,4,5,7,11], &[0,2,3,4,6,10,11], &[0,1,2,4,8,9,10], &[0,1,3,7,8,9,11],
          &[0,2,6,7,8,10,11], &[0,4,5,6,8,9,10], &[0,1,2,4,5,6,8]]),
    FamilyDef::new("Heptatonic 46", 7, 46,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,5,7,8,9,11], &[0,4,6,7,8,10,11], &[0,2,3,4,6,7,8], &[0,1,2,4,5,6,10],
          &[0,1,3,4,5,9,11], &[0,2,3,4,8,10,11], &[0,1,2,6,8,9,10]]),
    FamilyDef::new("Heptatonic 47", 7, 47,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,4,5,7,11], &[0,1,3,4,6,10,11], &[0,2,3,5,9,10,11], &[0,1,3,7,8,9,10],
          &[0,2,6,7,8,9,11], &[0,4,5,6,7,9,10], &[0,1,2,3,5,6,8]]),
    FamilyDef::new("Heptatonic 48", 7, 48,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,5,7,8,10,11], &[0,4,6,7,9,10,11], &[0,2,3,5,6,7,8], &[0,1,3,4,5,6,10],
          &[0,2,3,4,5,9,11], &[0,1,2,3,7,9,10], &[0,1,2,6,8,9,11]]),
    FamilyDef::new("Heptatonic 49", 7, 49,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,3,6,7,11], &[0,1,2,5,6,10,11], &[0,1,4,5,9,10,11], &[0,3,4,8,9,10,11],
          &[0,1,5,6,7,8,9], &[0,4,5,6,7,8,11], &[0,1,2,3,4,7,8]]),
    FamilyDef::new("Heptatonic 50", 7, 50,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,5,6,9,10,11], &[0,4,5,8,9,10,11], &[0,1,4,5,6,7,8], &[0,3,4,5,6,7,11],
          &[0,1,2,3,4,8,9], &[0,1,2,3,7,8,11], &[0,1,2,6,7,10,11]]),
    FamilyDef::new("Heptatonic 51", 7, 51,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,4,5,9,11], &[0,1,3,4,8,10,11], &[0,2,3,7,9,10,11], &[0,1,5,7,8,9,10],
          &[0,4,6,7,8,9,11], &[0,2,3,4,5,7,8], &[0,1,2,3,5,6,10]]),
    FamilyDef::new("Heptatonic 52", 7, 52,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,3,7,8,10,11], &[0,2,6,7,9,10,11], &[0,4,5,7,8,9,10], &[0,1,3,4,5,6,8],
          &[0,2,3,4,5,7,11], &[0,1,2,3,5,9,10], &[0,1,2,4,8,9,11]]),
    FamilyDef::new("Heptatonic 53", 7, 53,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,3,5,8,11], &[0,1,2,4,7,10,11], &[0,1,3,6,9,10,11], &[0,2,5,8,9,10,11],
          &[0,3,6,7,8,9,10], &[0,3,4,5,6,7,9], &[0,1,2,3,4,6,9]]),
    FamilyDef::new("Heptatonic 54", 7, 54,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,4,7,9,10,11], &[0,3,6,8,9,10,11], &[0,3,5,6,7,8,9], &[0,2,3,4,5,6,9],
          &[0,1,2,3,4,7,10], &[0,1,2,3,6,9,11], &[0,1,2,5,8,10,11]]),
    FamilyDef::new("Heptatonic 55", 7, 55,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,3,5,7,11], &[0,1,2,4,6,10,11], &[0,1,3,5,9,10,11], &[0,2,4,8,9,10,11],
          &[0,2,6,7,8,9,10], &[0,4,5,6,7,8,10], &[0,1,2,3,4,6,8]]),
    FamilyDef::new("Heptatonic 56", 7, 56,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,5,7,9,10,11], &[0,4,6,8,9,10,11], &[0,2,4,5,6,7,8], &[0,2,3,4,5,6,10],
          &[0,1,2,3,4,8,10], &[0,1,2,3,7,9,11], &[0,1,2,6,8,10,11]]),
    FamilyDef::new("Heptatonic 57", 7, 57,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,4,5,6,11], &[0,1,3,4,5,10,11], &[0,2,3,4,9,10,11], &[0,1,2,7,8,9,10],
          &[0,1,6,7,8,9,11], &[0,5,6,7,8,10,11], &[0,1,2,3,5,6,7]]),
    FamilyDef::new("Heptatonic 58", 7, 58,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,6,7,8,10,11], &[0,5,6,7,9,10,11], &[0,1,2,4,5,6,7], &[0,1,3,4,5,6,11],
          &[0,2,3,4,5,10,11], &[0,1,2,3,8,9,10], &[0,1,2,7,8,9,11]]),
    FamilyDef::new("Heptatonic 59", 7, 59,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,4,8,10,11], &[0,1,3,7,9,10,11], &[0,2,6,8,9,10,11], &[0,4,6,7,8,9,10],
          &[0,2,3,4,5,6,8], &[0,1,2,3,4,6,10], &[0,1,2,3,5,9,11]]),
    FamilyDef::new("Heptatonic 60", 7, 60,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,3,5,6,11], &[0,1,2,4,5,10,11], &[0,1,3,4,9,10,11], &[0,2,3,8,9,10,11],
          &[0,1,6,7,8,9,10], &[0,5,6,7,8,9,11], &[0,1,2,3,4,6,7]]),
    FamilyDef::new("Heptatonic 61", 7, 61,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,6,7,9,10,11], &[0,5,6,8,9,10,11], &[0,1,3,4,5,6,7], &[0,2,3,4,5,6,11],
          &[0,1,2,3,4,9,10], &[0,1,2,3,8,9,11], &[0,1,2,7,8,10,11]]),
    FamilyDef::new("Heptatonic 62", 7, 62,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,3,4,7,11], &[0,1,2,3,6,10,11], &[0,1,2,5,9,10,11], &[0,1,4,8,9,10,11],
          &[0,3,7,8,9,10,11], &[0,4,5,6,7,8,9], &[0,1,2,3,4,5,8]]),
    FamilyDef::new("Heptatonic 63", 7, 63,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,5,8,9,10,11], &[0,4,7,8,9,10,11], &[0,3,4,5,6,7,8], &[0,1,2,3,4,5,9],
          &[0,1,2,3,4,8,11], &[0,1,2,3,7,10,11], &[0,1,2,6,9,10,11]]),
    FamilyDef::new("Heptatonic 64", 7, 64,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,3,4,6,11], &[0,1,2,3,5,10,11], &[0,1,2,4,9,10,11], &[0,1,3,8,9,10,11],
          &[0,2,7,8,9,10,11], &[0,5,6,7,8,9,10], &[0,1,2,3,4,5,7]]),
    FamilyDef::new("Heptatonic 65", 7, 65,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,6,8,9,10,11], &[0,5,7,8,9,10,11], &[0,2,3,4,5,6,7], &[0,1,2,3,4,5,10],
          &[0,1,2,3,4,9,11], &[0,1,2,3,8,10,11], &[0,1,2,7,9,10,11]]),
    FamilyDef::new("Heptachromatic", 7, 66,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7"],
        &[&[0,1,2,3,9,10,11], &[0,1,2,8,9,10,11], &[0,1,7,8,9,10,11], &[0,6,7,8,9,10,11],
          &[0,1,2,3,4,5,6], &[0,1,2,3,4,5,11], &[0,1,2,3,4,10,11]]),
    // ── 8 notes ───────────────────────────────────────────────────────────────
    FamilyDef::new("Octatonic", 8, 1,
        &["Whole Half", "Half Whole", "Whole Half", "Half Whole", "Whole Half", "Half Whole",
          "Whole Half", "Half Whole"],
        &[&[0,2,3,5,6,8,9,11], &[0,1,3,4,6,7,9,10], &[0,2,3,5,6,8,9,11], &[0,1,3,4,6,7,9,10],
          &[0,2,3,5,6,8,9,11], &[0,1,3,4,6,7,9,10], &[0,2,3,5,6,8,9,11], &[0,1,3,4,6,7,9,10]]),
    FamilyDef::new("Bebop Major", 8, 2,
        &["Mode 1", "Bebop Natural Minor", "Mode 3", "Bebop Major", "Mode 5", "Mode 6",
          "Mode 7", "Mode 8"],
        &[&[0,1,3,4,6,8,9,11], &[0,2,3,5,7,8,10,11], &[0,1,3,5,6,8,9,10], &[0,2,4,5,7,8,9,11],
          &[0,2,3,5,6,7,9,10], &[0,1,3,4,5,7,8,10], &[0,2,3,4,6,7,9,11], &[0,1,2,4,5,7,9,10]]),
    FamilyDef::new("Octatonic 3", 8, 3,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,3,5,6,7,9,11], &[0,2,4,5,6,8,10,11], &[0,2,3,4,6,8,9,10], &[0,1,2,4,6,7,8,10],
          &[0,1,3,5,6,7,9,11], &[0,2,4,5,6,8,10,11], &[0,2,3,4,6,8,9,10], &[0,1,2,4,6,7,8,10]]),
    FamilyDef::new("Bebop Melodic Minor", 8, 4,
        &["Mode 1", "Mode 2", "Mode 3", "Bebop Melodic Minor", "Mode 5", "Mode 6", "Mode 7",
          "Mode 8"],
        &[&[0,1,3,4,6,7,9,11], &[0,2,3,5,6,8,10,11], &[0,1,3,4,6,8,9,10], &[0,2,3,5,7,8,9,11],
          &[0,1,3,5,6,7,9,10], &[0,2,4,5,6,8,9,11], &[0,2,3,4,6,7,9,10], &[0,1,2,4,5,7,8,10]]),
    FamilyDef::new("Octatonic 5", 8, 5,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,3,5,6,8,9,11], &[0,2,4,5,7,8,10,11], &[0,2,3,5,6,8,9,10], &[0,1,3,4,6,7,8,10],
          &[0,2,3,5,6,7,9,11], &[0,1,3,4,5,7,9,10], &[0,2,3,4,6,8,9,11], &[0,1,2,4,6,7,9,10]]),
    FamilyDef::new("Bebop Dominant", 8, 6,
        &["Mode 1", "Mode 2", "Bebop Dominant", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,4,5,7,8,11], &[0,1,3,4,6,7,10,11], &[0,2,3,5,6,9,10,11], &[0,1,3,4,7,8,9,10],
          &[0,2,3,6,7,8,9,11], &[0,1,4,5,6,7,9,10], &[0,3,4,5,6,8,9,11], &[0,1,2,3,5,6,8,9]]),
    FamilyDef::new("Bebop Dorian (b4)", 8, 7,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Bebop Dorian (b4)",
          "Mode 8"],
        &[&[0,1,2,4,6,7,9,11], &[0,1,3,5,6,8,10,11], &[0,2,4,5,7,9,10,11], &[0,2,3,5,7,8,9,10],
          &[0,1,3,5,6,7,8,10], &[0,2,4,5,6,7,9,11], &[0,2,3,4,5,7,9,10], &[0,1,2,3,5,7,8,10]]),
    FamilyDef::new("Octatonic 8", 8, 8,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,5,6,8,9,11], &[0,1,4,5,7,8,10,11], &[0,3,4,6,7,9,10,11], &[0,1,3,4,6,7,8,9],
          &[0,2,3,5,6,7,8,11], &[0,1,3,4,5,6,9,10], &[0,2,3,4,5,8,9,11], &[0,1,2,3,6,7,9,10]]),
    FamilyDef::new("Octatonic 9", 8, 9,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,3,4,5,7,9,11], &[0,2,3,4,6,8,10,11], &[0,1,2,4,6,8,9,10], &[0,1,3,5,7,8,9,11],
          &[0,2,4,6,7,8,10,11], &[0,2,4,5,6,8,9,10], &[0,2,3,4,6,7,8,10], &[0,1,2,4,5,6,8,10]]),
    FamilyDef::new("Octatonic 10", 8, 10,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,3,4,6,7,8,11], &[0,2,3,5,6,7,10,11], &[0,1,3,4,5,8,9,10], &[0,2,3,4,7,8,9,11],
          &[0,1,2,5,6,7,9,10], &[0,1,4,5,6,8,9,11], &[0,3,4,5,7,8,10,11], &[0,1,2,4,5,7,8,9]]),
    FamilyDef::new("Bebop Dorian (♮7)", 8, 11,
        &["Mode 1", "Mode 2", "Bebop Dorian (♮7)", "Mode 4", "Mode 5", "Mode 6", "Mode 7",
          "Mode 8"],
        &[&[0,1,2,4,5,7,9,11], &[0,1,3,4,6,8,10,11], &[0,2,3,5,7,9,10,11], &[0,1,3,5,7,8,9,10],
          &[0,2,4,6,7,8,9,11], &[0,2,4,5,6,7,9,10], &[0,2,3,4,5,7,8,10], &[0,1,2,3,5,6,8,10]]),
    FamilyDef::new("Octatonic 12", 8, 12,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,4,6,7,8,11], &[0,1,3,5,6,7,10,11], &[0,2,4,5,6,9,10,11], &[0,2,3,4,7,8,9,10],
          &[0,1,2,5,6,7,8,10], &[0,1,4,5,6,7,9,11], &[0,3,4,5,6,8,10,11], &[0,1,2,3,5,7,8,9]]),
    FamilyDef::new("Octatonic 13", 8, 13,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,4,6,8,9,11], &[0,1,3,5,7,8,10,11], &[0,2,4,6,7,9,10,11], &[0,2,4,5,7,8,9,10],
          &[0,2,3,5,6,7,8,10], &[0,1,3,4,5,6,8,10], &[0,2,3,4,5,7,9,11], &[0,1,2,3,5,7,9,10]]),
    FamilyDef::new("Octatonic 14", 8, 14,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,5,6,7,9,11], &[0,1,4,5,6,8,10,11], &[0,3,4,5,7,9,10,11], &[0,1,2,4,6,7,8,9],
          &[0,1,3,5,6,7,8,11], &[0,2,4,5,6,7,10,11], &[0,2,3,4,5,8,9,10], &[0,1,2,3,6,7,8,10]]),
    FamilyDef::new("Octatonic 15", 8, 15,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,3,4,5,7,8,11], &[0,2,3,4,6,7,10,11], &[0,1,2,4,5,8,9,10], &[0,1,3,4,7,8,9,11],
          &[0,2,3,6,7,8,10,11], &[0,1,4,5,6,8,9,10], &[0,3,4,5,7,8,9,11], &[0,1,2,4,5,6,8,9]]),
    FamilyDef::new("Octatonic 16", 8, 16,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,3,4,5,8,9,11], &[0,2,3,4,7,8,10,11], &[0,1,2,5,6,8,9,10], &[0,1,4,5,7,8,9,11],
          &[0,3,4,6,7,8,10,11], &[0,1,3,4,5,7,8,9], &[0,2,3,4,6,7,8,11], &[0,1,2,4,5,6,9,10]]),
    FamilyDef::new("Octatonic 17", 8, 17,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,5,7,8,11], &[0,1,2,4,6,7,10,11], &[0,1,3,5,6,9,10,11],
          &[0,2,4,5,8,9,10,11], &[0,2,3,6,7,8,9,10], &[0,1,4,5,6,7,8,10], &[0,3,4,5,6,7,9,11],
          &[0,1,2,3,4,6,8,9]]),
    FamilyDef::new("Octatonic 18", 8, 18,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,5,7,9,11], &[0,1,2,4,6,8,10,11], &[0,1,3,5,7,9,10,11],
          &[0,2,4,6,8,9,10,11], &[0,2,4,6,7,8,9,10], &[0,2,4,5,6,7,8,10], &[0,2,3,4,5,6,8,10],
          &[0,1,2,3,4,6,8,10]]),
    FamilyDef::new("Octatonic 19", 8, 19,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,6,7,8,11], &[0,1,2,5,6,7,10,11], &[0,1,4,5,6,9,10,11],
          &[0,3,4,5,8,9,10,11], &[0,1,2,5,6,7,8,9], &[0,1,4,5,6,7,8,11], &[0,3,4,5,6,7,10,11],
          &[0,1,2,3,4,7,8,9]]),
    FamilyDef::new("Octatonic 20", 8, 20,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,6,7,9,11], &[0,1,2,5,6,8,10,11], &[0,1,4,5,7,9,10,11],
          &[0,3,4,6,8,9,10,11], &[0,1,3,5,6,7,8,9], &[0,2,4,5,6,7,8,11], &[0,2,3,4,5,6,9,10],
          &[0,1,2,3,4,7,8,10]]),
    FamilyDef::new("Octatonic 21", 8, 21,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,4,5,6,8,11], &[0,1,3,4,5,7,10,11], &[0,2,3,4,6,9,10,11], &[0,1,2,4,7,8,9,10],
          &[0,1,3,6,7,8,9,11], &[0,2,5,6,7,8,10,11], &[0,3,4,5,6,8,9,10], &[0,1,2,3,5,6,7,9]]),
    FamilyDef::new("Octatonic 22", 8, 22,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,4,5,6,9,11], &[0,1,3,4,5,8,10,11], &[0,2,3,4,7,9,10,11], &[0,1,2,5,7,8,9,10],
          &[0,1,4,6,7,8,9,11], &[0,3,5,6,7,8,10,11], &[0,2,3,4,5,7,8,9], &[0,1,2,3,5,6,7,10]]),
    FamilyDef::new("Octatonic 23", 8, 23,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,4,5,8,9,11], &[0,1,3,4,7,8,10,11], &[0,2,3,6,7,9,10,11], &[0,1,4,5,7,8,9,10],
          &[0,3,4,6,7,8,9,11], &[0,1,3,4,5,6,8,9], &[0,2,3,4,5,7,8,11], &[0,1,2,3,5,6,9,10]]),
    FamilyDef::new("Octatonic 24", 8, 24,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,3,4,5,6,8,11], &[0,2,3,4,5,7,10,11], &[0,1,2,3,5,8,9,10], &[0,1,2,4,7,8,9,11],
          &[0,1,3,6,7,8,10,11], &[0,2,5,6,7,9,10,11], &[0,3,4,5,7,8,9,10], &[0,1,2,4,5,6,7,9]]),
    FamilyDef::new("Octatonic 25", 8, 25,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,5,6,7,8,11], &[0,1,4,5,6,7,10,11], &[0,3,4,5,6,9,10,11], &[0,1,2,3,6,7,8,9],
          &[0,1,2,5,6,7,8,11], &[0,1,4,5,6,7,10,11], &[0,3,4,5,6,9,10,11], &[0,1,2,3,6,7,8,9]]),
    FamilyDef::new("Octatonic 26", 8, 26,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,3,4,5,6,9,11], &[0,2,3,4,5,8,10,11], &[0,1,2,3,6,8,9,10], &[0,1,2,5,7,8,9,11],
          &[0,1,4,6,7,8,10,11], &[0,3,5,6,7,9,10,11], &[0,2,3,4,6,7,8,9], &[0,1,2,4,5,6,7,10]]),
    FamilyDef::new("Octatonic 27", 8, 27,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,5,6,8,11], &[0,1,2,4,5,7,10,11], &[0,1,3,4,6,9,10,11],
          &[0,2,3,5,8,9,10,11], &[0,1,3,6,7,8,9,10], &[0,2,5,6,7,8,9,11], &[0,3,4,5,6,7,9,10],
          &[0,1,2,3,4,6,7,9]]),
    FamilyDef::new("Octatonic 28", 8, 28,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,6,8,9,11], &[0,1,2,5,7,8,10,11], &[0,1,4,6,7,9,10,11],
          &[0,3,5,6,8,9,10,11], &[0,2,3,5,6,7,8,9], &[0,1,3,4,5,6,7,10], &[0,2,3,4,5,6,9,11],
          &[0,1,2,3,4,7,9,10]]),
    FamilyDef::new("Octatonic 29", 8, 29,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,4,7,8,11], &[0,1,2,3,6,7,10,11], &[0,1,2,5,6,9,10,11],
          &[0,1,4,5,8,9,10,11], &[0,3,4,7,8,9,10,11], &[0,1,4,5,6,7,8,9], &[0,3,4,5,6,7,8,11],
          &[0,1,2,3,4,5,8,9]]),
    FamilyDef::new("Octatonic 30", 8, 30,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,5,6,9,11], &[0,1,2,4,5,8,10,11], &[0,1,3,4,7,9,10,11],
          &[0,2,3,6,8,9,10,11], &[0,1,4,6,7,8,9,10], &[0,3,5,6,7,8,9,11], &[0,2,3,4,5,6,8,9],
          &[0,1,2,3,4,6,7,10]]),
    FamilyDef::new("Octatonic 31", 8, 31,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,5,8,9,11], &[0,1,2,4,7,8,10,11], &[0,1,3,6,7,9,10,11],
          &[0,2,5,6,8,9,10,11], &[0,3,4,6,7,8,9,10], &[0,1,3,4,5,6,7,9], &[0,2,3,4,5,6,8,11],
          &[0,1,2,3,4,6,9,10]]),
    FamilyDef::new("Octatonic 32", 8, 32,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,4,5,6,7,11], &[0,1,3,4,5,6,10,11], &[0,2,3,4,5,9,10,11], &[0,1,2,3,7,8,9,10],
          &[0,1,2,6,7,8,9,11], &[0,1,5,6,7,8,10,11], &[0,4,5,6,7,9,10,11], &[0,1,2,3,5,6,7,8]]),
    FamilyDef::new("Octatonic 33", 8, 33,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,4,6,8,11], &[0,1,2,3,5,7,10,11], &[0,1,2,4,6,9,10,11],
          &[0,1,3,5,8,9,10,11], &[0,2,4,7,8,9,10,11], &[0,2,5,6,7,8,9,10], &[0,3,4,5,6,7,8,10],
          &[0,1,2,3,4,5,7,9]]),
    FamilyDef::new("Octatonic 34", 8, 34,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,4,7,9,11], &[0,1,2,3,6,8,10,11], &[0,1,2,5,7,9,10,11],
          &[0,1,4,6,8,9,10,11], &[0,3,5,7,8,9,10,11], &[0,2,4,5,6,7,8,9], &[0,2,3,4,5,6,7,10],
          &[0,1,2,3,4,5,8,10]]),
    FamilyDef::new("Octatonic 35", 8, 35,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,5,6,7,11], &[0,1,2,4,5,6,10,11], &[0,1,3,4,5,9,10,11],
          &[0,2,3,4,8,9,10,11], &[0,1,2,6,7,8,9,10], &[0,1,5,6,7,8,9,11], &[0,4,5,6,7,8,10,11],
          &[0,1,2,3,4,6,7,8]]),
    FamilyDef::new("Octatonic 36", 8, 36,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,3,4,5,6,7,11], &[0,2,3,4,5,6,10,11], &[0,1,2,3,4,8,9,10], &[0,1,2,3,7,8,9,11],
          &[0,1,2,6,7,8,10,11], &[0,1,5,6,7,9,10,11], &[0,4,5,6,8,9,10,11], &[0,1,2,4,5,6,7,8]]),
    FamilyDef::new("Octatonic 37", 8, 37,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,4,5,8,11], &[0,1,2,3,4,7,10,11], &[0,1,2,3,6,9,10,11],
          &[0,1,2,5,8,9,10,11], &[0,1,4,7,8,9,10,11], &[0,3,6,7,8,9,10,11], &[0,3,4,5,6,7,8,9],
          &[0,1,2,3,4,5,6,9]]),
    FamilyDef::new("Octatonic 38", 8, 38,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,4,6,7,11], &[0,1,2,3,5,6,10,11], &[0,1,2,4,5,9,10,11],
          &[0,1,3,4,8,9,10,11], &[0,2,3,7,8,9,10,11], &[0,1,5,6,7,8,9,10], &[0,4,5,6,7,8,9,11],
          &[0,1,2,3,4,5,7,8]]),
    FamilyDef::new("Octatonic 39", 8, 39,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,4,6,9,11], &[0,1,2,3,5,8,10,11], &[0,1,2,4,7,9,10,11],
          &[0,1,3,6,8,9,10,11], &[0,2,5,7,8,9,10,11], &[0,3,5,6,7,8,9,10], &[0,2,3,4,5,6,7,9],
          &[0,1,2,3,4,5,7,10]]),
    FamilyDef::new("Octatonic 40", 8, 40,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,4,8,9,11], &[0,1,2,3,7,8,10,11], &[0,1,2,6,7,9,10,11],
          &[0,1,5,6,8,9,10,11], &[0,4,5,7,8,9,10,11], &[0,1,3,4,5,6,7,8], &[0,2,3,4,5,6,7,11],
          &[0,1,2,3,4,5,9,10]]),
    FamilyDef::new("Octatonic 41", 8, 41,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,4,5,7,11], &[0,1,2,3,4,6,10,11], &[0,1,2,3,5,9,10,11],
          &[0,1,2,4,8,9,10,11], &[0,1,3,7,8,9,10,11], &[0,2,6,7,8,9,10,11],
          &[0,4,5,6,7,8,9,10], &[0,1,2,3,4,5,6,8]]),
    FamilyDef::new("Octatonic 42", 8, 42,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,4,5,9,11], &[0,1,2,3,4,8,10,11], &[0,1,2,3,7,9,10,11],
          &[0,1,2,6,8,9,10,11], &[0,1,5,7,8,9,10,11], &[0,4,6,7,8,9,10,11], &[0,2,3,4,5,6,7,8],
          &[0,1,2,3,4,5,6,10]]),
    FamilyDef::new("Octatonic 43", 8, 43,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8"],
        &[&[0,1,2,3,4,5,6,11], &[0,1,2,3,4,5,10,11], &[0,1,2,3,4,9,10,11],
          &[0,1,2,3,8,9,10,11], &[0,1,2,7,8,9,10,11], &[0,1,6,7,8,9,10,11],
          &[0,5,6,7,8,9,10,11], &[0,1,2,3,4,5,6,7]]),
    // ── 9 notes ───────────────────────────────────────────────────────────────
    FamilyDef::new("Nonatonic", 9, 1,
        &["Nonatonic 1", "Nonatonic 2", "Nonatonic 3", "Nonatonic 1", "Nonatonic 2",
          "Nonatonic 3", "Nonatonic 1", "Nonatonic 2", "Nonatonic 3"],
        &[&[0,1,3,4,5,7,8,9,11], &[0,2,3,4,6,7,8,10,11], &[0,1,2,4,5,6,8,9,10],
          &[0,1,3,4,5,7,8,9,11], &[0,2,3,4,6,7,8,10,11], &[0,1,2,4,5,6,8,9,10],
          &[0,1,3,4,5,7,8,9,11], &[0,2,3,4,6,7,8,10,11], &[0,1,2,4,5,6,8,9,10]]),
    FamilyDef::new("Nonatonic 2", 9, 2,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,4,5,6,8,9,11], &[0,1,3,4,5,7,8,10,11], &[0,2,3,4,6,7,9,10,11],
          &[0,1,2,4,5,7,8,9,10], &[0,1,3,4,6,7,8,9,11], &[0,2,3,5,6,7,8,10,11],
          &[0,1,3,4,5,6,8,9,10], &[0,2,3,4,5,7,8,9,11], &[0,1,2,3,5,6,7,9,10]]),
    FamilyDef::new("Nonatonic 3", 9, 3,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,4,5,7,8,9,11], &[0,1,3,4,6,7,8,10,11], &[0,2,3,5,6,7,9,10,11],
          &[0,1,3,4,5,7,8,9,10], &[0,2,3,4,6,7,8,9,11], &[0,1,2,4,5,6,7,9,10],
          &[0,1,3,4,5,6,8,9,11], &[0,2,3,4,5,7,8,10,11], &[0,1,2,3,5,6,8,9,10]]),
    FamilyDef::new("Nonatonic 4", 9, 4,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,5,6,8,9,11], &[0,1,2,4,5,7,8,10,11], &[0,1,3,4,6,7,9,10,11],
          &[0,2,3,5,6,8,9,10,11], &[0,1,3,4,6,7,8,9,10], &[0,2,3,5,6,7,8,9,11],
          &[0,1,3,4,5,6,7,9,10], &[0,2,3,4,5,6,8,9,11], &[0,1,2,3,4,6,7,9,10]]),
    FamilyDef::new("Nonatonic 5", 9, 5,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,4,5,6,7,9,11], &[0,1,3,4,5,6,8,10,11], &[0,2,3,4,5,7,9,10,11],
          &[0,1,2,3,5,7,8,9,10], &[0,1,2,4,6,7,8,9,11], &[0,1,3,5,6,7,8,10,11],
          &[0,2,4,5,6,7,9,10,11], &[0,2,3,4,5,7,8,9,10], &[0,1,2,3,5,6,7,8,10]]),
    FamilyDef::new("Nonatonic 6", 9, 6,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,5,6,7,9,11], &[0,1,2,4,5,6,8,10,11], &[0,1,3,4,5,7,9,10,11],
          &[0,2,3,4,6,8,9,10,11], &[0,1,2,4,6,7,8,9,10], &[0,1,3,5,6,7,8,9,11],
          &[0,2,4,5,6,7,8,10,11], &[0,2,3,4,5,6,8,9,10], &[0,1,2,3,4,6,7,8,10]]),
    FamilyDef::new("Nonatonic 7", 9, 7,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,5,7,8,9,11], &[0,1,2,4,6,7,8,10,11], &[0,1,3,5,6,7,9,10,11],
          &[0,2,4,5,6,8,9,10,11], &[0,2,3,4,6,7,8,9,10], &[0,1,2,4,5,6,7,8,10],
          &[0,1,3,4,5,6,7,9,11], &[0,2,3,4,5,6,8,10,11], &[0,1,2,3,4,6,8,9,10]]),
    FamilyDef::new("Nonatonic 8", 9, 8,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,4,6,7,9,11], &[0,1,2,3,5,6,8,10,11], &[0,1,2,4,5,7,9,10,11],
          &[0,1,3,4,6,8,9,10,11], &[0,2,3,5,7,8,9,10,11], &[0,1,3,5,6,7,8,9,10],
          &[0,2,4,5,6,7,8,9,11], &[0,2,3,4,5,6,7,9,10], &[0,1,2,3,4,5,7,8,10]]),
    FamilyDef::new("Nonatonic 9", 9, 9,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,4,6,8,9,11], &[0,1,2,3,5,7,8,10,11], &[0,1,2,4,6,7,9,10,11],
          &[0,1,3,5,6,8,9,10,11], &[0,2,4,5,7,8,9,10,11], &[0,2,3,5,6,7,8,9,10],
          &[0,1,3,4,5,6,7,8,10], &[0,2,3,4,5,6,7,9,11], &[0,1,2,3,4,5,7,9,10]]),
    FamilyDef::new("Nonatonic 10", 9, 10,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,5,6,7,8,11], &[0,1,2,4,5,6,7,10,11], &[0,1,3,4,5,6,9,10,11],
          &[0,2,3,4,5,8,9,10,11], &[0,1,2,3,6,7,8,9,10], &[0,1,2,5,6,7,8,9,11],
          &[0,1,4,5,6,7,8,10,11], &[0,3,4,5,6,7,9,10,11], &[0,1,2,3,4,6,7,8,9]]),
    FamilyDef::new("Nonatonic 11", 9, 11,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,4,5,6,7,8,11], &[0,1,3,4,5,6,7,10,11], &[0,2,3,4,5,6,9,10,11],
          &[0,1,2,3,4,7,8,9,10], &[0,1,2,3,6,7,8,9,11], &[0,1,2,5,6,7,8,10,11],
          &[0,1,4,5,6,7,9,10,11], &[0,3,4,5,6,8,9,10,11], &[0,1,2,3,5,6,7,8,9]]),
    FamilyDef::new("Nonatonic 12", 9, 12,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,4,6,7,8,11], &[0,1,2,3,5,6,7,10,11], &[0,1,2,4,5,6,9,10,11],
          &[0,1,3,4,5,8,9,10,11], &[0,2,3,4,7,8,9,10,11], &[0,1,2,5,6,7,8,9,10],
          &[0,1,4,5,6,7,8,9,11], &[0,3,4,5,6,7,8,10,11], &[0,1,2,3,4,5,7,8,9]]),
    FamilyDef::new("Nonatonic 13", 9, 13,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,4,7,8,9,11], &[0,1,2,3,6,7,8,10,11], &[0,1,2,5,6,7,9,10,11],
          &[0,1,4,5,6,8,9,10,11], &[0,3,4,5,7,8,9,10,11], &[0,1,2,4,5,6,7,8,9],
          &[0,1,3,4,5,6,7,8,11], &[0,2,3,4,5,6,7,10,11], &[0,1,2,3,4,5,8,9,10]]),
    FamilyDef::new("Nonatonic 14", 9, 14,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,4,5,7,9,11], &[0,1,2,3,4,6,8,10,11], &[0,1,2,3,5,7,9,10,11],
          &[0,1,2,4,6,8,9,10,11], &[0,1,3,5,7,8,9,10,11], &[0,2,4,6,7,8,9,10,11],
          &[0,2,4,5,6,7,8,9,10], &[0,2,3,4,5,6,7,8,10], &[0,1,2,3,4,5,6,8,10]]),
    FamilyDef::new("Nonatonic 15", 9, 15,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,4,5,7,8,11], &[0,1,2,3,4,6,7,10,11], &[0,1,2,3,5,6,9,10,11],
          &[0,1,2,4,5,8,9,10,11], &[0,1,3,4,7,8,9,10,11], &[0,2,3,6,7,8,9,10,11],
          &[0,1,4,5,6,7,8,9,10], &[0,3,4,5,6,7,8,9,11], &[0,1,2,3,4,5,6,8,9]]),
    FamilyDef::new("Nonatonic 16", 9, 16,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,4,5,8,9,11], &[0,1,2,3,4,7,8,10,11], &[0,1,2,3,6,7,9,10,11],
          &[0,1,2,5,6,8,9,10,11], &[0,1,4,5,7,8,9,10,11], &[0,3,4,6,7,8,9,10,11],
          &[0,1,3,4,5,6,7,8,9], &[0,2,3,4,5,6,7,8,11], &[0,1,2,3,4,5,6,9,10]]),
    FamilyDef::new("Nonatonic 17", 9, 17,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,4,5,6,8,11], &[0,1,2,3,4,5,7,10,11], &[0,1,2,3,4,6,9,10,11],
          &[0,1,2,3,5,8,9,10,11], &[0,1,2,4,7,8,9,10,11], &[0,1,3,6,7,8,9,10,11],
          &[0,2,5,6,7,8,9,10,11], &[0,3,4,5,6,7,8,9,10], &[0,1,2,3,4,5,6,7,9]]),
    FamilyDef::new("Nonatonic 18", 9, 18,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,4,5,6,9,11], &[0,1,2,3,4,5,8,10,11], &[0,1,2,3,4,7,9,10,11],
          &[0,1,2,3,6,8,9,10,11], &[0,1,2,5,7,8,9,10,11], &[0,1,4,6,7,8,9,10,11],
          &[0,3,5,6,7,8,9,10,11], &[0,2,3,4,5,6,7,8,9], &[0,1,2,3,4,5,6,7,10]]),
    FamilyDef::new("Nonatonic 19", 9, 19,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9"],
        &[&[0,1,2,3,4,5,6,7,11], &[0,1,2,3,4,5,6,10,11], &[0,1,2,3,4,5,9,10,11],
          &[0,1,2,3,4,8,9,10,11], &[0,1,2,3,7,8,9,10,11], &[0,1,2,6,7,8,9,10,11],
          &[0,1,5,6,7,8,9,10,11], &[0,4,5,6,7,8,9,10,11], &[0,1,2,3,4,5,6,7,8]]),
    // ── 10 notes ──────────────────────────────────────────────────────────────
    FamilyDef::new("No Tritone", 10, 1,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 1", "Mode 2", "Mode 3",
          "Mode 4", "Mode 5"],
        &[&[0,1,2,4,5,6,7,8,10,11], &[0,1,3,4,5,6,7,9,10,11], &[0,2,3,4,5,6,8,9,10,11],
          &[0,1,2,3,4,6,7,8,9,10], &[0,1,2,3,5,6,7,8,9,11], &[0,1,2,4,5,6,7,8,10,11],
          &[0,1,3,4,5,6,7,9,10,11], &[0,2,3,4,5,6,8,9,10,11], &[0,1,2,3,4,6,7,8,9,10],
          &[0,1,2,3,5,6,7,8,9,11]]),
    FamilyDef::new("No 4th/5th", 10, 2,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9", "Mode 10"],
        &[&[0,1,2,3,5,6,7,8,10,11], &[0,1,2,4,5,6,7,9,10,11], &[0,1,3,4,5,6,8,9,10,11],
          &[0,2,3,4,5,7,8,9,10,11], &[0,1,2,3,5,6,7,8,9,10], &[0,1,2,4,5,6,7,8,9,11],
          &[0,1,3,4,5,6,7,8,10,11], &[0,2,3,4,5,6,7,9,10,11], &[0,1,2,3,4,5,7,8,9,10],
          &[0,1,2,3,4,6,7,8,9,11]]),
    FamilyDef::new("No M3/m6", 10, 3,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9", "Mode 10"],
        &[&[0,1,2,3,5,6,7,9,10,11], &[0,1,2,4,5,6,8,9,10,11], &[0,1,3,4,5,7,8,9,10,11],
          &[0,2,3,4,6,7,8,9,10,11], &[0,1,2,4,5,6,7,8,9,10], &[0,1,3,4,5,6,7,8,9,11],
          &[0,2,3,4,5,6,7,8,10,11], &[0,1,2,3,4,5,6,8,9,10], &[0,1,2,3,4,5,7,8,9,11],
          &[0,1,2,3,4,6,7,8,10,11]]),
    FamilyDef::new("No M6/m3", 10, 4,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9", "Mode 10"],
        &[&[0,1,2,3,5,6,8,9,10,11], &[0,1,2,4,5,7,8,9,10,11], &[0,1,3,4,6,7,8,9,10,11],
          &[0,2,3,5,6,7,8,9,10,11], &[0,1,3,4,5,6,7,8,9,10], &[0,2,3,4,5,6,7,8,9,11],
          &[0,1,2,3,4,5,6,7,9,10], &[0,1,2,3,4,5,6,8,9,11], &[0,1,2,3,4,5,7,8,10,11],
          &[0,1,2,3,4,6,7,9,10,11]]),
    FamilyDef::new("No M2/m7", 10, 5,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9", "Mode 10"],
        &[&[0,1,2,3,4,6,8,9,10,11], &[0,1,2,3,5,7,8,9,10,11], &[0,1,2,4,6,7,8,9,10,11],
          &[0,1,3,5,6,7,8,9,10,11], &[0,2,4,5,6,7,8,9,10,11], &[0,2,3,4,5,6,7,8,9,10],
          &[0,1,2,3,4,5,6,7,8,10], &[0,1,2,3,4,5,6,7,9,11], &[0,1,2,3,4,5,6,8,10,11],
          &[0,1,2,3,4,5,7,9,10,11]]),
    FamilyDef::new("No M7/m2", 10, 6,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Mode 7", "Mode 8",
          "Mode 9", "Mode 10"],
        &[&[0,1,2,3,4,5,8,9,10,11], &[0,1,2,3,4,7,8,9,10,11], &[0,1,2,3,6,7,8,9,10,11],
          &[0,1,2,5,6,7,8,9,10,11], &[0,1,4,5,6,7,8,9,10,11], &[0,3,4,5,6,7,8,9,10,11],
          &[0,1,2,3,4,5,6,7,8,9], &[0,1,2,3,4,5,6,7,8,11], &[0,1,2,3,4,5,6,7,10,11],
          &[0,1,2,3,4,5,6,9,10,11]]),
    // ── 11 notes ──────────────────────────────────────────────────────────────
    FamilyDef::new("Undecatonic", 11, 1,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5", "Mode 6", "Undecachromatic",
          "Mode 8", "Mode 9", "Mode 10", "Mode 11"],
        &[&[0,1,2,3,4,5,7,8,9,10,11], &[0,1,2,3,4,6,7,8,9,10,11], &[0,1,2,3,5,6,7,8,9,10,11],
          &[0,1,2,4,5,6,7,8,9,10,11], &[0,1,3,4,5,6,7,8,9,10,11], &[0,2,3,4,5,6,7,8,9,10,11],
          &[0,1,2,3,4,5,6,7,8,9,10], &[0,1,2,3,4,5,6,7,8,9,11], &[0,1,2,3,4,5,6,7,8,10,11],
          &[0,1,2,3,4,5,6,7,9,10,11], &[0,1,2,3,4,5,6,8,9,10,11]]),
    // ── 12 notes ──────────────────────────────────────────────────────────────
    FamilyDef::new("Chromatic", 12, 1,
        &["Chromatic"],
        &[&[0,1,2,3,4,5,6,7,8,9,10,11]]),
    // ── 10 notes ──────────────────────────────────────────────────────────────
    FamilyDef::new("No Tritone", 10, 1,
        &["Mode 1", "Mode 2", "Mode 3", "Mode 4", "Mode 5"],
        &[&[0,1,2,4,5,6,7,8,10,11], &[0,1,3,4,5,6,7,9,10,11], &[0,2,3,4,5,6,8,9,10,11],
          &[0,1,2,3,4,6,7,8,9,10], &[0,1,2,3,5,6,7,8,9,11]]),
    // ── 9 notes ───────────────────────────────────────────────────────────────
    FamilyDef::new("Nonatonic", 9, 1,
        &["Nonatonic 1", "Nonatonic 2", "Nonatonic 3"],
        &[&[0,1,3,4,5,7,8,9,11], &[0,2,3,4,6,7,8,10,11], &[0,1,2,4,5,6,8,9,10]]),
    // ── 8 notes ───────────────────────────────────────────────────────────────
    FamilyDef::new("Octatonic", 8, 1,
        &["Octatonic 1", "Octatonic 2"],
        &[&[0,1,3,4,6,7,9,10], &[0,2,3,5,6,8,9,11]]),
];
