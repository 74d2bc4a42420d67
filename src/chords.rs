// Roman-numeral chord symbols for the degrees of an arbitrary scale.
//
// `rels` is always the sorted selection (intervals above the wheel root)
// and `idx` a position in it. Chords are stacked by scale steps, not by
// semitones, so the step pattern widens with the note count.

const ROMAN: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// Upper-case numeral for a 1-based degree; plain digits past twelve.
pub fn roman(n: usize) -> String {
    match n.checked_sub(1).and_then(|i| ROMAN.get(i)) {
        Some(r) => r.to_string(),
        None => n.to_string(),
    }
}

/// Scale steps stacked above a degree for a scale of `n` notes.
fn chord_steps(n: usize) -> &'static [usize] {
    match n {
        0..=2 => &[0, 1],
        3 => &[0, 1, 2],
        4 => &[0, 1, 2, 3],
        5 => &[0, 2, 3],
        6..=8 => &[0, 2, 4],
        9 | 10 => &[0, 3, 6],
        _ => &[0, 4, 7],
    }
}

/// Pitch classes of the chord built on degree `idx`.
pub fn chord_degrees(rels: &[u8], idx: usize) -> Vec<u8> {
    let n = rels.len();
    if n == 0 {
        return Vec::new();
    }
    chord_steps(n).iter().map(|step| rels[(idx + step) % n]).collect()
}

fn interval(from: u8, to: u8) -> u8 {
    (to + 12 - from) % 12
}

/// Chord symbol for the tile of degree `idx`, e.g. `"ii"`, `"V"`, `"vii°"`.
pub fn chord_symbol(rels: &[u8], idx: usize) -> String {
    let n = rels.len();
    match n {
        0 => String::new(),
        1 => "I".to_string(),
        2 => dyad_symbol(rels, idx),
        _ => triad_symbol(rels, idx),
    }
}

fn dyad_symbol(rels: &[u8], idx: usize) -> String {
    let numeral = roman(idx + 1);
    let to_other = interval(rels[idx % 2], rels[(idx + 1) % 2]);

    // A bare tritone reads as augmented from below, diminished from above.
    if interval(rels[0], rels[1]) == 6 && to_other == 6 {
        return if idx == 0 {
            format!("{}⁺", numeral)
        } else {
            format!("{}°", numeral.to_lowercase())
        };
    }

    match to_other {
        1 | 3 | 8 | 10 => numeral.to_lowercase(),
        2 | 4 | 9 | 11 | 5 | 7 => numeral,
        6 => format!("{}°", numeral.to_lowercase()),
        _ => format!("{}*", numeral),
    }
}

fn triad_symbol(rels: &[u8], idx: usize) -> String {
    let chord = chord_degrees(rels, idx);
    let root = chord[0];
    let third = interval(root, chord.get(1).copied().unwrap_or(root));
    let fifth = interval(root, chord.get(2).copied().unwrap_or(root));

    let numeral = roman(idx + 1);
    let numeral = if third >= 4 { numeral } else { numeral.to_lowercase() };
    let suffix = match fifth {
        7 => "",
        8 => "⁺",
        6 => "°",
        _ => "*",
    };
    format!("{}{}", numeral, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(rels: &[u8]) -> Vec<String> {
        (0..rels.len()).map(|i| chord_symbol(rels, i)).collect()
    }

    #[test]
    fn test_roman() {
        assert_eq!(roman(1), "I");
        assert_eq!(roman(12), "XII");
        assert_eq!(roman(13), "13");
        assert_eq!(roman(0), "0");
    }

    #[test]
    fn test_major_scale() {
        assert_eq!(
            symbols(&[0, 2, 4, 5, 7, 9, 11]),
            vec!["I", "ii", "iii", "IV", "V", "vi", "vii°"]
        );
    }

    #[test]
    fn test_harmonic_minor_augmented_third() {
        let s = symbols(&[0, 2, 3, 5, 7, 8, 11]);
        assert_eq!(s[0], "i");
        assert_eq!(s[1], "ii°");
        assert_eq!(s[2], "III⁺");
        assert_eq!(s[4], "V");
    }

    #[test]
    fn test_step_patterns() {
        assert_eq!(chord_degrees(&[0, 2, 4, 7, 9], 1), vec![2, 7, 9]);
        assert_eq!(chord_degrees(&[0, 3, 6, 9], 3), vec![9, 0, 3, 6]);
        assert_eq!(chord_degrees(&[0, 1, 2, 3, 4, 5, 6, 7, 8], 0), vec![0, 3, 6]);
        assert_eq!(chord_degrees(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], 11), vec![11, 3, 6]);
        assert!(chord_degrees(&[], 0).is_empty());
    }

    #[test]
    fn test_small_sets() {
        assert_eq!(symbols(&[0]), vec!["I"]);
        assert_eq!(symbols(&[0, 6]), vec!["I⁺", "ii°"]);
        assert_eq!(symbols(&[0, 7]), vec!["I", "II"]);
        assert_eq!(symbols(&[0, 3]), vec!["i", "II"]);
        assert_eq!(symbols(&[0, 4, 8]), vec!["I⁺", "II⁺", "III⁺"]);
        assert_eq!(symbols(&[0, 3, 6, 9]), vec!["i°", "ii°", "iii°", "iv°"]);
        assert!(symbols(&[]).is_empty());
    }

    #[test]
    fn test_odd_fifths_are_starred() {
        // [0,1,2]: third 1, fifth 2.
        assert_eq!(chord_symbol(&[0, 1, 2], 0), "i*");
        assert_eq!(chord_symbol(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], 11), "XII");
    }
}
