//! Major scale and diatonic seventh chord generation

use super::TheoryError;
use crate::models::chord::{ChordQuality, DiatonicChord};
use crate::models::pitch_class::PitchClass;

/// Major scale steps in semitones: W W H W W W H
pub const MAJOR_SCALE_INTERVALS: [u8; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Seventh chord quality of each major scale degree, I through vii
pub const CHORD_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major7,
    ChordQuality::Minor7,
    ChordQuality::Minor7,
    ChordQuality::Major7,
    ChordQuality::Dominant7,
    ChordQuality::Minor7,
    ChordQuality::HalfDiminished,
];

/// The seven notes of the major scale on `root`, root first
pub fn major_scale(root: PitchClass) -> [PitchClass; 7] {
    let mut scale = [root; 7];
    let mut current = root;
    for (i, step) in MAJOR_SCALE_INTERVALS.iter().enumerate() {
        scale[i] = current;
        current = current.transpose(*step);
    }
    scale
}

/// The seven diatonic seventh chords of the major key on `root`
///
/// Chord `i` stacks scale degrees i, i+2, i+4, i+6 (mod 7).
pub fn diatonic_seventh_chords(root: PitchClass) -> [DiatonicChord; 7] {
    let scale = major_scale(root);
    std::array::from_fn(|i| DiatonicChord {
        degree: i as u8 + 1,
        quality: CHORD_QUALITIES[i],
        root: scale[i],
        third: scale[(i + 2) % 7],
        fifth: scale[(i + 4) % 7],
        seventh: scale[(i + 6) % 7],
    })
}

/// Diatonic seventh chords for a root note name, as descriptor strings
///
/// ```
/// use score_theory::generate_diatonic_chords;
///
/// let chords = generate_diatonic_chords("C").unwrap();
/// assert_eq!(chords[0], "C Major 7th (C, E, G, B)");
/// assert!(generate_diatonic_chords("H").is_err());
/// ```
pub fn generate_diatonic_chords(root_note: &str) -> Result<Vec<String>, TheoryError> {
    let root: PitchClass = root_note.parse()?;
    Ok(diatonic_seventh_chords(root)
        .iter()
        .map(|chord| chord.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_major_scale() {
        use PitchClass::*;
        assert_eq!(major_scale(C), [C, D, E, F, G, A, B]);
    }

    #[test]
    fn test_sharp_root_scale() {
        use PitchClass::*;
        // E major: E F# G# A B C# D#
        assert_eq!(major_scale(E), [E, Fs, Gs, A, B, Cs, Ds]);
        // A# spelled with sharps only
        assert_eq!(major_scale(As), [As, C, D, Ds, F, G, A]);
    }

    #[test]
    fn test_scale_closes_after_octave() {
        for root in PitchClass::ALL {
            let scale = major_scale(root);
            assert_eq!(scale[0], root);
            let last_step = MAJOR_SCALE_INTERVALS[6];
            assert_eq!(scale[6].transpose(last_step), root, "scale on {} does not close", root);
        }
    }

    #[test]
    fn test_interval_sum_is_octave() {
        let total: u8 = MAJOR_SCALE_INTERVALS.iter().sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn test_c_major_chords() {
        let chords = generate_diatonic_chords("C").unwrap();
        assert_eq!(
            chords,
            vec![
                "C Major 7th (C, E, G, B)",
                "D minor 7th (D, F, A, C)",
                "E minor 7th (E, G, B, D)",
                "F Major 7th (F, A, C, E)",
                "G Dominant 7th (G, B, D, F)",
                "A minor 7th (A, C, E, G)",
                "B Half-diminished (B, D, F, A)",
            ]
        );
    }

    #[test]
    fn test_chord_roots_follow_scale() {
        for root in PitchClass::ALL {
            let scale = major_scale(root);
            let chords = diatonic_seventh_chords(root);
            let roots: Vec<PitchClass> = chords.iter().map(|c| c.root).collect();
            assert_eq!(roots, scale.to_vec());
            for (i, chord) in chords.iter().enumerate() {
                assert_eq!(chord.degree as usize, i + 1);
                assert_eq!(chord.quality, CHORD_QUALITIES[i]);
            }
        }
    }

    #[test]
    fn test_g_major_dominant() {
        let chords = diatonic_seventh_chords(PitchClass::G);
        assert_eq!(chords[4].to_string(), "D Dominant 7th (D, F#, A, C)");
        assert_eq!(chords[6].to_string(), "F# Half-diminished (F#, A, C, E)");
    }

    #[test]
    fn test_invalid_root_has_no_partial_result() {
        assert_eq!(
            generate_diatonic_chords("H"),
            Err(TheoryError::InvalidRootNote("H".to_string()))
        );
        assert!(generate_diatonic_chords("Bb").is_err());
        assert!(generate_diatonic_chords("").is_err());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = generate_diatonic_chords("F#").unwrap();
        for _ in 0..5 {
            assert_eq!(generate_diatonic_chords("F#").unwrap(), first);
        }
    }
}
