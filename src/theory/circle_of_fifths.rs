//! Key signature → key name lookup
//!
//! Each table is indexed by accidental count. Sharps walk the circle of
//! fifths clockwise from C, flats walk it counter-clockwise. Index 0 is
//! "C" in both directions.

use super::TheoryError;

/// Largest accidental count a standard key signature can carry
pub const MAX_ACCIDENTALS: i32 = 7;

/// Major keys by number of sharps
pub const SHARP_KEYS: [&str; 8] = ["C", "G", "D", "A", "E", "B", "F♯", "C♯"];

/// Major keys by number of flats
pub const FLAT_KEYS: [&str; 8] = ["C", "F", "B♭", "E♭", "A♭", "D♭", "G♭", "C♭"];

/// Relative minor keys by number of sharps
pub const SHARP_MINOR_KEYS: [&str; 8] = ["A", "E", "B", "F♯", "C♯", "G♯", "D♯", "A♯"];

/// Relative minor keys by number of flats
pub const FLAT_MINOR_KEYS: [&str; 8] = ["A", "D", "G", "C", "F", "B♭", "E♭", "A♭"];

fn lookup(
    accidentals: i32,
    sharps: &[&'static str; 8],
    flats: &[&'static str; 8],
) -> Result<&'static str, TheoryError> {
    if !(-MAX_ACCIDENTALS..=MAX_ACCIDENTALS).contains(&accidentals) {
        return Err(TheoryError::InvalidAccidentalCount(accidentals));
    }

    let count = accidentals.unsigned_abs() as usize;
    if accidentals >= 0 {
        Ok(sharps[count])
    } else {
        Ok(flats[count])
    }
}

/// Natural letters in fifths order, F first
const LETTERS_BY_FIFTHS: [char; 7] = ['F', 'C', 'G', 'D', 'A', 'E', 'B'];

/// Spelled note name at a position on the line of fifths, C = 0
///
/// Each step of seven adds a sharp (or a flat going down), so positions
/// past the key-signature range still spell correctly: 7 is C♯, 12 is B♯,
/// -8 is F♭.
pub fn note_name_at_fifths(position: i32) -> String {
    let shifted = position + 1;
    let letter = LETTERS_BY_FIFTHS[shifted.rem_euclid(7) as usize];
    let accidentals = shifted.div_euclid(7);
    let symbol = if accidentals >= 0 { "♯" } else { "♭" };
    format!("{}{}", letter, symbol.repeat(accidentals.unsigned_abs() as usize))
}

/// Name of the major key with the given signature
///
/// Positive counts are sharps, negative counts are flats, 0 is C.
///
/// ```
/// use score_theory::resolve_key_signature;
///
/// assert_eq!(resolve_key_signature(2).unwrap(), "D");
/// assert_eq!(resolve_key_signature(-3).unwrap(), "E♭");
/// assert!(resolve_key_signature(8).is_err());
/// ```
pub fn resolve_key_signature(accidentals: i32) -> Result<&'static str, TheoryError> {
    lookup(accidentals, &SHARP_KEYS, &FLAT_KEYS)
}

/// Name of the relative minor key sharing the given signature
pub fn resolve_minor_key_signature(accidentals: i32) -> Result<&'static str, TheoryError> {
    lookup(accidentals, &SHARP_MINOR_KEYS, &FLAT_MINOR_KEYS)
}
