//! Validated key signature
//!
//! Wraps an accidental count in -7..=7 (negative = flats). Constructing one
//! goes through the same range check as `resolve_key_signature`, so the
//! accessors below can index the key tables directly.

use super::pitch_class::PitchClass;
use crate::theory::circle_of_fifths::{FLAT_KEYS, FLAT_MINOR_KEYS, SHARP_KEYS, SHARP_MINOR_KEYS};
use crate::theory::{note_name_at_fifths, TheoryError, MAX_ACCIDENTALS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semitones from a major tonic up to its relative minor
const RELATIVE_MINOR_OFFSET: u8 = 9;

/// Semitones in a perfect fifth
const FIFTH: i32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct KeySignature {
    fifths: i8,
}

impl KeySignature {
    pub fn new(fifths: i32) -> Result<Self, TheoryError> {
        if !(-MAX_ACCIDENTALS..=MAX_ACCIDENTALS).contains(&fifths) {
            return Err(TheoryError::InvalidAccidentalCount(fifths));
        }
        Ok(KeySignature { fifths: fifths as i8 })
    }

    /// Signed accidental count
    pub fn fifths(&self) -> i8 {
        self.fifths
    }

    /// Number of sharps or flats
    pub fn accidental_count(&self) -> u8 {
        self.fifths.unsigned_abs()
    }

    pub fn is_sharp(&self) -> bool {
        self.fifths > 0
    }

    pub fn is_flat(&self) -> bool {
        self.fifths < 0
    }

    pub fn major_key_name(&self) -> &'static str {
        let count = self.accidental_count() as usize;
        if self.is_flat() { FLAT_KEYS[count] } else { SHARP_KEYS[count] }
    }

    pub fn minor_key_name(&self) -> &'static str {
        let count = self.accidental_count() as usize;
        if self.is_flat() { FLAT_MINOR_KEYS[count] } else { SHARP_MINOR_KEYS[count] }
    }

    /// Major tonic as a (sharp-spelled) pitch class
    ///
    /// Each sharp moves the tonic up a fifth, each flat down a fifth, so
    /// B♭ major comes back as `A#` and C♭ major as `B`.
    pub fn major_tonic(&self) -> PitchClass {
        let index = (self.fifths as i32 * FIFTH).rem_euclid(12);
        PitchClass::from_index(index as u8)
    }

    pub fn minor_tonic(&self) -> PitchClass {
        self.major_tonic().transpose(RELATIVE_MINOR_OFFSET)
    }

    /// Key name for a mode, e.g. "E♭ major", "F♯ minor" or "F dorian"
    ///
    /// Church modes are named after their own tonic. A mode with no known
    /// tonic is reported against the major signature instead.
    pub fn key_name(&self, mode: &Mode) -> String {
        match mode {
            Mode::Major => format!("{} major", self.major_key_name()),
            Mode::Minor => format!("{} minor", self.minor_key_name()),
            Mode::Other(name) => match mode.tonic_offset() {
                Some(offset) => {
                    let tonic = note_name_at_fifths(self.fifths as i32 + offset);
                    format!("{} {}", tonic, name)
                }
                None => format!("{} major signature, {} mode", self.major_key_name(), name),
            },
        }
    }
}

impl TryFrom<i32> for KeySignature {
    type Error = TheoryError;

    fn try_from(fifths: i32) -> Result<Self, Self::Error> {
        KeySignature::new(fifths)
    }
}

impl From<KeySignature> for i32 {
    fn from(key: KeySignature) -> i32 {
        key.fifths as i32
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.major_key_name())
    }
}

/// Mode declared next to a key signature (MusicXML `<mode>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    #[default]
    Major,
    Minor,
    /// Church modes and anything else, kept verbatim
    Other(String),
}

impl Mode {
    /// Fifths from the major tonic to this mode's tonic
    ///
    /// Dorian sits on the second degree, two fifths above the major tonic;
    /// lydian on the fourth, one fifth below.
    pub fn tonic_offset(&self) -> Option<i32> {
        let name = match self {
            Mode::Major => return Some(0),
            Mode::Minor => return Some(3),
            Mode::Other(name) => name.to_ascii_lowercase(),
        };
        match name.as_str() {
            "ionian" => Some(0),
            "dorian" => Some(2),
            "phrygian" => Some(4),
            "lydian" => Some(-1),
            "mixolydian" => Some(1),
            "aeolian" => Some(3),
            "locrian" => Some(5),
            _ => None,
        }
    }
}

impl From<&str> for Mode {
    fn from(s: &str) -> Self {
        match s.trim() {
            "" | "major" => Mode::Major,
            "minor" => Mode::Minor,
            other => Mode::Other(other.to_string()),
        }
    }
}

impl From<String> for Mode {
    fn from(s: String) -> Self {
        Mode::from(s.as_str())
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> String {
        match mode {
            Mode::Major => "major".to_string(),
            Mode::Minor => "minor".to_string(),
            Mode::Other(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_range() {
        assert!(KeySignature::new(7).is_ok());
        assert!(KeySignature::new(-7).is_ok());
        assert_eq!(KeySignature::new(8), Err(TheoryError::InvalidAccidentalCount(8)));
        assert_eq!(KeySignature::new(-8), Err(TheoryError::InvalidAccidentalCount(-8)));
    }

    #[test]
    fn test_names_agree_with_resolver() {
        for n in -7..=7 {
            let key = KeySignature::new(n).unwrap();
            assert_eq!(key.major_key_name(), crate::theory::resolve_key_signature(n).unwrap());
            assert_eq!(
                key.minor_key_name(),
                crate::theory::resolve_minor_key_signature(n).unwrap()
            );
        }
    }

    #[test]
    fn test_major_tonic() {
        let tonic = |n| KeySignature::new(n).unwrap().major_tonic();
        assert_eq!(tonic(0), PitchClass::C);
        assert_eq!(tonic(1), PitchClass::G);
        assert_eq!(tonic(2), PitchClass::D);
        assert_eq!(tonic(6), PitchClass::Fs);
        assert_eq!(tonic(7), PitchClass::Cs);
        assert_eq!(tonic(-1), PitchClass::F);
        assert_eq!(tonic(-2), PitchClass::As);
        assert_eq!(tonic(-7), PitchClass::B);
    }

    #[test]
    fn test_minor_tonic() {
        assert_eq!(KeySignature::new(0).unwrap().minor_tonic(), PitchClass::A);
        assert_eq!(KeySignature::new(1).unwrap().minor_tonic(), PitchClass::E);
        assert_eq!(KeySignature::new(-3).unwrap().minor_tonic(), PitchClass::C);
    }

    #[test]
    fn test_key_name_by_mode() {
        let key = KeySignature::new(-3).unwrap();
        assert_eq!(key.key_name(&Mode::Major), "E♭ major");
        assert_eq!(key.key_name(&Mode::Minor), "C minor");
        assert_eq!(key.key_name(&Mode::from("dorian")), "F dorian");
    }

    #[test]
    fn test_church_modes_named_after_their_tonic() {
        let name = |fifths, mode: &str| {
            KeySignature::new(fifths).unwrap().key_name(&Mode::from(mode))
        };
        assert_eq!(name(0, "dorian"), "D dorian");
        assert_eq!(name(0, "phrygian"), "E phrygian");
        assert_eq!(name(0, "lydian"), "F lydian");
        assert_eq!(name(0, "mixolydian"), "G mixolydian");
        assert_eq!(name(0, "aeolian"), "A aeolian");
        assert_eq!(name(0, "locrian"), "B locrian");
        assert_eq!(name(0, "ionian"), "C ionian");
        assert_eq!(name(-5, "dorian"), "E♭ dorian");
        assert_eq!(name(2, "mixolydian"), "A mixolydian");
        assert_eq!(name(7, "locrian"), "B♯ locrian");
        assert_eq!(name(-7, "lydian"), "F♭ lydian");
    }

    #[test]
    fn test_unknown_mode_names_the_signature() {
        let key = KeySignature::new(0).unwrap();
        assert_eq!(key.key_name(&Mode::from("none")), "C major signature, none mode");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(Mode::from("major"), Mode::Major);
        assert_eq!(Mode::from(" minor "), Mode::Minor);
        assert_eq!(Mode::from(""), Mode::Major);
        assert_eq!(Mode::from("lydian"), Mode::Other("lydian".to_string()));
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let key: KeySignature = serde_json::from_str("4").unwrap();
        assert_eq!(key.major_key_name(), "E");
        assert_eq!(serde_json::to_string(&key).unwrap(), "4");
        assert!(serde_json::from_str::<KeySignature>("9").is_err());
    }
}
