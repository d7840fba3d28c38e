//! The twelve chromatic pitch classes
//!
//! Canonical spellings use sharps only (C, C#, D, ... B). The chromatic
//! index (0 = C, 11 = B) is the discriminant, so arithmetic on pitch
//! classes is plain modulo-12 arithmetic on `index()`.
//!
//! Parsing is strict: only the twelve canonical names are accepted.
//! "Db", "c" or "H" are rejected rather than mapped to a neighbour.

use crate::theory::TheoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of pitch classes in the chromatic scale
pub const CHROMATIC_LENGTH: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C = 0,
    #[serde(rename = "C#")]
    Cs = 1,
    D = 2,
    #[serde(rename = "D#")]
    Ds = 3,
    E = 4,
    F = 5,
    #[serde(rename = "F#")]
    Fs = 6,
    G = 7,
    #[serde(rename = "G#")]
    Gs = 8,
    A = 9,
    #[serde(rename = "A#")]
    As = 10,
    B = 11,
}

impl PitchClass {
    /// All pitch classes in chromatic order, starting from C
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Chromatic index (0-11)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class for a chromatic index, wrapping modulo 12
    pub fn from_index(index: u8) -> PitchClass {
        Self::ALL[(index % CHROMATIC_LENGTH) as usize]
    }

    /// Move up by `semitones`, wrapping around the octave
    pub fn transpose(self, semitones: u8) -> PitchClass {
        Self::from_index((self.index() + semitones % CHROMATIC_LENGTH) % CHROMATIC_LENGTH)
    }

    /// Canonical name ("C", "C#", ...)
    pub fn as_str(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|pc| pc.as_str() == s)
            .ok_or_else(|| TheoryError::InvalidRootNote(s.to_string()))
    }
}
