//! Seventh chord models
//!
//! A `DiatonicChord` is four pitch classes taken from a major scale plus
//! the quality that scale degree conventionally carries. The quality is
//! assigned by degree, never inferred from the intervals.

use super::pitch_class::PitchClass;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    #[serde(rename = "Major 7th")]
    Major7,
    #[serde(rename = "minor 7th")]
    Minor7,
    #[serde(rename = "Dominant 7th")]
    Dominant7,
    #[serde(rename = "Half-diminished")]
    HalfDiminished,
}

impl ChordQuality {
    /// Human-readable label used in chord descriptors
    pub fn label(self) -> &'static str {
        match self {
            ChordQuality::Major7 => "Major 7th",
            ChordQuality::Minor7 => "minor 7th",
            ChordQuality::Dominant7 => "Dominant 7th",
            ChordQuality::HalfDiminished => "Half-diminished",
        }
    }

    /// Suffix appended to a roman numeral (Imaj7, ii7, V7, viiø7)
    pub fn numeral_suffix(self) -> &'static str {
        match self {
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 | ChordQuality::Dominant7 => "7",
            ChordQuality::HalfDiminished => "ø7",
        }
    }

    /// Whether the chord's triad has a major third (upper-case numeral)
    pub fn is_major_triad(self) -> bool {
        matches!(self, ChordQuality::Major7 | ChordQuality::Dominant7)
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const ROMAN_NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// One diatonic seventh chord of a major key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiatonicChord {
    /// Scale degree, 1-7
    pub degree: u8,
    pub quality: ChordQuality,
    pub root: PitchClass,
    pub third: PitchClass,
    pub fifth: PitchClass,
    pub seventh: PitchClass,
}

impl DiatonicChord {
    /// Chord tones in stacking order
    pub fn notes(&self) -> [PitchClass; 4] {
        [self.root, self.third, self.fifth, self.seventh]
    }

    /// Roman numeral with quality suffix, e.g. "IVmaj7" or "viiø7"
    pub fn roman_numeral(&self) -> String {
        let numeral = ROMAN_NUMERALS[(self.degree as usize - 1) % ROMAN_NUMERALS.len()];
        if self.quality.is_major_triad() {
            format!("{}{}", numeral, self.quality.numeral_suffix())
        } else {
            format!("{}{}", numeral.to_lowercase(), self.quality.numeral_suffix())
        }
    }
}

impl fmt::Display for DiatonicChord {
    /// `<root> <quality> (<root>, <third>, <fifth>, <seventh>)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {}, {}, {})",
            self.root, self.quality, self.root, self.third, self.fifth, self.seventh
        )
    }
}
