//! Lean score model for MusicXML summaries
//!
//! Only what a summary needs: titles, the part list, and per-measure
//! counts, harmonies and key changes. No durations, pitches or voices.

use crate::models::Mode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub work_title: Option<String>,
    pub movement_title: Option<String>,
    pub part_list: Vec<ScorePart>,  // <part-list>, document order
    pub parts: Vec<Part>,           // <part> elements, document order
}

/// Entry of <part-list>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePart {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub measures: Vec<Measure>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub number: String,
    pub note_count: usize,    // every <note>, rests and chord tones included
    pub rest_count: usize,
    pub harmonies: Vec<Harmony>,
    pub key: Option<KeyAttribute>,
}

/// <harmony> chord symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harmony {
    pub root_step: String,
    pub root_alter: i8,   // semitones, -2..=2 in practice
    pub kind: String,     // MusicXML kind value, e.g. "dominant"
}

/// <attributes><key> contents
///
/// `fifths` is kept raw; range checking happens when the summary resolves
/// it into a key name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAttribute {
    pub fifths: i32,
    pub mode: Mode,
}

impl Score {
    /// Work title, falling back to the movement title; blank titles count as missing
    pub fn title(&self) -> Option<&str> {
        [&self.work_title, &self.movement_title]
            .into_iter()
            .flatten()
            .map(|t| t.trim())
            .find(|t| !t.is_empty())
    }

    pub fn total_measures(&self) -> usize {
        self.parts.iter().map(|p| p.measures.len()).sum()
    }

    pub fn total_notes(&self) -> usize {
        self.measures().map(|m| m.note_count).sum()
    }

    pub fn total_rests(&self) -> usize {
        self.measures().map(|m| m.rest_count).sum()
    }

    /// First key signature in part order, then measure order
    pub fn first_key(&self) -> Option<&KeyAttribute> {
        self.measures().find_map(|m| m.key.as_ref())
    }

    /// All measures of all parts
    pub fn measures(&self) -> impl Iterator<Item = &Measure> {
        self.parts.iter().flat_map(|p| p.measures.iter())
    }
}

impl Harmony {
    /// Root with accidentals, e.g. "B♭" or "F♯"
    pub fn root_name(&self) -> String {
        let accidental = if self.root_alter >= 0 { "♯" } else { "♭" };
        format!("{}{}", self.root_step, accidental.repeat(self.root_alter.unsigned_abs() as usize))
    }

    /// Root and kind, e.g. "B♭ major-seventh"
    pub fn label(&self) -> String {
        if self.kind.is_empty() {
            self.root_name()
        } else {
            format!("{} {}", self.root_name(), self.kind)
        }
    }
}
