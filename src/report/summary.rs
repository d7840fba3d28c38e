//! Score summary
//!
//! Collapses a parsed `Score` into the facts the report prints, running the
//! first key signature through the theory core on the way.

use crate::config::{DegreeLabel, Settings};
use crate::converters::musicxml::score::{Score, ScorePart};
use crate::models::{DiatonicChord, KeySignature, Mode};
use crate::theory::diatonic_seventh_chords;
use serde::Serialize;

const RULE: &str = "---------------------------------";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub title: Option<String>,
    pub parts: Vec<ScorePart>,
    pub total_measures: usize,
    pub total_notes: usize,
    pub total_rests: usize,
    pub harmonies: Vec<HarmonyEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyReport>,
}

/// A chord symbol and where it sits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarmonyEntry {
    pub part_id: String,
    pub measure: String,
    pub label: String,
}

/// Outcome of resolving the score's key signature
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum KeyReport {
    Resolved {
        fifths: i32,
        mode: Mode,
        name: String,
        /// Only filled for major keys
        diatonic_chords: Vec<DiatonicChord>,
    },
    Invalid {
        fifths: i32,
        error: String,
    },
}

impl ScoreSummary {
    pub fn from_score(score: &Score) -> Self {
        let harmonies = score
            .parts
            .iter()
            .flat_map(|part| {
                part.measures.iter().flat_map(move |measure| {
                    measure.harmonies.iter().map(move |harmony| HarmonyEntry {
                        part_id: part.id.clone(),
                        measure: measure.number.clone(),
                        label: harmony.label(),
                    })
                })
            })
            .collect();

        let key = score.first_key().map(|attr| match KeySignature::new(attr.fifths) {
            Ok(signature) => {
                let diatonic_chords = match attr.mode {
                    Mode::Major => diatonic_seventh_chords(signature.major_tonic()).to_vec(),
                    _ => Vec::new(),
                };
                KeyReport::Resolved {
                    fifths: attr.fifths,
                    mode: attr.mode.clone(),
                    name: signature.key_name(&attr.mode),
                    diatonic_chords,
                }
            }
            Err(err) => {
                log::warn!("score key signature rejected: {}", err);
                KeyReport::Invalid {
                    fifths: attr.fifths,
                    error: err.to_string(),
                }
            }
        });

        ScoreSummary {
            title: score.title().map(str::to_string),
            parts: score.part_list.clone(),
            total_measures: score.total_measures(),
            total_notes: score.total_notes(),
            total_rests: score.total_rests(),
            harmonies,
            key,
        }
    }

    /// Plain-text report
    pub fn render_text(&self, settings: &Settings) -> String {
        let style = settings.accidentals;
        let mut output = String::new();

        output.push_str(&format!("{}\nMusicXML File Summary\n{}\n", RULE, RULE));

        match &self.title {
            Some(title) => output.push_str(&format!("Title: {}\n", title)),
            None => output.push_str("Title: (Not specified)\n"),
        }

        output.push_str(&format!("Number of Parts: {}\n", self.parts.len()));
        output.push_str("Part Names:\n");
        for part in &self.parts {
            output.push_str(&format!("  - {} (ID: {})\n", part.name, part.id));
        }

        output.push_str(&format!("Total Measures (across all parts): {}\n", self.total_measures));
        output.push_str(&format!("Total Notes (across all parts): {}\n", self.total_notes));
        if self.total_rests > 0 {
            output.push_str(&format!("  of which rests: {}\n", self.total_rests));
        }

        match &self.key {
            None => output.push_str("Key: (Not specified)\n"),
            Some(KeyReport::Invalid { error, .. }) => {
                output.push_str(&format!("Key: invalid ({})\n", error));
            }
            Some(KeyReport::Resolved { fifths, name, diatonic_chords, .. }) => {
                output.push_str(&format!(
                    "Key: {} ({})\n",
                    style.apply(name),
                    describe_accidentals(*fifths)
                ));
                if settings.show_diatonic_chords && !diatonic_chords.is_empty() {
                    output.push_str("Diatonic 7th Chords:\n");
                    for chord in diatonic_chords {
                        output.push_str(&format!(
                            "  {:<7} {}\n",
                            degree_label(chord, settings.degree_labels),
                            chord
                        ));
                    }
                }
            }
        }

        if settings.show_harmonies && !self.harmonies.is_empty() {
            output.push_str(&format!("Harmonies ({}):\n", self.harmonies.len()));
            for entry in &self.harmonies {
                output.push_str(&format!(
                    "  - {} ({}, measure {})\n",
                    style.apply(&entry.label),
                    entry.part_id,
                    entry.measure
                ));
            }
        }

        output.push_str(RULE);
        output.push('\n');
        output
    }
}

fn describe_accidentals(fifths: i32) -> String {
    let count = fifths.unsigned_abs();
    match (fifths.signum(), count) {
        (0, _) => "no accidentals".to_string(),
        (1, 1) => "1 sharp".to_string(),
        (1, n) => format!("{} sharps", n),
        (_, 1) => "1 flat".to_string(),
        (_, n) => format!("{} flats", n),
    }
}

fn degree_label(chord: &DiatonicChord, label: DegreeLabel) -> String {
    match label {
        DegreeLabel::Roman => chord.roman_numeral(),
        DegreeLabel::Integer => chord.degree.to_string(),
    }
}
