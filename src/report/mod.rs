//! Score reports built from parsed MusicXML

pub mod summary;

pub use summary::{HarmonyEntry, KeyReport, ScoreSummary};
