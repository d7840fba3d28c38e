//! MusicXML format converters

pub mod score;

// Re-export for convenience
pub use score::{parse_score, parse_score_file, MxError, Score};
