//! MusicXML → score summary model
//!
//! Reads the handful of `score-partwise` elements a summary needs
//! (titles, part list, measures, notes, harmonies, key attributes)
//! with roxmltree. Everything else in the document is ignored.

mod model;
mod parse;

pub use model::*;
pub use parse::{parse_score, parse_score_file};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MxError {
    #[error("xml parse error: {0}")]
    Xml(String),
    #[error("invalid musicxml: {0}")]
    Invalid(String),
    #[error("unsupported musicxml format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MxError>;
