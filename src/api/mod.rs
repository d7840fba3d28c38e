//! WASM API
//!
//! JavaScript-facing exports. Each function is a thin wrapper that converts
//! arguments, calls into `theory` / `report`, and turns errors into `JsValue`.
//!
//! - `helpers`: serialization and error conversion
//! - `theory`: key signature and diatonic chord lookups
//! - `summary`: MusicXML summaries

pub mod helpers;
pub mod summary;
pub mod theory;

pub use summary::{summarize_musicxml, summarize_musicxml_text};
pub use theory::{diatonic_chord_table, generate_diatonic_chords, resolve_key_signature};
