//! Music theory core
//!
//! Pure, table-driven computations over validated inputs:
//! - `circle_of_fifths`: accidental count → key name
//! - `diatonic`: root note → major scale → seven diatonic seventh chords
//!
//! Chord qualities come from a fixed per-degree table and are only correct
//! for the natural major scale.

pub mod circle_of_fifths;
pub mod diatonic;
pub mod error;

pub use circle_of_fifths::{
    note_name_at_fifths, resolve_key_signature, resolve_minor_key_signature, MAX_ACCIDENTALS,
};
pub use diatonic::{diatonic_seventh_chords, generate_diatonic_chords, major_scale};
pub use error::TheoryError;
