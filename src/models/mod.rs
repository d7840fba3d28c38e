//! Models module
//!
//! Value types shared by the theory core, the MusicXML summary and the
//! WASM API.

pub mod chord;
pub mod key_signature;
pub mod pitch_class;

// Re-export commonly used types
pub use chord::{ChordQuality, DiatonicChord};
pub use key_signature::{KeySignature, Mode};
pub use pitch_class::PitchClass;
