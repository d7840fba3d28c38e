//! Error types for the theory core
//!
//! Both core operations validate eagerly and hand the offending value back
//! to the caller. Nothing here is clamped, wrapped or defaulted.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Key signature accidental count outside -7..=7
    #[error("invalid accidental count {0}: must be between -7 and 7")]
    InvalidAccidentalCount(i32),

    /// Root note is not one of the 12 canonical chromatic names
    #[error("invalid root note '{0}': expected one of C, C#, D, D#, E, F, F#, G, G#, A, A#, B")]
    InvalidRootNote(String),
}
