//! Theory core exports

use super::helpers::{js_error, serialize};
use crate::models::PitchClass;
use crate::theory;
use wasm_bindgen::prelude::*;

/// Key name for an accidental count (-7..=7, negative = flats)
#[wasm_bindgen(js_name = resolveKeySignature)]
pub fn resolve_key_signature(accidentals: i32) -> Result<String, JsValue> {
    theory::resolve_key_signature(accidentals)
        .map(str::to_string)
        .map_err(|e| js_error("resolveKeySignature", e))
}

/// Seven chord descriptor strings for the major key on `root`
#[wasm_bindgen(js_name = generateDiatonicChords)]
pub fn generate_diatonic_chords(root: &str) -> Result<js_sys::Array, JsValue> {
    let chords = theory::generate_diatonic_chords(root)
        .map_err(|e| js_error("generateDiatonicChords", e))?;
    log::debug!("[WASM] generateDiatonicChords({}) -> {} chords", root, chords.len());
    Ok(chords.into_iter().map(JsValue::from).collect())
}

/// Structured chords: degree, quality, root/third/fifth/seventh
#[wasm_bindgen(js_name = diatonicChordTable)]
pub fn diatonic_chord_table(root: &str) -> Result<JsValue, JsValue> {
    let root: PitchClass = root.parse().map_err(|e| js_error("diatonicChordTable", e))?;
    serialize(&theory::diatonic_seventh_chords(root), "diatonicChordTable")
}
