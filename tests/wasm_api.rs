//! WASM export tests
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use score_theory::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_resolve_key_signature() {
    assert_eq!(resolve_key_signature(-3).unwrap(), "E♭");
    assert!(resolve_key_signature(8).is_err());
}

#[wasm_bindgen_test]
fn test_generate_diatonic_chords() {
    let chords = generate_diatonic_chords("C").unwrap();
    assert_eq!(chords.length(), 7);
    assert_eq!(chords.get(4), JsValue::from_str("G Dominant 7th (G, B, D, F)"));
    assert!(generate_diatonic_chords("H").is_err());
}

#[wasm_bindgen_test]
fn test_diatonic_chord_table() {
    let table = diatonic_chord_table("G").unwrap();
    assert!(js_sys::Array::is_array(&table));
}

#[wasm_bindgen_test]
fn test_summarize_musicxml_text() {
    let xml = r#"<score-partwise><part-list><score-part id="P1"><part-name>Voice</part-name></score-part></part-list></score-partwise>"#;
    let text = summarize_musicxml_text(xml, "").unwrap();
    assert!(text.contains("  - Voice (ID: P1)"));
    assert!(summarize_musicxml("<nope/>").is_err());
}
