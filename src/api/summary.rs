//! MusicXML summary export

use super::helpers::{js_error, serialize};
use crate::config::Settings;
use crate::converters::musicxml::parse_score;
use crate::report::ScoreSummary;
use wasm_bindgen::prelude::*;

/// Summarize a MusicXML document as a structured object
#[wasm_bindgen(js_name = summarizeMusicXml)]
pub fn summarize_musicxml(xml: &str) -> Result<JsValue, JsValue> {
    let score = parse_score(xml).map_err(|e| js_error("summarizeMusicXml", e))?;
    serialize(&ScoreSummary::from_score(&score), "summarizeMusicXml")
}

/// Summarize a MusicXML document as the plain-text report
///
/// `settings_yaml` may be empty for defaults.
#[wasm_bindgen(js_name = summarizeMusicXmlText)]
pub fn summarize_musicxml_text(xml: &str, settings_yaml: &str) -> Result<String, JsValue> {
    let settings = Settings::from_yaml(settings_yaml)
        .map_err(|e| js_error("summarizeMusicXmlText", e))?;
    let score = parse_score(xml).map_err(|e| js_error("summarizeMusicXmlText", e))?;
    Ok(ScoreSummary::from_score(&score).render_text(&settings))
}
