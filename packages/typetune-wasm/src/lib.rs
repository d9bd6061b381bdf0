use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SequenceSummary {
    note_count: usize,
    total_duration: f64,
}

/// Compile text to its playback schedule as a JSON array of
/// `{ offset, sourceIndex, pitch, duration }`
#[wasm_bindgen]
pub fn compile_sequence(text: &str) -> Result<String, JsValue> {
    typetune::schedule_json(text).map_err(json_error)
}

/// Pitch name for a single character, e.g. "C4", or undefined
#[wasm_bindgen]
pub fn note_for(glyph: char) -> Option<String> {
    typetune::note_for(glyph).map(|pitch| pitch.to_string())
}

/// Seconds a full playback of `text` takes, gaps included
#[wasm_bindgen]
pub fn total_duration(text: &str) -> f64 {
    typetune::compile_sequence(text).total_duration()
}

/// Note count and total duration as JSON, for the playback button's label
#[wasm_bindgen]
pub fn summarize(text: &str) -> Result<String, JsValue> {
    let sequence = typetune::compile_sequence(text);
    let summary = SequenceSummary {
        note_count: sequence.len(),
        total_duration: sequence.total_duration(),
    };
    serde_json::to_string(&summary).map_err(json_error)
}

fn json_error(e: serde_json::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}
