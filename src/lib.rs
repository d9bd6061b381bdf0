pub mod config;
pub mod error;
pub mod pitch;
pub mod playback;
pub mod sequence;
pub mod widget;

pub use config::WidgetConfig;
pub use error::*;
pub use pitch::{note_for, NoteName, Pitch};
pub use sequence::{compile_sequence, PlaybackEvent, ScheduledEvent, Sequence};
pub use widget::MelodyWidget;

/// Compile text and report each note with its start offset, as JSON.
/// This is what the command line and the wasm bindings print.
pub fn schedule_json(text: &str) -> Result<String, serde_json::Error> {
    let sequence = compile_sequence(text);
    let scheduled: Vec<ScheduledEvent<'_>> = sequence.schedule().collect();
    serde_json::to_string_pretty(&scheduled)
}
