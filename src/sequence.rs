//! # Sequence Compiler
//!
//! Compiles typed text into an ordered list of playback events.
//!
//! ## Rules
//! - A letter appends an event with its pitch and the default short duration (0.2s)
//! - `.` sustains the previous event to 3.0s
//! - `,` sustains the previous event to 1.0s
//! - Anything else is ignored
//!
//! Sustain characters overwrite rather than add, so `a,,` holds for 1.0s and `a,.`
//! holds for 3.0s. A sustain with no note before it does nothing. Compilation cannot
//! fail.
//!
//! ## Timing
//! Events play back to back with a silent [`NOTE_GAP`] after each one, so event `i`
//! starts at the sum of `duration + NOTE_GAP` over the events before it.
//!
//! ```rust
//! use typetune::compile_sequence;
//!
//! let sequence = compile_sequence("hi, there.");
//! assert_eq!(sequence.len(), 7);
//! assert_eq!(sequence.events()[1].duration, 1.0);
//! assert_eq!(sequence.events()[6].duration, 3.0);
//! ```

use serde::Serialize;

use crate::pitch::{note_for, Pitch};

/// Duration of a plain note, in seconds
pub const DEFAULT_NOTE_DURATION: f64 = 0.2;

/// Duration set by a `.` after a note
pub const FULL_STOP_SUSTAIN: f64 = 3.0;

/// Duration set by a `,` after a note
pub const COMMA_SUSTAIN: f64 = 1.0;

/// Silence after every note before the next one starts
pub const NOTE_GAP: f64 = 0.1;

/// One note to play, tied back to the character that produced it.
///
/// `source_index` counts characters, not bytes, so it can be used directly as the
/// highlight position in the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackEvent {
    pub source_index: usize,
    pub pitch: Pitch,
    pub duration: f64,
}

/// Compiled events in source order. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    events: Vec<PlaybackEvent>,
}

/// An event paired with its start time relative to the beginning of playback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent<'a> {
    pub offset: f64,
    #[serde(flatten)]
    pub event: &'a PlaybackEvent,
}

impl Sequence {
    pub fn events(&self) -> &[PlaybackEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlaybackEvent> {
        self.events.get(index)
    }

    /// Each event with its cumulative start offset.
    pub fn schedule(&self) -> impl Iterator<Item = ScheduledEvent<'_>> {
        self.events.iter().scan(0.0, |offset, event| {
            let scheduled = ScheduledEvent {
                offset: *offset,
                event,
            };
            *offset += event.duration + NOTE_GAP;
            Some(scheduled)
        })
    }

    /// Total playback time, including the gap after the last note.
    pub fn total_duration(&self) -> f64 {
        self.events.iter().map(|e| e.duration + NOTE_GAP).sum()
    }
}

/// Compile text into a playback sequence.
pub fn compile_sequence(text: &str) -> Sequence {
    let mut events: Vec<PlaybackEvent> = Vec::new();
    for (index, glyph) in text.chars().enumerate() {
        if let Some(pitch) = note_for(glyph) {
            events.push(PlaybackEvent {
                source_index: index,
                pitch,
                duration: DEFAULT_NOTE_DURATION,
            });
        } else if let Some(sustain) = sustain_for(glyph) {
            // A sustain before any note has nothing to extend
            if let Some(last) = events.last_mut() {
                last.duration = sustain;
            }
        }
    }

    Sequence { events }
}

fn sustain_for(glyph: char) -> Option<f64> {
    match glyph {
        '.' => Some(FULL_STOP_SUSTAIN),
        ',' => Some(COMMA_SUSTAIN),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::NoteName;

    fn event(source_index: usize, name: NoteName, octave: u8, duration: f64) -> PlaybackEvent {
        PlaybackEvent {
            source_index,
            pitch: Pitch::new(name, octave),
            duration,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(compile_sequence("").is_empty());
        assert!(compile_sequence("   \t\n").is_empty());
        assert!(compile_sequence("123 !?").is_empty());
    }

    #[test]
    fn test_single_letter() {
        let sequence = compile_sequence("a");
        assert_eq!(sequence.events(), &[event(0, NoteName::C, 4, 0.2)]);
    }

    #[test]
    fn test_full_stop_sustain() {
        let sequence = compile_sequence("a.");
        assert_eq!(sequence.events(), &[event(0, NoteName::C, 4, 3.0)]);
    }

    #[test]
    fn test_last_sustain_wins() {
        assert_eq!(compile_sequence("a,,").events()[0].duration, 1.0);
        assert_eq!(compile_sequence("a,.").events()[0].duration, 3.0);
        assert_eq!(compile_sequence("a.,").events()[0].duration, 1.0);
    }

    #[test]
    fn test_leading_sustain_is_dropped() {
        assert!(compile_sequence(".").is_empty());
        assert!(compile_sequence(", .").is_empty());
        let sequence = compile_sequence(".a");
        assert_eq!(sequence.events(), &[event(1, NoteName::C, 4, 0.2)]);
    }

    #[test]
    fn test_two_letters_in_order() {
        let sequence = compile_sequence("ab");
        assert_eq!(
            sequence.events(),
            &[event(0, NoteName::C, 4, 0.2), event(1, NoteName::D, 4, 0.2)]
        );
    }

    #[test]
    fn test_sustain_skips_other_characters() {
        // The space between 'a' and '.' does not reset the most recent note
        let sequence = compile_sequence("a . b");
        assert_eq!(
            sequence.events(),
            &[event(0, NoteName::C, 4, 3.0), event(4, NoteName::D, 4, 0.2)]
        );
    }

    #[test]
    fn test_uppercase_and_character_positions() {
        // 'é' is one character, so 'Z' sits at index 2 even though it is byte 3
        let sequence = compile_sequence("Hé Z");
        assert_eq!(
            sequence.events(),
            &[event(0, NoteName::C, 5, 0.2), event(3, NoteName::G, 3, 0.2)]
        );
    }

    #[test]
    fn test_source_indices_strictly_increase() {
        let sequence = compile_sequence("The quick brown fox, jumps. Over the lazy dog!");
        let indices: Vec<usize> = sequence.events().iter().map(|e| e.source_index).collect();
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_schedule_offsets() {
        let sequence = compile_sequence("a.b,c");
        let offsets: Vec<f64> = sequence.schedule().map(|s| s.offset).collect();
        assert_eq!(offsets.len(), 3);
        assert!((offsets[0] - 0.0).abs() < 1e-9);
        assert!((offsets[1] - 3.1).abs() < 1e-9);
        assert!((offsets[2] - 4.2).abs() < 1e-9);
        assert!((sequence.total_duration() - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_total_duration_empty() {
        assert_eq!(compile_sequence("").total_duration(), 0.0);
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_string(&compile_sequence("a,")).unwrap();
        assert_eq!(json, r#"[{"sourceIndex":0,"pitch":"C4","duration":1.0}]"#);
    }
}
