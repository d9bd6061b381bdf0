//! # Note Mapper
//!
//! Maps a typed character to the pitch it plays.
//!
//! The mapping is a fixed, case-insensitive table over the 26 ASCII letters. Letters
//! `a` through `u` climb the white keys from C4 to B6; `v` through `z` drop back down to
//! octave 3. Every other glyph has no pitch, which is a normal result rather than an
//! error.
//!
//! ```rust
//! use typetune::pitch::{note_for, NoteName, Pitch};
//!
//! assert_eq!(note_for('a'), Some(Pitch::new(NoteName::C, 4)));
//! assert_eq!(note_for('Z').unwrap().to_string(), "G3");
//! assert_eq!(note_for('7'), None);
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// Note letter names (white keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    /// Semitones above C within the same octave
    fn semitone(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    fn letter(self) -> char {
        match self {
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
            NoteName::A => 'A',
            NoteName::B => 'B',
        }
    }
}

/// A symbolic pitch in scientific notation, e.g. `C4` (middle C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub name: NoteName,
    pub octave: u8,
}

impl Pitch {
    pub const fn new(name: NoteName, octave: u8) -> Self {
        Pitch { name, octave }
    }

    /// MIDI note number, with C4 = 60.
    pub fn midi_note(&self) -> u8 {
        (self.octave + 1) * 12 + self.name.semitone()
    }

    /// Equal-tempered frequency in Hz, with A4 = 440.
    pub fn frequency(&self) -> f64 {
        440.0 * 2f64.powf((f64::from(self.midi_note()) - 69.0) / 12.0)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name.letter(), self.octave)
    }
}

impl Serialize for Pitch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

use NoteName::{A, B, C, D, E, F, G};

/// Pitch for each letter, indexed by `letter - 'a'`.
const NOTE_MAP: [Pitch; 26] = [
    Pitch::new(C, 4), // a
    Pitch::new(D, 4), // b
    Pitch::new(E, 4), // c
    Pitch::new(F, 4), // d
    Pitch::new(G, 4), // e
    Pitch::new(A, 4), // f
    Pitch::new(B, 4), // g
    Pitch::new(C, 5), // h
    Pitch::new(D, 5), // i
    Pitch::new(E, 5), // j
    Pitch::new(F, 5), // k
    Pitch::new(G, 5), // l
    Pitch::new(A, 5), // m
    Pitch::new(B, 5), // n
    Pitch::new(C, 6), // o
    Pitch::new(D, 6), // p
    Pitch::new(E, 6), // q
    Pitch::new(F, 6), // r
    Pitch::new(G, 6), // s
    Pitch::new(A, 6), // t
    Pitch::new(B, 6), // u
    Pitch::new(C, 3), // v
    Pitch::new(D, 3), // w
    Pitch::new(E, 3), // x
    Pitch::new(F, 3), // y
    Pitch::new(G, 3), // z
];

/// Look up the pitch for a single character.
///
/// Case-insensitive. Returns `None` for anything that is not an ASCII letter.
pub fn note_for(glyph: char) -> Option<Pitch> {
    let lower = glyph.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some(NOTE_MAP[(lower as u8 - b'a') as usize])
    } else {
        None
    }
}
