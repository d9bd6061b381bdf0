//! Audio backend interface
//!
//! The synthesis engine itself is a black box. The scheduler and widget only need to
//! wake it up, ask it for a note, silence it, and release it.

use std::io::Write;

use crate::error::TuneError;
use crate::pitch::Pitch;

/// A monophonic-enough audio backend.
pub trait Synth {
    /// Make sure the audio context is running.
    ///
    /// Called before the first sound of every user interaction. Backends that need no
    /// activation can rely on the default.
    fn ensure_active(&mut self) -> Result<(), TuneError> {
        Ok(())
    }

    /// Play `pitch` for `duration` seconds, at clock time `at` or immediately.
    fn trigger_note(
        &mut self,
        pitch: Pitch,
        duration: f64,
        at: Option<f64>,
    ) -> Result<(), TuneError>;

    /// Silence anything currently sounding.
    fn release_all(&mut self) -> Result<(), TuneError>;

    /// Release the backend's resources. Called exactly once, at unmount.
    fn dispose(&mut self);
}

/// Writes each note as a line of text instead of producing sound.
///
/// Used by the command-line player.
pub struct ConsoleSynth<W: Write> {
    out: W,
    disposed: bool,
}

impl<W: Write> ConsoleSynth<W> {
    pub fn new(out: W) -> Self {
        ConsoleSynth {
            out,
            disposed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn check_alive(&self) -> Result<(), TuneError> {
        if self.disposed {
            return Err(TuneError::audio("synth has been disposed"));
        }
        Ok(())
    }
}

impl<W: Write> Synth for ConsoleSynth<W> {
    fn ensure_active(&mut self) -> Result<(), TuneError> {
        self.check_alive()
    }

    fn trigger_note(
        &mut self,
        pitch: Pitch,
        duration: f64,
        at: Option<f64>,
    ) -> Result<(), TuneError> {
        self.check_alive()?;
        match at {
            Some(at) => writeln!(
                self.out,
                "♪ {:<3} {:>5.1} Hz  {:.2}s @ {:.2}s",
                pitch.to_string(),
                pitch.frequency(),
                duration,
                at
            )?,
            None => writeln!(
                self.out,
                "♪ {:<3} {:>5.1} Hz  {:.2}s",
                pitch.to_string(),
                pitch.frequency(),
                duration
            )?,
        }
        Ok(())
    }

    fn release_all(&mut self) -> Result<(), TuneError> {
        self.check_alive()?;
        writeln!(self.out, "■ silence")?;
        Ok(())
    }

    fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            // Nothing to report to if the sink itself is gone
            let _ = self.out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::NoteName;

    fn output(synth: ConsoleSynth<Vec<u8>>) -> String {
        String::from_utf8(synth.into_inner()).unwrap()
    }

    #[test]
    fn test_console_synth_writes_notes() {
        let a4 = Pitch::new(NoteName::A, 4);
        let c4 = Pitch::new(NoteName::C, 4);
        let mut synth = ConsoleSynth::new(Vec::new());
        synth.trigger_note(a4, 0.2, None).unwrap();
        synth.trigger_note(c4, 3.0, Some(1.5)).unwrap();
        synth.release_all().unwrap();

        let text = output(synth);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("♪ A4"));
        assert!(lines[0].contains("440.0 Hz"));
        assert!(lines[1].starts_with("♪ C4"));
        assert!(lines[1].contains("3.00s @ 1.50s"));
        assert_eq!(lines[2], "■ silence");
    }

    #[test]
    fn test_console_synth_rejects_after_dispose() {
        let mut synth = ConsoleSynth::new(Vec::new());
        synth.dispose();
        assert!(synth.ensure_active().is_err());
        let c4 = Pitch::new(NoteName::C, 4);
        assert!(synth.trigger_note(c4, 0.2, None).is_err());
        assert!(output(synth).is_empty());
    }
}
