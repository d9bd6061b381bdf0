//! # Melody Widget
//!
//! The surface a host UI binds to: the current text and its change handler, whether
//! playback is running, which character is highlighted, and start/stop actions.
//!
//! The widget owns its synth and clock outright. They are handed over at
//! [`MelodyWidget::mount`] and the synth is disposed when the widget is dropped, so
//! cleanup happens however the widget goes away.
//!
//! ## Typing feedback
//! When the text grows by appending, the last appended character is sounded once,
//! right away, for a fixed short duration. This bypasses the scheduler entirely: no
//! highlight, no clock, no change to playback state. Audio failures are logged and
//! otherwise ignored.

use log::{debug, warn};

use crate::config::WidgetConfig;
use crate::pitch::note_for;
use crate::playback::{Clock, PlaybackScheduler, PlaybackStatus, Synth};

pub struct MelodyWidget<S: Synth, C: Clock> {
    synth: S,
    clock: C,
    scheduler: PlaybackScheduler,
    text: String,
    typing_feedback: f64,
    disposed: bool,
}

impl<S: Synth, C: Clock> MelodyWidget<S, C> {
    /// Take ownership of the audio resources and create an empty widget.
    pub fn mount(synth: S, clock: C, config: WidgetConfig) -> Self {
        debug!("Mounting melody widget");
        MelodyWidget {
            synth,
            clock,
            scheduler: PlaybackScheduler::new(config.completion_margin),
            text: String::new(),
            typing_feedback: config.typing_feedback,
            disposed: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Change handler for the text input.
    ///
    /// Plays typing feedback for an appended character. Never affects a running
    /// playback session, which works from the text as it was when it started.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        let appended = text
            .strip_prefix(self.text.as_str())
            .and_then(|added| added.chars().last());
        self.text = text;

        if let Some(glyph) = appended {
            self.sound_keystroke(glyph);
        }
    }

    /// Replace the text without typing feedback, e.g. when loading it from elsewhere.
    pub fn replace_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    fn sound_keystroke(&mut self, glyph: char) {
        let pitch = match note_for(glyph) {
            Some(pitch) => pitch,
            None => return,
        };
        if let Err(e) = self.synth.ensure_active() {
            warn!("Could not activate audio for typing feedback: {}", e);
        }
        if let Err(e) = self.synth.trigger_note(pitch, self.typing_feedback, None) {
            warn!("Could not play typing feedback {}: {}", pitch, e);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Position of the highlighted character, in characters from the start of the text
    pub fn cursor(&self) -> Option<usize> {
        self.scheduler.cursor()
    }

    pub fn status(&self) -> PlaybackStatus {
        self.scheduler.status()
    }

    pub fn last_outcome(&self) -> Option<PlaybackStatus> {
        self.scheduler.last_outcome()
    }

    /// Start playing the current text. See [`PlaybackScheduler::start`] for when this
    /// is rejected.
    pub fn start_playback(&mut self) -> bool {
        self.scheduler
            .start(&self.text, &mut self.synth, &mut self.clock)
    }

    pub fn stop_playback(&mut self) {
        self.scheduler.stop(&mut self.synth, &mut self.clock);
    }

    /// Fire whatever the clock says is due. The host calls this from its event loop.
    pub fn tick(&mut self) {
        self.scheduler.tick(&mut self.synth, &mut self.clock);
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Stop playback and release the synth. Dropping the widget does the same.
    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.scheduler.stop(&mut self.synth, &mut self.clock);
        self.synth.dispose();
        debug!("Melody widget unmounted");
    }
}

impl<S: Synth, C: Clock> Drop for MelodyWidget<S, C> {
    fn drop(&mut self) {
        self.release();
    }
}
