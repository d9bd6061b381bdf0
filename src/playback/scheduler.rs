//! Playback scheduler
//!
//! Runs one compiled sequence through a [`Clock`], sounding each note on the [`Synth`]
//! and moving the highlight cursor in step with it.
//!
//! Every trigger is scheduled up front at an absolute time (`anchor + offset`), so
//! notes can never fire out of order. One extra trigger marks the end of the session.
//! Stopping clears the clock's queue; triggers are also tagged with their session id,
//! so a straggler from an earlier session is ignored rather than sounding into a new
//! one.

use log::{debug, trace, warn};

use super::clock::{Clock, Trigger, TriggerKind};
use super::synth::Synth;
use crate::config::DEFAULT_COMPLETION_MARGIN;
use crate::sequence::{compile_sequence, Sequence};

/// Lifecycle of a playback session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Running,
    /// Stopped early by [`PlaybackScheduler::stop`]
    Cancelled,
    /// Played through to the end
    Completed,
}

/// State for one run through a sequence.
///
/// Only exists while the session is running. How it ended is kept in
/// [`PlaybackScheduler::last_outcome`].
#[derive(Debug)]
pub struct PlaybackSession {
    pub id: u64,
    pub sequence: Sequence,
    pub cursor: Option<usize>,
}

/// Drives at most one [`PlaybackSession`] at a time.
#[derive(Debug)]
pub struct PlaybackScheduler {
    session: Option<PlaybackSession>,
    next_id: u64,
    completion_margin: f64,
    last_outcome: Option<PlaybackStatus>,
}

impl Default for PlaybackScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_COMPLETION_MARGIN)
    }
}

impl PlaybackScheduler {
    pub fn new(completion_margin: f64) -> Self {
        PlaybackScheduler {
            session: None,
            next_id: 1,
            completion_margin,
            last_outcome: None,
        }
    }

    /// `Running` while a session is active, `Idle` otherwise.
    pub fn status(&self) -> PlaybackStatus {
        if self.session.is_some() {
            PlaybackStatus::Running
        } else {
            PlaybackStatus::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Source index of the note currently highlighted
    pub fn cursor(&self) -> Option<usize> {
        self.session.as_ref().and_then(|s| s.cursor)
    }

    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    /// How the most recent session ended: `Completed` or `Cancelled`.
    pub fn last_outcome(&self) -> Option<PlaybackStatus> {
        self.last_outcome
    }

    /// Start playing `text`.
    ///
    /// Returns `false`, leaving everything untouched, if a session is already running
    /// or the text is empty or whitespace-only.
    ///
    /// Text with no playable characters still starts a session; its sequence is empty,
    /// so it completes before this call returns.
    pub fn start<S: Synth, C: Clock>(&mut self, text: &str, synth: &mut S, clock: &mut C) -> bool {
        if self.is_running() {
            debug!("Playback already running, ignoring start");
            return false;
        }
        if text.trim().is_empty() {
            debug!("Nothing to play, ignoring start");
            return false;
        }

        if let Err(e) = synth.ensure_active() {
            warn!("Could not activate audio: {}", e);
        }

        let sequence = compile_sequence(text);
        let id = self.next_id;
        self.next_id += 1;
        debug!("Starting session {} ({} notes)", id, sequence.len());

        if sequence.is_empty() {
            self.session = Some(PlaybackSession {
                id,
                sequence,
                cursor: None,
            });
            self.finish(PlaybackStatus::Completed, clock);
            return true;
        }

        clock.start();
        let anchor = clock.now();
        for (i, scheduled) in sequence.schedule().enumerate() {
            clock.schedule_at(
                anchor + scheduled.offset,
                Trigger {
                    session: id,
                    kind: TriggerKind::Event(i),
                },
            );
        }
        clock.schedule_at(
            anchor + sequence.total_duration() + self.completion_margin,
            Trigger {
                session: id,
                kind: TriggerKind::Complete,
            },
        );

        self.session = Some(PlaybackSession {
            id,
            sequence,
            cursor: None,
        });
        true
    }

    /// Cancel the running session. Does nothing when idle.
    pub fn stop<S: Synth, C: Clock>(&mut self, synth: &mut S, clock: &mut C) {
        if !self.is_running() {
            return;
        }
        if let Err(e) = synth.release_all() {
            warn!("Could not silence audio: {}", e);
        }
        self.finish(PlaybackStatus::Cancelled, clock);
    }

    /// Fire every trigger the clock reports as due.
    pub fn tick<S: Synth, C: Clock>(&mut self, synth: &mut S, clock: &mut C) {
        for (at, trigger) in clock.take_due() {
            let session = match self.session.as_mut() {
                Some(session) if session.id == trigger.session => session,
                _ => {
                    trace!("Dropping stale trigger {:?}", trigger);
                    continue;
                }
            };

            match trigger.kind {
                TriggerKind::Event(i) => {
                    let event = match session.sequence.get(i) {
                        Some(event) => event,
                        None => continue,
                    };
                    trace!("{:.3}s: {} at {}", at, event.pitch, event.source_index);
                    if let Err(e) = synth.trigger_note(event.pitch, event.duration, Some(at)) {
                        warn!("Could not play {}: {}", event.pitch, e);
                    }
                    // Stays put through the gap until the next note moves it
                    session.cursor = Some(event.source_index);
                }
                TriggerKind::Complete => {
                    self.finish(PlaybackStatus::Completed, clock);
                }
            }
        }
    }

    fn finish<C: Clock>(&mut self, outcome: PlaybackStatus, clock: &mut C) {
        clock.cancel_all();
        clock.stop();
        // Dropping the session clears the cursor with it
        if let Some(session) = self.session.take() {
            debug!("Playback session {} {:?}", session.id, outcome);
        }
        self.last_outcome = Some(outcome);
    }
}
