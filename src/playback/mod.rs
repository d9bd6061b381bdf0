//! # Playback Module
//!
//! Plays a compiled [`Sequence`](crate::Sequence) back in time, sounding each note and
//! highlighting the character that produced it.
//!
//! ## Sub-modules
//! - `clock` - [`Clock`] trait, the [`Trigger`] queue, [`VirtualClock`] and [`SystemClock`]
//! - `synth` - [`Synth`] trait for the audio backend, plus [`ConsoleSynth`]
//! - `scheduler` - [`PlaybackScheduler`], the session state machine
//!
//! ## Timing
//! Notes play back to back. Each note lasts its own duration and is followed by a
//! 0.1s silent gap, during which the cursor stays on the note just played. After the
//! last gap (plus a small completion margin) the session ends: the cursor clears,
//! any leftover triggers are cancelled and the scheduler returns to idle.
//!
//! ## Example
//! ```rust
//! use typetune::playback::{PlaybackScheduler, PlaybackStatus, Synth, VirtualClock};
//! use typetune::{Pitch, TuneError};
//!
//! struct Silent;
//! impl Synth for Silent {
//!     fn trigger_note(&mut self, _: Pitch, _: f64, _: Option<f64>) -> Result<(), TuneError> {
//!         Ok(())
//!     }
//!     fn release_all(&mut self) -> Result<(), TuneError> {
//!         Ok(())
//!     }
//!     fn dispose(&mut self) {}
//! }
//!
//! let mut scheduler = PlaybackScheduler::default();
//! let mut clock = VirtualClock::new();
//! let mut synth = Silent;
//!
//! assert!(scheduler.start("ab", &mut synth, &mut clock));
//! scheduler.tick(&mut synth, &mut clock);
//! assert_eq!(scheduler.cursor(), Some(0));
//!
//! clock.advance(0.35);
//! scheduler.tick(&mut synth, &mut clock);
//! assert_eq!(scheduler.cursor(), Some(1));
//!
//! clock.advance(1.0);
//! scheduler.tick(&mut synth, &mut clock);
//! assert_eq!(scheduler.status(), PlaybackStatus::Idle);
//! assert_eq!(scheduler.last_outcome(), Some(PlaybackStatus::Completed));
//! ```

mod clock;
mod scheduler;
mod synth;


pub use clock::{Clock, SystemClock, Timeline, Trigger, TriggerKind, VirtualClock};
pub use scheduler::{PlaybackScheduler, PlaybackSession, PlaybackStatus};
pub use synth::{ConsoleSynth, Synth};
