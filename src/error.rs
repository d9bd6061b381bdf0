//! # Error Types
//!
//! This module defines the error type shared by the typetune library.
//!
//! Nothing in the core is fatal. Unmapped characters are not errors at all, and a
//! rejected playback start is reported through the unchanged status rather than an
//! `Err`. What remains are failures of the collaborators around the core:
//!
//! ## Error Types
//! - `AudioContext` - The audio backend failed to activate, trigger, or release a note
//! - `Config` - Widget configuration YAML is malformed or out of range
//! - `Io` - Reading a configuration file failed
//!
//! Audio errors are caught where they happen (scheduler and widget) and logged with
//! `log::warn!`. They never interrupt typing or the playback state machine.
//!
//! ## Usage
//! ```rust
//! use typetune::{TuneError, WidgetConfig};
//!
//! match WidgetConfig::from_yaml_str("typing-feedback: -1") {
//!     Ok(_) => unreachable!(),
//!     Err(TuneError::Config(message)) => eprintln!("Bad config: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuneError {
    /// The audio backend could not be activated or refused a request.
    ///
    /// # Example
    /// ```
    /// # use typetune::TuneError;
    /// let err = TuneError::audio("context suspended");
    /// assert_eq!(err.to_string(), "Audio context error: context suspended");
    /// ```
    #[error("Audio context error: {message}")]
    AudioContext { message: String },

    /// Invalid widget configuration.
    ///
    /// # Example
    /// ```
    /// # use typetune::TuneError;
    /// let err = TuneError::Config("typing-feedback must be a finite, non-negative number".to_string());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid configuration: typing-feedback must be a finite, non-negative number"
    /// );
    /// ```
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TuneError {
    /// Shorthand for building an [`TuneError::AudioContext`] from any message.
    pub fn audio(message: impl Into<String>) -> Self {
        TuneError::AudioContext {
            message: message.into(),
        }
    }
}

impl From<serde_yaml::Error> for TuneError {
    fn from(e: serde_yaml::Error) -> Self {
        TuneError::Config(e.to_string())
    }
}
