//! # Error Types
//!
//! This module defines the error type for the theory engine.
//!
//! Errors are split by how strict the engine is about the input:
//! - Pitch data (note names, bass notes, frequencies) is strict. A bad value is a data bug
//!   and surfaces as an error naming the offending value.
//! - Figures and suspension types are lenient. An unknown one falls back to a default
//!   (root-position triad, 4-3 suspension) and is logged instead of failing.
//!
//! ## Usage
//! ```rust
//! use partimento::{build_chord, TheoryError};
//!
//! match build_chord("C#", 3, "6/3") {
//!     Ok(chord) => println!("{}", chord),
//!     Err(TheoryError::UnsupportedBassNote { note, figure, key }) => {
//!         eprintln!("{} is not in {} (figure {})", note, key, figure);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TheoryError {
    /// A note name that is not one of the chromatic pitch classes.
    ///
    /// # Example
    /// ```
    /// # use partimento::TheoryError;
    /// let err = TheoryError::InvalidNote("H".to_string());
    /// assert_eq!(err.to_string(), "Invalid note: H");
    /// ```
    #[error("Invalid note: {0}")]
    InvalidNote(String),

    /// A bass note outside the diatonic collection of the active key.
    ///
    /// # Example
    /// ```
    /// # use partimento::TheoryError;
    /// let err = TheoryError::UnsupportedBassNote {
    ///     note: "F#".to_string(),
    ///     figure: "6/3".to_string(),
    ///     key: "C major".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Cannot resolve figure 6/3 for bass F#: not in C major");
    /// ```
    #[error("Cannot resolve figure {figure} for bass {note}: not in {key}")]
    UnsupportedBassNote {
        note: String,
        figure: String,
        key: String,
    },

    /// A frequency that cannot name a pitch (zero, negative, NaN or infinite).
    #[error("Invalid frequency: {0} Hz")]
    InvalidFrequency(f64),

    /// An octave outside the supported range, see [`check_octave`](crate::pitch::check_octave).
    ///
    /// # Example
    /// ```
    /// # use partimento::TheoryError;
    /// let err = TheoryError::InvalidOctave(5000);
    /// assert_eq!(err.to_string(), "Octave out of range: 5000");
    /// ```
    #[error("Octave out of range: {0}")]
    InvalidOctave(i32),

    /// A key string that could not be parsed (e.g. "H", "Cq"), or a tonic with a double
    /// accidental.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A bass-line token that is neither a scale degree, a solfege syllable nor a note name.
    #[error("Invalid scale degree: {0}")]
    InvalidScaleDegree(String),

    /// A catalog entry that does not exist.
    #[error("Unknown {category} pattern: {name}")]
    UnknownPattern { category: String, name: String },

    /// Invalid YAML progression document.
    #[error("Invalid progression: {0}")]
    ProgressionError(String),
}
