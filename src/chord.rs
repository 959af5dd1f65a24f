//! # Chord Builder
//!
//! Builds playable voicings from a bass note, an octave and a figure.
//!
//! ## Voicing Rules
//! - The bass comes first, in the requested octave
//! - Upper voices follow in the order the figure lists its intervals (`6/4` gives the
//!   4th before the 6th), not sorted by height
//! - Each upper voice is placed above the bass: its octave is the bass octave plus the
//!   number of times the letters pass C on the way up
//! - Coinciding intervals are kept (doubling is allowed)
//!
//! ## Example
//! ```rust
//! use partimento::build_chord;
//!
//! let chord = build_chord("G", 3, "6/4").unwrap();
//! assert_eq!(chord.to_string(), "G3 C4 E4");
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::TheoryError;
use crate::figured_bass::resolve_on;
use crate::key::Key;
use crate::pitch::{check_octave, NoteName, Pitch};

/// A voicing, bass first. Serializes as a list of `{note, octave}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Chord {
    notes: Vec<Pitch>,
}

impl Chord {
    pub fn new(bass: Pitch, upper: Vec<Pitch>) -> Self {
        let mut notes = Vec::with_capacity(upper.len() + 1);
        notes.push(bass);
        notes.extend(upper);
        Self { notes }
    }

    /// All voices, bass first
    pub fn notes(&self) -> &[Pitch] {
        &self.notes
    }

    pub fn bass(&self) -> Pitch {
        self.notes[0]
    }

    pub fn upper(&self) -> &[Pitch] {
        &self.notes[1..]
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Always false: a chord has at least its bass
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn midi_notes(&self) -> Vec<i32> {
        self.notes.iter().map(|p| p.midi()).collect()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pitch) in self.notes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", pitch)?;
        }
        Ok(())
    }
}

/// Build a chord in C major.
///
/// # Errors
/// Propagates the interpreter's errors: [`TheoryError::InvalidNote`] and
/// [`TheoryError::UnsupportedBassNote`]. An out-of-range octave is
/// [`TheoryError::InvalidOctave`]. Unknown figures build a root-position triad.
pub fn build_chord(bass: &str, octave: i32, figure: &str) -> Result<Chord, TheoryError> {
    build_chord_in(&Key::C_MAJOR, bass, octave, figure)
}

/// Build a chord in the given key.
///
/// # Example
/// ```
/// use partimento::{build_chord_in, Key};
///
/// let d_major: Key = "D".parse().unwrap();
/// let chord = build_chord_in(&d_major, "C#", 3, "6/3").unwrap();
/// assert_eq!(chord.to_string(), "C#3 E3 A3");
/// ```
pub fn build_chord_in(
    key: &Key,
    bass: &str,
    octave: i32,
    figure: &str,
) -> Result<Chord, TheoryError> {
    let bass_note: NoteName = bass.parse()?;
    build_chord_on(key, Pitch::new(bass_note, octave), figure)
}

/// Build a chord over an already-placed bass pitch.
///
/// # Errors
/// [`TheoryError::InvalidOctave`] if the bass octave is out of range, otherwise as
/// [`build_chord`].
pub fn build_chord_on(key: &Key, bass: Pitch, figure: &str) -> Result<Chord, TheoryError> {
    check_octave(bass.octave)?;
    let resolved = resolve_on(key, bass.note, figure)?;
    let upper = resolved
        .iter()
        .map(|r| Pitch::new(r.note, bass.octave + r.octave_offset))
        .collect();
    let chord = Chord::new(bass, upper);

    log::debug!("Built {} over {} in {}: {}", figure, bass, key, chord);
    Ok(chord)
}
