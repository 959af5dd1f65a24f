//! # Pitch and Frequency
//!
//! Spelled note names, pitches with scientific octave numbers, and conversion to and
//! from equal-tempered frequencies (A4 = 440 Hz).
//!
//! ## Octave System
//! - Octave numbers change at C, regardless of key: `B3` is directly below `C4`
//! - Accidentals never change the written octave: `B#3` sounds as `C4`, `Cb4` sounds as `B3`
//! - MIDI number: `(octave + 1) * 12 + semitone`, so C4 = 60 and A4 = 69
//!
//! ## Example
//! ```rust
//! use partimento::pitch::{note_to_frequency, frequency_to_note};
//!
//! assert_eq!(note_to_frequency("A", 4).unwrap(), 440.0);
//! assert!((note_to_frequency("C", 4).unwrap() - 261.63).abs() < 0.01);
//!
//! let pitch = frequency_to_note(277.18).unwrap();
//! assert_eq!(pitch.to_string(), "C#4");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::TheoryError;

/// Reference frequency of A4 in Hz.
pub const A4_FREQUENCY: f64 = 440.0;

/// MIDI number of A4.
pub const A4_MIDI: i32 = 69;

/// Lowest supported octave.
pub const MIN_OCTAVE: i32 = -900;

/// Highest supported octave. Every voice built over a bass between [`MIN_OCTAVE`] and
/// this has a finite, non-zero frequency.
pub const MAX_OCTAVE: i32 = 900;

const TIE_TOLERANCE: f64 = 1e-9;

/// Check that an octave is within [`MIN_OCTAVE`]..=[`MAX_OCTAVE`].
///
/// # Errors
/// [`TheoryError::InvalidOctave`] otherwise.
pub fn check_octave(octave: i32) -> Result<i32, TheoryError> {
    if (MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
        Ok(octave)
    } else {
        Err(TheoryError::InvalidOctave(octave))
    }
}

/// Note letters C through B, in scale order starting at C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Letter {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position within C D E F G A B (C = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Letter at a position, wrapping modulo 7
    pub fn from_index(index: usize) -> Letter {
        Self::ALL[index % 7]
    }

    /// Semitones above C of the unaltered letter
    pub fn natural_semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// Accidentals from double flat to double sharp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    #[default]
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone adjustment applied to the letter
    pub fn offset(self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    pub fn from_offset(offset: i32) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Parse the accidental part of a note name ("", "#", "b", "##", "x", "bb", or ♯/♭)
    pub fn parse(s: &str) -> Option<Accidental> {
        match s {
            "" => Some(Accidental::Natural),
            "#" | "♯" => Some(Accidental::Sharp),
            "b" | "♭" => Some(Accidental::Flat),
            "##" | "x" | "♯♯" => Some(Accidental::DoubleSharp),
            "bb" | "♭♭" => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }
}

/// A spelled pitch class: letter plus accidental ("C", "F#", "Bb")
///
/// Enharmonic spellings are distinct values (`C#` != `Db`) but share a
/// [`semitone`](Self::semitone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoteName {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl NoteName {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub const fn natural(letter: Letter) -> Self {
        Self {
            letter,
            accidental: Accidental::Natural,
        }
    }

    /// Pitch class, 0-11 with C = 0
    pub fn semitone(self) -> i32 {
        self.chromatic_offset().rem_euclid(12)
    }

    /// Semitones above the C of the written octave, before wrapping (`Cb` = -1, `B#` = 12)
    pub fn chromatic_offset(self) -> i32 {
        self.letter.natural_semitone() + self.accidental.offset()
    }

    /// Sharp spelling of a pitch class (0 = C, 1 = C#, ... 11 = B)
    pub fn from_semitone_sharp(semitone: i32) -> Self {
        let (letter, accidental) = match semitone.rem_euclid(12) {
            0 => (Letter::C, Accidental::Natural),
            1 => (Letter::C, Accidental::Sharp),
            2 => (Letter::D, Accidental::Natural),
            3 => (Letter::D, Accidental::Sharp),
            4 => (Letter::E, Accidental::Natural),
            5 => (Letter::F, Accidental::Natural),
            6 => (Letter::F, Accidental::Sharp),
            7 => (Letter::G, Accidental::Natural),
            8 => (Letter::G, Accidental::Sharp),
            9 => (Letter::A, Accidental::Natural),
            10 => (Letter::A, Accidental::Sharp),
            _ => (Letter::B, Accidental::Natural),
        };
        Self::new(letter, accidental)
    }
}

impl FromStr for NoteName {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::InvalidNote(s.to_string()))?;
        let accidental = Accidental::parse(chars.as_str())
            .ok_or_else(|| TheoryError::InvalidNote(s.to_string()))?;
        Ok(Self::new(letter, accidental))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.symbol())
    }
}

impl Serialize for NoteName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A note name in a specific octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pitch {
    pub note: NoteName,
    pub octave: i32,
}

impl Pitch {
    pub const fn new(note: NoteName, octave: i32) -> Self {
        Self { note, octave }
    }

    /// Checked constructor: the octave must be in the supported range.
    pub fn try_new(note: NoteName, octave: i32) -> Result<Self, TheoryError> {
        Ok(Self::new(note, check_octave(octave)?))
    }

    /// MIDI note number (C4 = 60). Not clamped to 0-127; saturates far outside the
    /// supported octave range.
    pub fn midi(self) -> i32 {
        self.octave
            .saturating_add(1)
            .saturating_mul(12)
            .saturating_add(self.note.chromatic_offset())
    }

    pub fn frequency(self) -> f64 {
        midi_to_frequency(self.midi())
    }

    /// Sharp-spelled pitch for a MIDI number
    pub fn from_midi(midi: i32) -> Self {
        Self::new(NoteName::from_semitone_sharp(midi), midi.div_euclid(12) - 1)
    }

    /// Letter steps above C0, ignoring accidentals. Two pitches a diatonic step apart
    /// differ by exactly 1.
    pub fn diatonic_position(self) -> i32 {
        self.octave
            .saturating_mul(7)
            .saturating_add(self.note.letter.index() as i32)
    }
}

impl FromStr for Pitch {
    type Err = TheoryError;

    /// Parse strings like "G3", "Eb4", "C#-1"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .char_indices()
            .skip(1)
            .find(|(_, c)| c.is_ascii_digit() || *c == '-')
            .map(|(i, _)| i)
            .ok_or_else(|| TheoryError::InvalidNote(s.to_string()))?;
        let (name, octave) = trimmed.split_at(split);
        let note: NoteName = name
            .parse()
            .map_err(|_| TheoryError::InvalidNote(s.to_string()))?;
        let octave: i32 = octave
            .parse()
            .map_err(|_| TheoryError::InvalidNote(s.to_string()))?;
        Self::try_new(note, octave)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}

/// Frequency of a MIDI note number: `440 * 2^((midi - 69) / 12)`
///
/// Whole octaves are applied as exact powers of two, so moving a note up an octave
/// doubles its frequency exactly.
pub fn midi_to_frequency(midi: i32) -> f64 {
    let relative = midi.saturating_sub(A4_MIDI);
    let octaves = relative.div_euclid(12);
    let semitones = relative.rem_euclid(12);
    A4_FREQUENCY * 2f64.powi(octaves) * 2f64.powf(semitones as f64 / 12.0)
}

/// Convert a note name and octave to a frequency in Hz.
///
/// Sharp and flat spellings of the same pitch class give the same frequency.
///
/// # Errors
/// - [`TheoryError::InvalidNote`] if `note` is not a note name
/// - [`TheoryError::InvalidOctave`] if `octave` is out of range
///
/// # Example
/// ```
/// use partimento::pitch::note_to_frequency;
///
/// assert_eq!(note_to_frequency("C#", 4).unwrap(), note_to_frequency("Db", 4).unwrap());
/// assert!(note_to_frequency("H", 4).is_err());
/// ```
pub fn note_to_frequency(note: &str, octave: i32) -> Result<f64, TheoryError> {
    let name: NoteName = note.parse()?;
    Ok(Pitch::try_new(name, octave)?.frequency())
}

/// Nearest chromatic pitch to a frequency, spelled with sharps.
///
/// An exact half-semitone tie rounds toward the nearer octave boundary:
/// down for pitch classes C through F, up for F# through B.
///
/// # Errors
/// [`TheoryError::InvalidFrequency`] for zero, negative or non-finite input, and for
/// frequencies whose nearest pitch lies outside the supported octave range.
pub fn frequency_to_note(frequency: f64) -> Result<Pitch, TheoryError> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(TheoryError::InvalidFrequency(frequency));
    }
    let exact = A4_MIDI as f64 + 12.0 * (frequency / A4_FREQUENCY).log2();
    let pitch = Pitch::from_midi(round_to_semitone(exact));
    check_octave(pitch.octave).map_err(|_| TheoryError::InvalidFrequency(frequency))?;
    Ok(pitch)
}

fn round_to_semitone(exact: f64) -> i32 {
    let below = exact.floor();
    if (exact - below - 0.5).abs() < TIE_TOLERANCE {
        let below = below as i32;
        if below.rem_euclid(12) < 6 {
            below
        } else {
            below + 1
        }
    } else {
        exact.round() as i32
    }
}

/// Equal-tempered transposition of a root note by `semitones`.
///
/// # Example
/// ```
/// use partimento::pitch::interval_frequency;
///
/// // Perfect fifth above A4
/// let e5 = interval_frequency("A", 4, 7).unwrap();
/// assert!((e5 - 659.26).abs() < 0.01);
/// ```
pub fn interval_frequency(root: &str, octave: i32, semitones: i32) -> Result<f64, TheoryError> {
    let root_frequency = note_to_frequency(root, octave)?;
    Ok(root_frequency * 2f64.powf(semitones as f64 / 12.0))
}
