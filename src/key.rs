//! # Keys and Scale Degrees
//!
//! A key is a tonic plus a mode. It defines the diatonic collection that figures are
//! resolved against: letter names always step through the key's seven scale tones, and
//! the accidentals come from the key rather than from fixed semitone offsets.
//!
//! ## Scale Spelling
//! Each scale has one note per letter. Starting at the tonic's letter, the letters are
//! taken in order and each one receives whatever accidental puts it on the mode's
//! semitone pattern:
//! - Major: 0 2 4 5 7 9 11
//! - Minor (natural): 0 2 3 5 7 8 10
//!
//! So D major is `D E F# G A B C#` and Bb major is `Bb C D Eb F G A`.
//!
//! ## Scale Degrees
//! Degrees 1-7 name the scale tones, 8 is the tonic again an octave up. Bass lines may
//! also be written in solfege (`Do Re Mi Fa Sol La Ti`), which maps onto degrees 1-7.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TheoryError;
use crate::pitch::{check_octave, Accidental, Letter, NoteName, Pitch};

/// Mode of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Major,
    /// Natural minor
    Minor,
}

impl Mode {
    /// Semitones above the tonic for each scale step
    pub fn pattern(self) -> [i32; 7] {
        match self {
            Mode::Major => [0, 2, 4, 5, 7, 9, 11],
            Mode::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => write!(f, "major"),
            Mode::Minor => write!(f, "minor"),
        }
    }
}

/// Tonic and mode. The tonic carries at most a single sharp or flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Key {
    tonic: NoteName,
    mode: Mode,
}

impl Default for Key {
    fn default() -> Self {
        Self::C_MAJOR
    }
}

impl Key {
    pub const C_MAJOR: Key = Key {
        tonic: NoteName::natural(Letter::C),
        mode: Mode::Major,
    };

    /// # Errors
    /// [`TheoryError::InvalidKey`] for a double-sharp or double-flat tonic.
    pub fn new(tonic: NoteName, mode: Mode) -> Result<Self, TheoryError> {
        match tonic.accidental {
            Accidental::DoubleFlat | Accidental::DoubleSharp => {
                Err(TheoryError::InvalidKey(format!("{} {}", tonic, mode)))
            }
            _ => Ok(Self { tonic, mode }),
        }
    }

    pub fn tonic(&self) -> NoteName {
        self.tonic
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The seven spelled scale tones, tonic first
    pub fn scale(&self) -> [NoteName; 7] {
        let pattern = self.mode.pattern();
        let tonic_offset = self.tonic.chromatic_offset();
        let start = self.tonic.letter.index();

        let mut notes = [NoteName::default(); 7];
        for (step, note) in notes.iter_mut().enumerate() {
            let letter = Letter::from_index(start + step);
            let target = tonic_offset + pattern[step];
            // Single-accidental tonics keep every offset within +-2
            let offset = (target - letter.natural_semitone() + 6).rem_euclid(12) - 6;
            let accidental = Accidental::from_offset(offset).unwrap_or_default();
            *note = NoteName::new(letter, accidental);
        }
        notes
    }

    /// Index (0-6) of a note within the scale, if it is a scale tone
    pub fn position_of(&self, note: NoteName) -> Option<usize> {
        self.scale().iter().position(|n| *n == note)
    }

    pub fn contains(&self, note: NoteName) -> bool {
        self.position_of(note).is_some()
    }

    /// Note name of a scale degree (1-8)
    ///
    /// # Example
    /// ```
    /// use partimento::Key;
    ///
    /// let g_major: Key = "G".parse().unwrap();
    /// assert_eq!(g_major.degree_to_note(7).unwrap().to_string(), "F#");
    /// assert!(g_major.degree_to_note(9).is_err());
    /// ```
    pub fn degree_to_note(&self, degree: u8) -> Result<NoteName, TheoryError> {
        match degree {
            1..=8 => Ok(self.scale()[(degree as usize - 1) % 7]),
            _ => Err(TheoryError::InvalidScaleDegree(degree.to_string())),
        }
    }

    /// Pitch of a scale degree, counting upward from the tonic placed in `octave`.
    ///
    /// The octave number increments when the ascending scale passes C, so in G major
    /// degree 4 from octave 3 is C4, and degree 8 is always an octave above degree 1.
    ///
    /// # Errors
    /// [`TheoryError::InvalidScaleDegree`] outside 1-8, [`TheoryError::InvalidOctave`] for
    /// an octave out of range.
    pub fn degree_pitch(&self, degree: u8, octave: i32) -> Result<Pitch, TheoryError> {
        let note = self.degree_to_note(degree)?;
        let steps = self.tonic.letter.index() + degree as usize - 1;
        Ok(Pitch::new(note, check_octave(octave)? + (steps / 7) as i32))
    }
}

impl FromStr for Key {
    type Err = TheoryError;

    /// Parse keys like "C", "G", "Bb", "F# major", "Am", "Ebm", "D minor"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        let (tonic, mode) = if let Some(name) = lower.strip_suffix("major") {
            (&trimmed[..name.len()], Mode::Major)
        } else if let Some(name) = lower.strip_suffix("minor") {
            (&trimmed[..name.len()], Mode::Minor)
        } else if let Some(name) = trimmed.strip_suffix('m') {
            (name, Mode::Minor)
        } else {
            (trimmed, Mode::Major)
        };

        let tonic: NoteName = tonic
            .trim()
            .parse()
            .map_err(|_| TheoryError::InvalidKey(s.to_string()))?;
        Self::new(tonic, mode).map_err(|_| TheoryError::InvalidKey(s.to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.mode)
    }
}

/// Scale degree of a bass-line token: "1"-"8" or a solfege syllable.
///
/// Returns `None` for anything else (including note names).
pub fn parse_degree(token: &str) -> Option<u8> {
    let token = token.trim();
    if let Ok(degree) = token.parse::<u8>() {
        return (1..=8).contains(&degree).then_some(degree);
    }
    match token.to_ascii_lowercase().as_str() {
        "do" | "ut" => Some(1),
        "re" => Some(2),
        "mi" => Some(3),
        "fa" => Some(4),
        "sol" | "so" => Some(5),
        "la" => Some(6),
        "ti" | "si" => Some(7),
        _ => None,
    }
}
