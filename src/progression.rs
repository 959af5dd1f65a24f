//! # Progression Documents
//!
//! A progression document is a small YAML file naming either a catalog pattern or a
//! written-out bass line, together with the key, octave and playback timing:
//!
//! ```yaml
//! title: Prinner in G
//! key: G
//! octave: 3
//! pattern: prinner
//! ```
//!
//! ```yaml
//! title: Cadence with a 7-6
//! key: D minor
//! bass-line: [Do, Re, Mi, Re, Do]
//! figures:
//!   - 5/3
//!   - [7/5/3, 6/3]
//!   - 6/3
//!   - 6/4/3
//!   - 5/3
//! timing:
//!   chord-duration: 1.0
//! ```
//!
//! ## Keys
//! - `title` - optional display name
//! - `key` - "C", "Bb", "F#m", "D minor"... (default C major)
//! - `octave` - octave of the tonic in the bass (default 3)
//! - `pattern` - catalog entry name; `category` may be given to disambiguate
//! - `bass-line` / `figures` - used instead of `pattern`; bass tokens are degrees,
//!   solfege or note names, and each figure slot is one figure or a list of them
//! - `speed` - melody speed for decoration patterns (slow, medium, fast)
//! - `timing` - overrides for [`PlaybackTiming`]
//!
//! The document is deserialized into a raw form first and then validated, so every
//! problem surfaces as a [`TheoryError`].

use std::fmt;

use serde::Deserialize;

use crate::catalog::{self, Category, Pattern};
use crate::error::TheoryError;
use crate::key::Key;
use crate::pitch::check_octave;
use crate::playback::{schedule_chords, schedule_melody, PlaybackPlan, PlaybackTiming, Speed};
use crate::realize::{realize_line, realize_pattern, RealizedChord};

/// Default octave of the tonic in the bass
pub const DEFAULT_OCTAVE: i32 = 3;

/// A bass or figure token. YAML reads `5` as a number and `5/3` as a string; both are
/// accepted and kept as text.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum Token {
    Number(u32),
    Text(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum RawFigures {
    One(Token),
    Many(Vec<Token>),
}

impl RawFigures {
    fn into_strings(self) -> Vec<String> {
        match self {
            RawFigures::One(token) => vec![token.to_string()],
            RawFigures::Many(tokens) => tokens.iter().map(Token::to_string).collect(),
        }
    }
}

/// Raw progression document for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawProgression {
    title: Option<String>,
    key: Option<String>,
    octave: Option<i32>,
    category: Option<String>,
    pattern: Option<String>,
    bass_line: Option<Vec<Token>>,
    figures: Option<Vec<RawFigures>>,
    speed: Option<Speed>,
    timing: Option<PlaybackTiming>,
}

/// What a progression plays
#[derive(Debug, Clone, PartialEq)]
pub enum LineSource {
    Pattern(&'static Pattern),
    Line {
        bass_line: Vec<String>,
        figures: Vec<Vec<String>>,
    },
}

/// A validated progression document
#[derive(Debug, Clone, PartialEq)]
pub struct Progression {
    pub title: Option<String>,
    pub key: Key,
    pub octave: i32,
    pub source: LineSource,
    pub speed: Speed,
    pub timing: PlaybackTiming,
}

/// Parse and validate a YAML progression document.
///
/// # Errors
/// [`TheoryError::ProgressionError`] for malformed YAML, a missing or doubled line
/// source, or bad timing; [`TheoryError::InvalidKey`] and
/// [`TheoryError::UnknownPattern`] for bad `key`/`pattern` values.
///
/// # Example
/// ```
/// use partimento::progression::parse_progression;
///
/// let progression = parse_progression("key: G\npattern: half-cadence\n").unwrap();
/// let chords = progression.realize().unwrap();
/// assert_eq!(chords[1].chord.to_string(), "D4 F#4 A4");
/// ```
pub fn parse_progression(source: &str) -> Result<Progression, TheoryError> {
    let raw: RawProgression = serde_yaml::from_str(source)
        .map_err(|e| TheoryError::ProgressionError(e.to_string()))?;

    let key = match &raw.key {
        Some(key) => key.parse()?,
        None => Key::default(),
    };

    let source = match (raw.pattern, raw.bass_line) {
        (Some(_), Some(_)) => {
            return Err(TheoryError::ProgressionError(
                "give either pattern or bass-line, not both".to_string(),
            ))
        }
        (None, None) => {
            return Err(TheoryError::ProgressionError(
                "missing pattern or bass-line".to_string(),
            ))
        }
        (Some(name), None) => {
            if raw.figures.is_some() {
                return Err(TheoryError::ProgressionError(
                    "figures belong with bass-line, not pattern".to_string(),
                ));
            }
            LineSource::Pattern(find_pattern(raw.category.as_deref(), &name)?)
        }
        (None, Some(bass_line)) => LineSource::Line {
            bass_line: bass_line.iter().map(Token::to_string).collect(),
            figures: raw
                .figures
                .unwrap_or_default()
                .into_iter()
                .map(RawFigures::into_strings)
                .collect(),
        },
    };

    let timing = raw.timing.unwrap_or_default();
    timing.validate()?;

    Ok(Progression {
        title: raw.title,
        key,
        octave: check_octave(raw.octave.unwrap_or(DEFAULT_OCTAVE))?,
        source,
        speed: raw.speed.unwrap_or_default(),
        timing,
    })
}

fn find_pattern(category: Option<&str>, name: &str) -> Result<&'static Pattern, TheoryError> {
    match category {
        Some(category) => catalog::find(category.parse::<Category>()?, name),
        None => catalog::by_name(name).ok_or_else(|| TheoryError::UnknownPattern {
            category: "any".to_string(),
            name: name.to_string(),
        }),
    }
}

impl Progression {
    /// Realize the progression into chords in its key.
    pub fn realize(&self) -> Result<Vec<RealizedChord>, TheoryError> {
        match &self.source {
            LineSource::Pattern(pattern) => realize_pattern(pattern, &self.key, self.octave),
            LineSource::Line { bass_line, figures } => {
                let bass: Vec<&str> = bass_line.iter().map(String::as_str).collect();
                let slots: Vec<Vec<&str>> = figures
                    .iter()
                    .map(|slot| slot.iter().map(String::as_str).collect())
                    .collect();
                let slots: Vec<&[&str]> = slots.iter().map(Vec::as_slice).collect();
                realize_line(&self.key, self.octave, &bass, &slots)
            }
        }
    }

    /// Realize and schedule the progression. Decorations play as melodies at the
    /// document's speed; everything else plays as chords.
    pub fn playback(&self) -> Result<PlaybackPlan, TheoryError> {
        let realized = self.realize()?;
        let plan = match &self.source {
            LineSource::Pattern(pattern) if !pattern.is_figured() => {
                let pitches: Vec<_> = realized.iter().map(|r| r.bass).collect();
                schedule_melody(&pitches, self.speed, &self.timing)
            }
            _ => {
                let chords: Vec<_> = realized.into_iter().map(|r| r.chord).collect();
                schedule_chords(&chords, &self.timing)
            }
        };
        Ok(plan)
    }
}
