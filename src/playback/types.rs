//! Playback data type definitions
//!
//! These are the values handed to the external audio player. Times are in seconds from
//! the start of the plan.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::{NoteName, Pitch};

/// A single sounding pitch, with everything a player needs to voice it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackNote {
    pub note: NoteName,
    pub octave: i32,
    pub midi: i32,
    pub frequency: f64,
}

impl From<Pitch> for PlaybackNote {
    fn from(pitch: Pitch) -> Self {
        Self {
            note: pitch.note,
            octave: pitch.octave,
            midi: pitch.midi(),
            frequency: pitch.frequency(),
        }
    }
}

/// Notes that start together
///
/// # Fields
/// - `start_time`: seconds from the start of the plan
/// - `duration`: seconds
/// - `velocity`: 0.0-1.0
/// - `notes`: one note for melodies, several for chords
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackEvent {
    pub start_time: f64,
    pub duration: f64,
    pub velocity: f64,
    pub notes: Vec<PlaybackNote>,
}

impl PlaybackEvent {
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    pub fn midi_notes(&self) -> Vec<i32> {
        self.notes.iter().map(|n| n.midi).collect()
    }
}

/// Metronome click; `accent` marks a downbeat
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetronomeClick {
    pub start_time: f64,
    pub accent: bool,
}

/// A complete, timed plan for the player
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackPlan {
    pub events: Vec<PlaybackEvent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clicks: Vec<MetronomeClick>,
    pub total_duration: f64,
}

/// How an interval is sounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalMode {
    /// Both notes together
    Harmonic,
    /// Lower note, then upper note
    Melodic,
    /// Harmonic, a pause, then melodic
    #[default]
    Both,
}

impl FromStr for IntervalMode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "harmonic" => Ok(IntervalMode::Harmonic),
            "melodic" => Ok(IntervalMode::Melodic),
            "both" => Ok(IntervalMode::Both),
            _ => Err(TheoryError::UnknownPattern {
                category: "interval mode".to_string(),
                name: s.to_string(),
            }),
        }
    }
}

/// Melody playback speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    /// Seconds per note
    pub fn note_duration(self) -> f64 {
        match self {
            Speed::Slow => 0.6,
            Speed::Medium => 0.4,
            Speed::Fast => 0.25,
        }
    }
}

impl FromStr for Speed {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(Speed::Slow),
            "medium" => Ok(Speed::Medium),
            "fast" => Ok(Speed::Fast),
            _ => Err(TheoryError::UnknownPattern {
                category: "speed".to_string(),
                name: s.to_string(),
            }),
        }
    }
}

/// Durations, gaps and velocities used by the schedulers.
///
/// Every field has a default, so a YAML `timing:` map only needs the keys it overrides:
///
/// ```yaml
/// timing:
///   chord-duration: 1.0
///   final-chord-duration: 2.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlaybackTiming {
    /// Seconds each chord sounds
    pub chord_duration: f64,
    /// Seconds the last chord of a progression sounds
    pub final_chord_duration: f64,
    /// Seconds between chord onsets
    pub chord_spacing: f64,
    /// Seconds the resolution of a suspension sounds
    pub resolution_duration: f64,
    pub harmonic_duration: f64,
    pub melodic_note_duration: f64,
    /// Seconds between the two notes of a melodic interval
    pub melodic_spacing: f64,
    /// Silence between the harmonic and melodic renditions of an interval
    pub harmonic_melodic_pause: f64,
    pub chord_velocity: f64,
    pub note_velocity: f64,
    pub bass_velocity: f64,
    /// Silence between play-along bass notes
    pub play_along_gap: f64,
    /// Metronome clicks before a play-along starts
    pub count_in: u32,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            chord_duration: 0.8,
            final_chord_duration: 1.5,
            chord_spacing: 0.85,
            resolution_duration: 1.2,
            harmonic_duration: 2.0,
            melodic_note_duration: 1.0,
            melodic_spacing: 1.0,
            harmonic_melodic_pause: 0.8,
            chord_velocity: 0.6,
            note_velocity: 0.7,
            bass_velocity: 0.5,
            play_along_gap: 0.1,
            count_in: 4,
        }
    }
}

impl PlaybackTiming {
    /// Check that durations are non-negative and velocities lie in 0.0-1.0.
    pub fn validate(&self) -> Result<(), TheoryError> {
        let durations = [
            ("chord-duration", self.chord_duration),
            ("final-chord-duration", self.final_chord_duration),
            ("chord-spacing", self.chord_spacing),
            ("resolution-duration", self.resolution_duration),
            ("harmonic-duration", self.harmonic_duration),
            ("melodic-note-duration", self.melodic_note_duration),
            ("melodic-spacing", self.melodic_spacing),
            ("harmonic-melodic-pause", self.harmonic_melodic_pause),
            ("play-along-gap", self.play_along_gap),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(TheoryError::ProgressionError(format!(
                    "timing {} must be a non-negative number of seconds, got {}",
                    name, value
                )));
            }
        }

        let velocities = [
            ("chord-velocity", self.chord_velocity),
            ("note-velocity", self.note_velocity),
            ("bass-velocity", self.bass_velocity),
        ];
        for (name, value) in velocities {
            if !(0.0..=1.0).contains(&value) {
                return Err(TheoryError::ProgressionError(format!(
                    "timing {} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
