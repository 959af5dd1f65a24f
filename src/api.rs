//! # Trainer API
//!
//! Entry points for the trainers: look a catalog entry up, realize it in a key and
//! schedule it for the player, in one call.
//!
//! ## Plan Functions
//!
//! - [`cadence_plan()`] - a cadence pattern as a chord progression
//! - [`schema_plan()`] - a galant schema as a chord progression
//! - [`rule_of_octave_plan()`] - the ascending or descending Rule of the Octave
//! - [`suspension_plan()`] - preparation, suspension and resolution
//! - [`interval_plan()`] - an interval above a root, harmonic and/or melodic
//! - [`decoration_plan()`] - a melodic decoration at a chosen speed
//! - [`pattern_plan()`] - any catalog pattern by category and name
//!
//! Catalog lookups are strict: an unknown name is [`TheoryError::UnknownPattern`]. The
//! one exception is [`suspension_plan()`], which keeps the suspension builder's 4-3
//! fallback. Every plan fails with [`TheoryError::InvalidOctave`] for an octave outside
//! the supported range.
//!
//! ## Typical Usage
//!
//! ```rust
//! use partimento::api::cadence_plan;
//! use partimento::playback::PlaybackTiming;
//! use partimento::Key;
//!
//! let key: Key = "F".parse()?;
//! let plan = cadence_plan("simple-authentic", &key, 3, &PlaybackTiming::default())?;
//!
//! assert_eq!(plan.events.len(), 2);
//! assert_eq!(plan.events[1].notes[0].note.to_string(), "F"); // ends on the tonic
//! # Ok::<(), partimento::TheoryError>(())
//! ```

use crate::catalog::{self, Category, Direction};
use crate::error::TheoryError;
use crate::key::Key;
use crate::pitch::{check_octave, Pitch};
use crate::playback::{
    schedule_chords, schedule_interval, schedule_melody, schedule_suspension, IntervalMode,
    PlaybackPlan, PlaybackTiming, Speed,
};
use crate::realize::{realize_melody, realize_pattern};
use crate::suspension::{build_suspension, build_suspension_progression, SuspensionType};

fn progression_plan(
    category: Category,
    name: &str,
    key: &Key,
    octave: i32,
    timing: &PlaybackTiming,
) -> Result<PlaybackPlan, TheoryError> {
    let pattern = catalog::find(category, name)?;
    let chords: Vec<_> = realize_pattern(pattern, key, octave)?
        .into_iter()
        .map(|r| r.chord)
        .collect();
    Ok(schedule_chords(&chords, timing))
}

/// Plan for a cadence ("simple-authentic", "half-cadence", "plagal", ...).
///
/// # Errors
/// [`TheoryError::UnknownPattern`] if there is no such cadence.
pub fn cadence_plan(
    name: &str,
    key: &Key,
    octave: i32,
    timing: &PlaybackTiming,
) -> Result<PlaybackPlan, TheoryError> {
    progression_plan(Category::Cadence, name, key, octave, timing)
}

/// Plan for a galant schema ("prinner", "romanesca", "monte", ...).
///
/// # Errors
/// [`TheoryError::UnknownPattern`] if there is no such schema.
pub fn schema_plan(
    name: &str,
    key: &Key,
    octave: i32,
    timing: &PlaybackTiming,
) -> Result<PlaybackPlan, TheoryError> {
    progression_plan(Category::Schema, name, key, octave, timing)
}

/// Plan for the Rule of the Octave in one direction.
///
/// The descending form starts on degree 8, an octave above the tonic in `octave`.
pub fn rule_of_octave_plan(
    direction: Direction,
    key: &Key,
    octave: i32,
    timing: &PlaybackTiming,
) -> Result<PlaybackPlan, TheoryError> {
    let name = match direction {
        Direction::Ascending => "ascending",
        Direction::Descending => "descending",
    };
    progression_plan(Category::RuleOfOctave, name, key, octave, timing)
}

/// Plan for a suspension type ("7-6", "9-8", "4-3", "2-3").
///
/// Suspensions are voiced from fixed templates in C major. Unknown types play the 4-3
/// suspension.
///
/// # Example
/// ```
/// use partimento::api::suspension_plan;
/// use partimento::playback::PlaybackTiming;
///
/// let plan = suspension_plan("9-8", 3, &PlaybackTiming::default())?;
/// assert_eq!(plan.events.len(), 3);
/// # Ok::<(), partimento::TheoryError>(())
/// ```
pub fn suspension_plan(
    kind: &str,
    octave: i32,
    timing: &PlaybackTiming,
) -> Result<PlaybackPlan, TheoryError> {
    let progression = build_suspension_progression(kind, octave)?;
    Ok(schedule_suspension(&progression, timing))
}

/// Plan for a named interval ("minor-3rd", "perfect-5th", ...) above `root`.
///
/// # Errors
/// [`TheoryError::UnknownPattern`] if the interval name is not in the catalog,
/// [`TheoryError::InvalidOctave`] if `root` is out of range.
pub fn interval_plan(
    name: &str,
    root: Pitch,
    mode: IntervalMode,
    timing: &PlaybackTiming,
) -> Result<PlaybackPlan, TheoryError> {
    let interval = catalog::interval_by_name(name).ok_or_else(|| TheoryError::UnknownPattern {
        category: "interval".to_string(),
        name: name.to_string(),
    })?;
    check_octave(root.octave)?;
    Ok(schedule_interval(root, interval.semitones, mode, timing))
}

/// Plan for a melodic decoration ("turn", "passing-note", ...), transposed to `key`
/// with its first note in `octave`.
///
/// # Errors
/// [`TheoryError::UnknownPattern`] if there is no such decoration.
pub fn decoration_plan(
    name: &str,
    key: &Key,
    octave: i32,
    speed: Speed,
    timing: &PlaybackTiming,
) -> Result<PlaybackPlan, TheoryError> {
    let pattern = catalog::find(Category::Decoration, name)?;
    let melody = realize_melody(pattern.bass_line, key, octave)?;
    Ok(schedule_melody(&melody, speed, timing))
}

/// Plan for any catalog pattern.
///
/// Suspensions are looked up strictly here and then voiced from their templates, so
/// `key` does not apply to them. Decorations play at medium speed.
pub fn pattern_plan(
    category: Category,
    name: &str,
    key: &Key,
    octave: i32,
    timing: &PlaybackTiming,
) -> Result<PlaybackPlan, TheoryError> {
    match category {
        Category::Suspension => {
            let kind: SuspensionType = catalog::find(category, name)?.name.parse()?;
            Ok(schedule_suspension(&build_suspension(kind, octave)?, timing))
        }
        Category::Decoration => decoration_plan(name, key, octave, Speed::default(), timing),
        _ => progression_plan(category, name, key, octave, timing),
    }
}
