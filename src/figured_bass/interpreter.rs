//! Diatonic resolution of figures above a bass note

use serde::Serialize;

use super::figures::figure_intervals;
use crate::error::TheoryError;
use crate::key::Key;
use crate::pitch::NoteName;

/// One interval of a figure, resolved against a bass note in a key
///
/// # Fields
/// - `interval`: the figure's interval number (3 = third, 9 = ninth, ...)
/// - `note`: the spelled scale tone at that interval
/// - `semitones`: actual size of the interval in semitones (a 9th above C is 14)
/// - `octave_offset`: how many times the letters pass C going up from the bass.
///   The target's octave number is the bass octave plus this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedInterval {
    pub interval: u8,
    pub note: NoteName,
    pub semitones: i32,
    pub octave_offset: i32,
}

/// Resolve a figure above a bass note in C major.
///
/// # Example
/// ```
/// use partimento::resolve_figure;
///
/// let resolved = resolve_figure("G", "6/4").unwrap();
/// let notes: Vec<String> = resolved.iter().map(|r| r.note.to_string()).collect();
/// assert_eq!(notes, ["C", "E"]);
/// assert_eq!(resolved[0].semitones, 5); // perfect 4th
/// ```
pub fn resolve_figure(bass: &str, figure: &str) -> Result<Vec<ResolvedInterval>, TheoryError> {
    resolve_figure_in(&Key::C_MAJOR, bass, figure)
}

/// Resolve a figure above a bass note in the given key.
///
/// Each interval number `n` steps `n - 1` scale tones up from the bass, so the result
/// always lands on a note of the key. Interval sizes follow from the spelled notes: a
/// 6th above E in C major (C) is 8 semitones, above F (D) it is 9.
///
/// # Errors
/// - [`TheoryError::InvalidNote`] if `bass` is not a note name
/// - [`TheoryError::UnsupportedBassNote`] if `bass` is not a tone of `key`
///
/// Unknown figures are not an error; they resolve as `5/3`.
pub fn resolve_figure_in(
    key: &Key,
    bass: &str,
    figure: &str,
) -> Result<Vec<ResolvedInterval>, TheoryError> {
    let bass_note: NoteName = bass.parse()?;
    resolve_on(key, bass_note, figure)
}

pub(crate) fn resolve_on(
    key: &Key,
    bass: NoteName,
    figure: &str,
) -> Result<Vec<ResolvedInterval>, TheoryError> {
    let scale = key.scale();
    let bass_index = key
        .position_of(bass)
        .ok_or_else(|| TheoryError::UnsupportedBassNote {
            note: bass.to_string(),
            figure: figure.to_string(),
            key: key.to_string(),
        })?;

    let intervals = figure_intervals(figure).into_value();
    Ok(intervals
        .iter()
        .map(|&interval| resolve_interval(&scale, bass, bass_index, interval))
        .collect())
}

fn resolve_interval(
    scale: &[NoteName; 7],
    bass: NoteName,
    bass_index: usize,
    interval: u8,
) -> ResolvedInterval {
    let steps = interval.saturating_sub(1) as usize;
    let note = scale[(bass_index + steps) % 7];

    // Octave numbers change at C, so count letter steps from the bass letter's position
    let octave_offset = ((bass.letter.index() + steps) / 7) as i32;
    let semitones = octave_offset * 12 + note.chromatic_offset() - bass.chromatic_offset();

    log::trace!(
        "{} above {}: {} ({} semitones)",
        interval,
        bass,
        note,
        semitones
    );

    ResolvedInterval {
        interval,
        note,
        semitones,
        octave_offset,
    }
}
