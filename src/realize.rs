//! # Realization
//!
//! Turns bass lines and figures into concrete chords in a key. This is the path a
//! trainer takes from a catalog entry to something the player can sound:
//!
//! ```text
//! catalog pattern -> bass pitches -> figured-bass interpreter -> chords
//! ```
//!
//! ## Bass Tokens
//! A bass token may be a scale degree ("1"-"8"), a solfege syllable ("Do", "Sol") or a
//! note name ("F#"). All three are placed going up from the tonic in the requested
//! octave, so in G major from octave 3, "4", "Do" and "C" give C4, G3 and C4.
//!
//! ## Figure Slots
//! Each bass note has a slot holding zero or more figures. Several figures over one bass
//! (`7/5/3, 6/3`) give successive chords over that bass. An empty or missing slot uses
//! the default root-position figure and is marked as a fallback.

use serde::Serialize;

use crate::catalog::Pattern;
use crate::chord::{build_chord_on, Chord};
use crate::error::TheoryError;
use crate::figured_bass::{is_known_figure, DEFAULT_FIGURE};
use crate::key::{parse_degree, Key};
use crate::pitch::{check_octave, NoteName, Pitch};

/// One chord of a realized line
///
/// # Fields
/// - `bass`: the placed bass pitch
/// - `figure`: the figure as written (the default figure for an empty slot)
/// - `fallback`: true when the figure was missing or unknown and `5/3` was used
/// - `chord`: bass plus resolved upper voices
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizedChord {
    pub bass: Pitch,
    pub figure: String,
    pub fallback: bool,
    pub chord: Chord,
}

/// Place a bass token in `key`, counting up from the tonic in `octave`.
///
/// # Errors
/// - [`TheoryError::InvalidScaleDegree`] if the token is not a degree, syllable or note name
/// - [`TheoryError::InvalidOctave`] if `octave` is out of range
pub fn bass_pitch(key: &Key, token: &str, octave: i32) -> Result<Pitch, TheoryError> {
    if let Some(degree) = parse_degree(token) {
        return key.degree_pitch(degree, octave);
    }

    let note: NoteName = token
        .trim()
        .parse()
        .map_err(|_| TheoryError::InvalidScaleDegree(token.to_string()))?;
    let wraps = note.letter.index() < key.tonic().letter.index();
    Ok(Pitch::new(note, check_octave(octave)? + i32::from(wraps)))
}

/// Realize a bass line with one figure slot per bass note.
///
/// # Errors
/// - [`TheoryError::ProgressionError`] if there are more figure slots than bass notes
/// - bass placement errors from [`bass_pitch`]
/// - [`TheoryError::UnsupportedBassNote`] for note-name bass tokens outside the key
///
/// # Example
/// ```
/// use partimento::realize::realize_line;
/// use partimento::Key;
///
/// let g_major: Key = "G".parse().unwrap();
/// let chords = realize_line(&g_major, 3, &["5", "1"], &[&["7"], &["5/3"]]).unwrap();
/// assert_eq!(chords[0].chord.to_string(), "D4 F#4 A4 C5");
/// assert_eq!(chords[1].chord.to_string(), "G3 B3 D4");
/// ```
pub fn realize_line(
    key: &Key,
    octave: i32,
    bass_line: &[&str],
    figures: &[&[&str]],
) -> Result<Vec<RealizedChord>, TheoryError> {
    if figures.len() > bass_line.len() {
        return Err(TheoryError::ProgressionError(format!(
            "{} figure slots for {} bass notes",
            figures.len(),
            bass_line.len()
        )));
    }

    let mut realized = Vec::with_capacity(bass_line.len());
    for (i, token) in bass_line.iter().enumerate() {
        let bass = bass_pitch(key, token, octave)?;
        let slot = figures.get(i).copied().unwrap_or_default();

        if slot.is_empty() {
            realized.push(RealizedChord {
                bass,
                figure: DEFAULT_FIGURE.to_string(),
                fallback: true,
                chord: build_chord_on(key, bass, DEFAULT_FIGURE)?,
            });
            continue;
        }

        for figure in slot {
            let figure = figure.trim();
            realized.push(RealizedChord {
                bass,
                figure: figure.to_string(),
                fallback: !is_known_figure(figure),
                chord: build_chord_on(key, bass, figure)?,
            });
        }
    }

    log::debug!(
        "Realized {} bass notes in {} as {} chords",
        bass_line.len(),
        key,
        realized.len()
    );
    Ok(realized)
}

/// Realize a catalog pattern.
///
/// Figured patterns go through [`realize_line`]. Decorations are melodies, so each of
/// their notes becomes a single-note chord (see [`realize_melody`]) with an empty figure.
pub fn realize_pattern(
    pattern: &Pattern,
    key: &Key,
    octave: i32,
) -> Result<Vec<RealizedChord>, TheoryError> {
    if pattern.is_figured() {
        return realize_line(key, octave, pattern.bass_line, pattern.figures);
    }

    Ok(realize_melody(pattern.bass_line, key, octave)?
        .into_iter()
        .map(|pitch| RealizedChord {
            bass: pitch,
            figure: String::new(),
            fallback: false,
            chord: Chord::new(pitch, Vec::new()),
        })
        .collect())
}

/// Realize a melody written as C-major letters (or scale degrees) in another key.
///
/// The first note is placed as a scale degree from `octave`; every following note takes
/// the octave nearest the note before it, so steps stay steps.
///
/// # Example
/// ```
/// use partimento::realize::realize_melody;
/// use partimento::Key;
///
/// let d_major: Key = "D".parse().unwrap();
/// let turn = realize_melody(&["C", "D", "C", "B", "C"], &d_major, 4).unwrap();
/// let names: Vec<String> = turn.iter().map(|p| p.to_string()).collect();
/// assert_eq!(names, ["D4", "E4", "D4", "C#4", "D4"]);
/// ```
pub fn realize_melody(
    melody: &[&str],
    key: &Key,
    octave: i32,
) -> Result<Vec<Pitch>, TheoryError> {
    let mut pitches: Vec<Pitch> = Vec::with_capacity(melody.len());

    for token in melody {
        let degree = melody_degree(token)?;
        let pitch = match pitches.last() {
            None => key.degree_pitch(degree, octave)?,
            Some(previous) => {
                let note = key.degree_to_note(degree)?;
                let candidate = Pitch::new(note, previous.octave);
                let shift = (candidate.midi() - previous.midi() + 6).div_euclid(12);
                Pitch::new(note, previous.octave - shift)
            }
        };
        pitches.push(pitch);
    }

    Ok(pitches)
}

fn melody_degree(token: &str) -> Result<u8, TheoryError> {
    if let Some(degree) = parse_degree(token) {
        return Ok(degree);
    }
    token
        .trim()
        .parse::<NoteName>()
        .ok()
        .and_then(|note| Key::C_MAJOR.position_of(note))
        .map(|index| index as u8 + 1)
        .ok_or_else(|| TheoryError::InvalidScaleDegree(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, Category};

    fn rendered(chords: &[RealizedChord]) -> Vec<String> {
        chords.iter().map(|c| c.chord.to_string()).collect()
    }

    #[test]
    fn test_bass_placement() {
        let g_major: Key = "G".parse().unwrap();
        assert_eq!(bass_pitch(&g_major, "1", 3).unwrap().to_string(), "G3");
        assert_eq!(bass_pitch(&g_major, "4", 3).unwrap().to_string(), "C4");
        assert_eq!(bass_pitch(&g_major, "Do", 3).unwrap().to_string(), "G3");
        assert_eq!(bass_pitch(&g_major, "C", 3).unwrap().to_string(), "C4");
        assert_eq!(bass_pitch(&g_major, "F#", 3).unwrap().to_string(), "F#4");
        assert_eq!(bass_pitch(&Key::C_MAJOR, "8", 3).unwrap().to_string(), "C4");
        assert_eq!(
            bass_pitch(&Key::C_MAJOR, "9", 3),
            Err(TheoryError::InvalidScaleDegree("9".to_string()))
        );
        assert!(bass_pitch(&Key::C_MAJOR, "zz", 3).is_err());
    }

    #[test]
    fn test_half_cadence_in_c() {
        let pattern = catalog::find(Category::Cadence, "half-cadence").unwrap();
        let chords = realize_pattern(pattern, &Key::C_MAJOR, 3).unwrap();
        assert_eq!(rendered(&chords), ["C3 E3 G3", "G3 B3 D4"]);
        assert!(chords.iter().all(|c| !c.fallback));
    }

    #[test]
    fn test_multiple_figures_per_slot() {
        let fenaroli = catalog::find(Category::Schema, "fenaroli").unwrap();
        let chords = realize_pattern(fenaroli, &Key::C_MAJOR, 3).unwrap();
        assert_eq!(chords.len(), 6);
        assert_eq!(chords[1].bass, chords[2].bass);
        assert_eq!(chords[1].figure, "7/5/3");
        assert_eq!(chords[2].figure, "6/3");
        assert_eq!(chords[2].chord.to_string(), "D3 F3 B3");
    }

    #[test]
    fn test_missing_and_unknown_figures() {
        let chords = realize_line(&Key::C_MAJOR, 3, &["1", "5", "1"], &[&["6/3"], &[]]).unwrap();
        assert_eq!(chords.len(), 3);
        assert!(!chords[0].fallback);
        assert!(chords[1].fallback);
        assert_eq!(chords[1].figure, "5/3");
        assert!(chords[2].fallback);

        let unknown = realize_line(&Key::C_MAJOR, 3, &["1"], &[&["13"]]).unwrap();
        assert!(unknown[0].fallback);
        assert_eq!(unknown[0].figure, "13");
        assert_eq!(unknown[0].chord.to_string(), "C3 E3 G3");
    }

    #[test]
    fn test_too_many_figure_slots() {
        assert!(matches!(
            realize_line(&Key::C_MAJOR, 3, &["1"], &[&["5/3"], &["6/3"]]),
            Err(TheoryError::ProgressionError(_))
        ));
    }

    #[test]
    fn test_out_of_key_note_token() {
        let result = realize_line(&Key::C_MAJOR, 3, &["Eb"], &[&["5/3"]]);
        assert!(matches!(result, Err(TheoryError::UnsupportedBassNote { .. })));
    }

    #[test]
    fn test_extreme_octave_is_an_error() {
        let line = realize_line(&Key::C_MAJOR, i32::MAX, &["1", "B"], &[&["5/3"], &["6/3"]]);
        assert_eq!(line.unwrap_err(), TheoryError::InvalidOctave(i32::MAX));
        assert!(bass_pitch(&Key::C_MAJOR, "B", i32::MIN).is_err());
        assert!(realize_melody(&["C", "D"], &Key::C_MAJOR, i32::MAX).is_err());
    }

    #[test]
    fn test_every_figured_pattern_realizes_in_several_keys() {
        for key in ["C", "G", "F", "D", "Bb", "Am", "Em", "Dm"] {
            let key: Key = key.parse().unwrap();
            for pattern in catalog::patterns() {
                let chords = realize_pattern(pattern, &key, 3).unwrap();
                assert!(!chords.is_empty(), "{} in {}", pattern.name, key);
                for chord in &chords {
                    assert!(key.contains(chord.bass.note));
                    assert!(chord.chord.notes().iter().all(|p| key.contains(p.note)));
                }
            }
        }
    }

    #[test]
    fn test_minor_key_line() {
        let a_minor: Key = "Am".parse().unwrap();
        let pattern = catalog::find(Category::Cadence, "simple-authentic").unwrap();
        let chords = realize_pattern(pattern, &a_minor, 2).unwrap();
        // Natural minor: v is a minor triad
        assert_eq!(rendered(&chords), ["E3 G3 B3", "A2 C3 E3"]);
    }

    #[test]
    fn test_decoration_realizes_as_melody() {
        let turn = catalog::find(Category::Decoration, "turn").unwrap();
        let notes = realize_pattern(turn, &Key::C_MAJOR, 4).unwrap();
        assert_eq!(rendered(&notes), ["C4", "D4", "C4", "B3", "C4"]);
        assert!(notes.iter().all(|n| n.chord.len() == 1 && n.figure.is_empty()));
    }

    #[test]
    fn test_melody_nearest_octave() {
        let g_major: Key = "G".parse().unwrap();
        let escape = realize_melody(&["C", "D", "F"], &g_major, 4).unwrap();
        let names: Vec<String> = escape.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["G4", "A4", "C5"]);
    }

    #[test]
    fn test_melody_rejects_chromatic_letters() {
        assert_eq!(
            realize_melody(&["C", "F#"], &Key::C_MAJOR, 4),
            Err(TheoryError::InvalidScaleDegree("F#".to_string()))
        );
    }
}
