//! Playback scheduling
//!
//! Lays chords, intervals and melodies out on a timeline. Nothing here sounds or waits;
//! the player consumes the resulting [`PlaybackPlan`].

use crate::chord::Chord;
use crate::error::TheoryError;
use crate::pitch::Pitch;
use crate::suspension::SuspensionProgression;
use super::types::{
    IntervalMode, MetronomeClick, PlaybackEvent, PlaybackNote, PlaybackPlan, PlaybackTiming,
    Speed,
};

fn event(start_time: f64, duration: f64, velocity: f64, pitches: &[Pitch]) -> PlaybackEvent {
    PlaybackEvent {
        start_time,
        duration,
        velocity,
        notes: pitches.iter().copied().map(PlaybackNote::from).collect(),
    }
}

fn finish(events: Vec<PlaybackEvent>, clicks: Vec<MetronomeClick>) -> PlaybackPlan {
    let total_duration = events
        .iter()
        .map(PlaybackEvent::end_time)
        .chain(clicks.iter().map(|c| c.start_time))
        .fold(0.0, f64::max);
    PlaybackPlan {
        events,
        clicks,
        total_duration,
    }
}

/// Schedule a progression.
///
/// Chord onsets are `chord_spacing` apart. Every chord sounds for `chord_duration`
/// except the last, which rings for `final_chord_duration`.
///
/// # Example
/// ```
/// use partimento::build_chord;
/// use partimento::playback::{schedule_chords, PlaybackTiming};
///
/// let chords = vec![
///     build_chord("G", 3, "5/3").unwrap(),
///     build_chord("C", 3, "5/3").unwrap(),
/// ];
/// let plan = schedule_chords(&chords, &PlaybackTiming::default());
/// assert_eq!(plan.events.len(), 2);
/// assert_eq!(plan.events[1].start_time, 0.85);
/// assert_eq!(plan.events[1].duration, 1.5);
/// ```
pub fn schedule_chords(chords: &[Chord], timing: &PlaybackTiming) -> PlaybackPlan {
    let last = chords.len().saturating_sub(1);
    let events = chords
        .iter()
        .enumerate()
        .map(|(i, chord)| {
            let duration = if i == last {
                timing.final_chord_duration
            } else {
                timing.chord_duration
            };
            event(
                i as f64 * timing.chord_spacing,
                duration,
                timing.chord_velocity,
                chord.notes(),
            )
        })
        .collect();

    let plan = finish(events, Vec::new());
    log::debug!(
        "Scheduled {} chords over {:.2}s",
        chords.len(),
        plan.total_duration
    );
    plan
}

/// Schedule a suspension: preparation and suspension at `chord_duration`, resolution
/// held for `resolution_duration`.
pub fn schedule_suspension(
    progression: &SuspensionProgression,
    timing: &PlaybackTiming,
) -> PlaybackPlan {
    let events = progression
        .chords()
        .into_iter()
        .enumerate()
        .map(|(i, chord)| {
            let duration = if i == 2 {
                timing.resolution_duration
            } else {
                timing.chord_duration
            };
            event(
                i as f64 * timing.chord_spacing,
                duration,
                timing.chord_velocity,
                chord.notes(),
            )
        })
        .collect();
    finish(events, Vec::new())
}

/// Schedule an interval above `root`.
///
/// The upper note is `semitones` above the root, spelled with sharps. In
/// [`IntervalMode::Both`] the melodic rendition starts after the harmonic one plus
/// `harmonic_melodic_pause`.
pub fn schedule_interval(
    root: Pitch,
    semitones: i32,
    mode: IntervalMode,
    timing: &PlaybackTiming,
) -> PlaybackPlan {
    let upper = Pitch::from_midi(root.midi() + semitones);
    let mut events = Vec::new();

    let harmonic = |start: f64| {
        event(
            start,
            timing.harmonic_duration,
            timing.chord_velocity,
            &[root, upper],
        )
    };
    let melodic = |start: f64| {
        [
            event(start, timing.melodic_note_duration, timing.note_velocity, &[root]),
            event(
                start + timing.melodic_spacing,
                timing.melodic_note_duration,
                timing.note_velocity,
                &[upper],
            ),
        ]
    };

    match mode {
        IntervalMode::Harmonic => events.push(harmonic(0.0)),
        IntervalMode::Melodic => events.extend(melodic(0.0)),
        IntervalMode::Both => {
            events.push(harmonic(0.0));
            events.extend(melodic(timing.harmonic_duration + timing.harmonic_melodic_pause));
        }
    }

    finish(events, Vec::new())
}

/// Schedule a melody, one note after another at the given speed.
pub fn schedule_melody(pitches: &[Pitch], speed: Speed, timing: &PlaybackTiming) -> PlaybackPlan {
    let step = speed.note_duration();
    let events = pitches
        .iter()
        .enumerate()
        .map(|(i, pitch)| {
            event(
                i as f64 * step,
                step,
                timing.note_velocity,
                std::slice::from_ref(pitch),
            )
        })
        .collect();
    finish(events, Vec::new())
}

/// Schedule a bass line to play along with, e.g. `"G3-G3-C3"`.
///
/// A count-in of `count_in` clicks (first accented) precedes the bass. Each bass note
/// lasts `beats_per_note` beats with a click on every beat, accented on the first, and
/// notes are separated by `play_along_gap`.
///
/// Notes may be separated by `-`, `,` or whitespace; since `-` is a separator, negative
/// octaves cannot be written here.
///
/// # Errors
/// - [`TheoryError::ProgressionError`] for an empty pattern or a zero tempo/beat count
/// - [`TheoryError::InvalidNote`] for a token that is not a pitch like `C3`
pub fn schedule_play_along(
    pattern: &str,
    beats_per_note: u32,
    tempo: u32,
    timing: &PlaybackTiming,
) -> Result<PlaybackPlan, TheoryError> {
    if tempo == 0 || beats_per_note == 0 {
        return Err(TheoryError::ProgressionError(format!(
            "play-along needs a positive tempo and beats per note (tempo {}, beats {})",
            tempo, beats_per_note
        )));
    }

    let pitches = pattern
        .split(|c: char| c == '-' || c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse::<Pitch>)
        .collect::<Result<Vec<_>, _>>()?;
    if pitches.is_empty() {
        return Err(TheoryError::ProgressionError(format!(
            "empty play-along pattern: {:?}",
            pattern
        )));
    }

    let beat = 60.0 / f64::from(tempo);
    let note_duration = beat * f64::from(beats_per_note);

    let mut clicks: Vec<MetronomeClick> = (0..timing.count_in)
        .map(|i| MetronomeClick {
            start_time: f64::from(i) * beat,
            accent: i == 0,
        })
        .collect();

    let mut events = Vec::with_capacity(pitches.len());
    let mut time = f64::from(timing.count_in) * beat;
    for pitch in &pitches {
        events.push(event(
            time,
            note_duration,
            timing.bass_velocity,
            std::slice::from_ref(pitch),
        ));
        clicks.extend((0..beats_per_note).map(|b| MetronomeClick {
            start_time: time + f64::from(b) * beat,
            accent: b == 0,
        }));
        time += note_duration + timing.play_along_gap;
    }

    log::debug!(
        "Scheduled play-along of {} notes at {} BPM",
        pitches.len(),
        tempo
    );
    Ok(finish(events, clicks))
}
