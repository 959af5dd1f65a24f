use super::*;
use crate::chord::build_chord;
use crate::error::TheoryError;
use crate::pitch::Pitch;
use crate::suspension::build_suspension_progression;

const EPSILON: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pitch(s: &str) -> Pitch {
    s.parse().unwrap()
}

#[test]
fn test_chord_timing() {
    let chords = vec![
        build_chord("F", 3, "5/3").unwrap(),
        build_chord("G", 3, "5/3").unwrap(),
        build_chord("C", 3, "5/3").unwrap(),
    ];
    let plan = schedule_chords(&chords, &PlaybackTiming::default());

    assert_eq!(plan.events.len(), 3);
    assert!(close(plan.events[0].start_time, 0.0));
    assert!(close(plan.events[1].start_time, 0.85));
    assert!(close(plan.events[2].start_time, 1.7));

    assert!(close(plan.events[0].duration, 0.8));
    assert!(close(plan.events[1].duration, 0.8));
    assert!(close(plan.events[2].duration, 1.5));
    assert!(close(plan.total_duration, 3.2));

    assert!(plan.events.iter().all(|e| close(e.velocity, 0.6)));
    assert!(plan.clicks.is_empty());
}

#[test]
fn test_chord_notes_follow_voicing() {
    let chords = vec![build_chord("G", 3, "6/4").unwrap()];
    let plan = schedule_chords(&chords, &PlaybackTiming::default());
    // G3 C4 E4, bass first
    assert_eq!(plan.events[0].midi_notes(), vec![55, 60, 64]);
    let first = plan.events[0].notes[0];
    assert_eq!(first.octave, 3);
    assert!((first.frequency - 196.0).abs() < 0.01);
}

#[test]
fn test_empty_progression() {
    let plan = schedule_chords(&[], &PlaybackTiming::default());
    assert!(plan.events.is_empty());
    assert_eq!(plan.total_duration, 0.0);
}

#[test]
fn test_custom_timing() {
    let timing = PlaybackTiming {
        chord_duration: 1.0,
        chord_spacing: 1.0,
        final_chord_duration: 2.0,
        ..PlaybackTiming::default()
    };
    let chords = vec![
        build_chord("C", 3, "5/3").unwrap(),
        build_chord("C", 3, "5/3").unwrap(),
    ];
    let plan = schedule_chords(&chords, &timing);
    assert!(close(plan.total_duration, 3.0));
}

#[test]
fn test_suspension_timing() {
    let progression = build_suspension_progression("7-6", 3).unwrap();
    let plan = schedule_suspension(&progression, &PlaybackTiming::default());

    assert_eq!(plan.events.len(), 3);
    assert!(close(plan.events[1].start_time, 0.85));
    assert!(close(plan.events[2].start_time, 1.7));
    assert!(close(plan.events[2].duration, 1.2));
    assert!(close(plan.total_duration, 2.9));
    assert_eq!(plan.events[1].notes.len(), progression.suspension.len());
}

#[test]
fn test_harmonic_interval() {
    let plan = schedule_interval(
        pitch("C4"),
        7,
        IntervalMode::Harmonic,
        &PlaybackTiming::default(),
    );
    assert_eq!(plan.events.len(), 1);
    assert_eq!(plan.events[0].midi_notes(), vec![60, 67]);
    assert!(close(plan.total_duration, 2.0));
}

#[test]
fn test_melodic_interval() {
    let plan = schedule_interval(
        pitch("A3"),
        4,
        IntervalMode::Melodic,
        &PlaybackTiming::default(),
    );
    assert_eq!(plan.events.len(), 2);
    assert_eq!(plan.events[1].notes[0].note.to_string(), "C#");
    assert!(close(plan.events[1].start_time, 1.0));
    assert!(plan.events.iter().all(|e| close(e.velocity, 0.7)));
}

#[test]
fn test_interval_both() {
    let plan = schedule_interval(pitch("C4"), 12, IntervalMode::Both, &PlaybackTiming::default());
    assert_eq!(plan.events.len(), 3);
    // Harmonic 2.0s, pause 0.8s, then two melodic notes 1.0s apart
    assert!(close(plan.events[1].start_time, 2.8));
    assert!(close(plan.events[2].start_time, 3.8));
    assert!(close(plan.total_duration, 4.8));
    assert_eq!(plan.events[2].midi_notes(), vec![72]);
}

#[test]
fn test_interval_frequency_ratio() {
    let timing = PlaybackTiming::default();
    let plan = schedule_interval(pitch("A4"), 12, IntervalMode::Harmonic, &timing);
    let notes = &plan.events[0].notes;
    assert_eq!(notes[0].frequency, 440.0);
    assert_eq!(notes[1].frequency, 880.0);
}

#[test]
fn test_melody_speeds() {
    let melody = [pitch("C4"), pitch("D4"), pitch("E4")];
    for (speed, step) in [(Speed::Slow, 0.6), (Speed::Medium, 0.4), (Speed::Fast, 0.25)] {
        let plan = schedule_melody(&melody, speed, &PlaybackTiming::default());
        assert_eq!(plan.events.len(), 3);
        assert!(close(plan.events[2].start_time, 2.0 * step));
        assert!(close(plan.total_duration, 3.0 * step));
    }
}

#[test]
fn test_play_along() {
    let plan = schedule_play_along("G3-G3-C3", 4, 60, &PlaybackTiming::default()).unwrap();

    assert_eq!(plan.events.len(), 3);
    // Count-in: 4 clicks, one per second at 60 BPM
    assert!(close(plan.events[0].start_time, 4.0));
    assert!(close(plan.events[0].duration, 4.0));
    assert!(close(plan.events[1].start_time, 8.1));
    assert!(close(plan.events[2].start_time, 12.2));
    assert!(close(plan.total_duration, 16.2));
    assert!(plan.events.iter().all(|e| close(e.velocity, 0.5)));
    assert_eq!(plan.events[2].midi_notes(), vec![48]);

    // 4 count-in clicks plus 4 per note
    assert_eq!(plan.clicks.len(), 16);
    let accents: Vec<f64> = plan
        .clicks
        .iter()
        .filter(|c| c.accent)
        .map(|c| c.start_time)
        .collect();
    assert_eq!(accents.len(), 4);
    assert!(close(accents[1], 4.0));
    assert!(close(accents[3], 12.2));
}

#[test]
fn test_play_along_separators() {
    let timing = PlaybackTiming::default();
    let dashed = schedule_play_along("C3-F3-G3-C3", 2, 80, &timing).unwrap();
    let spaced = schedule_play_along("C3 F3, G3  C3", 2, 80, &timing).unwrap();
    assert_eq!(dashed, spaced);
}

#[test]
fn test_play_along_errors() {
    let timing = PlaybackTiming::default();
    assert!(matches!(
        schedule_play_along("G3-X3", 4, 80, &timing),
        Err(TheoryError::InvalidNote(_))
    ));
    assert!(matches!(
        schedule_play_along("G3", 4, 0, &timing),
        Err(TheoryError::ProgressionError(_))
    ));
    assert!(matches!(
        schedule_play_along(" - ", 4, 80, &timing),
        Err(TheoryError::ProgressionError(_))
    ));
}

#[test]
fn test_timing_defaults_and_validation() {
    let timing = PlaybackTiming::default();
    assert!(timing.validate().is_ok());
    assert_eq!(timing.count_in, 4);

    let bad = PlaybackTiming {
        chord_velocity: 1.5,
        ..PlaybackTiming::default()
    };
    assert!(bad.validate().is_err());

    let negative = PlaybackTiming {
        chord_spacing: -0.1,
        ..PlaybackTiming::default()
    };
    assert!(negative.validate().is_err());
}

#[test]
fn test_timing_partial_yaml() {
    let timing: PlaybackTiming =
        serde_yaml::from_str("chord-duration: 1.25\ncount-in: 2\n").unwrap();
    assert_eq!(timing.chord_duration, 1.25);
    assert_eq!(timing.count_in, 2);
    assert_eq!(timing.final_chord_duration, 1.5);
}

#[test]
fn test_plan_serializes_camel_case() {
    let plan = schedule_melody(&[pitch("A4")], Speed::Medium, &PlaybackTiming::default());
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["totalDuration"], 0.4);
    assert_eq!(json["events"][0]["startTime"], 0.0);
    assert_eq!(json["events"][0]["notes"][0]["note"], "A");
    assert_eq!(json["events"][0]["notes"][0]["midi"], 69);
    assert_eq!(json["events"][0]["notes"][0]["frequency"], 440.0);
    // No clicks outside play-along
    assert!(json.get("clicks").is_none());
}

#[test]
fn test_mode_and_speed_parsing() {
    assert_eq!("Harmonic".parse::<IntervalMode>().unwrap(), IntervalMode::Harmonic);
    assert_eq!("fast".parse::<Speed>().unwrap(), Speed::Fast);
    assert!("sideways".parse::<IntervalMode>().is_err());
}
