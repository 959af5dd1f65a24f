use super::*;
use crate::error::TheoryError;
use crate::key::Key;

fn notes(resolved: &[ResolvedInterval]) -> Vec<String> {
    resolved.iter().map(|r| r.note.to_string()).collect()
}

#[test]
fn test_root_position_triad() {
    let resolved = resolve_figure("C", "5/3").unwrap();
    assert_eq!(resolved.len(), 2);
    assert_eq!(notes(&resolved), ["E", "G"]);
    assert_eq!(resolved[0].semitones, 4);
    assert_eq!(resolved[1].semitones, 7);
}

#[test]
fn test_resolution_is_deterministic() {
    let first = resolve_figure("C", "5/3").unwrap();
    // Interleave other lookups, including a fallback
    resolve_figure("G", "6/4").unwrap();
    resolve_figure("D", "unknown").unwrap();
    for _ in 0..10 {
        assert_eq!(resolve_figure("C", "5/3").unwrap(), first);
    }
}

#[test]
fn test_second_inversion_over_g() {
    let resolved = resolve_figure("G", "6/4").unwrap();
    assert_eq!(notes(&resolved), ["C", "E"]);
    assert_eq!(resolved[0].interval, 4);
    assert_eq!(resolved[0].semitones, 5);
    assert_eq!(resolved[0].octave_offset, 1);
    assert_eq!(resolved[1].interval, 6);
    assert_eq!(resolved[1].semitones, 9);
}

#[test]
fn test_sixths_differ_by_bass() {
    // Diatonic, not chromatic: the same interval number has different sizes
    let over_e = resolve_figure("E", "6/3").unwrap();
    let over_f = resolve_figure("F", "6/3").unwrap();
    assert_eq!(over_e[1].note.to_string(), "C");
    assert_eq!(over_e[1].semitones, 8);
    assert_eq!(over_f[1].note.to_string(), "D");
    assert_eq!(over_f[1].semitones, 9);
}

#[test]
fn test_ninth_lands_above_octave() {
    let resolved = resolve_figure("C", "9/5/3").unwrap();
    assert_eq!(notes(&resolved), ["E", "G", "D"]);
    assert_eq!(resolved[2].semitones, 14);
    assert_eq!(resolved[2].octave_offset, 1);

    let over_g = resolve_figure("G", "9/5/3").unwrap();
    assert_eq!(over_g[2].note.to_string(), "A");
    assert_eq!(over_g[2].semitones, 14);
}

#[test]
fn test_octave_figure() {
    let resolved = resolve_figure("A", "8/5/3").unwrap();
    assert_eq!(notes(&resolved), ["C", "E", "A"]);
    assert_eq!(resolved[2].semitones, 12);
}

#[test]
fn test_figure_order_preserved() {
    // 6/4/3 lists 3, 4, 6 - voices come back in that order
    let resolved = resolve_figure("D", "6/4/3").unwrap();
    let numbers: Vec<u8> = resolved.iter().map(|r| r.interval).collect();
    assert_eq!(numbers, [3, 4, 6]);
    assert_eq!(notes(&resolved), ["F", "G", "B"]);
}

#[test]
fn test_seventh_chord_inversions_over_b() {
    assert_eq!(notes(&resolve_figure("B", "6/5/3").unwrap()), ["D", "F", "G"]);
    assert_eq!(notes(&resolve_figure("B", "7/5/3").unwrap()), ["D", "F", "A"]);
}

#[test]
fn test_unknown_figure_falls_back() {
    let fallback = resolve_figure("C", "not-a-real-figure").unwrap();
    assert_eq!(fallback, resolve_figure("C", "5/3").unwrap());
    assert!(figure_intervals("not-a-real-figure").is_fallback());
    assert!(!figure_intervals("6/3").is_fallback());
}

#[test]
fn test_figure_whitespace_is_ignored() {
    assert_eq!(
        resolve_figure("C", " 6/4 ").unwrap(),
        resolve_figure("C", "6/4").unwrap()
    );
    assert!(is_known_figure(" 7/5/3"));
}

#[test]
fn test_abbreviations_match_full_figures() {
    let pairs = [
        ("6", "6/3"),
        ("7", "7/5/3"),
        ("6/5", "6/5/3"),
        ("4/3", "6/4/3"),
        ("4/2", "6/4/2"),
    ];
    for (short, full) in pairs {
        assert_eq!(
            resolve_figure("D", short).unwrap(),
            resolve_figure("D", full).unwrap(),
            "{} vs {}",
            short,
            full
        );
    }
}

#[test]
fn test_every_table_entry_resolves() {
    for (figure, intervals) in FIGURES {
        let resolved = resolve_figure("E", figure).unwrap();
        assert_eq!(resolved.len(), intervals.len(), "{}", figure);
        assert!(resolved.iter().all(|r| r.semitones >= 0), "{}", figure);
    }
}

#[test]
fn test_unsupported_bass_note() {
    let err = resolve_figure("F#", "6/3").unwrap_err();
    assert_eq!(
        err,
        TheoryError::UnsupportedBassNote {
            note: "F#".to_string(),
            figure: "6/3".to_string(),
            key: "C major".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Cannot resolve figure 6/3 for bass F#: not in C major"
    );
}

#[test]
fn test_invalid_bass_note() {
    assert_eq!(
        resolve_figure("X", "5/3"),
        Err(TheoryError::InvalidNote("X".to_string()))
    );
}

#[test]
fn test_other_keys() {
    let d_major: Key = "D".parse().unwrap();
    let resolved = resolve_figure_in(&d_major, "A", "7/5/3").unwrap();
    assert_eq!(notes(&resolved), ["C#", "E", "G"]);
    assert_eq!(resolved[0].semitones, 4);

    let a_minor: Key = "Am".parse().unwrap();
    let resolved = resolve_figure_in(&a_minor, "E", "5/3").unwrap();
    // Natural minor: the dominant triad is minor
    assert_eq!(notes(&resolved), ["G", "B"]);
    assert_eq!(resolved[0].semitones, 3);

    // F is not in D major
    assert!(matches!(
        resolve_figure_in(&d_major, "F", "5/3"),
        Err(TheoryError::UnsupportedBassNote { .. })
    ));
}

#[test]
fn test_octave_offsets_in_flat_key() {
    let bb_major: Key = "Bb".parse().unwrap();
    let resolved = resolve_figure_in(&bb_major, "Bb", "5/3").unwrap();
    assert_eq!(notes(&resolved), ["D", "F"]);
    // B to D and B to F both pass C
    assert_eq!(resolved[0].octave_offset, 1);
    assert_eq!(resolved[1].octave_offset, 1);
    assert_eq!(resolved[0].semitones, 4);
    assert_eq!(resolved[1].semitones, 7);
}
