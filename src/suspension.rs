//! # Suspension Progressions
//!
//! Three-chord progressions (preparation, suspension, resolution) for the 7-6, 9-8, 4-3
//! and 2-3 suspensions.
//!
//! Suspensions are not built through the figure interpreter. Their voice leading is
//! written out per type: which voice is held, and where it steps down, is fixed in a
//! template. The templates are in C major; the bass sits in the requested octave and
//! every upper voice one octave above it.
//!
//! ## Templates
//! ```text
//!        preparation    suspension     resolution     suspended voice
//! 7-6    F  | D A       E  | D G       E  | C G       D over E (7th) -> C (6th)
//! 9-8    G  | D G B     C  | D E G     C  | C E G     D over C (9th) -> C (8ve)
//! 4-3    C  | E G       C  | F G       C  | E G       F over C (4th) -> E (3rd)
//! 2-3    B  | D G       B  | C E G     A  | C E G     bass B (2nd below C) -> A
//! ```
//!
//! In every template the suspended voice steps down by one diatonic step from the
//! suspension to the resolution. In the 7-6, 9-8 and 2-3 templates it is also held over
//! unchanged from the preparation; the 4-3 template sounds its 4th without preparation.
//!
//! ## Unknown Types
//! An unknown type name builds the 4-3 progression and logs a warning. The bass octave
//! is still checked: an out-of-range octave is [`TheoryError::InvalidOctave`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::chord::Chord;
use crate::error::TheoryError;
use crate::figured_bass::{lookup_or, Lookup};
use crate::pitch::{check_octave, Letter, NoteName, Pitch};

/// The four suspension types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SuspensionType {
    #[serde(rename = "7-6")]
    SevenSix,
    #[serde(rename = "9-8")]
    NineEight,
    #[serde(rename = "4-3")]
    FourThree,
    #[serde(rename = "2-3")]
    TwoThree,
}

static SUSPENSION_TYPES: &[(&str, SuspensionType)] = &[
    ("7-6", SuspensionType::SevenSix),
    ("9-8", SuspensionType::NineEight),
    ("4-3", SuspensionType::FourThree),
    ("2-3", SuspensionType::TwoThree),
];

impl SuspensionType {
    pub const ALL: [SuspensionType; 4] = [
        SuspensionType::SevenSix,
        SuspensionType::NineEight,
        SuspensionType::FourThree,
        SuspensionType::TwoThree,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SuspensionType::SevenSix => "7-6",
            SuspensionType::NineEight => "9-8",
            SuspensionType::FourThree => "4-3",
            SuspensionType::TwoThree => "2-3",
        }
    }

    /// Look up a type name, falling back to 4-3
    pub fn lookup(name: &str) -> Lookup<'_, SuspensionType> {
        let lookup = lookup_or(SUSPENSION_TYPES, name.trim(), SuspensionType::FourThree);
        if let Lookup::Fallback { requested, .. } = lookup {
            log::warn!("Unknown suspension type {:?}; using 4-3", requested);
        }
        lookup
    }

    fn template(self) -> &'static Template {
        match self {
            SuspensionType::SevenSix => &SEVEN_SIX,
            SuspensionType::NineEight => &NINE_EIGHT,
            SuspensionType::FourThree => &FOUR_THREE,
            SuspensionType::TwoThree => &TWO_THREE,
        }
    }
}

impl FromStr for SuspensionType {
    type Err = TheoryError;

    /// Strict parse; unlike [`SuspensionType::lookup`] an unknown name is an error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match lookup_or(SUSPENSION_TYPES, s.trim(), SuspensionType::FourThree) {
            Lookup::Found(kind) => Ok(kind),
            Lookup::Fallback { .. } => Err(TheoryError::UnknownPattern {
                category: "suspension".to_string(),
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SuspensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Phase {
    bass: Letter,
    upper: &'static [Letter],
}

struct Template {
    preparation: Phase,
    suspension: Phase,
    resolution: Phase,
    /// Chord index of the suspended voice (0 = bass)
    voice: usize,
}

use Letter::{A, B, C, D, E, F, G};

static SEVEN_SIX: Template = Template {
    preparation: Phase { bass: F, upper: &[D, A] },
    suspension: Phase { bass: E, upper: &[D, G] },
    resolution: Phase { bass: E, upper: &[C, G] },
    voice: 1,
};

static NINE_EIGHT: Template = Template {
    preparation: Phase { bass: G, upper: &[D, G, B] },
    suspension: Phase { bass: C, upper: &[D, E, G] },
    resolution: Phase { bass: C, upper: &[C, E, G] },
    voice: 1,
};

static FOUR_THREE: Template = Template {
    preparation: Phase { bass: C, upper: &[E, G] },
    suspension: Phase { bass: C, upper: &[F, G] },
    resolution: Phase { bass: C, upper: &[E, G] },
    voice: 1,
};

static TWO_THREE: Template = Template {
    preparation: Phase { bass: B, upper: &[D, G] },
    suspension: Phase { bass: B, upper: &[C, E, G] },
    resolution: Phase { bass: A, upper: &[C, E, G] },
    voice: 0,
};

impl Phase {
    fn voice(&self, bass_octave: i32) -> Chord {
        let upper = self
            .upper
            .iter()
            .map(|&letter| Pitch::new(NoteName::natural(letter), bass_octave + 1))
            .collect();
        Chord::new(Pitch::new(NoteName::natural(self.bass), bass_octave), upper)
    }
}

/// Preparation, suspension and resolution chords for one suspension type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspensionProgression {
    pub kind: SuspensionType,
    pub preparation: Chord,
    pub suspension: Chord,
    pub resolution: Chord,
    /// Chord index of the suspended voice (0 = bass)
    pub suspended_voice: usize,
}

impl SuspensionProgression {
    /// The three chords in playing order
    pub fn chords(&self) -> [&Chord; 3] {
        [&self.preparation, &self.suspension, &self.resolution]
    }

    /// The suspended voice in each of the three chords
    pub fn suspended_tones(&self) -> [Pitch; 3] {
        let voice = self.suspended_voice;
        [
            self.preparation.notes()[voice],
            self.suspension.notes()[voice],
            self.resolution.notes()[voice],
        ]
    }

    /// Whether the dissonance is held over from the preparation
    pub fn is_prepared(&self) -> bool {
        let [preparation, suspension, _] = self.suspended_tones();
        preparation == suspension
    }
}

/// Build the progression for a type name ("7-6", "9-8", "4-3", "2-3").
///
/// Unknown names build the 4-3 progression.
///
/// # Example
/// ```
/// use partimento::build_suspension_progression;
///
/// let progression = build_suspension_progression("4-3", 3)?;
/// assert_eq!(progression.preparation.to_string(), "C3 E4 G4");
/// assert_eq!(progression.suspension.to_string(), "C3 F4 G4");
/// assert_eq!(progression.resolution.to_string(), "C3 E4 G4");
/// # Ok::<(), partimento::TheoryError>(())
/// ```
pub fn build_suspension_progression(
    kind: &str,
    bass_octave: i32,
) -> Result<SuspensionProgression, TheoryError> {
    build_suspension(SuspensionType::lookup(kind).into_value(), bass_octave)
}

/// Build the progression for a known type.
///
/// # Errors
/// [`TheoryError::InvalidOctave`] if `bass_octave` is out of range.
pub fn build_suspension(
    kind: SuspensionType,
    bass_octave: i32,
) -> Result<SuspensionProgression, TheoryError> {
    let bass_octave = check_octave(bass_octave)?;
    let template = kind.template();
    let progression = SuspensionProgression {
        kind,
        preparation: template.preparation.voice(bass_octave),
        suspension: template.suspension.voice(bass_octave),
        resolution: template.resolution.voice(bass_octave),
        suspended_voice: template.voice,
    };
    log::debug!(
        "Built {} suspension: {} | {} | {}",
        kind,
        progression.preparation,
        progression.suspension,
        progression.resolution
    );
    Ok(progression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::MAX_OCTAVE;

    fn pitches(names: &[&str]) -> Vec<Pitch> {
        names.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_four_three_scenario() {
        let progression = build_suspension_progression("4-3", 3).unwrap();
        assert_eq!(progression.kind, SuspensionType::FourThree);
        assert_eq!(progression.preparation.notes(), pitches(&["C3", "E4", "G4"]));
        assert_eq!(progression.suspension.notes(), pitches(&["C3", "F4", "G4"]));
        assert_eq!(progression.resolution.notes(), pitches(&["C3", "E4", "G4"]));
    }

    #[test]
    fn test_resolution_steps_down() {
        for kind in SuspensionType::ALL {
            for octave in 1..=5 {
                let progression = build_suspension(kind, octave).unwrap();
                let [_, suspended, resolved] = progression.suspended_tones();
                assert_eq!(
                    suspended.diatonic_position() - resolved.diatonic_position(),
                    1,
                    "{}: {} -> {}",
                    kind,
                    suspended,
                    resolved
                );
                assert!(resolved.midi() < suspended.midi());
            }
        }
    }

    #[test]
    fn test_prepared_suspensions_hold_the_tone() {
        for kind in [
            SuspensionType::SevenSix,
            SuspensionType::NineEight,
            SuspensionType::TwoThree,
        ] {
            let progression = build_suspension(kind, 3).unwrap();
            assert!(progression.is_prepared(), "{}", kind);
        }
        assert!(!build_suspension(SuspensionType::FourThree, 3).unwrap().is_prepared());
    }

    #[test]
    fn test_other_voices_hold_through_resolution() {
        for kind in SuspensionType::ALL {
            let progression = build_suspension(kind, 3).unwrap();
            let voice = progression.suspended_voice;
            let suspension = progression.suspension.notes();
            let resolution = progression.resolution.notes();
            assert_eq!(suspension.len(), resolution.len());
            for i in 0..suspension.len() {
                if i != voice && i != 0 {
                    assert_eq!(suspension[i], resolution[i], "{} voice {}", kind, i);
                }
            }
        }
    }

    #[test]
    fn test_seven_six() {
        let progression = build_suspension_progression("7-6", 3).unwrap();
        assert_eq!(progression.preparation.to_string(), "F3 D4 A4");
        assert_eq!(progression.suspension.to_string(), "E3 D4 G4");
        assert_eq!(progression.resolution.to_string(), "E3 C4 G4");
    }

    #[test]
    fn test_two_three_moves_the_bass() {
        let progression = build_suspension_progression("2-3", 2).unwrap();
        assert_eq!(progression.suspended_voice, 0);
        assert_eq!(progression.suspension.bass().to_string(), "B2");
        assert_eq!(progression.resolution.bass().to_string(), "A2");
    }

    #[test]
    fn test_upper_voices_one_octave_above_bass() {
        for kind in SuspensionType::ALL {
            let progression = build_suspension(kind, 2).unwrap();
            for chord in progression.chords() {
                assert_eq!(chord.bass().octave, 2);
                assert!(chord.upper().iter().all(|p| p.octave == 3));
            }
        }
    }

    #[test]
    fn test_unknown_type_defaults_to_four_three() {
        assert_eq!(
            build_suspension_progression("5-4", 3).unwrap(),
            build_suspension_progression("4-3", 3).unwrap()
        );
        assert!(SuspensionType::lookup("5-4").is_fallback());
    }

    #[test]
    fn test_bass_octave_out_of_range() {
        assert_eq!(
            build_suspension_progression("4-3", i32::MAX),
            Err(TheoryError::InvalidOctave(i32::MAX))
        );
        assert!(build_suspension_progression("5-4", i32::MIN).is_err());
        assert!(build_suspension(SuspensionType::NineEight, MAX_OCTAVE).is_ok());
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("9-8".parse::<SuspensionType>().unwrap(), SuspensionType::NineEight);
        assert!("5-4".parse::<SuspensionType>().is_err());
    }
}
