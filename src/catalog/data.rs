//! Catalog tables

use super::{Category, Difficulty, IntervalInfo, Pattern, RuleOfOctaveStep};

use Category::{Cadence, Decoration, RuleOfOctave, Schema, Suspension};
use Difficulty::{Advanced, Beginner, Intermediate};

pub(super) static PATTERNS: &[Pattern] = &[
    // Galant schemata
    Pattern {
        category: Schema,
        name: "prinner",
        title: "Prinner",
        description: "Descending stepwise pattern, common in opening themes",
        bass_line: &["6", "5", "4", "3"],
        figures: &[&["5/3"], &["6/3"], &["5/3"], &["6/3"]],
        difficulty: Beginner,
    },
    Pattern {
        category: Schema,
        name: "romanesca",
        title: "Romanesca",
        description: "Descending tetrachord with characteristic harmonization",
        bass_line: &["1", "7", "6", "5"],
        figures: &[&["5/3"], &["6/3"], &["5/3"], &["5/3"]],
        difficulty: Beginner,
    },
    Pattern {
        category: Schema,
        name: "monte",
        title: "Monte",
        description: "Ascending sequence by step",
        bass_line: &["1", "2", "2", "3", "3", "4"],
        figures: &[&["5/3"], &["6/3"], &["5/3"], &["6/3"], &["5/3"], &["6/3"]],
        difficulty: Intermediate,
    },
    Pattern {
        category: Schema,
        name: "fonte",
        title: "Fonte",
        description: "Descending sequence by step",
        bass_line: &["4", "3", "3", "2", "2", "1"],
        figures: &[&["5/3"], &["6/3"], &["5/3"], &["6/3"], &["7/5/3"], &["5/3"]],
        difficulty: Intermediate,
    },
    Pattern {
        category: Schema,
        name: "fenaroli",
        title: "Fenaroli",
        description: "Ascending pattern with characteristic 7-6 suspension",
        bass_line: &["1", "2", "3", "4"],
        figures: &[&["5/3"], &["7/5/3", "6/3"], &["7/5/3", "6/3"], &["5/3"]],
        difficulty: Intermediate,
    },
    Pattern {
        category: Schema,
        name: "quieszenza",
        title: "Quieszenza",
        description: "Resting pattern with suspension resolution",
        bass_line: &["2", "1"],
        figures: &[&["7/5/3"], &["5/3"]],
        difficulty: Beginner,
    },
    Pattern {
        category: Schema,
        name: "meyer",
        title: "Meyer",
        description: "Opening gambit: tonic, dominant seventh inversions, tonic",
        bass_line: &["1", "2", "7", "1"],
        figures: &[&["5/3"], &["6/4/3"], &["6/5/3"], &["5/3"]],
        difficulty: Intermediate,
    },
    Pattern {
        category: Schema,
        name: "jupiter",
        title: "Jupiter",
        description: "Do-re-fa-mi melody over a tonic-dominant bass",
        bass_line: &["1", "7", "5", "1"],
        figures: &[&["5/3"], &["6/5/3"], &["7/5/3"], &["5/3"]],
        difficulty: Intermediate,
    },
    // Cadences
    Pattern {
        category: Cadence,
        name: "simple-authentic",
        title: "Simple Authentic Cadence",
        description: "V-I cadence in root position",
        bass_line: &["5", "1"],
        figures: &[&["5/3"], &["5/3"]],
        difficulty: Beginner,
    },
    Pattern {
        category: Cadence,
        name: "compound-authentic",
        title: "Compound Authentic Cadence",
        description: "IV-V-I or ii-V-I cadence",
        bass_line: &["4", "5", "1"],
        figures: &[&["5/3"], &["5/3"], &["5/3"]],
        difficulty: Intermediate,
    },
    Pattern {
        category: Cadence,
        name: "half-cadence",
        title: "Half Cadence",
        description: "Ending on dominant",
        bass_line: &["1", "5"],
        figures: &[&["5/3"], &["5/3"]],
        difficulty: Beginner,
    },
    Pattern {
        category: Cadence,
        name: "deceptive",
        title: "Deceptive Cadence",
        description: "V-vi instead of V-I",
        bass_line: &["5", "6"],
        figures: &[&["5/3"], &["5/3"]],
        difficulty: Intermediate,
    },
    Pattern {
        category: Cadence,
        name: "evaded",
        title: "Evaded Cadence",
        description: "Expected cadence avoided through continuation",
        bass_line: &["5", "6", "4", "5"],
        figures: &[&["5/3"], &["5/3"], &["6/3"], &["5/3"]],
        difficulty: Advanced,
    },
    Pattern {
        category: Cadence,
        name: "phrygian",
        title: "Phrygian Cadence",
        description: "Bass descends a half step in minor (iv6-V), a step in major",
        bass_line: &["6", "5"],
        figures: &[&["6/3"], &["5/3"]],
        difficulty: Advanced,
    },
    Pattern {
        category: Cadence,
        name: "plagal",
        title: "Plagal Cadence",
        description: "IV-I, the 'Amen' cadence",
        bass_line: &["4", "1"],
        figures: &[&["5/3"], &["5/3"]],
        difficulty: Beginner,
    },
    // Suspensions: bass and figures of the three-chord templates in C major
    Pattern {
        category: Suspension,
        name: "7-6",
        title: "7-6 Suspension",
        description: "Seventh resolving to sixth",
        bass_line: &["4", "3", "3"],
        figures: &[&["6/3"], &["7/3"], &["6/3"]],
        difficulty: Beginner,
    },
    Pattern {
        category: Suspension,
        name: "9-8",
        title: "9-8 Suspension",
        description: "Ninth resolving to octave",
        bass_line: &["5", "1", "1"],
        figures: &[&["8/5/3"], &["9/5/3"], &["8/5/3"]],
        difficulty: Intermediate,
    },
    Pattern {
        category: Suspension,
        name: "4-3",
        title: "4-3 Suspension",
        description: "Fourth resolving to third",
        bass_line: &["1", "1", "1"],
        figures: &[&["5/3"], &["5/4"], &["5/3"]],
        difficulty: Beginner,
    },
    Pattern {
        category: Suspension,
        name: "2-3",
        title: "2-3 Suspension",
        description: "Second resolving to third",
        bass_line: &["7", "7", "6"],
        figures: &[&["6/3"], &["6/4/2"], &["7/5/3"]],
        difficulty: Intermediate,
    },
    // Decorations: melodic patterns as letters in C major, no figures
    Pattern {
        category: Decoration,
        name: "passing-note",
        title: "Passing Note",
        description: "Stepwise connection between two chord tones",
        bass_line: &["C", "D", "E"],
        figures: &[],
        difficulty: Beginner,
    },
    Pattern {
        category: Decoration,
        name: "neighbor-note",
        title: "Neighbor Note",
        description: "Step away and return to the same note",
        bass_line: &["C", "D", "C"],
        figures: &[],
        difficulty: Beginner,
    },
    Pattern {
        category: Decoration,
        name: "turn",
        title: "Turn",
        description: "Ornamental figure around a principal note",
        bass_line: &["C", "D", "C", "B", "C"],
        figures: &[],
        difficulty: Intermediate,
    },
    Pattern {
        category: Decoration,
        name: "appoggiatura",
        title: "Appoggiatura",
        description: "Accented non-chord tone resolving by step",
        bass_line: &["D", "C"],
        figures: &[],
        difficulty: Intermediate,
    },
    Pattern {
        category: Decoration,
        name: "acciaccatura",
        title: "Acciaccatura",
        description: "Quick grace note before the main note",
        bass_line: &["B", "C"],
        figures: &[],
        difficulty: Intermediate,
    },
    Pattern {
        category: Decoration,
        name: "escape-tone",
        title: "Escape Tone",
        description: "Stepwise approach, leap away",
        bass_line: &["C", "D", "F"],
        figures: &[],
        difficulty: Advanced,
    },
    // Rule of the Octave
    Pattern {
        category: RuleOfOctave,
        name: "ascending",
        title: "Rule of the Octave (ascending)",
        description: "Standard harmonization of the rising scale in the bass",
        bass_line: &["1", "2", "3", "4", "5", "6", "7", "8"],
        figures: &[
            &["5/3"],
            &["6/3"],
            &["6/3"],
            &["5/3"],
            &["5/3"],
            &["6/3"],
            &["6/5/3"],
            &["5/3"],
        ],
        difficulty: Intermediate,
    },
    Pattern {
        category: RuleOfOctave,
        name: "descending",
        title: "Rule of the Octave (descending)",
        description: "Standard harmonization of the falling scale in the bass",
        bass_line: &["8", "7", "6", "5", "4", "3", "2", "1"],
        figures: &[
            &["5/3"],
            &["6/3"],
            &["5/3"],
            &["5/3"],
            &["6/3"],
            &["6/3"],
            &["7/5/3"],
            &["5/3"],
        ],
        difficulty: Advanced,
    },
];

const fn step(
    degree: u8,
    bass: &'static str,
    figures: &'static [&'static str],
    description: &'static str,
) -> RuleOfOctaveStep {
    RuleOfOctaveStep {
        degree,
        bass,
        figures,
        description,
    }
}

pub(super) static RULE_OF_OCTAVE_ASCENDING: &[RuleOfOctaveStep] = &[
    step(1, "Do", &["5/3"], "Tonic triad"),
    step(2, "Re", &["6/3"], "First inversion"),
    step(3, "Mi", &["6/3"], "First inversion"),
    step(4, "Fa", &["5/3"], "Root position"),
    step(5, "Sol", &["5/3"], "Dominant"),
    step(6, "La", &["6/3"], "First inversion"),
    step(7, "Ti", &["6/5/3"], "Diminished seventh"),
    step(8, "Do", &["5/3"], "Tonic return"),
];

pub(super) static RULE_OF_OCTAVE_DESCENDING: &[RuleOfOctaveStep] = &[
    step(8, "Do", &["5/3"], "Tonic"),
    step(7, "Ti", &["6/3"], "First inversion"),
    step(6, "La", &["5/3"], "Root position"),
    step(5, "Sol", &["5/3"], "Dominant"),
    step(4, "Fa", &["6/3"], "First inversion"),
    step(3, "Mi", &["6/3"], "First inversion"),
    step(2, "Re", &["7/5/3"], "Seventh chord"),
    step(1, "Do", &["5/3"], "Tonic resolution"),
];

const fn interval(
    name: &'static str,
    title: &'static str,
    semitones: i32,
    difficulty: Difficulty,
) -> IntervalInfo {
    IntervalInfo {
        name,
        title,
        semitones,
        difficulty,
    }
}

pub(super) static INTERVALS: &[IntervalInfo] = &[
    interval("unison", "Unison", 0, Beginner),
    interval("minor-2nd", "Minor 2nd", 1, Intermediate),
    interval("major-2nd", "Major 2nd", 2, Beginner),
    interval("minor-3rd", "Minor 3rd", 3, Beginner),
    interval("major-3rd", "Major 3rd", 4, Beginner),
    interval("perfect-4th", "Perfect 4th", 5, Beginner),
    interval("tritone", "Tritone", 6, Advanced),
    interval("perfect-5th", "Perfect 5th", 7, Beginner),
    interval("minor-6th", "Minor 6th", 8, Intermediate),
    interval("major-6th", "Major 6th", 9, Intermediate),
    interval("minor-7th", "Minor 7th", 10, Intermediate),
    interval("major-7th", "Major 7th", 11, Advanced),
    interval("octave", "Octave", 12, Beginner),
];
