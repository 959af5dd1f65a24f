//! # Theory Catalogs
//!
//! Static reference tables for the trainers: galant schemata, cadences, suspensions,
//! melodic decorations, the Rule of the Octave and the interval list.
//!
//! Every pattern carries a bass line and a parallel list of figure sets (one set per bass
//! note). Bass lines are written as scale degrees ("1"-"8") and are realized in whatever
//! key the caller picks. Decorations are melodies rather than bass lines: their notes are
//! letters in C major and they carry no figures.
//!
//! The tables are built at compile time and never change. All accessors are read-only
//! lookups and filters.
//!
//! ## Example
//! ```rust
//! use partimento::catalog::{self, Category, Difficulty};
//!
//! let prinner = catalog::by_name("prinner").unwrap();
//! assert_eq!(prinner.bass_line, ["6", "5", "4", "3"]);
//!
//! let easy_cadences: Vec<_> = catalog::all_of_category(Category::Cadence)
//!     .into_iter()
//!     .filter(|p| p.difficulty == Difficulty::Beginner)
//!     .collect();
//! assert!(!easy_cadences.is_empty());
//! ```

mod data;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Difficulty tag. The interval names easy, medium and hard are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "easy")]
    Beginner,
    #[serde(alias = "medium")]
    Intermediate,
    #[serde(alias = "hard")]
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" | "easy" => Ok(Difficulty::Beginner),
            "intermediate" | "medium" => Ok(Difficulty::Intermediate),
            "advanced" | "hard" => Ok(Difficulty::Advanced),
            _ => Err(TheoryError::UnknownPattern {
                category: "difficulty".to_string(),
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which table a pattern belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Schema,
    Cadence,
    Suspension,
    Decoration,
    RuleOfOctave,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Schema,
        Category::Cadence,
        Category::Suspension,
        Category::Decoration,
        Category::RuleOfOctave,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Schema => "schema",
            Category::Cadence => "cadence",
            Category::Suspension => "suspension",
            Category::Decoration => "decoration",
            Category::RuleOfOctave => "rule-of-octave",
        }
    }
}

impl FromStr for Category {
    type Err = TheoryError;

    /// Accepts singular and plural names, plus a few common synonyms
    /// ("schemata", "diminution", "rule-of-the-octave").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "schema" | "schemas" | "schemata" => Ok(Category::Schema),
            "cadence" | "cadences" => Ok(Category::Cadence),
            "suspension" | "suspensions" => Ok(Category::Suspension),
            "decoration" | "decorations" | "diminution" | "diminutions" => {
                Ok(Category::Decoration)
            }
            "rule-of-octave" | "rule-of-the-octave" | "octave" => Ok(Category::RuleOfOctave),
            _ => Err(TheoryError::UnknownPattern {
                category: "category".to_string(),
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog pattern
///
/// # Fields
/// - `name`: lookup key ("prinner", "half-cadence", "7-6", ...)
/// - `title`: display name
/// - `bass_line`: scale degrees, or C-major letters for decorations
/// - `figures`: one figure set per bass note; empty for decorations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    pub category: Category,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub bass_line: &'static [&'static str],
    pub figures: &'static [&'static [&'static str]],
    pub difficulty: Difficulty,
}

impl Pattern {
    /// Whether this pattern is a figured bass line (as opposed to a melody)
    pub fn is_figured(&self) -> bool {
        !self.figures.is_empty()
    }
}

/// An interval for the interval trainer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntervalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub semitones: i32,
    pub difficulty: Difficulty,
}

/// One step of the Rule of the Octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleOfOctaveStep {
    pub degree: u8,
    /// Solfege syllable of the bass
    pub bass: &'static str,
    pub figures: &'static [&'static str],
    pub description: &'static str,
}

/// Direction of the scale in the bass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

/// Every pattern, in table order
pub fn patterns() -> &'static [Pattern] {
    data::PATTERNS
}

/// First pattern with the given name, in any category
pub fn by_name(name: &str) -> Option<&'static Pattern> {
    let name = name.trim();
    data::PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Pattern by category and name.
///
/// # Errors
/// [`TheoryError::UnknownPattern`] if the category has no such entry.
pub fn find(category: Category, name: &str) -> Result<&'static Pattern, TheoryError> {
    let trimmed = name.trim();
    data::PATTERNS
        .iter()
        .find(|p| p.category == category && p.name.eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| TheoryError::UnknownPattern {
            category: category.to_string(),
            name: name.to_string(),
        })
}

pub fn by_difficulty(difficulty: Difficulty) -> Vec<&'static Pattern> {
    data::PATTERNS
        .iter()
        .filter(|p| p.difficulty == difficulty)
        .collect()
}

pub fn all_of_category(category: Category) -> Vec<&'static Pattern> {
    data::PATTERNS
        .iter()
        .filter(|p| p.category == category)
        .collect()
}

pub fn intervals() -> &'static [IntervalInfo] {
    data::INTERVALS
}

pub fn interval_by_name(name: &str) -> Option<&'static IntervalInfo> {
    let name = name.trim();
    data::INTERVALS.iter().find(|i| i.name.eq_ignore_ascii_case(name))
}

pub fn intervals_by_difficulty(difficulty: Difficulty) -> Vec<&'static IntervalInfo> {
    data::INTERVALS
        .iter()
        .filter(|i| i.difficulty == difficulty)
        .collect()
}

pub fn rule_of_octave(direction: Direction) -> &'static [RuleOfOctaveStep] {
    match direction {
        Direction::Ascending => data::RULE_OF_OCTAVE_ASCENDING,
        Direction::Descending => data::RULE_OF_OCTAVE_DESCENDING,
    }
}
