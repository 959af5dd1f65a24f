//! # Figured-Bass Interpreter
//!
//! Turns a figure (e.g. `6/4`, `7/5/3`) over a bass note into the notes it implies.
//!
//! ## Sub-modules
//! - `figures` - figure table, tagged lookup with default
//! - `interpreter` - diatonic resolution of each interval in a key
//!
//! ## Diatonic Resolution
//! Interval numbers count scale steps, not semitones. A figure is resolved by stepping
//! through the key's scale from the bass letter, so the upper notes are always tones of
//! the key:
//!
//! ```text
//! C major, figure 6/3
//!   bass E: 3rd = G (3 semitones), 6th = C (8 semitones)
//!   bass F: 3rd = A (4 semitones), 6th = D (9 semitones)
//! ```
//!
//! Intervals beyond the octave keep their size: a 9th above C is D, 14 semitones up.
//!
//! ## Unknown Figures
//! Unknown figure strings resolve as a root-position triad (`5/3`). The lookup result
//! is tagged ([`Lookup::Fallback`]) and a warning is logged, but no error is returned.
//! Unknown or out-of-key bass notes are errors.

mod figures;
mod interpreter;

#[cfg(test)]
mod tests;

pub use figures::{
    figure_intervals, is_known_figure, lookup_or, Lookup, DEFAULT_FIGURE, FIGURES,
};
pub(crate) use interpreter::resolve_on;
pub use interpreter::{resolve_figure, resolve_figure_in, ResolvedInterval};
