//! # Playback Module
//!
//! Turn chords, intervals and melodies into timed playback plans for the audio player.
//!
//! ## Purpose
//! The theory engine never touches audio. It produces plain data describing what to
//! play and when; the player (outside this crate) schedules the sounds:
//! 1. **Progressions** - cadences, schemata, Rule of the Octave
//! 2. **Suspensions** - preparation, suspension, longer resolution
//! 3. **Intervals** - harmonic, melodic or both
//! 4. **Melodies** - decorations at a chosen speed
//! 5. **Play-along** - a bass line with metronome count-in and beat clicks
//!
//! ## Sub-modules
//! - `types` - PlaybackPlan, PlaybackEvent, PlaybackNote, PlaybackTiming definitions
//! - `engine` - The schedulers
//!
//! ## Key Types
//! - [`PlaybackPlan`] - Events, clicks and total length
//! - [`PlaybackEvent`] - Notes starting together, with duration and velocity
//! - [`PlaybackTiming`] - Durations and velocities (configurable, with defaults)
//!
//! ## Example
//! ```rust
//! use partimento::build_suspension_progression;
//! use partimento::playback::{schedule_suspension, PlaybackTiming};
//!
//! let progression = build_suspension_progression("4-3", 3)?;
//! let plan = schedule_suspension(&progression, &PlaybackTiming::default());
//!
//! assert_eq!(plan.events.len(), 3);
//! assert_eq!(plan.events[0].midi_notes(), vec![48, 64, 67]); // C3 E4 G4
//! assert_eq!(plan.events[2].duration, 1.2);
//! # Ok::<(), partimento::TheoryError>(())
//! ```
//!
//! ## Timing
//! All times are seconds from the start of the plan. `total_duration` is the end of the
//! last sounding event (or the last click, whichever is later).

mod engine;
mod types;

#[cfg(test)]
mod tests;

pub use engine::{
    schedule_chords, schedule_interval, schedule_melody, schedule_play_along,
    schedule_suspension,
};
pub use types::{
    IntervalMode, MetronomeClick, PlaybackEvent, PlaybackNote, PlaybackPlan, PlaybackTiming,
    Speed,
};
