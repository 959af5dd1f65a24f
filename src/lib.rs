pub mod api;
pub mod catalog;
pub mod chord;
pub mod error;
pub mod figured_bass;
pub mod key;
pub mod pitch;
pub mod playback;
pub mod progression;
pub mod realize;
pub mod suspension;

pub use chord::{build_chord, build_chord_in, Chord};
pub use error::*;
pub use figured_bass::{resolve_figure, resolve_figure_in, ResolvedInterval};
pub use key::{Key, Mode};
pub use pitch::{frequency_to_note, interval_frequency, note_to_frequency, NoteName, Pitch};
pub use progression::{parse_progression, Progression};
pub use suspension::{build_suspension_progression, SuspensionProgression, SuspensionType};

/// Realize a progression document and schedule it for playback.
/// This is the main entry point for the library.
pub fn play(source: &str) -> Result<playback::PlaybackPlan, TheoryError> {
    parse_progression(source)?.playback()
}
