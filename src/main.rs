use std::error::Error;
use std::fs;
use std::process;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use partimento::catalog::{self, Category, Difficulty};
use partimento::playback::{PlaybackNote, PlaybackTiming};
use partimento::{api, build_chord_in, build_suspension_progression, Key};

/// partimento - figured-bass theory engine
#[derive(Parser)]
#[command(name = "partimento")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Frequency of a note in Hz
    Freq {
        /// Note name (C, C#, Db, ...)
        note: String,

        #[arg(allow_negative_numbers = true)]
        octave: i32,
    },

    /// Nearest note to a frequency
    Note {
        /// Frequency in Hz
        hz: f64,
    },

    /// Build a chord from a bass note and a figure
    Chord {
        /// Bass note name
        bass: String,

        #[arg(allow_negative_numbers = true)]
        octave: i32,

        /// Figure, e.g. 6/4 or 7/5/3
        figure: String,

        /// Key to resolve the figure in
        #[arg(short, long, default_value = "C")]
        key: String,
    },

    /// Build a suspension progression (7-6, 9-8, 4-3, 2-3)
    Suspension {
        kind: String,

        /// Octave of the bass
        #[arg(short, long, default_value_t = 3)]
        octave: i32,

        /// Output the playback plan instead of the chords
        #[arg(long)]
        plan: bool,
    },

    /// List catalog patterns
    Catalog {
        /// schema, cadence, suspension, decoration, rule-of-octave
        #[arg(short, long)]
        category: Option<String>,

        /// beginner, intermediate, advanced (or easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<String>,

        /// List intervals instead of patterns
        #[arg(long)]
        intervals: bool,
    },

    /// Playback plan for a catalog pattern
    Play {
        category: String,
        name: String,

        #[arg(short, long, default_value = "C")]
        key: String,

        #[arg(short, long, default_value_t = 3)]
        octave: i32,
    },

    /// Realize a YAML progression document
    Realize {
        /// Path to the progression file
        file: String,

        /// Output the playback plan instead of the chords
        #[arg(long)]
        plan: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let output = match run(cli.command) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            process::exit(1);
        }
    }
}

fn run(command: Commands) -> Result<Value, Box<dyn Error>> {
    let output = match command {
        Commands::Freq { note, octave } => {
            let frequency = partimento::note_to_frequency(&note, octave)?;
            json!({ "note": note, "octave": octave, "frequency": frequency })
        }

        Commands::Note { hz } => {
            let pitch = partimento::frequency_to_note(hz)?;
            serde_json::to_value(PlaybackNote::from(pitch))?
        }

        Commands::Chord {
            bass,
            octave,
            figure,
            key,
        } => {
            let key: Key = key.parse()?;
            let chord = build_chord_in(&key, &bass, octave, &figure)?;
            let notes: Vec<PlaybackNote> = chord
                .notes()
                .iter()
                .copied()
                .map(PlaybackNote::from)
                .collect();
            json!({ "key": key.to_string(), "figure": figure, "notes": notes })
        }

        Commands::Suspension { kind, octave, plan } => {
            if plan {
                let timing = PlaybackTiming::default();
                serde_json::to_value(api::suspension_plan(&kind, octave, &timing)?)?
            } else {
                serde_json::to_value(build_suspension_progression(&kind, octave)?)?
            }
        }

        Commands::Catalog {
            category,
            difficulty,
            intervals,
        } => {
            let difficulty = difficulty.map(|d| d.parse::<Difficulty>()).transpose()?;
            if intervals {
                let listed: Vec<_> = catalog::intervals()
                    .iter()
                    .filter(|i| difficulty.map_or(true, |d| i.difficulty == d))
                    .collect();
                serde_json::to_value(listed)?
            } else {
                let category = category.map(|c| c.parse::<Category>()).transpose()?;
                let listed: Vec<_> = catalog::patterns()
                    .iter()
                    .filter(|p| category.map_or(true, |c| p.category == c))
                    .filter(|p| difficulty.map_or(true, |d| p.difficulty == d))
                    .collect();
                serde_json::to_value(listed)?
            }
        }

        Commands::Play {
            category,
            name,
            key,
            octave,
        } => {
            let category: Category = category.parse()?;
            let key: Key = key.parse()?;
            let timing = PlaybackTiming::default();
            serde_json::to_value(api::pattern_plan(category, &name, &key, octave, &timing)?)?
        }

        Commands::Realize { file, plan } => {
            let source = fs::read_to_string(&file)
                .map_err(|e| format!("Error reading file '{}': {}", file, e))?;
            let progression = partimento::parse_progression(&source)?;
            if plan {
                serde_json::to_value(progression.playback()?)?
            } else {
                json!({
                    "title": progression.title,
                    "key": progression.key.to_string(),
                    "chords": progression.realize()?,
                })
            }
        }
    };

    Ok(output)
}
