//! Figure symbols and the interval numbers they stand for

/// Figure used when a symbol is not in [`FIGURES`]
pub const DEFAULT_FIGURE: &str = "5/3";

const ROOT_POSITION: &[u8] = &[3, 5];

/// Figure symbol → interval numbers above the bass, in the order the voices are built.
pub static FIGURES: &[(&str, &[u8])] = &[
    ("5/3", &[3, 5]),
    ("6/3", &[3, 6]),
    ("6/4", &[4, 6]),
    ("7/5/3", &[3, 5, 7]),
    ("6/5/3", &[3, 5, 6]),
    ("6/4/3", &[3, 4, 6]),
    ("6/4/2", &[2, 4, 6]),
    ("9/5/3", &[3, 5, 9]),
    ("8/5/3", &[3, 5, 8]),
    // Conventional abbreviations
    ("5", &[3, 5]),
    ("6", &[3, 6]),
    ("7", &[3, 5, 7]),
    ("6/5", &[3, 5, 6]),
    ("4/3", &[3, 4, 6]),
    ("4/2", &[2, 4, 6]),
    ("2", &[2, 4, 6]),
    ("9", &[3, 5, 9]),
    ("7/5", &[3, 5, 7]),
    // Suspension sonorities
    ("7/3", &[3, 7]),
    ("5/4", &[4, 5]),
];

/// Result of a table lookup that may have used a default.
///
/// The fallback case keeps the requested key so callers can report what was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'k, T> {
    Found(T),
    Fallback { requested: &'k str, value: T },
}

impl<'k, T> Lookup<'k, T> {
    pub fn value(&self) -> &T {
        match self {
            Lookup::Found(value) => value,
            Lookup::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Lookup::Found(value) => value,
            Lookup::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Lookup::Fallback { .. })
    }
}

/// Look `key` up in a static table, tagging the result when `default` had to be used.
///
/// # Example
/// ```
/// use partimento::figured_bass::{lookup_or, Lookup};
///
/// let table = [("a", 1), ("b", 2)];
/// assert_eq!(lookup_or(&table, "b", 0), Lookup::Found(2));
/// assert_eq!(lookup_or(&table, "z", 0), Lookup::Fallback { requested: "z", value: 0 });
/// ```
pub fn lookup_or<'k, T: Copy>(table: &[(&str, T)], key: &'k str, default: T) -> Lookup<'k, T> {
    match table.iter().find(|(k, _)| *k == key) {
        Some((_, value)) => Lookup::Found(*value),
        None => Lookup::Fallback {
            requested: key,
            value: default,
        },
    }
}

/// Interval numbers for a figure. Unknown figures resolve as a root-position triad
/// (`[3, 5]`) and log a warning.
pub fn figure_intervals(figure: &str) -> Lookup<'_, &'static [u8]> {
    let lookup = lookup_or(FIGURES, figure.trim(), ROOT_POSITION);
    if let Lookup::Fallback { requested, .. } = lookup {
        log::warn!(
            "Unknown figure {:?}; using root position {}",
            requested,
            DEFAULT_FIGURE
        );
    }
    lookup
}

/// Whether a figure is in the table (no logging)
pub fn is_known_figure(figure: &str) -> bool {
    !lookup_or(FIGURES, figure.trim(), ROOT_POSITION).is_fallback()
}
