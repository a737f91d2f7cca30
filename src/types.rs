// Hanzi-Decomp Type Definitions
// Core types for records, stroke filtering and structural markers

use std::path::PathBuf;
use thiserror::Error;

/// Stroke count of a symbol
///
/// `Unknown` is never a valid count and always orders after every `Known`
/// value, so sorting by `StrokeCount` puts uncatalogued symbols last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrokeCount {
    Known(u32),
    Unknown,
}

impl StrokeCount {
    /// Returns the count if known
    pub fn known(self) -> Option<u32> {
        match self {
            StrokeCount::Known(n) => Some(n),
            StrokeCount::Unknown => None,
        }
    }
}

impl std::fmt::Display for StrokeCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrokeCount::Known(n) => write!(f, "{}", n),
            StrokeCount::Unknown => write!(f, "?"),
        }
    }
}

/// Inclusive stroke-count window
///
/// `max: None` is unbounded; only an unbounded window admits symbols whose
/// stroke count is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl StrokeRange {
    /// Create a bounded range, swapping the ends if given inverted
    pub fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max: Some(max) }
        } else {
            Self { min: max, max: Some(min) }
        }
    }

    /// Range with only a lower bound
    pub fn at_least(min: u32) -> Self {
        Self { min, max: None }
    }

    /// Range that admits every symbol, including unknown stroke counts
    pub fn any() -> Self {
        Self::at_least(0)
    }

    /// Check whether a stroke count falls inside the window
    pub fn contains(&self, strokes: StrokeCount) -> bool {
        match (strokes, self.max) {
            (StrokeCount::Known(n), Some(max)) => self.min <= n && n <= max,
            (StrokeCount::Known(n), None) => self.min <= n,
            (StrokeCount::Unknown, max) => max.is_none(),
        }
    }
}

impl Default for StrokeRange {
    fn default() -> Self {
        Self::any()
    }
}

impl std::fmt::Display for StrokeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}–{}", self.min, max),
            None => write!(f, "{}+", self.min),
        }
    }
}

/// Ideographic Description Characters (U+2FF0..=U+2FFB)
///
/// Structural markers describing how the components of a decomposition are
/// arranged. They are annotations, never components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Idc {
    /// ⿰ left to right
    LeftRight,
    /// ⿱ above to below
    AboveBelow,
    /// ⿲ left to middle to right
    LeftMiddleRight,
    /// ⿳ above to middle to below
    AboveMiddleBelow,
    /// ⿴ full surround
    FullSurround,
    /// ⿵ surround from above
    SurroundAbove,
    /// ⿶ surround from below
    SurroundBelow,
    /// ⿷ surround from left
    SurroundLeft,
    /// ⿸ surround from upper left
    SurroundUpperLeft,
    /// ⿹ surround from upper right
    SurroundUpperRight,
    /// ⿺ surround from lower left
    SurroundLowerLeft,
    /// ⿻ overlaid
    Overlaid,
}

impl Idc {
    /// Every marker, in codepoint order
    pub const ALL: [Idc; 12] = [
        Idc::LeftRight,
        Idc::AboveBelow,
        Idc::LeftMiddleRight,
        Idc::AboveMiddleBelow,
        Idc::FullSurround,
        Idc::SurroundAbove,
        Idc::SurroundBelow,
        Idc::SurroundLeft,
        Idc::SurroundUpperLeft,
        Idc::SurroundUpperRight,
        Idc::SurroundLowerLeft,
        Idc::Overlaid,
    ];

    /// The marker's codepoint
    pub fn as_char(self) -> char {
        match self {
            Idc::LeftRight => '⿰',
            Idc::AboveBelow => '⿱',
            Idc::LeftMiddleRight => '⿲',
            Idc::AboveMiddleBelow => '⿳',
            Idc::FullSurround => '⿴',
            Idc::SurroundAbove => '⿵',
            Idc::SurroundBelow => '⿶',
            Idc::SurroundLeft => '⿷',
            Idc::SurroundUpperLeft => '⿸',
            Idc::SurroundUpperRight => '⿹',
            Idc::SurroundLowerLeft => '⿺',
            Idc::Overlaid => '⿻',
        }
    }

    /// Map a codepoint to its marker, if it is one
    pub fn from_char(c: char) -> Option<Idc> {
        Idc::ALL.iter().copied().find(|idc| idc.as_char() == c)
    }
}

impl std::fmt::Display for Idc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Structural filter for containment queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdcFilter {
    /// No structural constraint
    #[default]
    Any,
    /// Candidate decomposition must start with this marker
    Exact(Idc),
}

impl std::str::FromStr for IdcFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("any") {
            return Ok(IdcFilter::Any);
        }
        let mut chars = s.chars();
        match (chars.next().and_then(Idc::from_char), chars.next()) {
            (Some(idc), None) => Ok(IdcFilter::Exact(idc)),
            _ => Err(FilterError::UnknownMarker(s.to_string())),
        }
    }
}

impl std::fmt::Display for IdcFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdcFilter::Any => write!(f, "any"),
            IdcFilter::Exact(idc) => write!(f, "{}", idc),
        }
    }
}

/// One catalogued character or component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    /// The key symbol
    pub character: String,

    pub strokes: StrokeCount,

    /// Raw decomposition, leading IDC included (e.g. "⿰亻木")
    pub decomposition: String,

    /// Phonetic readings, possibly empty
    pub pinyin: Vec<String>,

    pub definition: Option<String>,
    pub radical: Option<String>,
    pub etymology_hint: Option<String>,

    /// Words containing this character
    pub compounds: Vec<String>,
}

/// Shown when a record has no reading
pub const PINYIN_PLACEHOLDER: &str = "—";

/// Shown when a record has no definition
pub const DEFINITION_PLACEHOLDER: &str = "No definition available";

impl CharacterRecord {
    /// Create a bare record with no metadata
    pub fn new(character: impl Into<String>, strokes: StrokeCount) -> Self {
        Self {
            character: character.into(),
            strokes,
            decomposition: String::new(),
            pinyin: Vec::new(),
            definition: None,
            radical: None,
            etymology_hint: None,
            compounds: Vec::new(),
        }
    }

    /// Set the decomposition string
    pub fn with_decomposition(mut self, decomposition: impl Into<String>) -> Self {
        self.decomposition = decomposition.into();
        self
    }

    /// Set the compounds list
    pub fn with_compounds(mut self, compounds: Vec<String>) -> Self {
        self.compounds = compounds;
        self
    }

    /// Leading structural marker of the decomposition, if any
    pub fn leading_idc(&self) -> Option<Idc> {
        self.decomposition.chars().next().and_then(Idc::from_char)
    }

    /// First reading, or the placeholder
    pub fn display_pinyin(&self) -> &str {
        self.pinyin
            .first()
            .map(|s| s.as_str())
            .unwrap_or(PINYIN_PLACEHOLDER)
    }

    /// Definition, or the placeholder
    pub fn display_definition(&self) -> &str {
        self.definition
            .as_deref()
            .unwrap_or(DEFINITION_PLACEHOLDER)
    }

    /// Check for a compound of exactly `len` characters
    pub fn has_compound_of_length(&self, len: usize) -> bool {
        self.compounds.iter().any(|c| c.chars().count() == len)
    }
}

/// Dataset loading errors
///
/// Only loading can fail; every query operation is total.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset is not a JSON array or newline-delimited JSON: {0}")]
    Unparseable(String),

    #[error("Dataset contains no usable records ({skipped} skipped)")]
    Empty { skipped: usize },
}

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Filter parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Unknown structure marker '{0}': use 'any' or one of ⿰⿱⿲⿳⿴⿵⿶⿷⿸⿹⿺⿻")]
    UnknownMarker(String),
}
