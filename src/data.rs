// Hanzi-Decomp Dataset Loader
// Parses character records from JSON into an in-memory table

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::types::{CharacterRecord, LoadError, StrokeCount};

/// Embedded sample dataset (newline-delimited JSON)
pub const SAMPLE_DATASET: &str = include_str!("../data/sample.jsonl");

/// On-disk shape of one record; every field but `character` is optional
#[derive(Debug, Deserialize)]
struct RawRecord {
    character: Option<String>,
    strokes: Option<u32>,
    decomposition: Option<String>,
    pinyin: Option<RawPinyin>,
    definition: Option<String>,
    radical: Option<String>,
    etymology: Option<RawEtymology>,
    compounds: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPinyin {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct RawEtymology {
    hint: Option<String>,
}

impl RawRecord {
    fn into_record(self) -> Option<CharacterRecord> {
        let character = self.character.filter(|c| !c.is_empty())?;
        let pinyin = match self.pinyin {
            Some(RawPinyin::One(p)) if !p.is_empty() => vec![p],
            Some(RawPinyin::One(_)) | None => Vec::new(),
            Some(RawPinyin::Many(ps)) => ps,
        };

        Some(CharacterRecord {
            character,
            strokes: self
                .strokes
                .map(StrokeCount::Known)
                .unwrap_or(StrokeCount::Unknown),
            decomposition: self.decomposition.unwrap_or_default(),
            pinyin,
            definition: self.definition.filter(|d| !d.is_empty()),
            radical: self.radical.filter(|r| !r.is_empty()),
            etymology_hint: self.etymology.and_then(|e| e.hint),
            compounds: self.compounds.unwrap_or_default(),
        })
    }
}

/// Character table keyed by symbol
///
/// Immutable once loaded. Lookups are O(1); a missing symbol means "no
/// further decomposition", never an error.
#[derive(Debug, Clone, Default)]
pub struct Table {
    records: FxHashMap<String, CharacterRecord>,

    /// Entries dropped while loading (malformed or keyless)
    skipped: usize,

    /// Entries dropped because their key was already present
    duplicates: usize,
}

impl Table {
    /// Build a table from records; the first record for a key wins
    pub fn from_records(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        let mut table = Table::default();
        for record in records {
            table.insert(record);
        }
        table
    }

    fn insert(&mut self, record: CharacterRecord) {
        if self.records.contains_key(&record.character) {
            self.duplicates += 1;
            return;
        }
        self.records.insert(record.character.clone(), record);
    }

    /// Look up a record by symbol
    pub fn get(&self, symbol: &str) -> Option<&CharacterRecord> {
        self.records.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.records.contains_key(symbol)
    }

    /// Stroke count of a symbol, `Unknown` if absent or uncounted
    pub fn strokes(&self, symbol: &str) -> StrokeCount {
        self.records
            .get(symbol)
            .map(|r| r.strokes)
            .unwrap_or(StrokeCount::Unknown)
    }

    /// Raw decomposition of a symbol, empty if absent
    pub fn decomposition(&self, symbol: &str) -> &str {
        self.records
            .get(symbol)
            .map(|r| r.decomposition.as_str())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Iterate every record in unspecified order
    pub fn records(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.records.values()
    }

    /// Iterate every key symbol in unspecified order
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(|k| k.as_str())
    }

    pub(crate) fn record_map(&self) -> &FxHashMap<String, CharacterRecord> {
        &self.records
    }
}

/// Dataset loader
pub struct DataLoader;

impl DataLoader {
    /// Load a dataset file
    ///
    /// Accepts newline-delimited JSON or a single JSON array of objects.
    /// Malformed entries are skipped and counted; a missing file or one with
    /// no usable records is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Table, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&text)?;
        tracing::info!(
            path = %path.display(),
            records = table.len(),
            skipped = table.skipped(),
            duplicates = table.duplicates(),
            "dataset loaded"
        );
        Ok(table)
    }

    /// Parse dataset text in either supported layout
    pub fn parse(text: &str) -> Result<Table, LoadError> {
        let trimmed = text.trim_start_matches('\u{feff}').trim();

        if trimmed.starts_with('[') {
            match serde_json::from_str::<Vec<serde_json::Value>>(trimmed) {
                Ok(values) => return Self::from_values(values),
                Err(e) => {
                    tracing::warn!(error = %e, "dataset is not a valid JSON array, trying line mode");
                    let table = Self::parse_lines(trimmed);
                    if table.is_empty() {
                        return Err(LoadError::Unparseable(e.to_string()));
                    }
                    return Ok(table);
                }
            }
        }

        let table = Self::parse_lines(trimmed);
        if table.is_empty() {
            return Err(LoadError::Empty {
                skipped: table.skipped,
            });
        }
        Ok(table)
    }

    /// Parse the embedded sample dataset
    pub fn sample() -> Result<Table, LoadError> {
        Self::parse(SAMPLE_DATASET)
    }

    fn from_values(values: Vec<serde_json::Value>) -> Result<Table, LoadError> {
        let mut table = Table::default();
        for (i, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<RawRecord>(value) {
                Ok(raw) => Self::accept(&mut table, raw, i),
                Err(e) => {
                    tracing::debug!(entry = i, error = %e, "skipping malformed record");
                    table.skipped += 1;
                }
            }
        }
        if table.is_empty() {
            return Err(LoadError::Empty {
                skipped: table.skipped,
            });
        }
        Ok(table)
    }

    fn parse_lines(text: &str) -> Table {
        let mut table = Table::default();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim().trim_end_matches(',');
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<RawRecord>(line) {
                Ok(raw) => Self::accept(&mut table, raw, i + 1),
                Err(e) => {
                    tracing::debug!(line = i + 1, error = %e, "skipping malformed record");
                    table.skipped += 1;
                }
            }
        }
        table
    }

    fn accept(table: &mut Table, raw: RawRecord, position: usize) {
        match raw.into_record() {
            Some(record) => table.insert(record),
            None => {
                tracing::debug!(position, "skipping record without character");
                table.skipped += 1;
            }
        }
    }
}
