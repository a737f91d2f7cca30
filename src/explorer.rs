// Hanzi-Decomp Explorer
// Main API: owns the table, builds indices on demand and answers queries

use std::cmp::Ordering;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::config::ExplorerConfig;
use crate::data::{DataLoader, Table};
use crate::idc;
use crate::index::ComponentIndex;
use crate::resolver::{Resolver, MAX_DEPTH};
use crate::types::{CharacterRecord, IdcFilter, LoadError, StrokeCount, StrokeRange};
use crate::variants::RadicalVariants;

/// Filters for a containment query
///
/// The default admits everything: open stroke range, any structure, no
/// compound requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryFilters {
    pub strokes: StrokeRange,
    pub idc: IdcFilter,

    /// Require at least one compound of exactly this many characters
    pub compound_length: Option<usize>,
}

impl QueryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke window
    pub fn with_strokes(mut self, strokes: StrokeRange) -> Self {
        self.strokes = strokes;
        self
    }

    /// Set the structure filter
    pub fn with_idc(mut self, idc: IdcFilter) -> Self {
        self.idc = idc;
        self
    }

    /// Set the compound length requirement
    pub fn with_compound_length(mut self, len: usize) -> Self {
        self.compound_length = Some(len);
        self
    }
}

/// Display-ready view of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSummary {
    pub character: String,
    pub strokes: StrokeCount,
    pub pinyin: String,
    pub definition: String,
    pub radical: Option<String>,
    pub etymology_hint: Option<String>,
}

/// Dataset and index counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerStats {
    pub records: usize,
    pub skipped: usize,
    pub duplicates: usize,
    /// Component keys in the index at the requested depth
    pub components: usize,
}

/// Characters containing `component` in `index`, filtered and ordered
///
/// Starts from the index list (empty for an unknown key) and keeps candidates
/// whose stroke count lies in range. A structure filter additionally requires
/// the candidate's own decomposition to start with that marker and to list
/// the component, or one of its variants, directly. A compound length filter
/// requires a compound of exactly that length. Output is deduplicated and
/// ordered by stroke count (unknown last), then by symbol.
pub fn characters_containing(
    index: &ComponentIndex,
    table: &Table,
    variants: &RadicalVariants,
    component: &str,
    filters: &QueryFilters,
) -> Vec<String> {
    let mut found: Vec<&str> = index
        .get(component)
        .iter()
        .map(|c| c.as_str())
        .filter(|c| filters.strokes.contains(table.strokes(c)))
        .filter(|c| match filters.idc {
            IdcFilter::Any => true,
            IdcFilter::Exact(marker) => table.get(c).is_some_and(|record| {
                record.leading_idc() == Some(marker)
                    && idc::components(&record.decomposition)
                        .any(|part| variants.matches(component, part))
            }),
        })
        .filter(|c| match filters.compound_length {
            None => true,
            Some(len) => table
                .get(c)
                .is_some_and(|record| record.has_compound_of_length(len)),
        })
        .collect();

    found.sort_by(|a, b| by_strokes(table, a, b));
    found.dedup();
    found.into_iter().map(str::to_string).collect()
}

fn by_strokes(table: &Table, a: &str, b: &str) -> Ordering {
    table
        .strokes(a)
        .cmp(&table.strokes(b))
        .then_with(|| a.cmp(b))
}

/// Character decomposition explorer
///
/// Combines:
/// - the loaded character table
/// - a memoizing decomposition resolver
/// - one lazily built component index per depth (0..=5)
/// - the radical variant table used by structure filtering
///
/// All queries take `&self` and are safe to call from many threads.
pub struct Explorer {
    table: Arc<Table>,
    resolver: Resolver,
    variants: RadicalVariants,
    indices: [OnceLock<Arc<ComponentIndex>>; MAX_DEPTH + 1],
}

impl Explorer {
    /// Create an explorer over a loaded table
    pub fn new(table: Table, variants: RadicalVariants) -> Self {
        let table = Arc::new(table);
        Self {
            resolver: Resolver::new(Arc::clone(&table)),
            table,
            variants,
            indices: std::array::from_fn(|_| OnceLock::new()),
        }
    }

    /// Load a dataset file with the standard variant table
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Ok(Self::new(DataLoader::load(path)?, RadicalVariants::standard()))
    }

    /// Build from configuration; no dataset path means the embedded sample
    pub fn from_config(config: &ExplorerConfig) -> Result<Self, LoadError> {
        let table = match &config.dataset {
            Some(path) => DataLoader::load(path)?,
            None => DataLoader::sample()?,
        };
        let variants = if config.use_variants {
            RadicalVariants::standard()
        } else {
            RadicalVariants::none()
        };
        Ok(Self::new(table, variants))
    }

    /// Component index at `depth`, built on first use
    ///
    /// Depth is clamped to `0..=5`. Concurrent first requests for the same
    /// depth build it once; the rest wait and share the result.
    pub fn index(&self, depth: usize) -> Arc<ComponentIndex> {
        let depth = depth.min(MAX_DEPTH);
        Arc::clone(self.indices[depth].get_or_init(|| {
            Arc::new(ComponentIndex::build(&self.resolver, depth, &self.variants))
        }))
    }

    /// Characters containing `component` within `depth` levels
    pub fn characters_containing(
        &self,
        component: &str,
        depth: usize,
        filters: &QueryFilters,
    ) -> Vec<String> {
        let index = self.index(depth);
        characters_containing(&index, &self.table, &self.variants, component.trim(), filters)
    }

    /// Stroke count of a symbol, `Unknown` if uncatalogued
    pub fn stroke_count(&self, symbol: &str) -> StrokeCount {
        self.table.strokes(symbol)
    }

    pub fn record_of(&self, symbol: &str) -> Option<&CharacterRecord> {
        self.table.get(symbol)
    }

    /// Component closure of `symbol`, ordered by stroke count
    pub fn decomposition(&self, symbol: &str, depth: usize) -> Vec<String> {
        let closure = self.resolver.resolve(symbol, depth.min(MAX_DEPTH));
        let mut parts: Vec<&str> = closure.iter().map(|s| s.as_str()).collect();
        parts.sort_by(|a, b| by_strokes(&self.table, a, b));
        parts.into_iter().map(str::to_string).collect()
    }

    /// Compounds of `symbol`, optionally only those of one length
    pub fn compounds(&self, symbol: &str, length: Option<usize>) -> Vec<&str> {
        self.table
            .get(symbol)
            .map(|record| {
                record
                    .compounds
                    .iter()
                    .filter(|c| length.map_or(true, |len| c.chars().count() == len))
                    .map(|c| c.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Component keys at `depth` whose own stroke count is in range
    pub fn components(&self, depth: usize, strokes: StrokeRange) -> Vec<String> {
        let index = self.index(depth);
        let mut keys: Vec<&str> = index
            .keys()
            .filter(|k| strokes.contains(self.table.strokes(k)))
            .collect();
        keys.sort_by(|a, b| by_strokes(&self.table, a, b));
        keys.into_iter().map(str::to_string).collect()
    }

    /// Display summary with placeholders for missing readings
    pub fn describe(&self, symbol: &str) -> Option<CharacterSummary> {
        self.table.get(symbol).map(|record| CharacterSummary {
            character: record.character.clone(),
            strokes: record.strokes,
            pinyin: record.display_pinyin().to_string(),
            definition: record.display_definition().to_string(),
            radical: record.radical.clone(),
            etymology_hint: record.etymology_hint.clone(),
        })
    }

    /// Dataset counters plus the key count at `depth`
    pub fn stats(&self, depth: usize) -> ExplorerStats {
        ExplorerStats {
            records: self.table.len(),
            skipped: self.table.skipped(),
            duplicates: self.table.duplicates(),
            components: self.index(depth).len(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn variants(&self) -> &RadicalVariants {
        &self.variants
    }
}
