//! # Hanzi-Decomp: Character Decomposition Explorer
//!
//! Explore how CJK characters break down into components, and which
//! characters are built from a given component.
//!
//! ## Queries
//!
//! 1. **Containment** - characters whose decomposition contains a component
//!    - filtered by stroke range, structure marker (⿰, ⿱, ...) and compound length
//!    - ordered by stroke count, unknown counts last
//! 2. **Decomposition** - transitive components of a character, up to a depth
//! 3. **Lookup** - stroke count, record, compounds of a character
//!
//! ## Depth
//!
//! Closure depth runs from 0 (immediate components only) to 5. Each depth
//! gets its own reverse index, built on first use and shared afterwards.
//!
//! ## Example Usage
//!
//! ```ignore
//! use hanzi_decomp::{Explorer, QueryFilters, StrokeRange};
//!
//! let explorer = Explorer::load("strokes.txt")?;
//!
//! let filters = QueryFilters::new().with_strokes(StrokeRange::new(4, 10));
//! let chars = explorer.characters_containing("木", 1, &filters);
//!
//! let parts = explorer.decomposition("森", 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Dataset Loader** - parses JSON records into an immutable table
//! - **Decomposition Resolver** - bounded, cycle-safe component closure
//! - **Component Index** - component → characters, one per depth
//! - **Explorer** - query API combining all components

pub mod config;
pub mod data;
pub mod explorer;
pub mod idc;
pub mod index;
pub mod resolver;
pub mod types;
pub mod variants;

// Re-export main types and functions for convenience
pub use config::ExplorerConfig;
pub use data::{DataLoader, Table, SAMPLE_DATASET};
pub use explorer::{characters_containing, CharacterSummary, Explorer, ExplorerStats, QueryFilters};
pub use index::ComponentIndex;
pub use resolver::{resolve, ComponentSet, Resolver, MAX_DEPTH};
pub use types::{
    CharacterRecord, ConfigError, FilterError, Idc, IdcFilter, LoadError, StrokeCount, StrokeRange,
};
pub use variants::RadicalVariants;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
