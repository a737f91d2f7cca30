// Hanzi-Decomp Component Index
// Inverts per-character closures into component → characters

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::resolver::{ComponentSet, Resolver};
use crate::variants::RadicalVariants;

/// Reverse index from component to the characters built from it
///
/// Built once per closure depth and never mutated afterwards. Lists carry set
/// semantics only; consumers sort before display.
#[derive(Debug, Clone)]
pub struct ComponentIndex {
    depth: usize,

    /// component → characters whose closure contains it
    entries: FxHashMap<String, Vec<String>>,
}

impl ComponentIndex {
    /// Build the index at `max_depth`
    ///
    /// Every character is indexed under itself and under each symbol of its
    /// closure. Variant forms of indexed keys are exposed as keys of their own
    /// with their own (possibly empty) lists; lists are never merged.
    pub fn build(resolver: &Resolver, max_depth: usize, variants: &RadicalVariants) -> Self {
        let started = Instant::now();
        let table = resolver.table();

        let closures: Vec<(&str, Arc<ComponentSet>)> = table
            .record_map()
            .par_iter()
            .map(|(character, _)| (character.as_str(), resolver.resolve(character, max_depth)))
            .collect();

        let mut entries: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for (character, closure) in &closures {
            entries
                .entry(character.to_string())
                .or_default()
                .push(character.to_string());
            for component in closure.iter() {
                entries
                    .entry(component.clone())
                    .or_default()
                    .push(character.to_string());
            }
        }

        let aliases: Vec<String> = variants
            .symbols()
            .filter(|symbol| !entries.contains_key(*symbol))
            .filter(|symbol| {
                variants
                    .variants_of(symbol)
                    .iter()
                    .any(|v| entries.contains_key(v))
            })
            .map(|symbol| symbol.to_string())
            .collect();
        let alias_count = aliases.len();
        for alias in aliases {
            entries.entry(alias).or_default();
        }

        tracing::info!(
            depth = max_depth,
            keys = entries.len(),
            aliases = alias_count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "component index built"
        );

        Self {
            depth: max_depth,
            entries,
        }
    }

    /// Characters containing `component`, empty if the key is absent
    pub fn get(&self, component: &str) -> &[String] {
        self.entries
            .get(component)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_key(&self, component: &str) -> bool {
        self.entries.contains_key(component)
    }

    /// Every component key in unspecified order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Closure depth this index was built at
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of component keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
