// Hanzi-Decomp Decomposition Resolver
// Transitive component closure with depth bound and cycle protection

use std::collections::BTreeSet;
use std::sync::Arc;

use dashmap::DashMap;

use crate::data::Table;
use crate::idc;

/// Distinct components reachable from a symbol
pub type ComponentSet = BTreeSet<String>;

/// Deepest closure level accepted by the query surface
pub const MAX_DEPTH: usize = 5;

/// Compute the component closure of `symbol`
///
/// Expands the decomposition recursively. `max_depth = 0` yields only the
/// immediate components. A symbol is never expanded twice along the same
/// path, but sibling branches may each expand it. The result never contains
/// `symbol` itself, and never contains structural markers.
///
/// # Example
/// ```
/// # use hanzi_decomp::data::DataLoader;
/// # use hanzi_decomp::resolver::resolve;
/// let table = DataLoader::parse(r#"{"character":"休","strokes":6,"decomposition":"⿰亻木"}"#).unwrap();
/// let parts = resolve(&table, "休", 1);
/// assert!(parts.contains("亻") && parts.contains("木"));
/// ```
pub fn resolve(table: &Table, symbol: &str, max_depth: usize) -> ComponentSet {
    let mut out = ComponentSet::new();
    let mut path = Vec::with_capacity(max_depth + 2);
    expand(table, symbol, 0, max_depth, &mut path, &mut out);
    out.remove(symbol);
    out
}

fn expand<'a>(
    table: &'a Table,
    symbol: &'a str,
    depth: usize,
    max_depth: usize,
    path: &mut Vec<&'a str>,
    out: &mut ComponentSet,
) {
    if depth > max_depth || path.contains(&symbol) {
        return;
    }

    path.push(symbol);
    for component in idc::components(table.decomposition(symbol)) {
        out.insert(component.to_string());
        expand(table, component, depth + 1, max_depth, path, out);
    }
    path.pop();
}

/// Memoizing resolver over one table
///
/// Caches top-level results by `(symbol, max_depth)`. The cache is safe to
/// share across threads; a racing duplicate computation yields an identical
/// set and simply overwrites the entry.
pub struct Resolver {
    table: Arc<Table>,
    memo: DashMap<(String, usize), Arc<ComponentSet>>,
}

impl Resolver {
    pub fn new(table: Arc<Table>) -> Self {
        Self {
            table,
            memo: DashMap::new(),
        }
    }

    /// Resolve with memoization
    pub fn resolve(&self, symbol: &str, max_depth: usize) -> Arc<ComponentSet> {
        let key = (symbol.to_string(), max_depth);
        if let Some(hit) = self.memo.get(&key) {
            return Arc::clone(hit.value());
        }

        let set = Arc::new(resolve(&self.table, symbol, max_depth));
        self.memo.insert(key, Arc::clone(&set));
        set
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Number of memoized entries
    pub fn cached(&self) -> usize {
        self.memo.len()
    }
}
