// Hanzi-Decomp Radical Variants
// Equivalence classes of presentation forms of the same radical

use rustc_hash::FxHashMap;

/// Standalone form paired with its reduced (in-character) forms
const STANDARD_CLASSES: &[&[&str]] = &[
    &["人", "亻"],
    &["水", "氵"],
    &["心", "忄"],
    &["手", "扌"],
    &["言", "讠"],
    &["金", "钅"],
    &["食", "饣"],
    &["糸", "纟"],
    &["艸", "艹"],
    &["刀", "刂"],
    &["犬", "犭"],
    &["示", "礻"],
    &["衣", "衤"],
    &["火", "灬"],
    &["网", "罒"],
    &["攴", "攵"],
    &["辵", "辶"],
    &["爪", "爫"],
    &["牛", "牜"],
    &["玉", "王"],
];

/// Radical-variant equivalence table
///
/// Consulted only by filtering (structure filter membership checks) and by
/// key exposure in the component index. It never merges result lists.
#[derive(Debug, Clone, Default)]
pub struct RadicalVariants {
    /// symbol → the other members of its class
    classes: FxHashMap<String, Vec<String>>,
}

impl RadicalVariants {
    /// Empty table: no aliasing
    pub fn none() -> Self {
        Self::default()
    }

    /// The built-in radical classes
    pub fn standard() -> Self {
        let mut variants = Self::default();
        for class in STANDARD_CLASSES {
            variants.declare(class);
        }
        variants
    }

    /// Declare a set of symbols interchangeable
    ///
    /// Declaring overlapping classes joins them for the shared symbol only;
    /// the relation is not closed transitively.
    pub fn declare(&mut self, class: &[&str]) {
        for &member in class {
            let others = self.classes.entry(member.to_string()).or_default();
            for &other in class {
                if other != member && !others.iter().any(|o| o == other) {
                    others.push(other.to_string());
                }
            }
        }
    }

    /// Other forms of `symbol`, empty if it has none
    pub fn variants_of(&self, symbol: &str) -> &[String] {
        self.classes
            .get(symbol)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Check whether `candidate` is `symbol` or one of its variants
    pub fn matches(&self, symbol: &str, candidate: &str) -> bool {
        symbol == candidate || self.variants_of(symbol).iter().any(|v| v == candidate)
    }

    /// Every symbol that belongs to some class
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(|k| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
