// Hanzi-Decomp Decomposition Tokenizer
// Splits decomposition strings into components and validates symbols

use crate::types::Idc;

/// Codepoint ranges accepted as components (inclusive)
///
/// CJK Unified Ideographs and extensions A..H, the compatibility blocks,
/// radical blocks and CJK strokes. The IDC block (U+2FF0..U+2FFF) is
/// deliberately outside every range.
const COMPONENT_RANGES: &[(u32, u32)] = &[
    (0x2E80, 0x2EFF),   // CJK Radicals Supplement
    (0x2F00, 0x2FDF),   // Kangxi Radicals
    (0x31C0, 0x31E3),   // CJK Strokes
    (0x3400, 0x4DBF),   // Extension A
    (0x4E00, 0x9FFF),   // Unified Ideographs
    (0xF900, 0xFAFF),   // Compatibility Ideographs
    (0x20000, 0x2A6DF), // Extension B
    (0x2A700, 0x2B73F), // Extension C
    (0x2B740, 0x2B81F), // Extension D
    (0x2B820, 0x2CEAF), // Extension E
    (0x2CEB0, 0x2EBEF), // Extension F
    (0x2F800, 0x2FA1F), // Compatibility Supplement
    (0x30000, 0x3134F), // Extension G
    (0x31350, 0x323AF), // Extension H
];

/// Check if a codepoint lies in an accepted component range
///
/// # Examples
/// ```
/// # use hanzi_decomp::idc::is_component_char;
/// assert!(is_component_char('木'));
/// assert!(!is_component_char('⿰'));
/// assert!(!is_component_char('a'));
/// ```
#[inline]
pub fn is_component_char(ch: char) -> bool {
    let cp = ch as u32;
    COMPONENT_RANGES
        .iter()
        .any(|&(lo, hi)| lo <= cp && cp <= hi)
}

/// Check if a symbol is a single accepted codepoint
///
/// Multi-codepoint sequences are never components.
pub fn is_valid_component(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => is_component_char(ch),
        _ => false,
    }
}

/// Check if a codepoint is a structural marker
#[inline]
pub fn is_structural_marker(ch: char) -> bool {
    Idc::from_char(ch).is_some()
}

/// Iterate the components of a decomposition string
///
/// Markers, leading or interleaved, are skipped along with anything outside
/// the accepted ranges. Each item borrows a single codepoint from the input.
///
/// # Examples
/// ```
/// # use hanzi_decomp::idc::components;
/// let parts: Vec<&str> = components("⿰亻⿱口木").collect();
/// assert_eq!(parts, vec!["亻", "口", "木"]);
/// ```
pub fn components(decomposition: &str) -> impl Iterator<Item = &str> {
    decomposition
        .char_indices()
        .filter(|&(_, ch)| is_component_char(ch))
        .map(move |(i, ch)| &decomposition[i..i + ch.len_utf8()])
}

/// Check whether `symbol` appears directly in a decomposition string
pub fn contains_component(decomposition: &str, symbol: &str) -> bool {
    components(decomposition).any(|c| c == symbol)
}
