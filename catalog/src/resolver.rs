//! # Resolver
//!
//! Matches free-form product identifiers against the names that actually
//! exist on disk or in the catalog. Folder names drift from catalog names in
//! casing, punctuation, and spacing ("MacBook Pro 16" vs `macbook-pro-16`),
//! so comparison happens on a normalized key: lowercase, ASCII alphanumerics
//! only.
//!
//! Matching runs in two tiers. Exact key equality wins outright; only when no
//! exact match exists does the fuzzy tier run, accepting the first candidate
//! whose key overlaps the target by prefix or substring in either direction.
//! Both tiers take the first hit in iteration order, so which folder gets
//! served is reproducible for a given candidate listing.
//!
//! The fuzzy overlap is deliberately permissive: a request for "macbook" should
//! find `macbook-pro-16`. The flip side is that very short keys are substrings
//! of almost anything, so single-letter skus can over-match. That behavior is
//! relied upon by existing folder layouts and is kept as-is, with no
//! minimum-length cutoff.

use crate::Product;

/// Folder that loose files land in when nothing in the catalog claims them.
pub const UNCATEGORIZED_DIR: &str = "_uncategorized";

/// Lowercases and strips everything that is not an ASCII letter or digit.
///
/// Total and idempotent; the empty string maps to itself.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

fn fuzzy_overlap(key: &str, target: &str) -> bool {
    key.starts_with(target)
        || target.starts_with(key)
        || key.contains(target)
        || target.contains(key)
}

/// The tiered scan both public entry points go through: an exact key match
/// wins outright, otherwise the first [`fuzzy_overlap`] hit does. Within each
/// tier the earliest entry wins, so the caller's iteration order (directory
/// listing order, catalog registration order) decides ties.
fn resolve_keyed<'a, T>(target: &str, entries: &'a [(String, T)]) -> Option<&'a T> {
    for (key, value) in entries {
        if key == target {
            return Some(value);
        }
    }

    entries
        .iter()
        .find(|(key, _)| fuzzy_overlap(key, target))
        .map(|(_, value)| value)
}

/// Picks the best-matching candidate for `requested`, or `None`.
///
/// No match is a normal outcome, not an error; see [`resolve_keyed`] for the
/// tier ordering.
pub fn resolve<'a, S: AsRef<str>>(requested: &str, candidates: &'a [S]) -> Option<&'a str> {
    let target = normalize(requested);
    let keyed: Vec<(String, &str)> = candidates
        .iter()
        .map(|candidate| (normalize(candidate.as_ref()), candidate.as_ref()))
        .collect();

    resolve_keyed(&target, &keyed).copied()
}

/// Normalized lookup table from catalog names and skus to display names.
///
/// Keys are registered in catalog order, name before sku; when two products
/// collide on a key the first registration wins.
pub struct ProductIndex {
    entries: Vec<(String, String)>,
}

impl ProductIndex {
    pub fn new(products: &[Product]) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();

        for product in products {
            register(&mut entries, normalize(&product.name), &product.name);

            if !product.sku.is_empty() {
                register(&mut entries, normalize(&product.sku), &product.name);
            }
        }

        Self { entries }
    }

    /// Resolves a source directory name to the owning product's display name.
    pub fn match_directory(&self, dir_name: &str) -> Option<&str> {
        let target = normalize(dir_name);

        resolve_keyed(&target, &self.entries).map(String::as_str)
    }

    /// Associates a source directory with a destination folder, falling back
    /// to the directory's own name when the catalog has no match.
    pub fn associate_directory(&self, dir_name: &str) -> Association {
        match self.match_directory(dir_name) {
            Some(name) => Association::Matched(name.to_string()),
            None => Association::Guessed(dir_name.to_string()),
        }
    }
}

fn register(entries: &mut Vec<(String, String)>, key: String, name: &str) {
    if entries.iter().any(|(existing, _)| *existing == key) {
        return;
    }

    entries.push((key, name.to_string()));
}

/// Outcome of associating one import source entry with the catalog.
///
/// `Guessed` and `Uncategorized` are reported back to the caller rather than
/// silently absorbed, so an import run can list which entries were placed on a
/// real match and which were placed on a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Association {
    Matched(String),
    Guessed(String),
    Uncategorized,
}

impl Association {
    pub fn folder_name(&self) -> &str {
        match self {
            Association::Matched(name) | Association::Guessed(name) => name,
            Association::Uncategorized => UNCATEGORIZED_DIR,
        }
    }
}

/// Matches a loose file against the catalog: sku substring first, then
/// normalized product name contained in the normalized file name.
pub fn match_file<'a>(products: &'a [Product], file_name: &str) -> Option<&'a Product> {
    let lower = file_name.to_lowercase();

    if let Some(product) = products
        .iter()
        .find(|p| !p.sku.is_empty() && lower.contains(&p.sku.to_lowercase()))
    {
        return Some(product);
    }

    let key = normalize(file_name);
    products.iter().find(|p| key.contains(&normalize(&p.name)))
}

pub fn associate_file(products: &[Product], file_name: &str) -> Association {
    match match_file(products, file_name) {
        Some(product) => Association::Matched(product.name.clone()),
        None => Association::Uncategorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, sku: &str, name: &str) -> Product {
        Product {
            id,
            sku: sku.to_string(),
            name: name.to_string(),
            category: "Laptops".to_string(),
            description: String::new(),
            features: Vec::new(),
        }
    }

    #[test]
    fn test_normalize_strips_and_lowercases() {
        assert_eq!(normalize("Mac-Book Pro!"), "macbookpro");
        assert_eq!(normalize("MBP_16 (2024)"), "mbp162024");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in ["MacBook Pro 16", "dell-xps", "", "  !!  ", "abc123"] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn test_exact_match_beats_fuzzy() {
        let candidates = vec!["macbook".to_string(), "macbook-pro".to_string()];

        assert_eq!(resolve("MacBook", &candidates), Some("macbook"));
    }

    #[test]
    fn test_fuzzy_fallback_on_partial_name() {
        let candidates = vec!["macbook-pro-16".to_string()];

        assert_eq!(resolve("macbook", &candidates), Some("macbook-pro-16"));
    }

    #[test]
    fn test_no_overlap_yields_none() {
        let candidates = vec!["dell-xps".to_string()];

        assert_eq!(resolve("lenovo", &candidates), None);
    }

    #[test]
    fn test_first_match_wins_within_fuzzy_tier() {
        let candidates = vec!["a-widget".to_string(), "widget-a".to_string()];

        assert_eq!(resolve("widget", &candidates), Some("a-widget"));
    }

    #[test]
    fn test_empty_candidates_yield_none() {
        let candidates: Vec<String> = Vec::new();

        assert_eq!(resolve("anything", &candidates), None);
        assert_eq!(resolve("", &candidates), None);
    }

    #[test]
    fn test_index_collision_keeps_first_registration() {
        let products = vec![
            product(1, "", "Mac Book"),
            product(2, "", "MACBOOK"), // same key as "Mac Book"
        ];
        let index = ProductIndex::new(&products);

        assert_eq!(index.match_directory("macbook"), Some("Mac Book"));
    }

    #[test]
    fn test_index_prefers_exact_over_fuzzy() {
        let products = vec![product(1, "", "MacBook Pro"), product(2, "", "MacBook")];
        let index = ProductIndex::new(&products);

        // fuzzy alone would take "MacBook Pro" first; the exact tier must win
        assert_eq!(index.match_directory("mac-book"), Some("MacBook"));
    }

    #[test]
    fn test_index_matches_by_sku() {
        let products = vec![product(1, "MBP-16", "MacBook Pro 16")];
        let index = ProductIndex::new(&products);

        assert_eq!(index.match_directory("mbp16"), Some("MacBook Pro 16"));
    }

    #[test]
    fn test_directory_association_falls_back_to_source_name() {
        let products = vec![product(1, "XPS-13", "Dell XPS 13")];
        let index = ProductIndex::new(&products);

        assert_eq!(
            index.associate_directory("thinkpad-photos"),
            Association::Guessed("thinkpad-photos".to_string())
        );
        assert_eq!(
            Association::Guessed("thinkpad-photos".to_string()).folder_name(),
            "thinkpad-photos"
        );
    }

    #[test]
    fn test_file_matches_sku_before_name() {
        let products = vec![
            product(1, "XPS-13", "Dell XPS 13"),
            product(2, "MBP-16", "MacBook Pro 16"),
        ];

        let matched = match_file(&products, "promo-mbp-16-front.jpg").unwrap();
        assert_eq!(matched.id, 2);
    }

    #[test]
    fn test_file_matches_by_name_token() {
        let products = vec![product(1, "XPS-13", "Dell XPS 13")];

        let matched = match_file(&products, "Dell_XPS_13_lid.png").unwrap();
        assert_eq!(matched.id, 1);
    }

    #[test]
    fn test_unmatched_file_goes_uncategorized() {
        let products = vec![product(1, "XPS-13", "Dell XPS 13")];

        assert_eq!(
            associate_file(&products, "random-shot.jpg"),
            Association::Uncategorized
        );
        assert_eq!(Association::Uncategorized.folder_name(), UNCATEGORIZED_DIR);
    }
}
