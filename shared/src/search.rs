//! Approximate text matching for catalog search
//!
//! Boolean accept/reject only; no scoring or ranking. Result ordering is
//! the caller's concern (hits follow catalog order).

use crate::models::Product;

/// Returns true when `query` is an acceptable approximate match for `target`.
///
/// Matching tiers, cheapest first, short-circuiting on success:
/// 1. Empty (or whitespace-only) query matches everything.
/// 2. Case-insensitive substring containment.
/// 3. Every whitespace-separated query token is contained in the target,
///    in any order.
/// 4. The query appears in the target as a character subsequence (greedy
///    two-pointer scan), tolerating loose typing like "lat" for "Latte".
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    let t = target.to_lowercase();

    if t.contains(&q) {
        return true;
    }

    if q.split_whitespace().all(|word| t.contains(word)) {
        return true;
    }

    // Subsequence scan: walk the target once, consuming query characters
    // in order. Accept when the whole query has been consumed.
    let mut remaining = q.chars().peekable();
    for c in t.chars() {
        match remaining.peek() {
            Some(&qc) if qc == c => {
                remaining.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    remaining.peek().is_none()
}

/// A product is a search hit if any of its name, sku, or category matches.
pub fn product_matches(query: &str, product: &Product) -> bool {
    fuzzy_match(query, &product.name)
        || fuzzy_match(query, &product.sku)
        || fuzzy_match(query, &product.category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(fuzzy_match("", "anything"));
        assert!(fuzzy_match("   ", "anything"));
        assert!(fuzzy_match("", ""));
    }

    #[test]
    fn test_case_insensitive_containment() {
        assert!(fuzzy_match("mug", "Ceramic Mug (Black)"));
        assert!(fuzzy_match("MERCH", "merch-mug-blk"));
        assert!(fuzzy_match("Latte", "Iced Matcha Latte"));
    }

    #[test]
    fn test_all_tokens_match_in_any_order() {
        // Not a substring as a whole, but every word is contained.
        assert!(fuzzy_match("black mug", "ceramic mug black"));
        assert!(fuzzy_match("bean whole", "Whole Bean Espresso Blend"));
        assert!(!fuzzy_match("black scarf", "ceramic mug black"));
    }

    #[test]
    fn test_subsequence_fallback() {
        assert!(fuzzy_match("lat", "Vanilla Latte"));
        assert!(fuzzy_match("vnl", "Vanilla"));
        assert!(!fuzzy_match("xyz", "abc"));
        // Order matters: characters must appear in the same relative order.
        assert!(!fuzzy_match("tal", "tea"));
    }

    #[test]
    fn test_empty_target_never_matches_non_empty_query() {
        assert!(!fuzzy_match("mug", ""));
    }

    #[test]
    fn test_product_matches_any_field() {
        let product = Product {
            id: "p4".to_string(),
            name: "Ceramic Mug (Black)".to_string(),
            description: "12oz matte black ceramic mug.".to_string(),
            sku: "MERCH-MUG-BLK".to_string(),
            current_stock: 24,
            image_url: String::new(),
            category: "Merchandise".to_string(),
            reporting_category: None,
        };

        assert!(product_matches("mug", &product)); // name
        assert!(product_matches("blk", &product)); // sku
        assert!(product_matches("merchandise", &product)); // category
        assert!(!product_matches("croissant", &product));
    }
}
