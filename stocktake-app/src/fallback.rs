//! Fallback catalog
//!
//! Fixed dataset substituted when the backend is unreachable. Writes in
//! degraded mode are not expected to persist anywhere real; the ledger
//! flags the condition so the UI can warn the user.

use shared::Product;

/// Number of items in the fallback catalog (7 hand-written + 94 generated)
pub const FALLBACK_CATALOG_SIZE: usize = 101;

const CATEGORY_CYCLE: [&str; 5] = ["Beverage", "Bakery", "Coffee", "Merchandise", "Grocery"];

fn base_product(
    id: &str,
    name: &str,
    description: &str,
    sku: &str,
    current_stock: i64,
    image_seed: u32,
    category: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        sku: sku.to_string(),
        current_stock,
        image_url: format!("https://picsum.photos/400/400?random={image_seed}"),
        category: category.to_string(),
        reporting_category: None,
    }
}

/// Build the fixed fallback dataset. Deterministic; no randomness.
pub fn fallback_catalog() -> Vec<Product> {
    let mut items = vec![
        base_product(
            "p1",
            "Vanilla Latte",
            "Espresso with steamed milk and vanilla syrup.",
            "LAT-VAN-001",
            45,
            1,
            "Beverage",
        ),
        base_product(
            "p2",
            "Almond Croissant",
            "Buttery croissant filled with almond paste and topped with sliced almonds.",
            "BAK-ALM-002",
            12,
            2,
            "Bakery",
        ),
        base_product(
            "p3",
            "Canvas Tote Bag",
            "Durable 12oz canvas tote with reinforced handles.",
            "MERCH-TOT-003",
            150,
            3,
            "Merchandise",
        ),
        base_product(
            "p4",
            "Ceramic Mug (Black)",
            "12oz matte black ceramic mug.",
            "MERCH-MUG-BLK",
            24,
            4,
            "Merchandise",
        ),
        base_product(
            "p5",
            "Whole Bean Espresso Blend",
            "1lb bag of our signature house espresso blend.",
            "COF-WHL-ESP",
            8,
            5,
            "Coffee",
        ),
        base_product(
            "p6",
            "Blueberry Muffin",
            "Fresh baked muffin with wild blueberries.",
            "BAK-BLU-006",
            0,
            6,
            "Bakery",
        ),
        base_product(
            "p7",
            "Iced Matcha Latte",
            "Premium matcha green tea served over ice.",
            "BEV-MAT-ICE",
            30,
            7,
            "Beverage",
        ),
    ];

    // Generated filler continues numbering after the hand-written items.
    for n in 8..=FALLBACK_CATALOG_SIZE as i64 {
        items.push(Product {
            id: format!("p{n}"),
            name: format!("Sample Item {n}"),
            description: format!("Placeholder description for Sample Item {n}."),
            sku: format!("SKU-{n:03}"),
            current_stock: (n * 3) % 160,
            image_url: format!("https://picsum.photos/400/400?random={n}"),
            category: CATEGORY_CYCLE[n as usize % CATEGORY_CYCLE.len()].to_string(),
            reporting_category: None,
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_catalog_has_fixed_size() {
        assert_eq!(fallback_catalog().len(), FALLBACK_CATALOG_SIZE);
    }

    #[test]
    fn test_fallback_catalog_is_deterministic() {
        assert_eq!(fallback_catalog(), fallback_catalog());
    }

    #[test]
    fn test_fallback_ids_and_skus_are_unique() {
        let items = fallback_catalog();
        let ids: std::collections::HashSet<_> = items.iter().map(|p| &p.id).collect();
        let skus: std::collections::HashSet<_> = items.iter().map(|p| &p.sku).collect();
        assert_eq!(ids.len(), items.len());
        assert_eq!(skus.len(), items.len());
    }

    #[test]
    fn test_generated_items_follow_base_products() {
        let items = fallback_catalog();
        assert_eq!(items[0].name, "Vanilla Latte");
        assert_eq!(items[7].id, "p8");
        assert_eq!(items[7].sku, "SKU-008");
        assert_eq!(items[7].current_stock, 24);
    }
}
