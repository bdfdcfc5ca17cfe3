//! Sample rows loaded into every new catalog.

use singsing_core::ProductRow;

const NOODLES: &str = "Noodles & Instant Meals";
const RICE: &str = "Rice & Grains";

const SEED: [(&str, &str, &str); 10] = [
    ("0001", "Shin Ramyun — Spicy instant noodles", NOODLES),
    ("0002", "Chapagetti — Black bean noodles", NOODLES),
    ("0003", "Neoguri — Spicy seafood udon", NOODLES),
    ("0004", "Bibim Men — Cold spicy noodles", NOODLES),
    ("0005", "Japchae — Stir-fried glass noodles", NOODLES),
    ("0006", "Ottogi Cooked Rice — Pre-cooked rice packs", RICE),
    ("0007", "CJ Hetbahn — Instant white rice", RICE),
    ("0008", "Mixed Grain Rice (4-grain)", RICE),
    ("0009", "Glutinous Rice (Japanese)", RICE),
    ("0010", "Barley Rice", RICE),
];

/// The ten sample products, in display order.
///
/// Counts and prices are placeholders and kept exactly as written (`"00"`,
/// `"00.00"`); they are never normalized.
#[must_use]
pub fn seed_rows() -> Vec<ProductRow> {
    SEED.iter()
        .map(|(id, name, category)| ProductRow::new(id, name, "00", category, "00", "00.00"))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_has_ten_unique_rows() {
        let rows = seed_rows();
        assert_eq!(rows.len(), 10);
        let ids: HashSet<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_seed_order_and_placeholders() {
        let rows = seed_rows();
        assert_eq!(rows.first().map(|r| r.id.as_str()), Some("0001"));
        assert_eq!(rows.last().map(|r| r.id.as_str()), Some("0010"));
        assert!(rows.iter().all(|r| r.price == "00.00" && r.stock == "00"));
    }
}
