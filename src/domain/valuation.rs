//! Pure valuation: (catalogue, price snapshot) -> per-m³ table rows.

use super::catalogue::Catalogue;
use super::entities::{
    ItemValuation, OreItem, PriceSnapshot, Side, SideStats, SideValuation,
};

/// Refining efficiency without skill or structure bonuses.
pub const STANDARD_REFINE_YIELD: f64 = 0.70;
/// Best attainable refining efficiency (maxed skills, bonused structure).
pub const PERFECT_REFINE_YIELD: f64 = 0.8934;

/// Derives one row per catalogue item from the latest snapshot. `None`
/// means "no snapshot yet", which is distinct from an empty table.
pub fn valuate(
    catalogue: &Catalogue,
    snapshot: Option<&PriceSnapshot>,
) -> Option<Vec<ItemValuation>> {
    let snapshot = snapshot?;
    Some(
        catalogue
            .items()
            .iter()
            .map(|item| valuate_item(catalogue, snapshot, item))
            .collect(),
    )
}

fn valuate_item(catalogue: &Catalogue, snapshot: &PriceSnapshot, item: &OreItem) -> ItemValuation {
    let root = catalogue.root_of(item);
    ItemValuation {
        id: item.id,
        name: item.name.clone(),
        group: item.group_name.clone(),
        color: item.color.clone(),
        bonus: item.bonus.clone(),
        available_in: item.available_in.clone(),
        compressed: item.is_compressed(),
        asteroid_type: item.asteroid_type,
        buy: side_valuation(snapshot, item, root, Side::Buy),
        sell: side_valuation(snapshot, item, root, Side::Sell),
    }
}

fn side_valuation(
    snapshot: &PriceSnapshot,
    item: &OreItem,
    root: &OreItem,
    side: Side,
) -> SideValuation {
    let stats = snapshot
        .get(&item.id)
        .map(|entry| *entry.side(side))
        .unwrap_or_default();
    let raw_minerals = minerals_per_m3(snapshot, item, root, side);

    SideValuation {
        per_m3: per_m3(&stats, item, root),
        unit: stats.percentile,
        minerals: raw_minerals * STANDARD_REFINE_YIELD,
        perfect_minerals: raw_minerals * PERFECT_REFINE_YIELD,
    }
}

/// A zero or missing market price clamps to exactly 0 — downstream display
/// treats 0 as "no data", and the division must never emit NaN or a
/// negative artifact.
fn per_m3(stats: &SideStats, item: &OreItem, root: &OreItem) -> f64 {
    if stats.percentile > 0.0 {
        stats.percentile / item.compress_amount / root.volume
    } else {
        0.0
    }
}

/// Mineral-content value per m³ before the efficiency scalar is applied.
/// The aggregate request is built from the catalogue's full id closure, so
/// a mineral missing from the snapshot is a broken snapshot, not a row to
/// silently skip.
fn minerals_per_m3(snapshot: &PriceSnapshot, item: &OreItem, root: &OreItem, side: Side) -> f64 {
    item.minerals
        .iter()
        .map(|(mineral_id, quantity)| {
            let stats = snapshot
                .get(mineral_id)
                .expect("price snapshot must cover the catalogue mineral closure");
            stats.side(side).percentile * f64::from(*quantity)
                / f64::from(root.refine_amount)
                / root.volume
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AsteroidType, ItemPriceStats, OreItem, TypeId};
    use std::collections::BTreeMap;

    fn veldspar() -> OreItem {
        OreItem {
            id: 1,
            name: "Veldspar".to_string(),
            volume: 0.1,
            refine_amount: 100,
            minerals: BTreeMap::from([(2, 400)]),
            compress_amount: 1.0,
            compresses_from: None,
            group_name: "Veldspar".to_string(),
            color: "#8c8781".to_string(),
            bonus: "0%".to_string(),
            available_in: vec!["Highsec".to_string()],
            asteroid_type: AsteroidType::Ore,
        }
    }

    fn compressed_veldspar() -> OreItem {
        let mut item = veldspar();
        item.id = 3;
        item.name = "Compressed Veldspar".to_string();
        item.compresses_from = Some(1);
        item.compress_amount = 100.0;
        item
    }

    fn stats(buy: f64, sell: f64) -> ItemPriceStats {
        ItemPriceStats {
            buy: SideStats {
                percentile: buy,
                ..SideStats::default()
            },
            sell: SideStats {
                percentile: sell,
                ..SideStats::default()
            },
        }
    }

    fn snapshot(entries: &[(TypeId, f64, f64)]) -> PriceSnapshot {
        entries
            .iter()
            .map(|(id, buy, sell)| (*id, stats(*buy, *sell)))
            .collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn missing_snapshot_yields_none() {
        let catalogue = Catalogue::from_items(vec![veldspar()]).unwrap();
        assert!(valuate(&catalogue, None).is_none());
    }

    #[test]
    fn veldspar_reference_figures() {
        let catalogue = Catalogue::from_items(vec![veldspar()]).unwrap();
        let snapshot = snapshot(&[(1, 10.0, 12.0), (2, 5.0, 6.0)]);

        let records = valuate(&catalogue, Some(&snapshot)).unwrap();
        let row = &records[0];

        assert_close(row.buy.per_m3, 100.0);
        assert_close(row.sell.per_m3, 120.0);
        assert_close(row.buy.unit, 10.0);
        // 5 isk * 400 units / 100 batch / 0.1 m³ * 0.70
        assert_close(row.buy.minerals, 140.0);
        assert_close(row.buy.perfect_minerals, 200.0 * PERFECT_REFINE_YIELD);
    }

    #[test]
    fn zero_price_clamps_to_exactly_zero() {
        let catalogue = Catalogue::from_items(vec![veldspar()]).unwrap();
        for percentile in [0.0, -1.0] {
            let snapshot = snapshot(&[(1, percentile, percentile), (2, 0.0, 0.0)]);
            let records = valuate(&catalogue, Some(&snapshot)).unwrap();
            let row = &records[0];
            assert_eq!(row.buy.per_m3, 0.0);
            assert_eq!(row.sell.per_m3, 0.0);
            assert!(!row.buy.per_m3.is_nan());
        }
    }

    #[test]
    fn absent_item_entry_behaves_like_zero() {
        let catalogue = Catalogue::from_items(vec![veldspar()]).unwrap();
        let snapshot = snapshot(&[(2, 5.0, 6.0)]);
        let records = valuate(&catalogue, Some(&snapshot)).unwrap();
        assert_eq!(records[0].buy.per_m3, 0.0);
        assert_eq!(records[0].buy.unit, 0.0);
    }

    #[test]
    fn compressed_variant_normalizes_to_the_root_volume() {
        let catalogue = Catalogue::from_items(vec![veldspar(), compressed_veldspar()]).unwrap();
        // Price the compressed form at exactly compress_amount times the
        // base form; both must land on the same per-m³ figure.
        let snapshot = snapshot(&[(1, 10.0, 12.0), (3, 1000.0, 1200.0), (2, 5.0, 6.0)]);

        let records = valuate(&catalogue, Some(&snapshot)).unwrap();
        let base = records.iter().find(|r| r.id == 1).unwrap();
        let packed = records.iter().find(|r| r.id == 3).unwrap();

        assert_close(base.buy.per_m3, packed.buy.per_m3);
        assert_close(base.sell.per_m3, packed.sell.per_m3);
        assert!(packed.compressed);
        assert!(!base.compressed);
        // Mineral value is normalized by the root batch and volume, so it
        // matches as well.
        assert_close(base.buy.minerals, packed.buy.minerals);
    }

    #[test]
    fn valuation_is_deterministic() {
        let catalogue = Catalogue::from_items(vec![veldspar(), compressed_veldspar()]).unwrap();
        let snapshot = snapshot(&[(1, 10.0, 12.0), (3, 990.0, 1150.0), (2, 5.0, 6.0)]);

        let first = valuate(&catalogue, Some(&snapshot)).unwrap();
        let second = valuate(&catalogue, Some(&snapshot)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "mineral closure")]
    fn missing_mineral_entry_is_a_fault() {
        let catalogue = Catalogue::from_items(vec![veldspar()]).unwrap();
        let snapshot = snapshot(&[(1, 10.0, 12.0)]);
        let _ = valuate(&catalogue, Some(&snapshot));
    }
}
