//! Column sorting for the valuation table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::entities::ItemValuation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Group,
    #[default]
    BuyPerM3,
    BuyMinerals,
    BuyPerfectMinerals,
    SellPerM3,
    SellMinerals,
    SellPerfectMinerals,
}

pub fn sort_records(records: &mut [ItemValuation], field: SortField, ascending: bool) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn compare(a: &ItemValuation, b: &ItemValuation, field: SortField) -> Ordering {
    match field {
        SortField::Name => text_cmp(&a.name, &b.name),
        SortField::Group => text_cmp(&a.group, &b.group).then_with(|| text_cmp(&a.name, &b.name)),
        SortField::BuyPerM3 => numeric_cmp(a.buy.per_m3, b.buy.per_m3),
        SortField::BuyMinerals => numeric_cmp(a.buy.minerals, b.buy.minerals),
        SortField::BuyPerfectMinerals => {
            numeric_cmp(a.buy.perfect_minerals, b.buy.perfect_minerals)
        }
        SortField::SellPerM3 => numeric_cmp(a.sell.per_m3, b.sell.per_m3),
        SortField::SellMinerals => numeric_cmp(a.sell.minerals, b.sell.minerals),
        SortField::SellPerfectMinerals => {
            numeric_cmp(a.sell.perfect_minerals, b.sell.perfect_minerals)
        }
    }
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// Prices are clamped to finite non-negative values upstream; the fallback
// only guards against hand-built test data.
fn numeric_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AsteroidType, SideValuation};

    fn row(name: &str, buy_per_m3: f64) -> ItemValuation {
        ItemValuation {
            id: 0,
            name: name.to_string(),
            group: name.to_string(),
            color: String::new(),
            bonus: "0%".to_string(),
            available_in: vec![],
            compressed: false,
            asteroid_type: AsteroidType::Ore,
            buy: SideValuation {
                per_m3: buy_per_m3,
                ..SideValuation::default()
            },
            sell: SideValuation::default(),
        }
    }

    #[test]
    fn numeric_sort_descending_by_default_direction() {
        let mut rows = vec![row("a", 10.0), row("b", 30.0), row("c", 20.0)];
        sort_records(&mut rows, SortField::BuyPerM3, false);
        let order: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn numeric_sort_ascending() {
        let mut rows = vec![row("a", 10.0), row("b", 30.0), row("c", 20.0)];
        sort_records(&mut rows, SortField::BuyPerM3, true);
        let order: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["a", "c", "b"]);
    }

    #[test]
    fn group_sort_breaks_ties_by_name() {
        let mut rows = vec![row("b", 0.0), row("a", 0.0), row("c", 0.0)];
        rows[0].group = "Veldspar".to_string();
        rows[1].group = "Veldspar".to_string();
        rows[2].group = "Arkonor".to_string();

        sort_records(&mut rows, SortField::Group, true);
        let order: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut rows = vec![row("veldspar", 0.0), row("Arkonor", 0.0), row("bistot", 0.0)];
        sort_records(&mut rows, SortField::Name, true);
        let order: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["Arkonor", "bistot", "veldspar"]);
    }
}
