//! Static ore catalogue and the lookup structures derived from it.
//!
//! The catalogue is loaded once from the embedded asset and never changes
//! afterwards; everything here is read-only after construction.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use super::entities::{AsteroidType, OreItem, TypeId};

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to parse catalogue asset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("item {item} ({name}) compresses from unknown item {missing}")]
    MissingRoot {
        item: TypeId,
        name: String,
        missing: TypeId,
    },
}

/// A filter-bar entry for one base-resource family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupEntry {
    pub name: String,
    pub color: String,
    /// Root item of the family, used for the group icon.
    pub root_id: TypeId,
}

/// Immutable item list plus its id index. A dangling compression link is a
/// broken asset build, so construction fails instead of deferring the fault
/// to valuation time.
#[derive(Debug)]
pub struct Catalogue {
    items: Vec<OreItem>,
    by_id: HashMap<TypeId, usize>,
}

impl Catalogue {
    pub fn from_json(raw: &str) -> Result<Self, CatalogueError> {
        let items: Vec<OreItem> = serde_json::from_str(raw)?;
        Self::from_items(items)
    }

    pub fn from_items(items: Vec<OreItem>) -> Result<Self, CatalogueError> {
        let by_id: HashMap<TypeId, usize> = items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.id, index))
            .collect();

        for item in &items {
            if let Some(root) = item.compresses_from {
                if !by_id.contains_key(&root) {
                    return Err(CatalogueError::MissingRoot {
                        item: item.id,
                        name: item.name.clone(),
                        missing: root,
                    });
                }
            }
        }

        Ok(Self { items, by_id })
    }

    pub fn items(&self) -> &[OreItem] {
        &self.items
    }

    pub fn get(&self, id: TypeId) -> Option<&OreItem> {
        self.by_id.get(&id).map(|index| &self.items[*index])
    }

    /// The uncompressed reference item. Normalization divisors (`volume`,
    /// `refine_amount`) must always come from here.
    pub fn root_of(&self, item: &OreItem) -> &OreItem {
        self.get(item.root_id())
            .expect("compression links are validated at construction")
    }

    pub fn subset(&self, kind: AsteroidType) -> impl Iterator<Item = &OreItem> {
        self.items
            .iter()
            .filter(move |item| item.asteroid_type == kind)
    }

    /// Every id the price endpoint must cover: all catalogue items plus the
    /// mineral ids their refine yields reference. Sorted and deduplicated so
    /// the aggregate URL is stable across runs.
    pub fn price_id_closure(&self) -> Vec<TypeId> {
        let mut ids: BTreeSet<TypeId> = self.items.iter().map(|item| item.id).collect();
        for item in &self.items {
            ids.extend(item.minerals.keys().copied());
        }
        ids.into_iter().collect()
    }

    /// Distinct base-resource families in the active subset, sorted by name.
    pub fn distinct_groups(&self, kind: AsteroidType) -> Vec<GroupEntry> {
        let mut seen = BTreeSet::new();
        let mut groups = Vec::new();
        for item in self.subset(kind) {
            if seen.insert(item.group_name.clone()) {
                let root = self.root_of(item);
                groups.push(GroupEntry {
                    name: item.group_name.clone(),
                    color: item.color.clone(),
                    root_id: root.id,
                });
            }
        }
        groups.sort_by(|a, b| a.name.cmp(&b.name));
        groups
    }

    /// Distinct bonus tiers in the active subset, numeric-aware ordered
    /// ("0%" < "5%" < "10%").
    pub fn distinct_bonuses(&self, kind: AsteroidType) -> Vec<String> {
        let mut bonuses: Vec<String> = self
            .subset(kind)
            .map(|item| item.bonus.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        bonuses.sort_by(|a, b| natural_key(a).cmp(&natural_key(b)));
        bonuses
    }

    /// Distinct availability tags in the active subset, numeric-aware ordered
    /// so "R4" < "R16" < "R32" by the embedded integer.
    pub fn distinct_availability(&self, kind: AsteroidType) -> Vec<String> {
        let mut tags: Vec<String> = self
            .subset(kind)
            .flat_map(|item| item.available_in.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        tags.sort_by(|a, b| natural_key(a).cmp(&natural_key(b)));
        tags
    }
}

/// Sort key that orders an embedded integer numerically instead of
/// lexicographically: ("R", 4) < ("R", 16) < ("R", 32).
fn natural_key(value: &str) -> (String, Option<u64>, String) {
    match value.find(|c: char| c.is_ascii_digit()) {
        Some(start) => {
            let (prefix, rest) = value.split_at(start);
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            (prefix.to_string(), digits.parse().ok(), value.to_string())
        }
        None => (value.to_string(), None, value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn item(id: TypeId, name: &str, group: &str, kind: AsteroidType) -> OreItem {
        OreItem {
            id,
            name: name.to_string(),
            volume: 0.1,
            refine_amount: 100,
            minerals: BTreeMap::from([(34, 400)]),
            compress_amount: 1.0,
            compresses_from: None,
            group_name: group.to_string(),
            color: "#8c8781".to_string(),
            bonus: "0%".to_string(),
            available_in: vec!["Highsec".to_string()],
            asteroid_type: kind,
        }
    }

    fn compressed(mut base: OreItem, id: TypeId) -> OreItem {
        base.name = format!("Compressed {}", base.name);
        base.compresses_from = Some(base.id);
        base.id = id;
        base.compress_amount = 100.0;
        base
    }

    #[test]
    fn rejects_dangling_compression_link() {
        let orphan = compressed(item(1230, "Veldspar", "Veldspar", AsteroidType::Ore), 62516);
        let error = Catalogue::from_items(vec![orphan]).unwrap_err();
        assert!(matches!(
            error,
            CatalogueError::MissingRoot { missing: 1230, .. }
        ));
    }

    #[test]
    fn root_resolution_follows_the_compression_link() {
        let base = item(1230, "Veldspar", "Veldspar", AsteroidType::Ore);
        let variant = compressed(base.clone(), 62516);
        let catalogue = Catalogue::from_items(vec![base, variant]).unwrap();

        let variant = catalogue.get(62516).unwrap();
        assert_eq!(catalogue.root_of(variant).id, 1230);

        let base = catalogue.get(1230).unwrap();
        assert_eq!(catalogue.root_of(base).id, 1230);
    }

    #[test]
    fn price_id_closure_includes_minerals_once() {
        let mut scordite = item(1228, "Scordite", "Scordite", AsteroidType::Ore);
        scordite.minerals = BTreeMap::from([(34, 150), (35, 90)]);
        let veldspar = item(1230, "Veldspar", "Veldspar", AsteroidType::Ore);
        let catalogue = Catalogue::from_items(vec![veldspar, scordite]).unwrap();

        assert_eq!(catalogue.price_id_closure(), vec![34, 35, 1228, 1230]);
    }

    #[test]
    fn distinct_groups_are_deduplicated_and_sorted() {
        let veldspar = item(1230, "Veldspar", "Veldspar", AsteroidType::Ore);
        let dense = {
            let mut it = item(17471, "Dense Veldspar", "Veldspar", AsteroidType::Ore);
            it.bonus = "10%".to_string();
            it
        };
        let arkonor = item(22, "Arkonor", "Arkonor", AsteroidType::Ore);
        let catalogue = Catalogue::from_items(vec![veldspar, dense, arkonor]).unwrap();

        let groups = catalogue.distinct_groups(AsteroidType::Ore);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Arkonor", "Veldspar"]);
    }

    #[test]
    fn group_entries_point_at_the_uncompressed_root() {
        let base = item(1230, "Veldspar", "Veldspar", AsteroidType::Ore);
        let variant = compressed(base.clone(), 62516);
        // Compressed variant listed first; the group icon id must still be
        // the base item.
        let catalogue = Catalogue::from_items(vec![variant, base]).unwrap();

        let groups = catalogue.distinct_groups(AsteroidType::Ore);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].root_id, 1230);
    }

    #[test]
    fn availability_tags_sort_by_embedded_integer() {
        let mut items = Vec::new();
        for (id, tag) in [(1u32, "R32"), (2, "R4"), (3, "R16"), (4, "R64")] {
            let mut it = item(id, &format!("Moon {id}"), &format!("G{id}"), AsteroidType::Moon);
            it.available_in = vec![tag.to_string()];
            items.push(it);
        }
        let catalogue = Catalogue::from_items(items).unwrap();

        assert_eq!(
            catalogue.distinct_availability(AsteroidType::Moon),
            vec!["R4", "R16", "R32", "R64"]
        );
    }

    #[test]
    fn bonus_tiers_sort_numerically() {
        let mut items = Vec::new();
        for (id, bonus) in [(1u32, "10%"), (2, "0%"), (3, "5%")] {
            let mut it = item(id, &format!("Ore {id}"), &format!("G{id}"), AsteroidType::Ore);
            it.bonus = bonus.to_string();
            items.push(it);
        }
        let catalogue = Catalogue::from_items(items).unwrap();

        assert_eq!(
            catalogue.distinct_bonuses(AsteroidType::Ore),
            vec!["0%", "5%", "10%"]
        );
    }

    #[test]
    fn subset_partitions_by_asteroid_type() {
        let ore = item(1230, "Veldspar", "Veldspar", AsteroidType::Ore);
        let ice = item(16264, "Blue Ice", "Blue Ice", AsteroidType::Ice);
        let catalogue = Catalogue::from_items(vec![ore, ice]).unwrap();

        assert_eq!(catalogue.subset(AsteroidType::Ore).count(), 1);
        assert_eq!(catalogue.subset(AsteroidType::Moon).count(), 0);
        assert_eq!(catalogue.subset(AsteroidType::Ice).count(), 1);
    }
}
