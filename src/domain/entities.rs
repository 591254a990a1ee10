use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// EVE static-data type id.
pub type TypeId = u32;

/// Partition of the catalogue into the three display tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsteroidType {
    #[default]
    Ore,
    Moon,
    Ice,
}

impl AsteroidType {
    pub const ALL: [AsteroidType; 3] = [AsteroidType::Ore, AsteroidType::Moon, AsteroidType::Ice];

    pub fn label(&self) -> &'static str {
        match self {
            AsteroidType::Ore => "Ore",
            AsteroidType::Moon => "Moon",
            AsteroidType::Ice => "Ice",
        }
    }
}

/// One tradeable variant (raw or compressed) of a mineable resource, as
/// extracted from the game's static data export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OreItem {
    pub id: TypeId,
    pub name: String,
    /// m³ per unit of the *uncompressed* base form. Always read via the
    /// root item so per-m³ figures stay comparable across compression states.
    pub volume: f64,
    /// Units consumed per refine batch.
    pub refine_amount: u32,
    /// Mineral type id -> quantity yielded per refine batch.
    pub minerals: BTreeMap<TypeId, u32>,
    /// Volume-reduction divisor for compressed variants (1 = uncompressed).
    #[serde(default = "default_compress_amount")]
    pub compress_amount: f64,
    /// Id of the uncompressed base item; present only on compressed variants.
    #[serde(default)]
    pub compresses_from: Option<TypeId>,
    pub group_name: String,
    pub color: String,
    /// Yield-bonus tier label ("0%", "5%", ...).
    pub bonus: String,
    /// Zone tags where the resource spawns ("Highsec", "Nullsec", "R4", ...).
    pub available_in: Vec<String>,
    pub asteroid_type: AsteroidType,
}

fn default_compress_amount() -> f64 {
    1.0
}

impl OreItem {
    /// The compression link is the contract for "is this a compressed
    /// variant", not the compression ratio.
    pub fn is_compressed(&self) -> bool {
        self.compresses_from.is_some()
    }

    pub fn root_id(&self) -> TypeId {
        self.compresses_from.unwrap_or(self.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

/// Percentile statistics bundle for one side of the book, as aggregated by
/// the market endpoint. Only `percentile` feeds the valuation; the rest is
/// carried for display and diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SideStats {
    pub weighted_average: f64,
    pub max: f64,
    pub min: f64,
    pub stddev: f64,
    pub median: f64,
    pub volume: f64,
    pub order_count: f64,
    pub percentile: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemPriceStats {
    pub buy: SideStats,
    pub sell: SideStats,
}

impl ItemPriceStats {
    pub fn side(&self, side: Side) -> &SideStats {
        match side {
            Side::Buy => &self.buy,
            Side::Sell => &self.sell,
        }
    }
}

/// Latest market aggregates keyed by type id. Replaced wholesale on every
/// successful poll; absent entirely until the first one succeeds.
pub type PriceSnapshot = HashMap<TypeId, ItemPriceStats>;

/// Per-m³ figures for one side of the book.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SideValuation {
    /// Market price of the item itself, normalized to the base form's m³.
    pub per_m3: f64,
    /// Raw per-unit market price (shown as hover detail).
    pub unit: f64,
    /// Mineral content value at standard refining efficiency.
    pub minerals: f64,
    /// Mineral content value at perfect refining efficiency.
    pub perfect_minerals: f64,
}

/// Derived table row. Recomputed in full whenever the snapshot changes;
/// carries no identity of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemValuation {
    pub id: TypeId,
    pub name: String,
    pub group: String,
    pub color: String,
    pub bonus: String,
    pub available_in: Vec<String>,
    pub compressed: bool,
    pub asteroid_type: AsteroidType,
    pub buy: SideValuation,
    pub sell: SideValuation,
}
