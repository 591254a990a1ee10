//! Domain logic for ore valuation lives here.

pub mod app_state;
pub mod catalogue;
pub mod entities;
pub mod filters;
pub mod sorting;
pub mod valuation;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState};
#[allow(unused_imports)]
pub use catalogue::{Catalogue, CatalogueError, GroupEntry};
#[allow(unused_imports)]
pub use entities::{
    AsteroidType, ItemPriceStats, ItemValuation, OreItem, PriceSnapshot, Side, SideStats,
    SideValuation, TypeId,
};
#[allow(unused_imports)]
pub use filters::{compressed_key, FilterSet, FilterState};
#[allow(unused_imports)]
pub use sorting::{sort_records, SortField};
#[allow(unused_imports)]
pub use valuation::{valuate, PERFECT_REFINE_YIELD, STANDARD_REFINE_YIELD};
