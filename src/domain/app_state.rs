use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::entities::{AsteroidType, PriceSnapshot};
use super::filters::FilterState;
use super::sorting::SortField;

/// Mutable state behind the UI. The catalogue itself lives outside this
/// struct and never changes after startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Latest successful snapshot. Stays populated when a later poll fails;
    /// the table keeps rendering stale-but-real prices.
    pub snapshot: Option<PriceSnapshot>,
    pub fetched_at: Option<OffsetDateTime>,
    /// Most recent fetch failure. Blocking only while no snapshot has ever
    /// succeeded; afterwards it is surfaced as a toast at most.
    pub last_error: Option<String>,
    pub filters: FilterState,
    pub asteroid_type: AsteroidType,
    pub sort_field: SortField,
    pub sort_ascending: bool,
}

impl AppState {
    pub fn apply_snapshot(&mut self, snapshot: PriceSnapshot, fetched_at: OffsetDateTime) {
        self.snapshot = Some(snapshot);
        self.fetched_at = Some(fetched_at);
        self.last_error = None;
    }

    pub fn record_fetch_error(&mut self, error: impl Into<String>) {
        self.last_error = Some(error.into());
    }

    /// True only when there is nothing to show and the last attempt failed.
    pub fn load_failed(&self) -> bool {
        self.snapshot.is_none() && self.last_error.is_some()
    }

    pub fn set_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field;
            self.sort_ascending = false;
        }
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.filters = persisted.filters;
        self.asteroid_type = persisted.asteroid_type;
        self.sort_field = persisted.sort_field;
        self.sort_ascending = persisted.sort_ascending;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            filters: self.filters.clone(),
            asteroid_type: self.asteroid_type,
            sort_field: self.sort_field,
            sort_ascending: self.sort_ascending,
        }
    }
}

/// The slice of state that survives across sessions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub filters: FilterState,
    #[serde(default)]
    pub asteroid_type: AsteroidType,
    #[serde(default)]
    pub sort_field: SortField,
    #[serde(default)]
    pub sort_ascending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ItemPriceStats;
    use std::collections::HashMap;

    #[test]
    fn failure_after_success_keeps_the_snapshot() {
        let mut state = AppState::default();
        let snapshot: PriceSnapshot = HashMap::from([(34, ItemPriceStats::default())]);

        state.apply_snapshot(snapshot, OffsetDateTime::now_utc());
        state.record_fetch_error("connection reset");

        assert!(state.snapshot.is_some());
        assert!(!state.load_failed());
    }

    #[test]
    fn failure_before_any_success_is_blocking() {
        let mut state = AppState::default();
        state.record_fetch_error("dns failure");
        assert!(state.load_failed());
    }

    #[test]
    fn sorting_toggles_direction_on_repeat() {
        let mut state = AppState::default();
        state.set_sort(SortField::Name);
        assert_eq!(state.sort_field, SortField::Name);
        assert!(!state.sort_ascending);

        state.set_sort(SortField::Name);
        assert!(state.sort_ascending);

        state.set_sort(SortField::SellPerM3);
        assert!(!state.sort_ascending);
    }

    #[test]
    fn persisted_state_round_trips_through_json() {
        let mut state = AppState::default();
        state.asteroid_type = AsteroidType::Moon;
        state.sort_field = SortField::SellMinerals;
        state.sort_ascending = true;
        state.filters.groups.toggle("Zeolites");

        let json = serde_json::to_string(&state.to_persisted()).unwrap();
        let restored: PersistedState = serde_json::from_str(&json).unwrap();

        let mut fresh = AppState::default();
        fresh.apply_persisted(restored);
        assert_eq!(fresh.asteroid_type, AsteroidType::Moon);
        assert_eq!(fresh.sort_field, SortField::SellMinerals);
        assert!(fresh.sort_ascending);
        assert!(!fresh.filters.groups.enabled("Zeolites"));
    }

    #[test]
    fn missing_persisted_fields_fall_back_to_defaults() {
        let restored: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(restored.asteroid_type, AsteroidType::Ore);
        assert_eq!(restored.sort_field, SortField::BuyPerM3);
        assert!(!restored.sort_ascending);
    }
}
