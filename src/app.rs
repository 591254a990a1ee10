use std::sync::Arc;
use std::time::{Duration, Instant};

use dioxus::{prelude::*, signals::Signal};
use time::OffsetDateTime;

use crate::{
    domain::{compressed_key, AppState, AsteroidType, Catalogue},
    infra::{market::MarketClient, schedule::RefreshSchedule},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::HarvestPage,
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

/// Why a poll was requested. Scheduled ticks honor the refresh interval,
/// manual ones only the shorter throttle window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollKind {
    Scheduled,
    Manual,
}

#[component]
pub fn App() -> Element {
    let catalogue = use_hook(|| {
        let parsed = Catalogue::from_json(assets::ore_catalogue_json())
            .unwrap_or_else(|err| panic!("Embedded ore catalogue is invalid: {err}"));
        Arc::new(parsed)
    });
    use_context_provider(|| catalogue.clone());

    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state;
        let catalogue = catalogue.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
            state.with_mut(|st| seed_filters(st, &catalogue));
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let schedule = use_signal(RefreshSchedule::default);
    use_context_provider(|| schedule);

    // Background poll loop: immediate first fetch, then one per interval.
    // The sleep is re-derived from the schedule each pass, so a manual
    // refresh mid-interval moves the next fetch instead of doubling the gap.
    let _poller = use_future({
        let catalogue = catalogue.clone();
        move || {
            let catalogue = catalogue.clone();
            async move {
                loop {
                    poll_prices(catalogue.clone(), state, toasts, schedule, PollKind::Scheduled)
                        .await;
                    let wait = schedule.with(|gate| gate.next_tick_in(Instant::now()));
                    tokio::time::sleep(wait.max(Duration::from_secs(1))).await;
                }
            }
        }
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Shell {
            HarvestPage {}
        }
        Toast {}
    }
}

/// Registers every dimension value the catalogue can produce, so the chip
/// rows show all keys even before the user has touched any of them.
fn seed_filters(state: &mut AppState, catalogue: &Catalogue) {
    for kind in AsteroidType::ALL {
        state
            .filters
            .groups
            .seed(catalogue.distinct_groups(kind).into_iter().map(|g| g.name));
        state.filters.bonuses.seed(catalogue.distinct_bonuses(kind));
        state
            .filters
            .availability
            .seed(catalogue.distinct_availability(kind));
    }
    state
        .filters
        .compressed
        .seed([compressed_key(false), compressed_key(true)]);
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        println!("[persist] failed to save preferences: {err}");
    }
}

/// Fetches a fresh snapshot if the schedule allows it. Gating, the single
/// in-flight slot, and the attempt timestamp all live in `RefreshSchedule`;
/// this function only drives the request and folds the outcome into state.
pub async fn poll_prices(
    catalogue: Arc<Catalogue>,
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    mut schedule: Signal<RefreshSchedule>,
    kind: PollKind,
) {
    let now = Instant::now();
    let due = schedule.with(|gate| match kind {
        PollKind::Scheduled => gate.tick_due(now),
        PollKind::Manual => gate.manual_due(now),
    });
    if !due || !schedule.with_mut(|gate| gate.begin(now)) {
        return;
    }

    let client = match MarketClient::new() {
        Ok(client) => client,
        Err(err) => {
            println!("[market] client setup failed: {err}");
            state.with_mut(|st| st.record_fetch_error(err.to_string()));
            schedule.with_mut(RefreshSchedule::finish);
            return;
        }
    };

    let ids = catalogue.price_id_closure();
    match client.fetch_aggregates(&ids).await {
        Ok(snapshot) => {
            println!("[market] snapshot updated, {} entries", snapshot.len());
            state.with_mut(|st| st.apply_snapshot(snapshot, OffsetDateTime::now_utc()));
        }
        Err(err) => {
            println!("[market] poll failed: {err}");
            let had_data = state.with(|st| st.snapshot.is_some());
            state.with_mut(|st| st.record_fetch_error(err.to_string()));
            if had_data {
                push_toast(
                    toasts,
                    ToastKind::Warning,
                    "Price refresh failed; showing the last known prices.",
                );
            }
        }
    }
    schedule.with_mut(RefreshSchedule::finish);
}
