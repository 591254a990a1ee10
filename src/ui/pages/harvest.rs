use std::sync::Arc;

use dioxus::prelude::*;

use crate::app::persist_user_state;
use crate::domain::{
    sort_records, valuate, AppState, Catalogue, ItemValuation, SortField,
};
use crate::ui::components::{BonusBadge, FilterBar, IskM3, Loading, TypeIcon};

const MARKET_TYPE_URL: &str = "https://market.fuzzwork.co.uk/type";
const REFERENCE_TYPE_URL: &str = "https://everef.net/type";

/// The valuation table for the active tab. Rows are recomputed from the
/// catalogue and the latest snapshot on every render; only filter and sort
/// choices are state.
#[component]
pub fn HarvestPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let catalogue = use_context::<Arc<Catalogue>>();

    if state.with(|st| st.load_failed()) {
        let error = state.with(|st| st.last_error.clone().unwrap_or_default());
        return rsx! {
            div { class: "mx-auto max-w-xl rounded-xl border border-rose-500/40 bg-rose-500/10 px-6 py-8 text-center",
                p { class: "text-lg font-semibold text-rose-200", "Could not load market prices" }
                p { class: "mt-2 text-sm text-rose-300/80", "{error}" }
                p { class: "mt-4 text-xs text-slate-400",
                    "The next automatic refresh will retry, or use the Refresh button."
                }
            }
        };
    }

    let records = state.with(|st| valuate(&catalogue, st.snapshot.as_ref()));
    let Some(records) = records else {
        return rsx! {
            Loading {}
        };
    };

    let (kind, sort_field, ascending) =
        state.with(|st| (st.asteroid_type, st.sort_field, st.sort_ascending));
    let mut rows: Vec<ItemValuation> = state.with(|st| {
        records
            .into_iter()
            .filter(|record| record.asteroid_type == kind && st.filters.passes(record))
            .collect()
    });
    sort_records(&mut rows, sort_field, ascending);

    let groups = catalogue.distinct_groups(kind);
    let bonuses = catalogue.distinct_bonuses(kind);
    let availability = catalogue.distinct_availability(kind);

    rsx! {
        div { class: "rounded-xl border border-slate-800 bg-slate-900/60",
            FilterBar { groups, bonuses, availability }
            table { class: "w-full border-collapse text-sm",
                thead {
                    tr { class: "border-y border-slate-800 text-left text-xs uppercase tracking-wide text-slate-400",
                        SortHeader { label: "Name", field: SortField::Name, state }
                        SortHeader { label: "Group", field: SortField::Group, state }
                        SortHeader { label: "Buy isk/m³", field: SortField::BuyPerM3, state }
                        SortHeader { label: "Buy minerals", field: SortField::BuyMinerals, state }
                        SortHeader { label: "Buy perfect", field: SortField::BuyPerfectMinerals, state }
                        SortHeader { label: "Sell isk/m³", field: SortField::SellPerM3, state }
                        SortHeader { label: "Sell minerals", field: SortField::SellMinerals, state }
                        SortHeader { label: "Sell perfect", field: SortField::SellPerfectMinerals, state }
                    }
                }
                tbody {
                    for row in rows {
                        ValuationRow { row }
                    }
                }
            }
        }
    }
}

#[component]
fn SortHeader(label: &'static str, field: SortField, state: Signal<AppState>) -> Element {
    let (active, ascending) =
        state.with(|st| (st.sort_field == field, st.sort_ascending));
    let marker = match (active, ascending) {
        (true, true) => " ▲",
        (true, false) => " ▼",
        (false, _) => "",
    };
    let class = if active {
        "cursor-pointer px-3 py-2 text-slate-100 select-none"
    } else {
        "cursor-pointer px-3 py-2 hover:text-slate-200 select-none"
    };

    rsx! {
        th {
            class: class,
            onclick: move |_| {
                let mut state = state;
                state.with_mut(|st| st.set_sort(field));
                persist_user_state(&state);
            },
            "{label}{marker}"
        }
    }
}

#[component]
fn ValuationRow(row: ItemValuation) -> Element {
    let market_url = format!("{MARKET_TYPE_URL}/{}/", row.id);
    let reference_url = format!("{REFERENCE_TYPE_URL}/{}", row.id);
    let icon_style = format!("background-color: {};", row.color);
    let tags = row.available_in.join(", ");

    rsx! {
        tr { class: "border-b border-slate-800/60 hover:bg-slate-800/40",
            td { class: "px-3 py-1.5",
                div { class: "flex items-center gap-2",
                    a {
                        class: "text-slate-100 hover:underline",
                        href: "{market_url}",
                        target: "_blank",
                        title: "{tags}",
                        "{row.name}"
                    }
                    BonusBadge { bonus: row.bonus.clone() }
                }
            }
            td { class: "px-3 py-1.5",
                a {
                    href: "{reference_url}",
                    target: "_blank",
                    title: "{row.group}",
                    TypeIcon { id: row.id, name: row.group.clone(), style: icon_style }
                }
            }
            td { class: "px-3 py-1.5 text-slate-300",
                IskM3 { value: row.buy.per_m3, title_value: Some(row.buy.unit) }
            }
            td { class: "px-3 py-1.5 text-slate-300",
                IskM3 { value: row.buy.minerals }
            }
            td { class: "px-3 py-1.5 text-slate-300",
                IskM3 { value: row.buy.perfect_minerals }
            }
            td { class: "px-3 py-1.5 text-slate-300",
                IskM3 { value: row.sell.per_m3, title_value: Some(row.sell.unit) }
            }
            td { class: "px-3 py-1.5 text-slate-300",
                IskM3 { value: row.sell.minerals }
            }
            td { class: "px-3 py-1.5 text-slate-300",
                IskM3 { value: row.sell.perfect_minerals }
            }
        }
    }
}
