use dioxus::prelude::*;

use crate::app::persist_user_state;
use crate::domain::{compressed_key, AppState, GroupEntry};
use crate::ui::components::TypeIcon;

/// Chip rows for the four filter dimensions. Every chip is a plain toggle;
/// the mappings live in [`AppState::filters`] and persist on each click.
#[component]
pub fn FilterBar(
    groups: Vec<GroupEntry>,
    bonuses: Vec<String>,
    availability: Vec<String>,
) -> Element {
    let state = use_context::<Signal<AppState>>();

    rsx! {
        div { class: "space-y-2 px-4 py-3",
            div { class: "flex flex-wrap gap-1",
                for group in groups {
                    GroupChip { group, state }
                }
            }
            div { class: "flex flex-wrap gap-1",
                for bonus in bonuses {
                    BonusChip { bonus, state }
                }
            }
            div { class: "flex flex-wrap gap-1",
                CompressedChip { compressed: false, state }
                CompressedChip { compressed: true, state }
            }
            div { class: "flex flex-wrap gap-1",
                for tag in availability {
                    AvailabilityChip { tag, state }
                }
            }
        }
    }
}

#[component]
fn GroupChip(group: GroupEntry, state: Signal<AppState>) -> Element {
    let enabled = state.with(|st| st.filters.groups.enabled(&group.name));
    let name = group.name.clone();

    // The group color comes from the catalogue, so it has to be an inline
    // style rather than a class.
    let style = if enabled {
        format!(
            "background-color: {color}; border-color: {color};",
            color = group.color
        )
    } else {
        format!("border-color: {};", group.color)
    };
    let class = if enabled {
        "inline-flex items-center gap-1 rounded border-2 px-2 text-xs font-semibold leading-tight text-slate-900"
    } else {
        "inline-flex items-center gap-1 rounded border-2 px-2 text-xs font-semibold leading-tight text-slate-100"
    };

    rsx! {
        button {
            class: class,
            style: "{style}",
            onclick: move |_| {
                let mut state = state;
                state.with_mut(|st| st.filters.groups.toggle(&name));
                persist_user_state(&state);
            },
            // The icon always shows the uncompressed base item of the family.
            TypeIcon { id: group.root_id, name: group.name.clone() }
            "{group.name}"
        }
    }
}

#[component]
fn BonusChip(bonus: String, state: Signal<AppState>) -> Element {
    let enabled = state.with(|st| st.filters.bonuses.enabled(&bonus));
    let key = bonus.clone();

    rsx! {
        button {
            class: chip_class(enabled, "border-emerald-400 bg-emerald-300 text-emerald-900"),
            onclick: move |_| {
                let mut state = state;
                state.with_mut(|st| st.filters.bonuses.toggle(&key));
                persist_user_state(&state);
            },
            "{bonus}"
        }
    }
}

#[component]
fn CompressedChip(compressed: bool, state: Signal<AppState>) -> Element {
    let key = compressed_key(compressed);
    let enabled = state.with(|st| st.filters.compressed.enabled(key));
    let label = if compressed { "Compressed" } else { "Uncompressed" };

    rsx! {
        button {
            class: chip_class(enabled, "border-pink-400 bg-pink-300 text-pink-900"),
            onclick: move |_| {
                let mut state = state;
                state.with_mut(|st| st.filters.compressed.toggle(key));
                persist_user_state(&state);
            },
            "{label}"
        }
    }
}

#[component]
fn AvailabilityChip(tag: String, state: Signal<AppState>) -> Element {
    let enabled = state.with(|st| st.filters.availability.enabled(&tag));
    let key = tag.clone();

    rsx! {
        button {
            class: chip_class(enabled, "border-purple-400 bg-purple-300 text-purple-900"),
            onclick: move |_| {
                let mut state = state;
                state.with_mut(|st| st.filters.availability.toggle(&key));
                persist_user_state(&state);
            },
            "{tag}"
        }
    }
}

fn chip_class(enabled: bool, active_theme: &'static str) -> String {
    if enabled {
        format!("rounded border-2 px-2 text-xs font-semibold leading-tight {active_theme}")
    } else {
        "rounded border-2 border-slate-700 px-2 text-xs font-semibold leading-tight text-slate-100"
            .to_string()
    }
}
