use std::sync::Arc;

use dioxus::prelude::*;
use time::macros::format_description;

use crate::app::{persist_user_state, poll_prices, PollKind};
use crate::domain::{AppState, AsteroidType, Catalogue};
use crate::infra::RefreshSchedule;
use crate::ui::components::ToastMessage;
use crate::ui::theme;
use crate::util::version;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let catalogue = use_context::<Arc<Catalogue>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let schedule = use_context::<Signal<RefreshSchedule>>();

    let active = state.with(|st| st.asteroid_type);
    let stamp = state.with(|st| st.fetched_at.map(last_updated_label));

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header { class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    div {
                        h1 {
                            class: "text-xl font-semibold tracking-tight {theme::accent_text(active)}",
                            "{version::APP_NAME}"
                        }
                        p { class: "text-xs text-slate-500 italic", "isk per m³, at a glance" }
                    }
                    div { class: "flex justify-center gap-1",
                        for kind in AsteroidType::ALL {
                            TabButton { kind, active: kind == active, state }
                        }
                    }
                    div { class: "flex items-center justify-end gap-3 text-sm",
                        match stamp {
                            Some(stamp) => rsx! {
                                span { class: "text-xs text-slate-500", "updated {stamp} UTC" }
                            },
                            None => rsx! {
                                Fragment {}
                            },
                        }
                        button {
                            class: "rounded-lg border border-slate-700 px-4 py-2 text-slate-300 transition hover:border-slate-500 hover:text-slate-100",
                            onclick: move |_| {
                                let catalogue = catalogue.clone();
                                spawn(async move {
                                    poll_prices(catalogue, state, toasts, schedule, PollKind::Manual)
                                        .await;
                                });
                            },
                            "Refresh"
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-8",
                {children}
            }
            footer { class: "mx-auto flex max-w-6xl items-center justify-between gap-4 px-6 pb-6 text-xs text-slate-600",
                p {
                    "Prices are percentile aggregates from "
                    a {
                        class: "hover:underline",
                        href: "https://market.fuzzwork.co.uk/",
                        target: "_blank",
                        "market.fuzzwork.co.uk"
                    }
                    ", The Forge region. Minerals columns assume a 70% refine, perfect minerals 89.34%."
                }
                span { "{version::APP_NAME} {version::version_label()}" }
            }
        }
    }
}

#[component]
fn TabButton(kind: AsteroidType, active: bool, state: Signal<AppState>) -> Element {
    let class = if active {
        theme::tab_active(kind)
    } else {
        theme::tab_inactive(kind)
    };

    rsx! {
        button {
            class: class,
            onclick: move |_| {
                let mut state = state;
                state.with_mut(|st| st.asteroid_type = kind);
                persist_user_state(&state);
            },
            "{kind.label()}"
        }
    }
}

fn last_updated_label(fetched_at: time::OffsetDateTime) -> String {
    let format = format_description!("[hour]:[minute]");
    fetched_at
        .format(&format)
        .unwrap_or_else(|_| "--:--".to_string())
}
