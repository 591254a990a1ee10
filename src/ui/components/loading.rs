use dioxus::prelude::*;

/// Shown until the first snapshot arrives.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "flex flex-col items-center gap-3 py-24 text-slate-400",
            div { class: "spinner" }
            p { class: "text-sm", "Fetching market prices…" }
        }
    }
}
