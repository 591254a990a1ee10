use dioxus::prelude::*;

/// Small tag next to the item name for bonus-yield variants. The base tier
/// renders nothing.
#[component]
pub fn BonusBadge(bonus: String) -> Element {
    if bonus == "0%" {
        return rsx! {
            Fragment {}
        };
    }

    rsx! {
        span {
            class: "ml-1 rounded border border-emerald-500/40 bg-emerald-500/10 px-1 text-xs text-emerald-300",
            title: "Yield bonus {bonus}",
            "+{bonus}"
        }
    }
}
