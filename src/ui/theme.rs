//! Per-tab accent styling: ore is orange, moon purple, ice blue.

use crate::domain::AsteroidType;

pub fn tab_active(kind: AsteroidType) -> &'static str {
    match kind {
        AsteroidType::Ore => "rounded-lg border border-orange-500/60 bg-orange-500/15 px-5 py-2 text-sm font-semibold text-orange-200",
        AsteroidType::Moon => "rounded-lg border border-purple-500/60 bg-purple-500/15 px-5 py-2 text-sm font-semibold text-purple-200",
        AsteroidType::Ice => "rounded-lg border border-sky-500/60 bg-sky-500/15 px-5 py-2 text-sm font-semibold text-sky-200",
    }
}

pub fn tab_inactive(kind: AsteroidType) -> &'static str {
    match kind {
        AsteroidType::Ore => "rounded-lg border border-slate-700 px-5 py-2 text-sm text-orange-400/70 hover:border-orange-700 hover:text-orange-200",
        AsteroidType::Moon => "rounded-lg border border-slate-700 px-5 py-2 text-sm text-purple-400/70 hover:border-purple-700 hover:text-purple-200",
        AsteroidType::Ice => "rounded-lg border border-slate-700 px-5 py-2 text-sm text-sky-400/70 hover:border-sky-700 hover:text-sky-200",
    }
}

pub fn accent_text(kind: AsteroidType) -> &'static str {
    match kind {
        AsteroidType::Ore => "text-orange-300",
        AsteroidType::Moon => "text-purple-300",
        AsteroidType::Ice => "text-sky-300",
    }
}
