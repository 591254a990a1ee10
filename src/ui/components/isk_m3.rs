use dioxus::prelude::*;

/// A single price cell. Zero means "no market data" and renders as a dash
/// rather than 0.00; the optional title value carries the raw per-unit
/// price as hover detail.
#[component]
pub fn IskM3(value: f64, title_value: Option<f64>) -> Element {
    if value <= 0.0 {
        return rsx! {
            span { class: "text-slate-600", "—" }
        };
    }

    let text = format!("{} isk/m³", format_isk(value));
    match title_value.filter(|unit| *unit > 0.0) {
        Some(unit) => {
            let title = format!("{} isk per unit", format_isk(unit));
            rsx! {
                span { title: "{title}", "{text}" }
            }
        }
        None => rsx! {
            span { "{text}" }
        },
    }
}

/// Formats an isk amount with thousands separators and two decimals.
pub fn format_isk(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let mut whole = rounded.trunc() as i64;
    let mut cents = ((rounded - rounded.trunc()).abs() * 100.0).round() as i64;
    if cents >= 100 {
        whole += 1;
        cents = 0;
    }

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{grouped}.{cents:02}")
}
