use dioxus::prelude::*;

use crate::domain::TypeId;

const IMAGE_SERVER: &str = "https://images.evetech.net/types";

/// In-game icon for a type id, served by the image CDN.
#[component]
pub fn TypeIcon(id: TypeId, name: String, #[props(default)] style: String) -> Element {
    rsx! {
        img {
            class: "inline-block h-6 w-6 rounded",
            style: "{style}",
            src: "{IMAGE_SERVER}/{id}/icon?size=32",
            alt: "{name}",
            title: "{name}",
        }
    }
}
