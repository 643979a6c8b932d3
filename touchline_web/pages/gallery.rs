use dioxus::prelude::*;

use crate::components::{GalleryGrid, GalleryTab};

#[component]
pub fn GalleryPage(tab: GalleryTab) -> Element {
    rsx! {
        div { class: "container mx-auto px-4 py-12",
            h1 { class: "text-4xl font-bold mb-8", "Gallery" }
            GalleryGrid { tab, base_path: "/gallery".to_string() }
        }
    }
}
