use dioxus::prelude::*;
use serde::Deserialize;

use crate::content::{GalleryKind, gallery_items};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryTab {
    #[default]
    Photos,
    Videos,
}

impl GalleryTab {
    fn kind(self) -> GalleryKind {
        match self {
            GalleryTab::Photos => GalleryKind::Photo,
            GalleryTab::Videos => GalleryKind::Video,
        }
    }
}

#[component]
pub fn GalleryGrid(tab: GalleryTab, base_path: String) -> Element {
    let items = gallery_items(tab.kind());
    let is_video = tab == GalleryTab::Videos;
    let tab_class = |this: GalleryTab| -> &'static str {
        if this == tab {
            "px-3 py-1 rounded-md bg-white shadow font-semibold"
        } else {
            "px-3 py-1 rounded-md text-gray-600 hover:text-gray-900"
        }
    };

    rsx! {
        div { class: "w-full max-w-[1200px] mx-auto p-6 bg-white",
            div { class: "flex items-center justify-between mb-6",
                h2 { class: "text-2xl font-bold", "Latest Gallery" }
                div { class: "flex bg-gray-100 p-1 rounded-lg",
                    a { href: "{base_path}?tab=photos", class: tab_class(GalleryTab::Photos), "Photos" }
                    a { href: "{base_path}?tab=videos", class: tab_class(GalleryTab::Videos), "Videos" }
                }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for item in items {
                    div { key: "{item.id}", class: "gallery-item relative h-[300px] overflow-hidden rounded-lg",
                        img { src: "{item.url}", alt: "{item.title}", class: "w-full h-full object-cover" }
                        if is_video {
                            div { class: "absolute inset-0 flex items-center justify-center bg-black/20",
                                div { class: "w-16 h-16 rounded-full bg-white/90 flex items-center justify-center", "▶" }
                            }
                        }
                        div { class: "absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/80 to-transparent p-4",
                            h3 { class: "text-white font-semibold", "{item.title}" }
                            p { class: "text-white/80 text-sm", "{item.date}" }
                        }
                    }
                }
            }
        }
    }
}
