use dioxus::prelude::*;

use crate::{
    components::{GalleryGrid, GalleryTab, MatchTab, MatchesOverview},
    content::{FEATURED_SECTIONS, HERO},
};

/// Club landing page: hero, match overview, featured sections, gallery preview.
#[component]
pub fn HomePage(club_name: String, match_tab: MatchTab) -> Element {
    rsx! {
        // Hero Section
        div { class: "relative w-full h-[80vh] bg-slate-900 overflow-hidden -mt-20",
            div {
                class: "absolute inset-0 bg-cover bg-center bg-no-repeat",
                style: "background-image: url({HERO.background})"
            }
            div { class: "absolute inset-0 bg-gradient-to-b from-black/60 via-black/50 to-black/60" }
            div { class: "relative h-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col justify-center pt-20",
                div { class: "mb-8",
                    div { class: "inline-flex items-center rounded-full bg-white/10 px-4 py-2 text-sm text-white",
                        span { class: "font-medium", "{HERO.announcement}" }
                        span { class: "mx-2", "•" }
                        span { "{HERO.announcement_date}" }
                    }
                }
                div { class: "max-w-3xl",
                    h1 { class: "text-4xl md:text-7xl font-bold text-white mb-6 tracking-tight",
                        "Welcome to {club_name}"
                    }
                    p { class: "text-xl md:text-2xl text-white/90 mb-8", "{HERO.subtitle}" }
                    a {
                        href: "{HERO.cta_link}",
                        class: "inline-flex items-center bg-white hover:bg-white/90 text-gray-900 font-semibold px-6 py-3 rounded-md",
                        "{HERO.cta_text} →"
                    }
                }
            }
        }

        MatchesOverview { tab: match_tab, base_path: "/".to_string() }

        // Featured Sections
        section { class: "w-full py-12 bg-gray-50",
            div { class: "container mx-auto px-4",
                h2 { class: "text-3xl font-bold text-center mb-8", "Explore our team" }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                    for section in FEATURED_SECTIONS {
                        div { key: "{section.title}", class: "overflow-hidden rounded-lg border hover:shadow-lg transition-shadow bg-white",
                            div { class: "relative h-48",
                                img { src: "{section.image}", alt: "{section.title}", class: "w-full h-full object-cover" }
                            }
                            div { class: "p-6",
                                h3 { class: "text-xl font-semibold mb-2", "{section.title}" }
                                p { class: "text-gray-600 mb-4", "{section.description}" }
                                a {
                                    href: "{section.link}",
                                    class: "block w-full text-center bg-gray-900 text-white py-2 rounded-md",
                                    "Learn More"
                                }
                            }
                        }
                    }
                }
            }
        }

        GalleryGrid { tab: GalleryTab::Photos, base_path: "/gallery".to_string() }
    }
}
