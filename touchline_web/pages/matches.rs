use dioxus::prelude::*;

use crate::components::{MatchTab, MatchesOverview};

/// Shared by the fixtures and results pages, which only differ in the
/// tab selected by default.
#[component]
pub fn MatchesPage(title: String, tab: MatchTab, base_path: String) -> Element {
    rsx! {
        div { class: "container mx-auto px-4 py-12",
            h1 { class: "text-4xl font-bold mb-8", "{title}" }
            MatchesOverview { tab, base_path }
        }
    }
}
