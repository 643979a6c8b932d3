use dioxus::prelude::*;
use serde::Deserialize;

use crate::content::{Match, RECENT_RESULTS, UPCOMING_MATCHES};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTab {
    #[default]
    Upcoming,
    Results,
}

/// Tabbed list of upcoming matches and recent results. Tabs are plain
/// links carrying `?tab=` back to `base_path`.
#[component]
pub fn MatchesOverview(tab: MatchTab, base_path: String) -> Element {
    let matches: Vec<Match> = match tab {
        MatchTab::Upcoming => UPCOMING_MATCHES.to_vec(),
        MatchTab::Results => RECENT_RESULTS.to_vec(),
    };
    let tab_class = |this: MatchTab| -> &'static str {
        if this == tab {
            "text-center py-2 rounded-md bg-white shadow font-semibold"
        } else {
            "text-center py-2 rounded-md text-gray-600 hover:text-gray-900"
        }
    };

    rsx! {
        div { class: "w-full max-w-[1200px] mx-auto p-6 bg-gray-50",
            div { class: "grid w-full grid-cols-2 mb-8 bg-gray-100 p-1 rounded-lg",
                a { href: "{base_path}?tab=upcoming", class: tab_class(MatchTab::Upcoming), "Upcoming Matches" }
                a { href: "{base_path}?tab=results", class: tab_class(MatchTab::Results), "Recent Results" }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6 justify-items-center",
                for (i, m) in matches.into_iter().enumerate() {
                    MatchCard { key: "{i}", m }
                }
            }
        }
    }
}

#[component]
pub fn MatchCard(m: Match) -> Element {
    let (badge, badge_class) = if m.upcoming {
        ("Upcoming", "bg-gray-900 text-white")
    } else {
        ("Completed", "bg-gray-200 text-gray-800")
    };

    rsx! {
        div { class: "match-card w-[380px] bg-white rounded-lg border p-4 hover:shadow-lg transition-shadow",
            div { class: "flex justify-between items-center mb-4",
                span { class: "text-xs font-semibold px-2 py-1 rounded {badge_class}", "{badge}" }
                span { class: "text-sm text-gray-500", "{m.date}" }
            }
            div { class: "flex justify-between items-center mb-4",
                div { class: "flex items-center gap-3",
                    img { src: "{m.home.logo}", alt: "{m.home.name}", class: "w-12 h-12 rounded-full" }
                    div {
                        p { class: "font-semibold", "{m.home.name}" }
                        if let Some(score) = m.home.score.filter(|_| !m.upcoming) {
                            span { class: "text-2xl font-bold", "{score}" }
                        }
                    }
                }
                span { class: "text-xl font-bold", "vs" }
                div { class: "flex items-center gap-3",
                    div { class: "text-right",
                        p { class: "font-semibold", "{m.away.name}" }
                        if let Some(score) = m.away.score.filter(|_| !m.upcoming) {
                            span { class: "text-2xl font-bold", "{score}" }
                        }
                    }
                    img { src: "{m.away.logo}", alt: "{m.away.name}", class: "w-12 h-12 rounded-full" }
                }
            }
            div { class: "flex justify-between items-center text-sm text-gray-500",
                span { "{m.time}" }
                span { "{m.venue}" }
            }
        }
    }
}
