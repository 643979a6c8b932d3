use dioxus::prelude::*;

use touchline_types::stats::{CompetitionFilter, PlayerWithStats, StatField};

use crate::content::COMPETITIONS;

/// Season and competition picked on the statistics page.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSelection {
    pub season: String,
    pub competition: CompetitionFilter,
}

impl StatisticsSelection {
    /// Link back to this selection.
    pub fn href(&self) -> String {
        let params: &[(&str, &str)] = &[
            ("season", self.season.as_str()),
            ("competition", self.competition.as_str()),
        ];
        match serde_urlencoded::to_string(params) {
            Ok(query) => format!("/statistics?{query}"),
            Err(_) => "/statistics".to_string(),
        }
    }
}

#[component]
pub fn StatisticsPage(
    selection: StatisticsSelection,
    seasons: Vec<String>,
    top_scorers: Vec<PlayerWithStats>,
    appearances: Vec<PlayerWithStats>,
) -> Element {
    let competition = selection.competition.as_str().to_string();
    // Counters can only move within one concrete competition.
    let adjustable = selection.competition != CompetitionFilter::All;

    rsx! {
        div { class: "container mx-auto px-4 py-12",
            div { class: "flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-8",
                h1 { class: "text-4xl font-bold", "Player Statistics" }
                form { method: "get", action: "/statistics", class: "flex gap-4",
                    select { name: "season", class: "w-[180px] border rounded-md px-3 py-2",
                        "onchange": "this.form.submit()",
                        for season in seasons {
                            option {
                                key: "{season}",
                                value: "{season}",
                                selected: season == selection.season,
                                "{season}"
                            }
                        }
                    }
                    select { name: "competition", class: "w-[180px] border rounded-md px-3 py-2",
                        "onchange": "this.form.submit()",
                        for (value, label) in COMPETITIONS {
                            option {
                                key: "{value}",
                                value: "{value}",
                                selected: value == competition,
                                "{label}"
                            }
                        }
                    }
                    noscript {
                        button { r#type: "submit", class: "border rounded-md px-3 py-2", "Show" }
                    }
                }
            }

            div { class: "grid md:grid-cols-2 gap-8",
                div { class: "leaderboard rounded-lg border", id: "top-scorers",
                    h2 { class: "text-2xl font-semibold p-6", "Top Scorers" }
                    div { class: "space-y-4 px-6 pb-6",
                        for entry in top_scorers {
                            div { key: "g-{entry.player.id}", class: "stat-row flex items-center justify-between p-4 bg-gray-50 rounded-lg",
                                PlayerSummary { entry: entry.clone() }
                                div { class: "flex items-center gap-6",
                                    div { class: "text-center",
                                        p { class: "text-sm text-gray-600", "Goals" }
                                        p { class: "text-xl font-bold", "{entry.goals}" }
                                    }
                                    div { class: "text-center",
                                        p { class: "text-sm text-gray-600", "G/Game" }
                                        p { class: "font-semibold", {format!("{:.2}", entry.goals_per_game())} }
                                    }
                                    if adjustable {
                                        AdjustButtons {
                                            entry: entry.clone(),
                                            field: StatField::Goals,
                                            selection: selection.clone()
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "leaderboard rounded-lg border", id: "appearances",
                    h2 { class: "text-2xl font-semibold p-6", "Appearances" }
                    div { class: "space-y-4 px-6 pb-6",
                        for entry in appearances {
                            div { key: "a-{entry.player.id}", class: "stat-row flex items-center justify-between p-4 bg-gray-50 rounded-lg",
                                PlayerSummary { entry: entry.clone() }
                                div { class: "flex items-center gap-6",
                                    div { class: "text-center",
                                        p { class: "text-sm text-gray-600", "Appearances" }
                                        p { class: "text-xl font-bold", "{entry.appearances}" }
                                    }
                                    if adjustable {
                                        AdjustButtons {
                                            entry: entry.clone(),
                                            field: StatField::Appearances,
                                            selection: selection.clone()
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlayerSummary(entry: PlayerWithStats) -> Element {
    let avatar = entry.player.avatar_url();

    rsx! {
        div { class: "flex items-center gap-4",
            img { src: "{avatar}", alt: "{entry.player.name}", class: "w-12 h-12 rounded-full" }
            div {
                h3 { class: "font-semibold", "{entry.player.name}" }
                p { class: "text-sm text-gray-600", "{entry.player.position}" }
            }
        }
    }
}

#[component]
fn AdjustButtons(entry: PlayerWithStats, field: StatField, selection: StatisticsSelection) -> Element {
    let current = match field {
        StatField::Appearances => entry.appearances,
        StatField::Goals => entry.goals,
    };
    let directions = [("decrement", "−", current == 0), ("increment", "+", false)];
    let competition = selection.competition.as_str().to_string();

    rsx! {
        div { class: "flex gap-2",
            for (direction, symbol, disabled) in directions {
                form { key: "{direction}", method: "post", action: "/statistics/adjust",
                    input { r#type: "hidden", name: "player_id", value: "{entry.player.id}" }
                    input { r#type: "hidden", name: "season", value: "{selection.season}" }
                    input { r#type: "hidden", name: "competition", value: "{competition}" }
                    input { r#type: "hidden", name: "field", value: "{field}" }
                    input { r#type: "hidden", name: "direction", value: "{direction}" }
                    button {
                        r#type: "submit",
                        disabled: disabled,
                        title: "{direction} {field}",
                        class: "w-9 h-9 border rounded-md font-bold hover:bg-gray-100 disabled:opacity-40",
                        "{symbol}"
                    }
                }
            }
        }
    }
}
