use dioxus::prelude::*;

use crate::content::STANDINGS;

#[component]
pub fn StandingsPage() -> Element {
    rsx! {
        div { class: "container mx-auto px-4 py-12",
            h1 { class: "text-4xl font-bold mb-8", "League Table" }
            table { class: "w-full text-sm",
                thead {
                    tr { class: "border-b text-gray-500",
                        th { class: "w-16 text-left py-2", "Pos" }
                        th { class: "text-left", "Team" }
                        th { class: "text-center", "P" }
                        th { class: "text-center", "W" }
                        th { class: "text-center", "D" }
                        th { class: "text-center", "L" }
                        th { class: "text-center", "Pts" }
                    }
                }
                tbody {
                    for row in STANDINGS {
                        tr { key: "{row.position}", class: "border-b",
                            td { class: "font-medium py-2", "{row.position}" }
                            td { "{row.team}" }
                            td { class: "text-center", "{row.played}" }
                            td { class: "text-center", "{row.won}" }
                            td { class: "text-center", "{row.drawn}" }
                            td { class: "text-center", "{row.lost}" }
                            td { class: "text-center font-bold", "{row.points}" }
                        }
                    }
                }
            }
        }
    }
}
