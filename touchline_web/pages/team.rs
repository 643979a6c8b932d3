use dioxus::prelude::*;

use touchline_app::views::RoleGroup;

use crate::components::{PlayerCard, PlayerForm, PlayerFormValues};

#[component]
pub fn TeamPage(
    groups: Vec<RoleGroup>,
    query: String,
    form_values: PlayerFormValues,
    form_error: Option<String>,
) -> Element {
    let no_match = groups.is_empty();
    let form_open = form_error.is_some();

    rsx! {
        div { class: "container mx-auto px-4 py-12",
            div { class: "flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-8",
                h1 { class: "text-4xl font-bold", "Our Team" }
                form { method: "get", action: "/team", class: "flex gap-2",
                    input {
                        r#type: "search",
                        name: "q",
                        value: "{query}",
                        placeholder: "Search players...",
                        class: "border rounded-md px-3 py-2"
                    }
                    button { r#type: "submit", class: "bg-gray-900 text-white px-4 py-2 rounded-md", "Search" }
                }
            }

            if no_match {
                p { class: "text-gray-600 mb-8", "No players found." }
            }

            for group in groups {
                section { key: "{group.role}", class: "role-group mb-12",
                    h2 { class: "text-2xl font-semibold mb-4", "{group.role}" }
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                        for player in group.players {
                            PlayerCard { key: "{player.id}", player }
                        }
                    }
                }
            }

            details { class: "max-w-lg border rounded-lg p-6", open: form_open,
                summary { class: "cursor-pointer text-xl font-semibold", "Add Player" }
                div { class: "mt-4",
                    PlayerForm {
                        action: "/team/players".to_string(),
                        submit_label: "Add Player".to_string(),
                        values: form_values,
                        error: form_error
                    }
                }
            }
        }
    }
}
