use dioxus::prelude::*;
use uuid::Uuid;

use touchline_types::player::Player;

use crate::components::{PlayerForm, PlayerFormValues};

#[component]
pub fn EditPlayerPage(player_id: Uuid, values: PlayerFormValues, error: Option<String>) -> Element {
    rsx! {
        div { class: "container mx-auto px-4 py-12 max-w-lg",
            h1 { class: "text-3xl font-bold mb-6", "Edit Player" }
            PlayerForm {
                action: format!("/team/players/{player_id}/edit"),
                submit_label: "Save Changes".to_string(),
                values,
                error
            }
            form { method: "post", action: "/team/players/{player_id}/delete", class: "mt-6",
                button {
                    r#type: "submit",
                    class: "w-full border border-red-600 text-red-600 font-semibold py-2 rounded-md hover:bg-red-50",
                    "Delete Player"
                }
            }
            a { href: "/team", class: "block text-center text-sm text-gray-600 mt-4 hover:underline", "Back to team" }
        }
    }
}

/// Asked before a player is removed for good.
#[component]
pub fn DeletePlayerPage(player: Player) -> Element {
    rsx! {
        div { class: "container mx-auto px-4 py-12 max-w-lg",
            h1 { class: "text-3xl font-bold mb-4", "Delete Player" }
            p { class: "text-gray-700 mb-6",
                "Are you sure you want to delete {player.name}? Their statistics will be removed as well."
            }
            div { class: "flex gap-4",
                form { method: "post", action: "/team/players/{player.id}/delete", class: "flex-1",
                    input { r#type: "hidden", name: "confirm", value: "yes" }
                    button {
                        r#type: "submit",
                        class: "w-full bg-red-600 text-white font-semibold py-2 rounded-md hover:bg-red-700",
                        "Delete"
                    }
                }
                a {
                    href: "/team/players/{player.id}/edit",
                    class: "flex-1 text-center border py-2 rounded-md",
                    "Cancel"
                }
            }
        }
    }
}
