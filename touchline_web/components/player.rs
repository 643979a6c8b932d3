use dioxus::prelude::*;

use touchline_types::player::{Gender, Player, Position, Role};

/// Raw form values, kept as submitted so they can be shown again on error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFormValues {
    pub name: String,
    pub position: String,
    pub role: String,
    pub gender: String,
    pub jersey_number: String,
    pub image_url: String,
}

impl From<&Player> for PlayerFormValues {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            position: player.position.to_string(),
            role: player.role.to_string(),
            gender: player.gender.to_string(),
            jersey_number: player
                .jersey_number
                .map(|n| n.to_string())
                .unwrap_or_default(),
            image_url: player.image_url.clone().unwrap_or_default(),
        }
    }
}

#[component]
pub fn PlayerCard(player: Player) -> Element {
    let avatar = player.avatar_url();

    rsx! {
        div { class: "player-card bg-white rounded-lg border overflow-hidden hover:shadow-lg transition-shadow",
            img { src: "{avatar}", alt: "{player.name}", class: "w-full h-48 object-contain bg-gray-50" }
            div { class: "p-4",
                h3 { class: "text-xl font-semibold", "{player.name}" }
                p { class: "text-gray-600", "{player.position}" }
                div { class: "flex justify-between items-center mt-2",
                    if let Some(number) = player.jersey_number {
                        span { class: "text-2xl font-bold text-gray-400", "#{number}" }
                    }
                    a {
                        href: "/team/players/{player.id}/edit",
                        class: "text-sm font-semibold text-blue-700 hover:underline",
                        "Edit"
                    }
                }
            }
        }
    }
}

/// Create/edit form. Every field posts as text and is parsed server side.
#[component]
pub fn PlayerForm(
    action: String,
    submit_label: String,
    values: PlayerFormValues,
    error: Option<String>,
) -> Element {
    rsx! {
        form { method: "post", action: "{action}", class: "player-form space-y-4",
            if let Some(error) = error {
                p { class: "form-error text-sm text-red-600", "{error}" }
            }
            div {
                label { r#for: "name", class: "block text-sm font-medium mb-1", "Name" }
                input {
                    id: "name",
                    name: "name",
                    r#type: "text",
                    required: true,
                    placeholder: "Enter player name",
                    value: "{values.name}",
                    class: "w-full border rounded-md px-3 py-2"
                }
            }
            SelectField {
                name: "position",
                label: "Position",
                selected: values.position.clone(),
                options: Position::ALL.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
                placeholder: Some("Select position".to_string())
            }
            SelectField {
                name: "role",
                label: "Role",
                selected: values.role.clone(),
                options: Role::ALL.iter().map(|r| r.to_string()).collect::<Vec<_>>(),
                placeholder: None
            }
            SelectField {
                name: "gender",
                label: "Gender",
                selected: values.gender.clone(),
                options: Gender::ALL.iter().map(|g| g.to_string()).collect::<Vec<_>>(),
                placeholder: Some("Select gender".to_string())
            }
            div {
                label { r#for: "jersey_number", class: "block text-sm font-medium mb-1", "Jersey number" }
                input {
                    id: "jersey_number",
                    name: "jersey_number",
                    r#type: "number",
                    min: "0",
                    value: "{values.jersey_number}",
                    class: "w-full border rounded-md px-3 py-2"
                }
            }
            div {
                label { r#for: "image_url", class: "block text-sm font-medium mb-1", "Image URL" }
                input {
                    id: "image_url",
                    name: "image_url",
                    r#type: "url",
                    placeholder: "Leave empty for a generated avatar",
                    value: "{values.image_url}",
                    class: "w-full border rounded-md px-3 py-2"
                }
            }
            button {
                r#type: "submit",
                class: "w-full bg-gray-900 text-white font-semibold py-2 rounded-md hover:bg-gray-700",
                "{submit_label}"
            }
        }
    }
}

#[component]
fn SelectField(
    name: String,
    label: String,
    selected: String,
    options: Vec<String>,
    placeholder: Option<String>,
) -> Element {
    rsx! {
        div {
            label { r#for: "{name}", class: "block text-sm font-medium mb-1", "{label}" }
            select { id: "{name}", name: "{name}", class: "w-full border rounded-md px-3 py-2",
                if let Some(placeholder) = placeholder {
                    option { value: "", selected: selected.is_empty(), "{placeholder}" }
                }
                for opt in options {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: opt.eq_ignore_ascii_case(&selected),
                        "{opt}"
                    }
                }
            }
        }
    }
}
