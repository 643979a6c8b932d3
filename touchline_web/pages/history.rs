use dioxus::prelude::*;

use crate::content::TIMELINE;

#[component]
pub fn HistoryPage() -> Element {
    rsx! {
        div { class: "container mx-auto px-4 py-12",
            h1 { class: "text-4xl font-bold mb-8", "Club History" }
            div { class: "space-y-8",
                for event in TIMELINE {
                    div { key: "{event.year}", class: "timeline-event relative rounded-lg border",
                        div { class: "absolute left-8 top-0 bottom-0 w-0.5 bg-gray-200" }
                        div { class: "p-6 ml-16",
                            div { class: "text-2xl font-bold mb-2", "{event.year}" }
                            h3 { class: "text-xl font-semibold mb-2", "{event.title}" }
                            p { class: "text-gray-600", "{event.description}" }
                        }
                    }
                }
            }
        }
    }
}
