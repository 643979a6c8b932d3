use dioxus::prelude::*;

use crate::content::FACILITIES;

#[component]
pub fn FacilitiesPage() -> Element {
    rsx! {
        div { class: "container mx-auto px-4 py-12",
            h1 { class: "text-4xl font-bold mb-8", "Our Facilities" }
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for facility in FACILITIES {
                    div { key: "{facility.name}", class: "facility overflow-hidden rounded-lg border",
                        img { src: "{facility.image}", alt: "{facility.name}", class: "w-full h-48 object-cover" }
                        div { class: "p-6",
                            h2 { class: "text-2xl font-semibold mb-2", "{facility.name}" }
                            p { class: "text-gray-600", "{facility.description}" }
                        }
                    }
                }
            }
        }
    }
}
