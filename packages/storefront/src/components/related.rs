use dioxus::prelude::*;

use crate::catalog::Price;

/// Placeholder recommendations shown under the product tabs.
#[component]
pub fn RelatedProducts() -> Element {
    let price = Price(199.99);

    rsx! {
        section { class: "related",
            h2 { class: "section-title section-title-left", "You might also like" }
            div { class: "product-grid product-grid-4",
                for (item, photo) in (1..=4u64).map(|item| (item, 1_590_000_000_000 + item * 1000)) {
                    div { key: "{item}", class: "card related-card",
                        div { class: "card-image",
                            img {
                                src: "https://images.unsplash.com/photo-{photo}?w=400&q=80",
                                alt: "Related product {item}",
                            }
                        }
                        div { class: "card-content",
                            h3 { class: "card-title", "Related Product {item}" }
                            p { class: "muted", "{price}" }
                            button { class: "button button-outline button-small button-block", "View Details" }
                        }
                    }
                }
            }
        }
    }
}
