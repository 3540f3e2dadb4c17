use dioxus::prelude::*;

use crate::catalog::FEATURED_PRODUCTS;
use crate::components::card::ProductCard;
use crate::components::chrome::{CatalogFooter, CatalogHeader, Hero};

/// The catalog page: one card per featured product, in catalog order.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page page-catalog",
            CatalogHeader {}
            Hero {}
            section { class: "container section",
                h2 { class: "section-title", "Featured Products" }
                div { class: "product-grid",
                    for product in FEATURED_PRODUCTS.iter() {
                        ProductCard {
                            key: "{product.id}",
                            id: product.id,
                            title: product.title,
                            price: product.price,
                            image: product.image,
                            description: product.description,
                        }
                    }
                }
            }
            CatalogFooter {}
        }
    }
}
