use dioxus::prelude::*;

use crate::catalog::{Price, ProductSummary};
use crate::routes::Route;

/// The image shown when a card is rendered without one.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&q=80";

/// Properties of a [`ProductCard`].
///
/// Every field is optional. Fields that are left out fall back to a placeholder product so a card always
/// has something to show.
#[derive(Props, Clone, PartialEq, Debug)]
pub struct ProductCardProps {
    #[props(default = 1)]
    pub id: u32,

    #[props(into, default = "Product Title".to_string())]
    pub title: String,

    #[props(into, default = Price(99.99))]
    pub price: Price,

    #[props(into, default = PLACEHOLDER_IMAGE.to_string())]
    pub image: String,

    #[props(into, default = "A great product with amazing features.".to_string())]
    pub description: String,
}

impl From<&ProductSummary> for ProductCardProps {
    fn from(product: &ProductSummary) -> Self {
        Self {
            id: product.id,
            title: product.title.to_string(),
            price: product.price,
            image: product.image.to_string(),
            description: product.description.to_string(),
        }
    }
}

/// A catalog card linking to the product's detail page.
pub fn ProductCard(props: ProductCardProps) -> Element {
    let id = props.id.to_string();

    rsx! {
        div { class: "card product-card",
            CardBody {
                title: props.title,
                price: props.price,
                image: props.image,
                description: props.description,
            }
            div { class: "card-footer",
                Link {
                    class: "button button-primary button-block",
                    to: Route::ProductDetail { id },
                    "View Details"
                }
            }
        }
    }
}

/// The image, text and price of a catalog card.
#[component]
pub fn CardBody(
    #[props(into)] title: String,
    #[props(into)] price: Price,
    #[props(into)] image: String,
    #[props(into)] description: String,
) -> Element {
    rsx! {
        div { class: "card-image",
            img { src: "{image}", alt: "{title}" }
        }
        div { class: "card-content",
            h3 { class: "card-title", "{title}" }
            p { class: "card-description", "{description}" }
            p { class: "card-price", "{price}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FEATURED_PRODUCTS;
    use pretty_assertions::assert_eq;

    #[test]
    fn omitted_fields_use_placeholders() {
        let props = ProductCardProps::builder().build();
        assert_eq!(props.id, 1);
        assert_eq!(props.title, "Product Title");
        assert_eq!(props.price, Price(99.99));
        assert_eq!(props.image, PLACEHOLDER_IMAGE);
        assert_eq!(props.description, "A great product with amazing features.");
    }

    #[test]
    fn given_fields_override_placeholders() {
        let props = ProductCardProps::builder()
            .id(9)
            .title("Desk Lamp")
            .build();
        assert_eq!(props.id, 9);
        assert_eq!(props.title, "Desk Lamp");
        assert_eq!(props.price, Price(99.99));
    }

    #[test]
    fn summaries_convert_field_by_field() {
        let props = ProductCardProps::from(&FEATURED_PRODUCTS[3]);
        assert_eq!(props.id, 4);
        assert_eq!(props.title, "Digital Camera");
        assert_eq!(props.price.to_string(), "$599.99");
    }
}
