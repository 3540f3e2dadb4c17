use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use storefront::catalog::FEATURED_PRODUCTS;
use storefront::components::card::CardBody;

fn catalog_bodies() -> Element {
    rsx! {
        for product in FEATURED_PRODUCTS.iter() {
            div { key: "{product.id}", class: "card",
                CardBody {
                    title: product.title,
                    price: product.price,
                    image: product.image,
                    description: product.description,
                }
            }
        }
    }
}

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn cards_keep_catalog_order() {
    let html = render(catalog_bodies);

    let positions: Vec<usize> = FEATURED_PRODUCTS
        .iter()
        .map(|product| html.find(product.title).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn every_card_shows_a_two_decimal_price() {
    let html = render(catalog_bodies);

    let prices: Vec<&str> = html
        .split("<p class=\"card-price\">")
        .skip(1)
        .filter_map(|rest| rest.split("</p>").next())
        .collect();

    assert_eq!(
        prices,
        vec!["$199.99", "$249.99", "$129.99", "$599.99", "$89.99", "$49.99"]
    );
    for (price, product) in prices.iter().zip(FEATURED_PRODUCTS.iter()) {
        assert_eq!(*price, format!("${:.2}", product.price.amount()));
    }
}

#[test]
fn whole_dollar_prices_keep_their_cents() {
    fn app() -> Element {
        rsx! {
            CardBody {
                title: "Cable",
                price: 5.0,
                image: "https://example.com/cable.png",
                description: "A cable.",
            }
        }
    }

    let html = render(app);
    assert!(html.contains("<p class=\"card-price\">$5.00</p>"), "{html}");
}
