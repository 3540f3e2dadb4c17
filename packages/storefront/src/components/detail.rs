use dioxus::prelude::*;

use crate::components::chrome::{DetailFooter, DetailHeader};
use crate::components::icons::{ArrowLeftIcon, HeartIcon, ShareIcon, ShoppingCartIcon, StarIcon};
use crate::components::related::RelatedProducts;
use crate::components::tabs::ProductTabs;
use crate::hooks::use_product_view;
use crate::product::ProductDetails;
use crate::routes::Route;
use crate::view_state::{CartNotice, DetailPhase, DetailState};

/// The product detail page for `/product/:id`.
#[component]
pub fn ProductDetail(id: String) -> Element {
    let view = use_product_view(id.clone());
    let phase = view.read().phase_for(&id).clone();

    match phase {
        DetailPhase::Loading => rsx! { LoadingSpinner {} },
        DetailPhase::NotFound => rsx! { ProductNotFound {} },
        DetailPhase::Loaded(product) => rsx! {
            div { class: "page page-detail",
                DetailHeader { product_name: product.name.clone() }
                main { class: "container section",
                    ProductOverview { product: product.clone(), view }
                    ProductTabs { specifications: product.specifications.clone() }
                    RelatedProducts {}
                }
                DetailFooter {}
            }
        },
    }
}

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "center-screen",
            div { class: "spinner", role: "status", aria_label: "Loading" }
        }
    }
}

#[component]
pub fn ProductNotFound() -> Element {
    rsx! {
        div { class: "center-screen center-column",
            h1 { class: "not-found-title", "Product Not Found" }
            Link { class: "button button-primary", to: Route::Home {},
                ArrowLeftIcon { class: "icon icon-leading" }
                "Back to Home"
            }
        }
    }
}

/// Images, price, quantity and cart controls for a loaded product.
///
/// `view` is the state of the enclosing detail page. Selecting thumbnails and stepping the quantity
/// write back to it.
#[component]
pub fn ProductOverview(product: ProductDetails, view: Signal<DetailState>) -> Element {
    let mut notice = use_signal(|| None::<CartNotice>);
    let full_stars = product.full_stars();
    let in_stock = product.in_stock;
    let can_add = view.read().can_add_to_cart();

    rsx! {
        div { class: "overview",
            ImageGallery { name: product.name.clone(), images: product.images.clone(), view }
            div { class: "overview-info",
                div {
                    span { class: "badge", "{product.category}" }
                    h1 { class: "product-name", "{product.name}" }
                    div { class: "rating-row",
                        div { class: "stars",
                            for i in 0..5 {
                                StarIcon { key: "{i}", filled: i < full_stars }
                            }
                        }
                        span { class: "muted", "{product.rating} ({product.reviews} reviews)" }
                    }
                }
                div { class: "product-price", "{product.price}" }
                p { class: "muted", "{product.description}" }
                div { class: "purchase-options",
                    QuantityStepper { view }
                    div { class: "stock-row",
                        span { class: "label", "Status:" }
                        if in_stock {
                            span { class: "stock stock-in", "In Stock" }
                        } else {
                            span { class: "stock stock-out", "Out of Stock" }
                        }
                    }
                }
                div { class: "actions",
                    button {
                        class: "button button-primary button-large add-to-cart",
                        disabled: !can_add,
                        onclick: move |_| {
                            if let Some(added) = view.read().add_to_cart() {
                                notice.set(Some(added));
                            }
                        },
                        ShoppingCartIcon { class: "icon icon-leading" }
                        "Add to Cart"
                    }
                    button { class: "button button-outline button-large",
                        HeartIcon { class: "icon icon-leading" }
                        "Add to Wishlist"
                    }
                    button { class: "button button-outline button-icon", aria_label: "Share",
                        ShareIcon {}
                    }
                }
                if let Some(added) = notice() {
                    CartToast { notice: added, on_dismiss: move |_| notice.set(None) }
                }
            }
        }
    }
}

/// The main product image above a strip of clickable thumbnails.
#[component]
pub fn ImageGallery(name: String, images: Vec<String>, mut view: Signal<DetailState>) -> Element {
    let selected = view.read().selected_image().map(str::to_string);

    rsx! {
        div { class: "gallery",
            div { class: "gallery-main",
                if let Some(src) = selected.as_ref() {
                    img { src: "{src}", alt: "{name}" }
                }
            }
            div { class: "gallery-strip",
                for (position, image) in images.into_iter().enumerate().map(|(i, image)| (i + 1, image)) {
                    button {
                        key: "{position}",
                        class: if selected.as_deref() == Some(image.as_str()) { "thumb thumb-selected" } else { "thumb" },
                        onclick: {
                            let image = image.clone();
                            move |_| {
                                // Reselecting the current image must not dirty the view.
                                if !view.peek().is_selected(&image) {
                                    view.write().select_image(&image);
                                }
                            }
                        },
                        img { src: "{image}", alt: "{name} {position}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn QuantityStepper(mut view: Signal<DetailState>) -> Element {
    let quantity = view.read().quantity();

    rsx! {
        div { class: "quantity-row",
            span { class: "label", "Quantity:" }
            div { class: "stepper",
                button {
                    class: "stepper-button stepper-decrement",
                    disabled: !quantity.can_decrement(),
                    onclick: move |_| {
                        view.write().decrement_quantity();
                    },
                    "-"
                }
                span { class: "stepper-value", "{quantity}" }
                button {
                    class: "stepper-button stepper-increment",
                    onclick: move |_| view.write().increment_quantity(),
                    "+"
                }
            }
        }
    }
}

/// A dismissible acknowledgment that items were added to the cart.
#[component]
pub fn CartToast(notice: CartNotice, on_dismiss: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "toast", role: "status",
            span { "{notice}" }
            button {
                class: "toast-dismiss",
                aria_label: "Dismiss",
                onclick: move |evt| on_dismiss.call(evt),
                "×"
            }
        }
    }
}
