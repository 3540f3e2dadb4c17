//! Headers, footers and other page furniture shared by the storefront pages.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::icons::{FacebookIcon, InstagramIcon, TwitterIcon};
use crate::routes::Route;

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
pub fn CatalogHeader() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container header-row",
                Link { class: "brand", to: Route::Home {}, "TechShop" }
                nav {
                    ul { class: "nav-links",
                        for label in ["Home", "Categories", "About", "Contact"] {
                            li { key: "{label}",
                                Link { class: "nav-link", to: Route::Home {}, "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "container hero-content",
                h1 { "Welcome to TechShop" }
                p { "Discover the latest tech products with exceptional quality and competitive prices." }
                button { class: "button button-light", "Shop Now" }
            }
        }
    }
}

#[component]
fn FooterLinks(heading: &'static str, labels: [&'static str; 4]) -> Element {
    rsx! {
        div {
            h4 { class: "footer-heading", "{heading}" }
            ul { class: "footer-links",
                for label in labels {
                    li { key: "{label}",
                        Link { to: Route::Home {}, "{label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CatalogFooter() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "site-footer site-footer-dark",
            div { class: "container",
                div { class: "footer-grid footer-grid-4",
                    div {
                        h3 { class: "footer-brand", "TechShop" }
                        p { "Your one-stop destination for quality tech products." }
                    }
                    FooterLinks {
                        heading: "Quick Links",
                        labels: ["Home", "Products", "About Us", "Contact"],
                    }
                    FooterLinks {
                        heading: "Customer Service",
                        labels: ["FAQ", "Shipping", "Returns", "Order Status"],
                    }
                    div {
                        h4 { class: "footer-heading", "Connect With Us" }
                        div { class: "social-links",
                            a { href: "#", span { class: "sr-only", "Facebook" } FacebookIcon {} }
                            a { href: "#", span { class: "sr-only", "Instagram" } InstagramIcon {} }
                            a { href: "#", span { class: "sr-only", "Twitter" } TwitterIcon {} }
                        }
                    }
                }
                div { class: "footer-legal", p { "© {year} TechShop. All rights reserved." } }
            }
        }
    }
}

/// The detail page header, with a breadcrumb ending at the product being viewed.
#[component]
pub fn DetailHeader(product_name: String) -> Element {
    rsx! {
        header { class: "site-header site-header-bordered",
            div { class: "container header-row",
                Link { class: "brand", to: Route::Home {}, "ShopNow" }
                nav {
                    ul { class: "breadcrumb",
                        li { Link { class: "nav-link", to: Route::Home {}, "Home" } }
                        li { span { class: "muted", "Products" } }
                        li { span { class: "breadcrumb-current", "{product_name}" } }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DetailFooter() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid footer-grid-3",
                    div {
                        h3 { class: "footer-brand", "ShopNow" }
                        p { class: "muted", "Quality products for everyday life." }
                    }
                    FooterLinks {
                        heading: "Quick Links",
                        labels: ["Home", "Products", "About Us", "Contact"],
                    }
                    div {
                        h3 { class: "footer-heading", "Contact Us" }
                        address { class: "muted",
                            p { "123 Shop Street" }
                            p { "Anytown, ST 12345" }
                            p { "Email: info@shopnow.com" }
                            p { "Phone: (123) 456-7890" }
                        }
                    }
                }
                div { class: "footer-legal", p { "© {year} ShopNow. All rights reserved." } }
            }
        }
    }
}
