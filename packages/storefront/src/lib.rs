#![doc = include_str!("../README.md")]
#![allow(non_snake_case)]

pub mod catalog;
pub mod components;
pub mod config;
pub mod hooks;
pub mod product;
pub mod routes;
pub mod view_state;

mod timer;

use dioxus::prelude::*;

pub use config::{ConfigError, ShopConfig};
pub use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// The root component. Pages read their [`ShopConfig`] from context, falling back to the defaults.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "TechShop" }
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
