use dioxus::prelude::*;

use crate::hooks::use_shop_config;
use crate::routes::Route;

/// The layout every page renders inside.
#[component]
pub fn Shell() -> Element {
    let config = use_shop_config();

    rsx! {
        Outlet::<Route> {}
        if config.dev_routes {
            DevRouteTable {}
        }
    }
}

/// The routes listed by the development route table, with a label for each.
pub fn dev_route_entries() -> Vec<(&'static str, Route)> {
    vec![
        ("Catalog", Route::Home {}),
        ("Product detail", Route::ProductDetail { id: "1".to_string() }),
        (
            "Unknown page",
            Route::PageNotFound {
                segments: vec!["missing".to_string()],
            },
        ),
    ]
}

/// A development aid listing every route of the storefront. Only mounted with the `dev-routes` feature.
#[component]
fn DevRouteTable() -> Element {
    rsx! {
        aside { class: "dev-routes",
            h2 { "Routes" }
            table {
                tbody {
                    for (label, route) in dev_route_entries() {
                        tr { key: "{label}",
                            td { "{label}" }
                            td {
                                Link { to: route.clone(), code { "{route}" } }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "center-screen center-column",
            h1 { class: "not-found-title", "Page Not Found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { class: "button button-primary", to: Route::Home {}, "Back to Home" }
        }
    }
}
