use dioxus::prelude::*;

use crate::components::detail::ProductDetail;
use crate::components::home::Home;
use crate::components::shell::{PageNotFound, Shell};

/// Every page of the storefront.
#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/product/:id")]
        ProductDetail { id: String },
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::shell::dev_route_entries;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn parses_product_paths() {
        assert_eq!(Route::from_str("/").unwrap(), Route::Home {});
        assert_eq!(
            Route::from_str("/product/42").unwrap(),
            Route::ProductDetail { id: "42".to_string() }
        );
        assert_eq!(
            Route::from_str("/product/noise-cancelling").unwrap(),
            Route::ProductDetail { id: "noise-cancelling".to_string() }
        );
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(
            Route::from_str("/cart/checkout").unwrap(),
            Route::PageNotFound {
                segments: vec!["cart".to_string(), "checkout".to_string()]
            }
        );
    }

    #[test]
    fn product_links_point_at_detail_pages() {
        let route = Route::ProductDetail { id: "7".to_string() };
        assert_eq!(route.to_string(), "/product/7");
    }

    #[test]
    fn dev_routes_parse_back() {
        for (_, route) in dev_route_entries() {
            assert_eq!(Route::from_str(&route.to_string()).unwrap(), route);
        }
    }
}
