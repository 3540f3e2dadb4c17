//! Full product records and the simulated product lookup.
//!
//! There is no backend behind the storefront. [`fetch_product`] waits for the configured delay and then
//! builds a synthetic record whose id echoes the requested one. Everything else about the record is the
//! same regardless of the id.

use std::time::Duration;

use crate::catalog::Price;
use crate::timer::sleep;

/// An error produced while looking up a product.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// No product exists for the requested id.
    #[error("no product with id {id:?}")]
    NotFound {
        /// The id that was requested.
        id: String,
    },
}

/// One named row of a product's specification table.
#[derive(Clone, Debug, PartialEq)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

impl Specification {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Everything the detail page shows about a single product.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetails {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub description: String,
    pub images: Vec<String>,
    /// Average review score between 0 and 5.
    pub rating: f32,
    pub reviews: u32,
    pub specifications: Vec<Specification>,
    pub in_stock: bool,
    pub category: String,
}

impl ProductDetails {
    /// The number of filled stars in a five star rating row.
    pub fn full_stars(&self) -> usize {
        self.rating.clamp(0.0, 5.0).floor() as usize
    }

    /// Looks up a specification value by name.
    pub fn specification(&self, name: &str) -> Option<&str> {
        self.specifications
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.value.as_str())
    }
}

/// Builds the product record for `id` without waiting.
///
/// Blank ids have no product. Any other id yields the demo headphones record with its id set to `id`.
pub fn lookup_product(id: &str) -> Result<ProductDetails, CatalogError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CatalogError::NotFound { id: id.to_string() });
    }

    Ok(ProductDetails {
        id: id.to_string(),
        name: "Premium Wireless Headphones".to_string(),
        price: Price(249.99),
        description: "Experience crystal-clear sound with our premium wireless headphones. \
            Featuring active noise cancellation, 30-hour battery life, and ultra-comfortable ear \
            cushions for extended listening sessions. Perfect for music enthusiasts and \
            professionals alike."
            .to_string(),
        images: Vec::from(
            [
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=800&q=80",
                "https://images.unsplash.com/photo-1577174881658-0f30ed549adc?w=800&q=80",
                "https://images.unsplash.com/photo-1618366712010-f4ae9c647dcb?w=800&q=80",
                "https://images.unsplash.com/photo-1563627806368-2bc99351e700?w=800&q=80",
            ]
            .map(String::from),
        ),
        rating: 4.8,
        reviews: 256,
        specifications: vec![
            Specification::new("Connectivity", "Bluetooth 5.0"),
            Specification::new("Battery Life", "30 hours"),
            Specification::new("Noise Cancellation", "Active"),
            Specification::new("Weight", "250g"),
            Specification::new("Charging", "USB-C"),
            Specification::new("Warranty", "2 years"),
        ],
        in_stock: true,
        category: "Electronics".to_string(),
    })
}

/// Simulates fetching a product from a remote store.
///
/// Dropping the returned future before it resolves abandons the lookup.
pub async fn fetch_product(id: String, delay: Duration) -> Result<ProductDetails, CatalogError> {
    tracing::debug!(%id, ?delay, "fetching product");
    sleep(delay).await;
    lookup_product(&id)
}
