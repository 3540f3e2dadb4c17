//! The static product catalog shown on the home page.

use std::fmt::{self, Display};

/// A price in dollars.
///
/// Prices always render with a dollar sign and exactly two decimal places, so `249.99` displays as
/// `$249.99` and `5.0` displays as `$5.00`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Price(pub f64);

impl Price {
    /// The raw dollar amount.
    pub fn amount(self) -> f64 {
        self.0
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// The minimal record a catalog card needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductSummary {
    pub id: u32,
    pub title: &'static str,
    pub price: Price,
    pub image: &'static str,
    pub description: &'static str,
}

/// The products featured on the home page, in display order.
pub static FEATURED_PRODUCTS: [ProductSummary; 6] = [
    ProductSummary {
        id: 1,
        title: "Premium Headphones",
        price: Price(199.99),
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500&q=80",
        description: "High-quality wireless headphones with noise cancellation technology.",
    },
    ProductSummary {
        id: 2,
        title: "Smart Watch",
        price: Price(249.99),
        image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500&q=80",
        description: "Advanced smartwatch with health monitoring and GPS features.",
    },
    ProductSummary {
        id: 3,
        title: "Wireless Earbuds",
        price: Price(129.99),
        image: "https://images.unsplash.com/photo-1572569511254-d8f925fe2cbb?w=500&q=80",
        description: "Compact wireless earbuds with crystal clear sound quality.",
    },
    ProductSummary {
        id: 4,
        title: "Digital Camera",
        price: Price(599.99),
        image: "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?w=500&q=80",
        description: "Professional digital camera with 4K video recording capabilities.",
    },
    ProductSummary {
        id: 5,
        title: "Bluetooth Speaker",
        price: Price(89.99),
        image: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=500&q=80",
        description: "Portable Bluetooth speaker with 360-degree sound and waterproof design.",
    },
    ProductSummary {
        id: 6,
        title: "Laptop Stand",
        price: Price(49.99),
        image: "https://images.unsplash.com/photo-1527443224154-c4a3942d3acf?w=500&q=80",
        description: "Ergonomic laptop stand for improved posture and comfort.",
    },
];
