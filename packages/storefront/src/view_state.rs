//! Local state owned by one mounted product detail view.
//!
//! The detail view moves through a small state machine:
//!
//! ```text
//! Loading ──(lookup succeeds)──> Loaded
//!    │
//!    └────(lookup fails)──────> NotFound
//! ```
//!
//! Every call to [`DetailState::begin`] starts a new load and hands out a [`LoadTicket`]. Only the
//! completion carrying the newest ticket is applied, and only once. A lookup that finishes after the
//! route id changed is discarded instead of overwriting the newer request.

use std::fmt::{self, Display};

use crate::product::{CatalogError, ProductDetails};

/// How many units of the product the shopper wants. Never less than one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub const MIN: Quantity = Quantity(1);

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Steps down by one. Returns `false` and leaves the quantity alone when it is already at the minimum.
    pub fn decrement(&mut self) -> bool {
        if *self <= Self::MIN {
            return false;
        }
        self.0 -= 1;
        true
    }

    pub fn can_decrement(self) -> bool {
        self > Self::MIN
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifies a single load started by [`DetailState::begin`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    id: String,
}

impl LoadTicket {
    /// The route id this load was started for.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Where the detail view is in its load lifecycle.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum DetailPhase {
    #[default]
    Loading,
    Loaded(ProductDetails),
    NotFound,
}

static LOADING: DetailPhase = DetailPhase::Loading;

/// The acknowledgment shown after the shopper adds the product to their cart.
#[derive(Clone, Debug, PartialEq)]
pub struct CartNotice {
    pub product_name: String,
    pub quantity: Quantity,
}

impl Display for CartNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added {} item(s) to cart", self.quantity)
    }
}

/// The view state of a product detail page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    generation: u64,
    current: Option<LoadTicket>,
    settled: bool,
    phase: DetailPhase,
    selected_image: Option<String>,
    quantity: Quantity,
}

impl DetailState {
    /// Starts loading the product with `id`, resetting everything the previous product left behind.
    pub fn begin(&mut self, id: &str) -> LoadTicket {
        self.generation += 1;
        self.settled = false;
        self.phase = DetailPhase::Loading;
        self.selected_image = None;
        self.quantity = Quantity::MIN;

        tracing::debug!(id, generation = self.generation, "loading product");

        let ticket = LoadTicket {
            generation: self.generation,
            id: id.to_string(),
        };
        self.current = Some(ticket.clone());
        ticket
    }

    /// Applies the outcome of the load identified by `ticket`.
    ///
    /// Returns `false` without touching the state if the ticket is stale or was already applied.
    pub fn finish(
        &mut self,
        ticket: &LoadTicket,
        result: Result<ProductDetails, CatalogError>,
    ) -> bool {
        if ticket.generation != self.generation || self.settled {
            tracing::debug!(
                id = %ticket.id,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale product load"
            );
            return false;
        }

        self.settled = true;
        match result {
            Ok(product) => {
                tracing::debug!(id = %ticket.id, "product loaded");
                self.selected_image = product.images.first().cloned();
                self.phase = DetailPhase::Loaded(product);
            }
            Err(err) => {
                tracing::debug!(id = %ticket.id, %err, "product lookup failed");
                self.phase = DetailPhase::NotFound;
            }
        }
        true
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    /// The route id passed to the newest [`DetailState::begin`].
    pub fn current_id(&self) -> Option<&str> {
        self.current.as_ref().map(LoadTicket::id)
    }

    /// The phase to show while the route points at `id`.
    ///
    /// Reads as [`DetailPhase::Loading`] until a load for `id` has begun, so a view whose id just changed
    /// never shows the product it was showing before.
    pub fn phase_for(&self, id: &str) -> &DetailPhase {
        if self.current_id() == Some(id) {
            &self.phase
        } else {
            &LOADING
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, DetailPhase::Loading)
    }

    pub fn product(&self) -> Option<&ProductDetails> {
        match &self.phase {
            DetailPhase::Loaded(product) => Some(product),
            _ => None,
        }
    }

    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    pub fn is_selected(&self, image: &str) -> bool {
        self.selected_image.as_deref() == Some(image)
    }

    /// Shows `image` as the main product image.
    ///
    /// Returns whether the selection changed. Images that do not belong to the loaded product are ignored.
    pub fn select_image(&mut self, image: &str) -> bool {
        if self.is_selected(image) {
            return false;
        }
        let Some(product) = self.product() else {
            return false;
        };
        if !product.images.iter().any(|candidate| candidate == image) {
            return false;
        }
        self.selected_image = Some(image.to_string());
        true
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn increment_quantity(&mut self) {
        self.quantity.increment();
    }

    pub fn decrement_quantity(&mut self) -> bool {
        self.quantity.decrement()
    }

    /// Whether the add to cart button should be enabled.
    pub fn can_add_to_cart(&self) -> bool {
        self.product().is_some_and(|product| product.in_stock)
    }

    /// Adds the current quantity to the cart, returning the acknowledgment to show.
    pub fn add_to_cart(&self) -> Option<CartNotice> {
        if !self.can_add_to_cart() {
            return None;
        }
        let product = self.product()?;
        tracing::info!(id = %product.id, quantity = self.quantity.get(), "added to cart");
        Some(CartNotice {
            product_name: product.name.clone(),
            quantity: self.quantity,
        })
    }
}

/// The tabs below the product overview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Specifications,
    Reviews,
    Shipping,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [
        DetailTab::Specifications,
        DetailTab::Reviews,
        DetailTab::Shipping,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Specifications => "Specifications",
            DetailTab::Reviews => "Reviews",
            DetailTab::Shipping => "Shipping & Returns",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::lookup_product;
    use pretty_assertions::assert_eq;

    fn loaded(id: &str) -> DetailState {
        let mut state = DetailState::default();
        let ticket = state.begin(id);
        assert!(state.finish(&ticket, lookup_product(id)));
        state
    }

    #[test]
    fn starts_loading() {
        let state = DetailState::default();
        assert!(state.is_loading());
        assert_eq!(state.product(), None);
        assert_eq!(state.quantity(), Quantity::MIN);
    }

    #[test]
    fn load_selects_first_image() {
        let state = loaded("42");
        let product = state.product().unwrap();
        assert_eq!(product.id, "42");
        assert_eq!(state.selected_image(), Some(product.images[0].as_str()));
    }

    #[test]
    fn completion_applies_once() {
        let mut state = DetailState::default();
        let ticket = state.begin("1");
        assert!(state.finish(&ticket, lookup_product("1")));

        let before = state.clone();
        assert!(!state.finish(&ticket, lookup_product("1")));
        assert_eq!(state, before);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = DetailState::default();
        let first = state.begin("1");
        let second = state.begin("2");

        assert!(!state.finish(&first, lookup_product("1")));
        assert!(state.is_loading());

        assert!(state.finish(&second, lookup_product("2")));
        assert_eq!(state.product().unwrap().id, "2");
    }

    #[test]
    fn changing_id_resets_view() {
        let mut state = loaded("1");
        state.increment_quantity();
        let second_image = state.product().unwrap().images[1].clone();
        state.select_image(&second_image);

        let ticket = state.begin("2");
        assert!(state.is_loading());
        assert_eq!(state.quantity(), Quantity::MIN);
        assert_eq!(state.selected_image(), None);

        state.finish(&ticket, lookup_product("2"));
        let first_image = state.product().unwrap().images[0].clone();
        assert_eq!(state.selected_image(), Some(first_image.as_str()));
    }

    #[test]
    fn phase_follows_the_current_id() {
        let fresh = DetailState::default();
        assert_eq!(fresh.current_id(), None);
        assert_eq!(fresh.phase_for("1"), &DetailPhase::Loading);

        let state = loaded("1");
        assert_eq!(state.current_id(), Some("1"));
        assert!(matches!(state.phase_for("1"), DetailPhase::Loaded(product) if product.id == "1"));
        assert_eq!(state.phase_for("2"), &DetailPhase::Loading);
    }

    #[test]
    fn failed_lookup_is_not_found() {
        let mut state = DetailState::default();
        let ticket = state.begin("");
        assert!(state.finish(&ticket, lookup_product("")));
        assert_eq!(state.phase(), &DetailPhase::NotFound);
        assert!(!state.can_add_to_cart());
        assert_eq!(state.add_to_cart(), None);
    }

    #[test]
    fn reselecting_the_current_image_is_a_noop() {
        let mut state = loaded("1");
        let current = state.selected_image().unwrap().to_string();
        let before = state.clone();
        assert!(!state.select_image(&current));
        assert_eq!(state, before);
    }

    #[test]
    fn selecting_a_thumbnail() {
        let mut state = loaded("1");
        let third = state.product().unwrap().images[2].clone();
        assert!(state.select_image(&third));
        assert!(state.is_selected(&third));
    }

    #[test]
    fn foreign_images_are_ignored() {
        let mut state = loaded("1");
        assert!(!state.select_image("https://example.com/other.png"));

        let mut loading = DetailState::default();
        loading.begin("1");
        assert!(!loading.select_image("https://example.com/other.png"));
        assert_eq!(loading.selected_image(), None);
    }

    #[test]
    fn quantity_never_drops_below_one() {
        // A fixed pseudo-random walk of increments and decrements.
        let steps = [
            false, false, true, false, true, true, true, false, false, false, false, true, false,
            true, true, false, false, false, false, false, true,
        ];

        let mut quantity = Quantity::default();
        for increment in steps {
            let before = quantity.get();
            if increment {
                quantity.increment();
                assert_eq!(quantity.get(), before + 1);
            } else if quantity.decrement() {
                assert_eq!(quantity.get(), before - 1);
            } else {
                assert_eq!(before, 1);
                assert_eq!(quantity.get(), 1);
            }
            assert!(quantity >= Quantity::MIN);
        }
    }

    #[test]
    fn decrement_is_disabled_at_minimum() {
        let mut quantity = Quantity::MIN;
        assert!(!quantity.can_decrement());
        quantity.increment();
        assert!(quantity.can_decrement());
    }

    #[test]
    fn add_to_cart_follows_stock() {
        let mut state = loaded("1");
        state.increment_quantity();
        state.increment_quantity();
        let notice = state.add_to_cart().unwrap();
        assert_eq!(notice.to_string(), "Added 3 item(s) to cart");
        assert_eq!(notice.product_name, "Premium Wireless Headphones");

        let mut product = state.product().unwrap().clone();
        product.in_stock = false;
        let mut out_of_stock = DetailState::default();
        let ticket = out_of_stock.begin("1");
        out_of_stock.finish(&ticket, Ok(product));
        assert!(!out_of_stock.can_add_to_cart());
        assert_eq!(out_of_stock.add_to_cart(), None);
    }

    #[test]
    fn loading_cannot_add_to_cart() {
        let mut state = DetailState::default();
        state.begin("1");
        assert!(!state.can_add_to_cart());
    }

    #[test]
    fn empty_gallery_selects_nothing() {
        let mut product = lookup_product("1").unwrap();
        product.images.clear();
        let mut state = DetailState::default();
        let ticket = state.begin("1");
        state.finish(&ticket, Ok(product));
        assert_eq!(state.selected_image(), None);
    }

    #[test]
    fn tabs_default_to_specifications() {
        assert_eq!(DetailTab::default(), DetailTab::Specifications);
        assert_eq!(DetailTab::Shipping.label(), "Shipping & Returns");
    }
}
