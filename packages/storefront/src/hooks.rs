use dioxus::prelude::*;

use crate::config::ShopConfig;
use crate::product::fetch_product;
use crate::view_state::DetailState;

/// Reads the [`ShopConfig`] provided by an ancestor, falling back to the defaults when there is none.
pub fn use_shop_config() -> ShopConfig {
    use_hook(|| try_consume_context::<ShopConfig>().unwrap_or_default())
}

/// Owns the view state of a product detail page and drives its simulated lookup.
///
/// The lookup reruns whenever `id` changes. The runtime cancels the lookup for the previous id and drops
/// it entirely when the component unmounts. Each completion is also checked against the ticket of the
/// newest load, so a late result can never overwrite the state of a newer request.
///
/// The new lookup only starts once the runtime polls it. Read the state with
/// [`DetailState::phase_for`] so the render right after an id change already shows the new id as loading.
pub fn use_product_view(id: String) -> Signal<DetailState> {
    let mut state = use_signal(DetailState::default);
    let delay = use_shop_config().fetch_delay;

    let _lookup = use_resource(use_reactive((&id,), move |(id,)| async move {
        let ticket = state.write().begin(&id);
        let result = fetch_product(id, delay).await;
        state.write().finish(&ticket, result);
    }));

    state
}
