use storefront::{App, ShopConfig, config::FETCH_DELAY_VAR};

fn main() {
    let (config, config_err) = match ShopConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(err) => (ShopConfig::default(), Some(err)),
    };

    dioxus::logger::init(config.log_level).expect("failed to init logger");

    if let Some(err) = config_err {
        tracing::warn!(%err, var = FETCH_DELAY_VAR, "ignoring invalid configuration, using defaults");
    }
    tracing::info!(fetch_delay = ?config.fetch_delay, dev_routes = config.dev_routes, "starting storefront");

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(App);
}
