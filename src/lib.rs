#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod delivery;
pub mod portfolio;
pub mod starfield;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::delivery::DeliveryConfig;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::error!("couldn't initialize logging: {e}");
    }
    if let Err(e) = delivery::init(DeliveryConfig::default()) {
        log::error!("{e}");
    }
    leptos::mount::hydrate_body(App);
}
