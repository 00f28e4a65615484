pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: logging, panic hook, runtime config, then the app.
#[cfg(target_arch = "wasm32")]
pub fn run() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", err).into());
    }
    console_error_panic_hook::set_once();
    log::info!("starting {}", components::layout::APP_NAME);

    // Warms the base URL cache. A request sent before this settles resolves
    // the URL on its own, and whichever lookup finishes first is kept.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
    });

    router::mount_app();
}
