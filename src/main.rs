#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting GSO frontend: initializing runtime config");

    spawn_local(async move {
        gso_frontend::config::init().await;
        log::info!("Runtime config initialized");
        gso_frontend::mount();
    });
}

// The app only runs in the browser; the native build exists for tests.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
