use toggle_app::App;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    log::info!("csr mode - mounting app");

    leptos::mount::mount_to_body(App);
}
