//! Browser entry point for the CSR bundle; a no-op when built natively.

fn main() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(client::app::App);
    }
}
