fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_logger::init(wasm_logger::Config::default());
        leptos::mount::mount_to_body(reservas_app::App);
    }
}
