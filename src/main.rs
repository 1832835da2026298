mod components;
mod csv;
mod hooks;
mod models;
mod services;
mod stores;
mod upload;
mod utils;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("📊 NexGen Sales Analytics starting...");

    yew::Renderer::<App>::new().render();
}
