pub mod app;
pub mod domain;
pub mod shared;

use shared::config::AppConfig;
use shared::theme::HostTheme;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

fn mount_point(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

pub fn mount() {
    let config = AppConfig::from_location();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    HostTheme::default().apply();

    let Some(root) = mount_point(&config.mount_id) else {
        log::error!("Mount point #{} not found", config.mount_id);
        return;
    };
    leptos::mount::mount_to(root, app::App).forget();
}

#[wasm_bindgen(start)]
pub fn start() {
    mount();
}
