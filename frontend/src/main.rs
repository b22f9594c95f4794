mod config;
mod env_config;
mod router;
mod status;

use crate::config::{API_BASE_URL, WS_BASE_URL};
use crate::env_config::is_debug_mode;
use crate::router::{switch, Route};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let level = if is_debug_mode() {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    yew::Renderer::<App>::new().render();

    console::log_1(
        &format!("Config loaded: API={}, WS={}", *API_BASE_URL, *WS_BASE_URL).into(),
    );
}
