use crate::config::{current_environment, API_BASE_URL, WS_BASE_URL};
use crate::env_config::app_name;
use yew::prelude::*;

/// Landing page: shows which backend this build will talk to.
#[function_component(StatusPage)]
pub fn status_page() -> Html {
    let environment = current_environment();

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-800 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-2">
                    { app_name() }
                </h1>
                <p class="text-center text-gray-500 mb-6">
                    { format!("Running against the {} backend", environment.label()) }
                </p>
                <dl class="text-sm text-gray-700">
                    <div class="flex justify-between border-b border-gray-200 py-2">
                        <dt class="font-semibold">{"API endpoint"}</dt>
                        <dd class="font-mono">{ API_BASE_URL.as_str() }</dd>
                    </div>
                    <div class="flex justify-between py-2">
                        <dt class="font-semibold">{"WebSocket endpoint"}</dt>
                        <dd class="font-mono">{ WS_BASE_URL.as_str() }</dd>
                    </div>
                </dl>
            </div>
        </div>
    }
}
