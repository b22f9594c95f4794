use lazy_static::lazy_static;
use web_sys::window;

use crate::env_config::backend_url_override;

/// Backend origin when the app is served from a developer machine.
pub const LOCAL_BACKEND_ORIGIN: &str = "http://localhost:8000";

/// Hosted backend on Render. Retargeting a deployment means editing this
/// literal, unless the hosting page injects `ENV_CONFIG.BACKEND_URL`.
pub const REMOTE_BACKEND_ORIGIN: &str = "https://project1-backend-8wnx.onrender.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentEnvironment {
    Local,
    Remote,
}

impl DeploymentEnvironment {
    /// Exact match against the two loopback identifiers; no trimming or
    /// case-folding.
    pub fn from_hostname(hostname: &str) -> Self {
        match hostname {
            "localhost" | "127.0.0.1" => DeploymentEnvironment::Local,
            _ => DeploymentEnvironment::Remote,
        }
    }

    pub fn backend_origin(self) -> &'static str {
        match self {
            DeploymentEnvironment::Local => LOCAL_BACKEND_ORIGIN,
            DeploymentEnvironment::Remote => REMOTE_BACKEND_ORIGIN,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeploymentEnvironment::Local => "local development",
            DeploymentEnvironment::Remote => "hosted",
        }
    }
}

/// Rewrites the leading `http` of an origin to `ws`, keeping a trailing `s`
/// intact, so `https://…` becomes `wss://…` and `http://…` becomes `ws://…`.
/// Origins with any other scheme pass through unchanged.
pub fn websocket_origin(origin: &str) -> String {
    match origin.strip_prefix("http") {
        Some(rest) => format!("ws{rest}"),
        None => origin.to_string(),
    }
}

pub fn current_environment() -> DeploymentEnvironment {
    DeploymentEnvironment::from_hostname(&current_hostname())
}

fn current_hostname() -> String {
    let window = window().expect("should have a window in this context");
    window.location().hostname().unwrap_or_default()
}

fn resolve_backend_origin() -> String {
    if let Some(url) = backend_url_override() {
        log::debug!("Backend origin overridden via ENV_CONFIG: {url}");
        return url;
    }
    current_environment().backend_origin().to_string()
}

lazy_static! {
    /// Base origin for REST calls, resolved once at first use.
    pub static ref API_BASE_URL: String = resolve_backend_origin();
    /// The same origin with the scheme rewritten for WebSocket connections.
    pub static ref WS_BASE_URL: String = websocket_origin(&API_BASE_URL);
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn resolved_statics_agree() {
        assert_eq!(*WS_BASE_URL, websocket_origin(&API_BASE_URL));
        assert!(API_BASE_URL.starts_with("http"));
        assert!(WS_BASE_URL.starts_with("ws"));
    }
}
