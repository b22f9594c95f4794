use web_sys::window;

/// Reads one key from the `ENV_CONFIG` object the hosting page may attach to
/// `window` before the WASM bundle loads.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window().expect("should have a window in this context");

    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;
    if env_config.is_undefined() {
        log::warn!("window.ENV_CONFIG is missing; using built-in configuration");
        return None;
    }

    match js_sys::Reflect::get(&env_config, &key.into()) {
        Ok(value) if !value.is_undefined() => value.as_string(),
        _ => {
            log::warn!("ENV_CONFIG.{key} is not set");
            None
        }
    }
}

/// Deployment-time replacement for the backend origin literals. Empty values
/// count as unset.
pub fn backend_url_override() -> Option<String> {
    get_env_var("BACKEND_URL").filter(|url| !url.is_empty())
}

pub fn app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "MediFusion".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .map(|raw| parse_bool_flag(&raw))
        .unwrap_or(false)
}

// Only the literal "true" turns a flag on.
fn parse_bool_flag(raw: &str) -> bool {
    raw.parse().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::parse_bool_flag;

    #[test]
    fn bool_flags_default_off() {
        assert!(parse_bool_flag("true"));
        assert!(!parse_bool_flag("false"));
        assert!(!parse_bool_flag("TRUE"));
        assert!(!parse_bool_flag("1"));
        assert!(!parse_bool_flag(""));
    }
}
