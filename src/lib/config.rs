//! Build-time configuration for the API endpoint and log level with an optional
//! runtime override. In the browser the override is read from
//! `window.LOANDESK_CONFIG` (if present) so static deployments can point at a
//! different backend without rebuilding. Natively the override comes from the
//! `LOANDESK_*` environment variables. Configuration values are public; do not
//! store secrets here.

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: option_env!("LOANDESK_API_BASE_URL")
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            log_level: option_env!("LOANDESK_LOG_LEVEL")
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("LOANDESK_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url")
            .map(|value| resolve_against_origin(&window, value)),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    Some(RuntimeConfig {
        api_base_url: std::env::var("LOANDESK_API_BASE_URL")
            .ok()
            .and_then(|value| normalize_runtime_value(&value)),
        log_level: std::env::var("LOANDESK_LOG_LEVEL")
            .ok()
            .and_then(|value| normalize_runtime_value(&value)),
    })
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

/// Same-origin deployments configure a bare path such as `/api`.
#[cfg(target_arch = "wasm32")]
fn resolve_against_origin(window: &web_sys::Window, value: String) -> String {
    if !value.starts_with('/') {
        return value;
    }
    match window.location().origin() {
        Ok(origin) => format!("{}{}", origin.trim_end_matches('/'), value),
        Err(_) => value,
    }
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_API_BASE_URL, RuntimeConfig, apply_runtime_overrides,
        normalize_runtime_value,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://loans.example.com/api "),
            Some("https://loans.example.com/api".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            log_level: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://loans.example.com/api"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://loans.example.com/api");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn load_reads_environment_overrides() {
        temp_env::with_vars(
            [
                ("LOANDESK_API_BASE_URL", Some(" https://staging.example.com/api ")),
                ("LOANDESK_LOG_LEVEL", Some("info")),
            ],
            || {
                let config = AppConfig::load();
                assert_eq!(config.api_base_url, "https://staging.example.com/api");
                assert_eq!(config.log_level, "info");
            },
        );
    }

    #[test]
    fn load_falls_back_to_defaults_for_blank_environment() {
        temp_env::with_vars(
            [
                ("LOANDESK_API_BASE_URL", Some("   ")),
                ("LOANDESK_LOG_LEVEL", None::<&str>),
            ],
            || {
                let config = AppConfig::load();
                assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
                assert_eq!(config.log_level, "error");
            },
        );
    }
}
