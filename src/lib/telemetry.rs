//! Log level parsing and, in the browser, the console subscriber.

use tracing::Level;

/// Accepts `0..=4` or a level name, the same forms the `--verbose` flag takes.
///
/// # Errors
/// Returns a message when the value is neither.
pub fn parse_log_level(level: &str) -> Result<Level, String> {
    let level = level.trim();
    if let Ok(parsed) = level.parse::<u8>() {
        return match parsed {
            0 => Ok(Level::ERROR),
            1 => Ok(Level::WARN),
            2 => Ok(Level::INFO),
            3 => Ok(Level::DEBUG),
            4 => Ok(Level::TRACE),
            _ => Err("invalid log level".to_string()),
        };
    }

    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err("invalid log level".to_string()),
    }
}

/// Installs the browser console subscriber. Unknown levels fall back to `ERROR`.
#[cfg(target_arch = "wasm32")]
pub fn init(level: &str) {
    use tracing_subscriber::{Registry, layer::SubscriberExt};
    use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

    let level = parse_log_level(level).unwrap_or(Level::ERROR);
    let config = WASMLayerConfigBuilder::new().set_max_level(level).build();
    let subscriber = Registry::default().with(WASMLayer::new(config));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}
