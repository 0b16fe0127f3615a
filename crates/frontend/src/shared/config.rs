//! Startup configuration: embedded defaults plus query-string overrides.

use contracts::shared::config::{AppConfig, ConfigOverrides, DEFAULT_CONFIG};
use leptos::prelude::*;
use web_sys::window;

/// Parse overrides from a `location.search` string. Malformed input yields no overrides.
pub fn parse_overrides(search: &str) -> ConfigOverrides {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Resolve the configuration once at startup.
pub fn load_app_config() -> AppConfig {
    let base = match AppConfig::from_toml(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded configuration is invalid: {}", e);
            AppConfig::default()
        }
    };

    let overrides = parse_overrides(&current_search());
    if overrides == ConfigOverrides::default() {
        log::info!("Using default embedded configuration");
        return base;
    }

    let mut config = base;
    for rejected in config.apply_overrides(&overrides) {
        log::warn!("Ignoring configuration override: {}", rejected);
    }
    log::info!("Configuration overrides applied: {:?}", overrides);
    config
}

pub fn provide_config(config: AppConfig) {
    provide_context(config);
}

/// Hook to read the startup configuration.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig context not found. Call provide_config at startup.")
}
