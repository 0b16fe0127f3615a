use serde::{Deserialize, Serialize};

use crate::enums::{ColorScheme, Platform};
use crate::shared::theme::MAX_CONTENT_WIDTH;

/// Startup configuration of the tab bar application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub brand_label: String,
    pub docs_url: String,
    #[serde(default = "default_max_content_width")]
    pub max_content_width: f32,
    #[serde(default)]
    pub platform: Platform,
    /// Forced appearance mode; `None` follows the system.
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
}

fn default_max_content_width() -> f32 {
    MAX_CONTENT_WIDTH
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
brand_label = "Expo Starter"
docs_url = "https://docs.expo.dev"
max_content_width = 800.0
platform = "web"
"#;

/// Overrides accepted from the page query string, e.g. `?platform=ios&scheme=dark`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigOverrides {
    pub platform: Option<String>,
    pub scheme: Option<String>,
    pub brand: Option<String>,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let mut config: AppConfig = toml::from_str(contents)?;
        if !config.max_content_width.is_finite() || config.max_content_width <= 0.0 {
            anyhow::bail!(
                "max_content_width must be a positive number, got {}",
                config.max_content_width
            );
        }
        config.color_scheme = config.color_scheme.and_then(forced_scheme);
        Ok(config)
    }

    /// Apply startup overrides key by key. A rejected key leaves its setting
    /// untouched and is reported; the other keys still apply.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> Vec<anyhow::Error> {
        let mut rejected = Vec::new();
        if let Some(code) = &overrides.platform {
            match Platform::from_code(code) {
                Some(platform) => self.platform = platform,
                None => rejected.push(anyhow::anyhow!("unknown platform: {}", code)),
            }
        }
        if let Some(scheme) = &overrides.scheme {
            self.color_scheme = forced_scheme(ColorScheme::from_code(scheme));
        }
        if let Some(brand) = &overrides.brand {
            self.brand_label = brand.clone();
        }
        rejected
    }
}

/// Forced appearance for a configured mode; `Unspecified` follows the system.
fn forced_scheme(scheme: ColorScheme) -> Option<ColorScheme> {
    match scheme {
        ColorScheme::Unspecified => None,
        forced => Some(forced),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_label: "Expo Starter".to_string(),
            docs_url: "https://docs.expo.dev".to_string(),
            max_content_width: MAX_CONTENT_WIDTH,
            platform: Platform::Web,
            color_scheme: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_optional_fields() {
        let config = AppConfig::from_toml(
            "brand_label = \"Demo\"\ndocs_url = \"https://example.com\"\n",
        )
        .unwrap();
        assert_eq!(config.platform, Platform::Web);
        assert_eq!(config.max_content_width, MAX_CONTENT_WIDTH);
        assert_eq!(config.color_scheme, None);
    }

    #[test]
    fn test_rejects_bad_width() {
        let err = AppConfig::from_toml(
            "brand_label = \"x\"\ndocs_url = \"y\"\nmax_content_width = -1.0\n",
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_overrides() {
        let overrides = ConfigOverrides {
            platform: Some("ios".to_string()),
            scheme: Some("dark".to_string()),
            brand: None,
        };
        let mut config = AppConfig::default();
        let rejected = config.apply_overrides(&overrides);
        assert!(rejected.is_empty());
        assert_eq!(config.platform, Platform::Ios);
        assert_eq!(config.color_scheme, Some(ColorScheme::Dark));
        assert_eq!(config.brand_label, "Expo Starter");
    }

    #[test]
    fn test_unspecified_scheme_follows_system() {
        let overrides = ConfigOverrides {
            scheme: Some("auto".to_string()),
            ..Default::default()
        };
        let mut config = AppConfig {
            color_scheme: Some(ColorScheme::Light),
            ..AppConfig::default()
        };
        config.apply_overrides(&overrides);
        assert_eq!(config.color_scheme, None);
    }

    #[test]
    fn test_unknown_scheme_in_toml_matches_query() {
        let from_file = AppConfig::from_toml(
            "brand_label = \"x\"\ndocs_url = \"y\"\ncolor_scheme = \"auto\"\n",
        )
        .unwrap();
        assert_eq!(from_file.color_scheme, None);

        let mut from_query = AppConfig::default();
        from_query.apply_overrides(&ConfigOverrides {
            scheme: Some("auto".to_string()),
            ..Default::default()
        });
        assert_eq!(from_file.color_scheme, from_query.color_scheme);

        let dark = AppConfig::from_toml(
            "brand_label = \"x\"\ndocs_url = \"y\"\ncolor_scheme = \"dark\"\n",
        )
        .unwrap();
        assert_eq!(dark.color_scheme, Some(ColorScheme::Dark));
    }

    #[test]
    fn test_bad_platform_keeps_other_overrides() {
        let overrides = ConfigOverrides {
            platform: Some("tvos".to_string()),
            scheme: Some("dark".to_string()),
            brand: Some("Demo".to_string()),
        };
        let mut config = AppConfig::default();
        let rejected = config.apply_overrides(&overrides);
        assert_eq!(rejected.len(), 1);
        assert!(rejected[0].to_string().contains("tvos"));
        assert_eq!(config.platform, Platform::Web);
        assert_eq!(config.color_scheme, Some(ColorScheme::Dark));
        assert_eq!(config.brand_label, "Demo");
    }
}
