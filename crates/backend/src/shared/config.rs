use contracts::navigation::HeaderConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub header: HeaderConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Output of the frontend build (index.html + wasm bundle)
    pub dist_dir: String,
    /// Logo, catalog PDF and other static files served from the site root
    pub assets_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            dist_dir: "dist".to_string(),
            assets_dir: "assets".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
dist_dir = "dist"
assets_dir = "assets"

[header]
scroll_threshold = 10.0
catalog_asset_path = "/westlegend.pdf"
close_delay_ms = 120

[[header.nav_links]]
path = "/"
label = "Home"

[[header.nav_links]]
path = "/about"
label = "About"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// The header section is validated before it is returned.
pub fn load_config() -> anyhow::Result<Config> {
    let config = match find_config_file() {
        Some(config_path) => {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            parse_config(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
    };
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config
        .header
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid [header] section: {e}"))?;
    Ok(config)
}

/// Resolves a configured directory relative to the executable directory
pub fn resolve_dir(dir: &str) -> PathBuf {
    let path = Path::new(dir);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(path);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, "dist");
        assert_eq!(config.header, HeaderConfig::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.header.scroll_threshold, 10.0);
        assert_eq!(config.header.product_groups.len(), 8);
    }

    #[test]
    fn test_header_overrides() {
        let config = parse_config(
            r#"
[header]
scroll_threshold = 50.0
catalog_asset_path = "/catalog/westlegend.pdf"
highlight_products_section = true

[[header.nav_links]]
path = "/"
label = "Home"

[[header.product_groups]]
title = "Fasteners"
items = ["Bolts, Nuts, Washers, Locknuts"]
"#,
        )
        .unwrap();
        assert_eq!(config.header.scroll_threshold, 50.0);
        assert_eq!(config.header.catalog_asset_path, "/catalog/westlegend.pdf");
        assert!(config.header.highlight_products_section);
        assert_eq!(config.header.nav_links.len(), 1);
        assert_eq!(config.header.product_groups.len(), 1);
        assert_eq!(config.header.close_delay_ms, 120);
    }

    #[test]
    fn test_invalid_header_is_rejected() {
        let err = parse_config(
            r#"
[header]
scroll_threshold = -5.0
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid [header] section"));
    }

    #[test]
    fn test_absolute_dir_is_kept() {
        let dir = std::env::temp_dir();
        let resolved = resolve_dir(dir.to_str().unwrap());
        assert_eq!(resolved, dir);
    }
}
