use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::catalog::default_product_groups;
use super::model::{NavLink, ProductGroup};

/// Upper bound accepted for the hover-intent close delay
pub const MAX_CLOSE_DELAY_MS: u32 = 2000;

/// Logo block on the left of the header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub logo_src: String,
    pub logo_alt: String,
    pub home_path: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            logo_src: "/westlegend.png".to_string(),
            logo_alt: "West Legend Logo".to_string(),
            home_path: "/".to_string(),
        }
    }
}

/// Everything that differs between deployments of the header.
///
/// Missing fields fall back to [`HeaderConfig::default`], so a TOML or JSON
/// document only has to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset (px) above which the header is drawn compacted
    pub scroll_threshold: f64,
    pub nav_links: Vec<NavLink>,
    pub catalog_asset_path: String,
    /// Hover-intent delay before the mega-menu closes after pointer leave
    pub close_delay_ms: u32,
    /// Highlight the Products trigger for any path under `products_path`
    pub highlight_products_section: bool,
    pub products_path: String,
    pub contact_path: String,
    pub brand: Brand,
    pub product_groups: Vec<ProductGroup>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 10.0,
            nav_links: vec![NavLink::new("/", "Home"), NavLink::new("/about", "About")],
            catalog_asset_path: "/westlegend.pdf".to_string(),
            close_delay_ms: 120,
            highlight_products_section: false,
            products_path: "/products".to_string(),
            contact_path: "/contact".to_string(),
            brand: Brand::default(),
            product_groups: default_product_groups(),
        }
    }
}

impl HeaderConfig {
    /// The later-scroll variant: compacts at 50px and highlights the
    /// Products trigger for every page under `/products`.
    pub fn compact_preset() -> Self {
        Self {
            scroll_threshold: 50.0,
            close_delay_ms: 150,
            highlight_products_section: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), HeaderConfigError> {
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(HeaderConfigError::InvalidScrollThreshold(
                self.scroll_threshold,
            ));
        }
        if self.close_delay_ms > MAX_CLOSE_DELAY_MS {
            return Err(HeaderConfigError::CloseDelayTooLong(self.close_delay_ms));
        }

        let mut seen = HashSet::new();
        for link in &self.nav_links {
            if link.label.trim().is_empty() {
                return Err(HeaderConfigError::EmptyLabel(link.path.clone()));
            }
            check_route(&link.path)?;
            if !seen.insert(link.path.as_str()) {
                return Err(HeaderConfigError::DuplicateLink(link.path.clone()));
            }
        }

        check_route(&self.products_path)?;
        check_route(&self.contact_path)?;
        check_route(&self.brand.home_path)?;

        if self.catalog_asset_path.trim().is_empty() {
            return Err(HeaderConfigError::EmptyCatalogPath);
        }

        for group in &self.product_groups {
            if group.title.trim().is_empty() {
                return Err(HeaderConfigError::EmptyGroupTitle);
            }
            if group.items.is_empty() {
                return Err(HeaderConfigError::EmptyGroup(group.title.clone()));
            }
            if group.items.iter().any(|item| item.trim().is_empty()) {
                return Err(HeaderConfigError::EmptyItem(group.title.clone()));
            }
        }

        Ok(())
    }
}

fn check_route(path: &str) -> Result<(), HeaderConfigError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(HeaderConfigError::RelativePath(path.to_string()))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum HeaderConfigError {
    #[error("scroll threshold must be a finite, non-negative number, got {0}")]
    InvalidScrollThreshold(f64),
    #[error("close delay {0}ms exceeds the 2000ms limit")]
    CloseDelayTooLong(u32),
    #[error("link `{0}` has an empty label")]
    EmptyLabel(String),
    #[error("route `{0}` must start with `/`")]
    RelativePath(String),
    #[error("link `{0}` is listed more than once")]
    DuplicateLink(String),
    #[error("catalog asset path is empty")]
    EmptyCatalogPath,
    #[error("product group with an empty title")]
    EmptyGroupTitle,
    #[error("product group `{0}` has no items")]
    EmptyGroup(String),
    #[error("product group `{0}` contains an empty item")]
    EmptyItem(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(HeaderConfig::default().validate(), Ok(()));
        assert_eq!(HeaderConfig::compact_preset().validate(), Ok(()));
    }

    #[test]
    fn test_presets_differ_only_in_behaviour() {
        let primary = HeaderConfig::default();
        let compact = HeaderConfig::compact_preset();
        assert_eq!(primary.scroll_threshold, 10.0);
        assert_eq!(compact.scroll_threshold, 50.0);
        assert!(!primary.highlight_products_section);
        assert!(compact.highlight_products_section);
        assert_eq!(primary.nav_links, compact.nav_links);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: HeaderConfig =
            serde_json::from_str(r#"{"scroll_threshold": 50, "catalog_asset_path": "/catalog.pdf"}"#)
                .unwrap();
        assert_eq!(config.scroll_threshold, 50.0);
        assert_eq!(config.catalog_asset_path, "/catalog.pdf");
        assert_eq!(config.close_delay_ms, 120);
        assert_eq!(config.product_groups.len(), 8);
        assert_eq!(config.brand.home_path, "/");
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let config = HeaderConfig {
            scroll_threshold: -1.0,
            ..HeaderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(HeaderConfigError::InvalidScrollThreshold(-1.0))
        );
    }

    #[test]
    fn test_rejects_nan_threshold() {
        let config = HeaderConfig {
            scroll_threshold: f64::NAN,
            ..HeaderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(HeaderConfigError::InvalidScrollThreshold(_))
        ));
    }

    #[test]
    fn test_rejects_relative_link() {
        let config = HeaderConfig {
            nav_links: vec![NavLink::new("about", "About")],
            ..HeaderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(HeaderConfigError::RelativePath("about".to_string()))
        );
    }

    #[test]
    fn test_rejects_duplicate_link() {
        let config = HeaderConfig {
            nav_links: vec![NavLink::new("/", "Home"), NavLink::new("/", "Start")],
            ..HeaderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(HeaderConfigError::DuplicateLink("/".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_group() {
        let config = HeaderConfig {
            product_groups: vec![ProductGroup::new("Fasteners", &[])],
            ..HeaderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(HeaderConfigError::EmptyGroup("Fasteners".to_string()))
        );
    }

    #[test]
    fn test_rejects_long_delay() {
        let config = HeaderConfig {
            close_delay_ms: 5000,
            ..HeaderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(HeaderConfigError::CloseDelayTooLong(5000))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HeaderConfigError::RelativePath("x".to_string()).to_string(),
            "route `x` must start with `/`"
        );
        assert_eq!(
            HeaderConfigError::EmptyCatalogPath.to_string(),
            "catalog asset path is empty"
        );
    }
}
