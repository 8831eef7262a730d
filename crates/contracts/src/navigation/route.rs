use super::config::HeaderConfig;

/// Exact match between the current location and a top-level link
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    current_path == link_path
}

/// True for every location that starts with `products_path`
pub fn is_products_section(current_path: &str, products_path: &str) -> bool {
    current_path.starts_with(products_path)
}

/// Decides which header entries are drawn as the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteHighlighter {
    products_path: String,
    highlight_products_section: bool,
}

impl RouteHighlighter {
    pub fn new(products_path: impl Into<String>, highlight_products_section: bool) -> Self {
        Self {
            products_path: products_path.into(),
            highlight_products_section,
        }
    }

    pub fn from_config(config: &HeaderConfig) -> Self {
        Self::new(
            config.products_path.clone(),
            config.highlight_products_section,
        )
    }

    pub fn link_active(&self, current_path: &str, link_path: &str) -> bool {
        is_active(current_path, link_path)
    }

    /// The Products trigger has no page of its own; it only lights up in
    /// prefix mode.
    pub fn products_active(&self, current_path: &str) -> bool {
        self.highlight_products_section && is_products_section(current_path, &self.products_path)
    }
}
