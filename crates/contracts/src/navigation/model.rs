use serde::{Deserialize, Serialize};

/// Top-level header link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub path: String,
    pub label: String,
}

impl NavLink {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// One column of the mega-menu: a category title and its ordered items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductGroup {
    pub title: String,
    pub items: Vec<String>,
}

impl ProductGroup {
    pub fn new(title: impl Into<String>, items: &[&str]) -> Self {
        Self {
            title: title.into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Navigation context for one of this group's items
    pub fn select(&self, item: &str) -> ProductSelection {
        ProductSelection {
            category: self.title.clone(),
            item: item.to_string(),
        }
    }
}

/// Context handed to the products page when a product item is chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSelection {
    pub category: String,
    pub item: String,
}
