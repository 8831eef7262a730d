//! Query-string encoding of the product selection handed to the products page.

use contracts::navigation::ProductSelection;

/// `/products?category=...&item=...`
pub fn product_href(products_path: &str, selection: &ProductSelection) -> String {
    match serde_qs::to_string(selection) {
        Ok(query) => format!("{}?{}", products_path, query),
        Err(e) => {
            log::warn!("failed to encode product selection: {}", e);
            products_path.to_string()
        }
    }
}

/// Reads a selection back from `location.search`; the leading `?` is optional.
pub fn parse_selection(search: &str) -> Option<ProductSelection> {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return None;
    }
    serde_qs::from_str(query).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydraulic_hose() -> ProductSelection {
        ProductSelection {
            category: "Hoses & Connectors".to_string(),
            item: "Hydraulic Hose".to_string(),
        }
    }

    #[test]
    fn test_href_escapes_reserved_characters() {
        let href = product_href("/products", &hydraulic_hose());
        assert!(href.starts_with("/products?category="));
        assert!(!href.contains(" & "));
        assert_eq!(href.matches('&').count(), 1);
    }

    #[test]
    fn test_selection_survives_the_url() {
        let href = product_href("/products", &hydraulic_hose());
        let (_, search) = href.split_once('?').unwrap();
        assert_eq!(parse_selection(search), Some(hydraulic_hose()));
        assert_eq!(
            parse_selection(&format!("?{}", search)),
            Some(hydraulic_hose())
        );
    }

    #[test]
    fn test_slashes_in_item_names() {
        let selection = ProductSelection {
            category: "Fittings & Adaptors".to_string(),
            item: "BSP / NPT / JIC / ORFS".to_string(),
        };
        let href = product_href("/products", &selection);
        let (_, search) = href.split_once('?').unwrap();
        assert_eq!(parse_selection(search), Some(selection));
    }

    #[test]
    fn test_missing_or_partial_query() {
        assert_eq!(parse_selection(""), None);
        assert_eq!(parse_selection("?"), None);
        assert_eq!(parse_selection("?category=Fasteners"), None);
    }
}
