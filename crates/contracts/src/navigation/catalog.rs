use super::model::ProductGroup;

/// Product taxonomy shown in the mega-menu and the mobile accordion
pub fn default_product_groups() -> Vec<ProductGroup> {
    vec![
        ProductGroup::new(
            "Hoses & Connectors",
            &[
                "Hydraulic Hose",
                "Industrial Rubber Hoses",
                "Hammer Unions",
                "Swivel Joints",
                "Trelleborg Composite Hoses",
                "Rotary Drilling Hoses",
            ],
        ),
        ProductGroup::new(
            "Fittings & Adaptors",
            &[
                "Hose Fittings",
                "Ferrules",
                "BSP / NPT / JIC / ORFS",
                "Stainless Steel Fittings",
                "Camlock Fittings",
            ],
        ),
        ProductGroup::new("Gaskets & Sealing", &["Ring Joint Gaskets (API 16A)"]),
        ProductGroup::new("Fasteners", &["Bolts, Nuts, Washers, Locknuts"]),
        ProductGroup::new(
            "Hand Tools",
            &[
                "Wrenches & Spanners",
                "Cutting Tools",
                "Gripping Tools",
                "Measuring Tools",
            ],
        ),
        ProductGroup::new(
            "Safety Items",
            &["Safety Shoes", "Gloves", "Safety Helmets", "Coveralls"],
        ),
        ProductGroup::new("Lifting & Rigging", &["Nylon Slings"]),
        ProductGroup::new(
            "Warning & Safety Gear",
            &["Warning Tape", "Safety Nets", "Traffic Cones"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_order_is_stable() {
        let groups = default_product_groups();
        assert_eq!(groups.len(), 8);
        assert_eq!(groups[0].title, "Hoses & Connectors");
        assert_eq!(groups[0].items[0], "Hydraulic Hose");
        assert_eq!(groups[7].title, "Warning & Safety Gear");
    }
}
