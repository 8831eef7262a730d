/// Outer slide-down menu plus the products accordion nested inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenuController {
    menu_open: bool,
    products_open: bool,
}

impl MobileMenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_products_open(&self) -> bool {
        self.products_open
    }

    /// The accordion only shows as expanded while the outer menu is visible.
    pub fn products_expanded(&self) -> bool {
        self.menu_open && self.products_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_products(&mut self) {
        self.products_open = !self.products_open;
    }

    /// A link or the contact button was followed. The accordion keeps its state.
    pub fn select_item(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::navigation::default_product_groups;

    #[test]
    fn test_double_toggle_restores_closed() {
        let mut menu = MobileMenuController::new();
        menu.toggle_menu();
        assert!(menu.is_menu_open());
        menu.toggle_menu();
        assert_eq!(menu, MobileMenuController::new());
    }

    #[test]
    fn test_accordion_is_independent() {
        let mut menu = MobileMenuController::new();
        menu.toggle_products();
        assert!(menu.is_products_open());
        assert!(!menu.products_expanded());

        menu.toggle_menu();
        assert!(menu.products_expanded());
    }

    #[test]
    fn test_selection_closes_menu_but_keeps_accordion() {
        let mut menu = MobileMenuController::new();
        menu.toggle_menu();
        menu.toggle_products();

        menu.select_item();
        assert!(!menu.is_menu_open());
        assert!(menu.is_products_open());

        menu.toggle_menu();
        assert!(menu.products_expanded());
    }

    #[test]
    fn test_select_hydraulic_hose() {
        let groups = default_product_groups();
        let mut menu = MobileMenuController::new();
        menu.toggle_menu();
        menu.toggle_products();

        let group = groups
            .iter()
            .find(|g| g.items.iter().any(|i| i == "Hydraulic Hose"))
            .unwrap();
        let selection = group.select("Hydraulic Hose");
        menu.select_item();

        assert!(!menu.is_menu_open());
        assert_eq!(selection.category, "Hoses & Connectors");
        assert_eq!(selection.item, "Hydraulic Hose");
    }
}
