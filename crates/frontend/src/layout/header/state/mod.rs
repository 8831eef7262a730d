//! DOM-free controllers behind the navigation header.
//!
//! The reactive layer in [`super::context`] keeps one of each in a signal and
//! forwards browser events to them.

pub mod dropdown;
pub mod mobile;
pub mod scroll;

pub use dropdown::{ClickTarget, CloseTicket, DropdownController, DropdownState};
pub use mobile::MobileMenuController;
pub use scroll::ScrollTracker;

/// Point-in-time copy of every header flag, used for debug logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub is_scrolled: bool,
    pub is_mobile_menu_open: bool,
    pub desktop_products_open: bool,
    pub mobile_products_open: bool,
    pub close_pending: bool,
}

impl UiState {
    pub fn capture(
        scroll: &ScrollTracker,
        dropdown: &DropdownController,
        mobile: &MobileMenuController,
    ) -> Self {
        Self {
            is_scrolled: scroll.is_scrolled(),
            is_mobile_menu_open: mobile.is_menu_open(),
            desktop_products_open: dropdown.is_open(),
            mobile_products_open: mobile.is_products_open(),
            close_pending: dropdown.pending_close().is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_all_closed() {
        let state = UiState::capture(
            &ScrollTracker::new(10.0),
            &DropdownController::new(),
            &MobileMenuController::new(),
        );
        assert_eq!(
            state,
            UiState {
                is_scrolled: false,
                is_mobile_menu_open: false,
                desktop_products_open: false,
                mobile_products_open: false,
                close_pending: false,
            }
        );
    }
}
