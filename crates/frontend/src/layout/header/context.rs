use super::close_timer::CloseTimer;
use super::region::DropdownRegion;
use super::state::{
    ClickTarget, CloseTicket, DropdownController, MobileMenuController, ScrollTracker, UiState,
};
use contracts::navigation::{HeaderConfig, ProductGroup, ProductSelection, RouteHighlighter};
use leptos::ev;
use leptos::prelude::*;

/// Reactive state of one mounted `NavigationHeader`.
///
/// Every field is an arena handle, so the context is `Copy` and can be moved
/// into any event handler. It is disposed together with the header's owner.
#[derive(Clone, Copy)]
pub struct HeaderContext {
    pub config: StoredValue<HeaderConfig>,
    pub scroll: RwSignal<ScrollTracker>,
    pub mobile: RwSignal<MobileMenuController>,
    pub region: DropdownRegion,
    /// Mirrors `dropdown.is_open()` for the view
    pub desktop_open: RwSignal<bool>,
    dropdown: StoredValue<DropdownController>,
    close_timer: StoredValue<CloseTimer, LocalStorage>,
}

impl HeaderContext {
    pub fn new(config: HeaderConfig) -> Self {
        let threshold = config.scroll_threshold;
        Self {
            config: StoredValue::new(config),
            scroll: RwSignal::new(ScrollTracker::new(threshold)),
            mobile: RwSignal::new(MobileMenuController::new()),
            region: DropdownRegion::new(),
            desktop_open: RwSignal::new(false),
            dropdown: StoredValue::new(DropdownController::new()),
            close_timer: StoredValue::new_local(CloseTimer::default()),
        }
    }

    pub fn highlighter(&self) -> RouteHighlighter {
        self.config.with_value(RouteHighlighter::from_config)
    }

    pub fn product_groups(&self) -> Vec<ProductGroup> {
        self.config.with_value(|c| c.product_groups.clone())
    }

    /// Destination of a product item: the products page with the selection
    /// encoded in the query string.
    pub fn product_href(&self, selection: &ProductSelection) -> String {
        self.config.with_value(|c| {
            crate::shared::query::product_href(&c.products_path, selection)
        })
    }

    pub fn snapshot(&self) -> UiState {
        UiState::capture(
            &self.scroll.get_untracked(),
            &self.dropdown.get_value(),
            &self.mobile.get_untracked(),
        )
    }

    /// Subscribes to window scroll and click and samples the scroll offset
    /// once. Both listeners and any pending close timer are released when the
    /// current owner is cleaned up.
    pub fn attach_window_listeners(&self) {
        let this = *self;

        this.sample_scroll();
        let scroll_handle = window_event_listener(ev::scroll, move |_| this.sample_scroll());

        let click_handle = window_event_listener(ev::click, move |event: ev::MouseEvent| {
            let target = this.region.classify(event.target());
            this.document_click(target);
        });

        on_cleanup(move || {
            scroll_handle.remove();
            click_handle.remove();
            this.close_timer.update_value(|timer| timer.cancel());
            log::debug!("navigation header listeners detached");
        });
    }

    fn sample_scroll(&self) {
        let offset = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        let mut tracker = self.scroll.get_untracked();
        if tracker.observe(offset) {
            self.scroll.set(tracker);
        }
    }

    /// Runs `f` on the dropdown controller and publishes the open flag if it
    /// changed.
    fn drive<U>(&self, f: impl FnOnce(&mut DropdownController) -> U) -> U {
        let mut controller = self.dropdown.get_value();
        let out = f(&mut controller);
        let open = controller.is_open();
        self.dropdown.set_value(controller);
        if self.desktop_open.get_untracked() != open {
            self.desktop_open.set(open);
        }
        out
    }

    pub fn open_dropdown(&self) {
        self.close_timer.update_value(|timer| timer.cancel());
        self.drive(DropdownController::pointer_enter);
    }

    pub fn schedule_close(&self) {
        let ticket = self.drive(DropdownController::pointer_leave);
        let delay = self.config.with_value(|c| c.close_delay_ms);
        let this = *self;
        self.close_timer.update_value(|timer| {
            timer.arm(ticket, delay, move || this.close_elapsed(ticket));
        });
    }

    fn close_elapsed(&self, ticket: CloseTicket) {
        if self.drive(|d| d.deadline_elapsed(ticket)) {
            log::debug!("mega-menu closed after hover delay");
        }
    }

    pub fn toggle_dropdown(&self) {
        self.close_timer.update_value(|timer| timer.cancel());
        self.drive(DropdownController::toggle);
        log::debug!("mega-menu toggled: {:?}", self.snapshot());
    }

    fn document_click(&self, target: ClickTarget) {
        if self.drive(|d| d.document_click(target)) {
            self.close_timer.update_value(|timer| timer.cancel());
            log::debug!("mega-menu closed by outside click");
        }
    }

    pub fn select_desktop_item(&self) {
        self.close_timer.update_value(|timer| timer.cancel());
        self.drive(DropdownController::select_item);
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile.update(|m| m.toggle_menu());
        log::debug!("mobile menu toggled: {:?}", self.snapshot());
    }

    pub fn toggle_mobile_products(&self) {
        self.mobile.update(|m| m.toggle_products());
    }

    pub fn select_mobile_item(&self) {
        self.mobile.update(|m| m.select_item());
    }
}

/// Fetches the header context provided by the enclosing `NavigationHeader`.
pub fn use_header() -> HeaderContext {
    use_context::<HeaderContext>().expect("HeaderContext not found")
}
