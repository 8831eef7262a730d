//! Desktop mega-menu open/close logic with hover intent.
//!
//! A pointer leave does not close the panel directly. It hands out a
//! [`CloseTicket`] which the caller arms on a timer; when the timer fires the
//! ticket is redeemed with [`DropdownController::deadline_elapsed`]. Any
//! transition in between revokes the ticket, so a late or cancelled timer can
//! never close a panel the pointer came back to.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Identifies one scheduled close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseTicket(u64);

/// Where a document click landed relative to the dropdown region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Inside,
    Outside,
    /// Target is not a DOM node or the region is not mounted
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownController {
    state: DropdownState,
    pending: Option<CloseTicket>,
    issued: u64,
}

impl DropdownController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    pub fn pending_close(&self) -> Option<CloseTicket> {
        self.pending
    }

    /// Revokes the pending close, if any. Safe to call repeatedly.
    pub fn cancel_close(&mut self) -> Option<CloseTicket> {
        self.pending.take()
    }

    pub fn pointer_enter(&mut self) {
        self.cancel_close();
        self.state = DropdownState::Open;
    }

    /// Schedules a close. Replaces any ticket handed out before.
    pub fn pointer_leave(&mut self) -> CloseTicket {
        self.issued += 1;
        let ticket = CloseTicket(self.issued);
        self.pending = Some(ticket);
        ticket
    }

    /// Timer callback. Closes only if `ticket` is still the pending one.
    pub fn deadline_elapsed(&mut self, ticket: CloseTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.state = DropdownState::Closed;
        true
    }

    /// Trigger button click, bypasses hover intent.
    pub fn toggle(&mut self) {
        self.cancel_close();
        self.state = match self.state {
            DropdownState::Open => DropdownState::Closed,
            DropdownState::Closed => DropdownState::Open,
        };
    }

    /// Document-level click. Returns `true` if it closed the panel.
    pub fn document_click(&mut self, target: ClickTarget) -> bool {
        if self.state == DropdownState::Closed || target != ClickTarget::Outside {
            return false;
        }
        self.close();
        true
    }

    /// A link inside the panel was followed.
    pub fn select_item(&mut self) {
        self.close();
    }

    pub fn close(&mut self) {
        self.cancel_close();
        self.state = DropdownState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Manual clock standing in for the browser timer queue.
    struct FakeTimers {
        now: u32,
        delay: u32,
        queue: Vec<(u32, CloseTicket)>,
    }

    impl FakeTimers {
        fn new(delay: u32) -> Self {
            Self {
                now: 0,
                delay,
                queue: Vec::new(),
            }
        }

        fn leave(&mut self, dropdown: &mut DropdownController) {
            let ticket = dropdown.pointer_leave();
            self.queue.push((self.now + self.delay, ticket));
        }

        fn advance(&mut self, ms: u32, dropdown: &mut DropdownController) {
            self.now += ms;
            let now = self.now;
            let (due, rest): (Vec<_>, Vec<_>) =
                self.queue.drain(..).partition(|(at, _)| *at <= now);
            self.queue = rest;
            for (_, ticket) in due {
                dropdown.deadline_elapsed(ticket);
            }
        }
    }

    #[test]
    fn test_starts_closed() {
        let dropdown = DropdownController::new();
        assert_eq!(dropdown.state(), DropdownState::Closed);
        assert_eq!(dropdown.pending_close(), None);
    }

    #[test]
    fn test_hover_scenario_with_150ms_delay() {
        let mut dropdown = DropdownController::new();
        let mut timers = FakeTimers::new(150);

        dropdown.pointer_enter();
        timers.leave(&mut dropdown);

        timers.advance(100, &mut dropdown);
        assert!(dropdown.is_open());

        timers.advance(50, &mut dropdown);
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.pending_close(), None);
    }

    #[test]
    fn test_reentry_before_delay_keeps_open() {
        let mut dropdown = DropdownController::new();
        let mut timers = FakeTimers::new(120);

        dropdown.pointer_enter();
        timers.leave(&mut dropdown);
        timers.advance(60, &mut dropdown);
        dropdown.pointer_enter();
        timers.advance(500, &mut dropdown);

        assert!(dropdown.is_open());
    }

    #[test]
    fn test_waiting_past_delay_closes() {
        let mut dropdown = DropdownController::new();
        let mut timers = FakeTimers::new(120);

        dropdown.pointer_enter();
        timers.leave(&mut dropdown);
        timers.advance(121, &mut dropdown);

        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_revoked_ticket_never_closes() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter();
        let stale = dropdown.pointer_leave();
        dropdown.pointer_enter();

        assert!(!dropdown.deadline_elapsed(stale));
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_only_latest_ticket_is_live() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter();
        let first = dropdown.pointer_leave();
        let second = dropdown.pointer_leave();

        assert_ne!(first, second);
        assert_eq!(dropdown.pending_close(), Some(second));
        assert!(!dropdown.deadline_elapsed(first));
        assert!(dropdown.is_open());
        assert!(dropdown.deadline_elapsed(second));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter();
        let ticket = dropdown.pointer_leave();

        assert_eq!(dropdown.cancel_close(), Some(ticket));
        assert_eq!(dropdown.cancel_close(), None);
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_toggle_is_immediate() {
        let mut dropdown = DropdownController::new();
        dropdown.toggle();
        assert!(dropdown.is_open());

        let ticket = dropdown.pointer_leave();
        dropdown.toggle();
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.pending_close(), None);
        assert!(!dropdown.deadline_elapsed(ticket));
    }

    #[test]
    fn test_outside_click_closes() {
        let mut dropdown = DropdownController::new();
        dropdown.toggle();
        assert!(dropdown.document_click(ClickTarget::Outside));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_inside_or_unknown_click_keeps_open() {
        let mut dropdown = DropdownController::new();
        dropdown.toggle();
        assert!(!dropdown.document_click(ClickTarget::Inside));
        assert!(!dropdown.document_click(ClickTarget::Unknown));
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_outside_click_when_closed_is_noop() {
        let mut dropdown = DropdownController::new();
        assert!(!dropdown.document_click(ClickTarget::Outside));
        assert_eq!(dropdown, DropdownController::new());
    }

    #[test]
    fn test_item_selection_closes() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter();
        dropdown.select_item();
        assert!(!dropdown.is_open());
    }
}
