use super::state::CloseTicket;
use gloo_timers::callback::Timeout;

/// Owned handle to the mega-menu's delayed close.
///
/// Holds at most one browser timeout. Arming again, cancelling or dropping
/// the handle drops the previous `Timeout`, which clears it. A timeout that
/// already fired stays in the slot until then; whether it still closes the
/// menu is decided by its ticket, not by this handle.
#[derive(Default)]
pub struct CloseTimer {
    armed: Option<(CloseTicket, Timeout)>,
}

impl CloseTimer {
    pub fn arm(&mut self, ticket: CloseTicket, delay_ms: u32, on_fire: impl FnOnce() + 'static) {
        self.cancel();
        self.armed = Some((ticket, Timeout::new(delay_ms, on_fire)));
    }

    /// No-op when nothing is armed.
    pub fn cancel(&mut self) {
        if let Some((ticket, timeout)) = self.armed.take() {
            log::trace!("close timer {:?} cancelled", ticket);
            drop(timeout);
        }
    }
}
