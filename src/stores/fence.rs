use std::cell::Cell;
use std::rc::Rc;

/// Monotonic ticket counter for overlapping requests: only the most
/// recently issued ticket is allowed to apply its result to state, so a
/// slow earlier response can no longer overwrite a newer one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestFence {
    latest: Rc<Cell<u64>>,
}

impl RequestFence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_wins() {
        let fence = RequestFence::new();
        let first = fence.issue();
        let second = fence.issue();

        assert!(!fence.is_current(first));
        assert!(fence.is_current(second));
    }

    #[test]
    fn clones_share_the_same_counter() {
        let fence = RequestFence::new();
        let clone = fence.clone();

        let ticket = fence.issue();
        assert!(clone.is_current(ticket));

        let newer = clone.issue();
        assert!(!fence.is_current(ticket));
        assert!(fence.is_current(newer));
    }
}
