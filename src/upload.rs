// ============================================================================
// UPLOAD ADAPTER STATE - shared by the local-parse and remote strategies
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// How long a success message stays on screen before auto-clearing.
pub const SUCCESS_AUTOCLEAR_MS: u32 = 5_000;

pub const SUCCESS_MESSAGE: &str = "CSV uploaded successfully";
pub const GENERIC_UPLOAD_ERROR: &str = "Failed to upload CSV";

/// Upload strategy, selected by configuration rather than by duplicating
/// the screen: parse the file in the browser, or ship it to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadMode {
    #[default]
    LocalParse,
    Remote,
}

impl UploadMode {
    pub fn from_config(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "remote" | "server" => UploadMode::Remote,
            _ => UploadMode::LocalParse,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

/// Adapter-local state machine. `attempt` is a monotonic ticket: every
/// completion and every auto-clear timer carries the ticket of the attempt
/// that produced it, so an expired timer from an earlier upload can never
/// wipe the status of a later one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadState {
    status: UploadStatus,
    in_flight: bool,
    attempt: u64,
}

impl UploadState {
    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start a new attempt. Returns its ticket, or `None` while a previous
    /// request is still outstanding (repeated submission is blocked).
    pub fn begin(&mut self) -> Option<u64> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.attempt += 1;
        Some(self.attempt)
    }

    pub fn succeed(&mut self, ticket: u64, message: impl Into<String>) {
        if ticket != self.attempt {
            return;
        }
        self.in_flight = false;
        self.status = UploadStatus::Success(message.into());
    }

    /// Error status persists until the next attempt begins.
    pub fn fail(&mut self, ticket: u64, message: impl Into<String>) {
        if ticket != self.attempt {
            return;
        }
        self.in_flight = false;
        self.status = UploadStatus::Error(message.into());
    }

    /// Local-parse failures are logged but never shown, so that path ends
    /// its attempt without touching the visible status.
    pub fn finish_silently(&mut self, ticket: u64) {
        if ticket == self.attempt {
            self.in_flight = false;
        }
    }

    /// Timer callback for the success auto-clear.
    pub fn clear_success(&mut self, ticket: u64) {
        if ticket == self.attempt && matches!(self.status, UploadStatus::Success(_)) {
            self.status = UploadStatus::Idle;
        }
    }
}

/// Shared handle to the live adapter state. The change handler, each
/// spawned completion and the auto-clear timer all hold clones of the same
/// cell, so every transition applies to the current value. A transition
/// computed from the value some earlier render observed would re-run an
/// already-finished attempt and hit the ticket guard as a no-op.
#[derive(Debug, Clone, Default)]
pub struct UploadStateCell {
    inner: Rc<RefCell<UploadState>>,
}

impl UploadStateCell {
    /// Start a new attempt. Returns its ticket and a snapshot for the view,
    /// or `None` while a previous request is still outstanding.
    pub fn begin(&self) -> Option<(u64, UploadState)> {
        let mut state = self.inner.borrow_mut();
        let ticket = state.begin()?;
        Some((ticket, state.clone()))
    }

    pub fn succeed(&self, ticket: u64, message: impl Into<String>) -> UploadState {
        let mut state = self.inner.borrow_mut();
        state.succeed(ticket, message);
        state.clone()
    }

    pub fn fail(&self, ticket: u64, message: impl Into<String>) -> UploadState {
        let mut state = self.inner.borrow_mut();
        state.fail(ticket, message);
        state.clone()
    }

    pub fn finish_silently(&self, ticket: u64) -> UploadState {
        let mut state = self.inner.borrow_mut();
        state.finish_silently(ticket);
        state.clone()
    }

    pub fn clear_success(&self, ticket: u64) -> UploadState {
        let mut state = self.inner.borrow_mut();
        state.clear_success(ticket);
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_is_selected_by_configuration() {
        assert_eq!(UploadMode::from_config("local"), UploadMode::LocalParse);
        assert_eq!(UploadMode::from_config("Remote"), UploadMode::Remote);
        assert_eq!(UploadMode::from_config("server"), UploadMode::Remote);
        assert_eq!(UploadMode::from_config("anything-else"), UploadMode::LocalParse);
    }

    #[test]
    fn success_then_auto_clear_returns_to_idle() {
        let mut state = UploadState::default();
        let ticket = state.begin().expect("first attempt starts");
        state.succeed(ticket, SUCCESS_MESSAGE);
        assert_eq!(state.status(), &UploadStatus::Success(SUCCESS_MESSAGE.into()));
        assert!(!state.in_flight());

        // Simulated 5s timer firing.
        state.clear_success(ticket);
        assert_eq!(state.status(), &UploadStatus::Idle);
    }

    #[test]
    fn error_persists_until_next_attempt() {
        let mut state = UploadState::default();
        let ticket = state.begin().unwrap();
        state.fail(ticket, "detail from server");
        assert_eq!(state.status(), &UploadStatus::Error("detail from server".into()));

        // A clear event never wipes an error.
        state.clear_success(ticket);
        assert_eq!(state.status(), &UploadStatus::Error("detail from server".into()));

        // The next attempt is allowed and owns a fresh ticket.
        assert!(state.begin().is_some());
    }

    #[test]
    fn repeated_submission_is_blocked_while_in_flight() {
        let mut state = UploadState::default();
        let ticket = state.begin().unwrap();
        assert!(state.begin().is_none());

        state.succeed(ticket, SUCCESS_MESSAGE);
        assert!(state.begin().is_some());
    }

    #[test]
    fn expired_timer_from_an_older_attempt_is_ignored() {
        let mut state = UploadState::default();
        let first = state.begin().unwrap();
        state.succeed(first, SUCCESS_MESSAGE);

        let second = state.begin().unwrap();
        state.succeed(second, "second upload done");

        // First upload's 5s timer fires late: it must not clear the newer
        // upload's status.
        state.clear_success(first);
        assert_eq!(state.status(), &UploadStatus::Success("second upload done".into()));

        state.clear_success(second);
        assert_eq!(state.status(), &UploadStatus::Idle);
    }

    #[test]
    fn stale_completion_does_not_override_a_newer_attempt() {
        let mut state = UploadState::default();
        let first = state.begin().unwrap();
        state.fail(first, "network down");

        let second = state.begin().unwrap();
        // Late resolution of the first request.
        state.succeed(first, SUCCESS_MESSAGE);
        assert!(state.in_flight(), "second attempt is still outstanding");

        state.succeed(second, SUCCESS_MESSAGE);
        assert_eq!(state.status(), &UploadStatus::Success(SUCCESS_MESSAGE.into()));
    }

    #[test]
    fn cell_clones_share_one_live_state() {
        let cell = UploadStateCell::default();

        // Handler side begins the attempt...
        let handler = cell.clone();
        let (ticket, snapshot) = handler.begin().expect("attempt starts");
        assert!(snapshot.in_flight());

        // ...and the async completion arrives through a different clone.
        // The failure must land on the live attempt instead of being
        // dropped by the ticket guard.
        let completion = cell.clone();
        let after = completion.fail(ticket, "HTTP 500: backend down");
        assert_eq!(
            after.status(),
            &UploadStatus::Error("HTTP 500: backend down".into())
        );
        assert!(!after.in_flight());
    }

    #[test]
    fn cell_success_autoclear_and_next_attempt_round_trip() {
        let cell = UploadStateCell::default();
        let (ticket, _) = cell.begin().expect("attempt starts");

        let after = cell.clone().succeed(ticket, SUCCESS_MESSAGE);
        assert_eq!(after.status(), &UploadStatus::Success(SUCCESS_MESSAGE.into()));

        // Timer clone fires the auto-clear.
        let cleared = cell.clone().clear_success(ticket);
        assert_eq!(cleared.status(), &UploadStatus::Idle);

        // The counter was not rolled back: a fresh attempt is permitted
        // and owns a newer ticket.
        let (next_ticket, _) = cell.begin().expect("next attempt starts");
        assert!(next_ticket > ticket);
    }

    #[test]
    fn silent_finish_keeps_status_untouched() {
        let mut state = UploadState::default();
        let ticket = state.begin().unwrap();
        state.finish_silently(ticket);
        assert_eq!(state.status(), &UploadStatus::Idle);
        assert!(!state.in_flight());
    }
}
