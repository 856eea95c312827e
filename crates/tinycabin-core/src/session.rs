//! Page-interaction session state.
//!
//! One `SessionState` is constructed per page load and mutated only by
//! the event handlers wired up in the UI. Nothing here is persisted.
//!
//! Submission moves through `idle -> validating -> submitting ->
//! {succeeded, failed} -> idle`. Each accepted submission gets a fresh
//! [`SubmissionTicket`]; the ticket gates the deferred transitions
//! (completion, success-notice expiry) so a callback scheduled for an
//! older attempt can never clobber a newer one.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::form::InquiryForm;
use crate::validate::{missing_required, RequiredField};

/// Vertical offset beyond which the nav renders in its "scrolled" style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// How long the "thanks, we got it" notice stays up after a successful
/// submission.
pub const SUBMITTED_NOTICE: Duration = Duration::from_millis(5000);

/// Handle to one accepted submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    attempt: u64,
}

/// Why a submission did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Required fields empty or whitespace-only; no network call is made
    MissingFields(Vec<RequiredField>),
    /// A previous submission is still in flight
    InFlight,
}

/// UI state for the lifetime of a single page load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Vertical scroll offset exceeds [`SCROLL_THRESHOLD_PX`]
    pub scrolled: bool,
    /// Mobile navigation menu is expanded
    pub menu_open: bool,
    /// Index of the expanded portfolio item, if any
    pub expanded_project: Option<usize>,
    /// The contact form as currently filled in
    pub form: InquiryForm,
    submitting: bool,
    submitted: bool,
    attempt: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current vertical scroll offset. Called once at startup
    /// and on every scroll event.
    pub fn record_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD_PX;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu (pointer-down outside the nav container).
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Expand portfolio item `index`, collapsing whatever was expanded
    /// before; collapse it if it was already the expanded one.
    pub fn toggle_project(&mut self, index: usize) {
        if self.expanded_project == Some(index) {
            self.expanded_project = None;
        } else {
            self.expanded_project = Some(index);
        }
    }

    /// True while a submission request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// True during the success-notice window after a submission landed.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Validate and, if the required fields are present, enter the
    /// submitting state. Returns the ticket the eventual completion and
    /// notice-expiry calls must present.
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::InFlight);
        }
        let missing = missing_required(&self.form);
        if !missing.is_empty() {
            return Err(SubmitRejection::MissingFields(missing));
        }
        self.submitting = true;
        self.submitted = false;
        self.attempt += 1;
        Ok(SubmissionTicket {
            attempt: self.attempt,
        })
    }

    /// Resolve the in-flight submission. On success the form resets to
    /// its empty shape and the success notice goes up; on failure the
    /// visitor's input is preserved for retry. Stale tickets are ignored.
    pub fn finish_submission(&mut self, ticket: SubmissionTicket, delivered: bool) {
        if ticket.attempt != self.attempt {
            return;
        }
        self.submitting = false;
        if delivered {
            self.submitted = true;
            self.form = InquiryForm::default();
        }
    }

    /// Take the success notice down, unless a newer attempt has started
    /// since the ticket was issued.
    pub fn clear_submitted(&mut self, ticket: SubmissionTicket) {
        if ticket.attempt == self.attempt {
            self.submitted = false;
        }
    }
}

/// Seam between the async submission flow and wherever the state lives.
///
/// The desktop UI keeps the state in a reactive signal; tests keep it in
/// a mutex. Either way, each `with` call is one atomic state transition
/// on the single logical thread of the page.
pub trait SessionHandle {
    fn with<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R;
}

impl SessionHandle for Arc<Mutex<SessionState>> {
    fn with<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_tracks_the_threshold() {
        let mut state = SessionState::new();
        state.record_scroll(0.0);
        assert!(!state.scrolled);
        state.record_scroll(50.0);
        assert!(!state.scrolled);
        state.record_scroll(50.5);
        assert!(state.scrolled);
        state.record_scroll(10.0);
        assert!(!state.scrolled);
    }

    #[test]
    fn toggle_project_expands_exactly_one() {
        let mut state = SessionState::new();
        state.toggle_project(2);
        assert_eq!(state.expanded_project, Some(2));
        state.toggle_project(5);
        assert_eq!(state.expanded_project, Some(5));
        state.toggle_project(5);
        assert_eq!(state.expanded_project, None);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut state = SessionState::new();
        state.toggle_menu();
        assert!(state.menu_open);
        state.close_menu();
        assert!(!state.menu_open);
        state.close_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn begin_submission_rejects_empty_required_fields() {
        let mut state = SessionState::new();
        state.form.name = "Ada".into();

        let rejection = state.begin_submission().unwrap_err();
        assert!(matches!(rejection, SubmitRejection::MissingFields(_)));
        assert!(!state.is_submitting());
    }

    #[test]
    fn begin_submission_rejects_while_in_flight() {
        let mut state = SessionState::new();
        state.form = complete_form();

        state.begin_submission().unwrap();
        assert_eq!(
            state.begin_submission().unwrap_err(),
            SubmitRejection::InFlight
        );
    }

    #[test]
    fn success_resets_the_form_and_raises_the_notice() {
        let mut state = SessionState::new();
        state.form = complete_form();

        let ticket = state.begin_submission().unwrap();
        assert!(state.is_submitting());
        assert!(!state.is_submitted());

        state.finish_submission(ticket, true);
        assert!(!state.is_submitting());
        assert!(state.is_submitted());
        assert_eq!(state.form, InquiryForm::default());
    }

    #[test]
    fn failure_preserves_the_form() {
        let mut state = SessionState::new();
        state.form = complete_form();
        let filled = state.form.clone();

        let ticket = state.begin_submission().unwrap();
        state.finish_submission(ticket, false);

        assert!(!state.is_submitting());
        assert!(!state.is_submitted());
        assert_eq!(state.form, filled);
    }

    #[test]
    fn stale_ticket_cannot_clear_a_newer_notice() {
        let mut state = SessionState::new();
        state.form = complete_form();
        let first = state.begin_submission().unwrap();
        state.finish_submission(first, true);

        state.form = complete_form();
        let second = state.begin_submission().unwrap();
        state.finish_submission(second, true);
        assert!(state.is_submitted());

        // The 5s timer from the first attempt fires late.
        state.clear_submitted(first);
        assert!(state.is_submitted());

        state.clear_submitted(second);
        assert!(!state.is_submitted());
    }

    #[test]
    fn submitting_and_submitted_are_never_both_true() {
        let mut state = SessionState::new();
        state.form = complete_form();
        let first = state.begin_submission().unwrap();
        state.finish_submission(first, true);

        state.form = complete_form();
        state.begin_submission().unwrap();
        assert!(state.is_submitting());
        assert!(!state.is_submitted());
    }

    fn complete_form() -> InquiryForm {
        InquiryForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            budget: "10k-25k".into(),
            project_outline: "Rebrand for a roastery".into(),
            ..Default::default()
        }
    }
}
