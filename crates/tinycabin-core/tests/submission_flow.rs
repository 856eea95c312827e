//! End-to-end tests for the submission state machine.
//!
//! Drives `submit_form` against a mock endpoint and verifies the
//! transitions the UI relies on: validation rejection without a network
//! call, success with form reset and notice expiry, failure with input
//! preserved, and the ticket guard on the notice timer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tinycabin_core::{
    expire_submitted_notice, submit_form, FormEndpoint, InquiryForm, RequiredField, SessionState,
    SiteError, SiteResult, SubmitOutcome, SUBMITTED_NOTICE,
};

/// Scriptable endpoint standing in for the form backend.
struct MockEndpoint {
    /// Status to answer with; 2xx means accepted
    status: u16,
    /// How long the endpoint takes to answer
    delay: Duration,
    calls: AtomicUsize,
}

impl MockEndpoint {
    fn accepting() -> Self {
        Self {
            status: 200,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    fn accepting_after(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::accepting()
        }
    }

    fn rejecting(status: u16) -> Self {
        Self {
            status,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FormEndpoint for MockEndpoint {
    async fn deliver(&self, _form: &InquiryForm) -> SiteResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if (200..300).contains(&self.status) {
            Ok(())
        } else {
            Err(SiteError::Rejected(self.status))
        }
    }
}

fn session_with(form: InquiryForm) -> Arc<Mutex<SessionState>> {
    let mut state = SessionState::new();
    state.form = form;
    Arc::new(Mutex::new(state))
}

fn complete_form() -> InquiryForm {
    InquiryForm {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        company: "Analytical Engines".into(),
        phone: "+1 (555) 123-4567".into(),
        budget: "10k-25k".into(),
        timeline: "This quarter".into(),
        project_outline: "Brand refresh and a small marketing site".into(),
        inspiration: "Warm, woodsy, unhurried".into(),
        hear_about: "A friend".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn missing_required_fields_never_reach_the_endpoint() {
    let mut form = complete_form();
    form.project_outline = "   ".into();
    let session = session_with(form);
    let endpoint = MockEndpoint::accepting();

    let outcome = submit_form(&session, &endpoint).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(vec![RequiredField::ProjectOutline])
    );
    assert_eq!(endpoint.calls(), 0);
    assert!(!session.lock().is_submitting());
}

#[tokio::test]
async fn successful_submission_resets_the_form() {
    let session = session_with(complete_form());
    let endpoint = MockEndpoint::accepting();

    let outcome = submit_form(&session, &endpoint).await;

    assert!(matches!(outcome, SubmitOutcome::Delivered(_)));
    assert_eq!(endpoint.calls(), 1);

    let state = session.lock().clone();
    assert!(state.is_submitted());
    assert!(!state.is_submitting());
    assert_eq!(state.form, InquiryForm::default());
}

#[tokio::test(start_paused = true)]
async fn success_notice_expires_after_five_seconds() {
    let session = session_with(complete_form());
    let endpoint = MockEndpoint::accepting();

    let ticket = match submit_form(&session, &endpoint).await {
        SubmitOutcome::Delivered(ticket) => ticket,
        other => panic!("expected Delivered, got {other:?}"),
    };
    assert!(session.lock().is_submitted());

    // Just short of the window the notice is still up.
    tokio::time::sleep(SUBMITTED_NOTICE - Duration::from_millis(1)).await;
    assert!(session.lock().is_submitted());

    expire_submitted_notice(&session, ticket).await;
    assert!(!session.lock().is_submitted());
}

#[tokio::test]
async fn rejected_status_preserves_the_form() {
    let filled = complete_form();
    let session = session_with(filled.clone());
    let endpoint = MockEndpoint::rejecting(500);

    let outcome = submit_form(&session, &endpoint).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(endpoint.calls(), 1);

    let state = session.lock().clone();
    assert!(!state.is_submitting());
    assert!(!state.is_submitted());
    assert_eq!(state.form, filled);
}

#[tokio::test]
async fn failed_attempt_can_be_retried() {
    let session = session_with(complete_form());

    let failing = MockEndpoint::rejecting(502);
    assert_eq!(submit_form(&session, &failing).await, SubmitOutcome::Failed);

    let accepting = MockEndpoint::accepting();
    let outcome = submit_form(&session, &accepting).await;
    assert!(matches!(outcome, SubmitOutcome::Delivered(_)));
    assert!(session.lock().is_submitted());
}

#[tokio::test(start_paused = true)]
async fn duplicate_triggers_submit_once_while_in_flight() {
    // Enter in a field and a click on the submit button can both fire
    // the submit handler; whichever lands second must bounce off the
    // in-flight attempt without reaching the endpoint.
    let session = session_with(complete_form());
    let endpoint = MockEndpoint::accepting_after(Duration::from_millis(200));

    let (first, second) = tokio::join!(
        submit_form(&session, &endpoint),
        submit_form(&session, &endpoint),
    );

    assert!(matches!(first, SubmitOutcome::Delivered(_)));
    assert_eq!(second, SubmitOutcome::InFlight);
    assert_eq!(endpoint.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn stale_notice_timer_does_not_clear_a_newer_attempt() {
    let session = session_with(complete_form());
    let endpoint = MockEndpoint::accepting();

    let first = match submit_form(&session, &endpoint).await {
        SubmitOutcome::Delivered(ticket) => ticket,
        other => panic!("expected Delivered, got {other:?}"),
    };

    // A second submission starts before the first notice timer fires.
    session.lock().form = complete_form();
    let second = match submit_form(&session, &endpoint).await {
        SubmitOutcome::Delivered(ticket) => ticket,
        other => panic!("expected Delivered, got {other:?}"),
    };
    assert!(session.lock().is_submitted());

    // The first timer fires late: its ticket is stale, nothing changes.
    expire_submitted_notice(&session, first).await;
    assert!(session.lock().is_submitted());

    // The second timer is the one that takes the notice down.
    expire_submitted_notice(&session, second).await;
    assert!(!session.lock().is_submitted());
}
