//! Form submission - transport and the async flow around it.
//!
//! One outbound call: POST the JSON-serialized inquiry form to the
//! configured endpoint. Success is the transport-level status being in
//! the 2xx range; the response body is never interpreted, and a
//! transport failure is treated the same as a non-success status.

use std::future::Future;

use tokio::time::sleep;
use url::Url;

use crate::error::{SiteError, SiteResult};
use crate::form::InquiryForm;
use crate::session::{SessionHandle, SubmissionTicket, SubmitRejection, SUBMITTED_NOTICE};
use crate::validate::RequiredField;

/// Where a completed inquiry form can be delivered.
pub trait FormEndpoint {
    fn deliver(&self, form: &InquiryForm) -> impl Future<Output = SiteResult<()>>;
}

/// The real form endpoint: an HTTP POST target.
#[derive(Debug, Clone)]
pub struct HttpFormEndpoint {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpFormEndpoint {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl FormEndpoint for HttpFormEndpoint {
    async fn deliver(&self, form: &InquiryForm) -> SiteResult<()> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(form)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SiteError::Rejected(status.as_u16()))
        }
    }
}

/// How a submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the listed fields are missing and no network
    /// call was made
    Rejected(Vec<RequiredField>),
    /// A previous attempt is still in flight
    InFlight,
    /// The endpoint accepted the form; the success notice is up and the
    /// caller should schedule [`expire_submitted_notice`] with this ticket
    Delivered(SubmissionTicket),
    /// Non-success status or transport failure; the visitor's input is
    /// preserved for retry
    Failed,
}

/// Drive one full submission attempt against the session state.
///
/// The page stays responsive while the request is outstanding: the only
/// state held across the await is the ticket, and every transition goes
/// through the handle.
pub async fn submit_form<H, E>(session: &H, endpoint: &E) -> SubmitOutcome
where
    H: SessionHandle,
    E: FormEndpoint,
{
    let begun = session.with(|state| {
        state
            .begin_submission()
            .map(|ticket| (ticket, state.form.clone()))
    });

    let (ticket, form) = match begun {
        Ok(begun) => begun,
        Err(SubmitRejection::MissingFields(missing)) => {
            return SubmitOutcome::Rejected(missing);
        }
        Err(SubmitRejection::InFlight) => return SubmitOutcome::InFlight,
    };

    match endpoint.deliver(&form).await {
        Ok(()) => {
            tracing::info!("Inquiry form delivered");
            session.with(|state| state.finish_submission(ticket, true));
            SubmitOutcome::Delivered(ticket)
        }
        Err(e) => {
            tracing::warn!("Inquiry form submission failed: {e}");
            session.with(|state| state.finish_submission(ticket, false));
            SubmitOutcome::Failed
        }
    }
}

/// Take the success notice down [`SUBMITTED_NOTICE`] after the attempt
/// identified by `ticket` landed. The clear is ticket-gated, so firing
/// late against a newer attempt is a no-op.
pub async fn expire_submitted_notice<H: SessionHandle>(session: &H, ticket: SubmissionTicket) {
    sleep(SUBMITTED_NOTICE).await;
    session.with(|state| state.clear_submitted(ticket));
}
