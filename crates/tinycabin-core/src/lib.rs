//! Tiny Cabin Creative - Core Library
//!
//! Page-interaction state for the studio site: navigation and menu
//! flags, portfolio expansion, the contact form with its submission
//! state machine, and one-way reveal tracking for scroll-triggered
//! animation. The UI crate owns rendering and event wiring; everything
//! with a state transition lives here, where it is testable without a
//! webview.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use tinycabin_core::{submit_form, HttpFormEndpoint, SessionState, SiteConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = SiteConfig::from_overrides(None, None).unwrap();
//!     let endpoint = HttpFormEndpoint::new(config.form_endpoint);
//!     let session = Arc::new(Mutex::new(SessionState::new()));
//!
//!     session.lock().form.name = "Ada".into();
//!     // ... fill in the rest, then:
//!     let outcome = submit_form(&session, &endpoint).await;
//!     println!("{outcome:?}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod reveal;
pub mod session;
pub mod submit;
pub mod validate;

// Re-exports
pub use config::{SiteConfig, DEFAULT_FORM_ENDPOINT, DEFAULT_SCHEDULING_URL};
pub use error::{SiteError, SiteResult};
pub use form::{InquiryForm, ProjectType};
pub use reveal::{RevealSet, REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};
pub use session::{
    SessionHandle, SessionState, SubmissionTicket, SubmitRejection, SCROLL_THRESHOLD_PX,
    SUBMITTED_NOTICE,
};
pub use submit::{expire_submitted_notice, submit_form, FormEndpoint, HttpFormEndpoint, SubmitOutcome};
pub use validate::{email_is_valid, is_present, missing_required, phone_is_valid, RequiredField};
