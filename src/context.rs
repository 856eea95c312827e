//! Shared state contexts for the studio site.
//!
//! The App component provides these once; every page and component gets
//! at the same session through `use_context`. Event handlers hold the
//! signal directly - there is no ambient DOM lookup anywhere.

use dioxus::prelude::*;
use tinycabin_core::{HttpFormEndpoint, RevealSet, SessionHandle, SessionState};

/// Reveal-animation state (element ids that have crossed the threshold).
#[derive(Clone, Copy)]
pub struct Reveals(pub Signal<RevealSet>);

/// Deferred-image state (image ids whose real source has been assigned).
#[derive(Clone, Copy)]
pub struct LoadedImages(pub Signal<RevealSet>);

/// The form endpoint, present once startup accepted the configuration.
#[derive(Clone, Copy)]
pub struct FormDelivery(pub Signal<Option<HttpFormEndpoint>>);

/// Hook to access the page session state.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Hook to access the reveal-animation set.
pub fn use_reveals() -> Signal<RevealSet> {
    use_context::<Reveals>().0
}

/// Hook to access the deferred-image set.
pub fn use_loaded_images() -> Signal<RevealSet> {
    use_context::<LoadedImages>().0
}

/// Hook to access the form endpoint, if one is configured.
pub fn use_form_delivery() -> Signal<Option<HttpFormEndpoint>> {
    use_context::<FormDelivery>().0
}

/// Adapter letting the core submission flow drive the reactive session
/// signal; each `with` call is one state transition and one re-render.
#[derive(Clone, Copy)]
pub struct UiSession(pub Signal<SessionState>);

impl SessionHandle for UiSession {
    fn with<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut signal = self.0;
        let mut state = signal.write();
        f(&mut *state)
    }
}
