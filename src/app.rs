use dioxus::prelude::*;
use tinycabin_core::{HttpFormEndpoint, RevealSet, SessionState};

use crate::context::{FormDelivery, LoadedImages, Reveals};
use crate::pages::{Contact, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page: hero, studio intro, portfolio
/// - `/contact` - Inquiry form and contact details
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/contact")]
    Contact {},
}

/// Root application component.
///
/// Provides global styles, the session state contexts, and routing.
/// The skip link and the keyboard-focus affordance live here so they
/// cover every page.
#[component]
pub fn App() -> Element {
    // Page-interaction state, constructed once per page load
    let session: Signal<SessionState> = use_signal(SessionState::new);
    let reveals: Signal<RevealSet> = use_signal(RevealSet::new);
    let loaded_images: Signal<RevealSet> = use_signal(RevealSet::new);
    let mut delivery: Signal<Option<HttpFormEndpoint>> = use_signal(|| None);

    use_context_provider(|| session);
    use_context_provider(|| Reveals(reveals));
    use_context_provider(|| LoadedImages(loaded_images));
    use_context_provider(|| FormDelivery(delivery));

    // Wire up the form endpoint once, if startup accepted the config.
    // Without it the page stays a static document with the form degraded.
    use_effect(move || match crate::site_config() {
        Some(config) => {
            delivery.set(Some(HttpFormEndpoint::new(config.form_endpoint.clone())));
        }
        None => {
            tracing::warn!("No valid form endpoint; contact form disabled");
        }
    });

    // Focus outlines only for keyboard users: Tab sets the class,
    // pointer use clears it.
    let mut tabbing = use_signal(|| false);

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: if tabbing() { "app-shell user-is-tabbing" } else { "app-shell" },
            onkeydown: move |e| {
                if e.key() == Key::Tab {
                    tabbing.set(true);
                }
            },
            onmousedown: move |_| tabbing.set(false),

            a { class: "skip-link", href: "#main-content", "Skip to main content" }

            Router::<Route> {}
        }
    }
}
