//! Site Navigation Header
//!
//! Fixed header with the studio wordmark, page links, and the booking
//! link. Gains a solid background once the page scrolls past the
//! threshold. On narrow windows the links collapse behind the toggle
//! into [`MobileMenu`].

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::mobile_menu::MobileMenu;
use crate::context::use_session;

/// Navigation location within the site
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Contact,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Work",
            NavLocation::Contact => "Contact",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Contact => Route::Contact {},
        }
    }

    pub fn all() -> &'static [NavLocation] {
        &[NavLocation::Home, NavLocation::Contact]
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the site
    pub current: NavLocation,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mut session = use_session();
    let scrolled = session().scrolled;
    let menu_open = session().menu_open;

    let scheduling_url = crate::site_config().map(|c| c.scheduling_url.to_string());

    rsx! {
        header {
            class: if scrolled { "site-nav site-nav--scrolled" } else { "site-nav" },

            div { class: "site-nav-inner",
                Link { class: "nav-brand", to: Route::Home {}, "Tiny Cabin Creative" }

                nav { class: "nav-links",
                    for location in NavLocation::all() {
                        Link {
                            to: location.route(),
                            class: if *location == props.current { "nav-link nav-link--active" } else { "nav-link" },
                            "{location.display_name()}"
                        }
                    }

                    // Scheduling link opens in a new browsing context
                    if let Some(url) = scheduling_url.clone() {
                        Link {
                            to: url,
                            new_tab: true,
                            class: "nav-link nav-cta",
                            "Book a call"
                        }
                    }
                }

                // Menu toggle (visible below the mobile breakpoint).
                // Sits above the outside-click overlay so tapping it
                // while the menu is open toggles rather than "closes
                // from outside".
                button {
                    class: "nav-toggle",
                    "aria-label": "Toggle navigation menu",
                    "aria-expanded": "{menu_open}",
                    onclick: move |_| session.write().toggle_menu(),

                    span { class: "nav-toggle-bar" }
                    span { class: "nav-toggle-bar" }
                    span { class: "nav-toggle-bar" }
                }
            }
        }

        MobileMenu {
            open: menu_open,
            current: props.current,
            on_close: move |_| session.write().close_menu(),
        }
    }
}
