//! Mobile Navigation Menu
//!
//! Slide-down panel shown when the nav toggle is pressed on narrow
//! windows. A full-viewport overlay sits underneath the panel; any
//! pointer-down that lands on it counts as "outside the navigation"
//! and closes the menu. The panel and the toggle button are stacked
//! above the overlay, so their own clicks never reach it - no ambient
//! DOM traversal is needed to tell inside from outside.

use dioxus::prelude::*;

use crate::components::nav_header::NavLocation;

#[derive(Props, Clone, PartialEq)]
pub struct MobileMenuProps {
    /// Whether the menu is expanded
    pub open: bool,
    /// Current active location
    pub current: NavLocation,
    /// Callback when a pointer-down outside the menu (or a link choice)
    /// should close it
    pub on_close: EventHandler<()>,
}

#[component]
pub fn MobileMenu(props: MobileMenuProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let scheduling_url = crate::site_config().map(|c| c.scheduling_url.to_string());

    rsx! {
        div {
            class: "nav-overlay",
            onmousedown: move |_| props.on_close.call(()),
        }

        nav { class: "nav-menu nav-menu--open",
            for location in NavLocation::all() {
                Link {
                    to: location.route(),
                    class: if *location == props.current { "nav-menu-link nav-menu-link--active" } else { "nav-menu-link" },
                    onclick: move |_| props.on_close.call(()),
                    "{location.display_name()}"
                }
            }

            if let Some(url) = scheduling_url {
                Link {
                    to: url,
                    new_tab: true,
                    class: "nav-menu-link nav-menu-cta",
                    onclick: move |_| props.on_close.call(()),
                    "Book a call"
                }
            }
        }
    }
}
