//! Contact page - the inquiry form and other ways to reach the studio.

use dioxus::prelude::*;

use crate::components::{ContactForm, NavHeader, NavLocation, Reveal, SiteFooter};
use crate::observers::{use_reveal_observer, use_scroll_tracking};

#[component]
pub fn Contact() -> Element {
    use_scroll_tracking();
    use_reveal_observer();

    let scheduling_url = crate::site_config().map(|c| c.scheduling_url.to_string());

    rsx! {
        NavHeader { current: NavLocation::Contact }

        main { id: "main-content", class: "page",
            section { class: "contact-section",
                Reveal { id: "reveal-contact-header".to_string(),
                    h1 { class: "section-title", "Let's make something" }
                    p { class: "body-text",
                        "The more you can tell us up front, the better our first \
                         conversation will be. Required fields are marked with *."
                    }
                }

                div { class: "contact-layout",
                    Reveal { id: "reveal-contact-form".to_string(), class: "contact-main".to_string(),
                        ContactForm {}
                    }

                    aside { class: "contact-aside",
                        h2 { class: "aside-title", "Prefer to talk?" }
                        if let Some(url) = scheduling_url {
                            p { class: "body-text",
                                Link { class: "btn btn--ghost", to: url, new_tab: true,
                                    "Book an intro call"
                                }
                            }
                        }
                        p { class: "body-text",
                            "Or email "
                            a { href: "mailto:hello@tinycabin.studio", "hello@tinycabin.studio" }
                        }
                    }
                }
            }
        }

        SiteFooter {}
    }
}
