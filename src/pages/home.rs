//! Landing page - hero, studio introduction, and the portfolio.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation, PortfolioSection, Reveal, SiteFooter};
use crate::observers::{use_deferred_images, use_reveal_observer, use_scroll_tracking};

#[component]
pub fn Home() -> Element {
    use_scroll_tracking();
    use_reveal_observer();
    use_deferred_images();

    rsx! {
        NavHeader { current: NavLocation::Home }

        main { id: "main-content", class: "page",
            section { class: "hero",
                Reveal { id: "reveal-hero".to_string(),
                    h1 { class: "hero-title", "Tiny Cabin Creative" }
                    p { class: "hero-tagline",
                        "Considered brand and web design from a very small studio in the woods."
                    }
                    div { class: "hero-actions",
                        Link { class: "btn btn--primary", to: Route::Contact {}, "Start a project" }
                        a { class: "btn btn--ghost", href: "#work", "See our work" }
                    }
                }
            }

            section { class: "about-section",
                Reveal { id: "reveal-about".to_string(),
                    h2 { class: "section-title", "A studio the size of a desk" }
                    p { class: "body-text",
                        "We are a two-person studio doing brand identity, web design, \
                         packaging, and illustration for small businesses that care about \
                         the details. Few projects at a time, every one of them loved."
                    }
                }
            }

            PortfolioSection {}

            section { class: "cta-section",
                Reveal { id: "reveal-cta".to_string(),
                    h2 { class: "section-title", "Have something brewing?" }
                    p { class: "body-text", "Tell us about it. We answer every inquiry ourselves." }
                    Link { class: "btn btn--primary", to: Route::Contact {}, "Get in touch" }
                }
            }
        }

        SiteFooter {}
    }
}
