//! Site footer.

use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            p { class: "footer-line", "Tiny Cabin Creative" }
            p { class: "footer-line footer-muted",
                "Built with care from a very small cabin · "
                a { href: "mailto:hello@tinycabin.studio", "hello@tinycabin.studio" }
            }
        }
    }
}
