//! Portfolio Section
//!
//! Collapsible project list. Exactly one or zero projects expanded at a
//! time; clicking the expanded one collapses it. Details stay in the
//! DOM collapsed so the print stylesheet can expand every project.

use dioxus::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::reveal::Reveal;
use crate::context::use_session;

/// One portfolio entry.
pub struct Project {
    pub title: &'static str,
    pub services: &'static str,
    pub year: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
    pub image: &'static str,
}

/// The studio's selected work, newest first.
pub const PROJECTS: &[Project] = &[
    Project {
        title: "Hearthside Coffee Roasters",
        services: "Brand identity, packaging",
        year: "2025",
        summary: "A warm, woodcut-inspired identity for a small-batch roastery.",
        details: &[
            "Hearthside came to us with great beans and a forgettable label. We built \
             an identity around the ritual of the first morning cup: a woodcut hearth \
             mark, a burnt-orange and cream palette, and bags that read like a \
             fireside story.",
            "The rebrand carried through twelve SKUs, shipping boxes, and the \
             roastery's street signage.",
        ],
        image: "https://images.unsplash.com/photo-1447933601403-0c6688de566e?w=1200",
    },
    Project {
        title: "Fernline Trail Co.",
        services: "Web design, illustration",
        year: "2024",
        summary: "An illustrated trail-guide site for a Pacific Northwest outfitter.",
        details: &[
            "Fernline's guides know every switchback between Hood and Rainier; their \
             old site knew none of them. We drew a set of topographic illustrations \
             and built a guide-first site where every route gets its own hand-inked \
             elevation card.",
        ],
        image: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=1200",
    },
    Project {
        title: "Juniper & Salt",
        services: "Brand identity, web design",
        year: "2024",
        summary: "Identity and site for a coastal supper club that moves with the tide.",
        details: &[
            "A restaurant with no fixed address needs a brand that travels light. We \
             gave Juniper & Salt a tide-chart wordmark, menus typeset like shipping \
             manifests, and a one-page site that always answers the only question \
             that matters: where is dinner this month?",
        ],
        image: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=1200",
    },
    Project {
        title: "Quiet Hours Press",
        services: "Packaging, illustration",
        year: "2023",
        summary: "Jacket and slipcase design for a letterpress poetry series.",
        details: &[
            "Quiet Hours prints poetry in editions of two hundred. We designed a \
             slipcase system that turns a shelf of the series into a single quiet \
             landscape, each spine carrying one strip of the scene.",
        ],
        image: "https://images.unsplash.com/photo-1457369804613-52c61a468e7d?w=1200",
    },
];

/// Collapsible project list with reveal animation per card
#[component]
pub fn PortfolioSection() -> Element {
    let mut session = use_session();
    let expanded = session().expanded_project;

    rsx! {
        section { id: "work", class: "portfolio-section",
            Reveal { id: "reveal-work-header".to_string(),
                h2 { class: "section-title", "Selected Work" }
                p { class: "section-intro",
                    "A few projects we are proud of. Click any of them for the longer story."
                }
            }

            div { class: "project-list",
                for (index, project) in PROJECTS.iter().enumerate() {
                    Reveal {
                        id: format!("reveal-project-{index}"),
                        class: "project".to_string(),

                        article {
                            class: if expanded == Some(index) { "project-card project-card--expanded" } else { "project-card" },

                            button {
                                class: "project-summary",
                                "aria-expanded": if expanded == Some(index) { "true" } else { "false" },
                                onclick: move |_| session.write().toggle_project(index),

                                LazyImage {
                                    id: format!("project-image-{index}"),
                                    src: project.image.to_string(),
                                    alt: format!("{} - {}", project.title, project.services),
                                    class: "project-image".to_string(),
                                }

                                div { class: "project-heading",
                                    h3 { class: "project-title", "{project.title}" }
                                    p { class: "project-meta", "{project.services} · {project.year}" }
                                    p { class: "project-blurb", "{project.summary}" }
                                }
                            }

                            // Collapsed via CSS rather than left out of the
                            // DOM: print styles expand every project.
                            div {
                                class: if expanded == Some(index) { "project-details project-details--open" } else { "project-details" },
                                for paragraph in project.details.iter() {
                                    p { class: "project-paragraph", "{paragraph}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
