//! Deferred image loading.
//!
//! Images render with a flat placeholder until the visibility watcher
//! reports them, then the real source is assigned. Once loaded an image
//! keeps its source for the rest of the session.

use dioxus::prelude::*;

use crate::context::use_loaded_images;

/// Neutral placeholder shown before the real source is assigned.
const PLACEHOLDER_SRC: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' \
     viewBox='0 0 4 3'%3E%3Crect width='4' height='3' fill='%23e8e2d8'/%3E%3C/svg%3E";

#[derive(Props, Clone, PartialEq)]
pub struct LazyImageProps {
    /// Stable element id the visibility watcher reports against
    pub id: String,
    /// The deferred (real) source
    pub src: String,
    pub alt: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn LazyImage(props: LazyImageProps) -> Element {
    let loaded = use_loaded_images().read().contains(&props.id);
    let src = if loaded {
        props.src.clone()
    } else {
        PLACEHOLDER_SRC.to_string()
    };

    rsx! {
        img {
            id: "{props.id}",
            class: props.class.as_deref().unwrap_or(""),
            src: "{src}",
            alt: "{props.alt}",
            "data-deferred": "true",
        }
    }
}
