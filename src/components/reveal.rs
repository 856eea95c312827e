//! Scroll-reveal wrapper.
//!
//! Children render inside a `.reveal` container: hidden and offset
//! 20px until the intersection watcher reports the element, then
//! `.animated` fades it in. The transition is one-way; scrolling back
//! out never hides a revealed element.

use dioxus::prelude::*;

use crate::context::use_reveals;

#[derive(Props, Clone, PartialEq)]
pub struct RevealProps {
    /// Stable element id the intersection watcher reports against
    pub id: String,
    /// Additional CSS classes for the container
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let reveals = use_reveals();
    let animated = reveals.read().contains(&props.id);

    let mut class = String::from(if animated { "reveal animated" } else { "reveal" });
    if let Some(extra) = props.class.as_deref() {
        class.push(' ');
        class.push_str(extra);
    }

    rsx! {
        div { id: "{props.id}", class: "{class}", {props.children} }
    }
}
