//! Browser-side observers bridged over the eval channel.
//!
//! The webview owns scroll offsets and element visibility, so these
//! hooks install small scripts that report events back through
//! `dioxus.send`; all state transitions stay on the Rust side in
//! `tinycabin-core`. Each page calls the hooks on mount; re-installing
//! an observer is harmless because the core reveal set is idempotent.

use dioxus::document;
use dioxus::prelude::*;
use tinycabin_core::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};

use crate::context::{use_loaded_images, use_reveals, use_session};

const SCROLL_JS: &str = r#"
const offset = () => window.scrollY || document.documentElement.scrollTop || 0;
const report = () => dioxus.send(offset());
window.addEventListener('scroll', report, { passive: true, capture: true });
report();
"#;

/// Track the vertical scroll offset.
///
/// The script reports once immediately on install, so a page restored
/// already-scrolled renders the nav correctly without waiting for a
/// scroll event.
pub fn use_scroll_tracking() {
    let mut session = use_session();
    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(SCROLL_JS);
            while let Ok(offset) = eval.recv::<f64>().await {
                session.write().record_scroll(offset);
            }
        });
    });
}

fn reveal_script() -> String {
    format!(
        r#"
const options = {{ threshold: {threshold}, rootMargin: '0px 0px -{margin}px 0px' }};
const observer = new IntersectionObserver((entries) => {{
  for (const entry of entries) {{
    if (entry.isIntersecting && entry.target.id) {{
      dioxus.send([entry.target.id, Math.max(entry.intersectionRatio, {threshold})]);
    }}
  }}
}}, options);
document.querySelectorAll('.reveal').forEach((el) => observer.observe(el));
"#,
        threshold = REVEAL_THRESHOLD,
        margin = REVEAL_BOTTOM_MARGIN_PX,
    )
}

/// Watch elements flagged for reveal animation.
///
/// Reports flow into the one-way [`tinycabin_core::RevealSet`]; once an
/// element is revealed it never reverts, however often the observer
/// fires.
pub fn use_reveal_observer() {
    let mut reveals = use_reveals();
    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(&reveal_script());
            while let Ok((id, ratio)) = eval.recv::<(String, f64)>().await {
                reveals.write().report(&id, ratio);
            }
        });
    });
}

const DEFERRED_IMAGE_JS: &str = r#"
const observer = new IntersectionObserver((entries) => {
  for (const entry of entries) {
    if (entry.isIntersecting && entry.target.id) {
      dioxus.send(entry.target.id);
    }
  }
});
document.querySelectorAll('[data-deferred]').forEach((el) => observer.observe(el));
"#;

/// Watch images with a deferred source and assign the real source the
/// first time each one scrolls into view.
pub fn use_deferred_images() {
    let mut loaded = use_loaded_images();
    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(DEFERRED_IMAGE_JS);
            while let Ok(id) = eval.recv::<String>().await {
                loaded.write().report(&id, 1.0);
            }
        });
    });
}
