//! Color constants for the cabin palette.
//!
//! Warm timber and moss tones on cream; the same values are mirrored as
//! CSS custom properties in `styles.rs`.

#![allow(dead_code)]

// === TIMBER (Brand, Headings) ===
pub const BARK: &str = "#8B7355";
pub const BARK_DEEP: &str = "#6d5a43";

// === MOSS (Accents, Links) ===
pub const MOSS: &str = "#6B8E23";
pub const MOSS_DEEP: &str = "#55721c";

// === PAPER (Backgrounds) ===
pub const CREAM: &str = "#faf6f0";
pub const CREAM_SHADE: &str = "#f0e9dd";
pub const LINEN_BORDER: &str = "#e3dacb";

// === TEXT ===
pub const CHARCOAL: &str = "#2e2a26";
pub const TEXT_SECONDARY: &str = "#5c554c";
pub const TEXT_MUTED: &str = "#8a8177";

// === SEMANTIC ===
pub const SUCCESS: &str = "#4a7a3a";
pub const DANGER: &str = "#a23b2e";
