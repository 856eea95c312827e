//! Visual theme: palette constants and global CSS.

pub mod colors;
pub mod styles;

pub use styles::GLOBAL_STYLES;
