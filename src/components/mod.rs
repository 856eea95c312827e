//! UI components for the studio site.

pub mod contact_form;
pub mod form_fields;
pub mod lazy_image;
pub mod mobile_menu;
pub mod nav_header;
pub mod portfolio;
pub mod reveal;
pub mod site_footer;

pub use contact_form::ContactForm;
pub use lazy_image::LazyImage;
pub use mobile_menu::MobileMenu;
pub use nav_header::{NavHeader, NavLocation};
pub use portfolio::PortfolioSection;
pub use reveal::Reveal;
pub use site_footer::SiteFooter;
