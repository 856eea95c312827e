//! Site pages.

mod contact;
mod home;

pub use contact::Contact;
pub use home::Home;
