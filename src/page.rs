//! Page controllers.
//!
//! Everything the browser would drive through scroll, pointer and timer
//! callbacks lives here as explicit state machines. None of them hold global
//! state: [`crate::app::PortfolioApp`] owns one of each and feeds them.

pub mod backdrop;
pub mod background;
pub mod contact;
pub mod demo;
pub mod header;
pub mod hero;
pub mod layout;
pub mod modal;
pub mod projects;
pub mod reveal;
pub mod section;
pub mod spotlight;
pub mod tabs;
pub mod visibility;
