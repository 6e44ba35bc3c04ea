//! Static content tables.
//!
//! Every record is `'static` data: ids, translation-key fragments and display
//! metadata. Display strings live in the locale bundles and are looked up by
//! key at render time.

pub mod about;
pub mod contact;
pub mod experience;
pub mod languages;
pub mod nav;
pub mod projects;
pub mod services;
pub mod skills;
pub mod ticker;

#[cfg(test)]
#[path = "../tests/unit/content/tables.rs"]
mod tests;
