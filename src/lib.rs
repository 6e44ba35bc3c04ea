//! Folio is a headless engine for a single-page personal portfolio.
//!
//! It owns everything the page computes rather than draws: persisted
//! presentation preferences, translations, the static content tables, the
//! section visibility model that drives the decorative backdrop and spotlight,
//! entrance reveals, tab and dialog state, and the contact form. The current
//! state renders to a self-contained HTML document.
//!
//! - Build a [`SiteConfig`] and a [`PortfolioApp`]
//! - Feed it scroll offsets, pointer moves and clicks with timestamps
//! - Render with [`render_page`] or inspect a [`FrameSnapshot`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod app;
pub mod config;
pub mod content;
pub mod foundation;
pub mod i18n;
pub mod page;
pub mod prefs;
pub mod render;

pub use crate::animation::{
    ease::Ease,
    spring::{Spring, SpringValue},
    timer::{Scheduler, TimerHandle},
};
pub use crate::app::{FrameSnapshot, PortfolioApp};
pub use crate::config::SiteConfig;
pub use crate::foundation::core::{Millis, Point, Rect, Vec2, Viewport};
pub use crate::foundation::error::{FolioError, FolioResult};
pub use crate::i18n::bundle::Translations;
pub use crate::page::background::BackgroundVariant;
pub use crate::page::contact::{ContactDraft, Field, FieldErrors, SubmitOutcome, SubmitStatus};
pub use crate::page::section::SectionId;
pub use crate::prefs::{
    PreferenceState, Preferences,
    language::Language,
    media::SystemPreferences,
    storage::{JsonFileStore, KeyValueStore, MemoryStore},
    theme::Theme,
};
pub use crate::render::document::render_page;
