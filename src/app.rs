use crate::{
    animation::timer::Scheduler,
    config::SiteConfig,
    content::{services::ServiceCategory, skills::SkillCategory},
    foundation::{
        core::{Millis, Point},
        error::FolioResult,
    },
    i18n::bundle::Translations,
    page::{
        backdrop::{MountedBackdrop, ReadabilityOverlay, ScrollPaths, Shape},
        background::{BackgroundLayer, BackgroundSelector, BackgroundVariant},
        contact::{ContactForm, Field, SubmitOutcome},
        demo::SkillLab,
        header::Header,
        hero::HeroParallax,
        layout::PageLayout,
        modal::CloseReason,
        projects::ProjectsPanel,
        reveal::SectionReveal,
        section::SectionId,
        spotlight::{Spotlight, SpotlightFrame},
        tabs::{ServiceTabs, service_tabs},
        visibility::{ActiveSectionObserver, IntersectionSampler, ObserverConfig},
    },
    prefs::{Preferences, language::Language, media::SystemPreferences, storage::KeyValueStore},
};

/// Serializable view of the decorative layer at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    pub at_ms: u64,
    pub scroll_y: f64,
    pub active_section: SectionId,
    pub background: BackgroundVariant,
    pub background_target: BackgroundVariant,
    pub background_opacity: f64,
    pub spotlight: SpotlightFrame,
    pub revealed: Vec<SectionId>,
}

/// Application root. Owns the preference stores, translations, the timer
/// queue and every page controller, and is the only thing that mutates them.
pub struct PortfolioApp {
    config: SiteConfig,
    layout: PageLayout,
    prefs: Preferences,
    translations: Translations,
    scheduler: Scheduler,
    now: Millis,
    scroll_y: f64,
    background_sampler: IntersectionSampler,
    spotlight_sampler: IntersectionSampler,
    observer: ActiveSectionObserver,
    background: BackgroundSelector,
    backdrop: Option<MountedBackdrop>,
    scroll_paths: ScrollPaths,
    spotlight: Spotlight,
    reveals: Vec<SectionReveal>,
    header: Header,
    hero: HeroParallax,
    skills: SkillLab,
    services: ServiceTabs,
    projects: ProjectsPanel,
    contact: ContactForm,
    torn_down: bool,
}

impl std::fmt::Debug for PortfolioApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioApp")
            .field("now", &self.now)
            .field("scroll_y", &self.scroll_y)
            .field("active", &self.observer.active())
            .field("prefs", &self.prefs)
            .finish_non_exhaustive()
    }
}

impl PortfolioApp {
    #[tracing::instrument(skip_all)]
    pub fn new(
        config: SiteConfig,
        storage: Box<dyn KeyValueStore>,
        system: &SystemPreferences,
    ) -> FolioResult<Self> {
        config.validate()?;
        let layout = config.layout()?;

        let mut system = system.clone();
        if system.browser_language.is_none() {
            system.browser_language = Some(config.default_language.code().to_string());
        }
        let prefs = Preferences::init(storage, &system);
        let reduced = prefs.reduced_motion();

        let now = Millis::ZERO;
        let mut scheduler = Scheduler::new(now);
        let backdrop = MountedBackdrop::mount(
            BackgroundVariant::for_section(SectionId::Hero),
            config.seed,
            &mut scheduler,
            reduced,
        )?;
        let skills = SkillLab::new(&mut scheduler, reduced)?;
        let crossfade = if reduced { 0 } else { config.crossfade_ms };

        let mut app = Self {
            translations: Translations::embedded()?,
            spotlight: Spotlight::new(config.spotlight),
            background: BackgroundSelector::new(backdrop.variant(), crossfade),
            backdrop: Some(backdrop),
            scroll_paths: ScrollPaths::new()?,
            reveals: SectionId::ALL
                .into_iter()
                .map(|id| SectionReveal::new(id, now))
                .collect(),
            background_sampler: IntersectionSampler::new(ObserverConfig::background()),
            spotlight_sampler: IntersectionSampler::new(ObserverConfig::spotlight()),
            observer: ActiveSectionObserver::new(),
            header: Header::new(),
            hero: HeroParallax::new(),
            skills,
            services: service_tabs(),
            projects: ProjectsPanel::new(),
            contact: ContactForm::default(),
            scheduler,
            now,
            scroll_y: 0.0,
            layout,
            prefs,
            config,
            torn_down: false,
        };
        app.observe()?;
        Ok(app)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn language(&self) -> Language {
        self.prefs.language()
    }

    /// Translate `key` in the current language.
    pub fn t(&self, key: &str) -> String {
        self.translations.t(self.language(), key)
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn active_section(&self) -> SectionId {
        self.observer.active()
    }

    pub fn background(&self) -> &BackgroundSelector {
        &self.background
    }

    pub fn background_layer(&self) -> BackgroundLayer {
        self.background.layer(self.now)
    }

    pub fn backdrop_shapes(&self) -> Vec<Shape> {
        self.backdrop
            .as_ref()
            .map(|b| b.shapes(self.now, self.layout.viewport(), self.prefs.reduced_motion()))
            .unwrap_or_default()
    }

    pub fn scroll_paths(&self) -> &ScrollPaths {
        &self.scroll_paths
    }

    pub fn spotlight(&self) -> &Spotlight {
        &self.spotlight
    }

    pub fn spotlight_frame(&self) -> SpotlightFrame {
        self.spotlight.frame(self.prefs.reduced_motion())
    }

    pub fn overlay(&self) -> ReadabilityOverlay {
        ReadabilityOverlay::new(self.prefs.high_contrast(), self.prefs.reduced_motion())
    }

    pub fn reveal(&self, section: SectionId) -> &SectionReveal {
        &self.reveals[section.order()]
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    pub fn hero(&self) -> &HeroParallax {
        &self.hero
    }

    pub fn skills(&self) -> &SkillLab {
        &self.skills
    }

    pub fn services(&self) -> &ServiceTabs {
        &self.services
    }

    pub fn projects(&self) -> &ProjectsPanel {
        &self.projects
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Scroll the page to `scroll_y` at time `now`. Ignored while a dialog
    /// holds the scroll lock.
    #[tracing::instrument(skip(self))]
    pub fn scroll_to(&mut self, scroll_y: f64, now: Millis) -> FolioResult<()> {
        if self.torn_down {
            return Ok(());
        }
        if self.projects.locks_scroll() {
            tracing::debug!("scroll ignored while the case study is open");
            return self.tick(now);
        }
        self.scroll_y = self.layout.clamp_scroll(scroll_y);
        self.tick(now)?;
        self.observe()
    }

    fn observe(&mut self) -> FolioResult<()> {
        let viewport = self.layout.viewport();
        let entries = self.background_sampler.sample(&self.layout, self.scroll_y);
        if let Some(section) = self.observer.observe(&entries) {
            self.background.select(section, self.now);
            self.sync_backdrop()?;
        }

        let entries = self.spotlight_sampler.sample(&self.layout, self.scroll_y);
        self.spotlight.observe(
            &entries,
            viewport,
            self.scroll_y,
            self.layout.scroll_height(),
        );

        for reveal in &mut self.reveals {
            let rect = self.layout.client_rect(reveal.section(), self.scroll_y);
            reveal.observe(rect, viewport, self.now);
        }

        self.scroll_paths
            .set_progress(self.layout.scroll_progress(self.scroll_y));
        Ok(())
    }

    /// Advance timers, springs and transitions to `now`. Time never moves
    /// backwards.
    pub fn tick(&mut self, now: Millis) -> FolioResult<()> {
        if self.torn_down || now < self.now {
            return Ok(());
        }
        let dt = now.since(self.now) as f64 / 1000.0;
        self.now = now;
        let reduced = self.prefs.reduced_motion();

        let fired = self.scheduler.advance(now);
        if !fired.is_empty() {
            if let Some(backdrop) = self.backdrop.as_mut() {
                backdrop.dispatch(&fired);
            }
            self.skills.dispatch(&fired);
            self.contact.dispatch(&fired, &mut self.scheduler);
        }

        self.background.tick(now);
        self.sync_backdrop()?;
        self.spotlight.step(dt, reduced);
        self.hero.step(dt);
        self.scroll_paths.step(dt, reduced);
        self.projects.tick(now);
        Ok(())
    }

    /// Mount the generator for the variant the selector currently shows.
    fn sync_backdrop(&mut self) -> FolioResult<()> {
        let shown = self.background.shown();
        if self.backdrop.as_ref().is_some_and(|b| b.variant() == shown) {
            return Ok(());
        }
        self.remount_backdrop(shown)
    }

    fn remount_backdrop(&mut self, variant: BackgroundVariant) -> FolioResult<()> {
        if let Some(old) = self.backdrop.take() {
            old.unmount(&mut self.scheduler);
        }
        self.backdrop = Some(MountedBackdrop::mount(
            variant,
            self.config.seed,
            &mut self.scheduler,
            self.prefs.reduced_motion(),
        )?);
        Ok(())
    }

    /// Re-apply motion-dependent settings after the reduced-motion value may
    /// have changed.
    fn apply_motion(&mut self, was_reduced: bool) -> FolioResult<()> {
        let reduced = self.prefs.reduced_motion();
        if reduced == was_reduced {
            return Ok(());
        }
        self.background
            .set_duration_ms(if reduced { 0 } else { self.config.crossfade_ms });
        self.remount_backdrop(self.background.shown())?;
        self.skills.sync_motion(&mut self.scheduler, reduced)
    }

    pub fn toggle_theme(&mut self) {
        self.prefs.toggle_theme();
    }

    pub fn toggle_high_contrast(&mut self) {
        self.prefs.toggle_high_contrast();
    }

    pub fn toggle_reduced_motion(&mut self) -> FolioResult<()> {
        let was = self.prefs.reduced_motion();
        self.prefs.toggle_reduced_motion();
        self.apply_motion(was)
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) -> FolioResult<()> {
        let was = self.prefs.reduced_motion();
        self.prefs.set_reduced_motion(enabled);
        self.apply_motion(was)
    }

    /// The platform reduced-motion media query changed.
    pub fn on_system_reduced_motion(&mut self, matches: bool) -> FolioResult<()> {
        let was = self.prefs.reduced_motion();
        self.prefs.on_system_reduced_motion(matches);
        self.apply_motion(was)
    }

    pub fn choose_language(&mut self, language: Language) {
        self.header.choose_language(language, &mut self.prefs);
    }

    /// Follow a nav link: close the drawer and scroll to the section.
    pub fn navigate(&mut self, section: SectionId, now: Millis) -> FolioResult<()> {
        let target = self.header.follow_link(section, &self.layout);
        self.scroll_to(target, now)
    }

    pub fn pointer_moved(&mut self, pointer: Point) {
        let hero = self.layout.client_rect(SectionId::Hero, self.scroll_y);
        self.hero
            .pointer_moved(pointer, hero, self.prefs.reduced_motion());
    }

    pub fn select_skill_category(&mut self, category: SkillCategory) -> FolioResult<bool> {
        let reduced = self.prefs.reduced_motion();
        self.skills
            .select_category(category, &mut self.scheduler, reduced)
    }

    pub fn select_skill(&mut self, id: &str) -> FolioResult<()> {
        let reduced = self.prefs.reduced_motion();
        self.skills.select_skill(id, &mut self.scheduler, reduced)
    }

    pub fn toggle_demo_playing(&mut self) -> FolioResult<()> {
        let reduced = self.prefs.reduced_motion();
        self.skills.toggle_playing(&mut self.scheduler, reduced)
    }

    pub fn select_service_category(&mut self, category: ServiceCategory) -> bool {
        self.services.select_category(category)
    }

    pub fn select_service(&mut self, id: &str) -> FolioResult<()> {
        self.services.select_item(id).map(|_| ())
    }

    pub fn open_project(&mut self, id: &str, now: Millis) -> FolioResult<()> {
        self.tick(now)?;
        self.projects
            .open(id, now, self.prefs.reduced_motion())
    }

    pub fn close_project(&mut self, reason: CloseReason, now: Millis) -> FolioResult<bool> {
        self.tick(now)?;
        Ok(self
            .projects
            .close(reason, now, self.prefs.reduced_motion()))
    }

    /// Keyboard input routed to whichever dialog is open.
    pub fn key(&mut self, key: &str, now: Millis) -> FolioResult<bool> {
        self.tick(now)?;
        Ok(self.projects.key(key, now, self.prefs.reduced_motion()))
    }

    pub fn set_contact_field(&mut self, field: Field, value: impl Into<String>) {
        self.contact.set_field(field, value);
    }

    pub fn submit_contact(&mut self, now: Millis) -> FolioResult<SubmitOutcome> {
        self.tick(now)?;
        Ok(self.contact.submit(&mut self.scheduler))
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let layer = self.background_layer();
        FrameSnapshot {
            at_ms: self.now.0,
            scroll_y: self.scroll_y,
            active_section: self.active_section(),
            background: layer.variant,
            background_target: self.background.target(),
            background_opacity: layer.opacity,
            spotlight: self.spotlight_frame(),
            revealed: self
                .reveals
                .iter()
                .filter(|r| r.is_triggered())
                .map(|r| r.section())
                .collect(),
        }
    }

    /// Stop every timer and observer. The app is inert afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if let Some(backdrop) = self.backdrop.take() {
            backdrop.unmount(&mut self.scheduler);
        }
        self.skills.teardown(&mut self.scheduler);
        self.contact.teardown(&mut self.scheduler);
        self.observer.disconnect();
        let leftover = self.scheduler.active_count();
        if leftover > 0 {
            tracing::warn!(leftover, "timers still scheduled at teardown");
        }
        self.scheduler.cancel_all();
        self.torn_down = true;
        tracing::debug!("app torn down");
    }
}

#[cfg(test)]
#[path = "../tests/unit/app.rs"]
mod tests;
