use crate::{
    animation::timer::{Scheduler, TimerHandle},
    content::skills::{DemoKind, Skill, SkillCategory},
    foundation::error::FolioResult,
    page::tabs::{SkillTabs, skill_tabs},
};

/// Animated explainer drawn next to the selected skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoRenderer {
    Redux,
    WebSockets,
    Redis,
    Docker,
    Rest,
    /// The skill's own icon, pulsing.
    Generic,
}

impl DemoKind {
    pub fn renderer(self) -> DemoRenderer {
        match self {
            DemoKind::Redux => DemoRenderer::Redux,
            DemoKind::WebSockets => DemoRenderer::WebSockets,
            DemoKind::Redis => DemoRenderer::Redis,
            DemoKind::Docker => DemoRenderer::Docker,
            DemoKind::Rest => DemoRenderer::Rest,
            DemoKind::React
            | DemoKind::GraphQl
            | DemoKind::TypeScript
            | DemoKind::Git
            | DemoKind::Vue
            | DemoKind::NodeJs
            | DemoKind::Default => DemoRenderer::Generic,
        }
    }
}

impl DemoRenderer {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Redux => "redux",
            Self::WebSockets => "websockets",
            Self::Redis => "redis",
            Self::Docker => "docker",
            Self::Rest => "rest",
            Self::Generic => "generic",
        }
    }

    /// Caption translation key.
    pub fn caption_key(self) -> String {
        format!("skills.demos.{}", self.as_str())
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Redux => "Redux Data Flow",
            Self::WebSockets => "WebSocket Communication",
            Self::Redis => "Redis Cache Demo",
            Self::Docker => "docker-compose",
            Self::Rest => "REST API Flow",
            Self::Generic => "",
        }
    }

    /// Labels the animation highlights in turn.
    pub fn stages(self) -> &'static [&'static str] {
        match self {
            Self::Redux => &["Action", "Reducer", "Store", "UI"],
            Self::WebSockets => &["ping", "pong", "data", "ack"],
            Self::Redis => &["MISS", "HIT"],
            Self::Docker => &["API", "PostgreSQL", "Redis"],
            Self::Rest => &["GET /api/users", "JSON", "JSON", "200 OK"],
            Self::Generic => &[],
        }
    }

    /// Time each stage stays highlighted; `None` for static renderers.
    pub fn step_ms(self) -> Option<u64> {
        match self {
            Self::Redux => Some(400),
            Self::WebSockets => Some(1200),
            Self::Redis => Some(3000),
            Self::Docker => Some(300),
            Self::Rest => Some(1000),
            Self::Generic => None,
        }
    }
}

/// The demo of one skill, stepping through its stages on a timer.
#[derive(Clone, Debug)]
pub struct DemoPlayer {
    skill: &'static Skill,
    stage: usize,
    timer: Option<TimerHandle>,
}

impl DemoPlayer {
    fn start(
        skill: &'static Skill,
        scheduler: &mut Scheduler,
        animate: bool,
    ) -> FolioResult<Self> {
        let mut player = Self {
            skill,
            stage: 0,
            timer: None,
        };
        if animate {
            player.arm(scheduler)?;
        }
        Ok(player)
    }

    fn arm(&mut self, scheduler: &mut Scheduler) -> FolioResult<()> {
        if self.timer.is_none()
            && let Some(period) = self.renderer().step_ms()
        {
            self.timer = Some(scheduler.every(period)?);
        }
        Ok(())
    }

    fn disarm(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }

    pub fn skill(&self) -> &'static Skill {
        self.skill
    }

    pub fn renderer(&self) -> DemoRenderer {
        self.skill.demo.renderer()
    }

    pub fn stage(&self) -> usize {
        self.stage
    }

    pub fn stage_label(&self) -> Option<&'static str> {
        self.renderer().stages().get(self.stage).copied()
    }

    pub fn is_animating(&self) -> bool {
        self.timer.is_some()
    }

    fn dispatch(&mut self, fired: &[TimerHandle]) {
        let Some(own) = self.timer else {
            return;
        };
        let stages = self.renderer().stages().len().max(1);
        for _ in fired.iter().filter(|&&h| h == own) {
            self.stage = (self.stage + 1) % stages;
        }
    }
}

/// Skills section: category tabs, the selected skill and its demo with a
/// play/pause switch. Demos only animate while playing and motion is allowed.
#[derive(Debug)]
pub struct SkillLab {
    tabs: SkillTabs,
    playing: bool,
    player: Option<DemoPlayer>,
}

impl SkillLab {
    pub fn new(scheduler: &mut Scheduler, reduced_motion: bool) -> FolioResult<Self> {
        let mut lab = Self {
            tabs: skill_tabs(),
            playing: true,
            player: None,
        };
        lab.remount(scheduler, reduced_motion)?;
        Ok(lab)
    }

    pub fn tabs(&self) -> &SkillTabs {
        &self.tabs
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn player(&self) -> Option<&DemoPlayer> {
        self.player.as_ref()
    }

    fn remount(&mut self, scheduler: &mut Scheduler, reduced_motion: bool) -> FolioResult<()> {
        if let Some(mut old) = self.player.take() {
            old.disarm(scheduler);
        }
        if let Some(skill) = self.tabs.selected() {
            let animate = self.playing && !reduced_motion;
            self.player = Some(DemoPlayer::start(skill, scheduler, animate)?);
        }
        Ok(())
    }

    pub fn select_category(
        &mut self,
        category: SkillCategory,
        scheduler: &mut Scheduler,
        reduced_motion: bool,
    ) -> FolioResult<bool> {
        let before = self.tabs.selected().map(|s| s.id);
        if !self.tabs.select_category(category) {
            return Ok(false);
        }
        if self.tabs.selected().map(|s| s.id) != before {
            self.remount(scheduler, reduced_motion)?;
        }
        Ok(true)
    }

    pub fn select_skill(
        &mut self,
        id: &str,
        scheduler: &mut Scheduler,
        reduced_motion: bool,
    ) -> FolioResult<()> {
        self.tabs.select_item(id)?;
        self.remount(scheduler, reduced_motion)
    }

    pub fn toggle_playing(
        &mut self,
        scheduler: &mut Scheduler,
        reduced_motion: bool,
    ) -> FolioResult<()> {
        self.playing = !self.playing;
        tracing::debug!(playing = self.playing, "skill demo playback");
        self.sync_motion(scheduler, reduced_motion)
    }

    /// Re-arm or stop the demo timer after playback or motion settings change.
    pub fn sync_motion(&mut self, scheduler: &mut Scheduler, reduced_motion: bool) -> FolioResult<()> {
        let animate = self.playing && !reduced_motion;
        if let Some(player) = self.player.as_mut() {
            if animate {
                player.arm(scheduler)?;
            } else {
                player.disarm(scheduler);
            }
        }
        Ok(())
    }

    pub fn dispatch(&mut self, fired: &[TimerHandle]) {
        if let Some(player) = self.player.as_mut() {
            player.dispatch(fired);
        }
    }

    pub fn teardown(&mut self, scheduler: &mut Scheduler) {
        if let Some(player) = self.player.as_mut() {
            player.disarm(scheduler);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/demo.rs"]
mod tests;
