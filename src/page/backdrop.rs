//! Decorative background generators.
//!
//! Every generator describes its frame as a list of [`Shape`]s in viewport
//! pixels; the renderer turns them into SVG. Generators are pure functions of
//! the time since they were mounted, except [`TechGrid`], whose highlighted
//! nodes change on a scheduler tick.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen};

use crate::{
    animation::{
        ease::Ease,
        rng::DecorRng,
        spring::{Spring, SpringValue},
        timer::{Scheduler, TimerHandle},
    },
    foundation::{
        core::{Millis, Point, Vec2, Viewport},
        error::{FolioError, FolioResult},
    },
    page::background::BackgroundVariant,
};

/// Theme color a shape is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Accent,
    Background,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Paint {
    pub tone: Tone,
    pub alpha: f64,
}

impl Paint {
    pub const fn primary(alpha: f64) -> Self {
        Self {
            tone: Tone::Primary,
            alpha,
        }
    }

    pub const fn accent(alpha: f64) -> Self {
        Self {
            tone: Tone::Accent,
            alpha,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Soft blurred disc.
    Blob {
        center: Point,
        radius: f64,
        paint: Paint,
        blur: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    Ring {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
        width: f64,
        dash: Option<[f64; 2]>,
        dash_offset: f64,
    },
    /// Square grid of `cell` px tiles.
    Grid { cell: f64, paint: Paint },
    /// Diagonal hatching on a `cell` px tile, shifted by `offset`.
    Hatch {
        cell: f64,
        paint: Paint,
        offset: Vec2,
    },
    /// Fractal-noise film grain.
    Grain { seed: u64, opacity: f64 },
    /// Radial darkening towards the edges.
    Vignette { opacity: f64 },
}

/// A decorative background generator.
pub trait Backdrop {
    fn variant(&self) -> BackgroundVariant;

    /// Period of the generator's discrete state changes, if it has any.
    fn tick_period_ms(&self) -> Option<u64> {
        None
    }

    /// Called once per fired timer tick.
    fn on_tick(&mut self) {}

    fn shapes(&self, elapsed_ms: u64, viewport: Viewport, reduced_motion: bool) -> Vec<Shape>;
}

/// Position in a looping `[a, b, a]` keyframe track with the ease applied to
/// each half.
fn there_and_back(a: f64, b: f64, elapsed_ms: u64, period_ms: u64, ease: Ease) -> f64 {
    if period_ms == 0 {
        return a;
    }
    let t = (elapsed_ms % period_ms) as f64 / period_ms as f64;
    if t < 0.5 {
        lerp(a, b, ease.apply(t * 2.0))
    } else {
        lerp(b, a, ease.apply((t - 0.5) * 2.0))
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Loop phase in `[0, 1)` for a track that starts after `delay_ms`.
fn loop_phase(elapsed_ms: u64, delay_ms: u64, period_ms: u64) -> f64 {
    if period_ms == 0 || elapsed_ms < delay_ms {
        return 0.0;
    }
    ((elapsed_ms - delay_ms) % period_ms) as f64 / period_ms as f64
}

#[derive(Clone, Copy)]
enum Anchor {
    TopLeft,
    TopRight,
    BottomThird,
}

impl Anchor {
    /// Resting centre of a blob of diameter `size`.
    fn center(self, vp: Viewport, size: f64) -> Point {
        let r = size / 2.0;
        match self {
            Self::TopLeft => Point::new(r, r),
            Self::TopRight => Point::new(vp.width - r, r),
            Self::BottomThird => Point::new(vp.width / 3.0 + r, vp.height - r),
        }
    }
}

struct AuroraBlob {
    size: f64,
    anchor: Anchor,
    dx: (f64, f64),
    dy: (f64, f64),
    scale: (f64, f64),
    period_ms: u64,
    paint: Paint,
    blur: f64,
}

const AURORA_BLOBS: [AuroraBlob; 3] = [
    AuroraBlob {
        size: 800.0,
        anchor: Anchor::TopLeft,
        dx: (-0.10, 0.20),
        dy: (0.10, -0.15),
        scale: (1.0, 1.2),
        period_ms: 20_000,
        paint: Paint::primary(0.20),
        blur: 100.0,
    },
    AuroraBlob {
        size: 600.0,
        anchor: Anchor::TopRight,
        dx: (0.10, -0.20),
        dy: (-0.10, 0.20),
        scale: (1.1, 0.9),
        period_ms: 25_000,
        paint: Paint::accent(0.15),
        blur: 80.0,
    },
    AuroraBlob {
        size: 500.0,
        anchor: Anchor::BottomThird,
        dx: (0.0, 0.15),
        dy: (0.0, -0.10),
        scale: (1.0, 1.0),
        period_ms: 30_000,
        paint: Paint::primary(0.10),
        blur: 120.0,
    },
];

/// Three slow drifting colour blobs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Aurora;

impl Backdrop for Aurora {
    fn variant(&self) -> BackgroundVariant {
        BackgroundVariant::Aurora
    }

    fn shapes(&self, elapsed_ms: u64, vp: Viewport, reduced_motion: bool) -> Vec<Shape> {
        if reduced_motion {
            return vec![
                Shape::Blob {
                    center: Point::new(vp.width / 4.0 + 300.0, vp.height / 4.0 + 300.0),
                    radius: 300.0,
                    paint: Paint::primary(0.20),
                    blur: 64.0,
                },
                Shape::Blob {
                    center: Point::new(vp.width * 0.75 - 250.0, vp.height * 0.75 - 250.0),
                    radius: 250.0,
                    paint: Paint::accent(0.15),
                    blur: 64.0,
                },
            ];
        }

        AURORA_BLOBS
            .iter()
            .map(|b| {
                let at = |(from, to): (f64, f64)| {
                    there_and_back(from, to, elapsed_ms, b.period_ms, Ease::EaseInOut)
                };
                let anchor = b.anchor.center(vp, b.size);
                // Offsets are relative to the blob's own size.
                Shape::Blob {
                    center: anchor + Vec2::new(at(b.dx) * b.size, at(b.dy) * b.size),
                    radius: b.size / 2.0 * at(b.scale),
                    paint: b.paint,
                    blur: b.blur,
                }
            })
            .collect()
    }
}

pub const GRID_COLS: usize = 12;
pub const GRID_ROWS: usize = 8;
pub const GRID_TICK_MS: u64 = 1500;

/// A node lattice where a few random nodes light up every tick and are
/// joined into a loop.
#[derive(Clone, Debug)]
pub struct TechGrid {
    rng: DecorRng,
    /// Node indices in pick order, without duplicates.
    active: Vec<usize>,
}

impl TechGrid {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DecorRng::new(seed),
            active: Vec::new(),
        }
    }

    pub fn active_nodes(&self) -> &[usize] {
        &self.active
    }

    pub fn node_position(index: usize, vp: Viewport) -> Point {
        let col = index % GRID_COLS;
        let row = index / GRID_COLS;
        Point::new(
            col as f64 / (GRID_COLS - 1) as f64 * vp.width,
            row as f64 / (GRID_ROWS - 1) as f64 * vp.height,
        )
    }
}

impl Backdrop for TechGrid {
    fn variant(&self) -> BackgroundVariant {
        BackgroundVariant::Grid
    }

    fn tick_period_ms(&self) -> Option<u64> {
        Some(GRID_TICK_MS)
    }

    fn on_tick(&mut self) {
        self.active = self.rng.scatter(3, 7, GRID_COLS * GRID_ROWS);
    }

    fn shapes(&self, elapsed_ms: u64, vp: Viewport, reduced_motion: bool) -> Vec<Shape> {
        let mut out = vec![Shape::Grid {
            cell: 80.0,
            paint: Paint::primary(0.3 * 0.2),
        }];
        if reduced_motion {
            return out;
        }

        let pulse = there_and_back(3.0, 6.0, elapsed_ms, GRID_TICK_MS, Ease::EaseInOut);
        let glow = Ease::EaseOut.apply((elapsed_ms % GRID_TICK_MS) as f64 / 1000.0);
        for index in 0..GRID_COLS * GRID_ROWS {
            let center = Self::node_position(index, vp);
            if self.active.contains(&index) {
                out.push(Shape::Circle {
                    center,
                    radius: pulse,
                    paint: Paint::primary(pulse / 6.0),
                });
                out.push(Shape::Ring {
                    center,
                    radius: lerp(6.0, 30.0, glow),
                    paint: Paint::primary(0.8 * (1.0 - glow)),
                });
            } else {
                out.push(Shape::Circle {
                    center,
                    radius: 3.0,
                    paint: Paint::primary(0.3),
                });
            }
        }

        if self.active.len() > 1 {
            for (i, &a) in self.active.iter().enumerate() {
                let b = self.active[(i + 1) % self.active.len()];
                out.push(Shape::Line {
                    from: Self::node_position(a, vp),
                    to: Self::node_position(b, vp),
                    paint: Paint::primary(0.4 * 0.4),
                    width: 1.0,
                    dash: None,
                    dash_offset: 0.0,
                });
            }
        }
        out
    }
}

/// Film grain with diagonal hatching sliding underneath and a few floating
/// particles.
#[derive(Clone, Copy, Debug)]
pub struct Noise {
    seed: u64,
}

impl Noise {
    pub const DRIFT_MS: u64 = 20_000;

    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Backdrop for Noise {
    fn variant(&self) -> BackgroundVariant {
        BackgroundVariant::Noise
    }

    fn shapes(&self, elapsed_ms: u64, vp: Viewport, reduced_motion: bool) -> Vec<Shape> {
        let mut out = vec![Shape::Grain {
            seed: self.seed,
            opacity: 0.3,
        }];
        if reduced_motion {
            return out;
        }

        let shift = there_and_back(-0.5, -0.25, elapsed_ms, Self::DRIFT_MS, Ease::Linear);
        out.push(Shape::Hatch {
            cell: 60.0,
            paint: Paint::primary(0.5 * 0.2),
            offset: Vec2::new(shift * vp.width, shift * vp.height),
        });

        for i in 0..8u32 {
            let period = 4000 + u64::from(i) * 500;
            let delay = u64::from(i) * 300;
            let t = loop_phase(elapsed_ms, delay, period);
            let rise = there_and_back(0.0, -30.0, (t * period as f64) as u64, period, Ease::EaseInOut);
            let alpha = there_and_back(0.2, 0.6, (t * period as f64) as u64, period, Ease::EaseInOut);
            out.push(Shape::Circle {
                center: Point::new(
                    vp.width * (10.0 + f64::from(i) * 12.0) / 100.0,
                    vp.height * (20.0 + f64::from(i % 3) * 25.0) / 100.0 + rise,
                ),
                radius: 2.0,
                paint: Paint::primary(alpha),
            });
        }

        out.push(Shape::Vignette {
            opacity: there_and_back(0.3, 0.5, elapsed_ms, 8000, Ease::EaseInOut),
        });
        out
    }
}

/// Two dashed rails with dots travelling in opposite directions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Paths;

impl Paths {
    const LEFT_DOT_MS: u64 = 8000;
    const RIGHT_DOT_MS: u64 = 10_000;
}

impl Backdrop for Paths {
    fn variant(&self) -> BackgroundVariant {
        BackgroundVariant::Path
    }

    fn shapes(&self, elapsed_ms: u64, vp: Viewport, reduced_motion: bool) -> Vec<Shape> {
        let rail = |x: f64, paint: Paint, dash: [f64; 2]| Shape::Line {
            from: Point::new(x, 0.0),
            to: Point::new(x, vp.height),
            paint,
            width: 2.0,
            dash: Some(dash),
            dash_offset: 0.0,
        };
        let left = vp.width * 0.2;
        let right = vp.width * 0.8;

        if reduced_motion {
            return vec![
                rail(left, Paint::primary(0.3 * 0.2), [8.0, 8.0]),
                rail(right, Paint::accent(0.2 * 0.2), [8.0, 8.0]),
            ];
        }

        let mut out = vec![
            rail(left, Paint::primary(0.4), [8.0, 8.0]),
            rail(right, Paint::accent(0.3), [12.0, 6.0]),
            Shape::Line {
                from: Point::new(vp.width / 2.0, 0.0),
                to: Point::new(vp.width / 2.0, vp.height),
                paint: Paint::primary(0.2 * 0.3),
                width: 1.0,
                dash: Some([4.0, 4.0]),
                dash_offset: -16.0 * loop_phase(elapsed_ms, 0, 2000),
            },
            Shape::Circle {
                center: Point::new(left, loop_phase(elapsed_ms, 0, Self::LEFT_DOT_MS) * vp.height),
                radius: 4.0,
                paint: Paint::primary(1.0),
            },
            Shape::Circle {
                center: Point::new(
                    right,
                    (1.0 - loop_phase(elapsed_ms, 0, Self::RIGHT_DOT_MS)) * vp.height,
                ),
                radius: 3.0,
                paint: Paint::accent(1.0),
            },
        ];

        for (i, top) in [15.0, 35.0, 55.0, 75.0, 95.0].into_iter().enumerate() {
            let local = (loop_phase(elapsed_ms, i as u64 * 400, 2000) * 2000.0) as u64;
            out.push(Shape::Circle {
                center: Point::new(left, vp.height * top / 100.0),
                radius: 4.0 * there_and_back(1.0, 1.5, local, 2000, Ease::EaseInOut),
                paint: Paint::primary(there_and_back(0.3, 0.8, local, 2000, Ease::EaseInOut)),
            });
        }

        for top in [25.0, 50.0, 75.0] {
            let y = vp.height * top / 100.0;
            out.push(Shape::Line {
                from: Point::new(left, y),
                to: Point::new(right, y),
                paint: Paint::primary(0.3 * 0.15),
                width: 1.0,
                dash: Some([4.0, 8.0]),
                dash_offset: 0.0,
            });
        }
        out
    }
}

/// Build the generator for `variant`.
pub fn backdrop_for(variant: BackgroundVariant, seed: u64) -> Box<dyn Backdrop> {
    match variant {
        BackgroundVariant::Aurora => Box::new(Aurora),
        BackgroundVariant::Grid => Box::new(TechGrid::new(seed)),
        BackgroundVariant::Noise => Box::new(Noise::new(seed)),
        BackgroundVariant::Path => Box::new(Paths),
    }
}

/// The mounted background generator and the timer it owns.
pub struct MountedBackdrop {
    backdrop: Box<dyn Backdrop>,
    mounted_at: Millis,
    timer: Option<TimerHandle>,
}

impl std::fmt::Debug for MountedBackdrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedBackdrop")
            .field("variant", &self.backdrop.variant())
            .field("mounted_at", &self.mounted_at)
            .field("timer", &self.timer)
            .finish()
    }
}

impl MountedBackdrop {
    /// Mount `variant` and register its tick timer. No timer is registered
    /// under reduced motion since the static frame never changes.
    pub fn mount(
        variant: BackgroundVariant,
        seed: u64,
        scheduler: &mut Scheduler,
        reduced_motion: bool,
    ) -> FolioResult<Self> {
        let backdrop = backdrop_for(variant, seed);
        let timer = match backdrop.tick_period_ms() {
            Some(period) if !reduced_motion => Some(scheduler.every(period)?),
            _ => None,
        };
        tracing::debug!(variant = variant.as_str(), timer = timer.is_some(), "backdrop mounted");
        Ok(Self {
            backdrop,
            mounted_at: scheduler.now(),
            timer,
        })
    }

    pub fn variant(&self) -> BackgroundVariant {
        self.backdrop.variant()
    }

    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// Forward the fired timers that belong to this backdrop.
    pub fn dispatch(&mut self, fired: &[TimerHandle]) {
        let Some(own) = self.timer else {
            return;
        };
        for _ in fired.iter().filter(|&&h| h == own) {
            self.backdrop.on_tick();
        }
    }

    pub fn shapes(&self, now: Millis, vp: Viewport, reduced_motion: bool) -> Vec<Shape> {
        self.backdrop
            .shapes(now.since(self.mounted_at), vp, reduced_motion)
    }

    pub fn unmount(self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.timer {
            scheduler.cancel(handle);
        }
    }
}

struct CurveDef {
    d: &'static str,
    tone: Tone,
    alpha: f64,
    width: f64,
    dash_offset: (f64, f64),
}

const CURVES: [CurveDef; 4] = [
    CurveDef {
        d: "M -50 100 Q 200 50 400 150 T 800 100 T 1200 180 T 1600 120 T 2000 160",
        tone: Tone::Primary,
        alpha: 0.15,
        width: 2.0,
        dash_offset: (2000.0, 0.0),
    },
    CurveDef {
        d: "M -100 300 C 100 200 300 400 500 300 S 900 200 1100 350 S 1500 250 1800 320",
        tone: Tone::Accent,
        alpha: 0.12,
        width: 1.5,
        dash_offset: (2200.0, 200.0),
    },
    CurveDef {
        d: "M 0 500 Q 250 450 500 520 T 1000 480 T 1500 550 T 2000 500",
        tone: Tone::Primary,
        alpha: 0.10,
        width: 1.0,
        dash_offset: (1800.0, -200.0),
    },
    CurveDef {
        d: "M -50 700 C 150 650 350 750 550 680 S 950 720 1150 660 S 1550 700 1900 680",
        tone: Tone::Accent,
        alpha: 0.08,
        width: 1.5,
        dash_offset: (2000.0, 100.0),
    },
];

/// `(curve, loop seconds, radius, tone, alpha)`
const DOTS: [(usize, u64, f64, Tone, f64); 5] = [
    (0, 15, 4.0, Tone::Primary, 1.0),
    (0, 20, 3.0, Tone::Primary, 0.7),
    (1, 18, 3.0, Tone::Accent, 1.0),
    (2, 25, 2.0, Tone::Primary, 0.5),
    (3, 22, 3.0, Tone::Accent, 0.6),
];

/// Canvas the scroll curves are drawn in.
pub const SCROLL_PATHS_VIEWBOX: (f64, f64) = (1920.0, 1080.0);
pub const SCROLL_PATHS_DASH: f64 = 2000.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Curve {
    pub d: &'static str,
    pub paint: Paint,
    pub width: f64,
    /// `None` draws the curve solid.
    pub dash_offset: Option<f64>,
}

/// Curves that draw themselves in as the page scrolls, with dots looping
/// along them. Present under every section.
#[derive(Clone, Debug)]
pub struct ScrollPaths {
    curves: Vec<BezPath>,
    progress: SpringValue,
}

impl ScrollPaths {
    pub fn new() -> FolioResult<Self> {
        let curves = CURVES
            .iter()
            .map(|c| {
                BezPath::from_svg(c.d)
                    .map_err(|e| FolioError::content(format!("scroll curve: {e}")))
            })
            .collect::<FolioResult<Vec<_>>>()?;
        Ok(Self {
            curves,
            progress: SpringValue::new(Spring::SCROLL_PROGRESS, 0.0),
        })
    }

    pub fn set_progress(&mut self, progress: f64) {
        self.progress.set_target(progress.clamp(0.0, 1.0));
    }

    pub fn step(&mut self, dt_secs: f64, reduced_motion: bool) {
        if reduced_motion {
            self.progress.snap(self.progress.target());
        } else {
            self.progress.step(dt_secs);
        }
    }

    pub fn smoothed_progress(&self) -> f64 {
        self.progress.value()
    }

    pub fn curves(&self, reduced_motion: bool) -> Vec<Curve> {
        let p = self.progress.value();
        CURVES
            .iter()
            .map(|c| Curve {
                d: c.d,
                paint: Paint {
                    tone: c.tone,
                    alpha: c.alpha,
                },
                width: c.width,
                dash_offset: (!reduced_motion).then(|| lerp(c.dash_offset.0, c.dash_offset.1, p)),
            })
            .collect()
    }

    /// Dots along the curves `elapsed_ms` after mount, empty under reduced
    /// motion.
    pub fn dots(&self, elapsed_ms: u64, reduced_motion: bool) -> Vec<Shape> {
        if reduced_motion {
            return Vec::new();
        }
        DOTS.iter()
            .filter_map(|&(curve, secs, radius, tone, alpha)| {
                let t = loop_phase(elapsed_ms, 0, secs * 1000);
                let center = point_at_fraction(self.curves.get(curve)?, t)?;
                Some(Shape::Circle {
                    center,
                    radius,
                    paint: Paint { tone, alpha: alpha * 0.8 },
                })
            })
            .collect()
    }
}

/// Point at fraction `t` of the arc length of `path`.
fn point_at_fraction(path: &BezPath, t: f64) -> Option<Point> {
    const ACCURACY: f64 = 0.5;
    let segments: Vec<_> = path.segments().collect();
    let lengths: Vec<f64> = segments.iter().map(|s| s.arclen(ACCURACY)).collect();
    let total: f64 = lengths.iter().sum();
    let last = segments.last()?;
    let mut remaining = total * t.clamp(0.0, 1.0);
    for (seg, len) in segments.iter().zip(&lengths) {
        if remaining <= *len {
            let u = seg.inv_arclen(remaining, ACCURACY);
            return Some(seg.eval(u));
        }
        remaining -= len;
    }
    Some(last.end())
}

/// Scrim keeping text readable over the backdrop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ReadabilityOverlay {
    pub scrim_opacity: f64,
    /// Top and bottom edge fades use this plus 0.2.
    pub gradient_opacity: f64,
    /// Opacity of the backdrop blur layer; absent under reduced motion.
    pub blur_opacity: Option<f64>,
}

impl ReadabilityOverlay {
    pub fn new(high_contrast: bool, reduced_motion: bool) -> Self {
        let (scrim_opacity, gradient_opacity, blur) = if high_contrast {
            (0.7, 0.5, 0.3)
        } else {
            (0.45, 0.3, 0.15)
        };
        Self {
            scrim_opacity,
            gradient_opacity,
            blur_opacity: (!reduced_motion).then_some(blur),
        }
    }

    pub fn edge_opacity(&self) -> f64 {
        self.gradient_opacity + 0.2
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/backdrop.rs"]
mod tests;
