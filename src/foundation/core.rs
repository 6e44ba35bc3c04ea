use crate::foundation::error::{FolioError, FolioResult};

pub use kurbo::{Point, Rect, Vec2};

/// Monotonic timestamp in milliseconds since the page started.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub fn add_ms(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed since `earlier`, zero if `earlier` is in the future.
    pub fn since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

/// Visible browser viewport in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> FolioResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(FolioError::validation(
                "viewport width/height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Root box used for intersection sampling, shrunk vertically by `margin`
    /// (a fraction of the viewport height) on both top and bottom.
    pub fn root_box(self, margin: f64) -> Rect {
        let inset = self.height * margin.clamp(0.0, 0.5);
        Rect::new(0.0, inset, self.width, self.height - inset)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 900.0,
        }
    }
}
