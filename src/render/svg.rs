//! SVG output for the decorative layers.
//!
//! Colors are written out as concrete hex values from a [`Palette`] so the
//! documents stand alone and parse outside a browser.

use crate::{
    foundation::{core::Viewport, error::FolioResult},
    page::backdrop::{Curve, Paint, SCROLL_PATHS_DASH, SCROLL_PATHS_VIEWBOX, Shape, Tone},
    prefs::theme::Theme,
    render::html::{HtmlWriter, num},
};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
}

impl Palette {
    pub const DARK: Self = Self {
        primary: "#0dccf2",
        accent: "#a855f7",
        background: "#0b1120",
        foreground: "#e2e8f0",
    };
    pub const LIGHT: Self = Self {
        primary: "#0891b2",
        accent: "#7c3aed",
        background: "#f8fafc",
        foreground: "#0f172a",
    };
    pub const DARK_HIGH_CONTRAST: Self = Self {
        primary: "#22d3ee",
        accent: "#d8b4fe",
        background: "#000000",
        foreground: "#ffffff",
    };
    pub const LIGHT_HIGH_CONTRAST: Self = Self {
        primary: "#0e7490",
        accent: "#6d28d9",
        background: "#ffffff",
        foreground: "#000000",
    };

    pub fn for_prefs(theme: Theme, high_contrast: bool) -> Self {
        match (theme, high_contrast) {
            (Theme::Dark, false) => Self::DARK,
            (Theme::Light, false) => Self::LIGHT,
            (Theme::Dark, true) => Self::DARK_HIGH_CONTRAST,
            (Theme::Light, true) => Self::LIGHT_HIGH_CONTRAST,
        }
    }

    pub fn color(&self, tone: Tone) -> &'static str {
        match tone {
            Tone::Primary => self.primary,
            Tone::Accent => self.accent,
            Tone::Background => self.background,
        }
    }
}

/// Accumulates shapes and the `<defs>` they reference.
struct SvgCanvas {
    palette: Palette,
    width: f64,
    height: f64,
    /// Prefix for generated ids; several canvases share one document.
    prefix: &'static str,
    next_id: usize,
    defs: HtmlWriter,
    body: HtmlWriter,
}

impl SvgCanvas {
    fn new(palette: Palette, width: f64, height: f64, prefix: &'static str) -> Self {
        Self {
            palette,
            width,
            height,
            prefix,
            next_id: 0,
            defs: HtmlWriter::new(),
            body: HtmlWriter::new(),
        }
    }

    fn id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next_id);
        self.next_id += 1;
        id
    }

    fn fill(&self, paint: Paint) -> (&'static str, String) {
        (self.palette.color(paint.tone), num(paint.alpha.clamp(0.0, 1.0)))
    }

    fn full_rect(&mut self, attrs: &[(&str, &str)]) {
        let (w, h) = (num(self.width), num(self.height));
        let mut all = vec![("width", w.as_str()), ("height", h.as_str())];
        all.extend_from_slice(attrs);
        self.body.void("rect", &all);
    }

    fn shape(&mut self, shape: &Shape) {
        match *shape {
            Shape::Blob {
                center,
                radius,
                paint,
                blur,
            } => {
                let id = self.id();
                self.defs
                    .open(
                        "filter",
                        &[
                            ("id", &id),
                            ("x", "-50%"),
                            ("y", "-50%"),
                            ("width", "200%"),
                            ("height", "200%"),
                        ],
                    )
                    .void("feGaussianBlur", &[("stdDeviation", &num(blur / 2.0))])
                    .close();
                let (color, alpha) = self.fill(paint);
                self.body.void(
                    "circle",
                    &[
                        ("cx", &num(center.x)),
                        ("cy", &num(center.y)),
                        ("r", &num(radius.max(0.0))),
                        ("fill", color),
                        ("fill-opacity", &alpha),
                        ("filter", &format!("url(#{id})")),
                    ],
                );
            }
            Shape::Circle {
                center,
                radius,
                paint,
            } => {
                let (color, alpha) = self.fill(paint);
                self.body.void(
                    "circle",
                    &[
                        ("cx", &num(center.x)),
                        ("cy", &num(center.y)),
                        ("r", &num(radius.max(0.0))),
                        ("fill", color),
                        ("fill-opacity", &alpha),
                    ],
                );
            }
            Shape::Ring {
                center,
                radius,
                paint,
            } => {
                let (color, alpha) = self.fill(paint);
                self.body.void(
                    "circle",
                    &[
                        ("cx", &num(center.x)),
                        ("cy", &num(center.y)),
                        ("r", &num(radius.max(0.0))),
                        ("fill", "none"),
                        ("stroke", color),
                        ("stroke-opacity", &alpha),
                        ("stroke-width", "1.5"),
                    ],
                );
            }
            Shape::Line {
                from,
                to,
                paint,
                width,
                dash,
                dash_offset,
            } => {
                let (color, alpha) = self.fill(paint);
                let (x1, y1, x2, y2) = (num(from.x), num(from.y), num(to.x), num(to.y));
                let stroke_width = num(width);
                let mut attrs = vec![
                    ("x1", x1.as_str()),
                    ("y1", y1.as_str()),
                    ("x2", x2.as_str()),
                    ("y2", y2.as_str()),
                    ("stroke", color),
                    ("stroke-opacity", alpha.as_str()),
                    ("stroke-width", stroke_width.as_str()),
                ];
                let dasharray = dash.map(|[on, off]| format!("{} {}", num(on), num(off)));
                let offset = num(dash_offset);
                if let Some(dasharray) = dasharray.as_deref() {
                    attrs.push(("stroke-dasharray", dasharray));
                    attrs.push(("stroke-dashoffset", &offset));
                }
                self.body.void("line", &attrs);
            }
            Shape::Grid { cell, paint } => {
                let id = self.id();
                let (color, alpha) = self.fill(paint);
                let c = num(cell);
                self.defs
                    .open(
                        "pattern",
                        &[
                            ("id", &id),
                            ("width", &c),
                            ("height", &c),
                            ("patternUnits", "userSpaceOnUse"),
                        ],
                    )
                    .void(
                        "path",
                        &[
                            ("d", &format!("M {c} 0 L 0 0 0 {c}")),
                            ("fill", "none"),
                            ("stroke", color),
                            ("stroke-opacity", &alpha),
                            ("stroke-width", "1"),
                        ],
                    )
                    .close();
                self.full_rect(&[("fill", &format!("url(#{id})"))]);
            }
            Shape::Hatch {
                cell,
                paint,
                offset,
            } => {
                let id = self.id();
                let (color, alpha) = self.fill(paint);
                let c = num(cell);
                self.defs
                    .open(
                        "pattern",
                        &[
                            ("id", &id),
                            ("width", &c),
                            ("height", &c),
                            ("patternUnits", "userSpaceOnUse"),
                            (
                                "patternTransform",
                                &format!("translate({} {})", num(offset.x), num(offset.y)),
                            ),
                        ],
                    )
                    .void(
                        "path",
                        &[
                            ("d", &format!("M 0 {c} L {c} 0")),
                            ("stroke", color),
                            ("stroke-opacity", &alpha),
                            ("stroke-width", "1"),
                        ],
                    )
                    .close();
                self.full_rect(&[("fill", &format!("url(#{id})"))]);
            }
            Shape::Grain { seed, opacity } => {
                let id = self.id();
                self.defs
                    .open("filter", &[("id", &id)])
                    .void(
                        "feTurbulence",
                        &[
                            ("type", "fractalNoise"),
                            ("baseFrequency", "0.8"),
                            ("numOctaves", "4"),
                            ("stitchTiles", "stitch"),
                            ("seed", &(seed % 10_000).to_string()),
                        ],
                    )
                    .close();
                self.full_rect(&[
                    ("filter", &format!("url(#{id})")),
                    ("opacity", &num(opacity)),
                ]);
            }
            Shape::Vignette { opacity } => {
                let id = self.id();
                let background = self.palette.background;
                self.defs
                    .open(
                        "radialGradient",
                        &[("id", &id), ("cx", "50%"), ("cy", "50%"), ("r", "70%")],
                    )
                    .void(
                        "stop",
                        &[
                            ("offset", "0.5"),
                            ("stop-color", background),
                            ("stop-opacity", "0"),
                        ],
                    )
                    .void(
                        "stop",
                        &[
                            ("offset", "1"),
                            ("stop-color", background),
                            ("stop-opacity", "1"),
                        ],
                    )
                    .close();
                self.full_rect(&[
                    ("fill", &format!("url(#{id})")),
                    ("opacity", &num(opacity)),
                ]);
            }
        }
    }

    fn finish(self, class: &str, extra: &[(&str, &str)]) -> FolioResult<String> {
        let (w, h) = (num(self.width), num(self.height));
        let view_box = format!("0 0 {w} {h}");
        let mut attrs = vec![
            ("xmlns", SVG_NS),
            ("class", class),
            ("width", w.as_str()),
            ("height", h.as_str()),
            ("viewBox", view_box.as_str()),
            ("aria-hidden", "true"),
        ];
        attrs.extend_from_slice(extra);

        let defs = self.defs.finish()?;
        let body = self.body.finish()?;
        let mut svg = HtmlWriter::new();
        svg.open("svg", &attrs);
        if !defs.is_empty() {
            svg.open("defs", &[]).raw(&defs).close();
        }
        svg.raw(&body).close();
        svg.finish()
    }
}

/// Standalone SVG of one backdrop frame at viewport size.
pub fn backdrop_svg(shapes: &[Shape], viewport: Viewport, palette: Palette) -> FolioResult<String> {
    let mut canvas = SvgCanvas::new(palette, viewport.width, viewport.height, "bd");
    for shape in shapes {
        canvas.shape(shape);
    }
    canvas.finish("backdrop", &[])
}

/// Scroll-drawn curves plus their travelling dots, in the fixed curve canvas
/// scaled to cover the viewport.
pub fn scroll_paths_svg(curves: &[Curve], dots: &[Shape], palette: Palette) -> FolioResult<String> {
    let (w, h) = SCROLL_PATHS_VIEWBOX;
    let mut canvas = SvgCanvas::new(palette, w, h, "sp");
    let dash = num(SCROLL_PATHS_DASH);
    for curve in curves {
        let (color, alpha) = canvas.fill(curve.paint);
        let width = num(curve.width);
        let mut attrs = vec![
            ("d", curve.d),
            ("fill", "none"),
            ("stroke", color),
            ("stroke-opacity", alpha.as_str()),
            ("stroke-width", width.as_str()),
            ("stroke-linecap", "round"),
        ];
        let offset = curve.dash_offset.map(num);
        if let Some(offset) = offset.as_deref() {
            attrs.push(("stroke-dasharray", &dash));
            attrs.push(("stroke-dashoffset", offset));
        }
        canvas.body.void("path", &attrs);
    }
    for dot in dots {
        canvas.shape(dot);
    }
    canvas.finish("scroll-paths", &[("preserveAspectRatio", "xMidYMid slice")])
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
