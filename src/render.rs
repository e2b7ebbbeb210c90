//! Canvas rendering for points, the decision line, side labels and handles.
//!
//! Drawing goes through the small [`Surface`] trait so the same code paints
//! into an [`egui::Painter`] (via [`PainterSurface`]) or into a recorder in
//! tests. Rendering is stateless: every call redraws the whole surface.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};
use serde::{Deserialize, Serialize};

use crate::data::geometry::{classify, classify_xy, DecisionLine, Label, Point};
use crate::data::interaction::Viewport;

pub const POSITIVE_LABEL: &str = "Predicted (+)";
pub const NEGATIVE_LABEL: &str = "Predicted (-)";

/// Drawing primitives the renderer needs. Coordinates are surface-local
/// pixels with the origin at the top-left corner.
pub trait Surface {
    fn size(&self) -> Vec2;
    fn clear(&mut self, color: Color32);
    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke);
    fn line_segment(&mut self, from: Pos2, to: Pos2, stroke: Stroke);
    fn text(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32);
}

/// Pixel sizes used by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasMetrics {
    pub point_radius: f32,
    pub handle_radius: f32,
    pub line_width: f32,
    /// Perpendicular distance of the side labels from the line midpoint.
    pub label_offset: f32,
    pub label_font_size: f32,
    pub error_ring_width: f32,
    pub correct_ring_width: f32,
}

impl Default for CanvasMetrics {
    fn default() -> Self {
        Self {
            point_radius: 5.0,
            handle_radius: 8.0,
            line_width: 3.0,
            label_offset: 30.0,
            label_font_size: 12.0,
            error_ring_width: 2.0,
            correct_ring_width: 1.0,
        }
    }
}

/// Colors used on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPalette {
    pub background: Color32,
    pub positive_fill: Color32,
    pub negative_fill: Color32,
    pub false_positive_ring: Color32,
    pub false_negative_ring: Color32,
    pub correct_ring: Color32,
    pub line: Color32,
    pub label: Color32,
    pub handle: Color32,
}

impl CanvasPalette {
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(15, 23, 42),
            positive_fill: Color32::from_rgb(0x10, 0xb9, 0x81),
            negative_fill: Color32::from_rgb(0x3b, 0x82, 0xf6),
            false_positive_ring: Color32::from_rgb(0xf4, 0x3f, 0x5e),
            false_negative_ring: Color32::from_rgb(0xf5, 0x9e, 0x0b),
            correct_ring: Color32::from_rgba_unmultiplied(255, 255, 255, 77),
            line: Color32::from_rgb(0xf8, 0xfa, 0xfc),
            label: Color32::from_rgba_unmultiplied(255, 255, 255, 204),
            handle: Color32::WHITE,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(248, 250, 252),
            correct_ring: Color32::from_rgba_unmultiplied(0, 0, 0, 60),
            line: Color32::from_rgb(15, 23, 42),
            label: Color32::from_rgba_unmultiplied(0, 0, 0, 204),
            handle: Color32::from_rgb(30, 41, 59),
            ..Self::dark()
        }
    }
}

/// Everything [`render`] needs besides the session data.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasStyle {
    pub palette: CanvasPalette,
    pub metrics: CanvasMetrics,
    pub side_labels: bool,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            palette: CanvasPalette::dark(),
            metrics: CanvasMetrics::default(),
            side_labels: true,
        }
    }
}

/// Pixel positions of the two side labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideLabels {
    pub positive_at: Pos2,
    pub negative_at: Pos2,
}

fn to_px(p: [f64; 2], vp: &Viewport) -> Pos2 {
    let [x, y] = vp.denormalize(p);
    Pos2::new(x, y)
}

/// Place "Predicted (+)" / "Predicted (-)" on either side of the line.
///
/// A probe at `midpoint + offset * normal` is run through the classifier;
/// the positive label goes wherever the probe lands positive. Returns `None`
/// when the line has zero pixel length or the surface is empty.
pub fn side_labels(line: &DecisionLine, size: Vec2, offset: f32) -> Option<SideLabels> {
    let vp = Viewport::new(size.x, size.y);
    if vp.is_empty() {
        return None;
    }
    let p1 = to_px([line.x1, line.y1], &vp);
    let p2 = to_px([line.x2, line.y2], &vp);
    let d = p2 - p1;
    let len = d.length();
    if len <= f32::EPSILON || !len.is_finite() {
        return None;
    }
    let mid = p1 + d * 0.5;
    let n = Vec2::new(-d.y, d.x) / len * offset;
    let probe = vp.normalize(mid.x + n.x, mid.y + n.y);
    let (plus, minus) = match classify_xy(probe[0], probe[1], line) {
        Label::Positive => (mid + n, mid - n),
        Label::Negative => (mid - n, mid + n),
    };
    Some(SideLabels {
        positive_at: plus,
        negative_at: minus,
    })
}

/// Outline for one point given its prediction.
pub fn point_ring(actual: Label, predicted: Label, style: &CanvasStyle) -> Stroke {
    let pal = &style.palette;
    let m = &style.metrics;
    match (actual, predicted) {
        (Label::Negative, Label::Positive) => Stroke::new(m.error_ring_width, pal.false_positive_ring),
        (Label::Positive, Label::Negative) => Stroke::new(m.error_ring_width, pal.false_negative_ring),
        _ => Stroke::new(m.correct_ring_width, pal.correct_ring),
    }
}

/// Redraw the whole surface from `points` and `line`.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    line: &DecisionLine,
    style: &CanvasStyle,
) {
    let size = surface.size();
    let vp = Viewport::new(size.x, size.y);
    let pal = &style.palette;
    let m = &style.metrics;

    surface.clear(pal.background);

    for p in points {
        let fill = match p.actual {
            Label::Positive => pal.positive_fill,
            Label::Negative => pal.negative_fill,
        };
        let ring = point_ring(p.actual, classify(p, line), style);
        surface.circle(to_px([p.x, p.y], &vp), m.point_radius, fill, ring);
    }

    let p1 = to_px([line.x1, line.y1], &vp);
    let p2 = to_px([line.x2, line.y2], &vp);
    surface.line_segment(p1, p2, Stroke::new(m.line_width, pal.line));

    if style.side_labels {
        if let Some(labels) = side_labels(line, size, m.label_offset) {
            surface.text(labels.positive_at, POSITIVE_LABEL, m.label_font_size, pal.label);
            surface.text(labels.negative_at, NEGATIVE_LABEL, m.label_font_size, pal.label);
        }
    }

    for h in [p1, p2] {
        surface.circle(h, m.handle_radius, pal.handle, Stroke::NONE);
    }
}

/// [`Surface`] over an egui painter, offset to `rect.min`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn abs(&self, p: Pos2) -> Pos2 {
        self.rect.min + p.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn clear(&mut self, color: Color32) {
        self.painter
            .rect_filled(self.rect, egui::CornerRadius::ZERO, color);
    }

    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke) {
        self.painter.circle(self.abs(center), radius, fill, stroke);
    }

    fn line_segment(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter.line_segment([self.abs(from), self.abs(to)], stroke);
    }

    fn text(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32) {
        self.painter.text(
            self.abs(pos),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(font_size),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_skipped_for_degenerate_line() {
        let line = DecisionLine::new(0.5, 0.5, 0.5, 0.5);
        assert!(side_labels(&line, Vec2::new(400.0, 300.0), 30.0).is_none());
    }

    #[test]
    fn labels_skipped_for_non_finite_surface() {
        let size = Vec2::new(f32::INFINITY, 300.0);
        assert!(side_labels(&DecisionLine::default(), size, 30.0).is_none());
    }

    #[test]
    fn labels_skipped_for_empty_surface() {
        assert!(side_labels(&DecisionLine::default(), Vec2::ZERO, 30.0).is_none());
    }

    #[test]
    fn positive_label_sits_on_positive_side() {
        let size = Vec2::new(400.0, 400.0);
        for line in [
            DecisionLine::new(0.0, 1.0, 1.0, 0.0),
            DecisionLine::new(1.0, 0.0, 0.0, 1.0),
            DecisionLine::new(0.1, 0.5, 0.9, 0.5),
            DecisionLine::new(0.5, 0.9, 0.5, 0.1),
        ] {
            let l = side_labels(&line, size, 30.0).unwrap();
            let pos = [l.positive_at.x as f64 / 400.0, l.positive_at.y as f64 / 400.0];
            let neg = [l.negative_at.x as f64 / 400.0, l.negative_at.y as f64 / 400.0];
            assert_eq!(classify_xy(pos[0], pos[1], &line), Label::Positive);
            assert_eq!(classify_xy(neg[0], neg[1], &line), Label::Negative);
        }
    }

    #[test]
    fn rings_distinguish_error_types() {
        let style = CanvasStyle::default();
        let fp = point_ring(Label::Negative, Label::Positive, &style);
        let fn_ = point_ring(Label::Positive, Label::Negative, &style);
        let ok = point_ring(Label::Positive, Label::Positive, &style);
        assert_ne!(fp.color, fn_.color);
        assert_eq!(fp.width, 2.0);
        assert_eq!(ok.width, 1.0);
        assert_eq!(ok.color, style.palette.correct_ring);
    }
}
