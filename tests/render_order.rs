use boundaryplot::render::{render, CanvasStyle, Surface, NEGATIVE_LABEL, POSITIVE_LABEL};
use boundaryplot::{DecisionLine, Label, Point};
use egui::{Color32, Pos2, Stroke, Vec2};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Circle { center: Pos2, radius: f32, stroke: Stroke },
    Line { from: Pos2, to: Pos2 },
    Text { pos: Pos2, text: String },
}

struct RecordingSurface {
    size: Vec2,
    ops: Vec<Op>,
}

impl RecordingSurface {
    fn new(w: f32, h: f32) -> Self {
        Self {
            size: Vec2::new(w, h),
            ops: Vec::new(),
        }
    }

    fn texts(&self) -> Vec<(&str, Pos2)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { pos, text } => Some((text.as_str(), *pos)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }
    fn clear(&mut self, _color: Color32) {
        self.ops.push(Op::Clear);
    }
    fn circle(&mut self, center: Pos2, radius: f32, _fill: Color32, stroke: Stroke) {
        self.ops.push(Op::Circle { center, radius, stroke });
    }
    fn line_segment(&mut self, from: Pos2, to: Pos2, _stroke: Stroke) {
        self.ops.push(Op::Line { from, to });
    }
    fn text(&mut self, pos: Pos2, text: &str, _font_size: f32, _color: Color32) {
        self.ops.push(Op::Text {
            pos,
            text: text.to_string(),
        });
    }
}

fn points() -> Vec<Point> {
    vec![
        Point::new(0.7, 0.3, Label::Positive),
        Point::new(0.3, 0.7, Label::Negative),
    ]
}

#[test]
fn draw_order_is_clear_points_line_labels_handles() {
    let mut s = RecordingSurface::new(400.0, 200.0);
    let line = DecisionLine::new(0.0, 0.0, 1.0, 1.0);
    let style = CanvasStyle::default();
    render(&mut s, &points(), &line, &style);

    assert_eq!(s.ops.len(), 1 + 2 + 1 + 2 + 2, "{:#?}", s.ops);
    assert_eq!(s.ops[0], Op::Clear);
    assert!(matches!(s.ops[1], Op::Circle { center, .. } if center == Pos2::new(280.0, 60.0)));
    assert!(matches!(s.ops[2], Op::Circle { center, .. } if center == Pos2::new(120.0, 140.0)));
    assert_eq!(
        s.ops[3],
        Op::Line {
            from: Pos2::new(0.0, 0.0),
            to: Pos2::new(400.0, 200.0)
        }
    );
    assert!(matches!(s.ops[4], Op::Text { .. }));
    assert!(matches!(s.ops[5], Op::Text { .. }));
    let r = style.metrics.handle_radius;
    assert!(matches!(s.ops[6], Op::Circle { center, radius, .. } if center == Pos2::ZERO && radius == r));
    assert!(matches!(s.ops[7], Op::Circle { center, radius, .. } if center == Pos2::new(400.0, 200.0) && radius == r));
}

#[test]
fn correct_points_get_thin_rings() {
    let mut s = RecordingSurface::new(100.0, 100.0);
    let style = CanvasStyle::default();
    render(&mut s, &points(), &DecisionLine::new(0.0, 0.0, 1.0, 1.0), &style);
    for op in &s.ops[1..3] {
        let Op::Circle { stroke, .. } = op else {
            panic!("expected a point, got {op:?}");
        };
        assert_eq!(stroke.width, style.metrics.correct_ring_width);
    }
}

#[test]
fn reversed_line_moves_positive_label_across() {
    let style = CanvasStyle::default();
    let forward = DecisionLine::new(0.0, 0.0, 1.0, 1.0);
    let reversed = DecisionLine::new(1.0, 1.0, 0.0, 0.0);

    let mut a = RecordingSurface::new(300.0, 300.0);
    render(&mut a, &[], &forward, &style);
    let mut b = RecordingSurface::new(300.0, 300.0);
    render(&mut b, &[], &reversed, &style);

    let pos = |s: &RecordingSurface, label: &str| {
        s.texts()
            .into_iter()
            .find(|(t, _)| *t == label)
            .map(|(_, p)| p)
            .unwrap()
    };
    // Forward: x > y is positive, i.e. the upper-right half in screen space.
    let plus = pos(&a, POSITIVE_LABEL);
    assert!(plus.x > plus.y, "{plus:?}");
    assert_eq!(pos(&b, POSITIVE_LABEL), pos(&a, NEGATIVE_LABEL));
    assert_eq!(pos(&b, NEGATIVE_LABEL), plus);
}

#[test]
fn degenerate_line_draws_no_labels() {
    let mut s = RecordingSurface::new(300.0, 300.0);
    render(
        &mut s,
        &points(),
        &DecisionLine::new(0.5, 0.5, 0.5, 0.5),
        &CanvasStyle::default(),
    );
    assert!(s.texts().is_empty());
    assert!(matches!(s.ops.last(), Some(Op::Circle { .. })));
}

#[test]
fn labels_can_be_switched_off() {
    let mut s = RecordingSurface::new(300.0, 300.0);
    let style = CanvasStyle {
        side_labels: false,
        ..CanvasStyle::default()
    };
    render(&mut s, &points(), &DecisionLine::default(), &style);
    assert!(s.texts().is_empty());
}
