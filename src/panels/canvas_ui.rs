use egui::{CursorIcon, Event, PointerButton, Rect, Sense, Ui, Vec2};

use crate::data::interaction::{endpoint_at, GrabTolerance, PointerEvent, Viewport};
use crate::data::session::{PointerOutcome, Session};
use crate::render::{render, CanvasStyle, PainterSurface};

/// What happened on the canvas during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasResponse {
    pub pointer: PointerOutcome,
    /// New size when the canvas was resized this frame.
    pub resized: Option<Vec2>,
}

/// Central drawing area: turns egui pointer events into [`PointerEvent`]s,
/// feeds them to the session, and repaints everything.
#[derive(Default)]
pub struct CanvasPanel {
    last_size: Option<Vec2>,
}

/// Translate raw egui events into canvas-local pointer events.
///
/// Presses only count inside `rect`; moves and releases are reported
/// wherever they happen so a drag survives leaving the canvas.
pub fn pointer_events(events: &[Event], rect: Rect) -> Vec<PointerEvent> {
    let local = |p: egui::Pos2| p - rect.min;
    events
        .iter()
        .filter_map(|e| match e {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } if rect.contains(*pos) => {
                let v = local(*pos);
                Some(PointerEvent::Press { x: v.x, y: v.y })
            }
            Event::PointerButton {
                button: PointerButton::Primary,
                pressed: false,
                ..
            } => Some(PointerEvent::Release),
            Event::PointerMoved(pos) => {
                let v = local(*pos);
                Some(PointerEvent::Move { x: v.x, y: v.y })
            }
            _ => None,
        })
        .collect()
}

impl CanvasPanel {
    pub fn show(
        &mut self,
        ui: &mut Ui,
        session: &mut Session,
        style: &CanvasStyle,
        tolerance: &GrabTolerance,
    ) -> CanvasResponse {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let viewport = Viewport::new(rect.width(), rect.height());

        let mut out = CanvasResponse::default();
        if self.last_size != Some(rect.size()) {
            if self.last_size.is_some() {
                out.resized = Some(rect.size());
            }
            self.last_size = Some(rect.size());
        }

        let events = ui.input(|i| pointer_events(&i.events, rect));
        for ev in events {
            let o = session.handle_pointer(ev, &viewport, tolerance);
            out.pointer.drag_started |= o.drag_started;
            out.pointer.line_moved |= o.line_moved;
            out.pointer.drag_ended |= o.drag_ended;
        }

        if session.drag_state().is_dragging() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        } else if let Some(hover) = response.hover_pos() {
            let v = hover - rect.min;
            if endpoint_at(session.line(), v.x, v.y, &viewport, tolerance).is_some() {
                ui.ctx().set_cursor_icon(CursorIcon::Grab);
            }
        }

        let painter = ui.painter_at(rect);
        let mut surface = PainterSurface::new(&painter, rect);
        render(&mut surface, session.points(), session.line(), style);

        out
    }
}
