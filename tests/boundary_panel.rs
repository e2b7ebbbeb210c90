//! Headless frames through the embeddable widget.

use boundaryplot::events::EventFilter;
use boundaryplot::{BoundaryPlotConfig, BoundaryPlotPanel, EventController, EventKind, LabEvent};
use boundaryplot::data::interaction::DragState;
use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};

fn config(events: &EventController) -> BoundaryPlotConfig {
    let mut cfg = BoundaryPlotConfig::default();
    cfg.data.seed = Some(42);
    cfg.events = Some(events.clone());
    cfg
}

fn frame(ctx: &egui::Context, panel: &mut BoundaryPlotPanel, size: Vec2) {
    frame_with(ctx, panel, size, Vec::new());
}

/// One frame with the widget filling the whole screen, so canvas pixels and
/// screen pixels coincide when the side panel is off.
fn frame_with(ctx: &egui::Context, panel: &mut BoundaryPlotPanel, size: Vec2, events: Vec<Event>) {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, size)),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| panel.update(ui));
    });
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn drain(rx: &std::sync::mpsc::Receiver<LabEvent>) -> Vec<LabEvent> {
    rx.try_iter().collect()
}

#[test]
fn seeded_panels_start_with_identical_data() {
    let events = EventController::new();
    let a = BoundaryPlotPanel::new(&config(&events));
    let b = BoundaryPlotPanel::new(&config(&events));
    assert_eq!(a.session.points(), b.session.points());
    assert_eq!(a.session.counts().total(), 200);
    assert_eq!(a.side_panels.len(), 3);
}

#[test]
fn reset_emits_regeneration_without_noise_change() {
    let events = EventController::new();
    let rx = events.subscribe(EventFilter::all());
    let mut panel = BoundaryPlotPanel::new(&config(&events));
    let before = panel.session.points().to_vec();

    panel.request_reset();
    panel.apply_requests();

    let got = drain(&rx);
    assert_eq!(got.len(), 1);
    let evt = &got[0];
    assert!(evt.kinds.contains(EventKind::DATA_REGENERATED | EventKind::METRICS_UPDATED));
    assert!(!evt.kinds.contains(EventKind::NOISE_CHANGED));
    assert_eq!(evt.noise_level, Some(20));
    assert_eq!(evt.counts.map(|c| c.total()), Some(200));
    assert_ne!(panel.session.points(), &before[..]);
}

#[test]
fn apply_without_requests_is_silent() {
    let events = EventController::new();
    let rx = events.subscribe(EventFilter::all());
    let mut panel = BoundaryPlotPanel::new(&config(&events));
    panel.apply_requests();
    assert!(drain(&rx).is_empty());
}

#[test]
fn resize_is_reported_after_first_frame() {
    let events = EventController::new();
    let rx = events.subscribe(EventFilter::only(EventKind::RESIZE));
    let mut cfg = config(&events);
    cfg.features.side_panel = false;
    let mut panel = BoundaryPlotPanel::new(&cfg);
    let ctx = egui::Context::default();

    frame(&ctx, &mut panel, Vec2::new(800.0, 600.0));
    frame(&ctx, &mut panel, Vec2::new(800.0, 600.0));
    assert!(drain(&rx).is_empty(), "same size twice is not a resize");

    frame(&ctx, &mut panel, Vec2::new(1000.0, 700.0));
    let got = drain(&rx);
    assert_eq!(got.len(), 1);
    assert!(got[0].size.is_some());
}

#[test]
fn press_move_release_drags_an_endpoint_through_the_canvas() {
    let events = EventController::new();
    let rx = events.subscribe(EventFilter::all());
    let mut cfg = config(&events);
    cfg.features.side_panel = false;
    let mut panel = BoundaryPlotPanel::new(&cfg);
    let ctx = egui::Context::default();
    let size = Vec2::new(800.0, 600.0);

    frame(&ctx, &mut panel, size);
    assert!(drain(&rx).is_empty());

    // Default endpoint 1 sits at (0.2, 0.8) -> (160, 480) px.
    let grab = Pos2::new(162.0, 478.0);
    frame_with(&ctx, &mut panel, size, vec![Event::PointerMoved(grab), button(grab, true)]);
    assert_eq!(panel.session.drag_state(), DragState::DraggingEndpoint1);
    let got = drain(&rx);
    assert_eq!(got.len(), 1);
    assert!(got[0].kinds.contains(EventKind::DRAG_STARTED));

    // Leave the canvas: the endpoint follows, clamped to (0, 1).
    frame_with(&ctx, &mut panel, size, vec![Event::PointerMoved(Pos2::new(-100.0, 700.0))]);
    assert_eq!((panel.session.line().x1, panel.session.line().y1), (0.0, 1.0));
    let got = drain(&rx);
    assert_eq!(got.len(), 1);
    assert!(got[0].kinds.contains(EventKind::LINE_MOVED | EventKind::METRICS_UPDATED));
    assert_eq!(got[0].line, Some(*panel.session.line()));

    frame_with(&ctx, &mut panel, size, vec![button(Pos2::new(-100.0, 700.0), false)]);
    assert_eq!(panel.session.drag_state(), DragState::Idle);
    let got = drain(&rx);
    assert_eq!(got.len(), 1);
    assert!(got[0].kinds.contains(EventKind::DRAG_ENDED));
    assert_eq!((panel.session.line().x2, panel.session.line().y2), (0.8, 0.2));
}

#[test]
fn press_away_from_the_handles_does_nothing() {
    let events = EventController::new();
    let rx = events.subscribe(EventFilter::all());
    let mut cfg = config(&events);
    cfg.features.side_panel = false;
    let mut panel = BoundaryPlotPanel::new(&cfg);
    let ctx = egui::Context::default();
    let size = Vec2::new(800.0, 600.0);
    let before = *panel.session.line();

    frame(&ctx, &mut panel, size);
    let p = Pos2::new(400.0, 100.0);
    frame_with(&ctx, &mut panel, size, vec![Event::PointerMoved(p), button(p, true)]);
    frame_with(&ctx, &mut panel, size, vec![Event::PointerMoved(Pos2::new(10.0, 10.0))]);

    assert_eq!(panel.session.drag_state(), DragState::Idle);
    assert_eq!(*panel.session.line(), before);
    assert!(drain(&rx).is_empty());
}
