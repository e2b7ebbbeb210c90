//! Main application module for BoundaryPlot.
//!
//! | Sub-module            | Responsibility |
//! | --------------------- | -------------- |
//! | [`boundaryplot_app`]  | Standalone [`BoundaryPlotApp`] (eframe) wrapper and screenshot saving |
//! | [`run`]               | Top-level [`run_boundary_plot()`] entry point and icon loading |
//!
//! [`BoundaryPlotPanel`] itself lives here: it is the embeddable widget that
//! owns the session, the side panels and the canvas.

mod boundaryplot_app;
mod run;

pub use boundaryplot_app::{save_color_image, BoundaryPlotApp};
pub use run::run_boundary_plot;

use eframe::egui;

use crate::config::{BoundaryPlotConfig, FeatureFlags};
use crate::data::interaction::GrabTolerance;
use crate::data::requests::{LabData, LabRequests};
use crate::data::session::Session;
use crate::events::{EventController, EventKind, LabEvent};
use crate::panels::{CanvasPanel, CanvasResponse, ConfusionPanel, ControlsPanel, MetricsPanel, Panel};
use crate::render::CanvasStyle;

// ─────────────────────────────────────────────────────────────────────────────
// BoundaryPlotPanel – the central widget type
// ─────────────────────────────────────────────────────────────────────────────

/// The widget that owns the session, side panels and canvas.
///
/// It can be used standalone (wrapped in [`BoundaryPlotApp`]) or embedded in
/// a parent egui application by calling [`BoundaryPlotPanel::update`] with
/// any [`egui::Ui`].
pub struct BoundaryPlotPanel {
    /// Points, line, drag state and the last metrics.
    pub session: Session,

    /// Sections of the left side panel, top to bottom.
    pub side_panels: Vec<Box<dyn Panel>>,

    canvas: CanvasPanel,
    style: CanvasStyle,
    tolerance: GrabTolerance,
    features: FeatureFlags,
    requests: LabRequests,
    events: Option<EventController>,
}

impl BoundaryPlotPanel {
    pub fn new(cfg: &BoundaryPlotConfig) -> Self {
        let session = Session::new(
            cfg.data.params.clone(),
            cfg.data.initial_noise,
            cfg.initial_line,
            cfg.data.seed,
        );
        let style = cfg.canvas_style();
        let side_panels: Vec<Box<dyn Panel>> = vec![
            Box::new(ControlsPanel::new(
                cfg.data.initial_noise,
                cfg.features.screenshot,
            )),
            Box::new(ConfusionPanel),
            Box::new(MetricsPanel::new(style.palette, cfg.features.legend)),
        ];
        Self {
            session,
            side_panels,
            canvas: CanvasPanel::default(),
            style,
            tolerance: cfg.interaction.grab_tolerance,
            features: cfg.features.clone(),
            requests: LabRequests::default(),
            events: cfg.events.clone(),
        }
    }

    pub fn set_event_controller(&mut self, events: Option<EventController>) {
        self.events = events;
    }

    /// Take (and clear) the screenshot request raised by the controls.
    pub fn take_screenshot_request(&mut self) -> bool {
        std::mem::take(&mut self.requests.screenshot)
    }

    /// Render side panels and canvas into `ui`, then apply requests.
    pub fn update(&mut self, ui: &mut egui::Ui) {
        if self.features.side_panel {
            egui::SidePanel::left("boundaryplot_side")
                .resizable(true)
                .default_width(240.0)
                .show_inside(ui, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| self.render_side_panels(ui));
                });
        }

        let response = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show_inside(ui, |ui| {
                self.canvas
                    .show(ui, &mut self.session, &self.style, &self.tolerance)
            })
            .inner;

        self.publish_canvas_response(&response);
        self.apply_requests();
    }

    fn render_side_panels(&mut self, ui: &mut egui::Ui) {
        let mut data = LabData {
            session: &self.session,
            requests: &mut self.requests,
        };
        for panel in self.side_panels.iter_mut() {
            ui.heading(panel.title_and_icon());
            panel.render_panel(ui, &mut data);
            ui.add_space(8.0);
        }
    }

    /// Apply pending regeneration requests to the session.
    pub fn apply_requests(&mut self) {
        let Some(noise) = self.requests.regenerate.take() else {
            return;
        };
        let noise_changed = std::mem::take(&mut self.requests.noise_changed);
        self.session.regenerate(noise);

        let mut kinds = EventKind::DATA_REGENERATED | EventKind::METRICS_UPDATED;
        if noise_changed {
            kinds |= EventKind::NOISE_CHANGED;
        }
        let mut evt = self.session_event(kinds);
        evt.noise_level = Some(noise);
        self.emit(evt);
    }

    fn publish_canvas_response(&self, r: &CanvasResponse) {
        if let Some(size) = r.resized {
            tracing::debug!(width = size.x, height = size.y, "canvas resized");
            let mut evt = LabEvent::new(EventKind::RESIZE);
            evt.size = Some([size.x, size.y]);
            self.emit(evt);
        }
        let mut kinds = EventKind(0);
        if r.pointer.drag_started {
            kinds |= EventKind::DRAG_STARTED;
        }
        if r.pointer.line_moved {
            kinds |= EventKind::LINE_MOVED | EventKind::METRICS_UPDATED;
        }
        if r.pointer.drag_ended {
            kinds |= EventKind::DRAG_ENDED;
        }
        if !kinds.is_empty() {
            self.emit(self.session_event(kinds));
        }
    }

    fn session_event(&self, kinds: EventKind) -> LabEvent {
        let mut evt = LabEvent::new(kinds);
        evt.line = Some(*self.session.line());
        evt.drag = Some(self.session.drag_state());
        evt.counts = Some(*self.session.counts());
        evt.metrics = Some(*self.session.metrics());
        evt
    }

    pub(crate) fn emit(&self, evt: LabEvent) {
        if let Some(ctrl) = &self.events {
            ctrl.emit(evt);
        }
    }

    /// Queue a regeneration as if the reset button had been pressed.
    pub fn request_reset(&mut self) {
        let noise = self.session.noise_level();
        self.requests.request_reset(noise);
    }
}
