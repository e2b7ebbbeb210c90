//! Standalone application wrapper for BoundaryPlot.
//!
//! [`BoundaryPlotApp`] wraps a [`BoundaryPlotPanel`](super::BoundaryPlotPanel)
//! and implements [`eframe::App`] so that it can run as a native window. It
//! also owns the viewport screenshot round-trip, which needs the
//! [`egui::Context`] rather than a single `Ui`.

use std::path::{Path, PathBuf};

use eframe::egui;
use image::{Rgba, RgbaImage};

use crate::config::{BoundaryPlotConfig, ColorScheme};
use crate::events::{EventKind, LabEvent};

use super::BoundaryPlotPanel;

/// Environment variable that, when set, bypasses the save dialog.
pub const SCREENSHOT_ENV: &str = "BOUNDARYPLOT_SAVE_SCREENSHOT_TO";

// ─────────────────────────────────────────────────────────────────────────────
// BoundaryPlotApp
// ─────────────────────────────────────────────────────────────────────────────

/// Standalone BoundaryPlot application that implements [`eframe::App`].
pub struct BoundaryPlotApp {
    /// The inner widget that owns the session and all UI state.
    pub main_panel: BoundaryPlotPanel,

    /// Optional heading text shown at the top of the window.
    pub headline: Option<String>,
    /// Optional sub-heading text shown below the headline.
    pub subheadline: Option<String>,

    /// Applied once on the first frame.
    pub color_scheme: ColorScheme,
    color_scheme_applied: bool,

    /// A screenshot was requested and has not arrived yet.
    screenshot_pending: bool,
}

impl BoundaryPlotApp {
    pub fn new(cfg: &BoundaryPlotConfig) -> Self {
        Self {
            main_panel: BoundaryPlotPanel::new(cfg),
            headline: cfg.headline.clone(),
            subheadline: cfg.subheadline.clone(),
            color_scheme: cfg.color_scheme.clone(),
            color_scheme_applied: false,
            screenshot_pending: false,
        }
    }

    /// Request a screenshot and save the image once the viewport delivers it.
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if self.main_panel.take_screenshot_request() {
            self.screenshot_pending = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }
        if !self.screenshot_pending {
            return;
        }
        let Some(image) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        }) else {
            return;
        };
        self.screenshot_pending = false;

        let Some(path) = screenshot_target() else {
            tracing::debug!("screenshot save cancelled");
            return;
        };
        match save_color_image(&image, &path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "saved viewport screenshot");
                let mut evt = LabEvent::new(EventKind::SCREENSHOT);
                evt.path = Some(path.display().to_string());
                evt.size = Some([image.size[0] as f32, image.size[1] as f32]);
                self.main_panel.emit(evt);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to save viewport screenshot");
            }
        }
    }
}

/// Destination from the environment, or from a save dialog.
fn screenshot_target() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(SCREENSHOT_ENV) {
        return Some(PathBuf::from(path));
    }
    rfd::FileDialog::new()
        .set_file_name(default_screenshot_name(chrono::Local::now().timestamp_millis()))
        .add_filter("PNG", &["png"])
        .save_file()
}

pub(crate) fn default_screenshot_name(millis: i64) -> String {
    format!("boundaryplot_{millis}.png")
}

/// Write an egui [`egui::ColorImage`] to disk; the format follows the extension.
pub fn save_color_image(image: &egui::ColorImage, path: &Path) -> image::ImageResult<()> {
    let [w, h] = image.size;
    let mut out = RgbaImage::new(w as u32, h as u32);
    for (i, p) in image.pixels.iter().enumerate() {
        let (x, y) = (i % w, i / w);
        out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
    }
    out.save(path)
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe integration
// ─────────────────────────────────────────────────────────────────────────────

impl eframe::App for BoundaryPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        if self.headline.is_some() || self.subheadline.is_some() {
            egui::TopBottomPanel::top("boundaryplot_headline").show(ctx, |ui| {
                if let Some(h) = &self.headline {
                    ui.heading(h);
                }
                if let Some(sub) = &self.subheadline {
                    ui.label(sub);
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.update(ui);
        });

        self.handle_screenshot(ctx);

        // ~60 fps while the window is open.
        ctx.request_repaint_after(std::time::Duration::from_millis(16));
    }
}
