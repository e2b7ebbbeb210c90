use egui::{Color32, RichText, Ui};

use super::panel_trait::Panel;
use crate::data::requests::LabData;
use crate::render::CanvasPalette;

/// Accuracy, precision, recall and F1 read-outs plus an optional legend.
pub struct MetricsPanel {
    palette: CanvasPalette,
    show_legend: bool,
}

impl Default for MetricsPanel {
    fn default() -> Self {
        Self::new(CanvasPalette::dark(), true)
    }
}

impl MetricsPanel {
    pub fn new(palette: CanvasPalette, show_legend: bool) -> Self {
        Self {
            palette,
            show_legend,
        }
    }

    fn swatch(ui: &mut Ui, fill: Color32, ring: Option<Color32>, text: &str) {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
            let stroke = ring.map_or(egui::Stroke::NONE, |c| egui::Stroke::new(2.0, c));
            ui.painter().circle(rect.center(), 5.0, fill, stroke);
            ui.label(text);
        });
    }
}

impl Panel for MetricsPanel {
    fn title(&self) -> &'static str {
        "Metrics"
    }

    fn icon_only(&self) -> Option<&'static str> {
        Some(egui_phosphor::regular::CHART_BAR)
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut LabData) {
        let (acc, prec, rec, f1) = data.session.metrics().display();
        egui::Grid::new("metrics_grid")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for (name, value) in [
                    ("Accuracy", acc),
                    ("Precision", prec),
                    ("Recall", rec),
                    ("F1 score", f1),
                ] {
                    ui.label(name);
                    ui.label(RichText::new(value).monospace().strong());
                    ui.end_row();
                }
            });

        if self.show_legend {
            ui.separator();
            let p = &self.palette;
            Self::swatch(ui, p.positive_fill, None, "Actual positive");
            Self::swatch(ui, p.negative_fill, None, "Actual negative");
            Self::swatch(ui, p.negative_fill, Some(p.false_positive_ring), "False positive");
            Self::swatch(ui, p.positive_fill, Some(p.false_negative_ring), "False negative");
        }
    }
}
