use egui::{RichText, Ui};

use super::panel_trait::Panel;
use crate::data::metrics::ConfusionCounts;
use crate::data::requests::LabData;

/// 2×2 confusion matrix: rows are the actual class, columns the prediction.
#[derive(Default)]
pub struct ConfusionPanel;

impl ConfusionPanel {
    /// Cell captions in row-major order (actual +/-, predicted +/-).
    pub fn cells(c: &ConfusionCounts) -> [(&'static str, usize); 4] {
        [("TP", c.tp), ("FN", c.fn_), ("FP", c.fp), ("TN", c.tn)]
    }
}

impl Panel for ConfusionPanel {
    fn title(&self) -> &'static str {
        "Confusion Matrix"
    }

    fn icon_only(&self) -> Option<&'static str> {
        Some(egui_phosphor::regular::GRID_FOUR)
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut LabData) {
        let cells = Self::cells(data.session.counts());
        egui::Grid::new("confusion_matrix")
            .num_columns(3)
            .spacing([16.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label("");
                ui.label(RichText::new("Pred +").strong());
                ui.label(RichText::new("Pred -").strong());
                ui.end_row();

                for (row, caption) in ["Actual +", "Actual -"].iter().enumerate() {
                    ui.label(RichText::new(*caption).strong());
                    for (name, value) in &cells[row * 2..row * 2 + 2] {
                        ui.label(RichText::new(format!("{name}: {value}")).monospace());
                    }
                    ui.end_row();
                }
            });
    }
}
