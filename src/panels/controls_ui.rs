use egui::Ui;

use super::panel_trait::Panel;
use crate::data::requests::LabData;

/// Reset button, noise slider and (optionally) the screenshot button.
pub struct ControlsPanel {
    noise: i32,
    show_screenshot: bool,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self::new(20, true)
    }
}

impl ControlsPanel {
    pub const RESET_LABEL: &'static str = "Reset data";
    pub const NOISE_LABEL: &'static str = "Noise level";
    pub const SCREENSHOT_LABEL: &'static str = "Save PNG";

    pub fn new(noise: i32, show_screenshot: bool) -> Self {
        Self {
            noise,
            show_screenshot,
        }
    }

    pub fn noise(&self) -> i32 {
        self.noise
    }
}

impl Panel for ControlsPanel {
    fn title(&self) -> &'static str {
        "Data"
    }

    fn icon_only(&self) -> Option<&'static str> {
        Some(egui_phosphor::regular::SLIDERS_HORIZONTAL)
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut LabData) {
        ui.horizontal(|ui| {
            ui.label(Self::NOISE_LABEL);
            if ui
                .add(egui::Slider::new(&mut self.noise, 0..=100))
                .changed()
            {
                data.requests.request_noise(self.noise);
            }
        });
        ui.horizontal(|ui| {
            let reset = format!("{} {}", egui_phosphor::regular::ARROWS_CLOCKWISE, Self::RESET_LABEL);
            if ui
                .button(reset)
                .on_hover_text("Draw a new random point set")
                .clicked()
            {
                data.requests.request_reset(self.noise);
            }
            if self.show_screenshot {
                let shot = format!("{} {}", egui_phosphor::regular::CAMERA, Self::SCREENSHOT_LABEL);
                if ui
                    .button(shot)
                    .on_hover_text("Take an egui viewport screenshot")
                    .clicked()
                {
                    data.requests.screenshot = true;
                }
            }
        });
        ui.label(format!("{} points", data.session.points().len()));
    }
}
