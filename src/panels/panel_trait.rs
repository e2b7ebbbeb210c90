use egui::Ui;

use crate::data::requests::LabData;

/// A section of the side panel.
pub trait Panel {
    fn title(&self) -> &'static str;

    /// Phosphor glyph shown next to the title.
    fn icon_only(&self) -> Option<&'static str> {
        None
    }

    fn title_and_icon(&self) -> String {
        match self.icon_only() {
            Some(icon) => format!("{icon} {}", self.title()),
            None => self.title().to_string(),
        }
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut LabData);
}
