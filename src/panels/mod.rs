pub mod canvas_ui;
pub mod confusion_ui;
pub mod controls_ui;
pub mod metrics_ui;
pub mod panel_trait;

pub use canvas_ui::{CanvasPanel, CanvasResponse};
pub use confusion_ui::ConfusionPanel;
pub use controls_ui::ControlsPanel;
pub use metrics_ui::MetricsPanel;
pub use panel_trait::Panel;
