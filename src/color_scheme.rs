//! Color scheme definitions for BoundaryPlot
//!
//! A scheme controls two things: the egui visuals of the surrounding panels
//! and the [`CanvasPalette`] used to paint points, the line and its handles.

use eframe::egui::{Color32, Context, Visuals};

use crate::render::CanvasPalette;

/// Visual theme for the UI, including user-defined custom schemes.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ColorScheme {
    /// Dark slate background (the default).
    #[default]
    Dark,
    /// Light theme.
    Light,
    /// Nord: blue-grey dark theme.
    Nord,
    /// High-contrast: pure-black background with maximally-saturated colours.
    HighContrast,
    /// User-defined custom color scheme.
    Custom(CustomColorScheme),
}

/// User-defined custom color scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomColorScheme {
    /// Visuals for egui context (optional, fallback to dark).
    pub visuals: Option<Visuals>,
    /// Canvas colors.
    pub canvas: CanvasPalette,
    /// Optional label for UI display.
    pub label: Option<String>,
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Dark,
            ColorScheme::Light,
            ColorScheme::Nord,
            ColorScheme::HighContrast,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            ColorScheme::Dark => "Dark".to_string(),
            ColorScheme::Light => "Light".to_string(),
            ColorScheme::Nord => "Nord".to_string(),
            ColorScheme::HighContrast => "High Contrast".to_string(),
            ColorScheme::Custom(custom) => {
                custom.label.clone().unwrap_or_else(|| "Custom".to_string())
            }
        }
    }

    /// Look up a built-in scheme by label, ignoring case, spaces and dashes
    /// (`"high-contrast"`, `"High Contrast"` and `"highcontrast"` all match).
    pub fn from_label(name: &str) -> Option<ColorScheme> {
        let key = |s: &str| {
            s.chars()
                .filter(|c| !matches!(c, ' ' | '-' | '_'))
                .collect::<String>()
                .to_lowercase()
        };
        let wanted = key(name);
        Self::all().iter().find(|s| key(&s.label()) == wanted).cloned()
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Dark => {
                let mut v = Visuals::dark();
                let slate900 = Color32::from_rgb(15, 23, 42);
                let slate800 = Color32::from_rgb(30, 41, 59);
                v.panel_fill = slate800;
                v.window_fill = slate800;
                v.extreme_bg_color = slate900;
                v.faint_bg_color = slate900;
                ctx.set_visuals(v);
            }
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
            ColorScheme::Nord => {
                let mut v = Visuals::dark();
                let polar0 = Color32::from_rgb(46, 52, 64);
                let polar1 = Color32::from_rgb(59, 66, 82);
                let snow0 = Color32::from_rgb(216, 222, 233);
                let snow1 = Color32::from_rgb(229, 233, 240);
                v.panel_fill = polar0;
                v.window_fill = polar1;
                v.extreme_bg_color = polar0;
                v.faint_bg_color = polar1;
                v.override_text_color = Some(snow0);
                v.widgets.noninteractive.bg_fill = polar1;
                v.widgets.noninteractive.fg_stroke.color = snow0;
                v.widgets.inactive.fg_stroke.color = snow1;
                v.widgets.hovered.bg_fill = Color32::from_rgb(76, 86, 106);
                ctx.set_visuals(v);
            }
            ColorScheme::HighContrast => {
                let mut v = Visuals::dark();
                let bg = Color32::BLACK;
                let fg = Color32::WHITE;
                v.panel_fill = bg;
                v.window_fill = Color32::from_rgb(10, 10, 10);
                v.extreme_bg_color = bg;
                v.faint_bg_color = Color32::from_rgb(20, 20, 20);
                v.override_text_color = Some(fg);
                v.widgets.noninteractive.bg_fill = Color32::from_rgb(20, 20, 20);
                v.widgets.noninteractive.fg_stroke.color = fg;
                ctx.set_visuals(v);
            }
            ColorScheme::Custom(custom) => {
                if let Some(visuals) = &custom.visuals {
                    ctx.set_visuals(visuals.clone());
                } else {
                    ctx.set_visuals(Visuals::dark());
                }
            }
        }
    }

    /// Canvas colors for this scheme.
    pub fn canvas_palette(&self) -> CanvasPalette {
        match self {
            ColorScheme::Dark => CanvasPalette::dark(),
            ColorScheme::Light => CanvasPalette::light(),
            ColorScheme::Nord => CanvasPalette {
                background: Color32::from_rgb(46, 52, 64),
                positive_fill: Color32::from_rgb(163, 190, 140),
                negative_fill: Color32::from_rgb(129, 161, 193),
                false_positive_ring: Color32::from_rgb(191, 97, 106),
                false_negative_ring: Color32::from_rgb(235, 203, 139),
                line: Color32::from_rgb(229, 233, 240),
                handle: Color32::from_rgb(236, 239, 244),
                ..CanvasPalette::dark()
            },
            ColorScheme::HighContrast => CanvasPalette {
                background: Color32::BLACK,
                positive_fill: Color32::from_rgb(0, 255, 0),
                negative_fill: Color32::from_rgb(0, 170, 255),
                false_positive_ring: Color32::from_rgb(255, 0, 0),
                false_negative_ring: Color32::from_rgb(255, 255, 0),
                correct_ring: Color32::from_rgba_unmultiplied(255, 255, 255, 110),
                label: Color32::WHITE,
                ..CanvasPalette::dark()
            },
            ColorScheme::Custom(custom) => custom.canvas,
        }
    }
}
