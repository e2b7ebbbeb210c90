//! Configuration types for the BoundaryPlot UI.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::generator::GeneratorParams;
use crate::data::geometry::DecisionLine;
use crate::data::interaction::GrabTolerance;
use crate::events::EventController;
use crate::render::{CanvasMetrics, CanvasStyle};

pub use crate::color_scheme::{ColorScheme, CustomColorScheme};

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that may occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid YAML in {path}: {source}")]
    ParseYaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The file extension is neither `.yaml`/`.yml` nor `.json`.
    #[error("Unsupported config format for {path} (expected .yaml, .yml or .json)")]
    UnknownFormat { path: PathBuf },
    #[error("Unknown color scheme '{0}'")]
    UnknownColorScheme(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Sub-configs
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Show the left panel with controls, confusion matrix and metrics.
    pub side_panel: bool,
    /// Show the color legend below the metrics.
    pub legend: bool,
    /// Show the "Save PNG" button.
    pub screenshot: bool,
    /// Draw "Predicted (+)/(-)" labels next to the line.
    pub side_labels: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            side_panel: true,
            legend: true,
            screenshot: true,
            side_labels: true,
        }
    }
}

/// Data generation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Noise level used for the first generation (slider range 0–100).
    pub initial_noise: i32,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub params: GeneratorParams,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            initial_noise: 20,
            seed: None,
            params: GeneratorParams::default(),
        }
    }
}

/// Pointer interaction settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// `{ pixels: 12.0 }` or `{ normalized: 0.05 }` in both YAML and JSON.
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub grab_tolerance: GrabTolerance,
}

// ─────────────────────────────────────────────────────────────────────────────
// BoundaryPlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `data`         | Point generation (noise, seed, cluster layout) |
/// | `initial_line` | Starting boundary endpoints |
/// | `interaction`  | Grab tolerance for the endpoint handles |
/// | `canvas`       | Pixel sizes of points, handles, line and labels |
/// | `features`     | Toggle individual UI features on/off |
/// | `color_scheme` | Predefined visual theme |
/// | `events`       | Optional event subscription handle |
pub struct BoundaryPlotConfig {
    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional headline rendered inside the UI.
    pub headline: Option<String>,
    /// Optional subheadline below the headline.
    pub subheadline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Session ──────────────────────────────────────────────────────────────
    pub data: DataConfig,
    pub initial_line: DecisionLine,
    pub interaction: InteractionConfig,

    // ── Appearance ───────────────────────────────────────────────────────────
    pub canvas: CanvasMetrics,
    pub features: FeatureFlags,
    pub color_scheme: ColorScheme,

    // ── Programmatic handles ─────────────────────────────────────────────────
    pub events: Option<EventController>,
}

impl Default for BoundaryPlotConfig {
    fn default() -> Self {
        Self {
            title: "BoundaryPlot".to_string(),
            headline: None,
            subheadline: None,
            native_options: None,

            data: DataConfig::default(),
            initial_line: DecisionLine::default(),
            interaction: InteractionConfig::default(),

            canvas: CanvasMetrics::default(),
            features: FeatureFlags::default(),
            color_scheme: ColorScheme::default(),

            events: None,
        }
    }
}

impl BoundaryPlotConfig {
    /// Canvas style derived from the color scheme, sizes and feature flags.
    pub fn canvas_style(&self) -> CanvasStyle {
        CanvasStyle {
            palette: self.color_scheme.canvas_palette(),
            metrics: self.canvas.clone(),
            side_labels: self.features.side_labels,
        }
    }

    /// Load a YAML or JSON file (chosen by extension) on top of the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = ConfigFile::load(path)?;
        let mut cfg = Self::default();
        file.apply_to(&mut cfg)?;
        Ok(cfg)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File mirror
// ─────────────────────────────────────────────────────────────────────────────

/// Serializable subset of [`BoundaryPlotConfig`]. Every field is optional;
/// missing fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub title: Option<String>,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub window_size: Option<[f32; 2]>,
    pub color_scheme: Option<String>,
    pub data: Option<DataConfig>,
    pub initial_line: Option<DecisionLine>,
    pub interaction: Option<InteractionConfig>,
    pub canvas: Option<CanvasMetrics>,
    pub features: Option<FeatureFlags>,
}

impl ConfigFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let is_json = match ext.as_deref() {
            Some("yaml") | Some("yml") => false,
            Some("json") => true,
            _ => {
                return Err(ConfigError::UnknownFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if is_json {
            Self::from_json_str(&text).map_err(|source| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source,
            })
        } else {
            Self::from_yaml_str(&text).map_err(|source| ConfigError::ParseYaml {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Overlay the fields present in the file onto `cfg`.
    pub fn apply_to(self, cfg: &mut BoundaryPlotConfig) -> Result<(), ConfigError> {
        if let Some(name) = self.color_scheme {
            cfg.color_scheme =
                ColorScheme::from_label(&name).ok_or(ConfigError::UnknownColorScheme(name))?;
        }
        if let Some(t) = self.title {
            cfg.title = t;
        }
        if self.headline.is_some() {
            cfg.headline = self.headline;
        }
        if self.subheadline.is_some() {
            cfg.subheadline = self.subheadline;
        }
        if let Some([w, h]) = self.window_size {
            let mut opts = cfg.native_options.take().unwrap_or_default();
            opts.viewport = opts.viewport.clone().with_inner_size(eframe::egui::vec2(w, h));
            cfg.native_options = Some(opts);
        }
        if let Some(d) = self.data {
            cfg.data = d;
        }
        if let Some(l) = self.initial_line {
            cfg.initial_line = l;
        }
        if let Some(i) = self.interaction {
            cfg.interaction = i;
        }
        if let Some(c) = self.canvas {
            cfg.canvas = c;
        }
        if let Some(f) = self.features {
            cfg.features = f;
        }
        Ok(())
    }
}
