//! BoundaryPlot crate root: re-exports and module wiring.
//!
//! An interactive egui/eframe playground for linear classification: two
//! clusters of labeled points, a decision line with draggable endpoints, and
//! a confusion matrix with accuracy, precision, recall and F1 that update as
//! the line moves.
//!
//! - `data`: point generation, geometry, metrics, drag state machine, session
//! - `render`: canvas drawing behind a small [`render::Surface`] trait
//! - `panels`: side panels (controls, confusion matrix, metrics) and the canvas
//! - `app`: embeddable [`BoundaryPlotPanel`] and standalone [`BoundaryPlotApp`]
//! - `config`, `color_scheme`, `events`, `logging`: ambient plumbing

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod events;
pub mod logging;
pub mod panels;
pub mod render;

pub use app::{run_boundary_plot, BoundaryPlotApp, BoundaryPlotPanel};
pub use config::{BoundaryPlotConfig, ColorScheme, ConfigError};
pub use data::geometry::{classify, DecisionLine, Label, Point};
pub use data::metrics::{compute_metrics, ConfusionCounts, Metrics};
pub use data::session::Session;
pub use events::{EventController, EventFilter, EventKind, LabEvent};
