//! `boundaryplot [CONFIG]`: open the decision-boundary playground.
//!
//! The optional argument is a YAML or JSON config file; unset fields keep
//! their defaults.

use boundaryplot::{logging, run_boundary_plot, BoundaryPlotConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init()?;

    let cfg = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "loading config");
            BoundaryPlotConfig::load(&path)?
        }
        None => BoundaryPlotConfig::default(),
    };

    run_boundary_plot(cfg)?;
    Ok(())
}
