//! Top-level entry point for running BoundaryPlot as a native window.

use eframe::egui;

use crate::config::BoundaryPlotConfig;

use super::BoundaryPlotApp;

/// Launch BoundaryPlot in a native window.
///
/// Builds a [`BoundaryPlotApp`] from `cfg`, installs the Phosphor icon font
/// and the window icon, then enters the eframe event loop. Blocks until the
/// window is closed.
pub fn run_boundary_plot(mut cfg: BoundaryPlotConfig) -> eframe::Result<()> {
    let app = BoundaryPlotApp::new(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();

    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1100.0, 720.0));
    }

    tracing::info!(%title, "starting BoundaryPlot");
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Render `icon.svg` from the crate root into an [`egui::IconData`].
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;
    rasterize_svg(&data)
}

pub(crate) fn rasterize_svg(data: &[u8]) -> Option<egui::IconData> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default()).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_icon_rasterizes() {
        let data = std::fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg")).unwrap();
        let icon = rasterize_svg(&data).unwrap();
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(rasterize_svg(b"not an svg").is_none());
    }
}
