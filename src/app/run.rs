//! Top-level entry point for running ScatterGrid as a native window.
//!
//! The [`run_scatter_grid`] function is the primary public API for launching
//! the grid application. It accepts the dataset and a configuration object,
//! wires up controllers, and enters the eframe event loop.

use eframe::egui;

use crate::config::ScatterGridConfig;
use crate::data::series::Dataset;

use super::scattergrid_app::ScatterGridApp;

/// Launch the ScatterGrid application in a native window.
///
/// This is the main entry point for standalone use. It:
///
/// 1. Constructs a [`ScatterGridApp`] showing `dataset`, with any controllers
///    carried in `cfg` attached to the panel.
/// 2. Opens a native window and enters the eframe event loop.
///
/// The call blocks until the window is closed.
pub fn run_scatter_grid(dataset: Dataset, mut cfg: ScatterGridConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    let app = ScatterGridApp::with_config(dataset, &cfg);

    // Use icon.svg as the window icon unless the caller already set one.
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    // Default window size fits a 2x2 grid plus the legend column.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(960.0, 720.0));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Load the repository's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` when the file is missing or fails to parse or render.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
