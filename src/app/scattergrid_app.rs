//! Standalone eframe wrapper around [`ScatterGridPanel`].

use eframe::egui;

use crate::color_scheme::ColorScheme;
use crate::config::ScatterGridConfig;
use crate::data::series::Dataset;

use super::ScatterGridPanel;

/// Standalone ScatterGrid application that implements [`eframe::App`].
///
/// `ScatterGridApp` is the top-level container used when the grid runs in its
/// own native window (via [`run_scatter_grid`](super::run_scatter_grid)). It:
///
/// 1. Owns a [`ScatterGridPanel`] that does the actual rendering.
/// 2. Renders the optional headline banner above it.
/// 3. Applies the configured color scheme on the first frame.
pub struct ScatterGridApp {
    /// The inner panel widget that owns all data and UI state.
    pub panel: ScatterGridPanel,

    /// Optional heading text shown at the top of the window.
    pub headline: Option<String>,
    /// Optional sub-heading text shown below the headline.
    pub subheadline: Option<String>,

    /// Color scheme to apply to the egui context. Applied once on the first frame.
    pub color_scheme: Option<ColorScheme>,
    /// Flag so we only apply the color scheme on the very first frame.
    color_scheme_applied: bool,
}

impl ScatterGridApp {
    /// Create an app showing `dataset` with the default configuration.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            panel: ScatterGridPanel::new(dataset),
            headline: None,
            subheadline: None,
            color_scheme: None,
            color_scheme_applied: false,
        }
    }

    /// Create an app showing `dataset`, configured by `cfg`.
    pub fn with_config(dataset: Dataset, cfg: &ScatterGridConfig) -> Self {
        Self {
            panel: ScatterGridPanel::with_config(dataset, cfg),
            headline: cfg.headline.clone(),
            subheadline: cfg.subheadline.clone(),
            color_scheme: Some(cfg.color_scheme.clone()),
            color_scheme_applied: false,
        }
    }
}

impl eframe::App for ScatterGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply color scheme once on the first frame (after egui context is available).
        if !self.color_scheme_applied {
            if let Some(scheme) = &self.color_scheme {
                scheme.apply(ctx);
            }
            self.color_scheme_applied = true;
        }

        // Optional headline banner at the top of the window.
        if self.headline.is_some() || self.subheadline.is_some() {
            egui::TopBottomPanel::top("scattergrid_headline").show(ctx, |ui| {
                if let Some(h) = &self.headline {
                    ui.heading(h);
                }
                if let Some(sub) = &self.subheadline {
                    ui.label(sub);
                }
            });
        }

        // Main content area. The grid has a fixed natural size, so scroll
        // when the window is smaller than the content.
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.panel.update(ui);
            });
        });
    }
}
