//! Main application module for ScatterGrid.
//!
//! This module defines the core types and wiring for the ScatterGrid GUI.
//! It is split into focused sub-modules so that each concern can be
//! reasoned about independently:
//!
//! | Sub-module           | Responsibility |
//! | -------------------- | -------------- |
//! | [`update`]           | Per-frame controller processing, redraw polling, and grid rendering |
//! | [`scattergrid_app`]  | Standalone [`ScatterGridApp`] (eframe) wrapper |
//! | [`run`]              | Top-level [`run_scatter_grid()`] entry point and icon loading |

mod run;
mod scattergrid_app;
mod update;

// ── Public re-exports consumed by lib.rs ─────────────────────────────────────
pub use run::run_scatter_grid;
pub use scattergrid_app::ScatterGridApp;

// ── Crate-internal shared imports ────────────────────────────────────────────

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::config::{FeatureFlags, ScatterGridConfig};
use crate::controllers::FilterController;
use crate::data::filter::FilterState;
use crate::data::selection::BoxSelection;
use crate::data::series::Dataset;
use crate::events::EventController;

/// Global monotonic counter that assigns unique IDs to [`ScatterGridPanel`] instances.
///
/// Each panel gets a unique `panel_id` to namespace its egui widget IDs,
/// which prevents collisions when multiple grids coexist in one application.
static PANEL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

// ─────────────────────────────────────────────────────────────────────────────
// ScatterGridPanel – the central widget type
// ─────────────────────────────────────────────────────────────────────────────

/// The central widget that owns the dataset, filter state, and plot surfaces.
///
/// `ScatterGridPanel` is the building block of the ScatterGrid UI. It can be
/// used:
///
/// * **Standalone** – wrapped inside [`ScatterGridApp`] and driven by the
///   eframe event loop.
/// * **Embedded** – placed inside a parent egui application via
///   [`ScatterGridPanel::update`].
pub struct ScatterGridPanel {
    // ── Data ─────────────────────────────────────────────────────────────────
    /// Threshold filter state: the original dataset, the currently visible
    /// dataset, and any pending delayed redraw.
    pub(crate) filter: FilterState,

    /// One box-selection state per plot surface, indexed like the series.
    pub(crate) selections: Vec<BoxSelection>,

    // ── Appearance ───────────────────────────────────────────────────────────
    /// Plot surface size in pixels.
    pub plot_size: [f32; 2],

    /// Marker radius in pixels.
    pub point_radius: f32,

    /// Requested number of legend ticks.
    pub legend_tick_count: usize,

    /// Decimal places shown for tooltip coordinates.
    pub tooltip_decimals: usize,

    /// Toggles for individual UI features.
    pub features: FeatureFlags,

    // ── Controllers (for embedded / programmatic use) ────────────────────────
    /// Programmatic threshold control and state observation.
    pub(crate) filter_ctrl: Option<FilterController>,

    /// Event controller for dispatching UI events to subscribers.
    pub(crate) event_ctrl: Option<EventController>,

    // ── Frame-to-frame bookkeeping ───────────────────────────────────────────
    /// Last hovered point as (plot, point), kept so hover events fire once
    /// per point instead of once per frame.
    pub(crate) last_hover: Option<(usize, usize)>,

    /// Unique ID for this panel instance, used to namespace egui widget IDs.
    pub(crate) panel_id: u64,
}

impl ScatterGridPanel {
    /// Create a panel showing `dataset` with the default configuration.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_config(dataset, &ScatterGridConfig::default())
    }

    /// Create a panel showing `dataset`, taking appearance, feature flags,
    /// redraw delay, and controllers from `cfg`.
    pub fn with_config(dataset: Dataset, cfg: &ScatterGridConfig) -> Self {
        let plot_count = dataset.len();
        let delay = Duration::from_secs_f64(cfg.redraw_delay_secs.max(0.0));
        Self {
            filter: FilterState::new(dataset).with_delay(delay),
            selections: vec![BoxSelection::default(); plot_count],
            plot_size: cfg.plot_size,
            point_radius: cfg.point_radius,
            legend_tick_count: cfg.legend_tick_count,
            tooltip_decimals: cfg.tooltip_decimals,
            features: cfg.features.clone(),
            filter_ctrl: cfg.controllers.filter.clone(),
            event_ctrl: cfg.controllers.event.clone(),
            last_hover: None,
            panel_id: PANEL_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Attach controllers after construction (for embedded usage).
    ///
    /// While controllers are attached the panel keeps a frame-rate repaint
    /// request alive, so requests queued from other threads are drained
    /// even when the host window receives no input.
    pub fn set_controllers(
        &mut self,
        filter_ctrl: Option<FilterController>,
        event_ctrl: Option<EventController>,
    ) {
        self.filter_ctrl = filter_ctrl;
        self.event_ctrl = event_ctrl;
    }

    /// The currently selected legend threshold, if any.
    pub fn selected_threshold(&self) -> Option<f64> {
        self.filter.selected()
    }

    /// True while a delayed redraw is scheduled but not yet applied.
    pub fn is_redraw_pending(&self) -> bool {
        self.filter.is_redraw_pending()
    }

    /// The dataset as loaded, unaffected by any filtering.
    pub fn original_dataset(&self) -> &Dataset {
        self.filter.original()
    }

    /// The dataset currently on screen.
    pub fn visible_dataset(&self) -> &Dataset {
        self.filter.visible()
    }
}
