//! Configuration types for the scatter grid UI.

use crate::controllers::FilterController;
use crate::events::EventController;

pub use crate::color_scheme::{ColorScheme, CustomColorScheme};

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal, focused grid for embedded dashboards.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the per-point hover tooltip.
    pub tooltip: bool,
    /// Enable the box-selection drag gesture on plot surfaces.
    pub box_select: bool,
    /// Show the shared gradient legend next to the grid.
    pub legend: bool,
    /// Show the loading overlay while a delayed redraw is pending.
    pub loading_overlay: bool,
    /// Show the "Plot N" title above each plot.
    pub titles: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            tooltip: true,
            box_select: true,
            legend: true,
            loading_overlay: true,
            titles: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Controllers sub-config
// ─────────────────────────────────────────────────────────────────────────────

/// Optional programmatic controllers attached to the grid.
#[derive(Clone, Default)]
pub struct Controllers {
    pub filter: Option<FilterController>,
    pub event: Option<EventController>,
}

// ─────────────────────────────────────────────────────────────────────────────
// ScatterGridConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the scatter grid.
///
/// Organised into sub-configs for clarity:
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `features`     | Toggle individual UI features on/off |
/// | `color_scheme` | Predefined visual theme and gradient ramp |
/// | `controllers`  | Programmatic interaction handles |
#[derive(Clone)]
pub struct ScatterGridConfig {
    // ── Plot geometry ────────────────────────────────────────────────────────
    /// Size of each plot in logical pixels.
    pub plot_size: [f32; 2],
    /// Radius of each scatter point in pixels.
    pub point_radius: f32,
    /// Target number of legend ticks (1/2/5-stepped, so approximate).
    pub legend_tick_count: usize,
    /// Decimal places shown for coordinates in the hover tooltip.
    pub tooltip_decimals: usize,

    // ── Redraw behaviour ─────────────────────────────────────────────────────
    /// Delay in seconds between a filter change and the redraw. The plots
    /// stay removed (loading overlay shown) for this long.
    pub redraw_delay_secs: f64,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the grid.
    pub headline: Option<String>,
    /// Optional subheadline below the headline.
    pub subheadline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Feature flags ────────────────────────────────────────────────────────
    /// Toggle individual UI features on/off.
    pub features: FeatureFlags,

    // ── Appearance ───────────────────────────────────────────────────────────
    /// Color scheme / visual theme.
    pub color_scheme: ColorScheme,

    // ── Programmatic controllers ─────────────────────────────────────────────
    /// External controllers for programmatic interaction.
    pub controllers: Controllers,
}

impl Default for ScatterGridConfig {
    fn default() -> Self {
        Self {
            plot_size: [400.0, 300.0],
            point_radius: 1.5,
            legend_tick_count: 6,
            tooltip_decimals: 4,

            redraw_delay_secs: 1.0,

            title: "ScatterGrid".to_string(),
            headline: None,
            subheadline: None,
            native_options: None,

            features: FeatureFlags::default(),
            color_scheme: ColorScheme::default(),
            controllers: Controllers::default(),
        }
    }
}
