//! Color scheme definitions for the scatter grid.
//!
//! A scheme bundles egui visuals with the gradient ramp used to color points
//! and the legend bar. Applying a scheme updates the global ramp.

use eframe::egui::{Color32, Context, Visuals};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::scale::ColorRamp;

// Global gradient ramp used by the plots and the legend. Updated whenever a
// color scheme is applied. The value is copied out so callers can hold it
// across a frame without locking.
static GLOBAL_RAMP: Lazy<Mutex<ColorRamp>> =
    Lazy::new(|| Mutex::new(ColorScheme::Light.gradient()));

/// Get a copy of the current global gradient ramp.
pub fn global_ramp() -> ColorRamp {
    *GLOBAL_RAMP.lock().unwrap()
}

/// Update the global gradient ramp. Called automatically when a
/// [`ColorScheme`] is applied, but user code (or tests) may call it directly.
pub fn set_global_ramp(new: ColorRamp) {
    let mut guard = GLOBAL_RAMP.lock().unwrap();
    *guard = new;
}

/// Visual theme for the grid UI, including user-defined custom schemes.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorScheme {
    /// Light theme with the classic grey-to-red ramp.
    Light,
    /// Dark theme with a ramp lifted for dark backgrounds.
    Dark,
    /// Light theme with a blue highlight ramp.
    Ocean,
    /// Light theme with an orange highlight ramp.
    Ember,
    /// Pure-black background with a maximally visible ramp.
    HighContrast,
    /// User-defined custom color scheme.
    Custom(CustomColorScheme),
}

/// User-defined custom color scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomColorScheme {
    /// Visuals for the egui context (optional, falls back to light).
    pub visuals: Option<Visuals>,
    /// Gradient ramp for points and the legend.
    pub ramp: ColorRamp,
    /// Optional label for UI display.
    pub label: Option<String>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Light
    }
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Light,
            ColorScheme::Dark,
            ColorScheme::Ocean,
            ColorScheme::Ember,
            ColorScheme::HighContrast,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            ColorScheme::Light => "Light".to_string(),
            ColorScheme::Dark => "Dark".to_string(),
            ColorScheme::Ocean => "Ocean".to_string(),
            ColorScheme::Ember => "Ember".to_string(),
            ColorScheme::HighContrast => "High Contrast".to_string(),
            ColorScheme::Custom(custom) => {
                custom.label.clone().unwrap_or_else(|| "Custom".to_string())
            }
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Light | ColorScheme::Ocean | ColorScheme::Ember => {
                ctx.set_visuals(Visuals::light())
            }
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
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
                    ctx.set_visuals(Visuals::light());
                }
            }
        }

        // Refresh the global ramp so plots and legend pick up the gradient
        // that belongs to the newly applied scheme.
        set_global_ramp(self.gradient());
    }

    /// The gradient ramp belonging to this scheme.
    pub fn gradient(&self) -> ColorRamp {
        match self {
            ColorScheme::Light => ColorRamp::default(),
            ColorScheme::Dark => ColorRamp::new(
                Color32::from_rgb(70, 70, 78),
                Color32::from_rgb(255, 64, 64),
            ),
            ColorScheme::Ocean => ColorRamp::new(
                Color32::from_rgb(214, 222, 230),
                Color32::from_rgb(0, 90, 200),
            ),
            ColorScheme::Ember => ColorRamp::new(
                Color32::from_rgb(228, 220, 210),
                Color32::from_rgb(255, 120, 0),
            ),
            ColorScheme::HighContrast => ColorRamp::new(
                Color32::from_rgb(90, 90, 90),
                Color32::from_rgb(255, 255, 0),
            ),
            ColorScheme::Custom(custom) => custom.ramp,
        }
    }
}
