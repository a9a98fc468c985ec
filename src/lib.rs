//! ScatterGrid crate root: re-exports and module wiring.
//!
//! This crate provides a ready-to-use scatter-plot grid UI built on
//! egui/eframe: a dataset rendered as a row-wrapped grid of fixed-size
//! scatter plots that share one color legend, with threshold filtering
//! driven by legend clicks, hover tooltips, and a per-plot box-selection
//! gesture.
//!
//! The implementation is organised into cohesive modules:
//! - `data`: series/dataset types, the threshold filter, box selection
//! - `scale`: linear scales, tick generation, and the color ramp
//! - `panels`: the plot surface and legend renderers
//! - `app`: the embeddable panel, the standalone eframe app, and [`run_scatter_grid`]
//! - `controllers`: programmatic filter control for host applications
//! - `events`: subscribable UI event stream
//! - `config`: shared configuration and feature flags
//! - `color_scheme`: visual themes and the global color ramp

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod controllers;
pub mod data;
pub mod events;
pub mod panels;
pub mod scale;

// Public re-exports for a compact external API
pub use app::{run_scatter_grid, ScatterGridApp, ScatterGridPanel};
pub use color_scheme::{global_ramp, set_global_ramp, ColorScheme, CustomColorScheme};
pub use config::{Controllers, FeatureFlags, ScatterGridConfig};
pub use controllers::{FilterController, FilterInfo};
pub use data::filter::{FilterState, TickAction, DEFAULT_REDRAW_DELAY};
pub use data::selection::BoxSelection;
pub use data::series::{Dataset, Series};
pub use events::{
    BoxSelectMeta, EventController, EventFilter, EventKind, FilterMeta, GridEvent, HoverMeta,
};
pub use scale::{ticks, ColorRamp, LinearScale};
