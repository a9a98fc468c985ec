pub mod grid_ui;
pub mod legend_ui;

pub use grid_ui::{show_plot, PlotInteraction, PlotStyle};
pub use legend_ui::{show_legend, LegendResponse};
