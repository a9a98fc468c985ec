//! Scatter plot surfaces.
//!
//! Each series is rendered as one fixed-size, non-interactive
//! [`egui_plot::Plot`]: no panning, zooming or scrolling, axes and grid
//! hidden, bounds pinned to the exact extent of the data. On top of the
//! plot this module layers the interactions the grid needs itself:
//! nearest-point hover tooltips and the rectangular box selection.

use egui;
use egui_plot::{Plot, Points};

use crate::data::selection::BoxSelection;
use crate::data::series::Series;
use crate::events::HoverMeta;
use crate::scale::{ColorRamp, LinearScale};

/// Pointer must be within this many pixels of a point for it to count as hovered.
const HOVER_RADIUS_PX: f32 = 8.0;
/// Points sharing a quantized ramp position are drawn as one batch.
const COLOR_BUCKETS: usize = 32;
/// Vertical space reserved above each plot for its title.
const PLOT_TITLE_HEIGHT: f32 = 24.0;

/// What the pointer did on one plot surface this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotInteraction {
    /// Point under the pointer, if any.
    pub hovered: Option<HoverMeta>,
    /// A box selection drag started on this surface.
    pub box_started: bool,
    /// A box selection drag ended on this surface.
    pub box_finished: bool,
}

/// Visual parameters shared by every plot surface in the grid.
#[derive(Debug, Clone, Copy)]
pub struct PlotStyle {
    /// Plot surface size in pixels, excluding the title strip.
    pub size: [f32; 2],
    /// Marker radius in pixels.
    pub point_radius: f32,
    /// Decimal places used for the tooltip coordinates.
    pub tooltip_decimals: usize,
    /// Paint the "Plot N" title above the surface.
    pub show_title: bool,
    /// Enable the hover tooltip.
    pub tooltip: bool,
    /// Enable the box selection gesture.
    pub box_select: bool,
}

/// Render one scatter plot with its title, tooltip and box selection.
///
/// `selection` is this surface's own box state; it is mutated in place as
/// the primary-button drag progresses and the stored rectangle (if any)
/// is painted over the plot, clipped to its frame.
pub fn show_plot(
    ui: &mut egui::Ui,
    series: &Series,
    index: usize,
    selection: &mut BoxSelection,
    style: &PlotStyle,
    ramp: &ColorRamp,
) -> PlotInteraction {
    let mut out = PlotInteraction::default();
    let [plot_w, plot_h] = style.size;

    ui.vertical(|ui| {
        if style.show_title {
            let (title_rect, _) = ui.allocate_exact_size(
                egui::vec2(plot_w, PLOT_TITLE_HEIGHT),
                egui::Sense::hover(),
            );
            if ui.is_rect_visible(title_rect) {
                ui.painter().text(
                    title_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("Plot {}", index + 1),
                    egui::FontId::proportional(16.0),
                    ui.visuals().text_color(),
                );
            }
        }

        let plot = Plot::new(format!("scatter_plot_{index}"))
            .width(plot_w)
            .height(plot_h)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false);

        let plot_resp = plot.show(ui, |plot_ui| {
            // Pin the view to the exact data extent; degenerate extents get
            // the usual scale padding so the view never collapses.
            if let (Some((x0, x1)), Some((y0, y1))) = (series.x_bounds(), series.y_bounds()) {
                let (x0, x1) = LinearScale::new(x0, x1).domain();
                let (y0, y1) = LinearScale::new(y0, y1).domain();
                plot_ui.set_plot_bounds_x(x0..=x1);
                plot_ui.set_plot_bounds_y(y0..=y1);
            }

            // A Points item carries a single color, so the points are drawn
            // one batch per ramp bucket, colored against the series' own
            // color range rather than the shared legend domain.
            for (b, group) in series.color_buckets(COLOR_BUCKETS).into_iter().enumerate() {
                if group.is_empty() {
                    continue;
                }
                let t = b as f64 / (COLOR_BUCKETS - 1) as f64;
                let pts: Vec<[f64; 2]> = group.iter().map(|&i| [series.x[i], series.y[i]]).collect();
                plot_ui.points(
                    Points::new(format!("points_{b}"), pts)
                        .color(ramp.sample(t))
                        .radius(style.point_radius),
                );
            }
        });

        let resp = &plot_resp.response;

        if style.tooltip && !series.is_empty() {
            if let Some(pointer) = resp.hover_pos() {
                let plot_pos = plot_resp.transform.value_from_position(pointer);
                let bounds = plot_resp.transform.bounds();
                let (bw, bh) = (bounds.width(), bounds.height());

                // Nearest point, measured in approximate pixels: each axis
                // delta is a fraction of the visible span times the surface
                // size, so the hover radius holds regardless of data scale.
                let mut best: Option<(usize, f64)> = None;
                for i in 0..series.len() {
                    let dx = (series.x[i] - plot_pos.x) / bw * plot_w as f64;
                    let dy = (series.y[i] - plot_pos.y) / bh * plot_h as f64;
                    let d2 = dx * dx + dy * dy;
                    if best.map_or(true, |(_, best_d2)| d2 < best_d2) {
                        best = Some((i, d2));
                    }
                }
                if let Some((i, d2)) = best {
                    if d2 <= (HOVER_RADIUS_PX * HOVER_RADIUS_PX) as f64 {
                        let (x, y, color) = (series.x[i], series.y[i], series.color[i]);
                        out.hovered = Some(HoverMeta {
                            plot_index: index,
                            point_index: i,
                            x,
                            y,
                            color,
                        });
                        let decimals = style.tooltip_decimals;
                        resp.clone().on_hover_ui_at_pointer(|ui| {
                            ui.label(format!("Value: {}", color));
                            ui.label(format!("X1: {:.*}", decimals, x));
                            ui.label(format!("X2: {:.*}", decimals, y));
                        });
                    }
                }
            }
        }

        if style.box_select {
            // Corners are stored relative to the plot frame, so the
            // rectangle follows its plot when the grid scrolls or reflows.
            let origin = resp.rect.min;
            let local = |pos: egui::Pos2| [pos.x - origin.x, pos.y - origin.y];

            if resp.drag_started_by(egui::PointerButton::Primary) {
                if let Some(pos) = resp.interact_pointer_pos() {
                    selection.begin(local(pos));
                    out.box_started = true;
                }
            } else if resp.dragged_by(egui::PointerButton::Primary) {
                if let Some(pos) = resp.interact_pointer_pos() {
                    selection.update(local(pos));
                }
            } else if resp.drag_stopped_by(egui::PointerButton::Primary) {
                selection.finish();
                out.box_finished = true;
            }

            // The rectangle outlives the drag; it stays up until the next
            // redraw clears it.
            if let Some((min, max)) = selection.rect_at([origin.x, origin.y]) {
                let rect =
                    egui::Rect::from_min_max(egui::pos2(min[0], min[1]), egui::pos2(max[0], max[1]));
                let color = if ui.visuals().dark_mode {
                    egui::Color32::WHITE
                } else {
                    egui::Color32::BLACK
                };
                ui.painter().with_clip_rect(resp.rect).rect_stroke(
                    rect,
                    egui::CornerRadius::ZERO,
                    egui::Stroke::new(1.0, color),
                    egui::StrokeKind::Middle,
                );
            }
        }
    });

    out
}
