//! Shared gradient legend with clickable threshold ticks.
//!
//! The legend is painted directly (gradient bar, tick marks, labels) rather
//! than going through `egui_plot`, since it is a fixed-size strip with its
//! own interaction model: every tick is a click target that activates the
//! matching threshold, and the marker line for an active threshold is a
//! click target that clears it.

use egui;

use crate::scale::{tick_decimals, ticks, ColorRamp, LinearScale};

/// Width of the gradient bar in logical pixels.
const BAR_WIDTH: f32 = 20.0;
/// Horizontal space reserved right of the bar for tick marks and labels.
const TICK_GUTTER: f32 = 56.0;
/// Length of the small tick mark protruding from the bar.
const TICK_MARK_LEN: f32 = 4.0;
/// Vertical half-extent of a tick's click zone.
const TICK_HIT_HALF: f32 = 8.0;
/// Height reserved above the bar for the legend title.
const TITLE_HEIGHT: f32 = 24.0;
/// Number of horizontal strips used to paint the gradient.
const GRADIENT_STEPS: usize = 64;

/// What the user did to the legend this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegendResponse {
    /// Tick value that was clicked, if any.
    pub clicked_tick: Option<f64>,
    /// The active-threshold marker line was clicked.
    pub marker_clicked: bool,
}

/// Draw the legend for the given global color domain and report clicks.
///
/// `selected` draws the threshold marker at that value's scale position.
pub fn show_legend(
    ui: &mut egui::Ui,
    domain: (f64, f64),
    selected: Option<f64>,
    tick_count: usize,
    bar_height: f32,
    ramp: &ColorRamp,
) -> LegendResponse {
    let mut out = LegendResponse::default();

    let desired = egui::vec2(BAR_WIDTH + TICK_GUTTER, TITLE_HEIGHT + bar_height);
    let (area, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());
    if !ui.is_rect_visible(area) {
        return out;
    }
    let painter = ui.painter();
    let visuals = ui.visuals();
    let text_color = visuals.text_color();
    let strong_color = visuals.strong_text_color();

    // Title centered over the bar.
    let bar = egui::Rect::from_min_size(
        egui::pos2(area.min.x, area.min.y + TITLE_HEIGHT),
        egui::vec2(BAR_WIDTH, bar_height),
    );
    painter.text(
        egui::pos2(bar.center().x, area.min.y + TITLE_HEIGHT * 0.5),
        egui::Align2::CENTER_CENTER,
        "Legend",
        egui::FontId::proportional(12.0),
        text_color,
    );

    // Gradient bar, neutral at the bottom, highlight at the top.
    for i in 0..GRADIENT_STEPS {
        let t0 = i as f32 / GRADIENT_STEPS as f32;
        let t1 = (i + 1) as f32 / GRADIENT_STEPS as f32;
        // Strip 0 sits at the bottom of the bar.
        let y0 = bar.bottom() - t1 * bar_height;
        let y1 = bar.bottom() - t0 * bar_height;
        let strip = egui::Rect::from_min_max(
            egui::pos2(bar.left(), y0),
            egui::pos2(bar.right(), y1 + 0.5),
        );
        let color = ramp.sample(((t0 + t1) * 0.5) as f64);
        painter.rect_filled(strip, egui::CornerRadius::ZERO, color);
    }
    painter.rect_stroke(
        bar,
        egui::CornerRadius::ZERO,
        egui::Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color),
        egui::StrokeKind::Outside,
    );

    // Value ticks to the right of the bar. The scale range is inverted so
    // the domain maximum lands at the top.
    let scale = LinearScale::new(domain.0, domain.1)
        .with_range(bar.bottom() as f64, bar.top() as f64);
    let tick_values = ticks(domain.0, domain.1, tick_count);
    let step = if tick_values.len() >= 2 {
        tick_values[1] - tick_values[0]
    } else {
        1.0
    };
    let decimals = tick_decimals(step);

    for (i, &value) in tick_values.iter().enumerate() {
        let y = scale.transform(value) as f32;
        let zone = egui::Rect::from_min_max(
            egui::pos2(bar.right(), y - TICK_HIT_HALF),
            egui::pos2(area.max.x, y + TICK_HIT_HALF),
        );
        let resp = ui
            .interact(zone, ui.id().with(("legend_tick", i)), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if resp.clicked() {
            out.clicked_tick = Some(value);
        }

        let painter = ui.painter();
        painter.line_segment(
            [
                egui::pos2(bar.right(), y),
                egui::pos2(bar.right() + TICK_MARK_LEN, y),
            ],
            egui::Stroke::new(1.0, text_color),
        );
        let label_color = if resp.hovered() { strong_color } else { text_color };
        painter.text(
            egui::pos2(bar.right() + TICK_MARK_LEN + 4.0, y),
            egui::Align2::LEFT_CENTER,
            format!("{:.*}", decimals, value),
            egui::FontId::proportional(12.0),
            label_color,
        );
    }

    // Marker line for the active threshold, itself clickable to reset.
    if let Some(value) = selected {
        let y = scale.transform(value) as f32;
        let zone = egui::Rect::from_min_max(
            egui::pos2(bar.left(), y - 5.0),
            egui::pos2(bar.right(), y + 5.0),
        );
        let resp = ui
            .interact(zone, ui.id().with("legend_marker"), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if resp.clicked() {
            out.marker_clicked = true;
        }

        let marker_color = if ui.visuals().dark_mode {
            egui::Color32::WHITE
        } else {
            egui::Color32::BLACK
        };
        let width = if resp.hovered() { 2.0 } else { 1.0 };
        ui.painter().line_segment(
            [egui::pos2(bar.left(), y), egui::pos2(bar.right(), y)],
            egui::Stroke::new(width, marker_color),
        );
    }

    out
}
