//! Per-frame update logic for [`ScatterGridPanel`].
//!
//! This module contains the methods that drive each frame of the grid:
//!
//! * **[`update`](ScatterGridPanel::update)** – the top-level entry point
//!   called every frame. It drains controller requests, applies any due
//!   redraw, renders the plot grid and the legend, and turns this frame's
//!   interactions into filter changes and events.
//! * The private helpers below it handle controller request draining,
//!   event emission, and the per-frame [`FilterInfo`] snapshot.

use std::time::{Duration, Instant};

use eframe::egui;
use egui_phosphor::regular::HOURGLASS_MEDIUM;

use crate::color_scheme::global_ramp;
use crate::controllers::FilterInfo;
use crate::data::filter::TickAction;
use crate::events::{BoxSelectMeta, EventKind, FilterMeta, GridEvent, HoverMeta};
use crate::panels::{show_legend, show_plot, LegendResponse, PlotStyle};

use super::ScatterGridPanel;

impl ScatterGridPanel {
    /// Main per-frame update: process controllers, poll the redraw timer,
    /// then draw the plot grid with the shared legend.
    ///
    /// Call this from an egui `Ui` context each frame. In standalone mode it
    /// is called by [`ScatterGridApp`](super::ScatterGridApp); in embedded
    /// mode the host application calls it directly.
    pub fn update(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();

        self.process_controller_requests(now);

        if self.filter.poll(now) {
            if let Some(ctrl) = &self.event_ctrl {
                let evt =
                    GridEvent::new(EventKind::REDRAW_FINISHED).with_filter(self.filter_meta());
                ctrl.emit(evt);
            }
        }

        let ramp = global_ramp();
        // The legend always spans the color extent of the full dataset, even
        // while a filter hides part of it.
        let legend_domain = self.filter.original().color_bounds();
        let selected = self.filter.selected();
        let style = PlotStyle {
            size: self.plot_size,
            point_radius: self.point_radius,
            tooltip_decimals: self.tooltip_decimals,
            show_title: self.features.titles,
            tooltip: self.features.tooltip,
            box_select: self.features.box_select,
        };
        let legend_enabled = self.features.legend;
        let show_loading = self.features.loading_overlay && self.filter.is_redraw_pending();
        let tick_count = self.legend_tick_count;
        let bar_height = self.plot_size[1];
        let panel_id = self.panel_id;

        let mut hovered: Option<HoverMeta> = None;
        let mut box_started: Option<usize> = None;
        let mut box_finished: Option<usize> = None;
        let mut legend_resp = LegendResponse::default();

        {
            let filter = &self.filter;
            let selections = &mut self.selections;
            ui.push_id(("scatter_grid", panel_id), |ui| {
                ui.horizontal_wrapped(|ui| {
                    // While the delayed redraw is pending the plots are gone,
                    // so the indicator takes their place in the row.
                    if show_loading {
                        ui.add(egui::Spinner::new());
                        ui.label(format!("{HOURGLASS_MEDIUM} Loading..."));
                    }

                    for (i, series) in filter.visible().series.iter().enumerate() {
                        let Some(selection) = selections.get_mut(i) else {
                            continue;
                        };
                        let interaction = show_plot(ui, series, i, selection, &style, &ramp);
                        if interaction.hovered.is_some() {
                            hovered = interaction.hovered;
                        }
                        if interaction.box_started {
                            box_started = Some(i);
                        }
                        if interaction.box_finished {
                            box_finished = Some(i);
                        }
                    }

                    // The legend stays up through filtering and redraws; it
                    // only disappears when there is no color data at all.
                    if legend_enabled {
                        if let Some(domain) = legend_domain {
                            legend_resp =
                                show_legend(ui, domain, selected, tick_count, bar_height, &ramp);
                        }
                    }
                });
            });
        }

        self.handle_hover(hovered);

        if let Some(plot_index) = box_started {
            self.emit_box_event(EventKind::BOX_SELECT_STARTED, plot_index);
        }
        if let Some(plot_index) = box_finished {
            self.emit_box_event(EventKind::BOX_SELECT_FINISHED, plot_index);
        }

        if let Some(value) = legend_resp.clicked_tick {
            match self.filter.tick_clicked(value, now) {
                TickAction::Filtered(_) => {
                    self.on_filter_scheduled(EventKind::TICK_CLICKED | EventKind::FILTER_APPLIED);
                }
                TickAction::Cleared => {
                    self.on_filter_scheduled(EventKind::TICK_CLICKED | EventKind::FILTER_CLEARED);
                }
            }
        } else if legend_resp.marker_clicked {
            self.filter.reset(now);
            self.on_filter_scheduled(EventKind::FILTER_CLEARED);
        }

        self.publish_filter_info();

        // Keep frames coming: a running redraw timer repaints by its
        // deadline, and attached controllers keep a ~60 fps poll going so
        // requests queued between frames get drained without input.
        let frame_poll = Duration::from_millis(16);
        let repaint = match self.filter.time_until_redraw(now) {
            Some(remaining) => Some(remaining.min(frame_poll)),
            None if self.filter_ctrl.is_some() || self.event_ctrl.is_some() => Some(frame_poll),
            None => None,
        };
        if let Some(delay) = repaint {
            ui.ctx().request_repaint_after(delay);
        }
    }

    /// Drain requests queued on the filter controller since the last frame.
    fn process_controller_requests(&mut self, now: Instant) {
        let Some(ctrl) = self.filter_ctrl.clone() else {
            return;
        };
        let (set, clear) = {
            let mut inner = ctrl.inner.lock().unwrap();
            (
                inner.request_set_threshold.take(),
                std::mem::take(&mut inner.request_clear),
            )
        };
        if let Some(value) = set {
            // Re-setting the already applied threshold is a no-op.
            if self.filter.selected() != Some(value) || self.filter.is_redraw_pending() {
                self.filter.set_threshold(value, now);
                self.on_filter_scheduled(EventKind::FILTER_APPLIED);
            }
        } else if clear && (self.filter.selected().is_some() || self.filter.is_redraw_pending()) {
            self.filter.reset(now);
            self.on_filter_scheduled(EventKind::FILTER_CLEARED);
        }
    }

    /// A filter change was just scheduled: the plots are about to go blank,
    /// so drop their box selections and tell subscribers a redraw is coming.
    fn on_filter_scheduled(&mut self, kinds: EventKind) {
        for selection in &mut self.selections {
            selection.clear();
        }
        self.last_hover = None;
        if let Some(ctrl) = &self.event_ctrl {
            let evt =
                GridEvent::new(kinds | EventKind::REDRAW_STARTED).with_filter(self.filter_meta());
            ctrl.emit(evt);
        }
    }

    /// Emit a hover event when the pointed-at point changes.
    fn handle_hover(&mut self, hovered: Option<HoverMeta>) {
        let key = hovered.map(|h| (h.plot_index, h.point_index));
        if key == self.last_hover {
            return;
        }
        self.last_hover = key;
        if let (Some(meta), Some(ctrl)) = (hovered, &self.event_ctrl) {
            ctrl.emit(GridEvent::new(EventKind::POINT_HOVERED).with_hover(meta));
        }
    }

    fn emit_box_event(&self, kinds: EventKind, plot_index: usize) {
        if let Some(ctrl) = &self.event_ctrl {
            let rect = self.selections.get(plot_index).and_then(|s| s.rect);
            let evt = GridEvent::new(kinds).with_box_select(BoxSelectMeta { plot_index, rect });
            ctrl.emit(evt);
        }
    }

    /// Filter summary for events: the state the current selection resolves
    /// to once any pending redraw lands.
    fn filter_meta(&self) -> FilterMeta {
        let total_points = self.filter.original().total_points();
        let visible_points = match self.filter.selected() {
            Some(t) => self.filter.original().filtered(t).total_points(),
            None => total_points,
        };
        FilterMeta {
            threshold: self.filter.selected(),
            visible_points,
            total_points,
        }
    }

    /// Push the current filter snapshot to controller listeners when it
    /// differs from the last published one.
    fn publish_filter_info(&self) {
        let Some(ctrl) = &self.filter_ctrl else {
            return;
        };
        let info = FilterInfo {
            threshold: self.filter.selected(),
            redraw_pending: self.filter.is_redraw_pending(),
            visible_points: self.filter.visible().total_points(),
            total_points: self.filter.original().total_points(),
        };
        let mut inner = ctrl.inner.lock().unwrap();
        if inner.last_info != Some(info) {
            inner.last_info = Some(info);
            inner.listeners.retain(|s| s.send(info).is_ok());
        }
    }
}
