//! Example: Programmatic filtering and event listening
//!
//! What it demonstrates
//! - Creating a [`FilterController`] and an [`EventController`] and attaching
//!   them to [`ScatterGridConfig`] so external code can drive the grid.
//! - Cycling the color threshold from a background thread.
//! - Receiving filter lifecycle events and state snapshots on channels.
//!
//! How to run
//! ```bash
//! cargo run --example filter_events
//! ```
//! Watch the terminal while the background thread cycles the threshold; legend
//! clicks in the UI show up on the same event stream.

use std::time::Duration;

use scattergrid::{
    run_scatter_grid, Dataset, EventController, EventFilter, EventKind, FilterController,
    ScatterGridConfig, Series,
};

fn demo_dataset() -> Dataset {
    let n = 120;
    let mut all = Vec::new();
    for plot in 0..4 {
        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        let mut color = Vec::with_capacity(n);
        for i in 0..n {
            let t = i as f64 / n as f64;
            let angle = std::f64::consts::TAU * t * (2.0 + plot as f64);
            let radius = 0.3 + 2.0 * t;
            x.push(radius * angle.cos());
            y.push(radius * angle.sin());
            color.push(4.0 * t);
        }
        all.push(Series::new(x, y, color));
    }
    Dataset::new(all)
}

fn main() -> eframe::Result<()> {
    let filter_ctrl = FilterController::new();
    let event_ctrl = EventController::new();

    // Print filter lifecycle events on a background thread.
    let events = event_ctrl.subscribe(EventFilter::only(
        EventKind::FILTER_APPLIED | EventKind::FILTER_CLEARED | EventKind::REDRAW_FINISHED,
    ));
    std::thread::spawn(move || {
        while let Ok(evt) = events.recv() {
            if let Some(f) = &evt.filter {
                println!(
                    "[event] t={:.3}s {} threshold={:?} visible={}/{}",
                    evt.timestamp, evt.kinds, f.threshold, f.visible_points, f.total_points
                );
            }
        }
        println!("[event] channel closed");
    });

    // Watch the state snapshots the grid publishes every time they change.
    let info_rx = filter_ctrl.subscribe();
    std::thread::spawn(move || {
        while let Ok(info) = info_rx.recv() {
            println!(
                "[info] threshold={:?} pending={} visible={}/{}",
                info.threshold, info.redraw_pending, info.visible_points, info.total_points
            );
        }
    });

    // Cycle the threshold programmatically, ending each round with a reset.
    let driver = filter_ctrl.clone();
    std::thread::spawn(move || loop {
        for threshold in [1.0, 2.0, 3.0] {
            std::thread::sleep(Duration::from_secs(4));
            driver.set_threshold(threshold);
        }
        std::thread::sleep(Duration::from_secs(4));
        driver.clear();
    });

    let mut cfg = ScatterGridConfig::default();
    cfg.title = "ScatterGrid events demo".to_string();
    cfg.controllers.filter = Some(filter_ctrl);
    cfg.controllers.event = Some(event_ctrl);

    run_scatter_grid(demo_dataset(), cfg)
}
