//! Example: Fixed scatter dataset with a shared legend
//!
//! What it demonstrates
//! - Building a [`Dataset`] of four series and showing it with `run_scatter_grid`.
//! - Clicking a legend tick to filter every plot by color threshold; clicking
//!   the same tick (or the marker line) restores the full dataset.
//! - Hovering points for a value tooltip and dragging a selection box.
//!
//! How to run
//! ```bash
//! cargo run --example grid_basic
//! ```

use scattergrid::{run_scatter_grid, Dataset, ScatterGridConfig, Series};

/// Cheap deterministic generator so the demo needs no extra dependencies.
fn next_unit(state: &mut u64) -> f64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    (*state >> 11) as f64 / (1u64 << 53) as f64
}

fn demo_dataset() -> Dataset {
    let mut rng = 0x5eed_cafe_d00d_u64;
    let n = 200;
    let mut all = Vec::new();
    for plot in 0..4 {
        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        let mut color = Vec::with_capacity(n);
        for _ in 0..n {
            let a = next_unit(&mut rng);
            let b = next_unit(&mut rng);
            // Give each plot its own cloud shape and value range.
            let (px, py) = match plot {
                0 => (a * 10.0, b * 10.0),
                1 => (a * 4.0 - 2.0, a * 4.0 - 2.0 + (b - 0.5)),
                2 => {
                    let angle = a * std::f64::consts::TAU;
                    ((1.0 + b) * angle.cos(), (1.0 + b) * angle.sin())
                }
                _ => (a * 100.0, (a * b).sqrt() * 10.0),
            };
            x.push(px);
            y.push(py);
            // Log-normalised intensity, roughly 0..4.6.
            color.push((1.0 + 99.0 * a * b).ln());
        }
        all.push(Series::new(x, y, color));
    }
    Dataset::new(all)
}

fn main() -> eframe::Result<()> {
    let mut cfg = ScatterGridConfig::default();
    cfg.title = "ScatterGrid demo".to_string();
    cfg.headline = Some("Scatter plots with a shared color legend".to_string());
    cfg.subheadline =
        Some("Click a legend tick to filter by color threshold; click it again to reset.".to_string());

    run_scatter_grid(demo_dataset(), cfg)
}
