//! Scale primitives for mapping data values onto screen coordinates and colors.
//!
//! [`LinearScale`] maps a data domain `[min, max]` linearly onto an output
//! range (pixels, or `[0, 1]` for normalized positions). [`ColorRamp`]
//! interpolates between a neutral and a highlight color. [`ticks`] produces
//! round axis values at 1/2/5 × 10^k steps.
//!
//! Scales are derived fresh from the data handed to each render pass and are
//! never cached across redraws.

use egui::Color32;

// ─────────────────────────────────────────────────────────────────────────────
// LinearScale
// ─────────────────────────────────────────────────────────────────────────────

/// A linear mapping from a data domain onto an output range.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a scale over `[min, max]` with a normalized `[0, 1]` range.
    ///
    /// A degenerate domain (`min == max`) is padded symmetrically so the
    /// single value maps to the middle of the range.
    pub fn new(min: f64, max: f64) -> Self {
        let domain = if min >= max {
            let padding = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
            (min - padding, max + padding)
        } else {
            (min, max)
        };
        Self {
            domain,
            range: (0.0, 1.0),
        }
    }

    /// Create a scale whose domain spans the min/max of `values`.
    ///
    /// An empty (or all-NaN) input falls back to the `[0, 1]` domain.
    pub fn from_values(values: &[f64]) -> Self {
        match value_bounds(values) {
            Some((min, max)) => Self::new(min, max),
            None => Self::new(0.0, 1.0),
        }
    }

    /// Replace the output range (e.g. pixel coordinates). The range may be
    /// inverted (`a > b`) for screen-space axes that grow downwards.
    pub fn with_range(mut self, a: f64, b: f64) -> Self {
        self.range = (a, b);
        self
    }

    /// Map a domain value onto the range.
    pub fn transform(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span == 0.0 {
            return self.range.0 + 0.5 * (self.range.1 - self.range.0);
        }
        let t = (value - d0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// The (possibly padded) domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The output range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Min/max over the finite entries of `values`, or `None` if there are none.
pub fn value_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(v), max.max(v)),
            None => (v, v),
        });
    }
    bounds
}

// ─────────────────────────────────────────────────────────────────────────────
// Ticks
// ─────────────────────────────────────────────────────────────────────────────

/// Round values inside `[min, max]`, roughly `count` of them.
///
/// Ticks land on 1/2/5 × 10^k steps, so the count is a target rather than an
/// exact promise. A degenerate domain yields the single value; a non-finite
/// one yields nothing.
pub fn ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || count == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    let (start, stop, reversed) = if min < max {
        (min, max, false)
    } else {
        (max, min, true)
    };
    let step = tick_increment(start, stop, count);
    let mut out: Vec<f64> = if step > 0.0 {
        let i0 = (start / step).ceil() as i64;
        let i1 = (stop / step).floor() as i64;
        (i0..=i1).map(|i| i as f64 * step).collect()
    } else {
        // Sub-unit steps are represented as a negative divisor so tick
        // values come out of a division, which keeps them exact for
        // steps like 0.1 that have no clean binary representation.
        let inv = -step;
        let i0 = (start * inv).ceil() as i64;
        let i1 = (stop * inv).floor() as i64;
        (i0..=i1).map(|i| i as f64 / inv).collect()
    };
    if reversed {
        out.reverse();
    }
    out
}

/// Step size for [`ticks`]: the power of ten nearest to `span / count`,
/// snapped up to a 1, 2 or 5 multiple. Returns a negative divisor for
/// sub-unit steps.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let unit = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        unit * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / unit
    }
}

/// Decimal places needed to print ticks separated by `step` without
/// truncating them (0 for integer steps).
pub fn tick_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let power = step.log10().floor();
    if power >= 0.0 {
        0
    } else {
        (-power) as usize
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ColorRamp
// ─────────────────────────────────────────────────────────────────────────────

/// Two-stop linear color interpolation from a neutral to a highlight color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRamp {
    pub neutral: Color32,
    pub highlight: Color32,
}

impl ColorRamp {
    pub const fn new(neutral: Color32, highlight: Color32) -> Self {
        Self { neutral, highlight }
    }

    /// Color at normalized position `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> Color32 {
        let t = t.clamp(0.0, 1.0) as f32;
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color32::from_rgb(
            lerp(self.neutral.r(), self.highlight.r()),
            lerp(self.neutral.g(), self.highlight.g()),
            lerp(self.neutral.b(), self.highlight.b()),
        )
    }
}

impl Default for ColorRamp {
    /// Light grey to pure red, the ramp the plots and legend start with.
    fn default() -> Self {
        Self::new(Color32::from_rgb(220, 220, 220), Color32::from_rgb(255, 0, 0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_maps_domain_onto_range() {
        let s = LinearScale::new(0.0, 10.0).with_range(0.0, 300.0);
        assert_eq!(s.transform(0.0), 0.0);
        assert_eq!(s.transform(10.0), 300.0);
        assert_eq!(s.transform(5.0), 150.0);
    }

    #[test]
    fn transform_supports_inverted_range() {
        // Screen-space y grows downwards, so legend scales invert the range.
        let s = LinearScale::new(0.0, 1.0).with_range(200.0, 0.0);
        assert_eq!(s.transform(0.0), 200.0);
        assert_eq!(s.transform(1.0), 0.0);
        assert_eq!(s.transform(0.25), 150.0);
    }

    #[test]
    fn degenerate_domain_is_padded() {
        let s = LinearScale::new(4.0, 4.0);
        let (d0, d1) = s.domain();
        assert!(d0 < 4.0 && 4.0 < d1);
        assert!((s.transform(4.0) - 0.5).abs() < 1e-12);

        let z = LinearScale::new(0.0, 0.0);
        assert_eq!(z.domain(), (-1.0, 1.0));
    }

    #[test]
    fn from_values_scans_bounds() {
        let s = LinearScale::from_values(&[3.0, -1.0, 7.5, 2.0]);
        assert_eq!(s.domain(), (-1.0, 7.5));
        // Empty input gets the fallback domain instead of NaN.
        let e = LinearScale::from_values(&[]);
        assert_eq!(e.domain(), (0.0, 1.0));
    }

    #[test]
    fn ticks_use_round_steps() {
        assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(
            ticks(1.0, 9.0, 6),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn ticks_handle_degenerate_domains() {
        assert_eq!(ticks(3.0, 3.0, 6), vec![3.0]);
        assert!(ticks(f64::NAN, 1.0, 6).is_empty());
        assert!(ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn tick_decimals_track_step_size() {
        assert_eq!(tick_decimals(2.0), 0);
        assert_eq!(tick_decimals(0.2), 1);
        assert_eq!(tick_decimals(0.05), 2);
    }

    #[test]
    fn ramp_interpolates_per_channel() {
        let ramp = ColorRamp::default();
        assert_eq!(ramp.sample(0.0), Color32::from_rgb(220, 220, 220));
        assert_eq!(ramp.sample(1.0), Color32::from_rgb(255, 0, 0));
        let mid = ramp.sample(0.5);
        assert_eq!(mid.r(), 238); // 220 + 35/2, rounded
        assert_eq!(mid.g(), 110);
        assert_eq!(mid.b(), 110);
    }

    #[test]
    fn ramp_clamps_out_of_range_positions() {
        let ramp = ColorRamp::default();
        assert_eq!(ramp.sample(-0.5), ramp.sample(0.0));
        assert_eq!(ramp.sample(1.5), ramp.sample(1.0));
    }
}
