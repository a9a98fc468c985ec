//! Dataset model for the scatter grid.
//!
//! A [`Series`] holds three parallel arrays (`x`, `y`, `color`) where index
//! `i` across all three describes one point. A [`Dataset`] is the ordered
//! list of series the grid renders, loaded once and never mutated; filtered
//! views are derived from it on demand.

use serde::{Deserialize, Serialize};

use crate::scale::{value_bounds, LinearScale};

// ─────────────────────────────────────────────────────────────────────────────
// Series
// ─────────────────────────────────────────────────────────────────────────────

/// One scatter series as three equal-length parallel arrays.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Vec<f64>,
}

impl Series {
    /// Build a series from three arrays, truncating to the shortest length
    /// so the parallel-array invariant always holds.
    pub fn new(mut x: Vec<f64>, mut y: Vec<f64>, mut color: Vec<f64>) -> Self {
        let n = x.len().min(y.len()).min(color.len());
        x.truncate(n);
        y.truncate(n);
        color.truncate(n);
        Self { x, y, color }
    }

    /// Build a series from three arrays, rejecting mismatched lengths.
    pub fn try_new(x: Vec<f64>, y: Vec<f64>, color: Vec<f64>) -> Result<Self, String> {
        if x.len() != y.len() || x.len() != color.len() {
            return Err(format!(
                "Series arrays must have equal lengths (x: {}, y: {}, color: {})",
                x.len(),
                y.len(),
                color.len()
            ));
        }
        Ok(Self { x, y, color })
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The `(x, y, color)` triple at index `i`, if in bounds.
    pub fn point(&self, i: usize) -> Option<(f64, f64, f64)> {
        if i < self.len() {
            Some((self.x[i], self.y[i], self.color[i]))
        } else {
            None
        }
    }

    /// Keep only the points whose color value is at or above `threshold`.
    pub fn filtered(&self, threshold: f64) -> Series {
        let mut out = Series::default();
        for i in 0..self.len() {
            if self.color[i] >= threshold {
                out.x.push(self.x[i]);
                out.y.push(self.y[i]);
                out.color.push(self.color[i]);
            }
        }
        out
    }

    /// Min/max of the x values, `None` when the series is empty.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        value_bounds(&self.x)
    }

    /// Min/max of the y values.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        value_bounds(&self.y)
    }

    /// Min/max of the color values.
    pub fn color_bounds(&self) -> Option<(f64, f64)> {
        value_bounds(&self.color)
    }

    /// Group point indices by quantized color-ramp position: the series' own
    /// color extent is normalized onto `buckets` evenly spaced ramp stops and
    /// each point joins the group of its nearest stop. Every index lands in
    /// exactly one group, so each group can be drawn as one same-colored
    /// batch.
    pub fn color_buckets(&self, buckets: usize) -> Vec<Vec<usize>> {
        let buckets = buckets.max(1);
        let scale = LinearScale::from_values(&self.color);
        let mut groups: Vec<Vec<usize>> = vec![Vec::new(); buckets];
        for i in 0..self.len() {
            let t = scale.transform(self.color[i]);
            let b = ((t * (buckets - 1) as f64).round() as usize).min(buckets - 1);
            groups[b].push(i);
        }
        groups
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dataset
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered collection of series. Serializes as a plain JSON array of
/// `{x, y, color}` objects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub series: Vec<Series>,
}

impl Dataset {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    /// Number of series (one plot each).
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }

    /// Total point count across all series.
    pub fn total_points(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    /// Global color min/max across every series, `None` if there are no
    /// points at all. This is the legend's domain and is independent of any
    /// active filter.
    pub fn color_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for s in &self.series {
            if let Some((lo, hi)) = s.color_bounds() {
                bounds = Some(match bounds {
                    Some((min, max)) => (min.min(lo), max.max(hi)),
                    None => (lo, hi),
                });
            }
        }
        bounds
    }

    /// Derive the filtered dataset: per series, keep points with
    /// `color >= threshold`. Always applied to this (the original) dataset,
    /// so successive filters replace rather than stack.
    pub fn filtered(&self, threshold: f64) -> Dataset {
        Dataset {
            series: self.series.iter().map(|s| s.filtered(threshold)).collect(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| format!("Dataset deserialization error: {}", e))
    }

    pub fn to_json_string(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Dataset serialization error: {}", e))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Series {
        Series::new(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![10.0, 11.0, 12.0, 13.0],
            vec![1.0, 5.0, 3.0, 9.0],
        )
    }

    #[test]
    fn new_truncates_to_shortest() {
        let s = Series::new(vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![6.0, 7.0, 8.0]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.x, vec![1.0, 2.0]);
        assert_eq!(s.color, vec![6.0, 7.0]);
    }

    #[test]
    fn try_new_rejects_mismatched_lengths() {
        assert!(Series::try_new(vec![1.0], vec![1.0], vec![1.0]).is_ok());
        assert!(Series::try_new(vec![1.0, 2.0], vec![1.0], vec![1.0]).is_err());
    }

    #[test]
    fn filtered_keeps_only_points_at_or_above_threshold() {
        let f = sample().filtered(3.0);
        assert_eq!(f.x, vec![1.0, 3.0]);
        assert_eq!(f.y, vec![11.0, 13.0]);
        assert_eq!(f.color, vec![5.0, 9.0]);
        assert_eq!(f.x.len(), f.y.len());
        assert_eq!(f.x.len(), f.color.len());
    }

    #[test]
    fn filtered_threshold_is_inclusive() {
        let f = sample().filtered(5.0);
        assert_eq!(f.color, vec![5.0, 9.0]);
    }

    #[test]
    fn color_buckets_assign_every_point_exactly_once() {
        let s = Series::new(
            vec![0.0; 9],
            vec![0.0; 9],
            vec![0.0, 0.5, 1.0, 2.0, 3.5, 5.0, 7.5, 8.0, 9.0],
        );
        let groups = s.color_buckets(8);
        assert_eq!(groups.len(), 8);

        // The groups partition the index set: no point dropped, none drawn
        // twice.
        let mut seen: Vec<usize> = groups.iter().flatten().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..s.len()).collect::<Vec<usize>>());

        assert!(Series::default().color_buckets(8).iter().all(Vec::is_empty));
    }

    #[test]
    fn color_buckets_put_extremes_in_the_end_groups() {
        // sample() colors are [1, 5, 3, 9]: min at index 0, max at index 3.
        let groups = sample().color_buckets(4);
        assert!(groups[0].contains(&0));
        assert!(groups[3].contains(&3));
    }

    #[test]
    fn color_buckets_collapse_constant_colors_into_one_group() {
        let s = Series::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0], vec![4.0; 3]);
        let groups = s.color_buckets(32);
        let occupied: Vec<&Vec<usize>> = groups.iter().filter(|g| !g.is_empty()).collect();
        assert_eq!(occupied.len(), 1);
        assert_eq!(occupied[0].len(), 3);
    }

    #[test]
    fn dataset_color_bounds_span_all_series() {
        let ds = Dataset::new(vec![
            Series::new(vec![0.0], vec![0.0], vec![4.0]),
            Series::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![-2.0, 11.0]),
        ]);
        assert_eq!(ds.color_bounds(), Some((-2.0, 11.0)));
    }

    #[test]
    fn dataset_color_bounds_skip_empty_series() {
        let ds = Dataset::new(vec![
            Series::default(),
            Series::new(vec![0.0], vec![0.0], vec![7.0]),
        ]);
        assert_eq!(ds.color_bounds(), Some((7.0, 7.0)));
        assert_eq!(Dataset::default().color_bounds(), None);
    }

    #[test]
    fn dataset_filter_applies_per_series() {
        let ds = Dataset::new(vec![sample(), sample().filtered(5.0)]);
        let f = ds.filtered(9.0);
        assert_eq!(f.series[0].color, vec![9.0]);
        assert_eq!(f.series[1].color, vec![9.0]);
        assert_eq!(f.total_points(), 2);
    }

    #[test]
    fn json_round_trip_preserves_shape() {
        let ds = Dataset::new(vec![sample()]);
        let json = ds.to_json_string().unwrap();
        // Serializes as a bare array, matching the raw data files.
        assert!(json.starts_with('['));
        assert_eq!(Dataset::from_json_str(&json).unwrap(), ds);
    }

    #[test]
    fn point_access_is_bounds_checked() {
        let s = sample();
        assert_eq!(s.point(1), Some((1.0, 11.0, 5.0)));
        assert_eq!(s.point(4), None);
    }
}
