//! Threshold filter state and the delayed-redraw machinery.
//!
//! [`FilterState`] owns everything the legend interaction mutates: the
//! active threshold, the dataset currently on screen, and the redraw that is
//! still waiting on its delay. Scheduling a redraw clears the visible plots
//! right away (the loading overlay covers the gap) and a newer request
//! replaces any pending one, so the last click always wins.

use std::time::{Duration, Instant};

use crate::data::series::Dataset;

/// Delay between a filter change and the redraw becoming visible.
pub const DEFAULT_REDRAW_DELAY: Duration = Duration::from_millis(1000);

/// A redraw that has been scheduled but not yet applied.
#[derive(Debug, Clone)]
pub struct PendingRedraw {
    /// When the new data becomes visible.
    pub apply_at: Instant,
    /// The dataset to show once the deadline passes.
    pub data: Dataset,
}

/// What a legend tick click did, so callers can report it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickAction {
    /// The threshold was set and a filtered redraw scheduled.
    Filtered(f64),
    /// The same tick was clicked again and the filter was cleared.
    Cleared,
}

/// Filter and redraw state for one grid instance.
#[derive(Debug, Clone)]
pub struct FilterState {
    /// The dataset as loaded. Filters always derive from this, never from
    /// the currently filtered view.
    original: Dataset,
    /// What the grid currently shows. Empty while a redraw is pending.
    visible: Dataset,
    /// Active threshold, `None` when unfiltered.
    selected: Option<f64>,
    /// Scheduled redraw, if any.
    pending: Option<PendingRedraw>,
    pub redraw_delay: Duration,
}

impl FilterState {
    pub fn new(original: Dataset) -> Self {
        let visible = original.clone();
        Self {
            original,
            visible,
            selected: None,
            pending: None,
            redraw_delay: DEFAULT_REDRAW_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.redraw_delay = delay;
        self
    }

    pub fn original(&self) -> &Dataset {
        &self.original
    }

    /// The dataset the grid should render this frame.
    pub fn visible(&self) -> &Dataset {
        &self.visible
    }

    pub fn selected(&self) -> Option<f64> {
        self.selected
    }

    pub fn is_redraw_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a click on the legend tick for `value`.
    ///
    /// Clicking the tick whose value is already selected clears the filter;
    /// any other tick replaces the active threshold and re-filters from the
    /// original dataset.
    pub fn tick_clicked(&mut self, value: f64, now: Instant) -> TickAction {
        if self.selected == Some(value) {
            self.reset(now);
            TickAction::Cleared
        } else {
            self.set_threshold(value, now);
            TickAction::Filtered(value)
        }
    }

    /// Activate `value` as the threshold and schedule the filtered redraw.
    pub fn set_threshold(&mut self, value: f64, now: Instant) {
        self.selected = Some(value);
        let data = self.original.filtered(value);
        self.schedule(data, now);
    }

    /// Clear the filter and schedule a redraw of the original dataset.
    pub fn reset(&mut self, now: Instant) {
        self.selected = None;
        let data = self.original.clone();
        self.schedule(data, now);
    }

    /// Apply the pending redraw if its deadline has passed. Returns `true`
    /// when new data became visible.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = matches!(&self.pending, Some(p) if now >= p.apply_at);
        if due {
            if let Some(p) = self.pending.take() {
                self.visible = p.data;
            }
        }
        due
    }

    /// Time left before the pending redraw applies, `None` when idle.
    pub fn time_until_redraw(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.apply_at.saturating_duration_since(now))
    }

    // Replaces any pending redraw: the plots disappear immediately and only
    // the newest requested data will be shown once the delay elapses.
    fn schedule(&mut self, data: Dataset, now: Instant) {
        self.visible = Dataset::default();
        self.pending = Some(PendingRedraw {
            apply_at: now + self.redraw_delay,
            data,
        });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::series::Series;

    fn dataset() -> Dataset {
        Dataset::new(vec![Series::new(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 1.0, 2.0],
            vec![1.0, 5.0, 9.0],
        )])
    }

    fn state() -> FilterState {
        FilterState::new(dataset()).with_delay(Duration::from_millis(100))
    }

    #[test]
    fn starts_unfiltered_with_full_dataset_visible() {
        let st = state();
        assert_eq!(st.selected(), None);
        assert!(!st.is_redraw_pending());
        assert_eq!(st.visible(), st.original());
    }

    #[test]
    fn scheduling_clears_plots_until_the_deadline() {
        let mut st = state();
        let t0 = Instant::now();
        assert_eq!(st.tick_clicked(5.0, t0), TickAction::Filtered(5.0));

        // Plots are removed immediately; the filtered data is not visible yet.
        assert!(st.visible().is_empty());
        assert!(st.is_redraw_pending());
        assert!(!st.poll(t0 + Duration::from_millis(99)));
        assert!(st.visible().is_empty());

        assert!(st.poll(t0 + Duration::from_millis(100)));
        assert!(!st.is_redraw_pending());
        assert_eq!(st.visible().series[0].color, vec![5.0, 9.0]);
    }

    #[test]
    fn repeat_click_restores_the_original() {
        let mut st = state();
        let t0 = Instant::now();
        st.tick_clicked(5.0, t0);
        st.poll(t0 + st.redraw_delay);

        assert_eq!(st.tick_clicked(5.0, t0), TickAction::Cleared);
        assert_eq!(st.selected(), None);
        st.poll(t0 + st.redraw_delay + st.redraw_delay);
        assert_eq!(st.visible(), st.original());
    }

    #[test]
    fn a_new_threshold_replaces_the_old_one() {
        let mut st = state();
        let t0 = Instant::now();
        st.tick_clicked(9.0, t0);
        st.poll(t0 + st.redraw_delay);
        assert_eq!(st.visible().series[0].color, vec![9.0]);

        // Clicking a different tick filters from the original, not from the
        // currently visible subset.
        st.tick_clicked(5.0, t0);
        st.poll(t0 + st.redraw_delay);
        assert_eq!(st.visible().series[0].color, vec![5.0, 9.0]);
        assert_eq!(st.selected(), Some(5.0));
    }

    #[test]
    fn newer_requests_cancel_pending_redraws() {
        let mut st = state();
        let t0 = Instant::now();
        st.tick_clicked(9.0, t0);
        // Second click lands inside the delay window of the first.
        let t1 = t0 + Duration::from_millis(50);
        st.tick_clicked(5.0, t1);

        // The first deadline passes without applying anything.
        assert!(!st.poll(t0 + Duration::from_millis(100)));
        assert!(st.visible().is_empty());

        // Only the newest request ever becomes visible.
        assert!(st.poll(t1 + Duration::from_millis(100)));
        assert_eq!(st.visible().series[0].color, vec![5.0, 9.0]);
        assert!(!st.poll(t1 + Duration::from_millis(200)));
    }

    #[test]
    fn time_until_redraw_counts_down() {
        let mut st = state();
        let t0 = Instant::now();
        assert_eq!(st.time_until_redraw(t0), None);
        st.tick_clicked(5.0, t0);
        assert_eq!(
            st.time_until_redraw(t0 + Duration::from_millis(40)),
            Some(Duration::from_millis(60))
        );
        // Past the deadline the remaining time saturates at zero.
        assert_eq!(
            st.time_until_redraw(t0 + Duration::from_millis(150)),
            Some(Duration::ZERO)
        );
    }
}
