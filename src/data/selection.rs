//! Box-selection drag state for one plot surface.
//!
//! Each plot carries its own [`BoxSelection`], so simultaneous drags on
//! different plots cannot interfere with each other. The gesture is purely
//! visual: the rectangle is drawn while dragging, stays on screen after
//! release, and is discarded on the next drag or when the grid redraws.
//! No selection result is computed from it.

/// Drag state and the (possibly finished) selection rectangle. Positions
/// are relative to the plot frame's top-left corner, so a stored rectangle
/// stays attached to its plot wherever the plot ends up on screen.
#[derive(Debug, Clone, Default)]
pub struct BoxSelection {
    /// True between pointer-down and pointer-up.
    pub active: bool,
    /// Where the current drag started.
    pub start: Option<[f32; 2]>,
    /// Corner pair of the rectangle being shown, as (min, max).
    pub rect: Option<([f32; 2], [f32; 2])>,
}

impl BoxSelection {
    /// Pointer down: begin a new drag, replacing any leftover rectangle
    /// with a zero-size one at the start position.
    pub fn begin(&mut self, pos: [f32; 2]) {
        self.active = true;
        self.start = Some(pos);
        self.rect = Some((pos, pos));
    }

    /// Pointer move: span the rectangle from the drag start to `pos`.
    /// Ignored when no drag is active.
    pub fn update(&mut self, pos: [f32; 2]) {
        if !self.active {
            return;
        }
        if let Some(start) = self.start {
            let min = [start[0].min(pos[0]), start[1].min(pos[1])];
            let max = [start[0].max(pos[0]), start[1].max(pos[1])];
            self.rect = Some((min, max));
        }
    }

    /// Pointer up: the drag ends but the rectangle stays visible.
    pub fn finish(&mut self) {
        self.active = false;
        self.start = None;
    }

    /// Remove the rectangle entirely (used when the plot itself goes away).
    pub fn clear(&mut self) {
        self.active = false;
        self.start = None;
        self.rect = None;
    }

    /// The stored rectangle translated by `origin`: the corners to paint
    /// when the plot frame's top-left corner currently sits at `origin`.
    pub fn rect_at(&self, origin: [f32; 2]) -> Option<([f32; 2], [f32; 2])> {
        self.rect.map(|(min, max)| {
            (
                [origin[0] + min[0], origin[1] + min[1]],
                [origin[0] + max[0], origin[1] + max[1]],
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_spans_min_to_max_corners() {
        let mut sel = BoxSelection::default();
        sel.begin([10.0, 20.0]);
        assert_eq!(sel.rect, Some(([10.0, 20.0], [10.0, 20.0])));

        // Dragging up-left still yields an ordered corner pair.
        sel.update([4.0, 6.0]);
        assert_eq!(sel.rect, Some(([4.0, 6.0], [10.0, 20.0])));

        sel.update([30.0, 25.0]);
        assert_eq!(sel.rect, Some(([10.0, 20.0], [30.0, 25.0])));
    }

    #[test]
    fn rectangle_survives_release_until_next_drag() {
        let mut sel = BoxSelection::default();
        sel.begin([0.0, 0.0]);
        sel.update([5.0, 5.0]);
        sel.finish();
        assert!(!sel.active);
        assert_eq!(sel.rect, Some(([0.0, 0.0], [5.0, 5.0])));

        // Moves after release do not resize the finished rectangle.
        sel.update([50.0, 50.0]);
        assert_eq!(sel.rect, Some(([0.0, 0.0], [5.0, 5.0])));

        // The next drag replaces it.
        sel.begin([1.0, 1.0]);
        assert_eq!(sel.rect, Some(([1.0, 1.0], [1.0, 1.0])));
    }

    #[test]
    fn clear_discards_everything() {
        let mut sel = BoxSelection::default();
        sel.begin([2.0, 2.0]);
        sel.clear();
        assert!(!sel.active);
        assert_eq!(sel.rect, None);
    }

    #[test]
    fn rect_at_follows_the_plot_frame() {
        let mut sel = BoxSelection::default();
        sel.begin([10.0, 5.0]);
        sel.update([20.0, 15.0]);
        sel.finish();

        // Same stored corners, different frame positions: the painted
        // rectangle moves with the plot it belongs to.
        assert_eq!(
            sel.rect_at([100.0, 200.0]),
            Some(([110.0, 205.0], [120.0, 215.0]))
        );
        assert_eq!(sel.rect_at([0.0, 40.0]), Some(([10.0, 45.0], [20.0, 55.0])));

        assert_eq!(BoxSelection::default().rect_at([100.0, 200.0]), None);
    }
}
