//! Event system for the scatter grid.
//!
//! Callers can subscribe to the grid's interaction events via
//! [`EventController`]. Each event carries a set of [`EventKind`] flags
//! (bitflags-style) so that a single occurrence can match multiple
//! categories (e.g. the tick click that activates a filter is *also* a
//! `FILTER_APPLIED` event).
//!
//! The caller specifies an [`EventFilter`] to receive only the events they
//! care about. The filter is a simple OR mask: an event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the *categories* an event belongs to.
///
/// A single [`GridEvent`] may have several bits set. A tick click that
/// activates a filter has both `TICK_CLICKED` and `FILTER_APPLIED` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u64);

impl EventKind {
    // ── Legend interaction ──────────────────────────────────────────────
    /// A legend tick (or the threshold marker) was clicked.
    pub const TICK_CLICKED: Self = Self(1 << 0);
    /// A threshold filter became active.
    pub const FILTER_APPLIED: Self = Self(1 << 1);
    /// The active filter was cleared (repeat click or programmatic reset).
    pub const FILTER_CLEARED: Self = Self(1 << 2);

    // ── Redraw cycle ────────────────────────────────────────────────────
    /// Plots were removed and a delayed redraw was scheduled.
    pub const REDRAW_STARTED: Self = Self(1 << 3);
    /// The delayed redraw applied and the plots are visible again.
    pub const REDRAW_FINISHED: Self = Self(1 << 4);

    // ── Pointer interaction ─────────────────────────────────────────────
    /// The pointer hovered close enough to a point to show its tooltip.
    pub const POINT_HOVERED: Self = Self(1 << 5);
    /// A box-selection drag started on a plot surface.
    pub const BOX_SELECT_STARTED: Self = Self(1 << 6);
    /// A box-selection drag finished (the rectangle stays visible).
    pub const BOX_SELECT_FINISHED: Self = Self(1 << 7);

    /// Wildcard: matches *every* event kind.
    pub const ALL: Self = Self(u64::MAX);

    /// Combine two event kinds (bitwise OR).
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` intersects with `other` (at least one bit in common).
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Returns `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::ops::Not for EventKind {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        // Known kinds with their string names in declaration order.
        let pairs: &[(EventKind, &str)] = &[
            (EventKind::TICK_CLICKED, "TICK_CLICKED"),
            (EventKind::FILTER_APPLIED, "FILTER_APPLIED"),
            (EventKind::FILTER_CLEARED, "FILTER_CLEARED"),
            (EventKind::REDRAW_STARTED, "REDRAW_STARTED"),
            (EventKind::REDRAW_FINISHED, "REDRAW_FINISHED"),
            (EventKind::POINT_HOVERED, "POINT_HOVERED"),
            (EventKind::BOX_SELECT_STARTED, "BOX_SELECT_STARTED"),
            (EventKind::BOX_SELECT_FINISHED, "BOX_SELECT_FINISHED"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u64 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }

        // Bits that weren't covered by the known list.
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }

        if names.is_empty() {
            write!(f, "0x{:x}", self.0)
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata – per-event-type payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata for filter / redraw events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterMeta {
    /// The active threshold after the change (`None` when cleared).
    pub threshold: Option<f64>,
    /// Points that remain visible once the redraw applies.
    pub visible_points: usize,
    /// Points in the original, unfiltered dataset.
    pub total_points: usize,
}

/// Metadata for point-hover events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverMeta {
    /// Which plot the hovered point belongs to (0-based).
    pub plot_index: usize,
    /// Index of the point within its series.
    pub point_index: usize,
    pub x: f64,
    pub y: f64,
    pub color: f64,
}

/// Metadata for box-selection events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSelectMeta {
    /// Which plot surface the drag happened on (0-based).
    pub plot_index: usize,
    /// Rectangle corners as (min, max), relative to the plot frame's
    /// top-left corner; present once the drag has covered any distance.
    pub rect: Option<([f32; 2], [f32; 2])>,
}

// ─────────────────────────────────────────────────────────────────────────────
// GridEvent – the top-level event type
// ─────────────────────────────────────────────────────────────────────────────

/// An event emitted by the scatter grid UI.
///
/// `kinds` is a bitflag set of [`EventKind`] categories. The `Option<…Meta>`
/// fields carry metadata relevant to the kinds that are set.
#[derive(Debug, Clone)]
pub struct GridEvent {
    /// Bitflag set of categories this event belongs to.
    pub kinds: EventKind,
    /// Monotonic timestamp (seconds since the controller was created).
    pub timestamp: f64,

    pub filter: Option<FilterMeta>,
    pub hover: Option<HoverMeta>,
    pub box_select: Option<BoxSelectMeta>,
}

impl GridEvent {
    /// Create a new event with the given kinds. The timestamp is filled in
    /// by the controller on emit.
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            filter: None,
            hover: None,
            box_select: None,
        }
    }

    pub fn with_filter(mut self, meta: FilterMeta) -> Self {
        self.filter = Some(meta);
        self
    }

    pub fn with_hover(mut self, meta: HoverMeta) -> Self {
        self.hover = Some(meta);
        self
    }

    pub fn with_box_select(mut self, meta: BoxSelectMeta) -> Self {
        self.box_select = Some(meta);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// A filter that selects which event categories a subscriber receives.
///
/// The filter is an OR-mask: an event is delivered when
/// `event.kinds.intersects(filter.mask)`.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    /// Accept all events.
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    /// Accept only the specified event kinds.
    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    /// Check whether an event passes this filter.
    #[inline]
    pub fn matches(&self, event: &GridEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) struct Subscriber {
    filter: EventFilter,
    sender: Sender<GridEvent>,
}

/// Controller that collects and distributes grid events to subscribers.
///
/// Attach it to [`ScatterGridConfig`](crate::config::ScatterGridConfig)
/// before launching the UI, then call [`subscribe`](Self::subscribe) (with
/// an optional filter) to receive events on an `mpsc` channel.
#[derive(Clone)]
pub struct EventController {
    pub(crate) inner: Arc<Mutex<EventCtrlInner>>,
}

pub(crate) struct EventCtrlInner {
    pub(crate) subscribers: Vec<Subscriber>,
    pub(crate) start_instant: std::time::Instant,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching the given filter.
    ///
    /// Returns a receiver that gets a [`GridEvent`] whenever the UI emits an
    /// event whose `kinds` intersect with the filter mask.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<GridEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    /// Subscribe to *all* events (no filtering).
    pub fn subscribe_all(&self) -> Receiver<GridEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Emit an event to all matching subscribers.
    ///
    /// Called internally by the grid UI. It is public so that embedding code
    /// can inject synthetic events. Subscribers whose receiver has been
    /// dropped are pruned on the next matching emit.
    pub fn emit(&self, mut event: GridEvent) {
        let mut inner = self.inner.lock().unwrap();
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_union_and_intersection() {
        let tick = EventKind::TICK_CLICKED;
        let applied = EventKind::FILTER_APPLIED;
        let combined = tick | applied;
        assert!(combined.contains(tick));
        assert!(combined.contains(applied));
        assert!(combined.intersects(tick));
        assert!(!EventKind::POINT_HOVERED.intersects(tick));
    }

    #[test]
    fn event_kind_all_matches_everything() {
        assert!(EventKind::ALL.contains(EventKind::TICK_CLICKED));
        assert!(EventKind::ALL.contains(EventKind::REDRAW_FINISHED));
        assert!(EventKind::ALL.contains(EventKind::BOX_SELECT_STARTED));
    }

    #[test]
    fn event_filter_matches() {
        let filter = EventFilter::only(EventKind::FILTER_APPLIED | EventKind::FILTER_CLEARED);
        let evt = GridEvent::new(EventKind::TICK_CLICKED | EventKind::FILTER_APPLIED);
        assert!(filter.matches(&evt));

        let evt2 = GridEvent::new(EventKind::POINT_HOVERED);
        assert!(!filter.matches(&evt2));
    }

    #[test]
    fn event_controller_subscribe_and_emit() {
        let ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_filter = ctrl.subscribe(EventFilter::only(EventKind::FILTER_APPLIED));
        let rx_hover = ctrl.subscribe(EventFilter::only(EventKind::POINT_HOVERED));

        ctrl.emit(GridEvent::new(
            EventKind::TICK_CLICKED | EventKind::FILTER_APPLIED,
        ));

        assert!(rx_all.try_recv().is_ok());
        assert!(rx_filter.try_recv().is_ok());
        assert!(rx_hover.try_recv().is_err());
    }

    #[test]
    fn event_controller_timestamp_set_on_emit() {
        let ctrl = EventController::new();
        let rx = ctrl.subscribe_all();

        std::thread::sleep(std::time::Duration::from_millis(10));
        ctrl.emit(GridEvent::new(EventKind::REDRAW_STARTED));

        let evt = rx.try_recv().unwrap();
        assert!(evt.timestamp > 0.0);
    }

    #[test]
    fn event_kind_display() {
        assert_eq!(format!("{}", EventKind::TICK_CLICKED), "TICK_CLICKED");
        let combo = EventKind::TICK_CLICKED | EventKind::FILTER_APPLIED;
        assert_eq!(format!("{}", combo), "TICK_CLICKED|FILTER_APPLIED");
        assert_eq!(format!("{}", EventKind::ALL), "ALL");
        // Unknown bits still produce a hex representation.
        let unknown = EventKind(1 << 63);
        assert!(format!("{}", unknown).starts_with("0x"));
    }

    #[test]
    fn event_kinds_do_not_overlap() {
        let all_kinds = [
            EventKind::TICK_CLICKED,
            EventKind::FILTER_APPLIED,
            EventKind::FILTER_CLEARED,
            EventKind::REDRAW_STARTED,
            EventKind::REDRAW_FINISHED,
            EventKind::POINT_HOVERED,
            EventKind::BOX_SELECT_STARTED,
            EventKind::BOX_SELECT_FINISHED,
        ];
        for (i, a) in all_kinds.iter().enumerate() {
            for (j, b) in all_kinds.iter().enumerate() {
                if i != j {
                    assert!(
                        !a.intersects(*b),
                        "EventKind bits {} and {} overlap: {:b} & {:b}",
                        i,
                        j,
                        a.0,
                        b.0
                    );
                }
            }
        }
    }

    #[test]
    fn dropped_receiver_is_cleaned_up() {
        let ctrl = EventController::new();
        let rx1 = ctrl.subscribe_all();
        let rx2 = ctrl.subscribe_all();

        drop(rx1);

        ctrl.emit(GridEvent::new(EventKind::TICK_CLICKED));
        assert!(rx2.try_recv().is_ok());

        // The dead subscriber was pruned on the first emit.
        ctrl.emit(GridEvent::new(EventKind::REDRAW_FINISHED));
        assert!(rx2.try_recv().is_ok());
    }

    #[test]
    fn grid_event_carries_metadata() {
        let evt = GridEvent::new(EventKind::TICK_CLICKED | EventKind::FILTER_APPLIED).with_filter(
            FilterMeta {
                threshold: Some(5.0),
                visible_points: 2,
                total_points: 3,
            },
        );
        assert!(evt.kinds.contains(EventKind::FILTER_APPLIED));
        assert_eq!(evt.filter.unwrap().threshold, Some(5.0));

        let hover = GridEvent::new(EventKind::POINT_HOVERED).with_hover(HoverMeta {
            plot_index: 1,
            point_index: 4,
            x: 0.5,
            y: 0.25,
            color: 7.0,
        });
        assert_eq!(hover.hover.unwrap().plot_index, 1);
    }
}
