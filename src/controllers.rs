//! Controllers for interacting with the grid UI from external code.
//!
//! The controllers expose lightweight state and a subscription mechanism so
//! non-UI code can observe the filter state and push simple requests (like
//! activating a threshold programmatically). Requests are drained by the UI
//! once per frame; a state snapshot is published back whenever it changes.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

/// Snapshot of the grid's filter state, published on change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterInfo {
    /// Active threshold, `None` while unfiltered.
    pub threshold: Option<f64>,
    /// True while a delayed redraw has not applied yet.
    pub redraw_pending: bool,
    /// Points currently visible across all plots (0 while pending).
    pub visible_points: usize,
    /// Points in the original dataset.
    pub total_points: usize,
}

/// Controller to drive and observe the threshold filter.
#[derive(Clone)]
pub struct FilterController {
    pub(crate) inner: Arc<Mutex<FilterCtrlInner>>, // crate-visible for UI
}

pub(crate) struct FilterCtrlInner {
    pub(crate) request_set_threshold: Option<f64>,
    pub(crate) request_clear: bool,
    pub(crate) last_info: Option<FilterInfo>,
    pub(crate) listeners: Vec<Sender<FilterInfo>>,
}

impl FilterController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FilterCtrlInner {
                request_set_threshold: None,
                request_clear: false,
                last_info: None,
                listeners: Vec::new(),
            })),
        }
    }

    /// Request that the given threshold become active, exactly as if the
    /// matching legend tick had been clicked (including the delayed redraw).
    pub fn set_threshold(&self, value: f64) {
        let mut inner = self.inner.lock().unwrap();
        inner.request_set_threshold = Some(value);
        inner.request_clear = false;
    }

    /// Request that any active filter be cleared.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.request_clear = true;
        inner.request_set_threshold = None;
    }

    /// Last state snapshot published by the UI, if any frame has run yet.
    pub fn get_last_info(&self) -> Option<FilterInfo> {
        self.inner.lock().unwrap().last_info
    }

    /// Subscribe to filter state updates. The receiver gets a [`FilterInfo`]
    /// whenever the published snapshot changes.
    pub fn subscribe(&self) -> std::sync::mpsc::Receiver<FilterInfo> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.listeners.push(tx);
        rx
    }
}

impl Default for FilterController {
    fn default() -> Self {
        Self::new()
    }
}
