//! Position state and the quantities derived from it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, trace};

use crate::pager::{Pager, Subscription};

pub const PREVIEW_POSITION: usize = 3;
pub const PREVIEW_OFFSET: f32 = 0.0;
pub const PREVIEW_ITEM_COUNT: usize = 6;

/// Last known `(page, offset)` reported by the container.
///
/// `offset` is the fraction of the way from `page` toward `page + 1`; it is
/// zero whenever the container is idle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionState {
    pub page: usize,
    pub offset: f32,
}

impl PositionState {
    pub const PREVIEW: PositionState = PositionState {
        page: PREVIEW_POSITION,
        offset: PREVIEW_OFFSET,
    };

    pub const fn new(page: usize, offset: f32) -> Self {
        Self { page, offset }
    }
}

/// Read-only view of the indicator state for one render pass.
///
/// Built fresh from the tracker and the container's item count each time it
/// is needed; never stored across passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub page: usize,
    pub offset: f32,
    pub item_count: usize,
}

impl Metrics {
    pub fn new(state: PositionState, item_count: usize) -> Self {
        Self {
            page: state.page,
            offset: state.offset,
            item_count,
        }
    }

    /// Fixed values used in preview mode.
    pub fn preview() -> Self {
        Self::new(PositionState::PREVIEW, PREVIEW_ITEM_COUNT)
    }

    /// `page + offset`. Non-finite offsets read as zero offset.
    pub fn absolute_position(&self) -> f32 {
        let offset = if self.offset.is_finite() {
            self.offset
        } else {
            0.0
        };
        self.page as f32 + offset
    }

    /// Completion in `0.0..=1.0`: 0 on the first page, 1 on the last.
    ///
    /// An empty container reads 0 and a single page reads 1.
    pub fn progress(&self) -> f32 {
        match self.item_count {
            0 => 0.0,
            1 => 1.0,
            count => (self.absolute_position() / (count - 1) as f32).clamp(0.0, 1.0),
        }
    }

    /// Distance in pages between the dot at `index` and the current position.
    pub fn relative_distance(&self, index: usize) -> f32 {
        (self.absolute_position() - index as f32).abs()
    }

    /// Copy with the position pulled into `0..=item_count - 1`.
    ///
    /// The container may report one page past the end while items are being
    /// removed; strategies draw from this view.
    pub fn clamped(&self) -> Metrics {
        let last = self.item_count.saturating_sub(1);
        let absolute = self.absolute_position().clamp(0.0, last as f32);
        let page = absolute.floor();

        Metrics {
            page: page as usize,
            offset: absolute - page,
            item_count: self.item_count,
        }
    }
}

/// Whether the tracker has a container to listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Unbound,
    Bound,
}

/// Owns the last known position and the container subscriptions feeding it.
///
/// Every scroll callback overwrites the whole [`PositionState`] in one store
/// and then fires the frame callback; nothing is buffered or merged.
pub struct PositionTracker {
    position: Rc<Cell<PositionState>>,
    frames: Rc<Cell<u64>>,
    bound: Cell<bool>,
    subscriptions: RefCell<Vec<Subscription>>,
}

impl PositionTracker {
    pub fn new(initial: PositionState) -> Self {
        Self {
            position: Rc::new(Cell::new(initial)),
            frames: Rc::new(Cell::new(0)),
            bound: Cell::new(false),
            subscriptions: RefCell::new(Vec::new()),
        }
    }

    pub fn state(&self) -> TrackerState {
        if self.bound.get() {
            TrackerState::Bound
        } else {
            TrackerState::Unbound
        }
    }

    pub fn position(&self) -> PositionState {
        self.position.get()
    }

    /// Number of scroll callbacks recorded so far.
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }

    pub fn is_listening(&self) -> bool {
        self.subscriptions
            .borrow()
            .iter()
            .any(Subscription::is_active)
    }

    /// Record a scroll callback verbatim.
    pub fn record(&self, page: usize, offset: f32) {
        record(&self.position, &self.frames, page, offset);
    }

    /// Listen to `pager`, dropping any previous subscriptions first.
    ///
    /// `on_frame` runs after each recorded scroll callback; `on_data` runs
    /// when the container's item count changes.
    pub fn bind(&self, pager: &dyn Pager, on_frame: Rc<dyn Fn()>, on_data: Rc<dyn Fn()>) {
        self.unsubscribe();

        let position = Rc::clone(&self.position);
        let frames = Rc::clone(&self.frames);
        let scroll = pager.on_scroll(Rc::new(move |page, offset| {
            record(&position, &frames, page, offset);
            on_frame();
        }));
        let data = pager.on_item_count_changed(on_data);

        debug!(
            "PositionTracker bound (scroll: {}, data: {})",
            scroll.is_active(),
            data.is_active()
        );
        self.subscriptions.borrow_mut().extend([scroll, data]);
        self.bound.set(true);
    }

    /// Drop the container subscriptions. The tracker stays bound and keeps
    /// its last position.
    pub fn unsubscribe(&self) {
        let old = std::mem::take(&mut *self.subscriptions.borrow_mut());
        if !old.is_empty() {
            debug!("PositionTracker dropping {} subscription(s)", old.len());
        }
        drop(old);
    }
}

fn record(position: &Cell<PositionState>, frames: &Cell<u64>, page: usize, offset: f32) {
    trace!("scroll frame page={page} offset={offset}");
    position.set(PositionState::new(page, offset));
    frames.set(frames.get() + 1);
}
