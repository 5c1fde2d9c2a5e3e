//! Per-page visual slots and their reconciliation with the item count.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::layout::Rect;

/// Invoked when a slot is clicked.
pub type ClickHandler = Rc<dyn Fn()>;

/// One visual child of the indicator.
pub struct Slot {
    index: usize,
    bounds: Cell<Rect>,
    dirty: Cell<bool>,
    on_click: ClickHandler,
}

impl Slot {
    pub fn new(index: usize, on_click: ClickHandler) -> Self {
        Self {
            index,
            bounds: Cell::new(Rect::default()),
            dirty: Cell::new(true),
            on_click,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Placement from the last layout pass, in surface coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    pub fn set_bounds(&self, bounds: Rect) {
        self.bounds.set(bounds);
    }

    /// Mark the slot as needing a redraw.
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub(crate) fn mark_drawn(&self) {
        self.dirty.set(false);
    }

    pub fn click(&self) {
        (self.on_click)();
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("index", &self.index)
            .field("bounds", &self.bounds.get())
            .field("dirty", &self.dirty.get())
            .finish()
    }
}

/// Ordered slots, one per page (or one in total for single-view strategies).
#[derive(Debug, Default)]
pub struct ChildPool {
    slots: Vec<Rc<Slot>>,
}

impl ChildPool {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rc<Slot>> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Slot>> {
        self.slots.iter()
    }

    /// Distance from the first slot's left edge to the last slot's right edge.
    pub fn span(&self) -> f32 {
        match (self.slots.first(), self.slots.last()) {
            (Some(first), Some(last)) => (last.bounds().right() - first.bounds().left()) as f32,
            _ => 0.0,
        }
    }

    /// Slot whose bounds contain the point, if any.
    pub fn hit(&self, x: i32, y: i32) -> Option<Rc<Slot>> {
        self.slots
            .iter()
            .find(|slot| slot.bounds().contains(x, y))
            .cloned()
    }
}

/// Keeps the pool length equal to the target count.
///
/// A mismatch discards every slot and builds a fresh set; a match leaves the
/// slots untouched. Page counts change rarely compared to scroll frames, so
/// there is no incremental diffing.
#[derive(Debug, Default)]
pub struct ChildSyncController {
    pool: ChildPool,
    rebuilds: u64,
}

impl ChildSyncController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self) -> &ChildPool {
        &self.pool
    }

    /// How many times the pool has been rebuilt.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Resize the pool to `target` slots if needed. Returns true on rebuild.
    pub fn reconcile(&mut self, target: usize, click: impl Fn(usize) -> ClickHandler) -> bool {
        if self.pool.len() == target {
            return false;
        }
        self.rebuild(target, click);
        true
    }

    /// Discard the pool and build `target` fresh slots.
    pub fn rebuild(&mut self, target: usize, click: impl Fn(usize) -> ClickHandler) {
        debug!(
            "Rebuilding child pool: {} -> {} slot(s)",
            self.pool.len(),
            target
        );
        self.pool.slots = (0..target)
            .map(|index| Rc::new(Slot::new(index, click(index))))
            .collect();
        self.rebuilds += 1;
    }

    /// Invalidate every slot so the next draw repaints it.
    pub fn refresh(&self) {
        for slot in self.pool.iter() {
            slot.invalidate();
        }
    }
}
