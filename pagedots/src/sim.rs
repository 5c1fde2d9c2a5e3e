//! In-memory pageable container.
//!
//! `SimPager` stands in for a real paging widget in demos and tests: it keeps
//! a continuous scroll position, turns synthetic drags into scroll
//! callbacks, and snaps to the nearest page when the drag ends. It has no
//! animation or fling physics.

use std::cell::{Cell, RefCell};

use log::trace;

use crate::pager::{CallbackPager, DataListener, ListenerId, PageScrollFn};

struct Registry<T> {
    next_id: u64,
    entries: Vec<(ListenerId, T)>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T: Clone> Registry<T> {
    fn add(&mut self, entry: T) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push((id, entry));
        id
    }

    fn remove(&mut self, id: ListenerId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    fn snapshot(&self) -> Vec<T> {
        self.entries.iter().map(|(_, entry)| entry.clone()).collect()
    }
}

pub struct SimPager {
    width: Cell<u32>,
    item_count: Cell<Option<i32>>,
    /// Absolute scroll position in pages.
    scroll: Cell<f32>,
    dragging: Cell<bool>,
    callbacks: RefCell<Registry<PageScrollFn>>,
    observers: RefCell<Registry<DataListener>>,
}

impl SimPager {
    /// A container `width` pixels wide with `item_count` pages.
    pub fn new(width: u32, item_count: usize) -> Self {
        Self {
            width: Cell::new(width),
            item_count: Cell::new(Some(item_count as i32)),
            scroll: Cell::new(0.0),
            dragging: Cell::new(false),
            callbacks: RefCell::new(Registry::default()),
            observers: RefCell::new(Registry::default()),
        }
    }

    /// A container with no data adapter attached.
    pub fn without_adapter(width: u32) -> Self {
        let pager = Self::new(width, 0);
        pager.item_count.set(None);
        pager
    }

    /// Replace the page count and notify data observers.
    pub fn set_item_count(&self, item_count: usize) {
        self.item_count.set(Some(item_count as i32));
        let max = self.max_scroll();
        if self.scroll.get() > max {
            self.scroll.set(max);
            self.dispatch_scroll();
        }
        let observers = self.observers.borrow().snapshot();
        for observer in observers {
            observer();
        }
    }

    pub fn set_width(&self, width: u32) {
        self.width.set(width);
    }

    /// Page nearest to the current scroll position.
    pub fn current_item(&self) -> usize {
        self.scroll.get().round().max(0.0) as usize
    }

    /// Page count, zero without an adapter.
    pub fn page_count(&self) -> usize {
        self.item_count.get().unwrap_or(0).max(0) as usize
    }

    pub fn scroll_position(&self) -> f32 {
        self.scroll.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.get()
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.borrow().entries.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().entries.len()
    }

    /// Deliver a raw scroll callback, as the real container does mid-animation.
    pub fn emit(&self, position: i32, offset: f32) {
        let offset_px = (offset * self.width.get() as f32) as i32;
        let callbacks = self.callbacks.borrow().snapshot();
        for callback in callbacks {
            callback(position, offset, offset_px);
        }
    }

    fn max_scroll(&self) -> f32 {
        (self.item_count.get().unwrap_or(0) - 1).max(0) as f32
    }

    fn dispatch_scroll(&self) {
        let scroll = self.scroll.get();
        let page = scroll.floor();
        self.emit(page as i32, scroll - page);
    }
}

impl CallbackPager for SimPager {
    fn begin_fake_drag(&self) -> bool {
        if self.dragging.get() {
            return false;
        }
        self.dragging.set(true);
        true
    }

    fn fake_drag_by(&self, offset_px: f32) -> bool {
        let width = self.width.get();
        if !self.dragging.get() || width == 0 {
            return false;
        }

        let scroll = (self.scroll.get() - offset_px / width as f32).clamp(0.0, self.max_scroll());
        trace!("SimPager drag by {offset_px}px -> {scroll}");
        self.scroll.set(scroll);
        self.dispatch_scroll();
        true
    }

    fn end_fake_drag(&self) -> bool {
        if !self.dragging.replace(false) {
            return false;
        }
        self.scroll.set(self.scroll.get().round());
        self.dispatch_scroll();
        true
    }

    fn width(&self) -> u32 {
        self.width.get()
    }

    fn item_count(&self) -> Option<i32> {
        self.item_count.get()
    }

    fn set_current_item(&self, item: usize) {
        self.scroll.set((item as f32).clamp(0.0, self.max_scroll()));
        self.dispatch_scroll();
    }

    fn register_on_page_change_callback(&self, callback: PageScrollFn) -> ListenerId {
        self.callbacks.borrow_mut().add(callback)
    }

    fn unregister_on_page_change_callback(&self, id: ListenerId) {
        self.callbacks.borrow_mut().remove(id);
    }

    fn register_adapter_data_observer(&self, observer: DataListener) -> Option<ListenerId> {
        self.item_count.get()?;
        Some(self.observers.borrow_mut().add(observer))
    }

    fn unregister_adapter_data_observer(&self, id: ListenerId) {
        self.observers.borrow_mut().remove(id);
    }
}
