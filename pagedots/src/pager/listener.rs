use std::cell::Cell;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use super::{
    DataListener, ListenerId, PageScrollFn, Pager, ScrollListener, Subscription, count, page_index,
};

/// Container whose page events are delivered through added/removed
/// listeners and whose item count comes from an optional data adapter
/// observed through data-set observers.
pub trait ListenerPager {
    fn begin_fake_drag(&self) -> bool;
    fn fake_drag_by(&self, offset_px: f32);
    fn end_fake_drag(&self);
    fn width(&self) -> u32;

    /// Item count of the attached data adapter, `None` without an adapter.
    fn adapter_count(&self) -> Option<i32>;

    fn set_current_item(&self, item: usize);
    fn add_on_page_change_listener(&self, listener: PageScrollFn) -> ListenerId;
    fn remove_on_page_change_listener(&self, id: ListenerId);

    /// Observe the data adapter. `None` when no adapter is attached.
    fn register_data_set_observer(&self, observer: DataListener) -> Option<ListenerId>;
    fn unregister_data_set_observer(&self, id: ListenerId);
}

/// [`Pager`] over a [`ListenerPager`].
pub struct ListenerPagerAdapter<P: ListenerPager + 'static> {
    pager: Weak<P>,
    fake_dragging: Cell<bool>,
}

impl<P: ListenerPager + 'static> ListenerPagerAdapter<P> {
    pub fn new(pager: &Rc<P>) -> Self {
        Self {
            pager: Rc::downgrade(pager),
            fake_dragging: Cell::new(false),
        }
    }
}

impl<P: ListenerPager + 'static> Pager for ListenerPagerAdapter<P> {
    fn begin_fake_drag(&self) -> bool {
        let Some(pager) = self.pager.upgrade() else {
            return false;
        };
        if self.fake_dragging.get() {
            return true;
        }
        let started = pager.begin_fake_drag();
        self.fake_dragging.set(started);
        started
    }

    fn fake_drag_by(&self, offset_px: f32) {
        if !self.fake_dragging.get() {
            trace!("fake_drag_by({offset_px}) outside a drag, dropped");
            return;
        }
        if let Some(pager) = self.pager.upgrade() {
            pager.fake_drag_by(offset_px);
        }
    }

    fn end_fake_drag(&self) {
        if !self.fake_dragging.replace(false) {
            return;
        }
        if let Some(pager) = self.pager.upgrade() {
            pager.end_fake_drag();
        }
    }

    fn is_fake_dragging(&self) -> bool {
        self.fake_dragging.get()
    }

    fn width(&self) -> u32 {
        self.pager.upgrade().map_or(0, |pager| pager.width())
    }

    fn item_count(&self) -> usize {
        count(self.pager.upgrade().and_then(|pager| pager.adapter_count()))
    }

    fn set_current_item(&self, item: usize) {
        if let Some(pager) = self.pager.upgrade() {
            pager.set_current_item(item);
        }
    }

    fn on_scroll(&self, listener: ScrollListener) -> Subscription {
        let Some(pager) = self.pager.upgrade() else {
            return Subscription::empty();
        };

        let id = pager.add_on_page_change_listener(Rc::new(move |position, offset, _| {
            listener(page_index(position), offset)
        }));

        let weak = self.pager.clone();
        Subscription::new(move || {
            if let Some(pager) = weak.upgrade() {
                pager.remove_on_page_change_listener(id);
            }
        })
    }

    fn on_item_count_changed(&self, listener: DataListener) -> Subscription {
        let Some(pager) = self.pager.upgrade() else {
            return Subscription::empty();
        };
        let Some(id) = pager.register_data_set_observer(listener) else {
            debug!("Container has no data adapter, item count changes will not be observed");
            return Subscription::empty();
        };

        let weak = self.pager.clone();
        Subscription::new(move || {
            if let Some(pager) = weak.upgrade() {
                pager.unregister_data_set_observer(id);
            }
        })
    }
}
