use std::cell::Cell;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use super::{
    DataListener, ListenerId, PageScrollFn, Pager, ScrollListener, Subscription, count, page_index,
};

/// Container whose page events are delivered through registered callbacks
/// and whose data adapter exposes an item count directly.
pub trait CallbackPager {
    fn begin_fake_drag(&self) -> bool;

    /// Returns false when the drag step was rejected.
    fn fake_drag_by(&self, offset_px: f32) -> bool;

    /// Returns false when no drag was running.
    fn end_fake_drag(&self) -> bool;

    fn width(&self) -> u32;

    /// Item count of the attached data adapter, `None` without an adapter.
    fn item_count(&self) -> Option<i32>;

    fn set_current_item(&self, item: usize);
    fn register_on_page_change_callback(&self, callback: PageScrollFn) -> ListenerId;
    fn unregister_on_page_change_callback(&self, id: ListenerId);

    /// Observe the data adapter. `None` when no adapter is attached.
    fn register_adapter_data_observer(&self, observer: DataListener) -> Option<ListenerId>;
    fn unregister_adapter_data_observer(&self, id: ListenerId);
}

/// [`Pager`] over a [`CallbackPager`].
pub struct CallbackPagerAdapter<P: CallbackPager + 'static> {
    pager: Weak<P>,
    fake_dragging: Cell<bool>,
}

impl<P: CallbackPager + 'static> CallbackPagerAdapter<P> {
    pub fn new(pager: &Rc<P>) -> Self {
        Self {
            pager: Rc::downgrade(pager),
            fake_dragging: Cell::new(false),
        }
    }
}

impl<P: CallbackPager + 'static> Pager for CallbackPagerAdapter<P> {
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
        if let Some(pager) = self.pager.upgrade()
            && !pager.fake_drag_by(offset_px)
        {
            trace!("Container rejected fake_drag_by({offset_px})");
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
        count(self.pager.upgrade().and_then(|pager| pager.item_count()))
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

        let id = pager.register_on_page_change_callback(Rc::new(move |position, offset, _| {
            listener(page_index(position), offset)
        }));

        let weak = self.pager.clone();
        Subscription::new(move || {
            if let Some(pager) = weak.upgrade() {
                pager.unregister_on_page_change_callback(id);
            }
        })
    }

    fn on_item_count_changed(&self, listener: DataListener) -> Subscription {
        let Some(pager) = self.pager.upgrade() else {
            return Subscription::empty();
        };
        let Some(id) = pager.register_adapter_data_observer(listener) else {
            debug!("Container has no data adapter, item count changes will not be observed");
            return Subscription::empty();
        };

        let weak = self.pager.clone();
        Subscription::new(move || {
            if let Some(pager) = weak.upgrade() {
                pager.unregister_adapter_data_observer(id);
            }
        })
    }
}
