use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pagedots::pager::{DataListener, ListenerId, PageScrollFn};
use pagedots::{
    CallbackPager, CallbackPagerAdapter, ListenerPager, ListenerPagerAdapter, Pager, SimPager,
    Subscription,
};

/// Listener-style container double.
#[derive(Default)]
struct FakeViewPager {
    width: u32,
    adapter_count: Option<i32>,
    begins: Cell<u32>,
    drags: RefCell<Vec<f32>>,
    ends: Cell<u32>,
    current: Cell<Option<usize>>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, PageScrollFn)>>,
    observers: RefCell<Vec<(ListenerId, DataListener)>>,
}

impl FakeViewPager {
    fn new(width: u32, adapter_count: Option<i32>) -> Rc<Self> {
        Rc::new(Self {
            width,
            adapter_count,
            ..Default::default()
        })
    }

    fn id(&self) -> ListenerId {
        self.next_id.set(self.next_id.get() + 1);
        ListenerId(self.next_id.get())
    }

    fn scroll(&self, position: i32, offset: f32) {
        let listeners: Vec<PageScrollFn> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(position, offset, 0);
        }
    }
}

impl ListenerPager for FakeViewPager {
    fn begin_fake_drag(&self) -> bool {
        self.begins.set(self.begins.get() + 1);
        true
    }

    fn fake_drag_by(&self, offset_px: f32) {
        self.drags.borrow_mut().push(offset_px);
    }

    fn end_fake_drag(&self) {
        self.ends.set(self.ends.get() + 1);
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn adapter_count(&self) -> Option<i32> {
        self.adapter_count
    }

    fn set_current_item(&self, item: usize) {
        self.current.set(Some(item));
    }

    fn add_on_page_change_listener(&self, listener: PageScrollFn) -> ListenerId {
        let id = self.id();
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_on_page_change_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(entry, _)| *entry != id);
    }

    fn register_data_set_observer(&self, observer: DataListener) -> Option<ListenerId> {
        self.adapter_count?;
        let id = self.id();
        self.observers.borrow_mut().push((id, observer));
        Some(id)
    }

    fn unregister_data_set_observer(&self, id: ListenerId) {
        self.observers.borrow_mut().retain(|(entry, _)| *entry != id);
    }
}

// =============================================================================
// Subscription Tests
// =============================================================================

#[test]
fn test_subscription_cancels_once() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let subscription = Subscription::new(move || counter.set(counter.get() + 1));

    assert!(subscription.is_active());
    subscription.unsubscribe();
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_subscription_cancels_on_drop() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    {
        let _subscription = Subscription::new(move || counter.set(counter.get() + 1));
    }
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_empty_subscription_is_inactive() {
    let subscription = Subscription::empty();
    assert!(!subscription.is_active());
    subscription.unsubscribe();
}

// =============================================================================
// Listener Adapter Tests
// =============================================================================

#[test]
fn test_listener_adapter_reads() {
    let pager = FakeViewPager::new(320, Some(5));
    let adapter = ListenerPagerAdapter::new(&pager);

    assert_eq!(adapter.width(), 320);
    assert_eq!(adapter.item_count(), 5);

    adapter.set_current_item(3);
    assert_eq!(pager.current.get(), Some(3));
}

#[test]
fn test_listener_adapter_without_data_adapter() {
    let pager = FakeViewPager::new(320, None);
    let adapter = ListenerPagerAdapter::new(&pager);

    assert_eq!(adapter.item_count(), 0);
    let subscription = adapter.on_item_count_changed(Rc::new(|| {}));
    assert!(!subscription.is_active());
}

#[test]
fn test_listener_adapter_clamps_negative_count() {
    let pager = FakeViewPager::new(320, Some(-3));
    let adapter = ListenerPagerAdapter::new(&pager);
    assert_eq!(adapter.item_count(), 0);
}

#[test]
fn test_listener_adapter_scroll_subscription() {
    let pager = FakeViewPager::new(320, Some(5));
    let adapter = ListenerPagerAdapter::new(&pager);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let subscription = adapter.on_scroll(Rc::new(move |page, offset| {
        sink.borrow_mut().push((page, offset));
    }));

    pager.scroll(2, 0.25);
    pager.scroll(-1, 0.5);
    drop(subscription);
    pager.scroll(4, 0.0);

    assert_eq!(*seen.borrow(), vec![(2, 0.25), (0, 0.5)]);
    assert!(pager.listeners.borrow().is_empty());
}

#[test]
fn test_listener_adapter_data_subscription() {
    let pager = FakeViewPager::new(320, Some(5));
    let adapter = ListenerPagerAdapter::new(&pager);

    let subscription = adapter.on_item_count_changed(Rc::new(|| {}));
    assert_eq!(pager.observers.borrow().len(), 1);

    subscription.unsubscribe();
    assert!(pager.observers.borrow().is_empty());
}

#[test]
fn test_listener_adapter_end_is_idempotent() {
    let pager = FakeViewPager::new(320, Some(5));
    let adapter = ListenerPagerAdapter::new(&pager);

    adapter.end_fake_drag();
    assert_eq!(pager.ends.get(), 0);

    assert!(adapter.begin_fake_drag());
    assert!(adapter.is_fake_dragging());
    adapter.end_fake_drag();
    adapter.end_fake_drag();

    assert_eq!(pager.begins.get(), 1);
    assert_eq!(pager.ends.get(), 1);
    assert!(!adapter.is_fake_dragging());
}

#[test]
fn test_listener_adapter_drops_drag_outside_bracket() {
    let pager = FakeViewPager::new(320, Some(5));
    let adapter = ListenerPagerAdapter::new(&pager);

    adapter.fake_drag_by(10.0);
    adapter.begin_fake_drag();
    adapter.fake_drag_by(12.5);
    adapter.end_fake_drag();
    adapter.fake_drag_by(3.0);

    assert_eq!(*pager.drags.borrow(), vec![12.5]);
}

#[test]
fn test_listener_adapter_begin_twice_starts_once() {
    let pager = FakeViewPager::new(320, Some(5));
    let adapter = ListenerPagerAdapter::new(&pager);

    assert!(adapter.begin_fake_drag());
    assert!(adapter.begin_fake_drag());
    assert_eq!(pager.begins.get(), 1);
}

#[test]
fn test_listener_adapter_after_container_dropped() {
    let pager = FakeViewPager::new(320, Some(5));
    let adapter = ListenerPagerAdapter::new(&pager);
    let subscription = adapter.on_scroll(Rc::new(|_, _| {}));
    drop(pager);

    assert_eq!(adapter.width(), 0);
    assert_eq!(adapter.item_count(), 0);
    assert!(!adapter.begin_fake_drag());
    adapter.set_current_item(1);
    adapter.end_fake_drag();
    assert!(!adapter.on_scroll(Rc::new(|_, _| {})).is_active());
    drop(subscription);
}

// =============================================================================
// Callback Adapter Tests
// =============================================================================

#[test]
fn test_callback_adapter_over_sim_pager() {
    let sim = Rc::new(SimPager::new(200, 4));
    let adapter = CallbackPagerAdapter::new(&sim);

    assert_eq!(adapter.width(), 200);
    assert_eq!(adapter.item_count(), 4);

    let scroll = adapter.on_scroll(Rc::new(|_, _| {}));
    let data = adapter.on_item_count_changed(Rc::new(|| {}));
    assert_eq!(sim.callback_count(), 1);
    assert_eq!(sim.observer_count(), 1);

    drop(scroll);
    drop(data);
    assert_eq!(sim.callback_count(), 0);
    assert_eq!(sim.observer_count(), 0);
}

#[test]
fn test_callback_adapter_fake_drag_bracket() {
    let sim = Rc::new(SimPager::new(200, 4));
    let adapter = CallbackPagerAdapter::new(&sim);

    assert!(adapter.begin_fake_drag());
    assert!(adapter.begin_fake_drag());
    assert!(sim.is_dragging());

    adapter.fake_drag_by(-100.0);
    assert!((sim.scroll_position() - 0.5).abs() < 1e-6);

    adapter.end_fake_drag();
    adapter.end_fake_drag();
    assert!(!sim.is_dragging());
    assert!(!adapter.is_fake_dragging());
}

#[test]
fn test_callback_adapter_without_data_adapter() {
    let sim = Rc::new(SimPager::without_adapter(200));
    let adapter = CallbackPagerAdapter::new(&sim);

    assert_eq!(adapter.item_count(), 0);
    assert!(!adapter.on_item_count_changed(Rc::new(|| {})).is_active());
}

#[test]
fn test_callback_adapter_after_container_dropped() {
    let sim = Rc::new(SimPager::new(200, 4));
    let adapter = CallbackPagerAdapter::new(&sim);
    assert!(adapter.begin_fake_drag());
    drop(sim);

    assert_eq!(adapter.item_count(), 0);
    assert_eq!(adapter.width(), 0);
    adapter.fake_drag_by(10.0);
    adapter.end_fake_drag();
    assert!(!adapter.is_fake_dragging());
}

// =============================================================================
// SimPager Tests
// =============================================================================

#[test]
fn test_sim_pager_snaps_on_end() {
    let sim = SimPager::new(100, 5);

    assert!(sim.begin_fake_drag());
    assert!(!sim.begin_fake_drag());
    assert!(sim.fake_drag_by(-130.0));
    assert!((sim.scroll_position() - 1.3).abs() < 1e-6);

    assert!(sim.end_fake_drag());
    assert!(!sim.end_fake_drag());
    assert_eq!(sim.scroll_position(), 1.0);
    assert_eq!(sim.current_item(), 1);
}

#[test]
fn test_sim_pager_rejects_drag_outside_bracket() {
    let sim = SimPager::new(100, 5);
    assert!(!sim.fake_drag_by(-50.0));
    assert_eq!(sim.scroll_position(), 0.0);
}

#[test]
fn test_sim_pager_clamps_scroll() {
    let sim = SimPager::new(100, 3);

    sim.begin_fake_drag();
    sim.fake_drag_by(50.0);
    assert_eq!(sim.scroll_position(), 0.0);
    sim.fake_drag_by(-1000.0);
    assert_eq!(sim.scroll_position(), 2.0);
    sim.end_fake_drag();

    sim.set_current_item(9);
    assert_eq!(sim.current_item(), 2);
}

#[test]
fn test_sim_pager_shrinking_moves_position() {
    let sim = SimPager::new(100, 6);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let data = Rc::new(Cell::new(0));

    let sink = Rc::clone(&seen);
    sim.register_on_page_change_callback(Rc::new(move |position, offset, _| {
        sink.borrow_mut().push((position, offset));
    }));
    let counter = Rc::clone(&data);
    sim.register_adapter_data_observer(Rc::new(move || counter.set(counter.get() + 1)));

    sim.set_current_item(5);
    sim.set_item_count(3);

    assert_eq!(*seen.borrow(), vec![(5, 0.0), (2, 0.0)]);
    assert_eq!(data.get(), 1);
    assert_eq!(sim.page_count(), 3);
}

#[test]
fn test_sim_pager_unregister_during_dispatch() {
    let sim = Rc::new(SimPager::new(100, 4));
    let id = Rc::new(Cell::new(None));
    let calls = Rc::new(Cell::new(0));

    let weak = Rc::downgrade(&sim);
    let own_id = Rc::clone(&id);
    let counter = Rc::clone(&calls);
    let registered = sim.register_on_page_change_callback(Rc::new(move |_, _, _| {
        counter.set(counter.get() + 1);
        if let (Some(sim), Some(id)) = (weak.upgrade(), own_id.get()) {
            sim.unregister_on_page_change_callback(id);
        }
    }));
    id.set(Some(registered));

    sim.emit(1, 0.0);
    sim.emit(2, 0.0);

    assert_eq!(calls.get(), 1);
    assert_eq!(sim.callback_count(), 0);
}
