//! The indicator: position sync, gestures, clicks, and the slot pool.
//!
//! State flows container → tracker → controller → strategy; commands flow
//! gesture/click → controller → container. Everything runs synchronously on
//! the caller's thread, and container callbacks may re-enter the controller
//! while it is forwarding a command, so no borrow is held across a call
//! into the container.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, trace, warn};

use crate::canvas::{Canvas, Offset};
use crate::children::{ChildSyncController, ClickHandler, Slot};
use crate::config::{BehaviorFlags, IndicatorOptions, IndicatorStyle, PreviewMode};
use crate::event::{EventResult, PanEvent};
use crate::gesture::{GestureBridge, SwipeContext};
use crate::layout::{Constraints, Size, place_row};
use crate::pager::Pager;
use crate::position::{Metrics, PositionState, PositionTracker, TrackerState};
use crate::strategy::{RenderStrategy, strategy_for};

/// Called whenever the indicator needs repainting.
pub type InvalidateListener = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy)]
struct LayoutRequest {
    origin: (i32, i32),
    constraints: Constraints,
}

struct Shared {
    pager: RefCell<Option<Rc<dyn Pager>>>,
    tracker: PositionTracker,
    gesture: RefCell<GestureBridge>,
    /// Set when the drag had to end while a pan event was being handled.
    end_pending: Cell<bool>,
    children: RefCell<ChildSyncController>,
    strategy: RefCell<Box<dyn RenderStrategy>>,
    options: RefCell<IndicatorOptions>,
    flags: Cell<BehaviorFlags>,
    last_layout: Cell<Option<LayoutRequest>>,
    invalidate: RefCell<Option<InvalidateListener>>,
    this: Weak<Shared>,
}

/// A page indicator bound to at most one container at a time.
pub struct IndicatorController {
    shared: Rc<Shared>,
}

impl IndicatorController {
    pub fn new(style: IndicatorStyle, options: IndicatorOptions) -> Self {
        let strategy = strategy_for(style, &options);
        Self::with_strategy(strategy, options)
    }

    pub fn with_strategy(strategy: Box<dyn RenderStrategy>, options: IndicatorOptions) -> Self {
        debug!("Creating {} indicator", strategy.name());
        let shared = Rc::new_cyclic(|this| Shared {
            pager: RefCell::new(None),
            tracker: PositionTracker::new(options.initial_position),
            gesture: RefCell::new(GestureBridge::new()),
            end_pending: Cell::new(false),
            children: RefCell::new(ChildSyncController::new()),
            strategy: RefCell::new(strategy),
            flags: Cell::new(options.flags),
            options: RefCell::new(options),
            last_layout: Cell::new(None),
            invalidate: RefCell::new(None),
            this: this.clone(),
        });
        Self { shared }
    }

    /// Bind to a container, replacing any previous one.
    ///
    /// The old subscriptions are dropped before the new ones are made. The
    /// cached position is kept, the slot pool is rebuilt, and a render pass
    /// is requested.
    pub fn bind<P: Pager + 'static>(&self, pager: Rc<P>) {
        let pager: Rc<dyn Pager> = pager;
        let shared = &self.shared;

        shared.end_drag();
        shared.tracker.unsubscribe();
        if shared.pager.replace(Some(pager)).is_some() {
            debug!("Rebinding indicator to a new container");
        }
        shared.subscribe();
        shared.rebuild();
    }

    /// Re-subscribe to the bound container after a [`detach`](Self::detach).
    pub fn attach(&self) {
        if self.shared.tracker.is_listening() {
            return;
        }
        if self.shared.subscribe() {
            self.shared.on_scroll_frame();
        }
    }

    /// Stop listening to the container and end any drag in progress.
    ///
    /// The container stays bound; [`attach`](Self::attach) resumes.
    pub fn detach(&self) {
        debug!("Detaching indicator");
        self.shared.end_drag();
        self.shared.tracker.unsubscribe();
    }

    /// Jump the container to page `index`, if clicks are enabled.
    pub fn handle_click(&self, index: usize) {
        self.shared.handle_click(index);
    }

    /// Click the slot under `(x, y)`. Returns whether a slot was hit.
    pub fn click_at(&self, x: i32, y: i32) -> bool {
        let hit = self.shared.children.borrow().pool().hit(x, y);
        match hit {
            Some(slot) => {
                slot.click();
                true
            }
            None => false,
        }
    }

    /// Feed one pan event from the indicator's surface.
    pub fn handle_pan(&self, event: PanEvent) -> EventResult {
        self.shared.handle_pan(event)
    }

    /// Measure and place every slot in a row starting at `origin`.
    pub fn layout(&self, origin: (i32, i32), constraints: Constraints) -> Size {
        self.shared.last_layout.set(Some(LayoutRequest {
            origin,
            constraints,
        }));
        let metrics = self.shared.metrics();
        self.shared.sync_children(&metrics);
        self.shared.place_slots(origin, constraints, &metrics)
    }

    /// Paint every laid-out slot onto `canvas`.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let shared = &self.shared;
        let metrics = shared.metrics();
        shared.sync_children(&metrics);

        let strategy = shared.strategy.borrow();
        let children = shared.children.borrow();
        for slot in children.pool().iter() {
            let bounds = slot.bounds();
            if !bounds.is_empty() {
                let mut surface = Offset::new(&mut *canvas, bounds.x as f32, bounds.y as f32);
                strategy.draw(&mut surface, bounds.size(), slot.index(), &metrics);
            }
            slot.mark_drawn();
        }
    }

    /// Apply a new set of options in one pass.
    pub fn configure(&self, options: IndicatorOptions) {
        let shared = &self.shared;
        match shared.strategy.try_borrow_mut() {
            Ok(mut strategy) => strategy.apply_options(&options),
            Err(_) => {
                warn!("configure() called while drawing, options ignored");
                return;
            }
        }
        shared.flags.set(options.flags);
        *shared.options.borrow_mut() = options;

        let metrics = shared.metrics();
        shared.sync_children(&metrics);
        shared.relayout(&metrics);
        shared.children.borrow().refresh();
        shared.notify();
    }

    /// Discard the slot pool and render from scratch.
    pub fn redraw(&self) {
        self.shared.rebuild();
    }

    /// Reconcile the pool with the item count and request a repaint.
    ///
    /// Runs on every scroll callback from the bound container.
    pub fn on_scroll_frame(&self) {
        self.shared.on_scroll_frame();
    }

    pub fn set_swipe_enabled(&self, enabled: bool) {
        let mut flags = self.shared.flags.get();
        flags.swipe_enabled = enabled;
        self.shared.flags.set(flags);
    }

    pub fn set_click_enabled(&self, enabled: bool) {
        let mut flags = self.shared.flags.get();
        flags.click_enabled = enabled;
        self.shared.flags.set(flags);
    }

    pub fn swipe_enabled(&self) -> bool {
        self.shared.flags.get().swipe_enabled
    }

    pub fn click_enabled(&self) -> bool {
        self.shared.flags.get().click_enabled
    }

    pub fn set_invalidate_listener(&self, listener: impl Fn() + 'static) {
        *self.shared.invalidate.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn metrics(&self) -> Metrics {
        self.shared.metrics()
    }

    pub fn position(&self) -> usize {
        self.metrics().page
    }

    pub fn position_offset(&self) -> f32 {
        self.metrics().offset
    }

    pub fn absolute_position(&self) -> f32 {
        self.metrics().absolute_position()
    }

    pub fn progress(&self) -> f32 {
        self.metrics().progress()
    }

    pub fn item_count(&self) -> usize {
        self.metrics().item_count
    }

    pub fn relative_distance(&self, index: usize) -> f32 {
        self.metrics().relative_distance(index)
    }

    /// Last position recorded from the container, ignoring preview mode.
    pub fn tracked_position(&self) -> PositionState {
        self.shared.tracker.position()
    }

    pub fn tracker_state(&self) -> TrackerState {
        self.shared.tracker.state()
    }

    pub fn is_listening(&self) -> bool {
        self.shared.tracker.is_listening()
    }

    pub fn is_dragging(&self) -> bool {
        self.shared
            .gesture
            .try_borrow()
            .is_ok_and(|gesture| gesture.is_dragging())
    }

    /// Current slots in index order.
    pub fn slots(&self) -> Vec<Rc<Slot>> {
        self.shared.children.borrow().pool().iter().cloned().collect()
    }

    /// How many times the slot pool has been rebuilt.
    pub fn rebuilds(&self) -> u64 {
        self.shared.children.borrow().rebuilds()
    }

    pub fn strategy_name(&self) -> String {
        self.shared.strategy.borrow().name().to_string()
    }

    pub fn options(&self) -> IndicatorOptions {
        self.shared.options.borrow().clone()
    }
}

impl Shared {
    fn pager(&self) -> Option<Rc<dyn Pager>> {
        self.pager.borrow().clone()
    }

    fn metrics(&self) -> Metrics {
        if self.options.borrow().preview == PreviewMode::On {
            return Metrics::preview();
        }
        let item_count = self.pager().map_or(0, |pager| pager.item_count());
        Metrics::new(self.tracker.position(), item_count)
    }

    /// Subscribe the tracker to the bound container. Returns false if unbound.
    fn subscribe(&self) -> bool {
        let Some(pager) = self.pager() else {
            return false;
        };

        let frame = self.this.clone();
        let data = self.this.clone();
        self.tracker.bind(
            &*pager,
            Rc::new(move || {
                if let Some(shared) = frame.upgrade() {
                    shared.on_scroll_frame();
                }
            }),
            Rc::new(move || {
                if let Some(shared) = data.upgrade() {
                    debug!("Container item count changed");
                    shared.on_scroll_frame();
                }
            }),
        );
        true
    }

    fn click_handler(&self, index: usize) -> ClickHandler {
        let this = self.this.clone();
        Rc::new(move || {
            if let Some(shared) = this.upgrade() {
                shared.handle_click(index);
            }
        })
    }

    fn handle_click(&self, index: usize) {
        if !self.flags.get().click_enabled {
            trace!("Click on {index} ignored, clicks disabled");
            return;
        }
        let Some(pager) = self.pager() else {
            return;
        };
        debug!("Click on dot {index}");
        pager.set_current_item(index);
    }

    fn handle_pan(&self, event: PanEvent) -> EventResult {
        let pager = self.pager();
        let swipe_enabled = self.flags.get().swipe_enabled;
        let (children_span, child_count) = {
            let children = self.children.borrow();
            (children.pool().span(), children.pool().len())
        };
        let pager_width = pager.as_ref().map_or(0, |pager| pager.width());

        let result = {
            let Ok(strategy) = self.strategy.try_borrow() else {
                return EventResult::Ignored;
            };
            let Ok(mut gesture) = self.gesture.try_borrow_mut() else {
                warn!("Pan event delivered while another is being handled");
                return EventResult::Ignored;
            };

            gesture.handle(event, swipe_enabled, pager.as_deref(), |distance_x, distance_y| {
                strategy.swipe_delta(&SwipeContext {
                    distance_x,
                    distance_y,
                    pager_width,
                    children_span,
                    child_count,
                })
            })
        };

        // A rebind or detach from a callback fired during the event. Any
        // open session was begun on `pager`, not on whatever is bound now.
        if self.end_pending.take() {
            debug!("Ending drag deferred from a container callback");
            if let Ok(mut gesture) = self.gesture.try_borrow_mut() {
                gesture.cancel(pager.as_deref());
            }
        }
        result
    }

    fn end_drag(&self) {
        match self.gesture.try_borrow_mut() {
            Ok(mut gesture) => gesture.cancel(self.pager().as_deref()),
            Err(_) => self.end_pending.set(true),
        }
    }

    /// Bring the pool to the strategy's slot count. Re-places the slots when
    /// it had to rebuild and a layout is known.
    fn sync_children(&self, metrics: &Metrics) {
        let target = self.strategy.borrow().slot_count(metrics.item_count);
        let rebuilt = match self.children.try_borrow_mut() {
            Ok(mut children) => children.reconcile(target, |index| self.click_handler(index)),
            Err(_) => {
                warn!("Slot pool busy, reconcile skipped");
                false
            }
        };
        if rebuilt {
            self.relayout(metrics);
        }
    }

    fn rebuild(&self) {
        let metrics = self.metrics();
        let target = self.strategy.borrow().slot_count(metrics.item_count);
        match self.children.try_borrow_mut() {
            Ok(mut children) => children.rebuild(target, |index| self.click_handler(index)),
            Err(_) => {
                warn!("Slot pool busy, rebuild skipped");
                return;
            }
        }
        self.relayout(&metrics);
        self.notify();
    }

    fn relayout(&self, metrics: &Metrics) {
        if let Some(request) = self.last_layout.get() {
            self.place_slots(request.origin, request.constraints, metrics);
        }
    }

    fn place_slots(&self, origin: (i32, i32), constraints: Constraints, metrics: &Metrics) -> Size {
        let strategy = self.strategy.borrow();
        let children = self.children.borrow();

        let sizes: Vec<Size> = children
            .pool()
            .iter()
            .map(|slot| strategy.measure(slot.index(), metrics, constraints))
            .collect();
        let rects = place_row(origin, &sizes);
        for (slot, rect) in children.pool().iter().zip(&rects) {
            slot.set_bounds(*rect);
        }

        let total = Size::new(
            sizes.iter().map(|size| size.width).sum(),
            sizes.iter().map(|size| size.height).max().unwrap_or(0),
        );
        constraints.constrain(total)
    }

    fn on_scroll_frame(&self) {
        let metrics = self.metrics();
        self.sync_children(&metrics);
        if let Ok(children) = self.children.try_borrow() {
            children.refresh();
        }
        self.notify();
    }

    fn notify(&self) {
        let listener = self.invalidate.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        let pager = self.pager.get_mut().take();
        self.gesture.get_mut().cancel(pager.as_deref());
    }
}
