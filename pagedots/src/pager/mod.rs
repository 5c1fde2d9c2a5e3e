//! Uniform capability wrapper over pageable containers.
//!
//! This module provides:
//! - `Pager` trait the indicator talks to
//! - `Subscription` guard returned by event registration
//! - Adapters for listener-style and callback-style containers
//!
//! Containers are owned by the host. Adapters keep only a `Weak` reference,
//! so a dropped container behaves like an unbound one: reads return zero and
//! commands do nothing.

mod callback;
mod listener;

use std::fmt;
use std::rc::Rc;

pub use callback::{CallbackPager, CallbackPagerAdapter};
pub use listener::{ListenerPager, ListenerPagerAdapter};

/// Scroll notification forwarded to the indicator: `(page, offset)`.
pub type ScrollListener = Rc<dyn Fn(usize, f32)>;

/// Item-count-changed notification.
pub type DataListener = Rc<dyn Fn()>;

/// Container-native scroll callback: `(position, offset, offset_px)`.
pub type PageScrollFn = Rc<dyn Fn(i32, f32, i32)>;

/// Identifier handed out by a container when a listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Capability interface over a pageable container.
///
/// All methods take `&self`: containers deliver scroll callbacks
/// synchronously from inside `fake_drag_by` and `set_current_item`, so an
/// implementation must not hold internal borrows while notifying.
pub trait Pager {
    /// Start a synthetic drag. Returns false if the container refused.
    fn begin_fake_drag(&self) -> bool;

    /// Drag by `offset_px`; positive values move content toward the previous page.
    fn fake_drag_by(&self, offset_px: f32);

    /// Finish the synthetic drag. No-op when no drag is active.
    fn end_fake_drag(&self);

    /// Whether a synthetic drag started through this adapter is running.
    fn is_fake_dragging(&self) -> bool;

    /// Container width in pixels, zero when unbound.
    fn width(&self) -> u32;

    /// Number of pages, zero when unbound.
    fn item_count(&self) -> usize;

    /// Jump to a page.
    fn set_current_item(&self, item: usize);

    /// Subscribe to scroll events.
    fn on_scroll(&self, listener: ScrollListener) -> Subscription;

    /// Subscribe to item count changes.
    fn on_item_count_changed(&self, listener: DataListener) -> Subscription;
}

/// Registration guard. Dropping it removes the listener.
///
/// The cancel hook runs at most once, whether through [`unsubscribe`]
/// or drop.
///
/// [`unsubscribe`]: Subscription::unsubscribe
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to cancel, for containers that could not
    /// register the listener.
    pub fn empty() -> Self {
        Self { cancel: None }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Convert a container-reported page index, clamping transient negatives.
pub(crate) fn page_index(position: i32) -> usize {
    position.max(0) as usize
}

/// Convert a container-reported item count, clamping transient negatives.
pub(crate) fn count(value: Option<i32>) -> usize {
    value.unwrap_or(0).max(0) as usize
}
