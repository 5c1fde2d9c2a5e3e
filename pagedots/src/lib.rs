//! Page indicators ("dots") kept in sync with a pageable container.
//!
//! An [`IndicatorController`] binds to a container through the [`Pager`]
//! capability trait, tracks its scroll position, forwards swipes on the
//! indicator as synthetic drags, and turns clicks into page jumps. A
//! [`RenderStrategy`] decides what each slot looks like.

pub mod buffer;
pub mod canvas;
pub mod children;
pub mod color;
pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod event;
pub mod gesture;
pub mod layout;
pub mod pager;
pub mod position;
pub mod sim;
pub mod strategy;
pub mod terminal;

pub use buffer::Buffer;
pub use canvas::{Canvas, CellCanvas, DrawOp, RecordingCanvas};
pub use children::{ChildPool, ChildSyncController, Slot};
pub use color::Color;
pub use config::{Attributes, BehaviorFlags, IndicatorOptions, IndicatorStyle, PreviewMode};
pub use controller::IndicatorController;
pub use easing::Interpolator;
pub use error::ConfigError;
pub use event::{EventResult, PanEvent};
pub use gesture::{GestureBridge, SwipeContext};
pub use layout::{Constraints, Rect, Size};
pub use pager::{
    CallbackPager, CallbackPagerAdapter, ListenerPager, ListenerPagerAdapter, Pager, Subscription,
};
pub use position::{Metrics, PositionState, PositionTracker, TrackerState};
pub use sim::SimPager;
pub use strategy::{RenderStrategy, strategy_for};
pub use terminal::Terminal;
