//! Converts pan gestures on the indicator into synthetic drags on the container.
//!
//! `begin_fake_drag` and `end_fake_drag` are a scoped pair bound to the
//! gesture: the bridge opens a [`DragSession`] on `Down` and closes it on
//! `Up`, `Cancel`, or [`GestureBridge::cancel`]. Move events in between
//! forward pixel deltas.

use log::{debug, trace};

use crate::event::{EventResult, PanEvent};
use crate::pager::Pager;

/// Inputs for translating a finger movement into container pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeContext {
    pub distance_x: f32,
    pub distance_y: f32,
    /// Container width in pixels.
    pub pager_width: u32,
    /// Horizontal span from the first slot's left edge to the last slot's right edge.
    pub children_span: f32,
    pub child_count: usize,
}

/// Default mapping: a finger travelling the whole indicator drags the whole
/// container, i.e. `distance_x * pager_width / average_child_pitch`.
///
/// Returns `None` before the slots have been laid out.
pub fn default_swipe_delta(ctx: &SwipeContext) -> Option<f32> {
    if ctx.child_count == 0 || ctx.children_span <= 0.0 {
        return None;
    }
    let pitch = ctx.children_span / ctx.child_count as f32;
    Some(ctx.distance_x * ctx.pager_width as f32 / pitch)
}

/// An open synthetic drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    /// Where the finger went down.
    pub origin: (f32, f32),
    /// Total pixels forwarded to the container so far.
    pub forwarded_px: f32,
    pub moves: u32,
}

/// Gesture state for one indicator.
#[derive(Debug, Default)]
pub struct GestureBridge {
    session: Option<DragSession>,
}

impl GestureBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Feed one pan event.
    ///
    /// With swipe disabled and no open session the event is left alone. If
    /// swipe is turned off mid-gesture, the next event closes the session.
    /// `delta` maps a move's `(distance_x, distance_y)` to container pixels.
    pub fn handle(
        &mut self,
        event: PanEvent,
        swipe_enabled: bool,
        pager: Option<&dyn Pager>,
        delta: impl FnOnce(f32, f32) -> Option<f32>,
    ) -> EventResult {
        if !swipe_enabled {
            if self.session.is_some() {
                debug!("Swipe disabled during a drag, closing session");
                self.cancel(pager);
            }
            return EventResult::Ignored;
        }

        match event {
            PanEvent::Down { x, y } => self.begin(x, y, pager),
            PanEvent::Move {
                distance_x,
                distance_y,
            } => {
                let Some(session) = self.session.as_mut() else {
                    return EventResult::Ignored;
                };
                let Some(pager) = pager else {
                    return EventResult::Ignored;
                };
                let Some(offset_px) = delta(distance_x, distance_y) else {
                    trace!("No slot layout yet, move of {distance_x} dropped");
                    return EventResult::Consumed;
                };

                session.forwarded_px += offset_px;
                session.moves += 1;
                trace!("fake drag by {offset_px}px");
                pager.fake_drag_by(offset_px);
                EventResult::Consumed
            }
            PanEvent::Up | PanEvent::Cancel => {
                if self.session.is_none() {
                    return EventResult::Ignored;
                }
                self.cancel(pager);
                EventResult::Consumed
            }
        }
    }

    fn begin(&mut self, x: f32, y: f32, pager: Option<&dyn Pager>) -> EventResult {
        let Some(pager) = pager else {
            return EventResult::Ignored;
        };
        if self.session.is_some() {
            // A Down without the previous Up: restart the bracket.
            self.cancel(Some(pager));
        }
        if !pager.begin_fake_drag() {
            debug!("Container refused to start a fake drag");
            return EventResult::Ignored;
        }

        self.session = Some(DragSession {
            origin: (x, y),
            ..DragSession::default()
        });
        EventResult::StartDrag
    }

    /// Close the open session, if any, and end the container's drag.
    ///
    /// Safe to call at any time; this is also the forced-detach path.
    pub fn cancel(&mut self, pager: Option<&dyn Pager>) {
        if let Some(session) = self.session.take() {
            debug!(
                "Drag session closed after {} move(s), {}px forwarded",
                session.moves, session.forwarded_px
            );
            if let Some(pager) = pager {
                pager.end_fake_drag();
            }
        }
    }
}
