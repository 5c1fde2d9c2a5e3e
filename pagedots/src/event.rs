/// Single-finger pan stream delivered by the hosting surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanEvent {
    /// Finger touched the indicator.
    Down { x: f32, y: f32 },
    /// Finger moved. Distances follow the scroll-detector convention:
    /// previous position minus current position.
    Move { distance_x: f32, distance_y: f32 },
    /// Finger lifted.
    Up,
    /// Gesture taken away by the host.
    Cancel,
}

/// What a pan handler did with the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Not for this indicator; the host may route it elsewhere.
    Ignored,
    /// Handled inside an open drag session.
    Consumed,
    /// Opened a drag session on the container.
    StartDrag,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        self != EventResult::Ignored
    }
}
