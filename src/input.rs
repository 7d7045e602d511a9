// Input tracker: raw pointer/touch events -> surface-local points of one gesture.
// Exactly two states. Idle -> Drawing on begin, Drawing -> Drawing on extend,
// Drawing -> Idle on end. Mapping is per-event and never smoothed or resampled.

use crate::types::{Point, SurfaceRect};
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// One host input event, in client coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Mouse { client: Point, button: PointerButton },
    /// Active contacts in the order the host reports them; the first one drives the stroke.
    Touch { touches: Vec<Point> },
}

impl PointerEvent {
    pub fn mouse(x: f32, y: f32) -> Self {
        PointerEvent::Mouse { client: Point::new(x, y), button: PointerButton::Primary }
    }

    pub fn touch(x: f32, y: f32) -> Self {
        PointerEvent::Touch { touches: vec![Point::new(x, y)] }
    }

    /// Client position that drives the stroke, if the event carries one.
    pub fn client_position(&self) -> Option<Point> {
        match self {
            PointerEvent::Mouse { client, .. } => Some(*client),
            PointerEvent::Touch { touches } => touches.first().copied(),
        }
    }

    /// Only a primary button or a first touch contact may open a gesture.
    pub fn can_begin(&self) -> bool {
        match self {
            PointerEvent::Mouse { button, .. } => *button == PointerButton::Primary,
            PointerEvent::Touch { touches } => !touches.is_empty(),
        }
    }
}

/// One continuous gesture, from down to up/leave/cancel.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeSession {
    points: Vec<Point>,   // surface-local, in arrival order; [0] is the start
    segments: usize,      // segments that actually reached the surface
}

impl StrokeSession {
    fn start(at: Point) -> Self {
        Self { points: vec![at], segments: 0 }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start_point(&self) -> Point {
        self.points[0]
    }

    /// Has any segment past the starting point been rendered?
    pub fn has_advanced(&self) -> bool {
        self.segments > 0
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn record_segment(&mut self) {
        self.segments += 1;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TrackerState {
    #[default]
    Idle,
    Drawing(StrokeSession),
}

#[derive(Debug, Default)]
pub struct InputTracker {
    state: TrackerState,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle, or Drawing with the open session.
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, TrackerState::Drawing(_))
    }

    /// The open session, if a gesture is in progress.
    pub fn session(&self) -> Option<&StrokeSession> {
        match &self.state {
            TrackerState::Drawing(s) => Some(s),
            TrackerState::Idle => None,
        }
    }

    /// Mutable access for the renderer side to count segments that reached the surface.
    pub fn session_mut(&mut self) -> Option<&mut StrokeSession> {
        match &mut self.state {
            TrackerState::Drawing(s) => Some(s),
            TrackerState::Idle => None,
        }
    }

    /// Open a session at the event position. Returns the surface-local start point,
    /// or None when the event cannot start a gesture (secondary button, no contacts).
    /// A session that is still open is replaced; callers close it first if they care.
    pub fn begin(&mut self, event: &PointerEvent, rect: SurfaceRect) -> Option<Point> {
        if !event.can_begin() {
            debug!("begin ignored: not a primary pointer / first touch");
            return None;
        }
        let at = rect.to_local(event.client_position()?);
        self.state = TrackerState::Drawing(StrokeSession::start(at));
        debug!("stroke session opened at ({:.1},{:.1})", at.x, at.y);
        Some(at)
    }

    /// Append the event position to the open session. None while Idle.
    pub fn extend(&mut self, event: &PointerEvent, rect: SurfaceRect) -> Option<Point> {
        let TrackerState::Drawing(session) = &mut self.state else {
            return None;
        };
        let at = rect.to_local(event.client_position()?);
        session.points.push(at);
        Some(at)
    }

    /// Close the open session and hand it back. None while Idle.
    pub fn end(&mut self) -> Option<StrokeSession> {
        match std::mem::take(&mut self.state) {
            TrackerState::Drawing(session) => {
                debug!(
                    "stroke session closed: {} points, {} segments",
                    session.points.len(),
                    session.segments
                );
                Some(session)
            }
            TrackerState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: SurfaceRect = SurfaceRect { left: 0.0, top: 0.0 };

    #[test]
    fn given_idle_when_extend_then_noop() {
        let mut t = InputTracker::new();
        assert_eq!(t.extend(&PointerEvent::mouse(3.0, 4.0), ORIGIN), None);
        assert_eq!(t.state(), &TrackerState::Idle);
    }

    #[test]
    fn given_idle_when_end_then_noop() {
        let mut t = InputTracker::new();
        assert!(t.end().is_none());
        assert!(!t.is_drawing());
    }

    #[test]
    fn given_offset_surface_when_begin_then_start_point_is_local() {
        let mut t = InputTracker::new();
        let rect = SurfaceRect { left: 100.0, top: 50.0 };
        let at = t.begin(&PointerEvent::mouse(110.0, 60.0), rect);
        assert_eq!(at, Some(Point::new(10.0, 10.0)));
        assert_eq!(t.session().map(StrokeSession::start_point), Some(Point::new(10.0, 10.0)));
    }

    #[test]
    fn given_secondary_button_when_begin_then_stays_idle() {
        let mut t = InputTracker::new();
        let ev = PointerEvent::Mouse {
            client: Point::new(1.0, 1.0),
            button: PointerButton::Secondary,
        };
        assert_eq!(t.begin(&ev, ORIGIN), None);
        assert!(!t.is_drawing());
    }

    #[test]
    fn given_multi_touch_when_extend_then_first_contact_is_used() {
        let mut t = InputTracker::new();
        t.begin(&PointerEvent::touch(0.0, 0.0), ORIGIN);
        let ev = PointerEvent::Touch {
            touches: vec![Point::new(7.0, 8.0), Point::new(90.0, 90.0)],
        };
        assert_eq!(t.extend(&ev, ORIGIN), Some(Point::new(7.0, 8.0)));
    }

    #[test]
    fn given_empty_touch_list_when_begin_then_stays_idle() {
        let mut t = InputTracker::new();
        assert_eq!(t.begin(&PointerEvent::Touch { touches: vec![] }, ORIGIN), None);
        assert!(!t.is_drawing());
    }

    #[test]
    fn given_full_gesture_when_end_then_session_holds_points_in_order() {
        let mut t = InputTracker::new();
        t.begin(&PointerEvent::mouse(10.0, 10.0), ORIGIN);
        t.extend(&PointerEvent::mouse(10.0, 40.0), ORIGIN);
        t.extend(&PointerEvent::mouse(50.0, 40.0), ORIGIN);
        let session = t.end().unwrap();
        assert_eq!(
            session.points(),
            &[Point::new(10.0, 10.0), Point::new(10.0, 40.0), Point::new(50.0, 40.0)]
        );
        assert!(!session.has_advanced()); // segments are counted by whoever renders them
        assert_eq!(t.state(), &TrackerState::Idle);
    }
}
