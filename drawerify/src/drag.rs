// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking for the drawer handle.
//!
//! ## Usage
//!
//! 1) On each touch move, call [`DragTracker::track`] with the touch position.
//!    It returns the offset that keeps the drawer edge under the finger, or
//!    `None` while the finger is outside the drawer's travel.
//! 2) On touch end, call [`DragTracker::release`]. It reports whether the
//!    gesture was a [`Release::Drag`] (snap to the nearest state) or a
//!    [`Release::Tap`] (toggle), and resets the tracker.
//!
//! ## Minimal example
//!
//! ```
//! use drawerify::{DragTracker, DrawerLayout, DrawerOptions, DrawerProps, Release};
//! use kurbo::{Point, Rect};
//!
//! let container = Rect::new(0.0, 0.0, 400.0, 800.0);
//! let layout = DrawerLayout::new(container, &DrawerProps::new(), &DrawerOptions::default());
//! let mut drag = DragTracker::default();
//!
//! // The finger drags the handle to y = 500: 300px of the 720px drawer show.
//! let offset = drag.track(&layout, Point::new(200.0, 500.0)).unwrap();
//! assert_eq!(offset.px, -420.0);
//! assert!(drag.is_moving());
//!
//! assert_eq!(drag.release(), Release::Drag);
//! assert!(!drag.is_moving());
//! ```

use kurbo::Point;

use crate::geometry::{DrawerLayout, Offset};

/// How a touch sequence on the handle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// The handle was touched and released without moving.
    Tap,
    /// The handle was dragged.
    Drag,
}

/// Tracks a drag gesture on the handle.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    /// First position seen during the current gesture.
    pub start_pos: Option<Point>,
}

impl DragTracker {
    /// Records a move to `pos`, returning the drawer offset that follows it.
    ///
    /// The gesture counts as a drag even when `pos` lies outside the drag
    /// limits; only the returned offset is suppressed.
    pub fn track(&mut self, layout: &DrawerLayout, pos: Point) -> Option<Offset> {
        if self.start_pos.is_none() {
            self.start_pos = Some(pos);
        }

        let coordinate = layout.axis_coordinate(pos);
        layout
            .drag_limits()
            .contains(&coordinate)
            .then(|| layout.offset_at(coordinate))
    }

    /// Ends the gesture and reports how it ended.
    pub fn release(&mut self) -> Release {
        let release = if self.is_moving() {
            Release::Drag
        } else {
            Release::Tap
        };
        self.end();
        release
    }

    /// Abandons the current gesture.
    pub fn end(&mut self) {
        self.start_pos = None;
    }

    /// Returns `true` while a drag gesture is in progress.
    pub fn is_moving(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;
    use crate::config::{Attachment, DrawerProps, Orientation};
    use crate::geometry::Edge;
    use crate::options::DrawerOptions;

    fn vertical() -> DrawerLayout {
        DrawerLayout::new(
            Rect::new(0.0, 0.0, 400.0, 800.0),
            &DrawerProps::new(),
            &DrawerOptions::default(),
        )
    }

    #[test]
    fn new_tracker_is_not_moving() {
        let drag = DragTracker::default();
        assert!(!drag.is_moving());
        assert!(drag.start_pos.is_none());
    }

    #[test]
    fn track_follows_finger_inside_limits() {
        let layout = vertical();
        let mut drag = DragTracker::default();

        assert_eq!(
            drag.track(&layout, Point::new(10.0, 80.0)),
            Some(Offset::new(Edge::Bottom, 0.0))
        );
        assert_eq!(
            drag.track(&layout, Point::new(10.0, 800.0)),
            Some(Offset::new(Edge::Bottom, -720.0))
        );
        assert_eq!(drag.start_pos, Some(Point::new(10.0, 80.0)));
    }

    #[test]
    fn track_outside_limits_still_counts_as_moving() {
        let layout = vertical();
        let mut drag = DragTracker::default();

        assert_eq!(drag.track(&layout, Point::new(10.0, 20.0)), None);
        assert_eq!(drag.track(&layout, Point::new(10.0, 900.0)), None);
        assert!(drag.is_moving());
        assert_eq!(drag.release(), Release::Drag);
    }

    #[test]
    fn release_without_movement_is_tap() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.release(), Release::Tap);
    }

    #[test]
    fn release_resets_state() {
        let mut drag = DragTracker::default();
        drag.track(&vertical(), Point::new(0.0, 400.0));
        drag.release();
        assert!(drag.start_pos.is_none());
        assert_eq!(drag.release(), Release::Tap);
    }

    #[test]
    fn horizontal_right_tracks_x() {
        let props = DrawerProps::new()
            .orientation(Orientation::Horizontal)
            .attach_to(Attachment::Right)
            .max_width(200.0);
        let layout = DrawerLayout::new(
            Rect::new(100.0, 0.0, 500.0, 600.0),
            &props,
            &DrawerOptions::default(),
        );
        let mut drag = DragTracker::default();

        // 50px of the 200px drawer visible.
        assert_eq!(
            drag.track(&layout, Point::new(450.0, 9999.0)),
            Some(Offset::new(Edge::Right, -150.0))
        );
        assert_eq!(drag.track(&layout, Point::new(250.0, 0.0)), None);
    }
}
