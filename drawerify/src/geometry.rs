// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer dimensions, dynamic edge offsets, and drag limits.
//!
//! All coordinates are page coordinates in CSS pixels. The container is the
//! drawer's offset parent; everything the drawer does is relative to it.

use core::ops::RangeInclusive;

use kurbo::{Point, Rect, Size};

use crate::config::{Attachment, DrawerProps, Orientation};
use crate::options::DrawerOptions;

/// One edge of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

/// The position of the drawer's moving edge, relative to the container edge.
///
/// `0` means flush with the container edge (fully open). Negative values push
/// the drawer out of the container by that many pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    /// Which CSS inset moves.
    pub edge: Edge,
    /// Inset value in pixels.
    pub px: f64,
}

impl Offset {
    /// Creates an offset.
    #[must_use]
    pub const fn new(edge: Edge, px: f64) -> Self {
        Self { edge, px }
    }
}

/// Computes the drawer width.
///
/// The width is the container width, limited by `max_width`. Horizontal
/// drawers also leave room for the handle plus the gutter when the limited
/// width would push the handle out of the container.
#[must_use]
pub fn drawer_width(container: Rect, props: &DrawerProps, options: &DrawerOptions) -> f64 {
    let container_width = container.width();
    let mut width = props
        .max_width
        .map_or(container_width, |max| container_width.min(max));
    if props.orientation == Orientation::Horizontal
        && width + options.handle_size.width > container_width
    {
        width = container_width - options.handle_size.width - options.gutter;
    }
    width
}

/// Computes the drawer height.
///
/// Vertical drawers leave room above them for the handle plus the gutter;
/// horizontal drawers span the full container height.
#[must_use]
pub fn drawer_height(container: Rect, props: &DrawerProps, options: &DrawerOptions) -> f64 {
    match props.orientation {
        Orientation::Vertical => container.height() - options.handle_size.height - options.gutter,
        Orientation::Horizontal => container.height(),
    }
}

/// Resolved geometry of a drawer inside its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerLayout {
    orientation: Orientation,
    attach_to: Attachment,
    container: Rect,
    size: Size,
}

impl DrawerLayout {
    /// Computes the layout for `props` inside `container`.
    #[must_use]
    pub fn new(container: Rect, props: &DrawerProps, options: &DrawerOptions) -> Self {
        Self {
            orientation: props.orientation,
            attach_to: props.attach_to,
            container,
            size: Size::new(
                drawer_width(container, props, options),
                drawer_height(container, props, options),
            ),
        }
    }

    /// Sliding axis.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Attachment edge.
    #[must_use]
    pub fn attach_to(&self) -> Attachment {
        self.attach_to
    }

    /// Container bounds in page coordinates.
    #[must_use]
    pub fn container(&self) -> Rect {
        self.container
    }

    /// Drawer size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Drawer width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Drawer height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// The edge whose CSS inset changes between states.
    #[must_use]
    pub fn dynamic_edge(&self) -> Edge {
        match (self.orientation, self.attach_to) {
            (Orientation::Vertical, _) => Edge::Bottom,
            (Orientation::Horizontal, Attachment::Left) => Edge::Left,
            (Orientation::Horizontal, Attachment::Right) => Edge::Right,
        }
    }

    /// The pointer coordinate along the sliding axis.
    #[must_use]
    pub fn axis_coordinate(&self, point: Point) -> f64 {
        match self.orientation {
            Orientation::Vertical => point.y,
            Orientation::Horizontal => point.x,
        }
    }

    /// Range of axis coordinates over which a drag moves the drawer.
    ///
    /// The range runs from the fully open handle position to the fully
    /// closed one.
    #[must_use]
    pub fn drag_limits(&self) -> RangeInclusive<f64> {
        let c = self.container;
        match (self.orientation, self.attach_to) {
            (Orientation::Vertical, _) => (c.y1 - self.height())..=c.y1,
            (Orientation::Horizontal, Attachment::Left) => c.x0..=(c.x0 + self.width()),
            (Orientation::Horizontal, Attachment::Right) => (c.x1 - self.width())..=c.x1,
        }
    }

    /// The offset that places the drawer's moving edge at `coordinate`.
    ///
    /// The coordinate is not clamped; see [`DrawerLayout::drag_limits`].
    #[must_use]
    pub fn offset_at(&self, coordinate: f64) -> Offset {
        let c = self.container;
        let px = match (self.orientation, self.attach_to) {
            (Orientation::Vertical, _) => -(self.height() - (c.y1 - coordinate)),
            (Orientation::Horizontal, Attachment::Left) => -(self.width() - (coordinate - c.x0)),
            (Orientation::Horizontal, Attachment::Right) => -(self.width() - (c.x1 - coordinate)),
        };
        Offset::new(self.dynamic_edge(), px)
    }
}
