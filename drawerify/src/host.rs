// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::animation::Transition;
use crate::states::ElementExtent;
use crate::style::{Declarations, ManagedProperties};

/// The environment a [`Drawer`](crate::Drawer) runs in.
///
/// A host answers layout queries and applies the styles the drawer produces.
/// The DOM adapter implements this against real elements; tests and native
/// toolkits can implement it against anything that has a rectangle and a
/// place to put inline styles.
pub trait DrawerHost {
    /// Width of the viewport, used to choose a breakpoint.
    fn viewport_width(&self) -> f64;

    /// Bounds of the drawer's container (its offset parent) in page
    /// coordinates.
    fn container_bounds(&self) -> Rect;

    /// Measures the element matching `selector`. Its `top` is relative to
    /// the element's offset parent, normally the drawer itself.
    ///
    /// Where the selector is searched is up to the host. Returns `None` if
    /// nothing matches.
    fn measure(&self, selector: &str) -> Option<ElementExtent>;

    /// Applies inline styles to the drawer immediately.
    fn set_drawer_style(&mut self, css: &Declarations);

    /// Applies inline styles to the handle immediately.
    fn set_handle_style(&mut self, css: &Declarations);

    /// Animates the drawer's moving edge.
    ///
    /// Instant transitions must be applied before this returns.
    fn animate_drawer(&mut self, transition: &Transition);

    /// Removes inline styles from the drawer, restoring stylesheet values.
    fn clear_drawer_style(&mut self, properties: ManagedProperties);

    /// Hides the handle.
    fn hide_handle(&mut self);
}
