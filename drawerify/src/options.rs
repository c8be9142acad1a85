// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::Size;

use crate::animation::Easing;

/// Tunables shared by every breakpoint of a drawer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerOptions {
    /// Size of the grab handle rendered outside the drawer edge.
    pub handle_size: Size,
    /// Extra space kept between the handle and the container edge, and
    /// below elements that define custom states.
    pub gutter: f64,
    /// Duration used by [`Drawer::to`](crate::Drawer::to) when none is given.
    pub default_speed: Duration,
    /// Stacking order applied to the drawer.
    pub z_index: i32,
    /// Easing curve for state transitions.
    pub easing: Easing,
}

impl DrawerOptions {
    /// The options the widget has always used: a 70x70 handle, a 10px
    /// gutter, 300ms transitions and `z-index: 1000`.
    pub const DEFAULT: Self = Self {
        handle_size: Size::new(70.0, 70.0),
        gutter: 10.0,
        default_speed: Duration::from_millis(300),
        z_index: 1000,
        easing: Easing::Swing,
    };
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
