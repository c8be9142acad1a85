// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=drawerify --heading-base-level=0

//! Drawerify: headless sliding drawer panels.
//!
//! This crate turns a container into a "drawer": a panel attached to one edge
//! of its parent that slides between open, closed, and custom resting states,
//! follows touch drags on a handle, and snaps to the nearest state when the
//! finger lifts. Which edge it is attached to, how wide it may get, and whether
//! it is active at all are chosen per viewport width by [`Breakpoints`].
//!
//! The crate is headless. It computes:
//! - Drawer dimensions and drag limits ([`DrawerLayout`]).
//! - Inline CSS for the drawer and its handle ([`Declarations`]).
//! - Resting states and their snap locations ([`StateTable`]).
//! - Transitions between offsets ([`Transition`]).
//!
//! It does **not** touch any UI toolkit. A [`DrawerHost`] measures the page and
//! applies the styles; `drawerify_web` provides one for the DOM.
//!
//! ## Minimal example
//!
//! ```rust
//! use drawerify::{
//!     Breakpoints, Declarations, Drawer, DrawerHost, DrawerProps, ElementExtent,
//!     ManagedProperties, StateName, Transition,
//! };
//! use kurbo::{Point, Rect};
//!
//! #[derive(Default)]
//! struct Page {
//!     drawer_css: Declarations,
//! }
//!
//! impl DrawerHost for Page {
//!     fn viewport_width(&self) -> f64 { 375.0 }
//!     fn container_bounds(&self) -> Rect { Rect::new(0.0, 0.0, 375.0, 667.0) }
//!     fn measure(&self, _selector: &str) -> Option<ElementExtent> { None }
//!     fn set_drawer_style(&mut self, css: &Declarations) { self.drawer_css.merge(css); }
//!     fn set_handle_style(&mut self, _css: &Declarations) {}
//!     fn animate_drawer(&mut self, t: &Transition) { self.drawer_css.merge(&t.target()); }
//!     fn clear_drawer_style(&mut self, _properties: ManagedProperties) {}
//!     fn hide_handle(&mut self) {}
//! }
//!
//! let mut page = Page::default();
//! let mut drawer = Drawer::new(Breakpoints::always(
//!     DrawerProps::new().starting_state(StateName::Closed),
//! ));
//! drawer.init(&mut page).unwrap();
//! assert_eq!(drawer.state(), Some(&StateName::Closed));
//!
//! // Tap the handle to open.
//! drawer.touch_end(&mut page, Point::new(300.0, 660.0)).unwrap();
//! assert_eq!(drawer.state(), Some(&StateName::Open));
//! assert!(page.drawer_css.to_string().ends_with("bottom: 0"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: deserialize [`Breakpoints`] from the JSON configuration shape.
//! - `tracing`: emit `tracing` events for layout and state changes.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod animation;
mod config;
mod drag;
mod drawer;
mod error;
mod geometry;
mod host;
mod options;
mod states;
mod style;

pub use animation::{Easing, Transition};
pub use config::{
    Attachment, Breakpoint, BreakpointKey, Breakpoints, CustomState, DrawerProps, Orientation,
    StateName,
};
pub use drag::{DragTracker, Release};
pub use drawer::Drawer;
pub use error::{ConfigError, DrawerError};
pub use geometry::{DrawerLayout, Edge, Offset, drawer_height, drawer_width};
pub use host::DrawerHost;
pub use options::DrawerOptions;
pub use states::{ElementExtent, StateStyle, StateTable, closed_state, custom_state, open_state};
pub use style::{
    CssProperty, CssValue, Declarations, ManagedProperties, drawer_static_styles,
    handle_static_styles,
};
