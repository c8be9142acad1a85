// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the drawerify demos.
//!
//! [`ConsolePage`] is a [`DrawerHost`] without a UI: it keeps the drawer's
//! inline styles in memory and logs each change through `tracing`.

use std::collections::HashMap;

use drawerify::{Declarations, DrawerHost, ElementExtent, ManagedProperties, Transition};
use kurbo::Rect;

/// Installs a `tracing` fmt subscriber that prints to stderr.
///
/// `RUST_LOG`-style filtering is not wired up; every event at `DEBUG` and
/// above is printed.
pub fn install_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

/// An in-memory page hosting one drawer.
#[derive(Debug)]
pub struct ConsolePage {
    viewport_width: f64,
    container: Rect,
    elements: HashMap<String, ElementExtent>,
    drawer_css: Declarations,
    handle_css: Declarations,
    handle_hidden: bool,
}

impl ConsolePage {
    /// A page whose drawer container fills a `width` x `height` viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport_width: width,
            container: Rect::new(0.0, 0.0, width, height),
            elements: HashMap::new(),
            drawer_css: Declarations::new(),
            handle_css: Declarations::new(),
            handle_hidden: false,
        }
    }

    /// Adds an element inside the drawer that custom states can point at.
    pub fn with_element(mut self, selector: &str, top: f64, outer_height: f64) -> Self {
        self.elements
            .insert(selector.to_owned(), ElementExtent::new(top, outer_height));
        self
    }

    /// Simulates rotating the device or resizing the window.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.container = Rect::new(0.0, 0.0, width, height);
    }

    /// Inline styles currently on the drawer.
    pub fn drawer_css(&self) -> &Declarations {
        &self.drawer_css
    }

    /// Inline styles currently on the handle.
    pub fn handle_css(&self) -> &Declarations {
        &self.handle_css
    }

    /// Whether the handle has been hidden.
    pub fn handle_hidden(&self) -> bool {
        self.handle_hidden
    }
}

impl DrawerHost for ConsolePage {
    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn container_bounds(&self) -> Rect {
        self.container
    }

    fn measure(&self, selector: &str) -> Option<ElementExtent> {
        self.elements.get(selector).copied()
    }

    fn set_drawer_style(&mut self, css: &Declarations) {
        tracing::info!(%css, "drawer style");
        self.drawer_css.merge(css);
    }

    fn set_handle_style(&mut self, css: &Declarations) {
        tracing::info!(%css, "handle style");
        self.handle_hidden = false;
        self.handle_css.merge(css);
    }

    fn animate_drawer(&mut self, transition: &Transition) {
        let target = transition.target();
        tracing::info!(
            css = %target,
            duration_ms = u64::try_from(transition.duration().as_millis()).unwrap_or(u64::MAX),
            "drawer animation"
        );
        self.drawer_css.merge(&target);
    }

    fn clear_drawer_style(&mut self, properties: ManagedProperties) {
        tracing::info!(?properties, "drawer style cleared");
        let mut kept = Declarations::new();
        for (property, value) in self.drawer_css.iter() {
            if !properties.contains(property.flag()) {
                kept.set(property, value);
            }
        }
        self.drawer_css = kept;
    }

    fn hide_handle(&mut self) {
        tracing::info!("handle hidden");
        self.handle_hidden = true;
    }
}
