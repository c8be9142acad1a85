// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Custom states and snapping.
//!
//! Compute a drawer's resting states directly from its layout, then show
//! which state a release at each height snaps to.
//!
//! Run:
//! - `cargo run -p drawerify_demos --example custom_states`

use drawerify::{DrawerLayout, DrawerOptions, DrawerProps, ElementExtent, StateTable};
use kurbo::Rect;

fn main() {
    let options = DrawerOptions::default();
    let props = DrawerProps::new()
        .custom_state("summary", ".summary")
        .custom_state("details", ".details")
        .custom_state("missing", ".not-rendered");
    let layout = DrawerLayout::new(Rect::new(0.0, 0.0, 390.0, 844.0), &props, &options);

    let states = StateTable::compute(&layout, &props.custom_states, options.gutter, |selector| {
        match selector {
            ".summary" => Some(ElementExtent::new(0.0, 120.0)),
            ".details" => Some(ElementExtent::new(120.0, 300.0)),
            _ => None,
        }
    });

    println!(
        "Drawer {}x{}, handle travels y in {:?}",
        layout.width(),
        layout.height(),
        layout.drag_limits()
    );
    for (name, state) in states.iter() {
        println!(
            "  {name:<8} {:<20} rests at y = {}",
            state.css().to_string(),
            state.page_location
        );
    }

    for y in [90.0, 300.0, 500.0, 650.0, 800.0] {
        if let Some((name, _)) = states.nearest(y) {
            println!("Release at y = {y} snaps to {name}");
        }
    }
}
