// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer basics.
//!
//! Lay out a bottom drawer on a phone-sized page, tap its handle, drag it
//! halfway, and let it snap.
//!
//! Run:
//! - `cargo run -p drawerify_demos --example drawer_basics`

use drawerify::{Breakpoints, Declarations, Drawer, DrawerProps, StateName};
use drawerify_demos::{ConsolePage, install_subscriber};
use kurbo::Point;

fn main() {
    install_subscriber();

    let mut page = ConsolePage::new(375.0, 667.0);
    let mut drawer = Drawer::new(Breakpoints::always(
        DrawerProps::new().starting_state(StateName::Closed),
    ));
    drawer.init(&mut page).unwrap();

    println!("States:");
    for (name, state) in drawer.states().iter() {
        println!(
            "  {name:<8} css: {:<18} rests at y = {}",
            state.css().to_string(),
            state.page_location
        );
    }

    // A touch that lifts without moving is a tap.
    drawer.touch_end(&mut page, Point::new(300.0, 660.0)).unwrap();
    println!("After tap: {:?} -> {}", drawer.state(), page.drawer_css());

    // Drag the handle from the open position most of the way down.
    for y in [97.0, 200.0, 350.0, 500.0] {
        if let Some(offset) = drawer.touch_move(&mut page, Point::new(300.0, y)) {
            println!("  dragging at y = {y}: {}", Declarations::offset(offset));
        }
    }
    let release = drawer
        .touch_end(&mut page, Point::new(300.0, 500.0))
        .unwrap();
    println!(
        "Released ({release:?}): {:?} -> {}",
        drawer.state(),
        page.drawer_css()
    );

    drawer.toggle(&mut page).unwrap();
    println!("After toggle: {:?}", drawer.state());
}
