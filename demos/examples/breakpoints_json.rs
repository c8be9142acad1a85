// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoints from JSON.
//!
//! Load a `data-drawerify` style configuration and walk the drawer through
//! several window sizes: a bottom sheet with a peek state on phones, a side
//! panel on tablets, and nothing at all on desktops.
//!
//! Run:
//! - `cargo run -p drawerify_demos --example breakpoints_json`

use drawerify::{Breakpoints, Drawer, StateName};
use drawerify_demos::{ConsolePage, install_subscriber};

const CONFIG: &str = r#"{
    "480": {
        "orientation": "vertical",
        "startingState": "peek",
        "customStates": { "peek": ".drawer-header" }
    },
    "1024": {
        "orientation": "horizontal",
        "attachTo": "left",
        "startingState": "closed",
        "maxWidth": 320
    },
    "default": "disabled"
}"#;

fn main() {
    install_subscriber();

    let breakpoints: Breakpoints = serde_json::from_str(CONFIG).unwrap();
    let mut page = ConsolePage::new(375.0, 667.0).with_element(".drawer-header", 0.0, 48.0);
    let mut drawer = Drawer::new(breakpoints);

    for (width, height) in [(375.0, 667.0), (768.0, 1024.0), (1440.0, 900.0), (375.0, 667.0)] {
        page.resize(width, height);
        drawer.resize(&mut page).unwrap();

        println!("Viewport {width}x{height}:");
        match drawer.layout() {
            Some(layout) => {
                println!(
                    "  {:?} drawer on the {:?}, {}x{}",
                    layout.orientation(),
                    layout.attach_to(),
                    layout.width(),
                    layout.height()
                );
                let names: Vec<String> =
                    drawer.states().iter().map(|(name, _)| name.to_string()).collect();
                println!("  states: {}", names.join(", "));
                println!("  resting in {:?}: {}", drawer.state(), page.drawer_css());
            }
            None => println!(
                "  disabled (handle hidden: {}, state {:?})",
                page.handle_hidden(),
                drawer.state()
            ),
        }
    }

    // Custom states can be targeted by name, like the built-in ones.
    drawer.to(&mut page, &StateName::parse("peek"), None).unwrap();
    drawer.to(&mut page, &StateName::Open, None).unwrap();
    println!("Opened: {}", page.drawer_css());
}
