// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A JSON-configured drawer followed across window sizes.

use core::time::Duration;

use drawerify::{
    Breakpoints, CssProperty, CssValue, Drawer, DrawerHost, Easing, Edge, Offset, Orientation,
    StateName, Transition,
};
use drawerify_demos::ConsolePage;

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

fn drawer() -> Drawer {
    Drawer::new(serde_json::from_str::<Breakpoints>(CONFIG).unwrap())
}

#[test]
fn phone_starts_in_custom_state() {
    let mut page = ConsolePage::new(375.0, 667.0).with_element(".drawer-header", 0.0, 48.0);
    let mut drawer = drawer();
    drawer.init(&mut page).unwrap();

    assert_eq!(drawer.state(), Some(&StateName::parse("peek")));
    // 667 - 70 - 10 = 587 tall; 48 + 10 of it stays visible.
    assert_eq!(
        page.drawer_css().get(CssProperty::Bottom),
        Some(CssValue::Px(-529.0))
    );
    assert_eq!(drawer.states().len(), 3);
}

#[test]
fn tablet_uses_side_panel_and_desktop_disables() {
    let mut page = ConsolePage::new(375.0, 667.0).with_element(".drawer-header", 0.0, 48.0);
    let mut drawer = drawer();
    drawer.init(&mut page).unwrap();

    page.resize(768.0, 1024.0);
    drawer.resize(&mut page).unwrap();
    let layout = drawer.layout().unwrap();
    assert_eq!(layout.orientation(), Orientation::Horizontal);
    assert_eq!(layout.width(), 320.0);
    assert_eq!(drawer.state(), Some(&StateName::Closed));
    assert_eq!(
        page.drawer_css().get(CssProperty::Left),
        Some(CssValue::Px(-320.0))
    );
    assert!(!page.handle_hidden());

    page.resize(1440.0, 900.0);
    drawer.resize(&mut page).unwrap();
    assert!(drawer.is_disabled());
    assert!(page.handle_hidden());
    assert_eq!(page.drawer_css().get(CssProperty::Left), None);
    assert_eq!(page.drawer_css().get(CssProperty::Width), None);
}

#[test]
fn unknown_keyword_is_rejected() {
    let err = serde_json::from_str::<Breakpoints>(r#"{"default": "sometimes"}"#).unwrap_err();
    assert!(err.to_string().contains("sometimes"), "{err}");
}

#[test]
fn oversized_animation_duration_is_logged() {
    drawerify_demos::install_subscriber();
    let mut page = ConsolePage::new(375.0, 667.0);
    page.animate_drawer(&Transition::new(
        Offset::new(Edge::Bottom, -400.0),
        Offset::new(Edge::Bottom, 0.0),
        Duration::MAX,
        Easing::Swing,
    ));
    assert_eq!(
        page.drawer_css().get(CssProperty::Bottom),
        Some(CssValue::Px(0.0))
    );
}
