// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup and CSS conventions shared with stylesheets.

use drawerify::{Breakpoints, CssProperty, Easing, Transition};

/// Class added to the element that becomes the drawer.
pub const DRAWER_CLASS: &str = "drawerify-drawer";
/// Class of the generated handle anchor.
pub const HANDLE_CLASS: &str = "drawerify-handle";
/// Class of the wrapper the drawer's original children are moved into.
pub const CONTENT_CLASS: &str = "drawerify-content";
/// Attribute holding the JSON breakpoint configuration.
pub const CONFIG_ATTRIBUTE: &str = "data-drawerify";
/// Id of the `<style>` element holding [`BASE_CSS`].
pub const BASE_CSS_ID: &str = "drawerify-base-css";

/// Rules the inline styles rely on.
///
/// The insets only apply to positioned boxes, and the drawer stays hidden
/// until its first layout reveals it. The handle is shown by layout and
/// hidden again when the drawer is disabled, and gets the default 70x70
/// handle size. Stylesheet rules that come
/// later override these, e.g. `position: fixed` for a viewport drawer.
pub const BASE_CSS: &str = "\
.drawerify-drawer { position: absolute; visibility: hidden; }
.drawerify-handle { position: absolute; display: none; width: 70px; height: 70px; }
";

/// CSS timing function for an easing curve.
///
/// `Swing` maps to the sine in-out curve, which matches `0.5 - cos(p * pi) / 2`
/// to within a pixel over any drawer travel.
#[must_use]
pub fn timing_function(easing: Easing) -> &'static str {
    match easing {
        Easing::Linear => "linear",
        Easing::Swing => "cubic-bezier(0.37, 0, 0.63, 1)",
    }
}

/// Value for the `transition` property that animates `transition`.
#[must_use]
pub fn transition_value(transition: &Transition) -> String {
    if transition.is_instant() {
        return String::from("none");
    }
    format!(
        "{} {}ms {}",
        CssProperty::from(transition.end().edge),
        transition.duration().as_millis(),
        timing_function(transition.easing())
    )
}

/// Parses the JSON breakpoint configuration, as found in
/// [`CONFIG_ATTRIBUTE`].
pub fn parse_breakpoints(json: &str) -> Result<Breakpoints, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use drawerify::{Edge, Offset, Orientation};

    use super::*;

    #[test]
    fn instant_transitions_disable_css_transition() {
        let t = Transition::instant(Offset::new(Edge::Bottom, -100.0));
        assert_eq!(transition_value(&t), "none");
    }

    #[test]
    fn transition_names_moving_edge() {
        let t = Transition::new(
            Offset::new(Edge::Right, -300.0),
            Offset::new(Edge::Right, 0.0),
            Duration::from_millis(300),
            Easing::Swing,
        );
        assert_eq!(
            transition_value(&t),
            "right 300ms cubic-bezier(0.37, 0, 0.63, 1)"
        );

        let linear = Transition::new(
            Offset::new(Edge::Bottom, -300.0),
            Offset::new(Edge::Bottom, 0.0),
            Duration::from_millis(120),
            Easing::Linear,
        );
        assert_eq!(transition_value(&linear), "bottom 120ms linear");
    }

    #[test]
    fn base_css_positions_both_elements() {
        for class in [DRAWER_CLASS, HANDLE_CLASS] {
            let rule = BASE_CSS
                .lines()
                .find(|line| line.starts_with(&format!(".{class} ")))
                .unwrap_or_else(|| panic!("no rule for .{class}"));
            assert!(rule.contains("position: absolute;"), "{rule}");
        }
        assert!(BASE_CSS.contains("visibility: hidden;"));
        assert!(BASE_CSS.contains("display: none;"));
    }

    #[test]
    fn parses_attribute_json() {
        let breakpoints =
            parse_breakpoints(r#"{"default": "disabled", "600": {"orientation": "horizontal"}}"#)
                .unwrap();
        assert!(breakpoints.choose(800.0).is_none());
        assert_eq!(
            breakpoints.choose(400.0).map(|p| p.orientation),
            Some(Orientation::Horizontal)
        );
        assert!(parse_breakpoints("{").is_err());
    }
}
