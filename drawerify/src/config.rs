// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint-driven drawer configuration.
//!
//! A [`Breakpoints`] value maps viewport widths to either a [`DrawerProps`]
//! set or [`Breakpoint::Disabled`]. Numeric breakpoints act as upper bounds:
//! the smallest breakpoint that is at least as wide as the viewport wins, and
//! the optional `default` entry applies when no numeric breakpoint matches.
//!
//! ```rust
//! use drawerify::{Attachment, Breakpoint, Breakpoints, DrawerProps, Orientation};
//!
//! let breakpoints = Breakpoints::new()
//!     .with_default(Breakpoint::Disabled)
//!     .with_breakpoint(
//!         768,
//!         DrawerProps::new()
//!             .orientation(Orientation::Horizontal)
//!             .attach_to(Attachment::Left),
//!     );
//!
//! // Phones and tablets get a drawer.
//! let props = breakpoints.choose(640.0).unwrap();
//! assert_eq!(props.orientation, Orientation::Horizontal);
//!
//! // Desktops fall back to the default, which disables the drawer.
//! assert!(breakpoints.choose(1280.0).is_none());
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ConfigError;

/// The axis along which the drawer slides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Slides up from the bottom edge of the container.
    #[default]
    Vertical,
    /// Slides in from the left or right edge of the container.
    Horizontal,
}

impl Orientation {
    /// Returns the configuration keyword for this orientation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(ConfigError::UnknownOrientation(other.to_string())),
        }
    }
}

/// The container edge the drawer is attached to.
///
/// Horizontal drawers slide in from this edge. Vertical drawers always slide
/// up from the bottom and use this edge to pin themselves (and their handle)
/// to one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// Attached to the left edge.
    Left,
    /// Attached to the right edge.
    #[default]
    Right,
}

impl Attachment {
    /// Returns the configuration keyword for this attachment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for Attachment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ConfigError::UnknownAttachment(other.to_string())),
        }
    }
}

/// Name of a drawer state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StateName {
    /// Fully revealed.
    #[default]
    Open,
    /// Fully hidden behind the container edge, handle still visible.
    Closed,
    /// Drawer behavior is switched off and managed styles are cleared.
    Disabled,
    /// A configured intermediate state, revealing content up to an element.
    Custom(String),
}

impl StateName {
    /// Parses a state keyword. Anything other than the built-in names is a
    /// custom state.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "open" => Self::Open,
            "closed" => Self::Closed,
            "disabled" => Self::Disabled,
            custom => Self::Custom(custom.to_string()),
        }
    }

    /// Returns the keyword for this state.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Disabled => "disabled",
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for StateName {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An intermediate state that reveals the drawer up to the bottom of an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomState {
    /// State name, used with [`Drawer::to`](crate::Drawer::to).
    pub name: String,
    /// Host-specific element selector, resolved by
    /// [`DrawerHost::measure`](crate::DrawerHost::measure).
    pub selector: String,
}

/// Drawer properties that apply at a breakpoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawerProps {
    /// Sliding axis.
    pub orientation: Orientation,
    /// Edge the drawer is attached to.
    pub attach_to: Attachment,
    /// State applied, without animation, whenever the drawer is initialized.
    pub starting_state: StateName,
    /// Upper bound on the drawer width in pixels; `None` uses the container width.
    pub max_width: Option<f64>,
    /// Intermediate states, in snapping priority order.
    pub custom_states: Vec<CustomState>,
}

impl DrawerProps {
    /// Creates the default props: vertical, attached right, starting open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientation.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the attachment edge.
    #[must_use]
    pub fn attach_to(mut self, attach_to: Attachment) -> Self {
        self.attach_to = attach_to;
        self
    }

    /// Sets the starting state.
    #[must_use]
    pub fn starting_state(mut self, state: impl Into<StateName>) -> Self {
        self.starting_state = state.into();
        self
    }

    /// Limits the drawer width. Non-positive widths mean "no limit".
    #[must_use]
    pub fn max_width(mut self, max_width: f64) -> Self {
        self.max_width = (max_width > 0.0).then_some(max_width);
        self
    }

    /// Appends a custom state.
    #[must_use]
    pub fn custom_state(mut self, name: impl Into<String>, selector: impl Into<String>) -> Self {
        self.custom_states.push(CustomState {
            name: name.into(),
            selector: selector.into(),
        });
        self
    }
}

/// What applies at a breakpoint.
#[derive(Clone, Debug, PartialEq)]
pub enum Breakpoint {
    /// The drawer is turned off.
    Disabled,
    /// The drawer is active with these props.
    Props(DrawerProps),
}

impl From<DrawerProps> for Breakpoint {
    fn from(props: DrawerProps) -> Self {
        Self::Props(props)
    }
}

/// Key of a breakpoint entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreakpointKey {
    /// The `default` entry.
    Default,
    /// A viewport width in pixels.
    Width(u32),
}

impl BreakpointKey {
    /// Parses a breakpoint key.
    ///
    /// `"default"` selects the default entry. Otherwise the leading decimal
    /// digits are read as a width, so `"768"` and `"768px"` are equivalent.
    ///
    /// Deserialized configurations skip keys this rejects, since they can
    /// never match a viewport.
    pub fn parse(key: &str) -> Result<Self, ConfigError> {
        if key == "default" {
            return Ok(Self::Default);
        }
        let trimmed = key.trim_start();
        let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Err(ConfigError::InvalidBreakpoint(key.to_string()));
        }
        trimmed[..digits]
            .parse()
            .map(Self::Width)
            .map_err(|_| ConfigError::InvalidBreakpoint(key.to_string()))
    }
}

impl FromStr for BreakpointKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Responsive drawer configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Breakpoints {
    default: Option<Breakpoint>,
    widths: Vec<(u32, Breakpoint)>,
}

impl Breakpoints {
    /// Creates an empty configuration. With no entries the drawer is disabled
    /// at every width.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration where `props` apply at every width.
    #[must_use]
    pub fn always(props: DrawerProps) -> Self {
        Self::new().with_default(props)
    }

    /// Sets the entry used when no numeric breakpoint matches.
    #[must_use]
    pub fn with_default(mut self, breakpoint: impl Into<Breakpoint>) -> Self {
        self.default = Some(breakpoint.into());
        self
    }

    /// Adds an entry that applies to viewports up to `width` pixels wide.
    #[must_use]
    pub fn with_breakpoint(mut self, width: u32, breakpoint: impl Into<Breakpoint>) -> Self {
        self.insert(BreakpointKey::Width(width), breakpoint.into());
        self
    }

    /// Inserts an entry, replacing any entry with the same key.
    pub fn insert(&mut self, key: BreakpointKey, breakpoint: Breakpoint) {
        match key {
            BreakpointKey::Default => self.default = Some(breakpoint),
            BreakpointKey::Width(width) => {
                match self.widths.iter_mut().find(|(w, _)| *w == width) {
                    Some(entry) => entry.1 = breakpoint,
                    None => self.widths.push((width, breakpoint)),
                }
            }
        }
    }

    /// Returns the default entry, if any.
    #[must_use]
    pub fn default_breakpoint(&self) -> Option<&Breakpoint> {
        self.default.as_ref()
    }

    /// Iterates the numeric entries in insertion order.
    pub fn widths(&self) -> impl Iterator<Item = (u32, &Breakpoint)> + '_ {
        self.widths.iter().map(|(w, bp)| (*w, bp))
    }

    /// Returns `true` if there are no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.widths.is_empty()
    }

    /// Chooses the breakpoint entry for a viewport width.
    ///
    /// Starts from the `default` entry, then prefers the smallest numeric
    /// breakpoint that is greater than or equal to `viewport_width`.
    #[must_use]
    pub fn choose_entry(&self, viewport_width: f64) -> Option<&Breakpoint> {
        let mut chosen = self.default.as_ref();
        let mut best: Option<u32> = None;
        for (width, breakpoint) in &self.widths {
            if f64::from(*width) >= viewport_width && best.is_none_or(|b| *width < b) {
                best = Some(*width);
                chosen = Some(breakpoint);
            }
        }
        chosen
    }

    /// Chooses the props for a viewport width, or `None` if the drawer is
    /// disabled there.
    #[must_use]
    pub fn choose(&self, viewport_width: f64) -> Option<&DrawerProps> {
        match self.choose_entry(viewport_width) {
            Some(Breakpoint::Props(props)) => Some(props),
            Some(Breakpoint::Disabled) | None => None,
        }
    }
}

#[cfg(feature = "serde")]
mod de {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::fmt;

    use serde::de::{Error as _, MapAccess, Visitor};
    use serde::{Deserialize, Deserializer};

    use super::{
        Breakpoint, BreakpointKey, Breakpoints, ConfigError, CustomState, DrawerProps, StateName,
    };

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawBreakpoint {
        Keyword(String),
        Props(RawProps),
    }

    #[derive(Default, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    struct RawProps {
        orientation: Option<String>,
        attach_to: Option<String>,
        starting_state: Option<String>,
        max_width: Option<f64>,
        custom_states: OrderedStates,
    }

    /// `customStates` in document order.
    #[derive(Default)]
    struct OrderedStates(Vec<CustomState>);

    impl<'de> Deserialize<'de> for OrderedStates {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct StatesVisitor;

            impl<'de> Visitor<'de> for StatesVisitor {
                type Value = OrderedStates;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a map from state names to selectors")
                }

                fn visit_map<A: MapAccess<'de>>(
                    self,
                    mut map: A,
                ) -> Result<Self::Value, A::Error> {
                    let mut states = Vec::new();
                    while let Some((name, selector)) = map.next_entry::<String, String>()? {
                        states.push(CustomState { name, selector });
                    }
                    Ok(OrderedStates(states))
                }
            }

            deserializer.deserialize_map(StatesVisitor)
        }
    }

    fn non_empty(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.is_empty())
    }

    impl TryFrom<RawProps> for DrawerProps {
        type Error = ConfigError;

        fn try_from(raw: RawProps) -> Result<Self, Self::Error> {
            let mut props = Self::new();
            if let Some(orientation) = non_empty(raw.orientation) {
                props.orientation = orientation.parse()?;
            }
            if let Some(attach_to) = non_empty(raw.attach_to) {
                props.attach_to = attach_to.parse()?;
            }
            if let Some(state) = non_empty(raw.starting_state) {
                props.starting_state = StateName::parse(&state);
            }
            if let Some(max_width) = raw.max_width {
                props = props.max_width(max_width);
            }
            for CustomState { name, selector } in raw.custom_states.0 {
                props = props.custom_state(name, selector);
            }
            Ok(props)
        }
    }

    impl TryFrom<RawBreakpoint> for Breakpoint {
        type Error = ConfigError;

        fn try_from(raw: RawBreakpoint) -> Result<Self, Self::Error> {
            match raw {
                RawBreakpoint::Keyword(keyword) if keyword == "disabled" => Ok(Self::Disabled),
                RawBreakpoint::Keyword(keyword) => Err(ConfigError::UnknownKeyword(keyword)),
                RawBreakpoint::Props(props) => props.try_into().map(Self::Props),
            }
        }
    }

    impl<'de> Deserialize<'de> for Breakpoints {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = BTreeMap::<String, RawBreakpoint>::deserialize(deserializer)?;
            let mut breakpoints = Self::new();
            for (raw_key, value) in raw {
                // A key without a usable width can never match a viewport.
                let Ok(key) = BreakpointKey::parse(&raw_key) else {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(key = raw_key.as_str(), "ignoring drawer breakpoint key");
                    continue;
                };
                let value = Breakpoint::try_from(value).map_err(D::Error::custom)?;
                breakpoints.insert(key, value);
            }
            Ok(breakpoints)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> DrawerProps {
        DrawerProps::new().orientation(Orientation::Horizontal)
    }

    #[test]
    fn defaults_match_widget_defaults() {
        let props = DrawerProps::new();
        assert_eq!(props.orientation, Orientation::Vertical);
        assert_eq!(props.attach_to, Attachment::Right);
        assert_eq!(props.starting_state, StateName::Open);
        assert_eq!(props.max_width, None);
        assert!(props.custom_states.is_empty());
    }

    #[test]
    fn empty_configuration_is_disabled_everywhere() {
        let breakpoints = Breakpoints::new();
        assert!(breakpoints.is_empty());
        assert!(breakpoints.choose(320.0).is_none());
        assert!(breakpoints.choose(4000.0).is_none());
    }

    #[test]
    fn default_applies_when_no_width_matches() {
        let breakpoints =
            Breakpoints::always(horizontal()).with_breakpoint(480, Breakpoint::Disabled);
        assert!(breakpoints.choose(320.0).is_none());
        assert_eq!(
            breakpoints.choose(1024.0).map(|p| p.orientation),
            Some(Orientation::Horizontal)
        );
    }

    #[test]
    fn smallest_covering_breakpoint_wins() {
        let breakpoints = Breakpoints::new()
            .with_breakpoint(1024, horizontal().attach_to(Attachment::Right))
            .with_breakpoint(480, DrawerProps::new())
            .with_breakpoint(768, horizontal().attach_to(Attachment::Left));

        assert_eq!(
            breakpoints.choose(400.0).map(|p| p.orientation),
            Some(Orientation::Vertical)
        );
        assert_eq!(
            breakpoints.choose(600.0).map(|p| p.attach_to),
            Some(Attachment::Left)
        );
        assert_eq!(
            breakpoints.choose(900.0).map(|p| p.attach_to),
            Some(Attachment::Right)
        );
        // Wider than every breakpoint and no default.
        assert!(breakpoints.choose(1100.0).is_none());
    }

    #[test]
    fn breakpoint_equal_to_viewport_matches() {
        let breakpoints = Breakpoints::new().with_breakpoint(768, DrawerProps::new());
        assert!(breakpoints.choose(768.0).is_some());
        assert!(breakpoints.choose(768.5).is_none());
    }

    #[test]
    fn insert_replaces_existing_width() {
        let mut breakpoints = Breakpoints::new().with_breakpoint(480, DrawerProps::new());
        breakpoints.insert(BreakpointKey::Width(480), Breakpoint::Disabled);
        assert_eq!(breakpoints.widths().count(), 1);
        assert!(breakpoints.choose(300.0).is_none());
    }

    #[test]
    fn parse_key_reads_leading_digits() {
        assert_eq!(BreakpointKey::parse("default"), Ok(BreakpointKey::Default));
        assert_eq!(BreakpointKey::parse("768"), Ok(BreakpointKey::Width(768)));
        assert_eq!(BreakpointKey::parse("768px"), Ok(BreakpointKey::Width(768)));
        assert_eq!(BreakpointKey::parse(" +480"), Ok(BreakpointKey::Width(480)));
        assert_eq!(
            BreakpointKey::parse("tablet"),
            Err(ConfigError::InvalidBreakpoint("tablet".into()))
        );
        assert!(BreakpointKey::parse("-5").is_err());
        assert!(BreakpointKey::parse("99999999999").is_err());
    }

    #[test]
    fn state_names_round_trip_through_keywords() {
        for name in ["open", "closed", "disabled", "title"] {
            assert_eq!(StateName::parse(name).as_str(), name);
        }
        assert_eq!(StateName::from("title"), StateName::Custom("title".into()));
    }

    #[test]
    fn non_positive_max_width_means_unlimited() {
        assert_eq!(DrawerProps::new().max_width(-1.0).max_width, None);
        assert_eq!(DrawerProps::new().max_width(0.0).max_width, None);
        assert_eq!(DrawerProps::new().max_width(320.0).max_width, Some(320.0));
    }

    #[test]
    fn keywords_parse_or_report() {
        assert_eq!("horizontal".parse::<Orientation>(), Ok(Orientation::Horizontal));
        assert_eq!("left".parse::<Attachment>(), Ok(Attachment::Left));
        assert_eq!(
            "diagonal".parse::<Orientation>(),
            Err(ConfigError::UnknownOrientation("diagonal".into()))
        );
        assert_eq!(
            "top".parse::<Attachment>(),
            Err(ConfigError::UnknownAttachment("top".into()))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_configuration_object() {
        let json = r#"{
            "default": {
                "orientation": "vertical",
                "attachTo": "left",
                "startingState": "title",
                "maxWidth": -1,
                "customStates": { "title": ".object-title" }
            },
            "768px": { "orientation": "horizontal", "maxWidth": 320 },
            "480": "disabled"
        }"#;
        let breakpoints: Breakpoints = serde_json::from_str(json).unwrap();

        let desktop = breakpoints.choose(1280.0).unwrap();
        assert_eq!(desktop.attach_to, Attachment::Left);
        assert_eq!(desktop.starting_state, StateName::Custom("title".into()));
        assert_eq!(desktop.max_width, None);
        assert_eq!(
            desktop.custom_states,
            [CustomState {
                name: "title".into(),
                selector: ".object-title".into()
            }]
        );

        let tablet = breakpoints.choose(700.0).unwrap();
        assert_eq!(tablet.orientation, Orientation::Horizontal);
        assert_eq!(tablet.attach_to, Attachment::Right);
        assert_eq!(tablet.max_width, Some(320.0));

        assert!(breakpoints.choose(400.0).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn custom_states_keep_document_order() {
        let json = r#"{"default": {"customStates": {"zeta": ".z", "alpha": ".a"}}}"#;
        let breakpoints: Breakpoints = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = breakpoints
            .choose(400.0)
            .unwrap()
            .custom_states
            .iter()
            .map(|state| state.name.as_str())
            .collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unmatchable_keys_are_skipped() {
        let json = r#"{
            "default": {},
            "tablet": "disabled",
            "-5": "disabled",
            "99999999999": "disabled",
            "480": {"orientation": "horizontal"}
        }"#;
        let breakpoints: Breakpoints = serde_json::from_str(json).unwrap();
        assert_eq!(breakpoints.widths().count(), 1);
        assert_eq!(
            breakpoints.choose(320.0).map(|p| p.orientation),
            Some(Orientation::Horizontal)
        );
        assert_eq!(
            breakpoints.choose(1280.0).map(|p| p.orientation),
            Some(Orientation::Vertical)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_bad_keywords() {
        assert!(serde_json::from_str::<Breakpoints>(r#"{"480": "hidden"}"#).is_err());
        assert!(
            serde_json::from_str::<Breakpoints>(r#"{"480": {"orientation": "diagonal"}}"#)
                .is_err()
        );
    }
}
