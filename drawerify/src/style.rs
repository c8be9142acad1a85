// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS declarations produced for the drawer and its handle.
//!
//! The drawer owns a fixed set of inline properties (see
//! [`ManagedProperties::DRAWER`]). Static styles are applied once per layout;
//! the single dynamic inset (`bottom`, `left` or `right`) is driven by states,
//! drags, and transitions.
//!
//! ```rust
//! use drawerify::{CssProperty, CssValue, Declarations};
//!
//! let mut css = Declarations::new();
//! css.set(CssProperty::Top, CssValue::Auto);
//! css.set(CssProperty::Bottom, CssValue::Px(-240.0));
//! css.set(CssProperty::Top, CssValue::Px(0.0));
//! assert_eq!(css.to_string(), "top: 0; bottom: -240px");
//! ```

use core::fmt;

use smallvec::SmallVec;

use crate::config::{Attachment, Orientation};
use crate::geometry::{DrawerLayout, Edge, Offset};
use crate::options::DrawerOptions;

/// An inline style property the drawer writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CssProperty {
    /// `position`
    Position,
    /// `top`
    Top,
    /// `right`
    Right,
    /// `bottom`
    Bottom,
    /// `left`
    Left,
    /// `width`
    Width,
    /// `height`
    Height,
    /// `z-index`
    ZIndex,
    /// `visibility`
    Visibility,
    /// `display`
    Display,
}

impl CssProperty {
    /// Every property, in the order used by [`ManagedProperties::properties`].
    pub const ALL: [Self; 10] = [
        Self::Position,
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::Width,
        Self::Height,
        Self::ZIndex,
        Self::Visibility,
        Self::Display,
    ];

    /// The CSS property name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Width => "width",
            Self::Height => "height",
            Self::ZIndex => "z-index",
            Self::Visibility => "visibility",
            Self::Display => "display",
        }
    }

    /// The flag for this property in [`ManagedProperties`].
    #[must_use]
    pub const fn flag(self) -> ManagedProperties {
        match self {
            Self::Position => ManagedProperties::POSITION,
            Self::Top => ManagedProperties::TOP,
            Self::Right => ManagedProperties::RIGHT,
            Self::Bottom => ManagedProperties::BOTTOM,
            Self::Left => ManagedProperties::LEFT,
            Self::Width => ManagedProperties::WIDTH,
            Self::Height => ManagedProperties::HEIGHT,
            Self::ZIndex => ManagedProperties::Z_INDEX,
            Self::Visibility => ManagedProperties::VISIBILITY,
            Self::Display => ManagedProperties::DISPLAY,
        }
    }
}

impl From<Edge> for CssProperty {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Top => Self::Top,
            Edge::Right => Self::Right,
            Edge::Bottom => Self::Bottom,
            Edge::Left => Self::Left,
        }
    }
}

impl fmt::Display for CssProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A CSS value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CssValue {
    /// A length in pixels. Zero renders as a bare `0`.
    Px(f64),
    /// `auto`
    Auto,
    /// A keyword such as `visible`, `block` or `none`.
    Keyword(&'static str),
    /// A unitless integer, used for `z-index`.
    Integer(i32),
}

impl CssValue {
    /// Returns the pixel length, if this is one.
    #[must_use]
    pub fn as_px(self) -> Option<f64> {
        match self {
            Self::Px(px) => Some(px),
            _ => None,
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            // Also folds `-0.0`.
            Self::Px(px) if px == 0.0 => f.write_str("0"),
            Self::Px(px) => write!(f, "{px}px"),
            Self::Auto => f.write_str("auto"),
            Self::Keyword(keyword) => f.write_str(keyword),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

bitflags::bitflags! {
    /// A set of [`CssProperty`] values.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ManagedProperties: u16 {
        /// `position`
        const POSITION   = 1 << 0;
        /// `top`
        const TOP        = 1 << 1;
        /// `right`
        const RIGHT      = 1 << 2;
        /// `bottom`
        const BOTTOM     = 1 << 3;
        /// `left`
        const LEFT       = 1 << 4;
        /// `width`
        const WIDTH      = 1 << 5;
        /// `height`
        const HEIGHT     = 1 << 6;
        /// `z-index`
        const Z_INDEX    = 1 << 7;
        /// `visibility`
        const VISIBILITY = 1 << 8;
        /// `display`
        const DISPLAY    = 1 << 9;

        /// Properties reset to the stylesheet's values when the drawer is disabled.
        const DRAWER = Self::POSITION.bits()
            | Self::TOP.bits()
            | Self::RIGHT.bits()
            | Self::BOTTOM.bits()
            | Self::LEFT.bits()
            | Self::WIDTH.bits()
            | Self::HEIGHT.bits()
            | Self::Z_INDEX.bits();
    }
}

impl ManagedProperties {
    /// Iterates the properties in this set.
    pub fn properties(self) -> impl Iterator<Item = CssProperty> {
        CssProperty::ALL
            .into_iter()
            .filter(move |property| self.contains(property.flag()))
    }
}

/// An ordered list of CSS declarations, at most one per property.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Declarations {
    entries: SmallVec<[(CssProperty, CssValue); 8]>,
}

impl Declarations {
    /// Creates an empty declaration list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a single declaration for an edge offset.
    #[must_use]
    pub fn offset(offset: Offset) -> Self {
        Self::new().with(offset.edge.into(), CssValue::Px(offset.px))
    }

    /// Sets a property, replacing any earlier value in place.
    pub fn set(&mut self, property: CssProperty, value: CssValue) {
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Builder form of [`Declarations::set`].
    #[must_use]
    pub fn with(mut self, property: CssProperty, value: CssValue) -> Self {
        self.set(property, value);
        self
    }

    /// Returns the value of a property, if declared.
    #[must_use]
    pub fn get(&self, property: CssProperty) -> Option<CssValue> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }

    /// Applies every declaration of `other` on top of this list.
    pub fn merge(&mut self, other: &Self) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }

    /// Iterates the declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (CssProperty, CssValue)> + '_ {
        self.entries.iter().copied()
    }

    /// The set of declared properties.
    #[must_use]
    pub fn properties(&self) -> ManagedProperties {
        self.entries
            .iter()
            .fold(ManagedProperties::empty(), |set, (p, _)| set | p.flag())
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Declarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

/// Styles for the drawer that do not change with its state.
///
/// The drawer starts out `visibility: hidden` in the stylesheet to avoid a
/// flash of unstyled content; these styles reveal it.
#[must_use]
pub fn drawer_static_styles(layout: &DrawerLayout, options: &DrawerOptions) -> Declarations {
    use CssProperty::{Bottom, Height, Left, Right, Top, Visibility, Width, ZIndex};
    use CssValue::{Auto, Integer, Keyword, Px};

    let css = Declarations::new()
        .with(Visibility, Keyword("visible"))
        .with(Width, Px(layout.width()))
        .with(Height, Px(layout.height()))
        .with(ZIndex, Integer(options.z_index));

    // The dynamic inset is left to the state styles.
    match (layout.orientation(), layout.attach_to()) {
        (Orientation::Vertical, Attachment::Left) => {
            css.with(Top, Auto).with(Right, Auto).with(Left, Px(0.0))
        }
        (Orientation::Vertical, Attachment::Right) => {
            css.with(Top, Auto).with(Right, Px(0.0)).with(Left, Auto)
        }
        (Orientation::Horizontal, Attachment::Left) => {
            css.with(Top, Px(0.0)).with(Right, Auto).with(Bottom, Px(0.0))
        }
        (Orientation::Horizontal, Attachment::Right) => {
            css.with(Top, Px(0.0)).with(Bottom, Px(0.0)).with(Left, Auto)
        }
    }
}

/// Styles for the handle that do not change with the drawer state.
///
/// Vertical drawers carry the handle above their top edge; horizontal drawers
/// carry it beside their inner edge, flush with the container bottom.
#[must_use]
pub fn handle_static_styles(layout: &DrawerLayout, options: &DrawerOptions) -> Declarations {
    use CssProperty::{Bottom, Display, Left, Right, Top};
    use CssValue::{Auto, Keyword, Px};

    let css = Declarations::new().with(Display, Keyword("block"));
    let above = Px(-options.handle_size.height);
    match (layout.orientation(), layout.attach_to()) {
        (Orientation::Vertical, Attachment::Left) => css
            .with(Top, above)
            .with(Right, Auto)
            .with(Bottom, Auto)
            .with(Left, Px(0.0)),
        (Orientation::Vertical, Attachment::Right) => css
            .with(Top, above)
            .with(Right, Px(0.0))
            .with(Bottom, Auto)
            .with(Left, Auto),
        (Orientation::Horizontal, Attachment::Left) => css
            .with(Top, Auto)
            .with(Right, Auto)
            .with(Bottom, Px(0.0))
            .with(Left, Px(layout.width())),
        (Orientation::Horizontal, Attachment::Right) => css
            .with(Top, Auto)
            .with(Right, Px(layout.width()))
            .with(Bottom, Px(0.0))
            .with(Left, Auto),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use kurbo::Rect;

    use super::*;
    use crate::config::DrawerProps;

    fn layout(orientation: Orientation, attach_to: Attachment) -> DrawerLayout {
        let props = DrawerProps::new()
            .orientation(orientation)
            .attach_to(attach_to)
            .max_width(300.0);
        DrawerLayout::new(
            Rect::new(0.0, 0.0, 400.0, 800.0),
            &props,
            &DrawerOptions::default(),
        )
    }

    #[test]
    fn values_render_as_css() {
        assert_eq!(CssValue::Px(0.0).to_string(), "0");
        assert_eq!(CssValue::Px(-0.0).to_string(), "0");
        assert_eq!(CssValue::Px(-720.0).to_string(), "-720px");
        assert_eq!(CssValue::Px(12.5).to_string(), "12.5px");
        assert_eq!(CssValue::Auto.to_string(), "auto");
        assert_eq!(CssValue::Integer(1000).to_string(), "1000");
    }

    #[test]
    fn set_replaces_in_place() {
        let mut css = Declarations::new()
            .with(CssProperty::Top, CssValue::Auto)
            .with(CssProperty::Left, CssValue::Auto);
        css.set(CssProperty::Top, CssValue::Px(4.0));
        assert_eq!(css.len(), 2);
        assert_eq!(css.to_string(), "top: 4px; left: auto");
        assert_eq!(css.get(CssProperty::Top), Some(CssValue::Px(4.0)));
        assert_eq!(css.get(CssProperty::Right), None);
    }

    #[test]
    fn drawer_set_matches_cleared_properties() {
        let names: std::vec::Vec<_> = ManagedProperties::DRAWER
            .properties()
            .map(CssProperty::name)
            .collect();
        assert_eq!(
            names,
            ["position", "top", "right", "bottom", "left", "width", "height", "z-index"]
        );
    }

    #[test]
    fn vertical_right_drawer_leaves_bottom_dynamic() {
        let css = drawer_static_styles(
            &layout(Orientation::Vertical, Attachment::Right),
            &DrawerOptions::default(),
        );
        assert_eq!(
            css.to_string(),
            "visibility: visible; width: 300px; height: 720px; z-index: 1000; \
             top: auto; right: 0; left: auto"
        );
        assert!(!css.properties().contains(ManagedProperties::BOTTOM));
    }

    #[test]
    fn horizontal_drawers_leave_their_edge_dynamic() {
        let left = drawer_static_styles(
            &layout(Orientation::Horizontal, Attachment::Left),
            &DrawerOptions::default(),
        );
        assert_eq!(left.get(CssProperty::Left), None);
        assert_eq!(left.get(CssProperty::Right), Some(CssValue::Auto));
        assert_eq!(left.get(CssProperty::Height), Some(CssValue::Px(800.0)));

        let right = drawer_static_styles(
            &layout(Orientation::Horizontal, Attachment::Right),
            &DrawerOptions::default(),
        );
        assert_eq!(right.get(CssProperty::Right), None);
        assert_eq!(right.get(CssProperty::Left), Some(CssValue::Auto));
    }

    #[test]
    fn vertical_left_drawer_pins_left() {
        let css = drawer_static_styles(
            &layout(Orientation::Vertical, Attachment::Left),
            &DrawerOptions::default(),
        );
        assert_eq!(css.get(CssProperty::Left), Some(CssValue::Px(0.0)));
        assert_eq!(css.get(CssProperty::Right), Some(CssValue::Auto));
    }

    #[test]
    fn handle_sits_above_vertical_drawer() {
        let css = handle_static_styles(
            &layout(Orientation::Vertical, Attachment::Left),
            &DrawerOptions::default(),
        );
        assert_eq!(
            css.to_string(),
            "display: block; top: -70px; right: auto; bottom: auto; left: 0"
        );
    }

    #[test]
    fn handle_sits_beside_horizontal_drawer() {
        let left = handle_static_styles(
            &layout(Orientation::Horizontal, Attachment::Left),
            &DrawerOptions::default(),
        );
        assert_eq!(left.get(CssProperty::Left), Some(CssValue::Px(300.0)));
        assert_eq!(left.get(CssProperty::Bottom), Some(CssValue::Px(0.0)));

        let right = handle_static_styles(
            &layout(Orientation::Horizontal, Attachment::Right),
            &DrawerOptions::default(),
        );
        assert_eq!(right.get(CssProperty::Right), Some(CssValue::Px(300.0)));
        assert_eq!(right.get(CssProperty::Left), Some(CssValue::Auto));
    }

    #[test]
    fn offset_declaration_uses_edge_property() {
        let css = Declarations::offset(Offset::new(Edge::Right, -120.0));
        assert_eq!(css.to_string(), "right: -120px");
    }
}
