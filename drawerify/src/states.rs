// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resting states of a drawer and snapping between them.
//!
//! Each state pairs the CSS that places the drawer with the pointer
//! coordinate (its *page location*) at which the handle rests in that state.
//! Releasing a drag snaps to the state whose page location is nearest.

use alloc::vec::Vec;

use crate::config::{Attachment, CustomState, Orientation, StateName};
use crate::geometry::{DrawerLayout, Offset};
use crate::style::Declarations;

/// Position of an element inside the drawer, as measured by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementExtent {
    /// Distance from the top of the drawer to the top of the element.
    pub top: f64,
    /// Element height including padding and border.
    pub outer_height: f64,
}

impl ElementExtent {
    /// Creates an extent.
    #[must_use]
    pub const fn new(top: f64, outer_height: f64) -> Self {
        Self { top, outer_height }
    }
}

/// How the drawer looks in one resting state.
#[derive(Clone, Debug, PartialEq)]
pub struct StateStyle {
    /// Offset of the drawer's moving edge.
    pub offset: Offset,
    /// Pointer coordinate along the sliding axis at which this state rests.
    pub page_location: f64,
}

impl StateStyle {
    /// The CSS for this state.
    #[must_use]
    pub fn css(&self) -> Declarations {
        Declarations::offset(self.offset)
    }
}

/// The fully open state.
#[must_use]
pub fn open_state(layout: &DrawerLayout) -> StateStyle {
    let c = layout.container();
    let page_location = match (layout.orientation(), layout.attach_to()) {
        (Orientation::Vertical, _) => c.y1 - layout.height(),
        (Orientation::Horizontal, Attachment::Left) => c.x0 + layout.width(),
        (Orientation::Horizontal, Attachment::Right) => c.x1 - layout.width(),
    };
    StateStyle {
        offset: Offset::new(layout.dynamic_edge(), 0.0),
        page_location,
    }
}

/// The fully closed state. Only the handle remains inside the container.
#[must_use]
pub fn closed_state(layout: &DrawerLayout) -> StateStyle {
    let c = layout.container();
    let (page_location, extent) = match (layout.orientation(), layout.attach_to()) {
        (Orientation::Vertical, _) => (c.y1, layout.height()),
        (Orientation::Horizontal, Attachment::Left) => (c.x0, layout.width()),
        (Orientation::Horizontal, Attachment::Right) => (c.x1, layout.width()),
    };
    StateStyle {
        offset: Offset::new(layout.dynamic_edge(), -extent),
        page_location,
    }
}

/// A custom state revealing the drawer down to the bottom of an element,
/// plus `gutter`.
///
/// Returns `None` for horizontal drawers, which only support open and closed.
#[must_use]
pub fn custom_state(
    layout: &DrawerLayout,
    extent: ElementExtent,
    gutter: f64,
) -> Option<StateStyle> {
    if layout.orientation() != Orientation::Vertical {
        return None;
    }
    let revealed = extent.top + extent.outer_height + gutter;
    Some(StateStyle {
        offset: Offset::new(layout.dynamic_edge(), -(layout.height() - revealed)),
        page_location: layout.container().y1 - revealed,
    })
}

/// The computed states of a drawer, in snapping priority order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateTable {
    entries: Vec<(StateName, StateStyle)>,
}

impl StateTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes open and closed, then each custom state the `measure`
    /// callback can resolve.
    ///
    /// Custom states whose selector cannot be measured are skipped.
    pub fn compute(
        layout: &DrawerLayout,
        custom_states: &[CustomState],
        gutter: f64,
        mut measure: impl FnMut(&str) -> Option<ElementExtent>,
    ) -> Self {
        let mut table = Self::new();
        table.insert(StateName::Open, open_state(layout));
        table.insert(StateName::Closed, closed_state(layout));
        if layout.orientation() != Orientation::Vertical {
            return table;
        }
        for custom in custom_states {
            let Some(extent) = measure(&custom.selector) else {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    state = custom.name.as_str(),
                    selector = custom.selector.as_str(),
                    "custom drawer state skipped: selector did not match"
                );
                continue;
            };
            if let Some(style) = custom_state(layout, extent, gutter) {
                table.insert(StateName::parse(&custom.name), style);
            }
        }
        table
    }

    /// Inserts or replaces a state. New states go last.
    pub fn insert(&mut self, name: StateName, style: StateStyle) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = style,
            None => self.entries.push((name, style)),
        }
    }

    /// Looks up a state.
    #[must_use]
    pub fn get(&self, name: &StateName) -> Option<&StateStyle> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    /// Returns `true` if the state is in the table.
    #[must_use]
    pub fn contains(&self, name: &StateName) -> bool {
        self.get(name).is_some()
    }

    /// Iterates the states in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateName, &StateStyle)> + '_ {
        self.entries.iter().map(|(n, s)| (n, s))
    }

    /// Number of states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no states are computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every state.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The state whose page location is nearest to `coordinate`.
    ///
    /// Ties go to the state that comes first.
    #[must_use]
    pub fn nearest(&self, coordinate: f64) -> Option<(&StateName, &StateStyle)> {
        let mut best: Option<(f64, &StateName, &StateStyle)> = None;
        for (name, style) in &self.entries {
            let distance = (coordinate - style.page_location).abs();
            if best.is_none_or(|(d, _, _)| distance < d) {
                best = Some((distance, name, style));
            }
        }
        best.map(|(_, name, style)| (name, style))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use kurbo::Rect;

    use super::*;
    use crate::config::DrawerProps;
    use crate::geometry::Edge;
    use crate::options::DrawerOptions;

    // Container at (0, 100), 400x800: bottom edge at 900.
    fn vertical() -> DrawerLayout {
        DrawerLayout::new(
            Rect::new(0.0, 100.0, 400.0, 900.0),
            &DrawerProps::new(),
            &DrawerOptions::default(),
        )
    }

    fn horizontal(attach_to: Attachment) -> DrawerLayout {
        let props = DrawerProps::new()
            .orientation(Orientation::Horizontal)
            .attach_to(attach_to)
            .max_width(300.0);
        DrawerLayout::new(
            Rect::new(50.0, 0.0, 450.0, 600.0),
            &props,
            &DrawerOptions::default(),
        )
    }

    #[test]
    fn vertical_open_and_closed() {
        let layout = vertical();
        assert_eq!(layout.height(), 720.0);

        let open = open_state(&layout);
        assert_eq!(open.offset, Offset::new(Edge::Bottom, 0.0));
        assert_eq!(open.page_location, 180.0);

        let closed = closed_state(&layout);
        assert_eq!(closed.offset, Offset::new(Edge::Bottom, -720.0));
        assert_eq!(closed.page_location, 900.0);
    }

    #[test]
    fn horizontal_left_open_and_closed() {
        let layout = horizontal(Attachment::Left);
        let open = open_state(&layout);
        assert_eq!(open.offset, Offset::new(Edge::Left, 0.0));
        assert_eq!(open.page_location, 350.0);

        let closed = closed_state(&layout);
        assert_eq!(closed.offset, Offset::new(Edge::Left, -300.0));
        assert_eq!(closed.page_location, 50.0);
    }

    #[test]
    fn horizontal_right_open_and_closed() {
        let layout = horizontal(Attachment::Right);
        assert_eq!(open_state(&layout).page_location, 150.0);
        assert_eq!(open_state(&layout).css().to_string(), "right: 0");
        assert_eq!(closed_state(&layout).page_location, 450.0);
        assert_eq!(closed_state(&layout).css().to_string(), "right: -300px");
    }

    #[test]
    fn custom_state_reveals_down_to_element() {
        let layout = vertical();
        let style = custom_state(&layout, ElementExtent::new(20.0, 100.0), 10.0).unwrap();
        // 130px revealed out of 720.
        assert_eq!(style.offset, Offset::new(Edge::Bottom, -590.0));
        assert_eq!(style.page_location, 770.0);
    }

    #[test]
    fn custom_state_taller_than_drawer_pushes_up() {
        let layout = vertical();
        let style = custom_state(&layout, ElementExtent::new(700.0, 100.0), 10.0).unwrap();
        assert_eq!(style.offset.px, 90.0);
        assert_eq!(style.css().to_string(), "bottom: 90px");
    }

    #[test]
    fn custom_states_are_vertical_only() {
        let layout = horizontal(Attachment::Left);
        assert!(custom_state(&layout, ElementExtent::new(0.0, 10.0), 10.0).is_none());

        let customs = [CustomState {
            name: String::from("title"),
            selector: String::from(".title"),
        }];
        let table = StateTable::compute(&layout, &customs, 10.0, |_| {
            Some(ElementExtent::new(0.0, 10.0))
        });
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn compute_orders_states_and_skips_unmeasured() {
        let customs = [
            CustomState {
                name: String::from("title"),
                selector: String::from(".title"),
            },
            CustomState {
                name: String::from("missing"),
                selector: String::from(".nope"),
            },
        ];
        let table = StateTable::compute(&vertical(), &customs, 10.0, |selector| {
            (selector == ".title").then_some(ElementExtent::new(0.0, 50.0))
        });
        let names: alloc::vec::Vec<_> = table.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["open", "closed", "title"]);
        assert!(!table.contains(&StateName::parse("missing")));
    }

    #[test]
    fn nearest_picks_closest_location() {
        let table = StateTable::compute(&vertical(), &[], 10.0, |_| None);
        assert_eq!(table.nearest(200.0).map(|(n, _)| n), Some(&StateName::Open));
        assert_eq!(table.nearest(800.0).map(|(n, _)| n), Some(&StateName::Closed));
        // Exactly at the open location: distance zero still wins.
        assert_eq!(table.nearest(180.0).map(|(n, _)| n), Some(&StateName::Open));
    }

    #[test]
    fn nearest_breaks_ties_by_order() {
        let table = StateTable::compute(&vertical(), &[], 10.0, |_| None);
        // Midway between 180 and 900.
        assert_eq!(table.nearest(540.0).map(|(n, _)| n), Some(&StateName::Open));
        assert!(StateTable::new().nearest(0.0).is_none());
    }
}
