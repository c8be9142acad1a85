// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer controller.

use alloc::string::ToString;
use core::time::Duration;

use kurbo::Point;

use crate::animation::Transition;
use crate::config::{Breakpoints, DrawerProps, StateName};
use crate::drag::{DragTracker, Release};
use crate::error::DrawerError;
use crate::geometry::{DrawerLayout, Offset};
use crate::host::DrawerHost;
use crate::options::DrawerOptions;
use crate::states::StateTable;
use crate::style::{Declarations, ManagedProperties, drawer_static_styles, handle_static_styles};

/// A sliding drawer attached to an edge of its container.
///
/// The drawer is configured once with [`Breakpoints`] and re-laid out by
/// [`Drawer::init`] whenever the viewport changes. Between layouts it moves
/// between named states, either on request ([`Drawer::to`],
/// [`Drawer::toggle`]) or by following touches on its handle
/// ([`Drawer::touch_move`], [`Drawer::touch_end`]).
///
/// Every operation that produces styles takes the [`DrawerHost`] that should
/// apply them.
#[derive(Clone, Debug)]
pub struct Drawer {
    breakpoints: Breakpoints,
    options: DrawerOptions,
    props: Option<DrawerProps>,
    layout: Option<DrawerLayout>,
    states: StateTable,
    drag: DragTracker,
    state: Option<StateName>,
    offset: Option<Offset>,
    transition: Option<Transition>,
}

impl Drawer {
    /// Creates an uninitialized drawer with default options.
    #[must_use]
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self::with_options(breakpoints, DrawerOptions::default())
    }

    /// Creates an uninitialized drawer.
    #[must_use]
    pub fn with_options(breakpoints: Breakpoints, options: DrawerOptions) -> Self {
        Self {
            breakpoints,
            options,
            props: None,
            layout: None,
            states: StateTable::new(),
            drag: DragTracker::default(),
            state: None,
            offset: None,
            transition: None,
        }
    }

    /// The responsive configuration.
    #[must_use]
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Replaces the responsive configuration. Takes effect on the next
    /// [`Drawer::init`].
    pub fn set_breakpoints(&mut self, breakpoints: Breakpoints) {
        self.breakpoints = breakpoints;
    }

    /// The tunables.
    #[must_use]
    pub fn options(&self) -> &DrawerOptions {
        &self.options
    }

    /// Props of the active breakpoint, if the drawer is enabled.
    #[must_use]
    pub fn props(&self) -> Option<&DrawerProps> {
        self.props.as_ref()
    }

    /// Current layout, if the drawer is enabled.
    #[must_use]
    pub fn layout(&self) -> Option<&DrawerLayout> {
        self.layout.as_ref()
    }

    /// The computed states.
    #[must_use]
    pub fn states(&self) -> &StateTable {
        &self.states
    }

    /// The state the drawer rests in.
    ///
    /// `None` before the first layout and while a drag leaves the drawer
    /// between states.
    #[must_use]
    pub fn state(&self) -> Option<&StateName> {
        self.state.as_ref()
    }

    /// Returns `true` when the drawer is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state == Some(StateName::Disabled)
    }

    /// Returns `true` while the handle is being dragged.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.drag.is_moving()
    }

    /// Last offset applied to the drawer's moving edge.
    #[must_use]
    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    /// The most recent transition, cleared when a drag starts.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Lays the drawer out for the host's current viewport and container.
    ///
    /// Chooses the breakpoint, applies static drawer and handle styles,
    /// computes the states, and jumps to the starting state. If the chosen
    /// breakpoint disables the drawer, the drawer is disabled instead. A
    /// starting state that could not be computed falls back to
    /// [`StateName::Open`].
    pub fn init<H: DrawerHost + ?Sized>(&mut self, host: &mut H) -> Result<(), DrawerError> {
        self.drag.end();
        self.transition = None;

        let viewport_width = host.viewport_width();
        let Some(props) = self.breakpoints.choose(viewport_width).cloned() else {
            #[cfg(feature = "tracing")]
            tracing::debug!(viewport_width, "no drawer breakpoint applies; disabling");
            self.disable(host);
            return Ok(());
        };

        let layout = DrawerLayout::new(host.container_bounds(), &props, &self.options);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            viewport_width,
            orientation = props.orientation.as_str(),
            attach_to = props.attach_to.as_str(),
            width = layout.width(),
            height = layout.height(),
            "drawer laid out"
        );

        host.set_drawer_style(&drawer_static_styles(&layout, &self.options));
        host.set_handle_style(&handle_static_styles(&layout, &self.options));
        self.states = StateTable::compute(
            &layout,
            &props.custom_states,
            self.options.gutter,
            |selector| host.measure(selector),
        );

        // Custom states can be missing when their element is not rendered
        // yet or the drawer is horizontal.
        let starting_state = if props.starting_state == StateName::Disabled
            || self.states.contains(&props.starting_state)
        {
            props.starting_state.clone()
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                state = props.starting_state.as_str(),
                "starting drawer state unavailable; opening instead"
            );
            StateName::Open
        };
        self.layout = Some(layout);
        self.props = Some(props);
        self.state = None;
        self.to(host, &starting_state, Some(Duration::ZERO))
    }

    /// Re-runs [`Drawer::init`] after the viewport was resized or rotated.
    pub fn resize<H: DrawerHost + ?Sized>(&mut self, host: &mut H) -> Result<(), DrawerError> {
        self.init(host)
    }

    /// Moves the drawer to `state`.
    ///
    /// `duration` defaults to [`DrawerOptions::default_speed`]. Moving to
    /// [`StateName::Disabled`] disables the drawer.
    pub fn to<H: DrawerHost + ?Sized>(
        &mut self,
        host: &mut H,
        state: &StateName,
        duration: Option<Duration>,
    ) -> Result<(), DrawerError> {
        if *state == StateName::Disabled {
            self.disable(host);
            return Ok(());
        }
        if self.layout.is_none() {
            return Err(DrawerError::NotInitialized);
        }
        let target = self
            .states
            .get(state)
            .ok_or_else(|| DrawerError::UnknownState(state.to_string()))?
            .offset;

        let duration = duration.unwrap_or(self.options.default_speed);
        let start = self.offset.unwrap_or(target);
        let transition = Transition::new(start, target, duration, self.options.easing);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            state = state.as_str(),
            offset = target.px,
            duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            "drawer transition"
        );
        host.animate_drawer(&transition);

        self.offset = Some(target);
        self.transition = Some(transition);
        self.state = Some(state.clone());
        Ok(())
    }

    /// Closes an open drawer and opens it from any other state.
    ///
    /// Does nothing while the drawer is disabled.
    pub fn toggle<H: DrawerHost + ?Sized>(&mut self, host: &mut H) -> Result<(), DrawerError> {
        match self.state {
            Some(StateName::Disabled) => Ok(()),
            Some(StateName::Open) => self.to(host, &StateName::Closed, None),
            _ => self.to(host, &StateName::Open, None),
        }
    }

    /// Turns drawer behavior off.
    ///
    /// Hides the handle and removes every inline style the drawer manages,
    /// so the element falls back to its stylesheet layout. Call
    /// [`Drawer::init`] to turn it back on.
    pub fn disable<H: DrawerHost + ?Sized>(&mut self, host: &mut H) {
        host.hide_handle();
        host.clear_drawer_style(ManagedProperties::DRAWER);

        self.drag.end();
        self.props = None;
        self.layout = None;
        self.states.clear();
        self.offset = None;
        self.transition = None;
        self.state = Some(StateName::Disabled);
    }

    /// Follows a touch moving over the handle.
    ///
    /// The drawer leaves its resting state as soon as the handle moves.
    /// Returns the applied offset, or `None` if the touch is outside the
    /// drawer's travel or the drawer is disabled.
    pub fn touch_move<H: DrawerHost + ?Sized>(
        &mut self,
        host: &mut H,
        point: Point,
    ) -> Option<Offset> {
        let layout = self.layout?;
        self.state = None;
        self.transition = None;

        let offset = self.drag.track(&layout, point)?;
        host.set_drawer_style(&Declarations::offset(offset));
        self.offset = Some(offset);
        Some(offset)
    }

    /// Handles a touch lifting off the handle.
    ///
    /// After a drag the drawer snaps to the nearest state; a tap toggles it.
    pub fn touch_end<H: DrawerHost + ?Sized>(
        &mut self,
        host: &mut H,
        point: Point,
    ) -> Result<Release, DrawerError> {
        let release = self.drag.release();
        match release {
            Release::Drag => self.snap(host, point)?,
            Release::Tap => self.toggle(host)?,
        }
        Ok(release)
    }

    /// Animates to the state nearest to `point` along the sliding axis.
    pub fn snap<H: DrawerHost + ?Sized>(
        &mut self,
        host: &mut H,
        point: Point,
    ) -> Result<(), DrawerError> {
        let layout = self.layout.ok_or(DrawerError::NotInitialized)?;
        let coordinate = layout.axis_coordinate(point);
        let nearest = self
            .states
            .nearest(coordinate)
            .map(|(name, _)| name.clone())
            .ok_or(DrawerError::NotInitialized)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(coordinate, state = nearest.as_str(), "drawer snapped");
        self.to(host, &nearest, None)
    }
}
