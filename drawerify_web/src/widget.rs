// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A drawer wired to the DOM: markup, listeners, and the controller.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use drawerify::{Breakpoints, Drawer, DrawerError, StateName};
use kurbo::Point;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, HtmlElement};

use crate::css::{CONFIG_ATTRIBUTE, parse_breakpoints};
use crate::dom::{DomHost, TouchSet, build_markup, touch_point};

#[derive(Debug)]
struct Inner {
    drawer: Drawer,
    host: DomHost,
}

impl Inner {
    fn init(&mut self) -> Result<(), DrawerError> {
        let Self { drawer, host } = self;
        drawer.init(host)
    }

    fn relayout(&mut self) {
        let Self { drawer, host } = self;
        if let Err(err) = drawer.resize(host) {
            tracing::warn!(%err, "drawer relayout failed");
        }
    }

    fn touch_move(&mut self, point: Point) {
        let Self { drawer, host } = self;
        drawer.touch_move(host, point);
    }

    fn touch_end(&mut self, point: Point) {
        let Self { drawer, host } = self;
        if let Err(err) = drawer.touch_end(host, point) {
            tracing::warn!(%err, "drawer touch end failed");
        }
    }
}

/// An event listener that unregisters itself when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for Listener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listener")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

fn to_js(err: DrawerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A DOM element converted into a drawer.
///
/// Dropping the `WebDrawer` removes its event listeners; the markup and the
/// last applied styles stay in place.
#[derive(Debug)]
pub struct WebDrawer {
    inner: Rc<RefCell<Inner>>,
    _listeners: Vec<Listener>,
}

impl WebDrawer {
    /// Converts `element` into a drawer configured by `breakpoints`.
    ///
    /// Builds the handle and content markup, lays the drawer out, and listens
    /// for touches on the handle and for window resizes and orientation
    /// changes.
    pub fn attach(element: HtmlElement, breakpoints: Breakpoints) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("missing window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("missing document"))?;
        let handle = build_markup(&document, &element)?;

        let inner = Rc::new(RefCell::new(Inner {
            drawer: Drawer::new(breakpoints),
            host: DomHost::new(window.clone(), element, handle.clone()),
        }));
        // A failed first layout is retried on the next resize.
        inner.borrow_mut().relayout();

        let on_move = {
            let inner = Rc::clone(&inner);
            move |event: Event| {
                if let Some(point) = touch_point(&event, TouchSet::Target) {
                    inner.borrow_mut().touch_move(point);
                }
            }
        };
        let on_end = {
            let inner = Rc::clone(&inner);
            move |event: Event| {
                if let Some(point) = touch_point(&event, TouchSet::Changed) {
                    inner.borrow_mut().touch_end(point);
                }
            }
        };
        let on_resize = || {
            let inner = Rc::clone(&inner);
            move |_: Event| inner.borrow_mut().relayout()
        };

        let listeners = vec![
            Listener::new(handle.as_ref(), "touchmove", on_move)?,
            Listener::new(handle.as_ref(), "touchend", on_end)?,
            Listener::new(window.as_ref(), "resize", on_resize())?,
            Listener::new(window.as_ref(), "orientationchange", on_resize())?,
        ];

        Ok(Self {
            inner,
            _listeners: listeners,
        })
    }

    /// Converts `element` into a drawer configured by its `data-drawerify`
    /// attribute.
    pub fn from_attribute(element: HtmlElement) -> Result<Self, JsValue> {
        let json = element
            .get_attribute(CONFIG_ATTRIBUTE)
            .ok_or_else(|| JsValue::from_str("missing data-drawerify attribute"))?;
        let breakpoints =
            parse_breakpoints(&json).map_err(|err| JsValue::from_str(&err.to_string()))?;
        Self::attach(element, breakpoints)
    }

    /// Moves to the named state over `duration`, or the default speed.
    pub fn to(&self, state: &str, duration: Option<Duration>) -> Result<(), JsValue> {
        let mut inner = self.inner.borrow_mut();
        let Inner { drawer, host } = &mut *inner;
        drawer
            .to(host, &StateName::parse(state), duration)
            .map_err(to_js)
    }

    /// Toggles between open and closed.
    pub fn toggle(&self) -> Result<(), JsValue> {
        let mut inner = self.inner.borrow_mut();
        let Inner { drawer, host } = &mut *inner;
        drawer.toggle(host).map_err(to_js)
    }

    /// Turns the drawer off until the next relayout.
    pub fn disable(&self) {
        let mut inner = self.inner.borrow_mut();
        let Inner { drawer, host } = &mut *inner;
        drawer.disable(host);
    }

    /// Re-runs layout, as on a window resize.
    pub fn refresh(&self) -> Result<(), JsValue> {
        self.inner.borrow_mut().init().map_err(to_js)
    }

    /// Name of the current resting state, if any.
    pub fn state(&self) -> Option<String> {
        self.inner.borrow().drawer.state().map(ToString::to_string)
    }
}
