// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`DrawerHost`] backed by live DOM elements.

use drawerify::{Declarations, DrawerHost, ElementExtent, ManagedProperties, Transition};
use kurbo::{Point, Rect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Event, HtmlElement, TouchEvent, Window};

use crate::css::{
    BASE_CSS, BASE_CSS_ID, CONTENT_CLASS, DRAWER_CLASS, HANDLE_CLASS, transition_value,
};

/// A drawer element, its handle, and the window they live in.
#[derive(Clone, Debug)]
pub struct DomHost {
    window: Window,
    drawer: HtmlElement,
    handle: HtmlElement,
}

impl DomHost {
    /// Wraps an element that already carries drawer markup.
    pub fn new(window: Window, drawer: HtmlElement, handle: HtmlElement) -> Self {
        Self {
            window,
            drawer,
            handle,
        }
    }

    /// The drawer element.
    pub fn drawer(&self) -> &HtmlElement {
        &self.drawer
    }

    /// The handle element.
    pub fn handle(&self) -> &HtmlElement {
        &self.handle
    }

    /// The window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    fn scroll_offset(&self) -> (f64, f64) {
        (
            self.window.page_x_offset().unwrap_or(0.0),
            self.window.page_y_offset().unwrap_or(0.0),
        )
    }
}

impl DrawerHost for DomHost {
    fn viewport_width(&self) -> f64 {
        self.window
            .outer_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn container_bounds(&self) -> Rect {
        let (scroll_x, scroll_y) = self.scroll_offset();
        match self.drawer.offset_parent() {
            Some(parent) => {
                let r = parent.get_bounding_client_rect();
                Rect::new(r.left(), r.top(), r.right(), r.bottom())
                    + kurbo::Vec2::new(scroll_x, scroll_y)
            }
            // Fixed-position drawers have no offset parent; they live in the viewport.
            None => {
                let width = self
                    .window
                    .inner_width()
                    .ok()
                    .and_then(|w| w.as_f64())
                    .unwrap_or(0.0);
                let height = self
                    .window
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                Rect::new(scroll_x, scroll_y, scroll_x + width, scroll_y + height)
            }
        }
    }

    /// Looks inside the drawer first, then in the whole document.
    fn measure(&self, selector: &str) -> Option<ElementExtent> {
        let inside = self.drawer.query_selector(selector).ok().flatten();
        let element = match inside {
            Some(element) => element,
            None => self
                .window
                .document()?
                .query_selector(selector)
                .ok()
                .flatten()?,
        };
        let element = element.dyn_into::<HtmlElement>().ok()?;
        Some(ElementExtent::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }

    fn set_drawer_style(&mut self, css: &Declarations) {
        let style = self.drawer.style();
        let _ = style.set_property("transition", "none");
        apply(&style, css);
    }

    fn set_handle_style(&mut self, css: &Declarations) {
        apply(&self.handle.style(), css);
    }

    fn animate_drawer(&mut self, transition: &Transition) {
        let style = self.drawer.style();
        let _ = style.set_property("transition", &transition_value(transition));
        apply(&style, &transition.target());
    }

    fn clear_drawer_style(&mut self, properties: ManagedProperties) {
        let style = self.drawer.style();
        for property in properties.properties() {
            let _ = style.remove_property(property.name());
        }
        let _ = style.remove_property("transition");
    }

    fn hide_handle(&mut self) {
        let _ = self.handle.style().set_property("display", "none");
    }
}

fn apply(style: &CssStyleDeclaration, css: &Declarations) {
    for (property, value) in css.iter() {
        if let Err(err) = style.set_property(property.name(), &value.to_string()) {
            tracing::warn!(property = property.name(), ?err, "failed to set drawer style");
        }
    }
}

/// Converts the element's children into drawer markup.
///
/// The children move into a `.drawerify-content` wrapper, preceded by an
/// `a.drawerify-handle` anchor. Also installs [`BASE_CSS`] once per
/// document. Returns the handle.
pub fn build_markup(document: &Document, element: &HtmlElement) -> Result<HtmlElement, JsValue> {
    install_base_css(document)?;
    element.class_list().add_1(DRAWER_CLASS)?;

    let content = document.create_element("div")?;
    content.set_class_name(CONTENT_CLASS);
    while let Some(child) = element.first_child() {
        content.append_child(&child)?;
    }

    let handle = document.create_element("a")?;
    handle.set_class_name(HANDLE_CLASS);
    element.append_child(&handle)?;
    element.append_child(&content)?;

    handle.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

/// Adds [`BASE_CSS`] at the start of `<head>`, so page stylesheets win.
///
/// Does nothing if it is already installed.
pub fn install_base_css(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(BASE_CSS_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(BASE_CSS_ID);
    style.set_text_content(Some(BASE_CSS));
    head.insert_before(&style, head.first_child().as_ref())?;
    Ok(())
}

/// Which touch list of a touch event to read.
#[derive(Clone, Copy, Debug)]
pub(crate) enum TouchSet {
    /// Touches that started on the event target and are still down.
    Target,
    /// Touches that changed in this event, including lifted ones.
    Changed,
}

/// Page coordinates of the first touch in `set`.
pub(crate) fn touch_point(event: &Event, set: TouchSet) -> Option<Point> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touches = match set {
        TouchSet::Target => event.target_touches(),
        TouchSet::Changed => event.changed_touches(),
    };
    let touch = touches.get(0)?;
    Some(Point::new(
        f64::from(touch.page_x()),
        f64::from(touch.page_y()),
    ))
}
