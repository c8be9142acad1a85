// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=drawerify_web --heading-base-level=0

//! DOM adapter for [`drawerify`].
//!
//! On `wasm32`, `WebDrawer` converts an element into a drawer: it moves the
//! element's children into a `.drawerify-content` wrapper, adds an
//! `a.drawerify-handle` anchor, writes inline styles through a `DomHost`, and
//! listens for handle touches plus window resize and orientation changes.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_drawer(
//!     element: web_sys::HtmlElement,
//! ) -> Result<drawerify_web::WebDrawer, wasm_bindgen::JsValue> {
//!     // <nav data-drawerify='{"default": {"attachTo": "left", "orientation": "horizontal"}}'>
//!     drawerify_web::WebDrawer::from_attribute(element)
//! }
//! ```
//!
//! The inline styles only move positioned elements. `build_markup` installs
//! [`BASE_CSS`] at the start of `<head>` (positioning the drawer and handle
//! absolutely and hiding both until the first layout); page stylesheets can
//! override it, for example with `position: fixed`.
//!
//! Custom state selectors are looked up inside the drawer first and then in
//! the whole document.
//!
//! The markup conventions and the mapping from [`drawerify::Transition`] to a
//! CSS `transition` value are available on every target.

mod css;

pub use css::{
    BASE_CSS, BASE_CSS_ID, CONFIG_ATTRIBUTE, CONTENT_CLASS, DRAWER_CLASS, HANDLE_CLASS,
    parse_breakpoints, timing_function, transition_value,
};

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod widget;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomHost, build_markup, install_base_css};
#[cfg(target_arch = "wasm32")]
pub use widget::WebDrawer;
