// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for configuration parsing and drawer control.

use alloc::string::String;
use core::fmt;

/// Errors produced while building a [`Breakpoints`](crate::Breakpoints) configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A breakpoint key was neither `"default"` nor a width in pixels.
    InvalidBreakpoint(String),
    /// An `orientation` value other than `vertical` or `horizontal`.
    UnknownOrientation(String),
    /// An `attachTo` value other than `left` or `right`.
    UnknownAttachment(String),
    /// A breakpoint value that is neither an object nor the `"disabled"` keyword.
    UnknownKeyword(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBreakpoint(key) => {
                write!(f, "invalid breakpoint key `{key}`: expected `default` or a pixel width")
            }
            Self::UnknownOrientation(value) => {
                write!(f, "unknown orientation `{value}`: expected `vertical` or `horizontal`")
            }
            Self::UnknownAttachment(value) => {
                write!(f, "unknown attachTo `{value}`: expected `left` or `right`")
            }
            Self::UnknownKeyword(value) => {
                write!(f, "unknown breakpoint keyword `{value}`: expected `disabled`")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Errors produced by [`Drawer`](crate::Drawer) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawerError {
    /// The requested state was never computed for the current layout.
    UnknownState(String),
    /// An operation needed a layout before [`Drawer::init`](crate::Drawer::init) ran.
    NotInitialized,
}

impl fmt::Display for DrawerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownState(name) => write!(f, "unknown drawer state `{name}`"),
            Self::NotInitialized => f.write_str("drawer has not been initialized"),
        }
    }
}

impl core::error::Error for DrawerError {}
