// Copyright 2025 the Drawerify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transitions between drawer offsets.
//!
//! Hosts with native CSS transitions only need [`Transition::target`] and
//! [`Transition::duration`]. Hosts that animate by hand call
//! [`Transition::sample`] once per frame with the time elapsed since the
//! transition started.
//!
//! ```rust
//! use core::time::Duration;
//! use drawerify::{Easing, Edge, Offset, Transition};
//!
//! let t = Transition::new(
//!     Offset::new(Edge::Bottom, -400.0),
//!     Offset::new(Edge::Bottom, 0.0),
//!     Duration::from_millis(200),
//!     Easing::Linear,
//! );
//! assert_eq!(t.value_at(Duration::from_millis(100)), -200.0);
//! assert_eq!(t.sample(Duration::from_millis(200)).to_string(), "bottom: 0");
//! ```

use core::f64::consts::PI;
use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::geometry::Offset;
use crate::style::Declarations;

/// Easing curve applied to transition progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start and end, `0.5 - cos(p * pi) / 2`.
    #[default]
    Swing,
}

impl Easing {
    /// Maps linear progress in `0.0..=1.0` to eased progress.
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        match self {
            Self::Linear => progress,
            Self::Swing => 0.5 - (progress * PI).cos() / 2.0,
        }
    }
}

/// An animated move of the drawer's moving edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    from: Offset,
    to: Offset,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    /// Creates a transition.
    ///
    /// If `from` and `to` move different edges there is nothing to
    /// interpolate, and the transition starts at `to`.
    #[must_use]
    pub fn new(from: Offset, to: Offset, duration: Duration, easing: Easing) -> Self {
        let from = if from.edge == to.edge { from } else { to };
        Self {
            from,
            to,
            duration,
            easing,
        }
    }

    /// A transition that jumps straight to `to`.
    #[must_use]
    pub fn instant(to: Offset) -> Self {
        Self::new(to, to, Duration::ZERO, Easing::Linear)
    }

    /// Starting offset.
    #[must_use]
    pub fn start(&self) -> Offset {
        self.from
    }

    /// Final offset.
    #[must_use]
    pub fn end(&self) -> Offset {
        self.to
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Easing curve.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Returns `true` if the transition has no duration.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }

    /// Returns `true` once `elapsed` covers the whole duration.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Linear progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.is_finished(elapsed) {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Eased edge inset after `elapsed`.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if self.is_finished(elapsed) {
            return self.to.px;
        }
        let eased = self.easing.apply(self.progress(elapsed));
        self.from.px + (self.to.px - self.from.px) * eased
    }

    /// Offset after `elapsed`.
    #[must_use]
    pub fn offset_at(&self, elapsed: Duration) -> Offset {
        Offset::new(self.to.edge, self.value_at(elapsed))
    }

    /// CSS after `elapsed`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Declarations {
        Declarations::offset(self.offset_at(elapsed))
    }

    /// CSS once the transition completes.
    #[must_use]
    pub fn target(&self) -> Declarations {
        Declarations::offset(self.to)
    }
}
