// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Custom events published on the target, and the scroll direction they carry.

use core::fmt;

/// Vertical scroll direction inferred from placeholder movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScrollDirection {
    /// Content moving down the page (placeholder top decreasing).
    Down,
    /// Content moving up the page (placeholder top increasing).
    Up,
}

impl ScrollDirection {
    /// Returns `"up"` or `"down"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
        }
    }

    /// Parses `"up"` or `"down"`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "down" => Some(Self::Down),
            "up" => Some(Self::Up),
            _ => None,
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event dispatched on the target element.
///
/// Events bubble and are cancelable; cancelling them has no effect on the
/// controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FixitEvent {
    /// First setup completed.
    Init,
    /// The target entered the active state.
    Active,
    /// The target returned to its natural position.
    Inactive,
    /// A new scroll direction was committed.
    ScrollDirectionChange {
        /// Direction committed before this one, if any.
        previous: Option<ScrollDirection>,
        /// Newly committed direction.
        new: ScrollDirection,
    },
}

impl FixitEvent {
    /// Full DOM event type, for example `fixit:active`.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::Init => "fixit:init",
            Self::Active => "fixit:active",
            Self::Inactive => "fixit:inactive",
            Self::ScrollDirectionChange { .. } => "fixit:scrollDirectionChange",
        }
    }
}
