// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS hooks applied to the target.

use crate::event::ScrollDirection;

/// Class carried by the placeholder element.
pub const PLACEHOLDER_CLASS: &str = "fixit-placeholder";

bitflags::bitflags! {
    /// Set of `fixit--*` classes currently applied to the target.
    ///
    /// The controller keeps this mirror of the class list and only touches
    /// the document for bits that actually change.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StateClasses: u16 {
        /// `fixit--active`
        const ACTIVE = 1 << 0;
        /// `fixit--frozen`
        const FROZEN = 1 << 1;
        /// `fixit--docked`
        const DOCKED = 1 << 2;
        /// `fixit--bottom`
        const BOTTOM = 1 << 3;
        /// `fixit--scrolled`
        const SCROLLED = 1 << 4;
        /// `fixit--scroll-up`
        const SCROLL_UP = 1 << 5;
        /// `fixit--scroll-down`
        const SCROLL_DOWN = 1 << 6;
        /// `fixit--scroll-direction-change`
        const SCROLL_DIRECTION_CHANGE = 1 << 7;
        /// `fixit--respond-to-parent`
        const RESPOND_TO_PARENT = 1 << 8;
    }
}

const NAMES: [(StateClasses, &str); 9] = [
    (StateClasses::ACTIVE, "fixit--active"),
    (StateClasses::FROZEN, "fixit--frozen"),
    (StateClasses::DOCKED, "fixit--docked"),
    (StateClasses::BOTTOM, "fixit--bottom"),
    (StateClasses::SCROLLED, "fixit--scrolled"),
    (StateClasses::SCROLL_UP, "fixit--scroll-up"),
    (StateClasses::SCROLL_DOWN, "fixit--scroll-down"),
    (StateClasses::SCROLL_DIRECTION_CHANGE, "fixit--scroll-direction-change"),
    (StateClasses::RESPOND_TO_PARENT, "fixit--respond-to-parent"),
];

impl StateClasses {
    /// Classes tied to scroll direction.
    pub const DIRECTION: Self = Self::SCROLL_UP
        .union(Self::SCROLL_DOWN)
        .union(Self::SCROLL_DIRECTION_CHANGE);

    /// Classes removed when the target goes inactive.
    pub const POSITIONAL: Self = Self::ACTIVE
        .union(Self::FROZEN)
        .union(Self::DOCKED)
        .union(Self::BOTTOM)
        .union(Self::SCROLLED);

    /// Returns the class name for a single flag.
    ///
    /// Returns `None` for the empty set or a set of more than one flag.
    #[must_use]
    pub fn class_name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, name)| *name)
    }

    /// Returns the class for a committed scroll direction.
    #[must_use]
    pub const fn for_direction(direction: ScrollDirection) -> Self {
        match direction {
            ScrollDirection::Up => Self::SCROLL_UP,
            ScrollDirection::Down => Self::SCROLL_DOWN,
        }
    }

    /// Iterates the class names of every flag in the set.
    pub fn class_names(self) -> impl Iterator<Item = &'static str> {
        self.iter().filter_map(Self::class_name)
    }
}
