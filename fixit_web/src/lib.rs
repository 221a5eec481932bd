// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser binding for `fixit_sticky`.
//!
//! On `wasm32` this crate provides [`DomHost`], an implementation of
//! `fixit_sticky::Host` over `web-sys`, and [`FixIt`], a handle that owns a
//! controller and its host and wires window `scroll`/`resize`, the target's
//! `fixit:triggerResize` and `fixit:updateScrollDirection` events, and
//! `setTimeout`/`setInterval` timers to it.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_sticky(target: web_sys::Element) -> Result<fixit_web::FixIt, wasm_bindgen::JsValue> {
//!     use fixit_sticky::FixitOptions;
//!
//!     let options = FixitOptions::new(target)
//!         .with_contained_in_parent(true)
//!         .with_direction_updates(true);
//!     fixit_web::FixIt::new(options)
//! }
//! ```
//!
//! Notes:
//! - Dropping a [`FixIt`] destroys the controller: listeners and timers are
//!   released and the placeholder is removed.
//! - A target that cannot be resolved gives an inert [`FixIt`] rather than an
//!   error.
//! - Events dispatched synchronously from inside a `fixit:*` listener while
//!   the controller is busy are dropped.
//! - On other targets only the CSS value helpers are available.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomHost, FixIt};

use alloc::format;
use alloc::string::String;

use fixit_sticky::Style;
use kurbo::Insets;

/// Parses a computed CSS length such as `"12.5px"`. Anything unparsable
/// (`"auto"`, the empty string) reads as zero.
#[must_use]
pub fn parse_px(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches("px")
        .parse::<f64>()
        .unwrap_or(0.0)
}

/// Builds insets from computed `top`, `right`, `bottom` and `left` values.
#[must_use]
pub fn insets_from_css(top: &str, right: &str, bottom: &str, left: &str) -> Insets {
    Insets::new(
        parse_px(left),
        parse_px(top),
        parse_px(right),
        parse_px(bottom),
    )
}

/// Splits a style write into its CSS property and value. A `None` value
/// means the property should be removed.
#[must_use]
pub fn css_declaration(style: Style) -> (&'static str, Option<String>) {
    let px = |v: f64| format!("{v}px");
    match style {
        Style::Top(v) => ("top", v.map(px)),
        Style::Width(v) => ("width", v.map(px)),
        Style::Height(v) => ("height", v.map(px)),
        Style::Margin(v) => (
            "margin",
            v.map(|m| format!("{}px {}px {}px {}px", m.y0, m.x1, m.y1, m.x0)),
        ),
    }
}
