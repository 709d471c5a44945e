// Copyright 2026 the Dpad List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dpad_list --heading-base-level=0

//! Dpad List: a D-pad aware list view with animated selector overlays.
//!
//! This crate provides a retained, host-agnostic list view component aimed at
//! remote-control and TV-style interfaces, where focus moves item-by-item via
//! directional keys and the focused item is highlighted by an animated
//! selector rather than by a pointer.
//!
//! The core concepts are:
//!
//! - [`DpadListView`]: the view itself. It dispatches keyboard events, tracks
//!   focus and touch-mode state, owns the selector overlays, and drives the
//!   draw pass in a fixed background → items → foreground order.
//! - [`Selector`]: an overlay paint ([`peniko::Brush`]) plus a visibility flag
//!   and a [`BoundsAnimation`] that follows the focused item's rectangle.
//! - [`NavKeyState`]: a press-streak counter over the four directional keys.
//!   A deliberate single press animates the selector over the configured
//!   duration; a rapid repeat streak snaps it instantly.
//! - [`ListLayout`]: the layout collaborator contract. The view never places
//!   items itself; it queries rectangles from the layout and wraps it in an
//!   [`AnchoredLayout`] decorator that can pin the focused item's center at a
//!   fixed fraction of the viewport on either axis.
//!
//! This crate deliberately does **not** know about windows, renderers, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Delivering keyboard events ([`ui_events::keyboard::KeyboardEvent`]) and
//!   focus/touch-mode notifications to the view.
//! - Supplying timestamps (milliseconds on any monotonic clock) to the event
//!   and draw entry points; the crate never reads a clock of its own.
//! - Implementing [`DrawSurface`] to turn the view's draw pass into actual
//!   rendering, and scheduling further frames while
//!   [`DpadListView::needs_redraw`] reports `true`.
//!
//! ## Minimal example
//!
//! A vertical list of ten rows with an animated background highlight:
//!
//! ```rust
//! use dpad_list::{Axis, DpadListView, LinearListLayout, NavDirection};
//! use kurbo::Size;
//! use peniko::{Brush, Color};
//! use ui_events::keyboard::KeyState;
//!
//! let mut view = DpadListView::new();
//! view.set_viewport(Size::new(320.0, 240.0));
//! view.set_background_selector(Some(Brush::Solid(Color::from_rgba8(70, 130, 180, 255))));
//! view.set_selection_duration(150.0);
//! view.set_layout(LinearListLayout::new(Axis::Vertical, 10, 48.0)).unwrap();
//!
//! // Focus arrives from the host and the first item is focused.
//! view.set_focused(true);
//! view.focus_item(0, 0.0);
//!
//! // A deliberate ArrowDown press moves focus and starts a 150ms animation.
//! view.handle_nav_key(NavDirection::Down, KeyState::Down, 10.0);
//! assert_eq!(view.focused_item(), Some(1));
//! assert!(view.needs_redraw(20.0));
//! ```
//!
//! All rectangles live in logical pixels: layouts report item rectangles in
//! content coordinates, and the view translates them by its scroll offset
//! into viewport-local coordinates for selectors and drawing.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod anchor;
mod animation;
mod layout;
mod nav_keys;
mod selector;
mod view;

pub use anchor::{AnchoredLayout, anchored_offset};
pub use animation::BoundsAnimation;
pub use layout::{Axis, LayoutBindError, LinearListLayout, ListLayout, ViewId};
pub use nav_keys::{NavDirection, NavKeyState};
pub use selector::{Selector, SelectorLayer};
pub use view::{DpadListView, DrawSurface, ListViewConfig, ScrollRequest, ViewFlags};
