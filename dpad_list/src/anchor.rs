// Copyright 2026 the Dpad List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-offset anchoring: pin the focused item at a viewport fraction.
//!
//! [`AnchoredLayout`] wraps any [`ListLayout`] and adds the scroll policy a
//! D-pad list wants: when focus lands on an item, scroll so that the item's
//! center sits at a fixed fraction of the viewport on each axis. A fraction
//! of `0.5` keeps the focused item vertically (or horizontally) centered as
//! focus walks the list; `None` disables pinning for that axis and falls back
//! to the minimal scroll that brings the item fully into view.
//!
//! The wrapper delegates the whole [`ListLayout`] contract to the inner
//! layout, so hosts can treat an `AnchoredLayout<L>` exactly like the `L` they
//! assigned. Fractions are live: changing them on the wrapper takes effect on
//! the next focus change, with no re-assignment of the layout.
//!
//! Offsets are always clamped to the scrollable range, so an axis whose
//! content already fits the viewport simply stays at zero regardless of any
//! configured fraction.
//!
//! ## Minimal example
//! ```
//! use dpad_list::{AnchoredLayout, Axis, LinearListLayout};
//! use kurbo::{Point, Size};
//!
//! let inner = LinearListLayout::new(Axis::Vertical, 100, 10.0);
//! let mut anchored = AnchoredLayout::new(inner, None, Some(0.5));
//!
//! let viewport = Size::new(100.0, 100.0);
//! let offset = anchored
//!     .scroll_offset_for(50, viewport, Point::ZERO)
//!     .unwrap();
//! // Item 50 spans 500..510; its center lands at half the viewport.
//! assert_eq!(offset.y, 505.0 - 50.0);
//! ```

use core::ops::Range;

use kurbo::{Point, Rect, Size};

use crate::layout::{ListLayout, ViewId};

/// Scroll offset placing `span` (an item's start/end on one axis) at
/// `fraction` of `viewport_extent`, clamped to `[0, content - viewport]`.
///
/// With `fraction` unset, the offset is the minimal change from `current`
/// that brings the span fully into view (no change if it already is). A span
/// larger than the viewport aligns to its leading edge.
#[must_use]
pub fn anchored_offset(
    span: Range<f64>,
    content_extent: f64,
    viewport_extent: f64,
    fraction: Option<f64>,
    current: f64,
) -> f64 {
    let max_scroll = (content_extent - viewport_extent).max(0.0);
    let target = match fraction {
        Some(fraction) => {
            let center = (span.start + span.end) / 2.0;
            center - fraction * viewport_extent
        }
        None => {
            if span.start < current || span.end - span.start > viewport_extent {
                span.start
            } else if span.end > current + viewport_extent {
                span.end - viewport_extent
            } else {
                current
            }
        }
    };
    target.clamp(0.0, max_scroll)
}

/// Decorator that pins the focused item at fixed viewport fractions.
#[derive(Clone, Debug)]
pub struct AnchoredLayout<L> {
    inner: L,
    fraction_x: Option<f64>,
    fraction_y: Option<f64>,
}

impl<L: ListLayout> AnchoredLayout<L> {
    /// Wraps `inner` with per-axis anchor fractions (`None` disables an axis).
    #[must_use]
    pub fn new(inner: L, fraction_x: Option<f64>, fraction_y: Option<f64>) -> Self {
        Self {
            inner,
            fraction_x,
            fraction_y,
        }
    }

    /// Returns a shared reference to the wrapped layout.
    #[must_use]
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped layout.
    pub fn inner_mut(&mut self) -> &mut L {
        &mut self.inner
    }

    /// Unwraps the decorator, returning the inner layout.
    #[must_use]
    pub fn into_inner(self) -> L {
        self.inner
    }

    /// The horizontal anchor fraction.
    #[must_use]
    pub fn fraction_x(&self) -> Option<f64> {
        self.fraction_x
    }

    /// The vertical anchor fraction.
    #[must_use]
    pub fn fraction_y(&self) -> Option<f64> {
        self.fraction_y
    }

    /// Sets the horizontal anchor fraction. Takes effect on the next focus
    /// change.
    pub fn set_fraction_x(&mut self, fraction: Option<f64>) {
        self.fraction_x = fraction;
    }

    /// Sets the vertical anchor fraction. Takes effect on the next focus
    /// change.
    pub fn set_fraction_y(&mut self, fraction: Option<f64>) {
        self.fraction_y = fraction;
    }

    /// Scroll offset that honors the anchor policy for focusing `index`.
    ///
    /// `current` is the present scroll offset, used by unanchored axes for
    /// minimal scrolling. Returns `None` when `index` is out of range.
    pub fn scroll_offset_for(
        &mut self,
        index: usize,
        viewport: Size,
        current: Point,
    ) -> Option<Point> {
        let rect = self.inner.item_rect(index, viewport)?;
        let content = self.inner.content_size(viewport);
        Some(Point::new(
            anchored_offset(
                rect.x0..rect.x1,
                content.width,
                viewport.width,
                self.fraction_x,
                current.x,
            ),
            anchored_offset(
                rect.y0..rect.y1,
                content.height,
                viewport.height,
                self.fraction_y,
                current.y,
            ),
        ))
    }
}

impl<L: ListLayout> ListLayout for AnchoredLayout<L> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn content_size(&mut self, viewport: Size) -> Size {
        self.inner.content_size(viewport)
    }

    fn item_rect(&mut self, index: usize, viewport: Size) -> Option<Rect> {
        self.inner.item_rect(index, viewport)
    }

    fn visible_range(&mut self, scroll: Point, viewport: Size) -> Range<usize> {
        self.inner.visible_range(scroll, viewport)
    }

    fn bind(&mut self, view: ViewId) -> bool {
        self.inner.bind(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Axis, LinearListLayout};

    #[test]
    fn fraction_centers_item() {
        // Item center 505, viewport 100, fraction 0.5 → offset 455.
        let offset = anchored_offset(500.0..510.0, 1000.0, 100.0, Some(0.5), 0.0);
        assert_eq!(offset, 455.0);
    }

    #[test]
    fn fraction_clamps_at_content_edges() {
        // Near the start, the anchored target would be negative.
        assert_eq!(anchored_offset(0.0..10.0, 1000.0, 100.0, Some(0.5), 0.0), 0.0);
        // Near the end, it would overshoot max scroll (900).
        assert_eq!(
            anchored_offset(990.0..1000.0, 1000.0, 100.0, Some(0.5), 0.0),
            900.0
        );
    }

    // Content that fits the viewport cannot scroll; the fraction is ignored.
    #[test]
    fn fraction_ignored_when_content_fits() {
        assert_eq!(anchored_offset(40.0..60.0, 80.0, 100.0, Some(0.9), 0.0), 0.0);
    }

    #[test]
    fn unanchored_axis_scrolls_minimally() {
        // Already fully visible: no change.
        assert_eq!(anchored_offset(20.0..30.0, 1000.0, 100.0, None, 0.0), 0.0);
        // Below the viewport: align the trailing edge.
        assert_eq!(anchored_offset(150.0..160.0, 1000.0, 100.0, None, 0.0), 60.0);
        // Above the viewport: align the leading edge.
        assert_eq!(
            anchored_offset(150.0..160.0, 1000.0, 100.0, None, 500.0),
            150.0
        );
    }

    #[test]
    fn oversized_span_aligns_leading_edge() {
        assert_eq!(
            anchored_offset(200.0..400.0, 1000.0, 100.0, None, 0.0),
            200.0
        );
    }

    #[test]
    fn decorator_delegates_geometry() {
        let inner = LinearListLayout::new(Axis::Vertical, 10, 20.0);
        let mut anchored = AnchoredLayout::new(inner, None, None);
        let viewport = Size::new(100.0, 60.0);
        assert_eq!(anchored.len(), 10);
        assert_eq!(
            anchored.item_rect(1, viewport),
            Some(Rect::new(0.0, 20.0, 100.0, 40.0))
        );
        assert_eq!(anchored.content_size(viewport).height, 200.0);
        assert_eq!(anchored.visible_range(Point::ZERO, viewport), 0..3);
    }

    #[test]
    fn live_fraction_update_changes_next_offset() {
        let inner = LinearListLayout::new(Axis::Vertical, 100, 10.0);
        let mut anchored = AnchoredLayout::new(inner, None, None);
        let viewport = Size::new(100.0, 100.0);

        // Unanchored: item 50 (500..510) scrolls minimally to 410.
        let minimal = anchored.scroll_offset_for(50, viewport, Point::ZERO).unwrap();
        assert_eq!(minimal.y, 410.0);

        // Switch to centering without touching the inner layout.
        anchored.set_fraction_y(Some(0.5));
        let centered = anchored.scroll_offset_for(50, viewport, Point::ZERO).unwrap();
        assert_eq!(centered.y, 455.0);
    }

    #[test]
    fn out_of_range_index_has_no_offset() {
        let inner = LinearListLayout::new(Axis::Vertical, 3, 10.0);
        let mut anchored = AnchoredLayout::new(inner, None, None);
        assert!(
            anchored
                .scroll_offset_for(3, Size::new(100.0, 100.0), Point::ZERO)
                .is_none()
        );
    }
}
