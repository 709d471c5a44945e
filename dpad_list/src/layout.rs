// Copyright 2026 the Dpad List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout collaborator contract and a built-in linear layout.
//!
//! A [`DpadListView`](crate::DpadListView) never places items itself. Item
//! placement belongs to a [`ListLayout`], an externally supplied collaborator
//! that answers geometry queries in content coordinates. The view wraps
//! whatever layout it is given in an [`AnchoredLayout`](crate::AnchoredLayout)
//! decorator and only ever talks to the layout through this trait.
//!
//! Because decoration hides the concrete layout from the view, adoption is an
//! explicit contract: when a layout is installed, [`ListLayout::bind`] hands
//! it the adopting view's identity. A layout that cannot serve that view (for
//! example, one already bound to another container) refuses, and installation
//! fails with [`LayoutBindError`] instead of leaving the two halves silently
//! disconnected.
//!
//! [`LinearListLayout`] is the built-in fixed-extent implementation: `len`
//! items of equal extent along one axis, filling the viewport on the other.
//! It is enough for the common TV-list case and for tests; anything fancier
//! (wrapping grids, measured rows) implements [`ListLayout`] on the host side.

use core::fmt;
use core::ops::Range;
use core::sync::atomic::{AtomicU64, Ordering};

use kurbo::{Point, Rect, Size};

/// Identity of a list view, used for layout binding.
///
/// Ids are minted per view instance and never reused within a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl ViewId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Main axis of a linear list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items run left to right.
    Horizontal,
    /// Items run top to bottom.
    #[default]
    Vertical,
}

/// Layout collaborator for a [`DpadListView`](crate::DpadListView).
///
/// All rectangles are in content coordinates; the view translates by its
/// scroll offset. Extent queries take `&mut self` so implementations may
/// cache derived measurements, mirroring how hosts typically refine item
/// sizes after layout passes.
pub trait ListLayout {
    /// Number of items.
    fn len(&self) -> usize;

    /// `true` if the list has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total content size for the given viewport.
    fn content_size(&mut self, viewport: Size) -> Size;

    /// Rectangle of item `index` in content coordinates, or `None` when the
    /// index is out of range.
    fn item_rect(&mut self, index: usize, viewport: Size) -> Option<Rect>;

    /// Half-open index range of items intersecting the viewport at `scroll`.
    ///
    /// The default implementation scans every item; layouts with cheap
    /// offset→index queries should override it.
    fn visible_range(&mut self, scroll: Point, viewport: Size) -> Range<usize> {
        let mut start = self.len();
        let mut end = 0;
        for index in 0..self.len() {
            let Some(rect) = self.item_rect(index, viewport) else {
                continue;
            };
            let onscreen = rect.x1 > scroll.x
                && rect.x0 < scroll.x + viewport.width
                && rect.y1 > scroll.y
                && rect.y0 < scroll.y + viewport.height;
            if onscreen {
                start = start.min(index);
                end = end.max(index + 1);
            }
        }
        start..end.max(start)
    }

    /// Accepts adoption by the view identified by `view`.
    ///
    /// Called exactly once when the layout is installed. Returning `false`
    /// aborts installation with [`LayoutBindError`]. Layouts that can serve
    /// any container keep the default, which always accepts.
    fn bind(&mut self, view: ViewId) -> bool {
        let _ = view;
        true
    }
}

/// Error returned when an assigned layout refuses to bind to its view.
///
/// This is a fatal configuration error: the layout is not installed, since a
/// half-adopted layout would leave scrolling and focus geometry silently
/// inconsistent.
#[derive(Clone, PartialEq, Eq)]
pub struct LayoutBindError {
    /// The view that attempted the binding.
    pub view: ViewId,
}

impl fmt::Debug for LayoutBindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayoutBindError {{ view: {:?} }}", self.view)
    }
}

impl fmt::Display for LayoutBindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layout refused to bind to view {:?}", self.view)
    }
}

impl core::error::Error for LayoutBindError {}

/// Fixed-extent linear layout.
///
/// `len` items of `item_extent` logical pixels each along `axis`, separated
/// by `spacing`, filling the viewport on the cross axis.
#[derive(Clone, Debug)]
pub struct LinearListLayout {
    axis: Axis,
    len: usize,
    item_extent: f64,
    spacing: f64,
}

impl LinearListLayout {
    /// Creates a layout of `len` items, each `item_extent` along `axis`.
    #[must_use]
    pub fn new(axis: Axis, len: usize, item_extent: f64) -> Self {
        Self {
            axis,
            len,
            item_extent,
            spacing: 0.0,
        }
    }

    /// Sets the gap between consecutive items.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// The main axis.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Changes the item count (content added or removed by the host).
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Main-axis offset of item `index`.
    fn offset_of(&self, index: usize) -> f64 {
        (self.item_extent + self.spacing) * index as f64
    }

    /// Main-axis extent of the whole strip.
    fn total_extent(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            self.item_extent * self.len as f64 + self.spacing * (self.len - 1) as f64
        }
    }
}

impl ListLayout for LinearListLayout {
    fn len(&self) -> usize {
        self.len
    }

    fn content_size(&mut self, viewport: Size) -> Size {
        match self.axis {
            Axis::Horizontal => Size::new(self.total_extent(), viewport.height),
            Axis::Vertical => Size::new(viewport.width, self.total_extent()),
        }
    }

    fn item_rect(&mut self, index: usize, viewport: Size) -> Option<Rect> {
        if index >= self.len {
            return None;
        }
        let start = self.offset_of(index);
        let end = start + self.item_extent;
        Some(match self.axis {
            Axis::Horizontal => Rect::new(start, 0.0, end, viewport.height),
            Axis::Vertical => Rect::new(0.0, start, viewport.width, end),
        })
    }

    fn visible_range(&mut self, scroll: Point, viewport: Size) -> Range<usize> {
        if self.len == 0 || self.item_extent <= 0.0 {
            return 0..0;
        }
        let (offset, extent) = match self.axis {
            Axis::Horizontal => (scroll.x, viewport.width),
            Axis::Vertical => (scroll.y, viewport.height),
        };
        let stride = self.item_extent + self.spacing;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Used only for index approximation; result is clamped immediately after"
        )]
        let (first, last) = (
            (offset / stride).floor().max(0.0) as usize,
            ((offset + extent) / stride).ceil().max(0.0) as usize,
        );
        first.min(self.len)..last.min(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_item_rects_stack_downward() {
        let mut layout = LinearListLayout::new(Axis::Vertical, 3, 20.0);
        let viewport = Size::new(100.0, 50.0);
        assert_eq!(
            layout.item_rect(0, viewport),
            Some(Rect::new(0.0, 0.0, 100.0, 20.0))
        );
        assert_eq!(
            layout.item_rect(2, viewport),
            Some(Rect::new(0.0, 40.0, 100.0, 60.0))
        );
        assert_eq!(layout.item_rect(3, viewport), None);
        assert_eq!(layout.content_size(viewport), Size::new(100.0, 60.0));
    }

    #[test]
    fn horizontal_item_rects_run_rightward() {
        let mut layout = LinearListLayout::new(Axis::Horizontal, 2, 30.0).with_spacing(10.0);
        let viewport = Size::new(100.0, 50.0);
        assert_eq!(
            layout.item_rect(1, viewport),
            Some(Rect::new(40.0, 0.0, 70.0, 50.0))
        );
        assert_eq!(layout.content_size(viewport).width, 70.0);
    }

    #[test]
    fn visible_range_tracks_scroll() {
        let mut layout = LinearListLayout::new(Axis::Vertical, 100, 10.0);
        let viewport = Size::new(100.0, 30.0);
        assert_eq!(layout.visible_range(Point::new(0.0, 0.0), viewport), 0..3);
        assert_eq!(layout.visible_range(Point::new(0.0, 95.0), viewport), 9..13);
        // Scrolled past the end: clamped to len.
        assert_eq!(
            layout.visible_range(Point::new(0.0, 2000.0), viewport),
            100..100
        );
    }

    #[test]
    fn default_visible_range_scan_agrees_with_override() {
        struct Scanning(LinearListLayout);
        impl ListLayout for Scanning {
            fn len(&self) -> usize {
                self.0.len()
            }
            fn content_size(&mut self, viewport: Size) -> Size {
                self.0.content_size(viewport)
            }
            fn item_rect(&mut self, index: usize, viewport: Size) -> Option<Rect> {
                self.0.item_rect(index, viewport)
            }
        }

        let viewport = Size::new(100.0, 30.0);
        let scroll = Point::new(0.0, 42.0);
        let mut fast = LinearListLayout::new(Axis::Vertical, 50, 10.0);
        let mut slow = Scanning(fast.clone());
        assert_eq!(
            fast.visible_range(scroll, viewport),
            slow.visible_range(scroll, viewport)
        );
    }

    #[test]
    fn view_ids_are_unique() {
        let a = ViewId::next();
        let b = ViewId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn bind_error_formats() {
        let err = LayoutBindError {
            view: ViewId::next(),
        };
        let msg = alloc::format!("{err}");
        assert!(msg.contains("refused to bind"), "unexpected message: {msg}");
    }
}
