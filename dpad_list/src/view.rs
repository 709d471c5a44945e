// Copyright 2026 the Dpad List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The D-pad aware list view.
//!
//! [`DpadListView`] ties the crate's pieces together: it owns the selector
//! overlays, the navigation key streak, the focus/touch-mode flags, and the
//! anchored layout decorator, and it drives the draw pass in a fixed order.
//!
//! The view is retained and host-driven. Hosts forward keyboard events with
//! [`DpadListView::handle_key`], report focus and touch-mode transitions with
//! [`DpadListView::set_focused`] and [`DpadListView::set_touch_mode`], and
//! render each frame through a [`DrawSurface`] implementation. Timestamps are
//! supplied by the host in milliseconds on any monotonic clock.
//!
//! Selector visibility follows one rule, re-applied on every key dispatch and
//! touch-mode notification: selectors are shown iff the view has focus and
//! the UI is not in touch mode. The transition is a plain show/hide.

use kurbo::{Point, Rect, Size};
use peniko::Brush;
use ui_events::keyboard::{KeyState, KeyboardEvent};

use crate::anchor::AnchoredLayout;
use crate::layout::{LayoutBindError, ListLayout, ViewId};
use crate::nav_keys::{NavDirection, NavKeyState};
use crate::selector::{Selector, SelectorLayer};

bitflags::bitflags! {
    /// View lifecycle and input-mode flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ViewFlags: u8 {
        /// Attached to a host view tree; touch-mode notifications are observed.
        const ATTACHED   = 0b0000_0001;
        /// The view currently has focus.
        const FOCUSED    = 0b0000_0010;
        /// The UI is in touch input mode (pointer, not D-pad).
        const TOUCH_MODE = 0b0000_0100;
    }
}

/// How a scroll-into-view request asks to be performed.
///
/// The view always performs the scroll immediately; see
/// [`DpadListView::scroll_item_into_view`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollRequest {
    /// Jump to the target offset in this call.
    #[default]
    Immediate,
    /// Ask for a smooth scroll. Accepted for API compatibility, but coerced
    /// to the immediate path so host-side smooth scrolling never fights the
    /// selector animation.
    Smooth,
}

/// Declarative construction-time configuration for [`DpadListView`].
#[derive(Clone, Debug, Default)]
pub struct ListViewConfig {
    /// Brush for the selector drawn beneath the items.
    pub background_selector: Option<Brush>,
    /// Brush for the selector drawn above the items.
    pub foreground_selector: Option<Brush>,
    /// Duration of deliberate focus-change animations, in milliseconds.
    pub selection_duration_ms: f64,
    /// Horizontal anchor fraction for the focused item's center.
    pub scroll_offset_fraction_x: Option<f64>,
    /// Vertical anchor fraction for the focused item's center.
    pub scroll_offset_fraction_y: Option<f64>,
}

/// Host-implemented sink for one draw pass.
///
/// The view calls the methods in its fixed order: background selector fill,
/// then one [`DrawSurface::draw_item`] per visible item, then the foreground
/// selector fill. All rectangles are viewport-local.
pub trait DrawSurface {
    /// Fills `rect` with `brush` (selector overlays).
    fn fill_rect(&mut self, rect: Rect, brush: &Brush);

    /// Draws the content of item `index` at `rect`.
    fn draw_item(&mut self, index: usize, rect: Rect);
}

/// A scrollable list view with D-pad focus-aware selector overlays.
///
/// See the [crate docs](crate) for the full model and a usage example.
#[derive(Debug)]
pub struct DpadListView<L> {
    id: ViewId,
    layout: Option<AnchoredLayout<L>>,
    background: Option<Selector>,
    foreground: Option<Selector>,
    nav_keys: NavKeyState,
    flags: ViewFlags,
    selection_duration_ms: f64,
    fraction_x: Option<f64>,
    fraction_y: Option<f64>,
    viewport: Size,
    scroll: Point,
    focused: Option<usize>,
}

impl<L> Default for DpadListView<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> DpadListView<L> {
    /// Creates an empty view with no layout, selectors, or anchoring.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ViewId::next(),
            layout: None,
            background: None,
            foreground: None,
            nav_keys: NavKeyState::new(),
            flags: ViewFlags::empty(),
            selection_duration_ms: 0.0,
            fraction_x: None,
            fraction_y: None,
            viewport: Size::ZERO,
            scroll: Point::ZERO,
            focused: None,
        }
    }

    /// Creates a view from a declarative configuration.
    #[must_use]
    pub fn with_config(config: ListViewConfig) -> Self {
        let mut view = Self::new();
        view.set_background_selector(config.background_selector);
        view.set_foreground_selector(config.foreground_selector);
        view.selection_duration_ms = config.selection_duration_ms;
        view.fraction_x = config.scroll_offset_fraction_x;
        view.fraction_y = config.scroll_offset_fraction_y;
        view
    }

    /// The identity handed to layouts when they bind to this view.
    #[must_use]
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Current lifecycle and input-mode flags.
    #[must_use]
    pub fn flags(&self) -> ViewFlags {
        self.flags
    }

    /// Duration of deliberate focus-change animations, in milliseconds.
    #[must_use]
    pub fn selection_duration(&self) -> f64 {
        self.selection_duration_ms
    }

    /// Sets the deliberate focus-change animation duration in milliseconds.
    pub fn set_selection_duration(&mut self, duration_ms: f64) {
        self.selection_duration_ms = duration_ms.max(0.0);
    }

    /// The selector for `layer`, if one is configured.
    #[must_use]
    pub fn selector(&self, layer: SelectorLayer) -> Option<&Selector> {
        match layer {
            SelectorLayer::Background => self.background.as_ref(),
            SelectorLayer::Foreground => self.foreground.as_ref(),
        }
    }

    /// Sets or clears the selector drawn beneath the items.
    ///
    /// Replacing a selector discards its previous animation state; the new
    /// selector picks up the current visibility rule immediately.
    pub fn set_background_selector(&mut self, brush: Option<Brush>) {
        self.background = self.make_selector(brush);
    }

    /// Sets or clears the selector drawn above the items.
    ///
    /// Replacing a selector discards its previous animation state; the new
    /// selector picks up the current visibility rule immediately.
    pub fn set_foreground_selector(&mut self, brush: Option<Brush>) {
        self.foreground = self.make_selector(brush);
    }

    fn make_selector(&self, brush: Option<Brush>) -> Option<Selector> {
        brush.map(|brush| {
            let mut selector = Selector::new(brush);
            selector.set_visible(self.selectors_visible());
            selector
        })
    }

    /// The horizontal anchor fraction, if set.
    #[must_use]
    pub fn scroll_offset_fraction_x(&self) -> Option<f64> {
        self.fraction_x
    }

    /// The vertical anchor fraction, if set.
    #[must_use]
    pub fn scroll_offset_fraction_y(&self) -> Option<f64> {
        self.fraction_y
    }

    /// The viewport size last reported by the host layout pass.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Reports the view's on-screen size.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// The current scroll offset in content coordinates.
    #[must_use]
    pub fn scroll_offset(&self) -> Point {
        self.scroll
    }

    /// The index of the focused item, if any.
    #[must_use]
    pub fn focused_item(&self) -> Option<usize> {
        self.focused
    }

    /// The navigation key streak state (read-only).
    #[must_use]
    pub fn nav_keys(&self) -> &NavKeyState {
        &self.nav_keys
    }

    /// Marks the view attached to a host view tree.
    ///
    /// While attached, touch-mode notifications are observed; while detached
    /// they are ignored, mirroring observer registration in retained hosts.
    pub fn attach(&mut self) {
        self.flags.insert(ViewFlags::ATTACHED);
    }

    /// Marks the view detached from the host view tree.
    pub fn detach(&mut self) {
        self.flags.remove(ViewFlags::ATTACHED);
    }

    /// `true` while attached to a host view tree.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.flags.contains(ViewFlags::ATTACHED)
    }

    /// Reports a focus transition on the view itself.
    pub fn set_focused(&mut self, has_focus: bool) {
        self.flags.set(ViewFlags::FOCUSED, has_focus);
        self.enforce_selector_visibility();
    }

    /// Touch-mode notification from the host. Ignored while detached.
    pub fn set_touch_mode(&mut self, in_touch_mode: bool) {
        if !self.is_attached() {
            return;
        }
        self.flags.set(ViewFlags::TOUCH_MODE, in_touch_mode);
        self.enforce_selector_visibility();
    }

    fn selectors_visible(&self) -> bool {
        self.flags.contains(ViewFlags::FOCUSED) && !self.flags.contains(ViewFlags::TOUCH_MODE)
    }

    fn enforce_selector_visibility(&mut self) {
        let visible = self.selectors_visible();
        if let Some(selector) = &mut self.background {
            selector.set_visible(visible);
        }
        if let Some(selector) = &mut self.foreground {
            selector.set_visible(visible);
        }
    }

    /// `true` while any selector animation is still running.
    ///
    /// Hosts poll this after event handling and drawing to decide whether to
    /// schedule another frame.
    #[must_use]
    pub fn needs_redraw(&self, now_ms: f64) -> bool {
        self.background
            .as_ref()
            .is_some_and(|selector| selector.is_animating(now_ms))
            || self
                .foreground
                .as_ref()
                .is_some_and(|selector| selector.is_animating(now_ms))
    }
}

impl<L: ListLayout> DpadListView<L> {
    /// Assigns the layout, wrapping it in the anchoring decorator.
    ///
    /// The layout is asked to [bind](ListLayout::bind) to this view; refusal
    /// is a fatal configuration error and leaves the view without a layout.
    /// A focused index that the new layout cannot place is cleared.
    pub fn set_layout(&mut self, layout: L) -> Result<(), LayoutBindError> {
        let mut wrapped = AnchoredLayout::new(layout, self.fraction_x, self.fraction_y);
        if !wrapped.bind(self.id) {
            return Err(LayoutBindError { view: self.id });
        }
        if self.focused.is_some_and(|index| index >= wrapped.len()) {
            self.focused = None;
        }
        self.layout = Some(wrapped);
        Ok(())
    }

    /// The anchoring decorator around the assigned layout, if any.
    #[must_use]
    pub fn layout(&self) -> Option<&AnchoredLayout<L>> {
        self.layout.as_ref()
    }

    /// Mutable access to the anchoring decorator, if any.
    pub fn layout_mut(&mut self) -> Option<&mut AnchoredLayout<L>> {
        self.layout.as_mut()
    }

    /// Sets the horizontal anchor fraction and forwards it to the live
    /// decorator. `None` disables pinning on this axis.
    pub fn set_scroll_offset_fraction_x(&mut self, fraction: Option<f64>) {
        self.fraction_x = fraction;
        if let Some(layout) = &mut self.layout {
            layout.set_fraction_x(fraction);
        }
    }

    /// Sets the vertical anchor fraction and forwards it to the live
    /// decorator. `None` disables pinning on this axis.
    pub fn set_scroll_offset_fraction_y(&mut self, fraction: Option<f64>) {
        self.fraction_y = fraction;
        if let Some(layout) = &mut self.layout {
            layout.set_fraction_y(fraction);
        }
    }

    /// Dispatches a keyboard event to the view.
    ///
    /// Selector visibility is re-enforced on every dispatch. Directional keys
    /// feed the repeat streak and, on key-down, move focus one step through
    /// the list. Returns `true` if the event was consumed.
    pub fn handle_key(&mut self, event: &KeyboardEvent, now_ms: f64) -> bool {
        match NavDirection::from_key(&event.key) {
            Some(direction) => self.handle_nav_key(direction, event.state, now_ms),
            None => {
                self.enforce_selector_visibility();
                false
            }
        }
    }

    /// Dispatches an already-mapped directional key transition.
    pub fn handle_nav_key(
        &mut self,
        direction: NavDirection,
        state: KeyState,
        now_ms: f64,
    ) -> bool {
        self.enforce_selector_visibility();
        self.nav_keys.observe(state);
        if state.is_down() && self.flags.contains(ViewFlags::FOCUSED) {
            self.step_focus(direction, now_ms);
        }
        true
    }

    fn step_focus(&mut self, direction: NavDirection, now_ms: f64) {
        let Some(layout) = &self.layout else {
            return;
        };
        let len = layout.len();
        if len == 0 {
            return;
        }
        let next = match self.focused {
            Some(index) => index.saturating_add_signed(direction.linear_step()),
            // First directional press lands focus on the first item.
            None => 0,
        };
        let next = next.min(len - 1);
        if self.focused != Some(next) {
            self.focus_item(next, now_ms);
        }
    }

    /// Moves focus to item `index`.
    ///
    /// Scrolls immediately so the anchor policy holds, then animates both
    /// selectors toward the item's viewport-local rectangle. The animation
    /// duration is the configured selection duration for a deliberate press
    /// and zero during a rapid repeat streak. Out-of-range indices are
    /// ignored.
    pub fn focus_item(&mut self, index: usize, now_ms: f64) {
        let viewport = self.viewport;
        let current = self.scroll;
        let Some(layout) = &mut self.layout else {
            return;
        };
        let Some(offset) = layout.scroll_offset_for(index, viewport, current) else {
            return;
        };
        let item = layout.item_rect(index, viewport).unwrap_or(Rect::ZERO);

        self.scroll = offset;
        self.focused = Some(index);

        let hit = item - self.scroll.to_vec2();
        let duration_ms = if self.nav_keys.is_rapid() {
            0.0
        } else {
            self.selection_duration_ms
        };
        if let Some(selector) = &mut self.foreground {
            selector.move_to(hit, duration_ms, now_ms);
        }
        if let Some(selector) = &mut self.background {
            selector.move_to(hit, duration_ms, now_ms);
        }
    }

    /// Brings item `index` on screen, honoring the anchor policy.
    ///
    /// The request is always performed immediately; a [`ScrollRequest::Smooth`]
    /// request is coerced rather than handed to a smooth-scroll mechanism.
    /// Returns `true` if the scroll offset changed.
    pub fn scroll_item_into_view(&mut self, index: usize, request: ScrollRequest) -> bool {
        // Smooth scrolling would race the selector animation.
        let _ = request;
        let viewport = self.viewport;
        let current = self.scroll;
        let Some(layout) = &mut self.layout else {
            return false;
        };
        let Some(offset) = layout.scroll_offset_for(index, viewport, current) else {
            return false;
        };
        let changed = offset != self.scroll;
        self.scroll = offset;
        changed
    }

    /// Draws one frame through `surface`.
    ///
    /// The order is fixed: background selector, then the visible items, then
    /// the foreground selector. Hidden selectors are skipped, never reordered.
    pub fn draw<S: DrawSurface>(&mut self, now_ms: f64, surface: &mut S) {
        if let Some(selector) = &self.background
            && selector.is_visible()
        {
            surface.fill_rect(selector.bounds(now_ms), selector.brush());
        }

        if let Some(layout) = &mut self.layout {
            let scroll = self.scroll.to_vec2();
            for index in layout.visible_range(self.scroll, self.viewport) {
                if let Some(rect) = layout.item_rect(index, self.viewport) {
                    surface.draw_item(index, rect - scroll);
                }
            }
        }

        if let Some(selector) = &self.foreground
            && selector.is_visible()
        {
            surface.fill_rect(selector.bounds(now_ms), selector.brush());
        }
    }
}
