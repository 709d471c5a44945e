// Copyright 2026 the Dpad List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector overlays: the paint, visibility, and animation of a highlight.
//!
//! A [`Selector`] is the state behind one highlight layer of a
//! [`DpadListView`](crate::DpadListView): the brush it is filled with, whether
//! it is currently shown, and the [`BoundsAnimation`] that carries it from one
//! focused item to the next.
//!
//! The animation is created lazily on the first focus change and retargeted in
//! place on every later one, so a selector never holds more than one animation.
//! Because the animation is owned by its selector, replacing or clearing the
//! selector reclaims the animation with it; there is no external registry to
//! clean up.

use kurbo::Rect;
use peniko::Brush;

use crate::animation::BoundsAnimation;

/// Which side of the item content a selector draws on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectorLayer {
    /// Drawn before (beneath) the items.
    Background,
    /// Drawn after (above) the items.
    Foreground,
}

/// One highlight overlay: a brush, a visibility flag, and its animation.
///
/// Selectors start hidden; the owning view recomputes visibility from its
/// focus and touch-mode state on every relevant event.
#[derive(Clone, Debug)]
pub struct Selector {
    brush: Brush,
    visible: bool,
    animation: Option<BoundsAnimation>,
}

impl Selector {
    /// Creates a hidden selector painted with `brush`.
    #[must_use]
    pub fn new(brush: Brush) -> Self {
        Self {
            brush,
            visible: false,
            animation: None,
        }
    }

    /// The brush this selector is filled with.
    #[must_use]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// `true` if the selector should be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the selector. Never animated.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Animates the selector toward `dest` over `duration_ms`.
    ///
    /// The first call creates the animation (sourced from zero bounds, the
    /// selector's unset default); later calls retarget the existing one, so
    /// an in-flight move is superseded without a jump.
    pub fn move_to(&mut self, dest: Rect, duration_ms: f64, now_ms: f64) {
        match &mut self.animation {
            Some(animation) => animation.retarget(dest, duration_ms, now_ms),
            None => {
                let mut animation = BoundsAnimation::settled(Rect::ZERO);
                animation.retarget(dest, duration_ms, now_ms);
                self.animation = Some(animation);
            }
        }
    }

    /// Bounds at `now_ms`; zero until the first focus change.
    #[must_use]
    pub fn bounds(&self, now_ms: f64) -> Rect {
        self.animation
            .as_ref()
            .map_or(Rect::ZERO, |animation| animation.sample(now_ms))
    }

    /// `true` while the selector is still moving at `now_ms`.
    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|animation| animation.is_running(now_ms))
    }

    /// The animation driving this selector, if one has been created.
    #[must_use]
    pub fn animation(&self) -> Option<&BoundsAnimation> {
        self.animation.as_ref()
    }
}
