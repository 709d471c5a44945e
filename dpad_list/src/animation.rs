// Copyright 2026 the Dpad List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retargetable bounds animation for selector overlays.
//!
//! [`BoundsAnimation`] interpolates a [`Rect`] linearly from a source to a
//! destination over a host-clock interval. The host supplies "now" (in
//! milliseconds on any monotonic clock) to every call; the animation never
//! reads a clock of its own, which keeps sampling deterministic and
//! unit-testable.
//!
//! Retargeting is the important part: when focus moves again while an
//! animation is still in flight, [`BoundsAnimation::retarget`] re-aims the
//! *same* animation value at the new destination, using the currently sampled
//! bounds as the new source. The selector therefore follows focus without a
//! visual jump and without allocating a second animation.
//!
//! ## Minimal example
//! ```
//! use dpad_list::BoundsAnimation;
//! use kurbo::Rect;
//!
//! let mut anim = BoundsAnimation::settled(Rect::new(0.0, 0.0, 10.0, 10.0));
//! anim.retarget(Rect::new(100.0, 0.0, 110.0, 10.0), 100.0, 0.0);
//!
//! // Halfway through, the rect is halfway there.
//! assert_eq!(anim.sample(50.0).x0, 50.0);
//! // After the duration it stays clamped to the destination.
//! assert_eq!(anim.sample(500.0).x0, 100.0);
//! ```

use kurbo::Rect;

/// Linear interpolation of a rectangle between two bounds on a host clock.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundsAnimation {
    source: Rect,
    dest: Rect,
    start_ms: f64,
    duration_ms: f64,
}

impl BoundsAnimation {
    /// Creates an animation already settled at `bounds`.
    ///
    /// Sampling a settled animation returns `bounds` at any time.
    #[must_use]
    pub fn settled(bounds: Rect) -> Self {
        Self {
            source: bounds,
            dest: bounds,
            start_ms: 0.0,
            duration_ms: 0.0,
        }
    }

    /// Re-aims the animation at `dest`, starting from the bounds currently
    /// sampled at `now_ms`.
    ///
    /// The previous trajectory is superseded. A non-positive `duration_ms`
    /// snaps: the animation settles at `dest` immediately.
    pub fn retarget(&mut self, dest: Rect, duration_ms: f64, now_ms: f64) {
        self.source = self.sample(now_ms);
        self.dest = dest;
        self.start_ms = now_ms;
        self.duration_ms = duration_ms.max(0.0);
    }

    /// Bounds at `now_ms`, clamped to the destination once complete.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> Rect {
        if self.duration_ms <= 0.0 {
            return self.dest;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        lerp_rect(self.source, self.dest, t)
    }

    /// `true` while the animation has not yet reached its destination.
    #[must_use]
    pub fn is_running(&self, now_ms: f64) -> bool {
        self.duration_ms > 0.0 && now_ms - self.start_ms < self.duration_ms
    }

    /// The destination bounds.
    #[must_use]
    pub fn target(&self) -> Rect {
        self.dest
    }
}

/// Interpolates each edge of `a` toward `b` at parameter `t` in `[0, 1]`.
fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    Rect::new(
        a.x0 + (b.x0 - a.x0) * t,
        a.y0 + (b.y0 - a.y0) * t,
        a.x1 + (b.x1 - a.x1) * t,
        a.y1 + (b.y1 - a.y1) * t,
    )
}
