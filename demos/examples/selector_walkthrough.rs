// Copyright 2026 the Dpad List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector walkthrough.
//!
//! Drive a `DpadListView` with a scripted D-pad session and print each frame:
//! a deliberate press animates the highlight, a held key snaps it, and the
//! anchored axis keeps the focused item centered once the list can scroll.
//!
//! Run:
//! - `cargo run -p dpad_list_examples --example selector_walkthrough`

use dpad_list::{Axis, DpadListView, LinearListLayout, NavDirection, SelectorLayer};
use dpad_list_examples::ConsoleSurface;
use kurbo::Size;
use peniko::{Brush, Color};
use ui_events::keyboard::KeyState;

const ROW: f64 = 24.0;
const ROWS: usize = 8;

fn print_frame(view: &mut DpadListView<LinearListLayout>, now_ms: f64, label: &str) {
    let mut surface = ConsoleSurface::new(ROWS, ROW);
    view.draw(now_ms, &mut surface);
    println!("-- t={now_ms:>5.0}ms {label}");
    for line in surface.lines() {
        println!("   {line}");
    }
}

fn main() {
    let mut view = DpadListView::new();
    view.set_viewport(Size::new(320.0, ROW * ROWS as f64));
    view.set_background_selector(Some(Brush::Solid(Color::from_rgba8(70, 130, 180, 255))));
    view.set_selection_duration(180.0);
    view.set_scroll_offset_fraction_y(Some(0.5));
    view.set_layout(LinearListLayout::new(Axis::Vertical, 40, ROW))
        .expect("linear layouts bind unconditionally");

    view.attach();
    view.set_focused(true);
    view.focus_item(0, 0.0);
    print_frame(&mut view, 0.0, "initial focus");

    // One deliberate press: the highlight animates over 180ms.
    view.handle_nav_key(NavDirection::Down, KeyState::Down, 1000.0);
    print_frame(&mut view, 1090.0, "deliberate press, mid-animation");
    print_frame(&mut view, 1200.0, "deliberate press, settled");
    view.handle_nav_key(NavDirection::Down, KeyState::Up, 1250.0);

    // Hold the key: auto-repeat keeps the streak >= 2, so every step snaps.
    for (step, t) in (2000..2400).step_by(80).enumerate() {
        view.handle_nav_key(NavDirection::Down, KeyState::Down, f64::from(t));
        let streak = view.nav_keys().streak();
        println!(
            "held press {step}: focused={:?} streak={streak} animating={}",
            view.focused_item(),
            view.needs_redraw(f64::from(t)),
        );
    }
    view.handle_nav_key(NavDirection::Down, KeyState::Up, 2400.0);
    print_frame(&mut view, 2400.0, "after held scrolling (centered by anchor)");

    // Touch input takes over: the highlight hides until the D-pad returns.
    view.set_touch_mode(true);
    print_frame(&mut view, 3000.0, "touch mode (selector hidden)");
    view.set_touch_mode(false);
    view.handle_nav_key(NavDirection::Up, KeyState::Down, 3500.0);
    view.handle_nav_key(NavDirection::Up, KeyState::Up, 3550.0);
    print_frame(&mut view, 3700.0, "back on the D-pad");

    let bounds = view
        .selector(SelectorLayer::Background)
        .map(|selector| selector.bounds(3700.0));
    println!("final selector bounds: {bounds:?}");
}
