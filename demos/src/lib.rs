// Copyright 2026 the Dpad List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared harness code for the `dpad_list` demos.

use dpad_list::DrawSurface;
use kurbo::Rect;
use peniko::Brush;

/// A [`DrawSurface`] that renders a draw pass as rows of text.
///
/// Each viewport row becomes one line showing the item drawn there. Rows
/// covered by a selector fill are marked with `>` so the highlight (and the
/// order it was applied in) is visible in plain terminal output.
#[derive(Debug)]
pub struct ConsoleSurface {
    row_height: f64,
    items: Vec<Option<usize>>,
    highlighted: Vec<bool>,
}

impl ConsoleSurface {
    /// Creates a surface of `rows` text rows, each `row_height` logical
    /// pixels tall.
    #[must_use]
    pub fn new(rows: usize, row_height: f64) -> Self {
        Self {
            row_height,
            items: vec![None; rows],
            highlighted: vec![false; rows],
        }
    }

    fn row_span(&self, rect: Rect) -> std::ops::Range<usize> {
        let first = (rect.y0 / self.row_height).floor().max(0.0) as usize;
        let last = (rect.y1 / self.row_height).ceil().max(0.0) as usize;
        first.min(self.items.len())..last.min(self.items.len())
    }

    /// Renders the frame, one line per row.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.items
            .iter()
            .zip(&self.highlighted)
            .map(|(item, highlighted)| {
                let mark = if *highlighted { '>' } else { ' ' };
                match item {
                    Some(index) => format!("{mark} item {index:>3}"),
                    None => format!("{mark}"),
                }
            })
            .collect()
    }
}

impl DrawSurface for ConsoleSurface {
    fn fill_rect(&mut self, rect: Rect, _brush: &Brush) {
        for row in self.row_span(rect) {
            self.highlighted[row] = true;
        }
    }

    fn draw_item(&mut self, index: usize, rect: Rect) {
        for row in self.row_span(rect) {
            self.items[row] = Some(index);
        }
    }
}
