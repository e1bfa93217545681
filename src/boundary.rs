// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The boundary-uniform recursive renderer.
//!
//! Because the escape values are banded, most of the image is made of
//! large patches of a single color, and a patch of the Mandelbrot set
//! whose outline is one color is (almost always) that color all the
//! way through.  So for a rectangle we evaluate only its border.  If
//! every pixel on the border landed in the same band we paint the
//! inside that band without looking at it.  If not, we cut the inside
//! into four and try again on each quarter, until the pieces are too
//! small or we have gone too deep, at which point we just evaluate
//! everything that's left.
//!
//! Every pixel of the starting rectangle is written exactly once: each
//! call paints its own border, and its children only ever see the
//! inside of that border.

use escape::{band, palette};
use std::ops::AddAssign;
use surface::PixelSink;
use viewport::{Pixel, Viewport};

/// Rectangles smaller than this on either side are evaluated
/// exhaustively rather than split.
pub const MIN_SPLIT: usize = 4;

/// How many times a rectangle may be split before we give up and
/// evaluate it exhaustively.
pub const MAX_DEPTH: u32 = 10;

/// A half-open rectangle of pixels, `[x0, x1) × [y0, y1)`, and how
/// deep in the subdivision it sits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderRect {
    /// Left edge, inclusive.
    pub x0: usize,
    /// Top edge, inclusive.
    pub y0: usize,
    /// Right edge, exclusive.
    pub x1: usize,
    /// Bottom edge, exclusive.
    pub y1: usize,
    /// Number of splits between this rectangle and the tile it came from.
    pub depth: u32,
}

impl RenderRect {
    /// A top-level rectangle.
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> RenderRect {
        RenderRect {
            x0,
            y0,
            x1,
            y1,
            depth: 0,
        }
    }

    /// Width in pixels; zero if the edges are crossed.
    pub fn width(&self) -> usize {
        self.x1.saturating_sub(self.x0)
    }

    /// Height in pixels; zero if the edges are crossed.
    pub fn height(&self) -> usize {
        self.y1.saturating_sub(self.y0)
    }

    /// True if the rectangle holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The four quarters of the interior, split at the midpoint of the
    /// whole rectangle and inset by one pixel from its border.  Only
    /// meaningful for rectangles of at least `MIN_SPLIT` on each side,
    /// where every quarter is at least one pixel wide and tall.
    fn quadrants(&self) -> [RenderRect; 4] {
        let xm = self.x0 + self.width() / 2;
        let ym = self.y0 + self.height() / 2;
        let depth = self.depth + 1;
        let quad = |x0, y0, x1, y1| RenderRect {
            x0,
            y0,
            x1,
            y1,
            depth,
        };
        [
            quad(self.x0 + 1, self.y0 + 1, xm, ym),
            quad(xm, self.y0 + 1, self.x1 - 1, ym),
            quad(self.x0 + 1, ym, xm, self.y1 - 1),
            quad(xm, ym, self.x1 - 1, self.y1 - 1),
        ]
    }
}

/// How much work a render did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Pixels run through the escape evaluator.
    pub evaluated: usize,
    /// Pixels painted from a uniform border without evaluation.
    pub filled: usize,
}

impl RenderStats {
    /// Every pixel written, by either route.
    pub fn written(&self) -> usize {
        self.evaluated + self.filled
    }
}

impl AddAssign for RenderStats {
    fn add_assign(&mut self, other: RenderStats) {
        self.evaluated += other.evaluated;
        self.filled += other.filled;
    }
}

struct Painter<'a, S: PixelSink + 'a> {
    viewport: &'a Viewport,
    sink: &'a mut S,
    stats: RenderStats,
}

impl<'a, S: PixelSink> Painter<'a, S> {
    fn new(viewport: &'a Viewport, sink: &'a mut S) -> Self {
        Painter {
            viewport,
            sink,
            stats: RenderStats::default(),
        }
    }

    /// Evaluate one pixel, paint it, and hand back its band.
    fn evaluate(&mut self, x: usize, y: usize) -> u8 {
        let value = band(self.viewport.pixel_to_point(Pixel(x, y)));
        self.sink.set(x, y, palette(value));
        self.stats.evaluated += 1;
        value
    }

    /// Evaluate and paint the perimeter, each pixel once.  Returns the
    /// band of the top-left corner and whether the whole perimeter
    /// shared it.
    fn border(&mut self, rect: &RenderRect) -> (u8, bool) {
        let (x0, y0, x1, y1) = (rect.x0, rect.y0, rect.x1, rect.y1);
        let color = self.evaluate(x0, y0);
        let mut uniform = true;
        for x in x0 + 1..x1 {
            uniform &= self.evaluate(x, y0) == color;
        }
        if y1 - 1 > y0 {
            for x in x0..x1 {
                uniform &= self.evaluate(x, y1 - 1) == color;
            }
        }
        for y in y0 + 1..y1 - 1 {
            uniform &= self.evaluate(x0, y) == color;
            if x1 - 1 > x0 {
                uniform &= self.evaluate(x1 - 1, y) == color;
            }
        }
        (color, uniform)
    }

    fn fill_interior(&mut self, rect: &RenderRect, color: u8) {
        let rgb = palette(color);
        for y in rect.y0 + 1..rect.y1 - 1 {
            for x in rect.x0 + 1..rect.x1 - 1 {
                self.sink.set(x, y, rgb);
                self.stats.filled += 1;
            }
        }
    }

    fn evaluate_interior(&mut self, rect: &RenderRect) {
        for y in rect.y0 + 1..rect.y1 - 1 {
            for x in rect.x0 + 1..rect.x1 - 1 {
                self.evaluate(x, y);
            }
        }
    }

    fn subdivide(&mut self, rect: RenderRect) {
        if rect.is_empty() {
            return;
        }
        let (color, uniform) = self.border(&rect);
        if uniform {
            self.fill_interior(&rect, color);
        } else if rect.width() >= MIN_SPLIT && rect.height() >= MIN_SPLIT && rect.depth < MAX_DEPTH
        {
            for quadrant in rect.quadrants().iter() {
                self.subdivide(*quadrant);
            }
        } else {
            self.evaluate_interior(&rect);
        }
    }
}

/// Render one rectangle of the viewport into `sink` by border
/// subdivision, starting at the rectangle's own depth.
pub fn render_rect<S: PixelSink>(viewport: &Viewport, sink: &mut S, rect: RenderRect) -> RenderStats {
    let mut painter = Painter::new(viewport, sink);
    painter.subdivide(rect);
    painter.stats
}

/// Render the whole viewport by evaluating every pixel.  This is the
/// slow, obviously-correct renderer the subdividing one is measured
/// against.
pub fn render_exhaustive<S: PixelSink>(viewport: &Viewport, sink: &mut S) -> RenderStats {
    let mut painter = Painter::new(viewport, sink);
    for y in 0..viewport.height() {
        for x in 0..viewport.width() {
            painter.evaluate(x, y);
        }
    }
    painter.stats
}
