#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot explorer engine
//!
//! The Mandelbrot set is the set of points `c` on the complex plane for
//! which repeatedly squaring and adding `c`, starting from zero, never
//! runs off to infinity.  The points outside it are colored by how
//! fast they run off.
//!
//! This crate renders a window onto that plane into an RGB buffer, and
//! moves the window around in response to navigation commands.  It is
//! built for interactive use, so the interesting part is going fast
//! without a GPU: the escape values are banded into sixteen levels,
//! which leaves most of the image as large flat regions, and the
//! renderer only evaluates the outline of each region, filling it in
//! when the outline is flat and subdividing when it is not.  The image
//! is cut into a grid of tiles and each tile is rendered on its own
//! thread.
//!
//! A host drives it with two calls: `render` to draw the current
//! viewport, and `apply_command` to move it.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod boundary;
pub mod command;
pub mod errors;
pub mod escape;
pub mod surface;
pub mod tiles;
pub mod viewport;

pub use boundary::{render_exhaustive, render_rect, RenderRect, RenderStats};
pub use command::{Command, Navigation};
pub use errors::MandelError;
pub use escape::Rgb;
pub use surface::{PixelSink, Surface};
pub use tiles::TileScheduler;
pub use viewport::{Pixel, Viewport};

/// Render the viewport into the surface on the default tile grid,
/// returning once the whole frame is drawn.
pub fn render(viewport: &Viewport, surface: &mut Surface) -> Result<RenderStats, MandelError> {
    TileScheduler::default().render(viewport, surface)
}

/// Move the viewport by one navigation command, with the default pan
/// step and zoom factor.
pub fn apply_command(viewport: &mut Viewport, command: Command) {
    Navigation::default().apply(viewport, command)
}
