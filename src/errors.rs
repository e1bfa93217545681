// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while configuring or driving the
//! engine.  Rendering itself has no recoverable failures; these are
//! all rejections of bad configuration, plus the one way a render can
//! die, which is a worker thread panicking.

/// The crate-wide error type.
#[derive(Debug, Fail, PartialEq)]
pub enum MandelError {
    /// A viewport or surface was asked for with no pixels in it.
    #[fail(display = "Resolution must be non-zero, got {}x{}", width, height)]
    ZeroResolution {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// The half-width of a viewport must be a positive, finite number.
    #[fail(display = "Half-width must be positive and finite, got {}", _0)]
    InvalidHalfWidth(f64),

    /// A tile grid needs at least one tile on a side.
    #[fail(display = "Tile grid must be at least 1x1, got {}", _0)]
    InvalidGrid(usize),

    /// The surface handed to a renderer is not the size the viewport
    /// describes.
    #[fail(
        display = "Surface is {}x{} but the viewport is {}x{}",
        surface_width, surface_height, viewport_width, viewport_height
    )]
    SurfaceMismatch {
        /// Surface width in pixels.
        surface_width: usize,
        /// Surface height in pixels.
        surface_height: usize,
        /// Viewport width in pixels.
        viewport_width: usize,
        /// Viewport height in pixels.
        viewport_height: usize,
    },

    /// One of the tile workers panicked before the frame was complete.
    #[fail(display = "A tile worker panicked; the frame is incomplete")]
    TilePanicked,

    /// A navigation command name that means nothing to us.
    #[fail(display = "Unknown command: {}", _0)]
    UnknownCommand(String),

    /// A command-line value that could not be parsed.
    #[fail(display = "{}", _0)]
    BadArgument(String),
}
