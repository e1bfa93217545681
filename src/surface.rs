// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel surface the renderers write into, and the disjoint tile
//! views the scheduler carves out of it.
//!
//! A surface is one row-major run of RGB triples.  Tiles are not
//! contiguous in that run, so a `TileView` holds one mutable slice per
//! row it covers.  The slices are produced by splitting every row at
//! the column boundaries, which is what guarantees that no two views
//! can alias: the borrow checker proves the partition for us.

use errors::MandelError;
use escape::Rgb;
use std::mem;

const CHANNELS: usize = 3;

/// Anything a renderer can paint a pixel onto.  Writes outside the
/// target are dropped on the floor, never a panic.
pub trait PixelSink {
    /// Paint the pixel at absolute image coordinates `(x, y)`.
    fn set(&mut self, x: usize, y: usize, rgb: Rgb);
}

/// An owned RGB raster.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Surface {
    /// A black surface of the given size.
    pub fn new(width: usize, height: usize) -> Result<Surface, MandelError> {
        if width == 0 || height == 0 {
            return Err(MandelError::ZeroResolution { width, height });
        }
        Ok(Surface {
            width,
            height,
            pixels: vec![0 as u8; width * height * CHANNELS],
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The color at `(x, y)`, or `None` outside the surface.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            let n = (y * self.width + x) * CHANNELS;
            Some(Rgb(self.pixels[n], self.pixels[n + 1], self.pixels[n + 2]))
        } else {
            None
        }
    }

    /// The raw row-major RGB bytes, for presentation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Split the surface into a grid of disjoint views.  `columns` and
    /// `rows` are the tile edges along each axis: they must start at
    /// zero, end at the surface width (height), and never decrease.
    /// Views come back in row-major tile order.
    pub fn split_grid(&mut self, columns: &[usize], rows: &[usize]) -> Vec<TileView> {
        debug_assert!(columns.first() == Some(&0) && columns.last() == Some(&self.width));
        debug_assert!(rows.first() == Some(&0) && rows.last() == Some(&self.height));

        let across = columns.len() - 1;
        let mut views: Vec<TileView> = Vec::with_capacity(across * (rows.len() - 1));
        for band in rows.windows(2) {
            for edge in columns.windows(2) {
                views.push(TileView {
                    x0: edge[0],
                    y0: band[0],
                    width: edge[1] - edge[0],
                    height: band[1] - band[0],
                    rows: Vec::with_capacity(band[1] - band[0]),
                });
            }
        }

        let mut band = 0;
        for (y, line) in self.pixels.chunks_mut(self.width * CHANNELS).enumerate() {
            while y >= rows[band + 1] {
                band += 1;
            }
            let mut rest: &mut [u8] = line;
            for (i, edge) in columns.windows(2).enumerate() {
                let (piece, tail) =
                    mem::replace(&mut rest, &mut []).split_at_mut((edge[1] - edge[0]) * CHANNELS);
                views[band * across + i].rows.push(piece);
                rest = tail;
            }
        }
        views
    }
}

impl PixelSink for Surface {
    fn set(&mut self, x: usize, y: usize, rgb: Rgb) {
        if x < self.width && y < self.height {
            let n = (y * self.width + x) * CHANNELS;
            self.pixels[n] = rgb.0;
            self.pixels[n + 1] = rgb.1;
            self.pixels[n + 2] = rgb.2;
        }
    }
}

/// A rectangular window onto a surface, owning the only mutable access
/// to the pixels inside it.  Addressed in absolute image coordinates.
#[derive(Debug)]
pub struct TileView<'a> {
    x0: usize,
    y0: usize,
    width: usize,
    height: usize,
    rows: Vec<&'a mut [u8]>,
}

impl<'a> TileView<'a> {
    /// The left edge of the tile in the image.
    pub fn x0(&self) -> usize {
        self.x0
    }

    /// The top edge of the tile in the image.
    pub fn y0(&self) -> usize {
        self.y0
    }

    /// One past the right edge of the tile.
    pub fn x1(&self) -> usize {
        self.x0 + self.width
    }

    /// One past the bottom edge of the tile.
    pub fn y1(&self) -> usize {
        self.y0 + self.height
    }
}

impl<'a> PixelSink for TileView<'a> {
    fn set(&mut self, x: usize, y: usize, rgb: Rgb) {
        if x >= self.x0 && x < self.x1() && y >= self.y0 && y < self.y1() {
            let n = (x - self.x0) * CHANNELS;
            let row = &mut self.rows[y - self.y0];
            row[n] = rgb.0;
            row[n + 1] = rgb.1;
            row[n + 2] = rgb.2;
        }
    }
}
