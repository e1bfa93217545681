// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The tile scheduler: cuts the image into an N×N grid and renders
//! every tile on its own thread.
//!
//! Each worker gets a `TileView` of the surface, and the views are
//! disjoint by construction, so there is no locking anywhere.  The
//! viewport is shared read-only.  The scope does not return until every
//! worker has finished, which makes one call to `render` one complete
//! frame.

use boundary::{render_rect, RenderRect, RenderStats};
use crossbeam;
use errors::MandelError;
use itertools::iproduct;
use std::time::Instant;
use surface::Surface;
use viewport::Viewport;

/// Tiles along each side of the image.
pub const DEFAULT_GRID: usize = 4;

/// The edges of `grid` equal tiles along an axis of `len` pixels.  The
/// last tile absorbs whatever the integer division leaves over, so the
/// edges always run from 0 to `len`.
pub fn tile_edges(len: usize, grid: usize) -> Vec<usize> {
    let step = len / grid;
    let mut edges: Vec<usize> = (0..grid).map(|i| i * step).collect();
    edges.push(len);
    edges
}

/// Renders frames as a grid of parallel tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileScheduler {
    grid: usize,
}

impl Default for TileScheduler {
    fn default() -> Self {
        TileScheduler { grid: DEFAULT_GRID }
    }
}

impl TileScheduler {
    /// A scheduler that renders `grid × grid` tiles per frame.
    pub fn new(grid: usize) -> Result<TileScheduler, MandelError> {
        if grid == 0 {
            return Err(MandelError::InvalidGrid(grid));
        }
        Ok(TileScheduler { grid })
    }

    /// Tiles along each side.
    pub fn grid(&self) -> usize {
        self.grid
    }

    /// The tiles of a `width × height` image, in row-major order.
    pub fn tile_rects(&self, width: usize, height: usize) -> Vec<RenderRect> {
        let columns = tile_edges(width, self.grid);
        let rows = tile_edges(height, self.grid);
        iproduct!(rows.windows(2), columns.windows(2))
            .map(|(r, c)| RenderRect::new(c[0], r[0], c[1], r[1]))
            .collect()
    }

    /// Render the viewport into the surface, one thread per tile, and
    /// wait for all of them.
    pub fn render(
        &self,
        viewport: &Viewport,
        surface: &mut Surface,
    ) -> Result<RenderStats, MandelError> {
        if surface.width() != viewport.width() || surface.height() != viewport.height() {
            return Err(MandelError::SurfaceMismatch {
                surface_width: surface.width(),
                surface_height: surface.height(),
                viewport_width: viewport.width(),
                viewport_height: viewport.height(),
            });
        }

        let started = Instant::now();
        let columns = tile_edges(viewport.width(), self.grid);
        let rows = tile_edges(viewport.height(), self.grid);
        let views = surface.split_grid(&columns, &rows);

        let joined = crossbeam::scope(|spawner| {
            let handles: Vec<_> = views
                .into_iter()
                .map(|mut view| {
                    spawner.spawn(move |_| {
                        let rect = RenderRect::new(view.x0(), view.y0(), view.x1(), view.y1());
                        let stats = render_rect(viewport, &mut view, rect);
                        trace!("tile {:?}: {:?}", rect, stats);
                        stats
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Vec<_>>()
        })
        .map_err(|_| MandelError::TilePanicked)?;

        let mut stats = RenderStats::default();
        for tile in joined {
            stats += tile.map_err(|_| MandelError::TilePanicked)?;
        }
        debug!(
            "rendered {}x{} as {}x{} tiles in {:?}: {} evaluated, {} filled",
            viewport.width(),
            viewport.height(),
            self.grid,
            self.grid,
            started.elapsed(),
            stats.evaluated,
            stats.filled
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;
    use std::collections::HashSet;

    #[test]
    fn edges_absorb_the_remainder() {
        assert_eq!(tile_edges(16, 4), vec![0, 4, 8, 12, 16]);
        assert_eq!(tile_edges(18, 4), vec![0, 4, 8, 12, 18]);
        assert_eq!(tile_edges(3, 4), vec![0, 0, 0, 0, 3]);
        assert_eq!(tile_edges(7, 1), vec![0, 7]);
    }

    #[test]
    fn zero_grid_is_rejected() {
        assert_eq!(TileScheduler::new(0), Err(MandelError::InvalidGrid(0)));
        assert_eq!(TileScheduler::default().grid(), DEFAULT_GRID);
    }

    #[test]
    fn tiles_partition_the_image() {
        let scheduler = TileScheduler::new(3).unwrap();
        let mut seen = HashSet::new();
        for rect in scheduler.tile_rects(20, 11) {
            for (x, y) in iproduct!(rect.x0..rect.x1, rect.y0..rect.y1) {
                assert!(seen.insert((x, y)), "({}, {}) is in two tiles", x, y);
            }
        }
        assert_eq!(seen.len(), 20 * 11);
    }

    #[test]
    fn tile_rects_match_the_surface_views() {
        let scheduler = TileScheduler::default();
        let mut surface = Surface::new(21, 13).unwrap();
        let views = surface.split_grid(&tile_edges(21, 4), &tile_edges(13, 4));
        let rects = scheduler.tile_rects(21, 13);
        assert_eq!(views.len(), rects.len());
        for (view, rect) in views.iter().zip(rects.iter()) {
            assert_eq!(
                (view.x0(), view.y0(), view.x1(), view.y1()),
                (rect.x0, rect.y0, rect.x1, rect.y1)
            );
        }
    }

    #[test]
    fn mismatched_surface_is_rejected() {
        let vp = Viewport::new(8, 8).unwrap();
        let mut surface = Surface::new(8, 9).unwrap();
        assert!(TileScheduler::default().render(&vp, &mut surface).is_err());
    }

    #[test]
    fn every_pixel_is_accounted_for() {
        let vp = Viewport::with_framing(37, 23, Complex::new(-0.75, 0.1), 0.5).unwrap();
        let mut surface = Surface::new(37, 23).unwrap();
        let stats = TileScheduler::default().render(&vp, &mut surface).unwrap();
        assert_eq!(stats.written(), 37 * 23);
    }

    #[test]
    fn more_tiles_than_pixels() {
        let vp = Viewport::new(3, 2).unwrap();
        let mut surface = Surface::new(3, 2).unwrap();
        let stats = TileScheduler::new(4).unwrap().render(&vp, &mut surface).unwrap();
        assert_eq!(stats.written(), 6);
    }
}
