// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Viewport struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0
//! (the pixels of the output image), and a rectangle on the complex
//! plane described by a center and a half-width.  The height of the
//! complex rectangle follows from the aspect ratio of the pixels.
use errors::MandelError;
use num::Complex;

/// Where a fresh viewport looks: the whole set, slightly off-center.
pub const DEFAULT_CENTER: Complex<f64> = Complex { re: -0.5, im: 0.0 };

/// The default half-width of the visible region.
pub const DEFAULT_HALF_WIDTH: f64 = 2.0;

/// Describes the x, y of a pixel in the output image.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel(pub usize, pub usize);

/// The corner of the complex plane that pixel `(0, 0)` maps to, and
/// the opposite corner just past the last pixel, treating the real
/// part of each value as the x-component and the imaginary part as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// The visible window onto the complex plane.  The pixel resolution is
/// fixed when the viewport is made; the framing moves with `pan` and
/// `zoom`.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    /// The point of the complex plane at the middle of the image.
    pub center: Complex<f64>,
    half_width: f64,
    width: usize,
    height: usize,
}

impl Viewport {
    /// A viewport of the given resolution, showing the default framing.
    pub fn new(width: usize, height: usize) -> Result<Viewport, MandelError> {
        Viewport::with_framing(width, height, DEFAULT_CENTER, DEFAULT_HALF_WIDTH)
    }

    /// A viewport of the given resolution centered on `center` and
    /// spanning `center.re ± half_width` horizontally.
    pub fn with_framing(
        width: usize,
        height: usize,
        center: Complex<f64>,
        half_width: f64,
    ) -> Result<Viewport, MandelError> {
        if width == 0 || height == 0 {
            return Err(MandelError::ZeroResolution { width, height });
        }
        if half_width <= 0.0 || !half_width.is_finite() {
            return Err(MandelError::InvalidHalfWidth(half_width));
        }
        Ok(Viewport {
            center,
            half_width,
            width,
            height,
        })
    }

    /// Width of the output image in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the output image in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Half the visible span along the real axis.
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Half the visible span along the imaginary axis, corrected for
    /// the aspect ratio of the image.
    pub fn half_height(&self) -> f64 {
        self.half_width * (self.height as f64 / self.width as f64)
    }

    /// The total number of pixels in the image.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Never true; a viewport always has at least one pixel.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Given a pixel of the output image, map it to the point of the
    /// complex plane at its top-left corner.  Every renderer goes
    /// through here, so tiles and sub-rectangles always agree on where
    /// a pixel is.
    pub fn pixel_to_point(&self, pixel: Pixel) -> Complex<f64> {
        let half_height = self.half_height();
        Complex::new(
            self.center.re - self.half_width
                + (pixel.0 as f64) / (self.width as f64) * self.half_width * 2.0,
            self.center.im - half_height
                + (pixel.1 as f64) / (self.height as f64) * half_height * 2.0,
        )
    }

    /// The visible region of the complex plane.  The first corner is
    /// where pixel `(0, 0)` lands; the second is one pixel beyond the
    /// last one.
    pub fn bounds(&self) -> ComplexPlane {
        let half_height = self.half_height();
        ComplexPlane(
            Complex::new(
                self.center.re - self.half_width,
                self.center.im - half_height,
            ),
            Complex::new(
                self.center.re + self.half_width,
                self.center.im + half_height,
            ),
        )
    }

    /// Move the center by a fraction of the current half-width, so a
    /// pan covers the same share of the screen at every zoom level.
    pub fn pan(&mut self, frac_dx: f64, frac_dy: f64) {
        self.center.re += self.half_width * frac_dx;
        self.center.im += self.half_width * frac_dy;
    }

    /// Multiply the half-width by `factor`.  Less than one zooms in.
    pub fn zoom(&mut self, factor: f64) {
        debug_assert!(factor > 0.0);
        self.half_width *= factor;
    }

    /// Go back to the default framing.
    pub fn reset(&mut self) {
        self.center = DEFAULT_CENTER;
        self.half_width = DEFAULT_HALF_WIDTH;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn viewport_fails_on_zero_resolution() {
        assert_eq!(
            Viewport::new(0, 10),
            Err(MandelError::ZeroResolution {
                width: 0,
                height: 10
            })
        );
        assert!(Viewport::new(10, 0).is_err());
    }

    #[test]
    fn viewport_fails_on_bad_half_width() {
        let c = Complex::new(0.0, 0.0);
        assert!(Viewport::with_framing(4, 4, c, 0.0).is_err());
        assert!(Viewport::with_framing(4, 4, c, -1.0).is_err());
        assert!(Viewport::with_framing(4, 4, c, ::std::f64::NAN).is_err());
        assert!(Viewport::with_framing(4, 4, c, ::std::f64::INFINITY).is_err());
    }

    #[test]
    fn default_framing() {
        let vp = Viewport::new(1280, 720).unwrap();
        assert_eq!(vp.center, Complex::new(-0.5, 0.0));
        assert_eq!(vp.half_width(), 2.0);
        assert_eq!(vp.half_height(), 1.125);
        assert_eq!(vp.len(), 1280 * 720);
    }

    #[test]
    fn pixel_to_point_on_square_planes() {
        let vp = Viewport::with_framing(4, 4, Complex::new(0.0, 0.0), 2.0).unwrap();
        assert_eq!(vp.pixel_to_point(Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(vp.pixel_to_point(Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(vp.pixel_to_point(Pixel(3, 1)), Complex::new(1.0, -1.0));
    }

    #[test]
    fn pixel_to_point_corrects_for_aspect() {
        let vp = Viewport::with_framing(8, 4, Complex::new(1.0, 1.0), 2.0).unwrap();
        assert_eq!(vp.half_height(), 1.0);
        assert_eq!(vp.pixel_to_point(Pixel(0, 0)), Complex::new(-1.0, 0.0));
        assert_eq!(vp.pixel_to_point(Pixel(4, 2)), Complex::new(1.0, 1.0));
    }

    #[test]
    fn corners_bound_the_visible_region() {
        let vp = Viewport::new(64, 48).unwrap();
        let ComplexPlane(low, high) = vp.bounds();
        let first = vp.pixel_to_point(Pixel(0, 0));
        let last = vp.pixel_to_point(Pixel(63, 47));
        assert_eq!(first, low);
        assert!(close(low.re, -2.5));
        assert!(close(low.im, -1.5));
        assert!(close(high.re, 1.5));
        assert!(close(high.im, 1.5));
        assert!(last.re < high.re && last.im < high.im);
        assert!(close(last.re, high.re - 4.0 / 64.0));
        assert!(close(last.im, high.im - 3.0 / 48.0));
    }

    #[test]
    fn pan_scales_with_zoom() {
        let mut vp = Viewport::new(10, 10).unwrap();
        vp.pan(0.25, 0.0);
        assert_eq!(vp.center, Complex::new(0.0, 0.0));
        vp.zoom(0.5);
        vp.pan(0.0, -0.5);
        assert_eq!(vp.center, Complex::new(0.0, -0.5));
    }

    #[test]
    fn zoom_round_trips_on_powers_of_two() {
        let mut vp = Viewport::new(10, 10).unwrap();
        vp.zoom(0.5);
        vp.zoom(0.5);
        assert_eq!(vp.half_width(), 0.5);
        vp.zoom(2.0);
        vp.zoom(2.0);
        assert_eq!(vp.half_width(), 2.0);
    }

    #[test]
    fn reset_restores_default_framing() {
        let mut vp = Viewport::new(10, 10).unwrap();
        vp.pan(1.0, 1.0);
        vp.zoom(0.1);
        vp.reset();
        assert_eq!(vp, Viewport::new(10, 10).unwrap());
    }
}
