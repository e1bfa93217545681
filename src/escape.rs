// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator and the fixed palette.
//!
//! A point `c` on the complex plane is in the Mandelbrot set if the
//! orbit of `z = z * z + c`, starting at zero, never leaves the circle
//! of radius 2.  How quickly it does leave is its "velocity", and we
//! turn that velocity into a byte of intensity: fast escapers are
//! bright, slow escapers fade towards zero, and points that never
//! escape are exactly zero.
//!
//! The intensity is then coarsened into sixteen bands.  The banding is
//! what gives the image its large flat regions, and the flat regions
//! are what the boundary renderer exploits.

use num::{clamp, Complex};

/// The maximum number of iterations before a point is declared a
/// member of the set.
pub const ITER_MAX: u32 = 255;

/// How much intensity a point loses per iteration survived.
pub const CONTRAST: i64 = 15;

/// Width of one color band.  Intensities are rounded down to a
/// multiple of this.
pub const BAND: u8 = 16;

/// An RGB triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Black, for members of the set.
pub const BLACK: Rgb = Rgb(0, 0, 0);

/// Iterate `v = v * v + point` from zero.  Returns
/// `255 - CONTRAST * n` (clamped to a byte) for the first iteration
/// `n` at which `|v| > 2`, or 0 if the orbit survives `ITER_MAX`
/// iterations.
pub fn escape(point: Complex<f64>) -> u8 {
    let mut v: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for n in 0..ITER_MAX {
        v = v * v + point;
        if v.norm_sqr() > 4.0 {
            return clamp(255 - CONTRAST * i64::from(n), 0, 255) as u8;
        }
    }
    0
}

/// Round an intensity down to the bottom of its band.
#[inline]
pub fn quantize(intensity: u8) -> u8 {
    intensity / BAND * BAND
}

/// The banded intensity of a point; this is the value the renderers
/// compare and color.
#[inline]
pub fn band(point: Complex<f64>) -> u8 {
    quantize(escape(point))
}

/// The fixed palette.  Zero is black; everything else is spread across
/// the three channels a third of the wheel apart.  The offsets wrap at
/// a byte before being reduced, so 240 maps to `(240, 69, 154)`.
pub fn palette(band: u8) -> Rgb {
    if band == 0 {
        BLACK
    } else {
        Rgb(
            band,
            band.wrapping_add(85) % 255,
            band.wrapping_add(170) % 255,
        )
    }
}
