// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The flat RGB grid the carver operates on.
//!
//! A `PixelGrid` owns its pixels outright: one contiguous row-major
//! buffer, the same layout the cost tables use.  Cloning a grid clones
//! the buffer; two grids never alias.  The `replace_with_*` swaps are
//! the only way a grid changes shape after construction, and they are
//! there for the carver's use when it rebuilds a one-smaller image.

use crate::errors::CarveError;
use std::ops::Index;

/// One RGB triple.  No identity beyond its value; copied freely.
///
/// Channel values must fit 16 bits, the plain PPM maximum; the energy
/// arithmetic relies on that bound to stay within `u64`.  The PPM
/// reader enforces it at construction.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Pixel {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Pixel {
    pub fn new(red: u32, green: u32, blue: u32) -> Self {
        Pixel { red, green, blue }
    }

    pub(crate) fn channels(self) -> [u32; 3] {
        [self.red, self.green, self.blue]
    }
}

/// An owned H x W grid of pixels, indexed `(row, col)`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    height: usize,
    width: usize,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Builds a grid from a row-major flat buffer.  The buffer length
    /// must be exactly `height * width`; anything else never
    /// constructs a grid at all.  Channel values are expected to obey
    /// the 16-bit bound documented on [`Pixel`].
    pub fn from_pixels(
        height: usize,
        width: usize,
        pixels: Vec<Pixel>,
    ) -> Result<Self, CarveError> {
        if pixels.len() != height * width {
            return Err(CarveError::MalformedSource {
                reason: format!(
                    "expected {} pixels for a {}x{} grid, got {}",
                    height * width,
                    height,
                    width,
                    pixels.len()
                ),
            });
        }
        Ok(PixelGrid {
            height,
            width,
            pixels,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    // Keep the index math in a singular location and never, ever mess
    // with it.
    fn pixel_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Checked pixel lookup.  An out-of-bounds coordinate is an error,
    /// never a clamp.
    pub fn get(&self, row: usize, col: usize) -> Result<Pixel, CarveError> {
        if row >= self.height || col >= self.width {
            return Err(CarveError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.pixels[self.pixel_index(row, col)])
    }

    /// The pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &Pixel> {
        self.pixels.iter()
    }

    /// Atomically swaps in a rebuilt buffer that is one (or more)
    /// columns narrower.  The height is unchanged; the old buffer is
    /// released.
    pub fn replace_with_width(&mut self, pixels: Vec<Pixel>, new_width: usize) {
        debug_assert_eq!(pixels.len(), self.height * new_width);
        self.pixels = pixels;
        self.width = new_width;
    }

    /// Atomically swaps in a rebuilt buffer that is one (or more) rows
    /// shorter.  The width is unchanged; the old buffer is released.
    pub fn replace_with_height(&mut self, pixels: Vec<Pixel>, new_height: usize) {
        debug_assert_eq!(pixels.len(), new_height * self.width);
        self.pixels = pixels;
        self.height = new_height;
    }
}

impl Index<(usize, usize)> for PixelGrid {
    type Output = Pixel;

    /// Unchecked addressing for the hot loops, where coordinates are
    /// in bounds by construction.  External callers wanting a bounds
    /// check use `get`.
    fn index(&self, (row, col): (usize, usize)) -> &Pixel {
        let index = self.pixel_index(row, col);
        &self.pixels[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> PixelGrid {
        let pixels = (0..6).map(|v| Pixel::new(v, v * 2, v * 3)).collect();
        PixelGrid::from_pixels(2, 3, pixels).unwrap()
    }

    #[test]
    fn construction_round_trips_every_pixel() {
        let grid = small_grid();
        for row in 0..2 {
            for col in 0..3 {
                let v = (row * 3 + col) as u32;
                assert_eq!(grid.get(row, col).unwrap(), Pixel::new(v, v * 2, v * 3));
            }
        }
    }

    #[test]
    fn wrong_buffer_length_never_constructs() {
        let pixels = vec![Pixel::default(); 5];
        assert!(PixelGrid::from_pixels(2, 3, pixels).is_err());
    }

    #[test]
    fn out_of_bounds_is_an_error_not_a_clamp() {
        let grid = small_grid();
        match grid.get(2, 0) {
            Err(CarveError::OutOfBounds {
                row,
                col,
                height,
                width,
            }) => {
                assert_eq!((row, col, height, width), (2, 0, 2, 3));
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
        assert!(grid.get(0, 3).is_err());
    }

    #[test]
    fn clones_do_not_alias() {
        let grid = small_grid();
        let mut copy = grid.clone();
        copy.replace_with_width(vec![Pixel::default(); 2], 1);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(1, 2).unwrap(), Pixel::new(5, 10, 15));
        assert_eq!(copy.width(), 1);
    }

    #[test]
    fn replace_updates_exactly_one_dimension() {
        let mut grid = small_grid();
        let narrower: Vec<Pixel> = (0..4).map(|v| Pixel::new(v, v, v)).collect();
        grid.replace_with_width(narrower, 2);
        assert_eq!((grid.height(), grid.width()), (2, 2));
        assert_eq!(grid.get(1, 1).unwrap(), Pixel::new(3, 3, 3));
    }
}
