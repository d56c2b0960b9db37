// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! A `SeamCarver` owns one grid and answers seam queries against its
//! current state.  Every query recomputes the energy map from scratch;
//! a discovered seam is only valid until the next mutation, so the
//! removal operations always pair a fresh discovery with the removal
//! in one call.

use crate::cq;
use crate::energy::{
    calculate_energy, energy_to_horizontal_seam, energy_to_vertical_seam, pixel_energy,
};
use crate::errors::CarveError;
use crate::grid::PixelGrid;

// This is silly and basically a reimplementation of `bool` and `not`,
// but it makes it much clearer in the code what I'm doing.  And I
// like that.

#[derive(PartialEq, Copy, Clone)]
enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        if self == Carve::Width {
            Carve::Height
        } else {
            Carve::Width
        }
    }
}

/// A struct for holding the image being carved.
#[derive(Debug, Default, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    /// Wraps a grid.  The carver owns it exclusively from here on;
    /// clone the grid first if the original must survive.
    pub fn new(grid: PixelGrid) -> Self {
        SeamCarver { grid }
    }

    /// The current grid, by reference.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Consumes the carver and hands the grid back.
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The energy of the pixel at `(row, col)` in the current grid,
    /// recomputed on every call.
    pub fn energy(&self, row: usize, col: usize) -> Result<u64, CarveError> {
        // get() does the bounds check.
        self.grid.get(row, col)?;
        Ok(pixel_energy(&self.grid, row, col))
    }

    fn guard_width(&self) -> Result<(), CarveError> {
        cq!(
            self.width() <= 1,
            Err(CarveError::DegenerateDimension { axis: "width" }),
            Ok(())
        )
    }

    fn guard_height(&self) -> Result<(), CarveError> {
        cq!(
            self.height() <= 1,
            Err(CarveError::DegenerateDimension { axis: "height" }),
            Ok(())
        )
    }

    /// Finds the cheapest top-to-bottom seam in the current grid
    /// without removing it: one column index per row.
    pub fn vertical_seam(&self) -> Result<Vec<usize>, CarveError> {
        self.guard_width()?;
        Ok(energy_to_vertical_seam(&calculate_energy(&self.grid)))
    }

    /// Finds the cheapest left-to-right seam in the current grid
    /// without removing it: one row index per column.
    pub fn horizontal_seam(&self) -> Result<Vec<usize>, CarveError> {
        self.guard_height()?;
        Ok(energy_to_horizontal_seam(&calculate_energy(&self.grid)))
    }

    /// Finds and removes the cheapest vertical seam.  The grid ends up
    /// one column narrower; the removed seam is returned.
    pub fn remove_vertical_seam(&mut self) -> Result<Vec<usize>, CarveError> {
        let seam = self.vertical_seam()?;
        let (height, width) = (self.height(), self.width());
        let mut pixels = Vec::with_capacity(height * (width - 1));
        for row in 0..height {
            for col in 0..width {
                if col != seam[row] {
                    pixels.push(self.grid[(row, col)]);
                }
            }
        }
        self.grid.replace_with_width(pixels, width - 1);
        Ok(seam)
    }

    /// Finds and removes the cheapest horizontal seam.  The grid ends
    /// up one row shorter; the removed seam is returned.
    pub fn remove_horizontal_seam(&mut self) -> Result<Vec<usize>, CarveError> {
        let seam = self.horizontal_seam()?;
        let (height, width) = (self.height(), self.width());
        // Row-major rebuild: below the seam every pixel shifts up one.
        let mut pixels = Vec::with_capacity((height - 1) * width);
        for row in 0..height - 1 {
            for col in 0..width {
                let source_row = cq!(row < seam[col], row, row + 1);
                pixels.push(self.grid[(source_row, col)]);
            }
        }
        self.grid.replace_with_height(pixels, height - 1);
        Ok(seam)
    }

    /// Given a desired new width and height, repeatedly carve seams
    /// out of the image, alternating directions while both dimensions
    /// still have to shrink.  Seam carving cannot upscale.
    pub fn carve_to(&mut self, new_width: usize, new_height: usize) -> Result<(), CarveError> {
        if new_width > self.width() || new_height > self.height() {
            return Err(CarveError::Upscale {
                target_width: new_width,
                target_height: new_height,
                width: self.width(),
                height: self.height(),
            });
        }
        if new_width == 0 || new_height == 0 {
            return Err(CarveError::DegenerateDimension {
                axis: cq!(new_width == 0, "width", "height"),
            });
        }

        let mut direction = Carve::Width;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.remove_vertical_seam()?;
        }
        while self.height() > new_height {
            self.remove_horizontal_seam()?;
        }
        Ok(())
    }

    fn carve_once(&mut self, direction: Carve) -> Result<(), CarveError> {
        if direction == Carve::Height {
            self.remove_horizontal_seam()?;
        } else {
            self.remove_vertical_seam()?;
        }
        Ok(())
    }
}

impl From<&PixelGrid> for SeamCarver {
    /// Deep-copies the grid; the caller keeps the original.
    fn from(grid: &PixelGrid) -> Self {
        SeamCarver::new(grid.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Pixel;

    fn gray_grid(height: usize, width: usize, values: &[u32]) -> PixelGrid {
        let pixels = values.iter().map(|&v| Pixel::new(v, v, v)).collect();
        PixelGrid::from_pixels(height, width, pixels).unwrap()
    }

    const RAMP: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

    #[test]
    fn removing_a_vertical_seam_drops_one_column() {
        // The ramp's cheapest vertical seam hugs the left edge.
        let mut carver = SeamCarver::new(gray_grid(3, 3, &RAMP));
        let seam = carver.remove_vertical_seam().unwrap();
        assert_eq!(seam, [0, 0, 0]);
        assert_eq!((carver.height(), carver.width()), (3, 2));
        let survivors: Vec<u32> = carver.grid().pixels().map(|p| p.red).collect();
        assert_eq!(survivors, [2, 3, 5, 6, 8, 9]);
    }

    #[test]
    fn removing_a_horizontal_seam_drops_one_row() {
        let mut carver = SeamCarver::new(gray_grid(3, 3, &RAMP));
        let seam = carver.remove_horizontal_seam().unwrap();
        assert_eq!(seam, [0, 0, 0]);
        assert_eq!((carver.height(), carver.width()), (2, 3));
        let survivors: Vec<u32> = carver.grid().pixels().map(|p| p.red).collect();
        assert_eq!(survivors, [4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn carving_exhausts_the_width_then_fails() {
        // W-1 removals are fine; the Wth hits the degenerate guard.
        let mut carver = SeamCarver::new(gray_grid(2, 4, &[1, 2, 3, 4, 5, 6, 7, 8]));
        for expected_width in (1..4).rev() {
            carver.remove_vertical_seam().unwrap();
            assert_eq!(carver.width(), expected_width);
        }
        match carver.remove_vertical_seam() {
            Err(CarveError::DegenerateDimension { axis }) => assert_eq!(axis, "width"),
            other => panic!("expected DegenerateDimension, got {:?}", other),
        }
        assert_eq!(carver.height(), 2);
    }

    #[test]
    fn single_row_allows_vertical_but_not_horizontal_carving() {
        let mut carver = SeamCarver::new(gray_grid(1, 3, &[10, 20, 40]));
        assert!(carver.vertical_seam().is_ok());
        match carver.remove_horizontal_seam() {
            Err(CarveError::DegenerateDimension { axis }) => assert_eq!(axis, "height"),
            other => panic!("expected DegenerateDimension, got {:?}", other),
        }
        assert_eq!((carver.height(), carver.width()), (1, 3));
    }

    #[test]
    fn energy_accessor_checks_bounds() {
        let carver = SeamCarver::new(gray_grid(3, 3, &RAMP));
        assert_eq!(carver.energy(1, 1).unwrap(), 120);
        assert!(carver.energy(3, 0).is_err());
        assert!(carver.energy(0, 3).is_err());
    }

    #[test]
    fn carve_to_reaches_the_requested_size() {
        let values: Vec<u32> = (0..20).collect();
        let mut carver = SeamCarver::new(gray_grid(4, 5, &values));
        carver.carve_to(2, 3).unwrap();
        assert_eq!((carver.height(), carver.width()), (3, 2));
    }

    #[test]
    fn carve_to_refuses_to_upscale() {
        let mut carver = SeamCarver::new(gray_grid(3, 3, &RAMP));
        match carver.carve_to(4, 3) {
            Err(CarveError::Upscale { target_width, .. }) => assert_eq!(target_width, 4),
            other => panic!("expected Upscale, got {:?}", other),
        }
        assert!(carver.carve_to(1, 0).is_err());
    }

    #[test]
    fn cloned_carvers_do_not_share_a_grid() {
        let original = SeamCarver::from(&gray_grid(3, 3, &RAMP));
        let mut copy = original.clone();
        copy.remove_vertical_seam().unwrap();
        assert_eq!(original.width(), 3);
        assert_eq!(copy.width(), 2);
    }
}
