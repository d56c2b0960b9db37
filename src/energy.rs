// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image and find its cheapest seams.
//!
//! The energy metric is the dual-gradient one, with wrap-around: every
//! pixel, edges included, reads a left/right and an up/down neighbor
//! pair, with column -1 mapping to column W-1, column W to column 0,
//! and the rows treated symmetrically.  The cumulative tables do NOT
//! wrap: a seam cannot leave the image on one edge and re-enter on the
//! other, so the DP boundary candidates are guarded with `MAX_ENERGY`
//! instead.

use crate::costmap::CostMap;
use crate::cq;
use crate::grid::{Pixel, PixelGrid};

/// The DP boundary guard.  Larger than any achievable seam cost, and
/// only ever compared against, never added to, so it cannot overflow.
pub const MAX_ENERGY: u64 = u64::MAX;

// (Pixel, Pixel) -> Energy
#[inline]
fn energy_of_pair(p1: Pixel, p2: Pixel) -> u64 {
    p1.channels()
        .iter()
        .zip(p2.channels().iter())
        .map(|(&a, &b)| {
            let gap = i64::from(a) - i64::from(b);
            (gap * gap) as u64
        })
        .sum()
}

/// The column (horizontal-gradient) term of a pixel's energy: the sum
/// of squared channel differences between its right and left
/// neighbors, wrapping around the vertical edges.
pub fn col_energy(grid: &PixelGrid, row: usize, col: usize) -> u64 {
    let mw = grid.width() - 1;
    let left = grid[(row, cq!(col == 0, mw, col - 1))];
    let right = grid[(row, cq!(col == mw, 0, col + 1))];
    energy_of_pair(left, right)
}

/// The row (vertical-gradient) term: the sum of squared channel
/// differences between the pixels below and above, wrapping around the
/// horizontal edges.
pub fn row_energy(grid: &PixelGrid, row: usize, col: usize) -> u64 {
    let mh = grid.height() - 1;
    let top = grid[(cq!(row == 0, mh, row - 1), col)];
    let bottom = grid[(cq!(row == mh, 0, row + 1), col)];
    energy_of_pair(top, bottom)
}

/// The energy of a single pixel.  Wrap-around means this is defined
/// for every in-bounds coordinate; there is no separate border case.
/// The coordinate must be in bounds.
pub fn pixel_energy(grid: &PixelGrid, row: usize, col: usize) -> u64 {
    col_energy(grid, row, col) + row_energy(grid, row, col)
}

/// Compute the energy of every pixel in the grid.
pub fn calculate_energy(grid: &PixelGrid) -> CostMap<u64> {
    let mut emap = CostMap::new(grid.height(), grid.width());
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            emap[(row, col)] = pixel_energy(grid, row, col);
        }
    }
    emap
}

// The tie-break contract, applied identically in both orientations:
// the straight continuation wins an outright tie, and between the two
// diagonal candidates the smaller index wins.  Returns the step to
// take: -1 toward the smaller index, 0 straight, 1 toward the larger.
fn step_toward_minimum(straight: u64, smaller: u64, larger: u64) -> isize {
    if smaller < straight && smaller <= larger {
        -1
    } else if larger < straight && larger < smaller {
        1
    } else {
        0
    }
}

/// Given an energy map, return the list of column indices that, when
/// zipped with the range `(0..height)`, give the coordinates of the
/// cheapest top-to-bottom seam.  The map must be at least 1x1.
pub fn energy_to_vertical_seam(energy: &CostMap<u64>) -> Vec<usize> {
    let (height, width) = (energy.height, energy.width);
    debug_assert!(height > 0 && width > 0, "empty energy map");
    let (mh, mw) = (height - 1, width - 1);
    let mut cost: CostMap<u64> = CostMap::new(height, width);

    // Seed the bottom row with its native energies.
    for col in 0..width {
        cost[(mh, col)] = energy[(mh, col)];
    }

    // Working upward, each cell pays its own energy plus the cheapest
    // of the three cells it could continue into one row down.  The
    // grid edge is a wall here, not a wrap.
    for row in (0..mh).rev() {
        for col in 0..width {
            let left = cq!(col == 0, MAX_ENERGY, cost[(row + 1, col - 1)]);
            let middle = cost[(row + 1, col)];
            let right = cq!(col == mw, MAX_ENERGY, cost[(row + 1, col + 1)]);
            cost[(row, col)] = energy[(row, col)] + left.min(middle).min(right);
        }
    }

    // Start from the cheapest cell in the top row.  min_by_key keeps
    // the first minimum, so ties go to the leftmost column.
    let start = (0..width).min_by_key(|&col| cost[(0, col)]).unwrap();

    // Trace downward, at each row stepping to the cheapest of the
    // three adjacent cells.
    let mut seam = Vec::with_capacity(height);
    seam.push(start);
    for row in 1..height {
        let col = seam[row - 1];
        let smaller = cq!(col == 0, MAX_ENERGY, cost[(row, col - 1)]);
        let straight = cost[(row, col)];
        let larger = cq!(col == mw, MAX_ENERGY, cost[(row, col + 1)]);
        let step = step_toward_minimum(straight, smaller, larger);
        seam.push((col as isize + step) as usize);
    }
    seam
}

/// Given an energy map, return the list of row indices that, when
/// zipped with the range `(0..width)`, give the coordinates of the
/// cheapest left-to-right seam.  The exact mirror of the vertical
/// case.  The map must be at least 1x1.
pub fn energy_to_horizontal_seam(energy: &CostMap<u64>) -> Vec<usize> {
    let (height, width) = (energy.height, energy.width);
    debug_assert!(height > 0 && width > 0, "empty energy map");
    let (mh, mw) = (height - 1, width - 1);
    let mut cost: CostMap<u64> = CostMap::new(height, width);

    // Seed the rightmost column with its native energies.
    for row in 0..height {
        cost[(row, mw)] = energy[(row, mw)];
    }

    // Propagate leftward: each cell pays its own energy plus the
    // cheapest of the three cells one column to its right.
    for col in (0..mw).rev() {
        for row in 0..height {
            let upper = cq!(row == 0, MAX_ENERGY, cost[(row - 1, col + 1)]);
            let middle = cost[(row, col + 1)];
            let lower = cq!(row == mh, MAX_ENERGY, cost[(row + 1, col + 1)]);
            cost[(row, col)] = energy[(row, col)] + upper.min(middle).min(lower);
        }
    }

    // Cheapest cell in the leftmost column; ties go to the topmost row.
    let start = (0..height).min_by_key(|&row| cost[(row, 0)]).unwrap();

    // Trace rightward under the same tie-break order.
    let mut seam = Vec::with_capacity(width);
    seam.push(start);
    for col in 1..width {
        let row = seam[col - 1];
        let smaller = cq!(row == 0, MAX_ENERGY, cost[(row - 1, col)]);
        let straight = cost[(row, col)];
        let larger = cq!(row == mh, MAX_ENERGY, cost[(row + 1, col)]);
        let step = step_toward_minimum(straight, smaller, larger);
        seam.push((row as isize + step) as usize);
    }
    seam
}
