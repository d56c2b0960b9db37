use std::ops::{Index, IndexMut};

/// A scratch table with the same shape as the image, one cell per
/// pixel: a raw energy during the energy pass, or a cumulative seam
/// cost during the DP pass.  Built fresh for a single seam query and
/// dropped on return; nothing in here survives between queries.
#[derive(Debug)]
pub struct CostMap<T: Default + Copy> {
    pub height: usize,
    pub width: usize,
    cells: Vec<T>,
}

impl<T: Default + Copy> CostMap<T> {
    /// A new table with every cell at its type's default.
    pub fn new(height: usize, width: usize) -> Self {
        CostMap {
            height,
            width,
            cells: vec![T::default(); height * width],
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn cell_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl<T: Default + Copy> Index<(usize, usize)> for CostMap<T> {
    type Output = T;

    /// A convenience addressing mode for getting values.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        let index = self.cell_index(row, col);
        &self.cells[index]
    }
}

impl<T: Default + Copy> IndexMut<(usize, usize)> for CostMap<T> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let index = self.cell_index(row, col);
        &mut self.cells[index]
    }
}
