//! A plain 2-D grid with the few operations weaving needs.

/// Row-major `width x height` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid filled with one value.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Swap the axes: cell `(x, y)` moves to `(y, x)`.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.height, self.width, |x, y| {
            self.cells[x * self.width + y].clone()
        })
    }

    /// Nearest-neighbour resample to `width x height`.
    ///
    /// Each target cell takes the source cell under its centre. Returns
    /// `None` when asked to stretch an empty grid to a non-empty one.
    pub fn resize_nearest(&self, width: usize, height: usize) -> Option<Self> {
        if width * height > 0 && self.cells.is_empty() {
            return None;
        }
        let xs: Vec<usize> = (0..width).map(|x| nearest_index(x, width, self.width)).collect();
        let ys: Vec<usize> = (0..height).map(|y| nearest_index(y, height, self.height)).collect();

        Some(Self::from_fn(width, height, |x, y| {
            self.cells[ys[y] * self.width + xs[x]].clone()
        }))
    }
}

impl<T> Grid<T> {
    /// Create a grid by evaluating `f(x, y)` for every cell, row by row.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Combine two grids of equal size cell by cell.
    ///
    /// Returns `None` if the dimensions differ.
    pub fn zip_with<U, V>(&self, other: &Grid<U>, mut f: impl FnMut(&T, &U) -> V) -> Option<Grid<V>> {
        if self.width != other.width || self.height != other.height {
            return None;
        }
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(a, b)| f(a, b))
            .collect();
        Some(Grid {
            width: self.width,
            height: self.height,
            cells,
        })
    }
}

/// Source index under the centre of target cell `dst`.
///
/// Computed in `u128`, so any `u64` lengths are safe.
pub(crate) fn nearest(dst: u64, dst_len: u64, src_len: u64) -> u64 {
    let src = (2 * dst as u128 + 1) * src_len as u128 / (2 * dst_len as u128);
    (src as u64).min(src_len.saturating_sub(1))
}

fn nearest_index(dst: usize, dst_len: usize, src_len: usize) -> usize {
    nearest(dst as u64, dst_len as u64, src_len as u64) as usize
}
