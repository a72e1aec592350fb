//! Keyboard matrix.
//!
//! A matrix is stored as one [`MatrixRow`] per row with one bit per column,
//! bit `c` of row `r` set when the key at `(r, c)` is pressed.

pub mod bidirectional_matrix;

use crate::timer::Tick;

/// Column bits of one matrix row
pub type MatrixRow = u32;

/// Widest matrix a [`MatrixRow`] can describe
pub const MAX_COL: usize = MatrixRow::BITS as usize;

/// Bit of column `col` in a [`MatrixRow`]
#[inline]
pub const fn col_bit(col: usize) -> MatrixRow {
    1 << col
}

/// MatrixTrait is the trait for keyboard matrix.
///
/// A scan is synchronous: it drives the lines, waits the settle delays and
/// returns once both the raw and the debounced matrix are updated.
pub trait MatrixTrait {
    // Matrix size
    const ROW: usize;
    const COL: usize;

    /// Release every line to its idle level
    fn init(&mut self);

    /// Scan the matrix once, returns whether the raw matrix changed
    fn scan(&mut self, now: Tick) -> bool;

    /// Raw matrix of the last scan, before debouncing
    fn raw(&self) -> &[MatrixRow];

    /// Stable matrix, after debouncing
    fn debounced(&self) -> &[MatrixRow];

    /// Whether the key at `(row, col)` is pressed in the debounced matrix
    fn is_pressed(&self, row: usize, col: usize) -> bool {
        self.debounced().get(row).is_some_and(|r| r & col_bit(col) != 0)
    }
}

/// Raw samples of a dual-direction matrix.
///
/// Each scan phase writes its own region, keys wired in one diode
/// orientation only ever show up in one of them. The merged view is the
/// union of both.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawMatrix<const ROW: usize> {
    row_driven: [MatrixRow; ROW],
    col_driven: [MatrixRow; ROW],
    merged: [MatrixRow; ROW],
}

impl<const ROW: usize> Default for RawMatrix<ROW> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROW: usize> RawMatrix<ROW> {
    pub const fn new() -> Self {
        Self {
            row_driven: [0; ROW],
            col_driven: [0; ROW],
            merged: [0; ROW],
        }
    }

    /// Keys seen while rows were driven
    pub fn row_driven(&self) -> &[MatrixRow; ROW] {
        &self.row_driven
    }

    /// Keys seen while columns were driven
    pub fn col_driven(&self) -> &[MatrixRow; ROW] {
        &self.col_driven
    }

    /// Union of both regions, as of the last [`RawMatrix::merge`]
    pub fn merged(&self) -> &[MatrixRow; ROW] {
        &self.merged
    }

    /// Store a row sampled by the row-driven pass, returns whether it differs
    /// from the stored value. An unchanged row isn't written.
    pub(crate) fn store_row(&mut self, row: usize, value: MatrixRow) -> bool {
        if self.row_driven[row] == value {
            return false;
        }
        self.row_driven[row] = value;
        true
    }

    /// Set or clear one bit sampled by the column-driven pass, returns
    /// whether it differs from the stored bit.
    pub(crate) fn store_col_bit(&mut self, row: usize, col: usize, active: bool) -> bool {
        let current = self.col_driven[row];
        let updated = if active {
            current | col_bit(col)
        } else {
            current & !col_bit(col)
        };
        if updated == current {
            return false;
        }
        self.col_driven[row] = updated;
        true
    }

    pub(crate) fn merge(&mut self) {
        for ((merged, row), col) in self.merged.iter_mut().zip(self.row_driven).zip(self.col_driven) {
            *merged = row | col;
        }
    }
}
