//! solovan: 3x9 matrix with keys soldered in both diode directions.

use crate::matrix::bidirectional_matrix::DualPhaseMatrix;

pub const ROW: usize = 3;
pub const COL: usize = 9;

/// The solovan matrix over any set of pins
pub type SolovanMatrix<R, C, D, DB> = DualPhaseMatrix<R, C, D, DB, ROW, COL>;
