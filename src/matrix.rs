//! Row-major matrix storage for generated test vectors
//!
//! Cells are homogeneous within a matrix: either exact integers or reals
//! that have already been rounded to the domain's decimal granularity.
//! Storage is a flat row-major buffer plus a shape, the same layout the
//! consuming testbench reads back from the artifact files.

use crate::error::{VecForgeError, VecResult};

/// Cell kind of a matrix, mirroring the two value domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Integer,
    Real,
}

/// Flat row-major cell storage.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixData {
    Integer(Vec<i64>),
    Real(Vec<f64>),
}

/// A rows x cols matrix with homogeneous cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: MatrixData,
}

impl Matrix {
    /// Build an integer matrix from a flat row-major buffer.
    pub fn new_integer(rows: usize, cols: usize, cells: Vec<i64>) -> VecResult<Self> {
        Self::check_len(rows, cols, cells.len())?;
        Ok(Matrix {
            rows,
            cols,
            data: MatrixData::Integer(cells),
        })
    }

    /// Build a real matrix from a flat row-major buffer.
    ///
    /// Cells are stored as given: the caller is responsible for having
    /// applied the domain's decimal rounding already.
    pub fn new_real(rows: usize, cols: usize, cells: Vec<f64>) -> VecResult<Self> {
        Self::check_len(rows, cols, cells.len())?;
        Ok(Matrix {
            rows,
            cols,
            data: MatrixData::Real(cells),
        })
    }

    /// Build an integer matrix from nested rows. Rows must be equal length.
    pub fn from_integer_rows(rows: Vec<Vec<i64>>) -> VecResult<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(nrows * ncols);
        for row in &rows {
            if row.len() != ncols {
                return Err(VecForgeError::ShapeMismatch(format!(
                    "ragged matrix: expected {} columns, found a row with {}",
                    ncols,
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }
        Self::new_integer(nrows, ncols, cells)
    }

    /// Build a real matrix from nested rows. Rows must be equal length.
    pub fn from_real_rows(rows: Vec<Vec<f64>>) -> VecResult<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(nrows * ncols);
        for row in &rows {
            if row.len() != ncols {
                return Err(VecForgeError::ShapeMismatch(format!(
                    "ragged matrix: expected {} columns, found a row with {}",
                    ncols,
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }
        Self::new_real(nrows, ncols, cells)
    }

    fn check_len(rows: usize, cols: usize, len: usize) -> VecResult<()> {
        if rows == 0 || cols == 0 {
            return Err(VecForgeError::InvalidConfiguration(format!(
                "matrix dimensions must be nonzero, got {}x{}",
                rows, cols
            )));
        }
        if len != rows * cols {
            return Err(VecForgeError::ShapeMismatch(format!(
                "{}x{} matrix needs {} cells, got {}",
                rows,
                cols,
                rows * cols,
                len
            )));
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn kind(&self) -> CellKind {
        match self.data {
            MatrixData::Integer(_) => CellKind::Integer,
            MatrixData::Real(_) => CellKind::Real,
        }
    }

    pub fn data(&self) -> &MatrixData {
        &self.data
    }

    /// Integer cells in row-major order, or None for a real matrix.
    pub fn integer_cells(&self) -> Option<&[i64]> {
        match &self.data {
            MatrixData::Integer(cells) => Some(cells),
            MatrixData::Real(_) => None,
        }
    }

    /// Real cells in row-major order, or None for an integer matrix.
    pub fn real_cells(&self) -> Option<&[f64]> {
        match &self.data {
            MatrixData::Real(cells) => Some(cells),
            MatrixData::Integer(_) => None,
        }
    }

    /// Row-major flat index of (row, col).
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}
