//! Reference matrix multiplication (the oracle)
//!
//! Computes the product the hardware under verification is expected to
//! produce. Integer products are exact: cells accumulate in i128 so no
//! intermediate ever wraps, and a result outside i64 is surfaced as an
//! error rather than truncated. Real products accumulate at full f64
//! precision and are rounded once per cell to the domain's decimal places,
//! the same policy the generator applied to the inputs. Non-finite values
//! flow through arithmetic untouched, so inf * 0.0 yields a NaN cell.

use crate::config::{round_to_decimals, ValueDomain};
use crate::error::{VecForgeError, VecResult};
use crate::matrix::{Matrix, MatrixData};

/// Compute C = A x B under the run's value domain.
///
/// A must be M x K and B must be K x N; anything else is a
/// [`VecForgeError::ShapeMismatch`], which is fatal for the whole run since
/// shape is fixed per run.
pub fn multiply(a: &Matrix, b: &Matrix, domain: &ValueDomain) -> VecResult<Matrix> {
    if a.cols() != b.rows() {
        return Err(VecForgeError::ShapeMismatch(format!(
            "cannot multiply {}x{} by {}x{}: columns(A) != rows(B)",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }

    match (a.data(), b.data(), domain) {
        (MatrixData::Integer(lhs), MatrixData::Integer(rhs), ValueDomain::Integer { .. }) => {
            multiply_integer(lhs, rhs, a.rows(), a.cols(), b.cols())
        }
        (MatrixData::Real(lhs), MatrixData::Real(rhs), ValueDomain::Real { decimals, .. }) => {
            multiply_real(lhs, rhs, a.rows(), a.cols(), b.cols(), *decimals)
        }
        _ => Err(VecForgeError::DomainMismatch(
            "operand cell kinds disagree with each other or with the configured domain"
                .to_string(),
        )),
    }
}

fn multiply_integer(
    lhs: &[i64],
    rhs: &[i64],
    m: usize,
    k: usize,
    n: usize,
) -> VecResult<Matrix> {
    let mut cells = Vec::with_capacity(m * n);
    for i in 0..m {
        for j in 0..n {
            let mut acc: i128 = 0;
            for x in 0..k {
                acc += i128::from(lhs[i * k + x]) * i128::from(rhs[x * n + j]);
            }
            let cell = i64::try_from(acc).map_err(|_| {
                VecForgeError::AccumulatorOverflow(format!(
                    "C[{}][{}] = {} does not fit in 64 bits",
                    i, j, acc
                ))
            })?;
            cells.push(cell);
        }
    }
    Matrix::new_integer(m, n, cells)
}

fn multiply_real(
    lhs: &[f64],
    rhs: &[f64],
    m: usize,
    k: usize,
    n: usize,
    decimals: u32,
) -> VecResult<Matrix> {
    let mut cells = Vec::with_capacity(m * n);
    for i in 0..m {
        for j in 0..n {
            let mut acc = 0.0f64;
            for x in 0..k {
                acc += lhs[i * k + x] * rhs[x * n + j];
            }
            // One rounding of the full-precision sum. NaN and infinities
            // pass through round_to_decimals unchanged.
            cells.push(round_to_decimals(acc, decimals));
        }
    }
    Matrix::new_real(m, n, cells)
}
