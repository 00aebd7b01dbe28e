//! Random matrix generation
//!
//! The generator owns an explicit ChaCha8 RNG instance. Seeded construction
//! gives byte-reproducible suites; `from_entropy` draws from OS entropy for
//! one-off runs. All cases in a run draw from the same stream in sequence,
//! so a seed pins the entire suite, not just one matrix.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{round_to_decimals, ValueDomain};
use crate::error::{VecForgeError, VecResult};
use crate::matrix::Matrix;

/// Produces random matrices over a configured value domain.
#[derive(Debug)]
pub struct MatrixGenerator {
    rng: ChaCha8Rng,
}

impl MatrixGenerator {
    /// Deterministic generator: the same seed yields the same suite.
    pub fn from_seed(seed: u64) -> Self {
        MatrixGenerator {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        MatrixGenerator {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate a rows x cols matrix with independent uniform cells.
    ///
    /// Integer domain: uniform in [min, max] inclusive. Real domain:
    /// uniform in [min, max], rounded to the domain's decimal places here,
    /// at generation time. Downstream stages reuse the rounded value and
    /// never re-round a higher-precision intermediate.
    pub fn generate(
        &mut self,
        rows: usize,
        cols: usize,
        domain: &ValueDomain,
    ) -> VecResult<Matrix> {
        if rows == 0 || cols == 0 {
            return Err(VecForgeError::InvalidConfiguration(format!(
                "cannot generate a {}x{} matrix",
                rows, cols
            )));
        }
        domain.validate()?;

        let count = rows * cols;
        match *domain {
            ValueDomain::Integer { min, max } => {
                let mut cells = Vec::with_capacity(count);
                for _ in 0..count {
                    cells.push(self.rng.gen_range(min..=max));
                }
                Matrix::new_integer(rows, cols, cells)
            }
            ValueDomain::Real { min, max, decimals } => {
                let mut cells = Vec::with_capacity(count);
                for _ in 0..count {
                    let raw: f64 = self.rng.gen_range(min..=max);
                    cells.push(round_to_decimals(raw, decimals));
                }
                Matrix::new_real(rows, cols, cells)
            }
        }
    }
}
