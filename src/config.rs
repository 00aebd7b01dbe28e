//! Run configuration for test-vector generation
//!
//! A run is fully described by a [`RunConfig`]: how many cases, the fixed
//! M x K x N shape, the value domain cells are drawn from, the output root,
//! and an optional RNG seed for reproducible suites. Configs are plain serde
//! structs so they can be loaded from JSON as well as built from CLI flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{VecForgeError, VecResult};

/// Largest supported decimal rounding for the real domain. Beyond this the
/// power-of-ten scaling itself loses integer precision in f64.
pub const MAX_DECIMAL_PLACES: u32 = 9;

/// Fixed multiplication shape for a whole run: A is M x K, B is K x N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixShape {
    pub m: usize,
    pub k: usize,
    pub n: usize,
}

impl MatrixShape {
    pub fn new(m: usize, k: usize, n: usize) -> Self {
        MatrixShape { m, k, n }
    }

    /// Square M = K = N shape; runs default to 3x3x3.
    pub fn square(dim: usize) -> Self {
        MatrixShape { m: dim, k: dim, n: dim }
    }
}

impl Default for MatrixShape {
    fn default() -> Self {
        MatrixShape::square(3)
    }
}

/// Value domain cells are drawn from.
///
/// The integer and real branches carry their own range and rounding policy;
/// all behavior differences downstream (generation, oracle rounding, hex
/// encoding) are selected by matching on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueDomain {
    /// Uniform integers in [min, max] inclusive. Unsigned only: the
    /// testbench reads the hex files into unsigned data fields.
    Integer { min: i64, max: i64 },
    /// Uniform reals in [min, max], rounded once at generation time to
    /// `decimals` decimal digits.
    Real { min: f64, max: f64, decimals: u32 },
}

impl ValueDomain {
    /// Default integer domain: 4-bit data fields, 0..=15.
    pub fn default_integer() -> Self {
        ValueDomain::Integer { min: 0, max: 15 }
    }

    /// Default real domain: [-10, 10] at 2 decimal places.
    pub fn default_real() -> Self {
        ValueDomain::Real {
            min: -10.0,
            max: 10.0,
            decimals: 2,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, ValueDomain::Real { .. })
    }

    pub fn validate(&self) -> VecResult<()> {
        match *self {
            ValueDomain::Integer { min, max } => {
                if min > max {
                    return Err(VecForgeError::InvalidConfiguration(format!(
                        "integer domain has min {} > max {}",
                        min, max
                    )));
                }
                if min < 0 {
                    return Err(VecForgeError::InvalidConfiguration(format!(
                        "integer domain min {} is negative; testbench data fields are unsigned",
                        min
                    )));
                }
                Ok(())
            }
            ValueDomain::Real { min, max, decimals } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err(VecForgeError::InvalidConfiguration(format!(
                        "real domain bounds must be finite, got [{}, {}]",
                        min, max
                    )));
                }
                if min > max {
                    return Err(VecForgeError::InvalidConfiguration(format!(
                        "real domain has min {} > max {}",
                        min, max
                    )));
                }
                if decimals > MAX_DECIMAL_PLACES {
                    return Err(VecForgeError::InvalidConfiguration(format!(
                        "decimals {} exceeds maximum {}",
                        decimals, MAX_DECIMAL_PLACES
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Round `value` to `decimals` decimal digits, half-way cases to the even
/// neighbor (banker's rounding).
///
/// This is the single rounding policy shared by generation and the oracle:
/// it is applied once per generated cell and once per dot-product sum.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round_ties_even() / scale
}

/// Complete configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of test cases to generate.
    pub case_count: usize,
    /// Fixed shape for every case.
    #[serde(default)]
    pub shape: MatrixShape,
    /// Value domain for every cell.
    pub domain: ValueDomain,
    /// Root directory; each case lands in `<root>/test_<index>`.
    pub output_root: PathBuf,
    /// RNG seed; None draws the seed from OS entropy (non-reproducible).
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            case_count: 100,
            shape: MatrixShape::default(),
            domain: ValueDomain::default_integer(),
            output_root: PathBuf::from("testcases"),
            seed: None,
        }
    }
}

impl RunConfig {
    /// Load a run configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> VecResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&text).map_err(|err| {
            VecForgeError::InvalidConfiguration(format!(
                "failed to parse {}: {}",
                path.display(),
                err
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> VecResult<()> {
        if self.case_count == 0 {
            return Err(VecForgeError::InvalidConfiguration(
                "case_count must be at least 1".to_string(),
            ));
        }
        if self.shape.m == 0 || self.shape.k == 0 || self.shape.n == 0 {
            return Err(VecForgeError::InvalidConfiguration(format!(
                "matrix shape dimensions must be nonzero, got {}x{}x{}",
                self.shape.m, self.shape.k, self.shape.n
            )));
        }
        self.domain.validate()
    }
}
