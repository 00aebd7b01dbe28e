//! VecForge - Hardware Test-Vector Generator
//!
//! Generates deterministic, self-checking test vectors for hardware matrix
//! multiplier and floating-point multiplier designs under verification.
//! Randomized input matrices are paired with software-computed reference
//! products and emitted as synchronized hex, decimal, and Verilog
//! initialization artifacts for the simulation testbench.

pub mod artifact;
pub mod codec;
pub mod config;
pub mod driver;
pub mod error;
pub mod generate;
pub mod logging;
pub mod matrix;
pub mod multiply;
pub mod scalar;

pub use artifact::{ArtifactWriter, MatrixRole};
pub use config::{MatrixShape, RunConfig, ValueDomain};
pub use driver::{RunReport, TestCaseDriver};
pub use error::{ErrorCategory, VecForgeError, VecResult};
pub use generate::MatrixGenerator;
pub use matrix::{CellKind, Matrix, MatrixData};
