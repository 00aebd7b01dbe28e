//! Directed test vectors for a scalar floating-point multiplier
//!
//! Alongside the randomized matrix suites, the verification flow uses a
//! small directed set of scalar multiplications exercising the binary32
//! corner cases: sign combinations, zero, infinities, NaN, and small
//! magnitudes. Each case renders as a `run_test(...)` call carrying the
//! two operand bitpatterns and the expected product bitpattern.
//!
//! The expected product is computed on the operands' binary32 values, so
//! rounding and special-value semantics match the device under test:
//! inf * 0.0 produces a NaN pattern, never an error.

use std::fs;
use std::path::Path;

use crate::codec;
use crate::error::{VecForgeError, VecResult};

/// One scalar multiplication case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarCase {
    pub a: f64,
    pub b: f64,
}

impl ScalarCase {
    pub fn new(a: f64, b: f64) -> Self {
        ScalarCase { a, b }
    }
}

/// Render one case as a comment line plus a `run_test` call:
///
/// ```text
/// // 2.0 * 3.0 = 6.0
/// run_test(32'h40000000, 32'h40400000, 32'h40C00000);
/// ```
pub fn render_run_test(case: &ScalarCase) -> VecResult<String> {
    let a_bits = codec::encode(case.a)?;
    let b_bits = codec::encode(case.b)?;
    // Multiply the binary32 values the testbench will actually feed in.
    let product = f64::from(f32::from_bits(a_bits) * f32::from_bits(b_bits));
    let r_bits = codec::encode(product)?;

    Ok(format!(
        "// {:?} * {:?} = {:?}\nrun_test(32'h{}, 32'h{}, 32'h{});\n\n",
        case.a,
        case.b,
        product,
        codec::hex(a_bits),
        codec::hex(b_bits),
        codec::hex(r_bits)
    ))
}

/// Render a whole suite into one snippet.
pub fn render_suite(cases: &[ScalarCase]) -> VecResult<String> {
    let mut out = String::new();
    for case in cases {
        out.push_str(&render_run_test(case)?);
    }
    Ok(out)
}

/// Write a suite to `path`.
pub fn write_suite(path: &Path, cases: &[ScalarCase]) -> VecResult<()> {
    let text = render_suite(cases)?;
    fs::write(path, text)
        .map_err(|err| VecForgeError::SinkUnavailable(format!("{}: {}", path.display(), err)))
}

/// The directed corner-case suite for the scalar multiplier.
pub fn directed_suite() -> Vec<ScalarCase> {
    vec![
        ScalarCase::new(2.0, 3.0),
        ScalarCase::new(-2.0, 3.0),
        ScalarCase::new(0.0, 123.456),
        ScalarCase::new(f64::INFINITY, 2.0),
        ScalarCase::new(f64::INFINITY, -2.0),
        ScalarCase::new(f64::NAN, 2.0),
        ScalarCase::new(f64::INFINITY, 0.0),
        ScalarCase::new(1.5, -4.25),
        ScalarCase::new(10.24, -4.25),
        ScalarCase::new(0.000_000_001, -10.888_888_88),
    ]
}
