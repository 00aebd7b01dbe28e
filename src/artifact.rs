//! Artifact rendering and the per-test-case file set
//!
//! Each matrix is rendered into synchronized textual encodings of the same
//! logical data: a hex file the testbench loads, a decimal sibling for the
//! real domain, and indexed Verilog initialization statements. Rendering is
//! pure string building so it can be checked byte-for-byte in tests; the
//! writer only creates the per-case directory and persists the strings.
//!
//! Encodings per cell:
//! - integer domain: lowercase minimal-width hex in the matrix files and
//!   `32'h` literals in the init snippet,
//! - real domain: uppercase 8-digit hex of the IEEE-754 binary32 bits, and
//!   a fixed-decimal form in the `_float` sibling file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::config::ValueDomain;
use crate::error::{VecForgeError, VecResult};
use crate::matrix::{Matrix, MatrixData};

/// Output role of a matrix within one test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixRole {
    A,
    B,
    ExpectedC,
}

impl MatrixRole {
    /// File stem under the per-case directory.
    pub fn file_stem(self) -> &'static str {
        match self {
            MatrixRole::A => "matrix_A",
            MatrixRole::B => "matrix_B",
            MatrixRole::ExpectedC => "expected_C",
        }
    }

    /// Verilog array name in the init snippet.
    pub fn array_name(self) -> &'static str {
        match self {
            MatrixRole::A => "A",
            MatrixRole::B => "B",
            MatrixRole::ExpectedC => "C",
        }
    }
}

/// Render a matrix as hex text: one row per line, space-separated,
/// row-major.
///
/// Integer cells use minimal lowercase digits; real cells use the 8-digit
/// uppercase hex of their binary32 bitpattern.
pub fn render_hex(matrix: &Matrix, domain: &ValueDomain) -> VecResult<String> {
    let mut out = String::new();
    match (matrix.data(), domain) {
        (MatrixData::Integer(cells), ValueDomain::Integer { .. }) => {
            for row in cells.chunks(matrix.cols()) {
                let line: Vec<String> = row.iter().map(|v| format!("{:x}", v)).collect();
                out.push_str(&line.join(" "));
                out.push('\n');
            }
        }
        (MatrixData::Real(cells), ValueDomain::Real { .. }) => {
            for row in cells.chunks(matrix.cols()) {
                let mut encoded = Vec::with_capacity(row.len());
                for &value in row {
                    encoded.push(codec::hex(codec::encode(value)?));
                }
                out.push_str(&encoded.join(" "));
                out.push('\n');
            }
        }
        _ => {
            return Err(VecForgeError::DomainMismatch(
                "matrix cell kind disagrees with the configured domain".to_string(),
            ))
        }
    }
    Ok(out)
}

/// Render a matrix as decimal text, same layout as [`render_hex`].
///
/// Integer cells print plainly; real cells print with the domain's fixed
/// number of decimal places so the file mirrors the stored granularity.
pub fn render_decimal(matrix: &Matrix, domain: &ValueDomain) -> VecResult<String> {
    let mut out = String::new();
    match (matrix.data(), domain) {
        (MatrixData::Integer(cells), ValueDomain::Integer { .. }) => {
            for row in cells.chunks(matrix.cols()) {
                let line: Vec<String> = row.iter().map(|v| format!("{}", v)).collect();
                out.push_str(&line.join(" "));
                out.push('\n');
            }
        }
        (MatrixData::Real(cells), ValueDomain::Real { decimals, .. }) => {
            let places = *decimals as usize;
            for row in cells.chunks(matrix.cols()) {
                let line: Vec<String> =
                    row.iter().map(|v| format!("{:.*}", places, v)).collect();
                out.push_str(&line.join(" "));
                out.push('\n');
            }
        }
        _ => {
            return Err(VecForgeError::DomainMismatch(
                "matrix cell kind disagrees with the configured domain".to_string(),
            ))
        }
    }
    Ok(out)
}

/// Render the testbench initialization snippet for operands A and B.
///
/// One indexed assignment per cell in row-major order, grouped by array,
/// wrapped in an `initial begin`/`end` block labeled with the case number.
/// The literal format is fixed by the consuming testbench:
/// `    {array}[{row}][{col}] = 32'h{HEX};`
pub fn render_init_snippet(
    a: &Matrix,
    b: &Matrix,
    domain: &ValueDomain,
    case_index: usize,
) -> VecResult<String> {
    let comment_suffix = if domain.is_real() {
        " (float32 IEEE-754 hex)"
    } else {
        ""
    };

    let mut out = String::new();
    out.push_str(&format!("// Test Case {}\n", case_index));
    out.push_str("initial begin\n");
    out.push_str(&format!("    // Initialize matrix A{}\n", comment_suffix));
    push_assignments(&mut out, a, MatrixRole::A, domain)?;
    out.push('\n');
    out.push_str(&format!("    // Initialize matrix B{}\n", comment_suffix));
    push_assignments(&mut out, b, MatrixRole::B, domain)?;
    out.push_str("end\n");
    Ok(out)
}

fn push_assignments(
    out: &mut String,
    matrix: &Matrix,
    role: MatrixRole,
    domain: &ValueDomain,
) -> VecResult<()> {
    let array = role.array_name();
    match (matrix.data(), domain) {
        (MatrixData::Integer(cells), ValueDomain::Integer { .. }) => {
            for i in 0..matrix.rows() {
                for j in 0..matrix.cols() {
                    let value = cells[matrix.index(i, j)];
                    out.push_str(&format!("    {}[{}][{}] = 32'h{:x};\n", array, i, j, value));
                }
            }
        }
        (MatrixData::Real(cells), ValueDomain::Real { .. }) => {
            for i in 0..matrix.rows() {
                for j in 0..matrix.cols() {
                    let bits = codec::encode(cells[matrix.index(i, j)])?;
                    out.push_str(&format!(
                        "    {}[{}][{}] = 32'h{};\n",
                        array,
                        i,
                        j,
                        codec::hex(bits)
                    ));
                }
            }
        }
        _ => {
            return Err(VecForgeError::DomainMismatch(
                "matrix cell kind disagrees with the configured domain".to_string(),
            ))
        }
    }
    Ok(())
}

/// Writes the artifact file set for one test case.
#[derive(Debug)]
pub struct ArtifactWriter {
    case_dir: PathBuf,
    case_index: usize,
}

impl ArtifactWriter {
    /// Create the per-case directory `<root>/test_<index>`.
    pub fn create(root: &Path, case_index: usize) -> VecResult<Self> {
        let case_dir = root.join(format!("test_{}", case_index));
        fs::create_dir_all(&case_dir).map_err(|err| {
            VecForgeError::SinkUnavailable(format!("{}: {}", case_dir.display(), err))
        })?;
        Ok(ArtifactWriter {
            case_dir,
            case_index,
        })
    }

    pub fn case_dir(&self) -> &Path {
        &self.case_dir
    }

    /// Write the hex file for `matrix` under its role, plus the decimal
    /// `_float` sibling for the real domain.
    pub fn write_matrix(
        &self,
        matrix: &Matrix,
        role: MatrixRole,
        domain: &ValueDomain,
    ) -> VecResult<()> {
        let stem = role.file_stem();
        let hex_text = render_hex(matrix, domain)?;
        self.write_file(&format!("{}.txt", stem), &hex_text)?;

        if domain.is_real() {
            let decimal_text = render_decimal(matrix, domain)?;
            self.write_file(&format!("{}_float.txt", stem), &decimal_text)?;
        }
        Ok(())
    }

    /// Write `test_init.v` covering operands A and B.
    pub fn write_init_snippet(
        &self,
        a: &Matrix,
        b: &Matrix,
        domain: &ValueDomain,
    ) -> VecResult<()> {
        let snippet = render_init_snippet(a, b, domain, self.case_index)?;
        self.write_file("test_init.v", &snippet)
    }

    fn write_file(&self, name: &str, contents: &str) -> VecResult<()> {
        let path = self.case_dir.join(name);
        fs::write(&path, contents).map_err(|err| {
            VecForgeError::SinkUnavailable(format!("{}: {}", path.display(), err))
        })
    }
}
