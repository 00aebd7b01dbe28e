//! Test-case orchestration
//!
//! One driver run produces `case_count` independent test cases, strictly
//! sequentially: generate A and B, compute the expected product, write the
//! artifact set under `test_<index>`. The only state crossing case
//! boundaries is the RNG stream. Any error aborts the run; partially
//! written cases are left on disk since a rerun regenerates everything.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::artifact::{ArtifactWriter, MatrixRole};
use crate::config::RunConfig;
use crate::error::{VecForgeError, VecResult};
use crate::generate::MatrixGenerator;
use crate::multiply;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub cases_written: usize,
    pub output_root: PathBuf,
}

/// Drives test-case generation for one run configuration.
#[derive(Debug)]
pub struct TestCaseDriver {
    config: RunConfig,
    generator: MatrixGenerator,
}

impl TestCaseDriver {
    /// Validate the configuration and build the generator (seeded when the
    /// config carries a seed, OS entropy otherwise).
    pub fn new(config: RunConfig) -> VecResult<Self> {
        config.validate()?;
        let generator = match config.seed {
            Some(seed) => MatrixGenerator::from_seed(seed),
            None => MatrixGenerator::from_entropy(),
        };
        Ok(TestCaseDriver { config, generator })
    }

    /// Generate and persist all test cases.
    pub fn run(&mut self) -> VecResult<RunReport> {
        let shape = self.config.shape;
        let domain = self.config.domain;
        let root = self.config.output_root.clone();

        std::fs::create_dir_all(&root).map_err(|err| {
            VecForgeError::SinkUnavailable(format!("{}: {}", root.display(), err))
        })?;

        info!(
            cases = self.config.case_count,
            m = shape.m,
            k = shape.k,
            n = shape.n,
            root = %root.display(),
            "generating test cases"
        );

        for case_index in 0..self.config.case_count {
            let a = self.generator.generate(shape.m, shape.k, &domain)?;
            let b = self.generator.generate(shape.k, shape.n, &domain)?;
            let expected_c = multiply::multiply(&a, &b, &domain)?;

            let writer = ArtifactWriter::create(&root, case_index)?;
            writer.write_matrix(&a, MatrixRole::A, &domain)?;
            writer.write_matrix(&b, MatrixRole::B, &domain)?;
            writer.write_matrix(&expected_c, MatrixRole::ExpectedC, &domain)?;
            writer.write_init_snippet(&a, &b, &domain)?;

            debug!(case = case_index, dir = %writer.case_dir().display(), "wrote test case");
        }

        info!(cases = self.config.case_count, "run complete");
        Ok(RunReport {
            cases_written: self.config.case_count,
            output_root: root,
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }
}
