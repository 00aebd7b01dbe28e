//! End-to-end driver tests
//!
//! Full runs into a temporary directory: per-case file sets, oracle
//! consistency between the written artifacts, and seed reproducibility.

use std::fs;
use std::path::Path;

use vecforge::config::{MatrixShape, RunConfig, ValueDomain};
use vecforge::driver::TestCaseDriver;

fn run_config(root: &Path, domain: ValueDomain, cases: usize, seed: u64) -> RunConfig {
    RunConfig {
        case_count: cases,
        shape: MatrixShape::new(2, 3, 2),
        domain,
        output_root: root.to_path_buf(),
        seed: Some(seed),
    }
}

fn read_case_file(root: &Path, case: usize, name: &str) -> String {
    fs::read_to_string(root.join(format!("test_{}", case)).join(name)).unwrap()
}

#[test]
fn integer_run_writes_complete_file_sets() {
    let tmp = tempfile::tempdir().unwrap();
    let config = run_config(tmp.path(), ValueDomain::default_integer(), 3, 11);
    let report = TestCaseDriver::new(config).unwrap().run().unwrap();
    assert_eq!(report.cases_written, 3);

    for case in 0..3 {
        let dir = tmp.path().join(format!("test_{}", case));
        assert!(dir.join("matrix_A.txt").exists());
        assert!(dir.join("matrix_B.txt").exists());
        assert!(dir.join("expected_C.txt").exists());
        assert!(dir.join("test_init.v").exists());
        assert!(!dir.join("matrix_A_float.txt").exists());
    }
}

#[test]
fn real_run_writes_float_siblings() {
    let tmp = tempfile::tempdir().unwrap();
    let config = run_config(tmp.path(), ValueDomain::default_real(), 2, 11);
    TestCaseDriver::new(config).unwrap().run().unwrap();

    for case in 0..2 {
        let dir = tmp.path().join(format!("test_{}", case));
        for stem in ["matrix_A", "matrix_B", "expected_C"] {
            assert!(dir.join(format!("{}.txt", stem)).exists());
            assert!(dir.join(format!("{}_float.txt", stem)).exists());
        }
        assert!(dir.join("test_init.v").exists());
    }
}

#[test]
fn written_artifacts_are_shape_consistent() {
    let tmp = tempfile::tempdir().unwrap();
    // 2x3 * 3x2 -> 2x2
    let config = run_config(tmp.path(), ValueDomain::default_integer(), 1, 5);
    TestCaseDriver::new(config).unwrap().run().unwrap();

    let a = read_case_file(tmp.path(), 0, "matrix_A.txt");
    let b = read_case_file(tmp.path(), 0, "matrix_B.txt");
    let c = read_case_file(tmp.path(), 0, "expected_C.txt");

    assert_eq!(a.lines().count(), 2);
    assert!(a.lines().all(|l| l.split(' ').count() == 3));
    assert_eq!(b.lines().count(), 3);
    assert!(b.lines().all(|l| l.split(' ').count() == 2));
    assert_eq!(c.lines().count(), 2);
    assert!(c.lines().all(|l| l.split(' ').count() == 2));
}

#[test]
fn expected_c_matches_oracle_recomputed_from_files() {
    let tmp = tempfile::tempdir().unwrap();
    let config = run_config(tmp.path(), ValueDomain::default_integer(), 1, 99);
    TestCaseDriver::new(config).unwrap().run().unwrap();

    let parse = |text: &str| -> Vec<Vec<i64>> {
        text.lines()
            .map(|l| {
                l.split(' ')
                    .map(|tok| i64::from_str_radix(tok, 16).unwrap())
                    .collect()
            })
            .collect()
    };
    let a = parse(&read_case_file(tmp.path(), 0, "matrix_A.txt"));
    let b = parse(&read_case_file(tmp.path(), 0, "matrix_B.txt"));
    let c = parse(&read_case_file(tmp.path(), 0, "expected_C.txt"));

    for i in 0..2 {
        for j in 0..2 {
            let expected: i64 = (0..3).map(|k| a[i][k] * b[k][j]).sum();
            assert_eq!(c[i][j], expected);
        }
    }
}

#[test]
fn same_seed_reproduces_identical_trees() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let domain = ValueDomain::default_real();

    TestCaseDriver::new(run_config(first.path(), domain, 4, 1234))
        .unwrap()
        .run()
        .unwrap();
    TestCaseDriver::new(run_config(second.path(), domain, 4, 1234))
        .unwrap()
        .run()
        .unwrap();

    for case in 0..4 {
        for name in [
            "matrix_A.txt",
            "matrix_B.txt",
            "expected_C.txt",
            "matrix_A_float.txt",
            "test_init.v",
        ] {
            assert_eq!(
                read_case_file(first.path(), case, name),
                read_case_file(second.path(), case, name),
                "artifact {} diverged for case {}",
                name,
                case
            );
        }
    }
}

#[test]
fn different_seeds_produce_different_suites() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let domain = ValueDomain::default_integer();

    TestCaseDriver::new(run_config(first.path(), domain, 1, 1))
        .unwrap()
        .run()
        .unwrap();
    TestCaseDriver::new(run_config(second.path(), domain, 1, 2))
        .unwrap()
        .run()
        .unwrap();

    let a1 = read_case_file(first.path(), 0, "matrix_A.txt");
    let b1 = read_case_file(first.path(), 0, "matrix_B.txt");
    let a2 = read_case_file(second.path(), 0, "matrix_A.txt");
    let b2 = read_case_file(second.path(), 0, "matrix_B.txt");
    assert!(a1 != a2 || b1 != b2);
}

#[test]
fn case_count_is_honored_exactly() {
    let tmp = tempfile::tempdir().unwrap();
    let config = run_config(tmp.path(), ValueDomain::default_integer(), 7, 0);
    let report = TestCaseDriver::new(config).unwrap().run().unwrap();
    assert_eq!(report.cases_written, 7);

    let case_dirs = fs::read_dir(tmp.path())
        .unwrap()
        .filter(|entry| entry.as_ref().unwrap().path().is_dir())
        .count();
    assert_eq!(case_dirs, 7);
}
