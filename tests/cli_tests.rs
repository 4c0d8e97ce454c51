//! End-to-end CLI tests over temporary FASTA fixtures.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn fasta_file(content: &[u8]) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
    temp.write_all(content).unwrap();
    temp.flush().unwrap();
    temp
}

fn seed_search() -> Command {
    Command::cargo_bin("seed-search").unwrap()
}

#[test]
fn search_suffix_array_text_output() {
    let reference = fasta_file(b">chr1\nGATTACA\n");
    let reads = fasta_file(b">r1\nA\n>r2\nCCC\n");

    seed_search()
        .args(["search", "--reference"])
        .arg(reference.path())
        .arg("--reads")
        .arg(reads.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("r1: 3 match(es) at 1, 3, 5"))
        .stdout(predicate::str::contains("r2: no matches"));
}

#[test]
fn search_naive_engine() {
    let reference = fasta_file(b">chr1\nATCGATCG\n");
    let reads = fasta_file(b">r1\nATCG\n");

    seed_search()
        .args(["search", "--engine", "naive", "--reference"])
        .arg(reference.path())
        .arg("--reads")
        .arg(reads.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("r1: 2 match(es) at 0, 4"));
}

#[test]
fn search_naive_overlapping_flag() {
    let reference = fasta_file(b">runs\nAAAA\n");
    let reads = fasta_file(b">r1\nAA\n");

    seed_search()
        .args(["search", "--engine", "naive", "--overlapping", "--reference"])
        .arg(reference.path())
        .arg("--reads")
        .arg(reads.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("r1: 3 match(es) at 0, 1, 2"));
}

#[test]
fn search_limit_truncates() {
    let reference = fasta_file(b">chr1\nGATTACA\n");
    let reads = fasta_file(b">r1\nG\n>r2\nA\n>r3\nT\n>r4\nC\n>r5\nGA\n");

    seed_search()
        .args(["search", "--limit", "3", "--format", "tsv", "--reference"])
        .arg(reference.path())
        .arg("--reads")
        .arg(reads.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("r3"))
        .stdout(predicate::str::contains("r4").not());
}

#[test]
fn search_json_output() {
    let reference = fasta_file(b">chr1\nGATTACA\n");
    let reads = fasta_file(b">r1\nA\n");

    let output = seed_search()
        .args(["search", "--format", "json", "--reference"])
        .arg(reference.path())
        .arg("--reads")
        .arg(reads.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["reference"], "chr1");
    assert_eq!(json["reads"][0]["read"], "r1");
    assert_eq!(json["reads"][0]["positions"], serde_json::json!([1, 3, 5]));
}

#[test]
fn search_rejects_multi_record_reference() {
    let reference = fasta_file(b">chr1\nACGT\n>chr2\nGGGG\n");
    let reads = fasta_file(b">r1\nA\n");

    seed_search()
        .args(["search", "--reference"])
        .arg(reference.path())
        .arg("--reads")
        .arg(reads.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one record"));
}

#[test]
fn search_rejects_invalid_read_symbol() {
    let reference = fasta_file(b">chr1\nGATTACA\n");
    let reads = fasta_file(b">r1\nAC-GT\n");

    seed_search()
        .args(["search", "--reference"])
        .arg(reference.path())
        .arg("--reads")
        .arg(reads.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid symbol"));
}

#[test]
fn search_rejects_zero_limit() {
    let reference = fasta_file(b">chr1\nGATTACA\n");
    let reads = fasta_file(b">r1\nA\n");

    seed_search()
        .args(["search", "--limit", "0", "--reference"])
        .arg(reference.path())
        .arg("--reads")
        .arg(reads.path())
        .assert()
        .failure();
}

#[test]
fn compare_engines_agree() {
    let reference = fasta_file(b">chr1\nGATTACAGATTACA\n");
    let reads = fasta_file(b">r1\nGATT\n>r2\nA\n>r3\nTTTT\n");

    seed_search()
        .args(["compare", "--reference"])
        .arg(reference.path())
        .arg("--reads")
        .arg(reads.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3/3 reads agree"));
}

#[test]
fn compare_gzipped_inputs() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let mut reference = NamedTempFile::with_suffix(".fa.gz").unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(b">chr1\nAAAA\n").unwrap();
    reference.write_all(&encoder.finish().unwrap()).unwrap();
    reference.flush().unwrap();

    let reads = fasta_file(b">r1\nAA\n");

    seed_search()
        .args(["compare", "--reference"])
        .arg(reference.path())
        .arg("--reads")
        .arg(reads.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1/1 reads agree"));
}
