use std::path::Path;

use hex_probe::{infer_corpus_name, sha256_file};
use tempfile::tempdir;

#[test]
fn sha256_file_hashes_known_content() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("data.bin");
    std::fs::write(&path, b"abc").expect("write");

    let digest = sha256_file(&path).expect("hash");
    assert_eq!(digest, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
}

#[test]
fn sha256_file_errors_on_missing_file() {
    let dir = tempdir().expect("tempdir");
    let err = sha256_file(&dir.path().join("nope.bin")).expect_err("missing file");
    assert!(err.to_string().contains("Failed to read file for hashing"));
}

#[test]
fn infer_corpus_name_uses_file_stem() {
    assert_eq!(infer_corpus_name(Path::new("/tmp/datasets/batch_01.json")), "batch_01");
    assert_eq!(infer_corpus_name(Path::new("corpus.json")), "corpus");
}

#[test]
fn infer_corpus_name_falls_back_when_missing() {
    assert_eq!(infer_corpus_name(Path::new("/")), "unnamed-corpus");
}
