use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_cli_pack_directory() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Setup: a temporary directory with a few asset files
    let source_dir = tempdir()?;
    let file1_path = source_dir.path().join("file1.txt");
    let nested_dir = source_dir.path().join("nested");
    fs::create_dir(&nested_dir)?;
    let nested_file_path = nested_dir.join("nested_file.dat");

    let mut file1 = fs::File::create(&file1_path)?;
    writeln!(file1, "Hello, this is the first file.")?;

    let mut nested_file = fs::File::create(&nested_file_path)?;
    nested_file.write_all(&[0, 1, 2, 3, 4, 5])?;

    let pack_dir = tempdir()?;
    let pack_path = pack_dir.path().join("assets.pack");

    // 2. Pack the directory
    let mut cmd = Command::cargo_bin("deflation")?;
    cmd.arg(source_dir.path()).arg(&pack_path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Deflated folder"));

    // 3. Verify the container: count header plus one fixed-size record per file
    assert!(pack_path.exists());
    let bytes = fs::read(&pack_path)?;
    let count = i64::from_le_bytes(bytes[0..8].try_into()?);
    assert_eq!(count, 2);

    let sizes: u64 = fs::metadata(&file1_path)?.len() + fs::metadata(&nested_file_path)?.len();
    assert_eq!(bytes.len() as u64, 8 + 2 * (256 + 8) + sizes);

    Ok(())
}

#[test]
fn test_cli_missing_arguments_is_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("deflation")?;
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    // One positional is still not enough.
    let mut cmd = Command::cargo_bin("deflation")?;
    cmd.arg("only-input");
    cmd.assert().failure();

    Ok(())
}

#[test]
fn test_cli_empty_input_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let source_dir = tempdir()?;
    let pack_dir = tempdir()?;
    let pack_path = pack_dir.path().join("never.pack");

    let mut cmd = Command::cargo_bin("deflation")?;
    cmd.arg(source_dir.path()).arg(&pack_path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("contains nothing to pack"));

    assert!(!pack_path.exists());
    Ok(())
}

#[test]
fn test_cli_only_filter() -> Result<(), Box<dyn std::error::Error>> {
    let source_dir = tempdir()?;
    fs::write(source_dir.path().join("jump.wav"), b"riff")?;
    fs::write(source_dir.path().join("notes.txt"), b"todo")?;

    let pack_dir = tempdir()?;
    let pack_path = pack_dir.path().join("audio.pack");

    let mut cmd = Command::cargo_bin("deflation")?;
    cmd.arg(source_dir.path())
        .arg(&pack_path)
        .arg("--only")
        .arg("wav");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 entries"));

    let bytes = fs::read(&pack_path)?;
    let count = i64::from_le_bytes(bytes[0..8].try_into()?);
    assert_eq!(count, 1);
    assert_eq!(bytes.len(), 8 + 256 + 8 + 4);

    Ok(())
}
