use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn rowsort(args: &[&str], file: &Path) -> io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_rowsort"))
        .args(args)
        .arg(file)
        .env("RUST_LOG", "off")
        .output()
}

#[test]
fn test_sorts_file_in_place() -> io::Result<()> {
    let temp_dir = TempDir::new()?;
    let input_file = temp_dir.path().join("fruit.txt");
    fs::write(&input_file, "banana 3\napple 10\ncherry 2\n")?;

    let output = rowsort(&["-k", "2", "-n"], &input_file)?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&input_file)?,
        "cherry 2\nbanana 3\napple 10\n"
    );
    Ok(())
}

#[test]
fn test_reverse_and_unique() -> io::Result<()> {
    let temp_dir = TempDir::new()?;
    let input_file = temp_dir.path().join("words.txt");
    fs::write(&input_file, "b\na\nc\nb\n")?;

    let output = rowsort(&["-r", "-u"], &input_file)?;
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&input_file)?, "c\nb\na\n");
    Ok(())
}

#[test]
fn test_latin1_bytes_pass_through() -> io::Result<()> {
    let temp_dir = TempDir::new()?;
    let input_file = temp_dir.path().join("latin1.txt");
    fs::write(&input_file, b"na\xefve 2\ncaf\xe9 1\n")?;

    let output = rowsort(&["-k", "2", "-n"], &input_file)?;
    assert!(output.status.success());
    assert_eq!(fs::read(&input_file)?, b"caf\xe9 1\nna\xefve 2\n");
    Ok(())
}

#[test]
fn test_check_reports_sorted_and_leaves_file() -> io::Result<()> {
    let temp_dir = TempDir::new()?;
    let input_file = temp_dir.path().join("nums.txt");
    fs::write(&input_file, "1\n2\n3")?;

    let output = rowsort(&["-c", "-n"], &input_file)?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("already sorted"));
    assert_eq!(fs::read_to_string(&input_file)?, "1\n2\n3");
    Ok(())
}

#[test]
fn test_check_sorts_unsorted_input() -> io::Result<()> {
    let temp_dir = TempDir::new()?;
    let input_file = temp_dir.path().join("nums.txt");
    fs::write(&input_file, "3\n1\n2\n")?;

    let output = rowsort(&["-c", "-n"], &input_file)?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(&input_file)?, "1\n2\n3\n");
    Ok(())
}

#[test]
fn test_missing_file_fails() -> io::Result<()> {
    let temp_dir = TempDir::new()?;
    let output = rowsort(&[], &temp_dir.path().join("absent.txt"))?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read"));
    assert!(stderr.contains("absent.txt"));
    Ok(())
}

#[test]
fn test_usage_errors() -> io::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_rowsort")).output()?;
    assert_eq!(output.status.code(), Some(1));

    let output = Command::new(env!("CARGO_BIN_EXE_rowsort"))
        .args(["a.txt", "b.txt"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_help_exits_successfully() -> io::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_rowsort"))
        .arg("--help")
        .output()?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--human-numeric-sort"));
    Ok(())
}
