//! End-to-end tests for the docprep binary.

mod common;

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn docprep() -> Command {
    Command::new(env!("CARGO_BIN_EXE_docprep"))
}

/// Tests bold rewriting from a file into the default output file.
#[test]
fn test_bold_file_workflow_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let input = common::write_file(dir.path(), "article.md", b"Use `go` keyword\n")?;

    // Act
    let output = docprep()
        .args(["bold", input.to_str().expect("Path should be valid UTF8")])
        .current_dir(dir.path())
        .output()?;

    // Assert
    assert!(output.status.success(), "bold should succeed");
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Use **go** keyword"));

    let written = fs::read_to_string(dir.path().join("output.md"))?;
    assert_eq!(written, "Use **go** keyword\n");

    Ok(())
}

/// Tests bold rewriting from standard input without writing a file.
#[test]
fn test_bold_stdin_no_write_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let mut child = docprep()
        .args(["bold", "--no-write"])
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Act
    child
        .stdin
        .take()
        .expect("Stdin should be piped")
        .write_all(b"```\nlet `x` = 1;\n```")?;
    let output = child.wait_with_output()?;

    // Assert
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "``\nlet `x` = 1;\n```\n");
    assert!(!dir.path().join("output.md").exists());

    Ok(())
}

/// Tests that an unterminated fence warns without failing.
#[test]
fn test_bold_unterminated_fence_warns_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let input = common::write_file(dir.path(), "open.md", b"```\nopen")?;

    // Act
    let output = docprep()
        .args(["bold", "--no-write"])
        .arg(&input)
        .output()?;

    // Assert
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("unterminated code fence"));

    Ok(())
}

/// Tests PNG tree conversion through the binary.
#[test]
fn test_jpeg_workflow_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    common::write_png(dir.path(), "a.png")?;
    common::write_png(dir.path(), "nested/b.png")?;
    common::write_file(dir.path(), "nested/broken.png", b"nope")?;

    // Act
    let output = docprep()
        .arg("jpeg")
        .arg(dir.path())
        .args(["--quality", "90"])
        .output()?;

    // Assert
    assert!(output.status.success(), "Per-file failures are not fatal");
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stdout.matches("Image conversion successful").count(), 2);
    assert!(stdout.contains("Converted 2 of 3 PNG files (1 failed)"));
    assert!(stderr.contains("broken.png"));
    assert!(stderr.contains("failed to decode PNG"));

    assert!(dir.path().join("a.jpg").exists());
    assert!(dir.path().join("nested/b.jpg").exists());
    assert!(!dir.path().join("a.png").exists());
    assert!(dir.path().join("nested/broken.png").exists());

    Ok(())
}

/// Tests that an invalid root exits with an error.
#[test]
fn test_jpeg_missing_root_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;

    // Act
    let output = docprep()
        .arg("jpeg")
        .arg(dir.path().join("missing"))
        .output()?;

    // Assert
    assert!(!output.status.success(), "Missing root should fail");
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Directory does not exist"));

    Ok(())
}

/// Tests that out of range quality is rejected by argument parsing.
#[test]
fn test_jpeg_invalid_quality_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;

    // Act
    let output = docprep()
        .arg("jpeg")
        .arg(dir.path())
        .args(["--quality", "0"])
        .output()?;

    // Assert
    assert!(!output.status.success(), "Quality 0 should be rejected");

    Ok(())
}
