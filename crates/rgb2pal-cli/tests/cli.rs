//! End-to-end tests for the `rgb2pal` binary.

use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn palette_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn rgb2pal(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rgb2pal"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run rgb2pal")
}

fn lookup(color: &str, palette: &Path) -> Output {
    rgb2pal(&[OsStr::new(color), palette.as_os_str()])
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

const BLACK_WHITE: &str = "1=000000\n2=ffffff\n";

#[test]
fn test_black_and_white() {
    let file = palette_file(BLACK_WHITE);

    let out = lookup("000000", file.path());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "1 #0\n");

    let out = lookup("ffffff", file.path());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "2 #ffffff\n");

    let out = lookup("808080", file.path());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "2 #ffffff\n");
}

#[test]
fn test_repeatable() {
    let file = palette_file("# demo\n10=5566ab\n11=5577bc\n12=ab6655\n");
    let first = lookup("5570b0", file.path());
    assert!(first.status.success());
    for _ in 0..3 {
        assert_eq!(lookup("5570b0", file.path()).stdout, first.stdout);
    }
}

#[test]
fn test_parallel_flag_same_output() {
    let file = palette_file("0=000000\n1=800000\n2=008000\n3=808000\n4=000080\n");
    let serial = lookup("7a1010", file.path());
    let parallel = rgb2pal(&[
        OsStr::new("7a1010"),
        file.path().as_os_str(),
        OsStr::new("--parallel"),
        OsStr::new("-j"),
        OsStr::new("2"),
    ]);
    assert!(parallel.status.success());
    assert_eq!(stdout(&serial), "1 #800000\n");
    assert_eq!(parallel.stdout, serial.stdout);
}

#[test]
fn test_tie_first_entry_wins() {
    let file = palette_file("4=00ff00\n2=00ff00\n");
    assert_eq!(stdout(&lookup("000000", file.path())), "4 #ff00\n");
}

#[test]
fn test_extra_arguments_ignored() {
    let file = palette_file(BLACK_WHITE);
    let out = rgb2pal(&[OsStr::new("000000"), file.path().as_os_str(), OsStr::new("extra")]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "1 #0\n");
}

#[test]
fn test_missing_arguments() {
    let out = rgb2pal(&[OsStr::new("ffffff")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let out = rgb2pal(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_bad_color() {
    let file = palette_file(BLACK_WHITE);
    let out = lookup("nothex", file.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_missing_palette() {
    let dir = tempfile::tempdir().unwrap();
    let out = lookup("ffffff", &dir.path().join("none.palette"));
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_non_utf8_comment() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"# caf\xe9 palette\n1=000000\n2=ffffff\n").unwrap();
    file.flush().unwrap();

    let out = lookup("eeeeee", file.path());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "2 #ffffff\n");
}

#[test]
fn test_malformed_palette_reported() {
    let file = palette_file("1=000000\n2=ffffff\nbroken\n");
    let out = lookup("ffffff", file.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_empty_palette() {
    let file = palette_file("# comments only\n");
    let out = lookup("ffffff", file.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_help_succeeds() {
    let out = rgb2pal(&[OsStr::new("--help")]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("rgb2pal"));
}
