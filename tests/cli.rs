use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn set_plot(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_set_plot"))
        .args(args)
        .output()
        .expect("could not run set_plot")
}

fn write_set(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn no_filename_exits_successfully() {
    let out = set_plot(&[]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "Filename expected");
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.mset");
    let out = set_plot(&[missing.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("could not open"));
}

#[test]
fn malformed_line_fails_without_plot() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_set(dir.path(), "bad.mset", "1\nabc 1.0\n");
    let svgout = dir.path().join("bad.svg");
    let out = set_plot(&[&input, "-o", svgout.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"));
    assert!(stderr.contains("abc"));
    assert!(!svgout.exists());
}

#[test]
fn svg_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_set(dir.path(), "line.mset", "3\n0.0 0.0\n1.0 2.0\n2.0 4.0\n");
    let svgout = dir.path().join("line.svg");
    let out = set_plot(&[&input, "--svgfile", svgout.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let svg = fs::read_to_string(&svgout).unwrap();
    assert!(svg.contains("<svg"));
    assert_eq!(svg.matches("<circle").count(), 3);
}
