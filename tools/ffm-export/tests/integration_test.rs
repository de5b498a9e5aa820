//! Integration tests for ffm-export
//!
//! Tests the full pipeline: generate test OBJ -> run the CLI -> verify the .ffm output


use std::path::Path;
use std::process::Output;
use tempfile::tempdir;

/// Test OBJ -> .ffm conversion of a single triangle
#[test]
fn test_triangle_obj_to_ffm() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("triangle.obj");
    let ffm_path = dir.path().join("triangle.ffm");

    generate_test_assets::generate_triangle_obj(&obj_path).expect("Failed to generate OBJ");

    let out = ffm_export_convert(&obj_path, Some(&ffm_path));
    assert!(out.status.success(), "ffm-export convert failed: {:?}", out);

    let data = std::fs::read_to_string(&ffm_path).expect("Failed to read ffm file");
    assert_eq!(
        data,
        "{{-1.000000,0.000000,0.000000}, {0.0000,0.0000,1.0000}, {0.0,1.0}, texId},\n\
         {{1.000000,0.000000,0.000000}, {0.0000,0.0000,1.0000}, {1.0,1.0}, texId},\n\
         {{0.000000,1.000000,0.000000}, {0.0000,0.0000,1.0000}, {0.5,0.0}, texId}"
    );
}

/// Output path defaults to the input with the .ffm extension
#[test]
fn test_default_output_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("quad.obj");

    generate_test_assets::generate_quad_obj_crlf(&obj_path).expect("Failed to generate OBJ");

    let out = ffm_export_convert(&obj_path, None);
    assert!(out.status.success(), "ffm-export convert failed: {:?}", out);

    let data = std::fs::read_to_string(dir.path().join("quad.ffm")).expect("Missing quad.ffm");
    let records: Vec<&str> = data.split(",\n").collect();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0], "{{0,0,0}, {0,0,1}, {0,1.0}, texId}");
    assert_eq!(records[5], "{{0,1,0}, {0,0,1}, {0,0.0}, texId}");
    assert!(!data.contains('\r'));
    assert!(!data.ends_with('\n'));
}

/// With no input argument the fixed base name is converted from the working directory
#[test]
fn test_default_input_name() {
    let dir = tempdir().expect("Failed to create temp dir");
    generate_test_assets::generate_triangle_obj(&dir.path().join("zombie.obj"))
        .expect("Failed to generate OBJ");

    let out = std::process::Command::new(env!("CARGO_BIN_EXE_ffm-export"))
        .arg("convert")
        .current_dir(dir.path())
        .output()
        .expect("Failed to run ffm-export");
    assert!(out.status.success(), "ffm-export convert failed: {:?}", out);
    assert!(dir.path().join("zombie.ffm").exists());
}

/// Converting the same input twice yields identical bytes
#[test]
fn test_deterministic_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("quad.obj");
    let first = dir.path().join("first.ffm");
    let second = dir.path().join("second.ffm");

    generate_test_assets::generate_quad_obj_crlf(&obj_path).expect("Failed to generate OBJ");
    assert!(ffm_export_convert(&obj_path, Some(&first)).status.success());
    assert!(ffm_export_convert(&obj_path, Some(&second)).status.success());

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

/// A failed conversion exits non-zero and leaves no output file
#[test]
fn test_broken_obj_writes_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("broken.obj");
    let ffm_path = dir.path().join("broken.ffm");

    generate_test_assets::generate_broken_obj(&obj_path).expect("Failed to generate OBJ");

    let out = ffm_export_convert(&obj_path, Some(&ffm_path));
    assert!(!out.status.success(), "broken OBJ should fail");
    assert!(!ffm_path.exists(), "no output should be written on failure");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 4"), "stderr: {}", stderr);
}

/// Missing input file is an error
#[test]
fn test_missing_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = ffm_export_convert(&dir.path().join("nope.obj"), None);
    assert!(!out.status.success());
    assert!(!dir.path().join("nope.ffm").exists());
}

/// `check` validates without writing
#[test]
fn test_check_writes_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("triangle.obj");
    generate_test_assets::generate_triangle_obj(&obj_path).expect("Failed to generate OBJ");

    let status = std::process::Command::new(env!("CARGO_BIN_EXE_ffm-export"))
        .args(["check", obj_path.to_str().unwrap()])
        .status()
        .expect("Failed to run ffm-export");
    assert!(status.success());
    assert!(!dir.path().join("triangle.ffm").exists());
}

/// The library entry point agrees with the CLI
#[test]
fn test_library_matches_cli() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("triangle.obj");
    let ffm_path = dir.path().join("triangle.ffm");
    generate_test_assets::generate_triangle_obj(&obj_path).expect("Failed to generate OBJ");

    let converted = ffm_export::convert_obj(&obj_path, &ffm_path).expect("conversion failed");
    assert_eq!(converted.face_count, 1);
    assert_eq!(converted.records.len(), 3);
    assert_eq!(
        std::fs::read_to_string(&ffm_path).unwrap(),
        converted.to_ffm_string()
    );
}

// Helper to run ffm-export convert command
fn ffm_export_convert(input: &Path, output: Option<&Path>) -> Output {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_ffm-export"));
    cmd.args(["convert", input.to_str().unwrap()]);
    if let Some(output) = output {
        cmd.args(["-o", output.to_str().unwrap()]);
    }
    cmd.output().expect("Failed to run ffm-export")
}
