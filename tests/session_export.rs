use std::fs;

use bezier_sketch::{
    matrix_string, sample_matrix, sample_parametric, ControlPoint, ControlPointSequence,
    EvaluationMethod, OutputFormat, Session,
};

const STRING_COORDINATE: &str = r#"{
    "points": [
        { "x": -150, "y": -50 },
        { "x": "-60", "y": 160 }
    ]
}"#;

fn cubic_session(dir: &std::path::Path, method: EvaluationMethod) -> Session {
    let mut session = Session::default();
    session.points = ControlPointSequence::from_points([
        ControlPoint::new(-150.0, -50.0),
        ControlPoint::new(-60.0, 160.0),
        ControlPoint::new(60.0, -160.0),
        ControlPoint::new(150.0, 50.0),
    ])
    .unwrap();
    session.method = method;
    session.step = 0.25;
    session.range = 1.0;
    session.config.output_dir = dir.to_path_buf();
    session
}

#[test]
fn export_writes_all_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = cubic_session(dir.path(), EvaluationMethod::Parametric);
    session.config.format = OutputFormat::Svg;
    session.export().unwrap();

    let image = fs::read_to_string(dir.path().join("bezier_curve.svg")).unwrap();
    assert!(image.contains("<svg"));
    let table = fs::read_to_string(dir.path().join("bezier_table.txt")).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 5);
    // (-150, -50) on a 630x630 canvas
    assert_eq!(lines[0], "t = 0, (165.00, 365.00)");
    assert_eq!(lines[4], "t = 1, (465.00, 265.00)");
    let matrix = fs::read_to_string(dir.path().join("bezier_matrix.txt")).unwrap();
    assert_eq!(matrix, "-1\t3\t-3\t1\n3\t-6\t3\t0\n-3\t3\t0\t0\n1\t0\t0\t0");
    assert_eq!(matrix, matrix_string());
}

#[test]
fn export_creates_the_output_directory_and_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("out");
    let session = cubic_session(&out, EvaluationMethod::Matrix);
    session.export().unwrap();
    assert!(out.join("bezier_curve.png").exists());
    assert!(out.join("bezier_matrix.txt").exists());
}

#[test]
fn invalid_table_parameters_skip_only_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = cubic_session(dir.path(), EvaluationMethod::Parametric);
    session.step = 0.0;
    session.config.format = OutputFormat::Svg;
    session.export().unwrap();
    assert!(!dir.path().join("bezier_table.txt").exists());
    assert!(dir.path().join("bezier_curve.svg").exists());
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(
        &path,
        r#"{ "points": [ { "x": 0, "y": 0 }, { "x": 100, "y": 0 } ], "method": "parametric" }"#,
    )
    .unwrap();
    let session = Session::load(&path).unwrap();
    let (xs, ys) = session.points.axes();
    let line = sample_parametric(&xs, &ys);
    assert_eq!(line.len(), 1000);
    assert!((line[999].0 - 100.0).abs() < 1e-9);
    assert!(line.iter().all(|(_, y)| *y == 0.0));
    assert_eq!(sample_matrix(&xs, &ys).len(), 1001);

    // coordinates must be numbers
    fs::write(&path, STRING_COORDINATE).unwrap();
    assert!(Session::load(&path).is_err());
    assert!(Session::load(&dir.path().join("missing.json")).is_err());
}
