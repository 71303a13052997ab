//! Integration test: generate a script from record files on disk.

use std::path::{Path, PathBuf};

use eazy_core::CatalogError;
use eazy_sql::{generate, generate_statements, write_script, SqlGenerationError};

fn write(root: &Path, rel: &str, body: &str) -> PathBuf {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, body).unwrap();
    path
}

const COURSE: &str = "\
name: Intro to Python
url: https://x
duration_hours: 10
level: beginner
objectives: learn python
description: \"learner's guide\"
technologies: [\"python\"]
language: en
deprecated: false
";

#[test]
fn test_one_statement_per_record_in_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let course = write(root, "courses/python_beginner_en.yaml", COURSE);
    let path = write(
        root,
        "paths/python_developer_en.yaml",
        "name: Python Developer\ntarget_role: developer\ncourse_ids: [3, 7]\nlanguage: en\n\
         deprecated: true\n",
    );
    let bootcamp = write(
        root,
        "bootcamps/cloud_native_fr.yaml",
        "name: Cloud\ntarget_role: sre\nmodules: [kubernetes, helm]\nduration_weeks: 8\n\
         url: https://x/b\nlanguage: fr\ndeprecated: false\n",
    );

    let script = generate(&[&course, &path, &bootcamp]).unwrap();
    let inserts: Vec<&str> = script
        .lines()
        .filter(|l| l.starts_with("INSERT INTO"))
        .collect();
    assert_eq!(inserts.len(), 3);
    assert!(inserts[0].starts_with("INSERT INTO courses"));
    assert!(inserts[1].starts_with("INSERT INTO paths"));
    assert!(inserts[2].starts_with("INSERT INTO bootcamps"));

    assert!(script.contains(&format!("VALUES ('{}', 'Intro to Python'", course.display())));
    assert!(script.contains("'learner s guide'"));
    assert!(!script.contains("learner's"));
    assert!(script.contains("ARRAY[3, 7], '', '', 'en', TRUE)"));
    assert!(script.contains("ARRAY['kubernetes', 'helm'], 8, '', 'https://x/b', 'fr', FALSE)"));
    assert_eq!(script.matches("ON CONFLICT (file_path) DO UPDATE SET").count(), 3);
}

#[test]
fn test_uncategorized_file_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let good = write(root, "courses/python_beginner_en.yaml", COURSE);
    let stray = write(root, "misc/python_beginner_en.yaml", COURSE);

    let err = generate(&[&good, &stray]).unwrap_err();
    match &err {
        SqlGenerationError::Record { file, source } => {
            assert_eq!(file, &stray.display().to_string());
            assert!(matches!(source, CatalogError::UnknownCategory { .. }));
        }
        other => panic!("expected record error, got {other}"),
    }
    assert!(err
        .to_string()
        .starts_with(&format!("Error processing file {}", stray.display())));
}

#[test]
fn test_missing_required_key_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let broken = write(
        dir.path(),
        "courses/python_beginner_en.yaml",
        &COURSE.replace("url: https://x\n", ""),
    );
    let err = generate_statements(&[&broken]).unwrap_err();
    assert!(err.to_string().contains("missing field `url`"), "{err}");
}

#[test]
fn test_empty_input_renders_empty_script() {
    let files: [PathBuf; 0] = [];
    assert_eq!(generate(&files).unwrap(), "");
}

#[test]
fn test_write_script_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let course = write(dir.path(), "courses/python_beginner_en.yaml", COURSE);
    let script = generate(&[&course]).unwrap();
    let out = dir.path().join("eazyskills_update.sql");
    write_script(&out, &script).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), script);
}

#[test]
fn test_write_script_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no-such-dir").join("out.sql");
    let err = write_script(&out, "SELECT 1;").unwrap_err();
    assert!(matches!(err, SqlGenerationError::Write { .. }));
}
