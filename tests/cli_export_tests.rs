//! End-to-end tests for `adboard export`.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_export_csv_writes_per_platform_files() {
    let temp = tempfile::tempdir().unwrap();
    let out = temp.path().to_str().unwrap();

    let output = run_adboard(&["export", "--format", "csv", "--output", out]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let names = dir_file_names(temp.path());
    // Four platform files plus the UGC script file.
    assert_eq!(names.len(), 5, "files: {names:?}");
    for platform in ["meta", "google", "tiktok", "pinterest"] {
        assert!(
            names.iter().any(|n| n.starts_with(&format!("ads_{platform}_")) && n.ends_with(".csv")),
            "missing {platform} file in {names:?}"
        );
    }
    assert!(names
        .iter()
        .any(|n| n.starts_with("ugc_scripts_") && n.ends_with(".csv")));
}

#[test]
fn test_export_csv_headers_match_platform_columns() {
    let temp = tempfile::tempdir().unwrap();
    let out = temp.path().to_str().unwrap();

    let output = run_adboard(&["export", "--format", "csv", "--output", out]);
    assert!(output.status.success());

    let names = dir_file_names(temp.path());
    let google = names
        .iter()
        .find(|n| n.starts_with("ads_google_"))
        .expect("google csv present");
    let content = fs::read_to_string(temp.path().join(google)).unwrap();
    let header = content.lines().next().unwrap();
    assert_eq!(
        header,
        "product,headline,description_line_1,description_line_2,angle,status"
    );

    let scripts = names
        .iter()
        .find(|n| n.starts_with("ugc_scripts_"))
        .expect("scripts csv present");
    let content = fs::read_to_string(temp.path().join(scripts)).unwrap();
    assert!(content.starts_with(
        "product,script_type,duration,hook,cta,scene_count,full_script"
    ));
}

#[test]
fn test_export_json_is_parseable_with_correct_counts() {
    let temp = tempfile::tempdir().unwrap();
    let out = temp.path().to_str().unwrap();

    let output = run_adboard(&["export", "--format", "json", "--output", out]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let names = dir_file_names(temp.path());
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("full_export_") && names[0].ends_with(".json"));

    let content = fs::read_to_string(temp.path().join(&names[0])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    let ads = value["ad_copies"].as_array().unwrap();
    let scripts = value["ugc_scripts"].as_array().unwrap();
    assert_eq!(
        value["summary"]["total_ad_copies"].as_u64().unwrap() as usize,
        ads.len()
    );
    assert_eq!(
        value["summary"]["total_ugc_scripts"].as_u64().unwrap() as usize,
        scripts.len()
    );
    assert_eq!(value["summary"]["platforms"].as_array().unwrap().len(), 4);

    // Statuses serialize as the four lowercase values only.
    for ad in ads {
        let status = ad["status"].as_str().unwrap();
        assert!(matches!(status, "draft" | "review" | "ready" | "exported"));
    }
}

#[test]
fn test_export_stdout_reports_written_files() {
    let temp = tempfile::tempdir().unwrap();
    let out = temp.path().to_str().unwrap();

    let output = run_adboard(&["export", "--format", "json", "--output", out]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote 1 file(s)"), "stdout: {stdout}");
    assert!(stdout.contains("full_export_"));
}
