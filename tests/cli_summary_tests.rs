//! End-to-end tests for `adboard summary`.

mod fixtures;
use fixtures::*;

#[test]
fn test_summary_prints_catalogue_counts() {
    let output = run_adboard(&["summary"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ad variations: 12"), "stdout: {stdout}");
    assert!(stdout.contains("UGC scripts: 6"), "stdout: {stdout}");
    for platform in ["Meta", "Google", "TikTok", "Pinterest"] {
        assert!(stdout.contains(platform), "missing {platform}: {stdout}");
    }
}

#[test]
fn test_summary_lists_every_status() {
    let output = run_adboard(&["summary"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    for status in ["Draft", "Review", "Ready", "Exported"] {
        assert!(stdout.contains(status), "missing {status}: {stdout}");
    }
}

#[test]
fn test_help_shows_subcommands() {
    let output = run_adboard(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("export"));
    assert!(stdout.contains("summary"));
}
