use assert_fs::prelude::*;
use predicates::prelude::*;

use calpick::domain::cell_style::CalendarPurpose;
use calpick::services::style_yaml::load_cell_styles_from_yaml_file;

#[test]
fn styles_prints_table_to_stdout() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("calpick");
    cmd.args(["styles", "-p", "check-in"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("selection:"))
        .stdout(predicate::str::contains("corner_radius"));
}

#[test]
fn written_styles_load_back_as_builtin_table() {
    let output_file = assert_fs::NamedTempFile::new("styles.yaml").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("calpick");
    cmd.args([
        "styles",
        "-p",
        "unavailability",
        "-o",
        output_file.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Style table written to"));

    let loaded =
        load_cell_styles_from_yaml_file(output_file.path(), CalendarPurpose::Unavailability)
            .unwrap();
    assert_eq!(loaded, CalendarPurpose::Unavailability.cell_styles());
}

#[test]
fn replay_uses_style_overrides() {
    let styles_file = assert_fs::NamedTempFile::new("styles.yaml").unwrap();
    styles_file
        .write_str(
            r##"
selected:
  interactive: true
  height: 40
  font: { size: 16, weight: regular }
  text_color: "#000000"
  border_width: 0
  border_color: "#000000"
  corner_radius: 0
  background_color: "#FFFFFF"
"##,
        )
        .unwrap();
    let scenario_file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    scenario_file
        .write_str("purpose: unavailability\ntoday: 2026-02-01\nalready_selected: [2026-02-03]\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("calpick");
    cmd.args([
        "replay",
        "-i",
        scenario_file.path().to_str().unwrap(),
        "-s",
        styles_file.path().to_str().unwrap(),
        "--format",
        "json",
    ]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(report["cells"][2]["date"], "2026-02-03");
    assert_eq!(report["cells"][2]["style"], "selected");
    assert_eq!(report["cells"][2]["interactive"], true);
}
