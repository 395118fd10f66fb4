//! `yamagen generate` specs

use crate::prelude::*;
use serde_yaml::Value;

fn parse(text: &str) -> Value {
    serde_yaml::from_str(text).unwrap()
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_sequence()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn generate_prints_one_job_per_editor() {
    let project = Project::with_metafile();
    let result = project.yamagen().args(&["generate"]).passes();

    let doc = parse(&result.stdout);
    let ids: Vec<&str> = doc.as_mapping().unwrap().keys().map(|k| k.as_str().unwrap()).collect();
    similar_asserts::assert_eq!(
        ids,
        vec![
            "all_package_ci_project_trunk",
            "all_package_ci_project_2022.3",
            "all_package_ci_project_CUSTOM-REVISION",
        ]
    );
}

#[test]
fn trunk_job_waits_on_min_editor_tests() {
    let project = Project::with_metafile();
    let doc = parse(&project.yamagen().args(&["generate"]).passes().stdout);
    let job = &doc["all_package_ci_project_trunk"];

    assert_eq!(
        strings(&job["dependencies"]),
        vec![
            ".yamato/_projectcontext.yml#test_win_trunk",
            ".yamato/_projectcontext.yml#test_min_editor_win",
            ".yamato/_projectcontext.yml#test_osx_trunk",
            ".yamato/_projectcontext.yml#test_min_editor_osx",
        ]
    );
    assert_eq!(
        job["triggers"]["expression"].as_str(),
        Some(r#"pull_request.target eq "master" AND NOT pull_request.draft"#)
    );
    assert_eq!(job["name"].as_str(), Some("Pack and test all packages - trunk [project context]"));
    assert_eq!(job["agent"]["flavor"].as_str(), Some("b1.large"));
}

#[test]
fn custom_revision_job_has_no_trigger() {
    let project = Project::with_metafile();
    let doc = parse(&project.yamagen().args(&["generate"]).passes().stdout);
    let job = &doc["all_package_ci_project_CUSTOM-REVISION"];

    assert!(job.get("triggers").is_none());
    assert_eq!(job["variables"]["CUSTOM_REVISION"].as_str(), Some("custom_revision_not_set"));
    assert_eq!(strings(&job["dependencies"]).len(), 2);
}

#[test]
fn every_job_runs_upm_ci() {
    let project = Project::with_metafile();
    let doc = parse(&project.yamagen().args(&["generate"]).passes().stdout);

    for (_, job) in doc.as_mapping().unwrap() {
        let commands = strings(&job["commands"]);
        assert_eq!(commands.len(), 3);
        assert!(commands[0].starts_with("npm install upm-ci-utils@stable -g --registry "));
        assert_eq!(commands[1], "upm-ci package izon -t");
        assert_eq!(commands[2], "upm-ci package izon -d");
    }
}

#[test]
fn release_revision_stays_a_string() {
    let project = Project::with_metafile();
    let doc = parse(&project.yamagen().args(&["generate"]).passes().stdout);
    assert_eq!(
        doc["all_package_ci_project_2022.3"]["variables"]["CUSTOM_REVISION"].as_str(),
        Some("2022.3")
    );
}

#[test]
fn generate_write_creates_file() {
    let project = Project::with_metafile();
    project
        .yamagen()
        .args(&["generate", "--write", ".yamato/_projectcontext.yml"])
        .passes()
        .stdout_has("Wrote 3 job(s) to .yamato/_projectcontext.yml");

    let doc = parse(&project.read(".yamato/_projectcontext.yml"));
    assert_eq!(doc.as_mapping().unwrap().len(), 3);
}

#[test]
fn generate_write_json_summary() {
    let project = Project::with_metafile();
    let result = project
        .yamagen()
        .args(&["generate", "--write", "out/jobs.yml", "-o", "json"])
        .passes();

    let summary: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(summary["path"], "out/jobs.yml");
    assert_eq!(summary["jobs"].as_array().map(Vec::len), Some(3));
}

#[test]
fn explicit_config_from_another_directory() {
    let project = Project::empty();
    let metafile = project.file("ci/context.toml", METAFILE);

    cli()
        .args(&["--config", metafile.to_str().unwrap(), "generate"])
        .passes()
        .stdout_has("all_package_ci_project_trunk");
}

#[test]
fn project_flag_locates_default_metafile() {
    let project = Project::with_metafile();
    cli()
        .args(&["-C", project.path().to_str().unwrap(), "generate"])
        .passes()
        .stdout_has("all_package_ci_project_2022.3");
}

#[test]
fn missing_metafile_exits_two() {
    let project = Project::empty();
    project
        .yamagen()
        .args(&["generate"])
        .fails()
        .code_is(2)
        .stderr_has("metafile not found")
        .stderr_has("projectcontext.toml");
}

#[test]
fn duplicate_editor_names_fail() {
    let project = Project::empty();
    project.file(
        METAFILE_PATH,
        &METAFILE.replacen(
            "[[platforms]]",
            "[[editors]]\nname = \"trunk\"\ntrack = \"Trunk\"\n\n[[platforms]]",
            1,
        ),
    );
    project
        .yamagen()
        .args(&["generate"])
        .fails()
        .code_is(1)
        .stderr_has("all_package_ci_project_trunk");
}

#[test]
fn logs_go_to_stderr() {
    let project = Project::with_metafile();
    let result = project
        .yamagen()
        .env("RUST_LOG", "info")
        .args(&["generate"])
        .passes()
        .stderr_has("loading metafile")
        .stdout_lacks("loading metafile");
    parse(&result.stdout);
}
