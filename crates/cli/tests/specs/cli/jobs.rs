//! `yamagen jobs` specs

use crate::prelude::*;

#[test]
fn jobs_lists_table() {
    let project = Project::with_metafile();
    project
        .yamagen()
        .args(&["jobs"])
        .passes()
        .stdout_has("JOB")
        .stdout_has("TRIGGER")
        .stdout_has("all_package_ci_project_trunk")
        .stdout_has("custom-revision");
}

#[test]
fn jobs_json_reports_dependency_counts() {
    let project = Project::with_metafile();
    let result = project.yamagen().args(&["jobs", "-o", "json"]).passes();

    let jobs: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    let counts: Vec<(String, u64, bool)> = jobs
        .as_array()
        .unwrap()
        .iter()
        .map(|j| {
            (
                j["job_id"].as_str().unwrap().to_string(),
                j["dependencies"].as_u64().unwrap(),
                j["triggered"].as_bool().unwrap(),
            )
        })
        .collect();
    similar_asserts::assert_eq!(
        counts,
        vec![
            ("all_package_ci_project_trunk".to_string(), 4, true),
            ("all_package_ci_project_2022.3".to_string(), 2, true),
            ("all_package_ci_project_CUSTOM-REVISION".to_string(), 2, false),
        ]
    );
    assert_eq!(jobs[2]["track"], "custom-revision");
}

#[test]
fn jobs_without_editors() {
    let project = Project::empty();
    project.file(
        METAFILE_PATH,
        "target_branch = \"main\"\n[agent]\ntype = \"Unity::VM\"\nimage = \"package-ci/ubuntu:stable\"\n",
    );
    project.yamagen().args(&["jobs"]).passes().stdout_has("No editors defined");
}
