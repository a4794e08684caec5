use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const REGISTRY_HEADER: &str = "priority,activeStatus,workingTitle,series,targetWords,currentWords,stage,stagePercent,desiredETA,blockedBy,documentLocation";

fn write_registry(desk_home: &Path, rows: &[String]) {
    fs::create_dir_all(desk_home).expect("mkdir desk home");
    let mut raw = String::from(REGISTRY_HEADER);
    raw.push('\n');
    for row in rows {
        raw.push_str(row);
        raw.push('\n');
    }
    fs::write(desk_home.join("projects.csv"), raw).expect("write registry");
}

#[test]
fn scan_suggests_a_link_for_a_renamed_document() {
    let tmp = tempdir().expect("tempdir");
    let desk_home = tmp.path().join("desk");
    let docs = tmp.path().join("docs");
    fs::create_dir_all(docs.join("Oceans")).expect("mkdir project");
    fs::write(docs.join("Oceans/Oceans-v2.docx"), b"words").expect("write doc");

    let stale = docs.join("Oceans/oceans-v1.doc");
    write_registry(
        &desk_home,
        &[format!("1,active,Oceans,,60000,12000,1,0.5,12/31/26,,{}", stale.display())],
    );

    assert_cmd::cargo::cargo_bin_cmd!("wdesk")
        .current_dir(tmp.path())
        .env("WDESK_HOME", &desk_home)
        .env("WDESK_PROJECTS_DIR", &docs)
        .arg("scan")
        .assert()
        .success()
        .stdout(contains("Missing 0"))
        .stdout(contains("New 0"))
        .stdout(contains("Suggested Links 1"))
        .stdout(contains(format!(
            "Oceans : - : {}",
            docs.join("Oceans/Oceans-v2.docx").display()
        )));
}

#[test]
fn scan_reports_missing_and_new_but_not_unstarted_projects() {
    let tmp = tempdir().expect("tempdir");
    let desk_home = tmp.path().join("desk");
    let docs = tmp.path().join("docs");
    fs::create_dir_all(docs.join("freshIdea")).expect("mkdir project");
    fs::write(docs.join("freshIdea/freshIdea.odt"), b"words").expect("write doc");

    let gone = docs.join("Tundra/tundra.doc");
    write_registry(
        &desk_home,
        &[
            format!("1,active,Tundra,,60000,0,0,0,,,{}", gone.display()),
            "5,planned,Someday,,60000,0,0,0,,,".to_string(),
        ],
    );

    assert_cmd::cargo::cargo_bin_cmd!("wdesk")
        .current_dir(tmp.path())
        .env("WDESK_HOME", &desk_home)
        .env("WDESK_PROJECTS_DIR", &docs)
        .arg("scan")
        .assert()
        .success()
        .stdout(contains("Missing 1"))
        .stdout(contains(format!("Tundra : - : {}", gone.display())))
        .stdout(contains("New 1"))
        .stdout(contains("Fresh Idea : - :"))
        .stdout(contains("Suggested Links 0"))
        .stdout(contains("Someday").not());
}

#[test]
fn scan_series_flag_descends_into_series_folders() {
    let tmp = tempdir().expect("tempdir");
    let desk_home = tmp.path().join("desk");
    let docs = tmp.path().join("docs");
    fs::create_dir_all(docs.join("seaTrilogy/bookOne")).expect("mkdir series");
    fs::write(docs.join("seaTrilogy/bookOne/bookOne.doc"), b"words").expect("write doc");
    write_registry(&desk_home, &[]);

    assert_cmd::cargo::cargo_bin_cmd!("wdesk")
        .current_dir(tmp.path())
        .env("WDESK_HOME", &desk_home)
        .env("WDESK_PROJECTS_DIR", &docs)
        .arg("scan")
        .assert()
        .success()
        .stdout(contains("New 0"));

    assert_cmd::cargo::cargo_bin_cmd!("wdesk")
        .current_dir(tmp.path())
        .env("WDESK_HOME", &desk_home)
        .env("WDESK_PROJECTS_DIR", &docs)
        .arg("scan")
        .arg("--series")
        .assert()
        .success()
        .stdout(contains("New 1"))
        .stdout(contains("Book One : Sea Trilogy :"));
}

#[test]
fn scan_json_emits_the_outcome_as_json() {
    let tmp = tempdir().expect("tempdir");
    let desk_home = tmp.path().join("desk");
    let docs = tmp.path().join("docs");
    fs::create_dir_all(docs.join("freshIdea")).expect("mkdir project");
    fs::write(docs.join("freshIdea/freshIdea.odt"), b"words").expect("write doc");
    write_registry(&desk_home, &[]);

    let assert = assert_cmd::cargo::cargo_bin_cmd!("wdesk")
        .current_dir(tmp.path())
        .env("WDESK_HOME", &desk_home)
        .env("WDESK_PROJECTS_DIR", &docs)
        .arg("scan")
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let outcome: serde_json::Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(outcome["missing"].as_array().unwrap().len(), 0);
    assert_eq!(outcome["suggested_links"].as_array().unwrap().len(), 0);
    let new_projects = outcome["new_projects"].as_array().unwrap();
    assert_eq!(new_projects.len(), 1);
    assert_eq!(new_projects[0]["title"], "Fresh Idea");
}

#[test]
fn scan_fails_when_the_projects_directory_is_unreadable() {
    let tmp = tempdir().expect("tempdir");
    let desk_home = tmp.path().join("desk");
    write_registry(&desk_home, &[]);

    assert_cmd::cargo::cargo_bin_cmd!("wdesk")
        .current_dir(tmp.path())
        .env("WDESK_HOME", &desk_home)
        .env("WDESK_PROJECTS_DIR", tmp.path().join("nowhere"))
        .arg("scan")
        .assert()
        .failure()
        .stderr(contains("is unreadable"));
}
