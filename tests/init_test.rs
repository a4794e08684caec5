use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

#[test]
fn init_writes_starter_files_once() {
    let tmp = tempdir().expect("tempdir");
    let desk_home = tmp.path().join("desk");

    assert_cmd::cargo::cargo_bin_cmd!("wdesk")
        .current_dir(tmp.path())
        .env("WDESK_HOME", &desk_home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("wrote"));

    let settings = fs::read_to_string(desk_home.join("settings.ini")).expect("settings");
    assert!(settings.contains("workingHoursPerDay=8"));
    assert!(settings.contains("projectsDirectory="));

    let registry = fs::read_to_string(desk_home.join("projects.csv")).expect("registry");
    assert!(registry.starts_with("priority,activeStatus,workingTitle"));
    assert_eq!(registry.lines().count(), 1);

    let stages = fs::read_to_string(desk_home.join("stages.csv")).expect("stages");
    assert!(stages.contains("outline"));
    assert!(stages.contains("polish"));

    // a second run leaves the user's files alone
    fs::write(desk_home.join("projects.csv"), "priority\n42\n").expect("scribble");
    assert_cmd::cargo::cargo_bin_cmd!("wdesk")
        .current_dir(tmp.path())
        .env("WDESK_HOME", &desk_home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("kept existing"));
    let kept = fs::read_to_string(desk_home.join("projects.csv")).expect("registry");
    assert_eq!(kept, "priority\n42\n");
}

#[test]
fn init_force_overwrites() {
    let tmp = tempdir().expect("tempdir");
    let desk_home = tmp.path().join("desk");
    fs::create_dir_all(&desk_home).expect("mkdir desk home");
    fs::write(desk_home.join("projects.csv"), "priority\n42\n").expect("seed");

    assert_cmd::cargo::cargo_bin_cmd!("wdesk")
        .current_dir(tmp.path())
        .env("WDESK_HOME", &desk_home)
        .arg("init")
        .arg("--force")
        .assert()
        .success();

    let registry = fs::read_to_string(desk_home.join("projects.csv")).expect("registry");
    assert!(registry.starts_with("priority,activeStatus,workingTitle"));
}
