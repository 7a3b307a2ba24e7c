//! Project initializer flows with the built-in file sets.

mod common;

use std::path::Path;

use serde_json::json;
use strata_adapters::{BuiltinCatalog, MemoryFilesystem, local_initializer};
use strata_core::{
    application::{EntryOutcome, InitService, MaterializeOptions, MaterializeService},
    domain::DomainError,
    error::StrataError,
};
use tempfile::TempDir;

use common::{names, read_json, snapshot, write};

#[test]
fn init_writes_skeleton_and_ignore_list() {
    let dir = TempDir::new().unwrap();

    let report = local_initializer()
        .init(dir.path(), &MaterializeOptions::default())
        .unwrap();

    assert!(report.ignore_list_written);
    assert_eq!(
        std::fs::read_to_string(dir.path().join(".gitignore")).unwrap(),
        "node_modules\n.devicescript"
    );
    for file in ["src/main.ts", "src/tsconfig.json", "package.json", ".vscode/launch.json"] {
        assert!(dir.path().join(file).is_file(), "{file} missing");
    }
}

#[test]
fn init_twice_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let service = local_initializer();
    let opts = MaterializeOptions::default();

    service.init(dir.path(), &opts).unwrap();
    let first = snapshot(dir.path());

    let report = service.init(dir.path(), &opts).unwrap();

    assert_eq!(snapshot(dir.path()), first);
    assert!(!report.ignore_list_written);
    assert_eq!(report.files.count(EntryOutcome::Created), 0);
}

#[test]
fn init_extends_existing_ignore_list() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join(".gitignore"), "target\nnode_modules/\n");

    local_initializer()
        .init(dir.path(), &MaterializeOptions::default())
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(dir.path().join(".gitignore")).unwrap(),
        "target\nnode_modules/\n\n.devicescript/"
    );
}

#[test]
fn add_simulator_merges_launch_configurations() {
    let dir = TempDir::new().unwrap();
    let service = local_initializer();
    let opts = MaterializeOptions::default();

    service.init(dir.path(), &opts).unwrap();
    service.add_simulator(dir.path(), &opts).unwrap();
    let once = snapshot(dir.path());
    service.add_simulator(dir.path(), &opts).unwrap();

    assert_eq!(snapshot(dir.path()), once);

    let launch = read_json(&dir.path().join(".vscode/launch.json"));
    assert_eq!(launch["version"], "0.2.0");
    assert_eq!(names(&launch["configurations"]), ["DeviceScript", "Sim"]);
    assert_eq!(names(&launch["compounds"]), ["DeviceScript+Sim"]);

    let package = read_json(&dir.path().join("package.json"));
    assert_eq!(package["private"], true);
    assert_eq!(package["scripts"]["start"], "yarn watch");
    assert_eq!(
        package["scripts"]["build"],
        "yarn build:devicescript && yarn build:sim"
    );
    assert_eq!(package["devDependencies"]["@devicescript/cli"], "*");
    assert_eq!(package["devDependencies"]["ts-node"], "^10.9.1");
}

#[test]
fn add_simulator_keeps_user_configurations() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join(".vscode/launch.json"),
        &json!({"configurations": [{"name": "Sim", "type": "custom"}, {"name": "Mine"}]}).to_string(),
    );

    local_initializer()
        .add_simulator(dir.path(), &MaterializeOptions::default())
        .unwrap();

    let launch = read_json(&dir.path().join(".vscode/launch.json"));
    // same-named element is not replaced
    assert_eq!(launch["configurations"][0]["type"], "custom");
    assert_eq!(names(&launch["configurations"]), ["Sim", "Mine"]);
}

#[test]
fn add_service_in_memory() {
    let fs = MemoryFilesystem::new();
    let service = InitService::new(
        MaterializeService::new(Box::new(fs.clone())),
        Box::new(BuiltinCatalog::new()),
    );

    let report = service
        .add_service("/proj", "Light Level", &MaterializeOptions::default())
        .unwrap();

    assert_eq!(
        report.files.outcome_of("services/lightlevel.md"),
        Some(EntryOutcome::Created)
    );
    let definition = fs.contents(Path::new("/proj/services/lightlevel.md")).unwrap();
    assert!(definition.starts_with("# Light Level\n"));
    assert!(definition.contains("identifier: 0x1"));
    assert!(fs.contents(Path::new("/proj/services/README.md")).is_some());
}

#[test]
fn add_service_rejects_blank_name() {
    let dir = TempDir::new().unwrap();

    let err = local_initializer()
        .add_service(dir.path(), "   ", &MaterializeOptions::default())
        .unwrap_err();

    assert!(matches!(
        err,
        StrataError::Domain(DomainError::InvalidServiceName { .. })
    ));
    assert!(snapshot(dir.path()).is_empty());
}
