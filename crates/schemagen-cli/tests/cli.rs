use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

const API_COMMON: &str = include_str!("../../schemagen-parser/tests/fixtures/api_common.go");
const API_STORAGE: &str = include_str!("../../schemagen-parser/tests/fixtures/api_storage.go");
const DOCGEN: &str = "package docgen\n\n// Files of other packages in the API directory are skipped.\ntype StorageMiner interface {\n\tNotPartOfTheAPI()\n}\n";

/// Example values for every foreign type and map in the fixture API.
const EXAMPLES_TOML: &str = r#"
[examples]
"address.Address" = "f01234"
"abi.SectorSize" = 34359738368
"abi.SectorNumber" = 9
"abi.DealID" = 5432
"*cid.Cid" = { "/" = "bafy2bzacea" }
"*types.TipSet" = { Height = 10, Blocks = ["bafy2bzacea"] }
"uuid.UUID" = "07070707-0707-0707-0707-070707070707"
"map[string][]SealedRef" = { "piece" = [] }
"map[ID][]Decl" = {}
"map[ID]string" = { "76f1988b" = "/data/storage" }
"#;

/// A project root whose `api/` holds the shared fixture package.
fn lotus_root() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    let api = root.path().join("api");
    std::fs::create_dir(&api).unwrap();
    std::fs::write(api.join("api_common.go"), API_COMMON).unwrap();
    std::fs::write(api.join("api_storage.go"), API_STORAGE).unwrap();
    std::fs::write(api.join("docgen.go"), DOCGEN).unwrap();
    root
}

fn schemagen(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_schemagen"))
        .arg(root)
        .args(args)
        .env_remove("SCHEMAGEN_LOG")
        .env_remove("SCHEMAGEN_TARGET__INTERFACE")
        .env_remove("SCHEMAGEN_TARGET__PACKAGE")
        .env_remove("SCHEMAGEN_TARGET__API_DIR")
        .output()
        .expect("schemagen binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf-8")
}

#[test]
fn emits_storage_miner_manifest() {
    let root = lotus_root();
    let output = schemagen(root.path(), &[]);
    assert!(output.status.success(), "{output:?}");

    let manifest: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let object = manifest.as_object().expect("manifest is an object");
    let names: Vec<_> = object.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "ActorAddress",
            "ActorSectorSize",
            "AuthNew",
            "AuthVerify",
            "ChainNotify",
            "Closing",
            "LogList",
            "LogSetLevel",
            "MiningBase",
            "PledgeSector",
            "SectorsList",
            "SectorsRefs",
            "SectorsStatus",
            "Session",
            "Shutdown",
            "StorageList",
            "StorageLocal",
            "Version",
        ]
    );
    assert_eq!(object["ChainNotify"], serde_json::json!({ "subscription": true }));
    assert_eq!(object["SectorsList"], serde_json::json!({}));
    assert!(!object.contains_key("NotPartOfTheAPI"));
}

#[test]
fn output_is_compact_and_stable() {
    let root = lotus_root();
    let first = schemagen(root.path(), &[]);
    let second = schemagen(root.path(), &[]);

    assert_eq!(first.stdout, second.stdout);
    let text = stdout(&first);
    assert!(text.starts_with(r#"{"ActorAddress":{},"ActorSectorSize":{}"#), "{text}");
    assert!(!text.ends_with('\n'));
}

#[test]
fn markdown_shows_method_groups() {
    let root = lotus_root();
    let output = schemagen(root.path(), &["--format", "markdown"]);
    assert!(output.status.success(), "{output:?}");

    let text = stdout(&output);
    assert!(
        text.contains("## Sectors\nThe Sectors method group contains methods for interacting with"),
        "{text}"
    );
    assert!(text.contains("### SectorsList\nList all staged sectors\n"), "{text}");
    assert!(text.contains("### StorageList\nlists attached storage paths\n"), "{text}");
}

#[test]
fn unconfigured_foreign_types_fail_without_output() {
    let root = lotus_root();
    let output = schemagen(root.path(), &["--format", "markdown", "--examples"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("schemagen error:"), "{stderr}");
}

#[test]
fn interface_flag_selects_another_interface() {
    let root = lotus_root();
    let output = schemagen(root.path(), &["--interface", "Common"]);
    assert!(output.status.success(), "{output:?}");

    let manifest: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let names: Vec<_> = manifest.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        names,
        vec![
            "AuthNew",
            "AuthVerify",
            "Closing",
            "LogList",
            "LogSetLevel",
            "Session",
            "Shutdown",
            "Version",
        ]
    );
}

#[test]
fn missing_api_directory_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = schemagen(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn configured_examples_cover_the_whole_api() {
    let root = lotus_root();
    std::fs::write(root.path().join("schemagen.toml"), EXAMPLES_TOML).unwrap();

    let output = schemagen(root.path(), &["--format", "markdown", "--examples"]);
    assert!(output.status.success(), "{output:?}");

    let text = stdout(&output);
    assert!(
        text.contains("### ActorAddress\nThere are not yet any comments for this method.\n\nInputs: `[]`\n\nResponse: `\"f01234\"`\n"),
        "{text}"
    );
    assert!(text.contains("Inputs: `[\"f01234\"]`\n\nResponse: `34359738368`"), "{text}");
    assert!(
        text.contains(r#"Response: `[{"Type":"string value","Val":{"Blocks":["string value"],"Height":42}}]`"#),
        "{text}"
    );
    assert!(text.contains("Response: `{}`"), "{text}");
    assert!(text.contains("Inputs: `[9,true]`"), "{text}");
}
