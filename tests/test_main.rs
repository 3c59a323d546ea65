// tests/test_main.rs

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn linkboard_cmd(store: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("linkboard").unwrap();
    cmd.env("LINKBOARD_STORE_PATH", store.path());
    cmd
}

#[test]
fn given_no_command_when_run_then_succeeds() {
    let store = TempDir::new().unwrap();
    linkboard_cmd(&store).args(["-d", "-d"]).assert().success();
}

#[test]
fn given_help_flag_when_run_then_shows_about() {
    Command::cargo_bin("linkboard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Collect, group and launch"));
}

#[test]
fn given_generate_config_flag_when_run_then_prints_default_config() {
    let store = TempDir::new().unwrap();
    linkboard_cmd(&store)
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("store_path"));
}

#[test]
fn given_new_link_when_add_then_list_json_contains_it() {
    let store = TempDir::new().unwrap();

    linkboard_cmd(&store)
        .args(["add", "Rust Blog", "https://blog.rust-lang.org", "-c", "dev"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Added \"Rust Blog\""));

    linkboard_cmd(&store)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust Blog"))
        .stdout(predicate::str::contains("https://blog.rust-lang.org"));
}

#[test]
fn given_empty_store_when_render_then_page_shows_no_items() {
    let store = TempDir::new().unwrap();
    linkboard_cmd(&store)
        .args(["render"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no-items"));
}

#[test]
fn given_major_category_when_render_then_page_has_category_section() {
    let store = TempDir::new().unwrap();
    for i in 0..4 {
        let title = format!("Dev {}", i);
        linkboard_cmd(&store)
            .args(["add", title.as_str(), "https://example.com", "-c", "dev"])
            .assert()
            .success();
    }
    linkboard_cmd(&store)
        .args(["add", "Lone", "https://example.com/x", "-c", "misc"])
        .assert()
        .success();

    let assert = linkboard_cmd(&store).args(["render"]).assert().success();
    let html = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(html.contains(r#"<span class="category-title">dev</span>"#));
    assert!(html.contains(r#"<span class="category-count">4</span>"#));
    assert!(html.contains(r#"<span class="category-title">Other links</span>"#));
    assert!(html.contains(r##"<span class="category-tag">#misc</span>"##));
}

#[test]
fn given_custom_other_label_when_render_then_label_on_page() {
    let store = TempDir::new().unwrap();
    linkboard_cmd(&store)
        .args(["add", "One", "https://example.com", "-c", "misc"])
        .assert()
        .success();
    linkboard_cmd(&store)
        .args(["rename-other", "Grab bag"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Grab bag"));

    let assert = linkboard_cmd(&store).args(["render"]).assert().success();
    let html = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(html.contains(r#"<span class="category-title">Grab bag</span>"#));
}

#[test]
fn given_declined_confirmation_when_delete_then_link_survives() {
    let store = TempDir::new().unwrap();
    linkboard_cmd(&store)
        .args(["add", "Keep me", "https://example.com"])
        .assert()
        .success();

    let assert = linkboard_cmd(&store)
        .args(["list", "--json"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let id = json[0]["id"].as_i64().unwrap();

    let id_arg = id.to_string();
    linkboard_cmd(&store)
        .args(["delete", id_arg.as_str()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Deletion cancelled"));

    linkboard_cmd(&store)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep me"));
}

#[test]
fn given_confirmed_delete_when_delete_then_link_removed() {
    let store = TempDir::new().unwrap();
    linkboard_cmd(&store)
        .args(["add", "Victim", "https://example.com"])
        .assert()
        .success();

    let assert = linkboard_cmd(&store)
        .args(["list", "--json"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let id = json[0]["id"].as_i64().unwrap();

    let id_arg = id.to_string();
    linkboard_cmd(&store)
        .args(["delete", id_arg.as_str()])
        .write_stdin("y\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Deleted \"Victim\""));

    let assert = linkboard_cmd(&store)
        .args(["list", "--json"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[test]
fn given_unknown_id_when_open_then_usage_error() {
    let store = TempDir::new().unwrap();
    linkboard_cmd(&store)
        .args(["open", "999"])
        .assert()
        .failure()
        .code(64)
        .stderr(predicate::str::contains("Link not found with ID 999"));
}

#[test]
fn given_missing_output_dir_when_render_then_usage_error() {
    let store = TempDir::new().unwrap();
    linkboard_cmd(&store)
        .args(["render", "-o", "/nonexistent-linkboard-dir/out.html"])
        .assert()
        .failure()
        .code(64)
        .stderr(predicate::str::contains("parent directory does not exist"));
}

#[test]
fn given_missing_explicit_config_when_run_then_usage_error() {
    Command::cargo_bin("linkboard")
        .unwrap()
        .args(["--config", "/no/such/config.toml", "list"])
        .assert()
        .failure()
        .code(64)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn given_bash_shell_when_completion_then_script_on_stdout() {
    let store = TempDir::new().unwrap();
    linkboard_cmd(&store)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
