//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn blog(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("blog").unwrap();
    cmd.env("HOME", home)
        .current_dir(home)
        .env_remove("DATABASE_URL")
        .env_remove("BLOG_BIND")
        .env_remove("BLOG_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

// === Help Tests ===

#[test]
fn test_serve_help() {
    let home = tempfile::tempdir().unwrap();
    blog(home.path())
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--reset"));
}

#[test]
fn test_init_help() {
    let home = tempfile::tempdir().unwrap();
    blog(home.path())
        .arg("init")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database URL"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let home = tempfile::tempdir().unwrap();
    blog(home.path()).arg("frobnicate").assert().failure();
}

// === Init Tests ===

#[test]
fn test_init_seeds_demo_data() {
    let home = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", home.path().join("data/blog.db").display());

    blog(home.path())
        .arg("init")
        .arg("--database-url")
        .arg(&url)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 posts and 4 comments"));

    assert!(home.path().join("data/blog.db").exists());
}

#[test]
fn test_init_reads_database_url_from_env() {
    let home = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", home.path().join("env.db").display());

    blog(home.path())
        .env("DATABASE_URL", &url)
        .arg("init")
        .assert()
        .success();

    assert!(home.path().join("env.db").exists());
}

#[test]
fn test_init_twice_is_repeatable() {
    let home = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", home.path().join("blog.db").display());

    for _ in 0..2 {
        blog(home.path())
            .args(["init", "--database-url", &url])
            .assert()
            .success()
            .stdout(predicate::str::contains("3 posts and 4 comments"));
    }
}

// === Config Tests ===

#[test]
fn test_config_path_under_home() {
    let home = tempfile::tempdir().unwrap();
    blog(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".quillblog"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_reads_file() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("custom.toml");
    std::fs::write(&path, "[server]\nbind = \"127.0.0.1:7070\"\n").unwrap();

    blog(home.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:7070"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let home = tempfile::tempdir().unwrap();
    blog(home.path())
        .args(["--config", "does-not-exist.toml", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config not found"));
}
