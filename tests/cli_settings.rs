mod common;

use common::{HAPPY_PATH, TestContext};
use predicates::prelude::*;
use std::fs;

#[test]
fn settings_file_in_output_directory_is_applied() {
    let ctx = TestContext::new();
    fs::write(
        ctx.work_dir().join("n8n-provision.toml"),
        r#"
[app]
domain = "example.dev"

[runtime]
timezone = "Asia/Tokyo"
metrics = false
"#,
    )
    .unwrap();

    ctx.cli()
        .write_stdin(HAPPY_PATH)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ App URL will be: https://myapp.example.dev"));

    assert_eq!(ctx.env_value("GENERIC_TIMEZONE").as_deref(), Some("Asia/Tokyo"));
    assert_eq!(ctx.env_value("N8N_METRICS").as_deref(), Some("false"));
    assert!(ctx.read_script().contains("WEBHOOK_URL='https://myapp.example.dev/'"));
}

#[test]
fn explicit_config_controls_defaults_and_lengths() {
    let ctx = TestContext::new();
    let config = ctx.scratch().join("custom.toml");
    fs::write(
        &config,
        "[admin]\ndefault_user = \"root\"\n\n[secrets]\npassword_length = 32\n",
    )
    .unwrap();

    ctx.cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n\nAbcdef12\nAbcdef12\nmyapp\n")
        .assert()
        .success();

    assert_eq!(ctx.env_value("N8N_BASIC_AUTH_USER").as_deref(), Some("root"));
    assert_eq!(ctx.env_value("DB_PASSWORD").unwrap().len(), 32);
    assert_eq!(ctx.env_value("JWT_SECRET").unwrap().len(), 32);
}

#[test]
fn missing_explicit_config_fails_before_prompting() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "nope.toml"])
        .write_stdin(HAPPY_PATH)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Deployment Setup").not())
        .stderr(predicate::str::contains("Settings file not found"));

    ctx.assert_no_artifacts();
}

#[test]
fn malformed_settings_are_rejected() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("n8n-provision.toml"), "[secrets]\npassword_length = 4\n")
        .unwrap();

    ctx.cli()
        .write_stdin(HAPPY_PATH)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("password_length must be at least 8"));

    ctx.assert_no_artifacts();
}

#[test]
fn invalid_default_app_name_fails_before_prompting() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("n8n-provision.toml"), "[app]\ndefault_name = \"my app\"\n")
        .unwrap();

    ctx.cli()
        .write_stdin("1\nops\nAbcdef12\nAbcdef12\n\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Choose option").not())
        .stdout(predicate::str::contains("Enter n8n admin password").not())
        .stderr(predicate::str::contains("app.default_name 'my app' is invalid"));

    ctx.assert_no_artifacts();
}

#[test]
fn runtime_values_cannot_inject_env_lines() {
    let ctx = TestContext::new();
    fs::write(
        ctx.work_dir().join("n8n-provision.toml"),
        "[runtime]\nlog_level = \"info\\nN8N_BASIC_AUTH_ACTIVE=false\"\n",
    )
    .unwrap();

    ctx.cli()
        .write_stdin(HAPPY_PATH)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Choose option").not())
        .stderr(predicate::str::contains("runtime.log_level cannot contain control characters"));

    ctx.assert_no_artifacts();
}

#[test]
fn debug_flag_logs_to_stderr_only() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--debug")
        .write_stdin(HAPPY_PATH)
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote artifact"))
        .stdout(predicate::str::contains("wrote artifact").not());
}

#[test]
fn version_flag_prints_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
