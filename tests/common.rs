use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

/// A campus command isolated from the caller's session and config
pub fn campus(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("campus");
    cmd.env_remove("CAMPUS_USER")
        .env_remove("CAMPUS_COMPASS_API_KEY")
        .env_remove("CAMPUS_COMPASS_ENDPOINT")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config_dir);
    cmd
}

#[allow(dead_code)]
pub fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join("campus.toml"), content).expect("write campus.toml");
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
