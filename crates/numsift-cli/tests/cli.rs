use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_cmd(home: &Path, args: &[&str]) -> String {
    let output = cargo_bin_cmd!("numsift")
        .env("XDG_CONFIG_HOME", home)
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(home: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("numsift")
        .env("XDG_CONFIG_HOME", home)
        .arg("--json")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_clean_text_reports_accepted_and_rejected() {
    let temp = TempDir::new().expect("temp dir");

    let report = run_cmd_json(
        temp.path(),
        &[
            "--region",
            "za",
            "clean",
            "--text",
            "Call John on 079 361 2279 or +27 82 555 1234, old: 0793612279, bad: 1234567",
        ],
    );
    assert_eq!(report["region"], "ZA");
    assert_eq!(report["accepted"][0], "+27793612279");
    assert_eq!(report["accepted"][1], "+27825551234");
    assert_eq!(report["accepted_count"], 2);
    assert_eq!(report["rejected"][0], "1234567");
    assert_eq!(report["duplicates"], 1);
}

#[test]
fn cli_clean_uses_configured_region_and_saves_list() {
    let temp = TempDir::new().expect("temp dir");
    let config_dir = temp.path().join("numsift");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(config_dir.join("config.toml"), "default_region = \"ZA\"\n").expect("config");

    let numbers = temp.path().join("numbers.csv");
    fs::write(&numbers, "name,phone\nAda,082 555 1234\nGrace,079-361-2279\n").expect("csv");
    let out = temp.path().join("cleaned").join("numbers.txt");

    let stdout = run_cmd(
        temp.path(),
        &[
            "clean",
            numbers.to_str().expect("numbers path"),
            "--out",
            out.to_str().expect("out path"),
        ],
    );
    assert!(stdout.contains("Valid: 2 • Removed: 0"));
    assert_eq!(
        fs::read_to_string(&out).expect("read list"),
        "+27825551234\n+27793612279\n"
    );

    let again = run_cmd_json(
        temp.path(),
        &["reclean", out.to_str().expect("out path"), "--in-place"],
    );
    assert_eq!(again["accepted_count"], 2);
    assert_eq!(again["rejected_count"], 0);
    assert_eq!(
        fs::read_to_string(&out).expect("read list"),
        "+27825551234\n+27793612279\n"
    );
}

#[test]
fn cli_clean_reads_stdin() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("numsift")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--json", "--region", "ZA", "clean"])
        .write_stdin("0793612279\n0793612279\n")
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    let report: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(report["accepted_count"], 1);
    assert_eq!(report["examined"], 2);
}

#[test]
fn cli_clean_without_numbers_is_not_an_error() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_cmd(temp.path(), &["--region", "ZA", "clean", "--text", "no numbers"]);
    assert!(stdout.contains("No numbers found"));
}

#[test]
fn cli_clean_requires_region_for_national_numbers() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("numsift")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["clean", "--text", "0793612279"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("default region is required"));
}

#[test]
fn cli_rejects_unknown_region() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("numsift")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--region", "XYZ", "clean", "--text", "0793612279"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_rejects_unsupported_import_format() {
    let temp = TempDir::new().expect("temp dir");
    let sheet = temp.path().join("numbers.xlsx");
    fs::write(&sheet, b"PK").expect("write sheet");
    let output = cargo_bin_cmd!("numsift")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--region", "ZA", "clean", sheet.to_str().expect("path")])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_extract_lists_candidates() {
    let temp = TempDir::new().expect("temp dir");
    let candidates = run_cmd_json(
        temp.path(),
        &["extract", "--text", "a 079 361 2279 b abc0825551234"],
    );
    let items = candidates.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0], "079 361 2279");
}

#[test]
fn cli_clean_and_reclean_honor_configured_fallback_switch() {
    let temp = TempDir::new().expect("temp dir");
    let config_dir = temp.path().join("numsift");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(
        config_dir.join("config.toml"),
        "default_region = \"ZA\"\n[normalize]\nnational_prefix_fallback = false\n",
    )
    .expect("config");

    let cleaned = run_cmd_json(temp.path(), &["clean", "--text", "+0825551234"]);
    assert_eq!(cleaned["accepted_count"], 0);
    assert_eq!(cleaned["rejected"][0], "+0825551234");

    let list = temp.path().join("list.txt");
    fs::write(&list, "+0825551234\n").expect("list");
    let recleaned = run_cmd_json(temp.path(), &["reclean", list.to_str().expect("list path")]);
    assert_eq!(recleaned["accepted_count"], 0);
    assert_eq!(recleaned["rejected"][0], "+0825551234");
}

#[test]
fn cli_clean_applies_fallback_by_default() {
    let temp = TempDir::new().expect("temp dir");
    let cleaned = run_cmd_json(
        temp.path(),
        &["--region", "ZA", "clean", "--text", "+0825551234"],
    );
    assert_eq!(cleaned["accepted"][0], "+27825551234");

    let strict = run_cmd_json(
        temp.path(),
        &["--region", "ZA", "clean", "--no-national-fallback", "--text", "+0825551234"],
    );
    assert_eq!(strict["accepted_count"], 0);
}
