//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_data(root: &Path, news: Option<&str>, tips: Option<&str>) {
    fs::create_dir_all(root.join("data")).expect("mkdir data");
    if let Some(news) = news {
        fs::write(root.join("data/news.json"), news).expect("write news");
    }
    if let Some(tips) = tips {
        fs::write(root.join("data/tips.json"), tips).expect("write tips");
    }
}

fn dashboard(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("intel-dashboard"));
    cmd.current_dir(dir);
    cmd
}

fn render_json(dir: &Path, extra: &[&str]) -> Value {
    let output = dashboard(dir)
        .args(["render", "--format", "json", "--no-timestamp"])
        .args(extra)
        .output()
        .expect("run render");
    assert!(output.status.success(), "render failed: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("json output")
}

const NEWS: &str = r#"{"articles": [
    {"title": "Rate cut", "pub_date": "2024-03-01", "category": "Finance", "region": "EU", "url": "https://example.com/rates"},
    {"title": "Vaccine trial", "pub_date": "2024-03-05", "category": "Health", "region": "US"},
    {"title": "Untagged", "pub_date": "2024-02-01"}
], "metadata": {"fetched": "2024-03-06"}}"#;

const TIPS: &str = r#"[
    {"title": "Budgeting", "date": "2024-03-03", "category": "Finance", "layer": "Apps", "contents": "Track spending."},
    {"title": "Prompting", "date": "2024-03-10", "category": "Tech", "source_type": "Blog"}
]"#;

#[test]
fn test_cli_version() {
    let tmp = TempDir::new().expect("tmp");
    dashboard(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("intel-dashboard"));
}

#[test]
fn test_cli_help() {
    let tmp = TempDir::new().expect("tmp");
    dashboard(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("News and Tips"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("options"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_render_merges_and_sorts_newest_first() {
    let tmp = TempDir::new().expect("tmp");
    write_data(tmp.path(), Some(NEWS), Some(TIPS));

    let doc = render_json(tmp.path(), &[]);
    let titles: Vec<&str> =
        doc["items"].as_array().expect("items").iter().map(|i| i["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Prompting", "Vaccine trial", "Budgeting", "Rate cut", "Untagged"]);
    assert_eq!(doc["counts"]["news"], 3);
    assert_eq!(doc["counts"]["tips"], 2);
    assert_eq!(doc["items"][2]["description"], "Track spending.");
}

#[test]
fn test_render_category_filter_keeps_untagged() {
    let tmp = TempDir::new().expect("tmp");
    write_data(tmp.path(), Some(NEWS), Some(TIPS));

    let doc = render_json(tmp.path(), &["--category", "Finance"]);
    let titles: Vec<&str> =
        doc["items"].as_array().expect("items").iter().map(|i| i["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Budgeting", "Rate cut", "Untagged"]);
    // Options still list every category.
    assert_eq!(doc["options"]["category"], serde_json::json!(["Finance", "Health", "Tech"]));
}

#[test]
fn test_render_type_and_region_filters_combine() {
    let tmp = TempDir::new().expect("tmp");
    write_data(tmp.path(), Some(NEWS), Some(TIPS));

    let doc = render_json(tmp.path(), &["--type", "News", "--region", "US,EU"]);
    assert_eq!(doc["showing"], 3);

    let doc = render_json(tmp.path(), &["--type", "News", "--region", "US"]);
    let titles: Vec<&str> =
        doc["items"].as_array().expect("items").iter().map(|i| i["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Vaccine trial", "Untagged"]);
}

#[test]
fn test_render_missing_tips_file() {
    let tmp = TempDir::new().expect("tmp");
    write_data(
        tmp.path(),
        Some(r#"[{"title": "A", "pub_date": "2024-01-01"}, {"title": "B", "pub_date": "2024-01-02"}]"#),
        None,
    );

    let doc = render_json(tmp.path(), &[]);
    let items = doc["items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i["type"] == "News"));
}

#[test]
fn test_render_single_article_scenario() {
    let tmp = TempDir::new().expect("tmp");
    write_data(
        tmp.path(),
        Some(r#"{"articles":[{"title":"A","pub_date":"2024-03-01","category":"X"}]}"#),
        Some("[]"),
    );

    let doc = render_json(tmp.path(), &[]);
    let item = &doc["items"][0];
    assert_eq!(doc["items"].as_array().expect("items").len(), 1);
    assert_eq!(item["type"], "News");
    assert_eq!(item["title"], "A");
    assert_eq!(item["category"], "X");
    assert_eq!(item["layer"], "—");
    assert_eq!(item["region"], "—");
    assert_eq!(item["sourceType"], "—");
}

#[test]
fn test_render_malformed_json_fails() {
    let tmp = TempDir::new().expect("tmp");
    write_data(tmp.path(), Some("{\"articles\": ["), Some("[]"));

    dashboard(tmp.path())
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed JSON"));
}

#[test]
fn test_render_text_no_matches() {
    let tmp = TempDir::new().expect("tmp");
    write_data(tmp.path(), Some(NEWS), Some(TIPS));

    dashboard(tmp.path())
        .args(["render", "--type", "Tips", "--category", "Health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 items"))
        .stdout(predicate::str::contains("No items match the selected filters."));
}

#[test]
fn test_render_html_to_file() {
    let tmp = TempDir::new().expect("tmp");
    write_data(tmp.path(), Some(NEWS), Some(TIPS));
    let out = tmp.path().join("out/cards.html");

    dashboard(tmp.path())
        .args(["render", "--format", "html", "--scope", "news", "--output"])
        .arg(&out)
        .assert()
        .success();

    let html = fs::read_to_string(out).expect("read html");
    assert_eq!(html.matches("<div class=\"card\">").count(), 3);
    assert!(html.contains("<span class=\"tag tag-region\">EU</span>"));
    assert!(!html.contains("Budgeting"));
}

#[test]
fn test_render_reports_unwritable_output_directory() {
    let tmp = TempDir::new().expect("tmp");
    write_data(tmp.path(), Some(NEWS), Some(TIPS));
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("write blocker");

    dashboard(tmp.path())
        .args(["render", "--output"])
        .arg(blocker.join("cards.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed creating output directory"));
}

#[test]
fn test_render_selects_exact_option_values() {
    let tmp = TempDir::new().expect("tmp");
    write_data(
        tmp.path(),
        Some(r#"[{"title": "blank", "category": ""}, {"title": "fin", "category": "Finance"}, {"title": "pad", "category": "Finance "}, {"title": "untagged"}]"#),
        None,
    );

    let doc = render_json(tmp.path(), &["--category", "Finance "]);
    let titles: Vec<&str> =
        doc["items"].as_array().expect("items").iter().map(|i| i["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["pad", "untagged"]);
    assert_eq!(doc["options"]["category"], serde_json::json!(["", "Finance", "Finance "]));
}

#[test]
fn test_render_rejects_invalid_format() {
    let tmp = TempDir::new().expect("tmp");
    dashboard(tmp.path())
        .args(["render", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_render_uses_discovered_config() {
    let tmp = TempDir::new().expect("tmp");
    write_data(tmp.path(), Some(NEWS), Some(TIPS));
    fs::write(
        tmp.path().join("intel-dashboard.toml"),
        "format = 'jsonl'\n\n[filters]\ntype = 'Tips'\n",
    )
    .expect("write config");

    let output = dashboard(tmp.path()).arg("render").output().expect("run render");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.lines().all(|line| line.contains("\"type\":\"Tips\"")));
}

#[test]
fn test_options_lists_populated_attributes() {
    let tmp = TempDir::new().expect("tmp");
    write_data(tmp.path(), Some(NEWS), Some(TIPS));

    dashboard(tmp.path())
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("News (3)"))
        .stdout(predicate::str::contains("Tips (2)"))
        .stdout(predicate::str::contains("Source Type:\n  Blog"))
        .stdout(predicate::str::contains("—").not());
}

#[test]
fn test_options_origin_prefixed_json() {
    let tmp = TempDir::new().expect("tmp");
    write_data(tmp.path(), Some(NEWS), Some(TIPS));

    let output = dashboard(tmp.path())
        .args(["options", "--json", "--origin-prefixed"])
        .output()
        .expect("run options");
    assert!(output.status.success());
    let doc: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(
        doc["options"]["category"],
        serde_json::json!(["News - Finance", "News - Health", "Tips - Finance", "Tips - Tech"])
    );
    assert_eq!(doc["options"]["region"], serde_json::json!(["EU", "US"]));
}

#[test]
fn test_validate_reports_shapes() {
    let tmp = TempDir::new().expect("tmp");
    write_data(tmp.path(), Some(NEWS), None);

    dashboard(tmp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("(document, 3 articles, 1 metadata keys)"))
        .stdout(predicate::str::contains("missing, treated as empty"));
}
