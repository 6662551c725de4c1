//! Full grading runs over models files

use crate::integration::test_utils::{blog_schema, blog_schema_path};
use modelprobe::config::ProbeConfig;
use modelprobe::report::check_schema;
use modelprobe::schema::parse_schema;

fn without_block(content: &str, block: &str) -> String {
    assert!(content.contains(block), "fixture changed: {block}");
    content.replace(block, "")
}

#[test]
fn test_reference_submission_passes() {
    let report = check_schema(&blog_schema(), &ProbeConfig::default());
    let failures: Vec<_> = report.failures().collect();
    assert!(failures.is_empty(), "unexpected failures: {failures:?}");
    assert!(report
        .outcomes
        .iter()
        .any(|o| o.subject == "comment.post" && o.message == "`Remark.entry`"));
}

#[test]
fn test_comment_without_post_relation_fails() {
    let content = std::fs::read_to_string(blog_schema_path()).unwrap();
    let content = without_block(
        &content,
        "[[models.fields]]\nname = \"entry\"\nkind = \"foreign_key\"\nrelated = \"Post\"\n",
    );
    let schema = parse_schema(&content).unwrap();

    let report = check_schema(&schema, &ProbeConfig::default());
    assert!(!report.is_success());
    let failure = report
        .failures()
        .find(|o| o.subject == "comment model")
        .unwrap();
    assert!(failure.message.contains("`Post`"));
}

#[test]
fn test_duplicate_comment_signature_fails_whole_model() {
    let content = std::fs::read_to_string(blog_schema_path()).unwrap();
    let content = format!(
        "{content}\n[[models.fields]]\nname = \"edited\"\nkind = \"date_time\"\n"
    );
    let schema = parse_schema(&content).unwrap();

    let report = check_schema(&schema, &ProbeConfig::default());
    let failure = report
        .failures()
        .find(|o| o.subject == "comment fields")
        .unwrap();
    assert!(failure.message.contains("`Remark`"));
    assert!(!report.outcomes.iter().any(|o| o.subject == "comment.text"));
}

#[test]
fn test_wrong_literal_parameter_is_reported() {
    let content = std::fs::read_to_string(blog_schema_path()).unwrap();
    let content = content.replacen(
        "name = \"name\"\nkind = \"char\"\noptions = { max_length = 256 }",
        "name = \"name\"\nkind = \"char\"\noptions = { max_length = 100 }",
        1,
    );
    let schema = parse_schema(&content).unwrap();

    let report = check_schema(&schema, &ProbeConfig::default());
    let failures: Vec<_> = report.failures().map(|o| o.subject.as_str()).collect();
    assert_eq!(failures, vec!["Location.name"]);
}

#[test]
fn test_renamed_post_model_is_followed() {
    let content = std::fs::read_to_string(blog_schema_path()).unwrap();
    let content = content
        .replace("name = \"Post\"", "name = \"Entry\"")
        .replace("related = \"Post\"", "related = \"Entry\"");
    let schema = parse_schema(&content).unwrap();

    let mut config = ProbeConfig::default();
    config.entities.post_model = "Entry".to_string();
    let report = check_schema(&schema, &config);
    assert!(report.is_success());
}
