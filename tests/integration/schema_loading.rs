//! Loading models files from disk

use crate::integration::test_utils::blog_schema;
use modelprobe::error::SchemaError;
use modelprobe::schema::{load_schema_file, FieldKind};
use tempfile::TempDir;

#[test]
fn test_reference_blog_schema_loads() {
    let schema = blog_schema();
    assert_eq!(schema.len(), 4);
    assert!(schema.knows("User"));

    let remark = schema.model("Remark").unwrap();
    assert_eq!(remark.fields[0].name, "id");
    assert_eq!(remark.field("entry").unwrap().kind, FieldKind::ForeignKey);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    let err = load_schema_file(&temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SchemaError::Io(_)));
}

#[test]
fn test_duplicate_field_names_are_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("models.toml");
    std::fs::write(
        &path,
        r#"
[[models]]
name = "Location"

[[models.fields]]
name = "name"
kind = "char"

[[models.fields]]
name = "name"
kind = "text"
"#,
    )
    .unwrap();

    let err = load_schema_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::DuplicateField { ref model, ref field } if model == "Location" && field == "name"
    ));
}

#[test]
fn test_dangling_relation_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("models.toml");
    std::fs::write(
        &path,
        r#"
[[models]]
name = "Comment"

[[models.fields]]
name = "post"
kind = "foreign_key"
related = "Post"
"#,
    )
    .unwrap();

    let err = load_schema_file(&path).unwrap_err();
    assert!(err.to_string().contains("unknown model `Post`"));
}

#[test]
fn test_declared_primary_key_is_kept() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("models.toml");
    std::fs::write(
        &path,
        r#"
[[models]]
name = "Tag"

[[models.fields]]
name = "id"
kind = "auto"

[[models.fields]]
name = "label"
kind = "slug"
"#,
    )
    .unwrap();

    let schema = load_schema_file(&path).unwrap();
    let tag = schema.model("Tag").unwrap();
    assert_eq!(tag.fields.len(), 2);
    assert_eq!(tag.field("id").unwrap().kind, FieldKind::Auto);
}
