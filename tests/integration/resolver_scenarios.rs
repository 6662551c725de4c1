//! Resolution scenarios against hand-built models and registries

use modelprobe::error::ResolveError;
use modelprobe::registry::{EntityKind, RoleRegistry};
use modelprobe::resolver::{resolve, resolve_all, FieldIndex};
use modelprobe::schema::{FieldDescriptor, FieldKind, ModelSchema};
use modelprobe::signature::FieldSignature;

fn comment_roles() -> RoleRegistry {
    RoleRegistry::builder(EntityKind::Comment)
        .passthrough(["id"])
        .role(
            "text",
            FieldSignature::plain(FieldKind::Text),
            "sets the comment text",
        )
        .role(
            "author",
            FieldSignature::relation(FieldKind::ForeignKey, "User"),
            "sets the comment's author",
        )
        .role(
            "post",
            FieldSignature::relation(FieldKind::ForeignKey, "Post"),
            "links the comment model to model `Post`",
        )
        .build()
}

#[test]
fn test_free_named_fields_resolve_by_shape() {
    let model = ModelSchema::new("Remark")
        .with_field(FieldDescriptor::new("body", FieldKind::Text))
        .with_field(FieldDescriptor::relation("writer", FieldKind::ForeignKey, "User"))
        .with_field(FieldDescriptor::relation("entry", FieldKind::ForeignKey, "Post"));

    let resolved = resolve_all(&model, &comment_roles()).unwrap();
    assert_eq!(
        resolved,
        vec![
            ("text".to_string(), "body".to_string()),
            ("author".to_string(), "writer".to_string()),
            ("post".to_string(), "entry".to_string()),
        ]
    );
}

#[test]
fn test_two_text_fields_make_the_model_ambiguous() {
    let model = ModelSchema::new("Remark")
        .with_field(FieldDescriptor::new("body", FieldKind::Text))
        .with_field(FieldDescriptor::new("summary", FieldKind::Text));

    let registry = RoleRegistry::builder(EntityKind::Comment)
        .role("text", FieldSignature::plain(FieldKind::Text), "sets the comment text")
        .build();

    let err = resolve(&model, &registry, "text").unwrap_err();
    assert_eq!(
        err,
        ResolveError::AmbiguousModel {
            model: "Remark".to_string()
        }
    );
}

#[test]
fn test_ambiguity_applies_to_roles_that_do_not_collide() {
    let model = ModelSchema::new("Remark")
        .with_field(FieldDescriptor::new("body", FieldKind::Text))
        .with_field(FieldDescriptor::relation("writer", FieldKind::ForeignKey, "User"))
        .with_field(FieldDescriptor::relation("entry", FieldKind::ForeignKey, "Post"))
        .with_field(FieldDescriptor::new("first", FieldKind::DateTime))
        .with_field(FieldDescriptor::new("second", FieldKind::DateTime));

    let err = resolve(&model, &comment_roles(), "author").unwrap_err();
    assert!(matches!(err, ResolveError::AmbiguousModel { .. }));
}

#[test]
fn test_missing_post_relation_mentions_post() {
    let model = ModelSchema::new("Remark")
        .with_field(FieldDescriptor::new("body", FieldKind::Text))
        .with_field(FieldDescriptor::relation("writer", FieldKind::ForeignKey, "User"));

    let err = resolve(&model, &comment_roles(), "post").unwrap_err();
    assert!(matches!(err, ResolveError::UnresolvedRole { ref role, .. } if role == "post"));
    let message = err.to_string();
    assert!(message.contains("Post"));
    assert!(message.contains("ForeignKey"));
    assert!(message.contains("links the comment model to model `Post`"));
}

#[test]
fn test_relation_to_wrong_target_does_not_match() {
    let model = ModelSchema::new("Remark")
        .with_field(FieldDescriptor::new("body", FieldKind::Text))
        .with_field(FieldDescriptor::relation("entry", FieldKind::OneToOne, "Post"));

    let err = resolve(&model, &comment_roles(), "post").unwrap_err();
    assert!(matches!(err, ResolveError::UnresolvedRole { .. }));
}

#[test]
fn test_passthrough_and_unregistered_names_are_literal() {
    let model = ModelSchema::new("Remark")
        .with_field(FieldDescriptor::new("id", FieldKind::BigAuto))
        .with_field(FieldDescriptor::new("body", FieldKind::Text))
        .with_field(FieldDescriptor::new("summary", FieldKind::Text));

    // Literal names never consult the index, so the collision is not reported
    assert_eq!(resolve(&model, &comment_roles(), "id").unwrap(), "id");
    assert_eq!(resolve(&model, &comment_roles(), "rating").unwrap(), "rating");
}

#[test]
fn test_many_to_many_fields_are_not_indexed() {
    let model = ModelSchema::new("Remark")
        .with_field(FieldDescriptor::new("body", FieldKind::Text))
        .with_field(FieldDescriptor::relation("likes", FieldKind::ManyToMany, "User"))
        .with_field(FieldDescriptor::relation("also_likes", FieldKind::ManyToMany, "User"));

    let index = FieldIndex::build(&model, &comment_roles()).unwrap();
    assert_eq!(index.len(), 1);
}
