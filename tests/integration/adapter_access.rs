//! Role-based access through class and instance adapters

use crate::integration::test_utils::{blog_schema, remark};
use modelprobe::adapter::{Adapters, ModelAdapter};
use modelprobe::config::ProbeConfig;
use modelprobe::error::AdapterError;
use modelprobe::registry::EntityKind;
use modelprobe::schema::ModelInstance;
use modelprobe::store::{InstanceStore, MemoryStore};
use serde_json::json;

#[test]
fn test_class_adapter_over_discovered_comment_model() {
    let schema = blog_schema();
    let adapters = Adapters::default();
    let comments = adapters.for_schema(EntityKind::Comment, &schema).unwrap();

    assert_eq!(comments.item_model().name, "Remark");
    assert_eq!(comments.student_field_name("text").unwrap(), "body");
    assert_eq!(comments.student_field_name("author").unwrap(), "writer");
    assert_eq!(comments.student_field_name("created_at").unwrap(), "posted");
    assert_eq!(comments.resolve("id").unwrap(), "id");
}

#[test]
fn test_post_image_is_found_under_any_name() {
    let schema = blog_schema();
    let adapters = Adapters::default();
    let posts = adapters.for_schema(EntityKind::Post, &schema).unwrap();

    assert_eq!(posts.student_field_name("image").unwrap(), "picture");
    assert_eq!(posts.student_field_name("title").unwrap(), "title");
}

#[test]
fn test_literal_name_missing_from_model() {
    let schema = blog_schema();
    let adapters = Adapters::default();
    let posts = adapters.for_schema(EntityKind::Post, &schema).unwrap();

    let err = posts.student_field_name("subtitle").unwrap_err();
    assert!(matches!(err, AdapterError::UnknownAttribute { ref name, .. } if name == "subtitle"));
}

#[test]
fn test_repeated_resolution_is_stable() {
    let adapters = Adapters::default();
    let class = adapters.class(EntityKind::Comment, remark());
    let first = class.resolve("post").unwrap();
    for _ in 0..3 {
        assert_eq!(class.resolve("post").unwrap(), first);
    }
}

#[test]
fn test_save_then_refresh_round_trips() {
    let adapters = Adapters::default();
    let mut store = MemoryStore::new();
    let mut item = ModelInstance::new(remark());

    let id = {
        let mut adapter = adapters.instance(EntityKind::Comment, &mut item);
        adapter.set("text", json!("First!")).unwrap();
        adapter.set("author", json!(3)).unwrap();
        adapter.set("post", json!(1)).unwrap();
        adapter.save(&mut store).unwrap()
    };
    assert_eq!(store.count("Remark"), 1);

    let mut fresh = store.get("Remark", id).unwrap();
    let mut adapter = adapters.instance(EntityKind::Comment, &mut fresh);
    adapter.set("text", json!("edited, never saved")).unwrap();
    adapter.refresh_from_db(&store).unwrap();

    assert_eq!(adapter.get_str("text").unwrap(), "First!");
    assert_eq!(adapter.get("author").unwrap(), &json!(3));
    assert_eq!(adapter.get_raw("entry"), Some(&json!(1)));
}

#[test]
fn test_refresh_requires_saved_instance() {
    let adapters = Adapters::default();
    let store = MemoryStore::new();
    let mut item = ModelInstance::new(remark());
    let mut adapter = adapters.instance(EntityKind::Comment, &mut item);

    let err = adapter.refresh_from_db(&store).unwrap_err();
    assert!(matches!(err, AdapterError::NotPersisted { .. }));
}

#[test]
fn test_displayed_values_are_normalized() {
    let schema = blog_schema();
    let mut config = ProbeConfig::default();
    config.display.comment_text_len = 5;
    let adapters = Adapters::new(&config);

    let post_model = adapters
        .for_schema(EntityKind::Post, &schema)
        .unwrap()
        .item_model_arc();
    let mut post = ModelInstance::new(post_model).with_value("title", "Hello\nworld");
    let adapter = adapters.instance(EntityKind::Post, &mut post);
    assert_eq!(adapter.displayed_field_name_or_value().unwrap(), "Helloworld");

    let mut comment = ModelInstance::new(remark()).with_value("body", "Great read\nThanks");
    let adapter = adapters.instance(EntityKind::Comment, &mut comment);
    assert_eq!(adapter.displayed_field_name_or_value().unwrap(), "Great");
}

#[test]
fn test_user_fields_are_read_literally() {
    let schema = blog_schema();
    let adapters = Adapters::default();
    let users = adapters.for_schema(EntityKind::User, &schema).unwrap();

    assert_eq!(users.displayed_field_name_or_value().unwrap(), "last_name");
    assert_eq!(users.student_field_name("username").unwrap(), "username");
}
