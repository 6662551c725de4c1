//! Properties of structural resolution over generated models

use modelprobe::adapter::Adapters;
use modelprobe::error::ResolveError;
use modelprobe::registry::{EntityKind, RoleRegistry};
use modelprobe::resolver::resolve;
use modelprobe::schema::{FieldDescriptor, FieldKind, ModelInstance, ModelSchema};
use modelprobe::signature::FieldSignature;
use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;

const PLAIN_KINDS: [FieldKind; 11] = [
    FieldKind::Char,
    FieldKind::Text,
    FieldKind::Slug,
    FieldKind::Email,
    FieldKind::Boolean,
    FieldKind::Integer,
    FieldKind::PositiveInteger,
    FieldKind::Date,
    FieldKind::DateTime,
    FieldKind::Image,
    FieldKind::File,
];

fn role_name(kind: FieldKind) -> String {
    format!("role_{}", kind.class_name().to_lowercase())
}

/// One role per kind, each expecting a plain field of that kind
fn registry_for(kinds: &[FieldKind]) -> RoleRegistry {
    kinds
        .iter()
        .fold(RoleRegistry::builder(EntityKind::Comment), |builder, kind| {
            builder.role(
                role_name(*kind),
                FieldSignature::plain(*kind),
                format!("holds the {kind} value"),
            )
        })
        .build()
}

fn model_for(prefix: &str, kinds: &[FieldKind]) -> ModelSchema {
    kinds
        .iter()
        .enumerate()
        .fold(ModelSchema::new("Generated"), |model, (i, kind)| {
            model.with_field(FieldDescriptor::new(format!("{prefix}_{i}"), *kind))
        })
}

fn kinds_strategy() -> impl Strategy<Value = Vec<FieldKind>> {
    proptest::sample::subsequence(PLAIN_KINDS.to_vec(), 1..=PLAIN_KINDS.len())
}

#[test]
fn test_unique_signatures_resolve_to_their_field() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&("[a-z]{1,8}", kinds_strategy()), |(prefix, kinds)| {
            let model = model_for(&prefix, &kinds);
            let registry = registry_for(&kinds);

            for (i, kind) in kinds.iter().enumerate() {
                let resolved = resolve(&model, &registry, &role_name(*kind)).unwrap();
                prop_assert_eq!(resolved, format!("{prefix}_{i}"));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_any_collision_rejects_every_role() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(kinds_strategy(), any::<proptest::sample::Index>(), any::<proptest::sample::Index>()),
            |(kinds, duplicated, requested)| {
                let mut declared = kinds.clone();
                declared.push(*duplicated.get(&kinds));
                let model = model_for("f", &declared);
                let registry = registry_for(&kinds);

                let role = role_name(*requested.get(&kinds));
                let err = resolve(&model, &registry, &role).unwrap_err();
                let ambiguous = matches!(err, ResolveError::AmbiguousModel { .. });
                prop_assert!(ambiguous, "expected ambiguity for {}, got {:?}", role, err);
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_missing_role_reports_its_description() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(kinds_strategy(), any::<proptest::sample::Index>()), |(kinds, missing)| {
            let absent = *missing.get(&kinds);
            let declared: Vec<_> = kinds.iter().copied().filter(|k| *k != absent).collect();
            let model = model_for("f", &declared);
            let registry = registry_for(&kinds);

            let err = resolve(&model, &registry, &role_name(absent)).unwrap_err();
            let description = format!("holds the {} value", absent);
            let message = err.to_string();
            prop_assert!(
                message.contains(&description),
                "message {:?} lacks {:?}",
                message,
                description
            );
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_resolution_is_idempotent() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&("[a-z]{1,8}", kinds_strategy()), |(prefix, kinds)| {
            let model = Arc::new(model_for(&prefix, &kinds));
            let registry = registry_for(&kinds);
            let class = modelprobe::adapter::ClassAdapter::new(
                Arc::clone(&model),
                &registry,
                Adapters::default().display_rule(EntityKind::Comment),
            );

            for kind in &kinds {
                let role = role_name(*kind);
                let first = class.resolve_name(&role).unwrap();
                prop_assert_eq!(class.resolve_name(&role).unwrap(), first.clone());
                prop_assert_eq!(resolve(&model, &registry, &role).unwrap(), first);
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_set_then_get_returns_written_value() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let model = Arc::new(
        ModelSchema::new("Remark")
            .with_field(FieldDescriptor::new("id", FieldKind::BigAuto))
            .with_field(FieldDescriptor::new("body", FieldKind::Text))
            .with_field(FieldDescriptor::relation("writer", FieldKind::ForeignKey, "User"))
            .with_field(FieldDescriptor::relation("entry", FieldKind::ForeignKey, "Post"))
            .with_field(FieldDescriptor::new("posted", FieldKind::DateTime)),
    );
    let adapters = Adapters::default();

    runner
        .run(&(any::<String>(), any::<i64>()), |(text, post_id)| {
            let mut item = ModelInstance::new(Arc::clone(&model));
            let mut adapter = adapters.instance(EntityKind::Comment, &mut item);

            adapter.set("text", json!(text)).unwrap();
            adapter.set("post", json!(post_id)).unwrap();
            prop_assert_eq!(adapter.get("text").unwrap(), &json!(text));
            prop_assert_eq!(adapter.get("post").unwrap(), &json!(post_id));
            Ok(())
        })
        .unwrap();
}
