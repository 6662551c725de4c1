//! Model discovery
//!
//! Post and user models have fixed names. The comment model may be called
//! anything, so it is found by shape: the first model, in declaration order,
//! that is not one of the known models and has a `ForeignKey` to the post model.

use crate::config::EntitiesConfig;
use crate::error::DiscoveryError;
use crate::registry::EntityKind;
use crate::schema::{FieldKind, ModelSchema, SchemaSet};
use std::sync::Arc;
use tracing::debug;

/// Locate the model standing for `entity`
pub fn find_entity_model(
    entity: EntityKind,
    schema: &SchemaSet,
    entities: &EntitiesConfig,
) -> Result<Arc<ModelSchema>, DiscoveryError> {
    match entity {
        EntityKind::Post => find_named(schema, &entities.post_model),
        EntityKind::User => find_user_model(schema, entities),
        EntityKind::Comment => find_comment_model(schema, entities),
    }
}

/// The comment model, whatever its name
pub fn find_comment_model(
    schema: &SchemaSet,
    entities: &EntitiesConfig,
) -> Result<Arc<ModelSchema>, DiscoveryError> {
    let found = schema
        .models()
        .iter()
        .filter(|m| !entities.is_known(&m.name))
        .find(|m| {
            m.relations_to(FieldKind::ForeignKey, &entities.post_model)
                .next()
                .is_some()
        });

    match found {
        Some(model) => {
            debug!(model = %model.name, "Discovered comment model");
            Ok(Arc::clone(model))
        }
        None => Err(DiscoveryError::CommentModelMissing {
            post_model: entities.post_model.clone(),
        }),
    }
}

/// The user model is usually framework-provided and listed as external;
/// describe it with the standard user fields in that case.
fn find_user_model(
    schema: &SchemaSet,
    entities: &EntitiesConfig,
) -> Result<Arc<ModelSchema>, DiscoveryError> {
    if let Some(model) = schema.model(&entities.user_model) {
        return Ok(Arc::clone(model));
    }
    if schema.external().iter().any(|e| *e == entities.user_model) {
        return Ok(Arc::new(standard_user_model(&entities.user_model)));
    }
    Err(DiscoveryError::ModelMissing(entities.user_model.clone()))
}

fn find_named(schema: &SchemaSet, name: &str) -> Result<Arc<ModelSchema>, DiscoveryError> {
    schema
        .model(name)
        .cloned()
        .ok_or_else(|| DiscoveryError::ModelMissing(name.to_string()))
}

/// Fields of the framework's default user model
pub fn standard_user_model(name: &str) -> ModelSchema {
    use crate::schema::FieldDescriptor;

    ModelSchema::new(name)
        .with_field(FieldDescriptor::new("id", FieldKind::Auto))
        .with_field(FieldDescriptor::new("password", FieldKind::Char))
        .with_field(FieldDescriptor::new("last_login", FieldKind::DateTime))
        .with_field(FieldDescriptor::new("is_superuser", FieldKind::Boolean))
        .with_field(FieldDescriptor::new("username", FieldKind::Char))
        .with_field(FieldDescriptor::new("first_name", FieldKind::Char))
        .with_field(FieldDescriptor::new("last_name", FieldKind::Char))
        .with_field(FieldDescriptor::new("email", FieldKind::Email))
        .with_field(FieldDescriptor::new("is_staff", FieldKind::Boolean))
        .with_field(FieldDescriptor::new("is_active", FieldKind::Boolean))
        .with_field(FieldDescriptor::new("date_joined", FieldKind::DateTime))
}
