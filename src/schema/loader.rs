//! Schema file loading (TOML) and structural validation.

use crate::error::SchemaError;
use crate::schema::field::{FieldDescriptor, FieldKind};
use crate::schema::model::{ModelSchema, SchemaSet};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize)]
struct SchemaFile {
    #[serde(default)]
    external: ExternalModels,
    #[serde(default)]
    models: Vec<ModelSchema>,
}

#[derive(Debug, Default, Deserialize)]
struct ExternalModels {
    #[serde(default)]
    models: Vec<String>,
}

/// Load and validate a schema file
pub fn load_schema_file(path: &Path) -> Result<SchemaSet, SchemaError> {
    let content = std::fs::read_to_string(path)?;
    let set = parse_schema(&content)?;
    info!(
        path = %path.display(),
        models = set.len(),
        "Loaded model schema"
    );
    Ok(set)
}

/// Parse and validate schema TOML
///
/// Models without a primary key get the implicit `id: BigAutoField`.
pub fn parse_schema(content: &str) -> Result<SchemaSet, SchemaError> {
    let file: SchemaFile = toml::from_str(content)?;

    let mut set = SchemaSet::new();
    for name in file.external.models {
        set = set.with_external(name);
    }

    let mut seen_models = HashSet::new();
    for mut model in file.models {
        if !seen_models.insert(model.name.clone()) {
            return Err(SchemaError::DuplicateModel(model.name));
        }
        check_fields(&model)?;
        if !model.has_primary_key() {
            debug!(model = %model.name, "Adding implicit primary key");
            model
                .fields
                .insert(0, FieldDescriptor::new("id", FieldKind::BigAuto));
        }
        for field in &mut model.fields {
            if !field.kind.is_relation() {
                field.related = None;
            }
        }
        set = set.with_model(model);
    }

    check_relations(&set)?;
    Ok(set)
}

fn check_fields(model: &ModelSchema) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for field in &model.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                model: model.name.clone(),
                field: field.name.clone(),
            });
        }
        if field.kind.is_relation() && field.related.is_none() {
            return Err(SchemaError::MissingRelationTarget {
                model: model.name.clone(),
                field: field.name.clone(),
            });
        }
    }
    Ok(())
}

fn check_relations(set: &SchemaSet) -> Result<(), SchemaError> {
    for model in set.models() {
        for field in model.fields.iter().filter(|f| f.kind.is_relation()) {
            if let Some(target) = &field.related {
                if !set.knows(target.as_str()) {
                    return Err(SchemaError::DanglingRelation {
                        model: model.name.clone(),
                        field: field.name.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}
