//! Model schemas and the set of models a submission declares.

use crate::schema::field::{EntityName, FieldDescriptor, FieldKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A model class: its name and declared fields in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSchema {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl ModelSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn entity(&self) -> EntityName {
        EntityName::new(self.name.clone())
    }

    /// Look up a declared field by its literal name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields backed by a column, in declaration order
    pub fn concrete_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.kind.is_concrete())
    }

    /// Relation fields of `kind` pointing at `target`
    pub fn relations_to<'a>(
        &'a self,
        kind: FieldKind,
        target: &'a str,
    ) -> impl Iterator<Item = &'a FieldDescriptor> + 'a {
        self.fields.iter().filter(move |f| {
            f.kind == kind && f.related.as_ref().map(EntityName::as_str) == Some(target)
        })
    }

    pub fn has_primary_key(&self) -> bool {
        self.fields
            .iter()
            .any(|f| matches!(f.kind, FieldKind::Auto | FieldKind::BigAuto) || f.name == "id")
    }
}

/// All models declared by a submission, plus names of framework-provided models
#[derive(Debug, Clone, Default)]
pub struct SchemaSet {
    models: Vec<Arc<ModelSchema>>,
    external: Vec<String>,
}

impl SchemaSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: ModelSchema) -> Self {
        self.models.push(Arc::new(model));
        self
    }

    pub fn with_external(mut self, name: impl Into<String>) -> Self {
        self.external.push(name.into());
        self
    }

    pub fn model(&self, name: &str) -> Option<&Arc<ModelSchema>> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Declared models in declaration order
    pub fn models(&self) -> &[Arc<ModelSchema>] {
        &self.models
    }

    pub fn external(&self) -> &[String] {
        &self.external
    }

    /// Whether relations may point at `name`
    pub fn knows(&self, name: &str) -> bool {
        self.model(name).is_some() || self.external.iter().any(|e| e == name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
