//! Class adapter: role queries against a model shape.

use crate::adapter::entity::DisplayRule;
use crate::adapter::ModelAdapter;
use crate::error::{AdapterError, ResolveError};
use crate::registry::{EntityKind, RoleRegistry};
use crate::resolver::{structural_role, FieldIndex};
use crate::schema::{FieldDescriptor, ModelSchema};
use std::cell::OnceCell;
use std::sync::Arc;

pub struct ClassAdapter<'r> {
    model: Arc<ModelSchema>,
    registry: &'r RoleRegistry,
    display: DisplayRule,
    /// Built on first structural access, then reused for this model shape
    index: OnceCell<Result<FieldIndex, ResolveError>>,
}

impl<'r> ClassAdapter<'r> {
    pub fn new(model: Arc<ModelSchema>, registry: &'r RoleRegistry, display: DisplayRule) -> Self {
        Self {
            model,
            registry,
            display,
            index: OnceCell::new(),
        }
    }

    pub fn entity(&self) -> EntityKind {
        self.registry.entity()
    }

    pub fn item_model_arc(&self) -> Arc<ModelSchema> {
        Arc::clone(&self.model)
    }

    pub fn index(&self) -> Result<&FieldIndex, ResolveError> {
        self.index
            .get_or_init(|| FieldIndex::build(&self.model, self.registry))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Declared name behind `role`
    pub fn resolve_name(&self, role: &str) -> Result<String, ResolveError> {
        match structural_role(self.registry, role) {
            Some(descriptor) => Ok(self.index()?.lookup(descriptor)?.to_string()),
            None => Ok(role.to_string()),
        }
    }

    /// Declared field behind `role`
    pub fn field(&self, role: &str) -> Result<&FieldDescriptor, AdapterError> {
        let name = self.resolve_name(role)?;
        self.model
            .field(&name)
            .ok_or_else(|| AdapterError::UnknownAttribute {
                model: self.model.name.clone(),
                name,
            })
    }

    /// Declared field by literal name, bypassing roles
    pub fn raw_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.model.field(name)
    }

    pub fn display_rule(&self) -> DisplayRule {
        self.display
    }

    pub fn displayed_field_name(&self) -> &'static str {
        self.display.role
    }
}

impl ModelAdapter for ClassAdapter<'_> {
    fn item_model(&self) -> &ModelSchema {
        &self.model
    }

    fn registry(&self) -> &RoleRegistry {
        self.registry
    }

    fn class_adapter(&self) -> &ClassAdapter<'_> {
        self
    }

    fn displayed_field_name_or_value(&self) -> Result<String, AdapterError> {
        Ok(self.displayed_field_name().to_string())
    }
}
