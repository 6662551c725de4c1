//! Adapters
//!
//! Role-based access to a model whose field names are not known in advance.
//! A [`ClassAdapter`] answers "which field plays role X"; an [`InstanceAdapter`]
//! also reads and writes the value behind a role. Both are handed out by
//! [`Adapters`], which owns the registries and display rules.
//!
//! ```ignore
//! let adapters = Adapters::new(&config);
//! let comments = adapters.for_schema(EntityKind::Comment, &schema)?;
//! comments.student_field_name("text")?;      // e.g. "body"
//!
//! let mut item = ModelInstance::new(comments.item_model_arc());
//! let mut adapter = adapters.instance(EntityKind::Comment, &mut item);
//! adapter.set("text", "First!".into())?;
//! ```

pub mod class;
pub mod entity;
pub mod instance;

pub use class::ClassAdapter;
pub use entity::{DisplayRule, Normalize};
pub use instance::InstanceAdapter;

use crate::config::{DisplayConfig, EntitiesConfig, ProbeConfig};
use crate::discovery::find_entity_model;
use crate::error::{AdapterError, DiscoveryError, ResolveError};
use crate::registry::{EntityKind, RegistrySet, RoleRegistry};
use crate::schema::{ModelInstance, ModelSchema, SchemaSet};
use std::sync::Arc;

/// Interface shared by class and instance adapters
pub trait ModelAdapter {
    /// The model resolution runs against, even when wrapping an instance
    fn item_model(&self) -> &ModelSchema;

    fn registry(&self) -> &RoleRegistry;

    /// Adapter over the wrapped item's model
    fn class_adapter(&self) -> &ClassAdapter<'_>;

    /// Declared name behind `role`; pass-through and unregistered names come back unchanged
    fn resolve(&self, role: &str) -> Result<String, ResolveError> {
        self.class_adapter().resolve_name(role)
    }

    /// Declared name behind `role`, which must exist on the model
    fn student_field_name(&self, role: &str) -> Result<String, AdapterError> {
        Ok(self.class_adapter().field(role)?.name.clone())
    }

    /// The displayed role name (class adapter) or its normalized value (instance adapter)
    fn displayed_field_name_or_value(&self) -> Result<String, AdapterError>;
}

/// Adapter factory
pub struct Adapters {
    registries: RegistrySet,
    entities: EntitiesConfig,
    display: DisplayConfig,
}

impl Adapters {
    pub fn new(config: &ProbeConfig) -> Self {
        Self {
            registries: RegistrySet::new(&config.entities),
            entities: config.entities.clone(),
            display: config.display.clone(),
        }
    }

    pub fn registries(&self) -> &RegistrySet {
        &self.registries
    }

    pub fn display_rule(&self, entity: EntityKind) -> DisplayRule {
        DisplayRule::for_entity(entity, &self.display)
    }

    /// Wrap a model class
    pub fn class(&self, entity: EntityKind, model: Arc<ModelSchema>) -> ClassAdapter<'_> {
        ClassAdapter::new(
            model,
            self.registries.get(entity),
            self.display_rule(entity),
        )
    }

    /// Wrap a model instance; the adapter borrows it exclusively
    pub fn instance<'a>(
        &'a self,
        entity: EntityKind,
        item: &'a mut ModelInstance,
    ) -> InstanceAdapter<'a> {
        let class = self.class(entity, Arc::clone(item.model()));
        InstanceAdapter::new(class, item)
    }

    /// Locate the entity's model in a submission and wrap it
    pub fn for_schema(
        &self,
        entity: EntityKind,
        schema: &SchemaSet,
    ) -> Result<ClassAdapter<'_>, DiscoveryError> {
        let model = find_entity_model(entity, schema, &self.entities)?;
        Ok(self.class(entity, model))
    }
}

impl Default for Adapters {
    fn default() -> Self {
        Self::new(&ProbeConfig::default())
    }
}
