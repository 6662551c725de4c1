//! Instance adapter: role-based reads and writes on one model instance.

use crate::adapter::class::ClassAdapter;
use crate::adapter::ModelAdapter;
use crate::error::AdapterError;
use crate::registry::RoleRegistry;
use crate::schema::{ModelInstance, ModelSchema};
use crate::store::InstanceStore;
use serde_json::Value as JsonValue;
use tracing::{debug, trace};

pub struct InstanceAdapter<'a> {
    class: ClassAdapter<'a>,
    item: &'a mut ModelInstance,
}

impl<'a> InstanceAdapter<'a> {
    pub(crate) fn new(class: ClassAdapter<'a>, item: &'a mut ModelInstance) -> Self {
        Self { class, item }
    }

    pub fn item(&self) -> &ModelInstance {
        self.item
    }

    /// Value behind `role`
    pub fn get(&self, role: &str) -> Result<&JsonValue, AdapterError> {
        let name = self.class.resolve_name(role)?;
        self.item
            .get(&name)
            .ok_or_else(|| self.unknown_attribute(name))
    }

    /// String value behind `role`; `null` reads as empty
    pub fn get_str(&self, role: &str) -> Result<String, AdapterError> {
        Ok(match self.get(role)? {
            JsonValue::Null => String::new(),
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Write the value behind `role`
    pub fn set(&mut self, role: &str, value: JsonValue) -> Result<(), AdapterError> {
        let name = self.class.resolve_name(role)?;
        trace!(model = %self.class.item_model().name, role, field = %name, "Setting role value");
        self.set_raw(&name, value)
    }

    /// Value by literal field name, bypassing roles
    pub fn get_raw(&self, name: &str) -> Option<&JsonValue> {
        self.item.get(name)
    }

    pub fn set_raw(&mut self, name: &str, value: JsonValue) -> Result<(), AdapterError> {
        if let Some(slot) = self.item.slot_mut(name) {
            *slot = value;
            return Ok(());
        }
        Err(self.unknown_attribute(name.to_string()))
    }

    /// Normalized value of the displayed role
    pub fn displayed_value(&self) -> Result<String, AdapterError> {
        let rule = self.class.display_rule();
        Ok(rule.normalize.apply(&self.get_str(rule.role)?))
    }

    /// Persist the instance, assigning an id if it has none
    pub fn save(&mut self, store: &mut dyn InstanceStore) -> Result<i64, AdapterError> {
        let id = store.put(self.item)?;
        debug!(model = %self.class.item_model().name, id, "Saved instance");
        Ok(id)
    }

    /// Reload every value from the store, discarding unsaved writes
    pub fn refresh_from_db(&mut self, store: &dyn InstanceStore) -> Result<(), AdapterError> {
        let model = self.class.item_model().name.clone();
        let id = self
            .item
            .id()
            .ok_or_else(|| AdapterError::NotPersisted {
                model: model.clone(),
            })?;
        *self.item = store.get(&model, id)?;
        Ok(())
    }

    fn unknown_attribute(&self, name: String) -> AdapterError {
        AdapterError::UnknownAttribute {
            model: self.class.item_model().name.clone(),
            name,
        }
    }
}

impl ModelAdapter for InstanceAdapter<'_> {
    fn item_model(&self) -> &ModelSchema {
        self.item.model()
    }

    fn registry(&self) -> &RoleRegistry {
        self.class.registry()
    }

    fn class_adapter(&self) -> &ClassAdapter<'_> {
        &self.class
    }

    fn displayed_field_name_or_value(&self) -> Result<String, AdapterError> {
        self.displayed_value()
    }
}
