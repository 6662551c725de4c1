//! Model instances: one record of a model with a value slot per concrete field.

use crate::schema::model::ModelSchema;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelInstance {
    model: Arc<ModelSchema>,
    values: BTreeMap<String, JsonValue>,
}

impl ModelInstance {
    /// Create an unsaved instance with every concrete field set to `null`
    pub fn new(model: Arc<ModelSchema>) -> Self {
        let mut values: BTreeMap<String, JsonValue> = model
            .concrete_fields()
            .map(|f| (f.name.clone(), JsonValue::Null))
            .collect();
        // Primary key slot exists even when the model relies on the implicit one.
        values.entry("id".to_string()).or_insert(JsonValue::Null);
        Self { model, values }
    }

    pub fn with_value(mut self, name: &str, value: impl Into<JsonValue>) -> Self {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value.into();
        }
        self
    }

    /// The model this instance belongs to
    pub fn model(&self) -> &Arc<ModelSchema> {
        &self.model
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.values.get(name)
    }

    pub fn slot_mut(&mut self, name: &str) -> Option<&mut JsonValue> {
        self.values.get_mut(name)
    }

    pub fn id(&self) -> Option<i64> {
        self.values.get("id").and_then(JsonValue::as_i64)
    }

    pub fn set_id(&mut self, id: i64) {
        self.values.insert("id".to_string(), JsonValue::from(id));
    }

    pub fn values(&self) -> &BTreeMap<String, JsonValue> {
        &self.values
    }
}
