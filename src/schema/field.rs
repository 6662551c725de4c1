//! Field kinds and declared field descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// Declared kind of a model field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Auto,
    BigAuto,
    Char,
    Text,
    Slug,
    Email,
    Boolean,
    Integer,
    PositiveInteger,
    Date,
    DateTime,
    Image,
    File,
    ForeignKey,
    OneToOne,
    ManyToMany,
}

impl FieldKind {
    /// Whether the field points at another model.
    pub fn is_relation(self) -> bool {
        matches!(
            self,
            FieldKind::ForeignKey | FieldKind::OneToOne | FieldKind::ManyToMany
        )
    }

    /// Whether the field is backed by a column on the model's own table.
    ///
    /// Many-to-many links live in a join table and are not concrete.
    pub fn is_concrete(self) -> bool {
        !matches!(self, FieldKind::ManyToMany)
    }

    /// Field class name used in grading messages.
    pub fn class_name(self) -> &'static str {
        match self {
            FieldKind::Auto => "AutoField",
            FieldKind::BigAuto => "BigAutoField",
            FieldKind::Char => "CharField",
            FieldKind::Text => "TextField",
            FieldKind::Slug => "SlugField",
            FieldKind::Email => "EmailField",
            FieldKind::Boolean => "BooleanField",
            FieldKind::Integer => "IntegerField",
            FieldKind::PositiveInteger => "PositiveIntegerField",
            FieldKind::Date => "DateField",
            FieldKind::DateTime => "DateTimeField",
            FieldKind::Image => "ImageField",
            FieldKind::File => "FileField",
            FieldKind::ForeignKey => "ForeignKey",
            FieldKind::OneToOne => "OneToOneField",
            FieldKind::ManyToMany => "ManyToManyField",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Identity of a model as seen by relations (its declared class name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EntityName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A field as declared on a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    /// Target model, for relation kinds only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<EntityName>,
    /// Declared parameters (`max_length`, `null`, `blank`, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, JsonValue>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            related: None,
            options: BTreeMap::new(),
        }
    }

    pub fn relation(
        name: impl Into<String>,
        kind: FieldKind,
        target: impl Into<EntityName>,
    ) -> Self {
        Self {
            related: Some(target.into()),
            ..Self::new(name, kind)
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn is_relation(&self) -> bool {
        self.kind.is_relation()
    }

    pub fn option(&self, key: &str) -> Option<&JsonValue> {
        self.options.get(key)
    }
}
