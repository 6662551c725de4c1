//! Role registries
//!
//! A registry maps semantic role names ("text", "author", ...) to the field
//! signature a role expects, plus the set of names that are read literally.
//! Registries are built once per entity and shared by every adapter.

pub mod blog;

pub use blog::RegistrySet;

use crate::error::ApiError;
use crate::signature::FieldSignature;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Logical entity an adapter wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Post,
    Comment,
    User,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Post, EntityKind::Comment, EntityKind::User];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Post => "post",
            EntityKind::Comment => "comment",
            EntityKind::User => "user",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "post" => Ok(EntityKind::Post),
            "comment" => Ok(EntityKind::Comment),
            "user" => Ok(EntityKind::User),
            _ => Err(ApiError::UnknownEntity(s.to_string())),
        }
    }
}

/// A semantic role: the field serving one purpose, whatever it is called
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleDescriptor {
    pub name: String,
    pub signature: FieldSignature,
    /// Completes "create a field of type X that ..." in grading messages
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct RoleRegistry {
    entity: EntityKind,
    passthrough: BTreeSet<String>,
    roles: Vec<RoleDescriptor>,
}

impl RoleRegistry {
    pub fn builder(entity: EntityKind) -> RoleRegistryBuilder {
        RoleRegistryBuilder {
            registry: RoleRegistry {
                entity,
                passthrough: BTreeSet::new(),
                roles: Vec::new(),
            },
        }
    }

    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    /// Names read by their literal declared name
    pub fn passthrough(&self) -> &BTreeSet<String> {
        &self.passthrough
    }

    pub fn is_passthrough(&self, name: &str) -> bool {
        self.passthrough.contains(name)
    }

    pub fn role(&self, name: &str) -> Option<&RoleDescriptor> {
        self.roles.iter().find(|r| r.name == name)
    }

    /// Registered roles in declaration order
    pub fn roles(&self) -> &[RoleDescriptor] {
        &self.roles
    }
}

pub struct RoleRegistryBuilder {
    registry: RoleRegistry,
}

impl RoleRegistryBuilder {
    pub fn passthrough<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry
            .passthrough
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Register a role. Re-registering a name replaces the earlier descriptor.
    pub fn role(
        mut self,
        name: impl Into<String>,
        signature: FieldSignature,
        description: impl Into<String>,
    ) -> Self {
        let descriptor = RoleDescriptor {
            name: name.into(),
            signature,
            description: description.into(),
        };
        self.registry.roles.retain(|r| r.name != descriptor.name);
        self.registry.roles.push(descriptor);
        self
    }

    pub fn build(self) -> RoleRegistry {
        self.registry
    }
}
