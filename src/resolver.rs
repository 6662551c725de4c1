//! Structural resolver
//!
//! Maps a role to the actual declared field name on a model by signature.
//!
//! Resolution steps:
//! 1. pass-through and unregistered names resolve to themselves
//! 2. concrete non-pass-through fields are indexed by signature
//! 3. any signature collision rejects the whole model
//! 4. the role's expected signature is looked up in the index

use crate::error::ResolveError;
use crate::registry::{RoleDescriptor, RoleRegistry};
use crate::schema::ModelSchema;
use crate::signature::{signature, FieldSignature};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Signature to declared-name index for one model shape
#[derive(Debug, Clone)]
pub struct FieldIndex {
    model: String,
    by_signature: BTreeMap<FieldSignature, String>,
}

impl FieldIndex {
    /// Index the role-requiring fields of `model`
    ///
    /// Fails if two of them share a signature, even when neither is ever
    /// requested.
    pub fn build(model: &ModelSchema, registry: &RoleRegistry) -> Result<Self, ResolveError> {
        let fields: Vec<_> = model
            .concrete_fields()
            .filter(|f| !registry.is_passthrough(&f.name))
            .collect();

        let by_signature: BTreeMap<FieldSignature, String> = fields
            .iter()
            .map(|f| (signature(f), f.name.clone()))
            .collect();

        if by_signature.len() != fields.len() {
            warn!(
                model = %model.name,
                fields = fields.len(),
                signatures = by_signature.len(),
                "Model has fields with colliding signatures"
            );
            return Err(ResolveError::AmbiguousModel {
                model: model.name.clone(),
            });
        }

        Ok(Self {
            model: model.name.clone(),
            by_signature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Declared name of the field matching `role`
    pub fn lookup(&self, role: &RoleDescriptor) -> Result<&str, ResolveError> {
        match self.by_signature.get(&role.signature) {
            Some(name) => {
                debug!(model = %self.model, role = %role.name, field = %name, "Resolved role");
                Ok(name.as_str())
            }
            None => Err(ResolveError::UnresolvedRole {
                model: self.model.clone(),
                role: role.name.clone(),
                expected_kind: role.signature.kind.to_string(),
                description: role.description.clone(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.by_signature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_signature.is_empty()
    }
}

/// Resolve `role` to the declared field name on `model`
pub fn resolve(
    model: &ModelSchema,
    registry: &RoleRegistry,
    role: &str,
) -> Result<String, ResolveError> {
    let Some(descriptor) = structural_role(registry, role) else {
        return Ok(role.to_string());
    };
    let index = FieldIndex::build(model, registry)?;
    index.lookup(descriptor).map(str::to_string)
}

/// Resolve every registered role, in registry order
pub fn resolve_all(
    model: &ModelSchema,
    registry: &RoleRegistry,
) -> Result<Vec<(String, String)>, ResolveError> {
    let index = FieldIndex::build(model, registry)?;
    registry
        .roles()
        .iter()
        .map(|role| Ok((role.name.clone(), index.lookup(role)?.to_string())))
        .collect()
}

/// The descriptor for `name` if it needs structural matching
pub(crate) fn structural_role<'r>(
    registry: &'r RoleRegistry,
    name: &str,
) -> Option<&'r RoleDescriptor> {
    if registry.is_passthrough(name) {
        return None;
    }
    registry.role(name)
}
