//! Field signatures
//!
//! A signature is the structural fingerprint of a field: its kind and, for
//! relations only, the target model. Fields are matched to roles by signature,
//! never by name. Two plain fields of the same kind collide on purpose.

use crate::schema::{EntityName, FieldDescriptor, FieldKind};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FieldSignature {
    pub kind: FieldKind,
    pub related: Option<EntityName>,
}

impl FieldSignature {
    /// Signature of a non-relation field
    pub fn plain(kind: FieldKind) -> Self {
        Self {
            kind,
            related: None,
        }
    }

    /// Signature of a relation to `target`
    pub fn relation(kind: FieldKind, target: impl Into<EntityName>) -> Self {
        Self {
            kind,
            related: Some(target.into()),
        }
    }
}

impl fmt::Display for FieldSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.related {
            Some(target) => write!(f, "{} -> {}", self.kind, target),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Compute the signature of a declared field
pub fn signature(field: &FieldDescriptor) -> FieldSignature {
    if field.kind.is_relation() {
        FieldSignature {
            kind: field.kind,
            related: field.related.clone(),
        }
    } else {
        FieldSignature::plain(field.kind)
    }
}
