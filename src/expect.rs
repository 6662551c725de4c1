//! Attribute expectations
//!
//! Checks on fields whose names the assignment fixes: the attribute exists,
//! has the right kind, and declares the listed parameters with the listed values.

use crate::config::EntitiesConfig;
use crate::error::ExpectationError;
use crate::schema::{EntityName, FieldKind, ModelSchema};
use crate::signature::{signature, FieldSignature};
use serde_json::{json, Value as JsonValue};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldExpectation {
    pub field: String,
    pub kind: FieldKind,
    /// Checked for relation kinds only
    pub related: Option<EntityName>,
    pub params: Vec<(String, JsonValue)>,
}

impl FieldExpectation {
    pub fn new(field: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            field: field.into(),
            kind,
            related: None,
            params: Vec::new(),
        }
    }

    pub fn relation(field: impl Into<String>, kind: FieldKind, target: &str) -> Self {
        Self {
            related: Some(EntityName::new(target)),
            ..Self::new(field, kind)
        }
    }

    pub fn param(mut self, name: impl Into<String>, value: JsonValue) -> Self {
        self.params.push((name.into(), value));
        self
    }

    fn expected_signature(&self) -> FieldSignature {
        match &self.related {
            Some(target) if self.kind.is_relation() => {
                FieldSignature::relation(self.kind, target.clone())
            }
            _ => FieldSignature::plain(self.kind),
        }
    }

    pub fn check(&self, model: &ModelSchema) -> Result<(), ExpectationError> {
        let declared = model
            .field(&self.field)
            .ok_or_else(|| ExpectationError::MissingAttribute {
                model: model.name.clone(),
                field: self.field.clone(),
            })?;

        let expected = self.expected_signature();
        let matches_kind = if expected.related.is_some() {
            signature(declared) == expected
        } else {
            declared.kind == self.kind
        };
        if !matches_kind {
            return Err(ExpectationError::WrongKind {
                model: model.name.clone(),
                field: self.field.clone(),
                expected: expected.to_string(),
            });
        }

        for (param, value) in &self.params {
            match declared.option(param) {
                None => {
                    return Err(ExpectationError::MissingParam {
                        model: model.name.clone(),
                        field: self.field.clone(),
                        param: param.clone(),
                    })
                }
                Some(actual) if actual != value => {
                    return Err(ExpectationError::WrongParam {
                        model: model.name.clone(),
                        field: self.field.clone(),
                        param: param.clone(),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Expectations for one literally-named model
#[derive(Debug, Clone)]
pub struct ModelExpectations {
    pub model: String,
    pub fields: Vec<FieldExpectation>,
}

/// Expectations for the blog's post, category and location models
pub fn blog_expectations(entities: &EntitiesConfig) -> Vec<ModelExpectations> {
    let published = || {
        [
            FieldExpectation::new("is_published", FieldKind::Boolean).param("default", json!(true)),
            FieldExpectation::new("created_at", FieldKind::DateTime)
                .param("auto_now_add", json!(true)),
        ]
    };

    let mut post = vec![
        FieldExpectation::new("title", FieldKind::Char).param("max_length", json!(256)),
        FieldExpectation::new("text", FieldKind::Text),
        FieldExpectation::new("pub_date", FieldKind::DateTime),
        FieldExpectation::relation("author", FieldKind::ForeignKey, &entities.user_model),
        FieldExpectation::relation("location", FieldKind::ForeignKey, "Location")
            .param("null", json!(true)),
        FieldExpectation::relation("category", FieldKind::ForeignKey, "Category")
            .param("null", json!(true)),
    ];
    post.extend(published());

    let mut category = vec![
        FieldExpectation::new("title", FieldKind::Char).param("max_length", json!(256)),
        FieldExpectation::new("description", FieldKind::Text),
        FieldExpectation::new("slug", FieldKind::Slug).param("unique", json!(true)),
    ];
    category.extend(published());

    let mut location =
        vec![FieldExpectation::new("name", FieldKind::Char).param("max_length", json!(256))];
    location.extend(published());

    vec![
        ModelExpectations {
            model: entities.post_model.clone(),
            fields: post,
        },
        ModelExpectations {
            model: "Category".to_string(),
            fields: category,
        },
        ModelExpectations {
            model: "Location".to_string(),
            fields: location,
        },
    ]
}
