//! Grading report
//!
//! Runs every structural and literal check against a submission's schema and
//! collects one outcome per check. Failures carry the diagnostic a student
//! reads; nothing here aborts early except a missing model, which skips that
//! model's checks.

use crate::adapter::{Adapters, ModelAdapter};
use crate::config::ProbeConfig;
use crate::expect::blog_expectations;
use crate::registry::EntityKind;
use crate::schema::SchemaSet;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub subject: String,
    pub passed: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradingReport {
    pub generated_at: String,
    pub outcomes: Vec<CheckOutcome>,
}

impl Default for GradingReport {
    fn default() -> Self {
        Self::new()
    }
}

impl GradingReport {
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            outcomes: Vec::new(),
        }
    }

    pub fn pass(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.outcomes.push(CheckOutcome {
            subject: subject.into(),
            passed: true,
            message: message.into(),
        });
    }

    pub fn fail(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        let outcome = CheckOutcome {
            subject: subject.into(),
            passed: false,
            message: message.into(),
        };
        warn!(subject = %outcome.subject, message = %outcome.message, "Check failed");
        self.outcomes.push(outcome);
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

/// Check a submission against every entity registry and attribute expectation
pub fn check_schema(schema: &SchemaSet, config: &ProbeConfig) -> GradingReport {
    let adapters = Adapters::new(config);
    let mut report = GradingReport::new();

    for entity in EntityKind::ALL {
        check_entity(&adapters, entity, schema, &mut report);
    }

    for expectations in blog_expectations(&config.entities) {
        let Some(model) = schema.model(&expectations.model) else {
            report.fail(
                expectations.model.clone(),
                format!(
                    "Make sure model `{}` is declared in the models file.",
                    expectations.model
                ),
            );
            continue;
        };
        for field in &expectations.fields {
            let subject = format!("{}.{}", model.name, field.field);
            match field.check(model) {
                Ok(()) => report.pass(subject, format!("declared as {}", field.kind)),
                Err(e) => report.fail(subject, e.to_string()),
            }
        }
    }

    info!(
        passed = report.passed(),
        failed = report.failed(),
        "Schema check finished"
    );
    report
}

fn check_entity(
    adapters: &Adapters,
    entity: EntityKind,
    schema: &SchemaSet,
    report: &mut GradingReport,
) {
    let class = match adapters.for_schema(entity, schema) {
        Ok(class) => class,
        Err(e) => {
            report.fail(format!("{entity} model"), e.to_string());
            return;
        }
    };
    let model_name = class.item_model().name.clone();
    report.pass(format!("{entity} model"), format!("found `{model_name}`"));

    // Entities read only by literal names never build an index
    if !class.registry().roles().is_empty() {
        if let Err(e) = class.index() {
            report.fail(format!("{entity} fields"), e.to_string());
            return;
        }
    }

    for role in class.registry().roles() {
        let subject = format!("{entity}.{}", role.name);
        match class.resolve_name(&role.name) {
            Ok(field) => report.pass(subject, format!("`{model_name}.{field}`")),
            Err(e) => report.fail(subject, e.to_string()),
        }
    }

    let displayed = class.displayed_field_name();
    match class.field(displayed) {
        Ok(field) => report.pass(
            format!("{entity} displayed field"),
            format!("`{model_name}.{}`", field.name),
        ),
        Err(e) => report.fail(format!("{entity} displayed field"), e.to_string()),
    }
}
