//! Model schema
//!
//! Explicit description of a student's data model: models, their declared fields,
//! and field kinds. This is the only capability the resolver needs from the host
//! data-modeling layer.

pub mod field;
pub mod instance;
pub mod loader;
pub mod model;

pub use field::{EntityName, FieldDescriptor, FieldKind};
pub use instance::ModelInstance;
pub use loader::{load_schema_file, parse_schema};
pub use model::{ModelSchema, SchemaSet};
