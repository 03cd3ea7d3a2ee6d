//! Core types for the mogen data pump.
//!
//! This crate provides the foundational types shared across the workspace:
//!
//! - [`Config`] - The YAML configuration document and its defaults
//! - [`FieldSpec`] / [`GeneratorKind`] - Validated field definitions
//! - [`GeneratedValue`], [`Record`], [`Batch`] - Generated data on its way to the store
//!
//! # Architecture
//!
//! ```text
//! mogen-core (this crate)
//!    │
//!    ├─── mogen-generator   (builds FieldGenerators from FieldSpecs)
//!    ├─── mogen-pipeline    (moves Batches from the producer to the workers)
//!    └─── mogen-mongodb     (converts Records into BSON documents)
//! ```

pub mod config;
pub mod validation;
pub mod values;

pub use config::{Config, ConfigError, FieldConfig};
pub use validation::{FieldSpec, GeneratorKind, ValidationError, ValidationErrors};
pub use values::{Batch, GeneratedValue, Record};
