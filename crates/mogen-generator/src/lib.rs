//! Field generators for the mogen data pump.
//!
//! This crate turns validated [`FieldSpec`](mogen_core::FieldSpec)s into
//! [`FieldGenerator`]s and assembles them into records with a
//! [`RecordGenerator`].
//!
//! # Example
//!
//! ```rust
//! use mogen_core::Config;
//! use mogen_generator::{build_generators, RecordGenerator};
//!
//! let config = Config::from_yaml(r#"
//! fields:
//!   - generator: bool
//!     name: ok
//!     data:
//!       trueWeight: 50
//! "#).unwrap();
//!
//! let specs = config.validate().unwrap();
//! let generators = build_generators(&specs).unwrap();
//! let mut records = RecordGenerator::new(generators, Some(42));
//! let record = records.next_record();
//! assert!(record.get("ok").is_some());
//! ```
//!
//! # Generators
//!
//! - `name` - Uniform pick from `data.options` (or a built-in first-name list)
//! - `bool` - `true` with `data.trueWeight` percent probability
//! - `int` - Uniform integer in `[data.min, data.max)`

pub mod error;
pub mod generator;
pub mod generators;

pub use error::GeneratorError;
pub use generator::{RecordGenerator, RecordIterator};
pub use generators::{build_generators, FieldGenerator, ValueGenerator};
