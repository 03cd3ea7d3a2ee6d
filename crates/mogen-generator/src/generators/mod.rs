//! Individual field generators.
//!
//! Each generator is bound to one output field name and produces values for
//! it from a caller-supplied RNG. Generators hold no mutable state, so a
//! single RNG owner (the producer) drives all of them.

pub mod boolean;
pub mod name;
pub mod numeric;

pub use boolean::BoolGenerator;
pub use name::{NameGenerator, DEFAULT_NAMES};
pub use numeric::IntGenerator;

use crate::error::GeneratorError;
use mogen_core::{FieldSpec, GeneratedValue, GeneratorKind};
use rand::Rng;

/// Trait for generating values.
pub trait ValueGenerator {
    /// The output field this generator writes.
    fn name(&self) -> &str;

    /// Produce a value using the given RNG.
    fn generate<R: Rng>(&self, rng: &mut R) -> GeneratedValue;
}

/// The closed set of generator kinds.
///
/// Adding a kind means adding a variant here and a matching
/// [`GeneratorKind`] in `mogen-core`; the compiler points at every
/// `match` that needs updating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldGenerator {
    Name(NameGenerator),
    Bool(BoolGenerator),
    Int(IntGenerator),
}

impl FieldGenerator {
    /// Build a generator from a validated field definition.
    pub fn from_spec(spec: &FieldSpec) -> Result<Self, GeneratorError> {
        let generator = match &spec.kind {
            GeneratorKind::Name { options: None } => {
                FieldGenerator::Name(NameGenerator::with_default_names(&spec.name))
            }
            GeneratorKind::Name {
                options: Some(options),
            } => FieldGenerator::Name(NameGenerator::new(&spec.name, options.clone())?),
            GeneratorKind::Bool { true_weight } => {
                FieldGenerator::Bool(BoolGenerator::new(&spec.name, *true_weight)?)
            }
            GeneratorKind::Int { min, max } => {
                FieldGenerator::Int(IntGenerator::new(&spec.name, *min, *max)?)
            }
        };
        Ok(generator)
    }
}

impl ValueGenerator for FieldGenerator {
    fn name(&self) -> &str {
        match self {
            FieldGenerator::Name(g) => g.name(),
            FieldGenerator::Bool(g) => g.name(),
            FieldGenerator::Int(g) => g.name(),
        }
    }

    fn generate<R: Rng>(&self, rng: &mut R) -> GeneratedValue {
        match self {
            FieldGenerator::Name(g) => g.generate(rng),
            FieldGenerator::Bool(g) => g.generate(rng),
            FieldGenerator::Int(g) => g.generate(rng),
        }
    }
}

/// Build generators for every field, in order.
///
/// Fails on the first field whose parameters break a generator invariant.
pub fn build_generators(specs: &[FieldSpec]) -> Result<Vec<FieldGenerator>, GeneratorError> {
    specs.iter().map(FieldGenerator::from_spec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, kind: GeneratorKind) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            kind,
            index: false,
        }
    }

    #[test]
    fn test_from_spec() {
        let generator =
            FieldGenerator::from_spec(&spec("ok", GeneratorKind::Bool { true_weight: 30 }))
                .unwrap();
        assert!(matches!(generator, FieldGenerator::Bool(_)));
        assert_eq!(generator.name(), "ok");

        let generator =
            FieldGenerator::from_spec(&spec("who", GeneratorKind::Name { options: None }))
                .unwrap();
        assert!(matches!(
            &generator,
            FieldGenerator::Name(g) if g.options().len() == DEFAULT_NAMES.len()
        ));
    }

    #[test]
    fn test_build_generators_keeps_order() {
        let specs = vec![
            spec("a", GeneratorKind::Int { min: 0, max: 10 }),
            spec("b", GeneratorKind::Bool { true_weight: 100 }),
        ];
        let generators = build_generators(&specs).unwrap();
        let names: Vec<&str> = generators.iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_build_generators_empty_option_set() {
        let specs = vec![spec(
            "color",
            GeneratorKind::Name {
                options: Some(vec![]),
            },
        )];
        assert_eq!(
            build_generators(&specs),
            Err(GeneratorError::EmptyOptionSet {
                field: "color".to_string()
            })
        );
    }
}
