//! Numeric value generators.

use super::ValueGenerator;
use crate::error::GeneratorError;
use mogen_core::GeneratedValue;
use rand::Rng;

/// Uniform integer in the half-open range `[min, max)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntGenerator {
    field: String,
    min: i64,
    max: i64,
}

impl IntGenerator {
    pub fn new(field: impl Into<String>, min: i64, max: i64) -> Result<Self, GeneratorError> {
        let field = field.into();
        if min >= max {
            return Err(GeneratorError::EmptyRange { field, min, max });
        }
        Ok(Self { field, min, max })
    }
}

impl ValueGenerator for IntGenerator {
    fn name(&self) -> &str {
        &self.field
    }

    fn generate<R: Rng>(&self, rng: &mut R) -> GeneratedValue {
        GeneratedValue::Int64(rng.gen_range(self.min..self.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_int_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = IntGenerator::new("age", 10, 20).unwrap();

        for _ in 0..100 {
            let value = generator.generate(&mut rng).as_i64().unwrap();
            assert!((10..20).contains(&value));
        }
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = IntGenerator::new("one", 5, 6).unwrap();
        assert_eq!(generator.generate(&mut rng), GeneratedValue::Int64(5));
    }

    #[test]
    fn test_empty_range_rejected() {
        assert!(matches!(
            IntGenerator::new("age", 3, 3),
            Err(GeneratorError::EmptyRange { min: 3, max: 3, .. })
        ));
    }
}
