//! Weighted boolean generator.

use super::ValueGenerator;
use crate::error::GeneratorError;
use mogen_core::GeneratedValue;
use rand::Rng;

/// Returns `true` with `true_weight` percent probability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolGenerator {
    field: String,
    true_weight: u8,
}

impl BoolGenerator {
    /// Create a generator. `true_weight` must be within `0..=100`.
    pub fn new(field: impl Into<String>, true_weight: u8) -> Result<Self, GeneratorError> {
        let field = field.into();
        if true_weight > 100 {
            return Err(GeneratorError::WeightOutOfRange {
                field,
                weight: true_weight,
            });
        }
        Ok(Self { field, true_weight })
    }

    pub fn true_weight(&self) -> u8 {
        self.true_weight
    }
}

impl ValueGenerator for BoolGenerator {
    fn name(&self) -> &str {
        &self.field
    }

    fn generate<R: Rng>(&self, rng: &mut R) -> GeneratedValue {
        let draw: u8 = rng.gen_range(0..100);
        GeneratedValue::Bool(draw < self.true_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_weight_always_true() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = BoolGenerator::new("ok", 100).unwrap();

        for _ in 0..10_000 {
            assert_eq!(generator.generate(&mut rng), GeneratedValue::Bool(true));
        }
    }

    #[test]
    fn test_zero_weight_always_false() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = BoolGenerator::new("ok", 0).unwrap();

        for _ in 0..10_000 {
            assert_eq!(generator.generate(&mut rng), GeneratedValue::Bool(false));
        }
    }

    #[test]
    fn test_half_weight_produces_both() {
        let mut rng = StdRng::seed_from_u64(3);
        let generator = BoolGenerator::new("ok", 50).unwrap();

        let trues = (0..10_000)
            .filter(|_| generator.generate(&mut rng) == GeneratedValue::Bool(true))
            .count();

        // Loose bounds; only checks the weight is applied, not the RNG quality.
        assert!((4_000..6_000).contains(&trues), "got {trues} trues");
    }

    #[test]
    fn test_weight_out_of_range() {
        assert!(matches!(
            BoolGenerator::new("ok", 101),
            Err(GeneratorError::WeightOutOfRange { weight: 101, .. })
        ));
    }
}
