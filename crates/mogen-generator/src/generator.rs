//! Record assembly from a list of field generators.

use crate::generators::{FieldGenerator, ValueGenerator};
use mogen_core::Record;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Produces records by running every field generator once per row.
///
/// The generator owns its RNG, so it is meant to be driven by a single
/// producer. With a seed, the same generators produce the same records.
pub struct RecordGenerator {
    /// Field generators in configured order
    generators: Vec<FieldGenerator>,
    /// Random number generator shared by all fields
    rng: StdRng,
    /// Number of records produced so far
    index: u64,
}

impl RecordGenerator {
    /// Create a record generator. Without a seed the RNG is seeded from OS entropy.
    pub fn new(generators: Vec<FieldGenerator>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            generators,
            rng,
            index: 0,
        }
    }

    /// Get the number of records produced so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next record.
    ///
    /// Generators run in configured order; a later generator with the same
    /// field name overwrites an earlier one.
    pub fn next_record(&mut self) -> Record {
        let mut record = Record::with_capacity(self.generators.len());
        for generator in &self.generators {
            record.insert(generator.name(), generator.generate(&mut self.rng));
        }
        self.index += 1;
        record
    }

    /// Generate `count` records lazily.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
