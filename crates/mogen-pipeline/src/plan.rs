//! Partitioning a row count into batches.

/// Error type for batch planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("Batch size must be greater than 0")]
    ZeroBatchSize,
}

/// How `total_rows` records are split into batches of `batch_size`.
///
/// Every batch holds `batch_size` records except the last, which holds the
/// remainder (or a full batch when the division is exact).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    total_rows: u64,
    batch_size: u64,
}

impl BatchPlan {
    pub fn new(total_rows: u64, batch_size: usize) -> Result<Self, PlanError> {
        if batch_size == 0 {
            return Err(PlanError::ZeroBatchSize);
        }
        Ok(Self {
            total_rows,
            batch_size: batch_size as u64,
        })
    }

    pub fn total_rows(&self) -> u64 {
        self.total_rows
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size as usize
    }

    /// Number of batches: `ceil(total_rows / batch_size)`.
    pub fn batch_count(&self) -> u64 {
        self.total_rows.div_ceil(self.batch_size)
    }

    /// Number of records in batch `sequence`, or `None` past the last batch.
    pub fn batch_len(&self, sequence: u64) -> Option<usize> {
        if sequence >= self.batch_count() {
            return None;
        }
        let start = sequence * self.batch_size;
        Some((self.total_rows - start).min(self.batch_size) as usize)
    }

    /// Batch lengths in order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.batch_count()).filter_map(|sequence| self.batch_len(sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uneven_split() {
        let plan = BatchPlan::new(25, 10).unwrap();
        assert_eq!(plan.batch_count(), 3);
        assert_eq!(plan.sizes().collect::<Vec<_>>(), vec![10, 10, 5]);
    }

    #[test]
    fn test_even_split() {
        let plan = BatchPlan::new(30, 10).unwrap();
        assert_eq!(plan.batch_count(), 3);
        assert_eq!(plan.batch_len(2), Some(10));
        assert_eq!(plan.batch_len(3), None);
    }

    #[test]
    fn test_fewer_rows_than_batch_size() {
        let plan = BatchPlan::new(7, 10_000).unwrap();
        assert_eq!(plan.sizes().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_zero_rows() {
        let plan = BatchPlan::new(0, 10).unwrap();
        assert_eq!(plan.batch_count(), 0);
        assert_eq!(plan.sizes().count(), 0);
    }

    #[test]
    fn test_zero_batch_size() {
        assert_eq!(BatchPlan::new(10, 0), Err(PlanError::ZeroBatchSize));
    }

    #[test]
    fn test_sizes_sum_to_total() {
        for total in 1..=120u64 {
            for batch_size in 1..=17usize {
                let plan = BatchPlan::new(total, batch_size).unwrap();
                let sizes: Vec<usize> = plan.sizes().collect();
                let count = sizes.len() as u64;

                assert_eq!(sizes.iter().sum::<usize>() as u64, total);
                assert_eq!(count, total.div_ceil(batch_size as u64));
                assert!(sizes[..sizes.len() - 1].iter().all(|&s| s == batch_size));
                assert_eq!(
                    *sizes.last().unwrap() as u64,
                    total - (count - 1) * batch_size as u64
                );
            }
        }
    }
}
