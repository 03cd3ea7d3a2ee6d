//! Generator construction errors.

/// Error type for generator construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// A name generator was given no options to choose from
    #[error("Field '{field}': option set is empty")]
    EmptyOptionSet { field: String },

    /// A bool generator weight outside 0..=100
    #[error("Field '{field}': true weight {weight} is outside 0..=100")]
    WeightOutOfRange { field: String, weight: u8 },

    /// An int generator whose range contains no values
    #[error("Field '{field}': range [{min}, {max}) is empty")]
    EmptyRange { field: String, min: i64, max: i64 },
}
