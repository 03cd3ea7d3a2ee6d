//! Configuration validation.
//!
//! Validation turns the untyped [`FieldConfig`] list into typed [`FieldSpec`]s.
//! Errors are collected rather than returned early, so a single run reports
//! every offending field together.

use crate::config::{Config, FieldConfig};
use serde_yaml::Value as YamlValue;
use std::collections::HashSet;
use std::fmt;

/// A single configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `generator` value is not a registered generator kind
    #[error(
        "Field '{field}': invalid generator '{generator}' (expected one of: {})",
        GeneratorKind::NAMES.join(", ")
    )]
    UnknownGenerator { field: String, generator: String },

    /// A required `data` key is absent
    #[error("Field '{field}': generator '{generator}' requires data.{key}")]
    MissingData {
        field: String,
        generator: String,
        key: &'static str,
    },

    /// A `data` key is present but has the wrong type or range
    #[error("Field '{field}': invalid data.{key}: {reason}")]
    InvalidData {
        field: String,
        key: &'static str,
        reason: String,
    },

    /// A field has no name
    #[error("Field #{position} has an empty name")]
    EmptyFieldName { position: usize },

    /// Two fields write to the same output name
    #[error("Duplicate field name '{name}'")]
    DuplicateFieldName { name: String },

    /// A pipeline setting is out of range
    #[error("Invalid setting '{setting}': {reason}")]
    InvalidSetting {
        setting: &'static str,
        reason: String,
    },
}

/// All problems found in one configuration, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} configuration error(s)", self.0.len())?;
        for err in &self.0 {
            write!(f, "; {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Typed generator parameters produced by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Uniform pick from a list of strings. `None` selects the built-in name list.
    Name { options: Option<Vec<String>> },

    /// `true` with `true_weight` percent probability
    Bool { true_weight: u8 },

    /// Uniform integer in `[min, max)`
    Int { min: i64, max: i64 },
}

impl GeneratorKind {
    /// Generator names accepted in the `generator` key.
    pub const NAMES: [&'static str; 3] = ["name", "bool", "int"];

    /// The configuration name of this generator kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Name { .. } => "name",
            GeneratorKind::Bool { .. } => "bool",
            GeneratorKind::Int { .. } => "int",
        }
    }

    /// Parse the generator name and its `data` map, pushing any problems onto `errors`.
    fn parse(field: &FieldConfig, errors: &mut Vec<ValidationError>) -> Option<Self> {
        let name = field.name.as_str();
        match field.generator.as_str() {
            "name" => {
                let options = match field.data.get("options") {
                    None => None,
                    Some(value) => Some(string_list(name, "options", value, errors)?),
                };
                Some(GeneratorKind::Name { options })
            }
            "bool" => {
                let value = required(field, "trueWeight", errors)?;
                match value.as_u64() {
                    Some(w) if w <= 100 => Some(GeneratorKind::Bool {
                        true_weight: w as u8,
                    }),
                    _ => {
                        errors.push(ValidationError::InvalidData {
                            field: name.to_string(),
                            key: "trueWeight",
                            reason: format!(
                                "expected an integer between 0 and 100, got {}",
                                describe(value)
                            ),
                        });
                        None
                    }
                }
            }
            "int" => {
                let min =
                    required(field, "min", errors).and_then(|v| integer(name, "min", v, errors));
                let max =
                    required(field, "max", errors).and_then(|v| integer(name, "max", v, errors));
                let (min, max) = (min?, max?);
                if min >= max {
                    errors.push(ValidationError::InvalidData {
                        field: name.to_string(),
                        key: "max",
                        reason: format!("must be greater than min ({min}), got {max}"),
                    });
                    return None;
                }
                Some(GeneratorKind::Int { min, max })
            }
            other => {
                errors.push(ValidationError::UnknownGenerator {
                    field: name.to_string(),
                    generator: other.to_string(),
                });
                None
            }
        }
    }
}

/// A validated field: output name plus typed generator parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: GeneratorKind,
    pub index: bool,
}

impl Config {
    /// Validate the configuration.
    ///
    /// Returns the typed field list on success, or every problem found.
    pub fn validate(&self) -> Result<Vec<FieldSpec>, ValidationErrors> {
        let mut errors = Vec::new();
        let mut specs = Vec::with_capacity(self.fields.len());
        let mut seen = HashSet::new();

        for (position, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                errors.push(ValidationError::EmptyFieldName { position });
            } else if !seen.insert(field.name.as_str()) {
                errors.push(ValidationError::DuplicateFieldName {
                    name: field.name.clone(),
                });
            }

            if let Some(kind) = GeneratorKind::parse(field, &mut errors) {
                specs.push(FieldSpec {
                    name: field.name.clone(),
                    kind,
                    index: field.index,
                });
            }
        }

        let positive = [
            ("batchSize", self.batch_size as u64),
            ("workers", self.workers as u64),
            ("queueCapacity", self.queue_capacity as u64),
            ("insertTimeoutSecs", self.insert_timeout_secs),
        ];
        for (setting, value) in positive {
            if value == 0 {
                errors.push(ValidationError::InvalidSetting {
                    setting,
                    reason: "must be greater than 0".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(specs)
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

fn required<'a>(
    field: &'a FieldConfig,
    key: &'static str,
    errors: &mut Vec<ValidationError>,
) -> Option<&'a YamlValue> {
    let value = field.data.get(key);
    if value.is_none() {
        errors.push(ValidationError::MissingData {
            field: field.name.clone(),
            generator: field.generator.clone(),
            key,
        });
    }
    value
}

fn integer(
    field: &str,
    key: &'static str,
    value: &YamlValue,
    errors: &mut Vec<ValidationError>,
) -> Option<i64> {
    let parsed = value.as_i64();
    if parsed.is_none() {
        errors.push(ValidationError::InvalidData {
            field: field.to_string(),
            key,
            reason: format!("expected an integer, got {}", describe(value)),
        });
    }
    parsed
}

fn string_list(
    field: &str,
    key: &'static str,
    value: &YamlValue,
    errors: &mut Vec<ValidationError>,
) -> Option<Vec<String>> {
    let parsed = value.as_sequence().and_then(|seq| {
        seq.iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
    });
    if parsed.is_none() {
        errors.push(ValidationError::InvalidData {
            field: field.to_string(),
            key,
            reason: format!("expected a list of strings, got {}", describe(value)),
        });
    }
    parsed
}

fn describe(value: &YamlValue) -> String {
    match value {
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::String(s) => format!("'{s}'"),
        YamlValue::Sequence(_) => "a list".to_string(),
        YamlValue::Mapping(_) => "a map".to_string(),
        YamlValue::Tagged(t) => describe(&t.value),
    }
}
