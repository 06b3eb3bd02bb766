use thiserror::Error;

use super::validator::ValidationError;

/// Errors raised while building a world from its TOML definition.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to parse world definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid world definition: {}", join_problems(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_problems(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
