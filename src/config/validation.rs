//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges
//! - Compile every `[[select_lang]]` entry to surface group errors
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - A variable name without `$` is a warning, never an error
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::http::server::RESERVED_VARIABLES;
use crate::variables::registry::{normalize_name, VARIABLE_PREFIX};
use crate::variables::{LanguageVariables, VariableError};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field} address: {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("no select_lang entries configured")]
    NoVariables,

    #[error("variable name is reserved for a built-in route: \"{0}\"")]
    ReservedVariable(String),

    #[error(transparent)]
    Variable(#[from] VariableError),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "metrics",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.select_lang.is_empty() {
        errors.push(ValidationError::NoVariables);
    }

    for entry in &config.select_lang {
        if !entry.variable.starts_with(VARIABLE_PREFIX) {
            tracing::warn!(variable = %entry.variable, "variable name should start with '$'");
        }

        let name = normalize_name(&entry.variable);
        if RESERVED_VARIABLES.iter().any(|r| r.eq_ignore_ascii_case(name)) {
            errors.push(ValidationError::ReservedVariable(name.to_string()));
        }
    }

    if let Err(variable_errors) = LanguageVariables::from_config(&config.select_lang) {
        errors.extend(variable_errors.into_iter().map(ValidationError::from));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
