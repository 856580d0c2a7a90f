// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for cost estimation.

use thiserror::Error;

use crate::types::ComponentKind;

/// The error type returned by every costscope operation.
///
/// No variant carries a partial result: a failed estimate produces no numbers.
#[derive(Debug, Error)]
pub enum CostError {
    /// The selected provider has no row in the catalog sheet for its kind.
    #[error("unknown {kind} provider `{provider}`")]
    UnknownProvider {
        kind: ComponentKind,
        provider: String,
    },

    /// The provider row exists but lacks a rate a formula needs.
    #[error("{kind} provider `{provider}` has no `{rate}` rate")]
    MissingRate {
        kind: ComponentKind,
        provider: String,
        rate: String,
    },

    /// The rate is present but unusable (negative, not finite, or a zero divisor).
    #[error("{kind} provider `{provider}` has invalid `{rate}` rate: {value}")]
    InvalidRate {
        kind: ComponentKind,
        provider: String,
        rate: String,
        value: f64,
    },

    /// A usage quantity is negative or not a finite number.
    #[error("invalid usage: `{field}` must be a non-negative number, got {value}")]
    InvalidUsage { field: &'static str, value: f64 },

    /// Conversion constants that would make a formula meaningless.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure reading or parsing a catalog or profile source.
    #[error("source error: {message}")]
    Source {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CostError {
    /// Shorthand for a [`CostError::Source`] wrapping an underlying error.
    pub fn source<E>(message: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CostError::Source {
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }

    /// True for the lookup failures a caller can fix by choosing another provider.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            CostError::UnknownProvider { .. } | CostError::MissingRate { .. }
        )
    }
}
