// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as positive divisors, fractions within `[0, 1]`, and non-empty paths.

use costscope_core::ComponentKind;
use strum::IntoEnumIterator;

use crate::diagnostic::ConfigError;
use crate::model::{ConversionConstants, CostscopeConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &CostscopeConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.logging.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.sources.catalog_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "sources.catalog_path must not be empty".to_string(),
        });
    }

    if config.sources.profiles_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "sources.profiles_path must not be empty".to_string(),
        });
    }

    for kind in ComponentKind::iter() {
        if config.selection.provider(kind).as_str().trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("selection for {kind} must name a provider"),
            });
        }
    }

    for message in conversion_problems(&config.conversion) {
        errors.push(ConfigError::Validation { message });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Describe every constant that would make a cost formula meaningless.
///
/// Shared with the cost engine, which re-checks constants it is handed directly.
pub fn conversion_problems(c: &ConversionConstants) -> Vec<String> {
    let mut problems = Vec::new();

    let positive = [
        ("words_per_token", c.words_per_token),
        ("chunk_size_words", c.chunk_size_words),
    ];
    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            problems.push(format!("conversion.{name} must be positive, got {value}"));
        }
    }

    let non_negative = [
        ("words_per_page", c.words_per_page),
        ("words_per_audio_min", c.words_per_audio_min),
        ("words_per_image_caption", c.words_per_image_caption),
        (
            "words_per_image_face_recognition",
            c.words_per_image_face_recognition,
        ),
        ("tokens_per_conversation", c.tokens_per_conversation),
        ("questions_per_conversation", c.questions_per_conversation),
        ("avg_size_page_kb", c.avg_size_page_kb),
        ("avg_size_audio_per_minute_kb", c.avg_size_audio_per_minute_kb),
        ("avg_size_image_kb", c.avg_size_image_kb),
        ("vector_size_kb", c.vector_size_kb),
    ];
    for (name, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            problems.push(format!(
                "conversion.{name} must be non-negative, got {value}"
            ));
        }
    }

    let fractions = [
        ("io_fraction", c.io_fraction),
        ("output_conversations_fraction", c.output_conversations_fraction),
        ("rag_index_scan_fraction", c.rag_index_scan_fraction),
        ("blob_files_read_fraction", c.blob_files_read_fraction),
    ];
    for (name, value) in fractions {
        if !(0.0..=1.0).contains(&value) {
            problems.push(format!(
                "conversion.{name} must be between 0 and 1, got {value}"
            ));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_validation_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        let config = CostscopeConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_words_per_token_fails_validation() {
        let mut config = CostscopeConfig::default();
        config.conversion.words_per_token = 0.0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_validation_error(&errors, "words_per_token"));
    }

    #[test]
    fn io_fraction_above_one_fails_validation() {
        let mut config = CostscopeConfig::default();
        config.conversion.io_fraction = 1.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_validation_error(&errors, "io_fraction"));
    }

    #[test]
    fn nan_fraction_fails_validation() {
        let mut config = CostscopeConfig::default();
        config.conversion.blob_files_read_fraction = f64::NAN;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_validation_error(&errors, "blob_files_read_fraction"));
    }

    #[test]
    fn negative_sizes_fail_validation() {
        let mut config = CostscopeConfig::default();
        config.conversion.avg_size_image_kb = -1.0;
        config.conversion.vector_size_kb = -3.0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_validation_error(&errors, "avg_size_image_kb"));
        assert!(has_validation_error(&errors, "vector_size_kb"));
    }

    #[test]
    fn errors_are_collected_not_fail_fast() {
        let mut config = CostscopeConfig::default();
        config.logging.level = "loud".to_string();
        config.sources.catalog_path = " ".to_string();
        config.selection.rag = "".into();
        config.conversion.chunk_size_words = 0.0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4, "got: {errors:?}");
        assert!(has_validation_error(&errors, "logging.level"));
        assert!(has_validation_error(&errors, "catalog_path"));
        assert!(has_validation_error(&errors, "RAG"));
        assert!(has_validation_error(&errors, "chunk_size_words"));
    }

    #[test]
    fn zero_questions_is_allowed() {
        let mut config = CostscopeConfig::default();
        config.conversion.questions_per_conversation = 0.0;
        config.conversion.rag_index_scan_fraction = 0.0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn uppercase_log_level_accepted() {
        let mut config = CostscopeConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
