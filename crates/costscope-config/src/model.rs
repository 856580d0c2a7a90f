// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for costscope.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use costscope_core::ComponentSelection;
use serde::{Deserialize, Serialize};

/// Top-level costscope configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CostscopeConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where the price catalog and the customer profiles are read from.
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Default provider for each component kind.
    #[serde(default)]
    pub selection: ComponentSelection,

    /// Unit-conversion assumptions used by every cost formula.
    #[serde(default)]
    pub conversion: ConversionConstants,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Locations of the external tables.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// TOML price catalog, one table per component kind.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// CSV table of customer usage profiles.
    #[serde(default = "default_profiles_path")]
    pub profiles_path: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            profiles_path: default_profiles_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "costs.toml".to_string()
}

fn default_profiles_path() -> String {
    "customer_profiles.csv".to_string()
}

/// Unit-conversion ratios and traffic assumptions.
///
/// These are policy assumptions rather than measurements. Two engines built
/// with different constants can run side by side.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionConstants {
    /// Words on an average document page.
    #[serde(default = "default_words_per_page")]
    pub words_per_page: f64,

    /// Words spoken in an average minute of audio.
    #[serde(default = "default_words_per_audio_min")]
    pub words_per_audio_min: f64,

    /// Words in a generated image caption.
    #[serde(default = "default_words_per_image_caption")]
    pub words_per_image_caption: f64,

    /// Words in a face recognition record.
    #[serde(default = "default_words_per_image_face_recognition")]
    pub words_per_image_face_recognition: f64,

    /// Words per token, as published by the model vendor.
    #[serde(default = "default_words_per_token")]
    pub words_per_token: f64,

    /// Share of conversation tokens that are input (the rest is output).
    #[serde(default = "default_io_fraction")]
    pub io_fraction: f64,

    /// Average tokens per conversation, context included.
    #[serde(default = "default_tokens_per_conversation")]
    pub tokens_per_conversation: f64,

    /// Average questions asked per conversation.
    #[serde(default = "default_questions_per_conversation")]
    pub questions_per_conversation: f64,

    /// Share of questions whose answer needs the original media from blob storage.
    #[serde(default = "default_output_conversations_fraction")]
    pub output_conversations_fraction: f64,

    /// Average stored size of a page, in kB.
    #[serde(default = "default_avg_size_page_kb")]
    pub avg_size_page_kb: f64,

    /// Average stored size of one minute of audio, in kB.
    #[serde(default = "default_avg_size_audio_per_minute_kb")]
    pub avg_size_audio_per_minute_kb: f64,

    /// Average stored size of an image, in kB.
    #[serde(default = "default_avg_size_image_kb")]
    pub avg_size_image_kb: f64,

    /// Size of one stored vector, in kB.
    #[serde(default = "default_vector_size_kb")]
    pub vector_size_kb: f64,

    /// Words per retrieval chunk.
    #[serde(default = "default_chunk_size_words")]
    pub chunk_size_words: f64,

    /// Share of the vector index read by each question.
    ///
    /// 1.0 assumes a full scan per question, a deliberate over-estimate.
    #[serde(default = "default_full_read")]
    pub rag_index_scan_fraction: f64,

    /// Share of stored files re-read by each output-requiring question.
    ///
    /// 1.0 assumes every file is read every time, a deliberate over-estimate.
    #[serde(default = "default_full_read")]
    pub blob_files_read_fraction: f64,
}

impl ConversionConstants {
    /// Words produced per image: caption plus face recognition record.
    pub fn words_per_image(&self) -> f64 {
        self.words_per_image_caption + self.words_per_image_face_recognition
    }

    pub fn tokens_per_page(&self) -> f64 {
        self.words_per_page / self.words_per_token
    }

    pub fn tokens_per_audio_min(&self) -> f64 {
        self.words_per_audio_min / self.words_per_token
    }

    pub fn tokens_per_image(&self) -> f64 {
        self.words_per_image() / self.words_per_token
    }
}

impl Default for ConversionConstants {
    fn default() -> Self {
        Self {
            words_per_page: default_words_per_page(),
            words_per_audio_min: default_words_per_audio_min(),
            words_per_image_caption: default_words_per_image_caption(),
            words_per_image_face_recognition: default_words_per_image_face_recognition(),
            words_per_token: default_words_per_token(),
            io_fraction: default_io_fraction(),
            tokens_per_conversation: default_tokens_per_conversation(),
            questions_per_conversation: default_questions_per_conversation(),
            output_conversations_fraction: default_output_conversations_fraction(),
            avg_size_page_kb: default_avg_size_page_kb(),
            avg_size_audio_per_minute_kb: default_avg_size_audio_per_minute_kb(),
            avg_size_image_kb: default_avg_size_image_kb(),
            vector_size_kb: default_vector_size_kb(),
            chunk_size_words: default_chunk_size_words(),
            rag_index_scan_fraction: default_full_read(),
            blob_files_read_fraction: default_full_read(),
        }
    }
}

fn default_words_per_page() -> f64 {
    500.0
}

fn default_words_per_audio_min() -> f64 {
    150.0
}

fn default_words_per_image_caption() -> f64 {
    50.0
}

fn default_words_per_image_face_recognition() -> f64 {
    25.0
}

fn default_words_per_token() -> f64 {
    0.75
}

fn default_io_fraction() -> f64 {
    0.1
}

fn default_tokens_per_conversation() -> f64 {
    2000.0
}

fn default_questions_per_conversation() -> f64 {
    5.0
}

fn default_output_conversations_fraction() -> f64 {
    0.5
}

fn default_avg_size_page_kb() -> f64 {
    10.0
}

fn default_avg_size_audio_per_minute_kb() -> f64 {
    5000.0
}

fn default_avg_size_image_kb() -> f64 {
    2000.0
}

fn default_vector_size_kb() -> f64 {
    3.0
}

fn default_chunk_size_words() -> f64 {
    200.0
}

fn default_full_read() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_token_ratios() {
        let c = ConversionConstants::default();
        assert!((c.words_per_image() - 75.0).abs() < f64::EPSILON);
        assert!((c.tokens_per_page() - 500.0 / 0.75).abs() < 1e-9);
        assert!((c.tokens_per_audio_min() - 200.0).abs() < 1e-9);
        assert!((c.tokens_per_image() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn partial_conversion_section_keeps_other_defaults() {
        let toml_str = r#"
[conversion]
chunk_size_words = 400
"#;
        let config: CostscopeConfig = toml::from_str(toml_str).unwrap();
        assert!((config.conversion.chunk_size_words - 400.0).abs() < f64::EPSILON);
        assert!((config.conversion.words_per_page - 500.0).abs() < f64::EPSILON);
        assert!((config.conversion.rag_index_scan_fraction - 1.0).abs() < f64::EPSILON);
    }
}
