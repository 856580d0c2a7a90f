// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core types for the costscope pipeline cost estimator.
//!
//! This crate holds the vocabulary every other crate speaks: the component
//! kinds of an AI service pipeline, provider identifiers, customer usage
//! profiles, provider selections and the shared error type.

pub mod error;
pub mod selection;
pub mod types;
pub mod usage;

// Re-export key items at crate root for ergonomic imports.
pub use error::CostError;
pub use selection::ComponentSelection;
pub use types::{ComponentKind, ProviderId};
pub use usage::UsageProfile;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_error_has_all_variants() {
        let _unknown = CostError::UnknownProvider {
            kind: ComponentKind::Rag,
            provider: "test".into(),
        };
        let _missing = CostError::MissingRate {
            kind: ComponentKind::Blob,
            provider: "test".into(),
            rate: "cost_per_read_operation".into(),
        };
        let _invalid_rate = CostError::InvalidRate {
            kind: ComponentKind::Rag,
            provider: "test".into(),
            rate: "vectors_per_U".into(),
            value: 0.0,
        };
        let _usage = CostError::InvalidUsage {
            field: "pages",
            value: -1.0,
        };
        let _config = CostError::Config("test".into());
        let _source = CostError::source("test", std::io::Error::other("test"));
    }

    #[test]
    fn unknown_provider_message_names_kind_and_provider() {
        let err = CostError::UnknownProvider {
            kind: ComponentKind::ImageCaptioning,
            provider: "acme vision".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("image_captioning"), "got: {msg}");
        assert!(msg.contains("acme vision"), "got: {msg}");
        assert!(err.is_lookup());
    }

    #[test]
    fn missing_rate_message_names_rate() {
        let err = CostError::MissingRate {
            kind: ComponentKind::Llm,
            provider: "GPT-4o_mini".into(),
            rate: "cost_per_output_token".into(),
        };
        assert!(err.to_string().contains("cost_per_output_token"));
        assert!(err.is_lookup());
    }

    #[test]
    fn component_kind_has_seven_variants() {
        use std::str::FromStr;
        use strum::IntoEnumIterator;

        let variants: Vec<ComponentKind> = ComponentKind::iter().collect();
        assert_eq!(variants.len(), 7, "ComponentKind must have exactly 7 variants");

        // Display and FromStr round-trip for all variants.
        for variant in &variants {
            let s = variant.to_string();
            let parsed = ComponentKind::from_str(&s).expect("should parse back");
            assert_eq!(*variant, parsed);
        }
    }

    #[test]
    fn component_kind_uses_sheet_names() {
        assert_eq!(ComponentKind::Llm.to_string(), "LLM");
        assert_eq!(ComponentKind::Rag.to_string(), "RAG");
        assert_eq!(ComponentKind::FaceRecognition.to_string(), "face_recognition");
        assert_eq!("rag".parse::<ComponentKind>().unwrap(), ComponentKind::Rag);
        assert_eq!("llm".parse::<ComponentKind>().unwrap(), ComponentKind::Llm);
    }

    #[test]
    fn component_kind_serialization() {
        let kind = ComponentKind::ImageCaptioning;
        let json = serde_json::to_string(&kind).expect("should serialize");
        assert_eq!(json, "\"image_captioning\"");
        let parsed: ComponentKind = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(kind, parsed);
    }
}
