// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cost estimation for multi-component AI service pipelines.
//!
//! This crate provides:
//! - **Price catalog**: provider rate cards per component kind, with typed lookup errors
//! - **Cost groups**: media-to-text, embedding, retrieval index, blob storage, LLM inference
//! - **Cost engine**: aggregation into the monthly recurring and one-time ingestion totals
//!
//! Everything here is pure computation. Loading catalogs and profiles from
//! disk is left to callers.

pub mod blob;
pub mod breakdown;
pub mod catalog;
pub mod embedding;
pub mod engine;
pub mod llm;
pub mod media;
pub mod rag;

pub use blob::BlobCost;
pub use breakdown::{CostBreakdown, CostTotals};
pub use catalog::{PriceCatalog, ProviderRates, RateCard, rates};
pub use embedding::EmbeddingCost;
pub use engine::CostEngine;
pub use llm::LlmCost;
pub use media::MediaToTextCost;
pub use rag::{RagCost, VectorCount};
