// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregated cost results.

use serde::{Deserialize, Serialize};

use crate::blob::BlobCost;
use crate::embedding::EmbeddingCost;
use crate::llm::LlmCost;
use crate::media::MediaToTextCost;
use crate::rag::RagCost;

/// The two headline figures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostTotals {
    /// Ongoing monthly cost: LLM traffic plus RAG and blob storage and reads.
    pub monthly_recurring_cost: f64,
    /// Cost of ingesting the initial corpus: media-to-text, embedding, RAG and blob writes.
    pub one_time_ingestion_cost: f64,
}

/// Every cost group with its sub-items, plus the headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub media_to_text: MediaToTextCost,
    pub embedding: EmbeddingCost,
    pub rag: RagCost,
    pub blob: BlobCost,
    pub llm: LlmCost,
    pub monthly_recurring_cost: f64,
    pub one_time_ingestion_cost: f64,
}

impl CostBreakdown {
    /// Route each group's figures into the recurring or the one-time total.
    ///
    /// Recurring: LLM, RAG storage and reads, blob storage and reads.
    /// One-time: media-to-text, embedding, RAG writes, blob writes.
    /// Reports downstream depend on exactly this split.
    pub fn aggregate(
        media_to_text: MediaToTextCost,
        embedding: EmbeddingCost,
        rag: RagCost,
        blob: BlobCost,
        llm: LlmCost,
    ) -> Self {
        let monthly_recurring_cost = llm.total + rag.monthly_total + blob.monthly_total;
        let one_time_ingestion_cost =
            media_to_text.total + embedding.total + rag.write_one_time + blob.write_one_time;
        Self {
            media_to_text,
            embedding,
            rag,
            blob,
            llm,
            monthly_recurring_cost,
            one_time_ingestion_cost,
        }
    }

    pub fn totals(&self) -> CostTotals {
        CostTotals {
            monthly_recurring_cost: self.monthly_recurring_cost,
            one_time_ingestion_cost: self.one_time_ingestion_cost,
        }
    }

    /// Sum of the five group totals, each counted once.
    pub fn group_totals_sum(&self) -> f64 {
        self.media_to_text.total
            + self.embedding.total
            + self.rag.group_total()
            + self.blob.group_total()
            + self.llm.total
    }
}
