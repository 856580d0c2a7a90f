// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vector store costs: one-time ingestion writes, monthly storage and queries.

use costscope_core::{ComponentKind, ComponentSelection, CostError, UsageProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::rates;
use crate::engine::CostEngine;

/// Estimated vector counts per media type.
///
/// Documents and audio transcripts are pooled and cut into fixed-size chunks;
/// each image contributes one vector. Real chunk boundaries add a few more.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VectorCount {
    pub documents: f64,
    pub audio: f64,
    pub images: f64,
}

impl VectorCount {
    pub fn total(&self) -> f64 {
        self.documents + self.audio + self.images
    }
}

/// Retrieval index costs.
///
/// `write_one_time` belongs to ingestion; everything in `monthly_total` is recurring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RagCost {
    pub vectors: VectorCount,
    pub storage_kb: f64,
    pub storage_per_month: f64,
    pub read_per_month: f64,
    pub write_one_time: f64,
    /// Storage plus reads.
    pub monthly_total: f64,
}

impl RagCost {
    /// Monthly total plus the one-time write cost.
    pub fn group_total(&self) -> f64 {
        self.monthly_total + self.write_one_time
    }
}

impl CostEngine<'_> {
    /// Index size, write units at ingestion, and read units per month.
    ///
    /// Every question of every conversation is assumed to scan
    /// `rag_index_scan_fraction` of the index (1.0 by default, a deliberate
    /// over-estimate).
    pub fn rag_costs(
        &self,
        selection: &ComponentSelection,
        profile: &UsageProfile,
    ) -> Result<RagCost, CostError> {
        profile.validate()?;

        let rag = self.rates(selection, ComponentKind::Rag)?;
        let storage_rate = rag.rate(rates::COST_STORAGE_GB_MONTH)?;
        let per_write_unit = rag.rate(rates::COST_PER_WU)?;
        let per_read_unit = rag.rate(rates::COST_PER_RU)?;
        let vectors_per_unit = rag.divisor(rates::VECTORS_PER_U)?;
        let c = self.constants();

        let vectors = VectorCount {
            documents: profile.pages * c.words_per_page / c.chunk_size_words,
            audio: profile.audio_minutes * c.words_per_audio_min / c.chunk_size_words,
            images: profile.images,
        };
        let n_vectors = vectors.total();

        let storage_kb = n_vectors * c.vector_size_kb;
        let storage_per_month = storage_kb / 1e6 * storage_rate;
        let write_one_time = n_vectors * per_write_unit;
        let read_per_month = n_vectors * c.rag_index_scan_fraction * per_read_unit
            / vectors_per_unit
            * profile.conversations_per_month
            * c.questions_per_conversation;

        debug!(
            n_vectors,
            storage_kb, storage_per_month, read_per_month, write_one_time, "RAG cost"
        );
        Ok(RagCost {
            vectors,
            storage_kb,
            storage_per_month,
            read_per_month,
            write_one_time,
            monthly_total: storage_per_month + read_per_month,
        })
    }
}

#[cfg(test)]
mod tests {
    use costscope_config::ConversionConstants;
    use costscope_test_utils::assert_close;

    use super::*;
    use crate::catalog::{PriceCatalog, RateCard};
    use crate::test_support::sample_catalog;

    #[test]
    fn vector_count_pools_and_chunks() {
        let catalog = sample_catalog();
        let constants = ConversionConstants::default();
        let engine = CostEngine::new(&catalog, &constants).unwrap();
        let profile = UsageProfile::new(100.0, 40.0, 7.0, 0.0).unwrap();

        let cost = engine
            .rag_costs(&ComponentSelection::default(), &profile)
            .unwrap();

        // 100 x 500 / 200 = 250; 40 x 150 / 200 = 30; 7 images = 7 vectors.
        assert_close(cost.vectors.documents, 250.0);
        assert_close(cost.vectors.audio, 30.0);
        assert_close(cost.vectors.images, 7.0);
        assert_close(cost.storage_kb, 287.0 * 3.0);
    }

    #[test]
    fn pinecone_write_storage_and_read() {
        let catalog = sample_catalog();
        let constants = ConversionConstants::default();
        let engine = CostEngine::new(&catalog, &constants).unwrap();
        // 1000 pages -> 2500 vectors.
        let profile = UsageProfile::new(1000.0, 0.0, 0.0, 200.0).unwrap();

        let cost = engine
            .rag_costs(&ComponentSelection::default(), &profile)
            .unwrap();

        // pinecone: WU 2e-6, RU 8.25e-6 per 1000 vectors, storage 0.33/GB-month.
        assert_close(cost.write_one_time, 2500.0 * 2e-6);
        assert_close(cost.storage_per_month, 2500.0 * 3.0 / 1e6 * 0.33);
        assert_close(cost.read_per_month, 2500.0 * 8.25e-6 / 1000.0 * 200.0 * 5.0);
        assert_close(cost.monthly_total, cost.storage_per_month + cost.read_per_month);
        assert_close(cost.group_total(), cost.monthly_total + cost.write_one_time);
    }

    #[test]
    fn scan_fraction_scales_reads_only() {
        let catalog = sample_catalog();
        let full = ConversionConstants::default();
        let tenth = ConversionConstants {
            rag_index_scan_fraction: 0.1,
            ..ConversionConstants::default()
        };
        let selection = ComponentSelection::default();
        let profile = UsageProfile::new(1000.0, 10.0, 5.0, 200.0).unwrap();

        let full_cost = CostEngine::new(&catalog, &full)
            .unwrap()
            .rag_costs(&selection, &profile)
            .unwrap();
        let tenth_cost = CostEngine::new(&catalog, &tenth)
            .unwrap()
            .rag_costs(&selection, &profile)
            .unwrap();

        assert_close(tenth_cost.read_per_month, full_cost.read_per_month * 0.1);
        assert_close(tenth_cost.write_one_time, full_cost.write_one_time);
        assert_close(tenth_cost.storage_per_month, full_cost.storage_per_month);
    }

    #[test]
    fn zero_vectors_per_unit_rejected() {
        let catalog = PriceCatalog::new().with_provider(
            ComponentKind::Rag,
            "pinecone",
            RateCard::new()
                .with(rates::COST_STORAGE_GB_MONTH, 0.33)
                .with(rates::COST_PER_WU, 2e-6)
                .with(rates::COST_PER_RU, 8.25e-6)
                .with(rates::VECTORS_PER_U, 0.0),
        );
        let constants = ConversionConstants::default();
        let engine = CostEngine::new(&catalog, &constants).unwrap();

        let err = engine
            .rag_costs(&ComponentSelection::default(), &UsageProfile::default())
            .unwrap_err();
        assert!(matches!(
            err,
            CostError::InvalidRate { ref rate, .. } if rate == "vectors_per_U"
        ));
    }
}
