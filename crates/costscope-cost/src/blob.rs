// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw media storage: one write per file at ingestion, monthly storage and reads.

use costscope_core::{ComponentKind, ComponentSelection, CostError, UsageProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::rates;
use crate::engine::CostEngine;

/// Blob storage costs.
///
/// `write_one_time` belongs to ingestion; everything in `monthly_total` is recurring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BlobCost {
    pub data_gb: f64,
    pub storage_per_month: f64,
    pub read_per_month: f64,
    pub write_one_time: f64,
    /// Storage plus reads.
    pub monthly_total: f64,
}

impl BlobCost {
    /// Monthly total plus the one-time write cost.
    pub fn group_total(&self) -> f64 {
        self.monthly_total + self.write_one_time
    }
}

impl CostEngine<'_> {
    /// Storage volume from average media sizes, plus read and write operations.
    ///
    /// Each output-requiring question re-reads `blob_files_read_fraction` of
    /// all files (1.0 by default). This over-estimates reads on purpose.
    pub fn blob_costs(
        &self,
        selection: &ComponentSelection,
        profile: &UsageProfile,
    ) -> Result<BlobCost, CostError> {
        profile.validate()?;

        let blob = self.rates(selection, ComponentKind::Blob)?;
        let storage_rate = blob.rate(rates::COST_STORAGE_GB_MONTH)?;
        let per_write = blob.rate(rates::COST_PER_WRITE_OPERATION)?;
        let per_read = blob.rate(rates::COST_PER_READ_OPERATION)?;
        let c = self.constants();

        let data_gb = (profile.pages * c.avg_size_page_kb
            + profile.audio_minutes * c.avg_size_audio_per_minute_kb
            + profile.images * c.avg_size_image_kb)
            / 1e6;
        let files = profile.files();

        let storage_per_month = data_gb * storage_rate;
        let write_one_time = files * per_write;
        let read_per_month = files * c.blob_files_read_fraction * per_read
            * profile.conversations_per_month
            * c.questions_per_conversation
            * c.output_conversations_fraction;

        debug!(
            data_gb,
            files, storage_per_month, read_per_month, write_one_time, "blob cost"
        );
        Ok(BlobCost {
            data_gb,
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
    use crate::test_support::sample_catalog;

    #[test]
    fn azure_hot_storage_write_and_read() {
        let catalog = sample_catalog();
        let constants = ConversionConstants::default();
        let engine = CostEngine::new(&catalog, &constants).unwrap();
        let profile = UsageProfile::new(100.0, 10.0, 5.0, 20.0).unwrap();

        let cost = engine
            .blob_costs(&ComponentSelection::default(), &profile)
            .unwrap();

        // 100 x 10 kB + 10 x 5000 kB + 5 x 2000 kB = 61_000 kB
        assert_close(cost.data_gb, 0.061);
        // azure hot: 0.018/GB-month, 6.5e-6 per write, 5e-7 per read.
        assert_close(cost.storage_per_month, 0.061 * 0.018);
        assert_close(cost.write_one_time, 115.0 * 6.5e-6);
        // 115 files x 5e-7 x 20 conversations x 5 questions x 0.5
        assert_close(cost.read_per_month, 115.0 * 5e-7 * 20.0 * 5.0 * 0.5);
        assert_close(cost.group_total(), cost.monthly_total + cost.write_one_time);
    }

    #[test]
    fn no_conversations_means_no_reads() {
        let catalog = sample_catalog();
        let constants = ConversionConstants::default();
        let engine = CostEngine::new(&catalog, &constants).unwrap();
        let profile = UsageProfile::new(100.0, 10.0, 5.0, 0.0).unwrap();

        let cost = engine
            .blob_costs(&ComponentSelection::default(), &profile)
            .unwrap();
        assert_eq!(cost.read_per_month, 0.0);
        assert!(cost.write_one_time > 0.0);
    }

    #[test]
    fn cooler_tier_is_selectable() {
        let catalog = sample_catalog();
        let constants = ConversionConstants::default();
        let engine = CostEngine::new(&catalog, &constants).unwrap();
        let selection = ComponentSelection::default().with(ComponentKind::Blob, "azure cool");
        let profile = UsageProfile::new(0.0, 0.0, 1000.0, 0.0).unwrap();

        let hot = engine
            .blob_costs(&ComponentSelection::default(), &profile)
            .unwrap();
        let cool = engine.blob_costs(&selection, &profile).unwrap();
        assert!(cool.storage_per_month < hot.storage_per_month);
        assert!(cool.write_one_time > hot.write_one_time);
    }
}
