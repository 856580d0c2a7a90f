// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The cost engine: pure computation over a catalog and conversion constants.
//!
//! The five cost groups are computed in their own modules as further `impl`
//! blocks on [`CostEngine`]; this module owns construction and aggregation.

use costscope_config::ConversionConstants;
use costscope_config::validation::conversion_problems;
use costscope_core::{ComponentKind, ComponentSelection, CostError, UsageProfile};
use tracing::debug;

use crate::breakdown::{CostBreakdown, CostTotals};
use crate::catalog::{PriceCatalog, ProviderRates};

/// Stateless estimator borrowing shared reference data.
///
/// Holds only shared borrows, so one catalog can back any number of engines
/// and any number of concurrent estimates.
#[derive(Debug, Clone, Copy)]
pub struct CostEngine<'a> {
    catalog: &'a PriceCatalog,
    constants: &'a ConversionConstants,
}

impl<'a> CostEngine<'a> {
    /// Create an engine, rejecting constants that would divide by zero or
    /// produce meaningless fractions.
    pub fn new(
        catalog: &'a PriceCatalog,
        constants: &'a ConversionConstants,
    ) -> Result<Self, CostError> {
        let problems = conversion_problems(constants);
        if !problems.is_empty() {
            return Err(CostError::Config(problems.join("; ")));
        }
        Ok(Self { catalog, constants })
    }

    pub fn catalog(&self) -> &'a PriceCatalog {
        self.catalog
    }

    pub fn constants(&self) -> &'a ConversionConstants {
        self.constants
    }

    /// The two headline figures for one customer.
    pub fn compute_costs(
        &self,
        selection: &ComponentSelection,
        profile: &UsageProfile,
    ) -> Result<CostTotals, CostError> {
        Ok(self.breakdown(selection, profile)?.totals())
    }

    /// Every group with its sub-items, plus the two headline figures.
    ///
    /// Usage is validated before anything is priced. Any lookup failure
    /// aborts the whole estimate.
    pub fn breakdown(
        &self,
        selection: &ComponentSelection,
        profile: &UsageProfile,
    ) -> Result<CostBreakdown, CostError> {
        profile.validate()?;

        let media_to_text = self.media_to_text_costs(selection, profile)?;
        let embedding = self.embedding_costs(selection, profile)?;
        let rag = self.rag_costs(selection, profile)?;
        let blob = self.blob_costs(selection, profile)?;
        let llm = self.llm_costs(selection, profile)?;

        let breakdown = CostBreakdown::aggregate(media_to_text, embedding, rag, blob, llm);
        debug!(
            monthly_recurring_cost = breakdown.monthly_recurring_cost,
            one_time_ingestion_cost = breakdown.one_time_ingestion_cost,
            "cost estimate complete"
        );
        Ok(breakdown)
    }

    /// Rate card of the provider selected for `kind`.
    pub(crate) fn rates<'s>(
        &'s self,
        selection: &'s ComponentSelection,
        kind: ComponentKind,
    ) -> Result<ProviderRates<'s>, CostError> {
        self.catalog
            .provider(kind, selection.provider(kind).as_str())
    }
}
