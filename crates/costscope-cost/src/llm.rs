// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Monthly cost of live conversation traffic.

use costscope_core::{ComponentKind, ComponentSelection, CostError, UsageProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::rates;
use crate::engine::CostEngine;

/// Conversational inference cost. Entirely recurring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LlmCost {
    pub input_tokens_per_month: f64,
    pub output_tokens_per_month: f64,
    pub total: f64,
}

impl CostEngine<'_> {
    /// Conversation tokens split into input and output by `io_fraction`.
    pub fn llm_costs(
        &self,
        selection: &ComponentSelection,
        profile: &UsageProfile,
    ) -> Result<LlmCost, CostError> {
        profile.validate()?;

        let llm = self.rates(selection, ComponentKind::Llm)?;
        let per_input_token = llm.rate(rates::COST_PER_INPUT_TOKEN)?;
        let per_output_token = llm.rate(rates::COST_PER_OUTPUT_TOKEN)?;
        let c = self.constants();

        let tokens_per_month = profile.conversations_per_month * c.tokens_per_conversation;
        let total = tokens_per_month
            * (per_input_token * c.io_fraction + per_output_token * (1.0 - c.io_fraction));

        let cost = LlmCost {
            input_tokens_per_month: tokens_per_month * c.io_fraction,
            output_tokens_per_month: tokens_per_month * (1.0 - c.io_fraction),
            total,
        };
        debug!(tokens_per_month, total, "LLM cost");
        Ok(cost)
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
    fn gpt_4o_mini_monthly_cost() {
        let catalog = sample_catalog();
        let constants = ConversionConstants::default();
        let engine = CostEngine::new(&catalog, &constants).unwrap();
        let profile = UsageProfile::new(0.0, 0.0, 0.0, 1000.0).unwrap();

        let cost = engine
            .llm_costs(&ComponentSelection::default(), &profile)
            .unwrap();

        // 1000 x 2000 tokens; 10% at 1.5e-7, 90% at 6e-7.
        assert_close(cost.input_tokens_per_month, 200_000.0);
        assert_close(cost.output_tokens_per_month, 1_800_000.0);
        assert_close(cost.total, 2_000_000.0 * (1.5e-7 * 0.1 + 6e-7 * 0.9));
    }

    #[test]
    fn corpus_size_does_not_affect_llm_cost() {
        let catalog = sample_catalog();
        let constants = ConversionConstants::default();
        let engine = CostEngine::new(&catalog, &constants).unwrap();
        let small = UsageProfile::new(0.0, 0.0, 0.0, 50.0).unwrap();
        let large = UsageProfile::new(1e6, 1e4, 1e4, 50.0).unwrap();

        let selection = ComponentSelection::default();
        let a = engine.llm_costs(&selection, &small).unwrap();
        let b = engine.llm_costs(&selection, &large).unwrap();
        assert_close(a.total, b.total);
    }

    #[test]
    fn missing_output_rate_fails() {
        let catalog = PriceCatalog::new().with_provider(
            ComponentKind::Llm,
            "GPT-4o_mini",
            RateCard::new().with(rates::COST_PER_INPUT_TOKEN, 1.5e-7),
        );
        let constants = ConversionConstants::default();
        let engine = CostEngine::new(&catalog, &constants).unwrap();

        let err = engine
            .llm_costs(&ComponentSelection::default(), &UsageProfile::default())
            .unwrap_err();
        assert!(matches!(
            err,
            CostError::MissingRate { kind: ComponentKind::Llm, ref rate, .. } if rate == "cost_per_output_token"
        ));
    }
}
