// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-time cost of embedding the extracted text.

use costscope_core::{ComponentKind, ComponentSelection, CostError, UsageProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::rates;
use crate::engine::CostEngine;

/// Embedding sub-costs, one per media type, with the token volumes behind them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbeddingCost {
    pub text_tokens: f64,
    pub audio_tokens: f64,
    pub image_tokens: f64,
    pub text: f64,
    pub audio: f64,
    pub image: f64,
    pub total: f64,
}

impl CostEngine<'_> {
    /// Every media type is priced at the single selected embedding provider's token rate.
    pub fn embedding_costs(
        &self,
        selection: &ComponentSelection,
        profile: &UsageProfile,
    ) -> Result<EmbeddingCost, CostError> {
        profile.validate()?;

        let per_token = self
            .rates(selection, ComponentKind::Embedding)?
            .rate(rates::COST_PER_TOKEN)?;
        let c = self.constants();

        let text_tokens = profile.pages * c.tokens_per_page();
        let audio_tokens = profile.audio_minutes * c.tokens_per_audio_min();
        let image_tokens = profile.images * c.tokens_per_image();

        let text = text_tokens * per_token;
        let audio = audio_tokens * per_token;
        let image = image_tokens * per_token;

        debug!(text_tokens, audio_tokens, image_tokens, per_token, "embedding cost");
        Ok(EmbeddingCost {
            text_tokens,
            audio_tokens,
            image_tokens,
            text,
            audio,
            image,
            total: text + audio + image,
        })
    }
}
