// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-time cost of turning raw media into text.

use costscope_core::{ComponentKind, ComponentSelection, CostError, UsageProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::rates;
use crate::engine::CostEngine;

/// Media-to-text sub-costs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaToTextCost {
    /// Documents are assumed to be text already. Kept as its own item so a
    /// provider rate can be attached later.
    pub documents_to_text: f64,
    pub audio_to_text: f64,
    pub image_captioning: f64,
    pub face_recognition: f64,
    pub total: f64,
}

impl MediaToTextCost {
    /// Captioning plus face recognition.
    pub fn images_to_text(&self) -> f64 {
        self.image_captioning + self.face_recognition
    }
}

impl CostEngine<'_> {
    /// Transcription, captioning and face recognition of the initial corpus.
    pub fn media_to_text_costs(
        &self,
        selection: &ComponentSelection,
        profile: &UsageProfile,
    ) -> Result<MediaToTextCost, CostError> {
        profile.validate()?;

        let per_minute = self
            .rates(selection, ComponentKind::Audio)?
            .rate(rates::COST_PER_MIN)?;
        let per_caption = self
            .rates(selection, ComponentKind::ImageCaptioning)?
            .rate(rates::COST_PER_IMAGE)?;
        let per_face_scan = self
            .rates(selection, ComponentKind::FaceRecognition)?
            .rate(rates::COST_PER_IMAGE)?;

        let documents_to_text = 0.0;
        let audio_to_text = profile.audio_minutes * per_minute;
        let image_captioning = profile.images * per_caption;
        let face_recognition = profile.images * per_face_scan;

        let cost = MediaToTextCost {
            documents_to_text,
            audio_to_text,
            image_captioning,
            face_recognition,
            total: documents_to_text + audio_to_text + image_captioning + face_recognition,
        };
        debug!(
            audio_to_text,
            images_to_text = cost.images_to_text(),
            total = cost.total,
            "media-to-text cost"
        );
        Ok(cost)
    }
}
