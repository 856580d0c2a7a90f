// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider selection: one provider per component kind.

use serde::{Deserialize, Serialize};

use crate::types::{ComponentKind, ProviderId};

/// Chosen provider for every component kind.
///
/// The struct has one field per [`ComponentKind`], so a selection can never be
/// missing a kind. Whether each provider actually exists is only known once it
/// is looked up in a price catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSelection {
    /// Conversational language model.
    #[serde(default = "default_llm")]
    pub llm: ProviderId,

    /// Text embedding model.
    #[serde(default = "default_embedding")]
    pub embedding: ProviderId,

    /// Speech-to-text service.
    #[serde(default = "default_audio")]
    pub audio: ProviderId,

    /// Image captioning service.
    #[serde(default = "default_image_captioning")]
    pub image_captioning: ProviderId,

    /// Face recognition service.
    #[serde(default = "default_face_recognition")]
    pub face_recognition: ProviderId,

    /// Vector store backing retrieval.
    #[serde(default = "default_rag")]
    pub rag: ProviderId,

    /// Blob storage tier for raw media.
    #[serde(default = "default_blob")]
    pub blob: ProviderId,
}

impl ComponentSelection {
    /// Provider chosen for `kind`.
    pub fn provider(&self, kind: ComponentKind) -> &ProviderId {
        match kind {
            ComponentKind::Llm => &self.llm,
            ComponentKind::Embedding => &self.embedding,
            ComponentKind::Audio => &self.audio,
            ComponentKind::ImageCaptioning => &self.image_captioning,
            ComponentKind::FaceRecognition => &self.face_recognition,
            ComponentKind::Rag => &self.rag,
            ComponentKind::Blob => &self.blob,
        }
    }

    /// Replace the provider for `kind`.
    pub fn set(&mut self, kind: ComponentKind, provider: impl Into<ProviderId>) {
        let slot = match kind {
            ComponentKind::Llm => &mut self.llm,
            ComponentKind::Embedding => &mut self.embedding,
            ComponentKind::Audio => &mut self.audio,
            ComponentKind::ImageCaptioning => &mut self.image_captioning,
            ComponentKind::FaceRecognition => &mut self.face_recognition,
            ComponentKind::Rag => &mut self.rag,
            ComponentKind::Blob => &mut self.blob,
        };
        *slot = provider.into();
    }

    /// Builder-style variant of [`ComponentSelection::set`].
    pub fn with(mut self, kind: ComponentKind, provider: impl Into<ProviderId>) -> Self {
        self.set(kind, provider);
        self
    }
}

impl Default for ComponentSelection {
    fn default() -> Self {
        Self {
            llm: default_llm(),
            embedding: default_embedding(),
            audio: default_audio(),
            image_captioning: default_image_captioning(),
            face_recognition: default_face_recognition(),
            rag: default_rag(),
            blob: default_blob(),
        }
    }
}

fn default_llm() -> ProviderId {
    "GPT-4o_mini".into()
}

fn default_embedding() -> ProviderId {
    "GPT_text-embedding-3-small".into()
}

fn default_audio() -> ProviderId {
    "Azure AI Speech".into()
}

fn default_image_captioning() -> ProviderId {
    "Azure AI vision API".into()
}

fn default_face_recognition() -> ProviderId {
    "Azure AI vision Face API".into()
}

fn default_rag() -> ProviderId {
    "pinecone".into()
}

fn default_blob() -> ProviderId {
    "azure hot".into()
}
