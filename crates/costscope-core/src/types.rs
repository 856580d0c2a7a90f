// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the catalog, the engine and the CLI.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A pipeline stage that needs a priced provider.
///
/// The string form matches the sheet names of the price catalog
/// (`LLM`, `embedding`, `audio`, `image_captioning`, `face_recognition`, `RAG`, `blob`).
/// Parsing is case-insensitive so `llm` and `rag` are accepted on the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ComponentKind {
    #[strum(serialize = "LLM")]
    #[serde(rename = "LLM")]
    Llm,
    #[strum(serialize = "embedding")]
    #[serde(rename = "embedding")]
    Embedding,
    #[strum(serialize = "audio")]
    #[serde(rename = "audio")]
    Audio,
    #[strum(serialize = "image_captioning")]
    #[serde(rename = "image_captioning")]
    ImageCaptioning,
    #[strum(serialize = "face_recognition")]
    #[serde(rename = "face_recognition")]
    FaceRecognition,
    #[strum(serialize = "RAG")]
    #[serde(rename = "RAG")]
    Rag,
    #[strum(serialize = "blob")]
    #[serde(rename = "blob")]
    Blob,
}

/// Identifier of a vendor offering for one component kind, e.g. `pinecone`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(pub String);

impl ProviderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProviderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
