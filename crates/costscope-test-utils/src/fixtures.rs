// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample catalog and profile tables.

use std::path::{Path, PathBuf};

use costscope_core::UsageProfile;
use tempfile::TempDir;

/// A catalog covering every provider of the default selection, plus one
/// alternative per kind for selection tests.
pub const SAMPLE_CATALOG_TOML: &str = r#"
[LLM."GPT-4o_mini"]
cost_per_input_token = 1.5e-7
cost_per_output_token = 6e-7

[LLM."GPT-4o"]
cost_per_input_token = 2.5e-6
cost_per_output_token = 1e-5

[embedding."GPT_text-embedding-3-small"]
cost_per_token = 2e-8

[embedding."GPT_text-embedding-3-large"]
cost_per_token = 1.3e-7

[audio."Azure AI Speech"]
cost_per_min = 0.0167

[audio."Whisper API"]
cost_per_min = 0.006

[image_captioning."Azure AI vision API"]
cost_per_image = 0.0015

[face_recognition."Azure AI vision Face API"]
cost_per_image = 0.001

[RAG.pinecone]
cost_storage_GB_month = 0.33
cost_per_WU = 2e-6
cost_per_RU = 8.25e-6
vectors_per_U = 1000

[blob."azure hot"]
cost_storage_GB_month = 0.018
cost_per_write_operation = 6.5e-6
cost_per_read_operation = 5e-7

[blob."azure cool"]
cost_storage_GB_month = 0.01
cost_per_write_operation = 1.3e-5
cost_per_read_operation = 1.3e-6
"#;

/// A customer profile table with four customers, one of them idle.
pub const SAMPLE_PROFILES_CSV: &str = "\
customer,pages,audio_min,images,conversations_per_month
customer1,1000,120,200,500
customer2,25000,3000,5000,4000
startup,50,0,0,100
idle,0,0,0,0
";

/// The `customer1` row of [`SAMPLE_PROFILES_CSV`].
pub fn customer1() -> UsageProfile {
    UsageProfile {
        pages: 1000.0,
        audio_minutes: 120.0,
        images: 200.0,
        conversations_per_month: 500.0,
    }
}

/// All-zero usage.
pub fn idle_profile() -> UsageProfile {
    UsageProfile::default()
}

/// Sample catalog and profile files written to a temporary directory.
///
/// The directory is removed when the value is dropped.
pub struct SampleSources {
    dir: TempDir,
}

impl SampleSources {
    pub fn new() -> std::io::Result<Self> {
        Self::with_contents(SAMPLE_CATALOG_TOML, SAMPLE_PROFILES_CSV)
    }

    /// Write custom catalog and profile contents.
    pub fn with_contents(catalog: &str, profiles: &str) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("costs.toml"), catalog)?;
        std::fs::write(dir.path().join("customer_profiles.csv"), profiles)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.dir.path().join("costs.toml")
    }

    pub fn profiles_path(&self) -> PathBuf {
        self.dir.path().join("customer_profiles.csv")
    }
}
