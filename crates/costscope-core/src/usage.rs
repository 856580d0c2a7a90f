// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Customer usage profiles.

use serde::{Deserialize, Serialize};

use crate::error::CostError;

/// Usage quantities for one customer.
///
/// All quantities are non-negative. `files` is derived and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsageProfile {
    /// Document pages in the initial corpus.
    pub pages: f64,

    /// Minutes of audio in the initial corpus.
    #[serde(alias = "audio_min")]
    pub audio_minutes: f64,

    /// Images in the initial corpus.
    pub images: f64,

    /// Conversations served per month.
    pub conversations_per_month: f64,
}

impl UsageProfile {
    /// Build a profile, rejecting negative or non-finite quantities.
    pub fn new(
        pages: f64,
        audio_minutes: f64,
        images: f64,
        conversations_per_month: f64,
    ) -> Result<Self, CostError> {
        let profile = Self {
            pages,
            audio_minutes,
            images,
            conversations_per_month,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Number of distinct storage objects, one per page, audio minute and image.
    pub fn files(&self) -> f64 {
        self.pages + self.audio_minutes + self.images
    }

    /// Fail on the first negative or non-finite quantity.
    pub fn validate(&self) -> Result<(), CostError> {
        let fields = [
            ("pages", self.pages),
            ("audio_minutes", self.audio_minutes),
            ("images", self.images),
            ("conversations_per_month", self.conversations_per_month),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CostError::InvalidUsage { field, value });
            }
        }
        Ok(())
    }

    /// True when there is nothing to ingest and nothing to serve.
    pub fn is_idle(&self) -> bool {
        self.files() == 0.0 && self.conversations_per_month == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_sums_media_quantities() {
        let profile = UsageProfile::new(100.0, 30.0, 12.0, 50.0).unwrap();
        assert!((profile.files() - 142.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_pages_rejected() {
        let err = UsageProfile::new(-1.0, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            CostError::InvalidUsage { field: "pages", .. }
        ));
    }

    #[test]
    fn nan_conversations_rejected() {
        let err = UsageProfile::new(0.0, 0.0, 0.0, f64::NAN).unwrap_err();
        assert!(matches!(
            err,
            CostError::InvalidUsage {
                field: "conversations_per_month",
                ..
            }
        ));
    }

    #[test]
    fn infinite_images_rejected() {
        let profile = UsageProfile {
            images: f64::INFINITY,
            ..UsageProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn default_profile_is_idle_and_valid() {
        let profile = UsageProfile::default();
        assert!(profile.validate().is_ok());
        assert!(profile.is_idle());
    }

    #[test]
    fn audio_min_alias_deserializes() {
        let toml_str = r#"
pages = 10
audio_min = 4
images = 2
conversations_per_month = 100
"#;
        let profile: UsageProfile = toml::from_str(toml_str).unwrap();
        assert!((profile.audio_minutes - 4.0).abs() < f64::EPSILON);
        assert!((profile.files() - 16.0).abs() < f64::EPSILON);
    }
}
