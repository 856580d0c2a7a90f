// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading the price catalog and the customer profile table from disk.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use costscope_core::{ComponentKind, CostError, UsageProfile};
use costscope_cost::PriceCatalog;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::info;

/// One usage profile with the customer name it was listed under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedProfile {
    pub customer: String,
    pub usage: UsageProfile,
}

/// A row of the profile table. Extra columns, such as a precomputed
/// `files`, are ignored.
#[derive(Debug, Deserialize)]
struct ProfileRow {
    customer: String,
    pages: f64,
    audio_min: f64,
    images: f64,
    conversations_per_month: f64,
}

/// Read and validate a TOML price catalog.
pub fn load_catalog(path: &Path) -> Result<PriceCatalog, CostError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CostError::source(format!("failed to read price catalog {}", path.display()), e)
    })?;
    let catalog = parse_catalog(&content, &path.display().to_string())?;

    let providers: usize = ComponentKind::iter()
        .map(|kind| catalog.providers(kind).count())
        .sum();
    info!(path = %path.display(), providers, "loaded price catalog");
    Ok(catalog)
}

/// Parse a TOML price catalog and check every rate in it.
pub fn parse_catalog(content: &str, origin: &str) -> Result<PriceCatalog, CostError> {
    let catalog: PriceCatalog = toml::from_str(content)
        .map_err(|e| CostError::source(format!("invalid price catalog {origin}"), e))?;
    catalog.validate()?;
    Ok(catalog)
}

/// Read the CSV customer profile table.
pub fn load_profiles(path: &Path) -> Result<Vec<NamedProfile>, CostError> {
    let file = std::fs::File::open(path).map_err(|e| {
        CostError::source(format!("failed to open profile table {}", path.display()), e)
    })?;
    let profiles = parse_profiles(file, &path.display().to_string())?;
    info!(path = %path.display(), profiles = profiles.len(), "loaded customer profiles");
    Ok(profiles)
}

/// Parse a profile table, keeping row order.
///
/// Every row is validated; a duplicate customer name is an error rather than
/// a silent overwrite.
pub fn parse_profiles(input: impl Read, origin: &str) -> Result<Vec<NamedProfile>, CostError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut seen = BTreeSet::new();
    let mut profiles = Vec::new();
    for row in reader.deserialize::<ProfileRow>() {
        let row =
            row.map_err(|e| CostError::source(format!("invalid profile table {origin}"), e))?;

        if !seen.insert(row.customer.clone()) {
            return Err(CostError::Source {
                message: format!("duplicate customer `{}` in {origin}", row.customer),
                source: None,
            });
        }

        let usage = UsageProfile::new(
            row.pages,
            row.audio_min,
            row.images,
            row.conversations_per_month,
        )
        .map_err(|e| CostError::source(format!("customer `{}` in {origin}", row.customer), e))?;

        profiles.push(NamedProfile {
            customer: row.customer,
            usage,
        });
    }
    Ok(profiles)
}

/// Find one profile by customer name.
pub fn find_profile<'a>(
    profiles: &'a [NamedProfile],
    customer: &str,
) -> Result<&'a NamedProfile, CostError> {
    profiles
        .iter()
        .find(|p| p.customer == customer)
        .ok_or_else(|| CostError::Source {
            message: format!("no customer `{customer}` in the profile table"),
            source: None,
        })
}

#[cfg(test)]
mod tests {
    use costscope_test_utils::{SAMPLE_CATALOG_TOML, SAMPLE_PROFILES_CSV, SampleSources, customer1};

    use super::*;

    #[test]
    fn sample_profiles_parse_in_order() {
        let profiles = parse_profiles(SAMPLE_PROFILES_CSV.as_bytes(), "<inline>").unwrap();
        let names: Vec<_> = profiles.iter().map(|p| p.customer.as_str()).collect();
        assert_eq!(names, ["customer1", "customer2", "startup", "idle"]);
        assert_eq!(profiles[0].usage, customer1());
        assert!(profiles[3].usage.is_idle());
    }

    #[test]
    fn files_column_is_ignored() {
        let csv = "customer,pages,audio_min,images,files,conversations_per_month\n\
                   acme,10,2,3,999,40\n";
        let profiles = parse_profiles(csv.as_bytes(), "<inline>").unwrap();
        assert_eq!(profiles[0].usage.files(), 15.0);
    }

    #[test]
    fn whitespace_around_fields_is_trimmed() {
        let csv = "customer, pages, audio_min, images, conversations_per_month\n\
                   acme , 10 , 2 , 3 , 40\n";
        let profiles = parse_profiles(csv.as_bytes(), "<inline>").unwrap();
        assert_eq!(profiles[0].customer, "acme");
        assert_eq!(profiles[0].usage.pages, 10.0);
    }

    #[test]
    fn duplicate_customer_rejected() {
        let csv = "customer,pages,audio_min,images,conversations_per_month\n\
                   acme,1,1,1,1\n\
                   acme,2,2,2,2\n";
        let err = parse_profiles(csv.as_bytes(), "<inline>").unwrap_err();
        assert!(err.to_string().contains("duplicate customer `acme`"), "got: {err}");
    }

    #[test]
    fn negative_usage_names_customer() {
        let csv = "customer,pages,audio_min,images,conversations_per_month\n\
                   acme,1,-5,1,1\n";
        let err = parse_profiles(csv.as_bytes(), "profiles.csv").unwrap_err();
        assert!(err.to_string().contains("customer `acme` in profiles.csv"), "got: {err}");
        let cause = std::error::Error::source(&err).expect("validation error is kept as cause");
        assert!(cause.to_string().contains("audio_minutes"), "got: {cause}");
    }

    #[test]
    fn missing_column_rejected() {
        let csv = "customer,pages,audio_min,images\nacme,1,1,1\n";
        let err = parse_profiles(csv.as_bytes(), "<inline>").unwrap_err();
        assert!(matches!(err, CostError::Source { source: Some(_), .. }));
    }

    #[test]
    fn find_profile_by_name() {
        let profiles = parse_profiles(SAMPLE_PROFILES_CSV.as_bytes(), "<inline>").unwrap();
        assert_eq!(find_profile(&profiles, "startup").unwrap().usage.pages, 50.0);
        let err = find_profile(&profiles, "nobody").unwrap_err();
        assert!(err.to_string().contains("no customer `nobody`"));
    }

    #[test]
    fn sample_catalog_parses_and_validates() {
        let catalog = parse_catalog(SAMPLE_CATALOG_TOML, "<inline>").unwrap();
        assert!(catalog.contains(ComponentKind::Rag, "pinecone"));
        assert_eq!(catalog.providers(ComponentKind::Blob).count(), 2);
    }

    #[test]
    fn negative_rate_rejected() {
        let toml = "[audio.\"Whisper API\"]\ncost_per_min = -0.006\n";
        let err = parse_catalog(toml, "<inline>").unwrap_err();
        assert!(matches!(err, CostError::InvalidRate { .. }), "got: {err}");
    }

    #[test]
    fn unknown_sheet_rejected() {
        let toml = "[video.vendor]\ncost_per_min = 1.0\n";
        let err = parse_catalog(toml, "costs.toml").unwrap_err();
        assert!(err.to_string().contains("invalid price catalog costs.toml"));
    }

    #[test]
    fn load_from_disk() {
        let sources = SampleSources::new().unwrap();
        let catalog = load_catalog(&sources.catalog_path()).unwrap();
        let profiles = load_profiles(&sources.profiles_path()).unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(profiles.len(), 4);
    }

    #[test]
    fn missing_file_is_a_source_error() {
        let sources = SampleSources::new().unwrap();
        let err = load_catalog(&sources.dir().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read price catalog"));
    }
}
